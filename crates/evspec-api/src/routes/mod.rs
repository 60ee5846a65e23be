//! Route modules.
//!
//! One module per API surface area; routers are assembled in `lib.rs`.

pub mod spec;
