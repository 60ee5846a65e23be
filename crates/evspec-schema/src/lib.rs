//! # evspec-schema — Event Specification Documents & Structural Validation
//!
//! Core domain crate for the event specification validation service.
//! Loads YAML specification documents (event name → channel definition),
//! extracts the reference publish-example payload for a named event, and
//! structurally compares a caller-submitted schema against it.
//!
//! ## Value Universe
//!
//! Documents are converted to the `serde_json::Value` tree at load time,
//! so the comparator operates on a single closed tagged union
//! (Null, Bool, Number, String, Array, Object) and every type check is
//! an exhaustive match. YAML is the storage format, JSON the semantics.
//!
//! ## Validation Pipeline
//!
//! ```text
//! SpecStore::find_event(name) → extract_example(channel) → compare(example, candidate)
//! ```
//!
//! All three steps are pure functions of their inputs: no caching, no
//! hidden scan state, no I/O. Repeated calls against the same document
//! snapshot yield identical outcomes.
//!
//! ## Crate Policy
//!
//! - No async, no network. File loading is the only I/O.
//! - Structural shape only: field presence, field count, and value kind.
//!   Scalar values are never compared.

pub mod compare;
pub mod document;
pub mod error;
pub mod extract;
pub mod store;

pub use compare::compare;
pub use document::{load_directory, SpecDocument, SpecLoadError};
pub use error::ValidationError;
pub use extract::extract_example;
pub use store::SpecStore;
