//! # evspec-repo — Remote Specification Source Client
//!
//! Typed reqwest client that syncs the event specification directory
//! from a remote source-controlled location onto local disk. The remote
//! surface is a git-host contents API: listing a repository path yields
//! entries (`file`/`dir`) with download URLs, and directories are
//! walked recursively. Only specification files (`.yaml`/`.yml`) are
//! downloaded.
//!
//! This crate is the only path for the service to reach the network;
//! the validation path itself never performs I/O.

pub mod client;
pub mod config;
pub mod error;

pub use client::SpecSourceClient;
pub use config::{ConfigError, SpecSourceConfig};
pub use error::SpecSourceError;
