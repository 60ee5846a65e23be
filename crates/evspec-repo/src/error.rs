//! Errors surfaced by the specification source client.
//!
//! Every variant names the endpoint that failed so fetch failures can
//! be reported to the caller verbatim, as the refresh contract requires.

use thiserror::Error;

use crate::config::ConfigError;

/// Error during a specification sync.
#[derive(Debug, Error)]
pub enum SpecSourceError {
    /// Client-side configuration problem.
    #[error("spec source configuration error: {0}")]
    Config(#[from] ConfigError),

    /// Transport-level failure (connect, timeout, TLS).
    #[error("http error calling {endpoint}: {source}")]
    Http {
        endpoint: String,
        #[source]
        source: reqwest::Error,
    },

    /// The remote returned a non-success status.
    #[error("spec source returned {status} for {endpoint}: {body}")]
    Api {
        endpoint: String,
        status: u16,
        body: String,
    },

    /// The listing response did not match the contents-API shape.
    #[error("unexpected response from {endpoint}: {source}")]
    Deserialization {
        endpoint: String,
        #[source]
        source: reqwest::Error,
    },

    /// Writing a downloaded file to the local spec directory failed.
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
}
