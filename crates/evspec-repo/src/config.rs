//! Specification source configuration.
//!
//! Points the client at the contents-API URL of the directory holding
//! the specification files. Override via environment variables or
//! explicit construction for testing.

use url::Url;

/// Configuration for the remote specification source.
///
/// Custom `Debug` implementation redacts the `token` field to prevent
/// credential leakage in log output.
#[derive(Clone)]
pub struct SpecSourceConfig {
    /// Contents-API URL of the specification directory, e.g.
    /// `https://api.github.com/repos/acme/event-specs/contents/events`.
    pub base_url: Url,
    /// Branch, tag, or commit to sync from.
    pub reference: String,
    /// Bearer token for private repositories.
    pub token: Option<String>,
    /// Request timeout in seconds.
    pub timeout_secs: u64,
}

impl std::fmt::Debug for SpecSourceConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SpecSourceConfig")
            .field("base_url", &self.base_url)
            .field("reference", &self.reference)
            .field("token", &self.token.as_ref().map(|_| "[REDACTED]"))
            .field("timeout_secs", &self.timeout_secs)
            .finish()
    }
}

impl SpecSourceConfig {
    /// Load configuration from environment variables.
    ///
    /// Variables:
    /// - `SPEC_SOURCE_URL` (required)
    /// - `SPEC_SOURCE_REF` (default: `main`)
    /// - `SPEC_SOURCE_TOKEN` (optional)
    /// - `SPEC_SOURCE_TIMEOUT_SECS` (default: 30)
    pub fn from_env() -> Result<Self, ConfigError> {
        let raw_url = std::env::var("SPEC_SOURCE_URL").map_err(|_| ConfigError::MissingUrl)?;
        let base_url = Url::parse(&raw_url)
            .map_err(|e| ConfigError::InvalidUrl("SPEC_SOURCE_URL".to_string(), e.to_string()))?;

        Ok(Self {
            base_url,
            reference: std::env::var("SPEC_SOURCE_REF").unwrap_or_else(|_| "main".to_string()),
            token: std::env::var("SPEC_SOURCE_TOKEN").ok(),
            timeout_secs: std::env::var("SPEC_SOURCE_TIMEOUT_SECS")
                .ok()
                .and_then(|s| s.parse().ok())
                .unwrap_or(30),
        })
    }
}

/// Configuration errors.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("SPEC_SOURCE_URL environment variable is required")]
    MissingUrl,
    #[error("invalid URL for {0}: {1}")]
    InvalidUrl(String, String),
    #[error("SPEC_SOURCE_TOKEN contains invalid header characters")]
    InvalidToken,
}
