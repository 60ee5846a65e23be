//! Service configuration.
//!
//! Configuration comes from an environment-sectioned YAML file
//! (`config.yml` keyed by environment name, selected via `APP_ENV`),
//! with plain environment variables as the fallback when no file is
//! present. The spec source client has its own env-based configuration
//! in `evspec-repo`.

use std::collections::HashMap;
use std::path::{Path, PathBuf};

use serde::Deserialize;
use thiserror::Error;

fn default_port() -> u16 {
    8080
}

fn default_shutdown_timeout() -> u64 {
    10
}

fn default_spec_dir() -> PathBuf {
    PathBuf::from("specs")
}

/// Application configuration for the API binary.
#[derive(Debug, Clone, Deserialize)]
pub struct AppConfig {
    /// Port the HTTP server binds to.
    #[serde(default = "default_port")]
    pub port: u16,
    /// Grace period for in-flight requests on shutdown.
    #[serde(default = "default_shutdown_timeout")]
    pub shutdown_timeout_secs: u64,
    /// Local directory holding the synced specification files.
    #[serde(default = "default_spec_dir")]
    pub spec_dir: PathBuf,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            port: default_port(),
            shutdown_timeout_secs: default_shutdown_timeout(),
            spec_dir: default_spec_dir(),
        }
    }
}

/// Configuration file errors.
#[derive(Debug, Error)]
pub enum ConfigFileError {
    #[error("cannot read configuration file: {0}")]
    Io(#[from] std::io::Error),
    #[error("cannot parse configuration file: {0}")]
    InvalidYaml(#[from] serde_yaml::Error),
    #[error("configuration file has no '{0}' section")]
    MissingSection(String),
}

impl AppConfig {
    /// Load the section named `environment` from an env-sectioned YAML
    /// configuration file:
    ///
    /// ```yaml
    /// local:
    ///   port: 8080
    ///   spec_dir: ./specs
    /// production:
    ///   port: 80
    ///   spec_dir: /var/lib/evspec/specs
    /// ```
    pub fn load(path: &Path, environment: &str) -> Result<Self, ConfigFileError> {
        let text = std::fs::read_to_string(path)?;
        let mut sections: HashMap<String, AppConfig> = serde_yaml::from_str(&text)?;
        sections
            .remove(environment)
            .ok_or_else(|| ConfigFileError::MissingSection(environment.to_string()))
    }

    /// Build configuration from plain environment variables:
    /// `PORT`, `SHUTDOWN_TIMEOUT_SECS`, `SPEC_DIR`.
    pub fn from_env() -> Self {
        let defaults = Self::default();
        Self {
            port: std::env::var("PORT")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(defaults.port),
            shutdown_timeout_secs: std::env::var("SHUTDOWN_TIMEOUT_SECS")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(defaults.shutdown_timeout_secs),
            spec_dir: std::env::var("SPEC_DIR")
                .map(PathBuf::from)
                .unwrap_or(defaults.spec_dir),
        }
    }

    /// Resolve configuration the way the binary does: an explicit
    /// `APP_CONFIG` path, then `config.yml` in the working directory,
    /// then environment variables. The file section is picked by
    /// `APP_ENV` (default `local`).
    pub fn resolve() -> Result<Self, ConfigFileError> {
        let environment = std::env::var("APP_ENV").unwrap_or_else(|_| "local".to_string());
        if let Ok(path) = std::env::var("APP_CONFIG") {
            return Self::load(Path::new(&path), &environment);
        }
        let default_path = Path::new("config.yml");
        if default_path.is_file() {
            return Self::load(default_path, &environment);
        }
        Ok(Self::from_env())
    }
}
