//! Specification document loading.
//!
//! A specification document is a YAML file whose top level carries a
//! `channels` mapping from event name to an opaque channel definition.
//! The YAML tree is converted into the `serde_json::Value` universe at
//! load time so every later step works on one value representation.
//!
//! Documents are immutable once parsed; a refresh cycle replaces the
//! whole loaded set rather than mutating it.

use std::path::{Path, PathBuf};

use serde_json::{Map, Value};
use thiserror::Error;

/// Error while loading specification documents from disk.
#[derive(Debug, Error)]
pub enum SpecLoadError {
    /// IO error reading a file or scanning a directory.
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),

    /// The file is not valid YAML, or its top level is not a mapping.
    #[error("invalid specification file '{path}': {reason}")]
    InvalidYaml {
        /// Path or origin label of the offending file.
        path: String,
        /// Reason the file was rejected.
        reason: String,
    },

    /// The YAML uses a construct with no JSON equivalent.
    #[error("unsupported value in '{path}': {reason}")]
    UnsupportedValue { path: String, reason: String },

    /// The directory scan found no `.yaml`/`.yml` file at all.
    #[error("no specification files found under '{0}'")]
    NoSpecFiles(String),
}

/// One parsed specification document.
#[derive(Debug, Clone)]
pub struct SpecDocument {
    channels: Map<String, Value>,
}

impl SpecDocument {
    /// Parse a document from YAML text. `origin` labels error messages
    /// (a file path in production, a fixture name in tests).
    ///
    /// A missing `channels` key yields an empty channel map — the
    /// document loads, and every lookup against it misses. A `channels`
    /// key that is present but not a mapping is a load error.
    pub fn parse(source: &str, origin: &str) -> Result<Self, SpecLoadError> {
        let yaml: serde_yaml::Value =
            serde_yaml::from_str(source).map_err(|e| SpecLoadError::InvalidYaml {
                path: origin.to_string(),
                reason: e.to_string(),
            })?;

        let value = yaml_to_json(&yaml).map_err(|reason| SpecLoadError::UnsupportedValue {
            path: origin.to_string(),
            reason,
        })?;

        let mut root = match value {
            Value::Object(root) => root,
            _ => {
                return Err(SpecLoadError::InvalidYaml {
                    path: origin.to_string(),
                    reason: "top level is not a mapping".to_string(),
                })
            }
        };

        let channels = match root.remove("channels") {
            None | Some(Value::Null) => Map::new(),
            Some(Value::Object(channels)) => channels,
            Some(_) => {
                return Err(SpecLoadError::InvalidYaml {
                    path: origin.to_string(),
                    reason: "'channels' is not a mapping".to_string(),
                })
            }
        };

        Ok(Self { channels })
    }

    /// Load and parse a document from a file path.
    pub fn from_path(path: &Path) -> Result<Self, SpecLoadError> {
        let source = std::fs::read_to_string(path)?;
        Self::parse(&source, &path.display().to_string())
    }

    /// The `channels` mapping: event name → channel definition.
    pub fn channels(&self) -> &Map<String, Value> {
        &self.channels
    }

    /// Look up the channel definition for one event name.
    pub fn channel(&self, name: &str) -> Option<&Value> {
        self.channels.get(name)
    }
}

/// Recursively scan `dir` for specification files and parse them all.
///
/// Matches `.yaml` and `.yml` extensions. Scan order is sorted by path
/// so document order — which decides which document wins a name lookup —
/// is stable across runs. An empty result set is a hard failure: with no
/// documents there is nothing to validate against.
pub fn load_directory(dir: &Path) -> Result<Vec<SpecDocument>, SpecLoadError> {
    let mut files = Vec::new();
    collect_spec_files(dir, &mut files)?;
    files.sort();

    if files.is_empty() {
        return Err(SpecLoadError::NoSpecFiles(dir.display().to_string()));
    }

    let mut documents = Vec::with_capacity(files.len());
    for path in &files {
        tracing::debug!(path = %path.display(), "loading specification file");
        documents.push(SpecDocument::from_path(path)?);
    }
    Ok(documents)
}

fn collect_spec_files(dir: &Path, files: &mut Vec<PathBuf>) -> std::io::Result<()> {
    for entry in std::fs::read_dir(dir)? {
        let path = entry?.path();
        if path.is_dir() {
            collect_spec_files(&path, files)?;
        } else if matches!(
            path.extension().and_then(|e| e.to_str()),
            Some("yaml") | Some("yml")
        ) {
            files.push(path);
        }
    }
    Ok(())
}

/// Convert a `serde_yaml::Value` into a `serde_json::Value`.
///
/// Specification documents use only the JSON-compatible subset of YAML;
/// map keys that are not strings are stringified, tags are stripped, and
/// floats that JSON cannot represent (NaN, infinities) are rejected.
fn yaml_to_json(yaml: &serde_yaml::Value) -> Result<Value, String> {
    match yaml {
        serde_yaml::Value::Null => Ok(Value::Null),
        serde_yaml::Value::Bool(b) => Ok(Value::Bool(*b)),
        serde_yaml::Value::Number(n) => {
            if let Some(i) = n.as_i64() {
                Ok(Value::Number(serde_json::Number::from(i)))
            } else if let Some(u) = n.as_u64() {
                Ok(Value::Number(serde_json::Number::from(u)))
            } else if let Some(f) = n.as_f64() {
                serde_json::Number::from_f64(f)
                    .map(Value::Number)
                    .ok_or_else(|| format!("cannot represent float {f} in JSON"))
            } else {
                Err(format!("unsupported YAML number: {n:?}"))
            }
        }
        serde_yaml::Value::String(s) => Ok(Value::String(s.clone())),
        serde_yaml::Value::Sequence(seq) => {
            let items: Result<Vec<Value>, String> = seq.iter().map(yaml_to_json).collect();
            Ok(Value::Array(items?))
        }
        serde_yaml::Value::Mapping(map) => {
            let mut fields = Map::new();
            for (k, v) in map {
                let key = match k {
                    serde_yaml::Value::String(s) => s.clone(),
                    serde_yaml::Value::Number(n) => n.to_string(),
                    serde_yaml::Value::Bool(b) => b.to_string(),
                    other => return Err(format!("unsupported map key: {other:?}")),
                };
                fields.insert(key, yaml_to_json(v)?);
            }
            Ok(Value::Object(fields))
        }
        serde_yaml::Value::Tagged(tagged) => yaml_to_json(&tagged.value),
    }
}
