//! The specification source client.
//!
//! Walks a git-host contents API: listing the configured directory
//! yields entries tagged `file` or `dir`, directories are queued and
//! walked in turn, and every specification file is downloaded into the
//! local spec directory, preserving the remote directory layout.

use std::path::{Path, PathBuf};
use std::time::Duration;

use serde::Deserialize;

use crate::config::{ConfigError, SpecSourceConfig};
use crate::error::SpecSourceError;

/// One entry of a contents-API directory listing.
///
/// Fields beyond these are ignored; `download_url` is only present for
/// `file` entries.
#[derive(Debug, Deserialize)]
struct ContentEntry {
    name: String,
    #[serde(rename = "type")]
    kind: String,
    #[serde(default)]
    download_url: Option<String>,
    /// Listing URL for this entry — used to descend into directories.
    url: String,
}

/// Client for syncing specification files from the remote source.
#[derive(Debug, Clone)]
pub struct SpecSourceClient {
    http: reqwest::Client,
    config: SpecSourceConfig,
}

impl SpecSourceClient {
    /// Create a client from configuration.
    pub fn new(config: SpecSourceConfig) -> Result<Self, SpecSourceError> {
        let mut builder = reqwest::Client::builder()
            .user_agent(concat!("evspec-repo/", env!("CARGO_PKG_VERSION")))
            .timeout(Duration::from_secs(config.timeout_secs));

        if let Some(token) = &config.token {
            let mut headers = reqwest::header::HeaderMap::new();
            let value = reqwest::header::HeaderValue::from_str(&format!("Bearer {token}"))
                .map_err(|_| SpecSourceError::Config(ConfigError::InvalidToken))?;
            headers.insert(reqwest::header::AUTHORIZATION, value);
            builder = builder.default_headers(headers);
        }

        let http = builder.build().map_err(|e| SpecSourceError::Http {
            endpoint: "client_init".to_string(),
            source: e,
        })?;

        Ok(Self { http, config })
    }

    /// Create a client from environment variables.
    pub fn from_env() -> Result<Self, SpecSourceError> {
        Self::new(SpecSourceConfig::from_env()?)
    }

    /// Sync every specification file under the configured remote
    /// directory into `dest`, preserving the directory layout.
    ///
    /// Returns the number of files written. A sync that finds zero
    /// specification files succeeds here — the document loader is the
    /// one that treats an empty directory as a hard failure.
    pub async fn sync_to(&self, dest: &Path) -> Result<usize, SpecSourceError> {
        let root = {
            let mut url = self.config.base_url.clone();
            url.query_pairs_mut().append_pair("ref", &self.config.reference);
            url.to_string()
        };

        let mut pending: Vec<(String, PathBuf)> = vec![(root, PathBuf::new())];
        let mut downloaded = 0usize;

        while let Some((endpoint, relative)) = pending.pop() {
            for entry in self.list(&endpoint).await? {
                match entry.kind.as_str() {
                    "dir" => pending.push((entry.url, relative.join(&entry.name))),
                    "file" if is_spec_file(&entry.name) => {
                        let download_url =
                            entry.download_url.ok_or_else(|| SpecSourceError::Api {
                                endpoint: endpoint.clone(),
                                status: 200,
                                body: format!("file entry '{}' has no download_url", entry.name),
                            })?;
                        let bytes = self.fetch_file(&download_url).await?;
                        let target_dir = dest.join(&relative);
                        tokio::fs::create_dir_all(&target_dir).await?;
                        tokio::fs::write(target_dir.join(&entry.name), &bytes).await?;
                        tracing::debug!(
                            file = %relative.join(&entry.name).display(),
                            "downloaded specification file"
                        );
                        downloaded += 1;
                    }
                    // Non-spec files and unknown entry kinds are skipped.
                    _ => {}
                }
            }
        }

        tracing::info!(
            files = downloaded,
            dest = %dest.display(),
            "specification sync complete"
        );
        Ok(downloaded)
    }

    /// List one remote directory.
    async fn list(&self, endpoint: &str) -> Result<Vec<ContentEntry>, SpecSourceError> {
        let resp = self
            .http
            .get(endpoint)
            .send()
            .await
            .map_err(|e| SpecSourceError::Http {
                endpoint: endpoint.to_string(),
                source: e,
            })?;

        if !resp.status().is_success() {
            let status = resp.status().as_u16();
            let body = resp.text().await.unwrap_or_default();
            return Err(SpecSourceError::Api {
                endpoint: endpoint.to_string(),
                status,
                body,
            });
        }

        resp.json().await.map_err(|e| SpecSourceError::Deserialization {
            endpoint: endpoint.to_string(),
            source: e,
        })
    }

    /// Download one file's raw content.
    async fn fetch_file(&self, download_url: &str) -> Result<Vec<u8>, SpecSourceError> {
        let resp = self
            .http
            .get(download_url)
            .send()
            .await
            .map_err(|e| SpecSourceError::Http {
                endpoint: download_url.to_string(),
                source: e,
            })?;

        if !resp.status().is_success() {
            let status = resp.status().as_u16();
            let body = resp.text().await.unwrap_or_default();
            return Err(SpecSourceError::Api {
                endpoint: download_url.to_string(),
                status,
                body,
            });
        }

        let bytes = resp.bytes().await.map_err(|e| SpecSourceError::Http {
            endpoint: download_url.to_string(),
            source: e,
        })?;
        Ok(bytes.to_vec())
    }
}

fn is_spec_file(name: &str) -> bool {
    name.ends_with(".yaml") || name.ends_with(".yml")
}

#[cfg(test)]
mod tests {
    use super::is_spec_file;

    #[test]
    fn spec_file_extensions() {
        assert!(is_spec_file("orders.yaml"));
        assert!(is_spec_file("users.yml"));
        assert!(!is_spec_file("README.md"));
        assert!(!is_spec_file("orders.yaml.bak"));
    }
}
