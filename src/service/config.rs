//! Configuration for the GitHub service

use serde::Deserialize;
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Environment variable consulted when no private key is configured.
pub const TOKEN_ENV: &str = "GITHUB_TOKEN";

/// Target aliases resolved to the GitHub service.
pub const TARGETS: &[&str] = &["hub", "github"];

/// Errors loading a [`ServiceConfig`]
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to read configuration {path}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Invalid configuration: {0}")]
    Parse(#[from] toml::de::Error),
}

/// Settings of one GitHub service instance.
///
/// ```toml
/// name = "github"
/// fqdn = "github.com"
/// private_key = "ghp_..."
/// # GitHub Enterprise only
/// base_uri = "https://ghe.example.com/api/v3"
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct ServiceConfig {
    /// Name of the git remote pointing at this service
    pub name: String,
    /// Host serving the repositories
    pub fqdn: String,
    /// Personal access token
    pub private_key: Option<String>,
    /// API root, when not api.github.com
    pub base_uri: Option<String>,
}

impl Default for ServiceConfig {
    fn default() -> Self {
        Self {
            name: "github".to_string(),
            fqdn: "github.com".to_string(),
            private_key: None,
            base_uri: None,
        }
    }
}

impl ServiceConfig {
    /// True when `target` designates this service.
    #[must_use]
    pub fn handles(target: &str) -> bool {
        TARGETS.iter().any(|alias| alias.eq_ignore_ascii_case(target))
    }

    pub fn from_toml_str(source: &str) -> Result<Self, ConfigError> {
        Ok(toml::from_str(source)?)
    }

    /// Read a TOML configuration file.
    pub async fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let source = tokio::fs::read_to_string(path)
            .await
            .map_err(|source| ConfigError::Read {
                path: path.to_path_buf(),
                source,
            })?;
        Self::from_toml_str(&source)
    }

    /// Fill a missing private key from `token` (usually `$GITHUB_TOKEN`).
    /// Empty values count as missing.
    #[must_use]
    pub fn with_fallback_token(mut self, token: Option<String>) -> Self {
        let configured = self.private_key.as_deref().is_some_and(|key| !key.is_empty());
        if !configured {
            self.private_key = token.filter(|token| !token.is_empty());
        }
        self
    }

    /// [`Self::with_fallback_token`] fed from the environment.
    #[must_use]
    pub fn with_env_token(self) -> Self {
        self.with_fallback_token(std::env::var(TOKEN_ENV).ok())
    }

    /// Read-only base URL, `https://github.com`.
    #[must_use]
    pub fn url_ro(&self) -> String {
        format!("https://{}", self.fqdn)
    }

    /// Read-write base URL, `git@github.com`.
    #[must_use]
    pub fn url_rw(&self) -> String {
        format!("git@{}", self.fqdn)
    }

    /// URL of `namespace/repo`: SSH form when `rw`, HTTPS otherwise.
    #[must_use]
    pub fn format_path(&self, repo: &str, namespace: &str, rw: bool) -> String {
        if rw {
            format!("{}:{namespace}/{repo}.git", self.url_rw())
        } else {
            format!("{}/{namespace}/{repo}", self.url_ro())
        }
    }
}
