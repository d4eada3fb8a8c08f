//! GitHub API client wrapper
//!
//! Provides a clean API for the operations the service needs without exposing
//! Octocrab.
//!
//! # Examples
//!
//! ```rust,no_run
//! use gitrepo_github::GitHubClient;
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let gh = GitHubClient::with_token("ghp_...")?;
//!     let me = gh.get_me().await??;
//!     println!("logged in as {}", me.login);
//!     Ok(())
//! }
//! ```

use crate::github::error::{GitHubError, GitHubResult};
use octocrab::Octocrab;
use std::sync::Arc;

mod pull_requests;
mod repositories;
mod users;

/// GitHub API client wrapper that encapsulates Octocrab.
///
/// Cloning is cheap (Arc clone).
#[derive(Clone, Debug)]
pub struct GitHubClient {
    inner: Arc<Octocrab>,
    base_uri: Option<String>,
}

impl GitHubClient {
    /// Create a new client builder
    #[must_use]
    pub fn builder() -> GitHubClientBuilder {
        GitHubClientBuilder::new()
    }

    /// Convenience: create client with personal access token
    pub fn with_token(token: impl Into<String>) -> GitHubResult<Self> {
        Self::builder().personal_token(token).build()
    }

    /// Unauthenticated client; every call touching `/user` answers 401.
    pub fn anonymous() -> GitHubResult<Self> {
        Self::builder().build()
    }

    /// Same endpoint, new credentials. `None` yields an anonymous client.
    pub fn reauthenticate(&self, token: Option<&str>) -> GitHubResult<Self> {
        let mut builder = Self::builder();
        if let Some(token) = token {
            builder = builder.personal_token(token);
        }
        if let Some(uri) = &self.base_uri {
            builder = builder.base_uri(uri.clone());
        }
        builder.build()
    }
}

/// Builder for creating `GitHubClient`
#[derive(Default)]
pub struct GitHubClientBuilder {
    token: Option<String>,
    base_uri: Option<String>,
}

impl GitHubClientBuilder {
    /// Create a new builder
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Set personal access token for authentication
    #[must_use]
    pub fn personal_token(mut self, token: impl Into<String>) -> Self {
        self.token = Some(token.into());
        self
    }

    /// Set base URI (for GitHub Enterprise)
    #[must_use]
    pub fn base_uri(mut self, uri: impl Into<String>) -> Self {
        self.base_uri = Some(uri.into());
        self
    }

    /// Build the `GitHubClient`
    pub fn build(self) -> GitHubResult<GitHubClient> {
        // octocrab talks TLS through rustls; a second install attempt is a no-op error
        let _ = rustls::crypto::ring::default_provider().install_default();

        let mut builder = Octocrab::builder();

        if let Some(token) = self.token {
            builder = builder.personal_token(token);
        }

        if let Some(uri) = &self.base_uri {
            builder = builder
                .base_uri(uri.as_str())
                .map_err(|e| GitHubError::ClientSetup(e.to_string()))?;
        }

        let octocrab = builder
            .build()
            .map_err(|e| GitHubError::ClientSetup(e.to_string()))?;

        Ok(GitHubClient {
            inner: Arc::new(octocrab),
            base_uri: self.base_uri,
        })
    }
}
