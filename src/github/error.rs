//! GitHub API error types

use thiserror::Error;
use tokio::sync::oneshot::error::RecvError;

/// Error types for GitHub API operations
#[derive(Debug, Error)]
pub enum GitHubError {
    /// Octocrab library error
    #[error("Octocrab error: {0}")]
    Octocrab(#[from] octocrab::Error),

    /// API error reported with an explicit status
    #[error("GitHub API error ({status}): {message}")]
    Api { status: u16, message: String },

    /// Resource not found (404)
    #[error("Resource not found: {0}")]
    NotFound(String),

    /// Client setup/configuration error
    #[error("Client setup failed: {0}")]
    ClientSetup(String),

    /// The worker running the request went away before answering
    #[error("Task channel error: {0}")]
    Channel(#[from] RecvError),
}

/// Convenience result alias for GitHub operations
pub type GitHubResult<T> = Result<T, GitHubError>;

impl GitHubError {
    /// HTTP status reported by GitHub, when there is one.
    #[must_use]
    pub fn status(&self) -> Option<u16> {
        match self {
            GitHubError::Octocrab(octocrab::Error::GitHub { source, .. }) => {
                Some(source.status_code.as_u16())
            }
            GitHubError::Api { status, .. } => Some(*status),
            GitHubError::NotFound(_) => Some(404),
            _ => None,
        }
    }

    /// Every human-readable message carried by the error.
    ///
    /// GitHub puts the precise reason of a validation failure in the
    /// `errors[].message` details rather than the top-level message, so both
    /// are returned.
    #[must_use]
    pub fn messages(&self) -> Vec<String> {
        match self {
            GitHubError::Octocrab(octocrab::Error::GitHub { source, .. }) => {
                let mut messages = vec![source.message.clone()];
                if let Some(errors) = &source.errors {
                    messages.extend(
                        errors
                            .iter()
                            .filter_map(|detail| detail.get("message"))
                            .filter_map(|message| message.as_str())
                            .map(str::to_string),
                    );
                }
                messages
            }
            GitHubError::Api { message, .. } => vec![message.clone()],
            other => vec![other.to_string()],
        }
    }

    /// True when GitHub answered 404.
    #[must_use]
    pub fn is_not_found(&self) -> bool {
        self.status() == Some(404)
    }
}
