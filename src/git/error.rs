//! Local git error types

use thiserror::Error;

/// Failures of the local git tooling.
#[derive(Debug, Error)]
pub enum GitError {
    /// `git` exited with a failure status; `output` is what it printed
    #[error("Error when {action}: {output}")]
    Command {
        action: &'static str,
        command: Vec<String>,
        output: String,
    },

    /// `git` could not be started at all
    #[error("Failed to execute git {command}: {source}")]
    Spawn {
        command: String,
        #[source]
        source: std::io::Error,
    },

    /// The working directory is not inside a git repository
    #[error("Not a git repository: {0}")]
    Open(String),

    /// The blocking worker reading the repository went away
    #[error("Task channel error: {0}")]
    Channel(#[from] tokio::sync::oneshot::error::RecvError),
}

/// Convenience result alias for local git operations
pub type GitResult<T> = Result<T, GitError>;

impl GitError {
    /// Output printed by the failed command, empty for other failures.
    #[must_use]
    pub fn output(&self) -> &str {
        match self {
            GitError::Command { output, .. } => output,
            _ => "",
        }
    }
}
