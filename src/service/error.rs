//! Domain errors surfaced by the repository service.

use crate::git::GitError;
use crate::github::GitHubError;
use thiserror::Error;

/// Boxed underlying failure kept for diagnostics.
pub type Cause = Box<dyn std::error::Error + Send + Sync + 'static>;

/// Errors every hosting service reports the same way, whatever the provider.
///
/// Classified variants keep the provider or git failure that triggered them
/// as their `source()`.
#[derive(Debug, Error)]
pub enum ServiceError {
    /// Credentials missing or rejected, or identity used before `connect`
    #[error("{message}")]
    Configuration {
        message: String,
        #[source]
        source: Option<Cause>,
    },

    /// The repository to create or fork already exists
    #[error("{message}")]
    ResourceExists {
        message: String,
        #[source]
        source: Option<Cause>,
    },

    /// Repository, remote or pull request could not be found
    #[error("{message}")]
    ResourceNotFound {
        message: String,
        #[source]
        source: Option<Cause>,
    },

    /// The provider refused the operation for lack of privileges
    #[error("{message}")]
    ResourcePermission {
        message: String,
        #[source]
        source: Option<Cause>,
    },

    /// Any other provider failure
    #[error("{message}")]
    Resource {
        message: String,
        #[source]
        source: Option<Cause>,
    },

    /// The operation exists in the contract but is not implemented
    #[error("{0}")]
    Unsupported(String),

    /// Local git failure left unclassified
    #[error(transparent)]
    Git(#[from] GitError),

    /// Provider failure on a path that does not classify errors
    #[error(transparent)]
    Provider(#[from] GitHubError),
}

/// Convenience result alias for service operations
pub type ServiceResult<T> = Result<T, ServiceError>;

/// Discriminant of [`ServiceError`], handy for matching and exit codes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    Configuration,
    ResourceExists,
    ResourceNotFound,
    ResourcePermission,
    Resource,
    Unsupported,
    Git,
    Provider,
}

impl ServiceError {
    pub fn configuration(message: impl Into<String>, source: Option<Cause>) -> Self {
        ServiceError::Configuration {
            message: message.into(),
            source,
        }
    }

    pub fn exists(message: impl Into<String>, source: impl Into<Cause>) -> Self {
        ServiceError::ResourceExists {
            message: message.into(),
            source: Some(source.into()),
        }
    }

    pub fn not_found(message: impl Into<String>, source: Option<Cause>) -> Self {
        ServiceError::ResourceNotFound {
            message: message.into(),
            source,
        }
    }

    pub fn permission(message: impl Into<String>, source: impl Into<Cause>) -> Self {
        ServiceError::ResourcePermission {
            message: message.into(),
            source: Some(source.into()),
        }
    }

    pub fn unhandled(message: impl Into<String>, source: impl Into<Cause>) -> Self {
        ServiceError::Resource {
            message: message.into(),
            source: Some(source.into()),
        }
    }

    #[must_use]
    pub fn kind(&self) -> ErrorKind {
        match self {
            ServiceError::Configuration { .. } => ErrorKind::Configuration,
            ServiceError::ResourceExists { .. } => ErrorKind::ResourceExists,
            ServiceError::ResourceNotFound { .. } => ErrorKind::ResourceNotFound,
            ServiceError::ResourcePermission { .. } => ErrorKind::ResourcePermission,
            ServiceError::Resource { .. } => ErrorKind::Resource,
            ServiceError::Unsupported(_) => ErrorKind::Unsupported,
            ServiceError::Git(_) => ErrorKind::Git,
            ServiceError::Provider(_) => ErrorKind::Provider,
        }
    }
}
