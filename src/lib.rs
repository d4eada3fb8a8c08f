//! `gitrepo_github` - GitHub service for git-repo
//!
//! Creates, forks and deletes GitHub repositories and lists or fetches their
//! pull requests, registering the matching git remotes in the working copy.
//! Provider and git failures are reported through the closed
//! [`ServiceError`] taxonomy shared by every hosting service.

// Module declarations
pub mod git;
pub mod github;
pub mod runtime;
pub mod service;

// Re-export runtime types
pub use runtime::{AsyncStream, AsyncTask, EmitterBuilder};

// Re-export GitHub client types
pub use github::{AuthenticatedUser, GitHubClient, GitHubClientBuilder};

// Re-export error types
pub use git::{GitError, GitResult};
pub use github::{GitHubError, GitHubResult};
pub use service::{ErrorKind, ServiceError, ServiceResult};

// Re-export the service and its seams
pub use git::GitRemotes;
pub use service::{
    AddRemote, ConfigError, Fork, GithubService, HostingClient, Remote, RemoteManager,
    RequestSummary, ReviewRequest, ServiceConfig,
};
