//! Repository service layer
//!
//! [`GithubService`] exposes the operations every hosting service offers
//! (connect, create, fork, delete, get, list and fetch pull requests) and
//! reports failures as [`ServiceError`]. It talks to GitHub through a
//! [`HostingClient`] and to the working copy through a [`RemoteManager`].

pub mod classify;
pub mod config;
pub mod error;
pub mod github;
mod hosting;

pub use config::{ConfigError, ServiceConfig};
pub use error::{ErrorKind, ServiceError, ServiceResult};
pub use github::GithubService;

use crate::git::GitResult;
use crate::github::GitHubResult;
use async_trait::async_trait;

/// A fork created on the provider.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Fork {
    /// `owner/name`
    pub full_name: String,
    pub owner: String,
    pub name: String,
}

/// Accessors the service needs on a provider's pull request.
pub trait ReviewRequest {
    fn number(&self) -> u64;
    fn title(&self) -> &str;
    fn issue_link(&self) -> &str;
}

/// One open pull request, provider-agnostic.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RequestSummary {
    /// Pull request number
    pub id: String,
    pub title: String,
    /// API link to the issue backing the pull request
    pub issue_link: String,
}

impl RequestSummary {
    pub fn from_request<P: ReviewRequest + ?Sized>(request: &P) -> Self {
        Self {
            id: request.number().to_string(),
            title: request.title().to_string(),
            issue_link: request.issue_link().to_string(),
        }
    }
}

impl From<RequestSummary> for (String, String, String) {
    fn from(summary: RequestSummary) -> Self {
        (summary.id, summary.title, summary.issue_link)
    }
}

/// Provider API used by [`GithubService`].
#[async_trait]
pub trait HostingClient: Clone + Send + Sync + 'static {
    /// Provider-native repository, handed to callers untouched
    type Repository: Send + 'static;
    type PullRequest: ReviewRequest + Send + 'static;

    /// Same client, authenticated with `token` (anonymous when `None`).
    fn authenticate(&self, token: Option<&str>) -> GitHubResult<Self>;

    /// Login of the authenticated account.
    async fn login(&self) -> GitHubResult<String>;

    /// Display name of the authenticated account.
    async fn display_name(&self) -> GitHubResult<Option<String>>;

    /// Create `name` under the authenticated account.
    async fn create_repo(&self, name: &str) -> GitHubResult<()>;

    /// `None` when `owner/name` does not exist.
    async fn find_repo(&self, owner: &str, name: &str) -> GitHubResult<Option<Self::Repository>>;

    /// Fork `owner/name` into the authenticated account.
    async fn fork_repo(&self, owner: &str, name: &str) -> GitHubResult<Fork>;

    /// `false` when the provider reports nothing was deleted.
    async fn delete_repo(&self, owner: &str, name: &str) -> GitHubResult<bool>;

    /// Open pull requests, in provider order.
    async fn open_requests(&self, owner: &str, name: &str) -> GitHubResult<Vec<Self::PullRequest>>;
}

/// A git remote of the working copy.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Remote {
    pub name: String,
    pub url: Option<String>,
}

impl Remote {
    pub fn named(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            url: None,
        }
    }
}

/// Registration of `user/repo` as a remote.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AddRemote {
    pub user: String,
    pub repo: String,
    /// Remote name; the service's own name when `None`
    pub name: Option<String>,
    /// Make the remote the pull target of the current branch
    pub tracking: bool,
    /// Register the remote only, never as pull target
    pub alone: bool,
}

impl AddRemote {
    /// Tracking remote named after the service.
    pub fn new(user: impl Into<String>, repo: impl Into<String>) -> Self {
        Self {
            user: user.into(),
            repo: repo.into(),
            name: None,
            tracking: true,
            alone: false,
        }
    }

    #[must_use]
    pub fn named(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    #[must_use]
    pub fn alone(mut self) -> Self {
        self.alone = true;
        self
    }

    #[must_use]
    pub fn sets_tracking(&self) -> bool {
        self.tracking && !self.alone
    }
}

/// Remote management on the local repository.
#[async_trait]
pub trait RemoteManager: Send + Sync {
    async fn add(&self, request: AddRemote) -> GitResult<Remote>;

    async fn pull(&self, remote: &Remote, branch: &str) -> GitResult<()>;

    /// Fetch `remote_ref` from `remote` into the new local branch `local_branch`.
    async fn fetch(&self, remote: &Remote, remote_ref: &str, local_branch: &str) -> GitResult<()>;

    async fn remotes(&self) -> GitResult<Vec<Remote>>;
}
