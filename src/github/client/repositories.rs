//! Repositories API methods

use super::GitHubClient;
use crate::github::error::GitHubError;
use crate::runtime::AsyncTask;
use octocrab::models::Repository;

impl GitHubClient {
    /// Create a repository under the authenticated account
    pub fn create_repository(
        &self,
        name: impl Into<String>,
    ) -> AsyncTask<Result<Repository, GitHubError>> {
        crate::github::create_repository::create_repository(self.inner.clone(), name)
    }

    /// Look up a repository; `None` when it does not exist
    pub fn get_repository(
        &self,
        owner: impl Into<String>,
        repo: impl Into<String>,
    ) -> AsyncTask<Result<Option<Repository>, GitHubError>> {
        crate::github::get_repository::get_repository(self.inner.clone(), owner, repo)
    }

    /// Fork a repository into the authenticated account
    pub fn fork_repository(
        &self,
        owner: impl Into<String>,
        repo: impl Into<String>,
    ) -> AsyncTask<Result<Repository, GitHubError>> {
        crate::github::fork_repository::fork_repository(self.inner.clone(), owner, repo)
    }

    /// Delete a repository; `false` when it does not exist
    pub fn delete_repository(
        &self,
        owner: impl Into<String>,
        repo: impl Into<String>,
    ) -> AsyncTask<Result<bool, GitHubError>> {
        crate::github::delete_repository::delete_repository(self.inner.clone(), owner, repo)
    }
}
