//! Pull Requests API methods

use super::GitHubClient;
use crate::github::error::GitHubError;
use crate::runtime::AsyncTask;
use octocrab::models::pulls::PullRequest;

impl GitHubClient {
    /// List all open pull requests of a repository
    pub fn list_open_pull_requests(
        &self,
        owner: impl Into<String>,
        repo: impl Into<String>,
    ) -> AsyncTask<Result<Vec<PullRequest>, GitHubError>> {
        crate::github::list_pull_requests::list_open_pull_requests(self.inner.clone(), owner, repo)
    }
}
