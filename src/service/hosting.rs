//! [`HostingClient`] on top of the octocrab-backed [`GitHubClient`].

use crate::github::{GitHubClient, GitHubResult, util::join};
use crate::service::{Fork, HostingClient, ReviewRequest};
use async_trait::async_trait;
use octocrab::models::Repository;
use octocrab::models::pulls::PullRequest;

impl ReviewRequest for PullRequest {
    fn number(&self) -> u64 {
        self.number
    }

    fn title(&self) -> &str {
        self.title.as_deref().unwrap_or_default()
    }

    fn issue_link(&self) -> &str {
        self.issue_url.as_ref().map(|url| url.as_str()).unwrap_or_default()
    }
}

fn fork_of(repository: Repository) -> Fork {
    let owner = repository
        .owner
        .as_ref()
        .map(|owner| owner.login.clone())
        .unwrap_or_default();
    let full_name = repository
        .full_name
        .clone()
        .unwrap_or_else(|| format!("{owner}/{}", repository.name));
    Fork {
        full_name,
        owner,
        name: repository.name,
    }
}

#[async_trait]
impl HostingClient for GitHubClient {
    type Repository = Repository;
    type PullRequest = PullRequest;

    fn authenticate(&self, token: Option<&str>) -> GitHubResult<Self> {
        self.reauthenticate(token)
    }

    async fn login(&self) -> GitHubResult<String> {
        Ok(join(self.get_me()).await?.login)
    }

    async fn display_name(&self) -> GitHubResult<Option<String>> {
        Ok(join(self.get_me()).await?.name)
    }

    async fn create_repo(&self, name: &str) -> GitHubResult<()> {
        join(self.create_repository(name)).await.map(|_| ())
    }

    async fn find_repo(&self, owner: &str, name: &str) -> GitHubResult<Option<Repository>> {
        join(self.get_repository(owner, name)).await
    }

    async fn fork_repo(&self, owner: &str, name: &str) -> GitHubResult<Fork> {
        join(self.fork_repository(owner, name)).await.map(fork_of)
    }

    async fn delete_repo(&self, owner: &str, name: &str) -> GitHubResult<bool> {
        join(self.delete_repository(owner, name)).await
    }

    async fn open_requests(&self, owner: &str, name: &str) -> GitHubResult<Vec<PullRequest>> {
        join(self.list_open_pull_requests(owner, name)).await
    }
}
