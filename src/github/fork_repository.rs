//! GitHub Repository forking operation.

use crate::github::{error::GitHubError, util::spawn_task};
use crate::runtime::AsyncTask;
use octocrab::{Octocrab, models::Repository};
use std::sync::Arc;

/// Fork `owner/repo` into the authenticated account.
pub(crate) fn fork_repository(
    inner: Arc<Octocrab>,
    owner: impl Into<String>,
    repo: impl Into<String>,
) -> AsyncTask<Result<Repository, GitHubError>> {
    let (owner, repo) = (owner.into(), repo.into());
    spawn_task(async move {
        inner
            .repos(&owner, &repo)
            .create_fork()
            .send()
            .await
            .map_err(GitHubError::from)
    })
}
