//! GitHub Repository deletion operation.

use crate::github::{error::GitHubError, util::spawn_task};
use crate::runtime::AsyncTask;
use octocrab::Octocrab;
use std::sync::Arc;

/// Delete `owner/repo`.
///
/// # Returns
/// AsyncTask resolving to `Ok(true)` once deleted, `Ok(false)` when GitHub
/// reports the repository missing (404).
///
/// # Notes
/// - Requires the `delete_repo` scope on the token
/// - GitHub answers 403 when the token may read but not delete
pub(crate) fn delete_repository(
    inner: Arc<Octocrab>,
    owner: impl Into<String>,
    repo: impl Into<String>,
) -> AsyncTask<Result<bool, GitHubError>> {
    let (owner, repo) = (owner.into(), repo.into());
    spawn_task(async move {
        match inner.repos(&owner, &repo).delete().await {
            Ok(()) => Ok(true),
            Err(e) => {
                let err = GitHubError::from(e);
                if err.is_not_found() { Ok(false) } else { Err(err) }
            }
        }
    })
}
