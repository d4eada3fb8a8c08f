//! GitHub Repository lookup operation.

use crate::github::{error::GitHubError, util::spawn_task};
use crate::runtime::AsyncTask;
use octocrab::{Octocrab, models::Repository};
use std::sync::Arc;

/// Look up `owner/repo`.
///
/// Resolves to `Ok(None)` when GitHub answers 404; other failures are
/// propagated.
pub(crate) fn get_repository(
    inner: Arc<Octocrab>,
    owner: impl Into<String>,
    repo: impl Into<String>,
) -> AsyncTask<Result<Option<Repository>, GitHubError>> {
    let (owner, repo) = (owner.into(), repo.into());
    spawn_task(async move {
        match inner.repos(&owner, &repo).get().await {
            Ok(repository) => Ok(Some(repository)),
            Err(e) => {
                let err = GitHubError::from(e);
                if err.is_not_found() { Ok(None) } else { Err(err) }
            }
        }
    })
}
