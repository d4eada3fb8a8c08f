//! GitHub Repository creation operation.

use crate::github::{error::GitHubError, util::spawn_task};
use crate::runtime::AsyncTask;
use octocrab::{Octocrab, models::Repository};
use std::sync::Arc;

/// Create a repository under the authenticated account.
///
/// GitHub answers 422 with the detail "name already exists on this account"
/// when the name is taken.
pub(crate) fn create_repository(
    inner: Arc<Octocrab>,
    name: impl Into<String>,
) -> AsyncTask<Result<Repository, GitHubError>> {
    let name = name.into();
    spawn_task(async move {
        let body = serde_json::json!({
            "name": name,
        });

        inner
            .post("/user/repos", Some(&body))
            .await
            .map_err(GitHubError::from)
    })
}
