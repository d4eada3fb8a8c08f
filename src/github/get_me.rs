//! GitHub authenticated user retrieval operation.

use crate::github::{error::GitHubError, util::spawn_task};
use crate::runtime::AsyncTask;
use octocrab::Octocrab;
use serde::Deserialize;
use std::sync::Arc;

/// The fields of `/user` the service relies on.
#[derive(Debug, Clone, Deserialize)]
pub struct AuthenticatedUser {
    /// Login, used as the namespace of the user's repositories
    pub login: String,
    /// Display name; GitHub leaves it null until the user sets one
    #[serde(default)]
    pub name: Option<String>,
}

/// Get details of the authenticated GitHub user.
///
/// Calls the `/user` endpoint; an anonymous or rejected token gets a 401.
pub(crate) fn get_me(inner: Arc<Octocrab>) -> AsyncTask<Result<AuthenticatedUser, GitHubError>> {
    spawn_task(async move {
        inner
            .get("/user", None::<&()>)
            .await
            .map_err(GitHubError::from)
    })
}
