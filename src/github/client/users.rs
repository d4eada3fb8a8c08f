//! Users API methods

use super::GitHubClient;
use crate::github::error::GitHubError;
use crate::github::get_me::AuthenticatedUser;
use crate::runtime::AsyncTask;

impl GitHubClient {
    /// Get the authenticated user
    #[must_use]
    pub fn get_me(&self) -> AsyncTask<Result<AuthenticatedUser, GitHubError>> {
        crate::github::get_me::get_me(self.inner.clone())
    }
}
