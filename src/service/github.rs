//! The GitHub repository service.

use crate::git::GitRemotes;
use crate::github::{GitHubClient, GitHubError};
use crate::runtime::{AsyncStream, EmitterBuilder};
use crate::service::classify;
use crate::service::config::ServiceConfig;
use crate::service::error::{ServiceError, ServiceResult};
use crate::service::{AddRemote, HostingClient, RemoteManager, RequestSummary};
use log::{debug, info, warn};
use std::future::Future;
use std::pin::Pin;

/// Batch fetch behind [`GithubService::request_list`].
type RequestBatch<P> = Pin<Box<dyn Future<Output = ServiceResult<Vec<P>>> + Send>>;

/// Repository service for GitHub.
///
/// Holds the provider client, the remote manager of the working copy and the
/// login resolved by [`GithubService::connect`]. One handle serves one caller
/// at a time.
pub struct GithubService<C = GitHubClient, R = GitRemotes> {
    client: C,
    remotes: R,
    config: ServiceConfig,
    private_key: Option<String>,
    username: Option<String>,
}

impl<C, R> GithubService<C, R>
where
    C: HostingClient,
    R: RemoteManager,
{
    pub fn new(client: C, remotes: R, config: ServiceConfig) -> Self {
        let private_key = config.private_key.clone().filter(|key| !key.is_empty());
        Self {
            client,
            remotes,
            config,
            private_key,
            username: None,
        }
    }

    /// Name of this service's git remote.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.config.name
    }

    #[must_use]
    pub fn config(&self) -> &ServiceConfig {
        &self.config
    }

    /// Login resolved by the last successful `connect`.
    #[must_use]
    pub fn username(&self) -> Option<&str> {
        self.username.as_deref()
    }

    fn require_username(&self) -> ServiceResult<&str> {
        self.username
            .as_deref()
            .ok_or_else(|| ServiceError::configuration("Not connected to GitHub: run connect first.", None))
    }

    /// Authenticate with the configured private key and remember the login.
    pub async fn connect(&mut self) -> ServiceResult<()> {
        let key = self.private_key.as_deref();
        let key_configured = key.is_some();

        let client = self
            .client
            .authenticate(key)
            .map_err(|err| classify::connect_error(err, key_configured))?;
        let login = client
            .login()
            .await
            .map_err(|err| classify::connect_error(err, key_configured))?;

        debug!("Connected to {} as {login}", self.config.fqdn);
        self.client = client;
        self.username = Some(login);
        Ok(())
    }

    /// Create `repo` under the authenticated account.
    ///
    /// `user` does not pick the namespace (GitHub creates under the token's
    /// account); it names the remote registered when `add` is set.
    pub async fn create(&self, user: &str, repo: &str, add: bool) -> ServiceResult<()> {
        self.client
            .create_repo(repo)
            .await
            .map_err(classify::create_error)?;

        if add {
            self.remotes.add(AddRemote::new(user, repo)).await?;
        }
        Ok(())
    }

    /// Fork `user/repo`, register `upstream` and this service's remote, and
    /// optionally pull `branch` from the fork.
    pub async fn fork(&self, user: &str, repo: &str, branch: &str, clone: bool) -> ServiceResult<()> {
        let login = self.require_username()?;
        info!("Forking repository {user}/{repo}…");

        let fork = self
            .client
            .fork_repo(user, repo)
            .await
            .map_err(classify::fork_error)?;

        self.remotes
            .add(AddRemote::new(user, repo).named("upstream").alone())
            .await?;
        // GitHub may rename the fork when the name is already taken
        let owner = if fork.owner.is_empty() { login } else { fork.owner.as_str() };
        let remote = self.remotes.add(AddRemote::new(owner, &fork.name)).await?;
        if clone {
            self.remotes.pull(&remote, branch).await?;
        }

        info!(
            "New forked repository available at {}/{}",
            self.config.url_ro(),
            fork.full_name
        );
        Ok(())
    }

    /// Delete `user/repo`, `user` defaulting to the connected login.
    pub async fn delete(&self, repo: &str, user: Option<&str>) -> ServiceResult<()> {
        let user = match user {
            Some(user) => user,
            None => self.require_username()?,
        };
        let not_found = || {
            ServiceError::not_found(
                format!("Cannot delete: repository {user}/{repo} does not exist."),
                None,
            )
        };

        let found = self
            .client
            .find_repo(user, repo)
            .await
            .map_err(classify::delete_error)?;
        if found.is_none() {
            return Err(not_found());
        }

        let deleted = self
            .client
            .delete_repo(user, repo)
            .await
            .map_err(classify::delete_error)?;
        if !deleted {
            return Err(not_found());
        }
        info!("Deleted repository {user}/{repo}");
        Ok(())
    }

    /// The provider's own repository object for `user/repo`.
    pub async fn get_repository(&self, user: &str, repo: &str) -> ServiceResult<C::Repository> {
        self.client
            .find_repo(user, repo)
            .await
            .map_err(classify::lookup_error)?
            .ok_or_else(|| {
                ServiceError::not_found(format!("Repository {user}/{repo} does not exist."), None)
            })
    }

    /// Stream the open pull requests of `user/repo` as [`RequestSummary`].
    ///
    /// Nothing is asked to GitHub until the stream is first polled, so it must
    /// be polled on a tokio runtime. Each call queries GitHub afresh; the
    /// stream is single-pass. Provider failures, including a missing
    /// repository, arrive unclassified as [`ServiceError::Provider`].
    pub fn request_list(&self, user: &str, repo: &str) -> AsyncStream<ServiceResult<RequestSummary>> {
        let client = self.client.clone();
        let (user, repo) = (user.to_string(), repo.to_string());

        EmitterBuilder::new(Box::new(move || -> RequestBatch<C::PullRequest> {
            Box::pin(async move {
                match client.find_repo(&user, &repo).await {
                    Ok(Some(_)) => client
                        .open_requests(&user, &repo)
                        .await
                        .map_err(ServiceError::from),
                    Ok(None) => Err(ServiceError::Provider(GitHubError::NotFound(format!(
                        "{user}/{repo}"
                    )))),
                    Err(err) => Err(ServiceError::from(err)),
                }
            })
        }))
        .emit(
            |request| RequestSummary::from_request(&request),
            |err| warn!("Listing pull requests failed: {err}"),
        )
    }

    /// Fetch pull request `request` into the local branch `request-{request}`
    /// and return that branch name.
    pub async fn request_fetch(
        &self,
        user: &str,
        repo: &str,
        request: u64,
        pull: bool,
    ) -> ServiceResult<String> {
        if pull {
            return Err(ServiceError::Unsupported(
                "Pull operation on requests for merge are not yet supported".to_string(),
            ));
        }

        let remotes = self.remotes.remotes().await?;
        debug!(
            "Fetching request #{request} of {user}/{repo}, remotes: {:?}",
            remotes.iter().map(|remote| remote.name.as_str()).collect::<Vec<_>>()
        );

        let remote = remotes
            .iter()
            .find(|remote| remote.name == self.config.name)
            .ok_or_else(|| {
                ServiceError::not_found(format!("Could not find remote {}", self.config.name), None)
            })?;

        let local_branch = format!("request-{request}");
        self.remotes
            .fetch(remote, &format!("refs/pull/{request}/head"), &local_branch)
            .await
            .map_err(|err| classify::fetch_error(err, request))?;
        Ok(local_branch)
    }

    /// Display name of the authenticated account, asked to GitHub on each call.
    pub async fn user(&self) -> ServiceResult<Option<String>> {
        self.client
            .display_name()
            .await
            .map_err(classify::lookup_error)
    }
}
