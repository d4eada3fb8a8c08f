//! Remote management on the local repository.
//!
//! Mutations go through the `git` binary so hooks, credential helpers and the
//! user's configuration apply; listing reads the configuration with gix.

use crate::git::command::run_git;
use crate::git::error::{GitError, GitResult};
use crate::runtime::AsyncTask;
use crate::service::{AddRemote, Remote, RemoteManager, ServiceConfig};
use async_trait::async_trait;
use log::{debug, info, warn};
use std::path::{Path, PathBuf};

/// [`RemoteManager`] backed by the repository found at (or above) `work_dir`.
#[derive(Debug, Clone)]
pub struct GitRemotes {
    work_dir: PathBuf,
    config: ServiceConfig,
}

impl GitRemotes {
    /// Manage remotes of the repository containing `work_dir`, building
    /// remote URLs for the service described by `config`.
    pub fn new(work_dir: impl Into<PathBuf>, config: ServiceConfig) -> Self {
        Self {
            work_dir: work_dir.into(),
            config,
        }
    }

    #[must_use]
    pub fn work_dir(&self) -> &Path {
        &self.work_dir
    }

    /// Point the checked-out branch at `remote` for `git pull`.
    async fn set_tracking(&self, remote: &str) -> GitResult<()> {
        let branch = match run_git(&self.work_dir, "reading HEAD", &["symbolic-ref", "--short", "HEAD"]).await {
            Ok(branch) => branch,
            Err(err) => {
                warn!("Not setting {remote} as tracking remote: {err}");
                return Ok(());
            }
        };
        let remote_key = format!("branch.{branch}.remote");
        let merge_key = format!("branch.{branch}.merge");
        let merge_ref = format!("refs/heads/{branch}");
        run_git(&self.work_dir, "configuring", &["config", &remote_key, remote]).await?;
        run_git(&self.work_dir, "configuring", &["config", &merge_key, &merge_ref]).await?;
        debug!("Branch {branch} now tracks {remote}");
        Ok(())
    }
}

#[async_trait]
impl RemoteManager for GitRemotes {
    async fn add(&self, request: AddRemote) -> GitResult<Remote> {
        let name = request.name.clone().unwrap_or_else(|| self.config.name.clone());
        let url = self.config.format_path(&request.repo, &request.user, true);

        run_git(&self.work_dir, "adding remote", &["remote", "add", &name, &url]).await?;
        info!("Added remote {name} ({url})");

        if request.sets_tracking() {
            self.set_tracking(&name).await?;
        }

        Ok(Remote {
            name,
            url: Some(url),
        })
    }

    async fn pull(&self, remote: &Remote, branch: &str) -> GitResult<()> {
        info!("Pulling branch {branch} from {}", remote.name);
        run_git(&self.work_dir, "pulling", &["pull", "--progress", &remote.name, branch]).await?;
        Ok(())
    }

    async fn fetch(&self, remote: &Remote, remote_ref: &str, local_branch: &str) -> GitResult<()> {
        let refspec = format!("{remote_ref}:{local_branch}");
        info!("Fetching {refspec} from {}", remote.name);
        run_git(&self.work_dir, "fetching", &["fetch", &remote.name, &refspec]).await?;
        Ok(())
    }

    async fn remotes(&self) -> GitResult<Vec<Remote>> {
        let work_dir = self.work_dir.clone();
        AsyncTask::spawn(move || list_remotes(&work_dir)).await?
    }
}

/// Remotes configured on the repository containing `work_dir`, sorted by name.
fn list_remotes(work_dir: &Path) -> GitResult<Vec<Remote>> {
    let repo = gix::discover(work_dir).map_err(|e| GitError::Open(e.to_string()))?;
    let remotes = repo
        .remote_names()
        .into_iter()
        .map(|name| {
            let url = repo
                .find_remote(&*name)
                .ok()
                .and_then(|remote| {
                    remote
                        .url(gix::remote::Direction::Fetch)
                        .map(|url| url.to_bstring().to_string())
                });
            Remote {
                name: name.to_string(),
                url,
            }
        })
        .collect();
    Ok(remotes)
}
