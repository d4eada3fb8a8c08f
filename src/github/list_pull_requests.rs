//! GitHub open Pull Requests listing operation.

use crate::github::{error::GitHubError, util::spawn_task};
use crate::runtime::AsyncTask;
use octocrab::models::pulls::PullRequest;
use octocrab::{Octocrab, Page, params};
use std::sync::Arc;

const PER_PAGE: u8 = 100;

/// List every open pull request of `owner/repo`, following pagination.
///
/// Items keep the order GitHub returns them in.
pub(crate) fn list_open_pull_requests(
    inner: Arc<Octocrab>,
    owner: impl Into<String>,
    repo: impl Into<String>,
) -> AsyncTask<Result<Vec<PullRequest>, GitHubError>> {
    let (owner, repo) = (owner.into(), repo.into());
    spawn_task(async move {
        let mut page: Page<PullRequest> = inner
            .pulls(&owner, &repo)
            .list()
            .state(params::State::Open)
            .per_page(PER_PAGE)
            .send()
            .await?;

        let mut pull_requests = std::mem::take(&mut page.items);
        while let Some(mut next) = inner.get_page::<PullRequest>(&page.next).await? {
            pull_requests.append(&mut next.items);
            page = next;
        }
        Ok::<_, GitHubError>(pull_requests)
    })
}
