//! GitHub API utilities

use crate::github::error::GitHubResult;
use crate::runtime::AsyncTask;
use std::future::Future;

/// Spawn an async task for GitHub API operations.
///
/// Thin wrapper around `AsyncTask::spawn_async` so every operation module
/// hands back the same handle type.
#[inline]
pub fn spawn_task<T, F>(work: F) -> AsyncTask<T>
where
    T: Send + 'static,
    F: Future<Output = T> + Send + 'static,
{
    AsyncTask::spawn_async(work)
}

/// Await a spawned API task, folding a lost worker into the API error.
pub async fn join<T>(task: AsyncTask<GitHubResult<T>>) -> GitHubResult<T>
where
    T: Send + 'static,
{
    task.await?
}
