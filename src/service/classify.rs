//! Translation of provider and git failures into [`ServiceError`].
//!
//! Every status code and message the service reacts to is matched here and
//! nowhere else. Message matching depends on GitHub's and git's wording and
//! breaks silently when that wording changes; the tests in
//! `tests/service/test_classify.rs` pin the payloads currently recognised.

use crate::git::GitError;
use crate::github::GitHubError;
use crate::service::error::ServiceError;

pub const UNAUTHORIZED: u16 = 401;
pub const FORBIDDEN: u16 = 403;
pub const UNPROCESSABLE_ENTITY: u16 = 422;

/// Validation detail GitHub returns when a repository name is taken.
pub const NAME_TAKEN: &str = "name already exists on this account";

/// What `git fetch` prints when the requested ref is absent on the remote.
pub const MISSING_REMOTE_REF: &str = "couldn't find remote ref";

/// Case-insensitive search of `needle` in all messages of `err`.
fn mentions(err: &GitHubError, needle: &str) -> bool {
    err.messages()
        .iter()
        .any(|message| message.to_lowercase().contains(needle))
}

/// Failure while authenticating; `key_configured` tells a missing key from a
/// rejected one.
pub fn connect_error(err: GitHubError, key_configured: bool) -> ServiceError {
    let rejected = err.status() == Some(UNAUTHORIZED) || matches!(err, GitHubError::ClientSetup(_));
    match (rejected, key_configured) {
        (true, false) => ServiceError::configuration(
            "Could not connect to GitHub. Please configure your client with a GitHub private key.",
            Some(err.into()),
        ),
        (true, true) => ServiceError::configuration(
            "Could not connect to GitHub. Check your configuration and try again.",
            Some(err.into()),
        ),
        (false, _) => ServiceError::unhandled(format!("Unhandled error: {err}"), err),
    }
}

/// Failure while creating a repository.
pub fn create_error(err: GitHubError) -> ServiceError {
    if err.status() == Some(UNPROCESSABLE_ENTITY) || mentions(&err, NAME_TAKEN) {
        ServiceError::exists("Project already exists.", err)
    } else {
        ServiceError::unhandled("Unhandled error.", err)
    }
}

/// Failure while forking a repository.
pub fn fork_error(err: GitHubError) -> ServiceError {
    if mentions(&err, NAME_TAKEN) {
        ServiceError::exists("Project already exists.", err)
    } else {
        ServiceError::unhandled(format!("Unhandled error: {err}"), err)
    }
}

/// Failure while looking up or deleting a repository.
pub fn delete_error(err: GitHubError) -> ServiceError {
    if err.status() == Some(FORBIDDEN) {
        ServiceError::permission(
            "You don't have enough permissions for deleting the repository. \
             Check the namespace or the private token's privileges",
            err,
        )
    } else {
        ServiceError::unhandled(format!("Unhandled exception: {err}"), err)
    }
}

/// Failure while looking up a repository to hand back to the caller.
pub fn lookup_error(err: GitHubError) -> ServiceError {
    if err.status() == Some(FORBIDDEN) {
        ServiceError::permission(format!("Access to the repository was refused: {err}"), err)
    } else {
        ServiceError::unhandled(format!("Unhandled error: {err}"), err)
    }
}

/// Failure of `git fetch` for pull request `request`.
///
/// A missing remote ref means the pull request does not exist (or is not
/// open); anything else is returned untouched.
pub fn fetch_error(err: GitError, request: u64) -> ServiceError {
    if err.output().to_lowercase().contains(MISSING_REMOTE_REF) {
        ServiceError::not_found(
            format!("Could not find opened request #{request}"),
            Some(err.into()),
        )
    } else {
        ServiceError::Git(err)
    }
}
