//! Tests for error classification with synthetic payloads.

use super::fakes::api_error;
use gitrepo_github::service::classify;
use gitrepo_github::{ErrorKind, GitError, GitHubError};

fn git_failure(output: &str) -> GitError {
    GitError::Command {
        action: "fetching",
        command: vec!["git".to_string(), "fetch".to_string()],
        output: output.to_string(),
    }
}

#[test]
fn test_connect_error_distinguishes_missing_and_invalid_key() {
    let missing = classify::connect_error(api_error(401, "Requires authentication"), false);
    let invalid = classify::connect_error(api_error(401, "Bad credentials"), true);

    assert_eq!(missing.kind(), ErrorKind::Configuration);
    assert_eq!(invalid.kind(), ErrorKind::Configuration);
    assert_ne!(missing.to_string(), invalid.to_string());
}

#[test]
fn test_connect_error_client_setup_is_configuration() {
    let err = classify::connect_error(GitHubError::ClientSetup("bad header".to_string()), true);

    assert_eq!(err.kind(), ErrorKind::Configuration);
}

#[test]
fn test_connect_error_other_status_is_unhandled() {
    let err = classify::connect_error(api_error(503, "Service Unavailable"), true);

    assert_eq!(err.kind(), ErrorKind::Resource);
}

#[test]
fn test_create_error() {
    assert_eq!(
        classify::create_error(api_error(422, "Repository creation failed.")).kind(),
        ErrorKind::ResourceExists
    );
    assert_eq!(
        classify::create_error(api_error(400, "Name Already Exists On This Account")).kind(),
        ErrorKind::ResourceExists
    );
    assert_eq!(
        classify::create_error(api_error(500, "Server Error")).kind(),
        ErrorKind::Resource
    );
}

#[test]
fn test_fork_error_only_matches_message() {
    assert_eq!(
        classify::fork_error(api_error(422, "name already exists on this account")).kind(),
        ErrorKind::ResourceExists
    );
    assert_eq!(
        classify::fork_error(api_error(422, "Validation Failed")).kind(),
        ErrorKind::Resource
    );
}

#[test]
fn test_delete_error() {
    assert_eq!(
        classify::delete_error(api_error(403, "Must have admin rights")).kind(),
        ErrorKind::ResourcePermission
    );
    assert_eq!(
        classify::delete_error(api_error(500, "Server Error")).kind(),
        ErrorKind::Resource
    );
}

#[test]
fn test_fetch_error_missing_ref() {
    let modern = classify::fetch_error(git_failure("fatal: couldn't find remote ref refs/pull/3/head"), 3);
    let legacy = classify::fetch_error(
        git_failure("fatal: Couldn't find remote ref pull/3/head"),
        3,
    );

    assert_eq!(modern.kind(), ErrorKind::ResourceNotFound);
    assert_eq!(legacy.kind(), ErrorKind::ResourceNotFound);
    assert_eq!(modern.to_string(), "Could not find opened request #3");
}

#[test]
fn test_fetch_error_other_output_is_untouched() {
    let err = classify::fetch_error(git_failure("fatal: unable to access remote"), 3);

    assert_eq!(err.kind(), ErrorKind::Git);
    assert_eq!(err.to_string(), "Error when fetching: fatal: unable to access remote");
}

#[test]
fn test_api_error_accessors() {
    let err = api_error(422, "Validation Failed");

    assert_eq!(err.status(), Some(422));
    assert_eq!(err.messages(), vec!["Validation Failed".to_string()]);
    assert!(!err.is_not_found());
    assert!(GitHubError::NotFound("alice/ghost".to_string()).is_not_found());
}
