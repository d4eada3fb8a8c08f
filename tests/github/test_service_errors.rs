//! Classification of the errors octocrab reports for real GitHub answers.

use super::mock_api::{MockApi, github_error, repository, route};
use futures::StreamExt;
use gitrepo_github::{ErrorKind, GitHubError, ServiceError};
use serde_json::json;
use std::error::Error as _;

const NAME_TAKEN: &str = "name already exists on this account";

fn me() -> super::mock_api::Route {
    route("GET", "/user", 200, json!({ "login": "alice", "name": "Alice" }))
}

fn provider_cause(err: &ServiceError) -> &GitHubError {
    err.source()
        .and_then(|source| source.downcast_ref::<GitHubError>())
        .expect("classified error keeps the GitHub error as its source")
}

#[tokio::test]
async fn test_validation_details_are_read_from_errors() {
    let api = MockApi::serve(vec![route(
        "POST",
        "/repos/guyzmo/git-repo/forks",
        400,
        github_error("Validation Failed", &[NAME_TAKEN]),
    )])
    .await;

    let err = api
        .client()
        .fork_repository("guyzmo", "git-repo")
        .await
        .unwrap()
        .unwrap_err();

    assert!(matches!(err, GitHubError::Octocrab(_)));
    assert_eq!(err.status(), Some(400));
    assert_eq!(err.messages(), vec!["Validation Failed".to_string(), NAME_TAKEN.to_string()]);
    assert!(!err.is_not_found());
}

#[tokio::test]
async fn test_missing_repository_lookup_is_none() {
    let api = MockApi::serve(vec![]).await;

    let found = api.client().get_repository("alice", "ghost").await.unwrap().unwrap();

    assert!(found.is_none());
}

#[tokio::test]
async fn test_connect_without_key_asks_for_one() {
    let api = MockApi::serve(vec![route("GET", "/user", 401, github_error("Requires authentication", &[]))]).await;
    let mut service = api.service(None);

    let err = service.connect().await.unwrap_err();

    assert_eq!(err.kind(), ErrorKind::Configuration);
    assert!(err.to_string().contains("Please configure"), "{err}");
    assert_eq!(provider_cause(&err).status(), Some(401));
}

#[tokio::test]
async fn test_connect_with_rejected_key() {
    let api = MockApi::serve(vec![route("GET", "/user", 401, github_error("Bad credentials", &[]))]).await;
    let mut service = api.service(Some("ghp_revoked"));

    let err = service.connect().await.unwrap_err();

    assert_eq!(err.kind(), ErrorKind::Configuration);
    assert!(err.to_string().contains("Check your configuration"), "{err}");
    assert_eq!(service.username(), None);
}

#[tokio::test]
async fn test_connect_records_login() {
    let api = MockApi::serve(vec![me()]).await;

    let service = api.connected().await;

    assert_eq!(service.username(), Some("alice"));
    assert_eq!(service.user().await.unwrap().as_deref(), Some("Alice"));
}

#[tokio::test]
async fn test_create_taken_name_means_exists() {
    let api = MockApi::serve(vec![
        me(),
        route(
            "POST",
            "/user/repos",
            422,
            github_error("Repository creation failed.", &[NAME_TAKEN]),
        ),
    ])
    .await;
    let service = api.connected().await;

    let err = service.create("alice", "git-repo", false).await.unwrap_err();

    assert_eq!(err.kind(), ErrorKind::ResourceExists);
    assert_eq!(err.to_string(), "Project already exists.");
    assert_eq!(provider_cause(&err).status(), Some(422));
}

#[tokio::test]
async fn test_fork_taken_name_found_only_in_details() {
    let api = MockApi::serve(vec![
        me(),
        route(
            "POST",
            "/repos/guyzmo/git-repo/forks",
            400,
            github_error("Validation Failed", &[NAME_TAKEN]),
        ),
    ])
    .await;
    let service = api.connected().await;

    let err = service.fork("guyzmo", "git-repo", "master", false).await.unwrap_err();

    assert_eq!(err.kind(), ErrorKind::ResourceExists);
}

#[tokio::test]
async fn test_fork_other_validation_failure_is_unhandled() {
    let api = MockApi::serve(vec![
        me(),
        route(
            "POST",
            "/repos/guyzmo/git-repo/forks",
            400,
            github_error("Validation Failed", &["organization is invalid"]),
        ),
    ])
    .await;
    let service = api.connected().await;

    let err = service.fork("guyzmo", "git-repo", "master", false).await.unwrap_err();

    assert_eq!(err.kind(), ErrorKind::Resource);
}

#[tokio::test]
async fn test_delete_forbidden_means_permission() {
    let api = MockApi::serve(vec![
        me(),
        route("GET", "/repos/alice/locked", 200, repository("alice", "locked")),
        route(
            "DELETE",
            "/repos/alice/locked",
            403,
            github_error("Must have admin rights to Repository.", &[]),
        ),
    ])
    .await;
    let service = api.connected().await;

    let err = service.delete("locked", None).await.unwrap_err();

    assert_eq!(err.kind(), ErrorKind::ResourcePermission);
    assert_eq!(provider_cause(&err).status(), Some(403));
}

#[tokio::test]
async fn test_delete_missing_repository() {
    let api = MockApi::serve(vec![me()]).await;
    let service = api.connected().await;

    let err = service.delete("ghost", None).await.unwrap_err();

    assert_eq!(err.kind(), ErrorKind::ResourceNotFound);
    assert_eq!(
        err.to_string(),
        "Cannot delete: repository alice/ghost does not exist."
    );
}

#[tokio::test]
async fn test_delete_vanished_between_lookup_and_delete() {
    let api = MockApi::serve(vec![
        me(),
        route("GET", "/repos/alice/gone", 200, repository("alice", "gone")),
        route("DELETE", "/repos/alice/gone", 404, github_error("Not Found", &[])),
    ])
    .await;
    let service = api.connected().await;

    let err = service.delete("gone", None).await.unwrap_err();

    assert_eq!(err.kind(), ErrorKind::ResourceNotFound);
}

#[tokio::test]
async fn test_get_repository() {
    let api = MockApi::serve(vec![
        me(),
        route("GET", "/repos/alice/git-repo", 200, repository("alice", "git-repo")),
    ])
    .await;
    let service = api.connected().await;

    let found = service.get_repository("alice", "git-repo").await.unwrap();

    assert_eq!(found.name, "git-repo");
    assert_eq!(found.full_name.as_deref(), Some("alice/git-repo"));
}

#[tokio::test]
async fn test_get_missing_repository() {
    let api = MockApi::serve(vec![me()]).await;
    let service = api.connected().await;

    let err = service.get_repository("alice", "ghost").await.unwrap_err();

    assert_eq!(err.kind(), ErrorKind::ResourceNotFound);
}

#[tokio::test]
async fn test_request_list_of_missing_repository() {
    let api = MockApi::serve(vec![me()]).await;
    let service = api.connected().await;

    let kinds: Vec<ErrorKind> = service
        .request_list("alice", "ghost")
        .map(|request| request.unwrap_err().kind())
        .collect()
        .await;

    assert_eq!(kinds, vec![ErrorKind::Provider]);
}
