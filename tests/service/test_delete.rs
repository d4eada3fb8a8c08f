//! Tests for repository deletion and lookup.

use super::fakes::{FakeHosting, FakeRemotes, FakeRepository, connected, service};
use gitrepo_github::ErrorKind;

#[tokio::test]
async fn test_delete_defaults_to_connected_user() {
    let hosting = FakeHosting::with_repositories(&["alice/repoX"]);
    let service = connected(&hosting, &FakeRemotes::default()).await;

    service.delete("repoX", None).await.unwrap();

    assert_eq!(
        hosting.calls(),
        vec!["login", "find alice/repoX", "delete alice/repoX"]
    );
}

#[tokio::test]
async fn test_delete_explicit_user() {
    let hosting = FakeHosting::with_repositories(&["acme/tools"]);
    let service = connected(&hosting, &FakeRemotes::default()).await;

    service.delete("tools", Some("acme")).await.unwrap();

    assert!(hosting.calls().contains(&"delete acme/tools".to_string()));
}

#[tokio::test]
async fn test_delete_missing_repository_is_not_found() {
    let hosting = FakeHosting::default();
    let service = connected(&hosting, &FakeRemotes::default()).await;

    let err = service.delete("ghost", None).await.unwrap_err();

    assert_eq!(err.kind(), ErrorKind::ResourceNotFound);
    assert!(err.to_string().contains("alice/ghost"), "{err}");
    assert!(!hosting.calls().iter().any(|call| call.starts_with("delete")));
}

#[tokio::test]
async fn test_delete_refused_is_not_found() {
    let hosting = FakeHosting::with_repositories(&["alice/repoX"]);
    hosting.state().delete_refused = true;
    let service = connected(&hosting, &FakeRemotes::default()).await;

    let err = service.delete("repoX", None).await.unwrap_err();

    assert_eq!(err.kind(), ErrorKind::ResourceNotFound);
}

#[tokio::test]
async fn test_delete_forbidden_is_permission_error() {
    let hosting = FakeHosting::with_repositories(&["acme/tools"]);
    hosting.state().delete_error = Some((403, "Must have admin rights to Repository.".to_string()));
    let service = connected(&hosting, &FakeRemotes::default()).await;

    let err = service.delete("tools", Some("acme")).await.unwrap_err();

    assert_eq!(err.kind(), ErrorKind::ResourcePermission);
    assert!(std::error::Error::source(&err).is_some());
}

#[tokio::test]
async fn test_delete_other_failure_is_unhandled() {
    let hosting = FakeHosting::default();
    hosting.state().find_error = Some((502, "Bad Gateway".to_string()));
    let service = connected(&hosting, &FakeRemotes::default()).await;

    let err = service.delete("repoX", None).await.unwrap_err();

    assert_eq!(err.kind(), ErrorKind::Resource);
}

#[tokio::test]
async fn test_delete_before_connect_needs_user() {
    let hosting = FakeHosting::with_repositories(&["alice/repoX"]);
    let service = service(&hosting, &FakeRemotes::default());

    let err = service.delete("repoX", None).await.unwrap_err();

    assert_eq!(err.kind(), ErrorKind::Configuration);
    assert!(hosting.calls().is_empty());
}

#[tokio::test]
async fn test_get_repository_returns_provider_object() {
    let hosting = FakeHosting::with_repositories(&["alice/repoX"]);
    let service = connected(&hosting, &FakeRemotes::default()).await;

    let repository = service.get_repository("alice", "repoX").await.unwrap();

    assert_eq!(
        repository,
        FakeRepository {
            full_name: "alice/repoX".to_string()
        }
    );
}

#[tokio::test]
async fn test_get_repository_missing_is_not_found() {
    let hosting = FakeHosting::default();
    let service = connected(&hosting, &FakeRemotes::default()).await;

    let err = service.get_repository("alice", "ghost").await.unwrap_err();

    assert_eq!(err.kind(), ErrorKind::ResourceNotFound);
}
