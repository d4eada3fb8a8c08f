//! GitHub API operations module
//!
//! The handful of GitHub REST calls the repository service needs, via the
//! octocrab library.

pub mod client;
pub mod error;
pub mod util;

// Re-export client types
pub use client::{GitHubClient, GitHubClientBuilder};

// Re-export error types
pub use error::{GitHubError, GitHubResult};
pub use get_me::AuthenticatedUser;
pub use util::spawn_task;

// GitHub API operations - Repositories (internal)
pub(crate) mod create_repository;
pub(crate) mod delete_repository;
pub(crate) mod fork_repository;
pub(crate) mod get_repository;

// GitHub API operations - Pull Requests (internal)
pub(crate) mod list_pull_requests;

// GitHub API operations - Users (internal)
pub(crate) mod get_me;
