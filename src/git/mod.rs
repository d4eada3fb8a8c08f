//! Local git operations module
//!
//! Remote registration, pull and fetch on the working copy.

pub(crate) mod command;
pub mod error;
pub mod remotes;

pub use error::{GitError, GitResult};
pub use remotes::GitRemotes;
