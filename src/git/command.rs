//! Running the `git` binary.

use crate::git::error::{GitError, GitResult};
use log::debug;
use std::path::Path;
use tokio::process::Command;

/// Run `git <args>` inside `work_dir` and return its trimmed stdout.
///
/// `action` names the operation in error messages ("fetching", "pulling").
/// On failure the error carries stderr, or stdout when stderr is empty.
pub(crate) async fn run_git(work_dir: &Path, action: &'static str, args: &[&str]) -> GitResult<String> {
    debug!("git {} (in {})", args.join(" "), work_dir.display());

    let output = Command::new("git")
        .current_dir(work_dir)
        .args(args)
        .output()
        .await
        .map_err(|source| GitError::Spawn {
            command: args.join(" "),
            source,
        })?;

    if !output.status.success() {
        let stderr = String::from_utf8_lossy(&output.stderr).trim().to_string();
        let output = if stderr.is_empty() {
            String::from_utf8_lossy(&output.stdout).trim().to_string()
        } else {
            stderr
        };
        return Err(GitError::Command {
            action,
            command: std::iter::once("git")
                .chain(args.iter().copied())
                .map(str::to_string)
                .collect(),
            output,
        });
    }

    Ok(String::from_utf8_lossy(&output.stdout).trim().to_string())
}
