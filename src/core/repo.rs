//! Repository auto-detection from local git remotes.

use std::process::{Command, Stdio};

use tracing::debug;

use crate::core::types::RepoSlug;
use crate::error::{RepoError, Result};

const SSH_PREFIX: &str = "git@github.com:";
const HTTPS_PREFIX: &str = "https://github.com/";

/// Find the `<org>/<repo>` of the `origin` remote in the working directory.
///
/// # Errors
///
/// Returns `RepoError::Git` if git cannot be run here, or
/// `RepoError::NoOrigin` if no `origin` remote points at github.com.
pub fn detect() -> Result<RepoSlug> {
    let output = Command::new("git")
        .args(["remote", "-v"])
        .stdin(Stdio::null())
        .output()
        .map_err(|e| RepoError::Git(format!("failed to run git: {}", e)))?;

    if !output.status.success() {
        let stderr = String::from_utf8_lossy(&output.stderr);
        return Err(RepoError::Git(stderr.trim().to_string()).into());
    }

    let remotes = String::from_utf8_lossy(&output.stdout);
    let repo = parse_origin(&remotes).ok_or(RepoError::NoOrigin)?;
    debug!(repo = %repo, "detected repo from origin remote");
    Ok(repo)
}

/// Extract the repo slug from `git remote -v` output.
///
/// An SSH origin (`git@github.com:<org>/<repo>.git`) is preferred over an
/// HTTPS one; other remotes and hosts are ignored.
pub fn parse_origin(remotes: &str) -> Option<RepoSlug> {
    let origins: Vec<&str> = remotes
        .lines()
        .filter_map(|line| {
            let mut fields = line.split_whitespace();
            match (fields.next(), fields.next()) {
                (Some("origin"), Some(url)) => Some(url),
                _ => None,
            }
        })
        .collect();

    origins
        .iter()
        .find_map(|url| url.strip_prefix(SSH_PREFIX))
        .or_else(|| origins.iter().find_map(|url| url.strip_prefix(HTTPS_PREFIX)))
        .map(|path| path.strip_suffix(".git").unwrap_or(path).to_string())
        .filter(|slug| slug.split('/').count() == 2 && !slug.contains(char::is_whitespace))
}
