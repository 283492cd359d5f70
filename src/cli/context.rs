//! Per-invocation setup shared by the GitHub-facing verbs.

use tracing::debug;

use crate::core::auth;
use crate::core::config::Config;
use crate::core::gcp::GcpClient;
use crate::core::github::GitHubClient;
use crate::core::repo;
use crate::core::types::RepoSlug;
use crate::error::Result;

/// Pick the target repository.
///
/// `--repo` (or `GHSTAGE_REPO`) wins, then `[github] repo` from the config
/// file, then the `origin` remote of the working directory.
pub fn resolve_repo(flag: Option<String>, config: &Config) -> Result<RepoSlug> {
    if let Some(repo) = flag.or_else(|| config.github.repo.clone()) {
        debug!(repo = %repo, "using configured repo");
        return Ok(repo);
    }

    let repo = repo::detect()?;
    println!("Dynamically setting repo to {}", repo);
    Ok(repo)
}

/// Authenticate and bind a GitHub client to the resolved repository.
///
/// The token is checked before the repository is resolved so a missing
/// credential is reported first.
pub fn github(flag: Option<String>, config: &Config) -> Result<GitHubClient> {
    let token = auth::github_token()?;
    let repo = resolve_repo(flag, config)?;
    GitHubClient::connect(&config.github, token, &repo)
}

/// Authenticate a Google Cloud client.
pub fn gcp(config: &Config) -> Result<GcpClient> {
    let token = auth::gcp_token()?;
    GcpClient::new(&config.gcp, token)
}
