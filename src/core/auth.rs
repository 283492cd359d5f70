//! Credentials for the two remote platforms.
//!
//! Tokens are wiped from memory on drop and never printed by `Debug`.

use std::process::{Command, Stdio};

use tracing::debug;
use zeroize::Zeroizing;

use crate::core::constants;
use crate::error::{AuthError, Result};

/// An OAuth bearer token.
#[derive(Clone)]
pub struct BearerToken(Zeroizing<String>);

impl BearerToken {
    pub fn new(token: impl Into<String>) -> Self {
        Self(Zeroizing::new(token.into()))
    }

    /// Raw token for an `Authorization` header.
    pub fn expose(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Debug for BearerToken {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str("BearerToken(***)")
    }
}

/// Read the GitHub token from `GITHUB_BEARER_TOKEN`.
///
/// # Errors
///
/// Returns `AuthError::MissingToken` if the variable is unset or empty.
pub fn github_token() -> Result<BearerToken> {
    token_from_env(constants::GITHUB_TOKEN_ENV)
        .ok_or_else(|| {
            AuthError::MissingToken {
                var: constants::GITHUB_TOKEN_ENV,
            }
            .into()
        })
}

/// Obtain a Google Cloud access token.
///
/// Uses `GHSTAGE_GCP_TOKEN` when set, otherwise asks the `gcloud` CLI.
///
/// # Errors
///
/// Returns `AuthError::Gcloud` if gcloud is missing or fails.
pub fn gcp_token() -> Result<BearerToken> {
    if let Some(token) = token_from_env(constants::GCP_TOKEN_ENV) {
        debug!("using Google Cloud token from environment");
        return Ok(token);
    }

    which::which("gcloud").map_err(|_| {
        AuthError::Gcloud(
            "gcloud CLI not found. Install it from https://cloud.google.com/sdk/docs/install"
                .to_string(),
        )
    })?;

    debug!("requesting Google Cloud token from gcloud");
    let output = Command::new("gcloud")
        .args(["auth", "print-access-token"])
        .stdin(Stdio::null())
        .output()
        .map_err(|e| AuthError::Gcloud(format!("failed to spawn gcloud: {}", e)))?;

    if !output.status.success() {
        let stderr = String::from_utf8_lossy(&output.stderr);
        return Err(AuthError::Gcloud(stderr.trim().to_string()).into());
    }

    let token = String::from_utf8_lossy(&output.stdout).trim().to_string();
    if token.is_empty() {
        return Err(AuthError::Gcloud("gcloud returned an empty token".to_string()).into());
    }
    Ok(BearerToken::new(token))
}

fn token_from_env(var: &str) -> Option<BearerToken> {
    std::env::var(var)
        .ok()
        .filter(|v| !v.trim().is_empty())
        .map(|v| BearerToken::new(v.trim()))
}

/// Setup instructions printed when the GitHub token is missing.
pub fn github_token_help() -> &'static str {
    concat!(
        "This requires GITHUB_BEARER_TOKEN to be set. The easiest way to obtain a token\n",
        "is to install the GitHub CLI and run:\n",
        "\n",
        "  gh auth login\n",
        "  export GITHUB_BEARER_TOKEN=$(gh auth token)",
    )
}
