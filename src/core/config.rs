//! Configuration loading.
//!
//! Settings come from, highest precedence first: CLI flags (applied by the
//! verbs), environment variables, an optional `.ghstage.toml`, and defaults.
//! The resolved [`Config`] is built once and handed to client constructors.

use serde::Deserialize;
use std::path::{Path, PathBuf};
use tracing::debug;

use crate::core::constants;
use crate::error::{ConfigError, Result};

/// On-disk configuration file. Every field is optional.
#[derive(Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct FileConfig {
    #[serde(default)]
    pub github: GitHubSection,
    #[serde(default)]
    pub gcp: GcpSection,
}

/// `[github]` section.
#[derive(Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct GitHubSection {
    pub repo: Option<String>,
    pub api_url: Option<String>,
    pub workflow: Option<String>,
    #[serde(rename = "ref")]
    pub git_ref: Option<String>,
}

/// `[gcp]` section.
#[derive(Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct GcpSection {
    pub resource_manager_url: Option<String>,
    pub dns_url: Option<String>,
    pub dns_zone: Option<String>,
}

/// Resolved GitHub settings.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GitHubSettings {
    pub api_url: String,
    /// Default repository when `--repo` is not given.
    pub repo: Option<String>,
    pub workflow: String,
    pub git_ref: String,
}

/// Resolved Google Cloud settings.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GcpSettings {
    pub resource_manager_url: String,
    pub dns_url: String,
    pub dns_zone: String,
}

/// Process-wide configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    pub github: GitHubSettings,
    pub gcp: GcpSettings,
}

impl Config {
    /// Load configuration from the file system and process environment.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::Read` or `ConfigError::Parse` if a config file
    /// exists but cannot be read or parsed.
    pub fn load() -> Result<Self> {
        let file = match Self::config_path() {
            Some(path) => Some(Self::read_file(&path)?),
            None => None,
        };
        Ok(Self::from_sources(file, |key| std::env::var(key).ok()))
    }

    /// Resolve settings from an optional file and an environment lookup.
    pub fn from_sources<F>(file: Option<FileConfig>, env: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let file = file.unwrap_or_default();

        let github = GitHubSettings {
            api_url: env(constants::GITHUB_API_URL_ENV)
                .or(file.github.api_url)
                .unwrap_or_else(|| constants::GITHUB_API_URL.to_string()),
            repo: file.github.repo,
            workflow: file
                .github
                .workflow
                .unwrap_or_else(|| constants::DEFAULT_WORKFLOW.to_string()),
            git_ref: file
                .github
                .git_ref
                .unwrap_or_else(|| constants::DEFAULT_REF.to_string()),
        };

        let gcp = GcpSettings {
            resource_manager_url: env(constants::RESOURCE_MANAGER_URL_ENV)
                .or(file.gcp.resource_manager_url)
                .unwrap_or_else(|| constants::RESOURCE_MANAGER_URL.to_string()),
            dns_url: env(constants::DNS_URL_ENV)
                .or(file.gcp.dns_url)
                .unwrap_or_else(|| constants::DNS_URL.to_string()),
            dns_zone: file
                .gcp
                .dns_zone
                .unwrap_or_else(|| constants::DNS_ZONE.to_string()),
        };

        Self { github, gcp }
    }

    /// Locate the configuration file, if any.
    ///
    /// `GHSTAGE_CONFIG` wins, then `.ghstage.toml` in the working directory,
    /// then `ghstage/config.toml` under the user config directory.
    pub fn config_path() -> Option<PathBuf> {
        if let Ok(path) = std::env::var(constants::CONFIG_ENV) {
            return Some(PathBuf::from(path));
        }

        let local = PathBuf::from(constants::CONFIG_FILE);
        if local.exists() {
            return Some(local);
        }

        dirs::config_dir()
            .map(|dir| dir.join("ghstage").join("config.toml"))
            .filter(|path| path.exists())
    }

    fn read_file(path: &Path) -> Result<FileConfig> {
        debug!(path = %path.display(), "loading config");

        let contents = std::fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.display().to_string(),
            source,
        })?;

        let file = toml::from_str(&contents).map_err(|source| ConfigError::Parse {
            path: path.display().to_string(),
            source,
        })?;

        Ok(file)
    }
}

impl Default for Config {
    fn default() -> Self {
        Self::from_sources(None, |_| None)
    }
}
