//! EnvSpec type.
//!
//! A `<stage>=<env>,<env>,...` token as typed on the command line.

use std::str::FromStr;

use crate::core::types::{Shortname, StageName};
use crate::error::SpecError;

/// A parsed stage/environment token.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EnvSpec {
    stage: Option<StageName>,
    envs: String,
}

impl EnvSpec {
    /// Parse a token.
    ///
    /// No `=` yields a stage-less spec, one `=` splits stage from envs.
    ///
    /// # Errors
    ///
    /// Returns `SpecError::Format` if the token contains more than one `=`.
    pub fn parse(token: &str) -> Result<Self, SpecError> {
        let mut parts = token.split('=');
        let first = parts.next().unwrap_or_default();
        match (parts.next(), parts.next()) {
            (None, _) => Ok(Self {
                stage: None,
                envs: first.to_string(),
            }),
            (Some(envs), None) => Ok(Self {
                stage: Some(first.to_string()),
                envs: envs.to_string(),
            }),
            (Some(_), Some(_)) => Err(SpecError::Format(token.to_string())),
        }
    }

    /// Stage name, if one was given.
    pub fn stage(&self) -> Option<&str> {
        self.stage.as_deref()
    }

    /// The raw comma-separated envs side.
    pub fn envs(&self) -> &str {
        &self.envs
    }

    /// Shortnames in the order given. Duplicates are kept.
    pub fn shortnames(&self) -> Vec<Shortname> {
        self.envs.split(',').map(str::to_string).collect()
    }

    /// Whether `shortname` is one of the requested envs.
    pub fn contains(&self, shortname: &str) -> bool {
        self.envs.split(',').any(|s| s == shortname)
    }
}

impl FromStr for EnvSpec {
    type Err = SpecError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl std::fmt::Display for EnvSpec {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match &self.stage {
            Some(stage) => write!(f, "{}={}", stage, self.envs),
            None => write!(f, "{}", self.envs),
        }
    }
}
