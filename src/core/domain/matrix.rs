//! StageMatrix type.
//!
//! The `{"include":[{"deploy_env": ...}]}` document consumed by a GitHub
//! Actions matrix strategy, stored in `STAGE_<NAME>` repository variables.

use serde::{Deserialize, Serialize};

use crate::core::constants::STAGE_PREFIX;
use crate::core::types::{Shortname, VariableName, VariableValue};

/// One `include` entry of a stage matrix.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MatrixEntry {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub deploy_env: Option<Shortname>,
}

/// A stage matrix.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct StageMatrix {
    #[serde(default)]
    pub include: Vec<MatrixEntry>,
}

impl StageMatrix {
    /// Build a matrix with one entry per shortname, in order.
    pub fn from_shortnames<I, S>(shortnames: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<Shortname>,
    {
        Self {
            include: shortnames
                .into_iter()
                .map(|s| MatrixEntry {
                    deploy_env: Some(s.into()),
                })
                .collect(),
        }
    }

    /// Decode a matrix from a variable value.
    pub fn decode(value: &str) -> serde_json::Result<Self> {
        serde_json::from_str(value)
    }

    /// Compact JSON encoding.
    ///
    /// Field order follows the struct definition, so the same matrix always
    /// encodes to the same bytes.
    pub fn to_json(&self) -> VariableValue {
        // Serializing plain strings into a Vec cannot fail.
        serde_json::to_string(self).unwrap_or_default()
    }

    /// Shortnames of entries carrying a `deploy_env`.
    pub fn shortnames(&self) -> impl Iterator<Item = &str> {
        self.include.iter().filter_map(|e| e.deploy_env.as_deref())
    }

    /// Variable key for a stage: `STAGE_<STAGE_UPPERCASE>`.
    pub fn variable_key(stage: &str) -> VariableName {
        format!("{}{}", STAGE_PREFIX, stage.to_uppercase())
    }

    /// Stage name encoded in a variable key, lower-cased.
    ///
    /// Returns `None` for keys without the `STAGE_` prefix.
    pub fn stage_from_key(key: &str) -> Option<String> {
        key.strip_prefix(STAGE_PREFIX).map(str::to_lowercase)
    }
}
