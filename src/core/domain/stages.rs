//! ActiveStages type.
//!
//! Inverts the `STAGE_*` repository variables into shortname → stages.

use std::collections::BTreeMap;

use tracing::{debug, warn};

use crate::core::domain::{StageMatrix, Variables};
use crate::core::types::{Shortname, StageName};

/// Stages each shortname currently belongs to.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ActiveStages(BTreeMap<Shortname, Vec<StageName>>);

impl ActiveStages {
    /// Derive stage membership from repository variables.
    ///
    /// Only keys prefixed `STAGE_` are considered; the stage name is the rest
    /// of the key, lower-cased. Values that are not a stage matrix are skipped
    /// with a warning, and entries without `deploy_env` are ignored.
    pub fn from_variables(vars: &Variables) -> Self {
        let mut stages: BTreeMap<Shortname, Vec<StageName>> = BTreeMap::new();

        for (key, value) in vars.iter() {
            let Some(stage) = StageMatrix::stage_from_key(key) else {
                continue;
            };

            let matrix = match StageMatrix::decode(value) {
                Ok(matrix) => matrix,
                Err(e) => {
                    warn!(key, error = %e, "skipping malformed stage matrix");
                    continue;
                }
            };

            for shortname in matrix.shortnames() {
                stages
                    .entry(shortname.to_string())
                    .or_default()
                    .push(stage.clone());
            }
        }

        debug!(shortnames = stages.len(), "resolved active stages");
        Self(stages)
    }

    /// Stages of a shortname, in variable-key order.
    pub fn get(&self, shortname: &str) -> &[StageName] {
        self.0.get(shortname).map(Vec::as_slice).unwrap_or(&[])
    }

    /// Comma-joined stages, or `-` when the shortname has none.
    pub fn label(&self, shortname: &str) -> String {
        let stages = self.get(shortname);
        if stages.is_empty() {
            "-".to_string()
        } else {
            stages.join(",")
        }
    }

    pub fn as_map(&self) -> &BTreeMap<Shortname, Vec<StageName>> {
        &self.0
    }
}
