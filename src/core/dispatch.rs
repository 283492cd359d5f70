//! Workflow dispatch (the `trigger` verb).

use tracing::{error, info};

use crate::core::constants::UNSTAGED_INPUT;
use crate::core::domain::{EnvSpec, StageMatrix, Variables};
use crate::core::github::GitHub;
use crate::error::{Error, Result};

/// Result of a dispatch attempt.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DispatchOutcome {
    /// GitHub answered 204 No Content.
    Triggered,
    /// GitHub answered, or failed, with anything else.
    Rejected {
        status: Option<u16>,
        reason: String,
    },
}

impl DispatchOutcome {
    pub fn is_triggered(&self) -> bool {
        matches!(self, Self::Triggered)
    }
}

/// Merge the stage matrices of every spec into one input map.
///
/// Each spec contributes `STAGE_<NAME>`; a later spec for the same stage
/// replaces an earlier one. A spec without a stage contributes `MATRIX`.
pub fn build_inputs(specs: &[EnvSpec]) -> Variables {
    let mut inputs = Variables::new();
    for spec in specs {
        let key = spec
            .stage()
            .map(StageMatrix::variable_key)
            .unwrap_or_else(|| UNSTAGED_INPUT.to_string());
        let matrix = StageMatrix::from_shortnames(spec.shortnames());
        inputs.insert(key, matrix.to_json());
    }
    inputs
}

/// Dispatch `workflow` at `git_ref` with `inputs`.
///
/// Remote failures are logged and returned as `Rejected`; nothing is retried.
///
/// # Errors
///
/// Only non-remote failures (e.g. serialization) are returned as errors.
pub fn trigger(
    github: &dyn GitHub,
    workflow: &str,
    git_ref: &str,
    inputs: &Variables,
) -> Result<DispatchOutcome> {
    info!(workflow, git_ref, inputs = inputs.len(), "dispatching workflow");

    match github.dispatch_workflow(workflow, git_ref, inputs) {
        Ok(204) => Ok(DispatchOutcome::Triggered),
        Ok(status) => Ok(DispatchOutcome::Rejected {
            status: Some(status),
            reason: format!("unexpected HTTP {} (expected 204)", status),
        }),
        Err(Error::Api(e)) => {
            error!(error = %e, "workflow dispatch failed");
            Ok(DispatchOutcome::Rejected {
                status: e.status(),
                reason: e.to_string(),
            })
        }
        Err(e) => Err(e),
    }
}
