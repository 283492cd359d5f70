//! Variable reconciliation.
//!
//! Every desired key is written on every run: absent keys are created and
//! present keys are updated, whatever their current value. Drift is corrected
//! without ever comparing values.

use std::io::Write;

use tracing::debug;

use crate::core::constants::SCOPE_SEPARATOR;
use crate::core::domain::{Scope, Variables};
use crate::core::github::GitHub;
use crate::core::types::{VariableName, VariableValue};
use crate::error::Result;

/// Whether remote state may be changed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Mode {
    /// Issue create/update calls.
    Apply,
    /// Print what would be written and touch nothing.
    ShowOnly,
}

impl Mode {
    pub fn from_show_only(show_only: bool) -> Self {
        if show_only {
            Self::ShowOnly
        } else {
            Self::Apply
        }
    }

    pub fn is_show_only(&self) -> bool {
        matches!(self, Self::ShowOnly)
    }
}

/// A single write against a variable scope.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum VariableAction {
    Create {
        name: VariableName,
        value: VariableValue,
    },
    Update {
        name: VariableName,
        value: VariableValue,
    },
}

impl VariableAction {
    pub fn name(&self) -> &str {
        match self {
            Self::Create { name, .. } | Self::Update { name, .. } => name,
        }
    }

    pub fn value(&self) -> &str {
        match self {
            Self::Create { value, .. } | Self::Update { value, .. } => value,
        }
    }
}

/// Compute the writes needed to assert `desired` over `current`.
pub fn plan(desired: &Variables, current: &Variables) -> Vec<VariableAction> {
    desired
        .iter()
        .map(|(name, value)| {
            let (name, value) = (name.to_string(), value.to_string());
            if current.contains(&name) {
                VariableAction::Update { name, value }
            } else {
                VariableAction::Create { name, value }
            }
        })
        .collect()
}

/// Assert `desired` into `scope`.
///
/// In show-only mode each pair is printed as `KEY=VALUE` and no request is
/// made at all, not even the read of current values. Either way the scope
/// ends with a `---` line. Remote errors abort immediately; writes already
/// issued stay in place.
///
/// Returns the actions issued (empty in show-only mode).
pub fn reconcile(
    github: &dyn GitHub,
    scope: &Scope,
    desired: &Variables,
    mode: Mode,
    out: &mut dyn Write,
) -> Result<Vec<VariableAction>> {
    if mode.is_show_only() {
        for (name, value) in desired.iter() {
            writeln!(out, "{}={}", name, value)?;
        }
        writeln!(out, "{}", SCOPE_SEPARATOR)?;
        return Ok(Vec::new());
    }

    let current = github.list_variables(scope)?;
    let actions = plan(desired, &current);
    debug!(%scope, actions = actions.len(), "reconciling variables");

    for action in &actions {
        match action {
            VariableAction::Create { name, value } => {
                github.create_variable(scope, name, value)?
            }
            VariableAction::Update { name, value } => {
                github.update_variable(scope, name, value)?
            }
        }
    }

    writeln!(out, "{}", SCOPE_SEPARATOR)?;
    Ok(actions)
}
