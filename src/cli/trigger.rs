//! Trigger command - dispatch a workflow with stage matrix inputs.

use crate::cli::{context, output};
use crate::core::config::Config;
use crate::core::dispatch::{self, DispatchOutcome};
use crate::core::domain::EnvSpec;
use crate::error::Result;

/// Dispatch `workflow` at `git_ref` with one input per stage.
///
/// A rejected dispatch is printed and does not fail the command.
pub fn execute(
    config: &Config,
    specs: &[EnvSpec],
    repo: Option<String>,
    workflow: Option<String>,
    git_ref: Option<String>,
) -> Result<()> {
    let workflow = workflow.unwrap_or_else(|| config.github.workflow.clone());
    let git_ref = git_ref.unwrap_or_else(|| config.github.git_ref.clone());

    let github = context::github(repo, config)?;
    let inputs = dispatch::build_inputs(specs);

    println!(
        "triggering {} on {} ({})",
        workflow,
        git_ref,
        serde_json::to_string(inputs.as_map())?
    );

    match dispatch::trigger(&github, &workflow, &git_ref, &inputs)? {
        DispatchOutcome::Triggered => {
            output::success(&format!("triggered {} on {}", workflow, git_ref));
        }
        DispatchOutcome::Rejected { reason, .. } => {
            output::error(&format!("failed to trigger {}: {}", workflow, reason));
        }
    }

    Ok(())
}
