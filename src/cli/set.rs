//! Set command - assert environments, variables and stage matrices.

use std::io::Write;

use tracing::info;

use crate::cli::{context, output};
use crate::core::assert::Asserter;
use crate::core::config::Config;
use crate::core::domain::EnvSpec;
use crate::core::reconcile::Mode;
use crate::error::Result;

/// Assert every spec in order. The first failure stops the run.
pub fn execute(
    config: &Config,
    specs: &[EnvSpec],
    repo: Option<String>,
    show_only: bool,
) -> Result<()> {
    let github = context::github(repo, config)?;
    let gcp = context::gcp(config)?;
    let mode = Mode::from_show_only(show_only);
    info!(repo = github.repo(), specs = specs.len(), show_only, "asserting environments");

    let asserter = Asserter::new(&github, &gcp, config.gcp.dns_zone.as_str(), mode);
    let stdout = std::io::stdout();
    let mut out = stdout.lock();

    for spec in specs {
        let report = asserter.assert_stage(spec, &mut out)?;
        out.flush()?;

        for shortname in &report.unmatched {
            output::warn(&format!("no project labelled shortname={}", shortname));
        }
        if mode.is_show_only() {
            continue;
        }
        match &report.stage_key {
            Some(key) => output::success(&format!(
                "{} environment(s) asserted, {} updated",
                report.environments.len(),
                output::key(key)
            )),
            None => output::success(&format!(
                "{} environment(s) asserted",
                report.environments.len()
            )),
        }
    }

    Ok(())
}
