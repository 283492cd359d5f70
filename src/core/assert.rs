//! Environment assertion (the `set` verb).
//!
//! For each Google Cloud project whose shortname is requested, ensure the
//! GitHub environment exists and carries the project's well-known variables.
//! When a stage is named, the stage matrix is then written to the repository.

use std::collections::BTreeSet;
use std::io::Write;

use tracing::{debug, info, warn};

use crate::core::constants::{
    BASE_DOMAIN, DPLATFORM, PROJECT_ID, PROJECT_NUMBER, UNDEFINED_BASE_DOMAIN, UNDEFINED_ENV,
    UNDEFINED_SHORTNAME,
};
use crate::core::domain::{EnvSpec, Scope, StageMatrix, Variables};
use crate::core::gcp::{CloudProjects, Project, ResourceRecordSet};
use crate::core::github::GitHub;
use crate::core::reconcile::{self, Mode, VariableAction};
use crate::core::types::{Shortname, VariableName};
use crate::error::{ApiError, Result};

/// What one `<stage>=<envs>` assertion did.
#[derive(Debug, Default)]
pub struct AssertReport {
    /// Environments asserted, in project order.
    pub environments: Vec<Shortname>,
    /// Requested shortnames no project carries.
    pub unmatched: Vec<Shortname>,
    /// Stage variable written, if a stage was named.
    pub stage_key: Option<VariableName>,
    /// Variable writes issued across all scopes.
    pub actions: Vec<VariableAction>,
}

/// Runs assertions against one repository and the visible projects.
pub struct Asserter<'a> {
    github: &'a dyn GitHub,
    cloud: &'a dyn CloudProjects,
    dns_zone: String,
    mode: Mode,
}

impl<'a> Asserter<'a> {
    pub fn new(
        github: &'a dyn GitHub,
        cloud: &'a dyn CloudProjects,
        dns_zone: impl Into<String>,
        mode: Mode,
    ) -> Self {
        Self {
            github,
            cloud,
            dns_zone: dns_zone.into(),
            mode,
        }
    }

    /// Assert one spec.
    ///
    /// Progress lines go to `out`. A failure part-way leaves the environments
    /// already processed as modified.
    pub fn assert_stage(&self, spec: &EnvSpec, out: &mut dyn Write) -> Result<AssertReport> {
        info!(spec = %spec, show_only = self.mode.is_show_only(), "asserting stage");

        let mut report = AssertReport::default();
        let mut seen = BTreeSet::new();

        for project in self.cloud.search_projects()? {
            let shortname = project.shortname().unwrap_or(UNDEFINED_SHORTNAME);
            if !spec.contains(shortname) {
                continue;
            }
            let shortname = shortname.to_string();
            seen.insert(shortname.clone());

            // No GitHub write for a project whose variables cannot be built
            let records = self.cloud.list_record_sets(&project.project_id, &self.dns_zone)?;
            let desired = environment_variables(&project, &records)?;

            writeln!(out, "Asserting environment {}", shortname)?;
            if self.mode.is_show_only() {
                debug!(env = %shortname, "show-only: skipping environment PUT");
            } else {
                self.github.put_environment(&shortname)?;
            }

            writeln!(out, "Asserting environment specific variables for {}", shortname)?;
            let scope = Scope::Environment(shortname.clone());
            report
                .actions
                .extend(reconcile::reconcile(self.github, &scope, &desired, self.mode, out)?);

            report.environments.push(shortname);
        }

        report.unmatched = spec
            .shortnames()
            .into_iter()
            .filter(|s| !seen.contains(s))
            .collect::<BTreeSet<_>>()
            .into_iter()
            .collect();
        for shortname in &report.unmatched {
            warn!(shortname = %shortname, "no Google Cloud project carries this shortname");
        }

        let Some(stage) = spec.stage() else {
            return Ok(report);
        };

        let key = StageMatrix::variable_key(stage);
        writeln!(out, "Asserting matrix variable {}", key)?;
        let mut desired = Variables::new();
        desired.insert(key.clone(), StageMatrix::from_shortnames(spec.shortnames()).to_json());
        report.actions.extend(reconcile::reconcile(
            self.github,
            &Scope::Repository,
            &desired,
            self.mode,
            out,
        )?);
        report.stage_key = Some(key);

        Ok(report)
    }
}

/// The four variables asserted into a project's environment.
///
/// `BASE_DOMAIN` comes from the zone's SOA record; the last one wins if a
/// zone somehow lists several.
///
/// # Errors
///
/// Returns `ApiError::Decode` if the project's resource name carries no
/// numeric project number.
pub fn environment_variables(
    project: &Project,
    records: &[ResourceRecordSet],
) -> Result<Variables> {
    let number = project.number().ok_or_else(|| ApiError::Decode {
        service: "gcp",
        url: project.name.clone(),
        reason: format!("project {} has no project number", project.project_id),
    })?;

    let base_domain = records
        .iter()
        .rev()
        .find(|r| r.is_soa())
        .map(|r| r.domain().to_string())
        .unwrap_or_else(|| UNDEFINED_BASE_DOMAIN.to_string());

    let mut vars = Variables::new();
    vars.insert(PROJECT_ID, project.project_id.clone());
    vars.insert(PROJECT_NUMBER, number);
    vars.insert(DPLATFORM, project.env().unwrap_or(UNDEFINED_ENV));
    vars.insert(BASE_DOMAIN, base_domain);
    Ok(vars)
}
