//! Environment and project directories (the `show` and `list` verbs).
//!
//! Fetches are kept apart from row building so the report shape can be
//! checked without a remote.

use std::collections::BTreeMap;

use tracing::debug;

use crate::core::constants::{BASE_DOMAIN, DPLATFORM, PROJECT_ID, PROJECT_NUMBER, UNKNOWN};
use crate::core::domain::{ActiveStages, Scope, Variables};
use crate::core::gcp::{CloudProjects, Project};
use crate::core::github::{Environment, GitHub};
use crate::core::types::Shortname;
use crate::error::Result;

/// One row of the environment report.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EnvironmentRow {
    pub shortname: Shortname,
    /// Comma-joined stages, or `-`.
    pub stages: String,
    pub project_id: String,
    pub project_number: String,
    pub dplatform: String,
    pub base_domain: String,
}

/// One row of the protection report.
///
/// `shortname`, `protected` and `self_review` are blank on every row after
/// the first of an environment.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReviewerRow {
    pub shortname: String,
    /// `Y` if the environment has protection rules, `N` otherwise.
    pub protected: String,
    /// `Y` if reviewers may approve their own runs.
    pub self_review: String,
    pub reviewer: String,
}

/// One row of the project listing.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProjectRow {
    pub shortname: String,
    pub project_id: String,
    pub project_number: String,
    pub env: String,
}

/// Snapshot of a repository's environments, stages and variables.
#[derive(Debug, Default)]
pub struct Directory {
    environments: BTreeMap<Shortname, Environment>,
    stages: ActiveStages,
    variables: BTreeMap<Shortname, Variables>,
}

impl Directory {
    /// Fetch everything the report needs.
    ///
    /// One request for environments, one for repository variables, then one
    /// per environment for its variables.
    pub fn fetch(github: &dyn GitHub) -> Result<Self> {
        let environments: BTreeMap<_, _> = github
            .list_environments()?
            .into_iter()
            .map(|e| (e.name.clone(), e))
            .collect();

        let stages = get_active_stages(github)?;

        let mut variables = BTreeMap::new();
        for name in environments.keys() {
            let vars = github.list_variables(&Scope::Environment(name.clone()))?;
            variables.insert(name.clone(), vars);
        }

        debug!(environments = environments.len(), "directory fetched");
        Ok(Self::from_parts(environments.into_values().collect(), stages, variables))
    }

    /// Assemble a directory from already-fetched parts.
    pub fn from_parts(
        environments: Vec<Environment>,
        stages: ActiveStages,
        variables: BTreeMap<Shortname, Variables>,
    ) -> Self {
        Self {
            environments: environments
                .into_iter()
                .map(|e| (e.name.clone(), e))
                .collect(),
            stages,
            variables,
        }
    }

    /// One row per environment, sorted by shortname.
    pub fn environment_rows(&self) -> Vec<EnvironmentRow> {
        let empty = Variables::new();
        self.environments
            .keys()
            .map(|name| {
                let vars = self.variables.get(name).unwrap_or(&empty);
                EnvironmentRow {
                    shortname: name.clone(),
                    stages: self.stages.label(name),
                    project_id: vars.get_or(PROJECT_ID, UNKNOWN).to_string(),
                    project_number: vars.get_or(PROJECT_NUMBER, UNKNOWN).to_string(),
                    dplatform: vars.get_or(DPLATFORM, UNKNOWN).to_string(),
                    base_domain: vars.get_or(BASE_DOMAIN, UNKNOWN).to_string(),
                }
            })
            .collect()
    }

    /// One row per (environment, reviewer), sorted by shortname.
    ///
    /// Unprotected environments get a single `N - -` row; a protected
    /// environment without reviewers gets a single row with reviewer `-`.
    pub fn reviewer_rows(&self) -> Vec<ReviewerRow> {
        let mut rows = Vec::new();

        for (name, env) in &self.environments {
            let Some(rule) = env.reviewer_rule() else {
                rows.push(ReviewerRow {
                    shortname: name.clone(),
                    protected: "N".to_string(),
                    self_review: "-".to_string(),
                    reviewer: "-".to_string(),
                });
                continue;
            };

            let self_review = if rule.prevent_self_review { "N" } else { "Y" };
            let mut logins: Vec<String> = rule
                .reviewers
                .iter()
                .map(|r| r.login().unwrap_or(UNKNOWN).to_string())
                .collect();
            if logins.is_empty() {
                logins.push("-".to_string());
            }

            for (i, login) in logins.into_iter().enumerate() {
                let first = i == 0;
                rows.push(ReviewerRow {
                    shortname: if first { name.clone() } else { String::new() },
                    protected: if first { "Y".to_string() } else { String::new() },
                    self_review: if first {
                        self_review.to_string()
                    } else {
                        String::new()
                    },
                    reviewer: login,
                });
            }
        }

        rows
    }

    pub fn is_empty(&self) -> bool {
        self.environments.is_empty()
    }
}

/// Stage membership derived from the repository's `STAGE_*` variables.
pub fn get_active_stages(github: &dyn GitHub) -> Result<ActiveStages> {
    let vars = github.list_variables(&Scope::Repository)?;
    Ok(ActiveStages::from_variables(&vars))
}

/// Fetch projects labelled with a shortname and build listing rows.
pub fn list_projects(cloud: &dyn CloudProjects) -> Result<Vec<ProjectRow>> {
    Ok(project_rows(&cloud.search_projects()?))
}

/// Listing rows for projects carrying a `shortname` label, sorted by it.
pub fn project_rows(projects: &[Project]) -> Vec<ProjectRow> {
    let mut rows: Vec<_> = projects
        .iter()
        .filter_map(|p| {
            let shortname = p.shortname()?;
            Some(ProjectRow {
                shortname: shortname.to_string(),
                project_id: p.project_id.clone(),
                project_number: p.number().unwrap_or("-").to_string(),
                env: p.env().unwrap_or("-").to_string(),
            })
        })
        .collect();
    rows.sort_by(|a, b| {
        a.shortname
            .cmp(&b.shortname)
            .then_with(|| a.project_id.cmp(&b.project_id))
    });
    rows
}
