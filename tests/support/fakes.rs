//! In-memory stand-ins for GitHub and Google Cloud.
//!
//! Both fakes record every call so tests can assert on the exact sequence of
//! remote operations.

use std::cell::RefCell;
use std::collections::HashMap;

use ghstage::core::domain::{Scope, Variables};
use ghstage::core::gcp::{CloudProjects, Project, ResourceRecordSet};
use ghstage::core::github::{Environment, GitHub};
use ghstage::error::{ApiError, Result};

/// One remote call observed by a fake.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Call {
    ListVariables(Scope),
    CreateVariable(Scope, String, String),
    UpdateVariable(Scope, String, String),
    ListEnvironments,
    PutEnvironment(String),
    Dispatch {
        workflow: String,
        git_ref: String,
        inputs: Variables,
    },
    SearchProjects,
    ListRecordSets(String, String),
}

impl Call {
    /// True for calls that change remote state.
    pub fn is_write(&self) -> bool {
        matches!(
            self,
            Self::CreateVariable(..)
                | Self::UpdateVariable(..)
                | Self::PutEnvironment(_)
                | Self::Dispatch { .. }
        )
    }
}

/// GitHub repository held in memory.
pub struct FakeGitHub {
    pub variables: RefCell<HashMap<Scope, Variables>>,
    pub environments: Vec<Environment>,
    /// Status answered to a dispatch; `Err` makes the call fail with that status.
    pub dispatch_status: std::result::Result<u16, u16>,
    pub calls: RefCell<Vec<Call>>,
}

impl Default for FakeGitHub {
    fn default() -> Self {
        Self {
            variables: RefCell::new(HashMap::new()),
            environments: Vec::new(),
            dispatch_status: Ok(204),
            calls: RefCell::new(Vec::new()),
        }
    }
}

impl FakeGitHub {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_variables(self, scope: Scope, pairs: &[(&str, &str)]) -> Self {
        self.variables
            .borrow_mut()
            .insert(scope, pairs.iter().copied().collect());
        self
    }

    pub fn with_environments(mut self, environments: Vec<Environment>) -> Self {
        self.environments = environments;
        self
    }

    pub fn with_dispatch_status(mut self, status: std::result::Result<u16, u16>) -> Self {
        self.dispatch_status = status;
        self
    }

    pub fn calls(&self) -> Vec<Call> {
        self.calls.borrow().clone()
    }

    pub fn writes(&self) -> Vec<Call> {
        self.calls().into_iter().filter(Call::is_write).collect()
    }

    /// Current variables of a scope.
    pub fn scope(&self, scope: &Scope) -> Variables {
        self.variables
            .borrow()
            .get(scope)
            .cloned()
            .unwrap_or_default()
    }

    fn record(&self, call: Call) {
        self.calls.borrow_mut().push(call);
    }

    fn store(&self, scope: &Scope, name: &str, value: &str) {
        self.variables
            .borrow_mut()
            .entry(scope.clone())
            .or_default()
            .insert(name, value);
    }
}

impl GitHub for FakeGitHub {
    fn list_variables(&self, scope: &Scope) -> Result<Variables> {
        self.record(Call::ListVariables(scope.clone()));
        Ok(self.scope(scope))
    }

    fn create_variable(&self, scope: &Scope, name: &str, value: &str) -> Result<()> {
        self.record(Call::CreateVariable(
            scope.clone(),
            name.to_string(),
            value.to_string(),
        ));
        self.store(scope, name, value);
        Ok(())
    }

    fn update_variable(&self, scope: &Scope, name: &str, value: &str) -> Result<()> {
        self.record(Call::UpdateVariable(
            scope.clone(),
            name.to_string(),
            value.to_string(),
        ));
        self.store(scope, name, value);
        Ok(())
    }

    fn list_environments(&self) -> Result<Vec<Environment>> {
        self.record(Call::ListEnvironments);
        Ok(self.environments.clone())
    }

    fn put_environment(&self, name: &str) -> Result<()> {
        self.record(Call::PutEnvironment(name.to_string()));
        Ok(())
    }

    fn dispatch_workflow(&self, workflow: &str, git_ref: &str, inputs: &Variables) -> Result<u16> {
        self.record(Call::Dispatch {
            workflow: workflow.to_string(),
            git_ref: git_ref.to_string(),
            inputs: inputs.clone(),
        });
        match self.dispatch_status {
            Ok(status) => Ok(status),
            Err(status) => Err(ApiError::Status {
                service: "github",
                method: "POST".to_string(),
                url: format!("fake://dispatches/{}", workflow),
                status,
                body: "{\"message\":\"rejected\"}".to_string(),
            }
            .into()),
        }
    }
}

/// Google Cloud organisation held in memory.
#[derive(Default)]
pub struct FakeCloud {
    pub projects: Vec<Project>,
    pub records: HashMap<String, Vec<ResourceRecordSet>>,
    pub calls: RefCell<Vec<Call>>,
}

impl FakeCloud {
    pub fn new(projects: Vec<Project>) -> Self {
        Self {
            projects,
            ..Self::default()
        }
    }

    pub fn with_records(mut self, project_id: &str, records: Vec<ResourceRecordSet>) -> Self {
        self.records.insert(project_id.to_string(), records);
        self
    }

    pub fn calls(&self) -> Vec<Call> {
        self.calls.borrow().clone()
    }
}

impl CloudProjects for FakeCloud {
    fn search_projects(&self) -> Result<Vec<Project>> {
        self.calls.borrow_mut().push(Call::SearchProjects);
        Ok(self.projects.clone())
    }

    fn list_record_sets(&self, project_id: &str, zone: &str) -> Result<Vec<ResourceRecordSet>> {
        self.calls
            .borrow_mut()
            .push(Call::ListRecordSets(project_id.to_string(), zone.to_string()));
        Ok(self.records.get(project_id).cloned().unwrap_or_default())
    }
}
