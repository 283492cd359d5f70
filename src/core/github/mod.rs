//! GitHub Actions environments, variables, and workflow dispatch.
//!
//! [`GitHub`] is the seam between the reconciliation logic and the REST API;
//! [`GitHubClient`] is the blocking `reqwest` implementation.

mod client;
pub mod model;

pub use client::GitHubClient;
pub use model::{Environment, ProtectionRule, Reviewer, Variable};

use crate::core::domain::{Scope, Variables};
use crate::error::Result;

/// Operations ghstage performs against one GitHub repository.
pub trait GitHub {
    /// All variables of a scope.
    fn list_variables(&self, scope: &Scope) -> Result<Variables>;

    /// Create a variable that does not exist yet.
    fn create_variable(&self, scope: &Scope, name: &str, value: &str) -> Result<()>;

    /// Overwrite an existing variable.
    fn update_variable(&self, scope: &Scope, name: &str, value: &str) -> Result<()>;

    /// All environments with their protection rules.
    fn list_environments(&self) -> Result<Vec<Environment>>;

    /// Create an environment, or leave an existing one unchanged.
    fn put_environment(&self, name: &str) -> Result<()>;

    /// Dispatch a workflow run and return the HTTP status of the answer.
    fn dispatch_workflow(&self, workflow: &str, git_ref: &str, inputs: &Variables)
        -> Result<u16>;
}
