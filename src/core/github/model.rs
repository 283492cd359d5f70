//! GitHub REST response shapes.
//!
//! Only the fields ghstage reads are modelled; unknown fields are ignored.

use serde::{Deserialize, Serialize};

/// `GET /repos/{owner}/{repo}`
#[derive(Debug, Clone, Deserialize)]
pub struct Repository {
    pub id: u64,
}

/// A single Actions variable.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Variable {
    pub name: String,
    pub value: String,
}

/// One page of `GET .../variables`.
#[derive(Debug, Clone, Deserialize)]
pub struct VariablePage {
    #[serde(default)]
    pub total_count: usize,
    #[serde(default)]
    pub variables: Vec<Variable>,
}

/// A deployment environment.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct Environment {
    pub name: String,
    #[serde(default)]
    pub protection_rules: Vec<ProtectionRule>,
}

impl Environment {
    /// The rule carrying reviewer requirements, if any.
    ///
    /// Falls back to the first rule when none is of type `required_reviewers`.
    pub fn reviewer_rule(&self) -> Option<&ProtectionRule> {
        self.protection_rules
            .iter()
            .find(|r| r.kind == "required_reviewers")
            .or_else(|| self.protection_rules.first())
    }
}

/// One page of `GET /repositories/{id}/environments`.
#[derive(Debug, Clone, Deserialize)]
pub struct EnvironmentPage {
    #[serde(default)]
    pub total_count: usize,
    #[serde(default)]
    pub environments: Vec<Environment>,
}

/// An environment protection rule.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct ProtectionRule {
    #[serde(rename = "type", default)]
    pub kind: String,
    #[serde(default)]
    pub prevent_self_review: bool,
    #[serde(default)]
    pub reviewers: Vec<Reviewer>,
}

/// A required reviewer entry.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct Reviewer {
    #[serde(rename = "type", default)]
    pub kind: String,
    #[serde(default)]
    pub reviewer: Option<ReviewerIdentity>,
}

/// User or team behind a reviewer entry.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct ReviewerIdentity {
    #[serde(default)]
    pub login: Option<String>,
    #[serde(default)]
    pub slug: Option<String>,
}

impl Reviewer {
    /// Login of a user reviewer, or slug of a team reviewer.
    pub fn login(&self) -> Option<&str> {
        let identity = self.reviewer.as_ref()?;
        identity.login.as_deref().or(identity.slug.as_deref())
    }
}

/// Body of `POST .../dispatches`.
#[derive(Debug, Clone, Serialize)]
pub struct DispatchRequest<'a> {
    #[serde(rename = "ref")]
    pub git_ref: &'a str,
    pub inputs: &'a std::collections::BTreeMap<String, String>,
}
