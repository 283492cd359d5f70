//! Google Cloud REST response shapes.

use serde::Deserialize;
use std::collections::BTreeMap;

use crate::core::constants::{ENV_LABEL, SHORTNAME_LABEL};

/// A Resource Manager v3 project.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Project {
    /// Fully-qualified resource name, `projects/<number>`.
    pub name: String,
    pub project_id: String,
    #[serde(default)]
    pub labels: BTreeMap<String, String>,
    #[serde(default)]
    pub state: Option<String>,
}

impl Project {
    /// The `shortname` label.
    pub fn shortname(&self) -> Option<&str> {
        self.labels.get(SHORTNAME_LABEL).map(String::as_str)
    }

    /// The `env` label.
    pub fn env(&self) -> Option<&str> {
        self.labels.get(ENV_LABEL).map(String::as_str)
    }

    /// Project number, the numeric second `/` segment of the resource name.
    pub fn number(&self) -> Option<&str> {
        self.name
            .split('/')
            .nth(1)
            .filter(|n| !n.is_empty() && n.bytes().all(|b| b.is_ascii_digit()))
    }
}

/// One page of `projects:search`.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProjectPage {
    #[serde(default)]
    pub projects: Vec<Project>,
    #[serde(default)]
    pub next_page_token: Option<String>,
}

/// A Cloud DNS resource-record set.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct ResourceRecordSet {
    pub name: String,
    #[serde(rename = "type")]
    pub record_type: String,
    #[serde(default)]
    pub ttl: Option<u32>,
    #[serde(default)]
    pub rrdatas: Vec<String>,
}

impl ResourceRecordSet {
    pub fn is_soa(&self) -> bool {
        self.record_type == "SOA"
    }

    /// Record name without the trailing root dot.
    pub fn domain(&self) -> &str {
        self.name.trim_end_matches('.')
    }
}

/// One page of `managedZones/{zone}/rrsets`.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RecordSetPage {
    #[serde(default)]
    pub rrsets: Vec<ResourceRecordSet>,
    #[serde(default)]
    pub next_page_token: Option<String>,
}
