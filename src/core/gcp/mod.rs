//! Google Cloud project and DNS lookups.
//!
//! Read-only: ghstage never writes to Google Cloud.

mod client;
pub mod model;

pub use client::GcpClient;
pub use model::{Project, ResourceRecordSet};

use crate::error::Result;

/// Project metadata ghstage reads from Google Cloud.
pub trait CloudProjects {
    /// Projects carrying a `shortname` label.
    fn search_projects(&self) -> Result<Vec<Project>>;

    /// Resource-record sets of a managed zone.
    fn list_record_sets(&self, project_id: &str, zone: &str) -> Result<Vec<ResourceRecordSet>>;
}
