//! Blocking Google Cloud REST client.
//!
//! Talks to Resource Manager v3 and Cloud DNS v1 with a bearer token from
//! [`crate::core::auth::gcp_token`].

use std::collections::HashSet;

use reqwest::blocking::Client;
use reqwest::Url;
use serde::de::DeserializeOwned;
use tracing::debug;

use super::model::{Project, ProjectPage, RecordSetPage, ResourceRecordSet};
use super::CloudProjects;
use crate::core::auth::BearerToken;
use crate::core::config::GcpSettings;
use crate::core::http;
use crate::error::{ApiError, Result};

const SERVICE: &str = "gcp";

/// Filter selecting projects labelled with a shortname.
const SHORTNAME_QUERY: &str = "labels.shortname:*";

/// Google Cloud client.
#[derive(Debug)]
pub struct GcpClient {
    http: Client,
    settings: GcpSettings,
    token: BearerToken,
}

impl GcpClient {
    pub fn new(settings: &GcpSettings, token: BearerToken) -> Result<Self> {
        Ok(Self {
            http: http::client(SERVICE)?,
            settings: settings.clone(),
            token,
        })
    }

    fn get_json<T: DeserializeOwned>(&self, url: &Url) -> Result<T> {
        let req = self.http.get(url.clone()).bearer_auth(self.token.expose());
        let resp = http::send(SERVICE, "GET", url, req)?;
        http::decode(SERVICE, url, resp)
    }

    /// Follow `nextPageToken` until exhausted.
    ///
    /// An empty page ends the listing. A token already followed is an error.
    fn get_paged<P, T, F>(&self, base: &Url, split: F) -> Result<Vec<T>>
    where
        P: DeserializeOwned,
        F: Fn(P) -> (Option<String>, Vec<T>),
    {
        let mut items = Vec::new();
        let mut seen = HashSet::new();
        let mut token: Option<String> = None;

        loop {
            let mut url = base.clone();
            if let Some(t) = &token {
                url.query_pairs_mut().append_pair("pageToken", t);
            }

            let (next, batch) = split(self.get_json(&url)?);
            if batch.is_empty() {
                break;
            }
            items.extend(batch);

            let Some(next) = next.filter(|t| !t.is_empty()) else {
                break;
            };
            if !seen.insert(next.clone()) {
                return Err(ApiError::Decode {
                    service: SERVICE,
                    url: url.to_string(),
                    reason: format!("nextPageToken '{}' repeated", next),
                }
                .into());
            }
            token = Some(next);
        }

        Ok(items)
    }
}

impl CloudProjects for GcpClient {
    fn search_projects(&self) -> Result<Vec<Project>> {
        let mut url = http::join(
            SERVICE,
            &self.settings.resource_manager_url,
            ["v3", "projects:search"],
        )?;
        url.query_pairs_mut().append_pair("query", SHORTNAME_QUERY);

        let projects = self.get_paged(&url, |p: ProjectPage| (p.next_page_token, p.projects))?;
        debug!(count = projects.len(), "searched projects");
        Ok(projects)
    }

    fn list_record_sets(&self, project_id: &str, zone: &str) -> Result<Vec<ResourceRecordSet>> {
        let url = http::join(
            SERVICE,
            &self.settings.dns_url,
            [
                "dns",
                "v1",
                "projects",
                project_id,
                "managedZones",
                zone,
                "rrsets",
            ],
        )?;

        let records = self.get_paged(&url, |p: RecordSetPage| (p.next_page_token, p.rrsets))?;
        debug!(project_id, zone, count = records.len(), "listed record sets");
        Ok(records)
    }
}
