//! Builders for remote records used across tests.

use std::collections::BTreeMap;

use ghstage::core::gcp::{Project, ResourceRecordSet};
use serde_json::{json, Value};

/// A project labelled with `shortname` and `env`.
pub fn project(number: u64, project_id: &str, shortname: &str, env: &str) -> Project {
    let mut labels = BTreeMap::new();
    labels.insert("shortname".to_string(), shortname.to_string());
    labels.insert("env".to_string(), env.to_string());
    Project {
        name: format!("projects/{}", number),
        project_id: project_id.to_string(),
        labels,
        state: Some("ACTIVE".to_string()),
    }
}

pub fn soa(domain: &str) -> ResourceRecordSet {
    ResourceRecordSet {
        name: format!("{}.", domain),
        record_type: "SOA".to_string(),
        ttl: Some(21600),
        rrdatas: vec!["ns-cloud-a1.googledomains.com. hostmaster 1 21600 3600 259200 300".to_string()],
    }
}

pub fn ns(domain: &str) -> ResourceRecordSet {
    ResourceRecordSet {
        name: format!("{}.", domain),
        record_type: "NS".to_string(),
        ttl: Some(21600),
        rrdatas: vec!["ns-cloud-a1.googledomains.com.".to_string()],
    }
}

/// `projects:search` JSON body.
pub fn projects_json(projects: &[(u64, &str, &str, &str)]) -> Value {
    let projects: Vec<Value> = projects
        .iter()
        .map(|(number, id, shortname, env)| {
            json!({
                "name": format!("projects/{}", number),
                "projectId": id,
                "state": "ACTIVE",
                "labels": {"shortname": shortname, "env": env},
            })
        })
        .collect();
    json!({ "projects": projects })
}

/// `managedZones/{zone}/rrsets` JSON body with one SOA record.
pub fn soa_json(domain: &str) -> Value {
    json!({
        "rrsets": [
            {"name": format!("{}.", domain), "type": "NS", "ttl": 21600, "rrdatas": ["ns1."]},
            {"name": format!("{}.", domain), "type": "SOA", "ttl": 21600, "rrdatas": ["ns1. admin. 1 2 3 4 5"]},
        ]
    })
}

/// GitHub variables page JSON body.
pub fn variables_json(pairs: &[(&str, &str)]) -> Value {
    let variables: Vec<Value> = pairs
        .iter()
        .map(|(name, value)| json!({"name": name, "value": value}))
        .collect();
    json!({ "total_count": pairs.len(), "variables": variables })
}
