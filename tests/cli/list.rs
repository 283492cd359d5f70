//! Tests for `ghstage list`.

use crate::support::*;
use serde_json::json;
use wiremock::matchers::header;
use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

#[tokio::test(flavor = "multi_thread")]
async fn test_list_prints_labelled_projects() {
    let t = Test::new();
    let gcp = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/v3/projects:search"))
        .and(header("authorization", "Bearer gcp-token"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "projects": [
                {"name": "projects/222", "projectId": "acme-b", "labels": {"shortname": "proj-b", "env": "prod"}},
                {"name": "projects/111", "projectId": "acme-a", "labels": {"shortname": "proj-a", "env": "dev"}},
                {"name": "projects/333", "projectId": "acme-x", "labels": {"team": "infra"}}
            ]
        })))
        .expect(1)
        .mount(&gcp)
        .await;

    // No GitHub credentials are needed to list projects
    let mut cmd = t.cmd_against("http://127.0.0.1:9", &gcp.uri());
    cmd.env_remove("GITHUB_BEARER_TOKEN").arg("list");
    let output = output(cmd).await;

    assert_success(&output);
    let out = stdout(&output);
    let rows: Vec<Vec<&str>> = out
        .lines()
        .map(|l| l.split_whitespace().collect::<Vec<&str>>())
        .collect();
    assert_eq!(
        rows,
        vec![
            vec!["SHORTNAME", "PROJECT_ID", "PROJECT_NUMBER", "ENV"],
            vec!["proj-a", "acme-a", "111", "dev"],
            vec!["proj-b", "acme-b", "222", "prod"],
        ]
    );
}

#[tokio::test(flavor = "multi_thread")]
async fn test_list_empty() {
    let t = Test::new();
    let gcp = MockServer::start().await;
    mount_get(&gcp, "/v3/projects:search", json!({})).await;

    let mut cmd = t.cmd_against("http://127.0.0.1:9", &gcp.uri());
    cmd.arg("list");
    let output = output(cmd).await;

    assert_success(&output);
    assert_stdout_contains(&output, "no projects labelled with a shortname");
}

#[tokio::test(flavor = "multi_thread")]
async fn test_log_level_controls_stderr() {
    let t = Test::new();
    let gcp = MockServer::start().await;
    mount_get(
        &gcp,
        "/v3/projects:search",
        projects_json(&[(111, "acme-a", "proj-a", "dev")]),
    )
    .await;

    let mut quiet = t.cmd_against("http://127.0.0.1:9", &gcp.uri());
    quiet.arg("list");
    let quiet = output(quiet).await;
    assert_success(&quiet);
    assert!(!stderr(&quiet).contains("DEBUG"));

    let mut verbose = t.cmd_against("http://127.0.0.1:9", &gcp.uri());
    verbose.args(["--log-level", "debug", "list"]);
    let verbose = output(verbose).await;
    assert_success(&verbose);
    assert_stderr_contains(&verbose, "searched projects");

    let mut filtered = t.cmd_against("http://127.0.0.1:9", &gcp.uri());
    filtered.env("GHSTAGE_LOG", "ghstage=debug").arg("list");
    let filtered = output(filtered).await;
    assert_success(&filtered);
    assert_stderr_contains(&filtered, "searched projects");
}
