//! Tests for `ghstage set` against mock GitHub and Google Cloud servers.

use crate::support::*;
use serde_json::json;
use wiremock::matchers::{body_json, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

const MATRIX_A: &str = r#"{"include":[{"deploy_env":"proj-a"}]}"#;

async fn gcp_server() -> MockServer {
    let server = MockServer::start().await;
    mount_get(
        &server,
        "/v3/projects:search",
        projects_json(&[
            (111, "acme-a", "proj-a", "dev"),
            (222, "acme-b", "proj-b", "prod"),
        ]),
    )
    .await;
    mount_get(
        &server,
        "/dns/v1/projects/acme-a/managedZones/ingress-default/rrsets",
        soa_json("a.example.com"),
    )
    .await;
    server
}

#[tokio::test(flavor = "multi_thread")]
async fn test_set_creates_and_updates_variables() {
    let t = Test::new();
    let gcp = gcp_server().await;
    let github = MockServer::start().await;
    mount_repository(&github).await;

    Mock::given(method("PUT"))
        .and(path("/repositories/42/environments/proj-a"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"name": "proj-a"})))
        .expect(1)
        .mount(&github)
        .await;
    Mock::given(method("PUT"))
        .and(path("/repositories/42/environments/proj-b"))
        .respond_with(ResponseTemplate::new(200))
        .expect(0)
        .mount(&github)
        .await;

    mount_get(
        &github,
        "/repositories/42/environments/proj-a/variables",
        variables_json(&[("PROJECT_ID", "acme-a")]),
    )
    .await;
    Mock::given(method("PATCH"))
        .and(path("/repositories/42/environments/proj-a/variables/PROJECT_ID"))
        .and(body_json(json!({"name": "PROJECT_ID", "value": "acme-a"})))
        .respond_with(ResponseTemplate::new(204))
        .expect(1)
        .mount(&github)
        .await;
    Mock::given(method("POST"))
        .and(path("/repositories/42/environments/proj-a/variables"))
        .respond_with(ResponseTemplate::new(201))
        .expect(3)
        .mount(&github)
        .await;

    mount_get(&github, "/repos/acme/app/actions/variables", variables_json(&[])).await;
    Mock::given(method("POST"))
        .and(path("/repos/acme/app/actions/variables"))
        .and(body_json(json!({"name": "STAGE_DEV", "value": MATRIX_A})))
        .respond_with(ResponseTemplate::new(201))
        .expect(1)
        .mount(&github)
        .await;

    let mut cmd = t.cmd_against(&github.uri(), &gcp.uri());
    cmd.args(["set", "dev=proj-a", "--repo", "acme/app"]);
    let output = output(cmd).await;

    assert_success(&output);
    assert_stdout_contains(&output, "Asserting environment proj-a\n");
    assert_stdout_contains(&output, "Asserting environment specific variables for proj-a\n");
    assert_stdout_contains(&output, "Asserting matrix variable STAGE_DEV\n");
    assert_stdout_contains(&output, "✓ 1 environment(s) asserted, STAGE_DEV updated");
    assert!(!stdout(&output).contains("proj-b"));
}

#[tokio::test(flavor = "multi_thread")]
async fn test_set_show_only_writes_nothing() {
    let t = Test::new();
    let gcp = gcp_server().await;
    let github = MockServer::start().await;
    mount_repository(&github).await;
    forbid(&github, "PUT").await;
    forbid(&github, "POST").await;
    forbid(&github, "PATCH").await;

    let mut cmd = t.cmd_against(&github.uri(), &gcp.uri());
    cmd.args(["set", "dev=proj-a", "--repo", "acme/app", "--show-only"]);
    let output = output(cmd).await;

    assert_success(&output);
    let out = stdout(&output);
    assert!(out.contains("PROJECT_ID=acme-a\n"));
    assert!(out.contains("PROJECT_NUMBER=111\n"));
    assert!(out.contains("DPLATFORM=dev\n"));
    assert!(out.contains("BASE_DOMAIN=a.example.com\n"));
    assert!(out.contains(&format!("STAGE_DEV={}\n", MATRIX_A)));
    assert!(!out.contains("✓"));

    // Only the repository lookup reached GitHub
    let requests = github.received_requests().await.unwrap();
    assert_eq!(requests.len(), 1);
}

#[tokio::test(flavor = "multi_thread")]
async fn test_set_warns_about_unknown_shortname() {
    let t = Test::new();
    let gcp = gcp_server().await;
    let github = MockServer::start().await;
    mount_repository(&github).await;

    let mut cmd = t.cmd_against(&github.uri(), &gcp.uri());
    cmd.args(["set", "ghost", "--repo", "acme/app", "--show-only"]);
    let output = output(cmd).await;

    assert_success(&output);
    assert_stdout_contains(&output, "no project labelled shortname=ghost");
}

#[tokio::test(flavor = "multi_thread")]
async fn test_set_stops_on_remote_failure() {
    let t = Test::new();
    let gcp = gcp_server().await;
    let github = MockServer::start().await;
    mount_repository(&github).await;
    Mock::given(method("PUT"))
        .respond_with(ResponseTemplate::new(403).set_body_string("forbidden"))
        .mount(&github)
        .await;
    forbid(&github, "POST").await;

    let mut cmd = t.cmd_against(&github.uri(), &gcp.uri());
    cmd.args(["set", "dev=proj-a", "--repo", "acme/app"]);
    let output = output(cmd).await;

    assert_exit_one(&output);
    assert_stderr_contains(&output, "HTTP 403");
}
