//! Mock-server helpers for tests that talk HTTP.

use std::process::Output;

use assert_cmd::Command;
use serde_json::{json, Value};
use wiremock::matchers::{header, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

/// Repository id answered for `acme/app`.
pub const REPOSITORY_ID: u64 = 42;

/// Serve `GET /repos/acme/app`, expected exactly once per client.
pub async fn mount_repository(server: &MockServer) {
    Mock::given(method("GET"))
        .and(path("/repos/acme/app"))
        .and(header("authorization", "Bearer test-token"))
        .and(header("x-github-api-version", "2022-11-28"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_json(json!({"id": REPOSITORY_ID, "full_name": "acme/app"})),
        )
        .expect(1)
        .mount(server)
        .await;
}

/// Serve a JSON body for `GET <route>`.
pub async fn mount_get(server: &MockServer, route: &str, body: Value) {
    Mock::given(method("GET"))
        .and(path(route))
        .respond_with(ResponseTemplate::new(200).set_body_json(body))
        .mount(server)
        .await;
}

/// Fail the test if any request with `verb` reaches the server.
pub async fn forbid(server: &MockServer, verb: &str) {
    Mock::given(method(verb))
        .respond_with(ResponseTemplate::new(500))
        .expect(0)
        .mount(server)
        .await;
}

/// Run a prepared command off the async runtime so mock servers keep serving.
pub async fn output(mut cmd: Command) -> Output {
    tokio::task::spawn_blocking(move || cmd.output().expect("failed to run ghstage"))
        .await
        .expect("command task panicked")
}
