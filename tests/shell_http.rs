//! End-to-end tests of the console shell over HTTP.

use reqwest::StatusCode;
use serde_json::{json, Value};
use std::time::Duration;

use console_router::config::ConsoleConfig;

mod common;

const KEY: &str = "test-operator-key";

fn config() -> ConsoleConfig {
    let mut config = ConsoleConfig::default();
    config.session.api_key = KEY.to_string();
    config
}

#[tokio::test]
async fn test_anonymous_paths_redirect_to_login() {
    let shell = common::start_shell(config()).await;
    let client = common::client();

    for path in ["/", "/drivers/main", "/nonexistent"] {
        let res = client.get(shell.url(path)).send().await.unwrap();
        assert_eq!(res.status(), StatusCode::TEMPORARY_REDIRECT, "path {path}");
        assert_eq!(res.headers()["location"], "/login");
    }

    let res = client.get(shell.url("/login")).send().await.unwrap();
    assert_eq!(res.status(), StatusCode::OK);
    let body: Value = res.json().await.unwrap();
    assert_eq!(body["view"], "login");
    assert_eq!(body["layout"], "auth");

    let res = client.get(shell.url("/api/navigation")).send().await.unwrap();
    assert_eq!(res.status(), StatusCode::UNAUTHORIZED);
}

#[tokio::test]
async fn test_login_mounts_and_publishes_navigation() {
    let shell = common::start_shell(config()).await;
    let client = common::client();

    let res = client
        .post(shell.url("/api/session"))
        .json(&json!({ "api_key": "wrong" }))
        .send()
        .await
        .unwrap();
    assert_eq!(res.status(), StatusCode::UNAUTHORIZED);

    let res = client
        .post(shell.url("/api/session"))
        .json(&json!({ "api_key": KEY }))
        .send()
        .await
        .unwrap();
    assert_eq!(res.status(), StatusCode::OK);
    let session: Value = res.json().await.unwrap();
    assert_eq!(session["is_auth"], true);

    let nav: Value = client
        .get(shell.url("/api/navigation"))
        .send()
        .await
        .unwrap()
        .json()
        .await
        .unwrap();
    assert_eq!(nav["passengers"][0]["path"], "passengers/main");
    assert_eq!(nav["passengers"][0]["id"], "passengers/main");
    assert_eq!(nav["drivers"].as_array().unwrap().len(), 7);
    assert_eq!(nav["settings"][1]["permission"], "settings/sms");

    let sidebar: Value = client
        .get(shell.url("/api/navigation/sidebar"))
        .send()
        .await
        .unwrap()
        .json()
        .await
        .unwrap();
    let drivers = sidebar["drivers"].as_array().unwrap();
    assert_eq!(drivers.len(), 5);
    assert!(drivers.iter().all(|e| e["sidebar"] == true));
}

#[tokio::test]
async fn test_authenticated_resolution() {
    let mut config = config();
    config.session.start_authenticated = true;
    let shell = common::start_shell(config).await;
    let client = common::client();

    let res = client.get(shell.url("/")).send().await.unwrap();
    assert_eq!(res.status(), StatusCode::TEMPORARY_REDIRECT);
    assert_eq!(res.headers()["location"], "/passengers/main");

    let res = client.get(shell.url("/drivers/cars")).send().await.unwrap();
    assert_eq!(res.status(), StatusCode::OK);
    let body: Value = res.json().await.unwrap();
    assert_eq!(body["kind"], "view");
    assert_eq!(body["view"], "vehicles");
    assert_eq!(body["layout"], "main");

    let res = client.get(shell.url("/nonexistent")).send().await.unwrap();
    assert_eq!(res.status(), StatusCode::NOT_FOUND);
    let body: Value = res.json().await.unwrap();
    assert_eq!(body["kind"], "fallback");
    assert_eq!(body["view"], "undefined_page");

    // Logging out swaps back to the public tree.
    let res = client.delete(shell.url("/api/session")).send().await.unwrap();
    assert_eq!(res.status(), StatusCode::OK);
    let res = client.get(shell.url("/drivers/cars")).send().await.unwrap();
    assert_eq!(res.status(), StatusCode::TEMPORARY_REDIRECT);
}

#[tokio::test]
async fn test_lazy_view_failure_then_retry() {
    let bundles = tempfile::tempdir().unwrap();
    let mut config = config();
    config.session.start_authenticated = true;
    config.views.bundle_dir = bundles.path().to_string_lossy().into_owned();
    let shell = common::start_shell(config).await;
    let client = common::client();

    // No bundle on disk yet: the boundary reports a retryable failure.
    let res = client.get(shell.url("/drivers/driver/12")).send().await.unwrap();
    assert_eq!(res.status(), StatusCode::SERVICE_UNAVAILABLE);
    let body: Value = res.json().await.unwrap();
    assert_eq!(body["kind"], "failed");
    assert_eq!(body["view"], "driver");
    assert_eq!(body["retryable"], true);

    // Other routes are unaffected.
    let res = client.get(shell.url("/drivers/main")).send().await.unwrap();
    assert_eq!(res.status(), StatusCode::OK);

    std::fs::write(bundles.path().join("driver.js"), "export default Driver;").unwrap();
    tokio::time::sleep(Duration::from_millis(10)).await;

    let res = client.get(shell.url("/drivers/driver/12")).send().await.unwrap();
    assert_eq!(res.status(), StatusCode::OK);
    let body: Value = res.json().await.unwrap();
    assert_eq!(body["route"], "drivers/driver/:id");
    assert_eq!(body["params"]["id"], "12");
}

#[tokio::test]
async fn test_status_endpoint() {
    let shell = common::start_shell(config()).await;
    let body: Value = common::client()
        .get(shell.url("/api/status"))
        .send()
        .await
        .unwrap()
        .json()
        .await
        .unwrap();
    assert_eq!(body["status"], "operational");
    assert_eq!(body["version"], env!("CARGO_PKG_VERSION"));
}
