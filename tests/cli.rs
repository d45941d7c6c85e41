//! End-to-end checks against the built binary.
//!
//! No live services are involved: the subscribe test points the catalog
//! endpoint at a closed port and asserts the failure is absorbed into a
//! result string instead of crashing the run.
use std::path::Path;
use std::process::{Command, Output};

fn run_hubscout(args: &[&str]) -> Output {
    Command::new(env!("CARGO_BIN_EXE_hubscout"))
        .args(args)
        .env_remove("HUBSCOUT_PROJECT_ID")
        .env_remove("HUBSCOUT_LOCATION")
        .env_remove("HUBSCOUT_CATALOG_ENDPOINT")
        .env_remove("HUBSCOUT_METADATA_ENDPOINT")
        .env_remove("HUBSCOUT_LM_COMMAND")
        .output()
        .expect("run hubscout binary")
}

fn stdout(output: &Output) -> String {
    String::from_utf8_lossy(&output.stdout).into_owned()
}

#[test]
fn help_lists_workflow_commands() {
    let output = run_hubscout(&["--help"]);
    assert!(output.status.success());
    let text = stdout(&output);
    assert!(text.contains("init"));
    assert!(text.contains("search"));
    assert!(text.contains("subscribe"));
}

#[test]
fn init_writes_parseable_stub_and_refuses_overwrite() {
    let dir = tempfile::tempdir().expect("create temp dir");
    let path = dir.path().join("config.json");
    let path_str = path.to_str().expect("utf-8 temp path");

    let output = run_hubscout(&["init", "--config", path_str, "--project", "demo-project"]);
    assert!(output.status.success(), "init failed: {:?}", output);

    let text = std::fs::read_to_string(&path).expect("read stub");
    let parsed: serde_json::Value = serde_json::from_str(&text).expect("stub is JSON");
    assert_eq!(parsed["project_id"], "demo-project");
    assert_eq!(parsed["schema_version"], 1);

    let again = run_hubscout(&["init", "--config", path_str]);
    assert!(!again.status.success());
    let stderr = String::from_utf8_lossy(&again.stderr);
    assert!(stderr.contains("already exists"));
}

fn write_unreachable_config(path: &Path) {
    let config = serde_json::json!({
        "schema_version": 1,
        "project_id": "demo-project",
        "location": "us-central1",
        "catalog_endpoint": "http://127.0.0.1:1/v1",
        "metadata_endpoint": "http://127.0.0.1:1/v1",
        "request_timeout_ms": 2000,
    });
    std::fs::write(path, serde_json::to_string_pretty(&config).expect("serialize"))
        .expect("write config");
}

#[test]
fn subscribe_failure_is_reported_not_fatal() {
    let dir = tempfile::tempdir().expect("create temp dir");
    let path = dir.path().join("config.json");
    write_unreachable_config(&path);

    let output = run_hubscout(&[
        "subscribe",
        "--config",
        path.to_str().expect("utf-8 temp path"),
        "--listing",
        "projects/p/locations/l/dataExchanges/e/listings/demo",
    ]);
    assert!(output.status.success(), "subscribe should absorb the failure");
    assert!(stdout(&output).contains("Failed to subscribe:"));
}

#[test]
fn search_against_unreachable_catalog_degrades_gracefully() {
    let dir = tempfile::tempdir().expect("create temp dir");
    let path = dir.path().join("config.json");
    write_unreachable_config(&path);

    let output = run_hubscout(&[
        "search",
        "sales",
        "data",
        "--config",
        path.to_str().expect("utf-8 temp path"),
    ]);
    assert!(output.status.success(), "search should absorb the failure");
    assert!(stdout(&output).contains("unavailable"));
}
