//! Integration tests for `payloadkit init`
//!
//! - Fails outside a PayloadCMS project
//! - Creates payloadkit.json with the default kind mappings
//! - Is idempotent: a second run leaves the file byte-identical

mod common;

use common::{run_payloadkit, TestProject};

#[test]
fn test_init_fails_outside_payload_project() {
    let project = TestProject::new();

    let output = run_payloadkit(&project, None, &["init", "--yes"]);

    assert!(!output.status.success());
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(
        stderr.contains("Not a PayloadCMS project"),
        "stderr should explain the failure: {stderr}"
    );
    assert!(!project.exists("payloadkit.json"));
}

#[test]
fn test_init_fails_on_non_payload_node_project() {
    let project = TestProject::new();
    project.create_file("package.json", r#"{"dependencies":{"react":"^19.0.0"}}"#);

    let output = run_payloadkit(&project, None, &["init", "--yes"]);
    assert!(!output.status.success());
}

#[test]
fn test_init_reports_malformed_package_json() {
    let project = TestProject::new();
    project.create_file("package.json", "{ not json");

    let output = run_payloadkit(&project, None, &["init", "--yes"]);

    assert!(!output.status.success());
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(
        stderr.contains("malformed"),
        "malformed package.json should be distinguished from a missing one: {stderr}"
    );
}

#[test]
fn test_init_creates_config_with_default_paths() {
    let project = TestProject::payload();

    let output = run_payloadkit(&project, None, &["init", "--yes"]);

    assert!(
        output.status.success(),
        "init should succeed: {}",
        String::from_utf8_lossy(&output.stderr)
    );
    assert!(project.exists("payloadkit.json"));

    let config: serde_json::Value =
        serde_json::from_str(&project.read_file("payloadkit.json")).expect("valid JSON config");
    assert_eq!(config["blocks"]["path"], "src/blocks");
    assert_eq!(config["collections"]["alias"], "@/collections");
    assert!(config["registry"].is_string());
}

#[test]
fn test_init_is_idempotent() {
    let project = TestProject::payload();

    let first_run = run_payloadkit(&project, None, &["init", "--yes"]);
    assert!(first_run.status.success());
    let first = project.read_file("payloadkit.json");

    let second_run = run_payloadkit(&project, None, &["init", "--yes"]);
    assert!(second_run.status.success(), "second init must exit 0");
    let second = project.read_file("payloadkit.json");

    assert_eq!(first, second, "second init must leave the config byte-identical");
}

#[test]
fn test_init_preserves_customized_config() {
    let project = TestProject::payload();
    project.create_file("payloadkit.json", r#"{"custom":"config"}"#);

    let output = run_payloadkit(&project, None, &["init", "--yes"]);

    assert!(output.status.success());
    assert_eq!(project.read_file("payloadkit.json"), r#"{"custom":"config"}"#);
}
