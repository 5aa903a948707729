//! Integration tests for jsonflow
//!
//! These drive the compiled binary and the public crate APIs together.

use std::io::Write;
use std::process::{Command, Stdio};

use jsonflow_core::{Flow, FlowGraph, SAMPLE_JSON};
use tempfile::TempDir;

fn jsonflow() -> Command {
    Command::new(env!("CARGO_BIN_EXE_jsonflow"))
}

fn write_doc(dir: &TempDir, text: &str) -> std::path::PathBuf {
    let path = dir.path().join("doc.json");
    std::fs::write(&path, text).unwrap();
    path
}

/// Test that the CLI can be invoked
#[test]
fn test_cli_help() {
    let output = jsonflow().arg("--help").output().expect("Failed to execute command");

    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(output.status.success());
    assert!(stdout.contains("jsonflow"));
    assert!(stdout.contains("search them by path"));
}

#[test]
fn test_build_from_file() {
    let dir = TempDir::new().unwrap();
    let path = write_doc(&dir, SAMPLE_JSON);

    let output = jsonflow()
        .current_dir(dir.path())
        .arg("build")
        .arg(&path)
        .output()
        .unwrap();
    assert!(output.status.success());

    let flow: Flow = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(flow.nodes.len(), 22);
    assert_eq!(flow.edges.len(), 21);
    assert!(FlowGraph::from_records(&flow.nodes, &flow.edges).validate().is_ok());
}

#[test]
fn test_build_from_stdin() {
    let dir = TempDir::new().unwrap();
    let mut child = jsonflow()
        .current_dir(dir.path())
        .args(["build", "-"])
        .stdin(Stdio::piped())
        .stdout(Stdio::piped())
        .spawn()
        .unwrap();
    child
        .stdin
        .take()
        .unwrap()
        .write_all(br#"{"a": 1}"#)
        .unwrap();
    let output = child.wait_with_output().unwrap();
    assert!(output.status.success());

    let flow: Flow = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(flow.node_ids(), vec!["$", "$.a"]);
    assert_eq!(flow.edges[0].label, "a");
}

#[test]
fn test_find_reports_match() {
    let dir = TempDir::new().unwrap();
    let path = write_doc(&dir, SAMPLE_JSON);

    let output = jsonflow()
        .current_dir(dir.path())
        .args(["find", "items.0.price", "--file"])
        .arg(&path)
        .output()
        .unwrap();
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(output.status.success());
    assert_eq!(stdout.trim(), "Match found: $.items[0].price");
}

#[test]
fn test_find_blank_query() {
    let dir = TempDir::new().unwrap();
    let path = write_doc(&dir, "[1, 2]");

    let output = jsonflow()
        .current_dir(dir.path())
        .args(["find", " ", "--file"])
        .arg(&path)
        .output()
        .unwrap();
    assert_eq!(String::from_utf8_lossy(&output.stdout).trim(), "No match found");
}

#[test]
fn test_invalid_json_fails() {
    let dir = TempDir::new().unwrap();
    let path = write_doc(&dir, "{\"a\": }");

    let output = jsonflow()
        .current_dir(dir.path())
        .arg("build")
        .arg(&path)
        .output()
        .unwrap();
    assert!(!output.status.success());
    assert!(String::from_utf8_lossy(&output.stderr).contains("Invalid JSON"));
}

#[test]
fn test_config_file_changes_spacing() {
    let dir = TempDir::new().unwrap();
    std::fs::write(
        dir.path().join(".jsonflow.toml"),
        "[layout]\nhorizontal_spacing = 50.0\n",
    )
    .unwrap();
    let path = write_doc(&dir, "[0]");

    let output = jsonflow()
        .current_dir(dir.path())
        .arg("build")
        .arg(&path)
        .output()
        .unwrap();
    assert!(output.status.success());

    let flow: Flow = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(flow.node("$[0]").unwrap().position.x, 50.0);
}

#[test]
fn test_sample_command() {
    let output = jsonflow().arg("sample").output().unwrap();
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert_eq!(stdout.trim(), SAMPLE_JSON);
}

#[test]
fn test_serve_flags() {
    let output = jsonflow().args(["serve", "--help"]).output().unwrap();
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(output.status.success());
    assert!(stdout.contains("--port"));
    assert!(stdout.contains("--host"));

    let output = jsonflow().args(["serve", "--open"]).output().unwrap();
    assert!(!output.status.success());
}
