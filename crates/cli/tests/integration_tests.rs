//! Integration tests for stictionctl
//!
//! These tests run the built binary against temporary configuration files and
//! check output formats and exit codes.

use assert_cmd::Command;
use predicates::prelude::*;
use serde_json::Value;
use std::fs;
use std::path::PathBuf;
use tempfile::TempDir;

type TestResult = Result<(), Box<dyn std::error::Error>>;

/// Custom predicate to check if output is valid JSON
fn is_json() -> impl predicates::Predicate<[u8]> {
    predicates::function::function(|s: &[u8]| {
        std::str::from_utf8(s).is_ok_and(|text| serde_json::from_str::<Value>(text).is_ok())
    })
}

/// Test helper to create a stictionctl command
fn stictionctl() -> Command {
    let mut cmd = Command::new(env!("CARGO_BIN_EXE_stictionctl"));
    cmd.env_remove("RUST_LOG").env_remove("STICTIONCTL_CONFIG");
    cmd
}

/// Test helper to write a two-joint configuration
fn write_config(dir: &TempDir, name: &str) -> Result<PathBuf, std::io::Error> {
    let path = dir.path().join(name);
    fs::write(
        &path,
        "joints:\n  - name: shoulder\n    params:\n      Ts: 3.0\n  - name: elbow\n    initial_torque: 0.5\n",
    )?;
    Ok(path)
}

#[test]
fn test_cli_help() {
    stictionctl()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("dry-friction"));
}

#[test]
fn test_cli_version() {
    stictionctl()
        .arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::contains("stictionctl"));
}

#[test]
fn test_completion_generation() {
    stictionctl()
        .args(["completion", "bash"])
        .assert()
        .success()
        .stdout(predicate::str::contains("stictionctl"));
}

#[test]
fn test_params_yaml() {
    stictionctl()
        .arg("params")
        .assert()
        .success()
        .stdout(predicate::str::contains("static_friction: 2.5"))
        .stdout(predicate::str::contains("out_of_bounds: zero"));
}

#[test]
fn test_params_json_envelope() -> TestResult {
    let output = stictionctl().args(["--json", "params"]).output()?;
    assert!(output.status.success());

    let value: Value = serde_json::from_slice(&output.stdout)?;
    assert_eq!(value["success"], Value::Bool(true));
    assert_eq!(value["params"]["damping"], serde_json::json!(50.0));
    assert!(value["derived"]["z"].as_f64().is_some_and(|z| (z - 1.0 / 55.0).abs() < 1e-12));
    Ok(())
}

#[test]
fn test_table_human() -> TestResult {
    let dir = TempDir::new()?;
    let config = write_config(&dir, "joints.yaml")?;

    stictionctl()
        .args(["table", "--samples", "3", "--config"])
        .arg(&config)
        .assert()
        .success()
        .stdout(predicate::str::contains("shoulder"))
        .stdout(predicate::str::contains("elbow"))
        .stdout(predicate::str::contains("Samples: 256"));
    Ok(())
}

#[test]
fn test_table_json_single_joint() -> TestResult {
    let dir = TempDir::new()?;
    let config = write_config(&dir, "joints.yml")?;

    let output = stictionctl()
        .args(["--json", "table", "--joint", "elbow", "--samples", "5", "--config"])
        .arg(&config)
        .output()?;
    assert!(output.status.success());

    let value: Value = serde_json::from_slice(&output.stdout)?;
    let tables = value["tables"].as_array().ok_or("tables missing")?;
    assert_eq!(tables.len(), 1);
    let elbow = tables.first().ok_or("no table")?;
    assert_eq!(elbow["joint"], Value::String("elbow".into()));
    assert_eq!(elbow["len"], serde_json::json!(256));
    assert_eq!(elbow["samples"].as_array().map(Vec::len), Some(5));
    Ok(())
}

#[test]
fn test_simulate_json() -> TestResult {
    let dir = TempDir::new()?;
    let config = write_config(&dir, "joints.yaml")?;

    stictionctl()
        .args([
            "--json", "simulate", "--scenario", "ramp", "--amplitude", "0.2", "--steps", "300",
            "--every", "50", "--config",
        ])
        .arg(&config)
        .assert()
        .success()
        .stdout(is_json());

    let output = stictionctl()
        .args(["--json", "simulate", "--scenario", "hold", "--joint", "elbow", "--config"])
        .arg(&config)
        .output()?;
    let value: Value = serde_json::from_slice(&output.stdout)?;
    let joint = &value["joints"][0];
    assert_eq!(joint["slip_steps"], serde_json::json!(0));
    assert_eq!(joint["final_torque"], serde_json::json!(0.5));
    Ok(())
}

#[test]
fn test_simulate_human_trace() -> TestResult {
    let dir = TempDir::new()?;
    let config = write_config(&dir, "trace.yaml")?;

    stictionctl()
        .args(["simulate", "--steps", "100", "--every", "10", "--config"])
        .arg(&config)
        .assert()
        .success()
        .stdout(predicate::str::contains("stick"))
        .stdout(predicate::str::contains("Final torque"));
    Ok(())
}

#[test]
fn test_missing_config_exit_code() {
    stictionctl()
        .args(["table", "--config", "/nonexistent/joints.yaml"])
        .assert()
        .code(2)
        .stderr(predicate::str::contains("Configuration not found"));
}

#[test]
fn test_unknown_joint_exit_code() -> TestResult {
    let dir = TempDir::new()?;
    let config = write_config(&dir, "joints.yaml")?;

    stictionctl()
        .args(["--json", "table", "--joint", "knee", "--config"])
        .arg(&config)
        .assert()
        .code(2)
        .stdout(predicate::str::contains("JointNotFound"));
    Ok(())
}

#[test]
fn test_invalid_config_exit_code() -> TestResult {
    let dir = TempDir::new()?;
    let path = dir.path().join("bad.json");
    fs::write(&path, r#"{ "joints": [ { "name": "hip", "params": { "torque": 1.0 } } ] }"#)?;

    stictionctl()
        .args(["simulate", "--config"])
        .arg(&path)
        .assert()
        .code(3);
    Ok(())
}

#[test]
fn test_invalid_params_exit_code() -> TestResult {
    let dir = TempDir::new()?;
    let path = dir.path().join("bad.yaml");
    fs::write(&path, "joints:\n  - name: hip\n    params:\n      Ts: 0.1\n      Tc: 0.2\n")?;

    stictionctl()
        .args(["table", "--config"])
        .arg(&path)
        .assert()
        .code(4)
        .stderr(predicate::str::contains("static_friction"));
    Ok(())
}
