//! Integration tests for CLI output behavior
//!
//! The default behavior is quiet (no logs). Use -v/--verbose to enable logs.
//! Every run gets its own data and config directories and an empty PATH, so
//! no test ever talks to a live Hyprland session.

use std::fs;
use std::path::Path;
use std::process::{Command, Output};

fn run_hyprhide(home: &Path, args: &[&str]) -> Output {
    let empty_bin = home.join("bin");
    fs::create_dir_all(&empty_bin).expect("Failed to create empty bin dir");

    Command::new(env!("CARGO_BIN_EXE_hyprhide"))
        .args(args)
        .env("HYPRHIDE_DATA_DIR", home.join("data"))
        .env("XDG_CONFIG_HOME", home.join("config"))
        .env_remove("HYPRHIDE_CONFIG")
        .env_remove("RUST_LOG")
        .env("PATH", &empty_bin)
        .output()
        .expect("Failed to execute hyprhide")
}

fn write_record(home: &Path, address: &str, title: &str) {
    let data = home.join("data");
    fs::create_dir_all(&data).expect("Failed to create data dir");
    let record = format!(
        r#"{{
  "address": "{address}",
  "title": "{title}",
  "class": "kitty",
  "position": {{ "x": 120, "y": 340 }},
  "workspace": 2,
  "was_floating": false,
  "hidden_at": "2026-03-01T10:00:00+00:00"
}}"#
    );
    fs::write(data.join(format!("{}.json", address)), record).expect("Failed to write record");
}

#[test]
fn test_list_empty_registry() {
    let temp_dir = tempfile::tempdir().unwrap();
    let output = run_hyprhide(temp_dir.path(), &["list", "--no-sweep"]);

    assert!(
        output.status.success(),
        "hyprhide list failed: {}",
        String::from_utf8_lossy(&output.stderr)
    );
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("No hidden windows"), "got: {}", stdout);
}

/// Verify that stdout contains only user-facing output and stderr is empty by default
#[test]
fn test_list_stdout_is_clean() {
    let temp_dir = tempfile::tempdir().unwrap();
    write_record(temp_dir.path(), "0x55d1c0a0e2f0", "htop");

    let output = run_hyprhide(temp_dir.path(), &["list", "--no-sweep"]);
    assert!(output.status.success());

    let stdout = String::from_utf8_lossy(&output.stdout);
    let stderr = String::from_utf8_lossy(&output.stderr);

    assert!(
        !stdout.contains(r#""event":"#),
        "stdout should not contain JSON logs, got: {}",
        stdout
    );
    assert!(stdout.contains("0x55d1c0a0e2f0"), "got: {}", stdout);
    assert!(stdout.contains("htop"), "got: {}", stdout);
    assert!(
        stderr.is_empty(),
        "stderr should be empty in quiet mode, got: {}",
        stderr
    );
}

#[test]
fn test_verbose_logs_go_to_stderr() {
    let temp_dir = tempfile::tempdir().unwrap();
    let output = run_hyprhide(temp_dir.path(), &["-v", "list", "--no-sweep"]);
    assert!(output.status.success());

    let stdout = String::from_utf8_lossy(&output.stdout);
    let stderr = String::from_utf8_lossy(&output.stderr);

    assert!(
        stderr.contains(r#""event":"cli.list_started""#),
        "expected JSON log events on stderr, got: {}",
        stderr
    );
    assert!(!stdout.contains(r#""event":"#), "got: {}", stdout);
}

#[test]
fn test_list_json_output() {
    let temp_dir = tempfile::tempdir().unwrap();
    write_record(temp_dir.path(), "0xa1", "notes");
    fs::write(temp_dir.path().join("data").join("0xbad.json"), "{").unwrap();

    let output = run_hyprhide(temp_dir.path(), &["list", "--no-sweep", "--json"]);
    assert!(output.status.success());

    let stdout = String::from_utf8_lossy(&output.stdout);
    let value: serde_json::Value =
        serde_json::from_str(&stdout).expect("list --json should print valid JSON");
    let entries = value.as_array().expect("expected a JSON array");
    assert_eq!(entries.len(), 1);
    assert_eq!(entries[0]["address"], "0xa1");
    assert_eq!(entries[0]["workspace"], 2);
    assert_eq!(entries[0]["restore_command"], "hyprhide restore 0xa1");
}

#[test]
fn test_hide_fails_without_hyprland() {
    let temp_dir = tempfile::tempdir().unwrap();
    let output = run_hyprhide(temp_dir.path(), &["hide"]);

    assert!(!output.status.success());
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("Failed to hide window"), "got: {}", stderr);
    assert!(!temp_dir.path().join("data").join("0xa1.json").exists());
}

#[test]
fn test_sweep_fails_without_hyprland_and_keeps_records() {
    let temp_dir = tempfile::tempdir().unwrap();
    write_record(temp_dir.path(), "0xa1", "notes");

    let output = run_hyprhide(temp_dir.path(), &["sweep"]);

    assert!(!output.status.success());
    assert!(temp_dir.path().join("data").join("0xa1.json").exists());
}

#[test]
fn test_restore_without_hyprland_keeps_record() {
    let temp_dir = tempfile::tempdir().unwrap();
    write_record(temp_dir.path(), "0xa1", "notes");

    let output = run_hyprhide(temp_dir.path(), &["restore", "0xa1"]);

    assert!(!output.status.success());
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("Failed to restore window '0xa1'"), "got: {}", stderr);
    assert!(temp_dir.path().join("data").join("0xa1.json").exists());
}

#[test]
fn test_completions() {
    let temp_dir = tempfile::tempdir().unwrap();
    let output = run_hyprhide(temp_dir.path(), &["completions", "bash"]);

    assert!(output.status.success());
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("hyprhide"), "got: {}", stdout);
}
