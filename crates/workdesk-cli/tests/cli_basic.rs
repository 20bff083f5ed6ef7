//! Basic CLI E2E tests.
//!
//! Tests invoke CLI commands via cargo run and verify outputs. Commands
//! that need the backend are exercised in the core crate against a mock
//! server; everything here runs offline against a temp config dir.

use std::path::Path;
use std::process::Command;

/// Run a CLI command with an isolated config dir and return output.
fn run_cli(config_dir: &Path, args: &[&str]) -> (String, String, i32) {
    let output = Command::new("cargo")
        .args(["run", "-p", "workdesk-cli", "--"])
        .args(args)
        .env("WORKDESK_CONFIG_DIR", config_dir)
        .output()
        .expect("Failed to execute CLI command");

    let stdout = String::from_utf8_lossy(&output.stdout).to_string();
    let stderr = String::from_utf8_lossy(&output.stderr).to_string();
    let code = output.status.code().unwrap_or(-1);

    (stdout, stderr, code)
}

#[test]
fn test_help() {
    let dir = tempfile::tempdir().unwrap();
    let (stdout, _, code) = run_cli(dir.path(), &["--help"]);
    assert_eq!(code, 0);
    assert!(stdout.contains("timer"));
    assert!(stdout.contains("config"));
}

#[test]
fn test_timer_status_snapshot() {
    let dir = tempfile::tempdir().unwrap();
    let (stdout, _, code) = run_cli(dir.path(), &["timer", "status"]);
    assert_eq!(code, 0);

    let snapshot: serde_json::Value = serde_json::from_str(&stdout).unwrap();
    assert_eq!(snapshot["type"], "StateSnapshot");
    assert_eq!(snapshot["mode"], "work");
    assert_eq!(snapshot["remaining_secs"], 25 * 60);
    assert_eq!(snapshot["running"], false);
    assert_eq!(snapshot["completed_work_sessions"], 0);
}

#[test]
fn test_timer_preview_default_cycle() {
    let dir = tempfile::tempdir().unwrap();
    let (stdout, _, code) = run_cli(dir.path(), &["timer", "preview", "--sessions", "8"]);
    assert_eq!(code, 0);

    let modes: Vec<String> = serde_json::from_str(&stdout).unwrap();
    assert_eq!(
        modes,
        vec![
            "work",
            "break",
            "work",
            "break",
            "work",
            "break",
            "work",
            "longBreak",
            "work"
        ]
    );
}

#[test]
fn test_config_get_set_roundtrip() {
    let dir = tempfile::tempdir().unwrap();

    let (stdout, _, code) = run_cli(dir.path(), &["config", "get", "timer.work_minutes"]);
    assert_eq!(code, 0);
    assert_eq!(stdout.trim(), "25");

    let (_, _, code) = run_cli(dir.path(), &["config", "set", "timer.work_minutes", "45"]);
    assert_eq!(code, 0);

    let (stdout, _, code) = run_cli(dir.path(), &["config", "get", "timer.work_minutes"]);
    assert_eq!(code, 0);
    assert_eq!(stdout.trim(), "45");
}

#[test]
fn test_config_set_clamps_out_of_range_durations() {
    let dir = tempfile::tempdir().unwrap();

    let (_, _, code) = run_cli(dir.path(), &["config", "set", "timer.work_minutes", "500"]);
    assert_eq!(code, 0);

    let (stdout, _, code) = run_cli(dir.path(), &["config", "get", "timer.work_minutes"]);
    assert_eq!(code, 0);
    assert_eq!(stdout.trim(), "60");
}

#[test]
fn test_config_rejects_unknown_key() {
    let dir = tempfile::tempdir().unwrap();
    let (_, stderr, code) = run_cli(dir.path(), &["config", "set", "timer.bogus", "1"]);
    assert_ne!(code, 0);
    assert!(stderr.contains("bogus"));
}

#[test]
fn test_config_path_points_into_config_dir() {
    let dir = tempfile::tempdir().unwrap();
    let (stdout, _, code) = run_cli(dir.path(), &["config", "path"]);
    assert_eq!(code, 0);
    assert!(stdout.trim().ends_with("config.toml"));
    assert!(stdout.contains(dir.path().to_str().unwrap()));
}

#[test]
fn test_timer_run_overrides_are_clamped() {
    let dir = tempfile::tempdir().unwrap();
    // An out-of-range interval must not break the preview policy.
    let (_, _, code) = run_cli(dir.path(), &["config", "set", "timer.long_break_interval", "0"]);
    assert_eq!(code, 0);

    let (stdout, _, code) = run_cli(dir.path(), &["config", "get", "timer.long_break_interval"]);
    assert_eq!(code, 0);
    assert_eq!(stdout.trim(), "2");
}

#[test]
fn test_completions_generate() {
    let dir = tempfile::tempdir().unwrap();
    let (stdout, _, code) = run_cli(dir.path(), &["completions", "bash"]);
    assert_eq!(code, 0);
    assert!(stdout.contains("workdesk"));
}
