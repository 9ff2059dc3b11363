//! CLI smoke tests: verify basic binary behavior.

use std::io::Write;
use std::process::{Command, Stdio};

fn cli_bin() -> Command {
    let mut cmd = Command::new(env!("CARGO_BIN_EXE_spectrum"));
    cmd.env("RUST_LOG", "off").env_remove("SPECTRUM_CONFIG");
    cmd
}

fn run_with_stdin(args: &[&str], input: &str) -> String {
    let mut child = cli_bin()
        .args(args)
        .stdin(Stdio::piped())
        .stdout(Stdio::piped())
        .stderr(Stdio::piped())
        .spawn()
        .expect("failed to run");
    child
        .stdin
        .take()
        .unwrap()
        .write_all(input.as_bytes())
        .unwrap();
    let output = child.wait_with_output().expect("failed to wait");
    assert!(output.status.success());
    String::from_utf8_lossy(&output.stdout).into_owned()
}

#[test]
fn test_help_flag() {
    let output = cli_bin().arg("--help").output().expect("failed to run");
    assert!(output.status.success());
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(
        stdout.contains("Usage"),
        "Expected usage info in --help output"
    );
}

#[test]
fn test_version_flag() {
    let output = cli_bin().arg("--version").output().expect("failed to run");
    assert!(output.status.success());
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(
        stdout.contains("spectrum"),
        "Expected binary name in --version output"
    );
}

#[test]
fn test_invalid_initial_state_rejected() {
    let output = cli_bin()
        .arg("--initial-state")
        .arg("euphoric")
        .output()
        .expect("failed to run");
    assert!(!output.status.success());
}

#[test]
fn test_missing_config_falls_back_to_defaults() {
    let stdout = run_with_stdin(
        &["--config", "/tmp/nonexistent_spectrum_config_12345.toml"],
        "quit\n",
    );
    assert!(stdout.contains("Dual Spectrum online"));
    assert!(stdout.contains("[mood] Depressive"));
}

#[test]
fn test_switch_and_stats_session() {
    let stdout = run_with_stdin(
        &["--config", "/tmp/nonexistent_spectrum_config_12345.toml", "--step-delay-ms", "0"],
        "x\nx\nstats\nshare\nquit\n",
    );
    assert!(stdout.contains("[mood] Mixed"));
    assert!(stdout.contains("(no change, still mixed)"));
    assert!(stdout.contains("Time Spent:"));
    assert!(stdout.lines().any(|l| l.starts_with("Depressive")));
}

#[test]
fn test_eof_exits_cleanly() {
    let stdout = run_with_stdin(&["--config", "/tmp/nonexistent_spectrum_config_12345.toml"], "");
    assert!(stdout.contains("Dual Spectrum online"));
}

#[test]
fn test_audio_toggle_session() {
    let stdout = run_with_stdin(
        &["--config", "/tmp/nonexistent_spectrum_config_12345.toml"],
        "a\nhide\nshow\naudio\nquit\n",
    );
    assert!(stdout.contains("[audio] playing depressive @ 0.25"));
    assert!(stdout.contains("[audio] off"));
    assert!(!stdout.contains("(no change"));
}
