// soapdump - tests/cli.rs
//
// Exercises the built binary: exit codes, mode flags, and auxiliary output.

use std::path::PathBuf;
use std::process::{Command, Output};

fn soapdump(args: &[&str]) -> Output {
    Command::new(env!("CARGO_BIN_EXE_soapdump"))
        .args(args)
        .env_remove("RUST_LOG")
        .output()
        .expect("failed to launch soapdump")
}

fn fixture() -> String {
    PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .join("tests")
        .join("fixtures")
        .join("paypal_sample.log")
        .display()
        .to_string()
}

fn stdout(output: &Output) -> String {
    String::from_utf8_lossy(&output.stdout).into_owned()
}

fn stderr(output: &Output) -> String {
    String::from_utf8_lossy(&output.stderr).into_owned()
}

#[test]
fn raw_mode_is_default() {
    let output = soapdump(&[&fixture()]);
    assert!(output.status.success());
    let out = stdout(&output);
    assert_eq!(out.lines().count(), 3);
    assert!(out.starts_with("1|25.00|USD|Jane|Doe|"));
    assert!(stderr(&output).is_empty(), "stderr: {}", stderr(&output));
}

#[test]
fn summary_flag() {
    let output = soapdump(&["--summary", &fixture()]);
    assert!(output.status.success());
    assert!(stdout(&output).starts_with("=== SUMMARY ===\nTotal Transactions: 3\n"));
}

#[test]
fn last_mode_flag_wins() {
    let raw = soapdump(&["-s", "-r", &fixture()]);
    assert!(raw.status.success());
    assert!(stdout(&raw).starts_with("1|"));

    let summary = soapdump(&["-r", "-s", &fixture()]);
    assert!(summary.status.success());
    assert!(stdout(&summary).starts_with("=== SUMMARY ==="));
}

#[test]
fn json_format() {
    let output = soapdump(&["--format", "json", &fixture()]);
    assert!(output.status.success());
    let value: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(value.as_array().unwrap().len(), 3);
}

#[test]
fn missing_logfile_exits_one() {
    let output = soapdump(&[]);
    assert_eq!(output.status.code(), Some(1));
    let err = stderr(&output);
    assert!(err.contains("No logfile specified"), "stderr: {err}");
    assert!(err.contains("Usage"), "stderr: {err}");
}

#[test]
fn unreadable_file_exits_one_and_names_path() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("nope.log");
    let output = soapdump(&[path.to_str().unwrap()]);
    assert_eq!(output.status.code(), Some(1));
    assert!(stderr(&output).contains("nope.log"));
    assert!(stdout(&output).is_empty());
}

#[test]
fn unknown_option_exits_one_and_names_flag() {
    let output = soapdump(&["--bogus", &fixture()]);
    assert_eq!(output.status.code(), Some(1));
    assert!(stderr(&output).contains("--bogus"));
}

#[test]
fn help_exits_zero_with_field_reference() {
    let output = soapdump(&["--help"]);
    assert_eq!(output.status.code(), Some(0));
    let out = stdout(&output);
    assert!(out.contains("--summary"));
    assert!(out.contains("TRANS_NUM|AMOUNT|CURRENCY"));
    assert!(out.contains("PROC_AMOUNT"));
}

#[test]
fn auxiliary_flags_exit_zero_without_a_file() {
    for (flag, needle) in [
        ("--generate-bash-completion", "complete -F _soapdump_completions soapdump"),
        ("--generate-zsh-completion", "#compdef soapdump"),
        ("--generate-fish-completion", "complete -c soapdump"),
        ("--man", ".TH SOAPDUMP 1"),
    ] {
        let output = soapdump(&[flag]);
        assert_eq!(output.status.code(), Some(0), "{flag}");
        assert!(stdout(&output).contains(needle), "{flag}");
    }
}

#[test]
fn auxiliary_flag_ignores_missing_file() {
    let output = soapdump(&["--man", "/definitely/not/here.log"]);
    assert_eq!(output.status.code(), Some(0));
}

#[test]
fn config_file_changes_summary() {
    let dir = tempfile::tempdir().unwrap();
    let config = dir.path().join("config.toml");
    std::fs::write(&config, "[summary]\ntop_states = 1\n").unwrap();
    let output = soapdump(&["-s", "-c", config.to_str().unwrap(), &fixture()]);
    assert!(output.status.success());
    let out = stdout(&output);
    assert!(out.contains("Top 1 States by Transaction Count:\n  TX: 2\n\n"));
}

fn csv_config(dir: &tempfile::TempDir) -> String {
    let config = dir.path().join("config.toml");
    std::fs::write(&config, "[output]\nformat = \"csv\"\n").unwrap();
    config.display().to_string()
}

#[test]
fn config_format_applies_without_mode_flags() {
    let dir = tempfile::tempdir().unwrap();
    let output = soapdump(&["-c", &csv_config(&dir), &fixture()]);
    assert!(output.status.success());
    assert!(stdout(&output).starts_with("TRANS_NUM,AMOUNT,CURRENCY,"));
}

#[test]
fn raw_flag_overrides_config_format() {
    let dir = tempfile::tempdir().unwrap();
    let output = soapdump(&["-r", "-c", &csv_config(&dir), &fixture()]);
    assert!(output.status.success());
    let out = stdout(&output);
    assert!(out.starts_with("1|25.00|USD|Jane|Doe|"), "stdout: {out}");
    assert_eq!(out.lines().count(), 3);
}

#[test]
fn format_flag_beats_raw_flag() {
    let dir = tempfile::tempdir().unwrap();
    let output = soapdump(&["-r", "-f", "json", "-c", &csv_config(&dir), &fixture()]);
    assert!(output.status.success());
    let value: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(value.as_array().unwrap().len(), 3);
}

#[test]
fn broken_config_warns_and_still_runs() {
    let dir = tempfile::tempdir().unwrap();
    let missing = dir.path().join("absent.toml");
    let output = soapdump(&["-c", missing.to_str().unwrap(), &fixture()]);
    assert_eq!(output.status.code(), Some(0));
    assert!(stdout(&output).starts_with("1|25.00|USD|"));
    let err = stderr(&output);
    assert!(err.contains("absent.toml"), "stderr: {err}");
}
