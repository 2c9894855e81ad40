//! Tests for error handling and CLI flags.

use crate::support::*;

#[test]
fn test_help() {
    let t = Test::new();

    let output = t.cmd().arg("--help").output().unwrap();
    assert_success(&output);
    assert_stdout_contains(&output, "Usage");
}

#[test]
fn test_root_from_environment() {
    let t = Test::new();
    t.write("app/key.properties", FULL_PROPERTIES);
    t.write("app/release.keystore", KEYSTORE_BYTES);

    let output = t.cmd().env("SIGNET_ROOT", "app").arg("check").output().unwrap();
    assert_success(&output);
    assert_stdout_contains(&output, "release builds will be signed");
}

#[test]
fn test_root_flag_overrides_environment() {
    let t = Test::new();
    t.write("app/key.properties", FULL_PROPERTIES);
    t.write("app/release.keystore", KEYSTORE_BYTES);

    let output = t
        .cmd()
        .env("SIGNET_ROOT", "elsewhere")
        .args(["--root", "app", "check"])
        .output()
        .unwrap();
    assert_success(&output);
    assert_stdout_contains(&output, "release builds will be signed");
}

#[test]
fn test_unknown_command_fails() {
    let t = Test::new();

    let output = t.cmd().arg("unknown-command").output().unwrap();
    assert_failure(&output);
}

#[test]
fn test_version_flag() {
    let t = Test::new();

    let output = t.cmd().arg("--version").output().unwrap();
    assert_success(&output);
    assert_stdout_contains(&output, "signet");
}

#[test]
fn test_completions_bash_outputs_script() {
    let t = Test::new();

    let output = t.cmd().args(["completions", "bash"]).output().unwrap();
    assert_success(&output);
    assert_stdout_contains(&output, "signet");
}

#[test]
fn test_fatal_error_is_single_line() {
    let t = Test::new();
    t.write_properties(NO_PASSWORDS);

    let output = t.check();
    assert_failure(&output);
    let err = stderr(&output);
    let error_lines: Vec<&str> = err.lines().filter(|l| l.starts_with('✗')).collect();
    assert_eq!(error_lines.len(), 1, "stderr: {}", err);
}

#[test]
fn test_malformed_config_reports_parse_error() {
    let t = Test::signed();
    t.write("signet.toml", "[signing\n");

    let output = t.check();
    assert_failure(&output);
    assert_stderr_contains(&output, "failed to parse signet.toml");
}

#[test]
fn test_malformed_escape_reports_line() {
    let t = Test::new();
    t.write_properties("storeFile=release.keystore\nstorePassword=\\uZZZZ\n");

    let output = t.check();
    assert_failure(&output);
    assert_stderr_contains(&output, "line 2");
}

#[test]
fn test_default_no_debug_output() {
    let t = Test::signed();

    let output = t.check();
    assert_success(&output);
    let err = stderr(&output);
    assert!(!err.contains("DEBUG"), "unexpected debug output: {}", err);
}

#[test]
fn test_verbose_shows_debug_output() {
    let t = Test::signed();

    let output = t.cmd().args(["--verbose", "check"]).output().unwrap();
    assert_success(&output);
    assert_stderr_contains(&output, "signing profile resolved");
}

#[test]
fn test_signet_log_env_var() {
    let t = Test::signed();

    let output = t
        .cmd()
        .env("SIGNET_LOG", "signet=debug")
        .arg("check")
        .output()
        .unwrap();
    assert_success(&output);
    assert_stderr_contains(&output, "DEBUG");
}
