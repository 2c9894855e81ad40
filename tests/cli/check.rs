//! Tests for `signet check`.

use crate::support::*;

#[test]
fn test_check_resolved_profile() {
    let t = Test::signed();

    let output = t.check();
    assert_success(&output);
    assert_stdout_contains(&output, "release.keystore");
    assert_stdout_contains(&output, "key1");
    assert_stdout_contains(&output, KEYSTORE_SHA256);
    assert_stdout_contains(&output, "release builds will be signed");
}

#[test]
fn test_check_never_prints_passwords() {
    let t = Test::signed();

    let output = t.cmd().args(["--verbose", "check"]).output().unwrap();
    assert_success(&output);
    assert_output_excludes(&output, "pw1");
    assert_output_excludes(&output, "pw2");
}

#[test]
fn test_check_json() {
    let t = Test::signed();

    let output = t.check_json();
    assert_success(&output);
    let json = stdout_json(&output);
    assert_eq!(json["status"], "resolved");
    assert_eq!(json["key_alias"], "key1");
    assert_eq!(json["keystore_sha256"], KEYSTORE_SHA256);
    assert_eq!(
        json["store_file"],
        t.path("release.keystore").display().to_string()
    );
}

#[test]
fn test_check_missing_file_warns_but_succeeds() {
    let t = Test::new();

    let output = t.check();
    assert_success(&output);
    assert_stderr_contains(&output, "WARN");
    assert_stderr_contains(&output, "signing properties not found");
    assert_stderr_contains(&output, "signet init");
}

#[test]
fn test_check_missing_file_warns_once() {
    let t = Test::new();

    let output = t.check();
    assert_success(&output);
    assert_eq!(
        stderr(&output)
            .matches("release builds will be unsigned")
            .count(),
        1
    );
}

#[test]
fn test_check_missing_file_json() {
    let t = Test::new();

    let output = t.check_json();
    assert_success(&output);
    let json = stdout_json(&output);
    assert_eq!(json["status"], "absent");
}

#[test]
fn test_check_require_fails_without_file() {
    let t = Test::new();

    let output = t.cmd().args(["check", "--require"]).output().unwrap();
    assert_failure(&output);
    assert_stderr_contains(&output, "signing properties not found");
    assert_stderr_contains(&output, "signet init");
}

#[test]
fn test_check_policy_require_from_config() {
    let t = Test::new();
    t.write("signet.toml", "[signing]\npolicy = \"require\"\n");

    let output = t.check();
    assert_failure(&output);
}

#[test]
fn test_check_incomplete_names_missing_keys() {
    let t = Test::new();
    t.write_properties(NO_PASSWORDS);
    t.write_keystore("release.keystore");

    let output = t.check();
    assert_failure(&output);
    assert_stderr_contains(&output, "missing storePassword, keyPassword");
}

#[test]
fn test_check_keystore_not_found() {
    let t = Test::new();
    t.write_properties(FULL_PROPERTIES);

    let output = t.check();
    assert_failure(&output);
    assert_stderr_contains(&output, "keystore not found");
    assert_stderr_contains(&output, "release.keystore");
}

#[test]
fn test_check_studio_format() {
    let t = Test::new();
    t.write_properties(STUDIO_PROPERTIES);
    t.write_keystore("keys/upload-keystore.jks");

    let output = t.check_json();
    assert_success(&output);
    let json = stdout_json(&output);
    assert_eq!(json["key_alias"], "upload");
}

#[test]
fn test_check_explicit_properties_path() {
    let t = Test::new();
    t.write("signing/upload.properties", FULL_PROPERTIES);
    t.write_keystore("release.keystore");

    let output = t
        .cmd()
        .args(["check", "--properties", "signing/upload.properties"])
        .output()
        .unwrap();
    assert_success(&output);
}

#[test]
fn test_check_properties_path_from_config() {
    let t = Test::new();
    t.write("signet.toml", "[signing]\nproperties = \"android/key.properties\"\n");
    t.write("android/key.properties", FULL_PROPERTIES);
    t.write_keystore("release.keystore");

    let output = t.check_json();
    assert_success(&output);
    assert_eq!(stdout_json(&output)["status"], "resolved");
}

#[test]
fn test_check_root_flag() {
    let t = Test::new();
    t.write("app/key.properties", FULL_PROPERTIES);
    t.write_keystore("app/release.keystore");

    let output = t.cmd().args(["--root", "app", "check"]).output().unwrap();
    assert_success(&output);
    assert_stdout_contains(&output, "key1");
}
