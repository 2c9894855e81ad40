//! Tests for `signet init`.

use crate::support::*;

#[test]
fn test_init_writes_loadable_properties() {
    let t = Test::new();
    t.write_keystore("release.keystore");

    let output = t.init("release.keystore", "key1", "pw1", "pw2");
    assert_success(&output);
    assert_stdout_contains(&output, "key.properties");

    let props = signet::Properties::parse(&t.read("key.properties")).unwrap();
    assert_eq!(props.get("storeFile"), Some("release.keystore"));
    assert_eq!(props.get("storePassword"), Some("pw1"));
    assert_eq!(props.get("keyAlias"), Some("key1"));
    assert_eq!(props.get("keyPassword"), Some("pw2"));

    let output = t.check();
    assert_success(&output);
}

#[test]
fn test_init_escapes_special_characters() {
    let t = Test::new();
    t.write_keystore("release.keystore");

    let output = t.init("release.keystore", "key1", "p=ss:w#rd!", "caf\u{e9} \\x");
    assert_success(&output);

    let config = signet::SigningConfigLoader::new(t.root())
        .load_default()
        .unwrap();
    let profile = config.require().unwrap();
    assert_eq!(profile.store_password().expose(), "p=ss:w#rd!");
    assert_eq!(profile.key_password().expose(), "caf\u{e9} \\x");
}

#[test]
fn test_init_updates_gitignore() {
    let t = Test::new();

    let output = t.init("release.keystore", "key1", "pw1", "pw2");
    assert_success(&output);

    let gitignore = t.read(".gitignore");
    assert!(gitignore.lines().any(|l| l == "key.properties"));
    assert!(gitignore.lines().any(|l| l == "*.jks"));
}

#[test]
fn test_init_warns_when_keystore_missing() {
    let t = Test::new();

    let output = t.init("release.keystore", "key1", "pw1", "pw2");
    assert_success(&output);
    assert_stderr_contains(&output, "does not exist yet");
    assert_stderr_contains(&output, "keytool");
}

#[test]
fn test_init_refuses_overwrite() {
    let t = Test::signed();

    let output = t.init("other.keystore", "key2", "a", "b");
    assert_failure(&output);
    assert_stderr_contains(&output, "already exists");
    assert_eq!(t.read("key.properties"), FULL_PROPERTIES);
}

#[test]
fn test_init_force_overwrites() {
    let t = Test::signed();

    let output = t
        .cmd()
        .args([
            "init",
            "--store-file",
            "release.keystore",
            "--key-alias",
            "key2",
            "--store-password",
            "a",
            "--key-password",
            "b",
            "--force",
        ])
        .output()
        .unwrap();
    assert_success(&output);
    assert!(t.read("key.properties").contains("keyAlias=key2"));
}

#[test]
fn test_init_without_password_and_no_tty_fails() {
    let t = Test::new();

    let output = t
        .cmd()
        .args(["init", "--store-file", "release.keystore", "--key-alias", "key1"])
        .output()
        .unwrap();
    assert_failure(&output);
    assert_stderr_contains(&output, "storePassword not provided");
    assert!(!t.path("key.properties").exists());
}

#[test]
fn test_init_passwords_from_env() {
    let t = Test::new();

    let output = t
        .cmd()
        .args(["init", "--store-file", "release.keystore", "--key-alias", "key1"])
        .env("SIGNET_STORE_PASSWORD", "envpw1")
        .env("SIGNET_KEY_PASSWORD", "envpw2")
        .output()
        .unwrap();
    assert_success(&output);
    assert!(t.read("key.properties").contains("storePassword=envpw1"));
}

#[cfg(unix)]
#[test]
fn test_init_restricts_permissions() {
    use std::os::unix::fs::PermissionsExt;

    let t = Test::new();
    let output = t.init("release.keystore", "key1", "pw1", "pw2");
    assert_success(&output);

    let mode = std::fs::metadata(t.path("key.properties"))
        .unwrap()
        .permissions()
        .mode();
    assert_eq!(mode & 0o777, 0o600);
}
