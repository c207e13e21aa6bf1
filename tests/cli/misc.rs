use crate::cli::support::{pagezettel, TestVault};
use predicates::prelude::*;
use tempfile::tempdir;

// ============================================================================
// Help, version, settings and logging tests
// ============================================================================

#[test]
fn test_help_flag() {
    let config = tempdir().unwrap();

    pagezettel(config.path())
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("Usage: pagezettel"))
        .stdout(predicate::str::contains("extract"))
        .stdout(predicate::str::contains("template"));
}

#[test]
fn test_version_flag() {
    let config = tempdir().unwrap();

    pagezettel(config.path())
        .arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::contains(env!("CARGO_PKG_VERSION")));
}

#[test]
fn test_no_command_prints_summary() {
    let config = tempdir().unwrap();

    pagezettel(config.path())
        .assert()
        .success()
        .stdout(predicate::str::contains("pagezettel --help"));
}

#[test]
fn test_unknown_command_json_envelope() {
    let config = tempdir().unwrap();

    let output = pagezettel(config.path())
        .args(["--format", "json", "frobnicate"])
        .output()
        .unwrap();
    assert_eq!(output.status.code(), Some(2));

    let json: serde_json::Value = serde_json::from_slice(&output.stderr).unwrap();
    assert_eq!(json["error"]["type"], "usage_error");
}

#[test]
fn test_invalid_settings_file() {
    let vault = TestVault::new();
    vault.write(".pagezettel/settings.json", "{ not json");

    vault
        .cmd()
        .args(["template", "list"])
        .assert()
        .code(3)
        .stderr(predicate::str::contains("invalid settings"));
}

#[test]
fn test_locale_from_settings() {
    let vault = TestVault::new();
    let settings = vault.read(".pagezettel/settings.json");
    let mut json: serde_json::Value = serde_json::from_str(&settings).unwrap();
    json["locale"] = serde_json::json!("ja");
    vault.write(
        ".pagezettel/settings.json",
        &serde_json::to_string_pretty(&json).unwrap(),
    );

    vault
        .cmd()
        .args(["extract", "-t", "fleeting", "--text", " "])
        .assert()
        .code(2)
        .stderr(predicate::str::contains("テキストを選択してください"));
}

#[test]
fn test_verbose_logs_phases() {
    let vault = TestVault::new();

    vault
        .cmd()
        .args(["--verbose", "extract", "-t", "fleeting", "--text", "logged"])
        .assert()
        .success()
        .stderr(predicate::str::contains("template_selected"));
}

#[test]
fn test_log_level_warn_hides_debug() {
    let vault = TestVault::new();

    vault
        .cmd()
        .args(["--log-level", "warn", "extract", "-t", "fleeting", "--text", "quiet"])
        .assert()
        .success()
        .stderr(predicate::str::contains("template_selected").not());
}

#[test]
fn test_vault_discovered_from_subdirectory() {
    let vault = TestVault::new();
    std::fs::create_dir_all(vault.path().join("deep/inside")).unwrap();

    let mut cmd = pagezettel(vault.config.path());
    cmd.current_dir(vault.path().join("deep/inside"))
        .args(["extract", "-t", "fleeting", "--text", "found it"])
        .assert()
        .success()
        .stdout(predicate::str::starts_with("10-Fleeting/"));
}
