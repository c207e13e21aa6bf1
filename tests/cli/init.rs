use crate::cli::support::{json_stdout, TestVault};
use predicates::prelude::*;

// ============================================================================
// Init command tests
// ============================================================================

#[test]
fn test_init_creates_settings_and_folders() {
    let vault = TestVault::empty();

    vault
        .cmd()
        .arg("init")
        .assert()
        .success()
        .stdout(predicate::str::contains("Initialized vault at"))
        .stdout(predicate::str::contains("Created folder: 10-Fleeting"));

    assert!(vault.path().join(".pagezettel/settings.json").is_file());
    assert!(vault.path().join("10-Fleeting").is_dir());
    assert!(vault.path().join("20-Literature").is_dir());
    assert!(vault.path().join("30-Permanent").is_dir());

    let settings = vault.read(".pagezettel/settings.json");
    assert!(settings.contains("\"templates\""));
    assert!(settings.contains("\"fileNameFormat\": \"{{zettel-id}}\""));
    assert!(settings.ends_with('\n'));
}

#[test]
fn test_init_no_folders() {
    let vault = TestVault::empty();

    vault
        .cmd()
        .args(["init", "--no-folders"])
        .assert()
        .success();

    assert!(vault.path().join(".pagezettel/settings.json").is_file());
    assert!(!vault.path().join("10-Fleeting").exists());
}

#[test]
fn test_init_twice_fails() {
    let vault = TestVault::new();

    vault
        .cmd()
        .arg("init")
        .assert()
        .code(3)
        .stderr(predicate::str::contains("already exists"));
}

#[test]
fn test_init_with_vault_flag() {
    let vault = TestVault::empty();
    std::fs::create_dir(vault.path().join("notes")).unwrap();

    vault
        .cmd()
        .args(["--vault", "notes", "init", "--no-folders"])
        .assert()
        .success();

    assert!(vault.path().join("notes/.pagezettel/settings.json").is_file());
    assert!(!vault.path().join(".pagezettel").exists());
}

#[test]
fn test_init_json_output() {
    let vault = TestVault::empty();

    let output = vault
        .cmd()
        .args(["--format", "json", "init"])
        .output()
        .unwrap();
    assert!(output.status.success());

    let json = json_stdout(&output.stdout);
    assert_eq!(json["status"], "ok");
    assert!(json["settings"]
        .as_str()
        .unwrap()
        .ends_with("settings.json"));
    let folders = json["folders_created"].as_array().unwrap();
    assert_eq!(folders.len(), 3);
    assert_eq!(folders[0], "10-Fleeting");
}
