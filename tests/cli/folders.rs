use crate::cli::support::{json_stdout, TestVault};
use predicates::prelude::*;

// ============================================================================
// Folders command tests
// ============================================================================

#[test]
fn test_folders_creates_missing() {
    let vault = TestVault::empty();
    vault
        .cmd()
        .args(["init", "--no-folders"])
        .assert()
        .success();

    vault
        .cmd()
        .arg("folders")
        .assert()
        .success()
        .stdout(predicate::str::contains("Created folder: 10-Fleeting"))
        .stdout(predicate::str::contains("Created folder: 30-Permanent"));

    assert!(vault.path().join("20-Literature").is_dir());
}

#[test]
fn test_folders_when_all_exist() {
    let vault = TestVault::new();

    vault
        .cmd()
        .arg("folders")
        .assert()
        .success()
        .stdout(predicate::str::contains("All template folders exist"));
}

#[test]
fn test_folders_json() {
    let vault = TestVault::new();
    std::fs::remove_dir(vault.path().join("20-Literature")).unwrap();

    let output = vault
        .cmd()
        .args(["--format", "json", "folders"])
        .output()
        .unwrap();
    assert!(output.status.success());

    let json = json_stdout(&output.stdout);
    assert_eq!(json["folders_created"], serde_json::json!(["20-Literature"]));
}

#[test]
fn test_folders_outside_vault() {
    let vault = TestVault::empty();

    vault
        .cmd()
        .arg("folders")
        .assert()
        .code(3)
        .stderr(predicate::str::contains("error:"));
}
