use crate::cli::support::{first_line, json_stdout, TestVault};
use predicates::prelude::*;

// ============================================================================
// Extract command tests
// ============================================================================

fn is_zettel_id(name: &str) -> bool {
    name.len() == 14 && name.chars().all(|c| c.is_ascii_digit())
}

#[test]
fn test_extract_fleeting_from_text() {
    let vault = TestVault::new();

    let output = vault
        .cmd()
        .args(["extract", "--template", "fleeting", "--text", "A passing thought"])
        .output()
        .unwrap();
    assert!(output.status.success());

    let path = first_line(&output.stdout);
    let name = path
        .strip_prefix("10-Fleeting/")
        .and_then(|rest| rest.strip_suffix(".md"))
        .unwrap();
    assert!(is_zettel_id(name), "unexpected file name: {}", path);

    let content = vault.read(&path);
    assert!(content.starts_with("---\n"));
    assert!(content.contains("created:"));
    assert!(content.contains("- fleeting"));
    assert!(content.contains("A passing thought"));

    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains(&format!("💭 Created: {}", name)));
}

#[test]
fn test_extract_from_stdin() {
    let vault = TestVault::new();

    let output = vault
        .cmd()
        .args(["extract", "--template", "fleeting"])
        .write_stdin("Piped selection\n")
        .output()
        .unwrap();
    assert!(output.status.success());

    let path = first_line(&output.stdout);
    assert!(vault.read(&path).contains("Piped selection"));
}

#[test]
fn test_extract_from_file() {
    let vault = TestVault::new();
    vault.write("selection.txt", "Text from a file");

    let output = vault
        .cmd()
        .args(["extract", "-t", "fleeting", "--file", "selection.txt"])
        .output()
        .unwrap();
    assert!(output.status.success());

    let path = first_line(&output.stdout);
    assert!(vault.read(&path).contains("Text from a file"));
}

#[test]
fn test_extract_with_alias_names_the_file() {
    let vault = TestVault::new();

    let output = vault
        .cmd()
        .args([
            "extract",
            "--template",
            "literature",
            "--alias",
            "Deep Work",
            "--text",
            "Focus is a skill",
        ])
        .output()
        .unwrap();
    assert!(output.status.success());

    let path = first_line(&output.stdout);
    assert!(path.starts_with("20-Literature/"));
    assert!(path.ends_with("-Deep Work.md"), "unexpected path: {}", path);

    let content = vault.read(&path);
    assert!(content.contains("aliases:"));
    assert!(content.contains("Deep Work"));
    assert!(content.contains("- literature"));
}

#[test]
fn test_extract_template_by_name() {
    let vault = TestVault::new();

    let output = vault
        .cmd()
        .args(["extract", "--template", "PERMANENT", "--text", "Evergreen"])
        .output()
        .unwrap();
    assert!(output.status.success());
    assert!(first_line(&output.stdout).starts_with("30-Permanent/"));
}

#[test]
fn test_extract_same_name_twice_fails() {
    let vault = TestVault::new();
    let args = [
        "extract",
        "--template",
        "literature",
        "--alias",
        "Twice",
        "--text",
        "first",
    ];

    let output = vault.cmd().args(args).output().unwrap();
    assert!(output.status.success());
    let path = first_line(&output.stdout);

    vault
        .cmd()
        .args(["extract", "-t", "literature", "-a", "Twice", "--text", "second"])
        .assert()
        .code(3)
        .stderr(predicate::str::contains("already exists"));

    let content = vault.read(&path);
    assert!(content.contains("first"));
    assert!(!content.contains("second"));
}

#[test]
fn test_extract_dry_run_writes_nothing() {
    let vault = TestVault::new();

    vault
        .cmd()
        .args([
            "extract",
            "--template",
            "fleeting",
            "--text",
            "Not yet",
            "--dry-run",
        ])
        .assert()
        .success()
        .stdout(predicate::str::contains("Not yet"))
        .stdout(predicate::str::contains("created:"))
        .stderr(predicate::str::contains("Would create 10-Fleeting/"));

    assert!(vault.files_in("10-Fleeting").is_empty());
}

#[test]
fn test_extract_remove_indent() {
    let vault = TestVault::new();

    let output = vault
        .cmd()
        .args([
            "extract",
            "--template",
            "fleeting",
            "--text",
            "    first\n      nested",
            "--remove-indent",
        ])
        .output()
        .unwrap();
    assert!(output.status.success());

    let content = vault.read(&first_line(&output.stdout));
    assert!(content.contains("\nfirst\n  nested"));
}

#[test]
fn test_extract_source_backlink_and_link() {
    let vault = TestVault::new();
    vault.write("Journal.md", "Intro\nThe idea to extract.\nOutro\n");

    let output = vault
        .cmd()
        .args([
            "extract",
            "--template",
            "fleeting",
            "--text",
            "The idea to extract.",
            "--source",
            "Journal.md",
            "--link",
        ])
        .output()
        .unwrap();
    assert!(output.status.success());

    let path = first_line(&output.stdout);
    let note = vault.read(&path);
    assert!(note.contains("source_notes:"));
    assert!(note.contains("[[Journal]]"));

    let basename = path
        .trim_start_matches("10-Fleeting/")
        .trim_end_matches(".md")
        .to_string();
    assert_eq!(
        vault.read("Journal.md"),
        format!("Intro\n[[{}]]\nOutro\n", basename)
    );
    assert!(String::from_utf8_lossy(&output.stderr).contains("Linked"));
}

#[test]
fn test_extract_source_without_link_leaves_source_alone() {
    let vault = TestVault::new();
    vault.write("Journal.md", "Keep this line\n");

    vault
        .cmd()
        .args([
            "extract",
            "-t",
            "fleeting",
            "--text",
            "Keep this line",
            "--source",
            "Journal.md",
        ])
        .assert()
        .success();

    assert_eq!(vault.read("Journal.md"), "Keep this line\n");
}

#[test]
fn test_extract_link_selection_missing_from_source() {
    let vault = TestVault::new();
    vault.write("Journal.md", "Nothing matching here\n");

    vault
        .cmd()
        .args([
            "extract",
            "-t",
            "fleeting",
            "--text",
            "absent text",
            "--source",
            "Journal.md",
            "--link",
        ])
        .assert()
        .success()
        .stderr(predicate::str::contains("Selection not found in Journal.md"));

    assert_eq!(vault.read("Journal.md"), "Nothing matching here\n");
}

#[test]
fn test_extract_missing_source() {
    let vault = TestVault::new();

    vault
        .cmd()
        .args([
            "extract",
            "-t",
            "fleeting",
            "--text",
            "x",
            "--source",
            "Nope.md",
        ])
        .assert()
        .code(3)
        .stderr(predicate::str::contains("source note not found"));
}

#[test]
fn test_extract_link_requires_source() {
    let vault = TestVault::new();

    vault
        .cmd()
        .args(["extract", "-t", "fleeting", "--text", "x", "--link"])
        .assert()
        .code(2);
}

#[test]
fn test_extract_unknown_template() {
    let vault = TestVault::new();

    vault
        .cmd()
        .args(["extract", "--template", "nope", "--text", "x"])
        .assert()
        .code(3)
        .stderr(predicate::str::contains("template not found: nope"));
}

#[test]
fn test_extract_blank_selection() {
    let vault = TestVault::new();

    vault
        .cmd()
        .args(["extract", "--template", "fleeting", "--text", "   \n  "])
        .assert()
        .code(2)
        .stderr(predicate::str::contains("Please select some text first"));

    assert!(vault.files_in("10-Fleeting").is_empty());
}

#[test]
fn test_extract_requires_template_when_not_interactive() {
    let vault = TestVault::new();

    vault
        .cmd()
        .args(["extract", "--text", "x"])
        .assert()
        .code(2)
        .stderr(predicate::str::contains("--template is required"));
}

#[test]
fn test_extract_single_template_is_used() {
    let vault = TestVault::new();
    for id in ["literature", "permanent"] {
        vault
            .cmd()
            .args(["template", "remove", id])
            .assert()
            .success();
    }

    let output = vault
        .cmd()
        .args(["extract", "--text", "Only one choice"])
        .output()
        .unwrap();
    assert!(output.status.success());
    assert!(first_line(&output.stdout).starts_with("10-Fleeting/"));
}

#[test]
fn test_extract_outside_vault() {
    let vault = TestVault::empty();

    vault
        .cmd()
        .args(["extract", "--template", "fleeting", "--text", "x"])
        .assert()
        .code(3)
        .stderr(predicate::str::contains("vault not found"));
}

#[test]
fn test_extract_selection_alias() {
    let vault = TestVault::new();

    vault
        .cmd()
        .args(["extract-selection", "-t", "fleeting", "--text", "aliased"])
        .assert()
        .success()
        .stdout(predicate::str::starts_with("10-Fleeting/"));
}

#[test]
fn test_extract_json_output() {
    let vault = TestVault::new();

    let output = vault
        .cmd()
        .args([
            "--format",
            "json",
            "extract",
            "--template",
            "fleeting",
            "--text",
            "structured",
        ])
        .output()
        .unwrap();
    assert!(output.status.success());
    assert!(output.stderr.is_empty());

    let json = json_stdout(&output.stdout);
    assert_eq!(json["status"], "ok");
    assert_eq!(json["template"], "fleeting");
    assert_eq!(json["linked"], false);
    let path = json["path"].as_str().unwrap();
    assert!(vault.read(path).contains("structured"));
}

#[test]
fn test_extract_json_error_envelope() {
    let vault = TestVault::new();

    let output = vault
        .cmd()
        .args(["--format", "json", "extract", "-t", "missing", "--text", "x"])
        .output()
        .unwrap();
    assert_eq!(output.status.code(), Some(3));

    let json: serde_json::Value = serde_json::from_slice(&output.stderr).unwrap();
    assert_eq!(json["error"]["code"], 3);
    assert_eq!(json["error"]["type"], "template_not_found");
}

#[test]
fn test_extract_uses_template_file() {
    let vault = TestVault::new();
    vault.write(
        "Templates/quote.md",
        "---\nstatus: draft\n---\n> {{content}}\n\nCaptured {{date:YYYY}}\n",
    );
    vault
        .cmd()
        .args([
            "template",
            "add",
            "Quote",
            "--folder",
            "Quotes",
            "--template-path",
            "Templates/quote.md",
        ])
        .assert()
        .success();

    let output = vault
        .cmd()
        .args(["extract", "-t", "quote", "--text", "Stay hungry"])
        .output()
        .unwrap();
    assert!(output.status.success());

    let path = first_line(&output.stdout);
    assert!(path.starts_with("Quotes/"));
    let content = vault.read(&path);
    assert!(content.contains("status: draft"));
    assert!(content.contains("- quote"));
    assert!(content.contains("> Stay hungry"));
    assert!(!content.contains("{{date:YYYY}}"));
}
