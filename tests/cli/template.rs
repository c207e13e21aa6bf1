use crate::cli::support::{json_stdout, TestVault};
use predicates::prelude::*;

// ============================================================================
// Template command tests
// ============================================================================

fn template_list(vault: &TestVault) -> Vec<serde_json::Value> {
    let output = vault
        .cmd()
        .args(["--format", "json", "template", "list"])
        .output()
        .unwrap();
    assert!(output.status.success());
    json_stdout(&output.stdout).as_array().unwrap().clone()
}

fn ids(templates: &[serde_json::Value]) -> Vec<String> {
    templates
        .iter()
        .map(|t| t["id"].as_str().unwrap().to_string())
        .collect()
}

#[test]
fn test_template_list_human() {
    let vault = TestVault::new();

    vault
        .cmd()
        .args(["template", "list"])
        .assert()
        .success()
        .stdout(predicate::str::contains("💭 Fleeting ★"))
        .stdout(predicate::str::contains("[literature]"))
        .stdout(predicate::str::contains("30-Permanent/{{zettel-id}}-{{title}}.md"));
}

#[test]
fn test_template_list_json_in_order() {
    let vault = TestVault::new();

    let templates = template_list(&vault);
    assert_eq!(ids(&templates), ["fleeting", "literature", "permanent"]);
    assert_eq!(templates[0]["isFavorite"], true);
    assert_eq!(templates[0]["fileNameFormat"], "{{zettel-id}}");
}

#[test]
fn test_template_list_favorites() {
    let vault = TestVault::new();

    let output = vault
        .cmd()
        .args(["--format", "json", "template", "list", "--favorites"])
        .output()
        .unwrap();
    let favorites = json_stdout(&output.stdout);
    assert_eq!(ids(favorites.as_array().unwrap()), ["fleeting"]);
}

#[test]
fn test_template_show() {
    let vault = TestVault::new();

    vault
        .cmd()
        .args(["template", "show", "literature"])
        .assert()
        .success()
        .stdout(predicate::str::contains("📚 Literature"))
        .stdout(predicate::str::contains("20-Literature/{{date}}-{{title}}.md"));
}

#[test]
fn test_template_add() {
    let vault = TestVault::new();

    let output = vault
        .cmd()
        .args([
            "--format",
            "json",
            "template",
            "add",
            "Meeting",
            "--icon",
            "🗓",
            "--folder",
            "40-Meetings",
            "--description",
            "Notes from meetings",
        ])
        .output()
        .unwrap();
    assert!(output.status.success());

    let json = json_stdout(&output.stdout);
    assert_eq!(json["status"], "ok");
    assert_eq!(json["template"]["name"], "Meeting");
    assert_eq!(json["template"]["order"], 3);
    assert_eq!(json["template"]["fileNameFormat"], "{{zettel-id}}");

    let templates = template_list(&vault);
    assert_eq!(templates.len(), 4);
    assert_eq!(templates[3]["folder"], "40-Meetings");
    assert!(vault.read(".pagezettel/settings.json").contains("40-Meetings"));
}

#[test]
fn test_template_add_rejects_blank_name() {
    let vault = TestVault::new();

    vault
        .cmd()
        .args(["template", "add", "  "])
        .assert()
        .code(2)
        .stderr(predicate::str::contains("name must not be empty"));

    assert_eq!(template_list(&vault).len(), 3);
}

#[test]
fn test_template_edit() {
    let vault = TestVault::new();

    vault
        .cmd()
        .args([
            "template",
            "edit",
            "permanent",
            "--name",
            "Evergreen",
            "--folder",
            "Evergreen",
            "--alias-input",
            "false",
        ])
        .assert()
        .success()
        .stdout(predicate::str::contains("Updated template Evergreen"));

    let templates = template_list(&vault);
    assert_eq!(templates[2]["id"], "permanent");
    assert_eq!(templates[2]["name"], "Evergreen");
    assert_eq!(templates[2]["folder"], "Evergreen");
    assert_eq!(templates[2]["showAliasInput"], false);
}

#[test]
fn test_template_edit_rejects_empty_format() {
    let vault = TestVault::new();

    vault
        .cmd()
        .args(["template", "edit", "fleeting", "--file-name-format", ""])
        .assert()
        .code(2);

    assert_eq!(template_list(&vault)[0]["fileNameFormat"], "{{zettel-id}}");
}

#[test]
fn test_template_remove() {
    let vault = TestVault::new();

    vault
        .cmd()
        .args(["template", "remove", "literature"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Removed template Literature"));

    let templates = template_list(&vault);
    assert_eq!(ids(&templates), ["fleeting", "permanent"]);
    assert_eq!(templates[1]["order"], 1);
}

#[test]
fn test_template_remove_unknown() {
    let vault = TestVault::new();

    vault
        .cmd()
        .args(["template", "remove", "ghost"])
        .assert()
        .code(3)
        .stderr(predicate::str::contains("template not found: ghost"));
}

#[test]
fn test_template_move() {
    let vault = TestVault::new();

    vault
        .cmd()
        .args(["template", "move", "permanent", "0"])
        .assert()
        .success()
        .stdout(predicate::str::contains("to position 0"));

    let templates = template_list(&vault);
    assert_eq!(ids(&templates), ["permanent", "fleeting", "literature"]);
    let orders: Vec<_> = templates.iter().map(|t| t["order"].clone()).collect();
    assert_eq!(orders, [0, 1, 2]);
}

#[test]
fn test_template_move_past_end_clamps() {
    let vault = TestVault::new();

    vault
        .cmd()
        .args(["template", "move", "fleeting", "99"])
        .assert()
        .success();

    assert_eq!(
        ids(&template_list(&vault)),
        ["literature", "permanent", "fleeting"]
    );
}

#[test]
fn test_template_favorite_toggles() {
    let vault = TestVault::new();

    vault
        .cmd()
        .args(["template", "favorite", "fleeting"])
        .assert()
        .success()
        .stdout(predicate::str::contains("no longer a favorite"));
    assert_eq!(template_list(&vault)[0]["isFavorite"], false);

    vault
        .cmd()
        .args(["template", "favorite", "Fleeting"])
        .assert()
        .success()
        .stdout(predicate::str::contains("marked as favorite"));
    assert_eq!(template_list(&vault)[0]["isFavorite"], true);
}

#[test]
fn test_template_list_empty() {
    let vault = TestVault::new();
    for id in ["fleeting", "literature", "permanent"] {
        vault
            .cmd()
            .args(["template", "remove", id])
            .assert()
            .success();
    }

    vault
        .cmd()
        .args(["template", "list"])
        .assert()
        .success()
        .stdout(predicate::str::contains("No templates defined"));

    vault
        .cmd()
        .args(["extract", "--text", "x"])
        .assert()
        .code(2)
        .stderr(predicate::str::contains("No templates defined"));
}
