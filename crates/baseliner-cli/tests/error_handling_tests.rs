//! Tests for error handling and suggestions.

use assert_cmd::Command;
use predicates::prelude::*;
use std::fs;
use tempfile::TempDir;

fn project_with_tokens(tokens: &str) -> TempDir {
    let temp = TempDir::new().unwrap();
    fs::create_dir_all(temp.path().join("config")).unwrap();
    fs::create_dir_all(temp.path().join("src/docs")).unwrap();
    fs::create_dir_all(temp.path().join("figma-plugin")).unwrap();
    fs::write(
        temp.path().join("config/typography-config-docs.json"),
        tokens,
    )
    .unwrap();
    fs::write(temp.path().join("src/docs/main.scss"), "body {}\n").unwrap();
    fs::write(
        temp.path().join("figma-plugin/ui.html"),
        "<script>\nconst TOKENS_DATA = {};\n</script>\n",
    )
    .unwrap();
    fs::write(
        temp.path().join("baseliner.toml"),
        "[build]\nsass_bin = \"true\"\n",
    )
    .unwrap();
    temp
}

#[test]
fn invalid_token_value_names_the_offender() {
    let temp = project_with_tokens(
        r#"{
            "baselineUnit": 0.5,
            "elements": {
                "h1": { "fontSize": "huge", "lineHeight": 2.5, "spaceAfter": 1 }
            }
        }"#,
    );

    let mut cmd = Command::cargo_bin("baseliner").unwrap();
    cmd.current_dir(temp.path());
    cmd.args(["build", "docs"]);

    cmd.assert()
        .failure()
        .code(2)
        .stderr(predicate::str::contains("invalid token value"))
        .stderr(predicate::str::contains("h1"))
        .stderr(predicate::str::contains("huge"));
}

#[test]
fn empty_scale_is_a_validation_error() {
    let temp = project_with_tokens(r#"{ "baselineUnit": 0.5, "elements": {} }"#);

    let mut cmd = Command::cargo_bin("baseliner").unwrap();
    cmd.current_dir(temp.path());
    cmd.args(["build", "docs"]);

    cmd.assert()
        .failure()
        .code(2)
        .stderr(predicate::str::contains("no elements"));
}

#[test]
fn missing_main_scss_suggests_creating_it() {
    let temp = project_with_tokens(
        r#"{
            "baselineUnit": 0.5,
            "elements": { "p": { "fontSize": 1, "lineHeight": 1.5, "spaceAfter": 1 } }
        }"#,
    );
    fs::remove_file(temp.path().join("src/docs/main.scss")).unwrap();

    let mut cmd = Command::cargo_bin("baseliner").unwrap();
    cmd.current_dir(temp.path());
    cmd.args(["build", "docs"]);

    cmd.assert()
        .failure()
        .code(3)
        .stderr(predicate::str::contains("main.scss"));
}

#[test]
fn missing_plugin_host_is_reported() {
    let temp = project_with_tokens(
        r#"{
            "baselineUnit": 0.5,
            "elements": { "p": { "fontSize": 1, "lineHeight": 1.5, "spaceAfter": 1 } }
        }"#,
    );
    fs::remove_file(temp.path().join("figma-plugin/ui.html")).unwrap();

    let mut cmd = Command::cargo_bin("baseliner").unwrap();
    cmd.current_dir(temp.path());
    cmd.args(["build", "docs"]);

    cmd.assert()
        .failure()
        .code(3)
        .stderr(predicate::str::contains("figma-plugin"));
}
