use assert_cmd::Command;
use predicates::prelude::*;

#[test]
fn test_cli_help() {
    let mut cmd = Command::cargo_bin("persona-chat").unwrap();
    cmd.arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("Persona-driven chat backend"));
}

#[test]
fn test_cli_serve_help() {
    let mut cmd = Command::cargo_bin("persona-chat").unwrap();
    cmd.arg("serve").arg("--help").assert().success().stdout(predicate::str::contains("port"));
}

#[test]
fn test_cli_import_traits_help() {
    let mut cmd = Command::cargo_bin("persona-chat").unwrap();
    cmd.arg("import-traits")
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("--legacy"));
}

#[test]
fn test_cli_chat_requires_message() {
    let mut cmd = Command::cargo_bin("persona-chat").unwrap();
    cmd.arg("chat").assert().failure().stderr(predicate::str::contains("MESSAGE"));
}
