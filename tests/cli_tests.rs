//! CLI integration tests

use assert_cmd::Command;
use predicates::prelude::*;

fn alt_scribe_bin() -> Command {
    Command::cargo_bin("alt-scribe").expect("binary should be built")
}

#[test]
fn help_output() {
    alt_scribe_bin()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("alt text"))
        .stdout(predicate::str::contains("--no-copy"))
        .stdout(predicate::str::contains("--model"))
        .stdout(predicate::str::contains("--delay"))
        .stdout(predicate::str::contains("--copy-tool"))
        .stdout(predicate::str::contains("--clipboard-backend"))
        .stdout(predicate::str::contains("--notify"));
}

#[test]
fn version_output() {
    alt_scribe_bin()
        .arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::contains("alt-scribe"))
        .stdout(predicate::str::contains(env!("CARGO_PKG_VERSION")));
}

#[test]
fn config_path_command() {
    alt_scribe_bin()
        .args(["config", "path"])
        .assert()
        .success()
        .stdout(predicate::str::contains("alt-scribe"))
        .stdout(predicate::str::contains("config.toml"));
}

#[test]
fn config_help() {
    alt_scribe_bin()
        .args(["config", "--help"])
        .assert()
        .success()
        .stdout(predicate::str::contains("init"))
        .stdout(predicate::str::contains("set"))
        .stdout(predicate::str::contains("get"))
        .stdout(predicate::str::contains("list"))
        .stdout(predicate::str::contains("path"));
}

#[test]
fn invalid_copy_tool_is_usage_error() {
    let dir = tempfile::tempdir().unwrap();
    alt_scribe_bin()
        .args(["--copy-tool", "teleport"])
        .env("OPENAI_API_KEY", "sk-test")
        .env("HOME", dir.path())
        .env("XDG_CONFIG_HOME", dir.path())
        .assert()
        .code(2)
        .stderr(predicate::str::contains("teleport"));
}

#[test]
fn invalid_clipboard_backend_is_usage_error() {
    let dir = tempfile::tempdir().unwrap();
    alt_scribe_bin()
        .args(["--clipboard-backend", "carrier-pigeon"])
        .env("OPENAI_API_KEY", "sk-test")
        .env("HOME", dir.path())
        .env("XDG_CONFIG_HOME", dir.path())
        .assert()
        .code(2)
        .stderr(predicate::str::contains("carrier-pigeon"));
}

#[test]
fn non_numeric_delay_rejected_by_parser() {
    alt_scribe_bin()
        .args(["--delay", "soon"])
        .assert()
        .code(2);
}
