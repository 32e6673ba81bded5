//! CLI surface tests for the `rolo` binary

use assert_cmd::Command;
use predicates::prelude::*;

#[test]
fn help_lists_the_config_subcommand() {
    Command::cargo_bin("rolo")
        .unwrap()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("Contact book"))
        .stdout(predicate::str::contains("config"));
}

#[test]
fn config_help_lists_show_and_path() {
    Command::cargo_bin("rolo")
        .unwrap()
        .args(["config", "--help"])
        .assert()
        .success()
        .stdout(predicate::str::contains("show"))
        .stdout(predicate::str::contains("path"));
}

#[test]
fn unknown_subcommand_fails() {
    Command::cargo_bin("rolo")
        .unwrap()
        .arg("frobnicate")
        .assert()
        .failure()
        .stderr(predicate::str::contains("unrecognized subcommand"));
}

#[test]
fn version_flag_prints_version() {
    Command::cargo_bin("rolo")
        .unwrap()
        .arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::contains("rolo"));
}
