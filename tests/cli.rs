//! CLI smoke tests.
//!
//! These run the binary with HOME pointed at a temp directory so the
//! config and database land in an isolated `.stoa/`.

use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::TempDir;

fn stoa(home: &TempDir) -> Command {
    let mut cmd = Command::cargo_bin("stoa").expect("binary builds");
    cmd.env("HOME", home.path());
    cmd
}

#[test]
fn help_lists_commands() {
    let home = TempDir::new().unwrap();
    stoa(&home)
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("breathe"))
        .stdout(predicate::str::contains("meditate"))
        .stdout(predicate::str::contains("article"));
}

#[test]
fn breathe_methods_lists_catalog() {
    let home = TempDir::new().unwrap();
    stoa(&home)
        .args(["breathe", "methods"])
        .assert()
        .success()
        .stdout(predicate::str::contains("4-7-8 Breathing"))
        .stdout(predicate::str::contains("Box Breathing"));
}

#[test]
fn breathe_methods_json() {
    let home = TempDir::new().unwrap();
    stoa(&home)
        .args(["breathe", "methods", "--output", "json"])
        .assert()
        .success()
        .stdout(predicate::str::contains("\"cycleSeconds\": 19"));
}

#[test]
fn meditate_list_shows_sessions() {
    let home = TempDir::new().unwrap();
    stoa(&home)
        .args(["meditate", "list"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Rain Relaxation"))
        .stdout(predicate::str::contains("Deep Focus"));
}

#[test]
fn article_list_seeds_library() {
    let home = TempDir::new().unwrap();
    stoa(&home)
        .args(["article", "list"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Control What You Can Control"))
        .stdout(predicate::str::contains("built-in"));
}

#[test]
fn article_show_unknown_id_fails() {
    let home = TempDir::new().unwrap();
    stoa(&home)
        .args(["article", "show", "999"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Not found"));
}

#[test]
fn article_create_and_show() {
    let home = TempDir::new().unwrap();

    stoa(&home)
        .args(["article", "new", "A Test Reflection", "--category", "philosophy"])
        .write_stdin("# Reflection\n\nWritten during a test run.")
        .assert()
        .success()
        .stdout(predicate::str::contains("Published"));

    stoa(&home)
        .args(["article", "list"])
        .assert()
        .success()
        .stdout(predicate::str::contains("A Test Reflection"));
}

#[test]
fn article_delete_requires_force() {
    let home = TempDir::new().unwrap();
    stoa(&home)
        .args(["article", "delete", "1"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("--force"));
}

#[test]
fn stats_starts_empty() {
    let home = TempDir::new().unwrap();
    stoa(&home)
        .arg("stats")
        .assert()
        .success()
        .stdout(predicate::str::contains("0 min across 0 sessions"));
}

#[test]
fn stats_json_has_report_fields() {
    let home = TempDir::new().unwrap();
    stoa(&home)
        .args(["stats", "--output", "json"])
        .assert()
        .success()
        .stdout(predicate::str::contains("\"streak_days\": 0"));
}

#[test]
fn unknown_breathing_method_fails() {
    let home = TempDir::new().unwrap();
    stoa(&home)
        .args(["breathe", "start", "--method", "wim-hof"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Unknown breathing method"));
}
