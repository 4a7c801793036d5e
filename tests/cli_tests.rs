//! End-to-end runs of the `oop-basics` binary. Each test spawns a fresh
//! process, so the shared counter always starts from zero.

use assert_cmd::Command;
use predicates::prelude::*;
use std::io::Write as _;

fn oop_basics() -> Command {
    let mut cmd = Command::cargo_bin("oop-basics").expect("binary built");
    cmd.env_remove("OOP_BASICS_LESSONS")
        .env_remove("OOP_BASICS_TIMESTAMP_FORMAT")
        .env_remove("RUST_LOG")
        .env_remove("LOG_OUTPUT");
    cmd
}

#[test]
fn default_run_prints_the_eight_lines() {
    let assert = oop_basics().assert().success();
    let stdout = String::from_utf8(assert.get_output().stdout.clone()).unwrap();
    let lines: Vec<&str> = stdout.lines().collect();

    assert_eq!(
        &lines[..7],
        [
            "Hi, I'm Alice",
            "Tesla",
            "8",
            "Student Name: John",
            "42",
            "2",
            "Pi: 3.14159",
        ]
    );
    assert_eq!(lines.len(), 8);
    assert!(lines[7].starts_with("CreatedOn: "), "got {:?}", lines[7]);
}

#[test]
fn created_on_honours_timestamp_format() {
    oop_basics()
        .args(["--lessons", "constants", "--timestamp-format", "%Y"])
        .assert()
        .success()
        .stdout(predicate::str::is_match(r"^Pi: 3\.14159\nCreatedOn: \d{4}\n$").unwrap());
}

#[test]
fn lesson_selection_keeps_canonical_order() {
    oop_basics()
        .args(["--lessons", "student,person"])
        .assert()
        .success()
        .stdout("Hi, I'm Alice\nStudent Name: John\n");
}

#[test]
fn counter_instances_flag_sets_final_count() {
    oop_basics()
        .args(["--lessons", "counter", "--counter-instances", "5"])
        .assert()
        .success()
        .stdout("5\n");
}

#[test]
fn lessons_can_come_from_environment() {
    oop_basics()
        .env("OOP_BASICS_LESSONS", "calculator")
        .args(["--addends=20,22"])
        .assert()
        .success()
        .stdout("42\n");
}

#[test]
fn yaml_config_supplies_inputs() {
    let mut file = tempfile::Builder::new().suffix(".yml").tempfile().unwrap();
    writeln!(
        file,
        "lessons: [person, example]\ninputs:\n  person_name: Ada\n  secret_number: 1815"
    )
    .unwrap();

    oop_basics()
        .arg("--config")
        .arg(file.path())
        .assert()
        .success()
        .stdout("Hi, I'm Ada\n1815\n");
}

#[test]
fn invalid_timestamp_format_fails_without_output() {
    oop_basics()
        .args(["--timestamp-format", "%Y-%"])
        .assert()
        .failure()
        .stdout(predicate::str::is_empty())
        .stderr(predicate::str::contains("invalid timestamp format"));
}

#[test]
fn parse_only_timestamp_specifier_fails_without_output() {
    oop_basics()
        .args(["--lessons", "constants", "--timestamp-format", "%#z"])
        .assert()
        .failure()
        .code(1)
        .stdout(predicate::str::is_empty())
        .stderr(predicate::str::contains("invalid timestamp format"));
}

#[test]
fn calculator_overflow_wraps() {
    oop_basics()
        .args(["--lessons", "calculator", "--addends=2147483647,1"])
        .assert()
        .success()
        .stdout("-2147483648\n");
}

#[test]
fn unknown_lesson_is_a_usage_error() {
    oop_basics()
        .args(["--lessons", "inheritance"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("inheritance"));
}
