use std::thread;
use std::time::Duration;

use assert_cmd::Command;
use predicates::prelude::*;

const ALPHABET: &[u8] = b"abcdefghijklmnopqrstuwxyz1234567890!@#$%^&*()-=_+;:,.<>/?[]{}";

/// Run the binary and split the report line into (printed length, password).
///
/// Only the first stdout line is inspected; the clipboard confirmation line is
/// environment-dependent (headless runners have no clipboard) and the run
/// exits 0 either way.
fn run_and_extract(args: &[&str]) -> (usize, String) {
    let output = Command::cargo_bin("passclip")
        .unwrap()
        .args(args)
        .output()
        .unwrap();
    assert!(output.status.success());

    let stdout = String::from_utf8(output.stdout).unwrap();
    let report = stdout.lines().next().expect("no report line");
    let rest = report
        .strip_prefix("Generated password (")
        .expect("unexpected report label");
    let (len, password) = rest.split_once("): ").expect("unexpected report format");
    (len.parse().unwrap(), password.to_string())
}

#[test]
fn default_invocation_generates_12_characters() {
    let (len, password) = run_and_extract(&[]);
    assert_eq!(len, 12);
    assert_eq!(password.len(), 12);
}

#[test]
fn explicit_length_is_honored() {
    let (len, password) = run_and_extract(&["5"]);
    assert_eq!(len, 5);
    assert_eq!(password.len(), 5);
}

#[test]
fn zero_length_reports_an_empty_password() {
    let (len, password) = run_and_extract(&["0"]);
    assert_eq!(len, 0);
    assert_eq!(password, "");
}

#[test]
fn every_character_comes_from_the_fixed_pool() {
    let (_, password) = run_and_extract(&["64"]);
    assert!(password.bytes().all(|b| ALPHABET.contains(&b)));
}

#[test]
fn extra_positional_arguments_are_ignored() {
    let (len, password) = run_and_extract(&["8", "junk"]);
    assert_eq!(len, 8);
    assert_eq!(password.len(), 8);
}

#[test]
fn successive_runs_produce_different_passwords() {
    let (_, first) = run_and_extract(&["32"]);
    // The seed has second resolution - step past the boundary.
    thread::sleep(Duration::from_millis(1100));
    let (_, second) = run_and_extract(&["32"]);
    assert_ne!(first, second);
}

#[test]
fn non_numeric_length_fails() {
    Command::cargo_bin("passclip")
        .unwrap()
        .arg("abc")
        .assert()
        .failure()
        .code(2)
        .stderr(predicate::str::contains("Invalid length: abc"));
}

#[test]
fn negative_length_fails() {
    Command::cargo_bin("passclip")
        .unwrap()
        .arg("-5")
        .assert()
        .failure()
        .code(2)
        .stderr(predicate::str::contains("Unknown argument"));
}

#[test]
fn help_flag_prints_usage() {
    Command::cargo_bin("passclip")
        .unwrap()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("USAGE"))
        .stdout(predicate::str::contains("passclip [LENGTH]"));
}

#[test]
fn version_flag_prints_version() {
    Command::cargo_bin("passclip")
        .unwrap()
        .arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::contains(env!("CARGO_PKG_VERSION")));
}
