//! CLI binary smoke tests using assert_cmd.
//!
//! These tests exercise the compiled `smxm` binary to verify the stdout
//! report contract, exit codes and error messages end-to-end.

use assert_cmd::Command;
use predicates::prelude::*;

fn cmd() -> Command {
    let mut cmd = Command::cargo_bin("smxm").unwrap();
    cmd.env_remove("SMXM_LOG");
    cmd
}

// ---------------------------------------------------------------------------
// Success path
// ---------------------------------------------------------------------------

#[test]
fn small_matrix_prints_report() {
    let assert = cmd().arg("8").assert().success().stderr(predicate::str::is_empty());
    let stdout = String::from_utf8(assert.get_output().stdout.clone()).unwrap();
    let lines: Vec<&str> = stdout.lines().collect();
    assert_eq!(lines.len(), 4);
    assert!(lines[0].starts_with("Total time: "));
    assert!(lines[1].starts_with("Initialization time: "));
    assert!(lines[2].starts_with("Computation time: "));
    assert!(lines[3].starts_with("Memory usage: "));
    assert!(lines[3].ends_with(" kilobytes"));
}

#[test]
fn times_have_six_fractional_digits() {
    let assert = cmd().args(["4", "--seed", "1"]).assert().success();
    let stdout = String::from_utf8(assert.get_output().stdout.clone()).unwrap();
    for line in stdout.lines().take(3) {
        let value = line
            .split(": ")
            .nth(1)
            .and_then(|rest| rest.strip_suffix(" seconds"))
            .unwrap();
        let fraction = value.split('.').nth(1).unwrap();
        assert_eq!(fraction.len(), 6, "line {:?}", line);
        assert!(value.parse::<f64>().unwrap() >= 0.0);
    }
}

#[test]
fn repeat_prints_every_run_and_summary() {
    cmd()
        .args(["4", "--repeat", "3", "--seed", "9"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Total time: ").count(3))
        .stdout(predicate::str::contains("Runs: 3"))
        .stdout(predicate::str::contains("Computation time stddev: "));
}

#[test]
fn json_output_is_parseable() {
    let assert = cmd().args(["3", "--json", "--seed", "5"]).assert().success();
    let stdout = String::from_utf8(assert.get_output().stdout.clone()).unwrap();
    let value: serde_json::Value = serde_json::from_str(stdout.trim()).unwrap();
    assert_eq!(value["matrix_size"], 3);
    assert_eq!(value["seed"], 5);
    assert!(value["timing"]["computation"].as_f64().unwrap() >= 0.0);
}

#[test]
fn help_flag() {
    cmd()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("matrix-size"));
}

#[test]
fn version_flag() {
    cmd()
        .arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::contains("smxm"));
}

// ---------------------------------------------------------------------------
// Failure path: exit 1, nothing on stdout
// ---------------------------------------------------------------------------

#[test]
fn missing_size_prints_usage() {
    cmd()
        .assert()
        .code(1)
        .stdout(predicate::str::is_empty())
        .stderr(predicate::str::contains("Usage"));
}

#[test]
fn zero_size_is_rejected() {
    cmd()
        .arg("0")
        .assert()
        .code(1)
        .stdout(predicate::str::is_empty())
        .stderr(predicate::str::contains("positive integer"));
}

#[test]
fn negative_size_is_rejected() {
    cmd()
        .arg("-5")
        .assert()
        .code(1)
        .stdout(predicate::str::is_empty())
        .stderr(predicate::str::contains("positive integer"));
}

#[test]
fn non_numeric_size_is_rejected() {
    cmd()
        .arg("abc")
        .assert()
        .code(1)
        .stdout(predicate::str::is_empty())
        .stderr(predicate::str::contains("positive integer"));
}

#[test]
fn zero_repeat_is_rejected() {
    cmd()
        .args(["4", "--repeat", "0"])
        .assert()
        .code(1)
        .stdout(predicate::str::is_empty());
}

#[test]
fn unknown_flag_exits_one() {
    cmd()
        .args(["4", "--bogus"])
        .assert()
        .code(1)
        .stdout(predicate::str::is_empty());
}

#[test]
fn parse_errors_print_one_line() {
    for args in [["4", "5"], ["4", "--bogus"]] {
        let assert = cmd().args(args).assert().code(1).stdout(predicate::str::is_empty());
        let stderr = String::from_utf8(assert.get_output().stderr.clone()).unwrap();
        let lines: Vec<&str> = stderr.lines().filter(|l| !l.trim().is_empty()).collect();
        assert_eq!(lines.len(), 1, "args {:?} stderr {:?}", args, stderr);
    }
}

#[test]
fn missing_size_prints_one_line() {
    let assert = cmd().assert().code(1);
    let stderr = String::from_utf8(assert.get_output().stderr.clone()).unwrap();
    assert_eq!(stderr.lines().filter(|l| !l.trim().is_empty()).count(), 1);
}

#[test]
fn missing_config_file_errors() {
    cmd()
        .args(["--config", "/nonexistent/smxm.json"])
        .assert()
        .code(1)
        .stdout(predicate::str::is_empty())
        .stderr(predicate::str::contains("does not exist"));
}
