use assert_cmd::Command;
use predicates::prelude::*;

#[test]
fn prints_help() {
    let mut cmd = Command::cargo_bin("onetable").unwrap();
    cmd.arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("Usage:"));
}

#[test]
fn bad_argument_fails() {
    let mut cmd = Command::cargo_bin("onetable").unwrap();
    cmd.arg("--does-not-exist")
        .assert()
        .failure()
        .stderr(predicate::str::contains("error:"));
}

#[test]
fn translate_prints_request_artifacts() {
    let mut cmd = Command::cargo_bin("onetable").unwrap();
    let stdout = cmd
        .args(["translate", "userId = $1, age = $2", "abc", "25"])
        .assert()
        .success()
        .get_output()
        .stdout
        .clone();

    let parsed: serde_json::Value = serde_json::from_slice(&stdout).expect("output is valid JSON");
    assert_eq!(
        parsed,
        serde_json::json!({
            "key_attributes": {"userId": "abc", "age": 25},
            "key_condition_expression": "userId = :v1 AND age = :v2",
            "expression_values": {":v1": "abc", ":v2": 25},
        })
    );
}

#[test]
fn translate_reports_placeholder_errors() {
    let mut cmd = Command::cargo_bin("onetable").unwrap();
    cmd.args(["translate", "userId = $x", "123"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("placeholder '$x'"));
}

#[test]
fn commands_other_than_translate_need_a_table() {
    let mut cmd = Command::cargo_bin("onetable").unwrap();
    cmd.env_remove("ONETABLE_TABLE")
        .args(["get-one", "userId = $1", "123"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("no table given"));
}

#[test]
fn help_lists_table_and_offline_commands() {
    let mut cmd = Command::cargo_bin("onetable").unwrap();
    cmd.arg("--help").assert().success().stdout(
        predicate::str::contains("get-one")
            .and(predicate::str::contains("get-many"))
            .and(predicate::str::contains("delete"))
            .and(predicate::str::contains("translate")),
    );
}

#[test]
fn translate_keeps_quoted_numbers_as_strings() {
    let mut cmd = Command::cargo_bin("onetable").unwrap();
    let stdout = cmd
        .args(["translate", "userId = $1, zip = $2", r#""1234""#, "007"])
        .assert()
        .success()
        .get_output()
        .stdout
        .clone();

    let parsed: serde_json::Value = serde_json::from_slice(&stdout).expect("output is valid JSON");
    assert_eq!(parsed["key_attributes"]["userId"], serde_json::json!("1234"));
    assert_eq!(parsed["expression_values"][":v2"], serde_json::json!("007"));
}

#[test]
fn endpoints_without_a_scheme_are_rejected() {
    let mut cmd = Command::cargo_bin("onetable").unwrap();
    cmd.args([
        "--endpoint-url",
        "localhost:8000",
        "--table",
        "users",
        "get-one",
        "userId = $1",
        "123",
    ])
    .assert()
    .failure()
    .stderr(predicate::str::contains("must start with http:// or https://"));
}
