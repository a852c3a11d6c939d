//! Tests for dispatch, configuration errors and CLI flags.

use crate::support::*;

#[test]
fn test_help() {
    let t = Test::new();

    let output = t.cmd().arg("--help").output().unwrap();
    assert_success(&output);
    let out = stdout(&output);
    assert!(out.contains("codeartifact-npm") || out.contains("Usage"));
    assert!(out.contains("npm-project-config"));
}

#[test]
fn test_version_flag() {
    let t = Test::new();

    let output = t.cmd().arg("--version").output().unwrap();
    assert_success(&output);
    assert_stdout_contains(&output, "codeartifact-npm");
}

#[test]
fn test_unknown_operation_exits_zero() {
    let t = Test::new();

    let output = t.op("frobnicate");
    assert_success(&output);
    assert_stdout_contains(&output, "command not found: frobnicate");
    assert!(!stdout(&output).contains("running:"));
    assert!(t.invocations().is_empty());
}

#[test]
fn test_unknown_operation_ignores_config() {
    // No package.json at all: unknown operations never load it
    let t = Test::new();
    t.write_package_json("{ broken");

    let output = t.op("frobnicate");
    assert_success(&output);
    assert!(stderr(&output).is_empty());
}

#[test]
fn test_no_operation_is_default() {
    let t = Test::new();

    let output = t.cmd().output().unwrap();
    assert_success(&output);
    assert_stdout_contains(&output, "command not found: default");
}

#[test]
fn test_login_without_package_json_fails() {
    let t = Test::new();

    let output = t.login();
    assert_failure(&output);
    assert_stderr_contains(&output, "package.json not found");
    assert_stderr_contains(&output, "project root");
}

#[test]
fn test_malformed_package_json_fails() {
    let t = Test::new();
    t.write_package_json("{ not json");

    let output = t.npm_project_config();
    assert_failure(&output);
    assert_stderr_contains(&output, "failed to parse package.json");
}

#[test]
fn test_missing_section_fails() {
    let t = Test::with_package(r#"{"name":"my-app","config":{}}"#);

    let output = t.login();
    assert_failure(&output);
    assert_stderr_contains(&output, "No awsCodeArtifact config found");
    assert!(t.invocations().is_empty());
}

#[test]
fn test_missing_domain_fails() {
    let t = Test::with_package(r#"{"config":{"awsCodeArtifact":{"repository":"bar"}}}"#);

    let output = t.npm_project_config();
    assert_failure(&output);
    assert_stderr_contains(&output, "Missing domain config in awsCodeArtifact");
    assert!(t.invocations().is_empty());
}

#[test]
fn test_missing_repository_fails() {
    let t = Test::with_package(r#"{"config":{"awsCodeArtifact":{"domain":"foo"}}}"#);

    let output = t.login();
    assert_failure(&output);
    assert_stderr_contains(&output, "Missing repository config in awsCodeArtifact");
    assert!(t.invocations().is_empty());
}

#[test]
fn test_project_config_requires_region() {
    let t = Test::with_package(PACKAGE_JSON_LOGIN_ONLY);

    let output = t.npm_project_config();
    assert_failure(&output);
    assert_stderr_contains(&output, "Missing accountId config in awsCodeArtifact");
    assert!(t.invocations().is_empty());
}

#[test]
fn test_unknown_operation_output() {
    use predicates::prelude::*;

    let t = Test::new();
    t.cmd()
        .arg("frobnicate")
        .assert()
        .success()
        .stdout(predicate::str::contains("command not found: frobnicate"))
        .stderr(predicate::str::is_empty());
}
