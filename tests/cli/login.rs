//! Tests for `codeartifact-npm login`.

use crate::support::*;

#[test]
fn test_login_runs_aws() {
    let t = Test::with_package(PACKAGE_JSON_LOGIN_ONLY);

    let output = t.login();
    assert_success(&output);
    assert_stdout_contains(
        &output,
        "running: aws codeartifact login --tool npm --repository bar --domain foo",
    );
    assert_eq!(
        t.invocations(),
        vec!["aws codeartifact login --tool npm --repository bar --domain foo"]
    );
}

#[test]
fn test_login_with_scope() {
    let t = Test::with_package(PACKAGE_JSON_SCOPED);

    let output = t.login();
    assert_success(&output);
    assert_eq!(
        t.invocations(),
        vec!["aws codeartifact login --tool npm --namespace @myorg --repository bar --domain foo"]
    );
}

#[test]
fn test_login_prints_tool_output() {
    let t = Test::with_package(PACKAGE_JSON);
    t.stub("aws", CHATTY_STUB);

    let output = t.login();
    assert_success(&output);
    assert_stdout_contains(&output, "stdout: wrote config");
    assert_stdout_contains(&output, "stderr: npm WARN deprecated always-auth");
}

#[test]
fn test_login_failure_exits_non_zero() {
    let t = Test::with_package(PACKAGE_JSON);
    t.stub("aws", FAILING_STUB);

    let output = t.login();
    assert_failure(&output);
    assert_stderr_contains(&output, "exit code 3");
    assert_stderr_contains(&output, "npm ERR! boom");
}
