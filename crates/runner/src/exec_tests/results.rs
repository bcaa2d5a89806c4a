// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Tests for folding captured output into results, and the scripted executor.

use std::time::Duration;

use super::{execute, CapturedOutput, CommandSpec, ExecError, ExecutionContext, ExecutionResult};
use super::{FakeExecutor, FakeResponse, Termination, TextEncoding};

fn spec() -> CommandSpec {
    CommandSpec::new("label", "tool --flag")
}

#[test]
fn exit_zero_is_success_even_with_stderr() {
    let result = ExecutionResult::from_capture(
        &spec(),
        CapturedOutput::exited(0, "out", "warn"),
        TextEncoding::Utf8,
    );
    assert_eq!(result, ExecutionResult::Success { output: "out".into() });
}

#[test]
fn empty_success_output_is_empty_string() {
    let result =
        ExecutionResult::from_capture(&spec(), CapturedOutput::exited(0, "", ""), TextEncoding::Utf8);
    assert_eq!(result, ExecutionResult::Success { output: String::new() });
}

#[yare::parameterized(
    exit_code = { Termination::Exited(128), "command `tool --flag` failed with exit code 128" },
    unknown_signal = { Termination::Signaled(None), "command `tool --flag` was terminated by a signal" },
    known_signal = { Termination::Signaled(Some(9)), "command `tool --flag` was terminated by signal 9" },
    timed_out = { Termination::TimedOut(Duration::from_secs(2)), "command `tool --flag` timed out after 2000ms" },
    detached = {
        Termination::Detached { exit_code: 0, timeout: Duration::from_millis(500) },
        "command `tool --flag` exited with code 0 but background processes kept its output open; killed after 500ms"
    },
)]
fn failure_messages(termination: Termination, expected: &str) {
    let captured = CapturedOutput {
        stdout: Vec::new(),
        stderr: b"fatal: bad\n".to_vec(),
        termination,
    };
    let result = ExecutionResult::from_capture(&spec(), captured, TextEncoding::Utf8);
    assert_eq!(
        result,
        ExecutionResult::Failure {
            message: expected.to_string(),
            partial_stdout: None,
            partial_stderr: Some("fatal: bad\n".into()),
        }
    );
}

#[test]
fn interrupted_is_io_failure() {
    let err = Termination::Interrupted(std::io::Error::other("pipe broke"))
        .into_error("tool")
        .unwrap();
    assert!(matches!(err, ExecError::Io { .. }));
    assert_eq!(err.command(), "tool");
    assert_eq!(err.to_string(), "lost contact with `tool`: pipe broke");
}

#[test]
fn exit_zero_is_not_an_error() {
    assert!(Termination::Exited(0).is_success());
    assert!(Termination::Exited(0).into_error("tool").is_none());
}

#[tokio::test]
async fn fake_executor_records_calls_and_scripts_results() {
    let fake = FakeExecutor::new()
        .on("ok", FakeResponse::success("yes\n"))
        .on("missing", FakeResponse::not_found());
    let ctx = ExecutionContext::new(".");

    let ok = execute(&fake, &CommandSpec::new("first", "ok"), &ctx).await;
    let missing = execute(&fake, &CommandSpec::new("second", "missing"), &ctx).await;
    let unscripted = execute(&fake, &CommandSpec::new("third", "other"), &ctx).await;

    assert_eq!(ok, ExecutionResult::Success { output: "yes\n".into() });
    assert!(matches!(missing, ExecutionResult::Failure { ref message, .. } if message.starts_with("failed to spawn `missing`")));
    assert_eq!(unscripted, ExecutionResult::Success { output: String::new() });
    assert_eq!(fake.labels(), vec!["first", "second", "third"]);
}
