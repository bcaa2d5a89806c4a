// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Tests for successful commands, exit codes and captured output.

use super::{run_async, run_line, temp_context};
use super::{CommandExecutor, CommandSpec, ExecutionResult, ShellExecutor, Termination, TextEncoding};

// ---------------------------------------------------------------------------
// Success
// ---------------------------------------------------------------------------

#[tokio::test]
async fn echo_captures_stdout() {
    let (_dir, ctx) = temp_context();
    let result = run_line(&ctx, "echo hello").await;
    assert_eq!(
        result,
        ExecutionResult::Success {
            output: "hello\n".into()
        }
    );
}

#[tokio::test]
async fn command_line_is_passed_to_shell_verbatim() {
    let (_dir, ctx) = temp_context();
    let result = run_line(&ctx, "printf '%s|' a 'b c' && echo").await;
    assert_eq!(
        result,
        ExecutionResult::Success {
            output: "a|b c|\n".into()
        }
    );
}

#[tokio::test]
async fn runs_in_working_directory() {
    let (dir, ctx) = temp_context();
    std::fs::write(dir.path().join("marker.txt"), "x").unwrap();
    let result = run_line(&ctx, "ls").await;
    match result {
        ExecutionResult::Success { output } => assert!(output.contains("marker.txt"), "{output}"),
        other => panic!("expected Success, got: {other:?}"),
    }
}

#[tokio::test]
async fn stderr_on_success_is_not_reported() {
    let (_dir, ctx) = temp_context();
    let result = run_line(&ctx, "echo out; echo err >&2").await;
    assert_eq!(
        result,
        ExecutionResult::Success {
            output: "out\n".into()
        }
    );
}

#[tokio::test]
async fn large_output_is_not_truncated() {
    let (_dir, ctx) = temp_context();
    let result = run_line(&ctx, "seq 1 20000").await;
    match result {
        ExecutionResult::Success { output } => {
            assert_eq!(output.lines().count(), 20000);
            assert!(output.ends_with("20000\n"));
        }
        other => panic!("expected Success, got: {other:?}"),
    }
}

// ---------------------------------------------------------------------------
// Exit codes
// ---------------------------------------------------------------------------

#[yare::parameterized(
    true_cmd = { "true", 0 },
    false_cmd = { "false", 1 },
    explicit = { "exit 42", 42 },
    not_found_in_shell = { "definitely-not-a-real-command", 127 },
)]
fn exit_code(line: &str, expected: i32) {
    run_async(async {
        let (_dir, ctx) = temp_context();
        let captured = ShellExecutor::new()
            .execute(&CommandSpec::new("t", line), &ctx)
            .await
            .unwrap();
        match captured.termination {
            Termination::Exited(code) => assert_eq!(code, expected),
            other => panic!("expected Exited, got: {other:?}"),
        }
    });
}

#[tokio::test]
async fn non_zero_exit_keeps_partial_output() {
    let (_dir, ctx) = temp_context();
    let result = run_line(&ctx, "echo partial; echo oops >&2; exit 3").await;
    assert_eq!(
        result,
        ExecutionResult::Failure {
            message: "command `echo partial; echo oops >&2; exit 3` failed with exit code 3".into(),
            partial_stdout: Some("partial\n".into()),
            partial_stderr: Some("oops\n".into()),
        }
    );
}

#[tokio::test]
async fn non_zero_exit_without_output_has_no_partials() {
    let (_dir, ctx) = temp_context();
    match run_line(&ctx, "exit 5").await {
        ExecutionResult::Failure {
            partial_stdout,
            partial_stderr,
            ..
        } => {
            assert_eq!(partial_stdout, None);
            assert_eq!(partial_stderr, None);
        }
        other => panic!("expected Failure, got: {other:?}"),
    }
}

// ---------------------------------------------------------------------------
// Encoding
// ---------------------------------------------------------------------------

#[tokio::test]
async fn latin1_decodes_high_bytes() {
    let (_dir, ctx) = temp_context();
    let ctx = ctx.with_encoding(TextEncoding::Latin1);
    let result = run_line(&ctx, "printf 'caf\\351'").await;
    assert_eq!(
        result,
        ExecutionResult::Success {
            output: "café".into()
        }
    );
}

#[tokio::test]
async fn utf8_replaces_invalid_bytes() {
    let (_dir, ctx) = temp_context();
    let result = run_line(&ctx, "printf 'caf\\351'").await;
    assert_eq!(
        result,
        ExecutionResult::Success {
            output: "caf\u{FFFD}".into()
        }
    );
}
