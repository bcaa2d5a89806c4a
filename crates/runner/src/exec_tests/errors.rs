// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Tests for spawn failures and abnormal termination.

use super::{run_line, temp_context};
use super::{CommandExecutor, CommandSpec, ExecError, ExecutionContext, ExecutionResult, ShellExecutor, Termination};

// ---------------------------------------------------------------------------
// Spawn failures
// ---------------------------------------------------------------------------

#[tokio::test]
async fn missing_working_directory_is_spawn_failure() {
    let (dir, _) = temp_context();
    let ctx = ExecutionContext::new(dir.path().join("does-not-exist"));
    let err = ShellExecutor::new()
        .execute(&CommandSpec::new("status", "git status"), &ctx)
        .await
        .unwrap_err();
    match err {
        ExecError::SpawnFailed { command, source } => {
            assert_eq!(command, "git status");
            assert_eq!(source.kind(), std::io::ErrorKind::NotFound);
        }
        other => panic!("expected SpawnFailed, got: {other:?}"),
    }
}

#[tokio::test]
async fn spawn_failure_folds_into_failure_without_partials() {
    let (dir, _) = temp_context();
    let ctx = ExecutionContext::new(dir.path().join("does-not-exist"));
    match run_line(&ctx, "echo hi").await {
        ExecutionResult::Failure {
            message,
            partial_stdout,
            partial_stderr,
        } => {
            assert!(message.starts_with("failed to spawn `echo hi`"), "{message}");
            assert_eq!(partial_stdout, None);
            assert_eq!(partial_stderr, None);
        }
        other => panic!("expected Failure, got: {other:?}"),
    }
}

// ---------------------------------------------------------------------------
// Signals
// ---------------------------------------------------------------------------

#[tokio::test]
async fn killed_by_signal_reports_signal() {
    let (_dir, ctx) = temp_context();
    let captured = ShellExecutor::new()
        .execute(&CommandSpec::new("suicide", "echo before; kill -9 $$"), &ctx)
        .await
        .unwrap();
    assert_eq!(captured.stdout, b"before\n");
    match captured.termination {
        Termination::Signaled(signal) => assert_eq!(signal, Some(9)),
        other => panic!("expected Signaled, got: {other:?}"),
    }
}

#[tokio::test]
async fn signal_failure_message() {
    let (_dir, ctx) = temp_context();
    match run_line(&ctx, "kill -TERM $$").await {
        ExecutionResult::Failure { message, .. } => {
            assert_eq!(message, "command `kill -TERM $$` was terminated by signal 15");
        }
        other => panic!("expected Failure, got: {other:?}"),
    }
}
