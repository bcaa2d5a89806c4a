// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Tests for the optional per-command timeout.

use std::time::{Duration, Instant};

use super::{run_line, temp_context};
use super::{CommandExecutor, CommandSpec, ExecutionResult, ShellExecutor, Termination};

#[tokio::test]
async fn hung_command_is_killed_and_keeps_partial_output() {
    let (_dir, ctx) = temp_context();
    let ctx = ctx.with_timeout(Some(Duration::from_millis(500)));
    let started = Instant::now();

    let captured = ShellExecutor::new()
        .execute(&CommandSpec::new("hang", "echo started; exec sleep 30"), &ctx)
        .await
        .unwrap();

    assert!(started.elapsed() < Duration::from_secs(10));
    assert_eq!(captured.stdout, b"started\n");
    assert!(matches!(
        captured.termination,
        Termination::TimedOut(limit) if limit == Duration::from_millis(500)
    ));
}

#[tokio::test]
async fn timeout_failure_message() {
    let (_dir, ctx) = temp_context();
    let ctx = ctx.with_timeout(Some(Duration::from_millis(200)));
    match run_line(&ctx, "exec sleep 30").await {
        ExecutionResult::Failure { message, .. } => {
            assert_eq!(message, "command `exec sleep 30` timed out after 200ms");
        }
        other => panic!("expected Failure, got: {other:?}"),
    }
}

#[tokio::test]
async fn fast_command_is_unaffected_by_timeout() {
    let (_dir, ctx) = temp_context();
    let ctx = ctx.with_timeout(Some(Duration::from_secs(10)));
    assert_eq!(
        run_line(&ctx, "echo quick").await,
        ExecutionResult::Success {
            output: "quick\n".into()
        }
    );
}

#[tokio::test]
async fn background_job_holding_output_is_killed_with_the_group() {
    let (dir, ctx) = temp_context();
    let ctx = ctx.with_timeout(Some(Duration::from_millis(500)));

    let captured = ShellExecutor::new()
        .execute(
            &CommandSpec::new("bg", "sleep 30 & echo $! > bg.pid; echo hi"),
            &ctx,
        )
        .await
        .unwrap();

    assert_eq!(captured.stdout, b"hi\n");
    assert!(
        matches!(
            captured.termination,
            Termination::Detached { exit_code: 0, timeout } if timeout == Duration::from_millis(500)
        ),
        "got: {:?}",
        captured.termination
    );

    let pid = std::fs::read_to_string(dir.path().join("bg.pid")).unwrap();
    assert_process_gone(pid.trim());
}

#[tokio::test]
async fn background_job_failure_names_the_exit_code() {
    let (_dir, ctx) = temp_context();
    let ctx = ctx.with_timeout(Some(Duration::from_millis(300)));
    match run_line(&ctx, "sleep 30 & exit 3").await {
        ExecutionResult::Failure { message, .. } => assert_eq!(
            message,
            "command `sleep 30 & exit 3` exited with code 3 but background processes \
             kept its output open; killed after 300ms"
        ),
        other => panic!("expected Failure, got: {other:?}"),
    }
}

/// Wait until `pid` no longer runs. A zombie counts as gone, since its
/// parent shell has already been reaped and init collects it.
#[cfg(target_os = "linux")]
fn assert_process_gone(pid: &str) {
    let status = std::path::Path::new("/proc").join(pid).join("status");
    let deadline = Instant::now() + Duration::from_secs(5);
    while Instant::now() < deadline {
        match std::fs::read_to_string(&status) {
            Err(_) => return,
            Ok(text) if text.lines().any(|l| l.starts_with("State:") && l.contains('Z')) => return,
            Ok(_) => std::thread::sleep(Duration::from_millis(50)),
        }
    }
    panic!("background process {pid} still running after timeout kill");
}

#[cfg(not(target_os = "linux"))]
fn assert_process_gone(_pid: &str) {}
