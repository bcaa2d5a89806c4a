// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Tests for `cmd` invocation on Windows.

use super::{run_line, temp_context};
use super::ExecutionResult;

#[tokio::test]
async fn embedded_quotes_reach_cmd_unescaped() {
    let (_dir, ctx) = temp_context();
    assert_eq!(
        run_line(&ctx, r#"echo "a b""#).await,
        ExecutionResult::Success {
            output: "\"a b\"\r\n".into()
        }
    );
}

#[tokio::test]
async fn quoted_operators_and_chaining_survive() {
    let (_dir, ctx) = temp_context();
    assert_eq!(
        run_line(&ctx, r#"echo "x & y" & echo z"#).await,
        ExecutionResult::Success {
            output: "\"x & y\" \r\nz\r\n".into()
        }
    );
}

#[tokio::test]
async fn nonzero_exit_is_failure() {
    let (_dir, ctx) = temp_context();
    match run_line(&ctx, "exit /b 4").await {
        ExecutionResult::Failure { message, .. } => {
            assert_eq!(message, "command `exit /b 4` failed with exit code 4");
        }
        other => panic!("expected Failure, got: {other:?}"),
    }
}
