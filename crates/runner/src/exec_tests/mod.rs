// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Tests for single-command execution.

use super::*;
use crate::spec::TextEncoding;

#[cfg(unix)]
mod basic;
#[cfg(unix)]
mod errors;
mod results;
#[cfg(unix)]
mod timeout;
#[cfg(windows)]
mod windows;

/// Context rooted in a fresh temp directory. Keep the guard alive.
pub(crate) fn temp_context() -> (tempfile::TempDir, ExecutionContext) {
    let dir = tempfile::tempdir().unwrap();
    let ctx = ExecutionContext::new(dir.path());
    (dir, ctx)
}

/// Run `line` through the shell and fold the result.
pub(crate) async fn run_line(ctx: &ExecutionContext, line: &str) -> ExecutionResult {
    execute(&ShellExecutor::new(), &CommandSpec::new(line, line), ctx).await
}

/// Sync wrapper for async execution in parameterized tests.
pub(crate) fn run_async<F: std::future::Future>(f: F) -> F::Output {
    tokio::runtime::Runtime::new().unwrap().block_on(f)
}
