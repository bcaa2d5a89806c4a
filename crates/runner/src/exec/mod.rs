// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Child-process execution for a single command line.

mod error;
mod result;
mod shell;

#[cfg(any(test, feature = "test-support"))]
mod fake;

pub use error::ExecError;
pub use result::{CapturedOutput, ExecutionResult, Termination};
pub use shell::ShellExecutor;

#[cfg(any(test, feature = "test-support"))]
pub use fake::{FakeExecutor, FakeResponse};

use async_trait::async_trait;

use crate::spec::{CommandSpec, ExecutionContext};

/// Runs one command line to completion and hands back what it wrote.
///
/// `Err` is reserved for commands that never started; every child that
/// did start comes back as a [`CapturedOutput`], whatever its exit status.
#[async_trait]
pub trait CommandExecutor: Send + Sync {
    async fn execute(
        &self,
        spec: &CommandSpec,
        ctx: &ExecutionContext,
    ) -> Result<CapturedOutput, ExecError>;
}

/// Execute `spec` and fold the outcome into an [`ExecutionResult`].
pub async fn execute<E: CommandExecutor + ?Sized>(
    executor: &E,
    spec: &CommandSpec,
    ctx: &ExecutionContext,
) -> ExecutionResult {
    match executor.execute(spec, ctx).await {
        Ok(captured) => ExecutionResult::from_capture(spec, captured, ctx.encoding),
        Err(err) => {
            tracing::warn!(label = %spec.label, error = %err, "command did not start");
            ExecutionResult::from_error(&err)
        }
    }
}

#[cfg(test)]
#[path = "../exec_tests/mod.rs"]
mod tests;
