// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Sequential runner: every command once, in order, failures reported inline.

use std::io::Write;

use crate::config::RunnerConfig;
use crate::exec::{self, CommandExecutor};
use crate::spec::{CommandSpec, ExecutionContext};
use crate::transcript::Transcript;

/// Faults in the runner itself. Unlike per-command failures these end the run.
#[derive(Debug, thiserror::Error)]
pub enum RunnerError {
    #[error("failed to write transcript: {0}")]
    Transcript(#[from] std::io::Error),

    #[error("invalid run state transition from {from:?}")]
    InvalidTransition { from: RunState },
}

/// Progress through the sequence.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RunState {
    NotStarted,
    /// Executing the command at this index.
    Running(usize),
    Completed,
}

impl RunState {
    /// Next state after the current step, for a sequence of `len` commands.
    ///
    /// A failed command advances exactly like a successful one.
    pub fn advance(self, len: usize) -> Result<RunState, RunnerError> {
        match self {
            RunState::NotStarted if len == 0 => Ok(RunState::Completed),
            RunState::NotStarted => Ok(RunState::Running(0)),
            RunState::Running(i) if i + 1 < len => Ok(RunState::Running(i + 1)),
            RunState::Running(i) if i < len => Ok(RunState::Completed),
            from => Err(RunnerError::InvalidTransition { from }),
        }
    }
}

/// Counts for one completed run.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RunSummary {
    pub attempted: usize,
    pub succeeded: usize,
    pub failed: usize,
}

/// Executes a fixed command sequence against one [`ExecutionContext`].
pub struct Runner<E> {
    executor: E,
    context: ExecutionContext,
    commands: Vec<CommandSpec>,
}

impl<E: CommandExecutor> Runner<E> {
    pub fn new(executor: E, context: ExecutionContext, commands: Vec<CommandSpec>) -> Self {
        Self {
            executor,
            context,
            commands,
        }
    }

    pub fn from_config(executor: E, config: RunnerConfig) -> Self {
        let context = config.context();
        Self::new(executor, context, config.commands)
    }

    pub fn context(&self) -> &ExecutionContext {
        &self.context
    }

    pub fn commands(&self) -> &[CommandSpec] {
        &self.commands
    }

    pub fn executor(&self) -> &E {
        &self.executor
    }

    /// Run the whole sequence, writing the transcript to `out`.
    ///
    /// Per-command failures never stop the run. Only a transcript write
    /// error returns early.
    pub async fn run<W: Write>(&self, out: W) -> Result<RunSummary, RunnerError> {
        let mut transcript = Transcript::new(out);
        let mut summary = RunSummary::default();
        let len = self.commands.len();

        transcript.opening(self.context.working_directory())?;
        tracing::info!(
            dir = %self.context.working_directory().display(),
            commands = len,
            "starting run"
        );

        let mut state = RunState::NotStarted.advance(len)?;
        while let RunState::Running(index) = state {
            let spec = &self.commands[index];
            transcript.section(&spec.label)?;

            let result = exec::execute(&self.executor, spec, &self.context).await;
            summary.attempted += 1;
            if result.is_success() {
                summary.succeeded += 1;
            } else {
                summary.failed += 1;
                tracing::info!(label = %spec.label, "command failed; continuing");
            }
            transcript.result(&result)?;

            state = state.advance(len)?;
        }

        transcript.closing()?;
        tracing::info!(
            succeeded = summary.succeeded,
            failed = summary.failed,
            "run completed"
        );
        Ok(summary)
    }
}

#[cfg(test)]
#[path = "runner_tests.rs"]
mod tests;
