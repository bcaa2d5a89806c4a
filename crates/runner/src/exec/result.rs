// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Captured child output and the per-command outcome derived from it.

use std::process::ExitStatus;
use std::time::Duration;

use super::error::ExecError;
use crate::spec::{CommandSpec, TextEncoding};

/// How a spawned child stopped.
#[derive(Debug)]
pub enum Termination {
    /// Normal exit with a status code.
    Exited(i32),
    /// Killed by a signal (Unix only; the number is unknown elsewhere).
    Signaled(Option<i32>),
    /// Killed after the per-command timeout elapsed.
    TimedOut(Duration),
    /// The shell exited, but processes it left in the background kept its
    /// output open until the timeout; they were killed.
    Detached { exit_code: i32, timeout: Duration },
    /// Output collection or waiting failed part-way through.
    Interrupted(std::io::Error),
}

impl Termination {
    pub fn from_status(status: ExitStatus) -> Self {
        match status.code() {
            Some(code) => Termination::Exited(code),
            None => Termination::Signaled(signal_of(status)),
        }
    }

    pub fn is_success(&self) -> bool {
        matches!(self, Termination::Exited(0))
    }

    /// Convert a non-successful termination into the error reported for `command`.
    pub fn into_error(self, command: &str) -> Option<ExecError> {
        let command = command.to_string();
        match self {
            Termination::Exited(0) => None,
            Termination::Exited(exit_code) => Some(ExecError::CommandFailed { command, exit_code }),
            Termination::Signaled(signal) => Some(ExecError::Terminated { command, signal }),
            Termination::TimedOut(timeout) => Some(ExecError::TimedOut { command, timeout }),
            Termination::Detached { exit_code, timeout } => Some(ExecError::OutputHeldOpen {
                command,
                exit_code,
                timeout,
            }),
            Termination::Interrupted(source) => Some(ExecError::Io { command, source }),
        }
    }
}

#[cfg(unix)]
fn signal_of(status: ExitStatus) -> Option<i32> {
    use std::os::unix::process::ExitStatusExt;
    status.signal()
}

#[cfg(not(unix))]
fn signal_of(_status: ExitStatus) -> Option<i32> {
    None
}

/// Everything a child wrote before it stopped, plus how it stopped.
///
/// Filled completely before success or failure is decided, so partial
/// output survives every failure mode except a refused spawn.
#[derive(Debug)]
pub struct CapturedOutput {
    pub stdout: Vec<u8>,
    pub stderr: Vec<u8>,
    pub termination: Termination,
}

impl CapturedOutput {
    pub fn exited(code: i32, stdout: impl Into<Vec<u8>>, stderr: impl Into<Vec<u8>>) -> Self {
        Self {
            stdout: stdout.into(),
            stderr: stderr.into(),
            termination: Termination::Exited(code),
        }
    }
}

/// Outcome of one command, consumed by the transcript and then dropped.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ExecutionResult {
    Success {
        output: String,
    },
    Failure {
        message: String,
        partial_stdout: Option<String>,
        partial_stderr: Option<String>,
    },
}

impl ExecutionResult {
    /// Branch on how the child stopped, decoding buffers with `encoding`.
    pub fn from_capture(
        spec: &CommandSpec,
        captured: CapturedOutput,
        encoding: TextEncoding,
    ) -> Self {
        let CapturedOutput {
            stdout,
            stderr,
            termination,
        } = captured;

        match termination.into_error(&spec.command_line) {
            None => ExecutionResult::Success {
                output: encoding.decode(&stdout).into_owned(),
            },
            Some(err) => ExecutionResult::Failure {
                message: err.to_string(),
                partial_stdout: non_empty(&stdout, encoding),
                partial_stderr: non_empty(&stderr, encoding),
            },
        }
    }

    /// A failure with no captured output (the child never ran).
    pub fn from_error(err: &ExecError) -> Self {
        ExecutionResult::Failure {
            message: err.to_string(),
            partial_stdout: None,
            partial_stderr: None,
        }
    }

    pub fn is_success(&self) -> bool {
        matches!(self, ExecutionResult::Success { .. })
    }
}

fn non_empty(bytes: &[u8], encoding: TextEncoding) -> Option<String> {
    if bytes.is_empty() {
        None
    } else {
        Some(encoding.decode(bytes).into_owned())
    }
}
