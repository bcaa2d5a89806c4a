// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Per-command execution errors.
//!
//! None of these abort a run: the runner reports them in the transcript
//! and moves on to the next command.

use std::time::Duration;

/// Errors that can occur while executing a single command line.
#[derive(Debug, thiserror::Error)]
pub enum ExecError {
    /// The command exited with non-zero status.
    #[error("command `{command}` failed with exit code {exit_code}")]
    CommandFailed { command: String, exit_code: i32 },

    /// The command was killed by a signal before it could exit.
    #[error("command `{command}` was terminated by {}", signal_name(.signal))]
    Terminated {
        command: String,
        signal: Option<i32>,
    },

    /// The per-command timeout elapsed and the child was killed.
    #[error("command `{command}` timed out after {}ms", .timeout.as_millis())]
    TimedOut { command: String, timeout: Duration },

    /// The shell exited, but background processes kept its output open
    /// past the timeout.
    #[error(
        "command `{command}` exited with code {exit_code} but background processes kept its output open; killed after {}ms",
        .timeout.as_millis()
    )]
    OutputHeldOpen {
        command: String,
        exit_code: i32,
        timeout: Duration,
    },

    /// Shell not found, working directory missing, or spawn otherwise refused.
    #[error("failed to spawn `{command}`: {source}")]
    SpawnFailed {
        command: String,
        source: std::io::Error,
    },

    /// Reading the child's output or waiting on it failed.
    #[error("lost contact with `{command}`: {source}")]
    Io {
        command: String,
        source: std::io::Error,
    },
}

impl ExecError {
    /// The command line that produced this error.
    pub fn command(&self) -> &str {
        match self {
            ExecError::CommandFailed { command, .. }
            | ExecError::Terminated { command, .. }
            | ExecError::TimedOut { command, .. }
            | ExecError::OutputHeldOpen { command, .. }
            | ExecError::SpawnFailed { command, .. }
            | ExecError::Io { command, .. } => command,
        }
    }
}

fn signal_name(signal: &Option<i32>) -> String {
    match signal {
        Some(n) => format!("signal {n}"),
        None => "a signal".to_string(),
    }
}
