// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Fatal runner faults carried back to `main` with a process exit code.
//!
//! Per-command failures never become an `ExitError`; they are part of the
//! transcript. Only setup and transcript faults end up here.

use std::process::ExitCode;

use seqrun_runner::{ConfigError, RunnerError};

/// Exit code for any fault in the runner's own control flow.
pub const FAULT: u8 = 1;

#[derive(Debug, thiserror::Error)]
#[error("{message}")]
pub struct ExitError {
    pub code: u8,
    pub message: String,
}

impl ExitError {
    pub fn new(code: u8, message: impl Into<String>) -> Self {
        Self {
            code,
            message: message.into(),
        }
    }
}

impl From<ConfigError> for ExitError {
    fn from(err: ConfigError) -> Self {
        Self::new(FAULT, err.to_string())
    }
}

impl From<RunnerError> for ExitError {
    fn from(err: RunnerError) -> Self {
        Self::new(FAULT, err.to_string())
    }
}

/// Print `err` to stderr and pick the process exit code for it.
pub fn report(err: &anyhow::Error) -> ExitCode {
    let code = err.downcast_ref::<ExitError>().map_or(FAULT, |e| e.code);
    eprintln!("error: {err:#}");
    ExitCode::from(code)
}
