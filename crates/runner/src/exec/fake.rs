// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Scripted executor for tests: no processes are spawned.

use std::collections::HashMap;
use std::sync::Arc;
use std::time::Duration;

use async_trait::async_trait;
use parking_lot::Mutex;

use super::error::ExecError;
use super::result::{CapturedOutput, Termination};
use super::CommandExecutor;
use crate::spec::{CommandSpec, ExecutionContext};

/// Scripted outcome for one command line.
#[derive(Debug, Clone)]
pub enum FakeResponse {
    Exit {
        code: i32,
        stdout: String,
        stderr: String,
    },
    TimedOut {
        stdout: String,
        timeout: Duration,
    },
    SpawnError(std::io::ErrorKind),
}

impl FakeResponse {
    pub fn success(stdout: impl Into<String>) -> Self {
        FakeResponse::Exit {
            code: 0,
            stdout: stdout.into(),
            stderr: String::new(),
        }
    }

    pub fn failure(code: i32, stdout: impl Into<String>, stderr: impl Into<String>) -> Self {
        FakeResponse::Exit {
            code,
            stdout: stdout.into(),
            stderr: stderr.into(),
        }
    }

    pub fn not_found() -> Self {
        FakeResponse::SpawnError(std::io::ErrorKind::NotFound)
    }
}

/// Records every invocation and answers from a script keyed by command line.
///
/// Unscripted command lines succeed with empty output.
#[derive(Clone, Default)]
pub struct FakeExecutor {
    responses: Arc<Mutex<HashMap<String, FakeResponse>>>,
    calls: Arc<Mutex<Vec<CommandSpec>>>,
}

impl FakeExecutor {
    pub fn new() -> Self {
        Self::default()
    }

    /// Script the response for `command_line`.
    pub fn on(self, command_line: impl Into<String>, response: FakeResponse) -> Self {
        self.responses.lock().insert(command_line.into(), response);
        self
    }

    /// Specs executed so far, in invocation order.
    pub fn calls(&self) -> Vec<CommandSpec> {
        self.calls.lock().clone()
    }

    /// Labels executed so far, in invocation order.
    pub fn labels(&self) -> Vec<String> {
        self.calls.lock().iter().map(|c| c.label.clone()).collect()
    }
}

#[async_trait]
impl CommandExecutor for FakeExecutor {
    async fn execute(
        &self,
        spec: &CommandSpec,
        _ctx: &ExecutionContext,
    ) -> Result<CapturedOutput, ExecError> {
        self.calls.lock().push(spec.clone());
        let response = self
            .responses
            .lock()
            .get(&spec.command_line)
            .cloned()
            .unwrap_or_else(|| FakeResponse::success(""));

        match response {
            FakeResponse::Exit {
                code,
                stdout,
                stderr,
            } => Ok(CapturedOutput::exited(code, stdout, stderr)),
            FakeResponse::TimedOut { stdout, timeout } => Ok(CapturedOutput {
                stdout: stdout.into_bytes(),
                stderr: Vec::new(),
                termination: Termination::TimedOut(timeout),
            }),
            FakeResponse::SpawnError(kind) => Err(ExecError::SpawnFailed {
                command: spec.command_line.clone(),
                source: std::io::Error::from(kind),
            }),
        }
    }
}
