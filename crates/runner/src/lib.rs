// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Sequential command runner.
//!
//! Runs an ordered list of labeled command lines in one working directory,
//! each as its own child process, and writes a delimited transcript. A
//! failing command is reported and the run moves on.

pub mod config;
pub mod exec;
pub mod runner;
pub mod spec;
pub mod transcript;

pub use config::{default_commands, ConfigError, RunnerConfig, DEFAULT_COMMANDS};
pub use exec::{
    CapturedOutput, CommandExecutor, ExecError, ExecutionResult, ShellExecutor, Termination,
};
pub use runner::{RunState, RunSummary, Runner, RunnerError};
pub use spec::{CommandSpec, ExecutionContext, TextEncoding};
pub use transcript::{Transcript, RULE_WIDTH};

#[cfg(any(test, feature = "test-support"))]
pub use exec::{FakeExecutor, FakeResponse};
