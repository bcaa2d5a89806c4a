// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Console transcript: banners, per-command sections, verbatim output.

use std::io::{self, Write};
use std::path::Path;

use crate::exec::ExecutionResult;

/// Width of the rule printed under each section header.
pub const RULE_WIDTH: usize = 80;
const RULE_CHAR: char = '─';

/// Writes the run transcript to a single stream so ordering is exact.
pub struct Transcript<W: Write> {
    out: W,
}

impl<W: Write> Transcript<W> {
    pub fn new(out: W) -> Self {
        Self { out }
    }

    pub fn opening(&mut self, working_directory: &Path) -> io::Result<()> {
        writeln!(
            self.out,
            "\n=== Running commands in: {} ===\n",
            working_directory.display()
        )?;
        self.out.flush()
    }

    pub fn section(&mut self, label: &str) -> io::Result<()> {
        writeln!(self.out, "\n>>> {label}")?;
        writeln!(self.out, "{}", rule())?;
        self.out.flush()
    }

    pub fn result(&mut self, result: &ExecutionResult) -> io::Result<()> {
        match result {
            ExecutionResult::Success { output } => writeln!(self.out, "{output}")?,
            ExecutionResult::Failure {
                message,
                partial_stdout,
                partial_stderr,
            } => {
                writeln!(self.out, "ERROR: {message}")?;
                if let Some(stdout) = partial_stdout {
                    writeln!(self.out, "STDOUT: {stdout}")?;
                }
                if let Some(stderr) = partial_stderr {
                    writeln!(self.out, "STDERR: {stderr}")?;
                }
            }
        }
        self.out.flush()
    }

    pub fn closing(&mut self) -> io::Result<()> {
        writeln!(self.out, "\n=== All commands completed ===\n")?;
        self.out.flush()
    }

    pub fn into_inner(self) -> W {
        self.out
    }
}

fn rule() -> String {
    RULE_CHAR.to_string().repeat(RULE_WIDTH)
}

#[cfg(test)]
#[path = "transcript_tests.rs"]
mod tests;
