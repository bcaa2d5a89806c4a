// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Command sequence data model: what to run and where to run it.

use serde::{Deserialize, Serialize};
use std::borrow::Cow;
use std::path::{Path, PathBuf};
use std::time::Duration;

/// A named external command line.
///
/// The command line is handed verbatim to the platform shell; it is never
/// parsed or rewritten by the runner.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct CommandSpec {
    /// Label shown in the transcript section header.
    pub label: String,
    /// Command line passed to the shell.
    #[serde(rename = "run")]
    pub command_line: String,
}

impl CommandSpec {
    pub fn new(label: impl Into<String>, command_line: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            command_line: command_line.into(),
        }
    }

    /// A spec whose label is the command line itself.
    pub fn labeled_by_command(command_line: impl Into<String>) -> Self {
        let command_line = command_line.into();
        Self {
            label: command_line.clone(),
            command_line,
        }
    }
}

/// How captured child output is decoded into text.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum TextEncoding {
    /// UTF-8; invalid sequences become U+FFFD.
    #[default]
    #[serde(rename = "utf-8", alias = "utf8")]
    Utf8,
    /// ISO-8859-1; every byte maps to the code point of the same value.
    #[serde(rename = "latin1", alias = "iso-8859-1")]
    Latin1,
}

impl TextEncoding {
    pub fn decode<'a>(&self, bytes: &'a [u8]) -> Cow<'a, str> {
        match self {
            TextEncoding::Utf8 => String::from_utf8_lossy(bytes),
            TextEncoding::Latin1 => Cow::Owned(bytes.iter().map(|&b| b as char).collect()),
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            TextEncoding::Utf8 => "utf-8",
            TextEncoding::Latin1 => "latin1",
        }
    }
}

impl std::fmt::Display for TextEncoding {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Shared, read-only environment for every command in a run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExecutionContext {
    pub working_directory: PathBuf,
    pub encoding: TextEncoding,
    /// Per-command limit. `None` waits for the child indefinitely.
    pub timeout: Option<Duration>,
}

impl ExecutionContext {
    pub fn new(working_directory: impl Into<PathBuf>) -> Self {
        Self {
            working_directory: working_directory.into(),
            encoding: TextEncoding::default(),
            timeout: None,
        }
    }

    pub fn with_encoding(mut self, encoding: TextEncoding) -> Self {
        self.encoding = encoding;
        self
    }

    pub fn with_timeout(mut self, timeout: Option<Duration>) -> Self {
        self.timeout = timeout;
        self
    }

    pub fn working_directory(&self) -> &Path {
        &self.working_directory
    }
}

#[cfg(test)]
#[path = "spec_tests.rs"]
mod tests;
