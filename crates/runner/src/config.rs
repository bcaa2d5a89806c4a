// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Run configuration: working directory, command sequence, decoding, timeout.
//!
//! A TOML file may replace any of the defaults:
//!
//! ```toml
//! working_directory = "."
//! encoding = "utf-8"
//! timeout_secs = 30
//!
//! [[command]]
//! label = "git status"
//! run = "git status"
//! ```

use std::path::{Path, PathBuf};
use std::time::Duration;

use serde::Deserialize;
use thiserror::Error;

use crate::spec::{CommandSpec, ExecutionContext, TextEncoding};

/// Read-only git inspection commands run when no config file is given.
pub const DEFAULT_COMMANDS: &[&str] = &[
    "git status",
    "git log --oneline -20",
    "git reflog --oneline -10",
    "git diff --stat HEAD",
    "git show --stat HEAD",
    "git ls-tree --name-only HEAD",
];

/// Errors from loading or validating a run configuration
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config {}: {source}", path.display())]
    Read {
        path: PathBuf,
        source: std::io::Error,
    },
    #[error("invalid config {}: {source}", path.display())]
    Parse {
        path: PathBuf,
        source: toml::de::Error,
    },
    #[error("command #{index} has an empty label")]
    EmptyLabel { index: usize },
    #[error("command '{label}' has an empty command line")]
    EmptyCommand { label: String },
    #[error("timeout must be greater than zero")]
    ZeroTimeout,
    #[error("invalid {name} '{value}': expected a positive number of milliseconds")]
    InvalidTimeout { name: String, value: String },
}

/// On-disk shape of a config file.
#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
struct ConfigFile {
    working_directory: Option<PathBuf>,
    encoding: Option<TextEncoding>,
    timeout_secs: Option<u64>,
    #[serde(default, rename = "command")]
    commands: Vec<CommandSpec>,
}

/// Everything a run needs, passed explicitly to the runner.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RunnerConfig {
    pub working_directory: PathBuf,
    pub commands: Vec<CommandSpec>,
    pub encoding: TextEncoding,
    pub timeout: Option<Duration>,
}

impl Default for RunnerConfig {
    fn default() -> Self {
        Self {
            working_directory: PathBuf::from("."),
            commands: default_commands(),
            encoding: TextEncoding::default(),
            timeout: None,
        }
    }
}

/// The built-in sequence, each labeled by its own command line.
pub fn default_commands() -> Vec<CommandSpec> {
    DEFAULT_COMMANDS
        .iter()
        .map(|cmd| CommandSpec::labeled_by_command(*cmd))
        .collect()
}

impl RunnerConfig {
    /// Load a config file. Relative working directories resolve against the
    /// file's own directory.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        let base = path.parent().unwrap_or_else(|| Path::new("."));
        Self::parse(&content, base).map_err(|e| match e {
            ConfigError::Parse { source, .. } => ConfigError::Parse {
                path: path.to_path_buf(),
                source,
            },
            other => other,
        })
    }

    /// Parse config text. A file without `[[command]]` entries yields an
    /// empty sequence, not the defaults.
    pub fn parse(content: &str, base_dir: &Path) -> Result<Self, ConfigError> {
        let file: ConfigFile = toml::from_str(content).map_err(|source| ConfigError::Parse {
            path: PathBuf::new(),
            source,
        })?;

        let working_directory = match file.working_directory {
            Some(dir) if dir.is_relative() => base_dir.join(dir),
            Some(dir) => dir,
            None => PathBuf::from("."),
        };
        let timeout = match file.timeout_secs {
            Some(0) => return Err(ConfigError::ZeroTimeout),
            Some(secs) => Some(Duration::from_secs(secs)),
            None => None,
        };

        let config = Self {
            working_directory,
            commands: file.commands,
            encoding: file.encoding.unwrap_or_default(),
            timeout,
        };
        config.validate()?;
        Ok(config)
    }

    /// Reject blank labels, blank command lines and zero timeouts.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.timeout == Some(Duration::ZERO) {
            return Err(ConfigError::ZeroTimeout);
        }
        for (index, spec) in self.commands.iter().enumerate() {
            if spec.label.trim().is_empty() {
                return Err(ConfigError::EmptyLabel { index });
            }
            if spec.command_line.trim().is_empty() {
                return Err(ConfigError::EmptyCommand {
                    label: spec.label.clone(),
                });
            }
        }
        Ok(())
    }

    pub fn with_working_directory(mut self, dir: impl Into<PathBuf>) -> Self {
        self.working_directory = dir.into();
        self
    }

    pub fn with_encoding(mut self, encoding: TextEncoding) -> Self {
        self.encoding = encoding;
        self
    }

    pub fn with_timeout(mut self, timeout: Option<Duration>) -> Self {
        self.timeout = timeout;
        self
    }

    /// The shared context every command runs under.
    pub fn context(&self) -> ExecutionContext {
        ExecutionContext::new(self.working_directory.clone())
            .with_encoding(self.encoding)
            .with_timeout(self.timeout)
    }
}

#[cfg(test)]
#[path = "config_tests.rs"]
mod tests;
