// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Centralized environment variable access for the CLI.

use std::path::PathBuf;
use std::time::Duration;

use seqrun_runner::ConfigError;

const TIMEOUT_VAR: &str = "SEQRUN_TIMEOUT_MS";

/// Config file used when `--config` is not given.
pub fn config_path() -> Option<PathBuf> {
    std::env::var("SEQRUN_CONFIG")
        .ok()
        .filter(|s| !s.is_empty())
        .map(PathBuf::from)
}

/// Per-command timeout. Overrides the config file, not `--timeout`.
///
/// Unset or empty means no override; zero or non-numeric values are
/// rejected like a zero `timeout_secs` in a config file.
pub fn timeout() -> Result<Option<Duration>, ConfigError> {
    let Some(raw) = std::env::var(TIMEOUT_VAR).ok().filter(|s| !s.is_empty()) else {
        return Ok(None);
    };
    match raw.trim().parse::<u64>() {
        Ok(ms) if ms > 0 => Ok(Some(Duration::from_millis(ms))),
        _ => Err(ConfigError::InvalidTimeout {
            name: TIMEOUT_VAR.to_string(),
            value: raw,
        }),
    }
}

/// `tracing` filter directives, e.g. `seqrun_runner=debug`.
pub fn log_filter() -> Option<String> {
    std::env::var("SEQRUN_LOG").ok().filter(|s| !s.is_empty())
}

#[cfg(test)]
#[path = "env_tests.rs"]
mod tests;
