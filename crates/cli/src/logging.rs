// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Diagnostic logging on stderr, kept apart from the stdout transcript.

use tracing_subscriber::EnvFilter;

use crate::env;

/// Default filter for a given `-v` count.
pub fn default_directive(verbosity: u8) -> &'static str {
    match verbosity {
        0 => "warn",
        1 => "info",
        _ => "debug",
    }
}

/// Build the filter: `SEQRUN_LOG` if set and valid, else the verbosity default.
pub fn filter(verbosity: u8) -> EnvFilter {
    env::log_filter()
        .and_then(|directives| match EnvFilter::try_new(&directives) {
            Ok(filter) => Some(filter),
            Err(e) => {
                eprintln!("warning: ignoring invalid SEQRUN_LOG '{directives}': {e}");
                None
            }
        })
        .unwrap_or_else(|| EnvFilter::new(default_directive(verbosity)))
}

pub fn init(verbosity: u8) {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter(verbosity))
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init();
}

#[cfg(test)]
#[path = "logging_tests.rs"]
mod tests;
