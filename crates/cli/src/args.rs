// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Command-line arguments and config resolution.

use std::path::PathBuf;
use std::time::Duration;

use clap::{ArgAction, Parser, ValueEnum};
use seqrun_runner::{ConfigError, RunnerConfig, TextEncoding};

use crate::env;

#[derive(Parser, Debug)]
#[command(
    name = "seqrun",
    version,
    about = "Run a fixed sequence of inspection commands and print a transcript",
    long_about = "Run a fixed sequence of inspection commands and print a transcript.\n\n\
                  Each command runs once, in order, in the same working directory. A failing \
                  command is reported and the sequence continues. Without --config the \
                  built-in read-only git inspection sequence is used.",
    styles = crate::color::styles()
)]
pub struct Cli {
    /// TOML file listing `[[command]]` entries (env: SEQRUN_CONFIG)
    #[arg(short = 'c', long, value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// Working directory for every command
    #[arg(short = 'C', long = "dir", value_name = "PATH")]
    pub dir: Option<PathBuf>,

    /// Decoding for captured output
    #[arg(long, value_enum, value_name = "ENCODING")]
    pub encoding: Option<EncodingArg>,

    /// Kill a command still running after this many seconds (env: SEQRUN_TIMEOUT_MS)
    #[arg(long, value_name = "SECS", value_parser = clap::value_parser!(u64).range(1..))]
    pub timeout: Option<u64>,

    /// Print the resolved command sequence and exit without running it
    #[arg(long)]
    pub list: bool,

    /// Log more to stderr (-v info, -vv debug; env: SEQRUN_LOG)
    #[arg(short, long, action = ArgAction::Count)]
    pub verbose: u8,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
pub enum EncodingArg {
    #[value(name = "utf-8", alias = "utf8")]
    Utf8,
    #[value(name = "latin1")]
    Latin1,
}

impl From<EncodingArg> for TextEncoding {
    fn from(arg: EncodingArg) -> Self {
        match arg {
            EncodingArg::Utf8 => TextEncoding::Utf8,
            EncodingArg::Latin1 => TextEncoding::Latin1,
        }
    }
}

impl Cli {
    /// Layer flags over environment over config file over defaults.
    pub fn resolve_config(&self) -> Result<RunnerConfig, ConfigError> {
        let mut config = match self.config.clone().or_else(env::config_path) {
            Some(path) => {
                tracing::debug!(path = %path.display(), "loading config");
                RunnerConfig::load(&path)?
            }
            None => RunnerConfig::default(),
        };

        if let Some(timeout) = env::timeout()? {
            config = config.with_timeout(Some(timeout));
        }
        if let Some(dir) = &self.dir {
            config = config.with_working_directory(dir);
        }
        if let Some(encoding) = self.encoding {
            config = config.with_encoding(encoding.into());
        }
        if let Some(secs) = self.timeout {
            config = config.with_timeout(Some(Duration::from_secs(secs)));
        }

        // The opening banner always shows an absolute path.
        if let Ok(absolute) = std::path::absolute(&config.working_directory) {
            config.working_directory = absolute;
        }

        config.validate()?;
        Ok(config)
    }
}

#[cfg(test)]
#[path = "args_tests.rs"]
mod tests;
