//! Shared helpers for CLI specs.

#![allow(dead_code)]

use std::path::{Path, PathBuf};

pub use similar_asserts::assert_eq;

/// A `seqrun` invocation with a clean environment.
pub fn cli() -> Cli {
    Cli::new()
}

pub struct Cli {
    cmd: assert_cmd::Command,
}

impl Cli {
    fn new() -> Self {
        let mut cmd = assert_cmd::Command::cargo_bin("seqrun").expect("seqrun binary should be built");
        cmd.env_remove("SEQRUN_CONFIG")
            .env_remove("SEQRUN_TIMEOUT_MS")
            .env_remove("SEQRUN_LOG")
            .env("NO_COLOR", "1");
        Self { cmd }
    }

    pub fn args(mut self, args: &[&str]) -> Self {
        self.cmd.args(args);
        self
    }

    pub fn env(mut self, key: &str, value: impl AsRef<std::ffi::OsStr>) -> Self {
        self.cmd.env(key, value);
        self
    }

    pub fn current_dir(mut self, dir: &Path) -> Self {
        self.cmd.current_dir(dir);
        self
    }

    /// Run and assert exit status zero.
    pub fn passes(mut self) -> Outcome {
        let output = self.run();
        assert!(
            output.status.success(),
            "expected success, got {:?}\nstdout:\n{}\nstderr:\n{}",
            output.status,
            output.stdout,
            output.stderr
        );
        output
    }

    /// Run and assert non-zero exit status.
    pub fn fails(mut self) -> Outcome {
        let output = self.run();
        assert!(
            !output.status.success(),
            "expected failure\nstdout:\n{}\nstderr:\n{}",
            output.stdout,
            output.stderr
        );
        output
    }

    fn run(&mut self) -> Outcome {
        let output = self.cmd.output().expect("seqrun should start");
        Outcome {
            status: output.status,
            stdout: String::from_utf8_lossy(&output.stdout).into_owned(),
            stderr: String::from_utf8_lossy(&output.stderr).into_owned(),
        }
    }
}

pub struct Outcome {
    pub status: std::process::ExitStatus,
    pub stdout: String,
    pub stderr: String,
}

impl Outcome {
    pub fn stdout_has(self, needle: &str) -> Self {
        assert!(self.stdout.contains(needle), "stdout missing {needle:?}:\n{}", self.stdout);
        self
    }

    pub fn stdout_lacks(self, needle: &str) -> Self {
        assert!(!self.stdout.contains(needle), "stdout unexpectedly has {needle:?}:\n{}", self.stdout);
        self
    }

    pub fn stderr_has(self, needle: &str) -> Self {
        assert!(self.stderr.contains(needle), "stderr missing {needle:?}:\n{}", self.stderr);
        self
    }

    pub fn stdout_eq(self, expected: &str) -> Self {
        assert_eq!(self.stdout.as_str(), expected);
        self
    }

    pub fn code(&self) -> Option<i32> {
        self.status.code()
    }

    /// Byte offset of `needle` in stdout; panics if absent.
    pub fn position(&self, needle: &str) -> usize {
        match self.stdout.find(needle) {
            Some(at) => at,
            None => panic!("stdout missing {needle:?}:\n{}", self.stdout),
        }
    }

    /// Assert the needles appear in stdout in this order.
    pub fn stdout_in_order(self, needles: &[&str]) -> Self {
        let mut from = 0;
        for needle in needles {
            match self.stdout[from..].find(needle) {
                Some(at) => from += at + needle.len(),
                None => panic!("{needle:?} not found after byte {from}:\n{}", self.stdout),
            }
        }
        self
    }
}

/// A scratch directory holding config files and a working tree.
pub struct Project {
    dir: tempfile::TempDir,
}

impl Project {
    pub fn empty() -> Self {
        let dir = tempfile::tempdir().expect("tempdir");
        Self { dir }
    }

    pub fn path(&self) -> &Path {
        self.dir.path()
    }

    pub fn join(&self, rel: &str) -> PathBuf {
        self.dir.path().join(rel)
    }

    pub fn file(&self, rel: &str, content: &str) -> PathBuf {
        let path = self.join(rel);
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent).expect("create parent");
        }
        std::fs::write(&path, content).expect("write file");
        path
    }

    /// Write `seqrun.toml` with the given body and return its path as a string.
    pub fn config(&self, body: &str) -> String {
        self.file("seqrun.toml", body).to_string_lossy().into_owned()
    }

    /// Initialize a git repository. Returns false when git is unavailable.
    pub fn git_init(&self) -> bool {
        std::process::Command::new("git")
            .args(["init", "-q"])
            .current_dir(self.path())
            .status()
            .map(|s| s.success())
            .unwrap_or(false)
    }

    /// `seqrun` running from inside this project.
    pub fn seqrun(&self) -> Cli {
        cli().current_dir(self.path())
    }
}
