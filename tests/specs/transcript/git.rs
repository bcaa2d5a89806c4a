//! The built-in git inspection sequence against a real repository.

use crate::prelude::*;

#[test]
fn default_sequence_runs_every_git_command_in_a_fresh_repo() {
    let temp = Project::empty();
    if !temp.git_init() {
        eprintln!("git unavailable; skipping");
        return;
    }

    // A fresh repository has no HEAD, so most commands fail; all still run.
    temp.seqrun()
        .passes()
        .stdout_in_order(&[
            "=== Running commands in: ",
            ">>> git status",
            ">>> git log --oneline -20",
            ">>> git reflog --oneline -10",
            ">>> git diff --stat HEAD",
            ">>> git show --stat HEAD",
            ">>> git ls-tree --name-only HEAD",
            "=== All commands completed ===",
        ])
        .stdout_has("ERROR: command `git log --oneline -20` failed");
}

#[test]
fn default_sequence_outside_a_repo_reports_errors_and_exits_zero() {
    let temp = Project::empty();
    temp.seqrun()
        .env("GIT_CEILING_DIRECTORIES", temp.path())
        .passes()
        .stdout_has(">>> git status")
        .stdout_has("ERROR: ")
        .stdout_has("=== All commands completed ===");
}
