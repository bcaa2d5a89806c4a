//! Config file loading, overrides, and `--list`.

use crate::prelude::*;
use crate::prelude::assert_eq;

#[test]
fn list_shows_default_git_sequence_without_running() {
    let temp = Project::empty();
    temp.seqrun()
        .args(&["--list"])
        .passes()
        .stdout_eq(
            "git status: git status\n\
             git log --oneline -20: git log --oneline -20\n\
             git reflog --oneline -10: git reflog --oneline -10\n\
             git diff --stat HEAD: git diff --stat HEAD\n\
             git show --stat HEAD: git show --stat HEAD\n\
             git ls-tree --name-only HEAD: git ls-tree --name-only HEAD\n",
        );
}

#[test]
fn list_shows_configured_sequence() {
    let temp = Project::empty();
    let config = temp.config(
        r#"
[[command]]
label = "greet"
run = "echo hi"

[[command]]
label = "files"
run = "ls -a"
"#,
    );
    temp.seqrun()
        .args(&["--config", &config, "--list"])
        .passes()
        .stdout_eq("greet: echo hi\nfiles: ls -a\n");
}

#[test]
fn config_from_environment() {
    let temp = Project::empty();
    let config = temp.config("[[command]]\nlabel = \"from-env\"\nrun = \"echo env\"\n");
    temp.seqrun()
        .env("SEQRUN_CONFIG", &config)
        .args(&["--list"])
        .passes()
        .stdout_eq("from-env: echo env\n");
}

#[test]
fn relative_working_directory_is_relative_to_config_file() {
    let temp = Project::empty();
    temp.file("repo/marker.txt", "x");
    let config = temp.config(
        "working_directory = \"repo\"\n\n[[command]]\nlabel = \"ls\"\nrun = \"ls\"\n",
    );
    cli()
        .args(&["-c", &config])
        .passes()
        .stdout_has("marker.txt");
}

#[test]
fn dir_flag_overrides_config_working_directory() {
    let temp = Project::empty();
    temp.file("other/flagged.txt", "x");
    let config = temp.config(
        "working_directory = \"/nonexistent-seqrun-dir\"\n\n[[command]]\nlabel = \"ls\"\nrun = \"ls\"\n",
    );
    let other = temp.join("other").to_string_lossy().into_owned();
    cli()
        .args(&["-c", &config, "-C", &other])
        .passes()
        .stdout_has(&format!("=== Running commands in: {other} ==="))
        .stdout_has("flagged.txt")
        .stdout_lacks("ERROR:");
}

#[test]
fn missing_config_file_is_fatal() {
    let temp = Project::empty();
    let missing = temp.join("absent.toml").to_string_lossy().into_owned();
    let outcome = temp
        .seqrun()
        .args(&["-c", &missing])
        .fails()
        .stderr_has("error: failed to read config");
    assert_eq!(outcome.code(), Some(1));
    assert_eq!(outcome.stdout.as_str(), "");
}

#[test]
fn invalid_config_is_fatal_before_any_command() {
    let temp = Project::empty();
    let config = temp.config("[[command]]\nlabel = \"x\"\nrun = \"\"\n");
    temp.seqrun()
        .args(&["-c", &config])
        .fails()
        .stderr_has("command 'x' has an empty command line")
        .stdout_lacks(">>>");
}

#[test]
fn invalid_env_timeout_is_fatal_before_any_command() {
    let temp = Project::empty();
    let outcome = temp
        .seqrun()
        .env("SEQRUN_TIMEOUT_MS", "soon")
        .fails()
        .stderr_has("error: invalid SEQRUN_TIMEOUT_MS 'soon': expected a positive number of milliseconds")
        .stdout_lacks(">>>");
    assert_eq!(outcome.code(), Some(1));
}
