//! Failing commands are reported and the sequence continues.

use crate::prelude::*;
use crate::prelude::assert_eq;

#[test]
fn bad_command_then_echo_ok() {
    let temp = Project::empty();
    let config = temp.config(
        r#"
[[command]]
label = "bad-cmd"
run = "definitely-not-a-real-command"

[[command]]
label = "echo-ok"
run = "echo hello"
"#,
    );
    let outcome = temp.seqrun().args(&["-c", &config]).passes();
    assert_eq!(outcome.code(), Some(0));
    outcome.stdout_in_order(&[
        ">>> bad-cmd",
        "ERROR: command `definitely-not-a-real-command` failed with exit code 127",
        "STDERR: ",
        ">>> echo-ok",
        "hello",
        "=== All commands completed ===",
    ]);
}

#[test]
fn partial_output_is_labeled() {
    let temp = Project::empty();
    let config = temp.config(
        "[[command]]\nlabel = \"half\"\nrun = \"echo got-this-far; echo broke >&2; exit 9\"\n",
    );
    temp.seqrun().args(&["-c", &config]).passes().stdout_in_order(&[
        ">>> half",
        "ERROR: command `echo got-this-far; echo broke >&2; exit 9` failed with exit code 9",
        "STDOUT: got-this-far\n",
        "STDERR: broke\n",
    ]);
}

#[test]
fn missing_working_directory_fails_every_command_but_exits_zero() {
    let temp = Project::empty();
    let missing = temp.join("gone").to_string_lossy().into_owned();
    let config = temp.config(
        "[[command]]\nlabel = \"one\"\nrun = \"echo 1\"\n\n[[command]]\nlabel = \"two\"\nrun = \"echo 2\"\n",
    );
    let outcome = temp.seqrun().args(&["-c", &config, "-C", &missing]).passes();
    assert_eq!(outcome.stdout.matches("ERROR: failed to spawn").count(), 2);
    outcome.stdout_in_order(&[">>> one", ">>> two", "=== All commands completed ==="]);
}

#[test]
fn timeout_kills_hung_command_and_continues() {
    let temp = Project::empty();
    let config = temp.config(
        r#"
[[command]]
label = "hang"
run = "echo before-hang; exec sleep 30"

[[command]]
label = "after"
run = "echo after"
"#,
    );
    temp.seqrun()
        .args(&["-c", &config, "--timeout", "1"])
        .passes()
        .stdout_in_order(&[
            ">>> hang",
            "ERROR: command `echo before-hang; exec sleep 30` timed out after 1000ms",
            "STDOUT: before-hang\n",
            ">>> after",
            "after\n",
        ]);
}

#[test]
fn timeout_from_environment() {
    let temp = Project::empty();
    let config = temp.config("[[command]]\nlabel = \"hang\"\nrun = \"exec sleep 30\"\n");
    temp.seqrun()
        .env("SEQRUN_TIMEOUT_MS", "300")
        .args(&["-c", &config])
        .passes()
        .stdout_has("timed out after 300ms");
}

#[test]
fn diagnostics_stay_off_stdout() {
    let temp = Project::empty();
    let config = temp.config("[[command]]\nlabel = \"bad\"\nrun = \"exit 1\"\n");
    let outcome = temp.seqrun().args(&["-c", &config, "-vv"]).passes();
    assert!(!outcome.stdout.contains("command failed; continuing"), "{}", outcome.stdout);
    assert!(outcome.stderr.contains("command failed; continuing"), "{}", outcome.stderr);
}
