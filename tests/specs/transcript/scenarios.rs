//! Transcript structure for successful and empty runs.

use crate::prelude::*;
use crate::prelude::assert_eq;

#[test]
fn echo_ok() {
    let temp = Project::empty();
    let config = temp.config("[[command]]\nlabel = \"echo-ok\"\nrun = \"echo hello\"\n");
    temp.seqrun()
        .args(&["-c", &config])
        .passes()
        .stdout_in_order(&[">>> echo-ok", "hello", "=== All commands completed ==="])
        .stdout_lacks("ERROR:");
}

#[test]
fn exact_transcript_for_one_command() {
    let temp = Project::empty();
    let dir = temp.path().to_string_lossy().into_owned();
    let config = temp.config("[[command]]\nlabel = \"echo-ok\"\nrun = \"echo hello\"\n");
    let rule = "─".repeat(80);
    temp.seqrun().args(&["-c", &config, "-C", &dir]).passes().stdout_eq(&format!(
        "\n=== Running commands in: {dir} ===\n\n\n>>> echo-ok\n{rule}\nhello\n\n\n=== All commands completed ===\n\n"
    ));
}

#[test]
fn empty_sequence_prints_only_banners() {
    let temp = Project::empty();
    let dir = temp.path().to_string_lossy().into_owned();
    let config = temp.config("# nothing to run\n");
    let outcome = temp
        .seqrun()
        .args(&["-c", &config, "-C", &dir])
        .passes()
        .stdout_eq(&format!(
            "\n=== Running commands in: {dir} ===\n\n\n=== All commands completed ===\n\n"
        ));
    assert_eq!(outcome.code(), Some(0));
}

#[test]
fn commands_run_in_declaration_order() {
    let temp = Project::empty();
    let config = temp.config(
        r#"
[[command]]
label = "third-declared-first"
run = "echo 3"

[[command]]
label = "first-declared-second"
run = "echo 1"

[[command]]
label = "second-declared-third"
run = "echo 2"
"#,
    );
    temp.seqrun().args(&["-c", &config]).passes().stdout_in_order(&[
        ">>> third-declared-first",
        "3\n",
        ">>> first-declared-second",
        "1\n",
        ">>> second-declared-third",
        "2\n",
    ]);
}

#[test]
fn output_is_printed_verbatim() {
    let temp = Project::empty();
    let config = temp.config(
        "[[command]]\nlabel = \"spaces\"\nrun = \"printf '  indented\\n\\ttabbed\\ntrailing   \\n'\"\n",
    );
    temp.seqrun()
        .args(&["-c", &config])
        .passes()
        .stdout_has("  indented\n\ttabbed\ntrailing   \n");
}

#[test]
fn repeated_runs_have_identical_structure() {
    let temp = Project::empty();
    let config = temp.config(
        "[[command]]\nlabel = \"ok\"\nrun = \"echo ok\"\n\n[[command]]\nlabel = \"bad\"\nrun = \"exit 4\"\n",
    );
    let first = temp.seqrun().args(&["-c", &config]).passes();
    let second = temp.seqrun().args(&["-c", &config]).passes();
    assert_eq!(first.stdout, second.stdout);
}
