// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Spawn command lines through the platform shell.

use std::process::Stdio;
use std::time::Instant;

use async_trait::async_trait;
use tokio::io::{AsyncRead, AsyncReadExt};
use tokio::process::Command;

use super::error::ExecError;
use super::result::{CapturedOutput, Termination};
use super::CommandExecutor;
use crate::spec::{CommandSpec, ExecutionContext};

const READ_CHUNK: usize = 8 * 1024;

/// Executes each command line with `sh -c` (or `cmd /d /s /c` on Windows).
#[derive(Debug, Clone, Copy, Default)]
pub struct ShellExecutor;

impl ShellExecutor {
    pub fn new() -> Self {
        Self
    }
}

#[async_trait]
impl CommandExecutor for ShellExecutor {
    async fn execute(
        &self,
        spec: &CommandSpec,
        ctx: &ExecutionContext,
    ) -> Result<CapturedOutput, ExecError> {
        let start = Instant::now();
        let cmd_span = tracing::info_span!(
            "seqrun.cmd",
            label = %spec.label,
            exit_code = tracing::field::Empty,
            duration_ms = tracing::field::Empty,
        );

        let mut process = shell_command(&spec.command_line);
        process.current_dir(&ctx.working_directory);
        process.stdin(Stdio::null());
        process.stdout(Stdio::piped());
        process.stderr(Stdio::piped());
        process.kill_on_drop(true);
        // Own process group, so a timeout can also reach background jobs.
        // Without a timeout the child stays in ours and still gets Ctrl-C.
        #[cfg(unix)]
        if ctx.timeout.is_some() {
            process.process_group(0);
        }

        let mut child = process.spawn().map_err(|source| ExecError::SpawnFailed {
            command: spec.command_line.clone(),
            source,
        })?;

        let pid = child.id();
        let stdout_pipe = child.stdout.take();
        let stderr_pipe = child.stderr.take();
        let mut stdout = Vec::new();
        let mut stderr = Vec::new();

        // Completed reads land in the buffers immediately, so dropping this
        // future on timeout keeps everything read so far.
        let finished = {
            let collect = async {
                let (out, err, status) = tokio::join!(
                    drain(stdout_pipe, &mut stdout),
                    drain(stderr_pipe, &mut stderr),
                    child.wait(),
                );
                out?;
                err?;
                status
            };
            match ctx.timeout {
                Some(limit) => tokio::time::timeout(limit, collect).await.ok(),
                None => Some(collect.await),
            }
        };

        let termination = match (finished, ctx.timeout) {
            (Some(Ok(status)), _) => Termination::from_status(status),
            (Some(Err(source)), _) => Termination::Interrupted(source),
            (None, Some(limit)) => {
                let exited = child.try_wait().ok().flatten();
                kill_group(pid, &spec.label);
                match exited {
                    Some(status) => Termination::Detached {
                        exit_code: status.code().unwrap_or(-1),
                        timeout: limit,
                    },
                    None => {
                        if let Err(e) = child.kill().await {
                            tracing::warn!(label = %spec.label, error = %e, "failed to kill timed-out command");
                        }
                        Termination::TimedOut(limit)
                    }
                }
            }
            (None, None) => {
                Termination::Interrupted(std::io::Error::other("wait ended without status"))
            }
        };

        let duration = start.elapsed();
        let exit_code = match termination {
            Termination::Exited(code) => code,
            _ => -1,
        };
        cmd_span.record("exit_code", exit_code);
        cmd_span.record("duration_ms", duration.as_millis() as u64);
        tracing::debug!(
            parent: &cmd_span,
            stdout_bytes = stdout.len(),
            stderr_bytes = stderr.len(),
            "command finished"
        );

        Ok(CapturedOutput {
            stdout,
            stderr,
            termination,
        })
    }
}

#[cfg(not(windows))]
fn shell_command(command_line: &str) -> Command {
    let mut cmd = Command::new("sh");
    cmd.arg("-c").arg(command_line);
    cmd
}

/// `cmd /d /s /c "<line>"`: with `/s` cmd strips exactly the outer quotes,
/// so the line arrives unchanged. `raw_arg` skips MSVCRT quoting, which
/// would turn inner `"` into `\"`.
#[cfg(windows)]
fn shell_command(command_line: &str) -> Command {
    let mut cmd = Command::new("cmd");
    cmd.args(["/d", "/s", "/c"]);
    cmd.raw_arg(format!("\"{command_line}\""));
    cmd
}

/// Kill everything left in the command's process group.
#[cfg(unix)]
fn kill_group(pid: Option<u32>, label: &str) {
    use nix::sys::signal::{killpg, Signal};
    use nix::unistd::Pid;

    let Some(pgid) = pid.and_then(|p| i32::try_from(p).ok()) else {
        return;
    };
    // ESRCH: the whole group is already gone.
    match killpg(Pid::from_raw(pgid), Signal::SIGKILL) {
        Ok(()) | Err(nix::errno::Errno::ESRCH) => {}
        Err(e) => tracing::warn!(label, error = %e, "failed to kill process group"),
    }
}

#[cfg(not(unix))]
fn kill_group(_pid: Option<u32>, _label: &str) {}

/// Append everything `reader` yields to `buf` until EOF.
async fn drain<R: AsyncRead + Unpin>(reader: Option<R>, buf: &mut Vec<u8>) -> std::io::Result<()> {
    let Some(mut reader) = reader else {
        return Ok(());
    };
    let mut chunk = [0u8; READ_CHUNK];
    loop {
        let n = reader.read(&mut chunk).await?;
        if n == 0 {
            return Ok(());
        }
        buf.extend_from_slice(&chunk[..n]);
    }
}
