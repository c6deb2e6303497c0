// uget-rs: uGet CLI - Rust Port
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Process execution and lifecycle management.
//!
//! ```text
//! run()
//!   |
//!   v
//! build_command()   args, stdio
//!   |
//!   v
//! spawn() --> stream readers (FORWARD_TO_LOG / KEEP_IN_STRING)
//!   |
//!   v
//! wait --> validate exit_code (skip if ALLOW_FAILURE)
//!   |
//!   v
//! ProcessOutput { exit_code, stdout, stderr }
//! ```
//!
//! Execution is strictly sequential: `run()` blocks the caller until the
//! child exits. There is no cancellation support; interrupting uget kills
//! the whole process tree via `kill_on_drop`.

use crate::error::Result;
use anyhow::Context;
use std::process::Stdio;
use tokio::io::{AsyncBufReadExt, AsyncRead, BufReader};
use tokio::process::Command;
use tokio::task::JoinHandle;
use tracing::{debug, error, info, trace};

use super::builder::{ProcessBuilder, ProcessFlags, ProcessOutput, StreamFlags};
use crate::error::FsError;

impl ProcessBuilder {
    /// Returns the display name for this process.
    fn display_name(&self) -> String {
        self.name_override().map_or_else(
            || {
                self.program().file_stem().map_or_else(
                    || "process".to_string(),
                    |s| s.to_string_lossy().into_owned(),
                )
            },
            String::from,
        )
    }

    /// Spawns and runs the process, waiting for completion.
    ///
    /// This is the main entry point for executing a process.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - Spawning the child process fails.
    /// - The process exits with a non-zero status (and `ALLOW_FAILURE`
    ///   flag is not set).
    /// - IO error occurs during output streaming.
    pub async fn run(self) -> Result<ProcessOutput> {
        let name = self.display_name();
        let cmd_line = self.command_line();

        debug!(cmd = %cmd_line, "exec");

        let mut command = self.build_command()?;

        let mut child = command
            .spawn()
            .with_context(|| format!("Failed to spawn: {cmd_line}"))?;

        let pid = child.id();
        trace!(process = %name, pid = ?pid, "spawned");

        let stdout_flags = self.stdout_config().flags();
        let stderr_flags = self.stderr_config().flags();

        let stdout_handle =
            spawn_stream_reader(child.stdout.take(), stdout_flags, name.clone(), "stdout");
        let stderr_handle =
            spawn_stream_reader(child.stderr.take(), stderr_flags, name.clone(), "stderr");

        let exit_status = child
            .wait()
            .await
            .with_context(|| format!("Failed to wait for: {cmd_line}"))?;

        let stdout = await_reader(stdout_handle).await;
        let stderr = await_reader(stderr_handle).await;

        // Killed by a signal on unix = no code; report -1
        let exit_code = exit_status.code().unwrap_or(-1);
        let output = ProcessOutput::new(exit_code, stdout, stderr);

        if !self.process_flags().contains(ProcessFlags::ALLOW_FAILURE) && !output.success() {
            if !output.stderr().is_empty() {
                error!(process = %name, stderr = %output.stderr(), "process error output");
            }
            anyhow::bail!("{} exited with code {}", name, output.exit_code());
        }

        trace!(process = %name, exit_code = output.exit_code(), "completed");
        Ok(output)
    }

    /// Builds the tokio Command from this builder's configuration.
    fn build_command(&self) -> Result<Command> {
        let mut command = Command::new(self.program());

        command.args(self.args_slice());

        command.stdin(Stdio::null());
        command.stdout(stdio_for(self.stdout_config().flags(), self.stdout_config().file())?);
        command.stderr(stdio_for(self.stderr_config().flags(), self.stderr_config().file())?);

        command.kill_on_drop(true);

        Ok(command)
    }
}

/// Converts `StreamFlags` to a Stdio configuration.
fn stdio_for(flags: StreamFlags, file: Option<&std::path::PathBuf>) -> Result<Stdio> {
    if flags.contains(StreamFlags::TO_FILE) {
        let path = file.ok_or_else(|| FsError::NotFound("stream redirect file".to_string()))?;
        let handle = std::fs::File::create(path).map_err(|source| FsError::IoError {
            path: path.display().to_string(),
            source,
        })?;
        return Ok(Stdio::from(handle));
    }
    if flags.contains(StreamFlags::BIT_BUCKET) {
        Ok(Stdio::null())
    } else {
        Ok(Stdio::piped())
    }
}

/// Spawns a line reader over a piped stream, forwarding to the log
/// and/or collecting into a string depending on the flags.
fn spawn_stream_reader<R>(
    stream: Option<R>,
    flags: StreamFlags,
    process_name: String,
    stream_name: &'static str,
) -> Option<JoinHandle<String>>
where
    R: AsyncRead + Unpin + Send + 'static,
{
    if !flags.intersects(StreamFlags::FORWARD_TO_LOG | StreamFlags::KEEP_IN_STRING) {
        return None;
    }
    stream.map(|stream| {
        tokio::spawn(async move {
            let mut lines = BufReader::new(stream).lines();
            let mut collected = String::new();
            while let Ok(Some(line)) = lines.next_line().await {
                if flags.contains(StreamFlags::FORWARD_TO_LOG) {
                    info!(process = %process_name, stream = stream_name, "{line}");
                }
                if flags.contains(StreamFlags::KEEP_IN_STRING) {
                    if !collected.is_empty() {
                        collected.push('\n');
                    }
                    collected.push_str(&line);
                }
            }
            collected
        })
    })
}

/// Waits for a reader task, returning its collected output.
async fn await_reader(handle: Option<JoinHandle<String>>) -> String {
    match handle {
        Some(handle) => handle.await.unwrap_or_default(),
        None => String::new(),
    }
}
