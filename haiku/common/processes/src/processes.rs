// Copyright 2023 The ChromiumOS Authors
// Use of this source code is governed by a BSD-style license that can be
// found in the LICENSE file.

use anyhow::{bail, Context, Result};
use std::process::{Command, Output, Stdio};
use tracing::instrument;

/// Runs a child process to completion and collects its output.
///
/// The command is attempted exactly once. stdin is closed so that a tool
/// waiting for input cannot hang the caller.
#[instrument(skip_all, fields(command = %cmd.get_program().to_string_lossy()))]
pub fn run_and_capture(cmd: &mut Command) -> Result<Output> {
    let output = cmd
        .stdin(Stdio::null())
        .output()
        .with_context(|| format!("Failed to spawn {cmd:?}"))?;
    tracing::debug!(status = %output.status, "command finished");
    Ok(output)
}

/// Runs a child process and returns its stdout, failing if the process does
/// not exit successfully.
#[instrument(skip_all, fields(command = %cmd.get_program().to_string_lossy()))]
pub fn run_and_check_stdout(cmd: &mut Command) -> Result<String> {
    let output = run_and_capture(cmd)?;
    if !output.status.success() {
        bail!(
            "Command {cmd:?} failed with {}: {}",
            output.status,
            String::from_utf8_lossy(&output.stderr).trim_end()
        );
    }
    String::from_utf8(output.stdout).with_context(|| format!("{cmd:?} printed non-UTF-8 output"))
}
