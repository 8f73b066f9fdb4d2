// Copyright 2023 The ChromiumOS Authors
// Use of this source code is governed by a BSD-style license that can be
// found in the LICENSE file.

use crate::LoggingConfig;
use anyhow::Result;

/// How [`crate::cli_main`] prepares the process before running a command.
pub struct Config {
    pub logging: LoggingConfig,
    /// Logs the shell-escaped command line once logging is up. With the
    /// default filters it only reaches the log file.
    pub log_command_line: bool,
}

impl Config {
    /// Reads logging settings from `PKGDEPS_LOG_*` and `RUST_LOG`, and logs
    /// the command line.
    pub fn from_env() -> Result<Self> {
        Ok(Self {
            logging: LoggingConfig::from_env()?,
            log_command_line: true,
        })
    }
}
