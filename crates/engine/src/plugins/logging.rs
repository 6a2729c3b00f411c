// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Per-target output log.
//!
//! Appends a header to `logs/<date>/<target_stem>.log`, then rewrites the
//! command so its combined stdout/stderr is both passed through and appended
//! to that file. The log directory target only gets the stderr redirect.

use std::fs::OpenOptions;
use std::io::Write;
use std::path::{Path, PathBuf};

use ns_core::{format_timestamp, log_paths, Clock, Target};

use crate::chain::{Next, Plugin};
use crate::error::PluginError;
use crate::executor::quote_path;

pub struct LoggingPlugin<C> {
    work_dir: PathBuf,
    clock: C,
}

impl<C: Clock> LoggingPlugin<C> {
    pub fn new(work_dir: impl Into<PathBuf>, clock: C) -> Self {
        Self {
            work_dir: work_dir.into(),
            clock,
        }
    }

    fn write_header(&self, path: &Path, target: &Target) -> Result<(), PluginError> {
        let header = format!(
            "\n[tracking_shell {}] Working on target {} attempt {} command {:?}\n\n",
            format_timestamp(self.clock.now()),
            target.name,
            target.attempt_label(),
            target.command,
        );
        let write_err = |source| PluginError::Write {
            path: path.to_owned(),
            source,
        };
        // The date directory is a build target of its own; never create it here.
        let mut file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(path)
            .map_err(write_err)?;
        file.write_all(header.as_bytes()).map_err(write_err)?;
        file.flush().map_err(write_err)
    }
}

impl<C: Clock> Plugin for LoggingPlugin<C> {
    fn name(&self) -> &'static str {
        "logging"
    }

    fn call(&self, target: &mut Target, next: Next<'_>) -> i32 {
        if target.is_log_directory() {
            target.command = redirect_stderr(&target.command);
            return next.run(target);
        }

        let path = log_paths::target_log_path(&self.work_dir, target);
        target.command = match self.write_header(&path, target) {
            Ok(()) => tee_to_log(&target.command, &path),
            Err(e) => {
                tracing::warn!(
                    target_name = %target.name,
                    error = %e,
                    "could not open target log, running unlogged"
                );
                redirect_stderr(&target.command)
            }
        };
        next.run(target)
    }
}

// The group closes on its own line so a trailing `#` comment or a heredoc
// terminator on the command's last line stays intact.

/// `(<cmd>\n) 2>&1`
pub fn redirect_stderr(command: &str) -> String {
    format!("({}\n) 2>&1", command)
}

/// `(<cmd>\n) 2>&1 | tee -a '<path>'`
pub fn tee_to_log(command: &str, path: &Path) -> String {
    format!(
        "({}\n) 2>&1 | tee -a {}",
        command,
        quote_path(&path.to_string_lossy())
    )
}

#[cfg(test)]
#[path = "logging_tests.rs"]
mod tests;
