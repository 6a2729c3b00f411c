// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Terminal stage: run the command through a fail-fast shell.

use std::path::PathBuf;
use std::process::{Command, ExitStatus};

use ns_core::Target;

use crate::chain::Terminal;

/// Exit code reported when the shell itself could not be started.
pub const SPAWN_FAILURE_EXIT_CODE: i32 = 127;

/// Flags giving fail-fast semantics: stop on the first failing statement,
/// on use of an unset variable, and on failure of any pipeline stage.
const STRICT_FLAGS: &[&str] = &["-e", "-u", "-o", "pipefail"];

/// Runs `target.command` with `bash -e -u -o pipefail -c`.
///
/// Stdio is inherited, so the command's output reaches the caller directly.
/// This blocks until the command exits; there is no timeout.
#[derive(Debug, Clone)]
pub struct StrictShell {
    shell: PathBuf,
    work_dir: PathBuf,
}

impl StrictShell {
    pub fn new(work_dir: impl Into<PathBuf>) -> Self {
        Self {
            shell: PathBuf::from("bash"),
            work_dir: work_dir.into(),
        }
    }

    /// Use a different shell binary. It must accept bash's strict-mode flags.
    pub fn shell(mut self, shell: impl Into<PathBuf>) -> Self {
        self.shell = shell.into();
        self
    }
}

impl Terminal for StrictShell {
    fn run(&self, target: &Target) -> i32 {
        tracing::debug!(target_name = %target.name, command = %target.command, "running");
        let status = Command::new(&self.shell)
            .args(STRICT_FLAGS)
            .arg("-c")
            .arg(&target.command)
            .current_dir(&self.work_dir)
            .status();
        match status {
            Ok(status) => exit_code(status),
            Err(e) => {
                tracing::error!(
                    target_name = %target.name,
                    shell = %self.shell.display(),
                    error = %e,
                    "failed to start shell"
                );
                SPAWN_FAILURE_EXIT_CODE
            }
        }
    }
}

/// Exit code of a finished process; signals map to `128 + signal`.
fn exit_code(status: ExitStatus) -> i32 {
    if let Some(code) = status.code() {
        return code;
    }
    #[cfg(unix)]
    {
        use std::os::unix::process::ExitStatusExt;
        if let Some(signal) = status.signal() {
            return 128 + signal;
        }
    }
    1
}

/// Quote a path for safe use inside a shell command.
pub(crate) fn quote_path(path: &str) -> String {
    format!("'{}'", path.replace('\'', "'\\''"))
}

#[cfg(test)]
#[path = "executor_tests.rs"]
mod tests;
