// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Shared path builders for the per-date log directory.
//!
//! Used by both the plugins (writers) and the timeline reader so they agree
//! on the layout under a project's working directory:
//!   `<work_dir>/logs/<date>/<target_stem>.log`
//!   `<work_dir>/logs/<date>/timing_env.log`
//!   `<work_dir>/logs/<date>/trackingshell.log`

use std::path::{Path, PathBuf};

use chrono::NaiveDate;

use crate::Target;

/// Name of the logs directory under the working directory.
pub const LOGS_DIR: &str = "logs";

/// File name of the per-date timing telemetry log.
pub const TIMING_LOG_FILE: &str = "timing_env.log";

/// File name of the per-date diagnostic log.
pub const DIAGNOSTIC_LOG_FILE: &str = "trackingshell.log";

/// Build the path to the logs root.
///
/// Structure: `{work_dir}/logs`
pub fn logs_root(work_dir: &Path) -> PathBuf {
    work_dir.join(LOGS_DIR)
}

/// Build the path to one run date's log directory.
///
/// Structure: `{work_dir}/logs/{date}`
pub fn date_log_dir(work_dir: &Path, date: NaiveDate) -> PathBuf {
    logs_root(work_dir).join(date.to_string())
}

/// Build the path to a target's log file.
///
/// Structure: `{work_dir}/logs/{date}/{target name with "/" -> "_"}.log`
pub fn target_log_path(work_dir: &Path, target: &Target) -> PathBuf {
    date_log_dir(work_dir, target.date).join(format!("{}.log", target.log_file_stem()))
}

/// Build the path to the timing telemetry log.
///
/// Structure: `{work_dir}/logs/{date}/timing_env.log`
pub fn timing_log_path(work_dir: &Path, date: NaiveDate) -> PathBuf {
    date_log_dir(work_dir, date).join(TIMING_LOG_FILE)
}

#[cfg(test)]
#[path = "log_paths_tests.rs"]
mod tests;
