// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Read-only index over one date's directory under `<project>/logs`.

use std::cmp::Reverse;
use std::fs;
use std::path::{Path, PathBuf};
use std::sync::LazyLock;

use chrono::{NaiveDate, NaiveDateTime};
use ns_core::is_date_stamp;
use ns_core::log_paths::{date_log_dir, logs_root, timing_log_path};
use regex::Regex;
use serde::Serialize;
use thiserror::Error;

use crate::{correlate, log_id, Timeline};

/// Error reported when a date has no timing telemetry.
pub const TIMING_LOG_NOT_FOUND: &str = "Timing env log is not found!";

/// Prefixes of files in a date directory that are not per-target logs.
const NON_TARGET_PREFIXES: [&str; 3] = ["timing_env", "attempt", "trackingshell"];

/// Header written by the logging plugin before each recipe line.
#[allow(clippy::expect_used)]
static HEADER_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)\[tracking_shell [^\]]+\] Working on target (\S+) attempt")
        .expect("constant regex pattern is valid")
});

#[derive(Debug, Error)]
pub enum LogDirError {
    #[error("failed to read {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("no target log with id {0:?}")]
    NotFound(String),
}

impl LogDirError {
    fn io(path: &Path, source: std::io::Error) -> Self {
        Self::Io {
            path: path.to_path_buf(),
            source,
        }
    }
}

/// Summary of one per-target log file.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TargetLogSummary {
    pub id: String,
    /// File name without the `.log` extension.
    pub name: String,
    pub size: u64,
    pub lines: usize,
    /// The target named by the last header exists under the project.
    pub success: bool,
}

/// Logs of one project, scoped to one run date.
#[derive(Debug, Clone)]
pub struct LogDir {
    project_dir: PathBuf,
    date: NaiveDate,
}

impl LogDir {
    /// Open the logs of `project_dir`.
    ///
    /// Without an explicit `date` the latest available date is used, falling
    /// back to `today` when there are none.
    pub fn open(
        project_dir: impl Into<PathBuf>,
        date: Option<NaiveDate>,
        today: NaiveDate,
    ) -> Result<Self, LogDirError> {
        let project_dir = project_dir.into();
        let date = match date {
            Some(date) => date,
            None => available_dates(&project_dir)?
                .last()
                .copied()
                .unwrap_or(today),
        };
        Ok(Self { project_dir, date })
    }

    pub fn date(&self) -> NaiveDate {
        self.date
    }

    pub fn date_dir(&self) -> PathBuf {
        date_log_dir(&self.project_dir, self.date)
    }

    /// Correlate the date's timing log.
    pub fn timeline(&self, now: NaiveDateTime) -> Result<Timeline, LogDirError> {
        let path = timing_log_path(&self.project_dir, self.date);
        let content = match fs::read(&path) {
            Ok(bytes) => String::from_utf8_lossy(&bytes).into_owned(),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => String::new(),
            Err(e) => return Err(LogDirError::io(&path, e)),
        };
        if content.is_empty() {
            let mut timeline = Timeline::default();
            timeline.errors.insert(TIMING_LOG_NOT_FOUND.to_string());
            return Ok(timeline);
        }
        Ok(correlate(&content, now))
    }

    /// Per-target logs, failures first, then largest first.
    pub fn target_logs(&self) -> Result<Vec<TargetLogSummary>, LogDirError> {
        let mut summaries = self
            .target_log_files()?
            .iter()
            .map(|path| self.summarize(path))
            .collect::<Result<Vec<_>, _>>()?;
        summaries.sort_by_key(|s| (s.success, Reverse(s.size)));
        Ok(summaries)
    }

    /// Content of the target log whose id is `id`, trimmed.
    pub fn target_log_content(&self, id: &str) -> Result<String, LogDirError> {
        let path = self
            .target_log_files()?
            .into_iter()
            .find(|path| log_id(&file_stem(path)) == id)
            .ok_or_else(|| LogDirError::NotFound(id.to_string()))?;
        read_trimmed(&path)
    }

    fn target_log_files(&self) -> Result<Vec<PathBuf>, LogDirError> {
        let dir = self.date_dir();
        let entries = match fs::read_dir(&dir) {
            Ok(entries) => entries,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => return Ok(Vec::new()),
            Err(e) => return Err(LogDirError::io(&dir, e)),
        };
        let mut files = Vec::new();
        for entry in entries {
            let entry = entry.map_err(|e| LogDirError::io(&dir, e))?;
            let file_name = entry.file_name();
            let Some(file_name) = file_name.to_str() else {
                continue;
            };
            if file_name.ends_with(".log")
                && !NON_TARGET_PREFIXES.iter().any(|p| file_name.starts_with(p))
            {
                files.push(entry.path());
            }
        }
        files.sort();
        Ok(files)
    }

    fn summarize(&self, path: &Path) -> Result<TargetLogSummary, LogDirError> {
        let content = read_trimmed(path)?;
        let size = fs::metadata(path)
            .map_err(|e| LogDirError::io(path, e))?
            .len();
        let name = file_stem(path);
        Ok(TargetLogSummary {
            id: log_id(&name),
            name,
            size,
            lines: content.split('\n').count(),
            success: self.last_target_exists(&content),
        })
    }

    fn last_target_exists(&self, content: &str) -> bool {
        HEADER_PATTERN
            .captures_iter(content)
            .last()
            .and_then(|caps| caps.get(1))
            .is_some_and(|target| self.project_dir.join(target.as_str()).exists())
    }
}

/// Dates with a `logs/YYYY-MM-DD` directory, oldest first.
fn available_dates(project_dir: &Path) -> Result<Vec<NaiveDate>, LogDirError> {
    let root = logs_root(project_dir);
    let entries = match fs::read_dir(&root) {
        Ok(entries) => entries,
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => return Ok(Vec::new()),
        Err(e) => return Err(LogDirError::io(&root, e)),
    };
    let mut dates = Vec::new();
    for entry in entries {
        let entry = entry.map_err(|e| LogDirError::io(&root, e))?;
        if !entry.path().is_dir() {
            continue;
        }
        let name = entry.file_name();
        let Some(name) = name.to_str().filter(|n| is_date_stamp(n)) else {
            continue;
        };
        if let Ok(date) = name.parse::<NaiveDate>() {
            dates.push(date);
        }
    }
    dates.sort();
    Ok(dates)
}

fn file_stem(path: &Path) -> String {
    path.file_stem()
        .map(|s| s.to_string_lossy().into_owned())
        .unwrap_or_default()
}

fn read_trimmed(path: &Path) -> Result<String, LogDirError> {
    let bytes = fs::read(path).map_err(|e| LogDirError::io(path, e))?;
    Ok(String::from_utf8_lossy(&bytes).trim().to_string())
}

#[cfg(test)]
#[path = "log_dir_tests.rs"]
mod tests;
