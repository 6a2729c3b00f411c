// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Build target being wrapped by the tracking shell.

use std::sync::LazyLock;

use chrono::NaiveDate;
use regex::Regex;
use serde::{Deserialize, Serialize};

/// Matches the bare per-date log directory target, e.g. `logs/2024-01-01`.
#[allow(clippy::expect_used)]
static LOG_DIRECTORY_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^logs/\d{4}-\d{2}-\d{2}$").expect("constant regex pattern is valid")
});

/// Matches a single date-stamp path segment.
#[allow(clippy::expect_used)]
static DATE_SEGMENT_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^\d{4}-\d{2}-\d{2}$").expect("constant regex pattern is valid"));

/// The unit of work: one recipe line of one build target.
///
/// A `Target` is owned by a single chain invocation. Plugins may rewrite
/// `command` before handing the target to their continuation; no other
/// field changes after construction.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Target {
    pub name: String,
    pub date: NaiveDate,
    pub command: String,
    /// Externally tracked retry counter (`None` when the runner did not set one).
    pub attempt: Option<u32>,
}

impl Target {
    pub fn new(name: impl Into<String>, date: NaiveDate, command: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            date,
            command: command.into(),
            attempt: None,
        }
    }

    pub fn with_attempt(mut self, attempt: Option<u32>) -> Self {
        self.attempt = attempt;
        self
    }

    /// True when the target is the run's log directory itself (`logs/YYYY-MM-DD`).
    pub fn is_log_directory(&self) -> bool {
        LOG_DIRECTORY_PATTERN.is_match(&self.name)
    }

    /// File stem used for the per-target log: path separators become `_`.
    pub fn log_file_stem(&self) -> String {
        self.name.replace('/', "_")
    }

    /// Target path with every date-stamp segment removed.
    ///
    /// `results/2024-01-01/report.csv` becomes `results/report.csv`.
    pub fn name_without_date(&self) -> String {
        self.name
            .split('/')
            .filter(|segment| !DATE_SEGMENT_PATTERN.is_match(segment))
            .collect::<Vec<_>>()
            .join("/")
    }

    /// Attempt counter as rendered in log headers.
    pub fn attempt_label(&self) -> String {
        match self.attempt {
            Some(n) => n.to_string(),
            None => "NULL".to_string(),
        }
    }
}

/// True when `segment` looks like `YYYY-MM-DD`.
pub fn is_date_stamp(segment: &str) -> bool {
    DATE_SEGMENT_PATTERN.is_match(segment)
}

#[cfg(test)]
#[path = "target_tests.rs"]
mod tests;
