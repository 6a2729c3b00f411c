// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Sanity check on the volume of attempt logs a run produced.
//!
//! The total size of `attempt-*.log` files for a date is compared with the
//! median of the last week's totals. A sudden drop or spike usually means a
//! run that silently skipped work or started looping.

use std::fmt;
use std::fs;
use std::path::Path;

use chrono::{NaiveDate, TimeDelta};

use crate::LogDirError;

/// Days looked back over, including the checked date.
const WINDOW_DAYS: i64 = 7;

/// Days with data needed before the band is trusted.
const MIN_DAYS_WITH_DATA: usize = 5;

const LOWER_FACTOR: f64 = 0.9;
const UPPER_FACTOR: f64 = 1.15;

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum LogSizeCheck {
    NoLogs,
    NotEnoughData { days: usize },
    WithinRange(Band),
    OutOfRange(Band),
}

/// Accepted size band around the weekly median, in bytes.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Band {
    pub min: u64,
    pub median: f64,
    pub max: u64,
    pub actual: u64,
}

impl LogSizeCheck {
    pub fn passed(&self) -> bool {
        !matches!(self, LogSizeCheck::OutOfRange(_))
    }
}

impl fmt::Display for LogSizeCheck {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LogSizeCheck::NoLogs => write!(f, "No log files were found!"),
            LogSizeCheck::NotEnoughData { days } => {
                write!(f, "Not enough log files are available! ({days} days)")
            }
            LogSizeCheck::WithinRange(band) => write!(
                f,
                "Log size is within threshold: {} <= {} <= {}",
                band.min, band.actual, band.max
            ),
            LogSizeCheck::OutOfRange(band) => write!(
                f,
                "Log size is below or above threshold:\nExpected min: {} < actual: {} < max: {}",
                band.min, band.actual, band.max
            ),
        }
    }
}

/// Compare the attempt-log volume of `date` with the preceding week.
pub fn check_log_sizes(logs_root: &Path, date: NaiveDate) -> Result<LogSizeCheck, LogDirError> {
    let mut sizes = Vec::new();
    for back in 0..WINDOW_DAYS {
        let day = date - TimeDelta::days(back);
        let size = attempt_log_size(logs_root, day)?;
        if size > 0 {
            sizes.push(size);
        }
    }

    if sizes.is_empty() {
        return Ok(LogSizeCheck::NoLogs);
    }
    if sizes.len() < MIN_DAYS_WITH_DATA {
        return Ok(LogSizeCheck::NotEnoughData { days: sizes.len() });
    }

    let median = median(&mut sizes);
    let band = Band {
        min: (median * LOWER_FACTOR) as u64,
        median,
        max: (median * UPPER_FACTOR) as u64,
        actual: attempt_log_size(logs_root, date)?,
    };
    if band.actual < band.min || band.actual > band.max {
        Ok(LogSizeCheck::OutOfRange(band))
    } else {
        Ok(LogSizeCheck::WithinRange(band))
    }
}

/// Total bytes of `attempt-*.log` in one date directory; 0 when absent.
fn attempt_log_size(logs_root: &Path, date: NaiveDate) -> Result<u64, LogDirError> {
    let dir = logs_root.join(date.to_string());
    let entries = match fs::read_dir(&dir) {
        Ok(entries) => entries,
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => return Ok(0),
        Err(source) => return Err(LogDirError::Io { path: dir, source }),
    };
    let mut total = 0;
    for entry in entries {
        let entry = entry.map_err(|source| LogDirError::Io {
            path: dir.clone(),
            source,
        })?;
        let name = entry.file_name();
        let name = name.to_string_lossy();
        if name.starts_with("attempt-") && name.ends_with(".log") {
            let meta = entry.metadata().map_err(|source| LogDirError::Io {
                path: entry.path(),
                source,
            })?;
            total += meta.len();
        }
    }
    Ok(total)
}

fn median(values: &mut [u64]) -> f64 {
    values.sort_unstable();
    let mid = values.len() / 2;
    if values.len() % 2 == 1 {
        values[mid] as f64
    } else {
        (values[mid - 1] + values[mid]) as f64 / 2.0
    }
}

#[cfg(test)]
#[path = "log_sizes_tests.rs"]
mod tests;
