// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Timing telemetry records written to `timing_env.log`.
//!
//! Each record is one line of JSON. A wrapped command produces a `BEGIN`
//! line before it runs and an `END` line after it exits; both carry the
//! same `unique_nr` so readers can pair them without process ids.

use std::ops::Range;

use chrono::{DateTime, Local, NaiveDateTime};
use serde::{Deserialize, Serialize};

use crate::Target;

/// Range `unique_nr` is drawn from.
pub const UNIQUE_NR_RANGE: Range<u32> = 0..1_000_000;

/// Timestamp layout used in telemetry and log headers.
const TIMESTAMP_FORMAT: &str = "%Y-%m-%dT%H:%M:%S%.6f";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum Tag {
    Begin,
    End,
}

impl std::fmt::Display for Tag {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Tag::Begin => write!(f, "BEGIN"),
            Tag::End => write!(f, "END"),
        }
    }
}

/// One line of the timing log.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TelemetryRecord {
    pub command: String,
    pub target: String,
    pub unique_nr: u32,
    pub has_make_level: bool,
    pub started_at: String,
    pub tag: Tag,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub finished_at: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub exit_code: Option<i32>,
}

impl TelemetryRecord {
    /// Build the `BEGIN` record for a target about to run.
    ///
    /// Newlines are stripped from the command so the record stays on one line
    /// and so the correlator's `(command, unique_nr)` key is stable.
    pub fn begin(
        target: &Target,
        unique_nr: u32,
        has_make_level: bool,
        started_at: NaiveDateTime,
    ) -> Self {
        Self {
            command: target.command.replace('\n', ""),
            target: target.name.clone(),
            unique_nr,
            has_make_level,
            started_at: format_timestamp(started_at),
            tag: Tag::Begin,
            finished_at: None,
            exit_code: None,
        }
    }

    /// The matching `END` record: same fields plus finish time and exit code.
    pub fn end(&self, finished_at: NaiveDateTime, exit_code: i32) -> Self {
        Self {
            tag: Tag::End,
            finished_at: Some(format_timestamp(finished_at)),
            exit_code: Some(exit_code),
            ..self.clone()
        }
    }

    /// Serialize to a single newline-terminated line.
    pub fn to_line(&self) -> Result<String, serde_json::Error> {
        let mut line = serde_json::to_string(self)?;
        line.push('\n');
        Ok(line)
    }
}

/// Format a local wall-clock time the way telemetry stores it.
pub fn format_timestamp(ts: NaiveDateTime) -> String {
    ts.format(TIMESTAMP_FORMAT).to_string()
}

/// Parse a telemetry timestamp.
///
/// Accepts naive ISO-8601 with or without fractional seconds, a space in
/// place of the `T`, and RFC 3339 with an offset (converted to local time).
pub fn parse_timestamp(raw: &str) -> Option<NaiveDateTime> {
    let raw = raw.trim();
    if let Ok(ts) = raw.parse::<NaiveDateTime>() {
        return Some(ts);
    }
    if let Ok(ts) = NaiveDateTime::parse_from_str(raw, "%Y-%m-%d %H:%M:%S%.f") {
        return Some(ts);
    }
    DateTime::parse_from_rfc3339(raw)
        .ok()
        .map(|ts| ts.with_timezone(&Local).naive_local())
}

#[cfg(test)]
#[path = "telemetry_tests.rs"]
mod tests;
