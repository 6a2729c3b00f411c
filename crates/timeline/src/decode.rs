// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Lenient per-line decoding of `timing_env.log`.
//!
//! Lines may be torn by a crashed writer or hand-edited; anything that is not
//! a complete JSON object with `command`, `unique_nr` and `tag` is skipped.

use serde::Deserialize;

/// Tag as read back from disk. Unrecognised tags decode as [`RawTag::Other`]
/// so they can be reported instead of silently dropped.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
pub enum RawTag {
    #[serde(rename = "BEGIN")]
    Begin,
    #[serde(rename = "END")]
    End,
    #[serde(other)]
    Other,
}

impl std::fmt::Display for RawTag {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            RawTag::Begin => write!(f, "BEGIN"),
            RawTag::End => write!(f, "END"),
            RawTag::Other => write!(f, "unknown tag"),
        }
    }
}

/// One telemetry line; every field but the key and tag may be absent.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct RawRecord {
    pub command: String,
    pub unique_nr: u32,
    pub tag: RawTag,
    #[serde(default)]
    pub target: Option<String>,
    #[serde(default)]
    pub has_make_level: Option<bool>,
    #[serde(default)]
    pub started_at: Option<String>,
    #[serde(default)]
    pub finished_at: Option<String>,
    #[serde(default)]
    pub exit_code: Option<i32>,
}

impl RawRecord {
    /// Correlation key pairing BEGIN with END.
    pub fn key(&self) -> (String, u32) {
        (self.command.clone(), self.unique_nr)
    }
}

/// Result of decoding one line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Decoded {
    Record(RawRecord),
    Blank,
    Malformed,
}

pub fn decode_line(line: &str) -> Decoded {
    let trimmed = line.trim();
    if trimmed.is_empty() {
        return Decoded::Blank;
    }
    match serde_json::from_str::<RawRecord>(trimmed) {
        Ok(record) => Decoded::Record(record),
        Err(e) => {
            tracing::trace!(error = %e, "skipping undecodable timing line");
            Decoded::Malformed
        }
    }
}

#[cfg(test)]
#[path = "decode_tests.rs"]
mod tests;
