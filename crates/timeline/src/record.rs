// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Correlated command records produced by the timeline builder.

use std::collections::BTreeSet;

use chrono::{NaiveDate, NaiveDateTime};
use serde::Serialize;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Status {
    Success,
    Failure,
    Running,
    Timeout,
}

impl std::fmt::Display for Status {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let s = match self {
            Status::Success => "success",
            Status::Failure => "failure",
            Status::Running => "running",
            Status::Timeout => "timeout",
        };
        f.write_str(s)
    }
}

/// One reconstructed execution interval.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CommandRecord {
    pub command: String,
    pub target: String,
    pub unique_nr: u32,
    pub has_make_level: bool,
    pub started_at: NaiveDateTime,
    pub finished_at: Option<NaiveDateTime>,
    pub exit_code: Option<i32>,
    /// Calendar date the command started on.
    pub date: NaiveDate,
    pub status: Status,
    /// Minutes between the first command's start and this one's.
    pub waited: f64,
    /// Minutes from start to finish, or to "now" while unfinished.
    pub length: f64,
    /// 1-based count of this `(target, command)` pair so far.
    pub attempt_nr: u32,
    /// Identifier of the target's log (see [`crate::log_id`]).
    pub log_id: String,
}

/// Ordered records plus protocol errors found while correlating.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct Timeline {
    pub commands: Vec<CommandRecord>,
    pub errors: BTreeSet<String>,
}
