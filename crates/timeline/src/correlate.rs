// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Pair BEGIN/END telemetry into command execution records.
//!
//! Lines are keyed by `(command, unique_nr)`. The first BEGIN for a key opens
//! an entry; one END closes it. Repeated tags and orphan ENDs become error
//! strings rather than failures, so a partially written or concurrently
//! appended log always yields a timeline.

use std::collections::{BTreeSet, HashMap};

use chrono::{NaiveDateTime, TimeDelta};
use ns_core::parse_timestamp;

use crate::decode::{decode_line, Decoded, RawRecord, RawTag};
use crate::log_id;
use crate::record::{CommandRecord, Status, Timeline};

/// An entry between its BEGIN and the end of the scan.
#[derive(Debug)]
struct Pending {
    record: RawRecord,
    tags: Vec<RawTag>,
}

impl Pending {
    fn merge(&mut self, update: RawRecord) {
        let record = &mut self.record;
        if update.target.is_some() {
            record.target = update.target;
        }
        if update.has_make_level.is_some() {
            record.has_make_level = update.has_make_level;
        }
        if update.started_at.is_some() {
            record.started_at = update.started_at;
        }
        if update.finished_at.is_some() {
            record.finished_at = update.finished_at;
        }
        if update.exit_code.is_some() {
            record.exit_code = update.exit_code;
        }
        self.tags.push(update.tag);
    }
}

/// Aggregates decoded lines in file order.
#[derive(Debug, Default)]
pub struct Correlator {
    index: HashMap<(String, u32), usize>,
    entries: Vec<Pending>,
    errors: BTreeSet<String>,
}

impl Correlator {
    pub fn new() -> Self {
        Self::default()
    }

    /// Feed one raw line; undecodable lines are ignored.
    pub fn feed_line(&mut self, line: &str) {
        if let Decoded::Record(record) = decode_line(line) {
            self.feed(record);
        }
    }

    pub fn feed(&mut self, record: RawRecord) {
        let key = record.key();
        match self.index.get(&key).copied() {
            None if record.tag == RawTag::Begin => {
                self.index.insert(key, self.entries.len());
                self.entries.push(Pending {
                    tags: vec![RawTag::Begin],
                    record,
                });
            }
            Some(i) if self.entries[i].tags.contains(&record.tag) => {
                self.errors.insert(format!(
                    "Found duplicated command: {} (unique_nr {}, tag {})",
                    record.command, record.unique_nr, record.tag
                ));
            }
            Some(i) if record.tag == RawTag::End => {
                self.entries[i].merge(record);
            }
            _ => {
                self.errors.insert(format!(
                    "Unknown error: {} for command {} (unique_nr {})",
                    record.tag, record.command, record.unique_nr
                ));
            }
        }
    }

    /// Resolve timestamps and derive status, wait, length and attempt numbers.
    ///
    /// `now` stands in for the end of unfinished commands and decides whether
    /// they are still `running` (started today) or `timeout`.
    pub fn finish(self, now: NaiveDateTime) -> Timeline {
        let mut errors = self.errors;
        let mut resolved = Vec::with_capacity(self.entries.len());

        for Pending { record, .. } in self.entries {
            let Some(started_at) = record.started_at.as_deref().and_then(parse_timestamp) else {
                errors.insert(format!(
                    "Invalid timestamp: started_at {:?} for command {} (unique_nr {})",
                    record.started_at.as_deref().unwrap_or(""),
                    record.command,
                    record.unique_nr
                ));
                continue;
            };
            let finished_at = match record.finished_at.as_deref() {
                Some(raw) => {
                    let parsed = parse_timestamp(raw);
                    if parsed.is_none() {
                        errors.insert(format!(
                            "Invalid timestamp: finished_at {:?} for command {} (unique_nr {})",
                            raw, record.command, record.unique_nr
                        ));
                    }
                    parsed
                }
                None => None,
            };
            resolved.push((record, started_at, finished_at));
        }

        let Some(first_started) = resolved.first().map(|(_, started, _)| *started) else {
            return Timeline {
                commands: Vec::new(),
                errors,
            };
        };

        let mut attempts: HashMap<(String, String), u32> = HashMap::new();
        let commands = resolved
            .into_iter()
            .map(|(record, started_at, finished_at)| {
                let target = record.target.unwrap_or_default();
                let attempt_nr = attempts
                    .entry((target.clone(), record.command.clone()))
                    .and_modify(|n| *n += 1)
                    .or_insert(1);
                let date = started_at.date();
                CommandRecord {
                    status: status(finished_at, record.exit_code, date, now),
                    waited: minutes(started_at - first_started),
                    length: minutes(finished_at.unwrap_or(now) - started_at),
                    attempt_nr: *attempt_nr,
                    log_id: log_id(&target),
                    command: record.command,
                    target,
                    unique_nr: record.unique_nr,
                    has_make_level: record.has_make_level.unwrap_or(false),
                    started_at,
                    finished_at,
                    exit_code: record.exit_code,
                    date,
                }
            })
            .collect();

        Timeline { commands, errors }
    }
}

/// Build a timeline from the full content of one timing log.
pub fn correlate(content: &str, now: NaiveDateTime) -> Timeline {
    let mut correlator = Correlator::new();
    for line in content.lines() {
        correlator.feed_line(line);
    }
    correlator.finish(now)
}

/// Status of an entry with a known start.
///
/// An unfinished entry counts as `running` whenever it started today, even
/// if it has long since died; only entries from earlier days are `timeout`.
fn status(
    finished_at: Option<NaiveDateTime>,
    exit_code: Option<i32>,
    date: chrono::NaiveDate,
    now: NaiveDateTime,
) -> Status {
    match (finished_at, exit_code) {
        (Some(_), Some(0)) => Status::Success,
        (Some(_), _) => Status::Failure,
        (None, _) if date == now.date() => Status::Running,
        (None, _) => Status::Timeout,
    }
}

fn minutes(delta: TimeDelta) -> f64 {
    match delta.num_microseconds() {
        Some(us) => us as f64 / 60_000_000.0,
        None => delta.num_milliseconds() as f64 / 60_000.0,
    }
}

#[cfg(test)]
#[path = "correlate_tests.rs"]
mod tests;
