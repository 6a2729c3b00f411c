// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Shared test helpers for the engine crate.

use crate::chain::Terminal;
use chrono::{NaiveDate, NaiveDateTime, TimeDelta};
use ns_core::{FakeClock, Target};
use parking_lot::Mutex;
use std::path::PathBuf;
use std::sync::Arc;
use tempfile::{tempdir, TempDir};

pub(crate) fn run_date() -> NaiveDate {
    NaiveDate::from_ymd_opt(2024, 1, 1).unwrap()
}

pub(crate) fn at(h: u32, m: u32, s: u32) -> NaiveDateTime {
    run_date().and_hms_opt(h, m, s).unwrap()
}

pub(crate) fn target(name: &str, command: &str) -> Target {
    Target::new(name, run_date(), command)
}

/// Temporary project with `logs/<run_date>/` already created.
pub(crate) fn project() -> (TempDir, PathBuf) {
    let dir = tempdir().unwrap();
    let root = dir.path().to_path_buf();
    std::fs::create_dir_all(ns_core::log_paths::date_log_dir(&root, run_date())).unwrap();
    (dir, root)
}

/// Terminal that records the commands it receives and returns a fixed code.
#[derive(Clone)]
pub(crate) struct RecordingTerminal {
    code: i32,
    seen: Arc<Mutex<Vec<String>>>,
    advance: Option<(FakeClock, TimeDelta)>,
}

impl RecordingTerminal {
    pub(crate) fn new(code: i32) -> Self {
        Self {
            code,
            seen: Arc::new(Mutex::new(Vec::new())),
            advance: None,
        }
    }

    /// Advance `clock` by `by` while "running".
    pub(crate) fn advancing(mut self, clock: &FakeClock, by: TimeDelta) -> Self {
        self.advance = Some((clock.clone(), by));
        self
    }

    pub(crate) fn commands(&self) -> Vec<String> {
        self.seen.lock().clone()
    }
}

impl Terminal for RecordingTerminal {
    fn run(&self, target: &Target) -> i32 {
        self.seen.lock().push(target.command.clone());
        if let Some((clock, by)) = &self.advance {
            clock.advance(*by);
        }
        self.code
    }
}
