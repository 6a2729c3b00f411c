// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! BEGIN/END telemetry around the rest of the chain.
//!
//! BEGIN is flushed before the continuation starts and END after it returns,
//! so the pair bounds the real elapsed time. Each record is a single
//! `write` on an `O_APPEND` handle; concurrent invocations appending to the
//! same `timing_env.log` interleave whole lines only.

use std::fs::{File, OpenOptions};
use std::io::Write;
use std::path::{Path, PathBuf};

use ns_core::{log_paths, Clock, Target, TelemetryRecord, UNIQUE_NR_RANGE};
use rand::Rng;

use crate::chain::{Next, Plugin};
use crate::error::PluginError;

pub struct TimingPlugin<C> {
    work_dir: PathBuf,
    make_level: bool,
    clock: C,
}

impl<C: Clock> TimingPlugin<C> {
    pub fn new(work_dir: impl Into<PathBuf>, make_level: bool, clock: C) -> Self {
        Self {
            work_dir: work_dir.into(),
            make_level,
            clock,
        }
    }
}

impl<C: Clock> Plugin for TimingPlugin<C> {
    fn name(&self) -> &'static str {
        "timing"
    }

    fn call(&self, target: &mut Target, next: Next<'_>) -> i32 {
        let unique_nr = rand::rng().random_range(UNIQUE_NR_RANGE);
        let begin = TelemetryRecord::begin(target, unique_nr, self.make_level, self.clock.now());

        let path = log_paths::timing_log_path(&self.work_dir, target.date);
        let mut file = match OpenOptions::new().create(true).append(true).open(&path) {
            Ok(file) => file,
            Err(e) => {
                tracing::warn!(
                    target_name = %target.name,
                    path = %path.display(),
                    error = %e,
                    "could not open timing log, running untimed"
                );
                return next.run(target);
            }
        };

        if let Err(e) = append_record(&mut file, &path, &begin) {
            tracing::warn!(
                target_name = %target.name,
                unique_nr,
                error = %e,
                "failed to write BEGIN record"
            );
        }

        let exit_code = next.run(target);

        let end = begin.end(self.clock.now(), exit_code);
        if let Err(e) = append_record(&mut file, &path, &end) {
            tracing::warn!(
                target_name = %target.name,
                unique_nr,
                error = %e,
                "failed to write END record"
            );
        }
        exit_code
    }
}

fn append_record(
    file: &mut File,
    path: &Path,
    record: &TelemetryRecord,
) -> Result<(), PluginError> {
    let line = record.to_line()?;
    file.write_all(line.as_bytes())
        .and_then(|()| file.flush())
        .map_err(|source| PluginError::Write {
            path: path.to_owned(),
            source,
        })
}

#[cfg(test)]
#[path = "timing_tests.rs"]
mod tests;
