// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

// Allow panic!/unwrap/expect in test code
#![cfg_attr(test, allow(clippy::panic))]
#![cfg_attr(test, allow(clippy::unwrap_used))]
#![cfg_attr(test, allow(clippy::expect_used))]

//! Reader side of the tracking shell logs: timeline reconstruction and
//! per-date log indexing.

mod correlate;
pub mod decode;
mod log_dir;
mod log_sizes;
mod record;

pub use correlate::{correlate, Correlator};
pub use log_dir::{LogDir, LogDirError, TargetLogSummary, TIMING_LOG_NOT_FOUND};
pub use log_sizes::{check_log_sizes, Band, LogSizeCheck};
pub use record::{CommandRecord, Status, Timeline};

/// Identifier for a target's log: `/` and `.` replaced by `_`.
pub fn log_id(target: &str) -> String {
    target.replace(['/', '.'], "_")
}
