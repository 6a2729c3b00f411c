// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

// Allow panic!/unwrap/expect in test code
#![cfg_attr(test, allow(clippy::panic))]
#![cfg_attr(test, allow(clippy::unwrap_used))]
#![cfg_attr(test, allow(clippy::expect_used))]

//! ns-core: shared types for the Night Shift tracking shell

pub mod clock;
pub mod config;
pub mod log_paths;
pub mod target;
pub mod telemetry;
pub mod time_fmt;

pub use clock::{Clock, SystemClock};
pub use config::{blob_root, ConfigError, ShellConfig};
pub use target::{is_date_stamp, Target};
pub use telemetry::{format_timestamp, parse_timestamp, Tag, TelemetryRecord, UNIQUE_NR_RANGE};
pub use time_fmt::format_minutes;

#[cfg(any(test, feature = "test-support"))]
pub use clock::FakeClock;
