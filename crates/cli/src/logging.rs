// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Diagnostic output.
//!
//! `ns shell` writes diagnostics to `logs/<date>/trackingshell.log` when the
//! run's log directory exists and to stderr otherwise. The directory is never
//! created: it is a build target of its own. Stdout always belongs to the
//! wrapped command.

use std::io::IsTerminal;
use std::path::Path;

use chrono::NaiveDate;
use ns_core::log_paths::{date_log_dir, DIAGNOSTIC_LOG_FILE};
use tracing_appender::non_blocking::{NonBlocking, WorkerGuard};

/// Filter for `ns shell` when `RUST_LOG` is unset.
const SHELL_FILTER: &str = "warn";

/// Filter for the viewer commands when `RUST_LOG` is unset.
const VIEWER_FILTER: &str = "info";

/// Install the subscriber for `ns shell`. Keep the guard alive until exit so
/// buffered lines are flushed.
pub fn setup_shell_logging(work_dir: &Path, date: NaiveDate) -> WorkerGuard {
    let log_dir = date_log_dir(work_dir, date);
    if log_dir.is_dir() {
        let appender = tracing_appender::rolling::never(&log_dir, DIAGNOSTIC_LOG_FILE);
        let (writer, guard) = tracing_appender::non_blocking(appender);
        install(writer, false, SHELL_FILTER);
        guard
    } else {
        setup_stderr(SHELL_FILTER)
    }
}

/// Install a stderr subscriber for the viewer commands.
pub fn setup_viewer_logging() -> WorkerGuard {
    setup_stderr(VIEWER_FILTER)
}

fn setup_stderr(default_filter: &str) -> WorkerGuard {
    let (writer, guard) = tracing_appender::non_blocking(std::io::stderr());
    let ansi = std::io::stderr().is_terminal() && !crate::env::no_color();
    install(writer, ansi, default_filter);
    guard
}

fn install(writer: NonBlocking, ansi: bool, default_filter: &str) {
    use tracing_subscriber::{fmt, prelude::*, EnvFilter};

    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_filter));

    // A subscriber may already be installed (tests); keep the existing one.
    let _ = tracing_subscriber::registry()
        .with(filter)
        .with(fmt::layer().with_writer(writer).with_ansi(ansi))
        .try_init();
}
