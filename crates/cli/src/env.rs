// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Centralized environment variable access for the CLI crate.

use std::path::PathBuf;

/// Project directory the log viewers read from when `--project-dir` is absent.
pub const PROJECT_DIR_VAR: &str = "NIGHT_SHIFT_PROJECT_DIR";

// --- Project ---

pub fn project_dir() -> Option<PathBuf> {
    std::env::var(PROJECT_DIR_VAR)
        .ok()
        .filter(|s| !s.is_empty())
        .map(PathBuf::from)
}

// --- Color ---

pub fn no_color() -> bool {
    std::env::var("NO_COLOR").is_ok_and(|v| v == "1")
}

pub fn force_color() -> bool {
    std::env::var("COLOR").is_ok_and(|v| v == "1")
}
