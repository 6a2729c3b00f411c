// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! CLI command implementations

pub mod check_log_sizes;
pub mod logs;
pub mod shell;
pub mod timeline;

use std::path::PathBuf;

use anyhow::Result;

/// Project directory for the log viewers: `--project-dir` >
/// `NIGHT_SHIFT_PROJECT_DIR` > current directory.
pub fn resolve_project_dir(arg: Option<PathBuf>) -> Result<PathBuf> {
    if let Some(dir) = arg.or_else(crate::env::project_dir) {
        return Ok(dir);
    }
    Ok(std::env::current_dir()?)
}
