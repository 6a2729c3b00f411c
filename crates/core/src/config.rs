// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Environment-derived configuration for one tracking shell invocation.
//!
//! Every variable is read once here; plugins only ever see [`ShellConfig`].

use std::path::PathBuf;

use thiserror::Error;

/// Set by `make` in recursive invocations; only its presence matters.
pub const MAKE_LEVEL_VAR: &str = "MAKELEVEL";
/// Retry counter maintained by the outer runner.
pub const ATTEMPT_VAR: &str = "ATTEMPT_COUNT";
/// Blob store bucket; upload is disabled when unset.
pub const BUCKET_VAR: &str = "NIGHT_SHIFT_BUCKET";
/// Identifier of the machine producing artifacts.
pub const INSTANCE_ID_VAR: &str = "NIGHT_SHIFT_INSTANCE_ID";
/// Root directory of the directory-backed blob store.
pub const BLOB_DIR_VAR: &str = "NIGHT_SHIFT_BLOB_DIR";

pub const DEFAULT_INSTANCE_ID: &str = "UNKNOWN-INSTANCE-ID";

/// Artifacts with these suffixes are uploaded as a placeholder body.
pub const DEFAULT_BIG_DATA_EXTENSIONS: &[&str] = &[".gz", ".csv", ".json", ".zip", ".xml"];

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("could not determine state directory: set {BLOB_DIR_VAR}, XDG_STATE_HOME or HOME")]
    NoStateDir,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ShellConfig {
    /// Directory commands run in; `logs/` and target files resolve against it.
    pub work_dir: PathBuf,
    pub make_level: bool,
    pub attempt: Option<u32>,
    pub bucket: Option<String>,
    pub instance_id: String,
    pub big_data_extensions: Vec<String>,
}

impl ShellConfig {
    /// Configuration with nothing set: top-level, no attempt, upload disabled.
    pub fn new(work_dir: impl Into<PathBuf>) -> Self {
        Self {
            work_dir: work_dir.into(),
            make_level: false,
            attempt: None,
            bucket: None,
            instance_id: DEFAULT_INSTANCE_ID.to_string(),
            big_data_extensions: DEFAULT_BIG_DATA_EXTENSIONS
                .iter()
                .map(|ext| ext.to_string())
                .collect(),
        }
    }

    /// Read configuration from the process environment.
    pub fn from_env(work_dir: impl Into<PathBuf>) -> Self {
        Self::from_lookup(work_dir, |key| std::env::var(key).ok())
    }

    /// Read configuration through an arbitrary variable lookup.
    pub fn from_lookup(
        work_dir: impl Into<PathBuf>,
        lookup: impl Fn(&str) -> Option<String>,
    ) -> Self {
        let mut config = Self::new(work_dir);
        config.make_level = lookup(MAKE_LEVEL_VAR).is_some();
        config.attempt = lookup(ATTEMPT_VAR).and_then(|raw| parse_attempt(&raw));
        config.bucket = lookup(BUCKET_VAR).filter(|b| !b.trim().is_empty());
        if let Some(id) = lookup(INSTANCE_ID_VAR).filter(|id| !id.trim().is_empty()) {
            config.instance_id = id;
        }
        config
    }

    pub fn is_big_data_file(&self, name: &str) -> bool {
        self.big_data_extensions
            .iter()
            .any(|ext| name.ends_with(ext.as_str()))
    }
}

fn parse_attempt(raw: &str) -> Option<u32> {
    match raw.trim().parse::<u32>() {
        Ok(n) => Some(n),
        Err(_) => {
            tracing::warn!(value = raw, "ignoring non-numeric {}", ATTEMPT_VAR);
            None
        }
    }
}

/// Resolve the blob store root:
/// `NIGHT_SHIFT_BLOB_DIR` > `XDG_STATE_HOME/night-shift/blobs` > `~/.local/state/night-shift/blobs`
pub fn blob_root() -> Result<PathBuf, ConfigError> {
    if let Ok(dir) = std::env::var(BLOB_DIR_VAR) {
        return Ok(PathBuf::from(dir));
    }
    if let Ok(xdg) = std::env::var("XDG_STATE_HOME") {
        return Ok(PathBuf::from(xdg).join("night-shift/blobs"));
    }
    let home = dirs::home_dir().ok_or(ConfigError::NoStateDir)?;
    Ok(home.join(".local/state/night-shift/blobs"))
}

#[cfg(test)]
#[path = "config_tests.rs"]
mod tests;
