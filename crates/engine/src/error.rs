// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Errors from plugin side effects.
//!
//! None of these reach the caller of a chain: plugins log them and carry on
//! so the wrapped command's exit code is never masked.

use ns_adapters::BlobError;
use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum PluginError {
    #[error("could not write {path}: {source}")]
    Write {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("could not read {path}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("could not encode telemetry: {0}")]
    Encode(#[from] serde_json::Error),
    #[error(transparent)]
    Blob(#[from] BlobError),
}
