// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Blob store backed by a local directory tree.

use std::path::{Component, Path, PathBuf};

use super::{BlobError, BlobStore};

/// Stores objects as files at `<root>/<bucket>/<key>`.
///
/// Useful as a local mirror, or as a staging area that an external sync
/// job pushes to remote storage.
#[derive(Clone, Debug)]
pub struct DirBlobStore {
    root: PathBuf,
}

impl DirBlobStore {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    /// Resolve the file an object lives in, rejecting keys that would escape the bucket.
    pub fn object_path(&self, bucket: &str, key: &str) -> Result<PathBuf, BlobError> {
        let relative = Path::new(key);
        let safe = !key.is_empty()
            && relative
                .components()
                .all(|c| matches!(c, Component::Normal(_)));
        if !safe || bucket.is_empty() || bucket.contains('/') {
            return Err(BlobError::InvalidKey(format!("{bucket}/{key}")));
        }
        Ok(self.root.join(bucket).join(relative))
    }
}

impl BlobStore for DirBlobStore {
    fn put(&self, bucket: &str, key: &str, body: &[u8]) -> Result<(), BlobError> {
        let path = self.object_path(bucket, key)?;
        let io_err = |source| BlobError::Io {
            bucket: bucket.to_string(),
            key: key.to_string(),
            source,
        };
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent).map_err(io_err)?;
        }
        std::fs::write(&path, body).map_err(io_err)
    }
}

#[cfg(test)]
#[path = "dir_tests.rs"]
mod tests;
