// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Blob store adapters used to publish build artifacts.

mod dir;

pub use dir::DirBlobStore;

// Test support - only compiled for tests or when explicitly requested
#[cfg(any(test, feature = "test-support"))]
mod fake;
#[cfg(any(test, feature = "test-support"))]
pub use fake::{FakeBlobStore, PutCall};

use thiserror::Error;

/// Errors from blob store operations
#[derive(Debug, Error)]
pub enum BlobError {
    #[error("invalid key `{0}`")]
    InvalidKey(String),
    #[error("put {bucket}/{key} failed: {source}")]
    Io {
        bucket: String,
        key: String,
        #[source]
        source: std::io::Error,
    },
    #[error("put failed: {0}")]
    PutFailed(String),
}

/// Adapter for storing artifact bodies under a bucket and key.
pub trait BlobStore: Send + Sync {
    /// Store `body` at `key` in `bucket`, replacing any previous object.
    fn put(&self, bucket: &str, key: &str, body: &[u8]) -> Result<(), BlobError>;
}

impl<S: BlobStore + ?Sized> BlobStore for Box<S> {
    fn put(&self, bucket: &str, key: &str, body: &[u8]) -> Result<(), BlobError> {
        (**self).put(bucket, key, body)
    }
}
