// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Traced adapter wrappers for consistent observability

use crate::blob::{BlobError, BlobStore};

/// Wrapper that adds tracing to any BlobStore
#[derive(Clone)]
pub struct TracedBlobStore<S> {
    inner: S,
}

impl<S> TracedBlobStore<S> {
    pub fn new(inner: S) -> Self {
        Self { inner }
    }
}

impl<S: BlobStore> BlobStore for TracedBlobStore<S> {
    fn put(&self, bucket: &str, key: &str, body: &[u8]) -> Result<(), BlobError> {
        let span = tracing::info_span!("blob.put", bucket, key);
        let _guard = span.enter();
        tracing::debug!(bytes = body.len(), "uploading");
        let start = std::time::Instant::now();
        let result = self.inner.put(bucket, key, body);
        let elapsed_ms = start.elapsed().as_millis() as u64;
        match &result {
            Ok(()) => tracing::info!(bytes = body.len(), elapsed_ms, "uploaded"),
            Err(e) => tracing::error!(elapsed_ms, error = %e, "upload failed"),
        }
        result
    }
}

#[cfg(test)]
#[path = "traced_tests.rs"]
mod tests;
