// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Fake blob store for testing
#![cfg_attr(coverage_nightly, coverage(off))]

use super::{BlobError, BlobStore};
use parking_lot::Mutex;
use std::sync::Arc;

/// Recorded put
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PutCall {
    pub bucket: String,
    pub key: String,
    pub body: Vec<u8>,
}

#[derive(Default)]
struct FakeBlobState {
    calls: Vec<PutCall>,
    fail_with: Option<String>,
}

/// Fake blob store that records every put. Clones share state.
#[derive(Clone, Default)]
pub struct FakeBlobStore {
    inner: Arc<Mutex<FakeBlobState>>,
}

impl FakeBlobStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Make every subsequent put fail with `message` (still recorded).
    pub fn fail_with(&self, message: impl Into<String>) {
        self.inner.lock().fail_with = Some(message.into());
    }

    /// Get all recorded puts
    pub fn calls(&self) -> Vec<PutCall> {
        self.inner.lock().calls.clone()
    }
}

impl BlobStore for FakeBlobStore {
    fn put(&self, bucket: &str, key: &str, body: &[u8]) -> Result<(), BlobError> {
        let mut inner = self.inner.lock();
        inner.calls.push(PutCall {
            bucket: bucket.to_string(),
            key: key.to_string(),
            body: body.to_vec(),
        });
        match &inner.fail_with {
            Some(message) => Err(BlobError::PutFailed(message.clone())),
            None => Ok(()),
        }
    }
}

#[cfg(test)]
#[path = "fake_tests.rs"]
mod tests;
