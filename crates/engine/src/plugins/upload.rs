// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Post-hoc artifact upload for nested (`make`-driven) invocations.

use std::path::Path;

use ns_adapters::BlobStore;
use ns_core::{ShellConfig, Target};

use crate::chain::{Next, Plugin};
use crate::error::PluginError;

/// First segment of every object key.
pub const KEY_PREFIX: &str = "data-flow";

/// Body uploaded in place of large data files.
pub const BIG_DATA_PLACEHOLDER: &[u8] = b"big data file: content not uploaded\n";

/// Uploads the target's file after a successful run.
///
/// The continuation always runs first. Upload only happens when the
/// invocation is nested under `make`, a bucket is configured, the command
/// exited 0 and the target exists as a file. Failures are logged and never
/// change the exit code.
pub struct UploadPlugin<S> {
    config: ShellConfig,
    store: S,
}

impl<S: BlobStore> UploadPlugin<S> {
    pub fn new(config: ShellConfig, store: S) -> Self {
        Self { config, store }
    }

    fn upload(&self, bucket: &str, target: &Target, path: &Path) -> Result<(), PluginError> {
        let key = object_key(target, &self.config.instance_id);
        if self.config.is_big_data_file(&target.name) {
            tracing::debug!(key = %key, "uploading placeholder for big data file");
            self.store.put(bucket, &key, BIG_DATA_PLACEHOLDER)?;
        } else {
            let body = std::fs::read(path).map_err(|source| PluginError::Read {
                path: path.to_owned(),
                source,
            })?;
            self.store.put(bucket, &key, &body)?;
        }
        Ok(())
    }
}

impl<S: BlobStore> Plugin for UploadPlugin<S> {
    fn name(&self) -> &'static str {
        "upload"
    }

    fn call(&self, target: &mut Target, next: Next<'_>) -> i32 {
        let exit_code = next.run(target);

        if !self.config.make_level {
            return exit_code;
        }
        let Some(bucket) = self.config.bucket.as_deref() else {
            tracing::warn!(
                target_name = %target.name,
                "{} not set, skipping upload",
                ns_core::config::BUCKET_VAR
            );
            return exit_code;
        };
        if exit_code != 0 {
            return exit_code;
        }
        let path = self.config.work_dir.join(&target.name);
        if !path.is_file() {
            tracing::debug!(target_name = %target.name, "no artifact file, skipping upload");
            return exit_code;
        }

        if let Err(e) = self.upload(bucket, target, &path) {
            tracing::error!(target_name = %target.name, bucket, error = %e, "upload failed");
        }
        exit_code
    }
}

/// `data-flow/<date>/<instance_id>/<target without date segments>`
pub fn object_key(target: &Target, instance_id: &str) -> String {
    format!(
        "{}/{}/{}/{}",
        KEY_PREFIX,
        target.date,
        instance_id,
        target.name_without_date()
    )
}

#[cfg(test)]
#[path = "upload_tests.rs"]
mod tests;
