// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Plugins of the standard chain, outermost first: upload, timing, logging.

mod logging;
mod timing;
mod upload;

pub use logging::{redirect_stderr, tee_to_log, LoggingPlugin};
pub use timing::TimingPlugin;
pub use upload::{object_key, UploadPlugin, BIG_DATA_PLACEHOLDER, KEY_PREFIX};
