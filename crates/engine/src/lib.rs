// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

// Allow panic!/unwrap/expect in test code
#![cfg_attr(test, allow(clippy::panic))]
#![cfg_attr(test, allow(clippy::unwrap_used))]
#![cfg_attr(test, allow(clippy::expect_used))]

//! Night Shift execution chain

pub mod chain;
mod error;
mod executor;
pub mod plugins;

pub use chain::{execute, Chain, Next, Plugin, Terminal};
pub use error::PluginError;
pub use executor::{StrictShell, SPAWN_FAILURE_EXIT_CODE};
pub use plugins::{LoggingPlugin, TimingPlugin, UploadPlugin};

#[cfg(test)]
mod test_helpers;

use ns_adapters::BlobStore;
use ns_core::{Clock, ShellConfig};

/// Build the standard chain: upload, then timing, then logging, then the shell.
///
/// Without a store the upload stage is left out entirely.
pub fn standard_chain<S, C>(config: &ShellConfig, store: Option<S>, clock: C) -> Chain
where
    S: BlobStore + 'static,
    C: Clock + Clone + 'static,
{
    let mut chain = Chain::new(StrictShell::new(&config.work_dir));
    if let Some(store) = store {
        chain = chain.with(UploadPlugin::new(config.clone(), store));
    }
    chain
        .with(TimingPlugin::new(
            &config.work_dir,
            config.make_level,
            clock.clone(),
        ))
        .with(LoggingPlugin::new(&config.work_dir, clock))
}

#[cfg(test)]
#[path = "lib_tests.rs"]
mod tests;
