// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! `ns shell` - run one recipe line through the tracking chain.
//!
//! Meant to be installed as make's shell:
//!
//! ```make
//! SHELL := ns
//! .SHELLFLAGS = shell --target $@ --date $(DATE) -c
//! ```

use anyhow::Result;
use chrono::NaiveDate;
use clap::Args;
use ns_adapters::{DirBlobStore, TracedBlobStore};
use ns_core::{blob_root, Clock, ShellConfig, SystemClock, Target};

use crate::logging::setup_shell_logging;

#[derive(Args)]
pub struct ShellArgs {
    /// Target the recipe builds (make's `$@`)
    #[arg(long)]
    pub target: String,

    /// Run date (YYYY-MM-DD); defaults to today
    #[arg(long)]
    pub date: Option<NaiveDate>,

    /// Accepted for shell compatibility; the command is always the last argument
    #[arg(short = 'c')]
    pub c: bool,

    /// Recipe line to run
    #[arg(allow_hyphen_values = true)]
    pub command: String,
}

/// Run the chain and return the wrapped command's exit code.
pub fn handle(args: ShellArgs) -> Result<i32> {
    let work_dir = std::env::current_dir()?;
    let clock = SystemClock;
    let date = args.date.unwrap_or_else(|| clock.today());

    let _guard = setup_shell_logging(&work_dir, date);

    let config = ShellConfig::from_env(&work_dir);
    let store = match blob_root() {
        Ok(dir) => Some(TracedBlobStore::new(DirBlobStore::new(dir))),
        Err(e) => {
            if config.bucket.is_some() {
                tracing::warn!(error = %e, "no blob store directory, uploads disabled");
            }
            None
        }
    };

    let mut target = Target::new(args.target, date, args.command).with_attempt(config.attempt);
    let chain = ns_engine::standard_chain(&config, store, clock);

    tracing::debug!(
        target_name = %target.name,
        plugins = ?chain.plugin_names(),
        "running chain"
    );
    Ok(ns_engine::execute(&mut target, &chain))
}

#[cfg(test)]
#[path = "shell_tests.rs"]
mod tests;
