// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

// Allow panic!/unwrap/expect in test code
#![cfg_attr(test, allow(clippy::panic))]
#![cfg_attr(test, allow(clippy::unwrap_used))]
#![cfg_attr(test, allow(clippy::expect_used))]

//! ns - Night Shift tracking shell and log viewer

mod color;
mod commands;
mod env;
mod exit_error;
mod logging;
mod output;
mod table;

use output::OutputFormat;

use anyhow::Result;
use clap::{Parser, Subcommand};
use commands::{check_log_sizes, logs, shell, timeline};

#[derive(Parser)]
#[command(
    name = "ns",
    version,
    about = "Night Shift - tracking shell for make-driven data pipelines"
)]
struct Cli {
    /// Output format
    #[arg(
        short = 'o',
        long = "output",
        value_enum,
        default_value_t,
        global = true
    )]
    output: OutputFormat,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Run one recipe line with logging, timing and upload (use as make's SHELL)
    Shell(shell::ShellArgs),
    /// Show the correlated command timeline of a run
    Timeline(timeline::TimelineArgs),
    /// List per-target logs of a run, or print one
    Logs(logs::LogsArgs),
    /// Check the attempt log volume against the last week
    CheckLogSizes(check_log_sizes::CheckLogSizesArgs),
}

fn main() {
    if let Err(e) = run() {
        let code = e
            .downcast_ref::<exit_error::ExitError>()
            .map_or(1, |c| c.code);
        let msg = format_error(&e);
        if !msg.is_empty() {
            eprintln!("Error: {}", msg);
        }
        std::process::exit(code);
    }
}

/// Format an anyhow error, deduplicating the chain.
///
/// If the top-level Display already contains the source error text, we skip
/// the "Caused by" chain to avoid noisy duplicate output. Otherwise we render
/// the full chain so context isn't lost.
fn format_error(err: &anyhow::Error) -> String {
    let top = err.to_string();

    let chain_redundant = err
        .chain()
        .skip(1)
        .all(|cause| top.contains(&cause.to_string()));

    if chain_redundant {
        return top;
    }

    let mut buf = top;
    for (i, cause) in err.chain().skip(1).enumerate() {
        buf.push_str(&format!("\n\nCaused by:\n    {}: {}", i, cause));
    }
    buf
}

fn run() -> Result<()> {
    let cli = Cli::parse();
    let format = cli.output;

    let command = match cli.command {
        Some(cmd) => cmd,
        None => {
            // No subcommand provided — print help and exit 0
            use clap::CommandFactory;
            Cli::command().print_help()?;
            println!();
            return Ok(());
        }
    };

    if let Commands::Shell(args) = command {
        // The wrapped command's code is the process's code; the chain has
        // already reported its own diagnostics.
        let code = shell::handle(args)?;
        if code != 0 {
            return Err(exit_error::ExitError::new(code, String::new()).into());
        }
        return Ok(());
    }

    let _guard = logging::setup_viewer_logging();
    match command {
        Commands::Shell(_) => unreachable!(),
        Commands::Timeline(args) => timeline::handle(args, format)?,
        Commands::Logs(args) => logs::handle(args, format)?,
        Commands::CheckLogSizes(args) => check_log_sizes::handle(args, format)?,
    }

    Ok(())
}

#[cfg(test)]
#[path = "main_tests.rs"]
mod tests;
