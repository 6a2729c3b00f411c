// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! `ns check-log-sizes` - compare today's attempt log volume with last week.

use std::path::PathBuf;

use anyhow::Result;
use chrono::NaiveDate;
use clap::Args;
use ns_core::log_paths::logs_root;
use ns_core::{Clock, SystemClock};
use ns_timeline::{check_log_sizes, LogSizeCheck};

use crate::exit_error::ExitError;
use crate::output::{print_json, OutputFormat};

#[derive(Args)]
pub struct CheckLogSizesArgs {
    /// Date to check (YYYY-MM-DD); defaults to today
    #[arg(long)]
    pub date: Option<NaiveDate>,

    /// Project directory containing `logs/`
    #[arg(long)]
    pub project_dir: Option<PathBuf>,
}

pub fn handle(args: CheckLogSizesArgs, format: OutputFormat) -> Result<()> {
    let project_dir = super::resolve_project_dir(args.project_dir)?;
    let date = args.date.unwrap_or_else(|| SystemClock.today());
    let check = check_log_sizes(&logs_root(&project_dir), date)?;

    match format {
        OutputFormat::Text => println!("{}", message(&check)),
        OutputFormat::Json => print_json(&report(date, &check))?,
    }

    if check.passed() {
        Ok(())
    } else {
        Err(ExitError::new(1, String::new()).into())
    }
}

fn message(check: &LogSizeCheck) -> String {
    match check {
        LogSizeCheck::WithinRange(_) => check.to_string(),
        _ => format!("[!] {check}"),
    }
}

fn report(date: NaiveDate, check: &LogSizeCheck) -> serde_json::Value {
    let band = match check {
        LogSizeCheck::WithinRange(band) | LogSizeCheck::OutOfRange(band) => Some(band),
        LogSizeCheck::NoLogs | LogSizeCheck::NotEnoughData { .. } => None,
    };
    serde_json::json!({
        "date": date,
        "passed": check.passed(),
        "message": check.to_string(),
        "min": band.map(|b| b.min),
        "median": band.map(|b| b.median),
        "max": band.map(|b| b.max),
        "actual": band.map(|b| b.actual),
    })
}

#[cfg(test)]
#[path = "check_log_sizes_tests.rs"]
mod tests;
