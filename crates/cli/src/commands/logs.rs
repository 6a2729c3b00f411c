// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! `ns logs` - per-target logs of one run date.

use std::path::PathBuf;

use anyhow::Result;
use chrono::NaiveDate;
use clap::Args;
use ns_core::{Clock, SystemClock};
use ns_timeline::{LogDir, TargetLogSummary};

use crate::output::{format_size, print_json, OutputFormat};
use crate::table::{Column, Table};

#[derive(Args)]
pub struct LogsArgs {
    /// Run date (YYYY-MM-DD); defaults to the latest with logs
    #[arg(long)]
    pub date: Option<NaiveDate>,

    /// Print the content of the log with this id
    #[arg(long, value_name = "LOG_ID")]
    pub show: Option<String>,

    /// Project directory containing `logs/`
    #[arg(long)]
    pub project_dir: Option<PathBuf>,
}

pub fn handle(args: LogsArgs, format: OutputFormat) -> Result<()> {
    let project_dir = super::resolve_project_dir(args.project_dir)?;
    let logs = LogDir::open(project_dir, args.date, SystemClock.today())?;

    if let Some(id) = args.show {
        let content = logs.target_log_content(&id)?;
        match format {
            OutputFormat::Text => println!("{content}"),
            OutputFormat::Json => print_json(&serde_json::json!({
                "id": id,
                "date": logs.date(),
                "content": content,
            }))?,
        }
        return Ok(());
    }

    let summaries = logs.target_logs()?;
    match format {
        OutputFormat::Text => {
            if summaries.is_empty() {
                println!("No target logs for {}", logs.date());
                return Ok(());
            }
            let mut table = Table::new(columns());
            fill(&mut table, &summaries);
            table.render(&mut std::io::stdout().lock());
        }
        OutputFormat::Json => print_json(&summaries)?,
    }
    Ok(())
}

fn columns() -> Vec<Column> {
    vec![
        Column::status("STATUS"),
        Column::right("SIZE"),
        Column::right("LINES"),
        Column::left("ID"),
    ]
}

fn fill(table: &mut Table, summaries: &[TargetLogSummary]) {
    for log in summaries {
        let status = if log.success { "success" } else { "failure" };
        table.row(vec![
            status.to_string(),
            format_size(log.size),
            log.lines.to_string(),
            log.id.clone(),
        ]);
    }
}

#[cfg(test)]
#[path = "logs_tests.rs"]
mod tests;
