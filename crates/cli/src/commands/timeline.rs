// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! `ns timeline` - correlated command history of one run date.

use std::io::Write;
use std::path::PathBuf;

use anyhow::Result;
use chrono::NaiveDate;
use clap::Args;
use ns_core::{format_minutes, Clock, SystemClock};
use ns_timeline::{LogDir, Timeline};
use serde::Serialize;

use crate::output::{print_json, OutputFormat};
use crate::table::{Column, Table};

#[derive(Args)]
pub struct TimelineArgs {
    /// Run date (YYYY-MM-DD); defaults to the latest with logs
    #[arg(long)]
    pub date: Option<NaiveDate>,

    /// Project directory containing `logs/`
    #[arg(long)]
    pub project_dir: Option<PathBuf>,
}

#[derive(Serialize)]
struct TimelineReport<'a> {
    date: NaiveDate,
    #[serde(flatten)]
    timeline: &'a Timeline,
}

pub fn handle(args: TimelineArgs, format: OutputFormat) -> Result<()> {
    let clock = SystemClock;
    let project_dir = super::resolve_project_dir(args.project_dir)?;
    let logs = LogDir::open(project_dir, args.date, clock.today())?;
    let timeline = logs.timeline(clock.now())?;

    match format {
        OutputFormat::Text => {
            let mut table = Table::new(columns());
            fill(&mut table, &timeline);
            let stdout = std::io::stdout();
            let mut out = stdout.lock();
            table.render(&mut out);
            write_errors(&mut out, &timeline)?;
        }
        OutputFormat::Json => print_json(&TimelineReport {
            date: logs.date(),
            timeline: &timeline,
        })?,
    }
    Ok(())
}

fn columns() -> Vec<Column> {
    vec![
        Column::status("STATUS"),
        Column::left("STARTED"),
        Column::right("WAITED"),
        Column::right("LENGTH"),
        Column::right("ATTEMPT"),
        Column::left("TARGET"),
        Column::muted("COMMAND").with_max(80),
    ]
}

fn fill(table: &mut Table, timeline: &Timeline) {
    for cmd in &timeline.commands {
        table.row(vec![
            cmd.status.to_string(),
            cmd.started_at.format("%H:%M:%S").to_string(),
            format_minutes(cmd.waited),
            format_minutes(cmd.length),
            cmd.attempt_nr.to_string(),
            cmd.target.clone(),
            cmd.command.clone(),
        ]);
    }
}

fn write_errors(out: &mut impl Write, timeline: &Timeline) -> std::io::Result<()> {
    if timeline.errors.is_empty() {
        return Ok(());
    }
    if !timeline.commands.is_empty() {
        writeln!(out)?;
    }
    writeln!(out, "{}", crate::color::header("Errors:"))?;
    for error in &timeline.errors {
        writeln!(out, "  {error}")?;
    }
    Ok(())
}

#[cfg(test)]
#[path = "timeline_tests.rs"]
mod tests;
