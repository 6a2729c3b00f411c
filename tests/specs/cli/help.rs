//! CLI help specs
//!
//! Verify top-level help and subcommand listing.

use crate::prelude::*;

#[test]
fn no_subcommand_prints_help() {
    cli()
        .passes()
        .stdout_has("Usage: ns")
        .stdout_has("shell")
        .stdout_has("timeline")
        .stdout_has("check-log-sizes");
}

#[test]
fn shell_help_lists_flags() {
    cli()
        .args(&["shell", "--help"])
        .passes()
        .stdout_has("--target")
        .stdout_has("--date");
}

#[test]
fn unknown_subcommand_fails() {
    cli()
        .args(&["frobnicate"])
        .fails()
        .stderr_has("unrecognized subcommand");
}
