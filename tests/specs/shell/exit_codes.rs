//! Strict-shell exit code specs
//!
//! The wrapped command's exit code is the process's exit code, and the shell
//! runs with errexit, nounset and pipefail.

use crate::prelude::*;

#[test]
fn success_passes_output_through() {
    let temp = Project::with_log_dir();
    temp.shell("t", "echo hello")
        .passes()
        .stdout_eq("hello\n");
}

#[test]
fn exit_code_is_propagated() {
    let temp = Project::with_log_dir();
    temp.shell("t", "exit 3").runs().code_eq(3);
}

#[test]
fn failing_statement_stops_the_recipe() {
    let temp = Project::with_log_dir();
    temp.shell("t", "false; echo unreachable")
        .runs()
        .code_eq(1)
        .stdout_eq("");
}

#[test]
fn unset_variable_fails() {
    let temp = Project::with_log_dir();
    temp.shell("t", "echo $NS_SPEC_SURELY_UNSET").runs().code_eq(1);
}

#[test]
fn pipeline_failure_is_not_masked() {
    let temp = Project::with_log_dir();
    temp.shell("t", "false | cat").runs().code_eq(1);
}

#[test]
fn runs_without_log_directory() {
    let temp = Project::empty();
    temp.shell("t", "echo still runs")
        .passes()
        .stdout_eq("still runs\n")
        .stderr_has("running unlogged");
    assert!(!temp.path().join("logs").exists());
}

#[test]
fn command_runs_in_the_working_directory() {
    let temp = Project::with_log_dir();
    temp.shell("out.txt", "echo built > out.txt").passes();
    assert_eq!(temp.read("out.txt"), "built\n");
}
