//! `ns logs` and `ns check-log-sizes` specs

use crate::prelude::*;

#[test]
fn failed_targets_sort_first() {
    let temp = Project::with_log_dir();
    temp.shell("built.txt", "echo ok > built.txt").passes();
    temp.shell("missing.txt", "echo nope").passes();

    let run = temp.ns().args(&["logs", "-o", "json"]).passes();
    let json = run.json();
    let logs = json.as_array().unwrap();

    assert_eq!(logs.len(), 2);
    assert_eq!(logs[0]["id"], "missing_txt");
    assert_eq!(logs[0]["success"], false);
    assert_eq!(logs[1]["id"], "built_txt");
    assert_eq!(logs[1]["success"], true);
}

#[test]
fn show_prints_log_content() {
    let temp = Project::with_log_dir();
    temp.shell("out.txt", "echo hello from recipe").passes();

    temp.ns()
        .args(&["logs", "--show", "out_txt"])
        .passes()
        .stdout_has("Working on target out.txt attempt NULL")
        .stdout_has("hello from recipe");
}

#[test]
fn show_unknown_id_fails() {
    let temp = Project::with_log_dir();
    temp.ns()
        .args(&["logs", "--show", "nope"])
        .fails()
        .stderr_has("no target log with id \"nope\"");
}

#[test]
fn check_log_sizes_needs_history() {
    let temp = Project::empty();
    temp.file(format!("logs/{DATE}/attempt-1.log"), "x");

    temp.ns()
        .args(&["check-log-sizes", "--date", DATE])
        .passes()
        .stdout_has("Not enough log files");
}

#[test]
fn check_log_sizes_fails_on_drop() {
    let temp = Project::empty();
    for day in 2..=6 {
        temp.file(format!("logs/2024-01-0{day}/attempt-1.log"), &"x".repeat(1000));
    }
    temp.file("logs/2024-01-07/attempt-1.log", "x");

    temp.ns()
        .args(&["check-log-sizes", "--date", "2024-01-07"])
        .runs()
        .code_eq(1)
        .stdout_has("[!] Log size is below or above threshold");
}
