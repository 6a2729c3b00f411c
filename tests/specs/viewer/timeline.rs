//! `ns timeline` specs

use crate::prelude::*;

#[test]
fn timeline_of_real_runs() {
    let temp = Project::with_log_dir();
    temp.shell("a", "true").passes();
    temp.shell("a", "exit 1").runs().code_eq(1);

    let run = temp
        .ns()
        .args(&["timeline", "--date", DATE, "-o", "json"])
        .passes();
    let json = run.json();

    assert_eq!(json["date"], DATE);
    let commands = json["commands"].as_array().unwrap();
    assert_eq!(commands.len(), 2);
    assert_eq!(commands[0]["status"], "success");
    assert_eq!(commands[0]["attempt_nr"], 1);
    assert_eq!(commands[0]["waited"], 0.0);
    assert_eq!(commands[1]["status"], "failure");
    assert_eq!(commands[1]["command"], "exit 1");
    assert_eq!(commands[1]["log_id"], "a");
    assert!(json["errors"].as_array().unwrap().is_empty());
}

#[test]
fn scenario_log_renders_as_text() {
    let temp = Project::empty();
    temp.file(
        format!("logs/{DATE}/timing_env.log"),
        concat!(
            r#"{"command":"build","target":"t","unique_nr":5,"tag":"BEGIN","started_at":"2024-01-01T00:00:00"}"#,
            "\n",
            r#"{"command":"build","target":"t","unique_nr":5,"tag":"END","finished_at":"2024-01-01T00:02:00","exit_code":0}"#,
            "\n",
        ),
    );

    temp.ns().args(&["timeline"]).passes().stdout_eq(
        "STATUS   STARTED   WAITED  LENGTH  ATTEMPT  TARGET  COMMAND\n\
         success  00:00:00      0s      2m        1  t       build\n",
    );
}

#[test]
fn missing_timing_log_is_reported() {
    let temp = Project::with_log_dir();
    temp.ns()
        .args(&["timeline"])
        .passes()
        .stdout_eq("Errors:\n  Timing env log is not found!\n");
}

#[test]
fn project_dir_can_come_from_environment() {
    let temp = Project::with_log_dir();
    let elsewhere = tempfile::tempdir().unwrap();

    temp.ns()
        .pwd(elsewhere.path())
        .env("NIGHT_SHIFT_PROJECT_DIR", temp.path())
        .args(&["timeline", "-o", "json"])
        .passes();
}
