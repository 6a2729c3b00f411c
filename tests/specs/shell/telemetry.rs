//! Target log and timing telemetry specs

use crate::prelude::*;

fn timing_lines(temp: &Project) -> Vec<serde_json::Value> {
    temp.read(format!("logs/{DATE}/timing_env.log"))
        .lines()
        .map(|l| serde_json::from_str(l).unwrap())
        .collect()
}

#[test]
fn target_log_gets_header_and_output() {
    let temp = Project::with_log_dir();
    temp.shell("out/a.txt", "echo hello").passes().stdout_eq("hello\n");

    let log = temp.read(format!("logs/{DATE}/out_a.txt.log"));
    assert!(log.starts_with("\n[tracking_shell "), "{log:?}");
    assert!(
        log.contains("] Working on target out/a.txt attempt NULL command \"echo hello\"\n\nhello\n"),
        "{log:?}"
    );
}

#[test]
fn stderr_is_captured_in_target_log() {
    let temp = Project::with_log_dir();
    temp.shell("t", "echo oops >&2").passes();

    assert!(temp.read(format!("logs/{DATE}/t.log")).ends_with("oops\n"));
}

#[test]
fn attempt_count_appears_in_header() {
    let temp = Project::with_log_dir();
    temp.shell("t", "true").env("ATTEMPT_COUNT", "2").passes();

    assert!(temp
        .read(format!("logs/{DATE}/t.log"))
        .contains("Working on target t attempt 2 command"));
}

#[test]
fn log_directory_target_writes_no_target_log() {
    let temp = Project::with_log_dir();
    let target = format!("logs/{DATE}");
    temp.shell(&target, "echo made").passes().stdout_eq("made\n");

    let entries: Vec<String> = std::fs::read_dir(temp.log_dir())
        .unwrap()
        .map(|e| e.unwrap().file_name().to_string_lossy().into_owned())
        .collect();
    assert!(entries.contains(&"timing_env.log".to_string()));
    assert!(
        entries
            .iter()
            .all(|e| e == "timing_env.log" || e == "trackingshell.log"),
        "{entries:?}"
    );
}

#[test]
fn timing_log_pairs_begin_and_end() {
    let temp = Project::with_log_dir();
    temp.shell("t", "printf 'a\\n'; exit 4").runs().code_eq(4);

    let lines = timing_lines(&temp);
    assert_eq!(lines.len(), 2);
    assert_eq!(lines[0]["tag"], "BEGIN");
    assert_eq!(lines[1]["tag"], "END");
    assert_eq!(lines[0]["unique_nr"], lines[1]["unique_nr"]);
    assert_eq!(lines[0]["command"], "printf 'a\\n'; exit 4");
    assert_eq!(lines[0]["has_make_level"], false);
    assert_eq!(lines[1]["exit_code"], 4);
    assert!(lines[0].get("finished_at").is_none());
}

#[test]
fn make_level_is_recorded() {
    let temp = Project::with_log_dir();
    temp.shell("t", "true").env("MAKELEVEL", "1").passes();

    assert_eq!(timing_lines(&temp)[0]["has_make_level"], true);
}

#[test]
fn diagnostics_go_to_tracking_shell_log() {
    let temp = Project::with_log_dir();
    temp.shell("t", "true").env("MAKELEVEL", "1").passes();

    assert!(temp
        .read(format!("logs/{DATE}/trackingshell.log"))
        .contains("NIGHT_SHIFT_BUCKET not set, skipping upload"));
}
