//! Artifact upload specs
//!
//! Uploads go to the directory-backed blob store under NIGHT_SHIFT_BLOB_DIR.

use crate::prelude::*;

const BUCKET: &str = "artifacts";

fn object(temp: &Project, key: &str) -> Option<Vec<u8>> {
    std::fs::read(temp.blob_path().join(BUCKET).join(key)).ok()
}

#[test]
fn nested_success_uploads_artifact_without_date_segment() {
    let temp = Project::with_log_dir();
    temp.file("results/2024-01-01/.keep", "");
    temp.shell("results/2024-01-01/report.txt", "echo data > results/2024-01-01/report.txt")
        .env("MAKELEVEL", "1")
        .env("NIGHT_SHIFT_BUCKET", BUCKET)
        .env("NIGHT_SHIFT_INSTANCE_ID", "i-123")
        .passes();

    assert_eq!(
        object(&temp, "data-flow/2024-01-01/i-123/results/report.txt"),
        Some(b"data\n".to_vec())
    );
}

#[test]
fn big_data_files_upload_a_placeholder() {
    let temp = Project::with_log_dir();
    temp.shell("table.csv", "echo a,b > table.csv")
        .env("MAKELEVEL", "1")
        .env("NIGHT_SHIFT_BUCKET", BUCKET)
        .passes();

    let body = object(&temp, "data-flow/2024-01-01/UNKNOWN-INSTANCE-ID/table.csv").unwrap();
    assert_ne!(body, b"a,b\n".to_vec());
}

#[test]
fn top_level_invocation_never_uploads() {
    let temp = Project::with_log_dir();
    temp.shell("a.txt", "echo x > a.txt")
        .env("NIGHT_SHIFT_BUCKET", BUCKET)
        .passes();

    assert!(!temp.blob_path().join(BUCKET).exists());
}

#[test]
fn failed_recipe_is_not_uploaded() {
    let temp = Project::with_log_dir();
    temp.shell("a.txt", "echo x > a.txt; exit 2")
        .env("MAKELEVEL", "1")
        .env("NIGHT_SHIFT_BUCKET", BUCKET)
        .runs()
        .code_eq(2);

    assert!(!temp.blob_path().join(BUCKET).exists());
}
