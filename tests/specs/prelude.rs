//! Test helpers for behavioral specifications.
//!
//! Provides high-level DSL for testing ns CLI behavior.

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic, dead_code)]

use std::path::{Path, PathBuf};
use std::process::{Command, Output};

/// Variables the tracking shell reads; cleared so the caller's environment
/// (e.g. a `make test` run) cannot leak into specs.
const SHELL_ENV_VARS: &[&str] = &[
    "MAKELEVEL",
    "MAKEFLAGS",
    "ATTEMPT_COUNT",
    "NIGHT_SHIFT_BUCKET",
    "NIGHT_SHIFT_INSTANCE_ID",
    "NIGHT_SHIFT_BLOB_DIR",
    "NIGHT_SHIFT_PROJECT_DIR",
    "RUST_LOG",
];

/// Returns the path to a binary, checking llvm-cov target directory first.
/// This works with both standard builds and llvm-cov coverage runs.
fn binary_path(name: &str) -> PathBuf {
    let manifest_dir = Path::new(env!("CARGO_MANIFEST_DIR"));

    let llvm_cov_path = manifest_dir.join("target/llvm-cov-target/debug").join(name);
    if llvm_cov_path.exists() {
        return llvm_cov_path;
    }

    let standard = manifest_dir.join("target/debug").join(name);
    if standard.exists() {
        return standard;
    }

    // Resolves relative to the test binary's target directory.
    assert_cmd::cargo::cargo_bin(name)
}

/// Returns a Command configured to run the ns binary
pub fn ns_cmd() -> Command {
    Command::new(binary_path("ns"))
}

/// Create a CLI builder for ns commands
pub fn cli() -> CliBuilder {
    CliBuilder::new()
}

/// High-level CLI builder for fluent test assertions
pub struct CliBuilder {
    args: Vec<String>,
    dir: Option<PathBuf>,
    envs: Vec<(String, String)>,
}

impl CliBuilder {
    fn new() -> Self {
        Self {
            args: Vec::new(),
            dir: None,
            envs: vec![("NO_COLOR".into(), "1".into())],
        }
    }

    /// Add CLI arguments
    pub fn args(mut self, args: &[&str]) -> Self {
        self.args.extend(args.iter().map(|s| s.to_string()));
        self
    }

    /// Set working directory
    pub fn pwd(mut self, path: impl Into<PathBuf>) -> Self {
        self.dir = Some(path.into());
        self
    }

    /// Set environment variable
    pub fn env(mut self, key: &str, value: impl AsRef<Path>) -> Self {
        self.envs.push((
            key.to_string(),
            value.as_ref().to_string_lossy().to_string(),
        ));
        self
    }

    /// Build the command without running it
    pub fn command(self) -> Command {
        let mut cmd = ns_cmd();
        cmd.args(&self.args);

        if let Some(dir) = self.dir {
            cmd.current_dir(dir);
        }

        for key in SHELL_ENV_VARS {
            cmd.env_remove(key);
        }

        for (key, value) in self.envs {
            cmd.env(key, value);
        }

        cmd
    }

    /// Run and return the raw output, whatever the exit code
    pub fn runs(self) -> RunAssert {
        let mut cmd = self.command();
        let output = cmd.output().expect("command should run");
        RunAssert { output }
    }

    /// Run and expect success (exit code 0)
    pub fn passes(self) -> RunAssert {
        let run = self.runs();
        assert!(
            run.output.status.success(),
            "expected command to pass, got exit code {:?}\nstdout: {}\nstderr: {}",
            run.output.status.code(),
            run.stdout(),
            run.stderr()
        );
        run
    }

    /// Run and expect failure (non-zero exit code)
    pub fn fails(self) -> RunAssert {
        let run = self.runs();
        assert!(
            !run.output.status.success(),
            "expected command to fail, but it passed\nstdout: {}\nstderr: {}",
            run.stdout(),
            run.stderr()
        );
        run
    }
}

/// Result of a CLI run for chaining assertions
pub struct RunAssert {
    output: Output,
}

impl RunAssert {
    /// Get stdout as string
    pub fn stdout(&self) -> String {
        String::from_utf8_lossy(&self.output.stdout).into_owned()
    }

    /// Get stderr as string
    pub fn stderr(&self) -> String {
        String::from_utf8_lossy(&self.output.stderr).into_owned()
    }

    /// Process exit code (`None` when killed by a signal)
    pub fn code(&self) -> Option<i32> {
        self.output.status.code()
    }

    /// Assert the exit code.
    pub fn code_eq(self, expected: i32) -> Self {
        assert_eq!(
            self.code(),
            Some(expected),
            "stdout: {}\nstderr: {}",
            self.stdout(),
            self.stderr()
        );
        self
    }

    /// Assert stdout equals expected exactly (with diff on failure).
    /// **Prefer this for format specs** - catches format regressions.
    pub fn stdout_eq(self, expected: &str) -> Self {
        let stdout = self.stdout();
        similar_asserts::assert_eq!(stdout, expected);
        self
    }

    /// Assert stdout contains substring.
    /// Use when exact comparison isn't practical.
    pub fn stdout_has(self, expected: &str) -> Self {
        let stdout = self.stdout();
        assert!(
            stdout.contains(expected),
            "stdout does not contain '{}'\nstdout: {}",
            expected,
            stdout
        );
        self
    }

    /// Assert stderr contains substring.
    pub fn stderr_has(self, expected: &str) -> Self {
        let stderr = self.stderr();
        assert!(
            stderr.contains(expected),
            "stderr does not contain '{}'\nstderr: {}",
            expected,
            stderr
        );
        self
    }

    /// Parse stdout as JSON.
    pub fn json(&self) -> serde_json::Value {
        serde_json::from_str(&self.stdout()).expect("stdout should be JSON")
    }
}

// =============================================================================
// Project
// =============================================================================

/// Temporary test project directory with helper methods.
pub struct Project {
    dir: tempfile::TempDir,
    /// Isolated blob store for this test (NIGHT_SHIFT_BLOB_DIR)
    blob_dir: tempfile::TempDir,
}

/// Run date used by specs.
pub const DATE: &str = "2024-01-01";

impl Project {
    /// Create an empty project
    pub fn empty() -> Self {
        Self {
            dir: tempfile::tempdir().unwrap(),
            blob_dir: tempfile::tempdir().unwrap(),
        }
    }

    /// Create a project with `logs/<DATE>/` in place
    pub fn with_log_dir() -> Self {
        let project = Self::empty();
        std::fs::create_dir_all(project.log_dir()).unwrap();
        project
    }

    /// Get the project path
    pub fn path(&self) -> &Path {
        self.dir.path()
    }

    pub fn blob_path(&self) -> &Path {
        self.blob_dir.path()
    }

    /// `logs/<DATE>` under the project
    pub fn log_dir(&self) -> PathBuf {
        self.path().join("logs").join(DATE)
    }

    /// Write a file at the given path (parent directories created automatically)
    pub fn file(&self, path: impl AsRef<Path>, content: &str) {
        let full_path = self.dir.path().join(path.as_ref());
        if let Some(parent) = full_path.parent() {
            std::fs::create_dir_all(parent).unwrap();
        }
        std::fs::write(full_path, content).unwrap();
    }

    /// Read a file under the project, empty when missing
    pub fn read(&self, path: impl AsRef<Path>) -> String {
        std::fs::read_to_string(self.path().join(path)).unwrap_or_default()
    }

    /// Run ns in this project's context
    pub fn ns(&self) -> CliBuilder {
        cli()
            .pwd(self.path())
            .env("NIGHT_SHIFT_BLOB_DIR", self.blob_path())
    }

    /// `ns shell --target <target> --date <DATE> -c <command>`
    pub fn shell(&self, target: &str, command: &str) -> CliBuilder {
        self.ns()
            .args(&["shell", "--target", target, "--date", DATE, "-c", command])
    }
}
