//! Common test helpers and utilities.

#![allow(dead_code)]

pub mod temp_workspace;

use std::path::Path;
use std::process::Command;

// Re-export for convenience
pub use temp_workspace::TestWorkspace;

/// Output of one binary invocation.
#[derive(Debug)]
pub struct RunOutput {
    pub success: bool,
    pub stdout: String,
    pub stderr: String,
}

/// Runs the ziguana binary with `args` inside `cwd`.
pub fn run_ziguana(cwd: &Path, args: &[&str]) -> RunOutput {
    let output = Command::new(env!("CARGO_BIN_EXE_ziguana"))
        .args(args)
        .current_dir(cwd)
        .env_remove("RUST_LOG")
        .output()
        .expect("Failed to run ziguana");

    RunOutput {
        success: output.status.success(),
        stdout: String::from_utf8_lossy(&output.stdout).to_string(),
        stderr: String::from_utf8_lossy(&output.stderr).to_string(),
    }
}

/// Runs the binary and returns stdout, panicking with both streams on failure.
pub fn run_ok(cwd: &Path, args: &[&str]) -> String {
    let out = run_ziguana(cwd, args);
    assert!(
        out.success,
        "ziguana {args:?} failed:\nstderr: {}\nstdout: {}",
        out.stderr, out.stdout
    );
    out.stdout
}
