use std::path::{Path, PathBuf};

use tempfile::TempDir;
use ziguana::config::DEFAULT_CONFIG_FILE;

/// A scratch working directory, optionally seeded with a settings file.
#[derive(Debug)]
pub struct TestWorkspace {
    /// Temporary root directory, removed on drop.
    pub root: TempDir,
}

impl TestWorkspace {
    /// Creates an empty workspace.
    /// ## Panics
    /// if the temporary directory cannot be created
    pub fn new() -> Self {
        Self {
            root: TempDir::new().expect("Failed to create temp dir"),
        }
    }

    /// Creates a workspace whose default settings file holds `json`.
    pub fn with_settings(json: &str) -> Self {
        let ws = Self::new();
        std::fs::write(ws.settings_path(), json).expect("Failed to write settings");
        ws
    }

    /// Root path of the workspace.
    pub fn path(&self) -> &Path {
        self.root.path()
    }

    /// Path of the default settings file inside the workspace.
    pub fn settings_path(&self) -> PathBuf {
        self.root.path().join(DEFAULT_CONFIG_FILE)
    }
}
