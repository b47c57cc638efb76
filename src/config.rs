//! Settings file support.
//!
//! Settings are layered: built-in defaults, then an optional JSON file
//! (`.ziguana.json` by default), then command-line flags applied by the
//! binary.

use std::fs;
use std::io::{ErrorKind, Write};
use std::path::Path;

use serde::{Deserialize, Serialize};
use tempfile::NamedTempFile;
use tracing::{debug, info};

use crate::dispatch::{DEFAULT_CODE, Variant};
use crate::error::{Error, Result};

/// Settings file looked up in the working directory.
pub const DEFAULT_CONFIG_FILE: &str = ".ziguana.json";

/// Run settings.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Settings {
    /// Dispatch table.
    pub variant: Variant,
    /// Code to dispatch.
    pub code: i32,
    /// Print the result; when false it is computed and discarded.
    pub print: bool,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            variant: Variant::default(),
            code: DEFAULT_CODE,
            print: true,
        }
    }
}

impl Settings {
    /// Loads settings from `path`, falling back to defaults if the file does
    /// not exist.
    ///
    /// ## Errors
    /// Returns an error if the file exists but cannot be read or is not a
    /// valid settings object.
    pub fn load(path: &Path) -> Result<Self> {
        let content = match fs::read_to_string(path) {
            Ok(content) => content,
            Err(e) if e.kind() == ErrorKind::NotFound => {
                debug!(path = %path.display(), "no settings file, using defaults");
                return Ok(Self::default());
            }
            Err(e) => return Err(e.into()),
        };
        let settings = serde_json::from_str(&content).map_err(|e| {
            Error::Config(format!("invalid settings in {}: {e}", path.display()))
        })?;
        debug!(path = %path.display(), ?settings, "loaded settings");
        Ok(settings)
    }
}

/// Writes default settings to `path`.
///
/// ## Errors
/// Returns an error if:
/// - `path` already exists
/// - File I/O fails
pub fn init(path: &Path) -> Result<()> {
    let json = serde_json::to_string_pretty(&Settings::default())?;

    // Write atomically: uniquely named temp file in the target directory,
    // then a rename that fails instead of replacing an existing file
    let dir = match path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent,
        _ => Path::new("."),
    };
    let mut temp_file = NamedTempFile::new_in(dir)?;
    temp_file.write_all(json.as_bytes())?;
    temp_file.persist_noclobber(path).map_err(|e| {
        if e.error.kind() == ErrorKind::AlreadyExists {
            Error::AlreadyConfigured(path.to_path_buf())
        } else {
            Error::Io(e.error)
        }
    })?;

    info!(path = %path.display(), "wrote default settings");
    Ok(())
}
