//! Error types for ziguana.
//!
//! The calculator and dispatch table are total functions and never fail.
//! Everything here belongs to the surrounding layer: reading and writing
//! the settings file.

use std::path::PathBuf;

use thiserror::Error;

/// A unified error type for the crate.
#[derive(Debug, Error)]
pub enum Error {
    /// The settings file was read but its content is not usable.
    #[error("configuration error: {0}")]
    Config(String),

    /// `config` was asked to create a settings file that already exists.
    #[error("settings file already exists: {}", .0.display())]
    AlreadyConfigured(PathBuf),

    /// Failed to (de)serialize JSON.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// Generic IO error.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// A specialized Result type for ziguana operations.
pub type Result<T> = std::result::Result<T, Error>;
