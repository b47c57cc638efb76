//! Ziguana
//!
//! A calculator with a fixed poggersiness score and a derived awesomeness,
//! plus a four-entry dispatch table mapping small integer codes to values.
//!
//! # Overview
//!
//! This library provides:
//! - The [`Ziguana`] capability and its implementer [`Benjamin`]
//! - Code dispatch over two table variants
//! - A run report renderable as text or JSON
//! - A JSON settings file for the binary
//!
//! # Modules
//!
//! - [`calculator`] - Poggersiness and awesomeness
//! - [`dispatch`] - Code to value tables
//! - [`report`] - Run output
//! - [`config`] - Settings file
//! - [`error`] - Error types for the crate
//!
//! # Example
//!
//! ```
//! use ziguana::{Benjamin, Variant, Ziguana};
//!
//! assert_eq!(Benjamin::new().awesomeness(), 105);
//! assert_eq!(Variant::Accumulate.dispatch(2), 420);
//! assert_eq!(Variant::ImmediateReturn.dispatch(5), 0);
//! ```

// Enforce documentation and other quality attributes
#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
// Allow some pedantic lints that are too strict
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::must_use_candidate)]

pub mod calculator;
pub mod config;
pub mod dispatch;
pub mod error;
pub mod report;

// Re-export commonly used types at the crate root
pub use calculator::{Benjamin, Ziguana};
pub use dispatch::{Variant, dispatch};
pub use error::{Error, Result};
