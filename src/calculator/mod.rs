//! Awesomeness calculator module.
//!
//! This module defines the [`Ziguana`] capability and its single
//! implementer, [`Benjamin`].
//!
//! # Architecture
//!
//! The calculator module is organized into:
//! - `mod.rs`: The [`Ziguana`] trait
//! - `benjamin`: The fixed-constant implementation
//!
//! # Usage
//!
//! ```
//! use ziguana::calculator::{Benjamin, Ziguana};
//!
//! let benjamin = Benjamin::new();
//! assert_eq!(benjamin.poggersiness(), 10.5);
//! assert_eq!(benjamin.awesomeness(), 105);
//! ```

pub mod benjamin;

pub use benjamin::Benjamin;

/// Scale applied to poggersiness before truncating it into awesomeness.
pub const AWESOMENESS_SCALE: f32 = 10.0;

/// Something that has a poggersiness score and an awesomeness derived from it.
pub trait Ziguana {
    /// The raw fractional score.
    fn poggersiness(&self) -> f32;

    /// Poggersiness scaled by [`AWESOMENESS_SCALE`], truncated toward zero.
    ///
    /// Products outside the `i32` range saturate at `i32::MIN`/`i32::MAX`
    /// and NaN maps to 0.
    #[allow(clippy::cast_possible_truncation)]
    fn awesomeness(&self) -> i32 {
        (self.poggersiness() * AWESOMENESS_SCALE) as i32
    }
}
