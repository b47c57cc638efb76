//! Fixed code-to-value dispatch.
//!
//! Two tables exist and disagree only on code 0:
//!
//! | code | [`Variant::Accumulate`] | [`Variant::ImmediateReturn`] |
//! |------|-------------------------|------------------------------|
//! | 0    | 10                      | 20                           |
//! | 1    | 69                      | 69                           |
//! | 2    | 420                     | 420                          |
//! | 3    | 15                      | 15                           |
//! | else | 0                       | 0                            |

use std::fmt;

use clap::ValueEnum;
use serde::{Deserialize, Serialize};
use tracing::debug;

/// Code the program entry point dispatches when none is given.
pub const DEFAULT_CODE: i32 = 2;

/// Value returned for every code without a table entry.
pub const FALLBACK_VALUE: i32 = 0;

/// Codes with an explicit entry, shared by both tables.
const MAPPED_CODES: [i32; 4] = [0, 1, 2, 3];

/// Which dispatch table to use.
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize, ValueEnum,
)]
#[serde(rename_all = "kebab-case")]
pub enum Variant {
    /// Code 0 maps to 10.
    #[default]
    Accumulate,
    /// Code 0 maps to 20.
    ImmediateReturn,
}

impl Variant {
    /// Returns the table entry for `code`, or `None` if the code takes the
    /// default path.
    pub const fn lookup(self, code: i32) -> Option<i32> {
        match (self, code) {
            (Self::Accumulate, 0) => Some(10),
            (Self::ImmediateReturn, 0) => Some(20),
            (_, 1) => Some(69),
            (_, 2) => Some(420),
            (_, 3) => Some(15),
            _ => None,
        }
    }

    /// Maps `code` to its value. Unmapped codes yield [`FALLBACK_VALUE`].
    pub fn dispatch(self, code: i32) -> i32 {
        let value = self.lookup(code);
        debug!(variant = %self, code, mapped = value.is_some(), "dispatch");
        value.unwrap_or(FALLBACK_VALUE)
    }

    /// Codes with an explicit entry, in ascending order.
    pub const fn mapped_codes() -> &'static [i32] {
        &MAPPED_CODES
    }

    /// Every `(code, value)` pair of this table.
    pub fn table(self) -> impl Iterator<Item = (i32, i32)> {
        Self::mapped_codes()
            .iter()
            .filter_map(move |&code| self.lookup(code).map(|value| (code, value)))
    }

    /// Name as written in settings files and on the command line.
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Accumulate => "accumulate",
            Self::ImmediateReturn => "immediate-return",
        }
    }
}

impl fmt::Display for Variant {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Dispatches `code` through the default table.
pub fn dispatch(code: i32) -> i32 {
    Variant::default().dispatch(code)
}
