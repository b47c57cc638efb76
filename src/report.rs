//! Result of one program run and how it is printed.

use clap::ValueEnum;
use serde::Serialize;

use crate::calculator::Ziguana;
use crate::dispatch::Variant;
use crate::error::Result;

/// Output format for [`Report::render`].
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// The dispatched value alone, one line.
    #[default]
    Text,
    /// The full report as a JSON object.
    Json,
}

/// Everything a run computes.
///
/// `value` and `awesomeness` are independent: the first comes from the
/// dispatch table, the second from the calculator.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Report {
    /// Dispatched code.
    pub code: i32,
    /// Table used for the dispatch.
    pub variant: Variant,
    /// Dispatch result.
    pub value: i32,
    /// Calculator awesomeness.
    pub awesomeness: i32,
    /// Calculator poggersiness.
    pub poggersiness: f32,
}

impl Report {
    /// Evaluates `code` through `variant` alongside the calculator's values.
    pub fn new(calculator: &impl Ziguana, variant: Variant, code: i32) -> Self {
        Self {
            code,
            variant,
            value: variant.dispatch(code),
            awesomeness: calculator.awesomeness(),
            poggersiness: calculator.poggersiness(),
        }
    }

    /// Renders the report without a trailing newline.
    ///
    /// ## Errors
    /// Returns an error if JSON serialization fails.
    pub fn render(&self, format: OutputFormat) -> Result<String> {
        match format {
            OutputFormat::Text => Ok(self.value.to_string()),
            OutputFormat::Json => Ok(serde_json::to_string_pretty(self)?),
        }
    }
}
