//! Output formatting module

mod json;
mod text;

use adoc_check_core::HeadingRecord;
use miette::Result;

use crate::cli::OutputFormat;

/// Prints `records` and returns whether any heading was reported.
pub fn output_results(records: &[HeadingRecord], format: OutputFormat) -> Result<bool> {
    match format {
        OutputFormat::Json => json::output_json(records)?,
        OutputFormat::Text => text::output_text(records),
    }

    Ok(!records.is_empty())
}
