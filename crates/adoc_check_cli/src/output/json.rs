//! JSON output formatter

use adoc_check_core::HeadingRecord;
use miette::{IntoDiagnostic, Result};

pub fn output_json(records: &[HeadingRecord]) -> Result<()> {
    let output = serde_json::to_string_pretty(records).into_diagnostic()?;
    println!("{}", output);
    Ok(())
}
