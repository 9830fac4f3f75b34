//! Text output formatter

use adoc_check_core::HeadingRecord;

pub fn output_text(records: &[HeadingRecord]) {
    for record in records {
        println!("{}", record.report_line());
    }
}
