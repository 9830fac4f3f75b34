//! # adoc_check_core
//!
//! Title-case checking for AsciiDoc section headings.
//!
//! This crate provides:
//! - The title-case classifier and its exception list
//! - Heading extraction and text reconstruction from a document tree
//! - The batch `Checker`
//! - Configuration loading
//!
//! ## Example
//!
//! ```rust,ignore
//! use adoc_check_core::Checker;
//! use adoc_check_parser::AsciidocAstParser;
//!
//! let checker = Checker::new(AsciidocAstParser::new(jar_path));
//! for record in checker.get_bad_headers(&["README.adoc"])? {
//!     println!("{}", record.report_line());
//! }
//! ```

mod checker;
mod config;
mod error;
pub mod heading;
pub mod titlecase;

pub use checker::Checker;
pub use config::CheckerConfig;
pub use error::CheckError;
pub use heading::{HeadingRecord, get_headers, reconstruct_heading};
pub use titlecase::{DEFAULT_EXCEPTIONS, ExceptionSet, TitleCase, classify};

pub use adoc_check_parser::{ParseError, Parser};
