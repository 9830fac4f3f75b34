//! Checker error types.

use std::path::{Path, PathBuf};

use adoc_check_ast::Span;
use adoc_check_parser::ParseError;
use thiserror::Error;

/// Errors that abort a check run.
#[derive(Debug, Error)]
pub enum CheckError {
    /// The document could not be turned into a tree.
    #[error(transparent)]
    Parse(#[from] ParseError),

    /// A heading node has a shape the reconstruction does not understand.
    #[error("Malformed heading in {}{}: {reason}", .file.display(), location(.span))]
    MalformedTree {
        /// File containing the heading.
        file: PathBuf,
        /// Offsets of the heading node, when the converter sent them.
        span: Option<Span>,
        /// What was unexpected.
        reason: String,
    },

    /// Configuration error.
    #[error("Configuration error: {0}")]
    Config(String),
}

impl CheckError {
    /// Creates a malformed tree error.
    pub fn malformed(file: &Path, span: Option<Span>, reason: impl Into<String>) -> Self {
        Self::MalformedTree {
            file: file.to_path_buf(),
            span,
            reason: reason.into(),
        }
    }

    /// Creates a configuration error.
    pub fn config(message: impl Into<String>) -> Self {
        Self::Config(message.into())
    }
}

fn location(span: &Option<Span>) -> String {
    span.map(|span| format!(" at {}", span)).unwrap_or_default()
}
