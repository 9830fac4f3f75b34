//! Parse error types.

use std::path::PathBuf;

use thiserror::Error;

/// Errors that can occur while obtaining a document tree.
#[derive(Debug, Error)]
pub enum ParseError {
    /// The converter process could not be started.
    #[error("Failed to run `{program}`: {source}")]
    Spawn {
        /// Program that was invoked.
        program: String,
        /// Underlying I/O error.
        #[source]
        source: std::io::Error,
    },

    /// The converter exited unsuccessfully.
    #[error("Converter failed on {} ({status}): {stderr}", .path.display())]
    Failed {
        /// Document being converted.
        path: PathBuf,
        /// Exit status description.
        status: String,
        /// Captured standard error.
        stderr: String,
    },

    /// The converter output is not a valid document tree.
    #[error("Invalid document tree for {}: {source}", .path.display())]
    InvalidTree {
        /// Document being converted.
        path: PathBuf,
        /// JSON error.
        #[source]
        source: serde_json::Error,
    },

    /// File I/O error.
    #[error("Failed to read {}: {source}", .path.display())]
    Io {
        /// File being read.
        path: PathBuf,
        /// Underlying I/O error.
        #[source]
        source: std::io::Error,
    },
}

impl ParseError {
    /// Creates an invalid tree error.
    pub fn invalid_tree(path: impl Into<PathBuf>, source: serde_json::Error) -> Self {
        Self::InvalidTree {
            path: path.into(),
            source,
        }
    }

    /// Creates a file I/O error.
    pub fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Io {
            path: path.into(),
            source,
        }
    }
}
