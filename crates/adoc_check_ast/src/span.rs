//! Byte ranges within a source document.

use std::fmt;

use serde::{Deserialize, Serialize};

/// A span representing a range in source text.
///
/// Offsets are the converter's `startOffset`/`endOffset` values and are
/// serialized under the same names. Both are required.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct Span {
    /// Start byte offset (0-indexed, inclusive).
    #[serde(rename = "startOffset")]
    pub start: u32,
    /// End byte offset as reported by the converter.
    #[serde(rename = "endOffset")]
    pub end: u32,
}

impl Span {
    /// Creates a new span.
    #[inline]
    pub const fn new(start: u32, end: u32) -> Self {
        Self { start, end }
    }
}

impl fmt::Display for Span {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}..{}", self.start, self.end)
    }
}
