//! Node kinds produced by the `asciidoc-ast` converter.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Discriminator for [`AstNode`](crate::AstNode).
///
/// Only the kinds that heading reconstruction understands get their own
/// variant. Everything else keeps its raw tag in [`NodeKind::Other`].
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum NodeKind {
    /// A section heading (`AsciiDoc:HEADING`).
    Heading,
    /// A continuation token inside a heading (`AsciiDoc:HEADING_TOKEN`).
    HeadingToken,
    /// An attribute reference such as `{nbsp}` (`AsciiDoc:ATTRIBUTE_REF`).
    AttributeRef,
    /// Any other node type, with its original tag.
    Other(String),
}

impl NodeKind {
    pub const HEADING: &'static str = "AsciiDoc:HEADING";
    pub const HEADING_TOKEN: &'static str = "AsciiDoc:HEADING_TOKEN";
    pub const ATTRIBUTE_REF: &'static str = "AsciiDoc:ATTRIBUTE_REF";

    /// Creates a kind for an arbitrary tag.
    pub fn other(tag: impl Into<String>) -> Self {
        Self::from(tag.into())
    }

    /// Returns the converter tag for this kind.
    pub fn as_str(&self) -> &str {
        match self {
            NodeKind::Heading => Self::HEADING,
            NodeKind::HeadingToken => Self::HEADING_TOKEN,
            NodeKind::AttributeRef => Self::ATTRIBUTE_REF,
            NodeKind::Other(tag) => tag,
        }
    }
}

impl From<String> for NodeKind {
    fn from(tag: String) -> Self {
        match tag.as_str() {
            Self::HEADING => NodeKind::Heading,
            Self::HEADING_TOKEN => NodeKind::HeadingToken,
            Self::ATTRIBUTE_REF => NodeKind::AttributeRef,
            _ => NodeKind::Other(tag),
        }
    }
}

impl From<NodeKind> for String {
    fn from(kind: NodeKind) -> Self {
        match kind {
            NodeKind::Other(tag) => tag,
            known => known.as_str().to_string(),
        }
    }
}

impl fmt::Display for NodeKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
