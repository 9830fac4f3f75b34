//! AstNode definition.
//!
//! The owned tree node deserialized from the converter's JSON output.

use serde::{Deserialize, Deserializer, Serialize};

use crate::{NodeKind, Span};

/// A node in the document tree.
///
/// Deserializes from the converter's node objects:
///
/// ```json
/// {"type": "AsciiDoc:HEADING", "startOffset": 0, "endOffset": 12,
///  "children": [{"type": "AsciiDoc:HEADING_TOKEN", "text": "== Title"}]}
/// ```
///
/// `type` is required. A node without it fails to deserialize, which
/// usually means the converter version does not match.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AstNode {
    /// The type of this node.
    #[serde(rename = "type")]
    pub kind: NodeKind,

    /// Child nodes, in document order. Absent and `null` both mean none.
    #[serde(
        default,
        deserialize_with = "deserialize_children",
        skip_serializing_if = "Vec::is_empty"
    )]
    pub children: Vec<AstNode>,

    /// Leaf text, present on token-like nodes.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub text: Option<String>,

    /// Byte offsets in the source file. `None` unless the converter sent
    /// both `startOffset` and `endOffset`.
    #[serde(flatten)]
    pub span: Option<Span>,
}

fn deserialize_children<'de, D>(deserializer: D) -> Result<Vec<AstNode>, D::Error>
where
    D: Deserializer<'de>,
{
    Option::<Vec<AstNode>>::deserialize(deserializer).map(Option::unwrap_or_default)
}

impl AstNode {
    /// Creates a new parent node with children.
    pub fn new_parent(kind: NodeKind, span: Span, children: Vec<AstNode>) -> Self {
        Self {
            kind,
            children,
            text: None,
            span: Some(span),
        }
    }

    /// Creates a new text node.
    pub fn new_text(kind: NodeKind, span: Span, text: impl Into<String>) -> Self {
        Self {
            kind,
            children: Vec::new(),
            text: Some(text.into()),
            span: Some(span),
        }
    }

    /// Returns true if this node has children.
    #[inline]
    pub fn has_children(&self) -> bool {
        !self.children.is_empty()
    }

    /// Returns the leaf text of this node, if any.
    #[inline]
    pub fn text(&self) -> Option<&str> {
        self.text.as_deref()
    }
}
