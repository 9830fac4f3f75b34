//! Heading extraction and text reconstruction.

use std::path::{Path, PathBuf};
use std::sync::OnceLock;

use adoc_check_ast::visitor::walk;
use adoc_check_ast::{AstNode, NodeKind, Span, Visitor};
use regex::Regex;
use serde::Serialize;

use crate::CheckError;

/// The only attribute reference a heading may contain.
const NBSP_ATTRIBUTE: &str = "nbsp";

static HEADING_MARKER: OnceLock<Regex> = OnceLock::new();

fn heading_marker() -> &'static Regex {
    HEADING_MARKER.get_or_init(|| Regex::new("^=+ ").expect("heading marker pattern is valid"))
}

/// A heading found in a document.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct HeadingRecord {
    /// File containing the heading.
    pub file: PathBuf,
    /// Offsets of the heading node.
    #[serde(flatten)]
    pub span: Span,
    /// Heading text without its `=` marker.
    pub text: String,
    /// Words in the wrong case. Empty until classified.
    #[serde(rename = "badWords")]
    pub offending_words: Vec<String>,
}

impl HeadingRecord {
    /// Renders the line printed for a non-compliant heading.
    pub fn report_line(&self) -> String {
        format!(
            "In file {} {} '{}', the following words are not in correct case: {}",
            self.file.display(),
            self.span,
            self.text,
            self.offending_words.join(", ")
        )
    }
}

/// Collects heading nodes without descending into them.
struct HeadingCollector<'a> {
    headings: Vec<&'a AstNode>,
}

impl<'a> Visitor<'a> for HeadingCollector<'a> {
    fn visit(&mut self, node: &'a AstNode) -> bool {
        if node.kind == NodeKind::Heading {
            self.headings.push(node);
            return false;
        }
        true
    }
}

/// Returns every heading node of `tree`, in document order.
pub fn get_headers(tree: &AstNode) -> Vec<&AstNode> {
    let mut collector = HeadingCollector {
        headings: Vec::new(),
    };
    walk(tree, &mut collector);
    collector.headings
}

/// Rebuilds the plain text of a heading node.
///
/// The first child holds the marker and the start of the title. Later
/// children are heading tokens (appended as is) or `{nbsp}` attribute
/// references (rendered as one space). Anything else is rejected rather
/// than guessed at.
pub fn reconstruct_heading(file: &Path, node: &AstNode) -> Result<HeadingRecord, CheckError> {
    let malformed = |reason: String| CheckError::malformed(file, node.span, reason);

    let span = node
        .span
        .ok_or_else(|| malformed("heading has no offsets".to_string()))?;
    let (first, rest) = node
        .children
        .split_first()
        .ok_or_else(|| malformed("heading has no children".to_string()))?;
    let raw = first
        .text()
        .ok_or_else(|| malformed(format!("first child {} has no text", first.kind)))?;

    let mut text = heading_marker().replace(raw, "").into_owned();

    for child in rest {
        match &child.kind {
            NodeKind::HeadingToken => {
                let token = child
                    .text()
                    .ok_or_else(|| malformed("heading token has no text".to_string()))?;
                text.push_str(token);
            }
            NodeKind::AttributeRef => {
                let name = child.children.get(1).and_then(AstNode::text);
                if name != Some(NBSP_ATTRIBUTE) {
                    return Err(malformed(format!(
                        "unexpected attribute reference {}",
                        name.unwrap_or("<unnamed>")
                    )));
                }
                text.push(' ');
            }
            other => return Err(malformed(format!("unexpected child {}", other))),
        }
    }

    Ok(HeadingRecord {
        file: file.to_path_buf(),
        span,
        text,
        offending_words: Vec::new(),
    })
}
