//! Pre-order traversal of the document tree.
//!
//! A [`Visitor`] is called once per node. Returning `false` keeps the walker
//! out of that node's children; the rest of the tree is still visited.
//!
//! # Examples
//!
//! ## Collecting Nodes
//!
//! ```rust
//! use adoc_check_ast::{AstNode, NodeKind, Span, Visitor};
//! use adoc_check_ast::visitor::walk;
//!
//! struct TokenCollector<'a> {
//!     texts: Vec<&'a str>,
//! }
//!
//! impl<'a> Visitor<'a> for TokenCollector<'a> {
//!     fn visit(&mut self, node: &'a AstNode) -> bool {
//!         if let Some(text) = node.text() {
//!             self.texts.push(text);
//!         }
//!         true
//!     }
//! }
//!
//! let token = AstNode::new_text(NodeKind::HeadingToken, Span::new(0, 5), "hello");
//! let doc = AstNode::new_parent(NodeKind::other("AsciiDoc:FILE"), Span::new(0, 5), vec![token]);
//!
//! let mut collector = TokenCollector { texts: Vec::new() };
//! walk(&doc, &mut collector);
//! assert_eq!(collector.texts, vec!["hello"]);
//! ```

mod walk;

pub use walk::{walk, walk_children};

use crate::AstNode;

/// Callback invoked for every node reached by [`walk`].
pub trait Visitor<'a> {
    /// Visits `node`. Returns whether to descend into its children.
    fn visit(&mut self, node: &'a AstNode) -> bool;
}

impl<'a, F> Visitor<'a> for F
where
    F: FnMut(&'a AstNode) -> bool,
{
    #[inline]
    fn visit(&mut self, node: &'a AstNode) -> bool {
        self(node)
    }
}
