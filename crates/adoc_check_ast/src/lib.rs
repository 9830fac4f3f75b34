//! # adoc_check_ast
//!
//! Document tree definitions for adoc-check.
//!
//! The tree mirrors the JSON emitted by the `asciidoc-ast` converter: every
//! node carries a `type` tag, an optional `text`, its children, and the byte
//! offsets it covers in the source file.
//!
//! ## Example
//!
//! ```rust
//! use adoc_check_ast::{AstNode, NodeKind, Span};
//! use adoc_check_ast::visitor::walk;
//!
//! let heading = AstNode::new_text(NodeKind::Heading, Span::new(0, 9), "== Intro");
//! let doc = AstNode::new_parent(NodeKind::other("AsciiDoc:FILE"), Span::new(0, 9), vec![heading]);
//!
//! let mut count = 0;
//! walk(&doc, &mut |_: &AstNode| {
//!     count += 1;
//!     true
//! });
//! assert_eq!(count, 2);
//! ```

mod node;
mod node_kind;
mod span;
pub mod visitor;

pub use node::AstNode;
pub use node_kind::NodeKind;
pub use span::Span;

pub use visitor::{Visitor, walk};
