//! # adoc_check_parser
//!
//! Parser abstraction layer for adoc-check.
//!
//! This crate provides:
//! - A `Parser` trait that turns a document path into an [`AstNode`] tree
//! - `AsciidocAstParser`, which runs the `asciidoc-ast` converter jar
//! - `JsonTreeParser`, which reads a tree the converter rendered earlier
//!
//! ## Example
//!
//! ```rust,ignore
//! use adoc_check_parser::{AsciidocAstParser, Parser};
//!
//! let parser = AsciidocAstParser::new("/path/to/asciidoc-ast.jar");
//! let tree = parser.parse("README.adoc".as_ref())?;
//! ```
//!
//! [`AstNode`]: adoc_check_ast::AstNode

mod asciidoc_ast;
mod error;
mod json;
mod traits;

pub use asciidoc_ast::AsciidocAstParser;
pub use error::ParseError;
pub use json::JsonTreeParser;
pub use traits::Parser;
