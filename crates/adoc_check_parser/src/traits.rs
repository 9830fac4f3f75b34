//! Parser trait definition.

use std::path::Path;

use adoc_check_ast::AstNode;

use crate::ParseError;

/// Trait for turning a source document into a document tree.
///
/// The checker only depends on this trait, so it never needs to know how the
/// tree was produced.
///
/// # Example
///
/// ```rust,ignore
/// use std::path::Path;
/// use adoc_check_ast::AstNode;
/// use adoc_check_parser::{ParseError, Parser};
///
/// struct FixedParser(AstNode);
///
/// impl Parser for FixedParser {
///     fn name(&self) -> &str {
///         "fixed"
///     }
///
///     fn parse(&self, _path: &Path) -> Result<AstNode, ParseError> {
///         Ok(self.0.clone())
///     }
/// }
/// ```
pub trait Parser {
    /// Returns the name of this parser.
    fn name(&self) -> &str;

    /// Parses the document at `path` into a tree.
    fn parse(&self, path: &Path) -> Result<AstNode, ParseError>;
}

impl<P: Parser + ?Sized> Parser for Box<P> {
    fn name(&self) -> &str {
        (**self).name()
    }

    fn parse(&self, path: &Path) -> Result<AstNode, ParseError> {
        (**self).parse(path)
    }
}
