//! Parser for trees that were already rendered to JSON.

use std::fs;
use std::path::Path;

use adoc_check_ast::AstNode;
use tracing::debug;

use crate::{ParseError, Parser};

/// Reads a document tree from a JSON file.
///
/// The file must hold the converter's output for one document, so the tree
/// can be checked without a Java runtime.
#[derive(Debug, Clone, Copy, Default)]
pub struct JsonTreeParser;

impl JsonTreeParser {
    /// Creates a new JSON tree parser.
    pub fn new() -> Self {
        Self
    }

    /// Parses a tree from a JSON string.
    pub fn parse_str(&self, path: &Path, json: &str) -> Result<AstNode, ParseError> {
        serde_json::from_str(json).map_err(|e| ParseError::invalid_tree(path, e))
    }
}

impl Parser for JsonTreeParser {
    fn name(&self) -> &str {
        "json-tree"
    }

    fn parse(&self, path: &Path) -> Result<AstNode, ParseError> {
        debug!("Reading tree from {}", path.display());
        let content = fs::read_to_string(path).map_err(|e| ParseError::io(path, e))?;
        self.parse_str(path, &content)
    }
}
