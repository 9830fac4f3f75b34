//! Batch heading checker.

use std::path::Path;

use adoc_check_ast::AstNode;
use adoc_check_parser::Parser;
use tracing::{debug, info};

use crate::heading::{get_headers, reconstruct_heading};
use crate::{CheckError, ExceptionSet, HeadingRecord};

/// Checks the headings of documents obtained through a [`Parser`].
///
/// Files are processed one after another. The first error stops the run.
pub struct Checker<P> {
    parser: P,
    exceptions: ExceptionSet,
}

impl<P: Parser> Checker<P> {
    /// Creates a checker with the built-in exception set.
    pub fn new(parser: P) -> Self {
        Self {
            parser,
            exceptions: ExceptionSet::default(),
        }
    }

    /// Replaces the exception set.
    pub fn with_exceptions(mut self, exceptions: ExceptionSet) -> Self {
        self.exceptions = exceptions;
        self
    }

    /// Returns the parser in use.
    pub fn parser(&self) -> &P {
        &self.parser
    }

    /// Returns the non-compliant headings of an already parsed tree.
    pub fn check_tree(&self, file: &Path, tree: &AstNode) -> Result<Vec<HeadingRecord>, CheckError> {
        let mut bad = Vec::new();

        for node in get_headers(tree) {
            let mut record = reconstruct_heading(file, node)?;
            let result = self.exceptions.classify(&record.text);
            if !result.is_title_case {
                debug!("{}: '{}' is not in title case", file.display(), record.text);
                record.offending_words = result.offending_words;
                bad.push(record);
            }
        }

        Ok(bad)
    }

    /// Parses `file` and returns its non-compliant headings.
    pub fn check_file(&self, file: &Path) -> Result<Vec<HeadingRecord>, CheckError> {
        debug!("Checking {} with {}", file.display(), self.parser.name());
        let tree = self.parser.parse(file)?;
        self.check_tree(file, &tree)
    }

    /// Returns the non-compliant headings of every file, in file order.
    pub fn get_bad_headers<F: AsRef<Path>>(
        &self,
        files: &[F],
    ) -> Result<Vec<HeadingRecord>, CheckError> {
        let mut bad = Vec::new();
        for file in files {
            bad.extend(self.check_file(file.as_ref())?);
        }

        info!(
            "Checked {} files, found {} headings not in title case",
            files.len(),
            bad.len()
        );
        Ok(bad)
    }
}
