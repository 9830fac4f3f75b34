//! Parser backed by the `asciidoc-ast` converter jar.
//!
//! The converter is a Java program that prints the document tree of one
//! AsciiDoc file as JSON on stdout.

use std::ffi::OsString;
use std::path::{Path, PathBuf};
use std::process::{Command, Stdio};

use adoc_check_ast::AstNode;
use tracing::debug;

use crate::{ParseError, Parser};

/// Default Java launcher, resolved through `PATH`.
pub const DEFAULT_JAVA: &str = "java";

/// Runs `java -jar <jar> <path>` and reads the tree from its stdout.
///
/// Stderr is captured and only surfaces in [`ParseError::Failed`].
#[derive(Debug, Clone)]
pub struct AsciidocAstParser {
    java: OsString,
    jar: PathBuf,
}

impl AsciidocAstParser {
    /// Creates a parser using the `java` found on `PATH`.
    pub fn new(jar: impl Into<PathBuf>) -> Self {
        Self {
            java: OsString::from(DEFAULT_JAVA),
            jar: jar.into(),
        }
    }

    /// Uses a specific Java executable.
    pub fn with_java(mut self, java: impl Into<OsString>) -> Self {
        self.java = java.into();
        self
    }

    fn command(&self, path: &Path) -> Command {
        let mut command = Command::new(&self.java);
        command
            .arg("-jar")
            .arg(&self.jar)
            .arg(path)
            .stdin(Stdio::null());
        command
    }
}

impl Parser for AsciidocAstParser {
    fn name(&self) -> &str {
        "asciidoc-ast"
    }

    fn parse(&self, path: &Path) -> Result<AstNode, ParseError> {
        debug!("Converting {} with {}", path.display(), self.jar.display());

        let output = self
            .command(path)
            .output()
            .map_err(|source| ParseError::Spawn {
                program: self.java.to_string_lossy().into_owned(),
                source,
            })?;

        if !output.status.success() {
            return Err(ParseError::Failed {
                path: path.to_path_buf(),
                status: output.status.to_string(),
                stderr: String::from_utf8_lossy(&output.stderr).trim().to_string(),
            });
        }

        serde_json::from_slice(&output.stdout).map_err(|e| ParseError::invalid_tree(path, e))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn builds_java_jar_command() {
        let parser = AsciidocAstParser::new("/opt/asciidoc-ast.jar").with_java("/usr/bin/java");
        let command = parser.command(Path::new("doc.adoc"));

        assert_eq!(command.get_program(), "/usr/bin/java");
        let args: Vec<_> = command.get_args().collect();
        assert_eq!(args, vec!["-jar", "/opt/asciidoc-ast.jar", "doc.adoc"]);
    }

    #[test]
    fn reports_missing_java() {
        let parser =
            AsciidocAstParser::new("converter.jar").with_java("/nonexistent/bin/java-adoc-check");

        let err = parser.parse(Path::new("doc.adoc")).unwrap_err();

        assert!(matches!(err, ParseError::Spawn { .. }), "got {:?}", err);
    }

    #[cfg(unix)]
    mod fake_converter {
        use super::*;
        use std::fs;
        use std::os::unix::fs::PermissionsExt;
        use tempfile::TempDir;

        /// Writes an executable shell script standing in for `java`.
        fn fake_java(dir: &TempDir, body: &str) -> PathBuf {
            let script = dir.path().join("java");
            fs::write(&script, format!("#!/bin/sh\n{}\n", body)).unwrap();
            fs::set_permissions(&script, fs::Permissions::from_mode(0o755)).unwrap();
            script
        }

        #[test]
        fn reads_tree_from_stdout() {
            let dir = TempDir::new().unwrap();
            // Arguments are: -jar <jar> <path>
            let java = fake_java(
                &dir,
                r#"echo '{"type":"AsciiDoc:FILE","startOffset":0,"endOffset":3,"children":[]}'"#,
            );

            let parser = AsciidocAstParser::new("converter.jar").with_java(&java);
            let tree = parser.parse(Path::new("doc.adoc")).unwrap();

            assert_eq!(tree.kind.as_str(), "AsciiDoc:FILE");
            assert_eq!(tree.span.map(|span| span.end), Some(3));
        }

        #[test]
        fn passes_document_path_last() {
            let dir = TempDir::new().unwrap();
            let tree_file = dir.path().join("tree.json");
            fs::write(&tree_file, r#"{"type":"AsciiDoc:FILE","text":"from-file"}"#).unwrap();
            let java = fake_java(&dir, r#"cat "$3""#);

            let parser = AsciidocAstParser::new("converter.jar").with_java(&java);
            let tree = parser.parse(&tree_file).unwrap();

            assert_eq!(tree.text(), Some("from-file"));
        }

        #[test]
        fn surfaces_stderr_on_failure() {
            let dir = TempDir::new().unwrap();
            let java = fake_java(&dir, "echo 'no such file' >&2\nexit 3");

            let parser = AsciidocAstParser::new("converter.jar").with_java(&java);
            let err = parser.parse(Path::new("missing.adoc")).unwrap_err();

            match err {
                ParseError::Failed { path, stderr, .. } => {
                    assert_eq!(path, PathBuf::from("missing.adoc"));
                    assert_eq!(stderr, "no such file");
                }
                other => panic!("Expected Failed, got {:?}", other),
            }
        }

        #[test]
        fn rejects_non_json_output() {
            let dir = TempDir::new().unwrap();
            let java = fake_java(&dir, "echo 'not json'");

            let parser = AsciidocAstParser::new("converter.jar").with_java(&java);
            let err = parser.parse(Path::new("doc.adoc")).unwrap_err();

            assert!(matches!(err, ParseError::InvalidTree { .. }), "got {:?}", err);
        }
    }
}
