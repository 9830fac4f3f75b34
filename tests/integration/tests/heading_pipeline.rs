//! End-to-end tests for the heading check pipeline.
//!
//! Each test writes a document tree to disk, runs it through a parser and
//! the checker, and compares the records reported for it.

use std::fs;
use std::path::{Path, PathBuf};

use adoc_check_core::{CheckError, Checker, CheckerConfig, HeadingRecord};
use adoc_check_parser::JsonTreeParser;
use pretty_assertions::assert_eq;
use tempfile::TempDir;

/// Builds a tree JSON document whose headings are given as
/// `(start, end, raw heading line)`.
fn tree_with_headings(headings: &[(u32, u32, &str)]) -> String {
    let children: Vec<String> = headings
        .iter()
        .map(|(start, end, line)| {
            format!(
                r#"{{"type":"AsciiDoc:SECTION","children":[
                    {{"type":"AsciiDoc:HEADING","startOffset":{start},"endOffset":{end},"children":[
                        {{"type":"AsciiDoc:HEADING_TOKEN","text":"{line}"}}
                    ]}},
                    {{"type":"AsciiDoc:BLOCK","children":[{{"type":"AsciiDoc:TEXT","text":"body"}}]}}
                ]}}"#
            )
        })
        .collect();
    format!(
        r#"{{"type":"AsciiDoc:FILE","children":[{}]}}"#,
        children.join(",")
    )
}

fn write(dir: &Path, name: &str, content: &str) -> PathBuf {
    let path = dir.join(name);
    fs::write(&path, content).unwrap();
    path
}

#[test]
fn reports_only_bad_headings_in_file_order() {
    let dir = TempDir::new().unwrap();
    let first = write(
        dir.path(),
        "first.json",
        &tree_with_headings(&[(0, 18, "= Getting Started"), (30, 50, "== a Guide to Things")]),
    );
    let second = write(
        dir.path(),
        "second.json",
        &tree_with_headings(&[(0, 22, "== Where To Go Next"), (40, 55, "== Wrapping up")]),
    );

    let checker = Checker::new(JsonTreeParser::new());
    let records = checker.get_bad_headers(&[&first, &second]).unwrap();

    let summary: Vec<(PathBuf, String, Vec<String>)> = records
        .into_iter()
        .map(|r| (r.file, r.text, r.offending_words))
        .collect();
    assert_eq!(
        summary,
        vec![
            (
                first.clone(),
                "a Guide to Things".to_string(),
                vec!["a".to_string()]
            ),
            (
                second.clone(),
                "Where To Go Next".to_string(),
                vec!["To".to_string()]
            ),
            (
                second.clone(),
                "Wrapping up".to_string(),
                vec!["up".to_string()]
            ),
        ]
    );
}

#[test]
fn report_line_matches_cli_format() {
    let dir = TempDir::new().unwrap();
    let doc = write(
        dir.path(),
        "doc.json",
        &tree_with_headings(&[(12, 34, "== the Quick-Brown fox")]),
    );

    let checker = Checker::new(JsonTreeParser::new());
    let records: Vec<HeadingRecord> = checker.get_bad_headers(&[&doc]).unwrap();

    assert_eq!(records.len(), 1);
    assert_eq!(
        records[0].report_line(),
        format!(
            "In file {} 12..34 'the Quick-Brown fox', the following words are not in correct case: the, fox",
            doc.display()
        )
    );
}

#[test]
fn inline_code_is_ignored() {
    let dir = TempDir::new().unwrap();
    let doc = write(
        dir.path(),
        "doc.json",
        &tree_with_headings(&[(0, 30, "== Configuring `the lower case` Files")]),
    );

    let checker = Checker::new(JsonTreeParser::new());
    assert!(checker.get_bad_headers(&[&doc]).unwrap().is_empty());
}

#[test]
fn configured_exceptions_apply_to_the_run() {
    let dir = TempDir::new().unwrap();
    let doc = write(
        dir.path(),
        "doc.json",
        &tree_with_headings(&[(0, 16, "== This is Fine")]),
    );
    let config_path = write(
        dir.path(),
        ".adoc-check.jsonc",
        r#"{
            // "is" stays lowercase in our docs
            "additionalExceptions": ["IS"]
        }"#,
    );

    let default_checker = Checker::new(JsonTreeParser::new());
    assert_eq!(default_checker.get_bad_headers(&[&doc]).unwrap().len(), 1);

    let config = CheckerConfig::from_file(&config_path).unwrap();
    let checker = Checker::new(JsonTreeParser::new()).with_exceptions(config.exceptions());
    assert!(checker.get_bad_headers(&[&doc]).unwrap().is_empty());
}

#[test]
fn first_error_aborts_the_batch() {
    let dir = TempDir::new().unwrap();
    let bad = write(
        dir.path(),
        "bad.json",
        &tree_with_headings(&[(0, 10, "== the end")]),
    );
    let missing = dir.path().join("missing.json");

    let checker = Checker::new(JsonTreeParser::new());
    let err = checker.get_bad_headers(&[&bad, &missing]).unwrap_err();

    assert!(matches!(err, CheckError::Parse(_)));
}

#[cfg(unix)]
mod converter {
    use super::*;
    use adoc_check_parser::AsciidocAstParser;
    use pretty_assertions::assert_eq;
    use std::os::unix::fs::PermissionsExt;

    /// A stand-in for `java` that prints the tree stored next to the document.
    fn fake_java(dir: &Path) -> PathBuf {
        let script = dir.join("java");
        fs::write(
            &script,
            "#!/bin/sh\n[ \"$1\" = \"-jar\" ] || exit 64\necho 'converter noise' >&2\ncat \"$3.json\"\n",
        )
        .unwrap();
        fs::set_permissions(&script, fs::Permissions::from_mode(0o755)).unwrap();
        script
    }

    #[test]
    fn checks_documents_through_the_converter() {
        let dir = TempDir::new().unwrap();
        let java = fake_java(dir.path());
        let doc = write(dir.path(), "guide.adoc", "== Installing the tool\n");
        write(
            dir.path(),
            "guide.adoc.json",
            &tree_with_headings(&[(0, 22, "== Installing the tool")]),
        );

        let parser = AsciidocAstParser::new(dir.path().join("asciidoc-ast.jar")).with_java(&java);
        let checker = Checker::new(parser);
        let records = checker.get_bad_headers(&[&doc]).unwrap();

        assert_eq!(records.len(), 1);
        assert_eq!(records[0].file, doc);
        assert_eq!(records[0].offending_words, vec!["tool".to_string()]);
    }

    #[test]
    fn converter_failure_is_reported() {
        let dir = TempDir::new().unwrap();
        let java = fake_java(dir.path());
        let doc = write(dir.path(), "guide.adoc", "== Title\n");

        let parser = AsciidocAstParser::new(dir.path().join("asciidoc-ast.jar")).with_java(&java);
        let checker = Checker::new(parser);
        let err = checker.get_bad_headers(&[&doc]).unwrap_err();

        let message = err.to_string();
        assert!(message.contains("converter noise"), "{message}");
    }
}
