//! Check command implementation

use std::path::PathBuf;

use adoc_check_core::{Checker, CheckerConfig, Parser};
use adoc_check_parser::{AsciidocAstParser, JsonTreeParser};
use adoc_check_registry::{DEFAULT_JAR_URL, JarCache, JarDownloader, ensure_jar};
use miette::{IntoDiagnostic, Result};
use tracing::{debug, info};

use crate::cli::Cli;
use crate::output::output_results;
use crate::utils::create_tokio_runtime;

pub fn run_check(cli: &Cli) -> Result<bool> {
    let config = if let Some(ref path) = cli.config {
        CheckerConfig::from_file(path).into_diagnostic()?
    } else {
        find_config()?
    };

    let parser = build_parser(cli, &config)?;
    let checker = Checker::new(parser).with_exceptions(config.exceptions());

    let records = checker.get_bad_headers(&cli.files).into_diagnostic()?;

    output_results(&records, cli.format)
}

pub fn find_config() -> Result<CheckerConfig> {
    if let Some(path) = CheckerConfig::discover(".") {
        info!("Using config: {}", path.display());
        return CheckerConfig::from_file(&path).into_diagnostic();
    }

    debug!("No config file found, using defaults");
    Ok(CheckerConfig::new())
}

fn build_parser(cli: &Cli, config: &CheckerConfig) -> Result<Box<dyn Parser>> {
    if cli.tree_json {
        return Ok(Box::new(JsonTreeParser::new()));
    }

    let jar = resolve_jar(cli, config)?;
    let mut parser = AsciidocAstParser::new(jar);
    if let Some(java) = cli.java.as_ref().or(config.java.as_ref()) {
        parser = parser.with_java(java);
    }
    Ok(Box::new(parser))
}

/// Picks the converter jar: `--jar`, then the configured jar, then the
/// cached download.
fn resolve_jar(cli: &Cli, config: &CheckerConfig) -> Result<PathBuf> {
    if let Some(jar) = cli.jar.clone().or_else(|| config.resolved_jar()) {
        debug!("Using converter {}", jar.display());
        return Ok(jar);
    }

    let url = config.jar_url.as_deref().unwrap_or(DEFAULT_JAR_URL);
    let cache = JarCache::new().into_diagnostic()?;
    let downloader = JarDownloader::new().into_diagnostic()?;
    let runtime = create_tokio_runtime()?;

    runtime
        .block_on(ensure_jar(
            &cache,
            &downloader,
            url,
            config.jar_sha256.as_deref(),
        ))
        .into_diagnostic()
}
