//! CLI argument definitions

use std::path::PathBuf;

use clap::{Parser, ValueEnum};

/// adoc-check - Title-case checker for AsciiDoc section headings
#[derive(Parser)]
#[command(name = "adoc-check")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// AsciiDoc files to check
    #[arg(required = true, value_name = "FILES")]
    pub files: Vec<PathBuf>,

    /// Configuration file path
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Enable verbose output
    #[arg(short, long)]
    pub verbose: bool,

    /// Output format
    #[arg(short, long, value_enum, default_value_t = OutputFormat::Text)]
    pub format: OutputFormat,

    /// Read inputs as document trees already rendered to JSON by the converter
    #[arg(long)]
    pub tree_json: bool,

    /// Java executable used to run the converter
    #[arg(long, value_name = "PATH")]
    pub java: Option<String>,

    /// Converter jar to use instead of the cached download
    #[arg(long, value_name = "PATH")]
    pub jar: Option<PathBuf>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// One line per heading
    Text,
    /// JSON array of heading records
    Json,
}
