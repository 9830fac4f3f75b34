//! Checker configuration.

use std::fs;
use std::path::{Path, PathBuf};
use std::sync::OnceLock;

use jsonc_parser::ParseOptions;
use jsonschema::Validator;
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::{CheckError, ExceptionSet};

// Embed the schema
const SCHEMA_JSON: &str = include_str!("../../../schemas/v1/config.json");
static CONFIG_SCHEMA: OnceLock<Validator> = OnceLock::new();

/// Configuration for a check run.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CheckerConfig {
    /// Extra minor words, on top of the built-in list.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub additional_exceptions: Vec<String>,

    /// Java executable.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub java: Option<String>,

    /// Local converter jar; skips the download when set.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub jar: Option<PathBuf>,

    /// Converter download URL.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub jar_url: Option<String>,

    /// Expected SHA-256 of the downloaded jar.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub jar_sha256: Option<String>,

    /// Directory of the configuration file, for resolving relative paths.
    #[serde(skip)]
    pub base_dir: Option<PathBuf>,
}

impl CheckerConfig {
    /// File names looked up by [`CheckerConfig::discover`], in order.
    pub const CONFIG_FILES: &'static [&'static str] = &[".adoc-check.jsonc", ".adoc-check.json"];

    /// Creates an empty configuration.
    pub fn new() -> Self {
        Self::default()
    }

    /// Finds a configuration file in `dir`.
    pub fn discover(dir: impl AsRef<Path>) -> Option<PathBuf> {
        let dir = dir.as_ref();
        Self::CONFIG_FILES
            .iter()
            .map(|name| dir.join(name))
            .find(|path| path.is_file())
    }

    /// Loads configuration from a file.
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, CheckError> {
        let path = path.as_ref();
        let content = fs::read_to_string(path).map_err(|e| {
            CheckError::config(format!("Failed to read {}: {}", path.display(), e))
        })?;

        let mut config = Self::from_jsonc(&content)?;
        config.base_dir = path.parent().map(Path::to_path_buf);
        debug!("Loaded config from {}", path.display());
        Ok(config)
    }

    /// Parses configuration from JSON with comments, validating it against
    /// the embedded schema.
    pub fn from_jsonc(content: &str) -> Result<Self, CheckError> {
        let value = jsonc_parser::parse_to_serde_value(content, &ParseOptions::default())
            .map_err(|e| CheckError::config(format!("Invalid JSON: {}", e)))?
            .unwrap_or_else(|| serde_json::Value::Object(serde_json::Map::new()));

        let schema = CONFIG_SCHEMA.get_or_init(|| {
            let schema_json: serde_json::Value =
                serde_json::from_str(SCHEMA_JSON).expect("Invalid embedded config schema");
            Validator::new(&schema_json).expect("Invalid config schema compilation")
        });

        if let Err(e) = schema.validate(&value) {
            return Err(CheckError::config(format!(
                "Config validation failed: {} at {}",
                e,
                e.instance_path()
            )));
        }

        serde_json::from_value(value)
            .map_err(|e| CheckError::config(format!("Invalid config: {}", e)))
    }

    /// The exception set this configuration asks for.
    pub fn exceptions(&self) -> ExceptionSet {
        if self.additional_exceptions.is_empty() {
            ExceptionSet::default()
        } else {
            ExceptionSet::with_additional(&self.additional_exceptions)
        }
    }

    /// The configured jar, resolved against the config file directory.
    pub fn resolved_jar(&self) -> Option<PathBuf> {
        let jar = self.jar.as_ref()?;
        Some(match &self.base_dir {
            Some(base) if jar.is_relative() => base.join(jar),
            _ => jar.clone(),
        })
    }
}
