//! HTTP downloader for the converter jar.

use std::time::Duration;

use thiserror::Error;
use tracing::info;

use crate::hash::HashVerifier;

/// Default maximum size of a downloaded jar (100 MB).
pub const DEFAULT_MAX_SIZE: u64 = 100 * 1024 * 1024;

/// Default request timeout (120 seconds).
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(120);

/// Error type for jar download operations.
#[derive(Debug, Error)]
pub enum DownloadError {
    /// Network request failed.
    #[error("Network error: {0}")]
    NetworkError(#[from] reqwest::Error),

    /// Resource not found.
    #[error("Not found: {0}")]
    NotFound(String),

    /// Server answered with an error status.
    #[error("HTTP error {status} for {url}")]
    HttpError {
        status: reqwest::StatusCode,
        url: String,
    },

    /// File size exceeds the maximum allowed.
    #[error("File too large: {size} bytes exceeds maximum of {max} bytes")]
    TooLarge { size: u64, max: u64 },
}

/// Result of a successful download.
#[derive(Debug)]
pub struct DownloadResult {
    /// Downloaded bytes.
    pub bytes: Vec<u8>,
    /// SHA-256 of the downloaded bytes (lowercase hex).
    pub computed_hash: String,
}

/// Downloads release artifacts over HTTP(S).
pub struct JarDownloader {
    client: reqwest::Client,
    max_size: u64,
}

impl JarDownloader {
    /// Create a downloader with default settings.
    pub fn new() -> Result<Self, DownloadError> {
        Self::with_options(DEFAULT_MAX_SIZE, DEFAULT_TIMEOUT)
    }

    /// Create a downloader with a custom size limit and timeout.
    pub fn with_options(max_size: u64, timeout: Duration) -> Result<Self, DownloadError> {
        let client = reqwest::Client::builder()
            .timeout(timeout)
            .user_agent(concat!("adoc-check/", env!("CARGO_PKG_VERSION")))
            .build()?;
        Ok(Self { client, max_size })
    }

    /// Download `url`, enforcing the size limit.
    pub async fn download(&self, url: &str) -> Result<DownloadResult, DownloadError> {
        info!("Downloading {}", url);

        let response = self.client.get(url).send().await?;
        let status = response.status();
        if status == reqwest::StatusCode::NOT_FOUND {
            return Err(DownloadError::NotFound(url.to_string()));
        }
        if !status.is_success() {
            return Err(DownloadError::HttpError {
                status,
                url: url.to_string(),
            });
        }

        if let Some(size) = response.content_length()
            && size > self.max_size
        {
            return Err(DownloadError::TooLarge {
                size,
                max: self.max_size,
            });
        }

        let bytes = response.bytes().await?.to_vec();
        if bytes.len() as u64 > self.max_size {
            return Err(DownloadError::TooLarge {
                size: bytes.len() as u64,
                max: self.max_size,
            });
        }

        let computed_hash = HashVerifier::compute(&bytes);
        Ok(DownloadResult {
            bytes,
            computed_hash,
        })
    }
}
