//! Error type for converter provisioning.

use thiserror::Error;

use crate::{CacheError, DownloadError, HashError};

/// Errors raised while making the converter jar available locally.
#[derive(Debug, Error)]
pub enum ProvisionError {
    /// The cache directory could not be used.
    #[error("Cache error: {0}")]
    Cache(#[from] CacheError),

    /// The jar could not be downloaded.
    #[error("Download error: {0}")]
    Download(#[from] DownloadError),

    /// The downloaded jar does not match the pinned digest.
    #[error("Integrity error: {0}")]
    Integrity(#[from] HashError),
}
