//! Download-once provisioning of the converter jar.

use std::path::PathBuf;

use tracing::{debug, info};

use crate::{HashVerifier, JarCache, JarDownloader, ProvisionError};

/// Returns a local path to the jar published at `url`.
///
/// A cached copy is reused as is. Otherwise the jar is downloaded, checked
/// against `expected_sha256` when one is given, and stored in `cache`.
pub async fn ensure_jar(
    cache: &JarCache,
    downloader: &JarDownloader,
    url: &str,
    expected_sha256: Option<&str>,
) -> Result<PathBuf, ProvisionError> {
    if let Some(path) = cache.get(url) {
        debug!("Using cached converter {}", path.display());
        return Ok(path);
    }

    let download = downloader.download(url).await?;
    if let Some(expected) = expected_sha256 {
        HashVerifier::verify(&download.bytes, expected)?;
    }

    let path = cache.store(url, &download.bytes)?;
    info!(
        "Cached converter at {} (sha256 {})",
        path.display(),
        download.computed_hash
    );
    Ok(path)
}
