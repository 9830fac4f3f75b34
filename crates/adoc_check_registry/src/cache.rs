use std::fs;
use std::path::{Component, Path, PathBuf};

use thiserror::Error;
use tracing::debug;

#[derive(Debug, Error)]
pub enum CacheError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("Cache directory resolution failed")]
    DirResolutionFailed,
    #[error("Cannot derive a cache file name from URL: {0}")]
    InvalidArtifactName(String),
}

/// On-disk cache of converter jars, keyed by the file name in their URL.
pub struct JarCache {
    cache_dir: PathBuf,
}

impl JarCache {
    /// Create a cache in the user cache directory (`<cache>/adoc_check`).
    pub fn new() -> Result<Self, CacheError> {
        let base_dir = dirs::cache_dir().ok_or(CacheError::DirResolutionFailed)?;
        Ok(Self {
            cache_dir: base_dir.join("adoc_check"),
        })
    }

    /// Create a cache rooted at a specific directory.
    pub fn with_dir(path: impl Into<PathBuf>) -> Self {
        Self {
            cache_dir: path.into(),
        }
    }

    /// Where the artifact downloaded from `url` lives in the cache.
    pub fn jar_path(&self, url: &str) -> Result<PathBuf, CacheError> {
        let name = artifact_name(url)
            .ok_or_else(|| CacheError::InvalidArtifactName(url.to_string()))?;
        Ok(self.cache_dir.join(name))
    }

    /// Get the cached jar for `url`, if present.
    pub fn get(&self, url: &str) -> Option<PathBuf> {
        let path = self.jar_path(url).ok()?;
        path.is_file().then_some(path)
    }

    /// Store a downloaded jar.
    ///
    /// Bytes go to a `.part` sibling first and are renamed into place, so a
    /// cached jar is always complete.
    pub fn store(&self, url: &str, bytes: &[u8]) -> Result<PathBuf, CacheError> {
        let path = self.jar_path(url)?;
        fs::create_dir_all(&self.cache_dir)?;

        let mut partial = path.clone().into_os_string();
        partial.push(".part");
        let partial = PathBuf::from(partial);

        if let Err(e) = fs::write(&partial, bytes).and_then(|_| fs::rename(&partial, &path)) {
            let _ = fs::remove_file(&partial);
            return Err(e.into());
        }

        debug!("Cached {} bytes at {}", bytes.len(), path.display());
        Ok(path)
    }
}

/// Last path segment of `url`, without query or fragment, if it is a plain
/// file name.
fn artifact_name(url: &str) -> Option<&str> {
    let without_suffix = url.split(['?', '#']).next()?;
    let name = without_suffix.rsplit('/').next()?;

    let mut components = Path::new(name).components();
    match (components.next(), components.next()) {
        (Some(Component::Normal(c)), None) if c == name => Some(name),
        _ => None,
    }
}
