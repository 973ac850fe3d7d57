use std::path::{Path, PathBuf};
use std::sync::atomic::{AtomicU64, Ordering};

use thiserror::Error;
use tracing::debug;

use crate::metrics::THUMBNAIL_CACHE;
use crate::source::{ShowSource, SourceError};

/// Errors that can occur in the thumbnail cache.
#[derive(Debug, Error)]
pub enum ThumbnailError {
    #[error("Invalid title id: {0:?}")]
    InvalidId(String),

    #[error("Title {0} has no thumbnail")]
    NoThumbnail(String),

    #[error("Thumbnail cache I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error(transparent)]
    Source(#[from] SourceError),
}

/// Suffix counter so concurrent writers never share a temp file.
static TEMP_COUNTER: AtomicU64 = AtomicU64::new(0);

/// File cache storing one image per title id under a single directory.
#[derive(Debug, Clone)]
pub struct ThumbnailCache {
    dir: PathBuf,
}

impl ThumbnailCache {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }

    /// Reject ids that could escape the cache directory.
    pub fn validate_id(id: &str) -> Result<(), ThumbnailError> {
        let invalid = id.is_empty()
            || id == "."
            || id == ".."
            || id.contains(['/', '\\', '\0'])
            || id.starts_with('.');
        if invalid {
            return Err(ThumbnailError::InvalidId(id.to_string()));
        }
        Ok(())
    }

    /// Location of the cached image for `id`.
    pub fn path_for(&self, id: &str) -> Result<PathBuf, ThumbnailError> {
        Self::validate_id(id)?;
        Ok(self.dir.join(id))
    }

    pub async fn contains(&self, id: &str) -> Result<bool, ThumbnailError> {
        let path = self.path_for(id)?;
        Ok(tokio::fs::try_exists(&path).await?)
    }

    /// Cached bytes for `id`, or `None` on a miss.
    pub async fn read(&self, id: &str) -> Result<Option<Vec<u8>>, ThumbnailError> {
        let path = self.path_for(id)?;
        match tokio::fs::read(&path).await {
            Ok(bytes) => {
                THUMBNAIL_CACHE.with_label_values(&["hit"]).inc();
                Ok(Some(bytes))
            }
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                THUMBNAIL_CACHE.with_label_values(&["miss"]).inc();
                Ok(None)
            }
            Err(e) => {
                THUMBNAIL_CACHE.with_label_values(&["error"]).inc();
                Err(e.into())
            }
        }
    }

    /// Write `bytes` for `id`. The file appears atomically via rename.
    pub async fn store(&self, id: &str, bytes: &[u8]) -> Result<PathBuf, ThumbnailError> {
        let path = self.path_for(id)?;
        tokio::fs::create_dir_all(&self.dir).await?;

        let temp_path = self.dir.join(format!(
            ".{}.{}.{}.tmp",
            id,
            std::process::id(),
            TEMP_COUNTER.fetch_add(1, Ordering::Relaxed)
        ));

        if let Err(e) = write_and_rename(&temp_path, &path, bytes).await {
            let _ = tokio::fs::remove_file(&temp_path).await;
            THUMBNAIL_CACHE.with_label_values(&["error"]).inc();
            return Err(e.into());
        }

        THUMBNAIL_CACHE.with_label_values(&["stored"]).inc();
        debug!(id, bytes = bytes.len(), path = %path.display(), "Thumbnail stored");
        Ok(path)
    }

    /// Download the image at `url` through `source` and store it for `id`.
    pub async fn fetch_and_store(
        &self,
        source: &dyn ShowSource,
        id: &str,
        url: &str,
    ) -> Result<Vec<u8>, ThumbnailError> {
        Self::validate_id(id)?;
        if url.trim().is_empty() {
            return Err(ThumbnailError::NoThumbnail(id.to_string()));
        }

        let bytes = source.fetch_bytes(url).await?;
        self.store(id, &bytes).await?;
        Ok(bytes)
    }
}

async fn write_and_rename(temp_path: &Path, path: &Path, bytes: &[u8]) -> std::io::Result<()> {
    tokio::fs::write(temp_path, bytes).await?;
    tokio::fs::rename(temp_path, path).await
}
