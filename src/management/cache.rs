use std::{io::ErrorKind, path::PathBuf};

use crate::types::{ApodError, ArtifactSet, DateStamp};

/// Date-keyed store for page snapshots and the transient raw image.
///
/// The composited wallpaper is the only "already fetched" signal. Page
/// snapshots are kept indefinitely; the raw image lives only until the
/// wallpaper has been composed.
pub struct CacheStore {
    dir: PathBuf,
}

impl CacheStore {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    pub fn artifacts(&self, stamp: DateStamp) -> ArtifactSet {
        ArtifactSet::new(&self.dir, stamp)
    }

    /// Checks whether the stamp still needs work and prepares the directory.
    ///
    /// # Errors
    ///
    /// [`ApodError::AlreadyFetched`] when the wallpaper exists and `force`
    /// is not set. Nothing is touched on disk in that case.
    pub async fn prepare(&self, stamp: DateStamp, force: bool) -> Result<ArtifactSet, ApodError> {
        let artifacts = self.artifacts(stamp);

        if async_fs::metadata(&artifacts.wallpaper).await.is_ok() {
            if !force {
                return Err(ApodError::AlreadyFetched(artifacts.wallpaper));
            }
            crate::info!("    already exists, but force passed, continuing");
        }

        async_fs::create_dir_all(&self.dir).await?;
        Ok(artifacts)
    }

    /// Returns the cached page snapshot, or `None` on a cache miss.
    pub async fn load_page(&self, artifacts: &ArtifactSet) -> Result<Option<String>, ApodError> {
        match async_fs::read_to_string(&artifacts.page).await {
            Ok(html) => Ok(Some(html)),
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(None),
            Err(e) => Err(ApodError::IoError(e)),
        }
    }

    pub async fn store_page(&self, artifacts: &ArtifactSet, html: &str) -> Result<(), ApodError> {
        async_fs::write(&artifacts.page, html)
            .await
            .map_err(ApodError::IoError)
    }

    /// Removes the transient raw image; a missing file is fine.
    pub async fn discard_raw_image(&self, artifacts: &ArtifactSet) -> Result<(), ApodError> {
        match async_fs::remove_file(&artifacts.raw_image).await {
            Ok(()) => Ok(()),
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(()),
            Err(e) => Err(ApodError::IoError(e)),
        }
    }
}
