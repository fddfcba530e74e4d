use std::{
    io::ErrorKind,
    path::{Path, PathBuf},
};

use futures_lite::StreamExt;

use crate::types::ApodError;

const WALLPAPER_EXTENSION: &str = "jpg";

/// Cyclic pointer into the wallpaper library.
///
/// The symbolic link is the only persisted state: its target is the current
/// wallpaper, and external viewers read the same link.
pub struct RotationCursor {
    dir: PathBuf,
    link: PathBuf,
}

impl RotationCursor {
    pub fn new(dir: impl Into<PathBuf>, link: impl Into<PathBuf>) -> Self {
        Self {
            dir: dir.into(),
            link: link.into(),
        }
    }

    pub fn link(&self) -> &Path {
        &self.link
    }

    /// All wallpapers in the directory, link excluded, sorted by file name.
    ///
    /// Paths are rooted at the canonical directory. A missing directory is an
    /// empty library.
    pub async fn library(&self) -> Result<Vec<PathBuf>, ApodError> {
        let dir = match async_fs::canonicalize(&self.dir).await {
            Ok(dir) => dir,
            Err(e) if e.kind() == ErrorKind::NotFound => return Ok(Vec::new()),
            Err(e) => return Err(ApodError::IoError(e)),
        };

        let link_name = self.link.file_name();
        let link_in_dir = match self.link.parent() {
            Some(parent) => same_dir(parent, &dir).await,
            None => false,
        };

        let mut wallpapers = Vec::new();
        let mut entries = async_fs::read_dir(&dir).await?;
        while let Some(entry) = entries.try_next().await? {
            let path = entry.path();
            if path.extension().is_none_or(|ext| ext != WALLPAPER_EXTENSION) {
                continue;
            }
            if link_in_dir && path.file_name() == link_name {
                continue;
            }
            if async_fs::metadata(&path).await.is_ok_and(|m| m.is_file()) {
                wallpapers.push(dir.join(entry.file_name()));
            }
        }

        wallpapers.sort_by(|a, b| a.file_name().cmp(&b.file_name()));
        Ok(wallpapers)
    }

    /// Position of the link target within `library`, if the link resolves
    /// to one of its members.
    pub async fn current_index(&self, library: &[PathBuf]) -> Option<usize> {
        let target = async_fs::canonicalize(&self.link).await.ok()?;
        library.iter().position(|path| *path == target)
    }

    /// Advances the link to the next wallpaper and returns it.
    ///
    /// # Errors
    ///
    /// [`ApodError::EmptyLibrary`] when there is nothing to rotate to; the
    /// link is left untouched.
    pub async fn rotate(&self) -> Result<PathBuf, ApodError> {
        let library = self.library().await?;
        if library.is_empty() {
            return Err(ApodError::EmptyLibrary(self.dir.clone()));
        }

        let current = self.current_index(&library).await;
        let next = library[next_index(current, library.len())].clone();

        self.retarget(&next).await?;
        Ok(next)
    }

    /// Points the link at `target` (remove, then recreate).
    ///
    /// A crash between the two steps leaves no link, which the next rotation
    /// treats as "start from the first wallpaper".
    pub async fn retarget(&self, target: &Path) -> Result<(), ApodError> {
        match async_fs::remove_file(&self.link).await {
            Ok(()) => {}
            Err(e) if e.kind() == ErrorKind::NotFound => {}
            Err(e) => return Err(ApodError::IoError(e)),
        }

        async_fs::unix::symlink(target, &self.link).await?;
        Ok(())
    }
}

/// Cyclic successor; no current position starts at the first element.
pub fn next_index(current: Option<usize>, len: usize) -> usize {
    match current {
        Some(index) => (index + 1) % len,
        None => 0,
    }
}

async fn same_dir(a: &Path, canonical_b: &Path) -> bool {
    let a = if a.as_os_str().is_empty() {
        Path::new(".")
    } else {
        a
    };

    async_fs::canonicalize(a)
        .await
        .is_ok_and(|a| a == canonical_b)
}
