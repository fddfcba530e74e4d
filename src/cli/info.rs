use std::path::Path;

use tabled::Table;

use crate::{
    config::Config,
    error, info,
    management::RotationCursor,
    types::{ArtifactSet, DateStamp, WallpaperTableRow},
    utils, warning,
};

/// Prints the wallpaper library with the rotation link's current target.
pub async fn info(config: Config) {
    let dir = config.library_dir();
    let cursor = RotationCursor::new(&dir, config.link_path());

    let library = match cursor.library().await {
        Ok(library) => library,
        Err(e) => error!("Cannot read {}: {}", dir.display(), e),
    };

    if library.is_empty() {
        warning!("No wallpapers in {} yet. Run apodwall to fetch one.", dir.display());
        return;
    }

    let current = cursor.current_index(&library).await;

    let mut rows = Vec::with_capacity(library.len());
    for (index, path) in library.iter().enumerate() {
        rows.push(table_row(path, current == Some(index)).await);
    }

    println!("{}", Table::new(rows));
    info!(
        "{} wallpapers in {}, link at {}",
        library.len(),
        dir.display(),
        cursor.link().display()
    );
}

async fn table_row(path: &Path, is_current: bool) -> WallpaperTableRow {
    let file = path
        .file_name()
        .map(|name| name.to_string_lossy().into_owned())
        .unwrap_or_default();
    let stem = file.trim_end_matches(".jpg");

    let cached_page = match utils::parse_date_stamp(stem) {
        Some(stamp) => page_cached(path, stamp).await,
        None => false,
    };

    let size = async_fs::metadata(path)
        .await
        .map(|m| utils::format_size(m.len()))
        .unwrap_or_else(|_| "?".to_string());

    WallpaperTableRow {
        date: stem.to_string(),
        file,
        size,
        cached_page: if cached_page { "yes" } else { "no" }.to_string(),
        current: if is_current { "*" } else { "" }.to_string(),
    }
}

async fn page_cached(path: &Path, stamp: DateStamp) -> bool {
    let Some(dir) = path.parent() else {
        return false;
    };
    let artifacts = ArtifactSet::new(dir, stamp);
    async_fs::metadata(&artifacts.page).await.is_ok()
}
