use crate::{background, config::Config, error, management::RotationCursor, success};

/// Moves the rotation link to the next wallpaper and applies it.
pub async fn rotate(config: Config, apply: bool) {
    let cursor = RotationCursor::new(config.library_dir(), config.link_path());

    let next = match cursor.rotate().await {
        Ok(next) => next,
        Err(e) => error!("Cannot rotate wallpaper: {}", e),
    };

    success!(
        "{} -> {}",
        cursor.link().display(),
        next.file_name().unwrap_or_default().to_string_lossy()
    );

    if apply {
        background::detect_backend().apply(cursor.link());
    }
}
