use std::{
    fs,
    os::unix::fs::symlink,
    path::{Path, PathBuf},
};

use apodwall::management::{RotationCursor, next_index};
use apodwall::types::ApodError;
use tempfile::TempDir;

const LINK: &str = "current.jpg";

// Creates a library with the given wallpaper names plus the usual side files
fn library(names: &[&str]) -> (TempDir, PathBuf) {
    let tmp = tempfile::tempdir().unwrap();
    let dir = fs::canonicalize(tmp.path()).unwrap();
    for name in names {
        fs::write(dir.join(name), name.as_bytes()).unwrap();
        fs::write(dir.join(format!("{name}.html")), "<html></html>").unwrap();
    }
    (tmp, dir)
}

fn link_target(dir: &Path) -> PathBuf {
    fs::read_link(dir.join(LINK)).unwrap()
}

#[test]
fn test_next_index_wraps() {
    assert_eq!(next_index(None, 3), 0);
    assert_eq!(next_index(Some(0), 3), 1);
    assert_eq!(next_index(Some(2), 3), 0);
    assert_eq!(next_index(Some(0), 1), 0);
}

#[tokio::test]
async fn test_library_is_sorted_and_filtered() {
    let (_tmp, dir) = library(&["250103.jpg", "241231.jpg", "250101.jpg"]);
    fs::write(dir.join("250104.jpg.orig"), "raw").unwrap();
    fs::write(dir.join("notes.txt"), "x").unwrap();
    fs::create_dir(dir.join("nested.jpg")).unwrap();
    symlink(dir.join("250101.jpg"), dir.join(LINK)).unwrap();

    let cursor = RotationCursor::new(&dir, dir.join(LINK));
    let names: Vec<String> = cursor
        .library()
        .await
        .unwrap()
        .iter()
        .map(|p| p.file_name().unwrap().to_string_lossy().into_owned())
        .collect();

    assert_eq!(names, vec!["241231.jpg", "250101.jpg", "250103.jpg"]);
}

#[tokio::test]
async fn test_rotate_without_link_selects_first() {
    let (_tmp, dir) = library(&["250102.jpg", "250101.jpg"]);
    let cursor = RotationCursor::new(&dir, dir.join(LINK));

    let next = cursor.rotate().await.unwrap();

    assert_eq!(next, dir.join("250101.jpg"));
    assert_eq!(link_target(&dir), dir.join("250101.jpg"));
}

#[tokio::test]
async fn test_rotate_advances_from_current() {
    let (_tmp, dir) = library(&["250101.jpg", "250102.jpg", "250103.jpg"]);
    symlink(dir.join("250102.jpg"), dir.join(LINK)).unwrap();
    let cursor = RotationCursor::new(&dir, dir.join(LINK));

    let next = cursor.rotate().await.unwrap();

    assert_eq!(next, dir.join("250103.jpg"));
    assert_eq!(link_target(&dir), dir.join("250103.jpg"));
}

#[tokio::test]
async fn test_rotate_wraps_from_last_to_first() {
    let (_tmp, dir) = library(&["250101.jpg", "250102.jpg"]);
    symlink(dir.join("250102.jpg"), dir.join(LINK)).unwrap();
    let cursor = RotationCursor::new(&dir, dir.join(LINK));

    assert_eq!(cursor.rotate().await.unwrap(), dir.join("250101.jpg"));
}

#[tokio::test]
async fn test_full_cycle_returns_to_start() {
    let names = ["250101.jpg", "250102.jpg", "250103.jpg", "250104.jpg"];
    let (_tmp, dir) = library(&names);
    symlink(dir.join("250103.jpg"), dir.join(LINK)).unwrap();
    let cursor = RotationCursor::new(&dir, dir.join(LINK));

    let mut seen = Vec::new();
    for _ in 0..names.len() {
        seen.push(cursor.rotate().await.unwrap());
    }

    assert_eq!(link_target(&dir), dir.join("250103.jpg"));
    assert_eq!(
        seen,
        vec![
            dir.join("250104.jpg"),
            dir.join("250101.jpg"),
            dir.join("250102.jpg"),
            dir.join("250103.jpg"),
        ]
    );
}

#[tokio::test]
async fn test_broken_link_selects_first() {
    let (_tmp, dir) = library(&["250101.jpg", "250102.jpg"]);
    symlink(dir.join("gone.jpg"), dir.join(LINK)).unwrap();
    let cursor = RotationCursor::new(&dir, dir.join(LINK));

    assert_eq!(cursor.rotate().await.unwrap(), dir.join("250101.jpg"));
    assert_eq!(link_target(&dir), dir.join("250101.jpg"));
}

#[tokio::test]
async fn test_link_outside_library_selects_first() {
    let (_tmp, dir) = library(&["250101.jpg", "250102.jpg"]);
    let (_other_tmp, other) = library(&["250102.jpg"]);
    symlink(other.join("250102.jpg"), dir.join(LINK)).unwrap();
    let cursor = RotationCursor::new(&dir, dir.join(LINK));

    assert_eq!(cursor.rotate().await.unwrap(), dir.join("250101.jpg"));
}

#[tokio::test]
async fn test_empty_library_leaves_link_alone() {
    let (_tmp, dir) = library(&[]);
    fs::write(dir.join("250101.jpg.html"), "<html></html>").unwrap();
    symlink(dir.join("elsewhere.jpg"), dir.join(LINK)).unwrap();
    let cursor = RotationCursor::new(&dir, dir.join(LINK));

    match cursor.rotate().await {
        Err(ApodError::EmptyLibrary(path)) => assert_eq!(path, dir),
        other => panic!("expected EmptyLibrary, got {:?}", other),
    }
    assert_eq!(link_target(&dir), dir.join("elsewhere.jpg"));
}

#[tokio::test]
async fn test_missing_directory_is_empty_library() {
    let tmp = tempfile::tempdir().unwrap();
    let dir = tmp.path().join("never-created");
    let cursor = RotationCursor::new(&dir, dir.join(LINK));

    assert!(matches!(
        cursor.rotate().await,
        Err(ApodError::EmptyLibrary(_))
    ));
    assert!(fs::symlink_metadata(dir.join(LINK)).is_err());
}

#[tokio::test]
async fn test_current_index_follows_link() {
    let (_tmp, dir) = library(&["250101.jpg", "250102.jpg"]);
    let cursor = RotationCursor::new(&dir, dir.join(LINK));
    let lib = cursor.library().await.unwrap();

    assert_eq!(cursor.current_index(&lib).await, None);

    symlink(dir.join("250102.jpg"), dir.join(LINK)).unwrap();
    assert_eq!(cursor.current_index(&lib).await, Some(1));
}
