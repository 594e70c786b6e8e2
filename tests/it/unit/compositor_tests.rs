//! Unit tests for canvas loading and compositing.

use corrmark::CorrespondenceError;
use corrmark::canvas::{CanvasCompositor, ImageLoader};
use corrmark::types::Side;
use image::{Rgb, RgbImage};
use std::path::{Path, PathBuf};
use tempfile::TempDir;

fn write_image(dir: &TempDir, name: &str, width: u32, height: u32, color: [u8; 3]) -> PathBuf {
    let path = dir.path().join(name);
    RgbImage::from_pixel(width, height, Rgb(color))
        .save(&path)
        .expect("write test image");
    path
}

#[test]
fn test_load_pair_builds_composite() {
    let dir = TempDir::new().unwrap();
    let left = write_image(&dir, "left.png", 8, 6, [200, 0, 0]);
    let right = write_image(&dir, "right.png", 5, 9, [0, 0, 200]);

    let composite = CanvasCompositor::load_pair(&left, &right).unwrap();

    assert_eq!(composite.width(), 13);
    assert_eq!(composite.height(), 6);
    assert_eq!(composite.split.side_of(7), Side::Left);
    assert_eq!(composite.split.side_of(8), Side::Right);
    assert_eq!(composite.surface.get_pixel(0, 0).0, [200, 0, 0]);
    assert_eq!(composite.surface.get_pixel(12, 5).0, [0, 0, 200]);
}

#[test]
fn test_missing_right_image_fails() {
    let dir = TempDir::new().unwrap();
    let left = write_image(&dir, "left.png", 4, 4, [1, 2, 3]);
    let right = dir.path().join("missing.png");

    let err = CanvasCompositor::load_pair(&left, &right).unwrap_err();

    match err {
        CorrespondenceError::ImageLoad { path, .. } => assert_eq!(path, right),
        other => panic!("unexpected error: {other:?}"),
    }
}

#[test]
fn test_missing_left_image_fails() {
    let dir = TempDir::new().unwrap();
    let right = write_image(&dir, "right.png", 4, 4, [1, 2, 3]);
    let left = dir.path().join("missing.png");

    let err = CanvasCompositor::load_pair(&left, &right).unwrap_err();

    assert!(matches!(err, CorrespondenceError::ImageLoad { ref path, .. } if *path == left));
}

#[test]
fn test_both_missing_reports_left() {
    let err = CanvasCompositor::load_pair(Path::new("/nope/l.png"), Path::new("/nope/r.png"))
        .unwrap_err();

    assert!(matches!(err, CorrespondenceError::ImageLoad { ref path, .. } if path == Path::new("/nope/l.png")));
}

#[test]
fn test_undecodable_file_is_load_error() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("garbage.png");
    std::fs::write(&path, b"not an image").unwrap();

    let err = ImageLoader::load(&path).unwrap_err();

    assert!(matches!(err, CorrespondenceError::ImageLoad { .. }));
    assert!(err.to_string().contains("garbage.png"));
}
