//! Thumbnail entry point: any JPEG/PNG becomes a 480x270 PNG.

mod common;

use common::{fixtures, fixtures::mimes, TestApp};
use pretty_assertions::assert_eq;

#[test]
fn test_thumbnail_from_jpeg() {
    let app = TestApp::new();
    let out = app
        .thumbnail(mimes::JPEG, &fixtures::gradient_jpeg(1920, 1080))
        .unwrap();
    let png = common::assert_png(&out);
    assert_eq!(png.dimensions(), (480, 270));
}

#[test]
fn test_thumbnail_from_png() {
    let app = TestApp::new();
    let out = app
        .thumbnail(mimes::PNG, &fixtures::gradient_png(300, 200))
        .unwrap();
    let png = common::assert_png(&out);
    assert_eq!(png.dimensions(), (480, 270));
}

#[test]
fn test_thumbnail_stretches_other_aspect_ratios() {
    let app = TestApp::new();
    for (w, h) in [(1, 1), (10, 1000), (1000, 10), (481, 271)] {
        let out = app.thumbnail(mimes::PNG, &fixtures::gradient_png(w, h)).unwrap();
        assert_eq!(common::assert_png(&out).dimensions(), (480, 270), "{w}x{h}");
    }
}

#[test]
fn test_thumbnail_preserves_alpha() {
    let app = TestApp::new();
    let upload = fixtures::png_bytes(&fixtures::solid_rgba(64, 36, [10, 200, 30, 0]));
    let png = common::assert_png(&app.thumbnail(mimes::PNG, &upload).unwrap());
    assert!(png.pixels().all(|p| p[3] == 0));
}

#[test]
fn test_thumbnail_mime_is_case_insensitive() {
    let app = TestApp::new();
    let out = app
        .thumbnail("IMAGE/JPEG", &fixtures::gradient_jpeg(64, 64))
        .unwrap();
    common::assert_png(&out);
}
