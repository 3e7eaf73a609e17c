//! Integration tests for icon set generation.

use std::fs;
use std::path::Path;

use image::{Rgba, RgbaImage};

use iconforge::{
    Error, IconParams, generate_icon_set, generate_icon_to_buffer, generate_icon_to_path,
    icon_file_name, manifest_entries, OutputFormat,
};

/// Write a gradient-filled RGBA source image, so resized outputs are not
/// trivially uniform.
fn write_gradient_source(path: &Path, edge: u32) {
    let mut img = RgbaImage::new(edge, edge);
    for (x, y, pixel) in img.enumerate_pixels_mut() {
        let blue = (255 * x / edge) as u8;
        let green = (255 * y / edge) as u8;
        *pixel = Rgba([50, green, blue, 255]);
    }
    img.save(path).unwrap();
}

#[test]
fn icon_set_written_at_exact_sizes() {
    let dir = tempfile::tempdir().unwrap();
    let source = dir.path().join("icon.png");
    write_gradient_source(&source, 256);
    let out_dir = dir.path().join("icons");

    let report = generate_icon_set(&source, &out_dir, &IconParams::default(), true).unwrap();
    assert_eq!(report.written, 3);
    assert_eq!(report.errors, 0);

    for size in [16u32, 48, 128] {
        let path = out_dir.join(format!("icon{size}.png"));
        assert!(path.exists(), "missing {path:?}");
        let img = image::open(&path).unwrap().into_rgba8();
        assert_eq!(img.dimensions(), (size, size));
    }
}

#[test]
fn output_directory_is_created_if_absent() {
    let dir = tempfile::tempdir().unwrap();
    let source = dir.path().join("icon.png");
    write_gradient_source(&source, 64);
    let out_dir = dir.path().join("nested").join("icons");
    assert!(!out_dir.exists());

    let report = generate_icon_set(&source, &out_dir, &IconParams::default(), true).unwrap();
    assert!(out_dir.is_dir());
    assert_eq!(report.written, 3);
}

#[test]
fn missing_source_is_counted_per_size_without_aborting() {
    let dir = tempfile::tempdir().unwrap();
    let out_dir = dir.path().join("icons");

    let report = generate_icon_set(
        &dir.path().join("absent.png"),
        &out_dir,
        &IconParams::default(),
        true,
    )
    .unwrap();

    assert_eq!(report.written, 0);
    assert_eq!(report.errors, 3);
    assert!(report.outputs.is_empty());
    // The directory is still created; it just holds no icons.
    assert!(out_dir.is_dir());
    assert_eq!(fs::read_dir(&out_dir).unwrap().count(), 0);
}

#[test]
fn first_failure_is_returned_when_not_continuing() {
    let dir = tempfile::tempdir().unwrap();
    let out_dir = dir.path().join("icons");

    let err = generate_icon_set(
        &dir.path().join("absent.png"),
        &out_dir,
        &IconParams::default(),
        false,
    )
    .unwrap_err();

    assert!(matches!(err, Error::ConversionFailed { size: 16, .. }));
}

#[test]
fn rerun_overwrites_previous_outputs() {
    let dir = tempfile::tempdir().unwrap();
    let source = dir.path().join("icon.png");
    write_gradient_source(&source, 200);
    let out_dir = dir.path().join("icons");
    let params = IconParams::default();

    generate_icon_set(&source, &out_dir, &params, true).unwrap();
    let first = fs::read(out_dir.join("icon48.png")).unwrap();

    generate_icon_set(&source, &out_dir, &params, true).unwrap();
    let second = fs::read(out_dir.join("icon48.png")).unwrap();

    assert_eq!(first, second);
}

#[test]
fn small_source_is_upscaled_to_target() {
    let dir = tempfile::tempdir().unwrap();
    let source = dir.path().join("icon.png");
    write_gradient_source(&source, 8);
    let out_dir = dir.path().join("icons");

    generate_icon_set(&source, &out_dir, &IconParams::default(), true).unwrap();

    let img = image::open(out_dir.join("icon128.png")).unwrap().into_rgba8();
    assert_eq!(img.dimensions(), (128, 128));
}

#[test]
fn single_icon_to_path_produces_square_png() {
    let dir = tempfile::tempdir().unwrap();
    let source = dir.path().join("icon.png");
    write_gradient_source(&source, 96);
    let output = dir.path().join("icon16.png");

    generate_icon_to_path(&source, &output, 16, &IconParams::default()).unwrap();

    let img = image::open(&output).unwrap().into_rgba8();
    assert_eq!(img.dimensions(), (16, 16));
}

#[test]
fn buffer_variant_returns_rgba_of_requested_size() {
    let dir = tempfile::tempdir().unwrap();
    let source = dir.path().join("icon.png");
    write_gradient_source(&source, 96);

    let icon = generate_icon_to_buffer(&source, 48, &IconParams::default()).unwrap();
    assert_eq!((icon.width, icon.height), (48, 48));
    assert_eq!(icon.rgba.len(), 48 * 48 * 4);
}

#[test]
fn zero_size_is_rejected() {
    let dir = tempfile::tempdir().unwrap();
    let source = dir.path().join("icon.png");
    write_gradient_source(&source, 32);

    let err = generate_icon_to_buffer(&source, 0, &IconParams::default()).unwrap_err();
    assert!(matches!(err, Error::ZeroSize { size: 0 }));
}

#[test]
fn manifest_entries_cover_written_sizes() {
    let dir = tempfile::tempdir().unwrap();
    let source = dir.path().join("icon.png");
    write_gradient_source(&source, 256);
    let out_dir = dir.path().join("icons");

    let report = generate_icon_set(&source, &out_dir, &IconParams::default(), true).unwrap();
    let entries = manifest_entries(&report);

    assert_eq!(entries.len(), 3);
    for size in [16u32, 48, 128] {
        let path = &entries[&size.to_string()];
        assert!(path.ends_with(&icon_file_name(size, OutputFormat::Png)));
    }
}
