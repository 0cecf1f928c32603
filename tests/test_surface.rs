// SPDX-License-Identifier: GPL-3.0-or-later
use std::env;
use std::fs;

use vellum::{
    BaseSurface, Content, Context, Format, Handle, ImageSurface, RecordingSurface, Rectangle,
    Surface, SurfaceType,
};

#[test]
fn test_image_surface_properties() {
    let surface = ImageSurface::create(Format::ARgb32, 47, 21).unwrap();
    assert_eq!(surface.surface_type(), SurfaceType::Image);
    assert_eq!(surface.content(), Content::ColorAlpha);
    assert_eq!(surface.format(), Format::ARgb32);
    assert_eq!(surface.width(), 47);
    assert_eq!(surface.height(), 21);
    assert_eq!(
        surface.stride(),
        ImageSurface::stride_for_width(Format::ARgb32, 47).unwrap()
    );
}

#[test]
fn test_handle_casts_share_the_count() {
    let image = ImageSurface::create(Format::A8, 8, 8).unwrap();
    assert_eq!(image.use_count(), 1);

    let base: Handle<Surface> = image.cast_static();
    assert_eq!(image.use_count(), 2);
    assert_eq!(base.surface_type(), SurfaceType::Image);

    let back: Handle<ImageSurface> = base.cast_dynamic();
    assert!(back.is_some());
    assert_eq!(image.use_count(), 3);

    let recording: Handle<RecordingSurface> = base.cast_dynamic();
    assert!(recording.is_none());
    assert_eq!(image.use_count(), 3);
}

#[test]
fn test_create_similar() {
    let surface = ImageSurface::create(Format::ARgb32, 16, 16).unwrap();
    let similar = surface.create_similar(Content::Alpha, 4, 4).unwrap();
    assert_eq!(similar.content(), Content::Alpha);
}

#[test]
fn test_device_offset_roundtrip() {
    let surface = ImageSurface::create(Format::ARgb32, 16, 16).unwrap();
    surface.set_device_offset(3.0, 7.0).unwrap();
    assert_eq!(surface.device_offset(), (3.0, 7.0));
}

#[test]
fn test_recording_surface_tracks_ink() {
    let bounds = Rectangle {
        x: 0.0,
        y: 0.0,
        width: 100.0,
        height: 100.0,
    };
    let recording = RecordingSurface::create(Content::ColorAlpha, Some(&bounds)).unwrap();
    assert_eq!(recording.surface_type(), SurfaceType::Recording);
    assert_eq!(recording.extents().unwrap().width, 100.0);

    let cr = Context::create(&*recording).unwrap();
    cr.set_source_rgb(0.0, 0.0, 1.0).unwrap();
    cr.rectangle(10.0, 20.0, 30.0, 40.0).unwrap();
    cr.fill().unwrap();

    let (x, y, width, height) = recording.ink_extents();
    assert_eq!((x, y, width, height), (10.0, 20.0, 30.0, 40.0));
}

#[test]
fn test_unbounded_recording_surface_has_no_extents() {
    let recording = RecordingSurface::create(Content::ColorAlpha, None).unwrap();
    assert!(recording.extents().is_none());
}

#[test]
fn test_write_to_png() {
    let surface = ImageSurface::create(Format::ARgb32, 12, 12).unwrap();
    let cr = Context::create(&*surface).unwrap();
    cr.set_source_rgb(0.2, 0.4, 0.6).unwrap();
    cr.paint().unwrap();

    let path = env::temp_dir().join("vellum-test-write.png");
    let path = path.to_str().unwrap();
    surface.write_to_png(path).unwrap();
    let metadata = fs::metadata(path).unwrap();
    assert!(metadata.len() > 0);
    fs::remove_file(path).unwrap();
}
