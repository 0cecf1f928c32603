// SPDX-License-Identifier: GPL-3.0-or-later
use vellum::{
    BasePattern, BaseSurface, Context, Format, Handle, ImageSurface, LineCap, PatternType,
    SolidPattern, Status, SurfaceType,
};

fn canvas() -> (Handle<ImageSurface>, Handle<Context>) {
    let surface = ImageSurface::create(Format::ARgb32, 64, 64).unwrap();
    let cr = Context::create(&*surface).unwrap();
    (surface, cr)
}

#[test]
fn test_create_and_state() {
    let (_surface, cr) = canvas();
    cr.status().unwrap();
    cr.save().unwrap();
    cr.set_line_width(4.0).unwrap();
    assert_eq!(cr.line_width(), 4.0);
    cr.restore().unwrap();
    assert_eq!(cr.line_width(), 2.0);
}

#[test]
fn test_unbalanced_restore_is_reported() {
    let (_surface, cr) = canvas();
    let err = cr.restore().unwrap_err();
    assert_eq!(err.status(), Status::InvalidRestore);
}

#[test]
fn test_invalid_dash_is_reported() {
    let (_surface, cr) = canvas();
    let err = cr.set_dash(&[-1.0], 0.0).unwrap_err();
    assert_eq!(err.status(), Status::InvalidDash);
}

#[test]
fn test_dash_roundtrip() {
    let (_surface, cr) = canvas();
    cr.set_dash(&[2.0, 1.0], 0.5).unwrap();
    let (dashes, offset) = cr.dash();
    assert_eq!(dashes, vec![2.0, 1.0]);
    assert_eq!(offset, 0.5);
    cr.unset_dash().unwrap();
    assert!(cr.dash().0.is_empty());
}

#[test]
fn test_line_cap_roundtrip() {
    let (_surface, cr) = canvas();
    assert_eq!(cr.line_cap(), LineCap::Butt);
    cr.set_line_cap(LineCap::Round).unwrap();
    assert_eq!(cr.line_cap(), LineCap::Round);
}

#[test]
fn test_source_is_shared_back_as_solid_pattern() {
    let (_surface, cr) = canvas();
    cr.set_source_rgb(0.25, 0.5, 0.75).unwrap();
    let source = cr.source().unwrap();
    assert_eq!(source.pattern_type(), PatternType::Solid);

    let solid: Handle<SolidPattern> = source.cast_dynamic();
    assert!(solid.is_some());
    let (red, green, blue, alpha) = solid.rgba().unwrap();
    assert!((red - 0.25).abs() < 1e-9);
    assert!((green - 0.5).abs() < 1e-9);
    assert!((blue - 0.75).abs() < 1e-9);
    assert!((alpha - 1.0).abs() < 1e-9);
}

#[test]
fn test_paint_fills_the_target() {
    let (surface, cr) = canvas();
    cr.set_source_rgb(1.0, 0.0, 0.0).unwrap();
    cr.paint().unwrap();
    surface.flush().unwrap();
    let pixel = unsafe { *surface.data().cast::<u32>() };
    assert_eq!(pixel, 0xffff0000);
}

#[test]
fn test_path_construction_and_queries() {
    let (_surface, cr) = canvas();
    assert!(!cr.has_current_point());
    cr.move_to(10.0, 20.0).unwrap();
    cr.line_to(30.0, 20.0).unwrap();
    let (x, y) = cr.current_point().unwrap();
    assert_eq!((x, y), (30.0, 20.0));

    let path = cr.copy_path().unwrap();
    path.status().unwrap();
    assert!(!path.is_empty());

    cr.new_path().unwrap();
    assert!(cr.copy_path().unwrap().is_empty());
    cr.append_path(&path).unwrap();
    assert_eq!(cr.current_point().unwrap(), (30.0, 20.0));
}

#[test]
fn test_fill_hit_testing() {
    let (_surface, cr) = canvas();
    cr.rectangle(8.0, 8.0, 16.0, 16.0).unwrap();
    assert!(cr.in_fill(16.0, 16.0));
    assert!(!cr.in_fill(40.0, 40.0));
    let (x1, y1, x2, y2) = cr.path_extents().unwrap();
    assert_eq!((x1, y1, x2, y2), (8.0, 8.0, 24.0, 24.0));
}

#[test]
fn test_clip_restricts_extents() {
    let (_surface, cr) = canvas();
    cr.rectangle(4.0, 4.0, 8.0, 8.0).unwrap();
    cr.clip().unwrap();
    let (x1, y1, x2, y2) = cr.clip_extents().unwrap();
    assert_eq!((x1, y1, x2, y2), (4.0, 4.0, 12.0, 12.0));
    assert!(cr.in_clip(6.0, 6.0));
    assert!(!cr.in_clip(20.0, 20.0));
    cr.reset_clip().unwrap();
    assert!(cr.in_clip(20.0, 20.0));
}

#[test]
fn test_transform_roundtrip() {
    let (_surface, cr) = canvas();
    cr.translate(10.0, 5.0).unwrap();
    assert_eq!(cr.user_to_device(0.0, 0.0), (10.0, 5.0));
    cr.scale(2.0, 2.0).unwrap();
    assert_eq!(cr.user_to_device_distance(3.0, 3.0), (6.0, 6.0));
    assert_eq!(cr.device_to_user(10.0, 5.0), (0.0, 0.0));
    cr.identity_matrix().unwrap();
    assert_eq!(cr.user_to_device(7.0, 7.0), (7.0, 7.0));
}

#[test]
fn test_group_rendering_produces_surface_pattern() {
    let (_surface, cr) = canvas();
    cr.push_group().unwrap();
    cr.set_source_rgb(0.0, 1.0, 0.0).unwrap();
    cr.rectangle(0.0, 0.0, 8.0, 8.0).unwrap();
    cr.fill().unwrap();
    let pattern = cr.pop_group().unwrap();
    assert_eq!(pattern.pattern_type(), PatternType::Surface);
}

#[test]
fn test_target_is_the_creating_surface() {
    let (surface, cr) = canvas();
    let target = cr.target().unwrap();
    assert_eq!(target.surface_type(), SurfaceType::Image);
    // Same engine object behind a fresh wrapper.
    let image: Handle<ImageSurface> = target.cast_dynamic();
    assert!(image.is_some());
    assert_eq!(image.width(), surface.width());
}
