// SPDX-License-Identifier: GPL-3.0-or-later
use vellum::{
    BaseGradient, BasePattern, BaseSurface, Extend, Filter, Format, Handle, ImageSurface,
    LinearGradient, Matrix, Pattern, PatternType, RadialGradient, SolidPattern, SurfacePattern,
};

#[test]
fn test_solid_pattern_reports_its_color() {
    let solid = SolidPattern::create_rgba(0.1, 0.2, 0.3, 0.4).unwrap();
    assert_eq!(solid.pattern_type(), PatternType::Solid);
    let (red, green, blue, alpha) = solid.rgba().unwrap();
    assert!((red - 0.1).abs() < 1e-9);
    assert!((green - 0.2).abs() < 1e-9);
    assert!((blue - 0.3).abs() < 1e-9);
    assert!((alpha - 0.4).abs() < 1e-9);
}

#[test]
fn test_linear_gradient_stops() {
    let gradient = LinearGradient::create(0.0, 0.0, 100.0, 0.0).unwrap();
    gradient.add_color_stop_rgb(0.0, 1.0, 0.0, 0.0).unwrap();
    gradient.add_color_stop_rgba(1.0, 0.0, 0.0, 1.0, 0.5).unwrap();

    assert_eq!(gradient.pattern_type(), PatternType::Linear);
    assert_eq!(gradient.color_stop_count().unwrap(), 2);
    assert_eq!(gradient.points().unwrap(), (0.0, 0.0, 100.0, 0.0));

    let (offset, red, green, blue, alpha) = gradient.color_stop_rgba(1).unwrap();
    assert_eq!(offset, 1.0);
    assert!((red - 0.0).abs() < 1e-9);
    assert!((green - 0.0).abs() < 1e-9);
    assert!((blue - 1.0).abs() < 1e-9);
    assert!((alpha - 0.5).abs() < 1e-9);
}

#[test]
fn test_radial_gradient_circles() {
    let gradient = RadialGradient::create(1.0, 2.0, 3.0, 4.0, 5.0, 6.0).unwrap();
    assert_eq!(gradient.pattern_type(), PatternType::Radial);
    assert_eq!(gradient.circles().unwrap(), (1.0, 2.0, 3.0, 4.0, 5.0, 6.0));
}

#[test]
fn test_surface_pattern_roundtrip() {
    let surface = ImageSurface::create(Format::ARgb32, 4, 4).unwrap();
    let pattern = SurfacePattern::create(&*surface).unwrap();
    assert_eq!(pattern.pattern_type(), PatternType::Surface);
    let back = pattern.surface().unwrap();
    assert_eq!(back.surface_type(), vellum::SurfaceType::Image);
}

#[test]
fn test_extend_filter_matrix() {
    let gradient = LinearGradient::create(0.0, 0.0, 1.0, 0.0).unwrap();
    assert_eq!(gradient.extend(), Extend::Pad);
    gradient.set_extend(Extend::Repeat).unwrap();
    assert_eq!(gradient.extend(), Extend::Repeat);

    gradient.set_filter(Filter::Nearest).unwrap();
    assert_eq!(gradient.filter(), Filter::Nearest);

    gradient.set_matrix(&Matrix::scaling(2.0, 2.0)).unwrap();
    assert_eq!(gradient.matrix().xx(), 2.0);
}

#[test]
fn test_casts_with_engine_type_tags() {
    let solid = SolidPattern::create_rgb(1.0, 1.0, 1.0).unwrap();
    let base: Handle<Pattern> = solid.cast_static();
    assert_eq!(solid.use_count(), 2);

    let back: Handle<SolidPattern> = base.cast_dynamic();
    assert!(back.is_some());
    let linear: Handle<LinearGradient> = base.cast_dynamic();
    assert!(linear.is_none());
    let radial: Handle<RadialGradient> = base.cast_dynamic();
    assert!(radial.is_none());
    assert_eq!(solid.use_count(), 3);
}
