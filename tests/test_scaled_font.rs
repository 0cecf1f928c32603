// SPDX-License-Identifier: GPL-3.0-or-later
use vellum::{
    BaseFontFace, FontOptions, FontType, Handle, Matrix, ScaledFont, UserFontFace,
};

fn render_only_face() -> Handle<UserFontFace> {
    let face = UserFontFace::create().unwrap();
    face.set_render_glyph_func(|_font, _glyph, _cr, extents| {
        extents.x_advance = 0.5;
        Ok(())
    })
    .unwrap();
    face
}

fn scaled(face: &UserFontFace, size: f64) -> Handle<ScaledFont> {
    let options = FontOptions::create().unwrap();
    ScaledFont::create(
        face,
        &Matrix::scaling(size, size),
        &Matrix::identity(),
        &options,
    )
    .unwrap()
}

#[test]
fn test_create() {
    let face = render_only_face();
    let font = scaled(&face, 16.0);
    font.status().unwrap();
    assert_eq!(font.font_type(), FontType::User);
}

#[test]
fn test_matrices_are_preserved() {
    let face = render_only_face();
    let font = scaled(&face, 16.0);
    let font_matrix = font.font_matrix();
    assert_eq!(font_matrix.xx(), 16.0);
    assert_eq!(font_matrix.yy(), 16.0);
    let ctm = font.ctm();
    assert_eq!(ctm.xx(), 1.0);
    assert_eq!(ctm.yy(), 1.0);
    assert_eq!(font.scale_matrix().xx(), 16.0);
}

#[test]
fn test_text_extents_use_render_metrics() {
    let face = render_only_face();
    let font = scaled(&face, 16.0);
    let extents = font.text_extents("abc").unwrap();
    // Three glyphs, each advancing 0.5 font units at size 16.
    assert!((extents.x_advance - 24.0).abs() < 1e-6);
    assert!(extents.y_advance.abs() < 1e-6);
}

#[test]
fn test_glyph_extents() {
    let face = render_only_face();
    let font = scaled(&face, 16.0);
    let glyphs = [vellum::Glyph {
        index: 97,
        x: 0.0,
        y: 0.0,
    }];
    let extents = font.glyph_extents(&glyphs).unwrap();
    assert!((extents.x_advance - 8.0).abs() < 1e-6);
}

#[test]
fn test_font_face_roundtrip() {
    let face = render_only_face();
    let font = scaled(&face, 16.0);
    let back = font.font_face().unwrap();
    assert_eq!(back.font_type(), FontType::User);
}

#[test]
fn test_default_text_to_glyphs_maps_identity() {
    let face = render_only_face();
    let font = scaled(&face, 16.0);
    let (glyphs, _clusters, backward) = font.text_to_glyphs(0.0, 0.0, "ab").unwrap();
    assert!(!backward);
    assert_eq!(glyphs.len(), 2);
    assert_eq!(glyphs[0].index, 97);
    assert_eq!(glyphs[1].index, 98);
    // Glyph advances position each one after its predecessor.
    assert!(glyphs[1].x > glyphs[0].x);
}

#[test]
fn test_font_options_roundtrip() {
    let face = render_only_face();
    let font = scaled(&face, 16.0);
    let options = font.font_options().unwrap();
    options.status().unwrap();
}
