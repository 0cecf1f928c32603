// SPDX-License-Identifier: GPL-3.0-or-later
use vellum::{
    BaseFontFace, Context, FontFace, FontSlant, FontType, FontWeight, Format, Handle,
    ImageSurface, ToyFontFace, UserFontFace,
};

#[test]
fn test_create_toy() {
    let toy = ToyFontFace::create("sans", FontSlant::Italic, FontWeight::Normal).unwrap();
    toy.status().unwrap();
    assert_eq!(toy.font_type(), FontType::Toy);
}

#[test]
fn test_toy_getters() {
    let toy = ToyFontFace::create("sans", FontSlant::Italic, FontWeight::Normal).unwrap();
    assert_eq!(toy.family(), "sans");
    assert_eq!(toy.slant(), FontSlant::Italic);
    assert_eq!(toy.weight(), FontWeight::Normal);
}

#[test]
fn test_casts_between_face_types() {
    let toy = ToyFontFace::create("serif", FontSlant::Normal, FontWeight::Bold).unwrap();
    let base: Handle<FontFace> = toy.cast_static();
    assert_eq!(toy.use_count(), 2);

    let back: Handle<ToyFontFace> = base.cast_dynamic();
    assert!(back.is_some());
    assert_eq!(back.family(), "serif");

    let user: Handle<UserFontFace> = base.cast_dynamic();
    assert!(user.is_none());
    assert_eq!(toy.use_count(), 3);
}

#[test]
fn test_context_font_face_roundtrip() {
    let surface = ImageSurface::create(Format::ARgb32, 16, 16).unwrap();
    let cr = Context::create(&*surface).unwrap();
    cr.select_font_face("sans", FontSlant::Normal, FontWeight::Normal)
        .unwrap();

    let face = cr.font_face().unwrap();
    assert_eq!(face.font_type(), FontType::Toy);
    let toy: Handle<ToyFontFace> = face.cast_dynamic();
    assert!(toy.is_some());
    assert_eq!(toy.family(), "sans");
}

#[test]
fn test_user_face_downcast_roundtrip() {
    let user = UserFontFace::create().unwrap();
    let base: Handle<FontFace> = user.cast_static();
    assert_eq!(base.font_type(), FontType::User);

    let back: Handle<UserFontFace> = base.cast_dynamic();
    assert!(back.is_some());
    let toy: Handle<ToyFontFace> = base.cast_dynamic();
    assert!(toy.is_none());
}
