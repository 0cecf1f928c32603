// SPDX-License-Identifier: GPL-3.0-or-later
use std::cell::{Cell, RefCell};
use std::ffi::c_ulong;
use std::rc::Rc;

use vellum::{
    BaseFontFace, Context, Error, FontOptions, FontType, Format, Handle, ImageSurface, Matrix,
    ScaledFont, Status, TextCluster, UserFontFace,
};

fn canvas() -> (Handle<ImageSurface>, Handle<Context>) {
    let surface = ImageSurface::create(Format::ARgb32, 256, 64).unwrap();
    let cr = Context::create(&*surface).unwrap();
    (surface, cr)
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
fn test_render_glyph_called_once_per_glyph() {
    let face = UserFontFace::create().unwrap();
    assert_eq!(face.font_type(), FontType::User);

    let glyphs_seen = Rc::new(RefCell::new(Vec::new()));
    let seen = Rc::clone(&glyphs_seen);
    face.set_render_glyph_func(move |_font, glyph, _cr, _extents| {
        seen.borrow_mut().push(glyph);
        Ok(())
    })
    .unwrap();

    let (_surface, cr) = canvas();
    cr.set_font_face(&*face).unwrap();
    cr.set_font_size(16.0).unwrap();
    cr.move_to(10.0, 40.0).unwrap();
    cr.show_text("abc").unwrap();

    // Default mapping is identity, one render per distinct glyph.
    let mut rendered = glyphs_seen.borrow().clone();
    rendered.sort_unstable();
    assert_eq!(rendered, vec![97, 98, 99]);
}

#[test]
fn test_render_glyph_panic_is_translated() {
    let face = UserFontFace::create().unwrap();
    let calls = Rc::new(Cell::new(0));
    let count = Rc::clone(&calls);
    face.set_render_glyph_func(move |_font, _glyph, _cr, _extents| {
        count.set(count.get() + 1);
        panic!("glyph renderer exploded");
    })
    .unwrap();

    let (_surface, cr) = canvas();
    cr.set_font_face(&*face).unwrap();
    cr.set_font_size(16.0).unwrap();
    cr.move_to(10.0, 40.0).unwrap();
    let err = cr.show_text("a").unwrap_err();
    assert_eq!(err.status(), Status::UserFontError);
    // One invocation, no retry.
    assert_eq!(calls.get(), 1);
}

#[test]
fn test_render_glyph_error_is_reported() {
    let face = UserFontFace::create().unwrap();
    let calls = Rc::new(Cell::new(0));
    let count = Rc::clone(&calls);
    face.set_render_glyph_func(move |_font, _glyph, _cr, _extents| {
        count.set(count.get() + 1);
        Err(Error::new(Status::UserFontError))
    })
    .unwrap();

    let (_surface, cr) = canvas();
    cr.set_font_face(&*face).unwrap();
    cr.set_font_size(16.0).unwrap();
    cr.move_to(10.0, 40.0).unwrap();
    let err = cr.show_text("a").unwrap_err();
    assert_eq!(err.status(), Status::UserFontError);
    assert_eq!(calls.get(), 1);
}

#[test]
fn test_replaced_init_closure_never_runs() {
    let face = UserFontFace::create().unwrap();
    face.set_render_glyph_func(|_font, _glyph, _cr, _extents| Ok(()))
        .unwrap();

    let first_calls = Rc::new(Cell::new(0));
    let first = Rc::clone(&first_calls);
    face.set_init_func(move |_font, _cr, _extents| {
        first.set(first.get() + 1);
        Ok(())
    })
    .unwrap();

    let second_calls = Rc::new(Cell::new(0));
    let second = Rc::clone(&second_calls);
    face.set_init_func(move |_font, _cr, extents| {
        second.set(second.get() + 1);
        extents.ascent = 0.8;
        extents.descent = 0.2;
        extents.height = 1.0;
        Ok(())
    })
    .unwrap();

    let font = scaled(&face, 10.0);
    font.status().unwrap();
    assert_eq!(first_calls.get(), 0);
    assert_eq!(second_calls.get(), 1);

    let extents = font.extents().unwrap();
    assert!((extents.ascent - 8.0).abs() < 1e-6);
    assert!((extents.descent - 2.0).abs() < 1e-6);
}

#[test]
fn test_default_extents_without_init() {
    let face = UserFontFace::create().unwrap();
    face.set_render_glyph_func(|_font, _glyph, _cr, _extents| Ok(()))
        .unwrap();

    let font = scaled(&face, 10.0);
    let extents = font.extents().unwrap();
    assert!((extents.ascent - 10.0).abs() < 1e-6);
    assert!(extents.descent.abs() < 1e-6);
    assert!((extents.height - 10.0).abs() < 1e-6);
}

#[test]
fn test_unicode_to_glyph_mapping_feeds_render() {
    let face = UserFontFace::create().unwrap();
    let glyphs_seen = Rc::new(RefCell::new(Vec::new()));
    let seen = Rc::clone(&glyphs_seen);
    face.set_render_glyph_func(move |_font, glyph, _cr, _extents| {
        seen.borrow_mut().push(glyph);
        Ok(())
    })
    .unwrap();
    face.set_unicode_to_glyph_func(|_font, codepoint| Ok(codepoint + 1000))
        .unwrap();

    let (_surface, cr) = canvas();
    cr.set_font_face(&*face).unwrap();
    cr.set_font_size(16.0).unwrap();
    cr.move_to(10.0, 40.0).unwrap();
    cr.show_text("a").unwrap();

    assert_eq!(*glyphs_seen.borrow(), vec![1097]);
}

#[test]
fn test_text_to_glyphs_closure_output() {
    let face = UserFontFace::create().unwrap();
    face.set_render_glyph_func(|_font, _glyph, _cr, _extents| Ok(()))
        .unwrap();

    let calls = Rc::new(Cell::new(0));
    let count = Rc::clone(&calls);
    face.set_text_to_glyphs_func(move |_font, text, glyphs, clusters, backward| {
        count.set(count.get() + 1);
        for (i, ch) in text.chars().enumerate() {
            glyphs.push(vellum::Glyph {
                index: ch as c_ulong,
                x: i as f64,
                y: 0.0,
            });
            clusters.push(TextCluster {
                num_bytes: ch.len_utf8() as i32,
                num_glyphs: 1,
            });
        }
        *backward = true;
        Ok(())
    })
    .unwrap();

    let font = scaled(&face, 16.0);
    let (glyphs, clusters, backward) = font.text_to_glyphs(0.0, 0.0, "ab").unwrap();
    assert_eq!(calls.get(), 1);
    assert_eq!(glyphs.len(), 2);
    assert_eq!(glyphs[0].index, 97);
    assert_eq!(glyphs[1].index, 98);
    assert_eq!(clusters.len(), 2);
    assert_eq!(clusters[0].num_bytes, 1);
    assert!(backward);
}

#[test]
fn test_text_to_glyphs_without_glyphs_is_an_error() {
    let face = UserFontFace::create().unwrap();
    face.set_render_glyph_func(|_font, _glyph, _cr, _extents| Ok(()))
        .unwrap();
    face.set_text_to_glyphs_func(|_font, _text, _glyphs, _clusters, _backward| Ok(()))
        .unwrap();

    let font = scaled(&face, 16.0);
    let err = font.text_to_glyphs(0.0, 0.0, "a").unwrap_err();
    assert_eq!(err.status(), Status::UserFontError);
}

#[test]
fn test_face_without_any_closure_renders_nothing() {
    let face = UserFontFace::create().unwrap();
    let (_surface, cr) = canvas();
    cr.set_font_face(&*face).unwrap();
    cr.set_font_size(16.0).unwrap();
    cr.move_to(10.0, 40.0).unwrap();
    cr.show_text("abc").unwrap();
    cr.status().unwrap();
}

#[test]
fn test_callbacks_outlive_the_wrapper_handle() {
    let calls = Rc::new(Cell::new(0));
    let (_surface, cr) = canvas();
    {
        let face = UserFontFace::create().unwrap();
        let count = Rc::clone(&calls);
        face.set_render_glyph_func(move |_font, _glyph, _cr, _extents| {
            count.set(count.get() + 1);
            Ok(())
        })
        .unwrap();
        cr.set_font_face(&*face).unwrap();
        // The handle dies here; the engine still holds the native face.
    }
    cr.set_font_size(16.0).unwrap();
    cr.move_to(10.0, 40.0).unwrap();
    cr.show_text("abc").unwrap();
    assert_eq!(calls.get(), 3);
}

#[test]
fn test_set_after_first_use_is_rejected() {
    let face = UserFontFace::create().unwrap();
    face.set_render_glyph_func(|_font, _glyph, _cr, _extents| Ok(()))
        .unwrap();
    let _font = scaled(&face, 12.0);

    let err = face.set_init_func(|_font, _cr, _extents| Ok(())).unwrap_err();
    assert_eq!(err.status(), Status::UserFontImmutable);
}
