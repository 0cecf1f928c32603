// SPDX-License-Identifier: GPL-3.0-or-later
use crate::{
    enums::{FontSlant, FontType, FontWeight},
    error::{check, Error},
    ffi,
    handle::{CastDynamic, CastStatic, Handle},
};
use std::ffi::{CStr, CString};

// Base interface shared by all font face wrappers.

pub trait BaseFontFace {
    fn font_face_ptr(&self) -> *mut ffi::cairo_font_face_t;

    fn status(&self) -> Result<(), Error> {
        check(unsafe { ffi::cairo_font_face_status(self.font_face_ptr()) })
    }

    fn font_type(&self) -> FontType {
        FontType::from_ffi(unsafe { ffi::cairo_font_face_get_type(self.font_face_ptr()) })
    }
}

/// A font face of any engine-side type; the root of the font face
/// hierarchy.
#[repr(transparent)]
pub struct FontFace {
    ptr: *mut ffi::cairo_font_face_t,
}

impl FontFace {
    pub(crate) fn new_noinc(ptr: *mut ffi::cairo_font_face_t) -> FontFace {
        FontFace { ptr }
    }

    pub(crate) fn new_inc(ptr: *mut ffi::cairo_font_face_t) -> FontFace {
        FontFace {
            ptr: unsafe { ffi::cairo_font_face_reference(ptr) },
        }
    }
}

impl BaseFontFace for FontFace {
    fn font_face_ptr(&self) -> *mut ffi::cairo_font_face_t {
        self.ptr
    }
}

impl Drop for FontFace {
    fn drop(&mut self) {
        unsafe { ffi::cairo_font_face_destroy(self.ptr) }
    }
}

/// A face for the engine's built-in simple font selection.
#[repr(transparent)]
pub struct ToyFontFace(FontFace);

impl ToyFontFace {
    pub fn create(
        family: &str,
        slant: FontSlant,
        weight: FontWeight,
    ) -> Result<Handle<ToyFontFace>, Error> {
        let cfamily = CString::new(family)?;
        let face = ToyFontFace(FontFace::new_noinc(unsafe {
            ffi::cairo_toy_font_face_create(cfamily.as_ptr(), slant.to_ffi(), weight.to_ffi())
        }));
        face.status()?;
        Ok(Handle::new(face))
    }

    pub fn family(&self) -> String {
        unsafe { CStr::from_ptr(ffi::cairo_toy_font_face_get_family(self.font_face_ptr())) }
            .to_str()
            .unwrap_or_default()
            .to_owned()
    }

    pub fn slant(&self) -> FontSlant {
        FontSlant::from_ffi(unsafe { ffi::cairo_toy_font_face_get_slant(self.font_face_ptr()) })
    }

    pub fn weight(&self) -> FontWeight {
        FontWeight::from_ffi(unsafe { ffi::cairo_toy_font_face_get_weight(self.font_face_ptr()) })
    }
}

impl BaseFontFace for ToyFontFace {
    fn font_face_ptr(&self) -> *mut ffi::cairo_font_face_t {
        self.0.ptr
    }
}

unsafe impl CastStatic<FontFace> for ToyFontFace {}

unsafe impl CastDynamic<ToyFontFace> for FontFace {
    fn compatible(&self) -> bool {
        self.font_type() == FontType::Toy
    }
}
