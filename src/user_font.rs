// SPDX-License-Identifier: GPL-3.0-or-later

//! User-defined fonts: glyphs drawn by user-supplied closures that the
//! engine calls back into while rendering.
//!
//! The closures live in a slot table attached to the native font face
//! through the engine's keyed user-data association, so the trampolines
//! can recover them from nothing but the scaled font the engine hands
//! back. Every trampoline is a hard boundary: a closure that panics is
//! caught, reported once through the log, and turned into the engine's
//! user-font error status. Nothing unwinds into the engine's frames.

use crate::{
    context::Context,
    enums::FontType,
    error::{check, Error, Status},
    ffi,
    font_face::{BaseFontFace, FontFace},
    handle::{CastDynamic, CastStatic, Handle},
    scaled_font::ScaledFont,
    types::{FontExtents, Glyph, TextCluster, TextExtents},
};
use std::{
    any::Any,
    cell::RefCell,
    ffi::{c_char, c_int, c_ulong, c_void, CStr},
    panic::{self, AssertUnwindSafe},
    ptr, slice, str,
};
use tracing::error;

type InitFunc = Box<dyn Fn(&ScaledFont, &Context, &mut FontExtents) -> Result<(), Error>>;
type RenderGlyphFunc = Box<dyn Fn(&ScaledFont, c_ulong, &Context, &mut TextExtents) -> Result<(), Error>>;
type UnicodeToGlyphFunc = Box<dyn Fn(&ScaledFont, c_ulong) -> Result<c_ulong, Error>>;
type TextToGlyphsFunc = Box<
    dyn Fn(&ScaledFont, &str, &mut Vec<Glyph>, &mut Vec<TextCluster>, &mut bool) -> Result<(), Error>,
>;

/// One optional closure per callback kind. A set call replaces the slot;
/// nothing accumulates.
#[derive(Default)]
struct SlotTable {
    init: RefCell<Option<InitFunc>>,
    render_glyph: RefCell<Option<RenderGlyphFunc>>,
    unicode_to_glyph: RefCell<Option<UnicodeToGlyphFunc>>,
    text_to_glyphs: RefCell<Option<TextToGlyphsFunc>>,
}

// Identity token for the keyed lookup; only its address matters.
static SLOT_TABLE_KEY: ffi::cairo_user_data_key_t = ffi::cairo_user_data_key_t { unused: 0 };

extern "C" fn free_slot_table(data: *mut c_void) {
    drop(unsafe { Box::from_raw(data.cast::<SlotTable>()) });
}

unsafe fn copy_to_engine<T: Copy>(
    items: &[T],
    alloc: unsafe extern "C" fn(c_int) -> *mut T,
) -> Result<*mut T, Error> {
    let buffer = alloc(items.len() as c_int);
    if buffer.is_null() {
        return Err(Error::new(Status::NoMemory));
    }
    ptr::copy_nonoverlapping(items.as_ptr(), buffer, items.len());
    Ok(buffer)
}

fn panic_message(payload: &(dyn Any + Send)) -> &str {
    if let Some(message) = payload.downcast_ref::<&str>() {
        message
    } else if let Some(message) = payload.downcast_ref::<String>() {
        message
    } else {
        "unknown panic payload"
    }
}

/// A font face whose glyphs come from user-supplied closures.
#[repr(transparent)]
pub struct UserFontFace(FontFace);

impl UserFontFace {
    pub fn create() -> Result<Handle<UserFontFace>, Error> {
        let face = UserFontFace(FontFace::new_noinc(unsafe {
            ffi::cairo_user_font_face_create()
        }));
        face.status()?;

        let table = Box::into_raw(Box::<SlotTable>::default());
        let status = unsafe {
            ffi::cairo_font_face_set_user_data(
                face.font_face_ptr(),
                &SLOT_TABLE_KEY,
                table.cast(),
                Some(free_slot_table),
            )
        };
        if let Err(err) = check(status) {
            drop(unsafe { Box::from_raw(table) });
            return Err(err);
        }

        // The engine refuses to scale a user font without a render
        // callback, so that trampoline is always registered; with its slot
        // empty every glyph renders as nothing.
        unsafe {
            ffi::cairo_user_font_face_set_render_glyph_func(
                face.font_face_ptr(),
                Some(Self::render_glyph_cb),
            );
        }
        face.status()?;
        Ok(Handle::new(face))
    }

    /// Sets the closure run once per scaled font, before any glyph is
    /// rendered, to fill in font-wide extents.
    pub fn set_init_func<F>(&self, func: F) -> Result<(), Error>
    where
        F: Fn(&ScaledFont, &Context, &mut FontExtents) -> Result<(), Error> + 'static,
    {
        let face = self.font_face_ptr();
        if unsafe { ffi::cairo_user_font_face_get_init_func(face) }.is_none() {
            unsafe { ffi::cairo_user_font_face_set_init_func(face, Some(Self::init_cb)) };
            self.status()?;
        }
        self.slots().init.replace(Some(Box::new(func)));
        Ok(())
    }

    /// Sets the closure that draws one glyph into the recording context the
    /// engine provides.
    pub fn set_render_glyph_func<F>(&self, func: F) -> Result<(), Error>
    where
        F: Fn(&ScaledFont, c_ulong, &Context, &mut TextExtents) -> Result<(), Error> + 'static,
    {
        // The trampoline itself was registered at creation.
        self.status()?;
        self.slots().render_glyph.replace(Some(Box::new(func)));
        Ok(())
    }

    /// Sets the closure mapping a unicode codepoint to a glyph index. The
    /// engine ignores it while a text-to-glyphs closure is set and
    /// succeeds.
    pub fn set_unicode_to_glyph_func<F>(&self, func: F) -> Result<(), Error>
    where
        F: Fn(&ScaledFont, c_ulong) -> Result<c_ulong, Error> + 'static,
    {
        let face = self.font_face_ptr();
        if unsafe { ffi::cairo_user_font_face_get_unicode_to_glyph_func(face) }.is_none() {
            unsafe {
                ffi::cairo_user_font_face_set_unicode_to_glyph_func(
                    face,
                    Some(Self::unicode_to_glyph_cb),
                );
            }
            self.status()?;
        }
        self.slots().unicode_to_glyph.replace(Some(Box::new(func)));
        Ok(())
    }

    /// Sets the closure segmenting text into glyphs and clusters.
    pub fn set_text_to_glyphs_func<F>(&self, func: F) -> Result<(), Error>
    where
        F: Fn(&ScaledFont, &str, &mut Vec<Glyph>, &mut Vec<TextCluster>, &mut bool) -> Result<(), Error>
            + 'static,
    {
        let face = self.font_face_ptr();
        if unsafe { ffi::cairo_user_font_face_get_text_to_glyphs_func(face) }.is_none() {
            unsafe {
                ffi::cairo_user_font_face_set_text_to_glyphs_func(
                    face,
                    Some(Self::text_to_glyphs_cb),
                );
            }
            self.status()?;
        }
        self.slots().text_to_glyphs.replace(Some(Box::new(func)));
        Ok(())
    }

    fn slots(&self) -> &SlotTable {
        let data = unsafe {
            ffi::cairo_font_face_get_user_data(self.font_face_ptr(), &SLOT_TABLE_KEY)
        };
        debug_assert!(!data.is_null(), "user font slot table missing");
        unsafe { data.cast::<SlotTable>().as_ref().unwrap_unchecked() }
    }

    /// Recovers the slot table from the scaled font the engine hands a
    /// trampoline. The table is attached for the whole life of the native
    /// face, so a miss here is a consistency violation, not an error path.
    fn slot_table<'a>(scaled_font: *mut ffi::cairo_scaled_font_t) -> &'a SlotTable {
        let face = unsafe { ffi::cairo_scaled_font_get_font_face(scaled_font) };
        let data = unsafe { ffi::cairo_font_face_get_user_data(face, &SLOT_TABLE_KEY) };
        debug_assert!(!data.is_null(), "user font slot table missing");
        unsafe { data.cast::<SlotTable>().as_ref().unwrap_unchecked() }
    }

    fn engine_status(
        callback: &str,
        result: Result<Result<(), Error>, Box<dyn Any + Send>>,
    ) -> ffi::cairo_status_t {
        match result {
            Ok(Ok(())) => ffi::CAIRO_STATUS_SUCCESS,
            Ok(Err(err)) => err.status().to_ffi(),
            Err(payload) => {
                error!(
                    "user font {} callback panicked: {}",
                    callback,
                    panic_message(payload.as_ref())
                );
                ffi::CAIRO_STATUS_USER_FONT_ERROR
            }
        }
    }

    extern "C" fn init_cb(
        scaled_font: *mut ffi::cairo_scaled_font_t,
        cr: *mut ffi::cairo_t,
        extents: *mut ffi::cairo_font_extents_t,
    ) -> ffi::cairo_status_t {
        let slots = Self::slot_table(scaled_font);
        let result = panic::catch_unwind(AssertUnwindSafe(|| {
            match slots.init.borrow().as_ref() {
                Some(func) => {
                    let font = ScaledFont::new_inc(scaled_font);
                    let context = Context::new_inc(cr);
                    func(&font, &context, unsafe { &mut *extents })
                }
                None => Ok(()),
            }
        }));
        Self::engine_status("init", result)
    }

    extern "C" fn render_glyph_cb(
        scaled_font: *mut ffi::cairo_scaled_font_t,
        glyph: c_ulong,
        cr: *mut ffi::cairo_t,
        extents: *mut ffi::cairo_text_extents_t,
    ) -> ffi::cairo_status_t {
        let slots = Self::slot_table(scaled_font);
        let result = panic::catch_unwind(AssertUnwindSafe(|| {
            match slots.render_glyph.borrow().as_ref() {
                Some(func) => {
                    let font = ScaledFont::new_inc(scaled_font);
                    let context = Context::new_inc(cr);
                    func(&font, glyph, &context, unsafe { &mut *extents })
                }
                // No closure: the glyph renders as nothing.
                None => Ok(()),
            }
        }));
        Self::engine_status("render_glyph", result)
    }

    extern "C" fn unicode_to_glyph_cb(
        scaled_font: *mut ffi::cairo_scaled_font_t,
        unicode: c_ulong,
        glyph_index: *mut c_ulong,
    ) -> ffi::cairo_status_t {
        let slots = Self::slot_table(scaled_font);
        let result = panic::catch_unwind(AssertUnwindSafe(|| {
            match slots.unicode_to_glyph.borrow().as_ref() {
                Some(func) => {
                    let font = ScaledFont::new_inc(scaled_font);
                    let index = func(&font, unicode)?;
                    unsafe { *glyph_index = index };
                    Ok(())
                }
                // Fall back to the engine's identity mapping.
                None => Err(Error::new(Status::UserFontNotImplemented)),
            }
        }));
        Self::engine_status("unicode_to_glyph", result)
    }

    extern "C" fn text_to_glyphs_cb(
        scaled_font: *mut ffi::cairo_scaled_font_t,
        utf8: *const c_char,
        utf8_len: c_int,
        glyphs: *mut *mut ffi::cairo_glyph_t,
        num_glyphs: *mut c_int,
        clusters: *mut *mut ffi::cairo_text_cluster_t,
        num_clusters: *mut c_int,
        cluster_flags: *mut ffi::cairo_text_cluster_flags_t,
    ) -> ffi::cairo_status_t {
        let slots = Self::slot_table(scaled_font);
        let result = panic::catch_unwind(AssertUnwindSafe(|| {
            let slot = slots.text_to_glyphs.borrow();
            let Some(func) = slot.as_ref() else {
                return Err(Error::new(Status::UserFontNotImplemented));
            };
            if glyphs.is_null() || num_glyphs.is_null() {
                return Err(Error::new(Status::UserFontError));
            }

            let bytes = if utf8_len < 0 {
                unsafe { CStr::from_ptr(utf8) }.to_bytes()
            } else {
                unsafe { slice::from_raw_parts(utf8.cast::<u8>(), utf8_len as usize) }
            };
            let text = str::from_utf8(bytes).map_err(|_| Error::new(Status::InvalidString))?;

            let font = ScaledFont::new_inc(scaled_font);
            let mut glyph_vec: Vec<Glyph> = Vec::new();
            let mut cluster_vec: Vec<TextCluster> = Vec::new();
            let mut backward = false;
            func(&font, text, &mut glyph_vec, &mut cluster_vec, &mut backward)?;

            // Glyphs are the mandatory output of this callback.
            if glyph_vec.is_empty() {
                return Err(Error::new(Status::UserFontError));
            }
            // The engine owns the output arrays, so they go through its
            // allocator, never ours.
            unsafe {
                *glyphs = copy_to_engine(&glyph_vec, ffi::cairo_glyph_allocate)?;
                *num_glyphs = glyph_vec.len() as c_int;
            }
            if !clusters.is_null() && !num_clusters.is_null() {
                unsafe {
                    *num_clusters = cluster_vec.len() as c_int;
                    if !cluster_vec.is_empty() {
                        *clusters =
                            copy_to_engine(&cluster_vec, ffi::cairo_text_cluster_allocate)?;
                    }
                    if !cluster_flags.is_null() {
                        *cluster_flags = if backward {
                            ffi::CAIRO_TEXT_CLUSTER_FLAG_BACKWARD
                        } else {
                            0
                        };
                    }
                }
            }
            Ok(())
        }));
        Self::engine_status("text_to_glyphs", result)
    }
}

impl BaseFontFace for UserFontFace {
    fn font_face_ptr(&self) -> *mut ffi::cairo_font_face_t {
        self.0.font_face_ptr()
    }
}

unsafe impl CastStatic<FontFace> for UserFontFace {}

unsafe impl CastDynamic<UserFontFace> for FontFace {
    fn compatible(&self) -> bool {
        self.font_type() == FontType::User
            && !unsafe { ffi::cairo_font_face_get_user_data(self.font_face_ptr(), &SLOT_TABLE_KEY) }
                .is_null()
    }
}
