// SPDX-License-Identifier: GPL-3.0-or-later
use crate::{
    enums::FontType,
    error::{check, Error},
    ffi,
    font_face::{BaseFontFace, FontFace},
    font_options::FontOptions,
    handle::Handle,
    matrix::Matrix,
    types::{FontExtents, Glyph, TextCluster, TextExtents},
};
use std::{ffi::CString, ptr, slice};

/// A font face scaled to a particular size and transformation.
pub struct ScaledFont {
    ptr: *mut ffi::cairo_scaled_font_t,
}

impl ScaledFont {
    pub fn create<F: BaseFontFace>(
        face: &F,
        font_matrix: &Matrix,
        ctm: &Matrix,
        options: &FontOptions,
    ) -> Result<Handle<ScaledFont>, Error> {
        let font = ScaledFont {
            ptr: unsafe {
                ffi::cairo_scaled_font_create(
                    face.font_face_ptr(),
                    font_matrix.ptr(),
                    ctm.ptr(),
                    options.ptr(),
                )
            },
        };
        font.status()?;
        Ok(Handle::new(font))
    }

    pub(crate) fn new_inc(ptr: *mut ffi::cairo_scaled_font_t) -> ScaledFont {
        ScaledFont {
            ptr: unsafe { ffi::cairo_scaled_font_reference(ptr) },
        }
    }

    pub(crate) fn ptr(&self) -> *mut ffi::cairo_scaled_font_t {
        self.ptr
    }

    pub fn status(&self) -> Result<(), Error> {
        check(unsafe { ffi::cairo_scaled_font_status(self.ptr) })
    }

    pub fn font_type(&self) -> FontType {
        FontType::from_ffi(unsafe { ffi::cairo_scaled_font_get_type(self.ptr) })
    }

    pub fn extents(&self) -> Result<FontExtents, Error> {
        let mut extents = FontExtents::default();
        unsafe { ffi::cairo_scaled_font_extents(self.ptr, &mut extents) };
        self.status()?;
        Ok(extents)
    }

    pub fn text_extents(&self, text: &str) -> Result<TextExtents, Error> {
        let ctext = CString::new(text)?;
        let mut extents = TextExtents::default();
        unsafe { ffi::cairo_scaled_font_text_extents(self.ptr, ctext.as_ptr(), &mut extents) };
        self.status()?;
        Ok(extents)
    }

    pub fn glyph_extents(&self, glyphs: &[Glyph]) -> Result<TextExtents, Error> {
        let mut extents = TextExtents::default();
        unsafe {
            ffi::cairo_scaled_font_glyph_extents(
                self.ptr,
                glyphs.as_ptr(),
                glyphs.len() as i32,
                &mut extents,
            );
        }
        self.status()?;
        Ok(extents)
    }

    /// Converts text into glyphs and clusters, starting at (x, y).
    ///
    /// The engine allocates the output arrays; they are copied into `Vec`s
    /// and released through the engine's free functions before returning.
    /// The bool is the backward-cluster flag.
    pub fn text_to_glyphs(
        &self,
        x: f64,
        y: f64,
        text: &str,
    ) -> Result<(Vec<Glyph>, Vec<TextCluster>, bool), Error> {
        let ctext = CString::new(text)?;
        let mut glyphs: *mut ffi::cairo_glyph_t = ptr::null_mut();
        let mut num_glyphs = 0;
        let mut clusters: *mut ffi::cairo_text_cluster_t = ptr::null_mut();
        let mut num_clusters = 0;
        let mut cluster_flags: ffi::cairo_text_cluster_flags_t = 0;
        let status = unsafe {
            ffi::cairo_scaled_font_text_to_glyphs(
                self.ptr,
                x,
                y,
                ctext.as_ptr(),
                -1,
                &mut glyphs,
                &mut num_glyphs,
                &mut clusters,
                &mut num_clusters,
                &mut cluster_flags,
            )
        };
        check(status)?;

        let glyph_vec = if glyphs.is_null() {
            Vec::new()
        } else {
            let out = unsafe { slice::from_raw_parts(glyphs, num_glyphs as usize) }.to_vec();
            unsafe { ffi::cairo_glyph_free(glyphs) };
            out
        };
        let cluster_vec = if clusters.is_null() {
            Vec::new()
        } else {
            let out = unsafe { slice::from_raw_parts(clusters, num_clusters as usize) }.to_vec();
            unsafe { ffi::cairo_text_cluster_free(clusters) };
            out
        };
        let backward = cluster_flags & ffi::CAIRO_TEXT_CLUSTER_FLAG_BACKWARD != 0;
        Ok((glyph_vec, cluster_vec, backward))
    }

    pub fn font_face(&self) -> Result<Handle<FontFace>, Error> {
        let face = unsafe { ffi::cairo_scaled_font_get_font_face(self.ptr) };
        self.status()?;
        Ok(Handle::new(FontFace::new_inc(face)))
    }

    pub fn font_matrix(&self) -> Matrix {
        let mut matrix = ffi::cairo_matrix_t::default();
        unsafe { ffi::cairo_scaled_font_get_font_matrix(self.ptr, &mut matrix) };
        Matrix::from_ffi(matrix)
    }

    pub fn ctm(&self) -> Matrix {
        let mut matrix = ffi::cairo_matrix_t::default();
        unsafe { ffi::cairo_scaled_font_get_ctm(self.ptr, &mut matrix) };
        Matrix::from_ffi(matrix)
    }

    pub fn scale_matrix(&self) -> Matrix {
        let mut matrix = ffi::cairo_matrix_t::default();
        unsafe { ffi::cairo_scaled_font_get_scale_matrix(self.ptr, &mut matrix) };
        Matrix::from_ffi(matrix)
    }

    pub fn font_options(&self) -> Result<FontOptions, Error> {
        let options = FontOptions::create()?;
        unsafe { ffi::cairo_scaled_font_get_font_options(self.ptr, options.ptr()) };
        options.status()?;
        Ok(options)
    }
}

impl Drop for ScaledFont {
    fn drop(&mut self) {
        unsafe { ffi::cairo_scaled_font_destroy(self.ptr) }
    }
}
