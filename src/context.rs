// SPDX-License-Identifier: GPL-3.0-or-later
use crate::{
    enums::{Antialias, Content, FillRule, FontSlant, FontWeight, LineCap, LineJoin, Operator},
    error::{check, Error},
    ffi,
    font_face::{BaseFontFace, FontFace},
    font_options::FontOptions,
    handle::Handle,
    matrix::Matrix,
    path::Path,
    pattern::{BasePattern, Pattern},
    scaled_font::ScaledFont,
    surface::{BaseSurface, Surface},
    types::{FontExtents, Glyph, TextCluster, TextExtents},
};
use std::ffi::CString;

/// The drawing context. Every operation forwards to the engine and then
/// checks the context's status, so an error surfaces on the call that
/// caused it.
pub struct Context {
    cr: *mut ffi::cairo_t,
}

impl Context {
    pub fn create<S: BaseSurface>(target: &S) -> Result<Handle<Context>, Error> {
        let context = Context {
            cr: unsafe { ffi::cairo_create(target.surface_ptr()) },
        };
        context.status()?;
        Ok(Handle::new(context))
    }

    pub(crate) fn new_inc(cr: *mut ffi::cairo_t) -> Context {
        Context {
            cr: unsafe { ffi::cairo_reference(cr) },
        }
    }

    pub fn status(&self) -> Result<(), Error> {
        check(unsafe { ffi::cairo_status(self.cr) })
    }

    pub fn save(&self) -> Result<(), Error> {
        unsafe { ffi::cairo_save(self.cr) };
        self.status()
    }

    pub fn restore(&self) -> Result<(), Error> {
        unsafe { ffi::cairo_restore(self.cr) };
        self.status()
    }

    pub fn push_group(&self) -> Result<(), Error> {
        unsafe { ffi::cairo_push_group(self.cr) };
        self.status()
    }

    pub fn push_group_with_content(&self, content: Content) -> Result<(), Error> {
        unsafe { ffi::cairo_push_group_with_content(self.cr, content.to_ffi()) };
        self.status()
    }

    pub fn pop_group(&self) -> Result<Handle<Pattern>, Error> {
        let pattern = Pattern::new_noinc(unsafe { ffi::cairo_pop_group(self.cr) });
        pattern.status()?;
        Ok(Handle::new(pattern))
    }

    pub fn pop_group_to_source(&self) -> Result<(), Error> {
        unsafe { ffi::cairo_pop_group_to_source(self.cr) };
        self.status()
    }

    pub fn set_operator(&self, op: Operator) -> Result<(), Error> {
        unsafe { ffi::cairo_set_operator(self.cr, op.to_ffi()) };
        self.status()
    }

    pub fn operator(&self) -> Operator {
        Operator::from_ffi(unsafe { ffi::cairo_get_operator(self.cr) })
    }

    pub fn set_source<P: BasePattern>(&self, source: &P) -> Result<(), Error> {
        unsafe { ffi::cairo_set_source(self.cr, source.pattern_ptr()) };
        self.status()
    }

    pub fn source(&self) -> Result<Handle<Pattern>, Error> {
        let pattern = Pattern::new_inc(unsafe { ffi::cairo_get_source(self.cr) });
        self.status()?;
        Ok(Handle::new(pattern))
    }

    pub fn set_source_rgb(&self, red: f64, green: f64, blue: f64) -> Result<(), Error> {
        unsafe { ffi::cairo_set_source_rgb(self.cr, red, green, blue) };
        self.status()
    }

    pub fn set_source_rgba(&self, red: f64, green: f64, blue: f64, alpha: f64) -> Result<(), Error> {
        unsafe { ffi::cairo_set_source_rgba(self.cr, red, green, blue, alpha) };
        self.status()
    }

    pub fn set_source_surface<S: BaseSurface>(
        &self,
        surface: &S,
        x: f64,
        y: f64,
    ) -> Result<(), Error> {
        unsafe { ffi::cairo_set_source_surface(self.cr, surface.surface_ptr(), x, y) };
        self.status()
    }

    pub fn set_tolerance(&self, tolerance: f64) -> Result<(), Error> {
        unsafe { ffi::cairo_set_tolerance(self.cr, tolerance) };
        self.status()
    }

    pub fn tolerance(&self) -> f64 {
        unsafe { ffi::cairo_get_tolerance(self.cr) }
    }

    pub fn set_antialias(&self, antialias: Antialias) -> Result<(), Error> {
        unsafe { ffi::cairo_set_antialias(self.cr, antialias.to_ffi()) };
        self.status()
    }

    pub fn antialias(&self) -> Antialias {
        Antialias::from_ffi(unsafe { ffi::cairo_get_antialias(self.cr) })
    }

    pub fn set_fill_rule(&self, fill_rule: FillRule) -> Result<(), Error> {
        unsafe { ffi::cairo_set_fill_rule(self.cr, fill_rule.to_ffi()) };
        self.status()
    }

    pub fn fill_rule(&self) -> FillRule {
        FillRule::from_ffi(unsafe { ffi::cairo_get_fill_rule(self.cr) })
    }

    pub fn set_line_width(&self, width: f64) -> Result<(), Error> {
        unsafe { ffi::cairo_set_line_width(self.cr, width) };
        self.status()
    }

    pub fn line_width(&self) -> f64 {
        unsafe { ffi::cairo_get_line_width(self.cr) }
    }

    pub fn set_line_cap(&self, line_cap: LineCap) -> Result<(), Error> {
        unsafe { ffi::cairo_set_line_cap(self.cr, line_cap.to_ffi()) };
        self.status()
    }

    pub fn line_cap(&self) -> LineCap {
        LineCap::from_ffi(unsafe { ffi::cairo_get_line_cap(self.cr) })
    }

    pub fn set_line_join(&self, line_join: LineJoin) -> Result<(), Error> {
        unsafe { ffi::cairo_set_line_join(self.cr, line_join.to_ffi()) };
        self.status()
    }

    pub fn line_join(&self) -> LineJoin {
        LineJoin::from_ffi(unsafe { ffi::cairo_get_line_join(self.cr) })
    }

    pub fn set_dash(&self, dashes: &[f64], offset: f64) -> Result<(), Error> {
        unsafe { ffi::cairo_set_dash(self.cr, dashes.as_ptr(), dashes.len() as i32, offset) };
        self.status()
    }

    pub fn unset_dash(&self) -> Result<(), Error> {
        unsafe { ffi::cairo_set_dash(self.cr, std::ptr::null(), 0, 0.0) };
        self.status()
    }

    /// The current dash pattern and offset.
    pub fn dash(&self) -> (Vec<f64>, f64) {
        let count = unsafe { ffi::cairo_get_dash_count(self.cr) };
        let mut dashes = vec![0.0; count as usize];
        let mut offset = 0.0;
        unsafe { ffi::cairo_get_dash(self.cr, dashes.as_mut_ptr(), &mut offset) };
        (dashes, offset)
    }

    pub fn set_miter_limit(&self, limit: f64) -> Result<(), Error> {
        unsafe { ffi::cairo_set_miter_limit(self.cr, limit) };
        self.status()
    }

    pub fn miter_limit(&self) -> f64 {
        unsafe { ffi::cairo_get_miter_limit(self.cr) }
    }

    pub fn translate(&self, tx: f64, ty: f64) -> Result<(), Error> {
        unsafe { ffi::cairo_translate(self.cr, tx, ty) };
        self.status()
    }

    pub fn scale(&self, sx: f64, sy: f64) -> Result<(), Error> {
        unsafe { ffi::cairo_scale(self.cr, sx, sy) };
        self.status()
    }

    pub fn rotate(&self, angle: f64) -> Result<(), Error> {
        unsafe { ffi::cairo_rotate(self.cr, angle) };
        self.status()
    }

    pub fn transform(&self, matrix: &Matrix) -> Result<(), Error> {
        unsafe { ffi::cairo_transform(self.cr, matrix.ptr()) };
        self.status()
    }

    pub fn set_matrix(&self, matrix: &Matrix) -> Result<(), Error> {
        unsafe { ffi::cairo_set_matrix(self.cr, matrix.ptr()) };
        self.status()
    }

    pub fn matrix(&self) -> Matrix {
        let mut matrix = ffi::cairo_matrix_t::default();
        unsafe { ffi::cairo_get_matrix(self.cr, &mut matrix) };
        Matrix::from_ffi(matrix)
    }

    pub fn identity_matrix(&self) -> Result<(), Error> {
        unsafe { ffi::cairo_identity_matrix(self.cr) };
        self.status()
    }

    pub fn user_to_device(&self, x: f64, y: f64) -> (f64, f64) {
        let (mut dx, mut dy) = (x, y);
        unsafe { ffi::cairo_user_to_device(self.cr, &mut dx, &mut dy) };
        (dx, dy)
    }

    pub fn user_to_device_distance(&self, dx: f64, dy: f64) -> (f64, f64) {
        let (mut tx, mut ty) = (dx, dy);
        unsafe { ffi::cairo_user_to_device_distance(self.cr, &mut tx, &mut ty) };
        (tx, ty)
    }

    pub fn device_to_user(&self, x: f64, y: f64) -> (f64, f64) {
        let (mut ux, mut uy) = (x, y);
        unsafe { ffi::cairo_device_to_user(self.cr, &mut ux, &mut uy) };
        (ux, uy)
    }

    pub fn device_to_user_distance(&self, dx: f64, dy: f64) -> (f64, f64) {
        let (mut ux, mut uy) = (dx, dy);
        unsafe { ffi::cairo_device_to_user_distance(self.cr, &mut ux, &mut uy) };
        (ux, uy)
    }

    pub fn new_path(&self) -> Result<(), Error> {
        unsafe { ffi::cairo_new_path(self.cr) };
        self.status()
    }

    pub fn new_sub_path(&self) -> Result<(), Error> {
        unsafe { ffi::cairo_new_sub_path(self.cr) };
        self.status()
    }

    pub fn move_to(&self, x: f64, y: f64) -> Result<(), Error> {
        unsafe { ffi::cairo_move_to(self.cr, x, y) };
        self.status()
    }

    pub fn line_to(&self, x: f64, y: f64) -> Result<(), Error> {
        unsafe { ffi::cairo_line_to(self.cr, x, y) };
        self.status()
    }

    pub fn curve_to(&self, x1: f64, y1: f64, x2: f64, y2: f64, x3: f64, y3: f64) -> Result<(), Error> {
        unsafe { ffi::cairo_curve_to(self.cr, x1, y1, x2, y2, x3, y3) };
        self.status()
    }

    pub fn arc(&self, xc: f64, yc: f64, radius: f64, angle1: f64, angle2: f64) -> Result<(), Error> {
        unsafe { ffi::cairo_arc(self.cr, xc, yc, radius, angle1, angle2) };
        self.status()
    }

    pub fn arc_negative(
        &self,
        xc: f64,
        yc: f64,
        radius: f64,
        angle1: f64,
        angle2: f64,
    ) -> Result<(), Error> {
        unsafe { ffi::cairo_arc_negative(self.cr, xc, yc, radius, angle1, angle2) };
        self.status()
    }

    pub fn rel_move_to(&self, dx: f64, dy: f64) -> Result<(), Error> {
        unsafe { ffi::cairo_rel_move_to(self.cr, dx, dy) };
        self.status()
    }

    pub fn rel_line_to(&self, dx: f64, dy: f64) -> Result<(), Error> {
        unsafe { ffi::cairo_rel_line_to(self.cr, dx, dy) };
        self.status()
    }

    pub fn rel_curve_to(
        &self,
        dx1: f64,
        dy1: f64,
        dx2: f64,
        dy2: f64,
        dx3: f64,
        dy3: f64,
    ) -> Result<(), Error> {
        unsafe { ffi::cairo_rel_curve_to(self.cr, dx1, dy1, dx2, dy2, dx3, dy3) };
        self.status()
    }

    pub fn rectangle(&self, x: f64, y: f64, width: f64, height: f64) -> Result<(), Error> {
        unsafe { ffi::cairo_rectangle(self.cr, x, y, width, height) };
        self.status()
    }

    pub fn close_path(&self) -> Result<(), Error> {
        unsafe { ffi::cairo_close_path(self.cr) };
        self.status()
    }

    pub fn path_extents(&self) -> Result<(f64, f64, f64, f64), Error> {
        let (mut x1, mut y1, mut x2, mut y2) = (0.0, 0.0, 0.0, 0.0);
        unsafe { ffi::cairo_path_extents(self.cr, &mut x1, &mut y1, &mut x2, &mut y2) };
        self.status()?;
        Ok((x1, y1, x2, y2))
    }

    pub fn paint(&self) -> Result<(), Error> {
        unsafe { ffi::cairo_paint(self.cr) };
        self.status()
    }

    pub fn paint_with_alpha(&self, alpha: f64) -> Result<(), Error> {
        unsafe { ffi::cairo_paint_with_alpha(self.cr, alpha) };
        self.status()
    }

    pub fn mask<P: BasePattern>(&self, pattern: &P) -> Result<(), Error> {
        unsafe { ffi::cairo_mask(self.cr, pattern.pattern_ptr()) };
        self.status()
    }

    pub fn mask_surface<S: BaseSurface>(&self, surface: &S, x: f64, y: f64) -> Result<(), Error> {
        unsafe { ffi::cairo_mask_surface(self.cr, surface.surface_ptr(), x, y) };
        self.status()
    }

    pub fn stroke(&self) -> Result<(), Error> {
        unsafe { ffi::cairo_stroke(self.cr) };
        self.status()
    }

    pub fn stroke_preserve(&self) -> Result<(), Error> {
        unsafe { ffi::cairo_stroke_preserve(self.cr) };
        self.status()
    }

    pub fn fill(&self) -> Result<(), Error> {
        unsafe { ffi::cairo_fill(self.cr) };
        self.status()
    }

    pub fn fill_preserve(&self) -> Result<(), Error> {
        unsafe { ffi::cairo_fill_preserve(self.cr) };
        self.status()
    }

    pub fn copy_page(&self) -> Result<(), Error> {
        unsafe { ffi::cairo_copy_page(self.cr) };
        self.status()
    }

    pub fn show_page(&self) -> Result<(), Error> {
        unsafe { ffi::cairo_show_page(self.cr) };
        self.status()
    }

    pub fn in_stroke(&self, x: f64, y: f64) -> bool {
        unsafe { ffi::cairo_in_stroke(self.cr, x, y) != 0 }
    }

    pub fn in_fill(&self, x: f64, y: f64) -> bool {
        unsafe { ffi::cairo_in_fill(self.cr, x, y) != 0 }
    }

    pub fn in_clip(&self, x: f64, y: f64) -> bool {
        unsafe { ffi::cairo_in_clip(self.cr, x, y) != 0 }
    }

    pub fn stroke_extents(&self) -> Result<(f64, f64, f64, f64), Error> {
        let (mut x1, mut y1, mut x2, mut y2) = (0.0, 0.0, 0.0, 0.0);
        unsafe { ffi::cairo_stroke_extents(self.cr, &mut x1, &mut y1, &mut x2, &mut y2) };
        self.status()?;
        Ok((x1, y1, x2, y2))
    }

    pub fn fill_extents(&self) -> Result<(f64, f64, f64, f64), Error> {
        let (mut x1, mut y1, mut x2, mut y2) = (0.0, 0.0, 0.0, 0.0);
        unsafe { ffi::cairo_fill_extents(self.cr, &mut x1, &mut y1, &mut x2, &mut y2) };
        self.status()?;
        Ok((x1, y1, x2, y2))
    }

    pub fn clip(&self) -> Result<(), Error> {
        unsafe { ffi::cairo_clip(self.cr) };
        self.status()
    }

    pub fn clip_preserve(&self) -> Result<(), Error> {
        unsafe { ffi::cairo_clip_preserve(self.cr) };
        self.status()
    }

    pub fn reset_clip(&self) -> Result<(), Error> {
        unsafe { ffi::cairo_reset_clip(self.cr) };
        self.status()
    }

    pub fn clip_extents(&self) -> Result<(f64, f64, f64, f64), Error> {
        let (mut x1, mut y1, mut x2, mut y2) = (0.0, 0.0, 0.0, 0.0);
        unsafe { ffi::cairo_clip_extents(self.cr, &mut x1, &mut y1, &mut x2, &mut y2) };
        self.status()?;
        Ok((x1, y1, x2, y2))
    }

    pub fn copy_path(&self) -> Result<Handle<Path>, Error> {
        let path = Path::new(unsafe { ffi::cairo_copy_path(self.cr) });
        path.status()?;
        Ok(Handle::new(path))
    }

    pub fn copy_path_flat(&self) -> Result<Handle<Path>, Error> {
        let path = Path::new(unsafe { ffi::cairo_copy_path_flat(self.cr) });
        path.status()?;
        Ok(Handle::new(path))
    }

    pub fn append_path(&self, path: &Path) -> Result<(), Error> {
        unsafe { ffi::cairo_append_path(self.cr, path.ptr()) };
        self.status()
    }

    pub fn has_current_point(&self) -> bool {
        unsafe { ffi::cairo_has_current_point(self.cr) != 0 }
    }

    pub fn current_point(&self) -> Result<(f64, f64), Error> {
        let (mut x, mut y) = (0.0, 0.0);
        unsafe { ffi::cairo_get_current_point(self.cr, &mut x, &mut y) };
        self.status()?;
        Ok((x, y))
    }

    pub fn target(&self) -> Result<Handle<Surface>, Error> {
        let surface = Surface::new_inc(unsafe { ffi::cairo_get_target(self.cr) });
        self.status()?;
        Ok(Handle::new(surface))
    }

    pub fn group_target(&self) -> Result<Handle<Surface>, Error> {
        let surface = Surface::new_inc(unsafe { ffi::cairo_get_group_target(self.cr) });
        self.status()?;
        Ok(Handle::new(surface))
    }

    pub fn select_font_face(
        &self,
        family: &str,
        slant: FontSlant,
        weight: FontWeight,
    ) -> Result<(), Error> {
        let cfamily = CString::new(family)?;
        unsafe {
            ffi::cairo_select_font_face(self.cr, cfamily.as_ptr(), slant.to_ffi(), weight.to_ffi());
        }
        self.status()
    }

    pub fn set_font_size(&self, size: f64) -> Result<(), Error> {
        unsafe { ffi::cairo_set_font_size(self.cr, size) };
        self.status()
    }

    pub fn set_font_matrix(&self, matrix: &Matrix) -> Result<(), Error> {
        unsafe { ffi::cairo_set_font_matrix(self.cr, matrix.ptr()) };
        self.status()
    }

    pub fn font_matrix(&self) -> Matrix {
        let mut matrix = ffi::cairo_matrix_t::default();
        unsafe { ffi::cairo_get_font_matrix(self.cr, &mut matrix) };
        Matrix::from_ffi(matrix)
    }

    pub fn set_font_options(&self, options: &FontOptions) -> Result<(), Error> {
        unsafe { ffi::cairo_set_font_options(self.cr, options.ptr()) };
        self.status()
    }

    pub fn font_options(&self) -> Result<FontOptions, Error> {
        let options = FontOptions::create()?;
        unsafe { ffi::cairo_get_font_options(self.cr, options.ptr()) };
        options.status()?;
        Ok(options)
    }

    pub fn set_font_face<F: BaseFontFace>(&self, font_face: &F) -> Result<(), Error> {
        unsafe { ffi::cairo_set_font_face(self.cr, font_face.font_face_ptr()) };
        self.status()
    }

    pub fn font_face(&self) -> Result<Handle<FontFace>, Error> {
        let face = FontFace::new_inc(unsafe { ffi::cairo_get_font_face(self.cr) });
        self.status()?;
        Ok(Handle::new(face))
    }

    pub fn set_scaled_font(&self, scaled_font: &ScaledFont) -> Result<(), Error> {
        unsafe { ffi::cairo_set_scaled_font(self.cr, scaled_font.ptr()) };
        self.status()
    }

    pub fn scaled_font(&self) -> Result<Handle<ScaledFont>, Error> {
        let font = ScaledFont::new_inc(unsafe { ffi::cairo_get_scaled_font(self.cr) });
        self.status()?;
        Ok(Handle::new(font))
    }

    pub fn show_text(&self, text: &str) -> Result<(), Error> {
        let ctext = CString::new(text)?;
        unsafe { ffi::cairo_show_text(self.cr, ctext.as_ptr()) };
        self.status()
    }

    pub fn show_glyphs(&self, glyphs: &[Glyph]) -> Result<(), Error> {
        unsafe { ffi::cairo_show_glyphs(self.cr, glyphs.as_ptr(), glyphs.len() as i32) };
        self.status()
    }

    pub fn show_text_glyphs(
        &self,
        text: &str,
        glyphs: &[Glyph],
        clusters: &[TextCluster],
        backward: bool,
    ) -> Result<(), Error> {
        let flags = if backward {
            ffi::CAIRO_TEXT_CLUSTER_FLAG_BACKWARD
        } else {
            0
        };
        unsafe {
            ffi::cairo_show_text_glyphs(
                self.cr,
                text.as_ptr().cast(),
                text.len() as i32,
                glyphs.as_ptr(),
                glyphs.len() as i32,
                clusters.as_ptr(),
                clusters.len() as i32,
                flags,
            );
        }
        self.status()
    }

    pub fn text_path(&self, text: &str) -> Result<(), Error> {
        let ctext = CString::new(text)?;
        unsafe { ffi::cairo_text_path(self.cr, ctext.as_ptr()) };
        self.status()
    }

    pub fn glyph_path(&self, glyphs: &[Glyph]) -> Result<(), Error> {
        unsafe { ffi::cairo_glyph_path(self.cr, glyphs.as_ptr(), glyphs.len() as i32) };
        self.status()
    }

    pub fn text_extents(&self, text: &str) -> Result<TextExtents, Error> {
        let ctext = CString::new(text)?;
        let mut extents = TextExtents::default();
        unsafe { ffi::cairo_text_extents(self.cr, ctext.as_ptr(), &mut extents) };
        self.status()?;
        Ok(extents)
    }

    pub fn glyph_extents(&self, glyphs: &[Glyph]) -> Result<TextExtents, Error> {
        let mut extents = TextExtents::default();
        unsafe {
            ffi::cairo_glyph_extents(self.cr, glyphs.as_ptr(), glyphs.len() as i32, &mut extents);
        }
        self.status()?;
        Ok(extents)
    }

    pub fn font_extents(&self) -> Result<FontExtents, Error> {
        let mut extents = FontExtents::default();
        unsafe { ffi::cairo_font_extents(self.cr, &mut extents) };
        self.status()?;
        Ok(extents)
    }
}

impl Drop for Context {
    fn drop(&mut self) {
        unsafe { ffi::cairo_destroy(self.cr) }
    }
}
