// SPDX-License-Identifier: GPL-3.0-or-later
use crate::{
    enums::{Extend, Filter, PatternType},
    error::{check, Error},
    ffi,
    handle::{CastDynamic, CastStatic, Handle},
    matrix::Matrix,
    surface::{BaseSurface, Surface},
};
use std::ptr;

// Base interface shared by all pattern wrappers.

pub trait BasePattern {
    fn pattern_ptr(&self) -> *mut ffi::cairo_pattern_t;

    fn status(&self) -> Result<(), Error> {
        check(unsafe { ffi::cairo_pattern_status(self.pattern_ptr()) })
    }

    fn pattern_type(&self) -> PatternType {
        PatternType::from_ffi(unsafe { ffi::cairo_pattern_get_type(self.pattern_ptr()) })
    }

    fn set_matrix(&self, matrix: &Matrix) -> Result<(), Error> {
        unsafe { ffi::cairo_pattern_set_matrix(self.pattern_ptr(), matrix.ptr()) };
        self.status()
    }

    fn matrix(&self) -> Matrix {
        let mut matrix = ffi::cairo_matrix_t::default();
        unsafe { ffi::cairo_pattern_get_matrix(self.pattern_ptr(), &mut matrix) };
        Matrix::from_ffi(matrix)
    }

    fn set_extend(&self, extend: Extend) -> Result<(), Error> {
        unsafe { ffi::cairo_pattern_set_extend(self.pattern_ptr(), extend.to_ffi()) };
        self.status()
    }

    fn extend(&self) -> Extend {
        Extend::from_ffi(unsafe { ffi::cairo_pattern_get_extend(self.pattern_ptr()) })
    }

    fn set_filter(&self, filter: Filter) -> Result<(), Error> {
        unsafe { ffi::cairo_pattern_set_filter(self.pattern_ptr(), filter.to_ffi()) };
        self.status()
    }

    fn filter(&self) -> Filter {
        Filter::from_ffi(unsafe { ffi::cairo_pattern_get_filter(self.pattern_ptr()) })
    }
}

// Gradient interface shared by the linear and radial wrappers.

pub trait BaseGradient: BasePattern {
    fn add_color_stop_rgb(&self, offset: f64, red: f64, green: f64, blue: f64) -> Result<(), Error> {
        unsafe {
            ffi::cairo_pattern_add_color_stop_rgb(self.pattern_ptr(), offset, red, green, blue);
        }
        self.status()
    }

    fn add_color_stop_rgba(
        &self,
        offset: f64,
        red: f64,
        green: f64,
        blue: f64,
        alpha: f64,
    ) -> Result<(), Error> {
        unsafe {
            ffi::cairo_pattern_add_color_stop_rgba(
                self.pattern_ptr(),
                offset,
                red,
                green,
                blue,
                alpha,
            );
        }
        self.status()
    }

    fn color_stop_count(&self) -> Result<i32, Error> {
        let mut count = 0;
        check(unsafe { ffi::cairo_pattern_get_color_stop_count(self.pattern_ptr(), &mut count) })?;
        Ok(count)
    }

    /// The nth stop as (offset, red, green, blue, alpha).
    fn color_stop_rgba(&self, index: i32) -> Result<(f64, f64, f64, f64, f64), Error> {
        let (mut offset, mut red, mut green, mut blue, mut alpha) = (0.0, 0.0, 0.0, 0.0, 0.0);
        check(unsafe {
            ffi::cairo_pattern_get_color_stop_rgba(
                self.pattern_ptr(),
                index,
                &mut offset,
                &mut red,
                &mut green,
                &mut blue,
                &mut alpha,
            )
        })?;
        Ok((offset, red, green, blue, alpha))
    }
}

/// A pattern of any engine-side type; the root of the pattern hierarchy.
#[repr(transparent)]
pub struct Pattern {
    ptr: *mut ffi::cairo_pattern_t,
}

impl Pattern {
    pub(crate) fn new_noinc(ptr: *mut ffi::cairo_pattern_t) -> Pattern {
        Pattern { ptr }
    }

    pub(crate) fn new_inc(ptr: *mut ffi::cairo_pattern_t) -> Pattern {
        Pattern {
            ptr: unsafe { ffi::cairo_pattern_reference(ptr) },
        }
    }
}

impl BasePattern for Pattern {
    fn pattern_ptr(&self) -> *mut ffi::cairo_pattern_t {
        self.ptr
    }
}

impl Drop for Pattern {
    fn drop(&mut self) {
        unsafe { ffi::cairo_pattern_destroy(self.ptr) }
    }
}

#[repr(transparent)]
pub struct SolidPattern(Pattern);

impl SolidPattern {
    pub fn create_rgb(red: f64, green: f64, blue: f64) -> Result<Handle<SolidPattern>, Error> {
        let pattern = SolidPattern(Pattern::new_noinc(unsafe {
            ffi::cairo_pattern_create_rgb(red, green, blue)
        }));
        pattern.status()?;
        Ok(Handle::new(pattern))
    }

    pub fn create_rgba(
        red: f64,
        green: f64,
        blue: f64,
        alpha: f64,
    ) -> Result<Handle<SolidPattern>, Error> {
        let pattern = SolidPattern(Pattern::new_noinc(unsafe {
            ffi::cairo_pattern_create_rgba(red, green, blue, alpha)
        }));
        pattern.status()?;
        Ok(Handle::new(pattern))
    }

    pub fn rgba(&self) -> Result<(f64, f64, f64, f64), Error> {
        let (mut red, mut green, mut blue, mut alpha) = (0.0, 0.0, 0.0, 0.0);
        check(unsafe {
            ffi::cairo_pattern_get_rgba(
                self.pattern_ptr(),
                &mut red,
                &mut green,
                &mut blue,
                &mut alpha,
            )
        })?;
        Ok((red, green, blue, alpha))
    }
}

impl BasePattern for SolidPattern {
    fn pattern_ptr(&self) -> *mut ffi::cairo_pattern_t {
        self.0.ptr
    }
}

#[repr(transparent)]
pub struct SurfacePattern(Pattern);

impl SurfacePattern {
    pub fn create<S: BaseSurface>(surface: &S) -> Result<Handle<SurfacePattern>, Error> {
        let pattern = SurfacePattern(Pattern::new_noinc(unsafe {
            ffi::cairo_pattern_create_for_surface(surface.surface_ptr())
        }));
        pattern.status()?;
        Ok(Handle::new(pattern))
    }

    pub fn surface(&self) -> Result<Handle<Surface>, Error> {
        let mut surface = ptr::null_mut();
        check(unsafe { ffi::cairo_pattern_get_surface(self.pattern_ptr(), &mut surface) })?;
        Ok(Handle::new(Surface::new_inc(surface)))
    }
}

impl BasePattern for SurfacePattern {
    fn pattern_ptr(&self) -> *mut ffi::cairo_pattern_t {
        self.0.ptr
    }
}

#[repr(transparent)]
pub struct LinearGradient(Pattern);

impl LinearGradient {
    pub fn create(x0: f64, y0: f64, x1: f64, y1: f64) -> Result<Handle<LinearGradient>, Error> {
        let pattern = LinearGradient(Pattern::new_noinc(unsafe {
            ffi::cairo_pattern_create_linear(x0, y0, x1, y1)
        }));
        pattern.status()?;
        Ok(Handle::new(pattern))
    }

    /// Endpoints as (x0, y0, x1, y1).
    pub fn points(&self) -> Result<(f64, f64, f64, f64), Error> {
        let (mut x0, mut y0, mut x1, mut y1) = (0.0, 0.0, 0.0, 0.0);
        check(unsafe {
            ffi::cairo_pattern_get_linear_points(
                self.pattern_ptr(),
                &mut x0,
                &mut y0,
                &mut x1,
                &mut y1,
            )
        })?;
        Ok((x0, y0, x1, y1))
    }
}

impl BasePattern for LinearGradient {
    fn pattern_ptr(&self) -> *mut ffi::cairo_pattern_t {
        self.0.ptr
    }
}

impl BaseGradient for LinearGradient {}

#[repr(transparent)]
pub struct RadialGradient(Pattern);

impl RadialGradient {
    pub fn create(
        cx0: f64,
        cy0: f64,
        radius0: f64,
        cx1: f64,
        cy1: f64,
        radius1: f64,
    ) -> Result<Handle<RadialGradient>, Error> {
        let pattern = RadialGradient(Pattern::new_noinc(unsafe {
            ffi::cairo_pattern_create_radial(cx0, cy0, radius0, cx1, cy1, radius1)
        }));
        pattern.status()?;
        Ok(Handle::new(pattern))
    }

    /// Both circles as (x0, y0, r0, x1, y1, r1).
    pub fn circles(&self) -> Result<(f64, f64, f64, f64, f64, f64), Error> {
        let (mut x0, mut y0, mut r0, mut x1, mut y1, mut r1) = (0.0, 0.0, 0.0, 0.0, 0.0, 0.0);
        check(unsafe {
            ffi::cairo_pattern_get_radial_circles(
                self.pattern_ptr(),
                &mut x0,
                &mut y0,
                &mut r0,
                &mut x1,
                &mut y1,
                &mut r1,
            )
        })?;
        Ok((x0, y0, r0, x1, y1, r1))
    }
}

impl BasePattern for RadialGradient {
    fn pattern_ptr(&self) -> *mut ffi::cairo_pattern_t {
        self.0.ptr
    }
}

impl BaseGradient for RadialGradient {}

unsafe impl CastStatic<Pattern> for SolidPattern {}
unsafe impl CastStatic<Pattern> for SurfacePattern {}
unsafe impl CastStatic<Pattern> for LinearGradient {}
unsafe impl CastStatic<Pattern> for RadialGradient {}

unsafe impl CastDynamic<SolidPattern> for Pattern {
    fn compatible(&self) -> bool {
        self.pattern_type() == PatternType::Solid
    }
}

unsafe impl CastDynamic<SurfacePattern> for Pattern {
    fn compatible(&self) -> bool {
        self.pattern_type() == PatternType::Surface
    }
}

unsafe impl CastDynamic<LinearGradient> for Pattern {
    fn compatible(&self) -> bool {
        self.pattern_type() == PatternType::Linear
    }
}

unsafe impl CastDynamic<RadialGradient> for Pattern {
    fn compatible(&self) -> bool {
        self.pattern_type() == PatternType::Radial
    }
}
