// SPDX-License-Identifier: GPL-3.0-or-later
use crate::{
    error::{check, Error},
    ffi,
};

/// An affine transformation, kept bit-compatible with the engine's matrix
/// struct so it can be passed through by pointer.
#[derive(Debug, Clone, Copy, PartialEq)]
#[repr(transparent)]
pub struct Matrix(ffi::cairo_matrix_t);

impl Matrix {
    pub fn new(xx: f64, yx: f64, xy: f64, yy: f64, x0: f64, y0: f64) -> Matrix {
        Matrix(ffi::cairo_matrix_t {
            xx,
            yx,
            xy,
            yy,
            x0,
            y0,
        })
    }

    pub fn identity() -> Matrix {
        Matrix::new(1.0, 0.0, 0.0, 1.0, 0.0, 0.0)
    }

    pub fn translation(tx: f64, ty: f64) -> Matrix {
        let mut matrix = Matrix::identity();
        unsafe { ffi::cairo_matrix_init_translate(matrix.mut_ptr(), tx, ty) };
        matrix
    }

    pub fn scaling(sx: f64, sy: f64) -> Matrix {
        let mut matrix = Matrix::identity();
        unsafe { ffi::cairo_matrix_init_scale(matrix.mut_ptr(), sx, sy) };
        matrix
    }

    pub fn rotation(radians: f64) -> Matrix {
        let mut matrix = Matrix::identity();
        unsafe { ffi::cairo_matrix_init_rotate(matrix.mut_ptr(), radians) };
        matrix
    }

    pub(crate) fn ptr(&self) -> *const ffi::cairo_matrix_t {
        &self.0
    }

    pub(crate) fn mut_ptr(&mut self) -> *mut ffi::cairo_matrix_t {
        &mut self.0
    }

    pub(crate) fn from_ffi(matrix: ffi::cairo_matrix_t) -> Matrix {
        Matrix(matrix)
    }

    pub fn translate(&mut self, tx: f64, ty: f64) {
        unsafe { ffi::cairo_matrix_translate(self.mut_ptr(), tx, ty) };
    }

    pub fn scale(&mut self, sx: f64, sy: f64) {
        unsafe { ffi::cairo_matrix_scale(self.mut_ptr(), sx, sy) };
    }

    pub fn rotate(&mut self, radians: f64) {
        unsafe { ffi::cairo_matrix_rotate(self.mut_ptr(), radians) };
    }

    /// Inverts in place; a degenerate matrix is reported, not modified.
    pub fn invert(&mut self) -> Result<(), Error> {
        check(unsafe { ffi::cairo_matrix_invert(self.mut_ptr()) })
    }

    pub fn multiply(a: &Matrix, b: &Matrix) -> Matrix {
        let mut result = Matrix::identity();
        unsafe { ffi::cairo_matrix_multiply(result.mut_ptr(), a.ptr(), b.ptr()) };
        result
    }

    pub fn transform_point(&self, x: f64, y: f64) -> (f64, f64) {
        let (mut tx, mut ty) = (x, y);
        unsafe { ffi::cairo_matrix_transform_point(self.ptr(), &mut tx, &mut ty) };
        (tx, ty)
    }

    pub fn transform_distance(&self, dx: f64, dy: f64) -> (f64, f64) {
        let (mut tdx, mut tdy) = (dx, dy);
        unsafe { ffi::cairo_matrix_transform_distance(self.ptr(), &mut tdx, &mut tdy) };
        (tdx, tdy)
    }

    pub fn xx(&self) -> f64 {
        self.0.xx
    }

    pub fn yx(&self) -> f64 {
        self.0.yx
    }

    pub fn xy(&self) -> f64 {
        self.0.xy
    }

    pub fn yy(&self) -> f64 {
        self.0.yy
    }

    pub fn x0(&self) -> f64 {
        self.0.x0
    }

    pub fn y0(&self) -> f64 {
        self.0.y0
    }
}

impl Default for Matrix {
    fn default() -> Matrix {
        Matrix::identity()
    }
}
