// SPDX-License-Identifier: GPL-3.0-or-later
use crate::{
    enums::RegionOverlap,
    error::{check, Error},
    ffi,
    handle::Handle,
    types::RectangleInt,
};

/// A set of integer rectangles, with the engine's boolean set operations.
pub struct Region {
    ptr: *mut ffi::cairo_region_t,
}

impl Region {
    pub fn create() -> Result<Handle<Region>, Error> {
        Region::wrap(unsafe { ffi::cairo_region_create() })
    }

    pub fn create_rectangle(rectangle: &RectangleInt) -> Result<Handle<Region>, Error> {
        Region::wrap(unsafe { ffi::cairo_region_create_rectangle(rectangle) })
    }

    pub fn create_rectangles(rectangles: &[RectangleInt]) -> Result<Handle<Region>, Error> {
        Region::wrap(unsafe {
            ffi::cairo_region_create_rectangles(rectangles.as_ptr(), rectangles.len() as i32)
        })
    }

    pub fn copy(&self) -> Result<Handle<Region>, Error> {
        Region::wrap(unsafe { ffi::cairo_region_copy(self.ptr) })
    }

    fn wrap(ptr: *mut ffi::cairo_region_t) -> Result<Handle<Region>, Error> {
        let region = Region { ptr };
        region.status()?;
        Ok(Handle::new(region))
    }

    pub fn status(&self) -> Result<(), Error> {
        check(unsafe { ffi::cairo_region_status(self.ptr) })
    }

    pub fn extents(&self) -> RectangleInt {
        let mut extents = RectangleInt::default();
        unsafe { ffi::cairo_region_get_extents(self.ptr, &mut extents) };
        extents
    }

    pub fn num_rectangles(&self) -> i32 {
        unsafe { ffi::cairo_region_num_rectangles(self.ptr) }
    }

    pub fn rectangle(&self, nth: i32) -> RectangleInt {
        let mut rectangle = RectangleInt::default();
        unsafe { ffi::cairo_region_get_rectangle(self.ptr, nth, &mut rectangle) };
        rectangle
    }

    pub fn is_empty(&self) -> bool {
        unsafe { ffi::cairo_region_is_empty(self.ptr) != 0 }
    }

    pub fn contains_point(&self, x: i32, y: i32) -> bool {
        unsafe { ffi::cairo_region_contains_point(self.ptr, x, y) != 0 }
    }

    pub fn contains_rectangle(&self, rectangle: &RectangleInt) -> RegionOverlap {
        RegionOverlap::from_ffi(unsafe {
            ffi::cairo_region_contains_rectangle(self.ptr, rectangle)
        })
    }

    pub fn translate(&self, dx: i32, dy: i32) {
        unsafe { ffi::cairo_region_translate(self.ptr, dx, dy) };
    }

    pub fn subtract(&self, other: &Region) -> Result<(), Error> {
        check(unsafe { ffi::cairo_region_subtract(self.ptr, other.ptr) })
    }

    pub fn subtract_rectangle(&self, rectangle: &RectangleInt) -> Result<(), Error> {
        check(unsafe { ffi::cairo_region_subtract_rectangle(self.ptr, rectangle) })
    }

    pub fn intersect(&self, other: &Region) -> Result<(), Error> {
        check(unsafe { ffi::cairo_region_intersect(self.ptr, other.ptr) })
    }

    pub fn intersect_rectangle(&self, rectangle: &RectangleInt) -> Result<(), Error> {
        check(unsafe { ffi::cairo_region_intersect_rectangle(self.ptr, rectangle) })
    }

    pub fn union(&self, other: &Region) -> Result<(), Error> {
        check(unsafe { ffi::cairo_region_union(self.ptr, other.ptr) })
    }

    pub fn union_rectangle(&self, rectangle: &RectangleInt) -> Result<(), Error> {
        check(unsafe { ffi::cairo_region_union_rectangle(self.ptr, rectangle) })
    }

    pub fn xor(&self, other: &Region) -> Result<(), Error> {
        check(unsafe { ffi::cairo_region_xor(self.ptr, other.ptr) })
    }

    pub fn xor_rectangle(&self, rectangle: &RectangleInt) -> Result<(), Error> {
        check(unsafe { ffi::cairo_region_xor_rectangle(self.ptr, rectangle) })
    }
}

impl PartialEq for Region {
    fn eq(&self, other: &Region) -> bool {
        unsafe { ffi::cairo_region_equal(self.ptr, other.ptr) != 0 }
    }
}

impl Eq for Region {}

impl Drop for Region {
    fn drop(&mut self) {
        unsafe { ffi::cairo_region_destroy(self.ptr) }
    }
}
