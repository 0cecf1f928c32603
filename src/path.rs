// SPDX-License-Identifier: GPL-3.0-or-later
use crate::{
    error::{check, Error},
    ffi,
};

/// An immutable copy of a context's current path, owned by the wrapper and
/// released exactly once.
pub struct Path {
    ptr: *mut ffi::cairo_path_t,
}

impl Path {
    pub(crate) fn new(ptr: *mut ffi::cairo_path_t) -> Path {
        Path { ptr }
    }

    pub(crate) fn ptr(&self) -> *const ffi::cairo_path_t {
        self.ptr
    }

    pub fn status(&self) -> Result<(), Error> {
        check(unsafe { (*self.ptr).status })
    }

    pub fn is_empty(&self) -> bool {
        unsafe { (*self.ptr).num_data == 0 }
    }
}

impl Drop for Path {
    fn drop(&mut self) {
        unsafe { ffi::cairo_path_destroy(self.ptr) }
    }
}
