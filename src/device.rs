// SPDX-License-Identifier: GPL-3.0-or-later
use crate::{
    error::{check, Error},
    ffi,
};

/// The rendering device behind a surface, where the engine exposes one.
pub struct Device {
    ptr: *mut ffi::cairo_device_t,
}

impl Device {
    pub(crate) fn new_inc(ptr: *mut ffi::cairo_device_t) -> Device {
        Device {
            ptr: unsafe { ffi::cairo_device_reference(ptr) },
        }
    }

    pub fn status(&self) -> Result<(), Error> {
        check(unsafe { ffi::cairo_device_status(self.ptr) })
    }

    pub fn flush(&self) -> Result<(), Error> {
        unsafe { ffi::cairo_device_flush(self.ptr) };
        self.status()
    }

    pub fn finish(&self) -> Result<(), Error> {
        unsafe { ffi::cairo_device_finish(self.ptr) };
        self.status()
    }

    pub fn acquire(&self) -> Result<(), Error> {
        check(unsafe { ffi::cairo_device_acquire(self.ptr) })
    }

    pub fn release(&self) {
        unsafe { ffi::cairo_device_release(self.ptr) };
    }
}

impl Drop for Device {
    fn drop(&mut self) {
        unsafe { ffi::cairo_device_destroy(self.ptr) }
    }
}
