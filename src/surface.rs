// SPDX-License-Identifier: GPL-3.0-or-later
use crate::{
    device::Device,
    enums::{Content, Format, SurfaceType},
    error::{check, Error, Status},
    ffi,
    font_options::FontOptions,
    handle::{CastDynamic, CastStatic, Handle},
    types::Rectangle,
};
use std::{ffi::CString, ptr};

// Base interface shared by all surface wrappers.

pub trait BaseSurface {
    fn surface_ptr(&self) -> *mut ffi::cairo_surface_t;

    fn status(&self) -> Result<(), Error> {
        check(unsafe { ffi::cairo_surface_status(self.surface_ptr()) })
    }

    fn surface_type(&self) -> SurfaceType {
        SurfaceType::from_ffi(unsafe { ffi::cairo_surface_get_type(self.surface_ptr()) })
    }

    fn content(&self) -> Content {
        Content::from_ffi(unsafe { ffi::cairo_surface_get_content(self.surface_ptr()) })
    }

    fn flush(&self) -> Result<(), Error> {
        unsafe { ffi::cairo_surface_flush(self.surface_ptr()) };
        self.status()
    }

    fn finish(&self) -> Result<(), Error> {
        unsafe { ffi::cairo_surface_finish(self.surface_ptr()) };
        self.status()
    }

    fn mark_dirty(&self) -> Result<(), Error> {
        unsafe { ffi::cairo_surface_mark_dirty(self.surface_ptr()) };
        self.status()
    }

    fn mark_dirty_rectangle(&self, x: i32, y: i32, width: i32, height: i32) -> Result<(), Error> {
        unsafe { ffi::cairo_surface_mark_dirty_rectangle(self.surface_ptr(), x, y, width, height) };
        self.status()
    }

    fn set_device_offset(&self, x_offset: f64, y_offset: f64) -> Result<(), Error> {
        unsafe { ffi::cairo_surface_set_device_offset(self.surface_ptr(), x_offset, y_offset) };
        self.status()
    }

    fn device_offset(&self) -> (f64, f64) {
        let (mut x, mut y) = (0.0, 0.0);
        unsafe { ffi::cairo_surface_get_device_offset(self.surface_ptr(), &mut x, &mut y) };
        (x, y)
    }

    fn set_fallback_resolution(&self, x_ppi: f64, y_ppi: f64) -> Result<(), Error> {
        unsafe { ffi::cairo_surface_set_fallback_resolution(self.surface_ptr(), x_ppi, y_ppi) };
        self.status()
    }

    fn fallback_resolution(&self) -> (f64, f64) {
        let (mut x, mut y) = (0.0, 0.0);
        unsafe { ffi::cairo_surface_get_fallback_resolution(self.surface_ptr(), &mut x, &mut y) };
        (x, y)
    }

    fn font_options(&self) -> Result<FontOptions, Error> {
        let options = FontOptions::create()?;
        unsafe { ffi::cairo_surface_get_font_options(self.surface_ptr(), options.ptr()) };
        options.status()?;
        Ok(options)
    }

    fn device(&self) -> Option<Handle<Device>> {
        let device = unsafe { ffi::cairo_surface_get_device(self.surface_ptr()) };
        if device.is_null() {
            None
        } else {
            Some(Handle::new(Device::new_inc(device)))
        }
    }

    fn create_similar(
        &self,
        content: Content,
        width: i32,
        height: i32,
    ) -> Result<Handle<Surface>, Error> {
        let similar = Surface::new_noinc(unsafe {
            ffi::cairo_surface_create_similar(self.surface_ptr(), content.to_ffi(), width, height)
        });
        similar.status()?;
        Ok(Handle::new(similar))
    }

    /// Writes the surface contents through the engine's PNG writer.
    fn write_to_png(&self, path: &str) -> Result<(), Error> {
        let cpath = CString::new(path)?;
        check(unsafe { ffi::cairo_surface_write_to_png(self.surface_ptr(), cpath.as_ptr()) })
    }
}

/// A surface of any engine-side type; the root of the surface hierarchy.
#[repr(transparent)]
pub struct Surface {
    ptr: *mut ffi::cairo_surface_t,
}

impl Surface {
    pub(crate) fn new_noinc(ptr: *mut ffi::cairo_surface_t) -> Surface {
        Surface { ptr }
    }

    pub(crate) fn new_inc(ptr: *mut ffi::cairo_surface_t) -> Surface {
        Surface {
            ptr: unsafe { ffi::cairo_surface_reference(ptr) },
        }
    }
}

impl BaseSurface for Surface {
    fn surface_ptr(&self) -> *mut ffi::cairo_surface_t {
        self.ptr
    }
}

impl Drop for Surface {
    fn drop(&mut self) {
        unsafe { ffi::cairo_surface_destroy(self.ptr) }
    }
}

#[repr(transparent)]
pub struct ImageSurface(Surface);

impl ImageSurface {
    pub fn create(format: Format, width: i32, height: i32) -> Result<Handle<ImageSurface>, Error> {
        let surface = ImageSurface(Surface::new_noinc(unsafe {
            ffi::cairo_image_surface_create(format.to_ffi(), width, height)
        }));
        surface.status()?;
        Ok(Handle::new(surface))
    }

    pub fn format(&self) -> Format {
        Format::from_ffi(unsafe { ffi::cairo_image_surface_get_format(self.surface_ptr()) })
    }

    pub fn width(&self) -> i32 {
        unsafe { ffi::cairo_image_surface_get_width(self.surface_ptr()) }
    }

    pub fn height(&self) -> i32 {
        unsafe { ffi::cairo_image_surface_get_height(self.surface_ptr()) }
    }

    pub fn stride(&self) -> i32 {
        unsafe { ffi::cairo_image_surface_get_stride(self.surface_ptr()) }
    }

    /// Raw pixel storage; call [`BaseSurface::flush`] before reading and
    /// [`BaseSurface::mark_dirty`] after writing.
    pub fn data(&self) -> *mut u8 {
        unsafe { ffi::cairo_image_surface_get_data(self.surface_ptr()) }
    }

    pub fn stride_for_width(format: Format, width: i32) -> Result<i32, Error> {
        let stride = unsafe { ffi::cairo_format_stride_for_width(format.to_ffi(), width) };
        if stride < 0 {
            Err(Error::new(Status::InvalidStride))
        } else {
            Ok(stride)
        }
    }
}

impl BaseSurface for ImageSurface {
    fn surface_ptr(&self) -> *mut ffi::cairo_surface_t {
        self.0.ptr
    }
}

unsafe impl CastStatic<Surface> for ImageSurface {}

unsafe impl CastDynamic<ImageSurface> for Surface {
    fn compatible(&self) -> bool {
        self.surface_type() == SurfaceType::Image
    }
}

#[repr(transparent)]
pub struct RecordingSurface(Surface);

impl RecordingSurface {
    pub fn create(
        content: Content,
        extents: Option<&Rectangle>,
    ) -> Result<Handle<RecordingSurface>, Error> {
        let extents_ptr = extents.map_or(ptr::null(), |r| r as *const Rectangle);
        let surface = RecordingSurface(Surface::new_noinc(unsafe {
            ffi::cairo_recording_surface_create(content.to_ffi(), extents_ptr)
        }));
        surface.status()?;
        Ok(Handle::new(surface))
    }

    /// Bounding box of everything recorded so far, as (x, y, width, height).
    pub fn ink_extents(&self) -> (f64, f64, f64, f64) {
        let (mut x, mut y, mut width, mut height) = (0.0, 0.0, 0.0, 0.0);
        unsafe {
            ffi::cairo_recording_surface_ink_extents(
                self.surface_ptr(),
                &mut x,
                &mut y,
                &mut width,
                &mut height,
            );
        }
        (x, y, width, height)
    }

    pub fn extents(&self) -> Option<Rectangle> {
        let mut extents = Rectangle::default();
        let bounded =
            unsafe { ffi::cairo_recording_surface_get_extents(self.surface_ptr(), &mut extents) };
        if bounded != 0 {
            Some(extents)
        } else {
            None
        }
    }
}

impl BaseSurface for RecordingSurface {
    fn surface_ptr(&self) -> *mut ffi::cairo_surface_t {
        self.0.ptr
    }
}

unsafe impl CastStatic<Surface> for RecordingSurface {}

unsafe impl CastDynamic<RecordingSurface> for Surface {
    fn compatible(&self) -> bool {
        self.surface_type() == SurfaceType::Recording
    }
}
