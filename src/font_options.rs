// SPDX-License-Identifier: GPL-3.0-or-later
use crate::{
    enums::{Antialias, HintMetrics, HintStyle, SubpixelOrder},
    error::{check, Error},
    ffi,
};
use std::hash::{Hash, Hasher};

/// Font rendering options. A value type: cloning copies the underlying
/// engine object instead of sharing it.
pub struct FontOptions {
    ptr: *mut ffi::cairo_font_options_t,
}

impl FontOptions {
    pub fn create() -> Result<FontOptions, Error> {
        let options = FontOptions {
            ptr: unsafe { ffi::cairo_font_options_create() },
        };
        options.status()?;
        Ok(options)
    }

    pub(crate) fn ptr(&self) -> *mut ffi::cairo_font_options_t {
        self.ptr
    }

    pub fn status(&self) -> Result<(), Error> {
        check(unsafe { ffi::cairo_font_options_status(self.ptr) })
    }

    pub fn merge(&mut self, other: &FontOptions) -> Result<(), Error> {
        unsafe { ffi::cairo_font_options_merge(self.ptr, other.ptr) };
        self.status()
    }

    pub fn set_antialias(&mut self, antialias: Antialias) -> Result<(), Error> {
        unsafe { ffi::cairo_font_options_set_antialias(self.ptr, antialias.to_ffi()) };
        self.status()
    }

    pub fn antialias(&self) -> Antialias {
        Antialias::from_ffi(unsafe { ffi::cairo_font_options_get_antialias(self.ptr) })
    }

    pub fn set_subpixel_order(&mut self, order: SubpixelOrder) -> Result<(), Error> {
        unsafe { ffi::cairo_font_options_set_subpixel_order(self.ptr, order.to_ffi()) };
        self.status()
    }

    pub fn subpixel_order(&self) -> SubpixelOrder {
        SubpixelOrder::from_ffi(unsafe { ffi::cairo_font_options_get_subpixel_order(self.ptr) })
    }

    pub fn set_hint_style(&mut self, style: HintStyle) -> Result<(), Error> {
        unsafe { ffi::cairo_font_options_set_hint_style(self.ptr, style.to_ffi()) };
        self.status()
    }

    pub fn hint_style(&self) -> HintStyle {
        HintStyle::from_ffi(unsafe { ffi::cairo_font_options_get_hint_style(self.ptr) })
    }

    pub fn set_hint_metrics(&mut self, metrics: HintMetrics) -> Result<(), Error> {
        unsafe { ffi::cairo_font_options_set_hint_metrics(self.ptr, metrics.to_ffi()) };
        self.status()
    }

    pub fn hint_metrics(&self) -> HintMetrics {
        HintMetrics::from_ffi(unsafe { ffi::cairo_font_options_get_hint_metrics(self.ptr) })
    }
}

impl Clone for FontOptions {
    fn clone(&self) -> FontOptions {
        FontOptions {
            ptr: unsafe { ffi::cairo_font_options_copy(self.ptr) },
        }
    }
}

impl PartialEq for FontOptions {
    fn eq(&self, other: &FontOptions) -> bool {
        unsafe { ffi::cairo_font_options_equal(self.ptr, other.ptr) != 0 }
    }
}

impl Eq for FontOptions {}

impl Hash for FontOptions {
    fn hash<H: Hasher>(&self, state: &mut H) {
        state.write_u64(unsafe { ffi::cairo_font_options_hash(self.ptr) } as u64);
    }
}

impl Drop for FontOptions {
    fn drop(&mut self) {
        unsafe { ffi::cairo_font_options_destroy(self.ptr) }
    }
}
