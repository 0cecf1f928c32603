// SPDX-License-Identifier: GPL-3.0-or-later

//! Reference-counted Rust wrappers for the cairo 2D graphics library.
//!
//! Every wrapper owns exactly one reference on its engine object and
//! releases it on drop; sharing goes through [`Handle`]. Calls forward to
//! the engine and surface its status codes as [`Error`]s.

use std::ffi::CStr;

pub mod ffi;

mod context;
mod device;
mod enums;
mod error;
mod font_face;
mod font_options;
mod handle;
mod matrix;
mod path;
mod pattern;
mod region;
mod scaled_font;
mod surface;
mod types;
mod user_font;

pub use crate::{
    context::Context,
    device::Device,
    enums::{
        Antialias, Content, Extend, FillRule, Filter, FontSlant, FontType, FontWeight, Format,
        HintMetrics, HintStyle, LineCap, LineJoin, Operator, PatternType, RegionOverlap,
        SubpixelOrder, SurfaceType,
    },
    error::{Error, Status},
    font_face::{BaseFontFace, FontFace, ToyFontFace},
    font_options::FontOptions,
    handle::{CastDynamic, CastStatic, Handle},
    matrix::Matrix,
    path::Path,
    pattern::{
        BaseGradient, BasePattern, LinearGradient, Pattern, RadialGradient, SolidPattern,
        SurfacePattern,
    },
    region::Region,
    scaled_font::ScaledFont,
    surface::{BaseSurface, ImageSurface, RecordingSurface, Surface},
    types::{FontExtents, Glyph, Rectangle, RectangleInt, TextCluster, TextExtents},
    user_font::UserFontFace,
};

/// The engine's version, encoded as major * 10000 + minor * 100 + micro.
pub fn version() -> i32 {
    unsafe { ffi::cairo_version() }
}

pub fn version_string() -> String {
    unsafe { CStr::from_ptr(ffi::cairo_version_string()) }
        .to_str()
        .unwrap_or_default()
        .to_owned()
}
