// SPDX-License-Identifier: GPL-3.0-or-later

//! Public counterparts of the engine's C enums, converted at the ABI edge.

use crate::ffi;

#[derive(Copy, Clone, Eq, PartialEq, Debug, Default)]
pub enum Format {
    Invalid,
    #[default]
    ARgb32,
    Rgb24,
    A8,
    A1,
    Rgb16_565,
    Rgb30,
}

impl Format {
    pub fn to_ffi(self) -> ffi::cairo_format_t {
        match self {
            Self::Invalid => ffi::CAIRO_FORMAT_INVALID,
            Self::ARgb32 => ffi::CAIRO_FORMAT_ARGB32,
            Self::Rgb24 => ffi::CAIRO_FORMAT_RGB24,
            Self::A8 => ffi::CAIRO_FORMAT_A8,
            Self::A1 => ffi::CAIRO_FORMAT_A1,
            Self::Rgb16_565 => ffi::CAIRO_FORMAT_RGB16_565,
            Self::Rgb30 => ffi::CAIRO_FORMAT_RGB30,
        }
    }

    pub fn from_ffi(format: ffi::cairo_format_t) -> Self {
        match format {
            ffi::CAIRO_FORMAT_ARGB32 => Self::ARgb32,
            ffi::CAIRO_FORMAT_RGB24 => Self::Rgb24,
            ffi::CAIRO_FORMAT_A8 => Self::A8,
            ffi::CAIRO_FORMAT_A1 => Self::A1,
            ffi::CAIRO_FORMAT_RGB16_565 => Self::Rgb16_565,
            ffi::CAIRO_FORMAT_RGB30 => Self::Rgb30,
            _ => Self::Invalid,
        }
    }
}

#[derive(Copy, Clone, Eq, PartialEq, Debug, Default)]
pub enum Content {
    Color,
    Alpha,
    #[default]
    ColorAlpha,
}

impl Content {
    pub fn to_ffi(self) -> ffi::cairo_content_t {
        match self {
            Self::Color => ffi::CAIRO_CONTENT_COLOR,
            Self::Alpha => ffi::CAIRO_CONTENT_ALPHA,
            Self::ColorAlpha => ffi::CAIRO_CONTENT_COLOR_ALPHA,
        }
    }

    pub fn from_ffi(content: ffi::cairo_content_t) -> Self {
        match content {
            ffi::CAIRO_CONTENT_COLOR => Self::Color,
            ffi::CAIRO_CONTENT_ALPHA => Self::Alpha,
            _ => Self::ColorAlpha,
        }
    }
}

#[derive(Copy, Clone, Eq, PartialEq, Debug, Default)]
pub enum FontSlant {
    #[default]
    Normal,
    Italic,
    Oblique,
}

impl FontSlant {
    pub fn to_ffi(self) -> ffi::cairo_font_slant_t {
        match self {
            Self::Normal => ffi::CAIRO_FONT_SLANT_NORMAL,
            Self::Italic => ffi::CAIRO_FONT_SLANT_ITALIC,
            Self::Oblique => ffi::CAIRO_FONT_SLANT_OBLIQUE,
        }
    }

    pub fn from_ffi(slant: ffi::cairo_font_slant_t) -> Self {
        match slant {
            ffi::CAIRO_FONT_SLANT_ITALIC => Self::Italic,
            ffi::CAIRO_FONT_SLANT_OBLIQUE => Self::Oblique,
            _ => Self::Normal,
        }
    }
}

#[derive(Copy, Clone, Eq, PartialEq, Debug, Default)]
pub enum FontWeight {
    #[default]
    Normal,
    Bold,
}

impl FontWeight {
    pub fn to_ffi(self) -> ffi::cairo_font_weight_t {
        match self {
            Self::Normal => ffi::CAIRO_FONT_WEIGHT_NORMAL,
            Self::Bold => ffi::CAIRO_FONT_WEIGHT_BOLD,
        }
    }

    pub fn from_ffi(weight: ffi::cairo_font_weight_t) -> Self {
        match weight {
            ffi::CAIRO_FONT_WEIGHT_BOLD => Self::Bold,
            _ => Self::Normal,
        }
    }
}

#[derive(Copy, Clone, Eq, PartialEq, Debug, Default)]
pub enum FontType {
    #[default]
    Toy,
    FreeType,
    Win32,
    Quartz,
    User,
    DWrite,
}

impl FontType {
    pub fn to_ffi(self) -> ffi::cairo_font_type_t {
        match self {
            Self::Toy => ffi::CAIRO_FONT_TYPE_TOY,
            Self::FreeType => ffi::CAIRO_FONT_TYPE_FT,
            Self::Win32 => ffi::CAIRO_FONT_TYPE_WIN32,
            Self::Quartz => ffi::CAIRO_FONT_TYPE_QUARTZ,
            Self::User => ffi::CAIRO_FONT_TYPE_USER,
            Self::DWrite => ffi::CAIRO_FONT_TYPE_DWRITE,
        }
    }

    pub fn from_ffi(font_type: ffi::cairo_font_type_t) -> Self {
        match font_type {
            ffi::CAIRO_FONT_TYPE_FT => Self::FreeType,
            ffi::CAIRO_FONT_TYPE_WIN32 => Self::Win32,
            ffi::CAIRO_FONT_TYPE_QUARTZ => Self::Quartz,
            ffi::CAIRO_FONT_TYPE_USER => Self::User,
            ffi::CAIRO_FONT_TYPE_DWRITE => Self::DWrite,
            _ => Self::Toy,
        }
    }
}

#[derive(Copy, Clone, Eq, PartialEq, Debug, Default)]
pub enum PatternType {
    #[default]
    Solid,
    Surface,
    Linear,
    Radial,
    Mesh,
    RasterSource,
}

impl PatternType {
    pub fn to_ffi(self) -> ffi::cairo_pattern_type_t {
        match self {
            Self::Solid => ffi::CAIRO_PATTERN_TYPE_SOLID,
            Self::Surface => ffi::CAIRO_PATTERN_TYPE_SURFACE,
            Self::Linear => ffi::CAIRO_PATTERN_TYPE_LINEAR,
            Self::Radial => ffi::CAIRO_PATTERN_TYPE_RADIAL,
            Self::Mesh => ffi::CAIRO_PATTERN_TYPE_MESH,
            Self::RasterSource => ffi::CAIRO_PATTERN_TYPE_RASTER_SOURCE,
        }
    }

    pub fn from_ffi(pattern_type: ffi::cairo_pattern_type_t) -> Self {
        match pattern_type {
            ffi::CAIRO_PATTERN_TYPE_SURFACE => Self::Surface,
            ffi::CAIRO_PATTERN_TYPE_LINEAR => Self::Linear,
            ffi::CAIRO_PATTERN_TYPE_RADIAL => Self::Radial,
            ffi::CAIRO_PATTERN_TYPE_MESH => Self::Mesh,
            ffi::CAIRO_PATTERN_TYPE_RASTER_SOURCE => Self::RasterSource,
            _ => Self::Solid,
        }
    }
}

#[derive(Copy, Clone, Eq, PartialEq, Debug, Default)]
pub enum SurfaceType {
    #[default]
    Image,
    Pdf,
    Ps,
    Xlib,
    Xcb,
    Glitz,
    Quartz,
    Win32,
    BeOs,
    DirectFb,
    Svg,
    Os2,
    Win32Printing,
    QuartzImage,
    Script,
    Qt,
    Recording,
    Vg,
    Gl,
    Drm,
    Tee,
    Xml,
    Skia,
    Subsurface,
    Cogl,
}

impl SurfaceType {
    pub fn to_ffi(self) -> ffi::cairo_surface_type_t {
        match self {
            Self::Image => ffi::CAIRO_SURFACE_TYPE_IMAGE,
            Self::Pdf => ffi::CAIRO_SURFACE_TYPE_PDF,
            Self::Ps => ffi::CAIRO_SURFACE_TYPE_PS,
            Self::Xlib => ffi::CAIRO_SURFACE_TYPE_XLIB,
            Self::Xcb => ffi::CAIRO_SURFACE_TYPE_XCB,
            Self::Glitz => ffi::CAIRO_SURFACE_TYPE_GLITZ,
            Self::Quartz => ffi::CAIRO_SURFACE_TYPE_QUARTZ,
            Self::Win32 => ffi::CAIRO_SURFACE_TYPE_WIN32,
            Self::BeOs => ffi::CAIRO_SURFACE_TYPE_BEOS,
            Self::DirectFb => ffi::CAIRO_SURFACE_TYPE_DIRECTFB,
            Self::Svg => ffi::CAIRO_SURFACE_TYPE_SVG,
            Self::Os2 => ffi::CAIRO_SURFACE_TYPE_OS2,
            Self::Win32Printing => ffi::CAIRO_SURFACE_TYPE_WIN32_PRINTING,
            Self::QuartzImage => ffi::CAIRO_SURFACE_TYPE_QUARTZ_IMAGE,
            Self::Script => ffi::CAIRO_SURFACE_TYPE_SCRIPT,
            Self::Qt => ffi::CAIRO_SURFACE_TYPE_QT,
            Self::Recording => ffi::CAIRO_SURFACE_TYPE_RECORDING,
            Self::Vg => ffi::CAIRO_SURFACE_TYPE_VG,
            Self::Gl => ffi::CAIRO_SURFACE_TYPE_GL,
            Self::Drm => ffi::CAIRO_SURFACE_TYPE_DRM,
            Self::Tee => ffi::CAIRO_SURFACE_TYPE_TEE,
            Self::Xml => ffi::CAIRO_SURFACE_TYPE_XML,
            Self::Skia => ffi::CAIRO_SURFACE_TYPE_SKIA,
            Self::Subsurface => ffi::CAIRO_SURFACE_TYPE_SUBSURFACE,
            Self::Cogl => ffi::CAIRO_SURFACE_TYPE_COGL,
        }
    }

    pub fn from_ffi(surface_type: ffi::cairo_surface_type_t) -> Self {
        match surface_type {
            ffi::CAIRO_SURFACE_TYPE_PDF => Self::Pdf,
            ffi::CAIRO_SURFACE_TYPE_PS => Self::Ps,
            ffi::CAIRO_SURFACE_TYPE_XLIB => Self::Xlib,
            ffi::CAIRO_SURFACE_TYPE_XCB => Self::Xcb,
            ffi::CAIRO_SURFACE_TYPE_GLITZ => Self::Glitz,
            ffi::CAIRO_SURFACE_TYPE_QUARTZ => Self::Quartz,
            ffi::CAIRO_SURFACE_TYPE_WIN32 => Self::Win32,
            ffi::CAIRO_SURFACE_TYPE_BEOS => Self::BeOs,
            ffi::CAIRO_SURFACE_TYPE_DIRECTFB => Self::DirectFb,
            ffi::CAIRO_SURFACE_TYPE_SVG => Self::Svg,
            ffi::CAIRO_SURFACE_TYPE_OS2 => Self::Os2,
            ffi::CAIRO_SURFACE_TYPE_WIN32_PRINTING => Self::Win32Printing,
            ffi::CAIRO_SURFACE_TYPE_QUARTZ_IMAGE => Self::QuartzImage,
            ffi::CAIRO_SURFACE_TYPE_SCRIPT => Self::Script,
            ffi::CAIRO_SURFACE_TYPE_QT => Self::Qt,
            ffi::CAIRO_SURFACE_TYPE_RECORDING => Self::Recording,
            ffi::CAIRO_SURFACE_TYPE_VG => Self::Vg,
            ffi::CAIRO_SURFACE_TYPE_GL => Self::Gl,
            ffi::CAIRO_SURFACE_TYPE_DRM => Self::Drm,
            ffi::CAIRO_SURFACE_TYPE_TEE => Self::Tee,
            ffi::CAIRO_SURFACE_TYPE_XML => Self::Xml,
            ffi::CAIRO_SURFACE_TYPE_SKIA => Self::Skia,
            ffi::CAIRO_SURFACE_TYPE_SUBSURFACE => Self::Subsurface,
            ffi::CAIRO_SURFACE_TYPE_COGL => Self::Cogl,
            _ => Self::Image,
        }
    }
}

#[derive(Copy, Clone, Eq, PartialEq, Debug, Default)]
pub enum Antialias {
    #[default]
    Default,
    None,
    Gray,
    Subpixel,
    Fast,
    Good,
    Best,
}

impl Antialias {
    pub fn to_ffi(self) -> ffi::cairo_antialias_t {
        match self {
            Self::Default => ffi::CAIRO_ANTIALIAS_DEFAULT,
            Self::None => ffi::CAIRO_ANTIALIAS_NONE,
            Self::Gray => ffi::CAIRO_ANTIALIAS_GRAY,
            Self::Subpixel => ffi::CAIRO_ANTIALIAS_SUBPIXEL,
            Self::Fast => ffi::CAIRO_ANTIALIAS_FAST,
            Self::Good => ffi::CAIRO_ANTIALIAS_GOOD,
            Self::Best => ffi::CAIRO_ANTIALIAS_BEST,
        }
    }

    pub fn from_ffi(antialias: ffi::cairo_antialias_t) -> Self {
        match antialias {
            ffi::CAIRO_ANTIALIAS_NONE => Self::None,
            ffi::CAIRO_ANTIALIAS_GRAY => Self::Gray,
            ffi::CAIRO_ANTIALIAS_SUBPIXEL => Self::Subpixel,
            ffi::CAIRO_ANTIALIAS_FAST => Self::Fast,
            ffi::CAIRO_ANTIALIAS_GOOD => Self::Good,
            ffi::CAIRO_ANTIALIAS_BEST => Self::Best,
            _ => Self::Default,
        }
    }
}

#[derive(Copy, Clone, Eq, PartialEq, Debug, Default)]
pub enum SubpixelOrder {
    #[default]
    Default,
    Rgb,
    Bgr,
    VRgb,
    VBgr,
}

impl SubpixelOrder {
    pub fn to_ffi(self) -> ffi::cairo_subpixel_order_t {
        match self {
            Self::Default => ffi::CAIRO_SUBPIXEL_ORDER_DEFAULT,
            Self::Rgb => ffi::CAIRO_SUBPIXEL_ORDER_RGB,
            Self::Bgr => ffi::CAIRO_SUBPIXEL_ORDER_BGR,
            Self::VRgb => ffi::CAIRO_SUBPIXEL_ORDER_VRGB,
            Self::VBgr => ffi::CAIRO_SUBPIXEL_ORDER_VBGR,
        }
    }

    pub fn from_ffi(order: ffi::cairo_subpixel_order_t) -> Self {
        match order {
            ffi::CAIRO_SUBPIXEL_ORDER_RGB => Self::Rgb,
            ffi::CAIRO_SUBPIXEL_ORDER_BGR => Self::Bgr,
            ffi::CAIRO_SUBPIXEL_ORDER_VRGB => Self::VRgb,
            ffi::CAIRO_SUBPIXEL_ORDER_VBGR => Self::VBgr,
            _ => Self::Default,
        }
    }
}

#[derive(Copy, Clone, Eq, PartialEq, Debug, Default)]
pub enum HintStyle {
    #[default]
    Default,
    None,
    Slight,
    Medium,
    Full,
}

impl HintStyle {
    pub fn to_ffi(self) -> ffi::cairo_hint_style_t {
        match self {
            Self::Default => ffi::CAIRO_HINT_STYLE_DEFAULT,
            Self::None => ffi::CAIRO_HINT_STYLE_NONE,
            Self::Slight => ffi::CAIRO_HINT_STYLE_SLIGHT,
            Self::Medium => ffi::CAIRO_HINT_STYLE_MEDIUM,
            Self::Full => ffi::CAIRO_HINT_STYLE_FULL,
        }
    }

    pub fn from_ffi(style: ffi::cairo_hint_style_t) -> Self {
        match style {
            ffi::CAIRO_HINT_STYLE_NONE => Self::None,
            ffi::CAIRO_HINT_STYLE_SLIGHT => Self::Slight,
            ffi::CAIRO_HINT_STYLE_MEDIUM => Self::Medium,
            ffi::CAIRO_HINT_STYLE_FULL => Self::Full,
            _ => Self::Default,
        }
    }
}

#[derive(Copy, Clone, Eq, PartialEq, Debug, Default)]
pub enum HintMetrics {
    #[default]
    Default,
    Off,
    On,
}

impl HintMetrics {
    pub fn to_ffi(self) -> ffi::cairo_hint_metrics_t {
        match self {
            Self::Default => ffi::CAIRO_HINT_METRICS_DEFAULT,
            Self::Off => ffi::CAIRO_HINT_METRICS_OFF,
            Self::On => ffi::CAIRO_HINT_METRICS_ON,
        }
    }

    pub fn from_ffi(metrics: ffi::cairo_hint_metrics_t) -> Self {
        match metrics {
            ffi::CAIRO_HINT_METRICS_OFF => Self::Off,
            ffi::CAIRO_HINT_METRICS_ON => Self::On,
            _ => Self::Default,
        }
    }
}

#[derive(Copy, Clone, Eq, PartialEq, Debug, Default)]
pub enum Extend {
    #[default]
    None,
    Repeat,
    Reflect,
    Pad,
}

impl Extend {
    pub fn to_ffi(self) -> ffi::cairo_extend_t {
        match self {
            Self::None => ffi::CAIRO_EXTEND_NONE,
            Self::Repeat => ffi::CAIRO_EXTEND_REPEAT,
            Self::Reflect => ffi::CAIRO_EXTEND_REFLECT,
            Self::Pad => ffi::CAIRO_EXTEND_PAD,
        }
    }

    pub fn from_ffi(extend: ffi::cairo_extend_t) -> Self {
        match extend {
            ffi::CAIRO_EXTEND_REPEAT => Self::Repeat,
            ffi::CAIRO_EXTEND_REFLECT => Self::Reflect,
            ffi::CAIRO_EXTEND_PAD => Self::Pad,
            _ => Self::None,
        }
    }
}

#[derive(Copy, Clone, Eq, PartialEq, Debug, Default)]
pub enum Filter {
    Fast,
    #[default]
    Good,
    Best,
    Nearest,
    Bilinear,
    Gaussian,
}

impl Filter {
    pub fn to_ffi(self) -> ffi::cairo_filter_t {
        match self {
            Self::Fast => ffi::CAIRO_FILTER_FAST,
            Self::Good => ffi::CAIRO_FILTER_GOOD,
            Self::Best => ffi::CAIRO_FILTER_BEST,
            Self::Nearest => ffi::CAIRO_FILTER_NEAREST,
            Self::Bilinear => ffi::CAIRO_FILTER_BILINEAR,
            Self::Gaussian => ffi::CAIRO_FILTER_GAUSSIAN,
        }
    }

    pub fn from_ffi(filter: ffi::cairo_filter_t) -> Self {
        match filter {
            ffi::CAIRO_FILTER_FAST => Self::Fast,
            ffi::CAIRO_FILTER_BEST => Self::Best,
            ffi::CAIRO_FILTER_NEAREST => Self::Nearest,
            ffi::CAIRO_FILTER_BILINEAR => Self::Bilinear,
            ffi::CAIRO_FILTER_GAUSSIAN => Self::Gaussian,
            _ => Self::Good,
        }
    }
}

#[derive(Copy, Clone, Eq, PartialEq, Debug, Default)]
pub enum FillRule {
    #[default]
    Winding,
    EvenOdd,
}

impl FillRule {
    pub fn to_ffi(self) -> ffi::cairo_fill_rule_t {
        match self {
            Self::Winding => ffi::CAIRO_FILL_RULE_WINDING,
            Self::EvenOdd => ffi::CAIRO_FILL_RULE_EVEN_ODD,
        }
    }

    pub fn from_ffi(rule: ffi::cairo_fill_rule_t) -> Self {
        match rule {
            ffi::CAIRO_FILL_RULE_EVEN_ODD => Self::EvenOdd,
            _ => Self::Winding,
        }
    }
}

#[derive(Copy, Clone, Eq, PartialEq, Debug, Default)]
pub enum LineCap {
    #[default]
    Butt,
    Round,
    Square,
}

impl LineCap {
    pub fn to_ffi(self) -> ffi::cairo_line_cap_t {
        match self {
            Self::Butt => ffi::CAIRO_LINE_CAP_BUTT,
            Self::Round => ffi::CAIRO_LINE_CAP_ROUND,
            Self::Square => ffi::CAIRO_LINE_CAP_SQUARE,
        }
    }

    pub fn from_ffi(cap: ffi::cairo_line_cap_t) -> Self {
        match cap {
            ffi::CAIRO_LINE_CAP_ROUND => Self::Round,
            ffi::CAIRO_LINE_CAP_SQUARE => Self::Square,
            _ => Self::Butt,
        }
    }
}

#[derive(Copy, Clone, Eq, PartialEq, Debug, Default)]
pub enum LineJoin {
    #[default]
    Miter,
    Round,
    Bevel,
}

impl LineJoin {
    pub fn to_ffi(self) -> ffi::cairo_line_join_t {
        match self {
            Self::Miter => ffi::CAIRO_LINE_JOIN_MITER,
            Self::Round => ffi::CAIRO_LINE_JOIN_ROUND,
            Self::Bevel => ffi::CAIRO_LINE_JOIN_BEVEL,
        }
    }

    pub fn from_ffi(join: ffi::cairo_line_join_t) -> Self {
        match join {
            ffi::CAIRO_LINE_JOIN_ROUND => Self::Round,
            ffi::CAIRO_LINE_JOIN_BEVEL => Self::Bevel,
            _ => Self::Miter,
        }
    }
}

#[derive(Copy, Clone, Eq, PartialEq, Debug, Default)]
pub enum Operator {
    Clear,
    Source,
    #[default]
    Over,
    In,
    Out,
    Atop,
    Dest,
    DestOver,
    DestIn,
    DestOut,
    DestAtop,
    Xor,
    Add,
    Saturate,
    Multiply,
    Screen,
    Overlay,
    Darken,
    Lighten,
    ColorDodge,
    ColorBurn,
    HardLight,
    SoftLight,
    Difference,
    Exclusion,
    HslHue,
    HslSaturation,
    HslColor,
    HslLuminosity,
}

impl Operator {
    pub fn to_ffi(self) -> ffi::cairo_operator_t {
        match self {
            Self::Clear => ffi::CAIRO_OPERATOR_CLEAR,
            Self::Source => ffi::CAIRO_OPERATOR_SOURCE,
            Self::Over => ffi::CAIRO_OPERATOR_OVER,
            Self::In => ffi::CAIRO_OPERATOR_IN,
            Self::Out => ffi::CAIRO_OPERATOR_OUT,
            Self::Atop => ffi::CAIRO_OPERATOR_ATOP,
            Self::Dest => ffi::CAIRO_OPERATOR_DEST,
            Self::DestOver => ffi::CAIRO_OPERATOR_DEST_OVER,
            Self::DestIn => ffi::CAIRO_OPERATOR_DEST_IN,
            Self::DestOut => ffi::CAIRO_OPERATOR_DEST_OUT,
            Self::DestAtop => ffi::CAIRO_OPERATOR_DEST_ATOP,
            Self::Xor => ffi::CAIRO_OPERATOR_XOR,
            Self::Add => ffi::CAIRO_OPERATOR_ADD,
            Self::Saturate => ffi::CAIRO_OPERATOR_SATURATE,
            Self::Multiply => ffi::CAIRO_OPERATOR_MULTIPLY,
            Self::Screen => ffi::CAIRO_OPERATOR_SCREEN,
            Self::Overlay => ffi::CAIRO_OPERATOR_OVERLAY,
            Self::Darken => ffi::CAIRO_OPERATOR_DARKEN,
            Self::Lighten => ffi::CAIRO_OPERATOR_LIGHTEN,
            Self::ColorDodge => ffi::CAIRO_OPERATOR_COLOR_DODGE,
            Self::ColorBurn => ffi::CAIRO_OPERATOR_COLOR_BURN,
            Self::HardLight => ffi::CAIRO_OPERATOR_HARD_LIGHT,
            Self::SoftLight => ffi::CAIRO_OPERATOR_SOFT_LIGHT,
            Self::Difference => ffi::CAIRO_OPERATOR_DIFFERENCE,
            Self::Exclusion => ffi::CAIRO_OPERATOR_EXCLUSION,
            Self::HslHue => ffi::CAIRO_OPERATOR_HSL_HUE,
            Self::HslSaturation => ffi::CAIRO_OPERATOR_HSL_SATURATION,
            Self::HslColor => ffi::CAIRO_OPERATOR_HSL_COLOR,
            Self::HslLuminosity => ffi::CAIRO_OPERATOR_HSL_LUMINOSITY,
        }
    }

    pub fn from_ffi(op: ffi::cairo_operator_t) -> Self {
        match op {
            ffi::CAIRO_OPERATOR_CLEAR => Self::Clear,
            ffi::CAIRO_OPERATOR_SOURCE => Self::Source,
            ffi::CAIRO_OPERATOR_IN => Self::In,
            ffi::CAIRO_OPERATOR_OUT => Self::Out,
            ffi::CAIRO_OPERATOR_ATOP => Self::Atop,
            ffi::CAIRO_OPERATOR_DEST => Self::Dest,
            ffi::CAIRO_OPERATOR_DEST_OVER => Self::DestOver,
            ffi::CAIRO_OPERATOR_DEST_IN => Self::DestIn,
            ffi::CAIRO_OPERATOR_DEST_OUT => Self::DestOut,
            ffi::CAIRO_OPERATOR_DEST_ATOP => Self::DestAtop,
            ffi::CAIRO_OPERATOR_XOR => Self::Xor,
            ffi::CAIRO_OPERATOR_ADD => Self::Add,
            ffi::CAIRO_OPERATOR_SATURATE => Self::Saturate,
            ffi::CAIRO_OPERATOR_MULTIPLY => Self::Multiply,
            ffi::CAIRO_OPERATOR_SCREEN => Self::Screen,
            ffi::CAIRO_OPERATOR_OVERLAY => Self::Overlay,
            ffi::CAIRO_OPERATOR_DARKEN => Self::Darken,
            ffi::CAIRO_OPERATOR_LIGHTEN => Self::Lighten,
            ffi::CAIRO_OPERATOR_COLOR_DODGE => Self::ColorDodge,
            ffi::CAIRO_OPERATOR_COLOR_BURN => Self::ColorBurn,
            ffi::CAIRO_OPERATOR_HARD_LIGHT => Self::HardLight,
            ffi::CAIRO_OPERATOR_SOFT_LIGHT => Self::SoftLight,
            ffi::CAIRO_OPERATOR_DIFFERENCE => Self::Difference,
            ffi::CAIRO_OPERATOR_EXCLUSION => Self::Exclusion,
            ffi::CAIRO_OPERATOR_HSL_HUE => Self::HslHue,
            ffi::CAIRO_OPERATOR_HSL_SATURATION => Self::HslSaturation,
            ffi::CAIRO_OPERATOR_HSL_COLOR => Self::HslColor,
            ffi::CAIRO_OPERATOR_HSL_LUMINOSITY => Self::HslLuminosity,
            _ => Self::Over,
        }
    }
}

#[derive(Copy, Clone, Eq, PartialEq, Debug, Default)]
pub enum RegionOverlap {
    #[default]
    In,
    Out,
    Part,
}

impl RegionOverlap {
    pub fn to_ffi(self) -> ffi::cairo_region_overlap_t {
        match self {
            Self::In => ffi::CAIRO_REGION_OVERLAP_IN,
            Self::Out => ffi::CAIRO_REGION_OVERLAP_OUT,
            Self::Part => ffi::CAIRO_REGION_OVERLAP_PART,
        }
    }

    pub fn from_ffi(overlap: ffi::cairo_region_overlap_t) -> Self {
        match overlap {
            ffi::CAIRO_REGION_OVERLAP_OUT => Self::Out,
            ffi::CAIRO_REGION_OVERLAP_PART => Self::Part,
            _ => Self::In,
        }
    }
}
