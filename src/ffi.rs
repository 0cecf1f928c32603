// SPDX-License-Identifier: GPL-3.0-or-later

//! Hand-maintained declarations for the part of the cairo C API this crate
//! forwards to, kept in the same shape bindgen would emit.

#![allow(non_camel_case_types)]

use std::ffi::{c_char, c_double, c_int, c_uchar, c_uint, c_ulong, c_void};

pub type cairo_bool_t = c_int;

#[repr(C)]
#[derive(Debug, Copy, Clone)]
pub struct _cairo {
    _unused: [u8; 0],
}
pub type cairo_t = _cairo;

#[repr(C)]
#[derive(Debug, Copy, Clone)]
pub struct _cairo_surface {
    _unused: [u8; 0],
}
pub type cairo_surface_t = _cairo_surface;

#[repr(C)]
#[derive(Debug, Copy, Clone)]
pub struct _cairo_device {
    _unused: [u8; 0],
}
pub type cairo_device_t = _cairo_device;

#[repr(C)]
#[derive(Debug, Copy, Clone)]
pub struct _cairo_pattern {
    _unused: [u8; 0],
}
pub type cairo_pattern_t = _cairo_pattern;

#[repr(C)]
#[derive(Debug, Copy, Clone)]
pub struct _cairo_font_face {
    _unused: [u8; 0],
}
pub type cairo_font_face_t = _cairo_font_face;

#[repr(C)]
#[derive(Debug, Copy, Clone)]
pub struct _cairo_scaled_font {
    _unused: [u8; 0],
}
pub type cairo_scaled_font_t = _cairo_scaled_font;

#[repr(C)]
#[derive(Debug, Copy, Clone)]
pub struct _cairo_font_options {
    _unused: [u8; 0],
}
pub type cairo_font_options_t = _cairo_font_options;

#[repr(C)]
#[derive(Debug, Copy, Clone)]
pub struct _cairo_region {
    _unused: [u8; 0],
}
pub type cairo_region_t = _cairo_region;

#[repr(C)]
#[derive(Debug, Copy, Clone)]
pub struct _cairo_path_data {
    _unused: [u8; 0],
}
pub type cairo_path_data_t = _cairo_path_data;

#[repr(C)]
#[derive(Debug)]
pub struct cairo_path_t {
    pub status: cairo_status_t,
    pub data: *mut cairo_path_data_t,
    pub num_data: c_int,
}

#[repr(C)]
#[derive(Debug, Copy, Clone)]
pub struct cairo_user_data_key_t {
    pub unused: c_int,
}

#[repr(C)]
#[derive(Debug, Copy, Clone, PartialEq, Default)]
pub struct cairo_matrix_t {
    pub xx: c_double,
    pub yx: c_double,
    pub xy: c_double,
    pub yy: c_double,
    pub x0: c_double,
    pub y0: c_double,
}

#[repr(C)]
#[derive(Debug, Copy, Clone, PartialEq, Default)]
pub struct cairo_rectangle_t {
    pub x: c_double,
    pub y: c_double,
    pub width: c_double,
    pub height: c_double,
}

#[repr(C)]
#[derive(Debug, Copy, Clone, PartialEq, Eq, Default)]
pub struct cairo_rectangle_int_t {
    pub x: c_int,
    pub y: c_int,
    pub width: c_int,
    pub height: c_int,
}

#[repr(C)]
#[derive(Debug, Copy, Clone, PartialEq, Default)]
pub struct cairo_glyph_t {
    pub index: c_ulong,
    pub x: c_double,
    pub y: c_double,
}

#[repr(C)]
#[derive(Debug, Copy, Clone, PartialEq, Eq, Default)]
pub struct cairo_text_cluster_t {
    pub num_bytes: c_int,
    pub num_glyphs: c_int,
}

#[repr(C)]
#[derive(Debug, Copy, Clone, PartialEq, Default)]
pub struct cairo_text_extents_t {
    pub x_bearing: c_double,
    pub y_bearing: c_double,
    pub width: c_double,
    pub height: c_double,
    pub x_advance: c_double,
    pub y_advance: c_double,
}

#[repr(C)]
#[derive(Debug, Copy, Clone, PartialEq, Default)]
pub struct cairo_font_extents_t {
    pub ascent: c_double,
    pub descent: c_double,
    pub height: c_double,
    pub max_x_advance: c_double,
    pub max_y_advance: c_double,
}

pub type cairo_status_t = c_int;
pub const CAIRO_STATUS_SUCCESS: cairo_status_t = 0;
pub const CAIRO_STATUS_NO_MEMORY: cairo_status_t = 1;
pub const CAIRO_STATUS_INVALID_RESTORE: cairo_status_t = 2;
pub const CAIRO_STATUS_INVALID_POP_GROUP: cairo_status_t = 3;
pub const CAIRO_STATUS_NO_CURRENT_POINT: cairo_status_t = 4;
pub const CAIRO_STATUS_INVALID_MATRIX: cairo_status_t = 5;
pub const CAIRO_STATUS_INVALID_STATUS: cairo_status_t = 6;
pub const CAIRO_STATUS_NULL_POINTER: cairo_status_t = 7;
pub const CAIRO_STATUS_INVALID_STRING: cairo_status_t = 8;
pub const CAIRO_STATUS_INVALID_PATH_DATA: cairo_status_t = 9;
pub const CAIRO_STATUS_READ_ERROR: cairo_status_t = 10;
pub const CAIRO_STATUS_WRITE_ERROR: cairo_status_t = 11;
pub const CAIRO_STATUS_SURFACE_FINISHED: cairo_status_t = 12;
pub const CAIRO_STATUS_SURFACE_TYPE_MISMATCH: cairo_status_t = 13;
pub const CAIRO_STATUS_PATTERN_TYPE_MISMATCH: cairo_status_t = 14;
pub const CAIRO_STATUS_INVALID_CONTENT: cairo_status_t = 15;
pub const CAIRO_STATUS_INVALID_FORMAT: cairo_status_t = 16;
pub const CAIRO_STATUS_INVALID_VISUAL: cairo_status_t = 17;
pub const CAIRO_STATUS_FILE_NOT_FOUND: cairo_status_t = 18;
pub const CAIRO_STATUS_INVALID_DASH: cairo_status_t = 19;
pub const CAIRO_STATUS_INVALID_DSC_COMMENT: cairo_status_t = 20;
pub const CAIRO_STATUS_INVALID_INDEX: cairo_status_t = 21;
pub const CAIRO_STATUS_CLIP_NOT_REPRESENTABLE: cairo_status_t = 22;
pub const CAIRO_STATUS_TEMP_FILE_ERROR: cairo_status_t = 23;
pub const CAIRO_STATUS_INVALID_STRIDE: cairo_status_t = 24;
pub const CAIRO_STATUS_FONT_TYPE_MISMATCH: cairo_status_t = 25;
pub const CAIRO_STATUS_USER_FONT_IMMUTABLE: cairo_status_t = 26;
pub const CAIRO_STATUS_USER_FONT_ERROR: cairo_status_t = 27;
pub const CAIRO_STATUS_NEGATIVE_COUNT: cairo_status_t = 28;
pub const CAIRO_STATUS_INVALID_CLUSTERS: cairo_status_t = 29;
pub const CAIRO_STATUS_INVALID_SLANT: cairo_status_t = 30;
pub const CAIRO_STATUS_INVALID_WEIGHT: cairo_status_t = 31;
pub const CAIRO_STATUS_INVALID_SIZE: cairo_status_t = 32;
pub const CAIRO_STATUS_USER_FONT_NOT_IMPLEMENTED: cairo_status_t = 33;
pub const CAIRO_STATUS_DEVICE_TYPE_MISMATCH: cairo_status_t = 34;
pub const CAIRO_STATUS_DEVICE_ERROR: cairo_status_t = 35;
pub const CAIRO_STATUS_INVALID_MESH_CONSTRUCTION: cairo_status_t = 36;
pub const CAIRO_STATUS_DEVICE_FINISHED: cairo_status_t = 37;
pub const CAIRO_STATUS_JBIG2_GLOBAL_MISSING: cairo_status_t = 38;
pub const CAIRO_STATUS_PNG_ERROR: cairo_status_t = 39;
pub const CAIRO_STATUS_FREETYPE_ERROR: cairo_status_t = 40;
pub const CAIRO_STATUS_WIN32_GDI_ERROR: cairo_status_t = 41;
pub const CAIRO_STATUS_TAG_ERROR: cairo_status_t = 42;

pub type cairo_content_t = c_int;
pub const CAIRO_CONTENT_COLOR: cairo_content_t = 0x1000;
pub const CAIRO_CONTENT_ALPHA: cairo_content_t = 0x2000;
pub const CAIRO_CONTENT_COLOR_ALPHA: cairo_content_t = 0x3000;

pub type cairo_format_t = c_int;
pub const CAIRO_FORMAT_INVALID: cairo_format_t = -1;
pub const CAIRO_FORMAT_ARGB32: cairo_format_t = 0;
pub const CAIRO_FORMAT_RGB24: cairo_format_t = 1;
pub const CAIRO_FORMAT_A8: cairo_format_t = 2;
pub const CAIRO_FORMAT_A1: cairo_format_t = 3;
pub const CAIRO_FORMAT_RGB16_565: cairo_format_t = 4;
pub const CAIRO_FORMAT_RGB30: cairo_format_t = 5;

pub type cairo_operator_t = c_int;
pub const CAIRO_OPERATOR_CLEAR: cairo_operator_t = 0;
pub const CAIRO_OPERATOR_SOURCE: cairo_operator_t = 1;
pub const CAIRO_OPERATOR_OVER: cairo_operator_t = 2;
pub const CAIRO_OPERATOR_IN: cairo_operator_t = 3;
pub const CAIRO_OPERATOR_OUT: cairo_operator_t = 4;
pub const CAIRO_OPERATOR_ATOP: cairo_operator_t = 5;
pub const CAIRO_OPERATOR_DEST: cairo_operator_t = 6;
pub const CAIRO_OPERATOR_DEST_OVER: cairo_operator_t = 7;
pub const CAIRO_OPERATOR_DEST_IN: cairo_operator_t = 8;
pub const CAIRO_OPERATOR_DEST_OUT: cairo_operator_t = 9;
pub const CAIRO_OPERATOR_DEST_ATOP: cairo_operator_t = 10;
pub const CAIRO_OPERATOR_XOR: cairo_operator_t = 11;
pub const CAIRO_OPERATOR_ADD: cairo_operator_t = 12;
pub const CAIRO_OPERATOR_SATURATE: cairo_operator_t = 13;
pub const CAIRO_OPERATOR_MULTIPLY: cairo_operator_t = 14;
pub const CAIRO_OPERATOR_SCREEN: cairo_operator_t = 15;
pub const CAIRO_OPERATOR_OVERLAY: cairo_operator_t = 16;
pub const CAIRO_OPERATOR_DARKEN: cairo_operator_t = 17;
pub const CAIRO_OPERATOR_LIGHTEN: cairo_operator_t = 18;
pub const CAIRO_OPERATOR_COLOR_DODGE: cairo_operator_t = 19;
pub const CAIRO_OPERATOR_COLOR_BURN: cairo_operator_t = 20;
pub const CAIRO_OPERATOR_HARD_LIGHT: cairo_operator_t = 21;
pub const CAIRO_OPERATOR_SOFT_LIGHT: cairo_operator_t = 22;
pub const CAIRO_OPERATOR_DIFFERENCE: cairo_operator_t = 23;
pub const CAIRO_OPERATOR_EXCLUSION: cairo_operator_t = 24;
pub const CAIRO_OPERATOR_HSL_HUE: cairo_operator_t = 25;
pub const CAIRO_OPERATOR_HSL_SATURATION: cairo_operator_t = 26;
pub const CAIRO_OPERATOR_HSL_COLOR: cairo_operator_t = 27;
pub const CAIRO_OPERATOR_HSL_LUMINOSITY: cairo_operator_t = 28;

pub type cairo_antialias_t = c_int;
pub const CAIRO_ANTIALIAS_DEFAULT: cairo_antialias_t = 0;
pub const CAIRO_ANTIALIAS_NONE: cairo_antialias_t = 1;
pub const CAIRO_ANTIALIAS_GRAY: cairo_antialias_t = 2;
pub const CAIRO_ANTIALIAS_SUBPIXEL: cairo_antialias_t = 3;
pub const CAIRO_ANTIALIAS_FAST: cairo_antialias_t = 4;
pub const CAIRO_ANTIALIAS_GOOD: cairo_antialias_t = 5;
pub const CAIRO_ANTIALIAS_BEST: cairo_antialias_t = 6;

pub type cairo_fill_rule_t = c_int;
pub const CAIRO_FILL_RULE_WINDING: cairo_fill_rule_t = 0;
pub const CAIRO_FILL_RULE_EVEN_ODD: cairo_fill_rule_t = 1;

pub type cairo_line_cap_t = c_int;
pub const CAIRO_LINE_CAP_BUTT: cairo_line_cap_t = 0;
pub const CAIRO_LINE_CAP_ROUND: cairo_line_cap_t = 1;
pub const CAIRO_LINE_CAP_SQUARE: cairo_line_cap_t = 2;

pub type cairo_line_join_t = c_int;
pub const CAIRO_LINE_JOIN_MITER: cairo_line_join_t = 0;
pub const CAIRO_LINE_JOIN_ROUND: cairo_line_join_t = 1;
pub const CAIRO_LINE_JOIN_BEVEL: cairo_line_join_t = 2;

pub type cairo_text_cluster_flags_t = c_int;
pub const CAIRO_TEXT_CLUSTER_FLAG_BACKWARD: cairo_text_cluster_flags_t = 1;

pub type cairo_font_slant_t = c_int;
pub const CAIRO_FONT_SLANT_NORMAL: cairo_font_slant_t = 0;
pub const CAIRO_FONT_SLANT_ITALIC: cairo_font_slant_t = 1;
pub const CAIRO_FONT_SLANT_OBLIQUE: cairo_font_slant_t = 2;

pub type cairo_font_weight_t = c_int;
pub const CAIRO_FONT_WEIGHT_NORMAL: cairo_font_weight_t = 0;
pub const CAIRO_FONT_WEIGHT_BOLD: cairo_font_weight_t = 1;

pub type cairo_subpixel_order_t = c_int;
pub const CAIRO_SUBPIXEL_ORDER_DEFAULT: cairo_subpixel_order_t = 0;
pub const CAIRO_SUBPIXEL_ORDER_RGB: cairo_subpixel_order_t = 1;
pub const CAIRO_SUBPIXEL_ORDER_BGR: cairo_subpixel_order_t = 2;
pub const CAIRO_SUBPIXEL_ORDER_VRGB: cairo_subpixel_order_t = 3;
pub const CAIRO_SUBPIXEL_ORDER_VBGR: cairo_subpixel_order_t = 4;

pub type cairo_hint_style_t = c_int;
pub const CAIRO_HINT_STYLE_DEFAULT: cairo_hint_style_t = 0;
pub const CAIRO_HINT_STYLE_NONE: cairo_hint_style_t = 1;
pub const CAIRO_HINT_STYLE_SLIGHT: cairo_hint_style_t = 2;
pub const CAIRO_HINT_STYLE_MEDIUM: cairo_hint_style_t = 3;
pub const CAIRO_HINT_STYLE_FULL: cairo_hint_style_t = 4;

pub type cairo_hint_metrics_t = c_int;
pub const CAIRO_HINT_METRICS_DEFAULT: cairo_hint_metrics_t = 0;
pub const CAIRO_HINT_METRICS_OFF: cairo_hint_metrics_t = 1;
pub const CAIRO_HINT_METRICS_ON: cairo_hint_metrics_t = 2;

pub type cairo_font_type_t = c_int;
pub const CAIRO_FONT_TYPE_TOY: cairo_font_type_t = 0;
pub const CAIRO_FONT_TYPE_FT: cairo_font_type_t = 1;
pub const CAIRO_FONT_TYPE_WIN32: cairo_font_type_t = 2;
pub const CAIRO_FONT_TYPE_QUARTZ: cairo_font_type_t = 3;
pub const CAIRO_FONT_TYPE_USER: cairo_font_type_t = 4;
pub const CAIRO_FONT_TYPE_DWRITE: cairo_font_type_t = 5;

pub type cairo_pattern_type_t = c_int;
pub const CAIRO_PATTERN_TYPE_SOLID: cairo_pattern_type_t = 0;
pub const CAIRO_PATTERN_TYPE_SURFACE: cairo_pattern_type_t = 1;
pub const CAIRO_PATTERN_TYPE_LINEAR: cairo_pattern_type_t = 2;
pub const CAIRO_PATTERN_TYPE_RADIAL: cairo_pattern_type_t = 3;
pub const CAIRO_PATTERN_TYPE_MESH: cairo_pattern_type_t = 4;
pub const CAIRO_PATTERN_TYPE_RASTER_SOURCE: cairo_pattern_type_t = 5;

pub type cairo_extend_t = c_int;
pub const CAIRO_EXTEND_NONE: cairo_extend_t = 0;
pub const CAIRO_EXTEND_REPEAT: cairo_extend_t = 1;
pub const CAIRO_EXTEND_REFLECT: cairo_extend_t = 2;
pub const CAIRO_EXTEND_PAD: cairo_extend_t = 3;

pub type cairo_filter_t = c_int;
pub const CAIRO_FILTER_FAST: cairo_filter_t = 0;
pub const CAIRO_FILTER_GOOD: cairo_filter_t = 1;
pub const CAIRO_FILTER_BEST: cairo_filter_t = 2;
pub const CAIRO_FILTER_NEAREST: cairo_filter_t = 3;
pub const CAIRO_FILTER_BILINEAR: cairo_filter_t = 4;
pub const CAIRO_FILTER_GAUSSIAN: cairo_filter_t = 5;

pub type cairo_surface_type_t = c_int;
pub const CAIRO_SURFACE_TYPE_IMAGE: cairo_surface_type_t = 0;
pub const CAIRO_SURFACE_TYPE_PDF: cairo_surface_type_t = 1;
pub const CAIRO_SURFACE_TYPE_PS: cairo_surface_type_t = 2;
pub const CAIRO_SURFACE_TYPE_XLIB: cairo_surface_type_t = 3;
pub const CAIRO_SURFACE_TYPE_XCB: cairo_surface_type_t = 4;
pub const CAIRO_SURFACE_TYPE_GLITZ: cairo_surface_type_t = 5;
pub const CAIRO_SURFACE_TYPE_QUARTZ: cairo_surface_type_t = 6;
pub const CAIRO_SURFACE_TYPE_WIN32: cairo_surface_type_t = 7;
pub const CAIRO_SURFACE_TYPE_BEOS: cairo_surface_type_t = 8;
pub const CAIRO_SURFACE_TYPE_DIRECTFB: cairo_surface_type_t = 9;
pub const CAIRO_SURFACE_TYPE_SVG: cairo_surface_type_t = 10;
pub const CAIRO_SURFACE_TYPE_OS2: cairo_surface_type_t = 11;
pub const CAIRO_SURFACE_TYPE_WIN32_PRINTING: cairo_surface_type_t = 12;
pub const CAIRO_SURFACE_TYPE_QUARTZ_IMAGE: cairo_surface_type_t = 13;
pub const CAIRO_SURFACE_TYPE_SCRIPT: cairo_surface_type_t = 14;
pub const CAIRO_SURFACE_TYPE_QT: cairo_surface_type_t = 15;
pub const CAIRO_SURFACE_TYPE_RECORDING: cairo_surface_type_t = 16;
pub const CAIRO_SURFACE_TYPE_VG: cairo_surface_type_t = 17;
pub const CAIRO_SURFACE_TYPE_GL: cairo_surface_type_t = 18;
pub const CAIRO_SURFACE_TYPE_DRM: cairo_surface_type_t = 19;
pub const CAIRO_SURFACE_TYPE_TEE: cairo_surface_type_t = 20;
pub const CAIRO_SURFACE_TYPE_XML: cairo_surface_type_t = 21;
pub const CAIRO_SURFACE_TYPE_SKIA: cairo_surface_type_t = 22;
pub const CAIRO_SURFACE_TYPE_SUBSURFACE: cairo_surface_type_t = 23;
pub const CAIRO_SURFACE_TYPE_COGL: cairo_surface_type_t = 24;

pub type cairo_region_overlap_t = c_int;
pub const CAIRO_REGION_OVERLAP_IN: cairo_region_overlap_t = 0;
pub const CAIRO_REGION_OVERLAP_OUT: cairo_region_overlap_t = 1;
pub const CAIRO_REGION_OVERLAP_PART: cairo_region_overlap_t = 2;

pub type cairo_destroy_func_t = Option<unsafe extern "C" fn(data: *mut c_void)>;

pub type cairo_user_scaled_font_init_func_t = Option<
    unsafe extern "C" fn(
        scaled_font: *mut cairo_scaled_font_t,
        cr: *mut cairo_t,
        extents: *mut cairo_font_extents_t,
    ) -> cairo_status_t,
>;

pub type cairo_user_scaled_font_render_glyph_func_t = Option<
    unsafe extern "C" fn(
        scaled_font: *mut cairo_scaled_font_t,
        glyph: c_ulong,
        cr: *mut cairo_t,
        extents: *mut cairo_text_extents_t,
    ) -> cairo_status_t,
>;

pub type cairo_user_scaled_font_text_to_glyphs_func_t = Option<
    unsafe extern "C" fn(
        scaled_font: *mut cairo_scaled_font_t,
        utf8: *const c_char,
        utf8_len: c_int,
        glyphs: *mut *mut cairo_glyph_t,
        num_glyphs: *mut c_int,
        clusters: *mut *mut cairo_text_cluster_t,
        num_clusters: *mut c_int,
        cluster_flags: *mut cairo_text_cluster_flags_t,
    ) -> cairo_status_t,
>;

pub type cairo_user_scaled_font_unicode_to_glyph_func_t = Option<
    unsafe extern "C" fn(
        scaled_font: *mut cairo_scaled_font_t,
        unicode: c_ulong,
        glyph_index: *mut c_ulong,
    ) -> cairo_status_t,
>;

#[link(name = "cairo")]
extern "C" {
    pub fn cairo_version() -> c_int;
    pub fn cairo_version_string() -> *const c_char;
    pub fn cairo_status_to_string(status: cairo_status_t) -> *const c_char;

    pub fn cairo_create(target: *mut cairo_surface_t) -> *mut cairo_t;
    pub fn cairo_reference(cr: *mut cairo_t) -> *mut cairo_t;
    pub fn cairo_destroy(cr: *mut cairo_t);
    pub fn cairo_get_reference_count(cr: *mut cairo_t) -> c_uint;
    pub fn cairo_status(cr: *mut cairo_t) -> cairo_status_t;
    pub fn cairo_save(cr: *mut cairo_t);
    pub fn cairo_restore(cr: *mut cairo_t);
    pub fn cairo_push_group(cr: *mut cairo_t);
    pub fn cairo_push_group_with_content(cr: *mut cairo_t, content: cairo_content_t);
    pub fn cairo_pop_group(cr: *mut cairo_t) -> *mut cairo_pattern_t;
    pub fn cairo_pop_group_to_source(cr: *mut cairo_t);
    pub fn cairo_set_operator(cr: *mut cairo_t, op: cairo_operator_t);
    pub fn cairo_get_operator(cr: *mut cairo_t) -> cairo_operator_t;
    pub fn cairo_set_source(cr: *mut cairo_t, source: *mut cairo_pattern_t);
    pub fn cairo_get_source(cr: *mut cairo_t) -> *mut cairo_pattern_t;
    pub fn cairo_set_source_rgb(cr: *mut cairo_t, red: c_double, green: c_double, blue: c_double);
    pub fn cairo_set_source_rgba(
        cr: *mut cairo_t,
        red: c_double,
        green: c_double,
        blue: c_double,
        alpha: c_double,
    );
    pub fn cairo_set_source_surface(
        cr: *mut cairo_t,
        surface: *mut cairo_surface_t,
        x: c_double,
        y: c_double,
    );
    pub fn cairo_set_tolerance(cr: *mut cairo_t, tolerance: c_double);
    pub fn cairo_get_tolerance(cr: *mut cairo_t) -> c_double;
    pub fn cairo_set_antialias(cr: *mut cairo_t, antialias: cairo_antialias_t);
    pub fn cairo_get_antialias(cr: *mut cairo_t) -> cairo_antialias_t;
    pub fn cairo_set_fill_rule(cr: *mut cairo_t, fill_rule: cairo_fill_rule_t);
    pub fn cairo_get_fill_rule(cr: *mut cairo_t) -> cairo_fill_rule_t;
    pub fn cairo_set_line_width(cr: *mut cairo_t, width: c_double);
    pub fn cairo_get_line_width(cr: *mut cairo_t) -> c_double;
    pub fn cairo_set_line_cap(cr: *mut cairo_t, line_cap: cairo_line_cap_t);
    pub fn cairo_get_line_cap(cr: *mut cairo_t) -> cairo_line_cap_t;
    pub fn cairo_set_line_join(cr: *mut cairo_t, line_join: cairo_line_join_t);
    pub fn cairo_get_line_join(cr: *mut cairo_t) -> cairo_line_join_t;
    pub fn cairo_set_dash(
        cr: *mut cairo_t,
        dashes: *const c_double,
        num_dashes: c_int,
        offset: c_double,
    );
    pub fn cairo_get_dash_count(cr: *mut cairo_t) -> c_int;
    pub fn cairo_get_dash(cr: *mut cairo_t, dashes: *mut c_double, offset: *mut c_double);
    pub fn cairo_set_miter_limit(cr: *mut cairo_t, limit: c_double);
    pub fn cairo_get_miter_limit(cr: *mut cairo_t) -> c_double;
    pub fn cairo_translate(cr: *mut cairo_t, tx: c_double, ty: c_double);
    pub fn cairo_scale(cr: *mut cairo_t, sx: c_double, sy: c_double);
    pub fn cairo_rotate(cr: *mut cairo_t, angle: c_double);
    pub fn cairo_transform(cr: *mut cairo_t, matrix: *const cairo_matrix_t);
    pub fn cairo_set_matrix(cr: *mut cairo_t, matrix: *const cairo_matrix_t);
    pub fn cairo_get_matrix(cr: *mut cairo_t, matrix: *mut cairo_matrix_t);
    pub fn cairo_identity_matrix(cr: *mut cairo_t);
    pub fn cairo_user_to_device(cr: *mut cairo_t, x: *mut c_double, y: *mut c_double);
    pub fn cairo_user_to_device_distance(cr: *mut cairo_t, dx: *mut c_double, dy: *mut c_double);
    pub fn cairo_device_to_user(cr: *mut cairo_t, x: *mut c_double, y: *mut c_double);
    pub fn cairo_device_to_user_distance(cr: *mut cairo_t, dx: *mut c_double, dy: *mut c_double);
    pub fn cairo_new_path(cr: *mut cairo_t);
    pub fn cairo_new_sub_path(cr: *mut cairo_t);
    pub fn cairo_move_to(cr: *mut cairo_t, x: c_double, y: c_double);
    pub fn cairo_line_to(cr: *mut cairo_t, x: c_double, y: c_double);
    pub fn cairo_curve_to(
        cr: *mut cairo_t,
        x1: c_double,
        y1: c_double,
        x2: c_double,
        y2: c_double,
        x3: c_double,
        y3: c_double,
    );
    pub fn cairo_arc(
        cr: *mut cairo_t,
        xc: c_double,
        yc: c_double,
        radius: c_double,
        angle1: c_double,
        angle2: c_double,
    );
    pub fn cairo_arc_negative(
        cr: *mut cairo_t,
        xc: c_double,
        yc: c_double,
        radius: c_double,
        angle1: c_double,
        angle2: c_double,
    );
    pub fn cairo_rel_move_to(cr: *mut cairo_t, dx: c_double, dy: c_double);
    pub fn cairo_rel_line_to(cr: *mut cairo_t, dx: c_double, dy: c_double);
    pub fn cairo_rel_curve_to(
        cr: *mut cairo_t,
        dx1: c_double,
        dy1: c_double,
        dx2: c_double,
        dy2: c_double,
        dx3: c_double,
        dy3: c_double,
    );
    pub fn cairo_rectangle(
        cr: *mut cairo_t,
        x: c_double,
        y: c_double,
        width: c_double,
        height: c_double,
    );
    pub fn cairo_close_path(cr: *mut cairo_t);
    pub fn cairo_path_extents(
        cr: *mut cairo_t,
        x1: *mut c_double,
        y1: *mut c_double,
        x2: *mut c_double,
        y2: *mut c_double,
    );
    pub fn cairo_paint(cr: *mut cairo_t);
    pub fn cairo_paint_with_alpha(cr: *mut cairo_t, alpha: c_double);
    pub fn cairo_mask(cr: *mut cairo_t, pattern: *mut cairo_pattern_t);
    pub fn cairo_mask_surface(
        cr: *mut cairo_t,
        surface: *mut cairo_surface_t,
        surface_x: c_double,
        surface_y: c_double,
    );
    pub fn cairo_stroke(cr: *mut cairo_t);
    pub fn cairo_stroke_preserve(cr: *mut cairo_t);
    pub fn cairo_fill(cr: *mut cairo_t);
    pub fn cairo_fill_preserve(cr: *mut cairo_t);
    pub fn cairo_copy_page(cr: *mut cairo_t);
    pub fn cairo_show_page(cr: *mut cairo_t);
    pub fn cairo_in_stroke(cr: *mut cairo_t, x: c_double, y: c_double) -> cairo_bool_t;
    pub fn cairo_in_fill(cr: *mut cairo_t, x: c_double, y: c_double) -> cairo_bool_t;
    pub fn cairo_in_clip(cr: *mut cairo_t, x: c_double, y: c_double) -> cairo_bool_t;
    pub fn cairo_stroke_extents(
        cr: *mut cairo_t,
        x1: *mut c_double,
        y1: *mut c_double,
        x2: *mut c_double,
        y2: *mut c_double,
    );
    pub fn cairo_fill_extents(
        cr: *mut cairo_t,
        x1: *mut c_double,
        y1: *mut c_double,
        x2: *mut c_double,
        y2: *mut c_double,
    );
    pub fn cairo_reset_clip(cr: *mut cairo_t);
    pub fn cairo_clip(cr: *mut cairo_t);
    pub fn cairo_clip_preserve(cr: *mut cairo_t);
    pub fn cairo_clip_extents(
        cr: *mut cairo_t,
        x1: *mut c_double,
        y1: *mut c_double,
        x2: *mut c_double,
        y2: *mut c_double,
    );
    pub fn cairo_copy_path(cr: *mut cairo_t) -> *mut cairo_path_t;
    pub fn cairo_copy_path_flat(cr: *mut cairo_t) -> *mut cairo_path_t;
    pub fn cairo_append_path(cr: *mut cairo_t, path: *const cairo_path_t);
    pub fn cairo_path_destroy(path: *mut cairo_path_t);
    pub fn cairo_has_current_point(cr: *mut cairo_t) -> cairo_bool_t;
    pub fn cairo_get_current_point(cr: *mut cairo_t, x: *mut c_double, y: *mut c_double);
    pub fn cairo_get_target(cr: *mut cairo_t) -> *mut cairo_surface_t;
    pub fn cairo_get_group_target(cr: *mut cairo_t) -> *mut cairo_surface_t;

    pub fn cairo_select_font_face(
        cr: *mut cairo_t,
        family: *const c_char,
        slant: cairo_font_slant_t,
        weight: cairo_font_weight_t,
    );
    pub fn cairo_set_font_size(cr: *mut cairo_t, size: c_double);
    pub fn cairo_set_font_matrix(cr: *mut cairo_t, matrix: *const cairo_matrix_t);
    pub fn cairo_get_font_matrix(cr: *mut cairo_t, matrix: *mut cairo_matrix_t);
    pub fn cairo_set_font_options(cr: *mut cairo_t, options: *const cairo_font_options_t);
    pub fn cairo_get_font_options(cr: *mut cairo_t, options: *mut cairo_font_options_t);
    pub fn cairo_set_font_face(cr: *mut cairo_t, font_face: *mut cairo_font_face_t);
    pub fn cairo_get_font_face(cr: *mut cairo_t) -> *mut cairo_font_face_t;
    pub fn cairo_set_scaled_font(cr: *mut cairo_t, scaled_font: *const cairo_scaled_font_t);
    pub fn cairo_get_scaled_font(cr: *mut cairo_t) -> *mut cairo_scaled_font_t;
    pub fn cairo_show_text(cr: *mut cairo_t, utf8: *const c_char);
    pub fn cairo_show_glyphs(cr: *mut cairo_t, glyphs: *const cairo_glyph_t, num_glyphs: c_int);
    pub fn cairo_show_text_glyphs(
        cr: *mut cairo_t,
        utf8: *const c_char,
        utf8_len: c_int,
        glyphs: *const cairo_glyph_t,
        num_glyphs: c_int,
        clusters: *const cairo_text_cluster_t,
        num_clusters: c_int,
        cluster_flags: cairo_text_cluster_flags_t,
    );
    pub fn cairo_text_path(cr: *mut cairo_t, utf8: *const c_char);
    pub fn cairo_glyph_path(cr: *mut cairo_t, glyphs: *const cairo_glyph_t, num_glyphs: c_int);
    pub fn cairo_text_extents(
        cr: *mut cairo_t,
        utf8: *const c_char,
        extents: *mut cairo_text_extents_t,
    );
    pub fn cairo_glyph_extents(
        cr: *mut cairo_t,
        glyphs: *const cairo_glyph_t,
        num_glyphs: c_int,
        extents: *mut cairo_text_extents_t,
    );
    pub fn cairo_font_extents(cr: *mut cairo_t, extents: *mut cairo_font_extents_t);

    pub fn cairo_font_face_reference(font_face: *mut cairo_font_face_t) -> *mut cairo_font_face_t;
    pub fn cairo_font_face_destroy(font_face: *mut cairo_font_face_t);
    pub fn cairo_font_face_get_reference_count(font_face: *mut cairo_font_face_t) -> c_uint;
    pub fn cairo_font_face_status(font_face: *mut cairo_font_face_t) -> cairo_status_t;
    pub fn cairo_font_face_get_type(font_face: *mut cairo_font_face_t) -> cairo_font_type_t;
    pub fn cairo_font_face_get_user_data(
        font_face: *mut cairo_font_face_t,
        key: *const cairo_user_data_key_t,
    ) -> *mut c_void;
    pub fn cairo_font_face_set_user_data(
        font_face: *mut cairo_font_face_t,
        key: *const cairo_user_data_key_t,
        user_data: *mut c_void,
        destroy: cairo_destroy_func_t,
    ) -> cairo_status_t;

    pub fn cairo_scaled_font_create(
        font_face: *mut cairo_font_face_t,
        font_matrix: *const cairo_matrix_t,
        ctm: *const cairo_matrix_t,
        options: *const cairo_font_options_t,
    ) -> *mut cairo_scaled_font_t;
    pub fn cairo_scaled_font_reference(
        scaled_font: *mut cairo_scaled_font_t,
    ) -> *mut cairo_scaled_font_t;
    pub fn cairo_scaled_font_destroy(scaled_font: *mut cairo_scaled_font_t);
    pub fn cairo_scaled_font_get_reference_count(scaled_font: *mut cairo_scaled_font_t) -> c_uint;
    pub fn cairo_scaled_font_status(scaled_font: *mut cairo_scaled_font_t) -> cairo_status_t;
    pub fn cairo_scaled_font_get_type(scaled_font: *mut cairo_scaled_font_t) -> cairo_font_type_t;
    pub fn cairo_scaled_font_extents(
        scaled_font: *mut cairo_scaled_font_t,
        extents: *mut cairo_font_extents_t,
    );
    pub fn cairo_scaled_font_text_extents(
        scaled_font: *mut cairo_scaled_font_t,
        utf8: *const c_char,
        extents: *mut cairo_text_extents_t,
    );
    pub fn cairo_scaled_font_glyph_extents(
        scaled_font: *mut cairo_scaled_font_t,
        glyphs: *const cairo_glyph_t,
        num_glyphs: c_int,
        extents: *mut cairo_text_extents_t,
    );
    pub fn cairo_scaled_font_text_to_glyphs(
        scaled_font: *mut cairo_scaled_font_t,
        x: c_double,
        y: c_double,
        utf8: *const c_char,
        utf8_len: c_int,
        glyphs: *mut *mut cairo_glyph_t,
        num_glyphs: *mut c_int,
        clusters: *mut *mut cairo_text_cluster_t,
        num_clusters: *mut c_int,
        cluster_flags: *mut cairo_text_cluster_flags_t,
    ) -> cairo_status_t;
    pub fn cairo_scaled_font_get_font_face(
        scaled_font: *mut cairo_scaled_font_t,
    ) -> *mut cairo_font_face_t;
    pub fn cairo_scaled_font_get_font_matrix(
        scaled_font: *mut cairo_scaled_font_t,
        font_matrix: *mut cairo_matrix_t,
    );
    pub fn cairo_scaled_font_get_ctm(
        scaled_font: *mut cairo_scaled_font_t,
        ctm: *mut cairo_matrix_t,
    );
    pub fn cairo_scaled_font_get_scale_matrix(
        scaled_font: *mut cairo_scaled_font_t,
        scale_matrix: *mut cairo_matrix_t,
    );
    pub fn cairo_scaled_font_get_font_options(
        scaled_font: *mut cairo_scaled_font_t,
        options: *mut cairo_font_options_t,
    );

    pub fn cairo_glyph_allocate(num_glyphs: c_int) -> *mut cairo_glyph_t;
    pub fn cairo_glyph_free(glyphs: *mut cairo_glyph_t);
    pub fn cairo_text_cluster_allocate(num_clusters: c_int) -> *mut cairo_text_cluster_t;
    pub fn cairo_text_cluster_free(clusters: *mut cairo_text_cluster_t);

    pub fn cairo_toy_font_face_create(
        family: *const c_char,
        slant: cairo_font_slant_t,
        weight: cairo_font_weight_t,
    ) -> *mut cairo_font_face_t;
    pub fn cairo_toy_font_face_get_family(font_face: *mut cairo_font_face_t) -> *const c_char;
    pub fn cairo_toy_font_face_get_slant(font_face: *mut cairo_font_face_t) -> cairo_font_slant_t;
    pub fn cairo_toy_font_face_get_weight(font_face: *mut cairo_font_face_t)
        -> cairo_font_weight_t;

    pub fn cairo_user_font_face_create() -> *mut cairo_font_face_t;
    pub fn cairo_user_font_face_set_init_func(
        font_face: *mut cairo_font_face_t,
        init_func: cairo_user_scaled_font_init_func_t,
    );
    pub fn cairo_user_font_face_get_init_func(
        font_face: *mut cairo_font_face_t,
    ) -> cairo_user_scaled_font_init_func_t;
    pub fn cairo_user_font_face_set_render_glyph_func(
        font_face: *mut cairo_font_face_t,
        render_glyph_func: cairo_user_scaled_font_render_glyph_func_t,
    );
    pub fn cairo_user_font_face_get_render_glyph_func(
        font_face: *mut cairo_font_face_t,
    ) -> cairo_user_scaled_font_render_glyph_func_t;
    pub fn cairo_user_font_face_set_text_to_glyphs_func(
        font_face: *mut cairo_font_face_t,
        text_to_glyphs_func: cairo_user_scaled_font_text_to_glyphs_func_t,
    );
    pub fn cairo_user_font_face_get_text_to_glyphs_func(
        font_face: *mut cairo_font_face_t,
    ) -> cairo_user_scaled_font_text_to_glyphs_func_t;
    pub fn cairo_user_font_face_set_unicode_to_glyph_func(
        font_face: *mut cairo_font_face_t,
        unicode_to_glyph_func: cairo_user_scaled_font_unicode_to_glyph_func_t,
    );
    pub fn cairo_user_font_face_get_unicode_to_glyph_func(
        font_face: *mut cairo_font_face_t,
    ) -> cairo_user_scaled_font_unicode_to_glyph_func_t;

    pub fn cairo_font_options_create() -> *mut cairo_font_options_t;
    pub fn cairo_font_options_copy(original: *const cairo_font_options_t)
        -> *mut cairo_font_options_t;
    pub fn cairo_font_options_destroy(options: *mut cairo_font_options_t);
    pub fn cairo_font_options_status(options: *mut cairo_font_options_t) -> cairo_status_t;
    pub fn cairo_font_options_merge(
        options: *mut cairo_font_options_t,
        other: *const cairo_font_options_t,
    );
    pub fn cairo_font_options_equal(
        options: *const cairo_font_options_t,
        other: *const cairo_font_options_t,
    ) -> cairo_bool_t;
    pub fn cairo_font_options_hash(options: *const cairo_font_options_t) -> c_ulong;
    pub fn cairo_font_options_set_antialias(
        options: *mut cairo_font_options_t,
        antialias: cairo_antialias_t,
    );
    pub fn cairo_font_options_get_antialias(
        options: *const cairo_font_options_t,
    ) -> cairo_antialias_t;
    pub fn cairo_font_options_set_subpixel_order(
        options: *mut cairo_font_options_t,
        subpixel_order: cairo_subpixel_order_t,
    );
    pub fn cairo_font_options_get_subpixel_order(
        options: *const cairo_font_options_t,
    ) -> cairo_subpixel_order_t;
    pub fn cairo_font_options_set_hint_style(
        options: *mut cairo_font_options_t,
        hint_style: cairo_hint_style_t,
    );
    pub fn cairo_font_options_get_hint_style(
        options: *const cairo_font_options_t,
    ) -> cairo_hint_style_t;
    pub fn cairo_font_options_set_hint_metrics(
        options: *mut cairo_font_options_t,
        hint_metrics: cairo_hint_metrics_t,
    );
    pub fn cairo_font_options_get_hint_metrics(
        options: *const cairo_font_options_t,
    ) -> cairo_hint_metrics_t;

    pub fn cairo_surface_create_similar(
        other: *mut cairo_surface_t,
        content: cairo_content_t,
        width: c_int,
        height: c_int,
    ) -> *mut cairo_surface_t;
    pub fn cairo_surface_reference(surface: *mut cairo_surface_t) -> *mut cairo_surface_t;
    pub fn cairo_surface_destroy(surface: *mut cairo_surface_t);
    pub fn cairo_surface_get_reference_count(surface: *mut cairo_surface_t) -> c_uint;
    pub fn cairo_surface_status(surface: *mut cairo_surface_t) -> cairo_status_t;
    pub fn cairo_surface_get_type(surface: *mut cairo_surface_t) -> cairo_surface_type_t;
    pub fn cairo_surface_get_content(surface: *mut cairo_surface_t) -> cairo_content_t;
    pub fn cairo_surface_get_device(surface: *mut cairo_surface_t) -> *mut cairo_device_t;
    pub fn cairo_surface_finish(surface: *mut cairo_surface_t);
    pub fn cairo_surface_flush(surface: *mut cairo_surface_t);
    pub fn cairo_surface_get_font_options(
        surface: *mut cairo_surface_t,
        options: *mut cairo_font_options_t,
    );
    pub fn cairo_surface_mark_dirty(surface: *mut cairo_surface_t);
    pub fn cairo_surface_mark_dirty_rectangle(
        surface: *mut cairo_surface_t,
        x: c_int,
        y: c_int,
        width: c_int,
        height: c_int,
    );
    pub fn cairo_surface_set_device_offset(
        surface: *mut cairo_surface_t,
        x_offset: c_double,
        y_offset: c_double,
    );
    pub fn cairo_surface_get_device_offset(
        surface: *mut cairo_surface_t,
        x_offset: *mut c_double,
        y_offset: *mut c_double,
    );
    pub fn cairo_surface_set_fallback_resolution(
        surface: *mut cairo_surface_t,
        x_pixels_per_inch: c_double,
        y_pixels_per_inch: c_double,
    );
    pub fn cairo_surface_get_fallback_resolution(
        surface: *mut cairo_surface_t,
        x_pixels_per_inch: *mut c_double,
        y_pixels_per_inch: *mut c_double,
    );
    pub fn cairo_surface_write_to_png(
        surface: *mut cairo_surface_t,
        filename: *const c_char,
    ) -> cairo_status_t;

    pub fn cairo_image_surface_create(
        format: cairo_format_t,
        width: c_int,
        height: c_int,
    ) -> *mut cairo_surface_t;
    pub fn cairo_image_surface_get_data(surface: *mut cairo_surface_t) -> *mut c_uchar;
    pub fn cairo_image_surface_get_format(surface: *mut cairo_surface_t) -> cairo_format_t;
    pub fn cairo_image_surface_get_width(surface: *mut cairo_surface_t) -> c_int;
    pub fn cairo_image_surface_get_height(surface: *mut cairo_surface_t) -> c_int;
    pub fn cairo_image_surface_get_stride(surface: *mut cairo_surface_t) -> c_int;
    pub fn cairo_format_stride_for_width(format: cairo_format_t, width: c_int) -> c_int;

    pub fn cairo_recording_surface_create(
        content: cairo_content_t,
        extents: *const cairo_rectangle_t,
    ) -> *mut cairo_surface_t;
    pub fn cairo_recording_surface_ink_extents(
        surface: *mut cairo_surface_t,
        x0: *mut c_double,
        y0: *mut c_double,
        width: *mut c_double,
        height: *mut c_double,
    );
    pub fn cairo_recording_surface_get_extents(
        surface: *mut cairo_surface_t,
        extents: *mut cairo_rectangle_t,
    ) -> cairo_bool_t;

    pub fn cairo_pattern_create_rgb(
        red: c_double,
        green: c_double,
        blue: c_double,
    ) -> *mut cairo_pattern_t;
    pub fn cairo_pattern_create_rgba(
        red: c_double,
        green: c_double,
        blue: c_double,
        alpha: c_double,
    ) -> *mut cairo_pattern_t;
    pub fn cairo_pattern_create_for_surface(surface: *mut cairo_surface_t)
        -> *mut cairo_pattern_t;
    pub fn cairo_pattern_create_linear(
        x0: c_double,
        y0: c_double,
        x1: c_double,
        y1: c_double,
    ) -> *mut cairo_pattern_t;
    pub fn cairo_pattern_create_radial(
        cx0: c_double,
        cy0: c_double,
        radius0: c_double,
        cx1: c_double,
        cy1: c_double,
        radius1: c_double,
    ) -> *mut cairo_pattern_t;
    pub fn cairo_pattern_reference(pattern: *mut cairo_pattern_t) -> *mut cairo_pattern_t;
    pub fn cairo_pattern_destroy(pattern: *mut cairo_pattern_t);
    pub fn cairo_pattern_get_reference_count(pattern: *mut cairo_pattern_t) -> c_uint;
    pub fn cairo_pattern_status(pattern: *mut cairo_pattern_t) -> cairo_status_t;
    pub fn cairo_pattern_get_type(pattern: *mut cairo_pattern_t) -> cairo_pattern_type_t;
    pub fn cairo_pattern_add_color_stop_rgb(
        pattern: *mut cairo_pattern_t,
        offset: c_double,
        red: c_double,
        green: c_double,
        blue: c_double,
    );
    pub fn cairo_pattern_add_color_stop_rgba(
        pattern: *mut cairo_pattern_t,
        offset: c_double,
        red: c_double,
        green: c_double,
        blue: c_double,
        alpha: c_double,
    );
    pub fn cairo_pattern_set_matrix(pattern: *mut cairo_pattern_t, matrix: *const cairo_matrix_t);
    pub fn cairo_pattern_get_matrix(pattern: *mut cairo_pattern_t, matrix: *mut cairo_matrix_t);
    pub fn cairo_pattern_set_extend(pattern: *mut cairo_pattern_t, extend: cairo_extend_t);
    pub fn cairo_pattern_get_extend(pattern: *mut cairo_pattern_t) -> cairo_extend_t;
    pub fn cairo_pattern_set_filter(pattern: *mut cairo_pattern_t, filter: cairo_filter_t);
    pub fn cairo_pattern_get_filter(pattern: *mut cairo_pattern_t) -> cairo_filter_t;
    pub fn cairo_pattern_get_rgba(
        pattern: *mut cairo_pattern_t,
        red: *mut c_double,
        green: *mut c_double,
        blue: *mut c_double,
        alpha: *mut c_double,
    ) -> cairo_status_t;
    pub fn cairo_pattern_get_surface(
        pattern: *mut cairo_pattern_t,
        surface: *mut *mut cairo_surface_t,
    ) -> cairo_status_t;
    pub fn cairo_pattern_get_color_stop_count(
        pattern: *mut cairo_pattern_t,
        count: *mut c_int,
    ) -> cairo_status_t;
    pub fn cairo_pattern_get_color_stop_rgba(
        pattern: *mut cairo_pattern_t,
        index: c_int,
        offset: *mut c_double,
        red: *mut c_double,
        green: *mut c_double,
        blue: *mut c_double,
        alpha: *mut c_double,
    ) -> cairo_status_t;
    pub fn cairo_pattern_get_linear_points(
        pattern: *mut cairo_pattern_t,
        x0: *mut c_double,
        y0: *mut c_double,
        x1: *mut c_double,
        y1: *mut c_double,
    ) -> cairo_status_t;
    pub fn cairo_pattern_get_radial_circles(
        pattern: *mut cairo_pattern_t,
        x0: *mut c_double,
        y0: *mut c_double,
        r0: *mut c_double,
        x1: *mut c_double,
        y1: *mut c_double,
        r1: *mut c_double,
    ) -> cairo_status_t;

    pub fn cairo_matrix_init(
        matrix: *mut cairo_matrix_t,
        xx: c_double,
        yx: c_double,
        xy: c_double,
        yy: c_double,
        x0: c_double,
        y0: c_double,
    );
    pub fn cairo_matrix_init_identity(matrix: *mut cairo_matrix_t);
    pub fn cairo_matrix_init_translate(matrix: *mut cairo_matrix_t, tx: c_double, ty: c_double);
    pub fn cairo_matrix_init_scale(matrix: *mut cairo_matrix_t, sx: c_double, sy: c_double);
    pub fn cairo_matrix_init_rotate(matrix: *mut cairo_matrix_t, radians: c_double);
    pub fn cairo_matrix_translate(matrix: *mut cairo_matrix_t, tx: c_double, ty: c_double);
    pub fn cairo_matrix_scale(matrix: *mut cairo_matrix_t, sx: c_double, sy: c_double);
    pub fn cairo_matrix_rotate(matrix: *mut cairo_matrix_t, radians: c_double);
    pub fn cairo_matrix_invert(matrix: *mut cairo_matrix_t) -> cairo_status_t;
    pub fn cairo_matrix_multiply(
        result: *mut cairo_matrix_t,
        a: *const cairo_matrix_t,
        b: *const cairo_matrix_t,
    );
    pub fn cairo_matrix_transform_distance(
        matrix: *const cairo_matrix_t,
        dx: *mut c_double,
        dy: *mut c_double,
    );
    pub fn cairo_matrix_transform_point(
        matrix: *const cairo_matrix_t,
        x: *mut c_double,
        y: *mut c_double,
    );

    pub fn cairo_region_create() -> *mut cairo_region_t;
    pub fn cairo_region_create_rectangle(
        rectangle: *const cairo_rectangle_int_t,
    ) -> *mut cairo_region_t;
    pub fn cairo_region_create_rectangles(
        rects: *const cairo_rectangle_int_t,
        count: c_int,
    ) -> *mut cairo_region_t;
    pub fn cairo_region_copy(original: *const cairo_region_t) -> *mut cairo_region_t;
    pub fn cairo_region_reference(region: *mut cairo_region_t) -> *mut cairo_region_t;
    pub fn cairo_region_destroy(region: *mut cairo_region_t);
    pub fn cairo_region_equal(a: *const cairo_region_t, b: *const cairo_region_t) -> cairo_bool_t;
    pub fn cairo_region_status(region: *const cairo_region_t) -> cairo_status_t;
    pub fn cairo_region_get_extents(
        region: *const cairo_region_t,
        extents: *mut cairo_rectangle_int_t,
    );
    pub fn cairo_region_num_rectangles(region: *const cairo_region_t) -> c_int;
    pub fn cairo_region_get_rectangle(
        region: *const cairo_region_t,
        nth: c_int,
        rectangle: *mut cairo_rectangle_int_t,
    );
    pub fn cairo_region_is_empty(region: *const cairo_region_t) -> cairo_bool_t;
    pub fn cairo_region_contains_rectangle(
        region: *const cairo_region_t,
        rectangle: *const cairo_rectangle_int_t,
    ) -> cairo_region_overlap_t;
    pub fn cairo_region_contains_point(
        region: *const cairo_region_t,
        x: c_int,
        y: c_int,
    ) -> cairo_bool_t;
    pub fn cairo_region_translate(region: *mut cairo_region_t, dx: c_int, dy: c_int);
    pub fn cairo_region_subtract(
        dst: *mut cairo_region_t,
        other: *const cairo_region_t,
    ) -> cairo_status_t;
    pub fn cairo_region_subtract_rectangle(
        dst: *mut cairo_region_t,
        rectangle: *const cairo_rectangle_int_t,
    ) -> cairo_status_t;
    pub fn cairo_region_intersect(
        dst: *mut cairo_region_t,
        other: *const cairo_region_t,
    ) -> cairo_status_t;
    pub fn cairo_region_intersect_rectangle(
        dst: *mut cairo_region_t,
        rectangle: *const cairo_rectangle_int_t,
    ) -> cairo_status_t;
    pub fn cairo_region_union(
        dst: *mut cairo_region_t,
        other: *const cairo_region_t,
    ) -> cairo_status_t;
    pub fn cairo_region_union_rectangle(
        dst: *mut cairo_region_t,
        rectangle: *const cairo_rectangle_int_t,
    ) -> cairo_status_t;
    pub fn cairo_region_xor(
        dst: *mut cairo_region_t,
        other: *const cairo_region_t,
    ) -> cairo_status_t;
    pub fn cairo_region_xor_rectangle(
        dst: *mut cairo_region_t,
        rectangle: *const cairo_rectangle_int_t,
    ) -> cairo_status_t;

    pub fn cairo_device_reference(device: *mut cairo_device_t) -> *mut cairo_device_t;
    pub fn cairo_device_destroy(device: *mut cairo_device_t);
    pub fn cairo_device_get_reference_count(device: *mut cairo_device_t) -> c_uint;
    pub fn cairo_device_status(device: *mut cairo_device_t) -> cairo_status_t;
    pub fn cairo_device_finish(device: *mut cairo_device_t);
    pub fn cairo_device_flush(device: *mut cairo_device_t);
    pub fn cairo_device_acquire(device: *mut cairo_device_t) -> cairo_status_t;
    pub fn cairo_device_release(device: *mut cairo_device_t);
}
