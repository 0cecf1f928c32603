// SPDX-License-Identifier: GPL-3.0-or-later
use crate::ffi;
use std::{
    ffi::{CStr, NulError},
    fmt,
};

/// The engine's status codes, one variant per `cairo_status_t` value.
#[derive(Copy, Clone, Eq, PartialEq, Debug, Default)]
pub enum Status {
    #[default]
    Success,
    NoMemory,
    InvalidRestore,
    InvalidPopGroup,
    NoCurrentPoint,
    InvalidMatrix,
    InvalidStatus,
    NullPointer,
    InvalidString,
    InvalidPathData,
    ReadError,
    WriteError,
    SurfaceFinished,
    SurfaceTypeMismatch,
    PatternTypeMismatch,
    InvalidContent,
    InvalidFormat,
    InvalidVisual,
    FileNotFound,
    InvalidDash,
    InvalidDscComment,
    InvalidIndex,
    ClipNotRepresentable,
    TempFileError,
    InvalidStride,
    FontTypeMismatch,
    UserFontImmutable,
    UserFontError,
    NegativeCount,
    InvalidClusters,
    InvalidSlant,
    InvalidWeight,
    InvalidSize,
    UserFontNotImplemented,
    DeviceTypeMismatch,
    DeviceError,
    InvalidMeshConstruction,
    DeviceFinished,
    Jbig2GlobalMissing,
    PngError,
    FreetypeError,
    Win32GdiError,
    TagError,
}

impl Status {
    pub fn to_ffi(self) -> ffi::cairo_status_t {
        match self {
            Self::Success => ffi::CAIRO_STATUS_SUCCESS,
            Self::NoMemory => ffi::CAIRO_STATUS_NO_MEMORY,
            Self::InvalidRestore => ffi::CAIRO_STATUS_INVALID_RESTORE,
            Self::InvalidPopGroup => ffi::CAIRO_STATUS_INVALID_POP_GROUP,
            Self::NoCurrentPoint => ffi::CAIRO_STATUS_NO_CURRENT_POINT,
            Self::InvalidMatrix => ffi::CAIRO_STATUS_INVALID_MATRIX,
            Self::InvalidStatus => ffi::CAIRO_STATUS_INVALID_STATUS,
            Self::NullPointer => ffi::CAIRO_STATUS_NULL_POINTER,
            Self::InvalidString => ffi::CAIRO_STATUS_INVALID_STRING,
            Self::InvalidPathData => ffi::CAIRO_STATUS_INVALID_PATH_DATA,
            Self::ReadError => ffi::CAIRO_STATUS_READ_ERROR,
            Self::WriteError => ffi::CAIRO_STATUS_WRITE_ERROR,
            Self::SurfaceFinished => ffi::CAIRO_STATUS_SURFACE_FINISHED,
            Self::SurfaceTypeMismatch => ffi::CAIRO_STATUS_SURFACE_TYPE_MISMATCH,
            Self::PatternTypeMismatch => ffi::CAIRO_STATUS_PATTERN_TYPE_MISMATCH,
            Self::InvalidContent => ffi::CAIRO_STATUS_INVALID_CONTENT,
            Self::InvalidFormat => ffi::CAIRO_STATUS_INVALID_FORMAT,
            Self::InvalidVisual => ffi::CAIRO_STATUS_INVALID_VISUAL,
            Self::FileNotFound => ffi::CAIRO_STATUS_FILE_NOT_FOUND,
            Self::InvalidDash => ffi::CAIRO_STATUS_INVALID_DASH,
            Self::InvalidDscComment => ffi::CAIRO_STATUS_INVALID_DSC_COMMENT,
            Self::InvalidIndex => ffi::CAIRO_STATUS_INVALID_INDEX,
            Self::ClipNotRepresentable => ffi::CAIRO_STATUS_CLIP_NOT_REPRESENTABLE,
            Self::TempFileError => ffi::CAIRO_STATUS_TEMP_FILE_ERROR,
            Self::InvalidStride => ffi::CAIRO_STATUS_INVALID_STRIDE,
            Self::FontTypeMismatch => ffi::CAIRO_STATUS_FONT_TYPE_MISMATCH,
            Self::UserFontImmutable => ffi::CAIRO_STATUS_USER_FONT_IMMUTABLE,
            Self::UserFontError => ffi::CAIRO_STATUS_USER_FONT_ERROR,
            Self::NegativeCount => ffi::CAIRO_STATUS_NEGATIVE_COUNT,
            Self::InvalidClusters => ffi::CAIRO_STATUS_INVALID_CLUSTERS,
            Self::InvalidSlant => ffi::CAIRO_STATUS_INVALID_SLANT,
            Self::InvalidWeight => ffi::CAIRO_STATUS_INVALID_WEIGHT,
            Self::InvalidSize => ffi::CAIRO_STATUS_INVALID_SIZE,
            Self::UserFontNotImplemented => ffi::CAIRO_STATUS_USER_FONT_NOT_IMPLEMENTED,
            Self::DeviceTypeMismatch => ffi::CAIRO_STATUS_DEVICE_TYPE_MISMATCH,
            Self::DeviceError => ffi::CAIRO_STATUS_DEVICE_ERROR,
            Self::InvalidMeshConstruction => ffi::CAIRO_STATUS_INVALID_MESH_CONSTRUCTION,
            Self::DeviceFinished => ffi::CAIRO_STATUS_DEVICE_FINISHED,
            Self::Jbig2GlobalMissing => ffi::CAIRO_STATUS_JBIG2_GLOBAL_MISSING,
            Self::PngError => ffi::CAIRO_STATUS_PNG_ERROR,
            Self::FreetypeError => ffi::CAIRO_STATUS_FREETYPE_ERROR,
            Self::Win32GdiError => ffi::CAIRO_STATUS_WIN32_GDI_ERROR,
            Self::TagError => ffi::CAIRO_STATUS_TAG_ERROR,
        }
    }

    pub fn from_ffi(status: ffi::cairo_status_t) -> Self {
        match status {
            ffi::CAIRO_STATUS_SUCCESS => Self::Success,
            ffi::CAIRO_STATUS_NO_MEMORY => Self::NoMemory,
            ffi::CAIRO_STATUS_INVALID_RESTORE => Self::InvalidRestore,
            ffi::CAIRO_STATUS_INVALID_POP_GROUP => Self::InvalidPopGroup,
            ffi::CAIRO_STATUS_NO_CURRENT_POINT => Self::NoCurrentPoint,
            ffi::CAIRO_STATUS_INVALID_MATRIX => Self::InvalidMatrix,
            ffi::CAIRO_STATUS_NULL_POINTER => Self::NullPointer,
            ffi::CAIRO_STATUS_INVALID_STRING => Self::InvalidString,
            ffi::CAIRO_STATUS_INVALID_PATH_DATA => Self::InvalidPathData,
            ffi::CAIRO_STATUS_READ_ERROR => Self::ReadError,
            ffi::CAIRO_STATUS_WRITE_ERROR => Self::WriteError,
            ffi::CAIRO_STATUS_SURFACE_FINISHED => Self::SurfaceFinished,
            ffi::CAIRO_STATUS_SURFACE_TYPE_MISMATCH => Self::SurfaceTypeMismatch,
            ffi::CAIRO_STATUS_PATTERN_TYPE_MISMATCH => Self::PatternTypeMismatch,
            ffi::CAIRO_STATUS_INVALID_CONTENT => Self::InvalidContent,
            ffi::CAIRO_STATUS_INVALID_FORMAT => Self::InvalidFormat,
            ffi::CAIRO_STATUS_INVALID_VISUAL => Self::InvalidVisual,
            ffi::CAIRO_STATUS_FILE_NOT_FOUND => Self::FileNotFound,
            ffi::CAIRO_STATUS_INVALID_DASH => Self::InvalidDash,
            ffi::CAIRO_STATUS_INVALID_DSC_COMMENT => Self::InvalidDscComment,
            ffi::CAIRO_STATUS_INVALID_INDEX => Self::InvalidIndex,
            ffi::CAIRO_STATUS_CLIP_NOT_REPRESENTABLE => Self::ClipNotRepresentable,
            ffi::CAIRO_STATUS_TEMP_FILE_ERROR => Self::TempFileError,
            ffi::CAIRO_STATUS_INVALID_STRIDE => Self::InvalidStride,
            ffi::CAIRO_STATUS_FONT_TYPE_MISMATCH => Self::FontTypeMismatch,
            ffi::CAIRO_STATUS_USER_FONT_IMMUTABLE => Self::UserFontImmutable,
            ffi::CAIRO_STATUS_USER_FONT_ERROR => Self::UserFontError,
            ffi::CAIRO_STATUS_NEGATIVE_COUNT => Self::NegativeCount,
            ffi::CAIRO_STATUS_INVALID_CLUSTERS => Self::InvalidClusters,
            ffi::CAIRO_STATUS_INVALID_SLANT => Self::InvalidSlant,
            ffi::CAIRO_STATUS_INVALID_WEIGHT => Self::InvalidWeight,
            ffi::CAIRO_STATUS_INVALID_SIZE => Self::InvalidSize,
            ffi::CAIRO_STATUS_USER_FONT_NOT_IMPLEMENTED => Self::UserFontNotImplemented,
            ffi::CAIRO_STATUS_DEVICE_TYPE_MISMATCH => Self::DeviceTypeMismatch,
            ffi::CAIRO_STATUS_DEVICE_ERROR => Self::DeviceError,
            ffi::CAIRO_STATUS_INVALID_MESH_CONSTRUCTION => Self::InvalidMeshConstruction,
            ffi::CAIRO_STATUS_DEVICE_FINISHED => Self::DeviceFinished,
            ffi::CAIRO_STATUS_JBIG2_GLOBAL_MISSING => Self::Jbig2GlobalMissing,
            ffi::CAIRO_STATUS_PNG_ERROR => Self::PngError,
            ffi::CAIRO_STATUS_FREETYPE_ERROR => Self::FreetypeError,
            ffi::CAIRO_STATUS_WIN32_GDI_ERROR => Self::Win32GdiError,
            ffi::CAIRO_STATUS_TAG_ERROR => Self::TagError,
            _ => Self::InvalidStatus,
        }
    }
}

impl fmt::Display for Status {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let message = unsafe { CStr::from_ptr(ffi::cairo_status_to_string(self.to_ffi())) };
        f.write_str(message.to_str().unwrap_or("unknown status"))
    }
}

/// A non-success status reported by the engine after a forwarding call.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
#[error("{status}")]
pub struct Error {
    status: Status,
}

impl Error {
    pub fn new(status: Status) -> Self {
        Error { status }
    }

    pub fn status(self) -> Status {
        self.status
    }
}

impl From<NulError> for Error {
    fn from(_: NulError) -> Self {
        Error::new(Status::InvalidString)
    }
}

pub(crate) fn check(status: ffi::cairo_status_t) -> Result<(), Error> {
    if status == ffi::CAIRO_STATUS_SUCCESS {
        Ok(())
    } else {
        Err(Error::new(Status::from_ffi(status)))
    }
}
