// Copyright 2026 the Glyph Atlas Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Errors for building and loading atlases.

use core::fmt;

use crate::packer::PackError;
use crate::raster::RasterizeError;

/// Error returned when an atlas cannot be built.
///
/// No partial atlas is produced when a build fails.
#[derive(Clone, Debug, PartialEq, Eq)]
#[non_exhaustive]
pub enum BuildError {
    /// The configured atlas width is zero.
    ZeroWidth,
    /// The rasterizer could not produce a glyph.
    Rasterize(RasterizeError),
    /// A glyph bitmap is wider than the atlas.
    GlyphTooWide {
        /// Font glyph identifier.
        glyph_id: u32,
        /// Width of the glyph bitmap.
        width: u32,
        /// Width of the atlas.
        atlas_width: u32,
    },
    /// A glyph's pixel data doesn't match its reported dimensions.
    BitmapSizeMismatch {
        /// Font glyph identifier.
        glyph_id: u32,
        /// `width * height` as reported by the rasterizer.
        expected: usize,
        /// Length of the pixel data.
        actual: usize,
    },
    /// The packed atlas would not be addressable.
    AtlasTooLarge,
}

impl BuildError {
    pub(crate) fn from_pack(glyph_id: u32, error: PackError) -> Self {
        match error {
            PackError::GlyphTooWide { width, atlas_width } => Self::GlyphTooWide {
                glyph_id,
                width,
                atlas_width,
            },
            PackError::BitmapSizeMismatch { expected, actual } => Self::BitmapSizeMismatch {
                glyph_id,
                expected,
                actual,
            },
            PackError::AtlasTooLarge => Self::AtlasTooLarge,
        }
    }
}

impl fmt::Display for BuildError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::ZeroWidth => write!(f, "atlas width must be non-zero"),
            Self::Rasterize(err) => write!(f, "rasterization failed: {err}"),
            Self::GlyphTooWide {
                glyph_id,
                width,
                atlas_width,
            } => write!(
                f,
                "glyph {glyph_id} is {width} px wide, wider than the {atlas_width} px atlas"
            ),
            Self::BitmapSizeMismatch {
                glyph_id,
                expected,
                actual,
            } => write!(
                f,
                "glyph {glyph_id} has {actual} bytes of pixel data, expected {expected}"
            ),
            Self::AtlasTooLarge => write!(f, "atlas dimensions overflow"),
        }
    }
}

impl core::error::Error for BuildError {
    fn source(&self) -> Option<&(dyn core::error::Error + 'static)> {
        match self {
            Self::Rasterize(err) => Some(err),
            _ => None,
        }
    }
}

impl From<RasterizeError> for BuildError {
    fn from(err: RasterizeError) -> Self {
        Self::Rasterize(err)
    }
}

/// Kinds of errors that can occur when decoding a serialized atlas.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[non_exhaustive]
pub enum DecodeErrorKind {
    /// The data ended before a declared field or array.
    UnexpectedEof,
    /// The versioned envelope does not start with the expected magic bytes.
    BadMagic,
    /// The versioned envelope declares a format version this crate can't read.
    UnsupportedVersion(u32),
    /// The header declares a non-empty atlas with zero width.
    InvalidDimensions,
    /// The fallback index does not refer to a placement.
    InvalidFallback,
    /// An index entry does not refer to a placement.
    InvalidIndexEntry {
        /// Code point owning the entry.
        codepoint: u32,
        /// The out-of-range compact index.
        index: u32,
    },
    /// A placement rectangle extends past the atlas bounds.
    PlacementOutOfBounds {
        /// Compact index of the placement.
        index: usize,
    },
    /// Data remains after the index array.
    TrailingBytes,
    /// A declared size does not fit in memory.
    TooLarge,
}

/// Error returned when decoding a serialized atlas.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct DecodeError {
    kind: DecodeErrorKind,
    offset: usize,
}

impl DecodeError {
    pub(crate) const fn new(kind: DecodeErrorKind, offset: usize) -> Self {
        Self { kind, offset }
    }

    /// Returns the error kind.
    pub const fn kind(self) -> DecodeErrorKind {
        self.kind
    }

    /// Returns the byte offset where the error was detected.
    pub const fn byte_offset(self) -> usize {
        self.offset
    }
}

impl fmt::Display for DecodeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.kind {
            DecodeErrorKind::UnexpectedEof => write!(f, "unexpected end of data")?,
            DecodeErrorKind::BadMagic => write!(f, "not a glyph atlas file")?,
            DecodeErrorKind::UnsupportedVersion(version) => {
                write!(f, "unsupported format version {version}")?;
            }
            DecodeErrorKind::InvalidDimensions => write!(f, "invalid atlas dimensions")?,
            DecodeErrorKind::InvalidFallback => write!(f, "fallback index out of range")?,
            DecodeErrorKind::InvalidIndexEntry { codepoint, index } => write!(
                f,
                "index entry {index} for code point {codepoint} out of range"
            )?,
            DecodeErrorKind::PlacementOutOfBounds { index } => {
                write!(f, "placement {index} lies outside the atlas")?;
            }
            DecodeErrorKind::TrailingBytes => write!(f, "trailing bytes after atlas data")?,
            DecodeErrorKind::TooLarge => write!(f, "declared size too large")?,
        }
        write!(f, " at byte {}", self.offset)
    }
}

impl core::error::Error for DecodeError {}

/// Error returned when loading an atlas file.
#[cfg(feature = "std")]
#[derive(Debug)]
pub enum LoadError {
    /// Reading the file failed.
    Io(std::io::Error),
    /// The file contents are not a valid atlas.
    Decode(DecodeError),
}

#[cfg(feature = "std")]
impl fmt::Display for LoadError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Io(err) => write!(f, "failed to read atlas file: {err}"),
            Self::Decode(err) => write!(f, "failed to decode atlas file: {err}"),
        }
    }
}

#[cfg(feature = "std")]
impl core::error::Error for LoadError {
    fn source(&self) -> Option<&(dyn core::error::Error + 'static)> {
        match self {
            Self::Io(err) => Some(err),
            Self::Decode(err) => Some(err),
        }
    }
}

#[cfg(feature = "std")]
impl From<std::io::Error> for LoadError {
    fn from(err: std::io::Error) -> Self {
        Self::Io(err)
    }
}

#[cfg(feature = "std")]
impl From<DecodeError> for LoadError {
    fn from(err: DecodeError) -> Self {
        Self::Decode(err)
    }
}
