// Copyright 2026 the Glyph Atlas Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The rasterization interface atlases are built from.

use alloc::vec::Vec;
use core::fmt;

/// A source of rasterized glyph bitmaps for one font at one size and resolution.
///
/// Opening the font is the implementor's constructor and closing it is its `Drop`; the
/// atlas builder only enumerates glyphs and rasterizes them.
pub trait GlyphRasterizer {
    /// Returns the number of glyphs in the font.
    ///
    /// This is used as the size of the code point domain when the build configuration
    /// doesn't bound it explicitly.
    fn glyph_count(&self) -> u32;

    /// Maps a code point to a glyph identifier, or `0` when the font has no glyph for it.
    fn glyph_id(&self, codepoint: u32) -> u32;

    /// Rasterizes a glyph into an 8-bit coverage bitmap.
    ///
    /// Glyph `0` is the font's placeholder for missing characters and must rasterize too.
    fn rasterize(&mut self, glyph_id: u32) -> Result<RasterizedGlyph, RasterizeError>;
}

/// A glyph bitmap produced by a [`GlyphRasterizer`].
#[derive(Clone, Default, PartialEq, Eq)]
pub struct RasterizedGlyph {
    /// Width of the bitmap in pixels.
    pub width: u32,
    /// Height of the bitmap in pixels.
    pub height: u32,
    /// Horizontal bearing.
    pub bitmap_left: i32,
    /// Vertical bearing.
    pub bitmap_top: i32,
    /// Row-major 8-bit coverage, `width * height` bytes.
    pub data: Vec<u8>,
}

impl RasterizedGlyph {
    /// Creates a rasterized glyph from its dimensions, bearings and pixel rows.
    pub fn new(width: u32, height: u32, bitmap_left: i32, bitmap_top: i32, data: Vec<u8>) -> Self {
        Self {
            width,
            height,
            bitmap_left,
            bitmap_top,
            data,
        }
    }

    /// Creates a glyph with no pixels, such as a space.
    pub fn empty(bitmap_left: i32, bitmap_top: i32) -> Self {
        Self::new(0, 0, bitmap_left, bitmap_top, Vec::new())
    }
}

impl fmt::Debug for RasterizedGlyph {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("RasterizedGlyph")
            .field("width", &self.width)
            .field("height", &self.height)
            .field("bitmap_left", &self.bitmap_left)
            .field("bitmap_top", &self.bitmap_top)
            .field("data_len", &self.data.len())
            .finish_non_exhaustive()
    }
}

/// Kinds of errors a [`GlyphRasterizer`] can report.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[non_exhaustive]
pub enum RasterizeErrorKind {
    /// The font data could not be parsed.
    InvalidFont,
    /// The glyph identifier is not in the font.
    UnknownGlyph,
    /// The glyph has no outline or bitmap that can be rendered.
    NoImage,
    /// The glyph rendered to a format other than 8-bit coverage.
    UnsupportedContent,
}

/// Error returned when a font cannot be opened or a glyph cannot be rasterized.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct RasterizeError {
    kind: RasterizeErrorKind,
    glyph_id: Option<u32>,
}

impl RasterizeError {
    /// Creates an error for a failure that isn't tied to a particular glyph.
    pub const fn new(kind: RasterizeErrorKind) -> Self {
        Self {
            kind,
            glyph_id: None,
        }
    }

    /// Creates an error for a failure rasterizing `glyph_id`.
    pub const fn for_glyph(kind: RasterizeErrorKind, glyph_id: u32) -> Self {
        Self {
            kind,
            glyph_id: Some(glyph_id),
        }
    }

    /// Returns the error kind.
    pub const fn kind(self) -> RasterizeErrorKind {
        self.kind
    }

    /// Returns the glyph being rasterized, if any.
    pub const fn glyph_id(self) -> Option<u32> {
        self.glyph_id
    }
}

impl fmt::Display for RasterizeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let msg = match self.kind {
            RasterizeErrorKind::InvalidFont => "invalid font data",
            RasterizeErrorKind::UnknownGlyph => "unknown glyph",
            RasterizeErrorKind::NoImage => "glyph has no renderable image",
            RasterizeErrorKind::UnsupportedContent => "unsupported glyph image content",
        };
        match self.glyph_id {
            Some(id) => write!(f, "{msg} (glyph {id})"),
            None => f.write_str(msg),
        }
    }
}

impl core::error::Error for RasterizeError {}
