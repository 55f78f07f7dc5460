// Copyright 2026 the Glyph Atlas Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Row-greedy shelf packing of glyph bitmaps into a fixed-width atlas.

use alloc::vec::Vec;
use core::fmt;

use crate::placement::GlyphPlacement;
use crate::raster::RasterizedGlyph;

/// Error returned when a glyph cannot be packed.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[non_exhaustive]
pub enum PackError {
    /// The glyph is wider than the atlas, so it fits on no row.
    GlyphTooWide {
        /// Width of the glyph bitmap.
        width: u32,
        /// Width of the atlas.
        atlas_width: u32,
    },
    /// The glyph's pixel data doesn't match its dimensions.
    BitmapSizeMismatch {
        /// `width * height`.
        expected: usize,
        /// Length of the pixel data.
        actual: usize,
    },
    /// The atlas would grow past what can be addressed.
    AtlasTooLarge,
}

impl fmt::Display for PackError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::GlyphTooWide { width, atlas_width } => write!(
                f,
                "glyph is {width} px wide, wider than the {atlas_width} px atlas"
            ),
            Self::BitmapSizeMismatch { expected, actual } => write!(
                f,
                "glyph has {actual} bytes of pixel data, expected {expected}"
            ),
            Self::AtlasTooLarge => write!(f, "atlas dimensions overflow"),
        }
    }
}

impl core::error::Error for PackError {}

/// Packs glyph bitmaps left-to-right, top-to-bottom into rows ("shelves").
///
/// A glyph that doesn't fit in the remaining width of the current row closes it and starts
/// a new one below; the row's height is that of its tallest glyph. There is no
/// backtracking, so placements are deterministic for a given input order.
///
/// The pixel buffer is kept rectangular (`width * rows` bytes) at every step. Any cell that
/// isn't covered by a glyph is zero.
pub struct ShelfPacker {
    width: u32,
    pixels: Vec<u8>,
    placements: Vec<GlyphPlacement>,
    /// Cursor within the current row.
    x: u32,
    /// Top of the current row.
    y: u32,
    /// Height of the tallest glyph in the current row.
    row_height: u32,
}

impl ShelfPacker {
    /// Creates an empty packer for an atlas of the given width.
    pub fn new(width: u32) -> Self {
        Self {
            width,
            pixels: Vec::new(),
            placements: Vec::new(),
            x: 0,
            y: 0,
            row_height: 0,
        }
    }

    /// Returns the fixed atlas width.
    pub fn width(&self) -> u32 {
        self.width
    }

    /// Returns the number of glyphs packed so far.
    pub fn len(&self) -> usize {
        self.placements.len()
    }

    /// Returns `true` if nothing has been packed.
    pub fn is_empty(&self) -> bool {
        self.placements.is_empty()
    }

    /// Packs a glyph and returns its compact index.
    ///
    /// On error the packer is left unchanged.
    pub fn push(&mut self, glyph: &RasterizedGlyph) -> Result<u32, PackError> {
        let (w, h) = (glyph.width, glyph.height);
        if w > self.width {
            return Err(PackError::GlyphTooWide {
                width: w,
                atlas_width: self.width,
            });
        }
        let expected = (w as usize)
            .checked_mul(h as usize)
            .ok_or(PackError::AtlasTooLarge)?;
        if glyph.data.len() != expected {
            return Err(PackError::BitmapSizeMismatch {
                expected,
                actual: glyph.data.len(),
            });
        }
        let index = u32::try_from(self.placements.len()).map_err(|_| PackError::AtlasTooLarge)?;

        let wraps = u64::from(self.x) + u64::from(w) > u64::from(self.width);
        let (x, y, row_height) = if wraps {
            (0, self.y + self.row_height, 0)
        } else {
            (self.x, self.y, self.row_height)
        };
        let band_height = row_height.max(h);
        let rows = y.checked_add(band_height).ok_or(PackError::AtlasTooLarge)?;
        let len = (rows as usize)
            .checked_mul(self.width as usize)
            .ok_or(PackError::AtlasTooLarge)?;

        if wraps {
            log::trace!(
                "closing atlas row at y={} ({} px tall, {} px used)",
                self.y,
                self.row_height,
                self.x
            );
        }
        // Growing the band zero-fills everything below the previous bottom edge, which
        // covers both the left padding under earlier glyphs and the right padding of rows.
        if len > self.pixels.len() {
            self.pixels.resize(len, 0);
        }
        if w > 0 {
            let stride = self.width as usize;
            for (row, src) in glyph.data.chunks_exact(w as usize).enumerate() {
                let start = (y as usize + row) * stride + x as usize;
                self.pixels[start..start + src.len()].copy_from_slice(src);
            }
        }

        self.placements.push(GlyphPlacement {
            x,
            y,
            width: w,
            height: h,
            bitmap_left: glyph.bitmap_left,
            bitmap_top: glyph.bitmap_top,
        });
        self.x = x + w;
        self.y = y;
        self.row_height = band_height;
        Ok(index)
    }

    /// Closes the final row and returns the packed atlas.
    pub fn finish(self) -> PackedAtlas {
        let height = self.y + self.row_height;
        debug_assert_eq!(
            self.pixels.len(),
            self.width as usize * height as usize,
            "pixel buffer must stay rectangular"
        );
        PackedAtlas {
            width: self.width,
            height,
            pixels: self.pixels,
            placements: self.placements,
        }
    }
}

impl fmt::Debug for ShelfPacker {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ShelfPacker")
            .field("width", &self.width)
            .field("placements", &self.placements.len())
            .field("x", &self.x)
            .field("y", &self.y)
            .field("row_height", &self.row_height)
            .finish_non_exhaustive()
    }
}

/// The output of a [`ShelfPacker`]: a `width * height` coverage buffer and the placements
/// in packing order.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PackedAtlas {
    /// Atlas width in pixels.
    pub width: u32,
    /// Atlas height in pixels.
    pub height: u32,
    /// Row-major 8-bit coverage.
    pub pixels: Vec<u8>,
    /// Placements, indexed by compact index.
    pub placements: Vec<GlyphPlacement>,
}
