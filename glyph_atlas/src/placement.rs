// Copyright 2026 the Glyph Atlas Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Per-glyph placement records and query results.

use alloc::vec::Vec;

/// Location and metrics of a packed glyph within the atlas.
///
/// Placements are immutable once packed. Their position in
/// [`GlyphAtlas::placements`](crate::GlyphAtlas::placements) is the glyph's compact index.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
#[repr(C)]
pub struct GlyphPlacement {
    /// X position in atlas (pixels).
    pub x: u32,
    /// Y position in atlas (pixels).
    pub y: u32,
    /// Width of glyph bitmap (pixels).
    pub width: u32,
    /// Height of glyph bitmap (pixels).
    pub height: u32,
    /// Horizontal bearing (offset from the pen position to the left edge of the bitmap).
    pub bitmap_left: i32,
    /// Vertical bearing (offset from the baseline to the top edge of the bitmap).
    pub bitmap_top: i32,
}

impl GlyphPlacement {
    /// Returns the rendering metrics of this placement.
    pub const fn metrics(&self) -> GlyphMetrics {
        GlyphMetrics {
            width: self.width,
            height: self.height,
            bitmap_left: self.bitmap_left,
            bitmap_top: self.bitmap_top,
        }
    }

    /// Returns `true` if the placement covers no pixels.
    pub const fn is_empty(&self) -> bool {
        self.width == 0 || self.height == 0
    }
}

/// Size and bearings of a glyph bitmap.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct GlyphMetrics {
    /// Width of the bitmap in pixels.
    pub width: u32,
    /// Height of the bitmap in pixels.
    pub height: u32,
    /// Horizontal bearing.
    pub bitmap_left: i32,
    /// Vertical bearing.
    pub bitmap_top: i32,
}

/// Normalized atlas coordinates of a glyph, for GPU sampling.
///
/// Coordinates address pixel centers inclusively: `left` and `right` are the first and last
/// pixel columns of the glyph divided by `width - 1`, and likewise for rows.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
#[repr(C)]
pub struct TextureCoord {
    /// Left edge, in `[0, 1]`.
    pub left: f32,
    /// Top edge, in `[0, 1]`.
    pub top: f32,
    /// Right edge, in `[0, 1]`.
    pub right: f32,
    /// Bottom edge, in `[0, 1]`.
    pub bottom: f32,
}

impl TextureCoord {
    pub(crate) fn new(placement: &GlyphPlacement, atlas_width: u32, atlas_height: u32) -> Self {
        let (left, right) = span(placement.x, placement.width, atlas_width);
        let (top, bottom) = span(placement.y, placement.height, atlas_height);
        Self {
            left,
            top,
            right,
            bottom,
        }
    }
}

/// Maps the inclusive pixel range `[start, start + len - 1]` onto `[0, 1]`.
///
/// Empty ranges collapse onto `start`, and pixel positions are clamped to the last row or
/// column so that degenerate placements stay in range.
fn span(start: u32, len: u32, extent: u32) -> (f32, f32) {
    let last = extent.saturating_sub(1);
    let end = start.saturating_add(len).saturating_sub(1).max(start);
    let denom = last.max(1) as f32;
    (start.min(last) as f32 / denom, end.min(last) as f32 / denom)
}

/// A standalone copy of one glyph's bitmap.
///
/// The pixel data is independent of the atlas it was cropped from.
#[derive(Clone, Default, PartialEq, Eq)]
pub struct CharacterImage {
    pub(crate) width: u32,
    pub(crate) height: u32,
    pub(crate) bitmap_left: i32,
    pub(crate) bitmap_top: i32,
    pub(crate) data: Vec<u8>,
}

impl CharacterImage {
    /// Width of the image in pixels.
    pub fn width(&self) -> u32 {
        self.width
    }

    /// Height of the image in pixels.
    pub fn height(&self) -> u32 {
        self.height
    }

    /// Horizontal bearing of the glyph.
    pub fn bitmap_left(&self) -> i32 {
        self.bitmap_left
    }

    /// Vertical bearing of the glyph.
    pub fn bitmap_top(&self) -> i32 {
        self.bitmap_top
    }

    /// Row-major 8-bit coverage, `width * height` bytes.
    pub fn data(&self) -> &[u8] {
        &self.data
    }

    /// Consumes the image and returns its pixel data.
    pub fn into_data(self) -> Vec<u8> {
        self.data
    }
}

impl core::fmt::Debug for CharacterImage {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("CharacterImage")
            .field("width", &self.width)
            .field("height", &self.height)
            .field("bitmap_left", &self.bitmap_left)
            .field("bitmap_top", &self.bitmap_top)
            .finish_non_exhaustive()
    }
}
