// Copyright 2026 the Glyph Atlas Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Atlas build configuration.

/// Atlas width used when none is configured, in pixels.
pub const DEFAULT_ATLAS_WIDTH: u32 = 4096;

/// Typographic points per inch.
const POINTS_PER_INCH: f32 = 72.0;

/// Parameters for building a [`GlyphAtlas`](crate::GlyphAtlas).
///
/// An atlas is built once per (font, size, resolution) triple; this type carries the size,
/// the resolution and the packing parameters.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct AtlasConfig {
    /// Fixed width of the atlas texture, in pixels.
    pub width: u32,
    /// Point size glyphs are rasterized at.
    pub point_size: u32,
    /// Horizontal and vertical target resolution, in dots per inch.
    pub resolution: (u32, u32),
    /// Size of the code point domain.
    ///
    /// Code points `0..limit` are considered in increasing order. `None` uses the
    /// rasterizer's reported glyph count.
    pub codepoint_limit: Option<u32>,
}

impl AtlasConfig {
    /// Creates a configuration with the default width and resolution.
    pub const fn new(point_size: u32) -> Self {
        Self {
            width: DEFAULT_ATLAS_WIDTH,
            point_size,
            resolution: (72, 72),
            codepoint_limit: None,
        }
    }

    /// Sets the atlas width.
    #[must_use]
    pub const fn with_width(mut self, width: u32) -> Self {
        self.width = width;
        self
    }

    /// Sets the target resolution in dots per inch.
    #[must_use]
    pub const fn with_resolution(mut self, horizontal: u32, vertical: u32) -> Self {
        self.resolution = (horizontal, vertical);
        self
    }

    /// Bounds the code point domain to `0..limit`.
    #[must_use]
    pub const fn with_codepoint_limit(mut self, limit: u32) -> Self {
        self.codepoint_limit = Some(limit);
        self
    }

    /// Returns the vertical pixels-per-em for the configured point size and resolution.
    pub fn pixels_per_em(&self) -> f32 {
        self.point_size as f32 * self.resolution.1 as f32 / POINTS_PER_INCH
    }

    /// Returns the horizontal stretch applied on top of [`pixels_per_em`](Self::pixels_per_em).
    ///
    /// This is `1.0` for square pixels.
    pub fn horizontal_scale(&self) -> f32 {
        if self.resolution.1 == 0 {
            return 1.0;
        }
        self.resolution.0 as f32 / self.resolution.1 as f32
    }
}

impl Default for AtlasConfig {
    fn default() -> Self {
        Self::new(12)
    }
}
