// Copyright 2026 the Glyph Atlas Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! A deterministic stand-in for a font rasterizer.

use std::collections::BTreeMap;

use glyph_atlas::{GlyphRasterizer, RasterizeError, RasterizeErrorKind, RasterizedGlyph};

/// A "font" whose glyphs are generated from their dimensions.
///
/// Code point `c` with a glyph maps to glyph id `c + 1`; glyph `0` is the placeholder.
/// Pixel `(col, row)` of glyph `g` has coverage `(g * 31 + row * 7 + col) | 1`, so glyph
/// pixels are never zero and can be told apart from padding.
#[derive(Clone, Debug)]
pub(crate) struct SyntheticRasterizer {
    glyphs: BTreeMap<u32, (u32, u32)>,
    placeholder: (u32, u32),
    glyph_count: u32,
    /// Every glyph id passed to `rasterize`, in call order.
    pub(crate) rasterized: Vec<u32>,
}

impl SyntheticRasterizer {
    /// An empty font whose placeholder glyph is `width` x `height`.
    pub(crate) fn new(width: u32, height: u32) -> Self {
        Self {
            glyphs: BTreeMap::new(),
            placeholder: (width, height),
            glyph_count: 0,
            rasterized: Vec::new(),
        }
    }

    /// A font covering `0..count` with glyph sizes spread over `1..=max_w` by `1..=max_h`,
    /// where every code point divisible by `gap` has no glyph.
    pub(crate) fn varied(count: u32, max_w: u32, max_h: u32, gap: u32) -> Self {
        let mut font = Self::new(5, 7);
        for codepoint in 0..count {
            if codepoint % gap != 0 {
                let width = 1 + (codepoint * 7) % max_w;
                let height = 1 + (codepoint * 5) % max_h;
                font = font.with_glyph(codepoint, width, height);
            }
        }
        font.with_glyph_count(count)
    }

    /// Adds a glyph for `codepoint`.
    pub(crate) fn with_glyph(mut self, codepoint: u32, width: u32, height: u32) -> Self {
        self.glyphs.insert(codepoint, (width, height));
        self.glyph_count = self.glyph_count.max(codepoint + 1);
        self
    }

    /// Overrides the reported glyph count.
    pub(crate) fn with_glyph_count(mut self, count: u32) -> Self {
        self.glyph_count = count;
        self
    }

    /// Returns `true` if `codepoint` has a glyph.
    pub(crate) fn has_glyph(&self, codepoint: u32) -> bool {
        self.glyphs.contains_key(&codepoint)
    }

    /// Renders a glyph without recording the call.
    pub(crate) fn bitmap(&self, glyph_id: u32) -> Option<RasterizedGlyph> {
        let (width, height) = if glyph_id == 0 {
            self.placeholder
        } else {
            *self.glyphs.get(&(glyph_id - 1))?
        };
        let mut data = Vec::with_capacity((width * height) as usize);
        for row in 0..height {
            for col in 0..width {
                data.push(((glyph_id * 31 + row * 7 + col) | 1) as u8);
            }
        }
        Some(RasterizedGlyph::new(
            width,
            height,
            glyph_id as i32 % 3 - 1,
            height as i32,
            data,
        ))
    }
}

impl GlyphRasterizer for SyntheticRasterizer {
    fn glyph_count(&self) -> u32 {
        self.glyph_count
    }

    fn glyph_id(&self, codepoint: u32) -> u32 {
        if self.has_glyph(codepoint) {
            codepoint + 1
        } else {
            0
        }
    }

    fn rasterize(&mut self, glyph_id: u32) -> Result<RasterizedGlyph, RasterizeError> {
        self.rasterized.push(glyph_id);
        self.bitmap(glyph_id)
            .ok_or(RasterizeError::for_glyph(RasterizeErrorKind::UnknownGlyph, glyph_id))
    }
}
