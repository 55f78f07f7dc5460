// Copyright 2026 the Glyph Atlas Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Glyph rasterization with swash.

use alloc::vec::Vec;

use swash::scale::image::{Content, Image};
use swash::scale::{Render, ScaleContext, Source, StrikeWith};
use swash::zeno::{Format, Transform};
use swash::{FontRef, GlyphId};

use crate::config::AtlasConfig;
use crate::raster::{GlyphRasterizer, RasterizeError, RasterizeErrorKind, RasterizedGlyph};

/// A [`GlyphRasterizer`] for TrueType and OpenType fonts.
///
/// Glyphs are rendered unhinted from their outlines, falling back to embedded bitmap
/// strikes, as 8-bit coverage masks.
pub struct SwashRasterizer<'a> {
    font: FontRef<'a>,
    context: ScaleContext,
    ppem: f32,
    transform: Option<Transform>,
}

impl<'a> SwashRasterizer<'a> {
    /// Opens face `index` of the font in `data`, sized for `config`.
    pub fn new(data: &'a [u8], index: usize, config: &AtlasConfig) -> Result<Self, RasterizeError> {
        let font = FontRef::from_index(data, index)
            .ok_or(RasterizeError::new(RasterizeErrorKind::InvalidFont))?;
        let stretch = config.horizontal_scale();
        let transform = (stretch != 1.0).then(|| Transform::scale(stretch, 1.0));
        log::debug!(
            "opened font face {index} ({} glyphs) at {} ppem",
            font.metrics(&[]).glyph_count,
            config.pixels_per_em()
        );
        Ok(Self {
            font,
            context: ScaleContext::new(),
            ppem: config.pixels_per_em(),
            transform,
        })
    }

    /// Returns the pixels-per-em glyphs are rendered at.
    pub fn ppem(&self) -> f32 {
        self.ppem
    }

    fn render(&mut self, glyph_id: GlyphId) -> Option<Image> {
        let mut scaler = self
            .context
            .builder(self.font)
            .size(self.ppem)
            .hint(false)
            .build();
        Render::new(&[Source::Outline, Source::Bitmap(StrikeWith::BestFit)])
            .format(Format::Alpha)
            .transform(self.transform)
            .render(&mut scaler, glyph_id)
    }
}

impl GlyphRasterizer for SwashRasterizer<'_> {
    fn glyph_count(&self) -> u32 {
        u32::from(self.font.metrics(&[]).glyph_count)
    }

    fn glyph_id(&self, codepoint: u32) -> u32 {
        u32::from(self.font.charmap().map(codepoint))
    }

    fn rasterize(&mut self, glyph_id: u32) -> Result<RasterizedGlyph, RasterizeError> {
        let id = GlyphId::try_from(glyph_id)
            .map_err(|_| RasterizeError::for_glyph(RasterizeErrorKind::UnknownGlyph, glyph_id))?;
        let image = self
            .render(id)
            .ok_or(RasterizeError::for_glyph(RasterizeErrorKind::NoImage, glyph_id))?;
        let data = match image.content {
            Content::Mask => image.data,
            // Bitmap strikes may be stored as RGBA; keep their coverage.
            Content::Color => image.data.chunks_exact(4).map(|px| px[3]).collect::<Vec<_>>(),
            Content::SubpixelMask => {
                return Err(RasterizeError::for_glyph(
                    RasterizeErrorKind::UnsupportedContent,
                    glyph_id,
                ));
            }
        };
        let placement = image.placement;
        Ok(RasterizedGlyph::new(
            placement.width,
            placement.height,
            placement.left,
            placement.top,
            data,
        ))
    }
}

impl core::fmt::Debug for SwashRasterizer<'_> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("SwashRasterizer")
            .field("ppem", &self.ppem)
            .field("transform", &self.transform.is_some())
            .finish_non_exhaustive()
    }
}
