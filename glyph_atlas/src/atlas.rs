// Copyright 2026 the Glyph Atlas Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The glyph atlas and its query surface.

use alloc::vec::Vec;
use core::fmt::{Debug, Formatter};

use crate::config::AtlasConfig;
use crate::error::BuildError;
use crate::index::{GlyphIndex, GlyphIndexBuilder};
use crate::packer::ShelfPacker;
use crate::placement::{CharacterImage, GlyphMetrics, GlyphPlacement, TextureCoord};
use crate::raster::GlyphRasterizer;

/// Domains larger than this get a warning, since every code point is visited during a build.
const LARGE_DOMAIN: u32 = 0x1_0000;

/// A single-texture glyph atlas.
///
/// An atlas owns a `width * height` 8-bit coverage buffer, the placement of every packed
/// glyph, and a [`GlyphIndex`] mapping code points onto those placements. It is built once,
/// either from a [`GlyphRasterizer`] with [`build`](Self::build) or from serialized bytes
/// with [`codec::decode`](crate::codec::decode), and is read-only afterwards, so it can be
/// shared between threads freely.
#[derive(Clone, PartialEq, Eq)]
pub struct GlyphAtlas {
    pub(crate) width: u32,
    pub(crate) height: u32,
    pub(crate) point_size: u32,
    pub(crate) pixels: Vec<u8>,
    pub(crate) placements: Vec<GlyphPlacement>,
    pub(crate) index: GlyphIndex,
}

impl GlyphAtlas {
    /// Rasterizes and packs every glyph of a font.
    ///
    /// Code points `0..n` are visited in increasing order, where `n` is
    /// [`AtlasConfig::codepoint_limit`] or, if unset, the rasterizer's glyph count. Each
    /// code point with a glyph is rasterized and packed. The first code point without one
    /// packs the rasterizer's glyph `0` as the shared fallback, and later glyphless code
    /// points reuse it. If every code point has a glyph, the fallback is compact index `0`
    /// and nothing extra is packed. Only an empty domain packs glyph `0` on its own.
    ///
    /// The build is all-or-nothing: any error discards the partial atlas.
    pub fn build<R>(rasterizer: &mut R, config: &AtlasConfig) -> Result<Self, BuildError>
    where
        R: GlyphRasterizer + ?Sized,
    {
        if config.width == 0 {
            return Err(BuildError::ZeroWidth);
        }
        let domain = config
            .codepoint_limit
            .unwrap_or_else(|| rasterizer.glyph_count());
        if domain > LARGE_DOMAIN {
            log::warn!("building glyph atlas over {domain} code points in one pass");
        }

        let mut packer = ShelfPacker::new(config.width);
        let mut index = GlyphIndexBuilder::with_capacity(domain.min(LARGE_DOMAIN) as usize);
        for codepoint in 0..domain {
            let glyph_id = rasterizer.glyph_id(codepoint);
            if glyph_id == 0 && index.push_missing() {
                continue;
            }
            let glyph = rasterizer.rasterize(glyph_id)?;
            let compact = packer
                .push(&glyph)
                .map_err(|err| BuildError::from_pack(glyph_id, err))?;
            if glyph_id == 0 {
                index.push_first_missing(compact);
            } else {
                index.push_glyph(compact);
            }
        }

        let fallback = match index.fallback() {
            Some(fallback) => fallback,
            // No glyphless code point: the first packed glyph stands in.
            None if !packer.is_empty() => 0,
            None => {
                let glyph = rasterizer.rasterize(0)?;
                packer
                    .push(&glyph)
                    .map_err(|err| BuildError::from_pack(0, err))?
            }
        };

        let packed = packer.finish();
        log::debug!(
            "built {}x{} glyph atlas: {} placements for {} code points, fallback {}",
            packed.width,
            packed.height,
            packed.placements.len(),
            domain,
            fallback
        );
        Ok(Self {
            width: packed.width,
            height: packed.height,
            point_size: config.point_size,
            pixels: packed.pixels,
            placements: packed.placements,
            index: index.finish(fallback),
        })
    }

    /// Width of the atlas texture in pixels.
    pub fn width(&self) -> u32 {
        self.width
    }

    /// Height of the atlas texture in pixels.
    pub fn height(&self) -> u32 {
        self.height
    }

    /// Point size the glyphs were rasterized at.
    pub fn point_size(&self) -> u32 {
        self.point_size
    }

    /// Size of the code point domain covered by the index.
    pub fn character_total_num(&self) -> u32 {
        self.index.len()
    }

    /// Compact index of the fallback placement.
    pub fn fallback_index(&self) -> u32 {
        self.index.fallback()
    }

    /// Row-major 8-bit coverage, `width * height` bytes, ready for texture upload.
    pub fn pixels(&self) -> &[u8] {
        &self.pixels
    }

    /// All placements, indexed by compact index.
    pub fn placements(&self) -> &[GlyphPlacement] {
        &self.placements
    }

    /// The code point index.
    pub fn index(&self) -> &GlyphIndex {
        &self.index
    }

    /// Returns the placement for a code point.
    ///
    /// Unknown and out-of-range code points return the fallback placement.
    pub fn lookup(&self, codepoint: u32) -> GlyphPlacement {
        self.placements[self.index.get(codepoint) as usize]
    }

    /// Returns the size and bearings of a code point's glyph.
    pub fn metrics(&self, codepoint: u32) -> GlyphMetrics {
        self.lookup(codepoint).metrics()
    }

    /// Returns the normalized texture coordinates of a code point's glyph.
    pub fn texture_coord(&self, codepoint: u32) -> TextureCoord {
        TextureCoord::new(&self.lookup(codepoint), self.width, self.height)
    }

    /// Returns a standalone copy of a code point's glyph bitmap.
    pub fn character_image(&self, codepoint: u32) -> CharacterImage {
        let placement = self.lookup(codepoint);
        let (x, w) = (placement.x as usize, placement.width as usize);
        let stride = self.width as usize;
        let mut data = Vec::with_capacity(w * placement.height as usize);
        for row in placement.y as usize..(placement.y + placement.height) as usize {
            let start = row * stride + x;
            data.extend_from_slice(&self.pixels[start..start + w]);
        }
        CharacterImage {
            width: placement.width,
            height: placement.height,
            bitmap_left: placement.bitmap_left,
            bitmap_top: placement.bitmap_top,
            data,
        }
    }
}

impl Debug for GlyphAtlas {
    fn fmt(&self, f: &mut Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("GlyphAtlas")
            .field("width", &self.width)
            .field("height", &self.height)
            .field("point_size", &self.point_size)
            .field("placements", &self.placements.len())
            .field("index", &self.index)
            .finish_non_exhaustive()
    }
}
