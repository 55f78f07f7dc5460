// Copyright 2026 the Glyph Atlas Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Glyph Atlas builds a single-texture glyph atlas for a font.
//!
//! Every renderable glyph is rasterized once, packed into one fixed-width 8-bit coverage
//! image with a row-greedy shelf packer, and indexed by code point. The whole atlas (pixels
//! and metadata) can be written to a compact binary blob and loaded again without touching
//! the rasterizer.
//!
//! Lookups never fail: a code point with no glyph, or one outside the atlas's code point
//! domain, resolves to a single shared fallback glyph.
//!
//! ## Features
//!
//! - `std` (enabled by default): File helpers ([`GlyphAtlas::save`], [`GlyphAtlas::load`]).
//! - `swash` (enabled by default): [`SwashRasterizer`], a [`GlyphRasterizer`] for
//!   TrueType/OpenType fonts backed by [swash].
//! - `bytemuck`: Implement `Pod` and `Zeroable` for [`GlyphPlacement`] and [`TextureCoord`].
//!
//! ## Example
//!
//! ```
//! use glyph_atlas::{AtlasConfig, GlyphAtlas, GlyphRasterizer, RasterizeError, RasterizedGlyph};
//!
//! /// Every code point is an 8x10 box; code point 2 has no glyph.
//! struct Boxes;
//!
//! impl GlyphRasterizer for Boxes {
//!     fn glyph_count(&self) -> u32 {
//!         4
//!     }
//!
//!     fn glyph_id(&self, codepoint: u32) -> u32 {
//!         if codepoint == 2 { 0 } else { codepoint + 1 }
//!     }
//!
//!     fn rasterize(&mut self, _glyph_id: u32) -> Result<RasterizedGlyph, RasterizeError> {
//!         Ok(RasterizedGlyph::new(8, 10, 0, 10, vec![0xff; 80]))
//!     }
//! }
//!
//! let config = AtlasConfig::default().with_width(16);
//! let atlas = GlyphAtlas::build(&mut Boxes, &config).unwrap();
//! assert_eq!((atlas.width(), atlas.height()), (16, 20));
//!
//! // Out-of-range code points share the fallback glyph with glyphless ones.
//! assert_eq!(atlas.lookup(2), atlas.lookup(1000));
//!
//! let bytes = glyph_atlas::codec::encode(&atlas);
//! assert_eq!(glyph_atlas::codec::decode(&bytes).unwrap(), atlas);
//! ```

// LINEBENDER LINT SET - lib.rs - v3
// See https://linebender.org/wiki/canonical-lints/
// These lints shouldn't apply to examples or tests.
#![cfg_attr(not(test), warn(unused_crate_dependencies))]
// These lints shouldn't apply to examples.
#![warn(clippy::print_stdout, clippy::print_stderr)]
// Targeting e.g. 32-bit means structs containing usize can give false positives for 64-bit.
#![cfg_attr(target_pointer_width = "64", warn(clippy::trivially_copy_pass_by_ref))]
// END LINEBENDER LINT SET
#![cfg_attr(docsrs, feature(doc_cfg))]
#![no_std]

extern crate alloc;
#[cfg(feature = "std")]
extern crate std;

mod atlas;
pub mod codec;
mod config;
mod error;
#[cfg(feature = "bytemuck")]
mod impl_bytemuck;
mod index;
mod packer;
mod placement;
mod raster;
#[cfg(feature = "swash")]
mod swash_provider;

pub use atlas::GlyphAtlas;
pub use config::{AtlasConfig, DEFAULT_ATLAS_WIDTH};
#[cfg(feature = "std")]
pub use error::LoadError;
pub use error::{BuildError, DecodeError, DecodeErrorKind};
pub use index::GlyphIndex;
pub use packer::{PackError, PackedAtlas, ShelfPacker};
pub use placement::{CharacterImage, GlyphMetrics, GlyphPlacement, TextureCoord};
pub use raster::{GlyphRasterizer, RasterizeError, RasterizeErrorKind, RasterizedGlyph};
#[cfg(feature = "swash")]
pub use swash_provider::SwashRasterizer;
