// Copyright 2026 the Glyph Atlas Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Binary persistence for [`GlyphAtlas`].
//!
//! ## Layout
//!
//! All integers are little-endian. The atlas body is, in order:
//!
//! | Field              | Type                       |
//! |--------------------|----------------------------|
//! | width `W`          | `u32`                      |
//! | height `H`         | `u32`                      |
//! | code point count   | `u32`                      |
//! | fallback index     | `u32`                      |
//! | point size         | `u32`                      |
//! | placement count    | `u64`                      |
//! | pixels             | `W * H` bytes, row-major   |
//! | placements         | `x, y, width, height, bitmap_left, bitmap_top` as 32-bit each |
//! | index              | one `u32` per code point   |
//!
//! Bearings are stored as 32-bit two's complement. There is no compression or checksum.
//!
//! [`encode`] and [`decode`] read and write the bare body, which carries no version field.
//! [`encode_versioned`] prefixes it with the magic bytes [`MAGIC`] and a `u32`
//! [`FORMAT_VERSION`], and is what [`GlyphAtlas::save`] writes.

use alloc::vec::Vec;

use crate::atlas::GlyphAtlas;
use crate::error::{DecodeError, DecodeErrorKind};
use crate::index::GlyphIndex;
use crate::placement::GlyphPlacement;

/// Magic bytes at the start of a versioned atlas.
pub const MAGIC: [u8; 4] = *b"GLAT";

/// Version written by [`encode_versioned`].
pub const FORMAT_VERSION: u32 = 1;

/// Size of the fixed header at the start of the body.
const HEADER_LEN: usize = 5 * 4 + 8;

/// Size of one serialized placement.
const PLACEMENT_LEN: usize = 6 * 4;

/// Serializes an atlas body.
pub fn encode(atlas: &GlyphAtlas) -> Vec<u8> {
    let mut out = Vec::with_capacity(encoded_len(atlas));
    encode_into(atlas, &mut out);
    out
}

/// Serializes an atlas body, appending to `out`.
pub fn encode_into(atlas: &GlyphAtlas, out: &mut Vec<u8>) {
    out.reserve(encoded_len(atlas));
    out.extend_from_slice(&atlas.width.to_le_bytes());
    out.extend_from_slice(&atlas.height.to_le_bytes());
    out.extend_from_slice(&atlas.index.len().to_le_bytes());
    out.extend_from_slice(&atlas.index.fallback().to_le_bytes());
    out.extend_from_slice(&atlas.point_size.to_le_bytes());
    out.extend_from_slice(&(atlas.placements.len() as u64).to_le_bytes());
    out.extend_from_slice(&atlas.pixels);
    for placement in &atlas.placements {
        out.extend_from_slice(&placement.x.to_le_bytes());
        out.extend_from_slice(&placement.y.to_le_bytes());
        out.extend_from_slice(&placement.width.to_le_bytes());
        out.extend_from_slice(&placement.height.to_le_bytes());
        out.extend_from_slice(&placement.bitmap_left.to_le_bytes());
        out.extend_from_slice(&placement.bitmap_top.to_le_bytes());
    }
    for entry in atlas.index.as_slice() {
        out.extend_from_slice(&entry.to_le_bytes());
    }
    log::debug!(
        "encoded {}x{} glyph atlas ({} placements)",
        atlas.width,
        atlas.height,
        atlas.placements.len()
    );
}

/// Serializes an atlas with the versioned envelope.
pub fn encode_versioned(atlas: &GlyphAtlas) -> Vec<u8> {
    let mut out = Vec::with_capacity(MAGIC.len() + 4 + encoded_len(atlas));
    out.extend_from_slice(&MAGIC);
    out.extend_from_slice(&FORMAT_VERSION.to_le_bytes());
    encode_into(atlas, &mut out);
    out
}

fn encoded_len(atlas: &GlyphAtlas) -> usize {
    HEADER_LEN
        + atlas.pixels.len()
        + atlas.placements.len() * PLACEMENT_LEN
        + atlas.index.as_slice().len() * 4
}

/// Deserializes an atlas body.
///
/// The whole slice must be consumed. Every header field is checked against the data that
/// follows it, so a successfully decoded atlas upholds the same invariants as a built one.
pub fn decode(data: &[u8]) -> Result<GlyphAtlas, DecodeError> {
    let mut reader = Reader::new(data);
    let atlas = read_body(&mut reader)?;
    if !reader.is_empty() {
        return Err(reader.error(DecodeErrorKind::TrailingBytes));
    }
    log::debug!(
        "decoded {}x{} glyph atlas ({} placements, {} code points)",
        atlas.width,
        atlas.height,
        atlas.placements.len(),
        atlas.index.len()
    );
    Ok(atlas)
}

/// Deserializes an atlas with the versioned envelope.
pub fn decode_versioned(data: &[u8]) -> Result<GlyphAtlas, DecodeError> {
    let mut reader = Reader::new(data);
    if reader.read_bytes(MAGIC.len())? != MAGIC {
        return Err(DecodeError::new(DecodeErrorKind::BadMagic, 0));
    }
    let version = reader.read_u32()?;
    if version != FORMAT_VERSION {
        return Err(DecodeError::new(
            DecodeErrorKind::UnsupportedVersion(version),
            MAGIC.len(),
        ));
    }
    let body = MAGIC.len() + 4;
    decode(&data[body..]).map_err(|err| DecodeError::new(err.kind(), err.byte_offset() + body))
}

/// Deserializes either a versioned atlas or a bare body.
///
/// Data starting with [`MAGIC`] is read as versioned; anything else as a bare body. A bare
/// body starting with those bytes would declare an atlas over a billion pixels wide.
pub fn decode_any(data: &[u8]) -> Result<GlyphAtlas, DecodeError> {
    if data.starts_with(&MAGIC) {
        decode_versioned(data)
    } else {
        decode(data)
    }
}

fn read_body(reader: &mut Reader<'_>) -> Result<GlyphAtlas, DecodeError> {
    let width = reader.read_u32()?;
    let height = reader.read_u32()?;
    let character_total_num = reader.read_u32()?;
    let fallback_offset = reader.pos;
    let fallback = reader.read_u32()?;
    let point_size = reader.read_u32()?;
    let count_offset = reader.pos;
    let placement_count = usize::try_from(reader.read_u64()?)
        .map_err(|_| DecodeError::new(DecodeErrorKind::TooLarge, count_offset))?;

    if width == 0 && height != 0 {
        return Err(DecodeError::new(DecodeErrorKind::InvalidDimensions, 0));
    }
    if fallback as usize >= placement_count {
        return Err(DecodeError::new(
            DecodeErrorKind::InvalidFallback,
            fallback_offset,
        ));
    }

    let pixel_len = (width as usize)
        .checked_mul(height as usize)
        .ok_or_else(|| reader.error(DecodeErrorKind::TooLarge))?;
    let pixels = reader.read_bytes(pixel_len)?.to_vec();

    let placements_offset = reader.pos;
    let placement_bytes = placement_count
        .checked_mul(PLACEMENT_LEN)
        .ok_or_else(|| reader.error(DecodeErrorKind::TooLarge))?;
    let placements = reader
        .read_bytes(placement_bytes)?
        .chunks_exact(PLACEMENT_LEN)
        .map(read_placement)
        .collect::<Vec<_>>();
    for (index, placement) in placements.iter().enumerate() {
        let right = u64::from(placement.x) + u64::from(placement.width);
        let bottom = u64::from(placement.y) + u64::from(placement.height);
        if right > u64::from(width) || bottom > u64::from(height) {
            return Err(DecodeError::new(
                DecodeErrorKind::PlacementOutOfBounds { index },
                placements_offset + index * PLACEMENT_LEN,
            ));
        }
    }

    let index_offset = reader.pos;
    let index_bytes = (character_total_num as usize)
        .checked_mul(4)
        .ok_or_else(|| reader.error(DecodeErrorKind::TooLarge))?;
    let raw_entries = reader.read_bytes(index_bytes)?;
    let mut entries = Vec::with_capacity(character_total_num as usize);
    for (codepoint, chunk) in (0_u32..).zip(raw_entries.chunks_exact(4)) {
        let entry = le_u32(chunk);
        if entry as usize >= placement_count {
            return Err(DecodeError::new(
                DecodeErrorKind::InvalidIndexEntry {
                    codepoint,
                    index: entry,
                },
                index_offset + codepoint as usize * 4,
            ));
        }
        entries.push(entry);
    }

    Ok(GlyphAtlas {
        width,
        height,
        point_size,
        pixels,
        placements,
        index: GlyphIndex::new(entries, fallback),
    })
}

fn read_placement(chunk: &[u8]) -> GlyphPlacement {
    GlyphPlacement {
        x: le_u32(&chunk[0..4]),
        y: le_u32(&chunk[4..8]),
        width: le_u32(&chunk[8..12]),
        height: le_u32(&chunk[12..16]),
        bitmap_left: i32::from_le_bytes(le_array(&chunk[16..20])),
        bitmap_top: i32::from_le_bytes(le_array(&chunk[20..24])),
    }
}

fn le_array(bytes: &[u8]) -> [u8; 4] {
    [bytes[0], bytes[1], bytes[2], bytes[3]]
}

fn le_u32(bytes: &[u8]) -> u32 {
    u32::from_le_bytes(le_array(bytes))
}

/// Bounds-checked cursor over serialized data.
struct Reader<'a> {
    data: &'a [u8],
    pos: usize,
}

impl<'a> Reader<'a> {
    fn new(data: &'a [u8]) -> Self {
        Self { data, pos: 0 }
    }

    fn is_empty(&self) -> bool {
        self.pos == self.data.len()
    }

    fn error(&self, kind: DecodeErrorKind) -> DecodeError {
        DecodeError::new(kind, self.pos)
    }

    fn read_bytes(&mut self, len: usize) -> Result<&'a [u8], DecodeError> {
        let bytes = self
            .pos
            .checked_add(len)
            .and_then(|end| self.data.get(self.pos..end))
            .ok_or_else(|| self.error(DecodeErrorKind::UnexpectedEof))?;
        self.pos += len;
        Ok(bytes)
    }

    fn read_u32(&mut self) -> Result<u32, DecodeError> {
        self.read_bytes(4).map(le_u32)
    }

    fn read_u64(&mut self) -> Result<u64, DecodeError> {
        let bytes = self.read_bytes(8)?;
        let mut array = [0; 8];
        array.copy_from_slice(bytes);
        Ok(u64::from_le_bytes(array))
    }
}

#[cfg(feature = "std")]
impl GlyphAtlas {
    /// Writes the atlas to a file in the versioned format.
    pub fn save(&self, path: impl AsRef<std::path::Path>) -> std::io::Result<()> {
        let path = path.as_ref();
        std::fs::write(path, encode_versioned(self))?;
        log::debug!("saved glyph atlas to {}", path.display());
        Ok(())
    }

    /// Reads an atlas file written by [`save`](Self::save), or a bare body written with
    /// [`encode`].
    pub fn load(path: impl AsRef<std::path::Path>) -> Result<Self, crate::LoadError> {
        let data = std::fs::read(path)?;
        Ok(decode_any(&data)?)
    }
}
