// Copyright 2026 the Glyph Atlas Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Persisting atlases and loading them back.

use glyph_atlas::codec::{self, FORMAT_VERSION, MAGIC};
use glyph_atlas::{AtlasConfig, DecodeErrorKind, GlyphAtlas, LoadError};

use crate::util::{SyntheticRasterizer, temp_path};

fn built_atlas() -> GlyphAtlas {
    let mut font = SyntheticRasterizer::varied(150, 10, 14, 8);
    GlyphAtlas::build(&mut font, &AtlasConfig::new(18).with_width(50)).unwrap()
}

#[test]
fn codec_round_trip_preserves_every_field() {
    let atlas = built_atlas();
    let decoded = codec::decode(&codec::encode(&atlas)).unwrap();

    assert_eq!(decoded.width(), atlas.width());
    assert_eq!(decoded.height(), atlas.height());
    assert_eq!(decoded.point_size(), 18);
    assert_eq!(decoded.character_total_num(), atlas.character_total_num());
    assert_eq!(decoded.fallback_index(), atlas.fallback_index());
    assert_eq!(decoded.pixels(), atlas.pixels());
    assert_eq!(decoded.placements(), atlas.placements());
    assert_eq!(decoded.index().as_slice(), atlas.index().as_slice());
    assert_eq!(decoded, atlas);
}

#[test]
fn codec_encoded_size_matches_layout() {
    let atlas = built_atlas();
    let bytes = codec::encode(&atlas);
    let expected = 28
        + atlas.pixels().len()
        + atlas.placements().len() * 24
        + atlas.character_total_num() as usize * 4;
    assert_eq!(bytes.len(), expected);
    assert_eq!(&bytes[0..4], &atlas.width().to_le_bytes());
    assert_eq!(
        &bytes[20..28],
        &(atlas.placements().len() as u64).to_le_bytes()
    );
}

#[test]
fn codec_decoded_atlas_answers_queries() {
    let atlas = built_atlas();
    let decoded = codec::decode(&codec::encode(&atlas)).unwrap();
    for codepoint in (0..160).chain([u32::MAX]) {
        assert_eq!(decoded.texture_coord(codepoint), atlas.texture_coord(codepoint));
        assert_eq!(
            decoded.character_image(codepoint),
            atlas.character_image(codepoint)
        );
    }
}

#[test]
fn codec_versioned_envelope() {
    let atlas = built_atlas();
    let bytes = codec::encode_versioned(&atlas);
    assert_eq!(&bytes[0..4], &MAGIC);
    assert_eq!(&bytes[4..8], &FORMAT_VERSION.to_le_bytes());
    assert_eq!(&bytes[8..], &codec::encode(&atlas)[..]);
    assert_eq!(codec::decode_versioned(&bytes).unwrap(), atlas);
}

#[test]
fn codec_truncated_input_is_rejected() {
    let bytes = codec::encode(&built_atlas());
    for cut in [1, 24, bytes.len() / 2, bytes.len() - 1] {
        let err = codec::decode(&bytes[..cut]).unwrap_err();
        assert_eq!(err.kind(), DecodeErrorKind::UnexpectedEof, "cut at {cut}");
        assert!(err.byte_offset() <= cut);
    }
}

#[test]
fn codec_zero_placements_is_rejected() {
    let mut bytes = Vec::new();
    for field in [16_u32, 0, 0, 0, 12] {
        bytes.extend_from_slice(&field.to_le_bytes());
    }
    bytes.extend_from_slice(&0_u64.to_le_bytes());
    let err = codec::decode(&bytes).unwrap_err();
    assert_eq!(err.kind(), DecodeErrorKind::InvalidFallback);
}

#[test]
fn codec_zero_width_with_rows_is_rejected() {
    let mut bytes = Vec::new();
    for field in [0_u32, 4, 0, 0, 12] {
        bytes.extend_from_slice(&field.to_le_bytes());
    }
    bytes.extend_from_slice(&1_u64.to_le_bytes());
    let err = codec::decode(&bytes).unwrap_err();
    assert_eq!(err.kind(), DecodeErrorKind::InvalidDimensions);
}

#[test]
fn codec_save_and_load_file() {
    let atlas = built_atlas();
    let path = temp_path("save_and_load");
    atlas.save(&path).unwrap();
    let loaded = GlyphAtlas::load(&path);
    std::fs::remove_file(&path).unwrap();
    assert_eq!(loaded.unwrap(), atlas);
}

#[test]
fn codec_load_accepts_bare_body() {
    let atlas = built_atlas();
    let path = temp_path("bare_body");
    std::fs::write(&path, codec::encode(&atlas)).unwrap();
    let loaded = GlyphAtlas::load(&path);
    std::fs::remove_file(&path).unwrap();
    assert_eq!(loaded.unwrap(), atlas);
}

#[test]
fn codec_load_missing_file_is_io_error() {
    let err = GlyphAtlas::load(temp_path("does_not_exist")).unwrap_err();
    assert!(matches!(err, LoadError::Io(_)), "{err}");
}

#[test]
fn codec_load_corrupt_file_is_decode_error() {
    let path = temp_path("corrupt");
    std::fs::write(&path, b"GLAT\x01\x00\x00\x00short").unwrap();
    let err = GlyphAtlas::load(&path).unwrap_err();
    std::fs::remove_file(&path).unwrap();
    match err {
        LoadError::Decode(err) => assert_eq!(err.kind(), DecodeErrorKind::UnexpectedEof),
        LoadError::Io(err) => panic!("unexpected I/O error: {err}"),
    }
}
