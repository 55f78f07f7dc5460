// Copyright 2026 the Glyph Atlas Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Assertions over whole atlases.

use glyph_atlas::{GlyphAtlas, GlyphRasterizer};

use super::SyntheticRasterizer;

/// Checks that every code point's bitmap landed intact inside the atlas, that placements
/// don't overlap, and that every pixel outside a placement is zero.
pub(crate) fn assert_packing_invariants(atlas: &GlyphAtlas, font: &SyntheticRasterizer) {
    let (width, height) = (atlas.width() as usize, atlas.height() as usize);
    assert_eq!(
        atlas.pixels().len(),
        width * height,
        "pixel buffer must be width * height"
    );

    let mut owner = vec![None; width * height];
    for (index, placement) in atlas.placements().iter().enumerate() {
        assert!(
            placement.x + placement.width <= atlas.width(),
            "placement {index} overflows the row: {placement:?}"
        );
        assert!(
            placement.y + placement.height <= atlas.height(),
            "placement {index} overflows the atlas: {placement:?}"
        );
        for row in placement.y..placement.y + placement.height {
            for col in placement.x..placement.x + placement.width {
                let cell = &mut owner[row as usize * width + col as usize];
                assert_eq!(*cell, None, "placements {index} and {cell:?} overlap");
                *cell = Some(index);
            }
        }
    }
    for (offset, (value, owner)) in atlas.pixels().iter().zip(&owner).enumerate() {
        if owner.is_none() {
            assert_eq!(*value, 0, "padding at byte {offset} is not zero");
        }
    }

    for codepoint in 0..atlas.character_total_num() {
        let expected = font.bitmap(font.glyph_id(codepoint)).unwrap();
        let image = atlas.character_image(codepoint);
        assert_eq!(
            (image.width(), image.height()),
            (expected.width, expected.height),
            "size of code point {codepoint}"
        );
        assert_eq!(image.data(), &expected.data[..], "pixels of code point {codepoint}");
        assert_eq!(image.bitmap_left(), expected.bitmap_left);
        assert_eq!(image.bitmap_top(), expected.bitmap_top);
    }
}

/// Checks that placements follow row-greedy shelf order: each glyph either continues the
/// current row or, only if it didn't fit, starts a new row below the tallest glyph so far.
pub(crate) fn assert_rows_are_shelves(atlas: &GlyphAtlas) {
    let (mut x, mut y, mut row_height) = (0, 0, 0);
    for (index, placement) in atlas.placements().iter().enumerate() {
        if placement.y == y {
            assert_eq!(placement.x, x, "placement {index} leaves a gap in its row");
        } else {
            assert!(
                x + placement.width > atlas.width(),
                "placement {index} started a new row although it fit"
            );
            assert_eq!(placement.x, 0, "placement {index} must start its row");
            assert_eq!(placement.y, y + row_height, "placement {index} row origin");
            y = placement.y;
            row_height = 0;
        }
        x = placement.x + placement.width;
        row_height = row_height.max(placement.height);
    }
    assert_eq!(atlas.height(), y + row_height, "atlas height closes the last row");
}
