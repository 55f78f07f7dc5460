// Copyright 2026 the Glyph Atlas Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Utility functions and types shared across tests.

mod asserts;
mod synthetic;

use std::path::Path;

pub(crate) use asserts::{assert_packing_invariants, assert_rows_are_shelves};
pub(crate) use synthetic::SyntheticRasterizer;

/// Returns a path in the system temp directory that is unique to the calling test.
pub(crate) fn temp_path(name: &str) -> std::path::PathBuf {
    std::env::temp_dir().join(format!(
        "glyph_atlas_tests-{}-{name}.atlas",
        std::process::id()
    ))
}

/// Reads a font file from the `assets/fonts` directory.
pub(crate) fn load_font(relative_path: &str) -> Vec<u8> {
    let path = Path::new(env!("CARGO_MANIFEST_DIR"))
        .join("assets/fonts")
        .join(relative_path);
    std::fs::read(&path).unwrap_or_else(|err| panic!("reading {}: {err}", path.display()))
}
