// Copyright 2026 the Glyph Atlas Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! This crate contains the integration test suite for `glyph_atlas`.
//!
//! - The `util` module contains the synthetic rasterizer, shared assertions and font loading.
//! - Real fonts live in `assets/fonts`, next to their licenses.
//! - We do not use the default Rust test harness, but instead use this `mod.rs` file as the
//!   entry point to run all other tests, so that every topic module can share `util`.
//! - For test naming, put the "topic" of the test at the start of the name, e.g.
//!   `codec_rejects_...` rather than `rejects_..._codec`.

#![allow(missing_docs, reason = "we don't need docs for testing")]
#![allow(clippy::cast_possible_truncation, reason = "not critical for testing")]

mod codec;
mod util;
