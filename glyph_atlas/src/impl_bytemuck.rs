// Copyright 2026 the Glyph Atlas Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Optional `bytemuck` trait impls.

#![allow(
    unsafe_code,
    reason = "The `bytemuck` marker traits are `unsafe` and require `unsafe impl`."
)]

use crate::{GlyphPlacement, TextureCoord};
use bytemuck::{Pod, Zeroable};

// Safety: The struct is `repr(C)` with six 4-byte integer fields, so it has no padding and
// every bit pattern is valid.
unsafe impl Zeroable for GlyphPlacement {}

// Safety: See above; the struct is also `Copy` and `'static`.
unsafe impl Pod for GlyphPlacement {}

// Safety: The struct is `repr(C)` with four `f32` fields, so it has no padding and every
// bit pattern is valid.
unsafe impl Zeroable for TextureCoord {}

// Safety: See above; the struct is also `Copy` and `'static`.
unsafe impl Pod for TextureCoord {}
