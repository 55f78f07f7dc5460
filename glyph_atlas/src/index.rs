// Copyright 2026 the Glyph Atlas Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Code point to compact index mapping.

use alloc::vec::Vec;

/// Dense mapping from code points to compact placement indices.
///
/// The mapping covers code points `0..len()`. Code points without a glyph, and every code
/// point past the end of the mapping, resolve to one shared fallback index.
#[derive(Clone, PartialEq, Eq)]
pub struct GlyphIndex {
    entries: Vec<u32>,
    fallback: u32,
}

impl GlyphIndex {
    /// Creates an index from its entries; every entry and `fallback` must be a valid
    /// placement index.
    pub(crate) fn new(entries: Vec<u32>, fallback: u32) -> Self {
        Self { entries, fallback }
    }

    /// Returns the compact index for a code point.
    ///
    /// This never fails: out-of-range code points get the fallback index.
    #[inline]
    pub fn get(&self, codepoint: u32) -> u32 {
        usize::try_from(codepoint)
            .ok()
            .and_then(|cp| self.entries.get(cp))
            .copied()
            .unwrap_or(self.fallback)
    }

    /// Returns the compact index shared by all code points without a glyph.
    #[inline]
    pub fn fallback(&self) -> u32 {
        self.fallback
    }

    /// Returns the size of the code point domain.
    #[expect(
        clippy::cast_possible_truncation,
        reason = "the domain size is a u32 at construction"
    )]
    #[inline]
    pub fn len(&self) -> u32 {
        self.entries.len() as u32
    }

    /// Returns `true` if the code point domain is empty.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Returns the raw entries, indexed by code point.
    pub fn as_slice(&self) -> &[u32] {
        &self.entries
    }
}

impl core::fmt::Debug for GlyphIndex {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("GlyphIndex")
            .field("len", &self.entries.len())
            .field("fallback", &self.fallback)
            .finish_non_exhaustive()
    }
}

/// Incrementally assigns compact indices to code points in increasing order.
///
/// The first code point without a glyph defines the fallback; later glyphless code points
/// reuse it instead of allocating new placements.
#[derive(Debug, Default)]
pub(crate) struct GlyphIndexBuilder {
    entries: Vec<u32>,
    fallback: Option<u32>,
}

impl GlyphIndexBuilder {
    pub(crate) fn with_capacity(capacity: usize) -> Self {
        Self {
            entries: Vec::with_capacity(capacity),
            fallback: None,
        }
    }

    /// Returns the fallback index if a glyphless code point has been seen.
    pub(crate) fn fallback(&self) -> Option<u32> {
        self.fallback
    }

    /// Maps the next code point to a newly packed glyph.
    pub(crate) fn push_glyph(&mut self, index: u32) {
        self.entries.push(index);
    }

    /// Maps the next code point to the newly packed placeholder glyph.
    pub(crate) fn push_first_missing(&mut self, index: u32) {
        debug_assert!(self.fallback.is_none(), "fallback is assigned once");
        self.fallback = Some(index);
        self.entries.push(index);
    }

    /// Maps the next code point to the existing fallback.
    ///
    /// Returns `false` if no fallback has been assigned yet.
    pub(crate) fn push_missing(&mut self) -> bool {
        match self.fallback {
            Some(index) => {
                self.entries.push(index);
                true
            }
            None => false,
        }
    }

    pub(crate) fn finish(self, fallback: u32) -> GlyphIndex {
        GlyphIndex::new(self.entries, fallback)
    }
}
