// Copyright (c) 2024-present, fjall-rs
// This source code is licensed under both the Apache 2.0 and MIT License
// (found in the LICENSE-* files in the repository)

use crate::error::{Error, Result};
use crate::fm_index::{FmIndex, SENTINEL};
use crate::gap_match::GapMatches;
use crate::lex_range::LexRange;
use crate::reference::RefMatches;
use crate::suffix_array::suffix_array;
use crate::wavelet::WaveletTree;
use std::path::Path;
use std::sync::Arc;

struct IndexInner {
    text: Vec<u8>,
    fm: FmIndex,
    wt: WaveletTree,
}

/// Immutable gapped-match index over a byte text
///
/// Pairs an FM-index (pattern location by backward search) with a wavelet
/// tree over the suffix-array values (position enumeration in text order).
/// The text is treated as an opaque byte sequence; a sentinel smaller than
/// every real byte is appended internally.
///
/// An index is cheap to clone; clones share the same backing storage, and
/// any number of queries may run over it concurrently.
#[derive(Clone)]
pub struct Index(Arc<IndexInner>);

impl Index {
    /// Builds the index over `text`
    ///
    /// # Errors
    ///
    /// Returns [`Error::NulByte`] if the text contains a 0x00 byte, which
    /// is reserved for the internal sentinel.
    pub fn new(text: impl Into<Vec<u8>>) -> Result<Self> {
        let text = text.into();

        if let Some(pos) = text.iter().position(|&byte| byte == SENTINEL) {
            return Err(Error::NulByte(pos));
        }

        log::debug!("building gap index over {} bytes", text.len());

        let mut sentineled = Vec::with_capacity(text.len() + 1);
        sentineled.extend_from_slice(&text);
        sentineled.push(SENTINEL);

        let sa = suffix_array(&sentineled);
        let fm = FmIndex::new(&sentineled, &sa);
        let wt = WaveletTree::from_values(sa);

        debug_assert_eq!(fm.row_count(), wt.len());

        Ok(Self(Arc::new(IndexInner { text, fm, wt })))
    }

    /// Builds the index over the contents of the file at `path`
    ///
    /// # Errors
    ///
    /// Returns [`Error::Io`] if the file cannot be read, or
    /// [`Error::NulByte`] for texts containing a 0x00 byte.
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();

        log::debug!("reading text from {path:?}");

        let text = std::fs::read(path)?;

        Self::new(text)
    }

    /// Number of text bytes (the sentinel is not counted)
    #[must_use]
    pub fn len(&self) -> usize {
        self.0.text.len()
    }

    /// Whether the indexed text is empty
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.text.is_empty()
    }

    /// The indexed text
    #[must_use]
    pub fn text(&self) -> &[u8] {
        &self.0.text
    }

    /// The interval of suffix-array rows whose suffixes start with
    /// `pattern`, or `None` if the pattern does not occur
    #[must_use]
    pub fn lex_range(&self, pattern: &[u8]) -> Option<LexRange> {
        self.0.fm.backward_search(pattern)
    }

    /// Whether `pattern` occurs in the text
    #[must_use]
    pub fn contains(&self, pattern: &[u8]) -> bool {
        self.lex_range(pattern).is_some()
    }

    /// Number of occurrences of `pattern` in the text
    #[must_use]
    pub fn count(&self, pattern: &[u8]) -> usize {
        self.lex_range(pattern).map_or(0, |range| range.count())
    }

    /// Streams every pair `(a, b)` where `s1` occurs at `a`, `s2` ends at
    /// `b`, and the number of bytes between the two occurrences lies in
    /// `[min_gap, max_gap]`
    ///
    /// Pairs are emitted lazily, ordered by `a`, then by `b`. A pattern
    /// that does not occur yields an exhausted stream, not an error.
    ///
    /// # Errors
    ///
    /// Returns [`Error::EmptyPattern`] or [`Error::InvalidGapRange`] on
    /// invalid query inputs.
    pub fn matches(
        &self,
        s1: &[u8],
        s2: &[u8],
        min_gap: usize,
        max_gap: usize,
    ) -> Result<GapMatches> {
        validate(s1, s2, min_gap, max_gap)?;

        Ok(GapMatches::new(self.clone(), s1, s2, min_gap, max_gap))
    }

    /// Computes the same pairs as [`Index::matches`] eagerly, in
    /// unspecified order
    ///
    /// Kept as the correctness oracle and benchmarking baseline; prefer
    /// [`Index::matches`] for real queries.
    ///
    /// # Errors
    ///
    /// Returns [`Error::EmptyPattern`] or [`Error::InvalidGapRange`] on
    /// invalid query inputs.
    pub fn matches_ref(
        &self,
        s1: &[u8],
        s2: &[u8],
        min_gap: usize,
        max_gap: usize,
    ) -> Result<RefMatches> {
        validate(s1, s2, min_gap, max_gap)?;

        Ok(RefMatches::new(self, s1, s2, min_gap, max_gap))
    }

    pub(crate) fn fm(&self) -> &FmIndex {
        &self.0.fm
    }

    pub(crate) fn wt(&self) -> &WaveletTree {
        &self.0.wt
    }
}

fn validate(s1: &[u8], s2: &[u8], min_gap: usize, max_gap: usize) -> Result<()> {
    if s1.is_empty() || s2.is_empty() {
        return Err(Error::EmptyPattern);
    }

    if min_gap > max_gap {
        return Err(Error::InvalidGapRange(min_gap, max_gap));
    }

    Ok(())
}
