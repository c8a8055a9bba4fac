// Copyright (c) 2024-present, fjall-rs
// This source code is licensed under both the Apache 2.0 and MIT License
// (found in the LICENSE-* files in the repository)

//! Gapped two-pattern search over immutable byte texts.
//!
//! ##### About
//!
//! This crate answers queries of the form "find every place where pattern
//! `s1` is followed by pattern `s2`, with between `g_min` and `g_max` bytes
//! in between" over a static text, without scanning the text per query.
//!
//! The text is indexed once into an FM-index (for locating each pattern's
//! suffix-array interval by backward search) and a wavelet tree over the
//! suffix-array values (for enumerating occurrence positions in text
//! order). A query co-descends the wavelet-tree subtrees backing both
//! patterns' occurrence sets, pruning whole subtrees whose positions cannot
//! pair up within the gap interval, and streams result pairs lazily.
//!
//! Each result pair `(a, b)` reports the start of the `s1` occurrence and
//! the end of the `s2` occurrence, ordered by `a`, then by `b`.
//!
//! # Example usage
//!
//! ```
//! use gap_index::Index;
//!
//! let index = Index::new("ababab")?;
//!
//! // "a", then exactly two bytes of gap, then "b"
//! let pairs: Vec<_> = index.matches(b"a", b"b", 2, 2)?.collect();
//! assert_eq!(vec![(0, 3), (2, 5)], pairs);
//!
//! // queries over absent patterns yield empty streams
//! assert_eq!(0, index.matches(b"zzz", b"b", 0, 10)?.count());
//! #
//! # Ok::<(), gap_index::Error>(())
//! ```

#![doc(html_logo_url = "https://raw.githubusercontent.com/fjall-rs/gap-index/main/logo.png")]
#![doc(html_favicon_url = "https://raw.githubusercontent.com/fjall-rs/gap-index/main/logo.png")]
#![forbid(unsafe_code)]
#![deny(clippy::all, missing_docs, clippy::cargo)]
#![deny(clippy::unwrap_used)]
#![warn(clippy::pedantic, clippy::nursery)]
#![warn(clippy::expect_used)]
#![allow(clippy::missing_const_for_fn)]
#![warn(clippy::multiple_crate_versions)]
#![allow(clippy::option_if_let_else)]

mod bit_vec;
mod error;
mod fm_index;
mod gap_match;
mod index;
mod lex_range;
mod node_cache;
mod reference;
mod suffix_array;
mod wavelet;

/// Match pair, typically returned by an iterator: start position of the
/// first pattern's occurrence and end position of the second pattern's
/// occurrence
pub type MatchPair = (usize, usize);

pub use {
    error::{Error, Result},
    gap_match::GapMatches,
    index::Index,
    lex_range::LexRange,
    reference::RefMatches,
};
