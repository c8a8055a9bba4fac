// Copyright (c) 2024-present, fjall-rs
// This source code is licensed under both the Apache 2.0 and MIT License
// (found in the LICENSE-* files in the repository)

use crate::index::Index;
use crate::MatchPair;

/// Eagerly computed stream of gapped matches
///
/// Materialises the second pattern's occurrence list once, sorts it, then
/// answers each occurrence of the first pattern with a binary-searched
/// window. Serves as the correctness oracle and baseline for
/// [`GapMatches`](crate::GapMatches): the two agree pair-for-pair as
/// multisets, but this stream's emission order is unspecified.
///
/// Obtained through [`Index::matches_ref`].
pub struct RefMatches {
    pairs: std::vec::IntoIter<MatchPair>,
}

impl RefMatches {
    pub(crate) fn new(index: &Index, s1: &[u8], s2: &[u8], min_gap: usize, max_gap: usize) -> Self {
        let min_reach = s1.len().saturating_add(min_gap);
        let max_reach = s1.len().saturating_add(max_gap);

        let mut pairs = Vec::new();

        let ranges = (
            index.fm().backward_search(s1),
            index.fm().backward_search(s2),
        );

        if let (Some(range1), Some(range2)) = ranges {
            let wt = index.wt();

            let mut ends: Vec<usize> = range2.rows().map(|row| wt.access(row)).collect();
            ends.sort_unstable();

            for row in range1.rows() {
                let a = wt.access(row);

                let floor = a.saturating_add(min_reach);
                let ceil = a.saturating_add(max_reach);

                let from = ends.partition_point(|&b| b < floor);
                let to = ends.partition_point(|&b| b <= ceil);

                pairs.extend(
                    ends.get(from..to)
                        .expect("should be in bounds")
                        .iter()
                        .map(|&b| (a, b + s2.len() - 1)),
                );
            }
        }

        Self {
            pairs: pairs.into_iter(),
        }
    }
}

impl Iterator for RefMatches {
    type Item = MatchPair;

    fn next(&mut self) -> Option<Self::Item> {
        self.pairs.next()
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.pairs.size_hint()
    }
}

impl ExactSizeIterator for RefMatches {}

impl std::iter::FusedIterator for RefMatches {}
