// Copyright (c) 2024-present, fjall-rs
// This source code is licensed under both the Apache 2.0 and MIT License
// (found in the LICENSE-* files in the repository)

use crate::index::Index;
use crate::lex_range::LexRange;
use crate::node_cache::NodeCache;
use crate::MatchPair;
use std::collections::VecDeque;
use std::sync::Arc;

/// A wavelet-tree subtree still to be descended: the suffix-array rows it
/// represents, plus the cached node
struct Frame {
    range: LexRange,
    node: Arc<NodeCache>,
}

/// Lazy stream of gapped matches
///
/// Produced by co-descending the wavelet-tree subtrees backing both
/// patterns' occurrence sets in text-position order, pruning subtrees whose
/// positions cannot pair up within the gap interval.
///
/// Start positions come out in non-decreasing order; for a fixed start, end
/// positions strictly increase. Obtained through [`Index::matches`].
///
/// The stream can be consumed either as an [`Iterator`], or manually
/// through [`GapMatches::valid`], [`GapMatches::current`] and
/// [`GapMatches::advance`].
pub struct GapMatches {
    index: Index,

    // stacks[0] drives s1 starts, stacks[1] drives s2 starts; the top frame
    // of each stack has the minimum value-range lo of that stack
    stacks: [Vec<Frame>; 2],

    // start position of the batch currently being drained
    a: usize,

    // cursor into b_values
    b_idx: usize,

    // s2 starts b with a + min_reach <= b <= a + max_reach, ascending
    b_values: VecDeque<usize>,

    // |s1| + g_min and |s1| + g_max
    min_reach: usize,
    max_reach: usize,

    s2_len: usize,

    splits: u64,

    current: Option<MatchPair>,
}

impl GapMatches {
    pub(crate) fn new(index: Index, s1: &[u8], s2: &[u8], min_gap: usize, max_gap: usize) -> Self {
        let root = Arc::new(NodeCache::new(index.wt().root(), index.wt()));

        let mut stacks = [Vec::new(), Vec::new()];

        if let Some(range) = index.fm().backward_search(s1) {
            stacks[0].push(Frame {
                range,
                node: Arc::clone(&root),
            });
        }

        if let Some(range) = index.fm().backward_search(s2) {
            stacks[1].push(Frame { range, node: root });
        }

        let mut matches = Self {
            index,
            stacks,
            a: 0,
            b_idx: 0,
            b_values: VecDeque::new(),
            min_reach: s1.len().saturating_add(min_gap),
            max_reach: s1.len().saturating_add(max_gap),
            s2_len: s2.len(),
            splits: 0,
            current: None,
        };

        if matches.next_batch() {
            matches.current = matches.pair_at(matches.b_idx);
        }

        matches
    }

    /// Whether a current match pair exists
    #[must_use]
    pub fn valid(&self) -> bool {
        self.current.is_some()
    }

    /// The current match pair, if any
    #[must_use]
    pub fn current(&self) -> Option<MatchPair> {
        self.current
    }

    /// Steps to the next match pair, or into the exhausted state
    pub fn advance(&mut self) {
        self.b_idx += 1;

        if self.b_idx >= self.b_values.len() && !self.next_batch() {
            self.current = None;
            return;
        }

        self.current = self.pair_at(self.b_idx);
    }

    fn pair_at(&self, idx: usize) -> Option<MatchPair> {
        self.b_values
            .get(idx)
            .map(|&b| (self.a, b + self.s2_len - 1))
    }

    /// Replaces the top frame of stack `t` with its children
    ///
    /// The right child is pushed first: its positions all lie above the left
    /// child's, so the frame with the smallest positions stays on top.
    fn split(&mut self, t: usize) {
        let Some(frame) = self.stacks.get_mut(t).expect("should exist").pop() else {
            return;
        };

        let wt = self.index.wt();

        let (left, right) = frame.node.ensure_children(wt);
        let (left, right) = (Arc::clone(left), Arc::clone(right));

        let (left_range, right_range) = wt.expand_range(frame.node.node(), frame.range);

        self.splits += 1;

        let stack = self.stacks.get_mut(t).expect("should exist");

        if let Some(range) = right_range {
            stack.push(Frame { range, node: right });
        }

        if let Some(range) = left_range {
            stack.push(Frame { range, node: left });
        }
    }

    /// Re-centers `b_values` around the current start position: drops ends
    /// that fall short of `a + min_reach`, pulls in every s2 start up to
    /// `a + max_reach`
    fn adjust_window(&mut self) {
        let floor = self.a.saturating_add(self.min_reach);

        while self.b_values.front().is_some_and(|&b| b < floor) {
            self.b_values.pop_front();
        }

        let ceil = self.a.saturating_add(self.max_reach);

        loop {
            let Some(top) = self.stacks[1].last() else {
                break;
            };

            if top.node.lo() > ceil {
                break;
            }

            if top.node.is_leaf() {
                let b = top.node.lo();
                self.stacks[1].pop();
                self.b_values.push_back(b);
            } else {
                self.split(1);
            }
        }
    }

    /// Produces the next non-empty batch (a, b_values), or reports exhaustion
    fn next_batch(&mut self) -> bool {
        self.b_idx = 0;

        // Another s1 start may still reach into the current window; descend
        // stack 0 alone until that stops being true.
        loop {
            let Some(top) = self.stacks[0].last() else {
                break;
            };

            let Some(&back) = self.b_values.back() else {
                break;
            };

            if top.node.lo().saturating_add(self.min_reach) > back {
                break;
            }

            if top.node.is_leaf() {
                self.a = top.node.lo();
                self.stacks[0].pop();
                self.adjust_window();

                if !self.b_values.is_empty() {
                    return true;
                }
            } else {
                self.split(0);
            }
        }

        // Seed a fresh window from the first gap-compatible pair of
        // subtrees, pruning subtrees that lie too far left or right.
        loop {
            let Some(top0) = self.stacks[0].last() else {
                break;
            };

            let Some(top1) = self.stacks[1].last() else {
                break;
            };

            let (lo0, hi0, leaf0, span0) = (
                top0.node.lo(),
                top0.node.hi(),
                top0.node.is_leaf(),
                top0.node.span(),
            );

            let (lo1, hi1, leaf1, span1) = (
                top1.node.lo(),
                top1.node.hi(),
                top1.node.is_leaf(),
                top1.node.span(),
            );

            if hi0.saturating_add(self.max_reach) < lo1 {
                // even the rightmost s1 start here cannot reach the
                // leftmost remaining s2 start
                self.stacks[0].pop();
            } else if lo0.saturating_add(self.min_reach) > hi1 {
                // every remaining s1 start overshoots this whole subtree
                self.stacks[1].pop();
            } else if leaf0 && leaf1 {
                self.a = lo0;
                self.b_values.push_back(lo1);
                self.stacks[0].pop();
                self.stacks[1].pop();
                self.adjust_window();
                return true;
            } else {
                // descend the wider side first, it converges faster
                self.split(usize::from(span1 > span0));
            }
        }

        self.b_values.clear();

        log::trace!("gapped match stream exhausted after {} node splits", self.splits);

        false
    }
}

impl Iterator for GapMatches {
    type Item = MatchPair;

    fn next(&mut self) -> Option<Self::Item> {
        let pair = self.current?;
        self.advance();
        Some(pair)
    }
}

impl std::iter::FusedIterator for GapMatches {}
