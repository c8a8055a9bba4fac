// Copyright (c) 2024-present, fjall-rs
// This source code is licensed under both the Apache 2.0 and MIT License
// (found in the LICENSE-* files in the repository)

use crate::wavelet::{WaveletTree, WtNode};
use std::sync::{Arc, OnceLock};

/// Shared handle to a wavelet-tree node visited during co-descent
///
/// The value range and leaf flag are read once at creation. The child pair
/// is materialised at most once, no matter how many stack frames hold the
/// handle; the one-shot cell keeps that true even across threads.
pub struct NodeCache {
    node: WtNode,
    lo: usize,
    hi: usize,
    leaf: bool,
    children: OnceLock<(Arc<NodeCache>, Arc<NodeCache>)>,
}

impl NodeCache {
    #[must_use]
    pub fn new(node: WtNode, wt: &WaveletTree) -> Self {
        let (lo, hi) = wt.value_range(node);

        Self {
            node,
            lo,
            hi,
            leaf: wt.is_leaf(node),
            children: OnceLock::new(),
        }
    }

    #[must_use]
    pub fn node(&self) -> WtNode {
        self.node
    }

    /// Smallest text position reachable beneath this node
    #[must_use]
    pub fn lo(&self) -> usize {
        self.lo
    }

    /// Largest text position reachable beneath this node
    #[must_use]
    pub fn hi(&self) -> usize {
        self.hi
    }

    #[must_use]
    pub fn is_leaf(&self) -> bool {
        self.leaf
    }

    /// Width of the covered text-position interval
    #[must_use]
    pub fn span(&self) -> usize {
        self.hi - self.lo + 1
    }

    /// Both children, materialised on first use
    pub fn ensure_children(&self, wt: &WaveletTree) -> &(Arc<Self>, Arc<Self>) {
        self.children.get_or_init(|| {
            let (left, right) = wt.expand(self.node);

            (
                Arc::new(Self::new(left, wt)),
                Arc::new(Self::new(right, wt)),
            )
        })
    }
}
