// Copyright (c) 2024-present, fjall-rs
// This source code is licensed under both the Apache 2.0 and MIT License
// (found in the LICENSE-* files in the repository)

use crate::bit_vec::RankBitVec;
use crate::lex_range::LexRange;

const NIL: usize = usize::MAX;

/// Handle to a wavelet-tree node
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct WtNode(usize);

struct NodeData {
    lo: usize,
    hi: usize,
    left: usize,
    right: usize,

    // for every row the node represents: whether its value falls into the
    // upper half of [lo, hi]; empty for leaves
    bits: RankBitVec,
}

/// Balanced wavelet tree over the suffix-array values
///
/// Built by recursively halving the value interval `[0, n - 1]` of text
/// positions. Because the suffix array is a permutation, every node holds
/// each value of its interval exactly once, so both children of an inner
/// node are non-empty and their intervals partition the parent's.
///
/// Rows (suffix-array indexes) addressed in node operations are local to
/// the node; `expand_range` translates a parent-local row interval into the
/// children's local coordinates.
pub struct WaveletTree {
    nodes: Vec<NodeData>,
    root: usize,
    len: usize,
}

impl WaveletTree {
    /// Builds the tree, consuming the suffix array
    ///
    /// `values` must be a permutation of `0..values.len()` and non-empty.
    #[must_use]
    pub fn from_values(values: Vec<usize>) -> Self {
        debug_assert!(!values.is_empty());

        let len = values.len();
        let mut nodes = Vec::new();
        let root = Self::build(&mut nodes, values, 0, len - 1);

        log::debug!("wavelet tree ready: {len} values, {} nodes", nodes.len());

        Self { nodes, root, len }
    }

    fn build(nodes: &mut Vec<NodeData>, values: Vec<usize>, lo: usize, hi: usize) -> usize {
        if lo == hi {
            nodes.push(NodeData {
                lo,
                hi,
                left: NIL,
                right: NIL,
                bits: RankBitVec::new(),
            });

            return nodes.len() - 1;
        }

        let mid = lo + (hi - lo) / 2;

        let mut bits = RankBitVec::with_capacity(values.len());
        let mut lower = Vec::new();
        let mut upper = Vec::new();

        for value in values {
            let is_upper = value > mid;
            bits.push(is_upper);

            if is_upper {
                upper.push(value);
            } else {
                lower.push(value);
            }
        }

        let left = Self::build(nodes, lower, lo, mid);
        let right = Self::build(nodes, upper, mid + 1, hi);

        nodes.push(NodeData {
            lo,
            hi,
            left,
            right,
            bits,
        });

        nodes.len() - 1
    }

    fn data(&self, node: WtNode) -> &NodeData {
        self.nodes.get(node.0).expect("node should exist")
    }

    /// Number of suffix-array rows the tree was built over
    #[must_use]
    pub fn len(&self) -> usize {
        self.len
    }

    /// The root node, covering all text positions
    #[must_use]
    pub fn root(&self) -> WtNode {
        WtNode(self.root)
    }

    /// The contiguous interval of text positions reachable beneath `node`
    #[must_use]
    pub fn value_range(&self, node: WtNode) -> (usize, usize) {
        let data = self.data(node);
        (data.lo, data.hi)
    }

    /// Whether `node` represents exactly one text position
    #[must_use]
    pub fn is_leaf(&self, node: WtNode) -> bool {
        self.data(node).left == NIL
    }

    /// Structural children of an inner node
    #[must_use]
    pub fn expand(&self, node: WtNode) -> (WtNode, WtNode) {
        let data = self.data(node);
        debug_assert!(data.left != NIL, "cannot expand a leaf");

        (WtNode(data.left), WtNode(data.right))
    }

    /// Projects a node-local row interval onto the node's children
    ///
    /// Either side is `None` when no row of the interval descends there.
    #[must_use]
    pub fn expand_range(
        &self,
        node: WtNode,
        range: LexRange,
    ) -> (Option<LexRange>, Option<LexRange>) {
        let data = self.data(node);

        let start = range.start();
        let end = range.end();

        debug_assert!(end < data.bits.len(), "row interval exceeds node");

        let zeros_before = data.bits.rank0(start);
        let zeros_upto = data.bits.rank0(end + 1);
        let zeros_in = zeros_upto - zeros_before;

        let ones_before = start - zeros_before;
        let ones_in = range.count() - zeros_in;

        let left = (zeros_in > 0).then(|| LexRange::new(zeros_before, zeros_upto - 1));
        let right = (ones_in > 0).then(|| LexRange::new(ones_before, ones_before + ones_in - 1));

        (left, right)
    }

    /// The suffix-array value at `row`, by descending to its leaf
    #[must_use]
    pub fn access(&self, row: usize) -> usize {
        let mut node = self.root;
        let mut pos = row;

        loop {
            let data = self.nodes.get(node).expect("node should exist");

            if data.left == NIL {
                return data.lo;
            }

            if data.bits.get(pos) {
                pos = data.bits.rank1(pos);
                node = data.right;
            } else {
                pos = data.bits.rank0(pos);
                node = data.left;
            }
        }
    }
}
