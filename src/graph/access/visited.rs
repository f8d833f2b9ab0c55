//! Dense visited set for graph traversals.
//!
//! One bit per node, packed into `u64` words, plus a running count of marked
//! nodes so "has every node been visited" is O(1). Marks are only ever added.

const WORD_BITS: usize = u64::BITS as usize;

/// A word-packed visited set sized for a fixed node count.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VisitedSet {
    words: Vec<u64>,
    len: usize,
    count: usize,
}

impl VisitedSet {
    /// Creates a set able to track `len` nodes, all unvisited.
    pub fn new(len: usize) -> Self {
        Self {
            words: vec![0; len.div_ceil(WORD_BITS)],
            len,
            count: 0,
        }
    }

    /// Number of nodes tracked.
    #[inline]
    pub fn len(&self) -> usize {
        self.len
    }

    /// Returns `true` if the set tracks no nodes.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Number of nodes marked so far.
    #[inline]
    pub fn count(&self) -> usize {
        self.count
    }

    /// Returns `true` once every tracked node is marked.
    #[inline]
    pub fn is_complete(&self) -> bool {
        self.count == self.len
    }

    #[inline]
    fn locate(&self, node: usize) -> (usize, u64) {
        assert!(node < self.len, "node {node} out of bounds for visited set of {}", self.len);
        (node / WORD_BITS, 1u64 << (node % WORD_BITS))
    }

    /// Returns `true` if `node` is marked.
    ///
    /// # Panics
    /// Panics if `node >= self.len()`.
    #[inline]
    pub fn is_visited(&self, node: usize) -> bool {
        let (word, mask) = self.locate(node);
        self.words[word] & mask != 0
    }

    /// Marks `node`, returning `true` iff it was not marked before.
    ///
    /// # Panics
    /// Panics if `node >= self.len()`.
    #[inline]
    pub fn try_visit(&mut self, node: usize) -> bool {
        let (word, mask) = self.locate(node);
        let fresh = self.words[word] & mask == 0;
        if fresh {
            self.words[word] |= mask;
            self.count += 1;
        }
        fresh
    }
}
