#![warn(clippy::all, clippy::pedantic, clippy::nursery, clippy::cargo)]
//! A dictionary word realised as a walk on the letter graph.

use crate::puzzle::letter_graph::{LetterGraph, NodeId, NodeKey};
use bit_vec::BitVec;
use smallvec::SmallVec;
use std::hash::{Hash, Hasher};

/// Ordered node sequence of a walk. Most words fit inline.
pub type Path = SmallVec<[NodeId; 12]>;

/// A word together with the exact walk that spells it.
///
/// Identity is the walk: two `Word`s with the same text but different paths are
/// different words, and equality and hashing look at the path only.
#[derive(Debug, Clone)]
pub struct Word {
    text: String,
    path: Path,
    coverage: BitVec,
}

impl Word {
    /// Creates a word from its walk. `node_count` sizes the coverage set and must be
    /// the number of nodes in the graph the walk belongs to.
    #[must_use]
    pub fn new(text: String, path: Path, node_count: usize) -> Self {
        let mut coverage = BitVec::from_elem(node_count, false);
        for id in &path {
            coverage.set(id.index(), true);
        }
        Self {
            text,
            path,
            coverage,
        }
    }

    /// The spelled word.
    #[must_use]
    pub fn text(&self) -> &str {
        &self.text
    }

    /// The walk, one node per letter.
    #[must_use]
    pub fn path(&self) -> &[NodeId] {
        &self.path
    }

    /// First node of the walk.
    ///
    /// # Panics
    ///
    /// If the word is empty, which the word finder never produces.
    #[must_use]
    pub fn first(&self) -> NodeId {
        self.path[0]
    }

    /// Last node of the walk.
    ///
    /// # Panics
    ///
    /// If the word is empty, which the word finder never produces.
    #[must_use]
    pub fn last(&self) -> NodeId {
        self.path[self.path.len() - 1]
    }

    /// Set of distinct nodes the walk touches, indexed by `NodeId`.
    #[must_use]
    pub const fn coverage(&self) -> &BitVec {
        &self.coverage
    }

    /// Number of distinct nodes the walk touches.
    #[must_use]
    pub fn coverage_count(&self) -> usize {
        count_ones(&self.coverage)
    }

    /// `true` if every node this word covers is also covered by `other`.
    #[must_use]
    pub fn is_covered_by(&self, other: &Self) -> bool {
        is_subset(&self.coverage, &other.coverage)
    }

    /// The walk expressed as `(side, position)` keys.
    pub fn keys<'a>(&'a self, graph: &'a LetterGraph) -> impl Iterator<Item = NodeKey> + 'a {
        self.path.iter().map(|&id| graph.node(id).key)
    }
}

impl PartialEq for Word {
    fn eq(&self, other: &Self) -> bool {
        self.path == other.path
    }
}

impl Eq for Word {}

impl Hash for Word {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.path.hash(state);
    }
}

/// Number of set bits.
#[must_use]
pub fn count_ones(bits: &BitVec) -> usize {
    bits.blocks().map(|b| b.count_ones() as usize).sum()
}

/// `true` if every bit set in `a` is set in `b`. Both must have the same length.
#[must_use]
pub fn is_subset(a: &BitVec, b: &BitVec) -> bool {
    a.blocks().zip(b.blocks()).all(|(x, y)| x & !y == 0)
}
