#![warn(clippy::all, clippy::pedantic, clippy::nursery, clippy::cargo)]
//! Search for word chains that use every letter in the box.
//!
//! Every word is tried as the head of a chain. From there the search walks the word
//! graph depth-first, carrying the set of letter nodes the chain covers so far:
//!
//! 1. A word that would add no new letter node is never appended.
//! 2. A chain already seen from this start is not expanded again.
//! 3. A chain that covers every letter node is recorded and not extended.
//! 4. Otherwise every successor of the last word is tried in turn.
//!
//! Rule 1 means every word in a chain adds at least one node, so a chain can never
//! be longer than the box has letters. The configured cap is checked before every
//! append; hitting it means the pruning above has been broken and the whole search
//! is abandoned with `SearchError::Overflow`.
//!
//! Each call extends a distinct parent chain, so rule 2 never fires in practice; the
//! seen-chain set guards the no-repeated-chain invariant.
//!
//! Chains only stop at the first covering word, so no proper prefix of a recorded
//! chain covers the box. Chains from different heads are not compared; the caller
//! ranks them by length.

use crate::puzzle::word::{Word, count_ones};
use crate::puzzle::word_graph::{WordGraph, WordId};
use bit_vec::BitVec;
use rustc_hash::FxHashSet;
use smallvec::SmallVec;
use std::fmt::Display;

/// Chain of word indices. Real solutions are short.
pub type Chain = SmallVec<[WordId; 4]>;

/// Failure of the chain search.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SearchError {
    /// A chain would have grown beyond `limit` words.
    Overflow {
        /// The configured maximum chain length.
        limit: usize,
    },
}

impl Display for SearchError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Overflow { limit } => write!(
                f,
                "search overflow: a word chain grew past {limit} words without covering the box"
            ),
        }
    }
}

impl std::error::Error for SearchError {}

/// A chain of words covering every letter node.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Solution {
    chain: Chain,
    coverage: usize,
}

impl Solution {
    /// Word indices in chain order.
    #[must_use]
    pub fn chain(&self) -> &[WordId] {
        &self.chain
    }

    /// Number of distinct letter nodes the chain covers.
    #[must_use]
    pub const fn coverage(&self) -> usize {
        self.coverage
    }

    /// Number of words in the chain.
    #[must_use]
    pub fn len(&self) -> usize {
        self.chain.len()
    }

    /// Always `false` for a recorded solution; present for symmetry with `len`.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.chain.is_empty()
    }

    /// The words of the chain, resolved against the graph that produced it.
    pub fn words<'a>(&'a self, graph: &'a WordGraph) -> impl Iterator<Item = &'a Word> + 'a {
        self.chain.iter().map(|&id| graph.word(id))
    }
}

/// Solutions from one or more chain heads, plus search counters.
#[derive(Debug, Clone, Default)]
pub struct Searched {
    /// Covering chains, in discovery order until `ChainSearch::run` sorts them.
    pub solutions: Vec<Solution>,
    /// Distinct chains visited.
    pub chains: usize,
    /// Appends refused because the word added no new letter node.
    pub pruned: usize,
}

impl Searched {
    fn merge(mut self, other: Self) -> Self {
        self.solutions.extend(other.solutions);
        self.chains += other.chains;
        self.pruned += other.pruned;
        self
    }
}

/// Mutable state of a search from one chain head.
struct Branch {
    chain: Chain,
    covered: BitVec,
    seen: FxHashSet<Chain>,
}

/// Depth-first chain search over a word graph.
#[derive(Debug, Clone, Copy)]
pub struct ChainSearch<'a> {
    graph: &'a WordGraph,
    target: usize,
    max_chain_len: usize,
}

impl<'a> ChainSearch<'a> {
    /// Creates a search over `graph` for chains covering `target` letter nodes,
    /// failing if a chain would exceed `max_chain_len` words.
    #[must_use]
    pub const fn new(graph: &'a WordGraph, target: usize, max_chain_len: usize) -> Self {
        Self {
            graph,
            target,
            max_chain_len,
        }
    }

    /// Searches from every word and returns all solutions, shortest chains first.
    ///
    /// # Errors
    ///
    /// `SearchError::Overflow` if any chain would exceed the configured cap.
    pub fn run(&self) -> Result<Searched, SearchError> {
        let mut searched = (0..self.graph.len())
            .map(|head| self.run_from(head))
            .try_fold(Searched::default(), |acc, next| next.map(|n| acc.merge(n)))?;

        searched.solutions.sort_by_key(Solution::len);
        Ok(searched)
    }

    /// Searches every chain headed by `head`. Solutions are in discovery order.
    ///
    /// # Errors
    ///
    /// `SearchError::Overflow` if any chain would exceed the configured cap.
    pub fn run_from(&self, head: WordId) -> Result<Searched, SearchError> {
        let mut out = Searched::default();
        let Some(width) = self.graph.words().first().map(|w| w.coverage().len()) else {
            return Ok(out);
        };

        let mut branch = Branch {
            chain: Chain::new(),
            covered: BitVec::from_elem(width, false),
            seen: FxHashSet::default(),
        };

        self.visit(head, &mut branch, &mut out)?;
        Ok(out)
    }

    fn visit(
        &self,
        id: WordId,
        branch: &mut Branch,
        out: &mut Searched,
    ) -> Result<(), SearchError> {
        let mut covered = branch.covered.clone();
        if !covered.or(self.graph.word(id).coverage()) {
            out.pruned += 1;
            return Ok(());
        }

        if branch.chain.len() >= self.max_chain_len {
            return Err(SearchError::Overflow {
                limit: self.max_chain_len,
            });
        }

        branch.chain.push(id);
        if !branch.seen.insert(branch.chain.clone()) {
            branch.chain.pop();
            return Ok(());
        }
        out.chains += 1;

        let coverage = count_ones(&covered);
        if coverage >= self.target {
            out.solutions.push(Solution {
                chain: branch.chain.clone(),
                coverage,
            });
            branch.chain.pop();
            return Ok(());
        }

        let previous = std::mem::replace(&mut branch.covered, covered);
        for &next in self.graph.successors(id) {
            self.visit(next, branch, out)?;
        }
        branch.covered = previous;
        branch.chain.pop();

        Ok(())
    }
}
