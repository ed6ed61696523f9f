#![warn(clippy::all, clippy::pedantic, clippy::nursery, clippy::cargo)]
//! Enumerates every dictionary word that can be spelled as a walk on the letter graph.
//!
//! Each start node gets its own depth-first search driven by an explicit work stack.
//! The trie node for the current prefix travels with each stack frame, so extending
//! a walk by one letter is one child lookup, and a neighbour whose letter leads
//! nowhere in the trie is never pushed. Walk length is therefore bounded by the
//! longest dictionary prefix, not by the size of the box.
//!
//! The search state (path buffer, text buffer, seen walks) is local to one start
//! node, and each start returns its own `Found`, which the caller merges. Starts
//! share nothing mutable, so they could be searched in parallel.
//!
//! Every frame extends a distinct parent walk, so the seen-walk set never rejects
//! anything; it guards the one-entry-per-walk invariant.

use crate::puzzle::letter_graph::{LetterGraph, NodeId};
use crate::puzzle::trie::{MIN_WORD_LEN, Trie, TrieNode};
use crate::puzzle::word::{Path, Word};
use rustc_hash::FxHashSet;

/// Words found by a search, plus how many walks were examined to find them.
#[derive(Debug, Clone, Default)]
pub struct Found {
    /// Every realisable word, one entry per distinct walk.
    pub words: Vec<Word>,
    /// Number of walks (prefixes) visited.
    pub walks: usize,
}

impl Found {
    fn merge(mut self, other: Self) -> Self {
        self.words.extend(other.words);
        self.walks += other.walks;
        self
    }
}

/// A pending visit: step onto `node`, whose letter leads to `trie` in the prefix tree.
/// `depth` is the path length before the step.
struct Frame<'t> {
    node: NodeId,
    trie: &'t TrieNode,
    depth: usize,
    text_len: usize,
}

/// Trie-guided walk enumeration over a letter graph.
#[derive(Debug, Clone, Copy)]
pub struct WordFinder<'a> {
    graph: &'a LetterGraph,
    trie: &'a Trie,
}

impl<'a> WordFinder<'a> {
    /// Creates a finder over `graph`, checking walks against `trie`.
    #[must_use]
    pub const fn new(graph: &'a LetterGraph, trie: &'a Trie) -> Self {
        Self { graph, trie }
    }

    /// Searches from every node and merges the results.
    #[must_use]
    pub fn find(&self) -> Found {
        self.graph
            .ids()
            .map(|start| self.find_from(start))
            .fold(Found::default(), Found::merge)
    }

    /// Searches every walk that begins at `start`.
    #[must_use]
    pub fn find_from(&self, start: NodeId) -> Found {
        let mut found = Found::default();

        let Some(first) = self.trie.root().child(self.graph.node(start).letter) else {
            return found;
        };

        let mut path = Path::new();
        let mut text = String::new();
        let mut seen: FxHashSet<Path> = FxHashSet::default();
        let mut stack = vec![Frame {
            node: start,
            trie: first,
            depth: 0,
            text_len: 0,
        }];

        while let Some(frame) = stack.pop() {
            // Backtrack to the frame's parent before stepping.
            path.truncate(frame.depth);
            text.truncate(frame.text_len);
            path.push(frame.node);
            text.push(self.graph.node(frame.node).letter);

            if !seen.insert(path.clone()) {
                continue;
            }
            found.walks += 1;

            if frame.trie.is_terminal() && path.len() >= MIN_WORD_LEN {
                found
                    .words
                    .push(Word::new(text.clone(), path.clone(), self.graph.len()));
            }

            for &next in self.graph.neighbours(frame.node) {
                if let Some(child) = frame.trie.child(self.graph.node(next).letter) {
                    stack.push(Frame {
                        node: next,
                        trie: child,
                        depth: path.len(),
                        text_len: text.len(),
                    });
                }
            }
        }

        found
    }
}
