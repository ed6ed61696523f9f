#![warn(clippy::all, clippy::pedantic, clippy::nursery, clippy::cargo)]
//! Directed graph of words chained end-to-start.
//!
//! There is an edge from word X to word Y iff X's last letter node is Y's first letter
//! node and X and Y are different walks. Words are stored by index; the index is the
//! node identity in this graph.

use crate::puzzle::letter_graph::NodeId;
use crate::puzzle::word::Word;
use rustc_hash::FxHashMap;
use smallvec::SmallVec;

/// Index of a word inside its `WordGraph`.
pub type WordId = usize;

/// Words plus the successor lists that link them.
#[derive(Debug, Clone, Default)]
pub struct WordGraph {
    words: Vec<Word>,
    successors: Vec<Vec<WordId>>,
}

impl WordGraph {
    /// Links `words` end-to-start.
    #[must_use]
    pub fn new(words: Vec<Word>) -> Self {
        let mut starting_at: FxHashMap<NodeId, SmallVec<[WordId; 8]>> = FxHashMap::default();
        for (id, word) in words.iter().enumerate() {
            starting_at.entry(word.first()).or_default().push(id);
        }

        let successors = words
            .iter()
            .enumerate()
            .map(|(id, word)| {
                starting_at
                    .get(&word.last())
                    .map(|next| next.iter().copied().filter(|&n| n != id).collect())
                    .unwrap_or_default()
            })
            .collect();

        Self { words, successors }
    }

    /// Number of words.
    #[must_use]
    pub fn len(&self) -> usize {
        self.words.len()
    }

    /// `true` if there are no words.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }

    /// Number of directed edges.
    #[must_use]
    pub fn edge_count(&self) -> usize {
        self.successors.iter().map(Vec::len).sum()
    }

    /// The word with index `id`.
    ///
    /// # Panics
    ///
    /// If `id` is out of range.
    #[must_use]
    pub fn word(&self, id: WordId) -> &Word {
        &self.words[id]
    }

    /// All words, indexed by `WordId`.
    #[must_use]
    pub fn words(&self) -> &[Word] {
        &self.words
    }

    /// Words that may follow `id` in a chain.
    #[must_use]
    pub fn successors(&self, id: WordId) -> &[WordId] {
        &self.successors[id]
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use smallvec::SmallVec;

    fn word(text: &str, ids: &[usize]) -> Word {
        let path: SmallVec<[NodeId; 12]> = ids.iter().copied().map(NodeId).collect();
        Word::new(text.to_string(), path, 6)
    }

    #[test]
    fn test_end_to_start_edges() {
        let graph = WordGraph::new(vec![
            word("cat", &[0, 3, 1]),
            word("tab", &[1, 3, 2]),
            word("toe", &[1, 4, 5]),
            word("bud", &[2, 5, 0]),
        ]);

        assert_eq!(graph.successors(0), &[1, 2]);
        assert_eq!(graph.successors(1), &[3]);
        assert!(graph.successors(2).is_empty());
        assert_eq!(graph.successors(3), &[0]);
        assert_eq!(graph.edge_count(), 4);

        for id in 0..graph.len() {
            for &next in graph.successors(id) {
                assert_ne!(id, next);
                assert_eq!(graph.word(id).last(), graph.word(next).first());
            }
        }
    }

    #[test]
    fn test_no_self_loops() {
        // Starts and ends on the same node: it can follow itself letter-wise, but not walk-wise.
        let graph = WordGraph::new(vec![word("ana", &[0, 3, 0]), word("aha", &[0, 4, 0])]);

        assert_eq!(graph.successors(0), &[1]);
        assert_eq!(graph.successors(1), &[0]);
    }

    #[test]
    fn test_same_letter_different_node_is_not_linked() {
        // Both 'a's, but on different nodes.
        let graph = WordGraph::new(vec![word("tea", &[1, 4, 0]), word("ant", &[3, 2, 1])]);
        assert!(graph.successors(0).is_empty());
        assert_eq!(graph.successors(1), &[0]);
    }

    #[test]
    fn test_empty() {
        let graph = WordGraph::new(Vec::new());
        assert!(graph.is_empty());
        assert_eq!(graph.edge_count(), 0);
    }
}
