#![warn(clippy::all, clippy::pedantic, clippy::nursery, clippy::cargo)]
//! Prefix tree over the dictionary.
//!
//! Answers the two questions the word finder asks on every step: is this string
//! a complete word, and can it still be extended into one. The finder walks the
//! tree one letter at a time through `TrieNode::child`, so a step costs a single
//! hash lookup instead of a walk from the root.

use rustc_hash::FxHashMap;

/// Shortest string that counts as a word in the puzzle.
pub const MIN_WORD_LEN: usize = 3;

/// Prefix tree node.
#[derive(Debug, Clone, Default)]
pub struct TrieNode {
    next: FxHashMap<char, TrieNode>,
    terminal: bool,
}

impl TrieNode {
    /// The child reached by appending `c`, if any word continues that way.
    #[must_use]
    pub fn child(&self, c: char) -> Option<&Self> {
        self.next.get(&c)
    }

    /// `true` if the path from the root to this node spells a dictionary entry.
    #[must_use]
    pub const fn is_terminal(&self) -> bool {
        self.terminal
    }

    fn descend(&self, s: &str) -> Option<&Self> {
        s.chars().try_fold(self, |node, c| node.child(c))
    }
}

/// The dictionary as a prefix tree. Built once, read-only afterwards.
#[derive(Debug, Clone, Default)]
pub struct Trie {
    root: TrieNode,
    len: usize,
}

impl Trie {
    /// Creates an empty trie.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a word. Empty strings and duplicates are ignored.
    pub fn insert(&mut self, word: &str) {
        if word.is_empty() {
            return;
        }
        let node = word
            .chars()
            .fold(&mut self.root, |node, c| node.next.entry(c).or_default());
        if !node.terminal {
            node.terminal = true;
            self.len += 1;
        }
    }

    /// Number of distinct words stored.
    #[must_use]
    pub const fn len(&self) -> usize {
        self.len
    }

    /// `true` if no word has been inserted.
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// The node for the empty prefix.
    #[must_use]
    pub const fn root(&self) -> &TrieNode {
        &self.root
    }

    /// `true` iff `s` is at least `MIN_WORD_LEN` letters long and is an exact entry.
    #[must_use]
    pub fn is_complete_word(&self, s: &str) -> bool {
        s.chars().count() >= MIN_WORD_LEN && self.root.descend(s).is_some_and(TrieNode::is_terminal)
    }

    /// `true` iff some entry starts with `s`, `s` itself included.
    #[must_use]
    pub fn is_valid_prefix(&self, s: &str) -> bool {
        self.root.descend(s).is_some()
    }
}

impl<S: AsRef<str>> FromIterator<S> for Trie {
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
        let mut trie = Self::new();
        for word in iter {
            trie.insert(word.as_ref());
        }
        trie
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> Trie {
        ["bass", "bats", "bess", "be", "basset"].into_iter().collect()
    }

    #[test]
    fn test_complete_words() {
        let trie = sample();

        assert!(trie.is_complete_word("bass"));
        assert!(trie.is_complete_word("bats"));
        assert!(trie.is_complete_word("basset"));
        assert!(!trie.is_complete_word("bat"));
        assert!(!trie.is_complete_word("bassets"));
    }

    #[test]
    fn test_short_entries_are_not_words() {
        let trie = sample();
        assert!(!trie.is_complete_word("be"));
        assert!(trie.is_valid_prefix("be"));
    }

    #[test]
    fn test_prefixes() {
        let trie = sample();

        assert!(trie.is_valid_prefix(""));
        assert!(trie.is_valid_prefix("b"));
        assert!(trie.is_valid_prefix("bas"));
        assert!(trie.is_valid_prefix("basset"));
        assert!(!trie.is_valid_prefix("bx"));
        assert!(!trie.is_valid_prefix("bassets"));
    }

    #[test]
    fn test_incremental_descent_matches_lookups() {
        let trie = sample();
        let node = "bes".chars().try_fold(trie.root(), |n, c| n.child(c));
        assert!(node.is_some_and(|n| !n.is_terminal()));
        let node = node.and_then(|n| n.child('s'));
        assert!(node.is_some_and(TrieNode::is_terminal));
    }

    #[test]
    fn test_len_ignores_duplicates_and_empty() {
        let trie: Trie = ["cat", "cat", "", "cats"].into_iter().collect();
        assert_eq!(trie.len(), 2);
        assert!(!trie.is_empty());
        assert!(Trie::new().is_empty());
    }
}
