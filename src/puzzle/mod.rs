#![warn(clippy::all, clippy::pedantic, clippy::nursery, clippy::cargo)]
//! Letter Boxed: building the letter graph, finding playable words, and searching
//! for the shortest word chains that use every letter.

/// Dominance filtering of words whose letters add nothing over another word's.
pub mod dominance;
/// Reading and normalising plain-text word lists.
pub mod dictionary;
/// The box layout and its textual form.
pub mod layout;
/// The letter adjacency graph.
pub mod letter_graph;
/// Chain search over the word graph.
pub mod search;
/// The end-to-end solving pipeline.
pub mod solver;
/// Prefix tree over the dictionary.
pub mod trie;
/// Words as walks on the letter graph.
pub mod word;
/// Trie-guided enumeration of playable words.
pub mod word_finder;
/// The directed graph of words chained end-to-start.
pub mod word_graph;
