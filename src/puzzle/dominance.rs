#![warn(clippy::all, clippy::pedantic, clippy::nursery, clippy::cargo)]
//! Drops words whose letter coverage adds nothing over another word's.
//!
//! A word is redundant when its coverage is a subset of some other word's coverage.
//! The filter works in two passes:
//!
//! 1. Words with identical coverage collapse to one representative. The first word
//!    in input order survives; which one that is depends on the order the caller
//!    supplies, and no stronger preference (spelling, length) is applied.
//! 2. Among the representatives, any whose coverage is a strict subset of another
//!    representative's is removed.
//!
//! Strict domination is transitive and every chain of it ends at a maximal coverage,
//! which always survives. So every dropped word is covered by a survivor, and no
//! survivor covers another one. Running the filter on its own output is a no-op.

use crate::puzzle::word::{Word, count_ones};
use bit_vec::BitVec;
use rustc_hash::FxHashMap;

/// Returns the words that are not dominated, preserving input order.
#[must_use]
pub fn filter_dominated(words: Vec<Word>) -> Vec<Word> {
    let mut first_seen: FxHashMap<&BitVec, usize> = FxHashMap::default();
    for (i, word) in words.iter().enumerate() {
        first_seen.entry(word.coverage()).or_insert(i);
    }

    let mut representatives: Vec<usize> = first_seen.into_values().collect();
    representatives.sort_unstable();

    // Larger coverage first: a word can only be strictly covered by a bigger one.
    let mut by_size = representatives.clone();
    by_size.sort_by_key(|&i| std::cmp::Reverse(count_ones(words[i].coverage())));

    let mut keep = vec![false; words.len()];
    for &i in &representatives {
        let size = count_ones(words[i].coverage());
        keep[i] = !by_size
            .iter()
            .take_while(|&&j| count_ones(words[j].coverage()) > size)
            .any(|&j| words[i].is_covered_by(&words[j]));
    }

    words
        .into_iter()
        .zip(keep)
        .filter_map(|(word, kept)| kept.then_some(word))
        .collect()
}
