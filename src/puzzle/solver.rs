#![warn(clippy::all, clippy::pedantic, clippy::nursery, clippy::cargo)]
//! The full solving pipeline, from layout and dictionary to ranked solutions.
//!
//! layout -> `LetterGraph` -> `WordFinder` (with the `Trie`) -> `filter_dominated`
//! -> `WordGraph` -> `ChainSearch`.
//!
//! Every stage is built once and only read afterwards. A degenerate layout (no sides,
//! or a side without letters) or an empty dictionary is not an error; it simply
//! produces no words and no solutions.

use crate::puzzle::dominance::filter_dominated;
use crate::puzzle::layout::Layout;
use crate::puzzle::letter_graph::LetterGraph;
use crate::puzzle::search::{ChainSearch, SearchError, Solution};
use crate::puzzle::trie::Trie;
use crate::puzzle::word::Word;
use crate::puzzle::word_finder::WordFinder;
use crate::puzzle::word_graph::WordGraph;

/// Tunables for a solve.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SolverConfig {
    /// Longest chain the search may build before giving up with `SearchError::Overflow`.
    pub max_chain_len: usize,
    /// How many solutions `Outcome::top` yields.
    pub top: usize,
}

impl Default for SolverConfig {
    fn default() -> Self {
        Self {
            max_chain_len: 12,
            top: 3,
        }
    }
}

/// Counters gathered across the pipeline.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct SolveStats {
    /// Letter nodes in the box.
    pub letter_nodes: usize,
    /// Undirected edges in the letter graph.
    pub letter_edges: usize,
    /// Walks examined by the word finder.
    pub walks: usize,
    /// Realisable words before dominance filtering.
    pub words_found: usize,
    /// Words left after dominance filtering.
    pub words_kept: usize,
    /// Directed edges in the word graph.
    pub word_edges: usize,
    /// Distinct chains visited by the chain search.
    pub chains: usize,
    /// Chain extensions refused because they added no letter.
    pub pruned: usize,
    /// Covering chains found.
    pub solutions: usize,
}

/// Everything a solve produces.
#[derive(Debug, Clone)]
pub struct Outcome {
    /// The letter graph of the box.
    pub letters: LetterGraph,
    /// Every realisable word, before filtering.
    pub found: Vec<Word>,
    /// The filtered words, linked end-to-start.
    pub words: WordGraph,
    /// All covering chains, shortest first.
    pub solutions: Vec<Solution>,
    /// Pipeline counters.
    pub stats: SolveStats,
    config: SolverConfig,
}

impl Outcome {
    /// The best `SolverConfig::top` solutions, each as its ordered list of words.
    pub fn top(&self) -> impl Iterator<Item = Vec<&Word>> + '_ {
        self.solutions
            .iter()
            .take(self.config.top)
            .map(|solution| solution.words(&self.words).collect())
    }
}

/// The word-finding half of the pipeline.
#[derive(Debug, Clone)]
pub struct Discovery {
    /// The letter graph of the box.
    pub letters: LetterGraph,
    /// Every realisable word, one per walk.
    pub found: Vec<Word>,
    /// The words that survive dominance filtering, in discovery order.
    pub kept: Vec<Word>,
    /// Walks examined by the word finder.
    pub walks: usize,
}

/// Runs the pipeline.
#[derive(Debug, Clone, Copy, Default)]
pub struct Solver {
    config: SolverConfig,
}

impl Solver {
    /// Creates a solver with the given configuration.
    #[must_use]
    pub const fn new(config: SolverConfig) -> Self {
        Self { config }
    }

    /// The configuration in use.
    #[must_use]
    pub const fn config(&self) -> &SolverConfig {
        &self.config
    }

    /// Finds the realisable words of `layout`, before and after dominance filtering.
    ///
    /// A degenerate layout yields no words; its letter graph is still built.
    #[must_use]
    pub fn discover(&self, layout: &Layout, trie: &Trie) -> Discovery {
        let letters = LetterGraph::new(layout);
        if layout.is_degenerate() {
            return Discovery {
                letters,
                found: Vec::new(),
                kept: Vec::new(),
                walks: 0,
            };
        }

        let found = WordFinder::new(&letters, trie).find();
        let kept = filter_dominated(found.words.clone());
        Discovery {
            letters,
            found: found.words,
            kept,
            walks: found.walks,
        }
    }

    /// Solves `layout` against `trie`.
    ///
    /// # Errors
    ///
    /// `SearchError::Overflow` if the chain search exceeds `max_chain_len`.
    pub fn solve(&self, layout: &Layout, trie: &Trie) -> Result<Outcome, SearchError> {
        let Discovery {
            letters,
            found,
            kept,
            walks,
        } = self.discover(layout, trie);
        let words = WordGraph::new(kept);
        let searched = ChainSearch::new(&words, letters.len(), self.config.max_chain_len).run()?;

        let stats = SolveStats {
            letter_nodes: letters.len(),
            letter_edges: letters.edge_count(),
            walks,
            words_found: found.len(),
            words_kept: words.len(),
            word_edges: words.edge_count(),
            chains: searched.chains,
            pruned: searched.pruned,
            solutions: searched.solutions.len(),
        };

        Ok(Outcome {
            letters,
            found,
            words,
            solutions: searched.solutions,
            stats,
            config: self.config,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::puzzle::layout::EXAMPLE_LAYOUT;
    use bit_vec::BitVec;

    fn example_trie() -> Trie {
        [
            "cat", "tic", "lice", "place", "sun", "nets", "pulse", "rent", "cut", "ocean",
            "canoe", "tulip", "clue", "punt", "trance", "eruptions", "script", "tops",
            "soluble", "pelican", "nectar", "taps", "sparrow", "incur",
        ]
        .into_iter()
        .collect()
    }

    #[test]
    fn test_empty_inputs_are_trivial() {
        let solver = Solver::default();

        let outcome = solver.solve(&Layout::default(), &example_trie()).unwrap();
        assert_eq!(outcome.stats, SolveStats::default());

        let outcome = solver.solve(&Layout::from(EXAMPLE_LAYOUT), &Trie::new()).unwrap();
        assert!(outcome.found.is_empty());
        assert!(outcome.solutions.is_empty());
        assert_eq!(outcome.stats.letter_nodes, 12);
    }

    #[test]
    fn test_empty_side_gives_no_words() {
        let layout = Layout::from(vec![vec!['a', 'b'], vec![], vec!['c', 'd']]);
        let trie: Trie = ["acbd"].into_iter().collect();

        let discovery = Solver::default().discover(&layout, &trie);
        assert!(discovery.found.is_empty());
        assert!(discovery.kept.is_empty());

        let outcome = Solver::default().solve(&layout, &trie).unwrap();
        assert!(outcome.found.is_empty());
        assert!(outcome.solutions.is_empty());
        assert_eq!(outcome.top().count(), 0);
        assert_eq!(outcome.stats.letter_nodes, 4);
        assert_eq!(outcome.stats.words_found, 0);

        let parsed: Layout = "ab,,cd".parse().unwrap();
        let outcome = Solver::default().solve(&parsed, &trie).unwrap();
        assert!(outcome.solutions.is_empty());
    }

    #[test]
    fn test_single_word_box() {
        let layout = Layout::from([['a', 'b'], ['c', 'd']]);
        let trie: Trie = ["acbd", "acb", "cad", "abc"].into_iter().collect();

        let outcome = Solver::default().solve(&layout, &trie).unwrap();
        assert_eq!(outcome.stats.words_found, 3);

        let best: Vec<Vec<&str>> = outcome
            .top()
            .map(|chain| chain.iter().map(|w| w.text()).collect())
            .collect();
        assert_eq!(best[0], vec!["acbd"]);
    }

    #[test]
    fn test_example_solutions_cover_the_box() {
        let layout = Layout::from(EXAMPLE_LAYOUT);
        let outcome = Solver::default().solve(&layout, &example_trie()).unwrap();

        assert!(outcome.stats.words_kept <= outcome.stats.words_found);
        assert_eq!(outcome.stats.solutions, outcome.solutions.len());

        for solution in &outcome.solutions {
            let mut covered = BitVec::from_elem(outcome.letters.len(), false);
            let words: Vec<&Word> = solution.words(&outcome.words).collect();
            for pair in words.windows(2) {
                assert_eq!(pair[0].last(), pair[1].first());
            }
            for word in &words {
                covered.or(word.coverage());
            }
            assert!(covered.all());
            assert_eq!(solution.coverage(), layout.letter_count());
        }
        assert!(outcome.top().count() <= 3);
    }

    #[test]
    fn test_discover_filters_dominated_words() {
        let layout = Layout::from([['a', 'b'], ['c', 'd']]);
        let trie: Trie = ["acb", "acbd", "dbca"].into_iter().collect();

        let discovery = Solver::default().discover(&layout, &trie);
        assert_eq!(discovery.found.len(), 3);
        // "acbd" and "dbca" cover the same four nodes; the first one found wins.
        let kept: Vec<&str> = discovery.kept.iter().map(Word::text).collect();
        assert_eq!(kept, vec!["acbd"]);
    }

    #[test]
    fn test_top_respects_config() {
        let layout = Layout::from([['a', 'b'], ['c', 'd']]);
        let trie: Trie = ["acb", "bda"].into_iter().collect();

        let solver = Solver::new(SolverConfig {
            top: 1,
            ..SolverConfig::default()
        });
        let outcome = solver.solve(&layout, &trie).unwrap();
        assert!(outcome.solutions.len() > 1);
        assert_eq!(outcome.top().count(), 1);
        assert_eq!(outcome.solutions.len(), 2);
        assert_eq!(outcome.top().next().unwrap().len(), 2);
    }

    #[test]
    fn test_chain_cap_overflow_aborts_solve() {
        let layout = Layout::from([['a', 'b'], ['c', 'd']]);
        let trie: Trie = ["acb", "bda"].into_iter().collect();

        let solver = Solver::new(SolverConfig {
            max_chain_len: 1,
            ..SolverConfig::default()
        });
        let err = solver.solve(&layout, &trie).unwrap_err();
        assert_eq!(err, SearchError::Overflow { limit: 1 });
    }
}
