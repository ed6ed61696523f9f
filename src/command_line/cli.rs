#![allow(clippy::cast_precision_loss)]

use clap::{ArgAction, Args, Parser, Subcommand};
use itertools::Itertools;
use letter_boxed::puzzle::dictionary::parse_file;
use letter_boxed::puzzle::layout::{EXAMPLE_LAYOUT, Layout};
use letter_boxed::puzzle::letter_graph::LetterGraph;
use letter_boxed::puzzle::solver::{Outcome, SolveStats, Solver, SolverConfig};
use letter_boxed::puzzle::trie::Trie;
use letter_boxed::puzzle::word::Word;
use std::path::{Path, PathBuf};
use std::time::{Duration, Instant};
use tikv_jemalloc_ctl::{epoch, stats};

/// Defines the command-line interface for the Letter Boxed solver.
///
/// Uses `clap` for parsing arguments.
#[derive(Parser, Debug)]
#[command(name = "letter-boxed", version, about = "A Letter Boxed puzzle solver")]
pub(crate) struct Cli {
    /// An optional dictionary path. If provided without a subcommand,
    /// the puzzle is solved with this dictionary.
    pub path: Option<PathBuf>,

    /// Specifies the subcommand to execute (e.g. `solve`, `words`, `completions`).
    #[clap(subcommand)]
    pub command: Option<Commands>,

    /// Common options applicable to all commands.
    #[command(flatten)]
    pub common: CommonOptions,
}

/// Enumerates the available subcommands.
#[derive(Subcommand, Debug)]
pub(crate) enum Commands {
    /// Find the shortest word chains that use every letter in the box.
    Solve {
        /// Path to the word list, one word per line.
        #[arg(long)]
        dictionary: PathBuf,

        /// Common options for this subcommand.
        #[command(flatten)]
        common: CommonOptions,
    },

    /// List the words that can be played in the box.
    Words {
        /// Path to the word list, one word per line.
        #[arg(long)]
        dictionary: PathBuf,

        /// List every playable walk, including words dominated by another word.
        #[arg(short, long, default_value_t = false)]
        all: bool,

        /// Common options for this subcommand.
        #[command(flatten)]
        common: CommonOptions,
    },

    /// Generate shell completion scripts.
    Completions {
        /// The shell to generate completions for.
        #[arg(value_enum)]
        shell: clap_complete::Shell,
    },
}

/// Defines common command-line options shared across different subcommands.
#[derive(Args, Debug, Clone)]
pub(crate) struct CommonOptions {
    /// Enable debug output: stage timings, graph sizes and the node walk of every printed word.
    #[arg(short, long, default_value_t = false)]
    pub(crate) debug: bool,

    /// Print search statistics after solving.
    #[arg(short, long, action = ArgAction::Set, default_value_t = true)]
    pub(crate) stats: bool,

    /// The box, as comma-separated sides (e.g. "rci,nla,oet,psu"). Defaults to the built-in puzzle.
    #[arg(long)]
    pub(crate) sides: Option<Layout>,

    /// Number of solutions to print.
    #[arg(short = 'n', long, default_value_t = SolverConfig::default().top)]
    pub(crate) top: usize,

    /// Longest word chain the search may build before aborting.
    #[arg(long, default_value_t = SolverConfig::default().max_chain_len)]
    pub(crate) max_chain: usize,
}

impl Default for CommonOptions {
    fn default() -> Self {
        let config = SolverConfig::default();
        Self {
            debug: false,
            stats: true,
            sides: None,
            top: config.top,
            max_chain: config.max_chain_len,
        }
    }
}

impl CommonOptions {
    /// The layout to solve: `--sides` if given, the built-in puzzle otherwise.
    pub(crate) fn layout(&self) -> Layout {
        self.sides
            .clone()
            .unwrap_or_else(|| Layout::from(EXAMPLE_LAYOUT))
    }

    /// Converts the options into the solver configuration.
    pub(crate) const fn config(&self) -> SolverConfig {
        SolverConfig {
            max_chain_len: self.max_chain,
            top: self.top,
        }
    }
}

/// Reads a word list and builds the trie, reporting how long it took.
///
/// # Errors
///
/// If the dictionary cannot be opened or read.
pub(crate) fn load_dictionary(path: &Path, debug: bool) -> Result<(Trie, Duration), String> {
    if !path.is_file() {
        return Err(format!("Dictionary file does not exist: {}", path.display()));
    }

    let time = Instant::now();
    let words = parse_file(path)
        .map_err(|e| format!("Error reading dictionary {}: {e}", path.display()))?;
    let trie: Trie = words.iter().collect();
    let elapsed = time.elapsed();

    if debug {
        println!("Dictionary: {} ({} words)", path.display(), trie.len());
        println!("Dictionary load time: {elapsed:?}");
    }

    Ok((trie, elapsed))
}

/// Reads jemalloc's allocated and resident byte counts, in MiB.
///
/// # Errors
///
/// If the allocator statistics cannot be read.
pub(crate) fn memory_usage() -> Result<(f64, f64), String> {
    epoch::advance().map_err(|e| e.to_string())?;

    let allocated_bytes = stats::allocated::mib()
        .and_then(|m| m.read())
        .map_err(|e| e.to_string())?;
    let resident_bytes = stats::resident::mib()
        .and_then(|m| m.read())
        .map_err(|e| e.to_string())?;

    Ok((
        allocated_bytes as f64 / (1024.0 * 1024.0),
        resident_bytes as f64 / (1024.0 * 1024.0),
    ))
}

/// Solves the puzzle with the given dictionary and prints the best chains.
///
/// # Errors
///
/// If the dictionary cannot be read or the chain search overflows.
pub(crate) fn solve_and_report(dictionary: &Path, common: &CommonOptions) -> Result<(), String> {
    let (trie, parse_time) = load_dictionary(dictionary, common.debug)?;
    let layout = common.layout();
    println!("Solving: {layout}");
    if layout.is_degenerate() {
        println!("Layout has no sides or an empty side; nothing can be played");
    }

    epoch::advance().map_err(|e| e.to_string())?;

    let time = Instant::now();
    let outcome = Solver::new(common.config())
        .solve(&layout, &trie)
        .map_err(|e| e.to_string())?;
    let elapsed = time.elapsed();

    if common.debug {
        let s = &outcome.stats;
        println!("Letter graph: {} nodes, {} edges", s.letter_nodes, s.letter_edges);
        println!("Word graph: {} words, {} edges", s.words_kept, s.word_edges);
        println!("Time: {elapsed:?}");
    }

    println!("Words found: {}", outcome.stats.words_found);
    println!("Words after filtering: {}", outcome.stats.words_kept);
    println!("Solutions found: {}", outcome.stats.solutions);

    print_solutions(&outcome, common.debug);

    if common.stats {
        let (allocated_mib, resident_mib) = memory_usage()?;
        print_stats(parse_time, elapsed, trie.len(), &outcome.stats, allocated_mib, resident_mib);
    }

    Ok(())
}

/// Lists the playable words of the puzzle, filtered unless `all` is set.
///
/// # Errors
///
/// If the dictionary cannot be read.
pub(crate) fn list_words(
    dictionary: &Path,
    all: bool,
    common: &CommonOptions,
) -> Result<(), String> {
    let (trie, _) = load_dictionary(dictionary, common.debug)?;
    let layout = common.layout();
    println!("Words for: {layout}");

    let discovery = Solver::new(common.config()).discover(&layout, &trie);
    let words = if all { &discovery.found } else { &discovery.kept };

    for word in words.iter().sorted_by(|a, b| {
        b.coverage_count()
            .cmp(&a.coverage_count())
            .then_with(|| a.text().cmp(b.text()))
    }) {
        if common.debug {
            println!("{:<16} {}", word.text(), describe_walk(word, &discovery.letters));
        } else {
            println!("{}", word.text());
        }
    }

    println!(
        "{} of {} words listed ({} walks explored)",
        words.len(),
        discovery.found.len(),
        discovery.walks
    );
    Ok(())
}

/// Formats a word's walk as `side:position` keys.
pub(crate) fn describe_walk(word: &Word, letters: &LetterGraph) -> String {
    word.keys(letters).map(|key| key.to_string()).join(" ")
}

/// Prints the best solutions, shortest first.
pub(crate) fn print_solutions(outcome: &Outcome, debug: bool) {
    if outcome.solutions.is_empty() {
        println!("No solution found");
        return;
    }

    for (rank, chain) in outcome.top().enumerate() {
        let words = chain.iter().map(|w| w.text()).join(" - ");
        println!("{:>3}. {words} ({} words)", rank + 1, chain.len());

        if debug {
            for word in &chain {
                println!("       {:<16} {}", word.text(), describe_walk(word, &outcome.letters));
            }
        }
    }
}

/// Helper function to print a single statistic line in a formatted table row.
///
/// # Arguments
/// * `label` - The description of the statistic.
/// * `value` - The value of the statistic, implementing `std::fmt::Display`.
pub(crate) fn stat_line(label: &str, value: impl std::fmt::Display) {
    println!("|  {label:<28} {value:>18}  |");
}

/// Helper function to print a statistic line that includes a rate (value/second).
///
/// # Arguments
/// * `label` - The description of the statistic.
/// * `value` - The raw count for the statistic.
/// * `elapsed` - The elapsed time in seconds, used to calculate the rate.
pub(crate) fn stat_line_with_rate(label: &str, value: usize, elapsed: f64) {
    let rate = if elapsed > 0.0 {
        value as f64 / elapsed
    } else {
        0.0
    };
    println!("|  {label:<20} {value:>12} ({rate:>9.0}/sec)  |");
}

/// Prints a summary of puzzle and search statistics.
///
/// # Arguments
/// * `parse_time` - Duration spent reading the dictionary and building the trie.
/// * `elapsed` - Duration spent by the solver.
/// * `dictionary_words` - Number of distinct words in the dictionary.
/// * `s` - `SolveStats` collected by the solver.
/// * `allocated` - Allocated memory in MiB.
/// * `resident` - Resident memory in MiB.
pub(crate) fn print_stats(
    parse_time: Duration,
    elapsed: Duration,
    dictionary_words: usize,
    s: &SolveStats,
    allocated: f64,
    resident: f64,
) {
    let elapsed_secs = elapsed.as_secs_f64();

    println!("\n=======================[ Puzzle Statistics ]=========================");
    stat_line("Dictionary load time (s)", format!("{:.3}", parse_time.as_secs_f64()));
    stat_line("Dictionary words", dictionary_words);
    stat_line("Letter nodes", s.letter_nodes);
    stat_line("Letter edges", s.letter_edges);

    println!("========================[ Search Statistics ]========================");
    stat_line_with_rate("Walks", s.walks, elapsed_secs);
    stat_line("Words found", s.words_found);
    stat_line("Words after filtering", s.words_kept);
    stat_line("Word graph edges", s.word_edges);
    stat_line_with_rate("Chains", s.chains, elapsed_secs);
    stat_line_with_rate("Pruned", s.pruned, elapsed_secs);
    stat_line("Solutions", s.solutions);
    stat_line("Memory usage (MiB)", format!("{allocated:.2}"));
    stat_line("Resident memory (MiB)", format!("{resident:.2}"));
    stat_line("CPU time (s)", format!("{elapsed_secs:.3}"));
    println!("=====================================================================");
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_definition() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_parse_solve_with_sides() {
        let cli = Cli::try_parse_from([
            "letter-boxed",
            "solve",
            "--dictionary",
            "words.txt",
            "--sides",
            "abc,def,ghi,jkl",
            "-n",
            "5",
        ])
        .unwrap();

        match cli.command {
            Some(Commands::Solve { dictionary, common }) => {
                assert_eq!(dictionary, PathBuf::from("words.txt"));
                assert_eq!(common.top, 5);
                assert_eq!(common.layout().letter_count(), 12);
                assert_eq!(common.config().max_chain_len, SolverConfig::default().max_chain_len);
            }
            other => panic!("unexpected command: {other:?}"),
        }
    }

    #[test]
    fn test_parse_rejects_bad_sides() {
        let result =
            Cli::try_parse_from(["letter-boxed", "solve", "--dictionary", "w", "--sides", "a1c"]);
        assert!(result.is_err());
    }

    #[test]
    fn test_default_layout() {
        let common = CommonOptions::default();
        assert_eq!(common.layout(), Layout::from(EXAMPLE_LAYOUT));
        assert!(common.stats);
    }

    #[test]
    fn test_missing_dictionary() {
        let result = load_dictionary(Path::new("/no/such/words.txt"), false);
        assert!(result.is_err());
    }
}
