//! # Letter Boxed
//!
//! `letter-boxed` is a command-line solver for Letter Boxed puzzles. A box has
//! letters on each of its sides; a word is playable when consecutive letters sit on
//! different sides, and a chain of words is a solution when each word starts on the
//! letter the previous one ended on and every letter in the box is used.
//!
//! The solver:
//! 1.  Builds a graph joining every letter to every letter on another side.
//! 2.  Walks that graph guided by a trie of the dictionary to find every playable word.
//! 3.  Drops words whose letters are a subset of another word's letters.
//! 4.  Links the remaining words end-to-start and searches for the shortest chains
//!     that cover the box.
//!
//! ## Usage
//!
//! ```sh
//! letter-boxed [OPTIONS] [DICTIONARY] [SUBCOMMAND]
//! ```
//!
//! ### Subcommands
//!
//! 1.  **`solve`**: Find the best chains.
//!     ```sh
//!     letter-boxed solve --dictionary words.txt --sides "rci,nla,oet,psu" -n 5
//!     ```
//!
//! 2.  **`words`**: List the playable words (dominated words too with `--all`).
//!     ```sh
//!     letter-boxed words --dictionary words.txt --all
//!     ```
//!
//! 3.  **`completions`**: Print a shell completion script.
//!     ```sh
//!     letter-boxed completions bash
//!     ```
//!
//! A dictionary path given without a subcommand runs `solve`.
//!
//! ### Common Options
//!
//! -   `-d, --debug`: Print timings, graph sizes and the node walk of each word (default: `false`).
//! -   `-s, --stats <BOOL>`: Print the statistics table (default: `true`).
//! -   `--sides <SIDES>`: The box as comma-separated sides (default: the built-in puzzle).
//! -   `-n, --top <N>`: Number of solutions to print (default: `3`).
//! -   `--max-chain <N>`: Abort if a chain grows past this many words (default: `12`).

use crate::command_line::cli::{Cli, Commands, list_words, solve_and_report};
use clap::{CommandFactory, Parser};

mod command_line;

/// Global allocator using `tikv-jemallocator` for potentially better performance
/// and memory usage tracking.
#[global_allocator]
static GLOBAL: tikv_jemallocator::Jemalloc = tikv_jemallocator::Jemalloc;

/// Main entry point.
///
/// Parses command-line arguments, dispatches to the appropriate command handler,
/// and exits with status 1 on any error.
fn main() {
    let cli = Cli::parse();

    let result = match cli.command {
        Some(Commands::Solve { dictionary, common }) => solve_and_report(&dictionary, &common),
        Some(Commands::Words {
            dictionary,
            all,
            common,
        }) => list_words(&dictionary, all, &common),
        Some(Commands::Completions { shell }) => {
            let mut cmd = Cli::command();
            let name = cmd.get_name().to_string();
            clap_complete::generate(shell, &mut cmd, name, &mut std::io::stdout());
            Ok(())
        }
        None => match cli.path {
            Some(path) => solve_and_report(&path, &cli.common),
            None => Err("No command provided. Use --help for more information.".to_string()),
        },
    };

    if let Err(e) = result {
        eprintln!("{e}");
        std::process::exit(1);
    }
}
