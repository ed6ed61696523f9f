#![warn(clippy::all, clippy::pedantic, clippy::nursery, clippy::cargo)]
//! Reading and normalising a plain-text word list.
//!
//! The expected format is one candidate token per line. Lines are trimmed; any
//! token that is not made solely of ASCII letters (apostrophes, hyphens, digits,
//! accented letters) is dropped. Survivors are lowercased, sorted and
//! de-duplicated so the resulting list can be fed straight into a `Trie`.

use itertools::Itertools;
use std::io::{self, BufRead};
use std::path::Path;

/// `true` if `token` is non-empty and matches `^[a-zA-Z]+$`.
#[must_use]
pub fn is_dictionary_token(token: &str) -> bool {
    !token.is_empty() && token.bytes().all(|b| b.is_ascii_alphabetic())
}

/// Parses a word list from any buffered reader.
///
/// # Errors
///
/// Propagates I/O errors from the reader, including invalid UTF-8.
pub fn parse_dictionary<R: BufRead>(reader: R) -> io::Result<Vec<String>> {
    let mut words = Vec::new();

    for line in reader.lines() {
        let line = line?;
        let token = line.trim();
        if is_dictionary_token(token) {
            words.push(token.to_ascii_lowercase());
        }
    }

    Ok(words.into_iter().sorted_unstable().dedup().collect_vec())
}

/// Opens `path` and parses it with `parse_dictionary`.
///
/// # Errors
///
/// Returns `io::Error` if the file cannot be opened or read.
pub fn parse_file(path: &Path) -> io::Result<Vec<String>> {
    let file = std::fs::File::open(path)?;
    parse_dictionary(io::BufReader::new(file))
}
