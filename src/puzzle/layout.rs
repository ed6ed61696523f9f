#![warn(clippy::all, clippy::pedantic, clippy::nursery, clippy::cargo)]
//! The box layout: an ordered list of sides, each holding an ordered list of letters.
//!
//! Letters on the same side can never follow one another inside a word, which is
//! the only rule the layout itself encodes. Everything else is derived from it by
//! the letter graph builder.

use std::fmt::Display;
use std::str::FromStr;

/// The puzzle used when no sides are supplied on the command line.
pub const EXAMPLE_LAYOUT: [[char; 3]; 4] = [
    ['r', 'c', 'i'],
    ['n', 'l', 'a'],
    ['o', 'e', 't'],
    ['p', 's', 'u'],
];

/// An ordered collection of sides, each an ordered collection of lowercase letters.
///
/// Letters are not required to be unique: the same letter may appear on several
/// sides, and every occurrence becomes its own node in the letter graph.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Layout(Vec<Vec<char>>);

impl Layout {
    /// Creates a layout from raw sides. Letters are lowercased, nothing else is checked.
    #[must_use]
    pub fn new(sides: Vec<Vec<char>>) -> Self {
        Self(
            sides
                .into_iter()
                .map(|side| side.into_iter().map(|c| c.to_ascii_lowercase()).collect())
                .collect(),
        )
    }

    /// The sides of the box, in order.
    #[must_use]
    pub fn sides(&self) -> &[Vec<char>] {
        &self.0
    }

    /// Total number of letter occurrences, i.e. the number of letter nodes the
    /// layout yields and the coverage a solution must reach.
    #[must_use]
    pub fn letter_count(&self) -> usize {
        self.0.iter().map(Vec::len).sum()
    }

    /// A layout with no sides, or with a side that holds no letters. Solving it is
    /// trivial: no words, no solutions.
    #[must_use]
    pub fn is_degenerate(&self) -> bool {
        self.0.is_empty() || self.0.iter().any(Vec::is_empty)
    }
}

impl From<Vec<Vec<char>>> for Layout {
    fn from(sides: Vec<Vec<char>>) -> Self {
        Self::new(sides)
    }
}

impl<const S: usize, const N: usize> From<[[char; N]; S]> for Layout {
    fn from(sides: [[char; N]; S]) -> Self {
        Self::new(sides.iter().map(|side| side.to_vec()).collect())
    }
}

impl From<Layout> for Vec<Vec<char>> {
    fn from(layout: Layout) -> Self {
        layout.0
    }
}

impl Display for Layout {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        for (i, side) in self.0.iter().enumerate() {
            if i > 0 {
                write!(f, " | ")?;
            }
            for c in side {
                write!(f, "{c}")?;
            }
        }
        Ok(())
    }
}

/// Error produced when a textual layout contains something other than ASCII letters.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LayoutError {
    /// The offending side, as written.
    pub side: String,
}

impl Display for LayoutError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "invalid side '{}': sides may only contain ASCII letters",
            self.side
        )
    }
}

impl std::error::Error for LayoutError {}

impl FromStr for Layout {
    type Err = LayoutError;

    /// Parses the compact form `"abc,def,ghi,jkl"`. Whitespace is ignored and
    /// letters are lowercased. A blank string has no sides; an empty field between
    /// commas is kept as an empty side.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s.trim().is_empty() {
            return Ok(Self::default());
        }

        let mut sides = Vec::new();

        for raw in s.split(',') {
            let side: String = raw.chars().filter(|c| !c.is_whitespace()).collect();
            if !side.chars().all(|c| c.is_ascii_alphabetic()) {
                return Err(LayoutError {
                    side: raw.trim().to_string(),
                });
            }
            sides.push(side.chars().collect());
        }

        Ok(Self::new(sides))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_sides() {
        let layout: Layout = "abc, DEF ,ghi,jkl".parse().unwrap();
        assert_eq!(layout.sides().len(), 4);
        assert_eq!(layout.sides()[1], vec!['d', 'e', 'f']);
        assert_eq!(layout.letter_count(), 12);
    }

    #[test]
    fn test_parse_rejects_non_letters() {
        let err = "abc,d3f".parse::<Layout>().unwrap_err();
        assert_eq!(err.side, "d3f");
    }

    #[test]
    fn test_parse_empty_is_empty_layout() {
        let layout: Layout = "".parse().unwrap();
        assert!(layout.is_degenerate());
        assert!(layout.sides().is_empty());
    }

    #[test]
    fn test_parse_keeps_empty_sides() {
        let layout: Layout = "ab,,cd".parse().unwrap();
        assert_eq!(layout.sides().len(), 3);
        assert!(layout.sides()[1].is_empty());
        assert!(layout.is_degenerate());

        let layout: Layout = "ab,cd,".parse().unwrap();
        assert_eq!(layout.sides().len(), 3);
        assert!(layout.is_degenerate());
    }

    #[test]
    fn test_display_round_trip_shape() {
        let layout = Layout::from([['a', 'b'], ['c', 'd']]);
        assert_eq!(layout.to_string(), "ab | cd");
    }

    #[test]
    fn test_example_layout() {
        let layout = Layout::from(EXAMPLE_LAYOUT);
        assert_eq!(layout.letter_count(), 12);
        assert!(!layout.is_degenerate());
    }
}
