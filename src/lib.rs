#![deny(missing_docs)]
//! This crate solves Letter Boxed puzzles: it finds every dictionary word that can be
//! traced around the box, then searches for the shortest chains of those words that
//! use every letter.

/// The `puzzle` module implements the Letter Boxed solver, from the box layout and
/// the dictionary through to ranked word chains.
pub mod puzzle;
