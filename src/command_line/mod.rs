//! Command-line surface of the solver: argument parsing and report printing.

pub(crate) mod cli;
