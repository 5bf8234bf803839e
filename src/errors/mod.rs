//! Error types for the analyzer's input and output glue.
//!
//! Lexically invalid input is not an error here: the scanner tallies it.
//! This module covers the failures around a scan:
//!
//! - Reading a source file or stdin
//! - Reading and parsing a report template
//! - Error names and suggestions for the command-line front end

pub mod errors;

#[cfg(test)]
mod tests;
