//! Lexical analysis module.
//!
//! This module contains the finite-state scanner that splits source text
//! into lexemes and tallies them by category. It handles:
//!
//! - ASCII character classification
//! - The automaton's states and its pure transition function
//! - Keyword lookup and mapping of final states to token categories
//! - Driving the automaton over the input, one character at a time

pub mod chars;
pub mod lexer;
pub mod states;
pub mod tokens;
