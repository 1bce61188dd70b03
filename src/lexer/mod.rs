//! Lexical analysis module for the compiler.
//!
//! This module contains the lexer (tokenizer) that converts source code
//! into a stream of tokens for parsing. It handles:
//!
//! - Tokenization of source code using anchored regex patterns
//! - Recognition of keywords, identifiers, literals, and operators
//! - Line and column tracking for error reporting
//! - Comments and whitespace handling
//!
//! The lexer never fails: characters outside the grammar come back as
//! `Unknown` tokens and are rejected by the parser.

pub mod lexer;
pub mod tokens;

#[cfg(test)]
mod tests;
