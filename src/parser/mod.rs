//! Parser module for building an Abstract Syntax Tree (AST).
//!
//! This module turns the token stream into a single top-level
//! `BlockExpr`. Everything in the language is an expression:
//!
//! - Prefix forms (literals, variables, declarations, `if`, `while`,
//!   `print`, blocks) are dispatched through a NUD lookup table
//! - Binary operators are combined by precedence climbing over a
//!   binding power table, with `^` binding to the right
//! - Type annotations have their own small lookup table
//!
//! The parser never recovers: the first problem is returned as a
//! `SyntaxError` located at the offending token.

pub mod expr;
pub mod lookups;
pub mod parser;
pub mod types;

#[cfg(test)]
mod tests;
