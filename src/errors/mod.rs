//! Error types and error handling for the compiler.
//!
//! This module defines the error types used throughout the compilation
//! process. It includes:
//!
//! - Error structures with source position information
//! - The error categories reported to the user (syntax, reference, arithmetic)
//! - Nearest-match suggestions for unresolved names
//!
//! Every error is fatal: the pipeline stops at the first one and hands it
//! back to the caller.

pub mod errors;
pub mod suggestions;
