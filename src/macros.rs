//! Utility macros for the compiler.
//!
//! This module defines helper macros used throughout the compiler:
//!
//! - `MK_TOKEN!` - Creates a Token instance
//! - `MK_DEFAULT_HANDLER!` - Creates a default lexer handler for simple tokens
//!
//! These macros reduce boilerplate in the lexer implementation.

/// Creates a Token instance.
///
/// # Arguments
///
/// * `$kind` - The TokenKind
/// * `$value` - The token's source text
/// * `$literal` - The literal value, if any
/// * `$span` - The source span
///
/// # Example
///
/// ```ignore
/// let token = MK_TOKEN!(TokenKind::Integer, "42".to_string(), Some(Literal::Int(42)), span);
/// ```
#[macro_export]
macro_rules! MK_TOKEN {
    ($kind:expr, $value:expr, $literal:expr, $span:expr) => {
        Token {
            kind: $kind,
            value: $value,
            literal: $literal,
            span: $span,
        }
    };
}

/// Creates a default lexer handler for tokens that carry no literal value.
///
/// The generated handler builds a token of the given kind spanning the
/// matched text. The lexer advances past the match afterwards.
///
/// # Example
///
/// ```ignore
/// pattern("^\\+", MK_DEFAULT_HANDLER!(TokenKind::Plus))
/// ```
#[macro_export]
macro_rules! MK_DEFAULT_HANDLER {
    ($kind:expr) => {
        |lexer: &Lexer, matched: &str| Some(lexer.make_token($kind, matched, None))
    };
}
