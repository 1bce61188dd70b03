//! Unit tests for the lexer module.
//!
//! This module contains tests for tokenization including:
//! - Keywords, type names and identifiers
//! - Integer, double and boolean literals
//! - Operators and punctuation
//! - Line and column tracking
//! - Characters outside the grammar

use super::{
    lexer::{tokenize, Lexer},
    tokens::{Literal, TokenKind},
};

#[test]
fn test_tokenize_keywords() {
    let tokens = tokenize("if then else print while int double bool", Some("test.kirk".to_string()));

    assert_eq!(tokens[0].kind, TokenKind::If);
    assert_eq!(tokens[1].kind, TokenKind::Then);
    assert_eq!(tokens[2].kind, TokenKind::Else);
    assert_eq!(tokens[3].kind, TokenKind::Print);
    assert_eq!(tokens[4].kind, TokenKind::While);
    assert_eq!(tokens[5].kind, TokenKind::IntType);
    assert_eq!(tokens[6].kind, TokenKind::DoubleType);
    assert_eq!(tokens[7].kind, TokenKind::BoolType);
    assert_eq!(tokens[8].kind, TokenKind::EOF);
}

#[test]
fn test_tokenize_identifiers() {
    let tokens = tokenize("foo bar baz_123 CamelCase iffy", None);

    assert_eq!(tokens[0].kind, TokenKind::Identifier);
    assert_eq!(tokens[0].value, "foo");
    assert_eq!(tokens[1].value, "bar");
    assert_eq!(tokens[2].value, "baz_123");
    assert_eq!(tokens[3].value, "CamelCase");
    // Keywords only match exact spellings
    assert_eq!(tokens[4].kind, TokenKind::Identifier);
    assert_eq!(tokens[4].value, "iffy");
    assert_eq!(tokens[5].kind, TokenKind::EOF);
}

#[test]
fn test_tokenize_integer_and_double_literals() {
    let tokens = tokenize("42 2.75 0 100.5 .5", None);

    assert_eq!(tokens[0].kind, TokenKind::Integer);
    assert_eq!(tokens[0].literal, Some(Literal::Int(42)));
    assert_eq!(tokens[1].kind, TokenKind::Double);
    assert_eq!(tokens[1].literal, Some(Literal::Double(2.75)));
    assert_eq!(tokens[2].kind, TokenKind::Integer);
    assert_eq!(tokens[2].literal, Some(Literal::Int(0)));
    assert_eq!(tokens[3].literal, Some(Literal::Double(100.5)));
    assert_eq!(tokens[4].kind, TokenKind::Double);
    assert_eq!(tokens[4].literal, Some(Literal::Double(0.5)));
}

#[test]
fn test_trailing_dot_is_still_a_double() {
    let tokens = tokenize("5.", None);

    assert_eq!(tokens[0].kind, TokenKind::Double);
    assert_eq!(tokens[0].literal, Some(Literal::Double(5.0)));
}

#[test]
fn test_malformed_double_takes_longest_prefix() {
    let tokens = tokenize("1.2.3 .", None);

    assert_eq!(tokens[0].kind, TokenKind::Double);
    assert_eq!(tokens[0].value, "1.2.3");
    assert_eq!(tokens[0].literal, Some(Literal::Double(1.2)));
    assert_eq!(tokens[1].kind, TokenKind::Double);
    assert_eq!(tokens[1].literal, Some(Literal::Double(0.0)));
}

#[test]
fn test_integer_overflow_wraps() {
    let tokens = tokenize("9223372036854775808", None);

    assert_eq!(tokens[0].kind, TokenKind::Integer);
    assert_eq!(tokens[0].literal, Some(Literal::Int(i64::MIN)));
}

#[test]
fn test_tokenize_booleans() {
    let tokens = tokenize("true false", None);

    assert_eq!(tokens[0].kind, TokenKind::Bool);
    assert_eq!(tokens[0].literal, Some(Literal::Bool(true)));
    assert_eq!(tokens[1].kind, TokenKind::Bool);
    assert_eq!(tokens[1].literal, Some(Literal::Bool(false)));
}

#[test]
fn test_tokenize_operators() {
    let tokens = tokenize("+ - * / % ^ == != < > <= >= =", None);

    assert_eq!(tokens[0].kind, TokenKind::Plus);
    assert_eq!(tokens[1].kind, TokenKind::Dash);
    assert_eq!(tokens[2].kind, TokenKind::Star);
    assert_eq!(tokens[3].kind, TokenKind::Slash);
    assert_eq!(tokens[4].kind, TokenKind::Percent);
    assert_eq!(tokens[5].kind, TokenKind::Caret);
    assert_eq!(tokens[6].kind, TokenKind::Equals);
    assert_eq!(tokens[7].kind, TokenKind::NotEquals);
    assert_eq!(tokens[8].kind, TokenKind::Less);
    assert_eq!(tokens[9].kind, TokenKind::Greater);
    assert_eq!(tokens[10].kind, TokenKind::LessEquals);
    assert_eq!(tokens[11].kind, TokenKind::GreaterEquals);
    assert_eq!(tokens[12].kind, TokenKind::Assignment);
    assert_eq!(tokens[13].kind, TokenKind::EOF);
}

#[test]
fn test_two_character_operators_without_spaces() {
    let tokens = tokenize("a<=b==c", None);

    assert_eq!(tokens[1].kind, TokenKind::LessEquals);
    assert_eq!(tokens[3].kind, TokenKind::Equals);
    assert_eq!(tokens.len(), 6);
}

#[test]
fn test_tokenize_punctuation() {
    let tokens = tokenize("( ) { } ; :", None);

    assert_eq!(tokens[0].kind, TokenKind::OpenParen);
    assert_eq!(tokens[1].kind, TokenKind::CloseParen);
    assert_eq!(tokens[2].kind, TokenKind::OpenCurly);
    assert_eq!(tokens[3].kind, TokenKind::CloseCurly);
    assert_eq!(tokens[4].kind, TokenKind::Semicolon);
    assert_eq!(tokens[5].kind, TokenKind::Colon);
    assert_eq!(tokens[6].kind, TokenKind::EOF);
}

#[test]
fn test_unknown_characters_are_returned_verbatim() {
    let tokens = tokenize("x @ ! _y", None);

    assert_eq!(tokens[0].kind, TokenKind::Identifier);
    assert_eq!(tokens[1].kind, TokenKind::Unknown);
    assert_eq!(tokens[1].value, "@");
    assert_eq!(tokens[2].kind, TokenKind::Unknown);
    assert_eq!(tokens[2].value, "!");
    assert_eq!(tokens[3].kind, TokenKind::Unknown);
    assert_eq!(tokens[3].value, "_");
    assert_eq!(tokens[4].kind, TokenKind::Identifier);
    assert_eq!(tokens[4].value, "y");
}

#[test]
fn test_comments_are_skipped() {
    let tokens = tokenize("x # the answer\n42", None);

    assert_eq!(tokens[0].kind, TokenKind::Identifier);
    assert_eq!(tokens[1].kind, TokenKind::Integer);
    assert_eq!(tokens[2].kind, TokenKind::EOF);
}

#[test]
fn test_line_and_column_tracking() {
    let tokens = tokenize("x: int = 5;\n  print(x)", Some("test.kirk".to_string()));

    assert_eq!(tokens[0].span.start.line, 1);
    assert_eq!(tokens[0].span.start.column, 1);
    assert_eq!(tokens[2].value, "int");
    assert_eq!(tokens[2].span.start.column, 4);
    assert_eq!(tokens[2].span.end.column, 7);

    let print = &tokens[6];
    assert_eq!(print.kind, TokenKind::Print);
    assert_eq!(print.span.start.line, 2);
    assert_eq!(print.span.start.column, 3);
    assert_eq!(*print.span.start.file, "test.kirk");
}

#[test]
fn test_next_token_repeats_eof() {
    let mut lexer = Lexer::new(String::from("  "), None);

    assert_eq!(lexer.next_token().kind, TokenKind::EOF);
    assert_eq!(lexer.next_token().kind, TokenKind::EOF);
}

#[test]
fn test_tokenize_empty_source() {
    let tokens = tokenize("", None);

    assert_eq!(tokens.len(), 1);
    assert_eq!(tokens[0].kind, TokenKind::EOF);
}

#[test]
fn test_tokenize_program() {
    let tokens = tokenize("x: int = 5; print(x + 2.5)", None);
    let kinds = tokens.iter().map(|token| token.kind).collect::<Vec<TokenKind>>();

    assert_eq!(
        kinds,
        vec![
            TokenKind::Identifier,
            TokenKind::Colon,
            TokenKind::IntType,
            TokenKind::Assignment,
            TokenKind::Integer,
            TokenKind::Semicolon,
            TokenKind::Print,
            TokenKind::OpenParen,
            TokenKind::Identifier,
            TokenKind::Plus,
            TokenKind::Double,
            TokenKind::CloseParen,
            TokenKind::EOF,
        ]
    );
}
