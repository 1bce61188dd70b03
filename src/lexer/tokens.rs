use lazy_static::lazy_static;
use std::{collections::HashMap, fmt::Display};

use crate::Span;

lazy_static! {
    pub static ref RESERVED_LOOKUP: HashMap<&'static str, TokenKind> = {
        let mut map = HashMap::new();
        map.insert("if", TokenKind::If);
        map.insert("then", TokenKind::Then);
        map.insert("else", TokenKind::Else);
        map.insert("print", TokenKind::Print);
        map.insert("while", TokenKind::While);
        map.insert("int", TokenKind::IntType);
        map.insert("double", TokenKind::DoubleType);
        map.insert("bool", TokenKind::BoolType);
        map.insert("true", TokenKind::Bool);
        map.insert("false", TokenKind::Bool);
        map
    };
}

#[derive(Debug, PartialEq, Eq, Clone, Copy, Hash)]
pub enum TokenKind {
    EOF,
    Integer,
    Double,
    Bool,
    Identifier,

    OpenCurly,
    CloseCurly,
    OpenParen,
    CloseParen,

    Assignment, // =
    Equals,     // ==
    NotEquals,  // !=

    Less,
    LessEquals,
    Greater,
    GreaterEquals,

    Semicolon,
    Colon,

    Plus,
    Dash,
    Slash,
    Star,
    Percent,
    Caret,

    // Any character the grammar has no use for
    Unknown,

    // Reserved
    If,
    Then,
    Else,
    Print,
    While,
    IntType,
    DoubleType,
    BoolType,
}

impl Display for TokenKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:?}", self)
    }
}

/// The exact value carried by a literal token.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Literal {
    Int(i64),
    Double(f64),
    Bool(bool),
}

#[derive(Debug, Clone)]
pub struct Token {
    pub kind: TokenKind,
    pub value: String,
    pub literal: Option<Literal>,
    pub span: Span,
}

impl Display for Token {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Token {{\nkind: {},\nvalue: {}}}", self.kind, self.value)
    }
}

impl Token {
    pub fn is_one_of_many(&self, kinds: &[TokenKind]) -> bool {
        kinds.contains(&self.kind)
    }

    pub fn debug(&self) {
        if self.is_one_of_many(&[
            TokenKind::Identifier,
            TokenKind::Integer,
            TokenKind::Double,
            TokenKind::Bool,
            TokenKind::Unknown,
        ]) {
            println!("{} ({})", self.kind, self.value);
        } else {
            println!("{} ()", self.kind);
        }
    }
}
