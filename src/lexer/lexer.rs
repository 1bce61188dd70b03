use std::rc::Rc;

use lazy_static::lazy_static;
use regex::Regex;

use crate::{Position, Span, MK_DEFAULT_HANDLER, MK_TOKEN};

use super::tokens::{Literal, Token, TokenKind, RESERVED_LOOKUP};

/// Builds the token for a match, or `None` when the match is skipped.
pub type RegexHandler = fn(&Lexer, &str) -> Option<Token>;

pub struct RegexPattern {
    regex: Regex,
    handler: RegexHandler,
}

fn pattern(source: &str, handler: RegexHandler) -> RegexPattern {
    RegexPattern {
        regex: Regex::new(source).expect("token patterns are valid regular expressions"),
        handler,
    }
}

lazy_static! {
    // Anchored, tried in order: two-character operators come before their
    // one-character prefixes.
    static ref TOKEN_PATTERNS: Vec<RegexPattern> = vec![
        pattern("^[A-Za-z][A-Za-z0-9_]*", symbol_handler),
        pattern("^[0-9.]+", number_handler),
        pattern("^\\s+", skip_handler),
        pattern("^#[^\\n]*", skip_handler),
        pattern("^==", MK_DEFAULT_HANDLER!(TokenKind::Equals)),
        pattern("^!=", MK_DEFAULT_HANDLER!(TokenKind::NotEquals)),
        pattern("^<=", MK_DEFAULT_HANDLER!(TokenKind::LessEquals)),
        pattern("^>=", MK_DEFAULT_HANDLER!(TokenKind::GreaterEquals)),
        pattern("^=", MK_DEFAULT_HANDLER!(TokenKind::Assignment)),
        pattern("^<", MK_DEFAULT_HANDLER!(TokenKind::Less)),
        pattern("^>", MK_DEFAULT_HANDLER!(TokenKind::Greater)),
        pattern("^\\+", MK_DEFAULT_HANDLER!(TokenKind::Plus)),
        pattern("^-", MK_DEFAULT_HANDLER!(TokenKind::Dash)),
        pattern("^\\*", MK_DEFAULT_HANDLER!(TokenKind::Star)),
        pattern("^/", MK_DEFAULT_HANDLER!(TokenKind::Slash)),
        pattern("^%", MK_DEFAULT_HANDLER!(TokenKind::Percent)),
        pattern("^\\^", MK_DEFAULT_HANDLER!(TokenKind::Caret)),
        pattern("^;", MK_DEFAULT_HANDLER!(TokenKind::Semicolon)),
        pattern("^:", MK_DEFAULT_HANDLER!(TokenKind::Colon)),
        pattern("^\\(", MK_DEFAULT_HANDLER!(TokenKind::OpenParen)),
        pattern("^\\)", MK_DEFAULT_HANDLER!(TokenKind::CloseParen)),
        pattern("^\\{", MK_DEFAULT_HANDLER!(TokenKind::OpenCurly)),
        pattern("^\\}", MK_DEFAULT_HANDLER!(TokenKind::CloseCurly)),
    ];
}

/// Streaming scanner over one source string.
///
/// Tracks the byte offset together with the 1-based line and column of the
/// next unread character.
pub struct Lexer {
    source: String,
    pos: usize,
    line: u32,
    column: u32,
    file: Rc<String>,
}

impl Lexer {
    pub fn new(source: String, file: Option<String>) -> Lexer {
        let file_name = if let Some(file) = file {
            Rc::new(file)
        } else {
            Rc::new(String::from("shell"))
        };

        Lexer {
            source,
            pos: 0,
            line: 1,
            column: 1,
            file: file_name,
        }
    }

    pub fn get_position(&self) -> Position {
        Position::new(self.line, self.column, Rc::clone(&self.file))
    }

    pub fn remainder(&self) -> &str {
        &self.source[self.pos..]
    }

    pub fn at_eof(&self) -> bool {
        self.pos >= self.source.len()
    }

    /// Creates a token of `kind` that starts at the current position and
    /// spans `matched`.
    pub fn make_token(&self, kind: TokenKind, matched: &str, literal: Option<Literal>) -> Token {
        let (line, column) = Self::step_over(self.line, self.column, matched);

        MK_TOKEN!(
            kind,
            String::from(matched),
            literal,
            Span {
                start: self.get_position(),
                end: Position::new(line, column, Rc::clone(&self.file)),
            }
        )
    }

    fn step_over(mut line: u32, mut column: u32, text: &str) -> (u32, u32) {
        for c in text.chars() {
            if c == '\n' {
                line += 1;
                column = 1;
            } else {
                column += 1;
            }
        }

        (line, column)
    }

    fn advance(&mut self, text: &str) {
        let (line, column) = Self::step_over(self.line, self.column, text);
        self.line = line;
        self.column = column;
        self.pos += text.len();
    }

    /// Returns the next token. Once the input is exhausted every call
    /// returns an `EOF` token.
    pub fn next_token(&mut self) -> Token {
        loop {
            if self.at_eof() {
                return self.make_token(TokenKind::EOF, "", None);
            }

            let matched = TOKEN_PATTERNS.iter().find_map(|pattern| {
                pattern
                    .regex
                    .find(self.remainder())
                    .map(|found| (pattern.handler, String::from(found.as_str())))
            });

            let (handler, text) = match matched {
                Some(matched) => matched,
                None => {
                    // Not part of the grammar: hand it over verbatim
                    let unknown = self.remainder().chars().next().map(String::from).unwrap_or_default();
                    let token = self.make_token(TokenKind::Unknown, &unknown, None);
                    self.advance(&unknown);
                    return token;
                }
            };

            let token = handler(self, &text);
            self.advance(&text);

            if let Some(token) = token {
                return token;
            }
        }
    }
}

fn skip_handler(_lexer: &Lexer, _matched: &str) -> Option<Token> {
    None
}

fn symbol_handler(lexer: &Lexer, matched: &str) -> Option<Token> {
    let token = match RESERVED_LOOKUP.get(matched) {
        Some(TokenKind::Bool) => {
            lexer.make_token(TokenKind::Bool, matched, Some(Literal::Bool(matched == "true")))
        }
        Some(kind) => lexer.make_token(*kind, matched, None),
        None => lexer.make_token(TokenKind::Identifier, matched, None),
    };

    Some(token)
}

fn number_handler(lexer: &Lexer, matched: &str) -> Option<Token> {
    let token = if matched.contains('.') {
        lexer.make_token(
            TokenKind::Double,
            matched,
            Some(Literal::Double(parse_double_prefix(matched))),
        )
    } else {
        lexer.make_token(
            TokenKind::Integer,
            matched,
            Some(Literal::Int(parse_integer(matched))),
        )
    };

    Some(token)
}

/// Reads a run of digits, wrapping on overflow.
fn parse_integer(digits: &str) -> i64 {
    digits.bytes().fold(0i64, |value, digit| {
        value
            .wrapping_mul(10)
            .wrapping_add(i64::from(digit - b'0'))
    })
}

/// Parses the longest prefix of `text` that forms a valid double, so
/// `1.2.3` reads as `1.2`. Text with no numeric prefix (`.`) reads as zero.
fn parse_double_prefix(text: &str) -> f64 {
    (1..=text.len())
        .rev()
        .find_map(|end| text[..end].parse::<f64>().ok())
        .unwrap_or(0.0)
}

/// Scans `source` to the end and returns every token, `EOF` included.
#[tracing::instrument(skip_all, fields(source_len = source.len()))]
pub fn tokenize(source: &str, file: Option<String>) -> Vec<Token> {
    let mut lexer = Lexer::new(String::from(source), file);
    let mut tokens = vec![];

    loop {
        let token = lexer.next_token();
        let is_eof = token.kind == TokenKind::EOF;
        tokens.push(token);

        if is_eof {
            break;
        }
    }

    tracing::debug!(token_count = tokens.len(), "tokenized source");
    tokens
}
