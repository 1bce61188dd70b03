//! Parser implementation for building the Abstract Syntax Tree.
//!
//! This module contains the main Parser struct and the `parse` entry
//! point. Prefix forms are looked up in a NUD table; binary operators
//! only carry a binding power and are combined by `parse_binop_rhs`.

use std::{collections::HashMap, rc::Rc};

use crate::{
    ast::expressions::BlockExpr,
    errors::errors::{Error, ErrorImpl},
    lexer::tokens::{Token, TokenKind},
    Position, Span,
};

use super::{
    expr::parse_expr,
    lookups::{create_token_lookups, BPLookup, BindingPower, NUDHandler, NUDLookup},
    types::{create_token_type_lookups, TypeNUDHandler, TypeNUDLookup},
};

/// The main parser structure that maintains parsing state.
///
/// Holds the token stream, the cursor into it and the lookup tables.
/// The stream always ends with an `EOF` token, and the cursor never
/// moves past it.
pub struct Parser {
    /// The list of tokens to parse
    tokens: Vec<Token>,
    /// Current position in the token stream
    pos: usize,
    /// Lookup table for null denotation (prefix) expression handlers
    nud_lookup: NUDLookup,
    /// Lookup table for binary operator binding powers
    binding_power_lookup: BPLookup,
    /// Lookup table for type annotation handlers
    type_nud_lookup: TypeNUDLookup,
}

impl Parser {
    /// Creates a new Parser instance.
    ///
    /// A missing trailing `EOF` token is added, so a hand-built token list
    /// behaves like the output of `tokenize`.
    pub fn new(mut tokens: Vec<Token>, file: Rc<String>) -> Self {
        if tokens.last().map(|token| token.kind) != Some(TokenKind::EOF) {
            let position = tokens
                .last()
                .map(|token| token.span.end.clone())
                .unwrap_or_else(|| Position::new(1, 1, Rc::clone(&file)));

            tokens.push(Token {
                kind: TokenKind::EOF,
                value: String::new(),
                literal: None,
                span: Span {
                    start: position.clone(),
                    end: position,
                },
            });
        }

        Parser {
            tokens,
            pos: 0,
            nud_lookup: HashMap::new(),
            binding_power_lookup: HashMap::new(),
            type_nud_lookup: HashMap::new(),
        }
    }

    /// Returns the current token without advancing.
    pub fn current_token(&self) -> &Token {
        &self.tokens[self.pos]
    }

    /// Returns the kind of the current token.
    pub fn current_token_kind(&self) -> TokenKind {
        self.current_token().kind
    }

    /// Advances to the next token and returns the previous token.
    pub fn advance(&mut self) -> &Token {
        let previous = self.pos;
        if self.pos + 1 < self.tokens.len() {
            self.pos += 1;
        }

        &self.tokens[previous]
    }

    /// Expects a token of the specified kind, failing with `message` when
    /// the current token is anything else.
    pub fn expect_error(&mut self, expected_kind: TokenKind, message: &str) -> Result<Token, Error> {
        if self.current_token_kind() != expected_kind {
            Err(self.unexpected(message))
        } else {
            Ok(self.advance().clone())
        }
    }

    /// Builds a syntax error for the current token.
    pub fn unexpected(&self, message: &str) -> Error {
        let token = self.current_token();

        Error::new(
            ErrorImpl::UnexpectedTokenDetailed {
                token: describe_token(token),
                message: String::from(message),
            },
            token.span.start.clone(),
        )
    }

    /// Checks if there are more tokens to parse.
    pub fn has_tokens(&self) -> bool {
        self.current_token_kind() != TokenKind::EOF
    }

    /// Returns a reference to the NUD (null denotation) lookup table.
    pub fn get_nud_lookup(&self) -> &NUDLookup {
        &self.nud_lookup
    }

    /// Returns a reference to the binding power lookup table.
    pub fn get_bp_lookup(&self) -> &BPLookup {
        &self.binding_power_lookup
    }

    /// Returns a reference to the type NUD lookup table.
    pub fn get_type_nud_lookup(&self) -> &TypeNUDLookup {
        &self.type_nud_lookup
    }

    /// The binding power of the current token when it is a binary
    /// operator, `None` otherwise.
    pub fn current_binding_power(&self) -> Option<BindingPower> {
        self.binding_power_lookup
            .get(&self.current_token_kind())
            .copied()
    }

    /// Registers a binary operator with its binding power.
    pub fn binop(&mut self, kind: TokenKind, binding_power: BindingPower) {
        self.binding_power_lookup.insert(kind, binding_power);
    }

    /// Registers a null denotation (prefix) handler for a token.
    pub fn nud(&mut self, kind: TokenKind, nud_fn: NUDHandler) {
        self.nud_lookup.insert(kind, nud_fn);
    }

    /// Registers a type null denotation handler.
    pub fn type_nud(&mut self, kind: TokenKind, nud_fn: TypeNUDHandler) {
        self.type_nud_lookup.insert(kind, nud_fn);
    }

    /// Returns the current position in the source file.
    pub fn get_position(&self) -> Position {
        self.current_token().span.start.clone()
    }
}

/// How a token is named in diagnostics.
pub fn describe_token(token: &Token) -> String {
    if token.kind == TokenKind::EOF {
        String::from("end of input")
    } else {
        token.value.clone()
    }
}

/// Parses a stream of tokens into an Abstract Syntax Tree.
///
/// The program is a sequence of expressions separated by optional `;`,
/// returned as one `BlockExpr`. Parsing stops at the first error.
#[tracing::instrument(skip_all, fields(file = %file, token_count = tokens.len()))]
pub fn parse(tokens: Vec<Token>, file: Rc<String>) -> Result<BlockExpr, Error> {
    let mut parser = Parser::new(tokens, file);
    create_token_lookups(&mut parser);
    create_token_type_lookups(&mut parser);

    let start = parser.get_position();
    let mut body = vec![];

    while parser.has_tokens() {
        if parser.current_token_kind() == TokenKind::Semicolon {
            parser.advance();
            continue;
        }

        body.push(parse_expr(&mut parser)?);
    }

    tracing::debug!(expressions = body.len(), "parsed program");

    Ok(BlockExpr {
        body,
        span: Span {
            start,
            end: parser.get_position(),
        },
    })
}
