//! Type annotation parsing.
//!
//! Only the three primitive type keywords can appear after the `:` of a
//! declaration. They are registered in a lookup table like the prefix
//! expression handlers are.

use std::collections::HashMap;

use crate::{
    ast::types::Type,
    errors::errors::{Error, ErrorImpl},
    lexer::tokens::TokenKind,
};

use super::parser::Parser;

/// Type alias for type null denotation handler functions.
pub type TypeNUDHandler = fn(&mut Parser) -> Result<Type, Error>;

/// Type alias for type NUD lookup table.
pub type TypeNUDLookup = HashMap<TokenKind, TypeNUDHandler>;

/// Initializes the type parsing lookup table.
pub fn create_token_type_lookups(parser: &mut Parser) {
    parser.type_nud(TokenKind::IntType, parse_primitive_type);
    parser.type_nud(TokenKind::DoubleType, parse_primitive_type);
    parser.type_nud(TokenKind::BoolType, parse_primitive_type);
}

pub fn parse_type(parser: &mut Parser) -> Result<Type, Error> {
    let kind = parser.current_token_kind();

    match parser.get_type_nud_lookup().get(&kind).copied() {
        Some(handler) => handler(parser),
        None => Err(parser.unexpected("expected a type ('int', 'double' or 'bool')")),
    }
}

pub fn parse_primitive_type(parser: &mut Parser) -> Result<Type, Error> {
    let token = parser.advance().clone();

    match token.kind {
        TokenKind::IntType => Ok(Type::Int),
        TokenKind::DoubleType => Ok(Type::Double),
        TokenKind::BoolType => Ok(Type::Bool),
        _ => Err(Error::new(
            ErrorImpl::UnexpectedToken { token: token.value },
            token.span.start,
        )),
    }
}
