use std::collections::HashMap;

use crate::{ast::ast::Expr, errors::errors::Error, lexer::tokens::TokenKind};

use super::{expr::*, parser::Parser};

/// Precedence of the binary operators. Higher binds tighter.
#[derive(PartialEq, Eq, PartialOrd, Ord, Clone, Copy, Debug)]
pub enum BindingPower {
    Default = 0,
    Relational = 10,
    Additive = 20,
    Multiplicative = 40,
    Power = 60,
}

impl BindingPower {
    pub fn value(self) -> u32 {
        self as u32
    }
}

pub type NUDHandler = fn(&mut Parser) -> Result<Expr, Error>;

pub fn create_token_lookups(parser: &mut Parser) {
    // Relational
    parser.binop(TokenKind::Less, BindingPower::Relational);
    parser.binop(TokenKind::LessEquals, BindingPower::Relational);
    parser.binop(TokenKind::Greater, BindingPower::Relational);
    parser.binop(TokenKind::GreaterEquals, BindingPower::Relational);
    parser.binop(TokenKind::Equals, BindingPower::Relational);
    parser.binop(TokenKind::NotEquals, BindingPower::Relational);

    // Additive and multiplicative
    parser.binop(TokenKind::Plus, BindingPower::Additive);
    parser.binop(TokenKind::Dash, BindingPower::Additive);
    parser.binop(TokenKind::Star, BindingPower::Multiplicative);
    parser.binop(TokenKind::Slash, BindingPower::Multiplicative);
    parser.binop(TokenKind::Percent, BindingPower::Multiplicative);

    parser.binop(TokenKind::Caret, BindingPower::Power);

    // Literals and symbols
    parser.nud(TokenKind::Integer, parse_number_expr);
    parser.nud(TokenKind::Double, parse_number_expr);
    parser.nud(TokenKind::Bool, parse_bool_expr);
    parser.nud(TokenKind::Identifier, parse_identifier_expr);
    parser.nud(TokenKind::Dash, parse_unary_expr);
    parser.nud(TokenKind::OpenParen, parse_grouping_expr);

    // Control flow
    parser.nud(TokenKind::OpenCurly, parse_block_expr);
    parser.nud(TokenKind::If, parse_if_expr);
    parser.nud(TokenKind::While, parse_while_expr);
    parser.nud(TokenKind::Print, parse_print_expr);
}

// Lookup tables inside parser struct, so it's easier
pub type NUDLookup = HashMap<TokenKind, NUDHandler>;
pub type BPLookup = HashMap<TokenKind, BindingPower>;
