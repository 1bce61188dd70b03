use crate::{
    ast::{
        ast::{BinaryOperator, Expr, UnaryOperator},
        expressions::{
            AssignmentExpr, BinaryExpr, BlockExpr, BoolExpr, IfExpr, NumberExpr, PrintExpr,
            UnaryExpr, VarDeclExpr, VariableExpr, WhileExpr,
        },
    },
    errors::errors::{Error, ErrorImpl},
    lexer::tokens::{Literal, TokenKind},
    Span,
};

use super::{lookups::BindingPower, parser::Parser, types::parse_type};

/// Parses a full expression: a unary operand followed by any chain of
/// binary operators.
pub fn parse_expr(parser: &mut Parser) -> Result<Expr, Error> {
    let left = parse_unary_operand(parser)?;
    parse_binop_rhs(parser, BindingPower::Default.value(), left)
}

/// Precedence climbing. `min_power` is the weakest operator this call may
/// absorb; anything weaker is left for the caller.
pub fn parse_binop_rhs(parser: &mut Parser, min_power: u32, mut left: Expr) -> Result<Expr, Error> {
    loop {
        let binding_power = match parser.current_binding_power() {
            Some(binding_power) if binding_power.value() >= min_power => binding_power,
            _ => return Ok(left),
        };

        let operator_token = parser.advance().clone();
        let operator = BinaryOperator::from_token_kind(operator_token.kind).ok_or_else(|| {
            Error::new(
                ErrorImpl::UnexpectedToken {
                    token: operator_token.value.clone(),
                },
                operator_token.span.start.clone(),
            )
        })?;

        let mut right = parse_unary_operand(parser)?;

        // Let a tighter operator (or another `^`) take the right operand first
        if let Some(next_power) = parser.current_binding_power() {
            if next_power > binding_power {
                right = parse_binop_rhs(parser, binding_power.value() + 1, right)?;
            } else if next_power == binding_power && operator.is_right_associative() {
                right = parse_binop_rhs(parser, binding_power.value(), right)?;
            }
        }

        left = Expr::Binary(BinaryExpr {
            span: Span {
                start: operator_token.span.start.clone(),
                end: right.get_span().end.clone(),
            },
            operator,
            left: Box::new(left),
            right: Box::new(right),
        });
    }
}

/// Dispatches on the current token through the NUD table.
pub fn parse_unary_operand(parser: &mut Parser) -> Result<Expr, Error> {
    let token_kind = parser.current_token_kind();

    match parser.get_nud_lookup().get(&token_kind).copied() {
        Some(handler) => handler(parser),
        None => Err(parser.unexpected("expected an expression")),
    }
}

pub fn parse_unary_expr(parser: &mut Parser) -> Result<Expr, Error> {
    let operator_token = parser.advance().clone();
    let operand = parse_unary_operand(parser)?;

    Ok(Expr::Unary(UnaryExpr {
        span: Span {
            start: operator_token.span.start,
            end: operand.get_span().end.clone(),
        },
        operator: UnaryOperator::Negate,
        operand: Box::new(operand),
    }))
}

pub fn parse_number_expr(parser: &mut Parser) -> Result<Expr, Error> {
    let token = parser.advance().clone();

    match token.literal {
        Some(Literal::Int(value)) => Ok(Expr::Number(NumberExpr::integer(value, token.span))),
        Some(Literal::Double(value)) => Ok(Expr::Number(NumberExpr::double(value, token.span))),
        _ => Err(Error::new(
            ErrorImpl::UnexpectedToken { token: token.value },
            token.span.start,
        )),
    }
}

pub fn parse_bool_expr(parser: &mut Parser) -> Result<Expr, Error> {
    let token = parser.advance().clone();

    match token.literal {
        Some(Literal::Bool(value)) => Ok(Expr::Bool(BoolExpr {
            value,
            span: token.span,
        })),
        _ => Err(Error::new(
            ErrorImpl::UnexpectedToken { token: token.value },
            token.span.start,
        )),
    }
}

/// `name`, `name = value` or `name: type = init`.
pub fn parse_identifier_expr(parser: &mut Parser) -> Result<Expr, Error> {
    let name_token = parser.advance().clone();

    match parser.current_token_kind() {
        TokenKind::Assignment => {
            parser.advance();
            let value = parse_expr(parser)?;

            Ok(Expr::Assignment(AssignmentExpr {
                span: Span {
                    start: name_token.span.start,
                    end: value.get_span().end.clone(),
                },
                name: name_token.value,
                value: Box::new(value),
            }))
        }
        TokenKind::Colon => {
            parser.advance();
            let declared_type = parse_type(parser)?;
            parser.expect_error(TokenKind::Assignment, "expected '=' after the declared type")?;
            let init = parse_expr(parser)?;

            Ok(Expr::VarDecl(VarDeclExpr {
                span: Span {
                    start: name_token.span.start,
                    end: init.get_span().end.clone(),
                },
                name: name_token.value,
                declared_type,
                init: Box::new(init),
            }))
        }
        _ => Ok(Expr::Variable(VariableExpr {
            name: name_token.value,
            span: name_token.span,
        })),
    }
}

pub fn parse_grouping_expr(parser: &mut Parser) -> Result<Expr, Error> {
    parser.advance();
    let expr = parse_expr(parser)?;
    parser.expect_error(TokenKind::CloseParen, "expected ')'")?;

    Ok(expr)
}

/// `{ e1; e2; ... }`. Separators are optional and may repeat.
pub fn parse_block_expr(parser: &mut Parser) -> Result<Expr, Error> {
    let start = parser.advance().span.start.clone();
    let mut body = vec![];

    loop {
        match parser.current_token_kind() {
            TokenKind::CloseCurly => break,
            TokenKind::Semicolon => {
                parser.advance();
            }
            TokenKind::EOF => return Err(parser.unexpected("expected '}'")),
            _ => body.push(parse_expr(parser)?),
        }
    }

    let end = parser.advance().span.end.clone();

    Ok(Expr::Block(BlockExpr {
        body,
        span: Span { start, end },
    }))
}

/// `if cond then expr else expr` or `if cond { ... } else expr`.
pub fn parse_if_expr(parser: &mut Parser) -> Result<Expr, Error> {
    let start = parser.advance().span.start.clone();
    let condition = parse_expr(parser)?;

    let then_branch = match parser.current_token_kind() {
        TokenKind::Then => {
            parser.advance();
            parse_expr(parser)?
        }
        TokenKind::OpenCurly => parse_block_expr(parser)?,
        _ => return Err(parser.unexpected("expected 'then' or '{' after the condition")),
    };

    parser.expect_error(TokenKind::Else, "expected 'else'")?;
    let else_branch = parse_expr(parser)?;

    Ok(Expr::If(IfExpr {
        span: Span {
            start,
            end: else_branch.get_span().end.clone(),
        },
        condition: Box::new(condition),
        then_branch: Box::new(then_branch),
        else_branch: Box::new(else_branch),
    }))
}

pub fn parse_while_expr(parser: &mut Parser) -> Result<Expr, Error> {
    let start = parser.advance().span.start.clone();
    let condition = parse_expr(parser)?;
    let body = parse_expr(parser)?;

    Ok(Expr::While(WhileExpr {
        span: Span {
            start,
            end: body.get_span().end.clone(),
        },
        condition: Box::new(condition),
        body: Box::new(body),
    }))
}

pub fn parse_print_expr(parser: &mut Parser) -> Result<Expr, Error> {
    let start = parser.advance().span.start.clone();
    parser.expect_error(TokenKind::OpenParen, "expected '(' after 'print'")?;
    let expression = parse_expr(parser)?;
    let end = parser
        .expect_error(TokenKind::CloseParen, "expected ')'")?
        .span
        .end;

    Ok(Expr::Print(PrintExpr {
        span: Span { start, end },
        expression: Box::new(expression),
    }))
}
