use std::fmt::Display;

use crate::{lexer::tokens::TokenKind, Span};

use super::expressions::{
    AssignmentExpr, BinaryExpr, BlockExpr, BoolExpr, IfExpr, NumberExpr, PrintExpr, UnaryExpr,
    VarDeclExpr, VariableExpr, WhileExpr,
};

/// Expression
///
/// The language has no statements: every construct is an expression, and
/// this enum is the closed set of them.
#[derive(Debug, Clone, PartialEq)]
pub enum Expr {
    Number(NumberExpr),
    Bool(BoolExpr),
    Variable(VariableExpr),
    VarDecl(VarDeclExpr),
    Assignment(AssignmentExpr),
    Unary(UnaryExpr),
    Binary(BinaryExpr),
    Block(BlockExpr),
    If(IfExpr),
    While(WhileExpr),
    Print(PrintExpr),
}

impl Expr {
    /// Returns the span of the expression.
    pub fn get_span(&self) -> &Span {
        match self {
            Expr::Number(expr) => &expr.span,
            Expr::Bool(expr) => &expr.span,
            Expr::Variable(expr) => &expr.span,
            Expr::VarDecl(expr) => &expr.span,
            Expr::Assignment(expr) => &expr.span,
            Expr::Unary(expr) => &expr.span,
            Expr::Binary(expr) => &expr.span,
            Expr::Block(expr) => &expr.span,
            Expr::If(expr) => &expr.span,
            Expr::While(expr) => &expr.span,
            Expr::Print(expr) => &expr.span,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum UnaryOperator {
    Negate,
}

impl Display for UnaryOperator {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            UnaryOperator::Negate => write!(f, "-"),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum BinaryOperator {
    Add,
    Subtract,
    Multiply,
    Divide,
    Modulo,
    Power,
    Less,
    Greater,
    Equals,
    NotEquals,
    LessEquals,
    GreaterEquals,
}

impl BinaryOperator {
    pub fn from_token_kind(kind: TokenKind) -> Option<BinaryOperator> {
        match kind {
            TokenKind::Plus => Some(BinaryOperator::Add),
            TokenKind::Dash => Some(BinaryOperator::Subtract),
            TokenKind::Star => Some(BinaryOperator::Multiply),
            TokenKind::Slash => Some(BinaryOperator::Divide),
            TokenKind::Percent => Some(BinaryOperator::Modulo),
            TokenKind::Caret => Some(BinaryOperator::Power),
            TokenKind::Less => Some(BinaryOperator::Less),
            TokenKind::Greater => Some(BinaryOperator::Greater),
            TokenKind::Equals => Some(BinaryOperator::Equals),
            TokenKind::NotEquals => Some(BinaryOperator::NotEquals),
            TokenKind::LessEquals => Some(BinaryOperator::LessEquals),
            TokenKind::GreaterEquals => Some(BinaryOperator::GreaterEquals),
            _ => None,
        }
    }

    pub fn is_comparison(&self) -> bool {
        matches!(
            self,
            BinaryOperator::Less
                | BinaryOperator::Greater
                | BinaryOperator::Equals
                | BinaryOperator::NotEquals
                | BinaryOperator::LessEquals
                | BinaryOperator::GreaterEquals
        )
    }

    pub fn is_right_associative(&self) -> bool {
        *self == BinaryOperator::Power
    }
}

impl Display for BinaryOperator {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let symbol = match self {
            BinaryOperator::Add => "+",
            BinaryOperator::Subtract => "-",
            BinaryOperator::Multiply => "*",
            BinaryOperator::Divide => "/",
            BinaryOperator::Modulo => "%",
            BinaryOperator::Power => "^",
            BinaryOperator::Less => "<",
            BinaryOperator::Greater => ">",
            BinaryOperator::Equals => "==",
            BinaryOperator::NotEquals => "!=",
            BinaryOperator::LessEquals => "<=",
            BinaryOperator::GreaterEquals => ">=",
        };

        write!(f, "{}", symbol)
    }
}
