use crate::Span;

use super::{
    ast::{BinaryOperator, Expr, UnaryOperator},
    types::Type,
};

// LITERALS

/// Number Expression
/// Represents a numeric literal. Integer literals keep their exact value.
#[derive(Debug, Clone, PartialEq)]
pub struct NumberExpr {
    pub is_integer: bool,
    pub int_value: i64,
    pub double_value: f64,
    pub span: Span,
}

impl NumberExpr {
    pub fn integer(value: i64, span: Span) -> Self {
        NumberExpr {
            is_integer: true,
            int_value: value,
            double_value: value as f64,
            span,
        }
    }

    pub fn double(value: f64, span: Span) -> Self {
        NumberExpr {
            is_integer: false,
            int_value: 0,
            double_value: value,
            span,
        }
    }
}

/// Bool Expression
/// Represents `true` or `false`.
#[derive(Debug, Clone, PartialEq)]
pub struct BoolExpr {
    pub value: bool,
    pub span: Span,
}

// VARIABLES

/// Variable Expression
/// A read of a declared variable.
#[derive(Debug, Clone, PartialEq)]
pub struct VariableExpr {
    pub name: String,
    pub span: Span,
}

/// Variable Declaration Expression
/// `name: type = init`. Evaluates to the stored (cast) value.
#[derive(Debug, Clone, PartialEq)]
pub struct VarDeclExpr {
    pub name: String,
    pub declared_type: Type,
    pub init: Box<Expr>,
    pub span: Span,
}

/// Assignment Expression
/// `name = value`. Evaluates to the stored (cast) value.
#[derive(Debug, Clone, PartialEq)]
pub struct AssignmentExpr {
    pub name: String,
    pub value: Box<Expr>,
    pub span: Span,
}

// OPERATORS

#[derive(Debug, Clone, PartialEq)]
pub struct UnaryExpr {
    pub operator: UnaryOperator,
    pub operand: Box<Expr>,
    pub span: Span,
}

/// Binary Expression
/// The span starts at the operator token, which is where type errors are
/// reported.
#[derive(Debug, Clone, PartialEq)]
pub struct BinaryExpr {
    pub operator: BinaryOperator,
    pub left: Box<Expr>,
    pub right: Box<Expr>,
    pub span: Span,
}

// CONTROL FLOW

/// Block Expression
/// `{ e1; e2; ... }`. The value is the last expression's, or none when
/// the block is empty. The whole program is parsed into one of these.
#[derive(Debug, Clone, PartialEq)]
pub struct BlockExpr {
    pub body: Vec<Expr>,
    pub span: Span,
}

impl BlockExpr {
    pub fn iter(&self) -> std::slice::Iter<'_, Expr> {
        self.body.iter()
    }

    pub fn is_empty(&self) -> bool {
        self.body.is_empty()
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct IfExpr {
    pub condition: Box<Expr>,
    pub then_branch: Box<Expr>,
    pub else_branch: Box<Expr>,
    pub span: Span,
}

#[derive(Debug, Clone, PartialEq)]
pub struct WhileExpr {
    pub condition: Box<Expr>,
    pub body: Box<Expr>,
    pub span: Span,
}

/// Print Expression
/// `print(expr)`. Produces no value.
#[derive(Debug, Clone, PartialEq)]
pub struct PrintExpr {
    pub expression: Box<Expr>,
    pub span: Span,
}
