//! Unit tests for the parser module.
//!
//! This module contains tests for parsing the language constructs:
//! - Variable declarations and assignments
//! - Operator precedence and associativity
//! - Control flow expressions (if, while, blocks)
//! - Print
//! - Syntax errors and their locations

use std::rc::Rc;

use super::parser::parse;
use crate::{
    ast::{
        ast::{BinaryOperator, Expr, UnaryOperator},
        expressions::BlockExpr,
        types::Type,
    },
    errors::errors::{Error, ErrorImpl, ErrorKind},
    lexer::lexer::tokenize,
};

fn parse_source(source: &str) -> Result<BlockExpr, Error> {
    let tokens = tokenize(source, Some("test.kirk".to_string()));
    parse(tokens, Rc::new("test.kirk".to_string()))
}

fn parse_single(source: &str) -> Expr {
    let program = parse_source(source).unwrap();
    assert_eq!(program.body.len(), 1, "expected one expression in {:?}", source);
    program.body.into_iter().next().unwrap()
}

/// Renders a tree in prefix form so precedence can be compared as text.
fn render(expr: &Expr) -> String {
    match expr {
        Expr::Number(number) if number.is_integer => number.int_value.to_string(),
        Expr::Number(number) => number.double_value.to_string(),
        Expr::Bool(boolean) => boolean.value.to_string(),
        Expr::Variable(variable) => variable.name.clone(),
        Expr::Unary(unary) => format!("({} {})", unary.operator, render(&unary.operand)),
        Expr::Binary(binary) => format!(
            "({} {} {})",
            binary.operator,
            render(&binary.left),
            render(&binary.right)
        ),
        Expr::Assignment(assignment) => format!("(= {} {})", assignment.name, render(&assignment.value)),
        other => format!("{:?}", other),
    }
}

#[test]
fn test_parse_variable_declaration() {
    match parse_single("x: int = 42") {
        Expr::VarDecl(decl) => {
            assert_eq!(decl.name, "x");
            assert_eq!(decl.declared_type, Type::Int);
            assert_eq!(render(&decl.init), "42");
        }
        other => panic!("expected a declaration, got {:?}", other),
    }
}

#[test]
fn test_parse_declaration_types() {
    let program = parse_source("a: double = 1; b: bool = true; c: int = 2.5").unwrap();
    let types = program
        .iter()
        .map(|expr| match expr {
            Expr::VarDecl(decl) => decl.declared_type,
            other => panic!("expected a declaration, got {:?}", other),
        })
        .collect::<Vec<Type>>();

    assert_eq!(types, vec![Type::Double, Type::Bool, Type::Int]);
}

#[test]
fn test_parse_chained_assignment() {
    assert_eq!(render(&parse_single("x = y = 5")), "(= x (= y 5))");
}

#[test]
fn test_parse_binary_precedence() {
    assert_eq!(render(&parse_single("1 + 2 * 3")), "(+ 1 (* 2 3))");
    assert_eq!(render(&parse_single("1 * 2 + 3")), "(+ (* 1 2) 3)");
    assert_eq!(render(&parse_single("a < b + c % d")), "(< a (+ b (% c d)))");
}

#[test]
fn test_parse_left_associativity() {
    assert_eq!(render(&parse_single("10 - 4 - 3")), "(- (- 10 4) 3)");
    assert_eq!(render(&parse_single("8 / 4 / 2")), "(/ (/ 8 4) 2)");
}

#[test]
fn test_parse_power_is_right_associative() {
    assert_eq!(render(&parse_single("2 ^ 3 ^ 2")), "(^ 2 (^ 3 2))");
    assert_eq!(render(&parse_single("2 * 3 ^ 2")), "(* 2 (^ 3 2))");
}

#[test]
fn test_parse_mixed_precedence_recovers_lower_operator() {
    assert_eq!(render(&parse_single("a + b * c - d")), "(- (+ a (* b c)) d)");
}

#[test]
fn test_parse_parenthesized_expression() {
    assert_eq!(render(&parse_single("(1 + 2) * 3")), "(* (+ 1 2) 3)");
}

#[test]
fn test_parse_unary_expression() {
    assert_eq!(render(&parse_single("--x")), "(- (- x))");

    match parse_single("-1 + 2") {
        Expr::Binary(binary) => {
            assert_eq!(binary.operator, BinaryOperator::Add);
            match *binary.left {
                Expr::Unary(unary) => assert_eq!(unary.operator, UnaryOperator::Negate),
                other => panic!("expected negation, got {:?}", other),
            }
        }
        other => panic!("expected addition, got {:?}", other),
    }
}

#[test]
fn test_parse_comparison_operators() {
    let operators = ["<", ">", "==", "!=", "<=", ">="]
        .iter()
        .map(|op| match parse_single(&format!("a {} b", op)) {
            Expr::Binary(binary) => binary.operator,
            other => panic!("expected a comparison, got {:?}", other),
        })
        .collect::<Vec<BinaryOperator>>();

    assert!(operators.iter().all(|op| op.is_comparison()));
}

#[test]
fn test_parse_if_then_else() {
    match parse_single("if 1 < 2 then 10 else 20") {
        Expr::If(if_expr) => {
            assert_eq!(render(&if_expr.condition), "(< 1 2)");
            assert_eq!(render(&if_expr.then_branch), "10");
            assert_eq!(render(&if_expr.else_branch), "20");
        }
        other => panic!("expected an if, got {:?}", other),
    }
}

#[test]
fn test_parse_if_with_blocks() {
    match parse_single("if x { print(1); 2 } else { 3 }") {
        Expr::If(if_expr) => {
            match *if_expr.then_branch {
                Expr::Block(block) => assert_eq!(block.body.len(), 2),
                other => panic!("expected a block, got {:?}", other),
            }
            assert!(matches!(*if_expr.else_branch, Expr::Block(_)));
        }
        other => panic!("expected an if, got {:?}", other),
    }
}

#[test]
fn test_parse_if_requires_else() {
    let error = parse_source("if x then 1").unwrap_err();

    assert_eq!(error.get_kind(), ErrorKind::SyntaxError);
    assert_eq!(error.get_message(), "expected 'else', found 'end of input'");
}

#[test]
fn test_parse_while_loop() {
    match parse_single("while x < 10 { x = x + 1 }") {
        Expr::While(while_expr) => {
            assert_eq!(render(&while_expr.condition), "(< x 10)");
            match *while_expr.body {
                Expr::Block(block) => assert_eq!(render(&block.body[0]), "(= x (+ x 1))"),
                other => panic!("expected a block, got {:?}", other),
            }
        }
        other => panic!("expected a while, got {:?}", other),
    }
}

#[test]
fn test_parse_print() {
    match parse_single("print(x + 2.5)") {
        Expr::Print(print) => assert_eq!(render(&print.expression), "(+ x 2.5)"),
        other => panic!("expected a print, got {:?}", other),
    }
}

#[test]
fn test_parse_multiple_statements() {
    let program = parse_source(";; x: int = 5; print(x);;\n x = 2").unwrap();
    assert_eq!(program.body.len(), 3);
}

#[test]
fn test_parse_empty_program() {
    assert!(parse_source("").unwrap().is_empty());
    assert!(parse_source("# only a comment\n").unwrap().is_empty());
}

#[test]
fn test_parse_nested_and_empty_blocks() {
    match parse_single("{ { } ; { 1 } }") {
        Expr::Block(block) => {
            assert_eq!(block.body.len(), 2);
            assert!(matches!(&block.body[0], Expr::Block(inner) if inner.is_empty()));
        }
        other => panic!("expected a block, got {:?}", other),
    }
}

#[test]
fn test_parse_unterminated_block() {
    let error = parse_source("{ x: int = 1;\n x").unwrap_err();

    assert_eq!(error.get_kind(), ErrorKind::SyntaxError);
    assert_eq!(
        error.get_internal_error(),
        &ErrorImpl::UnexpectedTokenDetailed {
            token: "end of input".to_string(),
            message: "expected '}'".to_string(),
        }
    );
    assert_eq!(error.get_position().line, 2);
}

#[test]
fn test_parse_missing_close_paren() {
    let error = parse_source("print(1 + 2").unwrap_err();
    assert_eq!(error.get_message(), "expected ')', found 'end of input'");
}

#[test]
fn test_parse_unknown_character_is_reported_at_its_location() {
    let error = parse_source("x: int = 1;\n  y @ 2").unwrap_err();

    // `y` parses on its own; `@` cannot start an expression
    assert_eq!(error.get_message(), "expected an expression, found '@'");
    assert_eq!(error.get_position().line, 2);
    assert_eq!(error.get_position().column, 5);
}

#[test]
fn test_parse_bad_declared_type() {
    let error = parse_source("x: float = 1").unwrap_err();

    assert_eq!(
        error.get_message(),
        "expected a type ('int', 'double' or 'bool'), found 'float'"
    );
}

#[test]
fn test_parse_operator_without_operand() {
    assert!(parse_source("1 +").is_err());
    assert!(parse_source("* 2").is_err());
}

#[test]
fn test_binary_span_starts_at_operator() {
    match parse_single("abc + 1") {
        Expr::Binary(binary) => assert_eq!(binary.span.start.column, 5),
        other => panic!("expected addition, got {:?}", other),
    }
}
