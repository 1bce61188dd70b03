//! Integration tests for end-to-end compilation.
//!
//! These tests verify that the complete compilation pipeline works correctly
//! from source code through tokenization, parsing, type resolution and LLVM
//! IR generation, using only the public API.

use std::rc::Rc;

use inkwell::context::Context;
use kirk::{
    compile_source,
    compiler::compiler::compile,
    errors::errors::{Error, ErrorKind},
    lexer::lexer::tokenize,
    parser::parser::parse,
};

fn compile_ir(source: &str) -> String {
    let context = Context::create();
    let compiler = compile_source(source, "test.kirk", &context)
        .unwrap_or_else(|error| panic!("compilation failed: {}", error));
    compiler.print_to_string()
}

fn compile_error(source: &str) -> Error {
    let context = Context::create();
    let result = match compile_source(source, "test.kirk", &context) {
        Ok(_) => panic!("expected compilation to fail"),
        Err(error) => error,
    };
    result
}

#[test]
fn test_compile_in_separate_stages() {
    let source = "x: int = 5; print(x + 2.5)";
    let tokens = tokenize(source, Some("stages.kirk".to_string()));
    let ast = parse(tokens, Rc::new("stages.kirk".to_string())).unwrap();
    assert_eq!(ast.body.len(), 2);

    let context = Context::create();
    let compiler = compile(&ast, "stages.kirk", &context).unwrap();
    assert!(compiler.module.verify().is_ok());
    assert!(compiler.module.get_function("main").is_some());
    assert!(compiler.environment.get_variable("x").is_some());
}

#[test]
fn test_compile_mixed_arithmetic_program() {
    let ir = compile_ir(
        r#"
        # Average of three readings
        a: int = 4
        b: double = 5.5
        c: bool = true
        avg: double = (a + b + c) / 3
        print(avg)
        print(a % 3)
        print(a < b)
        "#,
    );

    assert!(ir.contains(r#"c"%.2f\0A\00""#));
    assert!(ir.contains(r#"c"%lld\0A\00""#));
    assert!(ir.contains(r#"c"%d\0A\00""#));
}

#[test]
fn test_compile_control_flow() {
    let ir = compile_ir(
        r#"
        n: int = 10;
        total: int = 0;
        while n > 0 {
            total = total + if n % 2 == 0 then n else 0;
            n = n - 1
        };
        print(total)
        "#,
    );

    assert!(ir.contains("loopcond:"));
    assert!(ir.contains("%iftmp = phi i64"));
    assert!(ir.contains("ret i32 0"));
}

#[test]
fn test_compile_nested_expressions() {
    let ir = compile_ir("x: double = 2; y: double = -(x ^ 2 ^ 0.5) * (1 + x) - 3 % 2; print(y)");

    assert_eq!(ir.matches("call double @llvm.pow.f64").count(), 2);
}

#[test]
fn test_compile_countdown_with_blocks() {
    let ir = compile_ir(
        r#"
        i: int = 3
        while i {
            print(i)
            i = i - 1
        }
        print(if i == 0 { true } else { false })
        "#,
    );

    assert!(ir.contains("icmp ne i64"));
    assert!(ir.contains("phi i1"));
}

#[test]
fn test_syntax_error_location() {
    let error = compile_error("x: int = 1;\nprint(x +)");

    assert_eq!(error.get_kind(), ErrorKind::SyntaxError);
    assert_eq!(error.get_position().line, 2);
    assert_eq!(error.get_position().column, 10);
    assert_eq!(*error.get_position().file, "test.kirk");
}

#[test]
fn test_reference_error_with_suggestion() {
    let error = compile_error("count: int = 0;\ncount = cont + 1");

    assert_eq!(error.get_kind(), ErrorKind::ReferenceError);
    assert_eq!(
        error.to_string(),
        "Reference Error: Unknown variable name: 'cont'. Maybe you meant: 'count'?"
    );
}

#[test]
fn test_redeclaration_fails_regardless_of_type() {
    for second in ["int", "double", "bool"] {
        let error = compile_error(&format!("v: int = 1; v: {} = 1", second));
        assert_eq!(error.get_kind(), ErrorKind::SyntaxError);
        assert_eq!(error.get_message(), "Variable 'v' already declared");
    }
}

#[test]
fn test_independent_compilations() {
    let first = Context::create();
    let second = Context::create();

    let a = compile_source("a: int = 1", "a.kirk", &first).unwrap();
    let b = compile_source("b: double = 2.0", "b.kirk", &second).unwrap();

    assert!(a.environment.get_variable("b").is_none());
    assert!(b.environment.get_variable("a").is_none());
}

#[test]
fn test_save_module_to_file() {
    let context = Context::create();
    let compiler = compile_source("print(42)", "save.kirk", &context).unwrap();

    let path = std::env::temp_dir().join(format!("kirk_save_test_{}.ll", std::process::id()));
    compiler.save_module_to_file(&path).unwrap();

    let written = std::fs::read_to_string(&path).unwrap();
    assert!(written.contains("define i32 @main()"));
    std::fs::remove_file(&path).unwrap();
}
