#![allow(clippy::module_inception)]

use std::{fmt::Display, rc::Rc};

use inkwell::context::Context;

use crate::{
    compiler::compiler::{compile, Compiler},
    errors::errors::Error,
    lexer::lexer::tokenize,
    parser::parser::parse,
};

pub mod ast;
pub mod compiler;
pub mod errors;
pub mod lexer;
pub mod macros;
pub mod parser;
pub mod type_checker;

extern crate regex;

/// A location in a source file. Lines and columns start at 1.
#[derive(Debug, Clone, PartialEq)]
pub struct Position {
    pub line: u32,
    pub column: u32,
    pub file: Rc<String>,
}

impl Position {
    pub fn new(line: u32, column: u32, file: Rc<String>) -> Self {
        Position { line, column, file }
    }

    pub fn null() -> Self {
        Position::new(0, 0, Rc::new(String::from("<null>")))
    }
}

impl Display for Position {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}:{}:{}", self.file, self.line, self.column)
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Span {
    pub start: Position,
    pub end: Position,
}

/// Returns the text of the 1-based `line` of `source`, without its line
/// terminator.
pub fn get_line_at_position(source: &str, line: u32) -> Option<&str> {
    if line == 0 {
        return None;
    }

    source
        .lines()
        .nth(line as usize - 1)
}

/// Runs the whole front end over `source`: tokenize, parse and lower into a
/// verified module owned by the returned compiler.
pub fn compile_source<'a>(
    source: &str,
    file_name: &str,
    context: &'a Context,
) -> Result<Compiler<'a>, Error> {
    let tokens = tokenize(source, Some(String::from(file_name)));
    let ast = parse(tokens, Rc::new(String::from(file_name)))?;

    compile(&ast, file_name, context)
}
