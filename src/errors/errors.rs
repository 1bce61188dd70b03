use std::fmt::Display;

use inkwell::builder::BuilderError;
use thiserror::Error;

use crate::Position;

/// The category an error is reported under.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    SyntaxError,
    ReferenceError,
    /// Reserved for semantic numeric faults. Nothing raises it yet.
    ArithmeticError,
    /// A malformed module or a failed LLVM call. Always a compiler bug.
    InternalError,
}

impl Display for ErrorKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ErrorKind::SyntaxError => write!(f, "Syntax Error"),
            ErrorKind::ReferenceError => write!(f, "Reference Error"),
            ErrorKind::ArithmeticError => write!(f, "Arithmetic Error"),
            ErrorKind::InternalError => write!(f, "Internal Error"),
        }
    }
}

#[derive(Debug, Clone)]
pub struct Error {
    internal_error: ErrorImpl,
    position: Position,
}

impl Error {
    pub fn new(error_impl: ErrorImpl, position: Position) -> Self {
        Error {
            internal_error: error_impl,
            position,
        }
    }

    pub fn get_position(&self) -> &Position {
        &self.position
    }

    pub fn get_internal_error(&self) -> &ErrorImpl {
        &self.internal_error
    }

    pub fn get_kind(&self) -> ErrorKind {
        match &self.internal_error {
            ErrorImpl::UnknownVariable { .. } => ErrorKind::ReferenceError,
            ErrorImpl::BuilderError { .. }
            | ErrorImpl::InvalidModule { .. }
            | ErrorImpl::TargetError { .. }
            | ErrorImpl::WriteFailed { .. } => ErrorKind::InternalError,
            _ => ErrorKind::SyntaxError,
        }
    }

    /// The message without the category prefix.
    pub fn get_message(&self) -> String {
        self.internal_error.to_string()
    }

    pub fn get_error_name(&self) -> &str {
        match &self.internal_error {
            ErrorImpl::UnexpectedToken { .. } => "UnexpectedToken",
            ErrorImpl::UnexpectedTokenDetailed { .. } => "UnexpectedTokenDetailed",
            ErrorImpl::VariableAlreadyDeclared { .. } => "VariableAlreadyDeclared",
            ErrorImpl::UnknownVariable { .. } => "UnknownVariable",
            ErrorImpl::InvalidOperands { .. } => "InvalidOperands",
            ErrorImpl::InvalidUnaryOperand { .. } => "InvalidUnaryOperand",
            ErrorImpl::InvalidCast { .. } => "InvalidCast",
            ErrorImpl::MissingValue { .. } => "MissingValue",
            ErrorImpl::UnsupportedPrintType { .. } => "UnsupportedPrintType",
            ErrorImpl::BuilderError { .. } => "BuilderError",
            ErrorImpl::InvalidModule { .. } => "InvalidModule",
            ErrorImpl::TargetError { .. } => "TargetError",
            ErrorImpl::WriteFailed { .. } => "WriteFailed",
        }
    }

    pub fn get_tip(&self) -> ErrorTip {
        match &self.internal_error {
            ErrorImpl::UnexpectedToken { .. } => ErrorTip::Suggestion(String::from(
                "did you miss an operator or a closing bracket?",
            )),
            ErrorImpl::VariableAlreadyDeclared { variable } => ErrorTip::Suggestion(format!(
                "assign to `{}` with `{} = ...` instead of declaring it again",
                variable, variable
            )),
            ErrorImpl::UnknownVariable { variable, suggestions } => {
                if suggestions.is_empty() {
                    ErrorTip::Suggestion(format!(
                        "declare it first, e.g. `{}: int = 0`",
                        variable
                    ))
                } else {
                    ErrorTip::None
                }
            }
            ErrorImpl::MissingValue { .. } => ErrorTip::Suggestion(String::from(
                "empty blocks and `print` do not produce a value",
            )),
            _ => ErrorTip::None,
        }
    }
}

impl Display for Error {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}: {}", self.get_kind(), self.internal_error)
    }
}

impl std::error::Error for Error {}

impl From<BuilderError> for Error {
    fn from(error: BuilderError) -> Self {
        Error::new(
            ErrorImpl::BuilderError {
                message: format!("{:?}", error),
            },
            Position::null(),
        )
    }
}

pub enum ErrorTip {
    None,
    Suggestion(String),
}

impl Display for ErrorTip {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ErrorTip::None => write!(f, ""),
            ErrorTip::Suggestion(suggestion) => write!(f, "{}", suggestion),
        }
    }
}

fn format_suggestions(suggestions: &[String]) -> String {
    if suggestions.is_empty() {
        return String::new();
    }

    let quoted = suggestions
        .iter()
        .map(|name| format!("'{}'", name))
        .collect::<Vec<String>>();

    format!(". Maybe you meant: {}?", quoted.join(", "))
}

#[derive(Error, Debug, Clone, PartialEq)]
pub enum ErrorImpl {
    #[error("Unexpected token '{token}'")]
    UnexpectedToken { token: String },
    #[error("{message}, found '{token}'")]
    UnexpectedTokenDetailed { token: String, message: String },
    #[error("Variable '{variable}' already declared")]
    VariableAlreadyDeclared { variable: String },
    #[error("Unknown variable name: '{variable}'{}", format_suggestions(.suggestions))]
    UnknownVariable {
        variable: String,
        suggestions: Vec<String>,
    },
    #[error("Invalid operand types for '{operator}': {left} and {right}")]
    InvalidOperands {
        operator: String,
        left: String,
        right: String,
    },
    #[error("Unknown unary operand type: {type_}")]
    InvalidUnaryOperand { type_: String },
    #[error("Cannot convert {from} to {to}")]
    InvalidCast { from: String, to: String },
    #[error("Expected a value from {context}")]
    MissingValue { context: String },
    #[error("Unsupported type for print: {type_}")]
    UnsupportedPrintType { type_: String },
    #[error("LLVM builder failure: {message}")]
    BuilderError { message: String },
    #[error("Generated module is invalid: {message}")]
    InvalidModule { message: String },
    #[error("Could not set up the host target: {message}")]
    TargetError { message: String },
    #[error("Could not write '{path}': {message}")]
    WriteFailed { path: String, message: String },
}
