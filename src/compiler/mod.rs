//! Code generation module for the compiler.
//!
//! This module lowers the AST into LLVM IR. It handles:
//!
//! - Type resolution of every expression as it is lowered
//! - Implicit conversions between `bool`, `int` and `double`
//! - Control flow (`if` merges through a phi, `while` loops)
//! - The symbol table and the runtime functions (`printf`, `pow`)

pub mod compiler;
pub mod control_flow;
pub mod environment;
pub mod expr;
pub mod stdlib;
