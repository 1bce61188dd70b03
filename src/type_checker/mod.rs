//! Type resolution and coercion rules.
//!
//! Lowering asks this module which static type every operator works in
//! and produces, and how a value is converted from one type to another:
//!
//! - `common_type` and `numeric_type` implement rank based promotion
//! - `resolve_binary` / `resolve_unary` pick operand and result types
//! - `classify_cast` names the conversion between two types
//!
//! Nothing here touches LLVM; the compiler maps each `Cast` onto an
//! instruction.

pub mod type_checker;
