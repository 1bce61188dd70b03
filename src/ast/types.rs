//! Static types of the language.
//!
//! Every expression resolves to exactly one of these during lowering.
//! The numeric types are ordered by promotion rank, which drives every
//! implicit conversion (see `type_checker`).

use std::fmt::Display;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Type {
    Bool,
    Int,
    Double,
    /// The type of expressions that produce no value.
    Void,
}

impl Type {
    /// Promotion rank: `Bool < Int < Double`. `Void` ranks below everything.
    pub fn rank(&self) -> u8 {
        match self {
            Type::Void => 0,
            Type::Bool => 1,
            Type::Int => 2,
            Type::Double => 3,
        }
    }

    pub fn is_void(&self) -> bool {
        *self == Type::Void
    }
}

impl Display for Type {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Type::Bool => write!(f, "bool"),
            Type::Int => write!(f, "int"),
            Type::Double => write!(f, "double"),
            Type::Void => write!(f, "void"),
        }
    }
}
