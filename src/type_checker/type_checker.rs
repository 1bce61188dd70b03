use crate::{
    ast::{
        ast::{BinaryOperator, UnaryOperator},
        types::Type,
    },
    errors::errors::{Error, ErrorImpl},
    Position,
};

/// The higher ranked of the two types.
pub fn common_type(left: Type, right: Type) -> Type {
    if left.rank() >= right.rank() {
        left
    } else {
        right
    }
}

/// The type arithmetic is done in: booleans compute as integers.
pub fn numeric_type(ty: Type) -> Type {
    match ty {
        Type::Bool => Type::Int,
        other => other,
    }
}

/// How a binary operator is evaluated.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BinaryResolution {
    /// Both operands are cast to this type first.
    pub operand_type: Type,
    /// The type of the result.
    pub result_type: Type,
}

pub fn resolve_binary(
    operator: BinaryOperator,
    left: Type,
    right: Type,
    position: &Position,
) -> Result<BinaryResolution, Error> {
    if left.is_void() || right.is_void() {
        return Err(Error::new(
            ErrorImpl::InvalidOperands {
                operator: operator.to_string(),
                left: left.to_string(),
                right: right.to_string(),
            },
            position.clone(),
        ));
    }

    let resolution = if operator == BinaryOperator::Power {
        BinaryResolution {
            operand_type: Type::Double,
            result_type: Type::Double,
        }
    } else {
        let operand_type = numeric_type(common_type(left, right));
        let result_type = if operator.is_comparison() {
            Type::Bool
        } else {
            operand_type
        };

        BinaryResolution {
            operand_type,
            result_type,
        }
    };

    Ok(resolution)
}

/// The operand (and result) type of a unary operator.
pub fn resolve_unary(operator: UnaryOperator, operand: Type, position: &Position) -> Result<Type, Error> {
    match (operator, operand) {
        (UnaryOperator::Negate, Type::Void) => Err(Error::new(
            ErrorImpl::InvalidUnaryOperand {
                type_: operand.to_string(),
            },
            position.clone(),
        )),
        (UnaryOperator::Negate, ty) => Ok(numeric_type(ty)),
    }
}

/// The type both arms of an `if` are reconciled to.
pub fn resolve_branches(then_type: Type, else_type: Type, position: &Position) -> Result<Type, Error> {
    for (ty, arm) in [(then_type, "the 'then' branch"), (else_type, "the 'else' branch")] {
        if ty.is_void() {
            return Err(Error::new(
                ErrorImpl::MissingValue {
                    context: String::from(arm),
                },
                position.clone(),
            ));
        }
    }

    Ok(common_type(then_type, else_type))
}

/// A conversion between two value types.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Cast {
    /// Source and target are the same type.
    Identity,
    /// `sitofp`
    IntToDouble,
    /// `zext` of 0/1
    BoolToInt,
    /// `uitofp` of 0/1
    BoolToDouble,
    /// `fptosi`, truncating toward zero
    DoubleToInt,
    /// `fcmp one 0.0`
    DoubleToBool,
    /// `icmp ne 0`
    IntToBool,
}

pub fn classify_cast(from: Type, to: Type, position: &Position) -> Result<Cast, Error> {
    let cast = match (from, to) {
        (Type::Void, _) | (_, Type::Void) => {
            return Err(Error::new(
                ErrorImpl::InvalidCast {
                    from: from.to_string(),
                    to: to.to_string(),
                },
                position.clone(),
            ))
        }
        (from, to) if from == to => Cast::Identity,
        (Type::Int, Type::Double) => Cast::IntToDouble,
        (Type::Bool, Type::Int) => Cast::BoolToInt,
        (Type::Bool, Type::Double) => Cast::BoolToDouble,
        (Type::Double, Type::Int) => Cast::DoubleToInt,
        (Type::Double, Type::Bool) => Cast::DoubleToBool,
        (Type::Int, Type::Bool) => Cast::IntToBool,
        _ => Cast::Identity,
    };

    Ok(cast)
}
