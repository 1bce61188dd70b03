use inkwell::{
    values::{BasicValueEnum, FloatValue, IntValue},
    FloatPredicate, IntPredicate,
};

use crate::{
    ast::{
        ast::{BinaryOperator, Expr},
        expressions::{
            AssignmentExpr, BinaryExpr, NumberExpr, UnaryExpr, VarDeclExpr, VariableExpr,
        },
        types::Type,
    },
    errors::errors::{Error, ErrorImpl},
    type_checker::type_checker::{resolve_binary, resolve_unary},
};

use super::{
    compiler::{Compiler, TypedValue},
    control_flow::{gen_block, gen_if, gen_while},
    environment::Variable,
    stdlib::{gen_power, gen_print},
};

/// Generates LLVM IR for the given expression.
pub fn gen_expression<'a>(compiler: &mut Compiler<'a>, expression: &Expr) -> Result<TypedValue<'a>, Error> {
    match expression {
        Expr::Number(number) => Ok(gen_number(compiler, number)),
        Expr::Bool(boolean) => Ok(TypedValue::new(
            compiler
                .context
                .bool_type()
                .const_int(u64::from(boolean.value), false)
                .into(),
            Type::Bool,
        )),
        Expr::Variable(variable) => gen_variable(compiler, variable),
        Expr::VarDecl(declaration) => gen_var_decl(compiler, declaration),
        Expr::Assignment(assignment) => gen_assignment(compiler, assignment),
        Expr::Unary(unary) => gen_unary(compiler, unary),
        Expr::Binary(binary) => gen_binary(compiler, binary),
        Expr::Block(block) => gen_block(compiler, block),
        Expr::If(if_expr) => gen_if(compiler, if_expr),
        Expr::While(while_expr) => gen_while(compiler, while_expr),
        Expr::Print(print) => gen_print(compiler, print),
    }
}

fn gen_number<'a>(compiler: &Compiler<'a>, number: &NumberExpr) -> TypedValue<'a> {
    if number.is_integer {
        TypedValue::new(
            compiler
                .context
                .i64_type()
                .const_int(number.int_value as u64, true)
                .into(),
            Type::Int,
        )
    } else {
        TypedValue::new(
            compiler
                .context
                .f64_type()
                .const_float(number.double_value)
                .into(),
            Type::Double,
        )
    }
}

fn gen_variable<'a>(compiler: &Compiler<'a>, variable: &VariableExpr) -> Result<TypedValue<'a>, Error> {
    let Variable { pointer, ty } = compiler
        .environment
        .resolve(&variable.name, &variable.span.start)?;

    let value = compiler.builder.build_load(pointer, &variable.name)?;

    Ok(TypedValue::new(value, ty))
}

/// Declares a variable. The initializer is evaluated before the name is
/// bound, so it cannot refer to the variable being declared.
fn gen_var_decl<'a>(compiler: &mut Compiler<'a>, declaration: &VarDeclExpr) -> Result<TypedValue<'a>, Error> {
    let position = &declaration.span.start;

    if compiler.environment.get_variable(&declaration.name).is_some() {
        return Err(Error::new(
            ErrorImpl::VariableAlreadyDeclared {
                variable: declaration.name.clone(),
            },
            position.clone(),
        ));
    }

    let init = gen_expression(compiler, &declaration.init)?;
    let value = compiler.cast_to_type(init, declaration.declared_type, "declcast", position)?;

    let pointer = compiler.create_entry_block_alloca(declaration.declared_type, &declaration.name)?;
    compiler.builder.build_store(pointer, value)?;

    compiler.environment.declare_variable(
        declaration.name.clone(),
        Variable {
            pointer,
            ty: declaration.declared_type,
        },
        position.clone(),
    )?;

    tracing::debug!(
        name = %declaration.name,
        ty = %declaration.declared_type,
        "declared variable"
    );

    Ok(TypedValue::new(value, declaration.declared_type))
}

/// Stores into an existing variable and evaluates to the stored value,
/// so assignments chain (`x = y = 5`).
fn gen_assignment<'a>(compiler: &mut Compiler<'a>, assignment: &AssignmentExpr) -> Result<TypedValue<'a>, Error> {
    let position = &assignment.span.start;
    let Variable { pointer, ty } = compiler.environment.resolve(&assignment.name, position)?;

    let value = gen_expression(compiler, &assignment.value)?;
    let value = compiler.cast_to_type(value, ty, "assigncast", position)?;
    compiler.builder.build_store(pointer, value)?;

    Ok(TypedValue::new(value, ty))
}

fn gen_unary<'a>(compiler: &mut Compiler<'a>, unary: &UnaryExpr) -> Result<TypedValue<'a>, Error> {
    let position = &unary.span.start;
    let operand = gen_expression(compiler, &unary.operand)?;
    let ty = resolve_unary(unary.operator, operand.ty, position)?;
    let operand = compiler.cast_to_type(operand, ty, "boolneg", position)?;

    let value: BasicValueEnum<'a> = if ty == Type::Double {
        compiler
            .builder
            .build_float_neg(operand.into_float_value(), "negtmp")?
            .into()
    } else {
        compiler
            .builder
            .build_int_neg(operand.into_int_value(), "negtmp")?
            .into()
    };

    Ok(TypedValue::new(value, ty))
}

fn gen_binary<'a>(compiler: &mut Compiler<'a>, binary: &BinaryExpr) -> Result<TypedValue<'a>, Error> {
    let position = &binary.span.start;
    let left = gen_expression(compiler, &binary.left)?;
    let right = gen_expression(compiler, &binary.right)?;

    let resolution = resolve_binary(binary.operator, left.ty, right.ty, position)?;
    let lhs = compiler.cast_to_type(left, resolution.operand_type, "lhscast", position)?;
    let rhs = compiler.cast_to_type(right, resolution.operand_type, "rhscast", position)?;

    let value = if resolution.operand_type == Type::Double {
        gen_float_binary(compiler, binary.operator, lhs.into_float_value(), rhs.into_float_value())?
    } else {
        gen_int_binary(compiler, binary.operator, lhs.into_int_value(), rhs.into_int_value())?
    };

    Ok(TypedValue::new(value, resolution.result_type))
}

fn gen_float_binary<'a>(
    compiler: &Compiler<'a>,
    operator: BinaryOperator,
    lhs: FloatValue<'a>,
    rhs: FloatValue<'a>,
) -> Result<BasicValueEnum<'a>, Error> {
    let builder = &compiler.builder;
    let compare = |predicate: FloatPredicate| builder.build_float_compare(predicate, lhs, rhs, "cmptmp");

    let value: BasicValueEnum<'a> = match operator {
        BinaryOperator::Add => builder.build_float_add(lhs, rhs, "addtmp")?.into(),
        BinaryOperator::Subtract => builder.build_float_sub(lhs, rhs, "subtmp")?.into(),
        BinaryOperator::Multiply => builder.build_float_mul(lhs, rhs, "multmp")?.into(),
        BinaryOperator::Divide => builder.build_float_div(lhs, rhs, "divtmp")?.into(),
        BinaryOperator::Modulo => builder.build_float_rem(lhs, rhs, "modtmp")?.into(),
        BinaryOperator::Power => gen_power(compiler, lhs, rhs)?,
        BinaryOperator::Less => compare(FloatPredicate::OLT)?.into(),
        BinaryOperator::Greater => compare(FloatPredicate::OGT)?.into(),
        BinaryOperator::Equals => compare(FloatPredicate::OEQ)?.into(),
        BinaryOperator::NotEquals => compare(FloatPredicate::ONE)?.into(),
        BinaryOperator::LessEquals => compare(FloatPredicate::OLE)?.into(),
        BinaryOperator::GreaterEquals => compare(FloatPredicate::OGE)?.into(),
    };

    Ok(value)
}

fn gen_int_binary<'a>(
    compiler: &Compiler<'a>,
    operator: BinaryOperator,
    lhs: IntValue<'a>,
    rhs: IntValue<'a>,
) -> Result<BasicValueEnum<'a>, Error> {
    let builder = &compiler.builder;
    let compare = |predicate: IntPredicate| builder.build_int_compare(predicate, lhs, rhs, "cmptmp");

    let value: BasicValueEnum<'a> = match operator {
        BinaryOperator::Add => builder.build_int_add(lhs, rhs, "addtmp")?.into(),
        BinaryOperator::Subtract => builder.build_int_sub(lhs, rhs, "subtmp")?.into(),
        BinaryOperator::Multiply => builder.build_int_mul(lhs, rhs, "multmp")?.into(),
        BinaryOperator::Divide => builder.build_int_signed_div(lhs, rhs, "divtmp")?.into(),
        BinaryOperator::Modulo => builder.build_int_signed_rem(lhs, rhs, "modtmp")?.into(),
        BinaryOperator::Power => unreachable!("power operands are always resolved to double"),
        BinaryOperator::Less => compare(IntPredicate::SLT)?.into(),
        BinaryOperator::Greater => compare(IntPredicate::SGT)?.into(),
        BinaryOperator::Equals => compare(IntPredicate::EQ)?.into(),
        BinaryOperator::NotEquals => compare(IntPredicate::NE)?.into(),
        BinaryOperator::LessEquals => compare(IntPredicate::SLE)?.into(),
        BinaryOperator::GreaterEquals => compare(IntPredicate::SGE)?.into(),
    };

    Ok(value)
}
