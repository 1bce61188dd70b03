//! Lowering of blocks, `if` and `while`.

use crate::{
    ast::{
        expressions::{BlockExpr, IfExpr, WhileExpr},
        types::Type,
    },
    errors::errors::Error,
    type_checker::type_checker::resolve_branches,
};

use super::{
    compiler::{internal_error, Compiler, TypedValue},
    expr::gen_expression,
};

/// Lowers each expression in order. The block's value is the last one's,
/// or void when the block is empty.
pub fn gen_block<'a>(compiler: &mut Compiler<'a>, block: &BlockExpr) -> Result<TypedValue<'a>, Error> {
    let mut last = TypedValue::void();

    for expression in block.iter() {
        last = gen_expression(compiler, expression)?;
    }

    Ok(last)
}

/// Lowers `if` into `then`/`else` arms merged by a phi in `ifcont`.
///
/// Both arms are lowered before the merge type is known, so neither arm's
/// block is terminated until then. Each arm's cast is emitted at the end
/// of the block the arm finished in, followed by the branch to `ifcont`.
pub fn gen_if<'a>(compiler: &mut Compiler<'a>, if_expr: &IfExpr) -> Result<TypedValue<'a>, Error> {
    let position = &if_expr.span.start;

    let condition = gen_expression(compiler, &if_expr.condition)?;
    let condition = compiler
        .cast_to_type(condition, Type::Bool, "ifcond", &if_expr.condition.get_span().start)?
        .into_int_value();

    let function = compiler.current_function()?;
    let then_block = compiler.context.append_basic_block(function, "then");
    let else_block = compiler.context.append_basic_block(function, "else");
    let merge_block = compiler.context.append_basic_block(function, "ifcont");

    compiler
        .builder
        .build_conditional_branch(condition, then_block, else_block)?;

    compiler.builder.position_at_end(then_block);
    let then_value = gen_expression(compiler, &if_expr.then_branch)?;
    let then_end = compiler.current_block()?;

    compiler.builder.position_at_end(else_block);
    let else_value = gen_expression(compiler, &if_expr.else_branch)?;
    let else_end = compiler.current_block()?;

    let merge_type = resolve_branches(then_value.ty, else_value.ty, position)?;

    compiler.builder.position_at_end(then_end);
    let then_value = compiler.cast_to_type(then_value, merge_type, "thencast", position)?;
    compiler.builder.build_unconditional_branch(merge_block)?;

    compiler.builder.position_at_end(else_end);
    let else_value = compiler.cast_to_type(else_value, merge_type, "elsecast", position)?;
    compiler.builder.build_unconditional_branch(merge_block)?;

    compiler.builder.position_at_end(merge_block);
    let phi_type = compiler
        .convert_type(merge_type)
        .ok_or_else(|| internal_error("if branches merged to void"))?;
    let phi = compiler.builder.build_phi(phi_type, "iftmp")?;
    phi.add_incoming(&[(&then_value, then_end), (&else_value, else_end)]);

    Ok(TypedValue::new(phi.as_basic_value(), merge_type))
}

/// Lowers `while` into `loopcond`/`loopbody`/`afterloop`. The loop itself
/// always evaluates to `0.0`.
pub fn gen_while<'a>(compiler: &mut Compiler<'a>, while_expr: &WhileExpr) -> Result<TypedValue<'a>, Error> {
    let function = compiler.current_function()?;
    let condition_block = compiler.context.append_basic_block(function, "loopcond");
    let body_block = compiler.context.append_basic_block(function, "loopbody");
    let end_block = compiler.context.append_basic_block(function, "afterloop");

    compiler.builder.build_unconditional_branch(condition_block)?;
    compiler.builder.position_at_end(condition_block);

    let condition = gen_expression(compiler, &while_expr.condition)?;
    let condition = compiler
        .cast_to_type(condition, Type::Bool, "loopcond", &while_expr.condition.get_span().start)?
        .into_int_value();
    compiler
        .builder
        .build_conditional_branch(condition, body_block, end_block)?;

    compiler.builder.position_at_end(body_block);
    gen_expression(compiler, &while_expr.body)?;
    compiler.builder.build_unconditional_branch(condition_block)?;

    compiler.builder.position_at_end(end_block);

    Ok(TypedValue::new(
        compiler.context.f64_type().const_zero().into(),
        Type::Double,
    ))
}
