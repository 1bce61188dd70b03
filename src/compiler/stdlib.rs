//! Runtime functions the generated code calls into.
//!
//! Output goes through the C library's `printf`, and `^` through the
//! `llvm.pow.f64` intrinsic. Both are declared once per module.

use inkwell::{
    module::Linkage,
    values::{BasicMetadataValueEnum, BasicValueEnum, FloatValue},
    AddressSpace,
};

use crate::{
    ast::{expressions::PrintExpr, types::Type},
    errors::errors::{Error, ErrorImpl},
};

use super::{
    compiler::{internal_error, Compiler, TypedValue},
    expr::gen_expression,
};

pub const PRINTF: &str = "printf";
pub const POW_INTRINSIC: &str = "llvm.pow.f64";

/// Declares `printf` and `llvm.pow.f64` in the module.
pub fn declare_external_functions(compiler: &Compiler) {
    let i8_ptr_type = compiler.context.i8_type().ptr_type(AddressSpace::default());
    let f64_type = compiler.context.f64_type();

    // i32 printf(i8*, ...)
    let printf_type = compiler.context.i32_type().fn_type(&[i8_ptr_type.into()], true);
    compiler
        .module
        .add_function(PRINTF, printf_type, Some(Linkage::External));

    // double llvm.pow.f64(double, double)
    let pow_type = f64_type.fn_type(&[f64_type.into(), f64_type.into()], false);
    compiler.module.add_function(POW_INTRINSIC, pow_type, None);
}

pub fn gen_power<'a>(
    compiler: &Compiler<'a>,
    base: FloatValue<'a>,
    exponent: FloatValue<'a>,
) -> Result<BasicValueEnum<'a>, Error> {
    let pow = compiler.get_function(POW_INTRINSIC)?;

    compiler
        .builder
        .build_call(pow, &[base.into(), exponent.into()], "powtmp")?
        .try_as_basic_value()
        .left()
        .ok_or_else(|| internal_error("llvm.pow.f64 returned no value"))
}

/// Prints a value on its own line: doubles with two decimals, integers
/// in full and booleans as `0`/`1`.
pub fn gen_print<'a>(compiler: &mut Compiler<'a>, print: &PrintExpr) -> Result<TypedValue<'a>, Error> {
    let value = gen_expression(compiler, &print.expression)?;
    let unsupported = || {
        Error::new(
            ErrorImpl::UnsupportedPrintType {
                type_: value.ty.to_string(),
            },
            print.span.start.clone(),
        )
    };
    let raw = value.value.ok_or_else(unsupported)?;

    let (format, name, argument): (&'static str, &str, BasicMetadataValueEnum<'a>) = match value.ty {
        Type::Double => ("%.2f\n", "fmt_double", raw.into()),
        Type::Int => ("%lld\n", "fmt_int", raw.into()),
        Type::Bool => {
            let widened = compiler.builder.build_int_z_extend(
                raw.into_int_value(),
                compiler.context.i32_type(),
                "booltoint",
            )?;
            ("%d\n", "fmt_bool", widened.into())
        }
        Type::Void => return Err(unsupported()),
    };

    let format = compiler.format_string(format, name)?;
    let printf = compiler.get_function(PRINTF)?;
    compiler
        .builder
        .build_call(printf, &[format.into(), argument], "printcall")?;

    Ok(TypedValue::void())
}
