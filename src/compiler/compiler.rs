//! Main compiler module.
//!
//! This module contains the core Compiler structure and drives lowering
//! from the AST to a verified LLVM module. It owns the LLVM module and
//! builder, the symbol table and the interned `printf` format strings.

use std::{collections::HashMap, path::Path, time::Instant};

use inkwell::{
    attributes::{Attribute, AttributeLoc},
    basic_block::BasicBlock,
    builder::Builder,
    context::Context,
    module::{Linkage, Module},
    targets::{CodeModel, InitializationConfig, RelocMode, Target, TargetMachine},
    types::{BasicTypeEnum, FunctionType},
    values::{BasicValueEnum, FunctionValue, PointerValue},
    FloatPredicate, IntPredicate, OptimizationLevel,
};

use crate::{
    ast::{expressions::BlockExpr, types::Type},
    errors::errors::{Error, ErrorImpl},
    type_checker::type_checker::{classify_cast, Cast},
    Position,
};

use super::{control_flow::gen_block, environment::Environment, stdlib::declare_external_functions};

/// A lowered value together with its static type.
///
/// `value` is `None` exactly when `ty` is `Type::Void`.
#[derive(Debug, Clone, Copy)]
pub struct TypedValue<'a> {
    pub value: Option<BasicValueEnum<'a>>,
    pub ty: Type,
}

impl<'a> TypedValue<'a> {
    pub fn new(value: BasicValueEnum<'a>, ty: Type) -> Self {
        TypedValue {
            value: Some(value),
            ty,
        }
    }

    pub fn void() -> Self {
        TypedValue {
            value: None,
            ty: Type::Void,
        }
    }
}

/// The main compiler structure that holds the state of the compilation process.
///
/// # Type Parameters
///
/// * `'a` - Lifetime of the LLVM context
pub struct Compiler<'a> {
    /// Reference to the LLVM context
    pub context: &'a Context,
    /// The LLVM module being built
    pub module: Module<'a>,
    /// The LLVM IR builder
    pub builder: Builder<'a>,
    /// Every declared variable, by name
    pub environment: Environment<'a>,
    /// `main`, once created. Allocas go into its entry block.
    pub main_function: Option<FunctionValue<'a>>,
    /// Format strings already emitted, keyed by their text
    format_strings: HashMap<&'static str, PointerValue<'a>>,
}

impl<'a> Compiler<'a> {
    /// Creates a new Compiler with an empty module named after `file_name`.
    pub fn new(context: &'a Context, file_name: &str) -> Self {
        Compiler {
            context,
            module: context.create_module(file_name),
            builder: context.create_builder(),
            environment: Environment::new(),
            main_function: None,
            format_strings: HashMap::new(),
        }
    }

    /// Returns the textual IR of the module.
    pub fn print_to_string(&self) -> String {
        self.module.print_to_string().to_string()
    }

    /// Saves the current LLVM module to a file as textual IR.
    pub fn save_module_to_file(&self, output_file: &Path) -> Result<(), Error> {
        self.module.print_to_file(output_file).map_err(|message| {
            Error::new(
                ErrorImpl::WriteFailed {
                    path: output_file.display().to_string(),
                    message: message.to_string(),
                },
                Position::null(),
            )
        })
    }

    /// Lowers the whole program into `main`.
    ///
    /// This function:
    /// 1. Sets the module triple and data layout for the host
    /// 2. Declares `printf` and `llvm.pow.f64`
    /// 3. Creates the main function
    /// 4. Generates IR for the program
    /// 5. Returns 0 from main
    /// 6. Verifies the module
    fn compile(&mut self, ast: &BlockExpr) -> Result<(), Error> {
        let started = Instant::now();

        self.configure_target()?;
        declare_external_functions(self);

        let main_function = self.create_function("main", self.context.i32_type().fn_type(&[], false));
        self.main_function = Some(main_function);

        gen_block(self, ast)?;

        self.builder
            .build_return(Some(&self.context.i32_type().const_zero()))?;

        self.module.verify().map_err(|message| {
            Error::new(
                ErrorImpl::InvalidModule {
                    message: message.to_string(),
                },
                Position::null(),
            )
        })?;

        tracing::debug!(
            variables = self.environment.len(),
            elapsed_us = started.elapsed().as_micros() as u64,
            "lowered program"
        );

        Ok(())
    }

    fn configure_target(&self) -> Result<(), Error> {
        let target_error = |message: String| Error::new(ErrorImpl::TargetError { message }, Position::null());

        Target::initialize_native(&InitializationConfig::default()).map_err(target_error)?;
        let target_triple = TargetMachine::get_default_triple();
        let target = Target::from_triple(&target_triple).map_err(|message| target_error(message.to_string()))?;
        let target_machine = target
            .create_target_machine(
                &target_triple,
                "generic",
                "",
                OptimizationLevel::None,
                RelocMode::PIC,
                CodeModel::Default,
            )
            .ok_or_else(|| target_error(String::from("no target machine for the host triple")))?;

        self.module.set_triple(&target_triple);
        self.module
            .set_data_layout(&target_machine.get_target_data().get_data_layout());

        Ok(())
    }

    /// Maps a language type to its IR type. `Void` has none.
    pub fn convert_type(&self, ty: Type) -> Option<BasicTypeEnum<'a>> {
        match ty {
            Type::Bool => Some(self.context.bool_type().into()),
            Type::Int => Some(self.context.i64_type().into()),
            Type::Double => Some(self.context.f64_type().into()),
            Type::Void => None,
        }
    }

    /// Converts `value` to `to`, emitting the conversion at the builder's
    /// current position.
    pub fn cast_to_type(
        &self,
        value: TypedValue<'a>,
        to: Type,
        name: &str,
        position: &Position,
    ) -> Result<BasicValueEnum<'a>, Error> {
        let cast = classify_cast(value.ty, to, position)?;
        let raw = value.value.ok_or_else(|| {
            Error::new(
                ErrorImpl::MissingValue {
                    context: format!("an expression of type {}", value.ty),
                },
                position.clone(),
            )
        })?;

        let i64_type = self.context.i64_type();
        let f64_type = self.context.f64_type();

        let converted: BasicValueEnum<'a> = match cast {
            Cast::Identity => raw,
            Cast::IntToDouble => self
                .builder
                .build_signed_int_to_float(raw.into_int_value(), f64_type, name)?
                .into(),
            Cast::BoolToInt => self
                .builder
                .build_int_z_extend(raw.into_int_value(), i64_type, name)?
                .into(),
            Cast::BoolToDouble => self
                .builder
                .build_unsigned_int_to_float(raw.into_int_value(), f64_type, name)?
                .into(),
            Cast::DoubleToInt => self
                .builder
                .build_float_to_signed_int(raw.into_float_value(), i64_type, name)?
                .into(),
            Cast::DoubleToBool => self
                .builder
                .build_float_compare(
                    FloatPredicate::ONE,
                    raw.into_float_value(),
                    f64_type.const_zero(),
                    name,
                )?
                .into(),
            Cast::IntToBool => self
                .builder
                .build_int_compare(IntPredicate::NE, raw.into_int_value(), i64_type.const_zero(), name)?
                .into(),
        };

        Ok(converted)
    }

    /// Creates a stack slot at the top of `main`'s entry block, so every
    /// variable has exactly one slot no matter where it is declared.
    pub fn create_entry_block_alloca(&self, ty: Type, name: &str) -> Result<PointerValue<'a>, Error> {
        let entry = self
            .main_function
            .and_then(|function| function.get_first_basic_block())
            .ok_or_else(|| internal_error("main has no entry block"))?;
        let llvm_type = self
            .convert_type(ty)
            .ok_or_else(|| internal_error("cannot allocate a void variable"))?;

        let builder = self.context.create_builder();
        match entry.get_first_instruction() {
            Some(instruction) => builder.position_before(&instruction),
            None => builder.position_at_end(entry),
        }

        Ok(builder.build_alloca(llvm_type, name)?)
    }

    /// Returns a pointer to the global holding `format`, emitting it on
    /// first use.
    pub fn format_string(&mut self, format: &'static str, name: &str) -> Result<PointerValue<'a>, Error> {
        if let Some(pointer) = self.format_strings.get(format) {
            return Ok(*pointer);
        }

        let pointer = self
            .builder
            .build_global_string_ptr(format, name)?
            .as_pointer_value();
        self.format_strings.insert(format, pointer);

        Ok(pointer)
    }

    pub fn get_function(&self, name: &str) -> Result<FunctionValue<'a>, Error> {
        self.module
            .get_function(name)
            .ok_or_else(|| internal_error(&format!("function '{}' is not declared", name)))
    }

    /// The block the builder is currently appending to.
    pub fn current_block(&self) -> Result<BasicBlock<'a>, Error> {
        self.builder
            .get_insert_block()
            .ok_or_else(|| internal_error("the builder is not positioned in a block"))
    }

    pub fn current_function(&self) -> Result<FunctionValue<'a>, Error> {
        self.current_block()?
            .get_parent()
            .ok_or_else(|| internal_error("the current block has no parent function"))
    }

    /// Creates a new function in the module and positions the builder at
    /// the end of its entry block.
    ///
    /// If the function already exists, it reuses the existing declaration.
    /// Adds function attributes like 'uwtable' and 'nounwind'.
    pub fn create_function(&self, name: &str, function_type: FunctionType<'a>) -> FunctionValue<'a> {
        let function = self
            .module
            .get_function(name)
            .unwrap_or_else(|| self.module.add_function(name, function_type, Some(Linkage::External)));

        let entry = self.context.append_basic_block(function, "entry");
        self.builder.position_at_end(entry);

        // Add function attributes
        let attributes = [
            self.context
                .create_enum_attribute(Attribute::get_named_enum_kind_id("uwtable"), 0),
            self.context
                .create_enum_attribute(Attribute::get_named_enum_kind_id("nounwind"), 0),
        ];

        for attribute in attributes.iter() {
            function.add_attribute(AttributeLoc::Function, *attribute);
        }

        function
    }
}

/// A failure that can only come from a bug in lowering.
pub fn internal_error(message: &str) -> Error {
    Error::new(
        ErrorImpl::BuilderError {
            message: String::from(message),
        },
        Position::null(),
    )
}

/// Lowers a parsed program into a verified module.
///
/// The returned compiler owns the module; use `print_to_string` or
/// `save_module_to_file` to get the IR out.
#[tracing::instrument(skip_all, fields(file = file_name, expressions = ast.body.len()))]
pub fn compile<'a>(ast: &BlockExpr, file_name: &str, context: &'a Context) -> Result<Compiler<'a>, Error> {
    let mut compiler = Compiler::new(context, file_name);

    compiler.compile(ast)?;

    Ok(compiler)
}
