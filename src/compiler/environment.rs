//! The symbol table.
//!
//! The language has a single flat scope: every variable lives from its
//! declaration to the end of the program. Names are kept sorted, which
//! is also the order unknown-name suggestions are listed in.

use std::collections::BTreeMap;

use inkwell::values::PointerValue;

use crate::{
    ast::types::Type,
    errors::{
        errors::{Error, ErrorImpl},
        suggestions::suggest_names,
    },
    Position,
};

/// A declared variable: its stack slot and declared type.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Variable<'a> {
    pub pointer: PointerValue<'a>,
    pub ty: Type,
}

#[derive(Debug, Default)]
pub struct Environment<'a> {
    variable_lookup: BTreeMap<String, Variable<'a>>,
}

impl<'a> Environment<'a> {
    pub fn new() -> Self {
        Environment {
            variable_lookup: BTreeMap::new(),
        }
    }

    pub fn declare_variable(
        &mut self,
        variable_name: String,
        variable: Variable<'a>,
        current_position: Position,
    ) -> Result<(), Error> {
        if self.variable_lookup.contains_key(&variable_name) {
            Err(Error::new(
                ErrorImpl::VariableAlreadyDeclared {
                    variable: variable_name,
                },
                current_position,
            ))
        } else {
            self.variable_lookup.insert(variable_name, variable);
            Ok(())
        }
    }

    pub fn get_variable(&self, variable_name: &str) -> Option<&Variable<'a>> {
        self.variable_lookup.get(variable_name)
    }

    /// Looks up a variable, failing with a reference error that lists
    /// similarly spelled names.
    pub fn resolve(&self, variable_name: &str, position: &Position) -> Result<Variable<'a>, Error> {
        self.get_variable(variable_name)
            .copied()
            .ok_or_else(|| self.unknown_variable_error(variable_name, position))
    }

    pub fn unknown_variable_error(&self, variable_name: &str, position: &Position) -> Error {
        Error::new(
            ErrorImpl::UnknownVariable {
                variable: String::from(variable_name),
                suggestions: suggest_names(variable_name, self.variable_lookup.keys()),
            },
            position.clone(),
        )
    }

    pub fn names(&self) -> impl Iterator<Item = &String> {
        self.variable_lookup.keys()
    }

    pub fn len(&self) -> usize {
        self.variable_lookup.len()
    }

    pub fn is_empty(&self) -> bool {
        self.variable_lookup.is_empty()
    }
}
