//! Top-level functions by name, fixed before execution starts.

use std::rc::Rc;

use pico_ir::{Function, Program};
use rustc_hash::FxHashMap;

use crate::errors::{duplicate_function, EvalError};

#[derive(Debug, Default)]
pub struct FunctionTable {
    functions: FxHashMap<String, Rc<Function>>,
}

impl FunctionTable {
    /// Register every function of `program`.
    ///
    /// When a name is defined twice the later definition replaces the
    /// earlier one, and a warning pointing at the later one is returned.
    pub fn from_program(program: &Program) -> (Self, Vec<EvalError>) {
        let mut functions = FxHashMap::default();
        let mut warnings = Vec::new();
        for function in &program.functions {
            let previous = functions.insert(function.name.clone(), Rc::new(function.clone()));
            if previous.is_some() {
                warnings.push(duplicate_function(&function.name).with_span(function.span));
            }
        }
        tracing::debug!(count = functions.len(), "registered functions");
        (FunctionTable { functions }, warnings)
    }

    pub fn get(&self, name: &str) -> Option<Rc<Function>> {
        self.functions.get(name).cloned()
    }

    pub fn contains(&self, name: &str) -> bool {
        self.functions.contains_key(name)
    }

    pub fn len(&self) -> usize {
        self.functions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.functions.is_empty()
    }
}
