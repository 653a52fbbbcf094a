//! Native functions callable from Pico code.
//!
//! Calls consult the registry before user-defined functions, so a builtin
//! shadows a function of the same name. The interpreter starts with an
//! empty registry.

use rustc_hash::FxHashMap;

use crate::Value;

pub trait Builtin {
    fn name(&self) -> &str;

    /// Arity checking is up to the builtin.
    fn call(&self, args: &[Value]) -> Value;
}

#[derive(Default)]
pub struct BuiltinRegistry {
    builtins: FxHashMap<String, Box<dyn Builtin>>,
}

impl BuiltinRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add `builtin`, returning any builtin it replaces.
    pub fn register(&mut self, builtin: Box<dyn Builtin>) -> Option<Box<dyn Builtin>> {
        self.builtins.insert(builtin.name().to_string(), builtin)
    }

    /// Result of the builtin called `name`, or `None` if there is none.
    pub fn call(&self, name: &str, args: &[Value]) -> Option<Value> {
        self.builtins.get(name).map(|builtin| builtin.call(args))
    }

    pub fn contains(&self, name: &str) -> bool {
        self.builtins.contains_key(name)
    }

    pub fn len(&self) -> usize {
        self.builtins.len()
    }

    pub fn is_empty(&self) -> bool {
        self.builtins.is_empty()
    }
}

impl std::fmt::Debug for BuiltinRegistry {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_set().entries(self.builtins.keys()).finish()
    }
}
