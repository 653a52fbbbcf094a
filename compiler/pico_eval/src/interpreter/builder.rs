//! `InterpreterBuilder` for creating interpreters with non-default I/O.

use super::{Interpreter, InterpreterConfig, SourceInfo};
use crate::builtins::BuiltinRegistry;
use crate::environment::Environment;
use crate::function_table::FunctionTable;
use crate::input_handler::{stdin_handler, SharedInputHandler};
use crate::print_handler::{stdout_handler, SharedPrintHandler};

/// Builder for [`Interpreter`].
///
/// Unset handlers default to stdout and stdin.
#[derive(Default)]
pub struct InterpreterBuilder {
    config: InterpreterConfig,
    print: Option<SharedPrintHandler>,
    input: Option<SharedInputHandler>,
    builtins: BuiltinRegistry,
    source: Option<SourceInfo>,
}

impl InterpreterBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn config(mut self, config: InterpreterConfig) -> Self {
        self.config = config;
        self
    }

    #[must_use]
    pub fn print_handler(mut self, handler: SharedPrintHandler) -> Self {
        self.print = Some(handler);
        self
    }

    #[must_use]
    pub fn input_handler(mut self, handler: SharedInputHandler) -> Self {
        self.input = Some(handler);
        self
    }

    #[must_use]
    pub fn builtins(mut self, builtins: BuiltinRegistry) -> Self {
        self.builtins = builtins;
        self
    }

    /// Source text and path, for snippets in echoed errors.
    #[must_use]
    pub fn source(mut self, text: impl Into<String>, path: impl Into<String>) -> Self {
        self.source = Some(SourceInfo {
            text: text.into(),
            path: path.into(),
        });
        self
    }

    pub fn build(self) -> Interpreter {
        Interpreter {
            env: Environment::new(),
            functions: FunctionTable::default(),
            builtins: self.builtins,
            pending_return: None,
            print: self.print.unwrap_or_else(stdout_handler),
            input: self.input.unwrap_or_else(stdin_handler),
            errors: Vec::new(),
            config: self.config,
            source: self.source,
        }
    }
}
