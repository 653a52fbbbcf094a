//! Tree-walking interpreter for Pico.
//!
//! `evaluate` turns an expression into a [`Value`]; `execute` runs a
//! statement for its effect. A `return` does not unwind: it stores the
//! pending return value, and every enclosing block and loop stops as soon
//! as one is pending. The call boundary in `call_function` collects it.
//!
//! - `eval.rs`: expressions
//! - `exec.rs`: statements
//! - `call.rs`: function call dispatch
//! - `builder.rs`: `InterpreterBuilder`

mod builder;
mod call;
mod eval;
mod exec;

pub use builder::InterpreterBuilder;

use std::io::IsTerminal;

use pico_diagnostic::emitter::{ColorMode, DiagnosticEmitter, TerminalEmitter};
use pico_ir::Program;

use crate::builtins::BuiltinRegistry;
use crate::environment::Environment;
use crate::errors::{main_has_params, no_main, EvalError};
use crate::function_table::FunctionTable;
use crate::input_handler::SharedInputHandler;
use crate::print_handler::SharedPrintHandler;
use crate::Value;

/// Default limit on nested calls.
pub const DEFAULT_MAX_CALL_DEPTH: usize = 10_000;

#[derive(Clone, Debug)]
pub struct InterpreterConfig {
    /// Render each runtime error to stderr as it is reported.
    pub echo_errors: bool,
    /// Color mode for echoed errors.
    pub color: ColorMode,
    /// Calls nested deeper than this fail with a runtime error.
    pub max_call_depth: usize,
}

impl Default for InterpreterConfig {
    fn default() -> Self {
        InterpreterConfig {
            echo_errors: false,
            color: ColorMode::Auto,
            max_call_depth: DEFAULT_MAX_CALL_DEPTH,
        }
    }
}

/// Source text used to render echoed errors with a snippet.
#[derive(Clone, Debug)]
struct SourceInfo {
    text: String,
    path: String,
}

pub struct Interpreter {
    env: Environment,
    functions: FunctionTable,
    builtins: BuiltinRegistry,
    /// Set by `return`, taken by the enclosing call.
    pending_return: Option<Value>,
    print: SharedPrintHandler,
    input: SharedInputHandler,
    errors: Vec<EvalError>,
    config: InterpreterConfig,
    source: Option<SourceInfo>,
}

impl Interpreter {
    /// Interpreter on stdin and stdout with the default configuration.
    pub fn new() -> Self {
        InterpreterBuilder::new().build()
    }

    /// Register the program's functions and call `main`.
    ///
    /// Fails only when `main` is missing or declares parameters; those
    /// errors are returned, not reported. Runtime errors raised while
    /// `main` runs are reported and available from [`Interpreter::errors`].
    #[tracing::instrument(level = "debug", skip_all)]
    pub fn run(&mut self, program: &Program) -> Result<(), EvalError> {
        let (functions, warnings) = FunctionTable::from_program(program);
        self.functions = functions;
        for warning in warnings {
            self.report(warning);
        }

        let Some(main) = self.functions.get("main") else {
            return Err(no_main());
        };
        if !main.params.is_empty() {
            return Err(main_has_params(main.params.len()).with_span(main.span));
        }

        self.call_function("main", Vec::new(), main.span);
        tracing::debug!(errors = self.errors.len(), "program finished");
        Ok(())
    }

    /// Runtime errors and warnings reported so far, in order.
    pub fn errors(&self) -> &[EvalError] {
        &self.errors
    }

    pub fn take_errors(&mut self) -> Vec<EvalError> {
        std::mem::take(&mut self.errors)
    }

    pub fn environment(&self) -> &Environment {
        &self.env
    }

    /// Record a non-fatal error and return what the failed operation
    /// evaluates to.
    pub(crate) fn fail(&mut self, error: EvalError) -> Value {
        let fallback = error.fallback();
        self.report(error);
        fallback
    }

    fn report(&mut self, error: EvalError) {
        tracing::debug!(code = %error.code(), position = error.span.start, "{error}");
        if self.config.echo_errors {
            self.echo(&error);
        }
        self.errors.push(error);
    }

    fn echo(&self, error: &EvalError) {
        let stderr = std::io::stderr();
        let is_tty = stderr.is_terminal();
        let mut emitter = TerminalEmitter::with_color_mode(stderr, self.config.color, is_tty);
        if let Some(source) = &self.source {
            emitter = emitter
                .with_source(&source.text)
                .with_file_path(source.path.clone());
        }
        emitter.emit(&error.to_diagnostic());
        emitter.flush();
    }
}

impl Default for Interpreter {
    fn default() -> Self {
        Self::new()
    }
}
