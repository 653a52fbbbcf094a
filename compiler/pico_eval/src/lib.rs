//! Pico Eval - runtime values and tree-walking interpreter for Pico.
//!
//! # Architecture
//!
//! - `Value`: the dynamic runtime value, plus the coercions in `value`
//! - `evaluate_binary` / `evaluate_unary`: operator semantics
//! - `Environment`: globals and one local frame per active call
//! - `FunctionTable`: top-level functions, fixed before `main` runs
//! - `Interpreter`: `evaluate`, `execute` and `call_function`
//!
//! Runtime errors are values ([`EvalError`]). Apart from a missing or
//! malformed `main`, they are reported and execution continues.

mod builtins;
mod environment;
pub mod errors;
mod function_table;
mod input_handler;
pub mod interpreter;
mod operators;
mod print_handler;
mod value;

pub use builtins::{Builtin, BuiltinRegistry};
pub use environment::{CallFrame, Environment};
pub use errors::{EvalError, EvalErrorKind, EvalResult};
pub use function_table::FunctionTable;
pub use input_handler::{
    scripted_handler, stdin_handler, InputHandlerImpl, ScriptedInputHandler, SharedInputHandler,
    StdinInputHandler,
};
pub use interpreter::{Interpreter, InterpreterBuilder, InterpreterConfig};
pub use operators::{evaluate_binary, evaluate_unary};
pub use print_handler::{
    buffer_handler, silent_handler, stdout_handler, BufferPrintHandler, PrintHandlerImpl,
    SharedPrintHandler, StdoutPrintHandler,
};
pub use value::{is_numeric, numeric_value, string_to_number, to_boolean, Value};
