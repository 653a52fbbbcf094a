//! Function call dispatch.

use pico_ir::Span;
use pico_stack::ensure_sufficient_stack;

use super::Interpreter;
use crate::environment::CallFrame;
use crate::errors::{call_depth_exceeded, undefined_function, wrong_arg_count};
use crate::Value;

impl Interpreter {
    /// Call `name` with already evaluated arguments.
    ///
    /// Builtins are tried first, then user functions. An unknown name or a
    /// wrong argument count is reported and yields `Undefined` without
    /// running anything. A function that finishes without `return`
    /// yields `Undefined`.
    #[tracing::instrument(level = "debug", skip(self, args, span), fields(argc = args.len()))]
    pub fn call_function(&mut self, name: &str, args: Vec<Value>, span: Span) -> Value {
        if let Some(value) = self.builtins.call(name, &args) {
            return value;
        }

        let Some(function) = self.functions.get(name) else {
            return self.fail(undefined_function(name).with_span(span));
        };
        if args.len() != function.params.len() {
            let err = wrong_arg_count(name, function.params.len(), args.len());
            return self.fail(err.with_span(span));
        }
        if self.env.depth() >= self.config.max_call_depth {
            let err = call_depth_exceeded(self.config.max_call_depth);
            return self.fail(err.with_span(span));
        }

        let mut frame = CallFrame::new(name);
        for (param, arg) in function.params.iter().zip(args) {
            frame.set(param.as_str(), arg);
        }

        self.env.push_frame(frame);
        self.pending_return = None;
        ensure_sufficient_stack(|| self.execute_block(&function.body));
        self.env.pop_frame();

        self.pending_return.take().unwrap_or_default()
    }
}
