//! Variable storage for the interpreter.
//!
//! Two tiers only: one global map alive for the whole run, and one local
//! frame per active call. Blocks, `if` and `for` do not open scopes. Lookup
//! tries the innermost frame, then the globals; assignment always targets
//! the innermost frame when one exists.

use rustc_hash::FxHashMap;

use crate::Value;

/// Locals of one function invocation.
#[derive(Clone, Debug, Default)]
pub struct CallFrame {
    /// Name of the function this frame belongs to.
    pub function: String,
    locals: FxHashMap<String, Value>,
}

impl CallFrame {
    pub fn new(function: impl Into<String>) -> Self {
        CallFrame {
            function: function.into(),
            locals: FxHashMap::default(),
        }
    }

    #[inline]
    pub fn get(&self, name: &str) -> Option<&Value> {
        self.locals.get(name)
    }

    #[inline]
    pub fn set(&mut self, name: impl Into<String>, value: Value) {
        self.locals.insert(name.into(), value);
    }

    pub fn len(&self) -> usize {
        self.locals.len()
    }

    pub fn is_empty(&self) -> bool {
        self.locals.is_empty()
    }
}

#[derive(Debug, Default)]
pub struct Environment {
    globals: FxHashMap<String, Value>,
    frames: Vec<CallFrame>,
}

impl Environment {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of active call frames.
    pub fn depth(&self) -> usize {
        self.frames.len()
    }

    #[inline]
    pub fn push_frame(&mut self, frame: CallFrame) {
        tracing::debug!(function = %frame.function, depth = self.frames.len() + 1, "push frame");
        self.frames.push(frame);
    }

    #[inline]
    pub fn pop_frame(&mut self) -> Option<CallFrame> {
        let frame = self.frames.pop();
        if let Some(frame) = &frame {
            tracing::debug!(function = %frame.function, depth = self.frames.len(), "pop frame");
        }
        frame
    }

    pub fn current_frame(&self) -> Option<&CallFrame> {
        self.frames.last()
    }

    /// Innermost frame's binding first, then the global one.
    #[inline]
    pub fn lookup(&self, name: &str) -> Option<&Value> {
        self.frames
            .last()
            .and_then(|frame| frame.get(name))
            .or_else(|| self.globals.get(name))
    }

    /// Bind `name` in the innermost frame, or globally outside any call.
    /// A global is never reached from inside a call.
    #[inline]
    pub fn assign(&mut self, name: &str, value: Value) {
        match self.frames.last_mut() {
            Some(frame) => frame.set(name, value),
            None => {
                self.globals.insert(name.to_string(), value);
            }
        }
    }

    pub fn define_global(&mut self, name: impl Into<String>, value: Value) {
        self.globals.insert(name.into(), value);
    }

    pub fn global(&self, name: &str) -> Option<&Value> {
        self.globals.get(name)
    }
}

#[cfg(test)]
mod tests;
