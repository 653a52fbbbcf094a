//! Diagnostic emitters.
//!
//! Emitters decide how diagnostics look. The toolchain ships a single
//! human-readable [`TerminalEmitter`]; anything implementing
//! [`DiagnosticEmitter`] can stand in for it (tests collect into a buffer).

mod terminal;

pub use terminal::{ColorMode, TerminalEmitter};

use crate::Diagnostic;

/// Sink for rendered diagnostics.
pub trait DiagnosticEmitter {
    fn emit(&mut self, diagnostic: &Diagnostic);

    fn emit_all(&mut self, diagnostics: &[Diagnostic]) {
        for diag in diagnostics {
            self.emit(diag);
        }
    }

    fn flush(&mut self);

    /// Closing line such as `error: aborting due to previous error`.
    fn emit_summary(&mut self, error_count: usize, warning_count: usize);
}
