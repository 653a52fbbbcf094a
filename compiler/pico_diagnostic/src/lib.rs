//! Diagnostic system for Pico.
//!
//! A [`Diagnostic`] carries:
//! - an [`ErrorCode`] identifying the problem and the phase that found it
//! - a message saying what went wrong
//! - labeled spans saying where
//! - notes and suggestions
//!
//! Diagnostics are plain data. Rendering is the job of an emitter; see
//! [`emitter::TerminalEmitter`], which prints the offending source line with
//! a caret under the reported column.

mod diagnostic;
pub mod emitter;
mod error_code;
pub mod span_utils;

pub use diagnostic::{Diagnostic, Label, Severity};
pub use error_code::ErrorCode;
