//! Command handlers for the `pico` binary.
//!
//! Each handler returns the process exit code. Shared helpers for reading
//! files and reporting failed runs live here.

mod debug;
mod run;

pub use debug::{lex_file, parse_file};
pub use run::run_file;

use pico_diagnostic::emitter::{ColorMode, DiagnosticEmitter, TerminalEmitter};

use crate::{run_source, DriverError, RunOptions};

/// Read a source file.
pub fn read_source(path: &str) -> Result<String, DriverError> {
    std::fs::read_to_string(path).map_err(|source| DriverError::Io {
        path: path.to_string(),
        source,
    })
}

/// Report `err` on stderr and return its exit code.
///
/// Errors with a source position get a snippet; the rest a one-line
/// `error: ...` message.
fn report_failure(path: &str, source: &str, err: &DriverError, color: ColorMode) -> i32 {
    let diagnostics = err.diagnostics();
    if diagnostics.is_empty() {
        eprintln!("error: {err}");
        return err.exit_code();
    }

    let is_tty = std::io::IsTerminal::is_terminal(&std::io::stderr());
    let mut emitter = TerminalEmitter::stderr(color, is_tty)
        .with_source(source)
        .with_file_path(path);
    emitter.emit_all(&diagnostics);
    let errors = diagnostics.iter().filter(|d| d.is_error()).count();
    emitter.emit_summary(errors, diagnostics.len() - errors);
    emitter.flush();
    err.exit_code()
}

/// Read `path` and run it in `options.mode`, echoing diagnostics as they
/// are reported.
fn execute(path: &str, options: &RunOptions) -> i32 {
    if !options.mode.is_implemented() {
        let err = DriverError::NotImplemented(options.mode.description());
        return report_failure(path, "", &err, options.color);
    }
    let source = match read_source(path) {
        Ok(source) => source,
        Err(err) => return report_failure(path, "", &err, options.color),
    };

    let options = RunOptions {
        echo_diagnostics: true,
        ..options.clone()
    };
    match run_source(path, &source, &options) {
        Ok(outcome) => {
            tracing::debug!(
                errors = outcome.error_count(),
                warnings = outcome.warning_count(),
                "run finished"
            );
            if let Some(summary) = outcome.summary {
                println!("{summary}");
            }
            0
        }
        Err(err) => report_failure(path, &source, &err, options.color),
    }
}
