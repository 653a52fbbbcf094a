//! Errors that end a driver run.

use pico_diagnostic::Diagnostic;
use pico_eval::EvalError;
use pico_parse::ParseError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum DriverError {
    #[error("{}", describe_io(.path, .source))]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },
    /// Malformed tokens found by `pico lex`.
    #[error("malformed tokens found: {}", .0.len())]
    Lex(Vec<Diagnostic>),
    #[error(transparent)]
    Parse(#[from] ParseError),
    /// `main` is missing or takes parameters.
    #[error(transparent)]
    Runtime(#[from] EvalError),
    #[error("{0} is not implemented")]
    NotImplemented(&'static str),
}

impl DriverError {
    /// Process exit code for this error.
    pub fn exit_code(&self) -> i32 {
        match self {
            DriverError::NotImplemented(_) => 2,
            _ => 1,
        }
    }

    /// Diagnostics to render with a source snippet. Empty for errors that
    /// have no position in the source.
    pub fn diagnostics(&self) -> Vec<Diagnostic> {
        match self {
            DriverError::Lex(diagnostics) => diagnostics.clone(),
            DriverError::Parse(err) => vec![err.to_diagnostic()],
            DriverError::Runtime(err) => vec![err.to_diagnostic()],
            DriverError::Io { .. } | DriverError::NotImplemented(_) => Vec::new(),
        }
    }
}

fn describe_io(path: &str, err: &std::io::Error) -> String {
    match err.kind() {
        std::io::ErrorKind::NotFound => format!("cannot find file '{path}'"),
        std::io::ErrorKind::PermissionDenied => format!("permission denied reading '{path}'"),
        std::io::ErrorKind::InvalidData => format!("'{path}' contains invalid UTF-8 data"),
        _ => format!("error reading '{path}': {err}"),
    }
}
