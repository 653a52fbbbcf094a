//! Pico driver.
//!
//! Ties the pipeline together for the `pico` binary and for embedders:
//!
//! ```text
//! source ──► pico_lexer::tokenize ──► pico_parse::parse ──► Interpreter::run
//! ```
//!
//! [`run_source`] runs one compilation unit in a [`RunMode`] and returns
//! what was reported along the way. Errors that end the run early cross the
//! boundary as a [`DriverError`]; runtime errors that execution recovered
//! from are part of the [`RunOutcome`].

pub mod commands;
mod error;

pub use error::DriverError;

use std::sync::Once;

use pico_diagnostic::emitter::{ColorMode, DiagnosticEmitter, TerminalEmitter};
use pico_diagnostic::Diagnostic;
use pico_eval::{
    stdin_handler, stdout_handler, InterpreterBuilder, InterpreterConfig, SharedInputHandler,
    SharedPrintHandler,
};
use pico_ir::Program;

static TRACING_INIT: Once = Once::new();

/// Install the tracing subscriber.
///
/// Does nothing unless `PICO_LOG` or `RUST_LOG` holds a filter, e.g.
/// `PICO_LOG=pico_eval=debug`. Events go to stderr as an indented tree.
/// Safe to call more than once.
pub fn init_tracing() {
    TRACING_INIT.call_once(|| {
        use tracing_subscriber::{prelude::*, EnvFilter};

        let Some(directives) = std::env::var("PICO_LOG")
            .or_else(|_| std::env::var("RUST_LOG"))
            .ok()
        else {
            return;
        };
        let filter = EnvFilter::try_new(&directives).unwrap_or_else(|err| {
            eprintln!("warning: ignoring invalid log filter `{directives}`: {err}");
            EnvFilter::new("warn")
        });
        tracing_subscriber::registry()
            .with(filter)
            .with(
                tracing_tree::HierarchicalLayer::new(2)
                    .with_writer(std::io::stderr)
                    .with_targets(true),
            )
            .init();
    });
}

/// What to do with a source file.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum RunMode {
    /// Lex, parse and execute.
    #[default]
    Run,
    /// Lex only.
    Lex,
    /// Lex and parse only.
    Parse,
    /// Ahead-of-time compilation. Not implemented.
    Compile,
    /// Static type checking. Not implemented.
    CheckTypes,
}

impl RunMode {
    /// Name used in "not implemented" errors.
    pub fn description(self) -> &'static str {
        match self {
            RunMode::Run => "running",
            RunMode::Lex => "lexing",
            RunMode::Parse => "parsing",
            RunMode::Compile => "compilation",
            RunMode::CheckTypes => "type checking",
        }
    }

    pub fn is_implemented(self) -> bool {
        !matches!(self, RunMode::Compile | RunMode::CheckTypes)
    }
}

#[derive(Clone, Debug, Default)]
pub struct RunOptions {
    pub mode: RunMode,
    /// Color mode for diagnostics on stderr.
    pub color: ColorMode,
    /// Render diagnostics to stderr as soon as they are reported, so they
    /// interleave with program output.
    pub echo_diagnostics: bool,
    /// Overrides the interpreter's call depth limit.
    pub max_call_depth: Option<usize>,
}

/// What a completed run reported.
#[derive(Clone, Debug, Default)]
pub struct RunOutcome {
    /// Lexer warnings, then runtime errors and warnings in the order they
    /// were reported.
    pub diagnostics: Vec<Diagnostic>,
    /// One-line result of the `lex` and `parse` modes.
    pub summary: Option<String>,
}

impl RunOutcome {
    pub fn error_count(&self) -> usize {
        self.diagnostics.iter().filter(|d| d.is_error()).count()
    }

    pub fn warning_count(&self) -> usize {
        self.diagnostics.len() - self.error_count()
    }
}

/// Run `source` on stdin and stdout.
///
/// `path` only labels diagnostics.
pub fn run_source(
    path: &str,
    source: &str,
    options: &RunOptions,
) -> Result<RunOutcome, DriverError> {
    run_source_with_io(path, source, options, stdout_handler(), stdin_handler())
}

/// Run `source` with the given output and input handlers.
#[tracing::instrument(
    level = "debug",
    skip(source, options, print, input),
    fields(mode = ?options.mode)
)]
pub fn run_source_with_io(
    path: &str,
    source: &str,
    options: &RunOptions,
    print: SharedPrintHandler,
    input: SharedInputHandler,
) -> Result<RunOutcome, DriverError> {
    if !options.mode.is_implemented() {
        return Err(DriverError::NotImplemented(options.mode.description()));
    }

    let lexed = pico_lexer::tokenize(source);
    let mut outcome = RunOutcome::default();
    if options.echo_diagnostics {
        emit_diagnostics(path, source, options.color, &lexed.diagnostics);
    }
    outcome.diagnostics.extend(lexed.diagnostics.iter().cloned());

    if options.mode == RunMode::Lex {
        let errors: Vec<Diagnostic> = lexed
            .errors()
            .map(|(tok, kind)| pico_lexer::lex_error_diagnostic(kind, tok.span))
            .collect();
        if !errors.is_empty() {
            return Err(DriverError::Lex(errors));
        }
        outcome.summary = Some(format!("{path}: {} tokens", lexed.tokens.len()));
        return Ok(outcome);
    }

    let program = pico_parse::parse(&lexed.tokens, source)?;
    if options.mode == RunMode::Parse {
        outcome.summary = Some(format!("{path}: {}", describe_program(&program)));
        return Ok(outcome);
    }

    let mut config = InterpreterConfig {
        echo_errors: options.echo_diagnostics,
        color: options.color,
        ..InterpreterConfig::default()
    };
    if let Some(depth) = options.max_call_depth {
        config.max_call_depth = depth;
    }
    let mut interpreter = InterpreterBuilder::new()
        .config(config)
        .print_handler(print)
        .input_handler(input)
        .source(source, path)
        .build();
    let result = interpreter.run(&program);
    outcome.diagnostics.extend(
        interpreter
            .take_errors()
            .iter()
            .map(pico_eval::EvalError::to_diagnostic),
    );
    result?;
    Ok(outcome)
}

/// `2 functions: main, helper(a, b)`.
fn describe_program(program: &Program) -> String {
    let signatures: Vec<String> = program
        .functions
        .iter()
        .map(|f| {
            if f.params.is_empty() {
                f.name.clone()
            } else {
                format!("{}({})", f.name, f.params.join(", "))
            }
        })
        .collect();
    let count = signatures.len();
    let noun = if count == 1 { "function" } else { "functions" };
    if count == 0 {
        format!("0 {noun}")
    } else {
        format!("{count} {noun}: {}", signatures.join(", "))
    }
}

/// Render `diagnostics` to stderr with snippets from `source`.
pub fn emit_diagnostics(path: &str, source: &str, color: ColorMode, diagnostics: &[Diagnostic]) {
    if diagnostics.is_empty() {
        return;
    }
    let is_tty = std::io::IsTerminal::is_terminal(&std::io::stderr());
    let mut emitter = TerminalEmitter::stderr(color, is_tty)
        .with_source(source)
        .with_file_path(path);
    emitter.emit_all(diagnostics);
    emitter.flush();
}

/// Render `diagnostics` to a string without colors.
pub fn render_diagnostics(path: &str, source: &str, diagnostics: &[Diagnostic]) -> String {
    let mut emitter = TerminalEmitter::with_color_mode(Vec::new(), ColorMode::Never, false)
        .with_source(source)
        .with_file_path(path);
    emitter.emit_all(diagnostics);
    String::from_utf8_lossy(&emitter.into_inner()).into_owned()
}

#[cfg(test)]
mod tests;
