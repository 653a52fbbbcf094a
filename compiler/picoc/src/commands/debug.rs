//! Debug commands: `lex` and `parse` stop after the front end.

use crate::{RunMode, RunOptions};

/// Lex a file and print the token count, or report its malformed tokens.
pub fn lex_file(path: &str, options: &RunOptions) -> i32 {
    let options = RunOptions {
        mode: RunMode::Lex,
        ..options.clone()
    };
    super::execute(path, &options)
}

/// Parse a file and print its function signatures.
pub fn parse_file(path: &str, options: &RunOptions) -> i32 {
    let options = RunOptions {
        mode: RunMode::Parse,
        ..options.clone()
    };
    super::execute(path, &options)
}
