//! The `run` command: lex, parse and execute a Pico source file.

use crate::RunOptions;

/// Run a Pico source file.
///
/// Runtime errors are reported as they happen and do not change the exit
/// code; a parse error or a missing `main` exits with 1. The compile and
/// type-check modes exit with 2.
pub fn run_file(path: &str, options: &RunOptions) -> i32 {
    super::execute(path, options)
}
