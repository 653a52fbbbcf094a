//! Parser tests.

#![expect(clippy::unwrap_used, reason = "Tests use unwrap for brevity")]

mod parser;

use pico_ir::Program;

use crate::{parse_source, ParseError};

pub(crate) fn parse_ok(source: &str) -> Program {
    match parse_source(source) {
        Ok(program) => program,
        Err(err) => panic!("unexpected parse error in {source:?}: {err}"),
    }
}

pub(crate) fn parse_err(source: &str) -> ParseError {
    parse_source(source).unwrap_err()
}
