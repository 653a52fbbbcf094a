#![expect(clippy::unwrap_used, reason = "Tests use unwrap for brevity")]

use pico_diagnostic::ErrorCode;
use pretty_assertions::assert_eq;

use super::*;

#[test]
fn test_describe_program_lists_signatures() {
    let program = pico_parse::parse_source("def add(a, b) { return a + b; } def main() { }").unwrap();
    assert_eq!(describe_program(&program), "2 functions: add(a, b), main");

    let single = pico_parse::parse_source("def main() { }").unwrap();
    assert_eq!(describe_program(&single), "1 function: main");

    let empty = pico_parse::parse_source("// nothing here").unwrap();
    assert_eq!(describe_program(&empty), "0 functions");
}

#[test]
fn test_unimplemented_modes() {
    assert!(RunMode::Run.is_implemented());
    assert!(RunMode::Lex.is_implemented());
    assert!(RunMode::Parse.is_implemented());
    assert!(!RunMode::Compile.is_implemented());
    assert!(!RunMode::CheckTypes.is_implemented());
}

#[test]
fn test_driver_error_exit_codes() {
    assert_eq!(DriverError::NotImplemented("compilation").exit_code(), 2);
    assert_eq!(
        DriverError::NotImplemented("type checking").to_string(),
        "type checking is not implemented"
    );

    let parse = pico_parse::parse_source("def main(").unwrap_err();
    let err = DriverError::from(parse);
    assert_eq!(err.exit_code(), 1);
    assert_eq!(err.diagnostics().len(), 1);
    assert_eq!(err.diagnostics()[0].code, ErrorCode::E1006);
}

#[test]
fn test_io_error_messages() {
    let err = commands::read_source("/definitely/not/here.pc").unwrap_err();
    assert_eq!(err.to_string(), "cannot find file '/definitely/not/here.pc'");
    assert!(err.diagnostics().is_empty());
    assert_eq!(err.exit_code(), 1);
}

#[test]
fn test_render_diagnostics_points_at_column() {
    let source = "def main() { output 1 + ; }";
    let err = DriverError::from(pico_parse::parse_source(source).unwrap_err());
    let rendered = render_diagnostics("t.pc", source, &err.diagnostics());
    assert!(
        rendered.starts_with("error[E1002]: expected expression, found `;`\n"),
        "{rendered}"
    );
    assert!(rendered.contains("--> t.pc:1:25"), "{rendered}");
    assert!(rendered.contains("1 | def main() { output 1 + ; }"), "{rendered}");
}

#[test]
fn test_outcome_counts() {
    let outcome = RunOutcome {
        diagnostics: vec![
            Diagnostic::error(ErrorCode::E6003),
            Diagnostic::warning(ErrorCode::W6001),
            Diagnostic::error(ErrorCode::E6008),
        ],
        summary: None,
    };
    assert_eq!(outcome.error_count(), 2);
    assert_eq!(outcome.warning_count(), 1);
}
