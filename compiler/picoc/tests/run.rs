//! End-to-end tests: whole programs through `run_source_with_io`.

#![expect(clippy::unwrap_used, reason = "Tests use unwrap for brevity")]

use pico_diagnostic::ErrorCode;
use pico_eval::{buffer_handler, scripted_handler, EvalErrorKind};
use picoc::{run_source_with_io, DriverError, RunMode, RunOptions, RunOutcome};
use pretty_assertions::assert_eq;

struct Run {
    output: String,
    result: Result<RunOutcome, DriverError>,
}

fn run_mode(source: &str, input: &[&str], mode: RunMode) -> Run {
    let print = buffer_handler();
    let options = RunOptions {
        mode,
        ..RunOptions::default()
    };
    let result = run_source_with_io(
        "test.pc",
        source,
        &options,
        print.clone(),
        scripted_handler(input.iter().copied()),
    );
    Run {
        output: print.get_output(),
        result,
    }
}

fn run(source: &str, input: &[&str]) -> Run {
    run_mode(source, input, RunMode::Run)
}

fn codes(outcome: &RunOutcome) -> Vec<ErrorCode> {
    outcome.diagnostics.iter().map(|d| d.code).collect()
}

#[test]
fn test_factorial_demo() {
    let run = run(include_str!("../../../demos/factorial.pc"), &[]);
    assert!(run.result.unwrap().diagnostics.is_empty());
    assert_eq!(run.output, "1\n1\n2\n6\n24\n120\ntrue\n");
}

#[test]
fn test_fizzbuzz_demo() {
    let run = run(include_str!("../../../demos/fizzbuzz.pc"), &[]);
    run.result.unwrap();
    let expected = [
        "1", "2", "Fizz", "4", "Buzz", "Fizz", "7", "8", "Fizz", "Buzz", "11", "Fizz", "13", "14",
        "FizzBuzz",
    ];
    assert_eq!(run.output.lines().collect::<Vec<_>>(), expected);
}

#[test]
fn test_greet_demo_reads_input() {
    let run = run(include_str!("../../../demos/greet.pc"), &["Ada", "41"]);
    run.result.unwrap();
    assert_eq!(
        run.output,
        "Hello, Ada!\n42\n82.000000\n[90, 72.500000, n/a]\n36.250000\n"
    );
}

#[test]
fn test_parse_error_runs_nothing() {
    let run = run("def main() { output \"before\"; output 1 + ; }", &[]);
    let Err(DriverError::Parse(err)) = run.result else {
        panic!("expected a parse error");
    };
    assert_eq!(err.code, ErrorCode::E1002);
    assert_eq!(run.output, "");
}

#[test]
fn test_lexical_error_stops_parse() {
    let run = run("def main() { x = 3 @ 4; }", &[]);
    let err = run.result.unwrap_err();
    assert_eq!(err.exit_code(), 1);
    assert_eq!(err.diagnostics()[0].code, ErrorCode::E0001);
}

#[test]
fn test_missing_main_exits_with_error() {
    let run = run("def helper() { output 1; }", &[]);
    let Err(DriverError::Runtime(err)) = run.result else {
        panic!("expected a missing main error");
    };
    assert_eq!(err.kind, EvalErrorKind::NoMain);
    assert_eq!(run.output, "");
}

#[test]
fn test_runtime_errors_are_collected() {
    let run = run(
        "def main() { output 1 / 0; output missing; xs = [1]; output xs[3]; output \"end\"; }",
        &[],
    );
    let outcome = run.result.unwrap();
    assert_eq!(run.output, "0.000000\nundefined\nundefined\nend\n");
    assert_eq!(
        codes(&outcome),
        vec![ErrorCode::E6008, ErrorCode::E6003, ErrorCode::E6007]
    );
    assert_eq!(outcome.error_count(), 3);
}

#[test]
fn test_warnings_do_not_fail_the_run() {
    let run = run(
        "def f() { return 1; } def f() { return 2; } def main() { output f(); } /* open",
        &[],
    );
    let outcome = run.result.unwrap();
    assert_eq!(run.output, "2\n");
    assert_eq!(codes(&outcome), vec![ErrorCode::W0001, ErrorCode::W6001]);
    assert_eq!(outcome.error_count(), 0);
    assert_eq!(outcome.warning_count(), 2);
}

#[test]
fn test_compile_and_check_are_not_implemented() {
    for (mode, name) in [
        (RunMode::Compile, "compilation"),
        (RunMode::CheckTypes, "type checking"),
    ] {
        let run = run_mode("def main() { output 1; }", &[], mode);
        let err = run.result.unwrap_err();
        assert_eq!(err.to_string(), format!("{name} is not implemented"));
        assert_eq!(err.exit_code(), 2);
        assert_eq!(run.output, "");
    }
}

#[test]
fn test_lex_mode_counts_tokens() {
    let run = run_mode("def main() { output 1; }", &[], RunMode::Lex);
    let outcome = run.result.unwrap();
    assert_eq!(outcome.summary.as_deref(), Some("test.pc: 9 tokens"));
    assert_eq!(run.output, "");
}

#[test]
fn test_lex_mode_reports_every_bad_token() {
    let run = run_mode("def main() { x = @; y = 1..2; z = '\\q'; }", &[], RunMode::Lex);
    let Err(DriverError::Lex(diagnostics)) = run.result else {
        panic!("expected lexical errors");
    };
    let codes: Vec<_> = diagnostics.iter().map(|d| d.code).collect();
    assert_eq!(codes, vec![ErrorCode::E0001, ErrorCode::E0002, ErrorCode::E0004]);
}

#[test]
fn test_parse_mode_does_not_execute() {
    let run = run_mode(
        "def main() { output \"ran\"; } def add(a, b) { return a + b; }",
        &[],
        RunMode::Parse,
    );
    let outcome = run.result.unwrap();
    assert_eq!(
        outcome.summary.as_deref(),
        Some("test.pc: 2 functions: main, add(a, b)")
    );
    assert_eq!(run.output, "");
}

#[test]
fn test_call_depth_option() {
    let print = buffer_handler();
    let options = RunOptions {
        max_call_depth: Some(10),
        ..RunOptions::default()
    };
    let outcome = run_source_with_io(
        "test.pc",
        "def f(n) { return f(n + 1); } def main() { output f(0); }",
        &options,
        print.clone(),
        scripted_handler(Vec::<String>::new()),
    )
    .unwrap();
    assert_eq!(print.get_output(), "undefined\n");
    assert_eq!(codes(&outcome), vec![ErrorCode::E6011]);
}
