#![expect(clippy::unwrap_used, reason = "Tests use unwrap for brevity")]

use super::*;
use pretty_assertions::assert_eq;

#[test]
fn scripted_lines_then_end_of_input() {
    let handler = scripted_handler(["first", "second"]);
    assert_eq!(handler.read_line().unwrap(), "first");
    assert_eq!(handler.read_line().unwrap(), "second");
    assert_eq!(handler.read_line().unwrap(), "");
    assert_eq!(handler.read_line().unwrap(), "");
}

#[test]
fn scripted_remaining_count() {
    let handler = ScriptedInputHandler::new(vec![String::from("a")]);
    assert_eq!(handler.remaining(), 1);
    handler.read_line();
    assert_eq!(handler.remaining(), 0);
}

#[test]
fn line_endings_are_stripped() {
    assert_eq!(strip_line_ending("abc\n".to_string()), "abc");
    assert_eq!(strip_line_ending("abc\r\n".to_string()), "abc");
    assert_eq!(strip_line_ending("abc".to_string()), "abc");
    assert_eq!(strip_line_ending("a\rb\n".to_string()), "a\rb");
    assert_eq!(strip_line_ending("\n".to_string()), "");
}
