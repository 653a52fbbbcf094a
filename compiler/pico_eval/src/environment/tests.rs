use super::*;
use pretty_assertions::assert_eq;

#[test]
fn test_global_tier_outside_calls() {
    let mut env = Environment::new();
    env.assign("x", Value::Int(1));
    assert_eq!(env.lookup("x"), Some(&Value::Int(1)));
    assert_eq!(env.global("x"), Some(&Value::Int(1)));
    assert_eq!(env.depth(), 0);
}

#[test]
fn test_local_shadows_global() {
    let mut env = Environment::new();
    env.define_global("x", Value::Int(1));
    env.push_frame(CallFrame::new("f"));
    env.assign("x", Value::Int(2));

    assert_eq!(env.lookup("x"), Some(&Value::Int(2)));
    assert_eq!(env.global("x"), Some(&Value::Int(1)));

    env.pop_frame();
    assert_eq!(env.lookup("x"), Some(&Value::Int(1)));
}

#[test]
fn test_globals_visible_from_frames() {
    let mut env = Environment::new();
    env.define_global("g", Value::from("shared"));
    env.push_frame(CallFrame::new("f"));
    assert_eq!(env.lookup("g"), Some(&Value::from("shared")));
}

#[test]
fn test_frames_are_isolated() {
    let mut env = Environment::new();
    env.push_frame(CallFrame::new("outer"));
    env.assign("a", Value::Int(1));
    env.push_frame(CallFrame::new("inner"));

    assert_eq!(env.lookup("a"), None);
    assert_eq!(env.current_frame().map(|f| f.function.as_str()), Some("inner"));

    let inner = env.pop_frame().unwrap_or_default();
    assert!(inner.is_empty());
    assert_eq!(env.lookup("a"), Some(&Value::Int(1)));
}

#[test]
fn test_pop_on_empty_stack() {
    let mut env = Environment::new();
    assert!(env.pop_frame().is_none());
}
