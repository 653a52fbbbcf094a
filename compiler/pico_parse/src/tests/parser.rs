use pico_ir::{BinaryOp, ExprKind, Literal, Span, StmtKind, UnaryOp};
use pretty_assertions::assert_eq;

use super::parse_ok;

fn main_body(source: &str) -> Vec<StmtKind> {
    let program = parse_ok(source);
    let main = program.function("main").unwrap();
    main.body.stmts.iter().map(|s| s.kind.clone()).collect()
}

fn output_expr(expr_src: &str) -> ExprKind {
    let source = format!("def main() {{ output {expr_src}; }}");
    match main_body(&source).remove(0) {
        StmtKind::Output(expr) => expr.kind,
        other => panic!("expected output, got {other:?}"),
    }
}

fn binary_parts(kind: &ExprKind) -> (BinaryOp, &ExprKind, &ExprKind) {
    match kind {
        ExprKind::Binary { op, left, right } => (*op, &left.kind, &right.kind),
        other => panic!("expected binary, got {other:?}"),
    }
}

#[test]
fn test_empty_program() {
    assert!(parse_ok("").functions.is_empty());
    assert!(parse_ok("  // nothing here\n").functions.is_empty());
}

#[test]
fn test_function_params_and_spans() {
    let program = parse_ok("def add(a, b) { return a + b; }\ndef main() { }");
    assert_eq!(program.functions.len(), 2);

    let add = &program.functions[0];
    assert_eq!(add.name, "add");
    assert_eq!(add.params, vec!["a".to_string(), "b".to_string()]);
    assert_eq!(add.span, Span::new(0, 31));

    let main = program.function("main").unwrap();
    assert!(main.params.is_empty());
    assert!(main.body.stmts.is_empty());
}

#[test]
fn test_statement_forms() {
    let stmts = main_body(
        "def main() { x = 1; input name; output x; { y = 2; } return; return x; }",
    );
    assert_eq!(stmts.len(), 6);
    assert!(matches!(&stmts[0], StmtKind::Assign { name, .. } if name == "x"));
    assert!(matches!(&stmts[1], StmtKind::Input { name } if name == "name"));
    assert!(matches!(&stmts[2], StmtKind::Output(_)));
    assert!(matches!(&stmts[3], StmtKind::Block(b) if b.stmts.len() == 1));
    assert_eq!(stmts[4], StmtKind::Return(None));
    assert!(matches!(&stmts[5], StmtKind::Return(Some(e)) if e.kind == ExprKind::Ident("x".into())));
}

#[test]
fn test_return_without_value_differs_from_undefined_name() {
    let stmts = main_body("def main() { return; return undefined_thing; }");
    assert_eq!(stmts[0], StmtKind::Return(None));
    assert!(matches!(&stmts[1], StmtKind::Return(Some(_))));
}

#[test]
fn test_if_elif_else_chain() {
    let stmts = main_body(
        "def main() { if (a) { output 1; } elif (b) { output 2; } elif (c) { } else { output 3; } }",
    );
    let StmtKind::If {
        branches,
        else_block,
    } = &stmts[0]
    else {
        panic!("expected if");
    };
    assert_eq!(branches.len(), 3);
    assert_eq!(branches[1].condition.kind, ExprKind::Ident("b".into()));
    assert!(branches[2].block.stmts.is_empty());
    assert_eq!(else_block.as_ref().unwrap().stmts.len(), 1);
}

#[test]
fn test_if_without_else() {
    let stmts = main_body("def main() { if (1) { } }");
    assert!(matches!(&stmts[0], StmtKind::If { branches, else_block: None } if branches.len() == 1));
}

#[test]
fn test_for_loop_header() {
    let stmts = main_body("def main() { for (i = 0; i < 3; i = i + 1) { output i; } }");
    let StmtKind::For {
        init,
        condition,
        step,
        body,
    } = &stmts[0]
    else {
        panic!("expected for");
    };
    assert!(matches!(&init.kind, StmtKind::Assign { name, .. } if name == "i"));
    assert_eq!(binary_parts(&condition.kind).0, BinaryOp::Lt);
    assert!(matches!(&step.kind, StmtKind::Assign { value, .. }
        if matches!(value.kind, ExprKind::Binary { op: BinaryOp::Add, .. })));
    assert_eq!(body.stmts.len(), 1);
}

#[test]
fn test_precedence_mul_over_add() {
    let kind = output_expr("1 + 2 * 3");
    let (op, left, right) = binary_parts(&kind);
    assert_eq!(op, BinaryOp::Add);
    assert_eq!(*left, ExprKind::Literal(Literal::Int(1)));
    assert_eq!(binary_parts(right).0, BinaryOp::Mul);
}

#[test]
fn test_left_associative_subtraction() {
    let kind = output_expr("10 - 4 - 3");
    let (op, left, right) = binary_parts(&kind);
    assert_eq!(op, BinaryOp::Sub);
    assert_eq!(binary_parts(left).0, BinaryOp::Sub);
    assert_eq!(*right, ExprKind::Literal(Literal::Int(3)));
}

#[test]
fn test_logical_levels() {
    // a || b && c == d < e
    let kind = output_expr("a || b && c == d < e");
    let (op, _, rest) = binary_parts(&kind);
    assert_eq!(op, BinaryOp::Or);
    let (op, _, rest) = binary_parts(rest);
    assert_eq!(op, BinaryOp::And);
    let (op, _, rest) = binary_parts(rest);
    assert_eq!(op, BinaryOp::Eq);
    assert_eq!(binary_parts(rest).0, BinaryOp::Lt);
}

#[test]
fn test_negative_literal_is_unary() {
    let kind = output_expr("-5");
    let ExprKind::Unary { op, operand } = kind else {
        panic!("expected unary");
    };
    assert_eq!(op, UnaryOp::Neg);
    assert_eq!(operand.kind, ExprKind::Literal(Literal::Int(5)));
}

#[test]
fn test_binary_minus_between_literals() {
    let kind = output_expr("3-1");
    assert_eq!(binary_parts(&kind).0, BinaryOp::Sub);
}

#[test]
fn test_nested_unary() {
    let kind = output_expr("!-x");
    let ExprKind::Unary { op, operand } = kind else {
        panic!("expected unary");
    };
    assert_eq!(op, UnaryOp::Not);
    assert!(matches!(operand.kind, ExprKind::Unary { op: UnaryOp::Neg, .. }));
}

#[test]
fn test_grouping_overrides_precedence() {
    let kind = output_expr("(1 + 2) * 3");
    let (op, left, _) = binary_parts(&kind);
    assert_eq!(op, BinaryOp::Mul);
    let ExprKind::Grouped(inner) = left else {
        panic!("expected group");
    };
    assert_eq!(binary_parts(&inner.kind).0, BinaryOp::Add);
}

#[test]
fn test_calls_arrays_and_index() {
    let kind = output_expr("f()");
    assert_eq!(
        kind,
        ExprKind::Call {
            callee: "f".into(),
            args: vec![]
        }
    );

    let ExprKind::Call { callee, args } = output_expr("max(1, x, [2])") else {
        panic!("expected call");
    };
    assert_eq!(callee, "max");
    assert_eq!(args.len(), 3);
    assert!(matches!(&args[2].kind, ExprKind::Array(items) if items.len() == 1));

    assert_eq!(output_expr("[]"), ExprKind::Array(vec![]));

    let ExprKind::Index { target, index } = output_expr("xs[i + 1]") else {
        panic!("expected index");
    };
    assert_eq!(target.kind, ExprKind::Ident("xs".into()));
    assert_eq!(binary_parts(&index.kind).0, BinaryOp::Add);
}

#[test]
fn test_literal_kinds() {
    assert_eq!(output_expr("2.5"), ExprKind::Literal(Literal::Float(2.5)));
    assert_eq!(output_expr("\"hi\""), ExprKind::Literal(Literal::Str("hi".into())));
    assert_eq!(output_expr("'c'"), ExprKind::Literal(Literal::Char('c')));
    assert_eq!(output_expr("true"), ExprKind::Literal(Literal::Bool(true)));
}

#[test]
fn test_expression_spans_cover_operands() {
    let program = parse_ok("def main() { output 1 + 22; }");
    let StmtKind::Output(expr) = &program.functions[0].body.stmts[0].kind else {
        panic!("expected output");
    };
    assert_eq!(expr.span, Span::new(20, 26));
    assert_eq!(program.functions[0].body.stmts[0].span, Span::new(13, 27));
}

#[test]
fn test_deeply_nested_groups() {
    let depth = 2_000;
    let expr = format!("{}1{}", "(".repeat(depth), ")".repeat(depth));
    let kind = output_expr(&expr);
    assert!(matches!(kind, ExprKind::Grouped(_)));
}
