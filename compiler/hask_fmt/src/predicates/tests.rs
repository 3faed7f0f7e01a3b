use hask_ir::AstBuilder;

use super::*;
use crate::printer::Printer;

fn printer() -> Printer {
    Printer::new(FormatConfig::default())
}

// -- is_flat --

#[test]
fn leaves_are_flat() {
    let mut b = AstBuilder::new();
    let leaves = [
        b.var("x"),
        b.con("Just"),
        b.int(3),
        b.frac("2.5"),
        b.char('c'),
        b.string("s"),
        b.var_quote("foo"),
        b.typ_quote("Foo"),
        b.list(&[]),
    ];
    for leaf in leaves {
        assert!(is_flat(b.arena(), leaf), "{:?}", b.arena().get_expr(leaf));
    }
}

#[test]
fn application_of_two_references_is_flat() {
    let mut b = AstBuilder::new();
    let f = b.var("f");
    let x = b.con("X");
    let call = b.app(f, &[x]);
    assert!(is_flat(b.arena(), call));
}

#[test]
fn application_with_literal_argument_is_not_flat() {
    let mut b = AstBuilder::new();
    let f = b.var("f");
    let one = b.int(1);
    let call = b.app(f, &[one]);
    assert!(!is_flat(b.arena(), call));
}

#[test]
fn curried_application_is_not_flat() {
    let mut b = AstBuilder::new();
    let f = b.var("f");
    let x = b.var("x");
    let y = b.var("y");
    let call = b.app(f, &[x, y]);
    assert!(!is_flat(b.arena(), call));
}

#[test]
fn infix_flatness_follows_operands() {
    let mut b = AstBuilder::new();
    let x = b.var("x");
    let one = b.int(1);
    let flat = b.infix(x, "+", one);
    assert!(is_flat(b.arena(), flat));

    let items = [b.int(1)];
    let list = b.list(&items);
    let y = b.var("y");
    let not_flat = b.infix(list, "++", y);
    assert!(!is_flat(b.arena(), not_flat));
}

#[test]
fn lambda_flatness_follows_body() {
    let mut b = AstBuilder::new();
    let x = b.var("x");
    let body = b.var("x");
    let id = b.lambda(&[x], body);
    assert!(is_flat(b.arena(), id));

    let p = b.var("p");
    let items = [b.var("p")];
    let tuple = b.tuple(&items);
    let wrap = b.lambda(&[p], tuple);
    assert!(!is_flat(b.arena(), wrap));
}

#[test]
fn negation_and_sections_follow_operand() {
    let mut b = AstBuilder::new();
    let x = b.var("x");
    let neg = b.neg(x);
    let y = b.var("y");
    let left = b.left_section(y, "+");
    let z = b.var("z");
    let right = b.right_section("*", z);
    assert!(is_flat(b.arena(), neg));
    assert!(is_flat(b.arena(), left));
    assert!(is_flat(b.arena(), right));

    let items = [b.int(1)];
    let list = b.list(&items);
    let neg_list = b.neg(list);
    assert!(!is_flat(b.arena(), neg_list));
}

#[test]
fn compound_shapes_are_not_flat() {
    let mut b = AstBuilder::new();
    let items = [b.int(1), b.int(2)];
    let tuple = b.tuple(&items);
    let list = b.list(&items);
    assert!(!is_flat(b.arena(), tuple));
    assert!(!is_flat(b.arena(), list));
}

// -- Measuring predicates --

#[test]
fn single_liner_detects_newline() {
    let mut p = printer();
    assert!(is_single_liner(&mut p, |p| p.write("abc")));
    assert!(!is_single_liner(&mut p, |p| {
        p.write("a");
        p.newline();
        p.write("b");
    }));
    assert_eq!(p.output(), "");
}

#[test]
fn overflow_is_strictly_past_limit() {
    let mut p = Printer::new(FormatConfig::with_column_limit(10));
    assert!(!is_overflow(&mut p, |p| p.write(&"x".repeat(10))));
    assert!(is_overflow(&mut p, |p| p.write(&"x".repeat(11))));
}

#[test]
fn overflow_max_tolerates_margin() {
    let mut p = Printer::new(FormatConfig::with_column_limit(10));
    assert!(!is_overflow_max(&mut p, |p| p.write(&"x".repeat(30))));
    assert!(is_overflow_max(&mut p, |p| p.write(&"x".repeat(31))));
}

#[test]
fn small_uses_absolute_column() {
    let mut p = printer();
    assert!(is_small(&mut p, |p| p.write(&"x".repeat(49))));
    assert!(!is_small(&mut p, |p| p.write(&"x".repeat(50))));

    p.write(&"y".repeat(45));
    assert!(!is_small(&mut p, |p| p.write("zzzzz")));
}

#[test]
fn small_rejects_multi_line() {
    let mut p = printer();
    assert!(!is_small(&mut p, |p| {
        p.write("a");
        p.newline();
    }));
}

#[test]
fn short_is_relative_to_start() {
    let mut p = printer();
    p.write(&"y".repeat(60));
    assert!(is_short(&mut p, |p| p.write("foo")));
    assert!(is_short(&mut p, |p| p.write(&"f".repeat(9))));
    assert!(!is_short(&mut p, |p| p.write(&"f".repeat(10))));
}

#[test]
fn short_counts_pending_indentation_as_start() {
    let mut p = printer();
    p.set_indent(20);
    p.write("x");
    p.newline();
    assert!(is_short(&mut p, |p| p.write("go")));
}

#[test]
fn unbounded_short_name_accepts_any_single_line() {
    let config = FormatConfig {
        short_name: usize::MAX,
        ..FormatConfig::default()
    };
    let mut p = Printer::new(config);
    p.write("x");
    assert!(is_short(&mut p, |p| p.write(&"f".repeat(200))));
}

#[test]
fn trial_can_be_committed() {
    let mut p = printer();
    let attempt = trial(&mut p, |p| p.write("kept"));
    assert!(attempt.is_single_line());
    assert_eq!(attempt.candidate().text(), "kept");
    p.commit(attempt.into_candidate());
    assert_eq!(p.output(), "kept");
}
