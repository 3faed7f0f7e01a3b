//! Golden tests for the layout engine.
//!
//! Each test builds a tree with [`AstBuilder`] and compares the rendered
//! text against the canonical layout.

#![allow(clippy::unwrap_used, clippy::expect_used, reason = "Tests can panic")]

use hask_fmt::{
    format_decl, format_expr, format_expr_with_config, format_module, format_module_with_config,
    ConfigError, FormatConfig,
};
use hask_ir::{Alt, AstBuilder, Rhs, Stmt};
use pretty_assertions::assert_eq;

fn narrow(limit: usize) -> FormatConfig {
    FormatConfig::with_column_limit(limit)
}

#[test]
fn tuple_inline_with_ample_width() {
    let mut b = AstBuilder::new();
    let items = [b.int(1), b.int(2), b.int(3)];
    let t = b.tuple(&items);
    let (arena, interner) = b.finish();

    assert_eq!(format_expr(&arena, &interner, t), "(1, 2, 3)");
}

#[test]
fn tuple_stacks_at_column_limit_five() {
    let mut b = AstBuilder::new();
    let items = [b.int(1), b.int(2), b.int(3)];
    let t = b.tuple(&items);
    let (arena, interner) = b.finish();

    let out = format_expr_with_config(&arena, &interner, t, narrow(5)).unwrap();
    assert_eq!(out, "(1\n,2\n,3)");
}

#[test]
fn type_signature_breaks_context_and_arrows() {
    let mut b = AstBuilder::new();
    let x = b.tvar("x");
    let show = b.tcon("Show");
    let show_x = b.tapp(show, &[x]);
    let read = b.tcon("Read");
    let read_x = b.tapp(read, &[x]);

    let foo = b.tcon("Foo");
    let bar = b.tcon("Bar");
    let foo_bar = b.tfun(&[foo, bar]);
    let foo_bar = b.tparen(foo_bar);

    let maybe = b.tcon("Maybe");
    let int = b.tcon("Int");
    let maybe_int = b.tapp(maybe, &[int]);

    let char_ty = b.tcon("Char");
    let x_con = b.tcon("X");
    let y_con = b.tcon("Y");
    let char_fn = b.tfun(&[char_ty, x_con, y_con]);
    let char_fn = b.tparen(char_fn);

    let io = b.tcon("IO");
    let unit = b.ttuple(&[]);
    let io_unit = b.tapp(io, &[unit]);

    let body = b.tfun(&[foo_bar, maybe_int, char_fn, io_unit]);
    let ty = b.forall(&[], &[show_x, read_x], body);
    let sig = b.type_sig(&["foo"], ty);
    let (arena, interner) = b.finish();

    assert_eq!(
        format_decl(&arena, &interner, &sig),
        "foo :: (Show x, Read x)\n    => (Foo -> Bar)\n    -> Maybe Int\n    -> (Char -> X -> Y)\n    -> IO ()"
    );
}

#[test]
fn small_type_signature_stays_inline() {
    let mut b = AstBuilder::new();
    let a = b.tvar("a");
    let list_a = b.tlist(a);
    let int = b.tcon("Int");
    let ty = b.tfun(&[list_a, int]);
    let sig = b.type_sig(&["length", "size"], ty);
    let (arena, interner) = b.finish();

    assert_eq!(
        format_decl(&arena, &interner, &sig),
        "length, size :: [a] -> Int"
    );
}

#[test]
fn short_constrained_signature_breaks_context() {
    let mut b = AstBuilder::new();
    let eq = b.tcon("Eq");
    let a = b.tvar("a");
    let ctx = b.tapp(eq, &[a]);
    let bool_ty = b.tcon("Bool");
    let body = b.tfun(&[a, a, bool_ty]);
    let ty = b.forall(&[], &[ctx], body);
    let sig = b.type_sig(&["f"], ty);
    let (arena, interner) = b.finish();

    assert_eq!(
        format_decl(&arena, &interner, &sig),
        "f :: Eq a\n  => a -> a -> Bool"
    );
}

#[test]
fn quantified_signature_puts_forall_on_its_own_line() {
    let mut b = AstBuilder::new();
    let a = b.tvar("a");
    let monoid = b.tcon("Monoid");
    let ctx = b.tapp(monoid, &[a]);
    let list_a = b.tlist(a);
    let body = b.tfun(&[list_a, list_a, list_a, list_a, a]);
    let ty = b.forall(&["a"], &[ctx], body);
    let sig = b.type_sig(&["combineAll"], ty);
    let (arena, interner) = b.finish();

    assert_eq!(
        format_decl(&arena, &interner, &sig),
        format!(
            "combineAll :: forall a.\n{}Monoid a\n{}=> [a] -> [a] -> [a] -> [a] -> a",
            " ".repeat(14),
            " ".repeat(11)
        )
    );
}

#[test]
fn infix_breaks_without_continuation_column() {
    let mut b = AstBuilder::new();
    let l = b.var("aVeryLongIdentifierName");
    let r = b.var("anotherVeryLongIdentifierName");
    let e = b.infix(l, "+", r);
    let (arena, interner) = b.finish();

    let out = format_expr_with_config(&arena, &interner, e, narrow(30)).unwrap();
    assert_eq!(out, "aVeryLongIdentifierName +\nanotherVeryLongIdentifierName");
}

#[test]
fn infix_qualifier_in_do_block_uses_continuation_column() {
    let mut b = AstBuilder::new();
    let print = b.var("print");
    let one = b.int(1);
    let first = b.app(print, &[one]);
    let l = b.var("aVeryLongIdentifierName");
    let r = b.var("anotherVeryLongIdentifierName");
    let sum = b.infix(l, "+", r);
    let d = b.do_block(&[Stmt::Expr(first), Stmt::Expr(sum)]);
    let (arena, interner) = b.finish();

    let out = format_expr_with_config(&arena, &interner, d, narrow(30)).unwrap();
    assert_eq!(
        out,
        "do print 1\n   aVeryLongIdentifierName +\n     anotherVeryLongIdentifierName"
    );
}

#[test]
fn lowering_limit_forces_multi_line_application() {
    let mut b = AstBuilder::new();
    let f = b.var("f");
    let args = [b.var("x"), b.var("y")];
    let e = b.app(f, &args);
    let (arena, interner) = b.finish();

    assert_eq!(format_expr(&arena, &interner, e), "f x y");
    let out = format_expr_with_config(&arena, &interner, e, narrow(4)).unwrap();
    assert_eq!(out, "f x\n  y");
}

#[test]
fn nested_application_argument() {
    let mut b = AstBuilder::new();
    let map = b.var("map");
    let show = b.var("show");
    let xs = b.var("xs");
    let inner = b.app(map, &[show, xs]);
    let inner = b.paren(inner);
    let concat = b.var("concat");
    let e = b.app(concat, &[inner]);
    let (arena, interner) = b.finish();

    assert_eq!(format_expr(&arena, &interner, e), "concat (map show xs)");
}

#[test]
fn sections_and_quotes() {
    let mut b = AstBuilder::new();
    let one = b.int(1);
    let left = b.left_section(one, "+");
    let two = b.int(2);
    let right = b.right_section("*", two);
    let name = b.var_quote("map");
    let ty = b.typ_quote("Maybe");
    let t = b.tuple(&[left, right, name, ty]);
    let (arena, interner) = b.finish();

    assert_eq!(
        format_expr(&arena, &interner, t),
        "((1 +), (* 2), 'map, ''Maybe)"
    );
}

#[test]
fn annotation_and_fractional() {
    let mut b = AstBuilder::new();
    let half = b.frac("0.5");
    let double = b.tcon("Double");
    let e = b.annotate(half, double);
    let (arena, interner) = b.finish();

    assert_eq!(format_expr(&arena, &interner, e), "0.5 :: Double");
}

#[test]
fn guarded_case_alternative() {
    let mut b = AstBuilder::new();
    let n = b.var("n");
    let zero = b.int(0);
    let positive = b.infix(n, ">", zero);
    let pos = b.string("positive");
    let otherwise = b.var("otherwise");
    let other = b.string("other");
    let rhs = b.guarded(&[(&[positive], pos), (&[otherwise], other)]);
    let e = b.case(n, &[Alt { pat: n, rhs }]);
    let (arena, interner) = b.finish();

    assert_eq!(
        format_expr(&arena, &interner, e),
        "case n of\n  n\n    | n > 0 -> \"positive\"\n    | otherwise -> \"other\""
    );
}

#[test]
fn guard_with_several_qualifiers_uses_leading_commas() {
    let mut b = AstBuilder::new();
    let x = b.var("x");
    let zero = b.int(0);
    let big = b.infix(x, ">", zero);
    let even = b.var("even");
    let is_even = b.app(even, &[x]);
    let yes = b.con("True");
    let rhs = b.guarded(&[(&[big, is_even], yes)]);
    let decl = b.fun_bind("check", &[x], rhs);
    let (arena, interner) = b.finish();

    assert_eq!(
        format_decl(&arena, &interner, &decl),
        "check x\n  | x > 0\n  , even x = True"
    );
}

#[test]
fn lambda_body_moves_to_next_line_when_not_small() {
    let mut b = AstBuilder::new();
    let x = b.var("x");
    let t = b.var("thenBranchValue");
    let e = b.var("elseBranchValue");
    let cond = b.if_then_else(x, t, e);
    let lam = b.lambda(&[x], cond);
    let (arena, interner) = b.finish();

    assert_eq!(
        format_expr(&arena, &interner, lam),
        "\\x ->\n  if x then thenBranchValue else elseBranchValue"
    );
}

#[test]
fn module_layout() {
    let mut b = AstBuilder::new();

    let a = b.tvar("a");
    let list_a = b.tlist(a);
    let int = b.tcon("Int");
    let length_ty = b.tfun(&[list_a, int]);
    let length_sig = b.type_sig(&["length"], length_ty);

    let xs = b.var("xs");
    let empty = b.list(&[]);
    let zero = b.int(0);
    let wildcard = b.wildcard();
    let rest = b.var("rest");
    let cons = b.infix(wildcard, ":", rest);
    let cons = b.paren(cons);
    let one = b.int(1);
    let length = b.var("length");
    let recurse = b.app(length, &[rest]);
    let sum = b.infix(one, "+", recurse);
    let body = b.case(
        xs,
        &[
            Alt {
                pat: empty,
                rhs: Rhs::Plain(zero),
            },
            Alt {
                pat: cons,
                rhs: Rhs::Plain(sum),
            },
        ],
    );
    let length_bind = b.fun_bind("length", &[xs], Rhs::Plain(body));

    let io = b.tcon("IO");
    let unit = b.ttuple(&[]);
    let io_unit = b.tapp(io, &[unit]);
    let main_sig = b.type_sig(&["main"], io_unit);

    let put = b.var("putStrLn");
    let hello = b.string("hello");
    let greet = b.app(put, &[hello]);
    let name = b.var("name");
    let get_line = b.var("getLine");
    let hi = b.string("hi ");
    let message = b.infix(hi, "++", name);
    let message = b.paren(message);
    let reply = b.app(put, &[message]);
    let main_body = b.do_block(&[
        Stmt::Expr(greet),
        Stmt::Bind {
            pat: name,
            expr: get_line,
        },
        Stmt::Expr(reply),
    ]);
    let main_bind = b.fun_bind("main", &[], Rhs::Plain(main_body));

    let module = b.module(&[length_sig, length_bind, main_sig, main_bind]);
    let (arena, interner) = b.finish();

    let expected = "\
length :: [a] -> Int
length xs =
  case xs of
    [] -> 0
    (_ : rest) -> 1 + length rest

main :: IO ()
main =
  do putStrLn \"hello\"
     name <- getLine
     putStrLn (\"hi \" ++ name)
";
    assert_eq!(format_module(&arena, &interner, &module), expected);
}

#[test]
fn configured_entry_points_reject_bad_config() {
    let mut b = AstBuilder::new();
    let x = b.var("x");
    let module = b.module(&[]);
    let (arena, interner) = b.finish();

    assert_eq!(
        format_expr_with_config(&arena, &interner, x, narrow(0)),
        Err(ConfigError::ZeroColumnLimit)
    );
    let config = FormatConfig {
        indent_spaces: 8,
        ..narrow(8)
    };
    assert_eq!(
        format_module_with_config(&arena, &interner, &module, config),
        Err(ConfigError::IndentExceedsLimit {
            indent: 8,
            limit: 8
        })
    );
}

#[test]
fn empty_module_is_a_single_newline() {
    let mut b = AstBuilder::new();
    let module = b.module(&[]);
    let (arena, interner) = b.finish();

    assert_eq!(format_module(&arena, &interner, &module), "\n");
}
