//! Integration tests for the concrete scenarios in spec.md §8 ("Testable
//! properties" / "Concrete scenarios"), exercised through `dtc-ast`'s
//! public API rather than its internal unit-test modules.

use dtc_ast::{equal, free_vars, free_vars_block, subst, BinOp, Block, Expr, ExprKind, Field, Literal, Param, Pretty, Stmt};
use dtc_common::{Context, Limits};

fn u8_param(ctx: &mut Context, name: dtc_common::Symbol) -> Param {
    let u8_sym = ctx.intern("u8");
    Param {
        ty: Expr::ident(u8_sym, None),
        name: Some(name),
    }
}

#[test]
fn shadowed_parameter_scenario() {
    // subst(\(u8 x) -> x, "x", 42) == \(u8 x) -> x
    let mut ctx = Context::new();
    let limits = Limits::default();
    let x = ctx.intern("x");
    let param = u8_param(&mut ctx, x);
    let mut term = Expr::lambda(vec![param], Expr::ident(x, None), None);
    let before = term.clone();
    let replacement = Expr::literal(Literal::Integral(42), None);
    subst(&mut ctx, &limits, &mut term, x, &replacement).unwrap();
    assert!(equal(&term, &before));
}

#[test]
fn plain_substitution_scenario() {
    // subst(\(u8 y) -> x, "x", 42) == \(u8 y) -> 42
    let mut ctx = Context::new();
    let limits = Limits::default();
    let x = ctx.intern("x");
    let y = ctx.intern("y");
    let param = u8_param(&mut ctx, y);
    let mut term = Expr::lambda(vec![param], Expr::ident(x, None), None);
    let replacement = Expr::literal(Literal::Integral(42), None);
    subst(&mut ctx, &limits, &mut term, x, &replacement).unwrap();
    let expected = Expr::lambda(
        vec![u8_param(&mut ctx, y)],
        Expr::literal(Literal::Integral(42), None),
        None,
    );
    assert!(equal(&term, &expected));
}

#[test]
fn capture_avoiding_rename_scenario() {
    // subst(\(u8 y) -> x, "x", y) yields \(u8 y') -> y for fresh y' != y,
    // with the parameter type preserved as `u8`.
    let mut ctx = Context::new();
    let limits = Limits::default();
    let x = ctx.intern("x");
    let y = ctx.intern("y");
    let param = u8_param(&mut ctx, y);
    let mut term = Expr::lambda(vec![param], Expr::ident(x, None), None);
    let replacement = Expr::ident(y, None);
    subst(&mut ctx, &limits, &mut term, x, &replacement).unwrap();

    let ExprKind::Lambda { params, body } = &term.kind else {
        panic!("expected a Lambda");
    };
    let bound = params[0].name.expect("lambda params are always named");
    assert_ne!(bound, y);
    assert!(equal(&params[0].ty, &Expr::ident(ctx.intern("u8"), None)));
    assert!(equal(body, &Expr::ident(y, None)));
}

#[test]
fn dependent_struct_free_vars_scenario() {
    // freeVars(struct { u32 n; array(T, n) data; }) == {u32, array, T}
    let mut ctx = Context::new();
    let u32_sym = ctx.intern("u32");
    let n = ctx.intern("n");
    let array = ctx.intern("array");
    let t = ctx.intern("T");
    let data = ctx.intern("data");

    let array_call = Expr::new(
        ExprKind::Call {
            callee: Box::new(Expr::ident(array, None)),
            args: vec![Expr::ident(t, None), Expr::ident(n, None)],
        },
        None,
    );
    let s = Expr::new(
        ExprKind::Struct {
            fields: vec![
                Field {
                    ty: Expr::ident(u32_sym, None),
                    name: n,
                },
                Field {
                    ty: array_call,
                    name: data,
                },
            ],
        },
        None,
    );
    let fv = free_vars(&s);
    assert!(fv.contains(u32_sym));
    assert!(fv.contains(array));
    assert!(fv.contains(t));
    assert!(!fv.contains(n));
    assert_eq!(fv.len(), 3);
}

#[test]
fn block_scoping_scenario() {
    // freeVars({ u8 x = y; x + z; }) == {u8, y, z}; x does not escape.
    let mut ctx = Context::new();
    let u8_sym = ctx.intern("u8");
    let x = ctx.intern("x");
    let y = ctx.intern("y");
    let z = ctx.intern("z");

    let block = Block::new(vec![
        Stmt::Decl {
            ty: Expr::ident(u8_sym, None),
            name: x,
            init: Some(Expr::ident(y, None)),
        },
        Stmt::Expr(Expr::new(
            ExprKind::BinOp(BinOp::Add, Box::new(Expr::ident(x, None)), Box::new(Expr::ident(z, None))),
            None,
        )),
    ]);
    let fv = free_vars_block(&block);
    assert!(fv.contains(u8_sym));
    assert!(fv.contains(y));
    assert!(fv.contains(z));
    assert!(!fv.contains(x));
    assert_eq!(fv.len(), 3);
}

#[test]
fn pretty_print_round_trip_scenario() {
    // Printing struct { u8 a; bool b; } emits exactly that text.
    let mut ctx = Context::new();
    let a = ctx.intern("a");
    let b = ctx.intern("b");
    let s = Expr::new(
        ExprKind::Struct {
            fields: vec![
                Field {
                    ty: Expr::literal(Literal::U8, None),
                    name: a,
                },
                Field {
                    ty: Expr::literal(Literal::Bool, None),
                    name: b,
                },
            ],
        },
        None,
    );
    assert_eq!(Pretty::new(&s, &ctx.interner).to_string(), "struct { u8 a; bool b; }");
}

#[test]
fn subst_is_a_no_op_when_name_is_not_free() {
    // Testable property 4: y not in freeVars(x) => subst(x, y, r) is a no-op.
    let mut ctx = Context::new();
    let limits = Limits::default();
    let y = ctx.intern("y");
    let z = ctx.intern("z");
    let mut term = Expr::ident(y, None);
    let before = term.clone();
    let replacement = Expr::literal(Literal::Integral(1), None);
    subst(&mut ctx, &limits, &mut term, z, &replacement).unwrap();
    assert!(equal(&term, &before));
}

#[test]
fn successful_substitution_bounds_result_free_vars() {
    // Testable property 5: freeVars(result) subseteq (freeVars(x) - {y}) u freeVars(r).
    let mut ctx = Context::new();
    let limits = Limits::default();
    let x = ctx.intern("x");
    let w = ctx.intern("w");
    let mut term = Expr::new(
        ExprKind::BinOp(BinOp::Add, Box::new(Expr::ident(x, None)), Box::new(Expr::ident(w, None))),
        None,
    );
    let replacement = Expr::literal(Literal::Integral(7), None);
    subst(&mut ctx, &limits, &mut term, x, &replacement).unwrap();
    let fv = free_vars(&term);
    assert!(!fv.contains(x));
    assert!(fv.contains(w));
    assert_eq!(fv.len(), 1);
}
