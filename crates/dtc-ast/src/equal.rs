//! Structural equality (spec §4.D).
//!
//! `equal(x, y)` holds iff `x` and `y` have the same tag and pairwise-equal
//! payloads, recursively. Binders are compared by symbol identity, not
//! up to α-equivalence — the (external) type checker is expected to
//! normalize before comparing when it wants α-equivalence.
//!
//! The source's inversion bug on `BinOp` (comparing operators with `!=`
//! where `==` was intended, spec §9) does not reappear here: operators are
//! plain `Eq` enums compared with `==`.

use crate::ast::{Block, Expr, Stmt};

impl PartialEq for Expr {
    /// Ignores `span`: two expressions built from different source ranges
    /// but the same shape are equal. See the type's own doc comment.
    fn eq(&self, other: &Self) -> bool {
        self.kind == other.kind
    }
}

impl Eq for Expr {}

/// Decide structural equality of two expressions.
#[must_use]
pub fn equal(a: &Expr, b: &Expr) -> bool {
    a == b
}

/// Structural equality over statements (spec §9: resolves the source's
/// `Statement`-wrapped-expression equality TODO by specifying it as plain
/// structural equality, recursing into blocks).
#[must_use]
pub fn stmt_equal(a: &Stmt, b: &Stmt) -> bool {
    a == b
}

/// Structural equality over blocks.
#[must_use]
pub fn block_equal(a: &Block, b: &Block) -> bool {
    a == b
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ast::{BinOp, ExprKind, Literal};
    use dtc_common::Context;

    fn lit_expr(n: u64) -> Expr {
        Expr::literal(Literal::Integral(n), None)
    }

    #[test]
    fn equal_is_reflexive() {
        let e = Expr::new(
            ExprKind::BinOp(BinOp::Add, Box::new(lit_expr(1)), Box::new(lit_expr(2))),
            None,
        );
        assert!(equal(&e, &e));
    }

    #[test]
    fn equal_ignores_span() {
        let mut ctx = Context::new();
        let x = ctx.intern("x");
        let a = Expr::ident(x, None);
        let b = Expr::ident(x, Some(dtc_common::Span::new(0, 1)));
        assert!(equal(&a, &b));
    }

    #[test]
    fn identifiers_compare_by_symbol_identity() {
        let mut ctx = Context::new();
        let x = ctx.intern("x");
        let y = ctx.intern("y");
        assert!(!equal(&Expr::ident(x, None), &Expr::ident(y, None)));
    }

    #[test]
    fn binop_compares_operator_and_operands() {
        let add = Expr::new(
            ExprKind::BinOp(BinOp::Add, Box::new(lit_expr(1)), Box::new(lit_expr(2))),
            None,
        );
        let sub = Expr::new(
            ExprKind::BinOp(BinOp::Sub, Box::new(lit_expr(1)), Box::new(lit_expr(2))),
            None,
        );
        assert!(!equal(&add, &sub));
    }

    #[test]
    fn different_lengths_are_unequal() {
        let mut ctx = Context::new();
        let t = ctx.intern("t");
        let one = Expr::new(
            ExprKind::FuncType {
                ret: Box::new(lit_expr(0)),
                params: vec![crate::ast::Param {
                    ty: Expr::ident(t, None),
                    name: None,
                }],
            },
            None,
        );
        let two = Expr::new(
            ExprKind::FuncType {
                ret: Box::new(lit_expr(0)),
                params: vec![
                    crate::ast::Param {
                        ty: Expr::ident(t, None),
                        name: None,
                    },
                    crate::ast::Param {
                        ty: Expr::ident(t, None),
                        name: None,
                    },
                ],
            },
            None,
        );
        assert!(!equal(&one, &two));
    }
}
