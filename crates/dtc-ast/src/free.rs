//! Deallocation (spec §4.H).
//!
//! Spec §4.H: "Recursively releases all owned children, deallocates all
//! owned arrays, then zeros the node's storage. Freeing a nullptr-
//! equivalent or a zeroed node is a no-op." For whole-tree teardown this
//! is exactly what dropping an owned [`Expr`]/[`Stmt`]/[`Block`]/
//! [`TranslationUnit`] already does: `Box`/`Vec` children are dropped
//! recursively with no hand-written recursive free function needed.
//!
//! The one place the spec's "freed and zeroed in place" wording is load-
//! bearing rather than just an implementation detail is `Ident`
//! substitution (spec §4.G: "free the current node and overwrite it with
//! `copy(replacement)`") — the node being replaced lives inside a live
//! parent tree, not an owned root, so ordinary assignment (`*node = ...`)
//! already drops the old value in place, satisfying the contract without
//! any extra step. [`scrub_in_place`] exists for the rarer caller that
//! wants to observe the spec's "zeroed node" state directly (testable
//! property 8) without going through substitution.

use crate::ast::{Expr, Literal};

/// Drop `node`'s current value and replace it with a canonical empty
/// expression (`Literal(Void)`, no span), matching spec §4.H's "freed and
/// zeroed" observable state. Idempotent: scrubbing an already-scrubbed
/// node is a no-op change.
pub fn scrub_in_place(node: &mut Expr) {
    *node = Expr::literal(Literal::Void, None);
}

/// `true` iff `node` is in the canonical scrubbed state produced by
/// [`scrub_in_place`].
#[must_use]
pub fn is_scrubbed(node: &Expr) -> bool {
    node.span.is_none() && matches!(node.kind, crate::ast::ExprKind::Literal(Literal::Void))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn scrub_replaces_with_canonical_empty_node() {
        let mut node = Expr::literal(Literal::Integral(7), None);
        scrub_in_place(&mut node);
        assert!(is_scrubbed(&node));
    }

    #[test]
    fn scrubbing_drops_owned_children() {
        use crate::ast::ExprKind;
        let mut node = Expr::new(
            ExprKind::Pointer(Box::new(Expr::literal(Literal::Integral(1), None))),
            None,
        );
        scrub_in_place(&mut node);
        assert!(is_scrubbed(&node));
    }
}
