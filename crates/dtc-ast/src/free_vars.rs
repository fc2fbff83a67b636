//! Free-variable analysis (spec §4.F).
//!
//! Every rule here mirrors spec §4.F one-to-one, including the
//! right-to-left block fold. The source's double-union bug on
//! `IfThenElse` statements (spec §9: "unions the then-block's free vars
//! with the temporary buffer twice") is fixed: each branch is unioned
//! exactly once.

use dtc_common::SymbolSet;

use crate::ast::{Block, Expr, ExprKind, Stmt};

/// The set of identifiers occurring free in `expr`, honoring every binder.
#[must_use]
pub fn free_vars(expr: &Expr) -> SymbolSet {
    match &expr.kind {
        ExprKind::Literal(_) => SymbolSet::empty(),
        ExprKind::Ident(s) => SymbolSet::singleton(*s),
        ExprKind::BinOp(_, lhs, rhs) => {
            let mut set = free_vars(lhs);
            set.union(&free_vars(rhs));
            set
        }
        ExprKind::IfThenElse {
            cond,
            then_branch,
            else_branch,
        } => {
            let mut set = free_vars(cond);
            set.union(&free_vars(then_branch));
            set.union(&free_vars(else_branch));
            set
        }
        ExprKind::FuncType { ret, params } => free_vars_param_list(params, ret),
        ExprKind::Lambda { params, body } => free_vars_param_list(params, body),
        ExprKind::Call { callee, args } => {
            let mut set = free_vars(callee);
            for arg in args {
                set.union(&free_vars(arg));
            }
            set
        }
        ExprKind::Struct { fields } => {
            // Dependent record: field i's type may reference f0..f(i-1).
            let mut set = SymbolSet::empty();
            let mut bound = SymbolSet::empty();
            for field in fields {
                let mut field_free = free_vars(&field.ty);
                field_free = field_free.difference(&bound);
                set.union(&field_free);
                bound.add(field.name);
            }
            set
        }
        ExprKind::Union { fields } => {
            // Field names do not bind.
            let mut set = SymbolSet::empty();
            for field in fields {
                set.union(&free_vars(&field.ty));
            }
            set
        }
        ExprKind::Pack { ty, fields } => {
            let mut set = free_vars(ty);
            for field in fields {
                set.union(&free_vars(&field.value));
            }
            set
        }
        ExprKind::Member { record, .. } => free_vars(record),
        ExprKind::Pointer(inner) | ExprKind::Reference(inner) | ExprKind::Dereference(inner) => {
            free_vars(inner)
        }
        ExprKind::Statement(stmt) => free_vars_stmt(stmt),
    }
}

/// Shared rule for `FuncType`'s and `Lambda`'s ordered parameter lists:
/// `freeVars(tail) ∖ {names}` united with, for each i,
/// `freeVars(Pᵢ) ∖ {names before i}`. A missing param name (`FuncType`
/// only) simply binds nothing.
fn free_vars_param_list(params: &[crate::ast::Param], tail: &Expr) -> SymbolSet {
    let mut bound_before = SymbolSet::empty();
    let mut set = SymbolSet::empty();
    for param in params {
        let param_free = free_vars(&param.ty).difference(&bound_before);
        set.union(&param_free);
        if let Some(name) = param.name {
            bound_before.add(name);
        }
    }
    let mut tail_free = free_vars(tail);
    tail_free = tail_free.difference(&bound_before);
    set.union(&tail_free);
    set
}

/// Free variables of a statement.
#[must_use]
pub fn free_vars_stmt(stmt: &Stmt) -> SymbolSet {
    match stmt {
        Stmt::Empty => SymbolSet::empty(),
        Stmt::Expr(e) | Stmt::Return(e) => free_vars(e),
        Stmt::Block(b) => free_vars_block(b),
        Stmt::Decl { ty, init, .. } => {
            // The declared name is not subtracted here: it scopes in the
            // enclosing block, not in its own right-hand side.
            let mut set = free_vars(ty);
            if let Some(init) = init {
                set.union(&free_vars(init));
            }
            set
        }
        Stmt::IfThenElse { arms, else_block } => {
            let mut set = SymbolSet::empty();
            for (cond, then_block) in arms {
                set.union(&free_vars(cond));
                set.union(&free_vars_block(then_block));
            }
            if let Some(else_block) = else_block {
                set.union(&free_vars_block(else_block));
            }
            set
        }
    }
}

/// Free variables of a block: a right-to-left fold where each `Decl`
/// removes its own name from everything accumulated so far (i.e. from the
/// statements that follow it), then contributes its own free vars.
#[must_use]
pub fn free_vars_block(block: &Block) -> SymbolSet {
    let mut set = SymbolSet::empty();
    for stmt in block.0.iter().rev() {
        if let Stmt::Decl { name, .. } = stmt {
            set.delete(*name);
        }
        set.union(&free_vars_stmt(stmt));
    }
    set
}
