//! Capture-avoiding substitution (spec §4.G).
//!
//! `subst(ctx, limits, term, name, replacement)` replaces every free
//! occurrence of `name` in `term` by a deep copy of `replacement`,
//! α-renaming any intervening binder that would otherwise capture a free
//! variable of `replacement`. `replacement` is read-only; `term` is
//! mutated in place.
//!
//! `FuncType`, `Lambda`, and `Struct`/`Pack` substitution share one
//! traversal ([`subst_ordered_binders`]) over a small [`BinderSlot`]
//! capability, per the design note in spec §9 ("implement once over a
//! capability that enumerates binders in scope ... and the sub-terms
//! below each"). This also fixes the two REDESIGN FLAGS named there: the
//! `Lambda` rename now propagates into every remaining parameter type and
//! the body (not just the slot it was found at), and block-level
//! substitution implements the declaration-shadows-later-statements rule.

use dtc_common::{Context, Limits, Symbol, SymbolSet};

use crate::ast::{Block, Expr, ExprKind, Field, Param, PackField, Stmt};
use crate::copy::copy;
use crate::free_vars::free_vars;

/// Failure modes for [`subst`] (spec §7 "Substitution refusal" and the
/// recursion guard added by this workspace's [`Limits`]).
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum SubstError {
    /// A `Struct`/`Pack` field name would be captured by `replacement`'s
    /// free variables. Record field names are part of the type's public
    /// interface, so (unlike `FuncType`/`Lambda` parameters) they are
    /// never α-renamed to avoid this — the operation fails instead
    /// (spec §4.G).
    FieldCaptureRefused { field: Symbol },
    /// The traversal exceeded [`Limits::max_recursion_depth`].
    RecursionLimitExceeded,
}

impl std::fmt::Display for SubstError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            SubstError::FieldCaptureRefused { field } => {
                write!(
                    f,
                    "substitution would capture record field `{:?}`; field names are not \
                     alpha-renamed",
                    field
                )
            }
            SubstError::RecursionLimitExceeded => {
                write!(f, "substitution exceeded the maximum recursion depth")
            }
        }
    }
}

impl std::error::Error for SubstError {}

type Result<T> = std::result::Result<T, SubstError>;

/// Replace every free occurrence of `name` in `term` by a deep copy of
/// `replacement`, renaming captured binders as needed.
pub fn subst(
    ctx: &mut Context,
    limits: &Limits,
    term: &mut Expr,
    name: Symbol,
    replacement: &Expr,
) -> Result<()> {
    let free_repl = free_vars(replacement);
    subst_expr(ctx, limits, 0, term, name, replacement, &free_repl)
}

/// [`subst`], over a statement.
pub fn subst_stmt(
    ctx: &mut Context,
    limits: &Limits,
    stmt: &mut Stmt,
    name: Symbol,
    replacement: &Expr,
) -> Result<()> {
    let free_repl = free_vars(replacement);
    subst_stmt_inner(ctx, limits, 0, stmt, name, replacement, &free_repl)
}

/// [`subst`], over a block.
pub fn subst_block(
    ctx: &mut Context,
    limits: &Limits,
    block: &mut Block,
    name: Symbol,
    replacement: &Expr,
) -> Result<()> {
    let free_repl = free_vars(replacement);
    subst_block_inner(ctx, limits, 0, block, name, replacement, &free_repl)
}

fn check_depth(limits: &Limits, depth: u32) -> Result<()> {
    if depth > limits.max_recursion_depth {
        return Err(SubstError::RecursionLimitExceeded);
    }
    Ok(())
}

fn subst_expr(
    ctx: &mut Context,
    limits: &Limits,
    depth: u32,
    term: &mut Expr,
    name: Symbol,
    replacement: &Expr,
    free_repl: &SymbolSet,
) -> Result<()> {
    check_depth(limits, depth)?;
    let depth = depth + 1;
    match &mut term.kind {
        ExprKind::Literal(_) => Ok(()),
        ExprKind::Ident(s) => {
            if *s == name {
                *term = copy(replacement);
            }
            Ok(())
        }
        ExprKind::BinOp(_, lhs, rhs) => {
            subst_expr(ctx, limits, depth, lhs, name, replacement, free_repl)?;
            subst_expr(ctx, limits, depth, rhs, name, replacement, free_repl)
        }
        ExprKind::IfThenElse {
            cond,
            then_branch,
            else_branch,
        } => {
            subst_expr(ctx, limits, depth, cond, name, replacement, free_repl)?;
            subst_expr(ctx, limits, depth, then_branch, name, replacement, free_repl)?;
            subst_expr(ctx, limits, depth, else_branch, name, replacement, free_repl)
        }
        ExprKind::FuncType { ret, params } => subst_ordered_binders(
            ctx,
            limits,
            depth,
            params.as_mut_slice(),
            Some(ret.as_mut()),
            name,
            replacement,
            free_repl,
            true,
        ),
        ExprKind::Lambda { params, body } => subst_ordered_binders(
            ctx,
            limits,
            depth,
            params.as_mut_slice(),
            Some(body.as_mut()),
            name,
            replacement,
            free_repl,
            true,
        ),
        ExprKind::Call { callee, args } => {
            subst_expr(ctx, limits, depth, callee, name, replacement, free_repl)?;
            for arg in args {
                subst_expr(ctx, limits, depth, arg, name, replacement, free_repl)?;
            }
            Ok(())
        }
        ExprKind::Struct { fields } => subst_ordered_binders(
            ctx,
            limits,
            depth,
            fields.as_mut_slice(),
            None,
            name,
            replacement,
            free_repl,
            false,
        ),
        ExprKind::Union { fields } => {
            // Field names do not bind; recurse into every field type.
            for field in fields {
                subst_expr(ctx, limits, depth, &mut field.ty, name, replacement, free_repl)?;
            }
            Ok(())
        }
        ExprKind::Pack { ty, fields } => {
            subst_expr(ctx, limits, depth, ty, name, replacement, free_repl)?;
            subst_ordered_binders(
                ctx,
                limits,
                depth,
                fields.as_mut_slice(),
                None,
                name,
                replacement,
                free_repl,
                false,
            )
        }
        ExprKind::Member { record, .. } => {
            subst_expr(ctx, limits, depth, record, name, replacement, free_repl)
        }
        ExprKind::Pointer(inner) | ExprKind::Reference(inner) | ExprKind::Dereference(inner) => {
            subst_expr(ctx, limits, depth, inner, name, replacement, free_repl)
        }
        ExprKind::Statement(stmt) => {
            subst_stmt_inner(ctx, limits, depth, stmt, name, replacement, free_repl)
        }
    }
}

/// A binder slot shared by `FuncType`/`Lambda` parameters and
/// `Struct`/`Pack` fields: something with one sub-term to substitute
/// into and a name that may shadow or be captured.
trait BinderSlot {
    fn name(&self) -> Option<Symbol>;
    fn set_name(&mut self, new_name: Symbol);
    fn subterm_mut(&mut self) -> &mut Expr;
}

impl BinderSlot for Param {
    fn name(&self) -> Option<Symbol> {
        self.name
    }
    fn set_name(&mut self, new_name: Symbol) {
        self.name = Some(new_name);
    }
    fn subterm_mut(&mut self) -> &mut Expr {
        &mut self.ty
    }
}

impl BinderSlot for Field {
    fn name(&self) -> Option<Symbol> {
        Some(self.name)
    }
    fn set_name(&mut self, new_name: Symbol) {
        self.name = new_name;
    }
    fn subterm_mut(&mut self) -> &mut Expr {
        &mut self.ty
    }
}

impl BinderSlot for PackField {
    fn name(&self) -> Option<Symbol> {
        Some(self.name)
    }
    fn set_name(&mut self, new_name: Symbol) {
        self.name = new_name;
    }
    fn subterm_mut(&mut self) -> &mut Expr {
        &mut self.value
    }
}

/// Shared traversal for `FuncType`/`Lambda` parameters and `Struct`/`Pack`
/// fields (spec §4.G).
///
/// For each binder `i` in order: substitute `name -> replacement` into its
/// sub-term; if its name equals `name`, stop (shadowed, nothing further is
/// free); otherwise, if its name is free in `replacement`, either
/// α-rename it (when `allow_rename`, propagating the rename into every
/// later sub-term and `tail`) or fail (when `!allow_rename` — record
/// field names). After all binders are processed without shadowing,
/// substitute into `tail`, if present.
#[allow(clippy::too_many_arguments)]
fn subst_ordered_binders<B: BinderSlot>(
    ctx: &mut Context,
    limits: &Limits,
    depth: u32,
    binders: &mut [B],
    mut tail: Option<&mut Expr>,
    name: Symbol,
    replacement: &Expr,
    free_repl: &SymbolSet,
    allow_rename: bool,
) -> Result<()> {
    let len = binders.len();
    for i in 0..len {
        subst_expr(
            ctx,
            limits,
            depth,
            binders[i].subterm_mut(),
            name,
            replacement,
            free_repl,
        )?;
        let Some(bound_name) = binders[i].name() else {
            continue;
        };
        if bound_name == name {
            // Shadowed: name is bound here, so it is not free in anything
            // after this binder. The return type/body is left untouched.
            return Ok(());
        }
        if free_repl.contains(bound_name) {
            if !allow_rename {
                return Err(SubstError::FieldCaptureRefused { field: bound_name });
            }
            let fresh = ctx.gensym(bound_name);
            binders[i].set_name(fresh);
            let fresh_ident = Expr::synthetic_ident(fresh);
            let fresh_free = SymbolSet::singleton(fresh);
            for later in binders.iter_mut().skip(i + 1) {
                subst_expr(
                    ctx,
                    limits,
                    depth,
                    later.subterm_mut(),
                    bound_name,
                    &fresh_ident,
                    &fresh_free,
                )?;
            }
            if let Some(tail) = tail.as_deref_mut() {
                subst_expr(ctx, limits, depth, tail, bound_name, &fresh_ident, &fresh_free)?;
            }
        }
    }
    if let Some(tail) = tail {
        subst_expr(ctx, limits, depth, tail, name, replacement, free_repl)?;
    }
    Ok(())
}

fn subst_stmt_inner(
    ctx: &mut Context,
    limits: &Limits,
    depth: u32,
    stmt: &mut Stmt,
    name: Symbol,
    replacement: &Expr,
    free_repl: &SymbolSet,
) -> Result<()> {
    check_depth(limits, depth)?;
    let depth = depth + 1;
    match stmt {
        Stmt::Empty => Ok(()),
        Stmt::Expr(e) | Stmt::Return(e) => subst_expr(ctx, limits, depth, e, name, replacement, free_repl),
        Stmt::Block(b) => subst_block_inner(ctx, limits, depth, b, name, replacement, free_repl),
        Stmt::Decl { ty, init, .. } => {
            // The declared name's own scope starts at the *next*
            // statement in the enclosing block, so it never shadows its
            // own type or initializer here — that rule lives in
            // `subst_block_inner`.
            subst_expr(ctx, limits, depth, ty, name, replacement, free_repl)?;
            if let Some(init) = init {
                subst_expr(ctx, limits, depth, init, name, replacement, free_repl)?;
            }
            Ok(())
        }
        Stmt::IfThenElse { arms, else_block } => {
            for (cond, then_block) in arms {
                subst_expr(ctx, limits, depth, cond, name, replacement, free_repl)?;
                subst_block_inner(ctx, limits, depth, then_block, name, replacement, free_repl)?;
            }
            if let Some(else_block) = else_block {
                subst_block_inner(ctx, limits, depth, else_block, name, replacement, free_repl)?;
            }
            Ok(())
        }
    }
}

/// Block-level substitution: a `Decl` binds every statement after it in
/// the same block. If a `Decl`'s name equals `name`, substitution must
/// stop propagating once it reaches that declaration (everything from
/// there on is shadowed). If a `Decl`'s name is free in `replacement`, it
/// is α-renamed and the rename is propagated into the rest of the block
/// — spec §9's resolution of the source's block-substitution gap.
fn subst_block_inner(
    ctx: &mut Context,
    limits: &Limits,
    depth: u32,
    block: &mut Block,
    name: Symbol,
    replacement: &Expr,
    free_repl: &SymbolSet,
) -> Result<()> {
    check_depth(limits, depth)?;
    let depth = depth + 1;
    let len = block.0.len();
    for i in 0..len {
        subst_stmt_inner(
            ctx,
            limits,
            depth,
            &mut block.0[i],
            name,
            replacement,
            free_repl,
        )?;
        let Stmt::Decl { name: decl_name, .. } = &mut block.0[i] else {
            continue;
        };
        let decl_name = *decl_name;
        if decl_name == name {
            return Ok(());
        }
        if free_repl.contains(decl_name) {
            let fresh = ctx.gensym(decl_name);
            if let Stmt::Decl { name: decl_name, .. } = &mut block.0[i] {
                *decl_name = fresh;
            }
            let fresh_ident = Expr::synthetic_ident(fresh);
            let fresh_free = SymbolSet::singleton(fresh);
            for stmt in block.0.iter_mut().skip(i + 1) {
                subst_stmt_inner(ctx, limits, depth, stmt, decl_name, &fresh_ident, &fresh_free)?;
            }
        }
    }
    Ok(())
}
