//! AST data model (spec §3).
//!
//! Every node exclusively owns its children: child expressions are
//! `Box<Expr>`, sequences are `Vec<T>`. Identifiers are shared, `Copy`
//! [`Symbol`] handles into whatever [`dtc_common::Interner`] produced
//! them — copying or dropping a tree never touches the interner.

use dtc_common::{Span, Symbol};

/// A literal value (spec §3 "Literal").
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Literal {
    /// The universe of types.
    Type,
    Void,
    U8,
    S8,
    U16,
    S16,
    U32,
    S32,
    U64,
    S64,
    Bool,
    /// A non-negative integer payload.
    Integral(u64),
    Boolean(bool),
}

/// Binary operators (spec §3 `BinOp`).
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum BinOp {
    Eq,
    Ne,
    Lt,
    Le,
    Gt,
    Ge,
    Add,
    Sub,
    /// `andThen`, pretty-printed as `>>` (spec §6).
    AndThen,
}

/// One entry of an ordered parameter list: `FuncType`'s and `Lambda`'s
/// `(param-type, optional param-name)` pairs (spec §3).
///
/// `Lambda` requires every name to be present; `FuncType` allows it to be
/// absent. Both constructs share this one type (design note §9: "binders
/// ... should be modeled as first-class structures ... not as parallel
/// arrays") — `Lambda`'s stronger invariant is a construction-time
/// contract documented on [`Expr::lambda`], not a distinct type.
#[derive(Clone, Debug, PartialEq)]
pub struct Param {
    pub ty: Expr,
    pub name: Option<Symbol>,
}

/// One field of a `Struct` or `Union`: `(field-type, field-name)`.
#[derive(Clone, Debug, PartialEq)]
pub struct Field {
    pub ty: Expr,
    pub name: Symbol,
}

/// One field assignment of a `Pack`: `(field-name, assignment-expr)`.
#[derive(Clone, Debug, PartialEq)]
pub struct PackField {
    pub name: Symbol,
    pub value: Expr,
}

/// An expression, with an optional source location.
///
/// Equality ([`crate::equal`]) and hashing (none — ASTs are not hashed)
/// deliberately ignore `span`: two expressions built from different source
/// ranges but the same shape are the same term. `span` is `None` for
/// synthetic nodes produced by substitution (renamed binders, spliced-in
/// replacements) rather than by the parser.
#[derive(Clone, Debug)]
pub struct Expr {
    pub span: Option<Span>,
    pub kind: ExprKind,
}

#[derive(Clone, Debug, PartialEq)]
pub enum ExprKind {
    Literal(Literal),
    Ident(Symbol),
    BinOp(BinOp, Box<Expr>, Box<Expr>),
    IfThenElse {
        cond: Box<Expr>,
        then_branch: Box<Expr>,
        else_branch: Box<Expr>,
    },
    FuncType {
        ret: Box<Expr>,
        params: Vec<Param>,
    },
    Lambda {
        params: Vec<Param>,
        body: Box<Expr>,
    },
    Call {
        callee: Box<Expr>,
        args: Vec<Expr>,
    },
    /// Dependent record: later field types may refer to earlier field names.
    Struct {
        fields: Vec<Field>,
    },
    /// Non-dependent: field names do not bind.
    Union {
        fields: Vec<Field>,
    },
    Pack {
        ty: Box<Expr>,
        fields: Vec<PackField>,
    },
    Member {
        record: Box<Expr>,
        field: Symbol,
    },
    Pointer(Box<Expr>),
    Reference(Box<Expr>),
    Dereference(Box<Expr>),
    /// A statement lifted into expression position; the statement's own
    /// binders scope over the surrounding term (spec §3).
    Statement(Box<Stmt>),
}

impl Expr {
    #[must_use]
    pub fn new(kind: ExprKind, span: Option<Span>) -> Self {
        Self { span, kind }
    }

    #[must_use]
    pub fn literal(lit: Literal, span: Option<Span>) -> Self {
        Self::new(ExprKind::Literal(lit), span)
    }

    #[must_use]
    pub fn ident(sym: Symbol, span: Option<Span>) -> Self {
        Self::new(ExprKind::Ident(sym), span)
    }

    /// A synthetic identifier with no source location, as produced by
    /// capture-avoiding substitution's binder-renaming step.
    #[must_use]
    pub fn synthetic_ident(sym: Symbol) -> Self {
        Self::ident(sym, None)
    }

    /// Build a `Lambda`. Every `param.name` must be `Some` (spec §3: "each
    /// param-name binds ... param names are required" for `Lambda`,
    /// unlike `FuncType`). Violating this is a caller bug, not a runtime
    /// error this core models, so it is enforced with a debug assertion
    /// rather than a `Result`.
    #[must_use]
    pub fn lambda(params: Vec<Param>, body: Expr, span: Option<Span>) -> Self {
        debug_assert!(
            params.iter().all(|p| p.name.is_some()),
            "Lambda parameters must all be named"
        );
        Self::new(
            ExprKind::Lambda {
                params,
                body: Box::new(body),
            },
            span,
        )
    }
}

/// A statement (spec §3 "Statement").
#[derive(Clone, Debug, PartialEq)]
pub enum Stmt {
    Empty,
    Expr(Expr),
    Return(Expr),
    Block(Block),
    Decl {
        ty: Expr,
        name: Symbol,
        init: Option<Expr>,
    },
    IfThenElse {
        /// `if`/`else if` arms, each a (condition, then-block) pair.
        arms: Vec<(Expr, Block)>,
        else_block: Option<Block>,
    },
}

/// An ordered sequence of statements.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Block(pub Vec<Stmt>);

impl Block {
    #[must_use]
    pub fn new(stmts: Vec<Stmt>) -> Self {
        Self(stmts)
    }

    #[must_use]
    pub fn empty() -> Self {
        Self::default()
    }
}

/// A top-level function declaration.
#[derive(Clone, Debug, PartialEq)]
pub struct TopLevel {
    pub name: Symbol,
    pub ret_ty: Expr,
    pub params: Vec<Param>,
    pub body: Expr,
}

/// A parsed source file: an ordered list of top-level functions.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct TranslationUnit(pub Vec<TopLevel>);

impl TranslationUnit {
    #[must_use]
    pub fn new(top_levels: Vec<TopLevel>) -> Self {
        Self(top_levels)
    }
}
