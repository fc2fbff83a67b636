//! AST data model and its semantic operations for the dtc compiler front
//! end (spec §2, components C-H): tagged expressions, statements, blocks,
//! top-levels and translation units; structural equality; deep copy;
//! free-variable analysis; capture-avoiding substitution; deallocation;
//! pretty-printing.
//!
//! This is the core the rest of the workspace is a client of: the
//! (external, not implemented here) parser constructs these types, and
//! the (external) type checker drives `equal`, `copy`, `free_vars`, and
//! `subst` to decide type equality and perform β-reduction-style
//! substitution during dependent-type checking.

pub mod ast;
pub mod copy;
pub mod equal;
pub mod free;
pub mod free_vars;
pub mod pretty;
pub mod subst;

pub use ast::{
    BinOp, Block, Expr, ExprKind, Field, Literal, Param, PackField, Stmt, TopLevel,
    TranslationUnit,
};
pub use copy::copy;
pub use equal::{block_equal, equal, stmt_equal};
pub use free::{is_scrubbed, scrub_in_place};
pub use free_vars::{free_vars, free_vars_block, free_vars_stmt};
pub use pretty::Pretty;
pub use subst::{subst, subst_block, subst_stmt, SubstError};
