//! Type-checker, evaluator, and topological-sorter **contract** for the
//! dtc front end (spec §1, §4 "Type checker (declared, not specified
//! here)"; out of scope — only the public contracts are named, not their
//! algorithms).
//!
//! Every method here is a client of [`dtc_ast`]'s semantic operations:
//! `type_equal` would normalize both sides (e.g. via [`dtc_ast::subst`]
//! during β-reduction) and compare with [`dtc_ast::equal`] to get
//! α-equivalence out of a core that only gives syntactic equality (spec
//! §4.D: "Equality is not α-equivalence ... the type checker obtains
//! α-equivalence by normalizing before comparing").
//!
//! A conforming implementation should instrument each phase with
//! `tracing::debug!` spans, per this workspace's logging convention
//! (mirroring the teacher's `tsz-checker`), once a phase body actually
//! exists to instrument — this crate does not depend on `tracing` itself
//! since no such body lives here yet.

use dtc_ast::{Expr, TopLevel};
use dtc_common::Context;

/// The type-checker's public contract (spec §4: `typeCheck`, `typeInfer`,
/// `typeEqual`, `typeEval`, `typeCheckTopLevel`).
pub trait TypeChecker {
    /// Check that `expr` has type `ty` under `ctx`.
    fn type_check(&mut self, ctx: &mut Context, expr: &Expr, ty: &Expr) -> bool;

    /// Infer `expr`'s type, or `None` if it cannot be inferred.
    fn type_infer(&mut self, ctx: &mut Context, expr: &Expr) -> Option<Expr>;

    /// Decide whether `t1` and `t2` denote the same type (α-equivalence
    /// after normalization, not raw [`dtc_ast::equal`]).
    fn type_equal(&mut self, ctx: &mut Context, t1: &Expr, t2: &Expr) -> bool;

    /// Evaluate a type-level term to normal form.
    fn type_eval(&mut self, ctx: &mut Context, ty: &Expr) -> Option<Expr>;

    /// Check one top-level function declaration.
    fn type_check_top_level(&mut self, ctx: &mut Context, top_level: &TopLevel) -> bool;

    /// Dependency-order top-level declarations so that each function is
    /// checked after every top-level it references, or `None` if the
    /// dependency graph has a cycle (spec §4: `topologicalSort`).
    ///
    /// Declared here as a required trait method with no default body —
    /// its algorithm is out of scope for this core (spec §1).
    fn topological_sort(&mut self, ctx: &mut Context, top_levels: &[TopLevel]) -> Option<Vec<usize>>;
}
