//! Finite sets of interned symbols (spec §4.B).
//!
//! No ordering is guaranteed; duplicates collapse. `free` (spec-named) is
//! just `Drop`, which Rust's ownership model gives us for free — there is
//! no explicit `free` function here.

use rustc_hash::FxHashSet;

use crate::interner::Symbol;

/// A finite set of symbols.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SymbolSet(FxHashSet<Symbol>);

impl SymbolSet {
    /// The empty set.
    #[must_use]
    pub fn empty() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn singleton(sym: Symbol) -> Self {
        let mut set = Self::empty();
        set.add(sym);
        set
    }

    pub fn add(&mut self, sym: Symbol) {
        self.0.insert(sym);
    }

    pub fn delete(&mut self, sym: Symbol) {
        self.0.remove(&sym);
    }

    #[must_use]
    pub fn contains(&self, sym: Symbol) -> bool {
        self.0.contains(&sym)
    }

    /// In-place union: `self |= other`.
    pub fn union(&mut self, other: &SymbolSet) {
        self.0.extend(other.0.iter().copied());
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Set difference: `self ∖ other`, returned as a new set.
    #[must_use]
    pub fn difference(&self, other: &SymbolSet) -> SymbolSet {
        self.0.difference(&other.0).copied().collect()
    }

    pub fn iter(&self) -> impl Iterator<Item = Symbol> + '_ {
        self.0.iter().copied()
    }
}

impl FromIterator<Symbol> for SymbolSet {
    fn from_iter<T: IntoIterator<Item = Symbol>>(iter: T) -> Self {
        Self(iter.into_iter().collect())
    }
}

impl Extend<Symbol> for SymbolSet {
    fn extend<T: IntoIterator<Item = Symbol>>(&mut self, iter: T) {
        self.0.extend(iter);
    }
}
