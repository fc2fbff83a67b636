//! String interning: canonical, `Copy` handles for identifier text.
//!
//! Two identifiers with equal text intern to the same [`Symbol`]; `Symbol`
//! equality is handle identity (a `u32` compare), never a string compare.

use std::fmt;

use rustc_hash::FxHashMap;

/// A compact, `Copy` handle to an interned string.
///
/// Equality on `Symbol` is reference identity over the interned text: two
/// symbols compare equal iff they were interned (in the same [`Interner`])
/// from equal text.
#[derive(Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Symbol(u32);

impl Symbol {
    #[must_use]
    pub fn index(self) -> u32 {
        self.0
    }
}

impl fmt::Debug for Symbol {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Symbol({})", self.0)
    }
}

/// Owns the interned-string table for one compilation [`crate::Context`].
///
/// Not global: spec §5 forbids implicit process-wide state, so every
/// `Interner` is a plain value owned by a `Context`, created fresh per
/// invocation.
#[derive(Debug, Default)]
pub struct Interner {
    map: FxHashMap<Box<str>, Symbol>,
    strings: Vec<Box<str>>,
    /// Per-base counters used by `gensym` to derive `base$N` candidates.
    gensym_counters: FxHashMap<Symbol, u32>,
}

impl Interner {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Intern `text`, returning the existing `Symbol` if `text` was already
    /// interned, or allocating a new one.
    pub fn intern(&mut self, text: &str) -> Symbol {
        if let Some(&sym) = self.map.get(text) {
            return sym;
        }
        let sym = Symbol(u32::try_from(self.strings.len()).expect("symbol table overflow"));
        let owned: Box<str> = text.into();
        self.strings.push(owned.clone());
        self.map.insert(owned, sym);
        sym
    }

    /// Resolve a `Symbol` back to its text.
    #[must_use]
    pub fn resolve(&self, sym: Symbol) -> &str {
        &self.strings[sym.0 as usize]
    }

    /// Allocate a symbol guaranteed distinct from every symbol interned so
    /// far (by either `intern` or `gensym`), derived textually from `base`.
    ///
    /// Candidates are `base$1`, `base$2`, ... (skipping any that happen to
    /// already be interned, so repeated gensym calls on the same base are
    /// deterministic modulo the counter and never collide).
    pub fn gensym(&mut self, base: Symbol) -> Symbol {
        let base_text = self.resolve(base).to_owned();
        loop {
            let counter = self.gensym_counters.entry(base).or_insert(0);
            *counter += 1;
            let candidate = format!("{base_text}${counter}");
            if !self.map.contains_key(candidate.as_str()) {
                return self.intern(&candidate);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn equal_text_interns_to_the_same_symbol() {
        let mut i = Interner::new();
        let a = i.intern("foo");
        let b = i.intern("foo");
        assert_eq!(a, b);
    }

    #[test]
    fn distinct_text_interns_to_distinct_symbols() {
        let mut i = Interner::new();
        let a = i.intern("foo");
        let b = i.intern("bar");
        assert_ne!(a, b);
    }

    #[test]
    fn resolve_round_trips() {
        let mut i = Interner::new();
        let a = i.intern("hello");
        assert_eq!(i.resolve(a), "hello");
    }

    #[test]
    fn gensym_is_fresh_and_never_collides_with_prior_interns() {
        let mut i = Interner::new();
        let x = i.intern("x");
        let x1 = i.gensym(x);
        let x2 = i.gensym(x);
        assert_ne!(x1, x2);
        assert_ne!(x1, x);
        assert_ne!(x2, x);
    }

    #[test]
    fn gensym_avoids_a_name_already_taken_by_a_real_intern() {
        let mut i = Interner::new();
        let x = i.intern("x");
        // Pre-intern the name gensym would otherwise pick first.
        i.intern("x$1");
        let fresh = i.gensym(x);
        assert_ne!(i.resolve(fresh), "x$1");
    }
}
