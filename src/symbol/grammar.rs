//! Symbol nodes: atoms and lists.

use std::fmt;
use std::hash::{Hash, Hasher};
use std::sync::Arc;

use rustc_hash::FxHasher;

/// A bare token such as `role`, `?x` or `<=`.
#[derive(Clone, PartialEq, Eq, Hash)]
pub struct Atom(Arc<str>);

impl Atom {
    pub(crate) fn new(text: &str) -> Self {
        Self(Arc::from(text))
    }

    /// The token text.
    #[must_use]
    pub fn text(&self) -> &str {
        &self.0
    }

    /// Check whether both handles point at the same pooled atom.
    #[must_use]
    pub fn ptr_eq(&self, other: &Self) -> bool {
        Arc::ptr_eq(&self.0, &other.0)
    }
}

impl std::borrow::Borrow<str> for Atom {
    fn borrow(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Atom {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl fmt::Debug for Atom {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

#[derive(PartialEq, Eq)]
pub(crate) struct ListData {
    hash: u64,
    items: Box<[Symbol]>,
}

/// A parenthesized sequence of symbols.
#[derive(Clone)]
pub struct List(Arc<ListData>);

interned_node!(List);

impl List {
    pub(crate) fn new(items: Vec<Symbol>) -> Self {
        let mut hasher = FxHasher::default();
        items.hash(&mut hasher);
        Self(Arc::new(ListData {
            hash: hasher.finish(),
            items: items.into_boxed_slice(),
        }))
    }

    /// The elements, in order.
    #[must_use]
    pub fn items(&self) -> &[Symbol] {
        &self.0.items
    }

    /// Number of elements.
    #[must_use]
    pub fn len(&self) -> usize {
        self.0.items.len()
    }

    /// True for `()`.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.items.is_empty()
    }

    /// Get an element by position.
    #[must_use]
    pub fn get(&self, index: usize) -> Option<&Symbol> {
        self.0.items.get(index)
    }
}

impl fmt::Display for List {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("(")?;
        for (i, item) in self.0.items.iter().enumerate() {
            if i > 0 {
                f.write_str(" ")?;
            }
            item.fmt(f)?;
        }
        f.write_str(")")
    }
}

/// A parsed s-expression.
#[derive(Clone, PartialEq, Eq, Hash)]
pub enum Symbol {
    /// A token.
    Atom(Atom),
    /// A parenthesized list.
    List(List),
}

impl Symbol {
    /// The atom, if this symbol is one.
    #[must_use]
    pub fn as_atom(&self) -> Option<&Atom> {
        match self {
            Symbol::Atom(atom) => Some(atom),
            Symbol::List(_) => None,
        }
    }

    /// The list, if this symbol is one.
    #[must_use]
    pub fn as_list(&self) -> Option<&List> {
        match self {
            Symbol::List(list) => Some(list),
            Symbol::Atom(_) => None,
        }
    }

    /// Check whether both symbols are the same pooled node.
    #[must_use]
    pub fn ptr_eq(&self, other: &Symbol) -> bool {
        match (self, other) {
            (Symbol::Atom(a), Symbol::Atom(b)) => a.ptr_eq(b),
            (Symbol::List(a), Symbol::List(b)) => a.ptr_eq(b),
            _ => false,
        }
    }
}

impl fmt::Display for Symbol {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Symbol::Atom(atom) => atom.fmt(f),
            Symbol::List(list) => list.fmt(f),
        }
    }
}

impl fmt::Debug for Symbol {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(self, f)
    }
}
