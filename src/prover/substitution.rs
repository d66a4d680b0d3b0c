//! Variable bindings.

use std::fmt;

use im::OrdMap;

use crate::gdl::{Term, Variable};

/// A persistent map from variables to terms.
///
/// Cloning is O(1) and extending a clone never disturbs the original, so
/// the prover hands substitutions down its search tree by value.
#[derive(Clone, Default, PartialEq, Eq, Hash)]
pub struct Substitution(OrdMap<Variable, Term>);

impl Substitution {
    /// The empty substitution.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Look up a variable's binding.
    #[must_use]
    pub fn get(&self, variable: &Variable) -> Option<&Term> {
        self.0.get(variable)
    }

    /// Check whether a variable is bound.
    #[must_use]
    pub fn contains(&self, variable: &Variable) -> bool {
        self.0.contains_key(variable)
    }

    /// Bind a variable, replacing any previous binding.
    pub fn insert(&mut self, variable: Variable, term: Term) {
        self.0.insert(variable, term);
    }

    /// Return a copy with one more binding.
    #[must_use]
    pub fn with(&self, variable: Variable, term: Term) -> Self {
        Self(self.0.update(variable, term))
    }

    /// Combine two substitutions. Where both bind a variable, `other` wins.
    /// Neither input is changed.
    #[must_use]
    pub fn compose(&self, other: &Substitution) -> Substitution {
        if other.0.is_empty() {
            return self.clone();
        }
        if self.0.is_empty() {
            return other.clone();
        }
        Substitution(other.0.clone().union(self.0.clone()))
    }

    /// Number of bindings.
    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// True when nothing is bound.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Iterate over bindings in variable order.
    pub fn iter(&self) -> impl Iterator<Item = (&Variable, &Term)> {
        self.0.iter()
    }
}

impl FromIterator<(Variable, Term)> for Substitution {
    fn from_iter<I: IntoIterator<Item = (Variable, Term)>>(iter: I) -> Self {
        Self(iter.into_iter().collect())
    }
}

impl fmt::Display for Substitution {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("{")?;
        for (variable, term) in self.0.iter() {
            write!(f, " {}/{}", variable, term)?;
        }
        f.write_str(" }")
    }
}

impl fmt::Debug for Substitution {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(self, f)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::intern::Interner;

    #[test]
    fn test_compose_is_right_biased() {
        let pool = Interner::new();
        let x = pool.variable("?x");
        let y = pool.variable("?y");
        let a = Term::Constant(pool.constant("a"));
        let b = Term::Constant(pool.constant("b"));

        let first: Substitution = [(x.clone(), a.clone()), (y.clone(), a.clone())]
            .into_iter()
            .collect();
        let second = Substitution::new().with(x.clone(), b.clone());

        let composed = first.compose(&second);
        assert_eq!(composed.get(&x), Some(&b));
        assert_eq!(composed.get(&y), Some(&a));

        // Inputs untouched.
        assert_eq!(first.get(&x), Some(&a));
        assert_eq!(second.len(), 1);
    }

    #[test]
    fn test_with_does_not_mutate() {
        let pool = Interner::new();
        let empty = Substitution::new();
        let bound = empty.with(pool.variable("?x"), Term::Constant(pool.constant("a")));

        assert!(empty.is_empty());
        assert_eq!(bound.len(), 1);
        assert_eq!(bound.to_string(), "{ ?x/a }");
    }
}
