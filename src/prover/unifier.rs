//! Syntactic unification of sentences.

use crate::gdl::{Sentence, Term, Variable};

use super::substitution::Substitution;

/// Find a substitution making `x` and `y` identical.
///
/// Propositions unify when their names match. Relations unify when name and
/// arity match and every argument pair unifies. A variable unifies with any
/// term, following bindings already made on either side. There is no occurs
/// check. Returns `None` on any mismatch; the inputs are never modified.
#[must_use]
pub fn unify(x: &Sentence, y: &Sentence) -> Option<Substitution> {
    let mut theta = Substitution::new();
    if x.ptr_eq(y) {
        return Some(theta);
    }
    if x.name() != y.name() || x.arity() != y.arity() {
        return None;
    }
    for (a, b) in x.args().iter().zip(y.args()) {
        if !unify_terms(a, b, &mut theta) {
            return None;
        }
    }
    Some(theta)
}

fn unify_terms(x: &Term, y: &Term, theta: &mut Substitution) -> bool {
    if x == y {
        return true;
    }
    match (x, y) {
        (Term::Variable(variable), _) => unify_variable(variable, y, theta),
        (_, Term::Variable(variable)) => unify_variable(variable, x, theta),
        (Term::Function(f), Term::Function(g)) => {
            f.name() == g.name()
                && f.arity() == g.arity()
                && f
                    .args()
                    .iter()
                    .zip(g.args())
                    .all(|(a, b)| unify_terms(a, b, theta))
        }
        // Distinct constants, or a constant against a function.
        _ => false,
    }
}

fn unify_variable(variable: &Variable, x: &Term, theta: &mut Substitution) -> bool {
    if let Some(bound) = theta.get(variable).cloned() {
        return unify_terms(&bound, x, theta);
    }
    if let Term::Variable(other) = x {
        if let Some(bound) = theta.get(other).cloned() {
            return unify_terms(&Term::Variable(variable.clone()), &bound, theta);
        }
    }
    theta.insert(variable.clone(), x.clone());
    true
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::gdl::GdlFactory;
    use crate::intern::Interner;
    use crate::prover::substituter::Substitute;
    use std::sync::Arc;

    fn setup() -> GdlFactory {
        GdlFactory::new(Arc::new(Interner::new()))
    }

    #[test]
    fn test_identical_sentences() {
        let f = setup();
        let s = f.parse_sentence("(cell 1 1 b)").unwrap();
        let theta = unify(&s, &s).unwrap();
        assert!(theta.is_empty());
    }

    #[test]
    fn test_binds_variables_both_sides() {
        let f = setup();
        let x = f.parse_sentence("(legal ?p (mark 1 ?y))").unwrap();
        let y = f.parse_sentence("(legal xplayer (mark ?x 2))").unwrap();

        let theta = unify(&x, &y).unwrap();
        assert_eq!(theta.len(), 3);

        let pool = f.pool();
        assert_eq!(x.substitute(&theta, pool), y.substitute(&theta, pool));
        assert_eq!(x.substitute(&theta, pool).to_string(), "(legal xplayer (mark 1 2))");
    }

    #[test]
    fn test_repeated_variable_must_agree() {
        let f = setup();
        let pattern = f.parse_sentence("(same ?x ?x)").unwrap();

        assert!(unify(&pattern, &f.parse_sentence("(same a a)").unwrap()).is_some());
        assert!(unify(&pattern, &f.parse_sentence("(same a b)").unwrap()).is_none());
    }

    #[test]
    fn test_follows_bindings_through_other_variable() {
        let f = setup();
        let x = f.parse_sentence("(p ?a ?b ?a)").unwrap();
        let y = f.parse_sentence("(p ?c ?c k)").unwrap();

        let theta = unify(&x, &y).unwrap();
        let pool = f.pool();
        assert_eq!(x.substitute(&theta, pool).to_string(), "(p k k k)");
        assert_eq!(y.substitute(&theta, pool).to_string(), "(p k k k)");
    }

    #[test]
    fn test_mismatches() {
        let f = setup();
        let s = |text: &str| f.parse_sentence(text).unwrap();

        assert!(unify(&s("terminal"), &s("open")).is_none());
        assert!(unify(&s("(p a)"), &s("(q a)")).is_none());
        assert!(unify(&s("(p a)"), &s("(p a b)")).is_none());
        assert!(unify(&s("(p (f a))"), &s("(p (g a))")).is_none());
        assert!(unify(&s("(p (f a))"), &s("(p (f a b))")).is_none());
        assert!(unify(&s("(p a)"), &s("(p (f a))")).is_none());
        assert!(unify(&s("terminal"), &s("(terminal x)")).is_none());
    }

    #[test]
    fn test_inputs_untouched() {
        let f = setup();
        let x = f.parse_sentence("(p ?x b)").unwrap();
        let y = f.parse_sentence("(p a ?y)").unwrap();
        let before = (x.to_string(), y.to_string());

        unify(&x, &y).unwrap();
        assert_eq!((x.to_string(), y.to_string()), before);
    }
}
