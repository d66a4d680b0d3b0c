//! Symbol to GDL conversion.

use std::sync::Arc;

use crate::error::{Error, Result};
use crate::intern::Interner;
use crate::symbol::{Atom, List, Symbol, SymbolFactory};

use super::{Constant, Gdl, Literal, Sentence, Term};

/// Gives parsed symbols their GDL meaning.
///
/// Atoms starting with `?` are variables and every other atom is a constant.
/// A list is a function in term position and a relation in sentence
/// position, named by its head atom. `(<= head body...)` is a rule, and in
/// literal position `not`, `or` and `distinct` (any case) pick the literal
/// type.
#[derive(Clone, Debug)]
pub struct GdlFactory {
    symbols: SymbolFactory,
}

impl GdlFactory {
    /// Create a factory interning into `pool`.
    #[must_use]
    pub fn new(pool: Arc<Interner>) -> Self {
        Self {
            symbols: SymbolFactory::new(pool),
        }
    }

    /// The pool nodes are interned into.
    #[must_use]
    pub fn pool(&self) -> &Arc<Interner> {
        self.symbols.pool()
    }

    // === Text entry points ===

    /// Parse a whole game description.
    pub fn parse_description(&self, text: &str) -> Result<Vec<Gdl>> {
        self.symbols
            .parse_all(text)?
            .iter()
            .map(|symbol| self.to_gdl(symbol))
            .collect()
    }

    /// Parse one rule or fact.
    pub fn parse_gdl(&self, text: &str) -> Result<Gdl> {
        self.to_gdl(&self.symbols.parse(text)?)
    }

    /// Parse one term.
    pub fn parse_term(&self, text: &str) -> Result<Term> {
        self.to_term(&self.symbols.parse(text)?)
    }

    /// Parse one sentence.
    pub fn parse_sentence(&self, text: &str) -> Result<Sentence> {
        self.to_sentence(&self.symbols.parse(text)?)
    }

    /// Parse one body literal.
    pub fn parse_literal(&self, text: &str) -> Result<Literal> {
        self.to_literal(&self.symbols.parse(text)?)
    }

    // === Symbol conversion ===

    /// Convert a top-level item: a rule or a sentence.
    pub fn to_gdl(&self, symbol: &Symbol) -> Result<Gdl> {
        if let Symbol::List(list) = symbol {
            if head_atom(list)?.text() == "<=" {
                return self.to_rule(list);
            }
        }
        Ok(Gdl::Sentence(self.to_sentence(symbol)?))
    }

    /// Convert a term.
    pub fn to_term(&self, symbol: &Symbol) -> Result<Term> {
        match symbol {
            Symbol::Atom(atom) if atom.text().starts_with('?') => {
                Ok(Term::Variable(self.pool().variable(atom.text())))
            }
            Symbol::Atom(atom) => Ok(Term::Constant(self.pool().constant(atom.text()))),
            Symbol::List(list) => {
                let name = self.name(list)?;
                let args = self.args(list)?;
                Ok(Term::Function(self.pool().function(name, args)))
            }
        }
    }

    /// Convert a sentence. `(p)` and `p` are the same proposition.
    pub fn to_sentence(&self, symbol: &Symbol) -> Result<Sentence> {
        match symbol {
            Symbol::Atom(atom) => {
                let name = self.constant_name(atom, symbol)?;
                Ok(self.pool().sentence(name, Vec::new()))
            }
            Symbol::List(list) => {
                let name = self.name(list)?;
                let args = self.args(list)?;
                Ok(self.pool().sentence(name, args))
            }
        }
    }

    /// Convert a body literal.
    pub fn to_literal(&self, symbol: &Symbol) -> Result<Literal> {
        let Symbol::List(list) = symbol else {
            return Ok(Literal::Sentence(self.to_sentence(symbol)?));
        };

        let keyword = head_atom(list)?.text();
        if keyword.eq_ignore_ascii_case("distinct") {
            if list.len() != 3 {
                return Err(Error::format("distinct takes exactly 2 arguments", list.to_string()));
            }
            let left = self.to_term(&list.items()[1])?;
            let right = self.to_term(&list.items()[2])?;
            Ok(Literal::Distinct(self.pool().distinct(left, right)))
        } else if keyword.eq_ignore_ascii_case("not") {
            if list.len() != 2 {
                return Err(Error::format("not takes exactly 1 argument", list.to_string()));
            }
            let body = self.to_literal(&list.items()[1])?;
            Ok(Literal::Not(self.pool().not(body)))
        } else if keyword.eq_ignore_ascii_case("or") {
            let disjuncts = list.items()[1..]
                .iter()
                .map(|item| self.to_literal(item))
                .collect::<Result<Vec<_>>>()?;
            Ok(Literal::Or(self.pool().or(disjuncts)))
        } else {
            Ok(Literal::Sentence(self.to_sentence(symbol)?))
        }
    }

    fn to_rule(&self, list: &List) -> Result<Gdl> {
        if list.len() < 2 {
            return Err(Error::format("rule without a head", list.to_string()));
        }
        let head = self.to_sentence(&list.items()[1])?;
        let body = list.items()[2..]
            .iter()
            .map(|item| self.to_literal(item))
            .collect::<Result<Vec<_>>>()?;
        Ok(Gdl::Rule(self.pool().rule(head, body)))
    }

    fn name(&self, list: &List) -> Result<Constant> {
        let atom = head_atom(list)?;
        self.constant_name(atom, &Symbol::List(list.clone()))
    }

    fn constant_name(&self, atom: &Atom, context: &Symbol) -> Result<Constant> {
        if atom.text().starts_with('?') {
            return Err(Error::format("variable used as a name", context.to_string()));
        }
        Ok(self.pool().constant(atom.text()))
    }

    fn args(&self, list: &List) -> Result<Vec<Term>> {
        list.items()[1..]
            .iter()
            .map(|item| self.to_term(item))
            .collect()
    }
}

fn head_atom(list: &List) -> Result<&Atom> {
    match list.get(0) {
        None => Err(Error::format("empty list", "()")),
        Some(Symbol::Atom(atom)) => Ok(atom),
        Some(Symbol::List(_)) => Err(Error::format("list head is not an atom", list.to_string())),
    }
}
