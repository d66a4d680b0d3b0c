//! Terms: constants, variables and function applications.

use std::borrow::Borrow;
use std::cmp::Ordering;
use std::fmt;
use std::hash::{Hash, Hasher};
use std::sync::Arc;

use rustc_hash::FxHasher;
use smallvec::SmallVec;

/// Argument storage for functions and relations.
/// SmallVec keeps the common 0-3 argument case off the heap.
pub(crate) type Args = SmallVec<[Term; 3]>;

/// A named constant such as `xplayer`, `1` or `mark`.
///
/// Hashes and compares by name, so a `Constant` can be looked up with a
/// plain `&str`.
#[derive(Clone)]
pub struct Constant(Arc<str>);

impl Constant {
    pub(crate) fn new(name: &str) -> Self {
        Self(Arc::from(name))
    }

    /// The constant's name.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.0
    }

    /// Check whether both handles point at the same pooled constant.
    #[must_use]
    pub fn ptr_eq(&self, other: &Self) -> bool {
        Arc::ptr_eq(&self.0, &other.0)
    }
}

impl PartialEq for Constant {
    fn eq(&self, other: &Self) -> bool {
        self.ptr_eq(other) || self.0 == other.0
    }
}

impl Eq for Constant {}

impl Hash for Constant {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.name().hash(state);
    }
}

impl Borrow<str> for Constant {
    fn borrow(&self) -> &str {
        self.name()
    }
}

impl PartialOrd for Constant {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Constant {
    fn cmp(&self, other: &Self) -> Ordering {
        self.name().cmp(other.name())
    }
}

impl fmt::Display for Constant {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl fmt::Debug for Constant {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// A logic variable. The name includes the leading `?`.
#[derive(Clone)]
pub struct Variable(Arc<str>);

impl Variable {
    pub(crate) fn new(name: &str) -> Self {
        Self(Arc::from(name))
    }

    /// The variable's name, including the leading `?`.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.0
    }

    /// Check whether both handles point at the same pooled variable.
    #[must_use]
    pub fn ptr_eq(&self, other: &Self) -> bool {
        Arc::ptr_eq(&self.0, &other.0)
    }
}

impl PartialEq for Variable {
    fn eq(&self, other: &Self) -> bool {
        self.ptr_eq(other) || self.0 == other.0
    }
}

impl Eq for Variable {}

impl Hash for Variable {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.name().hash(state);
    }
}

impl Borrow<str> for Variable {
    fn borrow(&self) -> &str {
        self.name()
    }
}

impl PartialOrd for Variable {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Variable {
    fn cmp(&self, other: &Self) -> Ordering {
        self.name().cmp(other.name())
    }
}

impl fmt::Display for Variable {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl fmt::Debug for Variable {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Shared payload of functions and relations: a name applied to arguments.
#[derive(PartialEq, Eq)]
pub(crate) struct Compound {
    pub(crate) hash: u64,
    pub(crate) name: Constant,
    pub(crate) args: Args,
    pub(crate) ground: bool,
}

impl Compound {
    /// `tag` separates functions from relations with the same shape.
    pub(crate) fn new(tag: u8, name: Constant, args: Args) -> Self {
        let ground = args.iter().all(Term::is_ground);
        let mut hasher = FxHasher::default();
        tag.hash(&mut hasher);
        name.hash(&mut hasher);
        args.hash(&mut hasher);

        Self {
            hash: hasher.finish(),
            name,
            args,
            ground,
        }
    }

    pub(crate) fn cmp_structure(&self, other: &Self) -> Ordering {
        self.name
            .cmp(&other.name)
            .then_with(|| self.args.as_slice().cmp(other.args.as_slice()))
    }

    pub(crate) fn fmt_list(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}", self.name)?;
        for arg in &self.args {
            write!(f, " {}", arg)?;
        }
        f.write_str(")")
    }
}

/// A function application used as a term, e.g. `(mark 1 1)`.
#[derive(Clone)]
pub struct Function(pub(crate) Arc<Compound>);

interned_node!(Function);

impl Function {
    pub(crate) const TAG: u8 = 1;

    pub(crate) fn new(name: Constant, args: Args) -> Self {
        Self(Arc::new(Compound::new(Self::TAG, name, args)))
    }

    /// The function symbol.
    #[must_use]
    pub fn name(&self) -> &Constant {
        &self.0.name
    }

    /// The arguments, in order.
    #[must_use]
    pub fn args(&self) -> &[Term] {
        &self.0.args
    }

    /// Number of arguments.
    #[must_use]
    pub fn arity(&self) -> usize {
        self.0.args.len()
    }

    /// Get an argument by position.
    #[must_use]
    pub fn get(&self, index: usize) -> Option<&Term> {
        self.0.args.get(index)
    }

    /// True if no variable occurs anywhere inside.
    #[must_use]
    pub fn is_ground(&self) -> bool {
        self.0.ground
    }
}

impl PartialOrd for Function {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Function {
    fn cmp(&self, other: &Self) -> Ordering {
        if self.ptr_eq(other) {
            return Ordering::Equal;
        }
        self.0.cmp_structure(&other.0)
    }
}

impl fmt::Display for Function {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt_list(f)
    }
}

/// A GDL term.
#[derive(Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Term {
    /// A constant.
    Constant(Constant),
    /// A variable.
    Variable(Variable),
    /// A function application.
    Function(Function),
}

impl Term {
    /// True if no variable occurs in this term.
    #[must_use]
    pub fn is_ground(&self) -> bool {
        match self {
            Term::Constant(_) => true,
            Term::Variable(_) => false,
            Term::Function(function) => function.is_ground(),
        }
    }

    /// The constant, if this term is one.
    #[must_use]
    pub fn as_constant(&self) -> Option<&Constant> {
        match self {
            Term::Constant(constant) => Some(constant),
            _ => None,
        }
    }

    /// The variable, if this term is one.
    #[must_use]
    pub fn as_variable(&self) -> Option<&Variable> {
        match self {
            Term::Variable(variable) => Some(variable),
            _ => None,
        }
    }

    /// The function, if this term is one.
    #[must_use]
    pub fn as_function(&self) -> Option<&Function> {
        match self {
            Term::Function(function) => Some(function),
            _ => None,
        }
    }

    /// Push every variable occurring in this term onto `out`, in order of
    /// first appearance, without duplicates.
    pub fn collect_variables(&self, out: &mut Vec<Variable>) {
        match self {
            Term::Constant(_) => {}
            Term::Variable(variable) => {
                if !out.contains(variable) {
                    out.push(variable.clone());
                }
            }
            Term::Function(function) => {
                if !function.is_ground() {
                    for arg in function.args() {
                        arg.collect_variables(out);
                    }
                }
            }
        }
    }

    /// Check whether both terms are the same pooled node.
    #[must_use]
    pub fn ptr_eq(&self, other: &Term) -> bool {
        match (self, other) {
            (Term::Constant(a), Term::Constant(b)) => a.ptr_eq(b),
            (Term::Variable(a), Term::Variable(b)) => a.ptr_eq(b),
            (Term::Function(a), Term::Function(b)) => a.ptr_eq(b),
            _ => false,
        }
    }
}

impl From<Constant> for Term {
    fn from(constant: Constant) -> Self {
        Term::Constant(constant)
    }
}

impl From<Variable> for Term {
    fn from(variable: Variable) -> Self {
        Term::Variable(variable)
    }
}

impl From<Function> for Term {
    fn from(function: Function) -> Self {
        Term::Function(function)
    }
}

impl fmt::Display for Term {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Term::Constant(constant) => constant.fmt(f),
            Term::Variable(variable) => variable.fmt(f),
            Term::Function(function) => function.fmt(f),
        }
    }
}

impl fmt::Debug for Term {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(self, f)
    }
}
