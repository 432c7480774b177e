use indexmap::IndexSet;
use std::fmt;
use std::rc::Rc;

/// A logic variable.
///
/// Variables are compared by identity: `Named(1)` and `Fresh(1)` are
/// different variables, so identifiers handed out by a [`crate::FreshIds`]
/// generator can never collide with the ones written in a program.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Var {
    /// A variable chosen by the author of a program or query (e.g. `?1`)
    Named(u64),
    /// A variable generated while renaming a rule apart (e.g. `_G7`)
    Fresh(u64),
}

impl Var {
    /// Returns true for variables produced by rule renaming
    #[must_use]
    pub fn is_fresh(self) -> bool {
        matches!(self, Var::Fresh(_))
    }
}

impl fmt::Display for Var {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Var::Named(id) => write!(f, "?{id}"),
            Var::Fresh(id) => write!(f, "_G{id}"),
        }
    }
}

/// An atomic value, equal by value.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Const {
    /// A symbol such as `likes` or `mary`
    Symbol(Rc<str>),
    /// An integer literal
    Int(i64),
}

impl fmt::Display for Const {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Const::Symbol(s) => f.write_str(s),
            Const::Int(n) => write!(f, "{n}"),
        }
    }
}

impl From<&str> for Const {
    fn from(s: &str) -> Self {
        Const::Symbol(Rc::from(s))
    }
}

impl From<i64> for Const {
    fn from(n: i64) -> Self {
        Const::Int(n)
    }
}

/// An ordered, fixed-arity tuple of terms.
///
/// By convention the first element names the relation (`(likes, mary, wine)`),
/// but unification treats it like any other position. Cloning is cheap: the
/// elements are shared.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Relation(Rc<[Term]>);

impl Relation {
    /// Build a relation from its elements
    pub fn new(terms: impl IntoIterator<Item = Term>) -> Self {
        Relation(terms.into_iter().collect())
    }

    /// Number of elements
    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// True for the empty relation `()`
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// The elements, in order
    #[must_use]
    pub fn terms(&self) -> &[Term] {
        &self.0
    }

    /// The first element, conventionally the relation's name
    #[must_use]
    pub fn functor(&self) -> Option<&Term> {
        self.0.first()
    }

    /// Iterate over the elements
    pub fn iter(&self) -> std::slice::Iter<'_, Term> {
        self.0.iter()
    }

    /// Distinct variables, in order of first occurrence
    #[must_use]
    pub fn vars(&self) -> IndexSet<Var> {
        let mut vars = IndexSet::new();
        self.collect_vars(&mut vars);
        vars
    }

    pub(crate) fn collect_vars(&self, vars: &mut IndexSet<Var>) {
        for term in self {
            term.collect_vars(vars);
        }
    }
}

impl<'a> IntoIterator for &'a Relation {
    type Item = &'a Term;
    type IntoIter = std::slice::Iter<'a, Term>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl fmt::Display for Relation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("(")?;
        for (i, term) in self.iter().enumerate() {
            if i > 0 {
                f.write_str(", ")?;
            }
            write!(f, "{term}")?;
        }
        f.write_str(")")
    }
}

/// The value language: compound relations, variables and constants.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Term {
    /// A compound term (e.g. `(parent, charles, james)`)
    Relation(Relation),
    /// A logic variable
    Var(Var),
    /// An atomic value
    Const(Const),
}

impl Term {
    /// Build a relation term from its elements
    pub fn relation(terms: impl IntoIterator<Item = Term>) -> Self {
        Term::Relation(Relation::new(terms))
    }

    /// A programmer-named variable
    #[must_use]
    pub fn var(id: u64) -> Self {
        Term::Var(Var::Named(id))
    }

    /// A symbol constant
    #[must_use]
    pub fn sym(name: &str) -> Self {
        Term::Const(Const::from(name))
    }

    /// An integer constant
    #[must_use]
    pub fn int(n: i64) -> Self {
        Term::Const(Const::Int(n))
    }

    /// The variable, if this term is one
    #[must_use]
    pub fn as_var(&self) -> Option<Var> {
        match self {
            Term::Var(var) => Some(*var),
            _ => None,
        }
    }

    /// The relation, if this term is one
    #[must_use]
    pub fn as_relation(&self) -> Option<&Relation> {
        match self {
            Term::Relation(rel) => Some(rel),
            _ => None,
        }
    }

    /// True if no variable occurs anywhere in the term
    #[must_use]
    pub fn is_ground(&self) -> bool {
        match self {
            Term::Var(_) => false,
            Term::Const(_) => true,
            Term::Relation(rel) => rel.iter().all(Term::is_ground),
        }
    }

    /// Distinct variables, in order of first occurrence
    #[must_use]
    pub fn vars(&self) -> IndexSet<Var> {
        let mut vars = IndexSet::new();
        self.collect_vars(&mut vars);
        vars
    }

    pub(crate) fn collect_vars(&self, vars: &mut IndexSet<Var>) {
        match self {
            Term::Var(var) => {
                vars.insert(*var);
            }
            Term::Const(_) => {}
            Term::Relation(rel) => rel.collect_vars(vars),
        }
    }
}

impl From<Var> for Term {
    fn from(var: Var) -> Self {
        Term::Var(var)
    }
}

impl From<Const> for Term {
    fn from(c: Const) -> Self {
        Term::Const(c)
    }
}

impl From<Relation> for Term {
    fn from(rel: Relation) -> Self {
        Term::Relation(rel)
    }
}

impl From<&str> for Term {
    fn from(name: &str) -> Self {
        Term::sym(name)
    }
}

impl From<i64> for Term {
    fn from(n: i64) -> Self {
        Term::int(n)
    }
}

impl fmt::Display for Term {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Term::Relation(rel) => write!(f, "{rel}"),
            Term::Var(var) => write!(f, "{var}"),
            Term::Const(c) => write!(f, "{c}"),
        }
    }
}
