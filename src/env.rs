use smallvec::SmallVec;
use std::fmt;
use std::rc::Rc;

use crate::error::{Error, Result};
use crate::term::{Term, Var};

struct Binding {
    var: Var,
    term: Term,
    next: Option<Rc<Binding>>,
}

/// A persistent substitution from variables to terms.
///
/// Bindings form a shared parent-pointer chain: extending an environment
/// returns a new view and leaves every other view untouched, so a branch of
/// the search that is abandoned is simply dropped.
///
/// Each variable is bound at most once and variable-to-variable chains never
/// loop, which keeps [`Environment::walk`] total.
#[derive(Clone, Default)]
pub struct Environment {
    head: Option<Rc<Binding>>,
    len: usize,
}

impl Environment {
    /// Create an empty environment
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of bindings
    #[must_use]
    pub fn len(&self) -> usize {
        self.len
    }

    /// True if nothing is bound
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Iterate over the bindings, most recent first
    #[must_use]
    pub fn iter(&self) -> Bindings<'_> {
        Bindings {
            next: self.head.as_deref(),
        }
    }

    /// The term directly bound to `var`, without following chains
    #[must_use]
    pub fn lookup(&self, var: Var) -> Option<&Term> {
        self.iter()
            .find(|(bound, _)| *bound == var)
            .map(|(_, term)| term)
    }

    /// Follow variable bindings until reaching a non-variable term or an
    /// unbound variable.
    ///
    /// Only the outermost term is dereferenced; variables nested inside a
    /// relation are left as they are (see [`Environment::resolve`]).
    #[must_use]
    pub fn walk<'a>(&'a self, term: &'a Term) -> &'a Term {
        let mut current = term;
        while let Term::Var(var) = current {
            match self.lookup(*var) {
                Some(next) => current = next,
                None => break,
            }
        }
        current
    }

    /// Bind an unbound variable without any checks.
    pub(crate) fn extend(&self, var: Var, term: Term) -> Self {
        Self {
            head: Some(Rc::new(Binding {
                var,
                term,
                next: self.head.clone(),
            })),
            len: self.len + 1,
        }
    }

    /// Return a new environment where `var` is bound to `term`.
    ///
    /// # Errors
    ///
    /// [`Error::AlreadyBound`] if `var` already has a binding, and
    /// [`Error::CyclicBinding`] if `term` dereferences back to `var`.
    pub fn bind(&self, var: Var, term: Term) -> Result<Self> {
        if let Some(existing) = self.lookup(var) {
            return Err(Error::AlreadyBound {
                var,
                existing: existing.to_string(),
            });
        }
        if self.walk(&term).as_var() == Some(var) {
            return Err(Error::CyclicBinding(var));
        }
        Ok(self.extend(var, term))
    }

    /// Substitute every bound variable in `term`, recursively through
    /// relations. Unbound variables are kept.
    ///
    /// # Errors
    ///
    /// [`Error::CyclicTerm`] if a variable is bound to a structure that
    /// contains itself, since the substituted term would be infinite.
    pub fn resolve(&self, term: &Term) -> Result<Term> {
        let mut active: SmallVec<[Var; 8]> = SmallVec::new();
        self.resolve_with(term, &mut active)
    }

    fn resolve_with(&self, term: &Term, active: &mut SmallVec<[Var; 8]>) -> Result<Term> {
        match term {
            Term::Const(_) => Ok(term.clone()),
            Term::Var(var) => {
                let Some(bound) = self.lookup(*var) else {
                    return Ok(term.clone());
                };
                if active.contains(var) {
                    return Err(Error::CyclicTerm(*var));
                }
                active.push(*var);
                let resolved = self.resolve_with(bound, active);
                active.pop();
                resolved
            }
            Term::Relation(rel) => {
                if term.is_ground() {
                    return Ok(term.clone());
                }
                rel.iter()
                    .map(|t| self.resolve_with(t, active))
                    .collect::<Result<Vec<_>>>()
                    .map(Term::relation)
            }
        }
    }
}

impl Drop for Environment {
    // Unlink uniquely owned bindings one at a time so long chains do not
    // recurse on drop.
    fn drop(&mut self) {
        let mut next = self.head.take();
        while let Some(binding) = next {
            match Rc::try_unwrap(binding) {
                Ok(mut binding) => next = binding.next.take(),
                Err(_) => break,
            }
        }
    }
}

/// Two environments are equal when they hold the same set of bindings.
impl PartialEq for Environment {
    fn eq(&self, other: &Self) -> bool {
        self.len == other.len
            && self
                .iter()
                .all(|(var, term)| other.lookup(var) == Some(term))
    }
}

impl Eq for Environment {}

impl fmt::Debug for Environment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let bindings: Vec<_> = self.iter().collect();
        f.debug_map()
            .entries(bindings.into_iter().rev())
            .finish()
    }
}

impl fmt::Display for Environment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let bindings: Vec<_> = self.iter().collect();
        f.write_str("{")?;
        for (i, (var, term)) in bindings.into_iter().rev().enumerate() {
            if i > 0 {
                f.write_str(", ")?;
            }
            write!(f, "{var}: {term}")?;
        }
        f.write_str("}")
    }
}

/// Iterator over the bindings of an [`Environment`], most recent first.
#[derive(Clone)]
pub struct Bindings<'a> {
    next: Option<&'a Binding>,
}

impl fmt::Debug for Bindings<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Bindings").finish_non_exhaustive()
    }
}

impl<'a> Iterator for Bindings<'a> {
    type Item = (Var, &'a Term);

    fn next(&mut self) -> Option<Self::Item> {
        let binding = self.next?;
        self.next = binding.next.as_deref();
        Some((binding.var, &binding.term))
    }
}

impl<'a> IntoIterator for &'a Environment {
    type Item = (Var, &'a Term);
    type IntoIter = Bindings<'a>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}
