use smallvec::SmallVec;
use std::cell::Cell;
use std::rc::Rc;
use std::sync::atomic::{AtomicU64, Ordering};

use crate::goal::{Goal, Rule};
use crate::term::{Relation, Term, Var};

/// Source of unique identifiers for renamed variables.
///
/// Every call must return an identifier never returned before by the same
/// source. Each engine owns its source, so tests can pick a deterministic one.
pub trait FreshIds {
    /// Hand out the next unused identifier
    fn next_id(&self) -> u64;
}

impl<T: FreshIds + ?Sized> FreshIds for &T {
    fn next_id(&self) -> u64 {
        (**self).next_id()
    }
}

/// A deterministic, single-threaded counter.
#[derive(Debug, Default)]
pub struct Counter {
    next: Cell<u64>,
}

impl Counter {
    /// A counter whose first identifier is 0
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// A counter whose first identifier is `first`
    #[must_use]
    pub fn starting_at(first: u64) -> Self {
        Self {
            next: Cell::new(first),
        }
    }

    /// The identifier the next call will return
    #[must_use]
    pub fn peek(&self) -> u64 {
        self.next.get()
    }
}

impl FreshIds for Counter {
    fn next_id(&self) -> u64 {
        let id = self.next.get();
        self.next.set(id + 1);
        id
    }
}

static GLOBAL_IDS: AtomicU64 = AtomicU64::new(0);

/// The process-wide identifier source.
///
/// Identifiers are unique across every engine and thread using it.
#[derive(Debug, Clone, Copy, Default)]
pub struct GlobalIds;

impl FreshIds for GlobalIds {
    fn next_id(&self) -> u64 {
        // Uniqueness is all that matters here, no ordering with other memory
        GLOBAL_IDS.fetch_add(1, Ordering::Relaxed)
    }
}

type Renaming = SmallVec<[(Var, Var); 8]>;

fn rename_var(var: Var, renaming: &Renaming) -> Var {
    renaming
        .iter()
        .find(|(from, _)| *from == var)
        .map_or(var, |(_, to)| *to)
}

fn rename_relation(rel: &Relation, renaming: &Renaming) -> Relation {
    Relation::new(rel.iter().map(|term| rename_term(term, renaming)))
}

fn rename_term(term: &Term, renaming: &Renaming) -> Term {
    match term {
        Term::Var(var) => Term::Var(rename_var(*var, renaming)),
        Term::Const(_) => term.clone(),
        Term::Relation(_) if term.is_ground() => term.clone(),
        Term::Relation(rel) => Term::Relation(rename_relation(rel, renaming)),
    }
}

fn rename_goal(goal: &Goal, renaming: &Renaming) -> Goal {
    match goal {
        Goal::Top => Goal::Top,
        Goal::Just(rel) => Goal::Just(rename_relation(rel, renaming)),
        Goal::Conj(goals) => Goal::Conj(goals.iter().map(|g| rename_goal(g, renaming)).collect()),
        Goal::Disj(goals) => Goal::Disj(goals.iter().map(|g| rename_goal(g, renaming)).collect()),
        Goal::Not(inner) => Goal::Not(Rc::new(rename_goal(inner, renaming))),
    }
}

impl Rule {
    /// Copy the rule with every variable replaced by a fresh one.
    ///
    /// The same variable maps to the same fresh variable throughout the
    /// copy, and each call draws new identifiers from `ids`, so two uses of
    /// one rule never share variables. Ground rules are returned as they are
    /// and draw no identifiers.
    #[must_use]
    pub fn freshen(&self, ids: &dyn FreshIds) -> Rule {
        if self.is_ground() {
            return self.clone();
        }

        let renaming: Renaming = self
            .vars()
            .iter()
            .map(|&var| (var, Var::Fresh(ids.next_id())))
            .collect();

        Rule::from_parts(
            rename_term(self.head(), &renaming),
            rename_goal(self.body(), &renaming),
            renaming.iter().map(|(_, fresh)| *fresh).collect(),
        )
    }
}
