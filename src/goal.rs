use indexmap::IndexSet;
use std::fmt;
use std::rc::Rc;

use crate::term::{Relation, Term, Var};

/// A proof obligation.
///
/// Sub-goals are shared, so cloning a goal is cheap.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Goal {
    /// Trivially true
    Top,
    /// Resolve the relation against the program's rules
    Just(Relation),
    /// Every goal must hold, proven left to right
    Conj(Rc<[Goal]>),
    /// At least one goal must hold; each is tried from the same environment
    Disj(Rc<[Goal]>),
    /// Holds iff the inner goal has no proof (negation as failure)
    Not(Rc<Goal>),
}

impl Goal {
    /// A sub-goal resolved against the rule database
    pub fn just(terms: impl IntoIterator<Item = Term>) -> Self {
        Goal::Just(Relation::new(terms))
    }

    /// Conjunction of goals
    pub fn conj(goals: impl IntoIterator<Item = Goal>) -> Self {
        Goal::Conj(goals.into_iter().collect())
    }

    /// Disjunction of goals
    pub fn disj(goals: impl IntoIterator<Item = Goal>) -> Self {
        Goal::Disj(goals.into_iter().collect())
    }

    /// Negation as failure
    #[must_use]
    #[allow(clippy::should_implement_trait)]
    pub fn not(goal: Goal) -> Self {
        Goal::Not(Rc::new(goal))
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
            Goal::Top => {}
            Goal::Just(rel) => rel.collect_vars(vars),
            Goal::Conj(goals) | Goal::Disj(goals) => {
                for goal in goals.iter() {
                    goal.collect_vars(vars);
                }
            }
            Goal::Not(inner) => inner.collect_vars(vars),
        }
    }
}

impl From<Relation> for Goal {
    fn from(rel: Relation) -> Self {
        Goal::Just(rel)
    }
}

fn write_joined(f: &mut fmt::Formatter<'_>, name: &str, goals: &[Goal]) -> fmt::Result {
    write!(f, "{name}(")?;
    for (i, goal) in goals.iter().enumerate() {
        if i > 0 {
            f.write_str(", ")?;
        }
        write!(f, "{goal}")?;
    }
    f.write_str(")")
}

impl fmt::Display for Goal {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Goal::Top => f.write_str("true"),
            Goal::Just(rel) => write!(f, "{rel}"),
            Goal::Conj(goals) => write_joined(f, "and", goals),
            Goal::Disj(goals) => write_joined(f, "or", goals),
            Goal::Not(inner) => write!(f, "not({inner})"),
        }
    }
}

/// A head/body pair: `head` holds whenever `body` can be proven.
///
/// Variables of the body that do not occur in the head are local to the rule.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(into = "RuleParts", from = "RuleParts")
)]
pub struct Rule {
    head: Term,
    body: Goal,
    /// Distinct variables of head and body, renamed together on every use
    vars: Rc<[Var]>,
}

impl Rule {
    /// Create a rule
    #[must_use]
    pub fn new(head: Term, body: Goal) -> Self {
        let mut vars = head.vars();
        body.collect_vars(&mut vars);
        Self {
            head,
            body,
            vars: vars.into_iter().collect(),
        }
    }

    pub(crate) fn from_parts(head: Term, body: Goal, vars: Rc<[Var]>) -> Self {
        Self { head, body, vars }
    }

    /// A rule whose body is [`Goal::Top`]
    #[must_use]
    pub fn fact(head: Term) -> Self {
        Self::new(head, Goal::Top)
    }

    /// The conclusion
    #[must_use]
    pub fn head(&self) -> &Term {
        &self.head
    }

    /// The conditions
    #[must_use]
    pub fn body(&self) -> &Goal {
        &self.body
    }

    /// Distinct variables of head and body
    #[must_use]
    pub fn vars(&self) -> &[Var] {
        &self.vars
    }

    /// True if the rule mentions no variables
    #[must_use]
    pub fn is_ground(&self) -> bool {
        self.vars.is_empty()
    }
}

impl fmt::Display for Rule {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.body {
            Goal::Top => write!(f, "{}.", self.head),
            ref body => write!(f, "{} :- {body}.", self.head),
        }
    }
}

#[cfg(feature = "serde")]
#[derive(serde::Serialize, serde::Deserialize)]
struct RuleParts {
    head: Term,
    body: Goal,
}

#[cfg(feature = "serde")]
impl From<Rule> for RuleParts {
    fn from(rule: Rule) -> Self {
        Self {
            head: rule.head,
            body: rule.body,
        }
    }
}

#[cfg(feature = "serde")]
impl From<RuleParts> for Rule {
    fn from(parts: RuleParts) -> Self {
        Rule::new(parts.head, parts.body)
    }
}

/// An ordered rule database.
///
/// Rule order decides solution order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(transparent)
)]
pub struct Program {
    rules: Vec<Rule>,
}

impl Program {
    /// Create an empty program
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a rule after all existing ones
    pub fn push(&mut self, rule: Rule) {
        self.rules.push(rule);
    }

    /// The rules, in program order
    #[must_use]
    pub fn rules(&self) -> &[Rule] {
        &self.rules
    }

    /// Number of rules
    #[must_use]
    pub fn len(&self) -> usize {
        self.rules.len()
    }

    /// True if the program has no rules
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.rules.is_empty()
    }

    /// Iterate over the rules in program order
    pub fn iter(&self) -> std::slice::Iter<'_, Rule> {
        self.rules.iter()
    }
}

impl FromIterator<Rule> for Program {
    fn from_iter<I: IntoIterator<Item = Rule>>(iter: I) -> Self {
        Self {
            rules: iter.into_iter().collect(),
        }
    }
}

impl Extend<Rule> for Program {
    fn extend<I: IntoIterator<Item = Rule>>(&mut self, iter: I) {
        self.rules.extend(iter);
    }
}

impl<'a> IntoIterator for &'a Program {
    type Item = &'a Rule;
    type IntoIter = std::slice::Iter<'a, Rule>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl fmt::Display for Program {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for rule in &self.rules {
            writeln!(f, "{rule}")?;
        }
        Ok(())
    }
}
