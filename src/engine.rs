use indexmap::{IndexMap, IndexSet};
use log::{debug, trace};
use std::fmt;
use std::iter;
use std::rc::Rc;

use crate::env::Environment;
use crate::error::Result;
use crate::fresh::{Counter, FreshIds};
use crate::goal::{Goal, Program, Rule};
use crate::term::{Relation, Term, Var};
use crate::unify::unify;

/// A lazy sequence of proofs, one environment per proof.
///
/// Each call to `next` resumes the depth-first search exactly where the
/// previous proof was found. Dropping the sequence abandons the search.
pub struct Solutions<'p> {
    inner: Box<dyn Iterator<Item = Environment> + 'p>,
}

impl<'p> Solutions<'p> {
    fn new(iter: impl Iterator<Item = Environment> + 'p) -> Self {
        Self {
            inner: Box::new(iter),
        }
    }

    fn once(env: Environment) -> Self {
        Self::new(iter::once(env))
    }

    fn empty() -> Self {
        Self::new(iter::empty())
    }
}

impl Iterator for Solutions<'_> {
    type Item = Environment;

    fn next(&mut self) -> Option<Self::Item> {
        self.inner.next()
    }
}

impl fmt::Debug for Solutions<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Solutions").finish_non_exhaustive()
    }
}

/// The SLD resolution search over a fixed program.
///
/// Cheap to copy: it only borrows the program and the identifier source.
#[derive(Clone, Copy)]
pub struct Resolver<'p> {
    program: &'p Program,
    ids: &'p dyn FreshIds,
}

impl fmt::Debug for Resolver<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Resolver")
            .field("rules", &self.program.len())
            .finish_non_exhaustive()
    }
}

impl<'p> Resolver<'p> {
    /// Create a resolver for `program`, renaming rules with identifiers from `ids`
    #[must_use]
    pub fn new(program: &'p Program, ids: &'p dyn FreshIds) -> Self {
        Self { program, ids }
    }

    /// Prove `goal` against every rule, in program order.
    ///
    /// Each rule is renamed apart before its head is unified with `goal`;
    /// every proof of the body of a matching rule is forwarded. Rules are
    /// only renamed and tried when the search reaches them.
    #[must_use]
    pub fn prove_relation(self, goal: Relation, env: Environment) -> Solutions<'p> {
        let goal = Term::Relation(goal);
        Solutions::new(
            self.program
                .iter()
                .enumerate()
                .flat_map(move |(index, rule)| self.try_rule(index, rule, &goal, &env)),
        )
    }

    fn try_rule(self, index: usize, rule: &Rule, goal: &Term, env: &Environment) -> Solutions<'p> {
        let rule = rule.freshen(self.ids);
        if let Some(unified) = unify(goal, rule.head(), env) {
            trace!("rule #{index} matches {goal}: {rule}");
            self.prove_goal(rule.body().clone(), unified)
        } else {
            trace!("rule #{index} does not match {goal}");
            Solutions::empty()
        }
    }

    /// Prove `goal` starting from `env`.
    #[must_use]
    pub fn prove_goal(self, goal: Goal, env: Environment) -> Solutions<'p> {
        match goal {
            Goal::Top => Solutions::once(env),
            Goal::Just(rel) => self.prove_relation(rel, env),
            Goal::Conj(goals) => self.prove_conj(goals, 0, env),
            Goal::Disj(goals) => Solutions::new(
                (0..goals.len()).flat_map(move |i| self.prove_goal(goals[i].clone(), env.clone())),
            ),
            Goal::Not(inner) => Solutions::new(
                iter::once_with(move || {
                    let proven = self
                        .prove_goal(Goal::clone(&inner), env.clone())
                        .next()
                        .is_some();
                    trace!("not({inner}) {}", if proven { "fails" } else { "holds" });
                    (!proven).then_some(env)
                })
                .flatten(),
            ),
        }
    }

    /// Prove `goals[index..]` left to right. Every proof of the first goal
    /// restarts the remaining ones from its environment.
    fn prove_conj(self, goals: Rc<[Goal]>, index: usize, env: Environment) -> Solutions<'p> {
        let Some(first) = goals.get(index).cloned() else {
            return Solutions::once(env);
        };
        Solutions::new(
            self.prove_goal(first, env)
                .flat_map(move |next| self.prove_conj(Rc::clone(&goals), index + 1, next)),
        )
    }
}

/// Run `query` against `program`, starting from an empty environment.
///
/// Rule variables are renamed with identifiers drawn from `ids`. The
/// returned sequence is lazy; a query without proofs yields nothing.
#[must_use]
pub fn resolve<'p>(query: &Relation, program: &'p Program, ids: &'p dyn FreshIds) -> Solutions<'p> {
    debug!("resolving {query} against {} rules", program.len());
    Resolver::new(program, ids).prove_goal(Goal::Just(query.clone()), Environment::new())
}

/// The value `term` is bound to in `env`, dereferenced through variable
/// chains.
#[must_use]
pub fn resolve_value(term: &Term, env: &Environment) -> Term {
    env.walk(term).clone()
}

/// Result of a query: the value of each query variable in one proof
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QueryResult {
    /// Fully resolved bindings of the query variables, in query order
    pub bindings: IndexMap<Var, Term>,
}

impl QueryResult {
    /// Read the values of `vars` out of a proof environment.
    ///
    /// # Errors
    ///
    /// [`crate::Error::CyclicTerm`] if a variable is bound to a structure
    /// that contains itself.
    pub fn from_env(vars: &IndexSet<Var>, env: &Environment) -> Result<Self> {
        let bindings = vars
            .iter()
            .map(|&var| env.resolve(&Term::Var(var)).map(|term| (var, term)))
            .collect::<Result<_>>()?;
        Ok(Self { bindings })
    }

    /// The value of a query variable
    #[must_use]
    pub fn get(&self, var: Var) -> Option<&Term> {
        self.bindings.get(&var)
    }

    /// Render the bindings as a JSON object keyed by variable name.
    ///
    /// # Errors
    ///
    /// Fails only if a term cannot be serialized.
    #[cfg(feature = "serde")]
    pub fn to_json(&self) -> serde_json::Result<String> {
        let mut object = serde_json::Map::new();
        for (var, term) in &self.bindings {
            object.insert(var.to_string(), serde_json::to_value(term)?);
        }
        serde_json::to_string(&object)
    }
}

impl fmt::Display for QueryResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.bindings.is_empty() {
            return f.write_str("true");
        }
        for (i, (var, term)) in self.bindings.iter().enumerate() {
            if i > 0 {
                f.write_str(", ")?;
            }
            write!(f, "{var} = {term}")?;
        }
        Ok(())
    }
}

/// A rule database together with the identifier source used to rename its
/// rules.
#[derive(Debug)]
pub struct Engine<G = Counter> {
    program: Program,
    ids: G,
}

impl Default for Engine {
    fn default() -> Self {
        Self::new()
    }
}

impl Engine {
    /// Create an empty engine with its own [`Counter`]
    #[must_use]
    pub fn new() -> Self {
        Self::with_ids(Counter::new())
    }
}

impl<G: FreshIds> Engine<G> {
    /// Create an empty engine drawing fresh identifiers from `ids`
    pub fn with_ids(ids: G) -> Self {
        Self::with_program(Program::new(), ids)
    }

    /// Create an engine for an existing program
    pub fn with_program(program: Program, ids: G) -> Self {
        Self { program, ids }
    }

    /// Add a rule after all existing ones
    pub fn add_rule(&mut self, rule: Rule) {
        self.program.push(rule);
    }

    /// Add a rule with an empty body
    pub fn add_fact(&mut self, head: Term) {
        self.add_rule(Rule::fact(head));
    }

    /// The rule database
    pub fn program(&self) -> &Program {
        &self.program
    }

    /// The identifier source
    pub fn ids(&self) -> &G {
        &self.ids
    }

    /// Lazily enumerate every proof of `query`
    pub fn query(&self, query: &Relation) -> Solutions<'_> {
        resolve(query, &self.program, &self.ids)
    }

    /// Lazily enumerate the values of the query's variables in every proof
    pub fn query_results<'a>(
        &'a self,
        query: &Relation,
    ) -> impl Iterator<Item = Result<QueryResult>> + 'a {
        let vars = query.vars();
        self.query(query)
            .map(move |env| QueryResult::from_env(&vars, &env))
    }

    /// Returns whether a proof exists; stops at the first one
    pub fn ask(&self, query: &Relation) -> bool {
        self.query(query).next().is_some()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::Error;

    fn init_logging() {
        let _ = env_logger::builder().is_test(true).try_init();
    }

    fn sym(name: &str) -> Term {
        Term::sym(name)
    }

    fn var(id: u64) -> Term {
        Term::var(id)
    }

    fn rel<const N: usize>(terms: [Term; N]) -> Relation {
        Relation::new(terms)
    }

    fn likes_engine() -> Engine {
        let mut engine = Engine::new();
        for (who, what) in [
            ("mary", "wine"),
            ("john", "wine"),
            ("alice", "wine"),
            ("mary", "food"),
        ] {
            engine.add_fact(Term::relation([sym("likes"), sym(who), sym(what)]));
        }
        engine
    }

    fn family_engine() -> Engine {
        let mut engine = Engine::new();
        for person in ["james_i", "charles_i", "charles_ii", "james_ii", "george_i"] {
            engine.add_fact(Term::relation([sym("male"), sym(person)]));
        }
        for person in ["elizabeth", "sophia", "catherine"] {
            engine.add_fact(Term::relation([sym("female"), sym(person)]));
        }
        // (parent, child, parent)
        for (child, parent) in [
            ("charles_i", "james_i"),
            ("elizabeth", "james_i"),
            ("catherine", "charles_i"),
            ("charles_ii", "charles_i"),
            ("james_ii", "charles_i"),
            ("sophia", "elizabeth"),
            ("george_i", "sophia"),
        ] {
            engine.add_fact(Term::relation([sym("parent"), sym(child), sym(parent)]));
        }
        engine.add_rule(Rule::new(
            Term::relation([sym("mother"), var(1), var(2)]),
            Goal::conj([
                Goal::just([sym("parent"), var(1), var(2)]),
                Goal::just([sym("female"), var(2)]),
            ]),
        ));
        engine.add_rule(Rule::new(
            Term::relation([sym("father"), var(1), var(2)]),
            Goal::conj([
                Goal::just([sym("parent"), var(1), var(2)]),
                Goal::just([sym("male"), var(2)]),
            ]),
        ));
        engine.add_rule(Rule::new(
            Term::relation([sym("grandparent"), var(1), var(3)]),
            Goal::conj([
                Goal::just([sym("parent"), var(1), var(2)]),
                Goal::just([sym("parent"), var(2), var(3)]),
            ]),
        ));
        engine
    }

    fn num(n: usize) -> Term {
        (0..n).fold(sym("zero"), |acc, _| Term::relation([sym("s"), acc]))
    }

    fn peano_engine() -> Engine {
        let mut engine = Engine::new();
        // (add, zero, ?1, ?1).
        engine.add_fact(Term::relation([sym("add"), sym("zero"), var(1), var(1)]));
        // (add, (s, ?1), ?2, (s, ?3)) :- (add, ?1, ?2, ?3).
        engine.add_rule(Rule::new(
            Term::relation([
                sym("add"),
                Term::relation([sym("s"), var(1)]),
                var(2),
                Term::relation([sym("s"), var(3)]),
            ]),
            Goal::just([sym("add"), var(1), var(2), var(3)]),
        ));
        engine
    }

    fn collect<G: FreshIds>(engine: &Engine<G>, query: &Relation) -> Vec<QueryResult> {
        engine
            .query_results(query)
            .collect::<Result<Vec<_>>>()
            .expect("Query results must be acyclic")
    }

    fn values(results: &[QueryResult], id: u64) -> Vec<Term> {
        results
            .iter()
            .map(|r| r.get(Var::Named(id)).cloned().expect("Variable must be reported"))
            .collect()
    }

    #[test]
    fn test_ground_query_with_one_proof() {
        init_logging();
        let engine = likes_engine();

        assert_eq!(engine.query(&rel([sym("likes"), sym("mary"), sym("wine")])).count(), 1);
        assert!(engine.ask(&rel([sym("likes"), sym("mary"), sym("wine")])));
    }

    #[test]
    fn test_ground_query_without_proof() {
        let engine = likes_engine();

        assert_eq!(engine.query(&rel([sym("likes"), sym("john"), sym("food")])).count(), 0);
        assert!(!engine.ask(&rel([sym("likes"), sym("john"), sym("food")])));
    }

    #[test]
    fn test_variable_query_in_program_order() {
        let engine = likes_engine();
        let results = collect(&engine, &rel([sym("likes"), sym("mary"), var(1)]));

        assert_eq!(values(&results, 1), vec![sym("wine"), sym("food")]);
    }

    #[test]
    fn test_resolve_value_reads_query_variable() {
        let engine = likes_engine();
        let envs: Vec<Environment> = engine
            .query(&rel([sym("likes"), var(1), sym("wine")]))
            .collect();

        let people: Vec<Term> = envs.iter().map(|env| resolve_value(&var(1), env)).collect();
        assert_eq!(people, vec![sym("mary"), sym("john"), sym("alice")]);
    }

    #[test]
    fn test_free_function_entry_point() {
        let program: Program = likes_engine().program().clone();
        let ids = Counter::new();

        let found = resolve(&rel([sym("likes"), var(1), sym("food")]), &program, &ids)
            .map(|env| resolve_value(&var(1), &env))
            .collect::<Vec<_>>();
        assert_eq!(found, vec![sym("mary")]);
    }

    #[test]
    fn test_conjunctive_rules() {
        init_logging();
        let engine = family_engine();

        assert!(engine.ask(&rel([sym("father"), sym("charles_i"), sym("james_i")])));
        assert!(!engine.ask(&rel([sym("mother"), sym("charles_i"), sym("james_i")])));

        let children = collect(&engine, &rel([sym("father"), var(5), sym("charles_i")]));
        assert_eq!(
            values(&children, 5),
            vec![sym("catherine"), sym("charles_ii"), sym("james_ii")]
        );

        let pairs = collect(&engine, &rel([sym("father"), var(6), var(7)]));
        assert_eq!(pairs.len(), 5);
        let mothers = collect(&engine, &rel([sym("mother"), var(6), var(7)]));
        assert_eq!(values(&mothers, 6), vec![sym("sophia"), sym("george_i")]);
        assert_eq!(values(&mothers, 7), vec![sym("elizabeth"), sym("sophia")]);
    }

    #[test]
    fn test_grandparent_enumerates_all_pairs() {
        let engine = family_engine();
        let results = collect(&engine, &rel([sym("grandparent"), var(10), var(11)]));

        let pairs: Vec<(Term, Term)> = values(&results, 10)
            .into_iter()
            .zip(values(&results, 11))
            .collect();
        assert_eq!(
            pairs,
            vec![
                (sym("catherine"), sym("james_i")),
                (sym("charles_ii"), sym("james_i")),
                (sym("james_ii"), sym("james_i")),
                (sym("sophia"), sym("james_i")),
                (sym("george_i"), sym("elizabeth")),
            ]
        );
    }

    #[test]
    fn test_body_local_variables_are_not_reported() {
        let mut engine = family_engine();
        // (has_child, ?1) :- (parent, ?2, ?1).
        engine.add_rule(Rule::new(
            Term::relation([sym("has_child"), var(1)]),
            Goal::just([sym("parent"), var(2), var(1)]),
        ));

        let results = collect(&engine, &rel([sym("has_child"), sym("james_i")]));
        assert_eq!(results.len(), 2, "One proof per child, no deduplication");
        assert!(results.iter().all(|r| r.bindings.is_empty()));
        assert_eq!(results[0].to_string(), "true");
    }

    #[test]
    fn test_duplicate_proofs_are_all_yielded() {
        let mut engine = likes_engine();
        engine.add_fact(Term::relation([sym("likes"), sym("mary"), sym("wine")]));

        let results = collect(&engine, &rel([sym("likes"), sym("mary"), var(1)]));
        assert_eq!(values(&results, 1), vec![sym("wine"), sym("food"), sym("wine")]);
    }

    #[test]
    fn test_arity_mismatch_skips_rule() {
        let mut engine = Engine::new();
        engine.add_fact(Term::relation([sym("likes"), sym("mary")]));
        engine.add_fact(Term::relation([sym("likes"), sym("mary"), sym("wine")]));
        engine.add_fact(sym("likes"));

        let results = collect(&engine, &rel([sym("likes"), var(1), var(2)]));
        assert_eq!(results.len(), 1);
        assert_eq!(results[0].to_string(), "?1 = mary, ?2 = wine");
    }

    #[test]
    fn test_negation_as_failure() {
        let mut engine = Engine::new();
        engine.add_fact(Term::relation([sym("male"), sym("james")]));
        engine.add_fact(Term::relation([sym("male"), sym("charles")]));
        engine.add_fact(Term::relation([sym("married"), sym("charles")]));
        engine.add_rule(Rule::new(
            Term::relation([sym("bachelor"), var(1)]),
            Goal::conj([
                Goal::just([sym("male"), var(1)]),
                Goal::not(Goal::just([sym("married"), var(1)])),
            ]),
        ));

        let results = collect(&engine, &rel([sym("bachelor"), var(1)]));
        assert_eq!(values(&results, 1), vec![sym("james")]);
    }

    #[test]
    fn test_not_yields_input_environment_once() {
        let engine = likes_engine();
        let resolver = Resolver::new(engine.program(), engine.ids());
        let start = Environment::new().bind(Var::Named(9), sym("x")).unwrap();

        let unprovable = Goal::not(Goal::just([sym("likes"), sym("john"), sym("food")]));
        let envs: Vec<Environment> = resolver.prove_goal(unprovable, start.clone()).collect();
        assert_eq!(envs, vec![start.clone()]);

        let provable = Goal::not(Goal::just([sym("likes"), sym("mary"), var(1)]));
        assert_eq!(resolver.prove_goal(provable, start).count(), 0);
    }

    #[test]
    fn test_double_negation_keeps_no_bindings() {
        let engine = likes_engine();
        let resolver = Resolver::new(engine.program(), engine.ids());

        let goal = Goal::not(Goal::not(Goal::just([sym("likes"), sym("mary"), var(1)])));
        let envs: Vec<Environment> = resolver.prove_goal(goal, Environment::new()).collect();
        assert_eq!(envs.len(), 1);
        assert!(envs[0].is_empty(), "Negation must not expose {}", envs[0]);
    }

    #[test]
    fn test_disjunction_enumerates_every_clause() {
        let engine = likes_engine();
        let resolver = Resolver::new(engine.program(), engine.ids());
        let goal = Goal::disj([
            Goal::just([sym("likes"), sym("mary"), var(1)]),
            Goal::just([sym("likes"), var(2), sym("wine")]),
            Goal::just([sym("likes"), sym("john"), sym("food")]),
            Goal::Top,
        ]);

        let envs: Vec<Environment> = resolver.prove_goal(goal, Environment::new()).collect();
        let firsts: Vec<Term> = envs.iter().map(|env| resolve_value(&var(1), env)).collect();
        let seconds: Vec<Term> = envs.iter().map(|env| resolve_value(&var(2), env)).collect();

        assert_eq!(envs.len(), 6);
        assert_eq!(
            firsts,
            vec![sym("wine"), sym("food"), var(1), var(1), var(1), var(1)],
            "Clauses start from the same environment"
        );
        assert_eq!(
            seconds,
            vec![var(2), var(2), sym("mary"), sym("john"), sym("alice"), var(2)]
        );
    }

    #[test]
    fn test_empty_conjunction_is_true() {
        let engine = Engine::new();
        let resolver = Resolver::new(engine.program(), engine.ids());

        assert_eq!(resolver.prove_goal(Goal::conj([]), Environment::new()).count(), 1);
        assert_eq!(resolver.prove_goal(Goal::disj([]), Environment::new()).count(), 0);
    }

    #[test]
    fn test_conjunction_backtracks_into_earlier_goals() {
        let engine = likes_engine();
        let resolver = Resolver::new(engine.program(), engine.ids());
        // Who likes both wine and food?
        let goal = Goal::conj([
            Goal::just([sym("likes"), var(1), sym("wine")]),
            Goal::just([sym("likes"), var(1), sym("food")]),
        ]);

        let found: Vec<Term> = resolver
            .prove_goal(goal, Environment::new())
            .map(|env| resolve_value(&var(1), &env))
            .collect();
        assert_eq!(found, vec![sym("mary")]);
    }

    #[test]
    fn test_recursive_addition() {
        init_logging();
        let engine = peano_engine();

        let results = collect(&engine, &rel([sym("add"), num(3), num(2), var(1)]));
        assert_eq!(values(&results, 1), vec![num(5)]);

        let results = collect(&engine, &rel([sym("add"), num(3), num(1), var(1)]));
        assert_eq!(values(&results, 1), vec![num(4)]);
    }

    #[test]
    fn test_recursive_rule_instances_do_not_alias() {
        let engine = peano_engine();
        let results = collect(&engine, &rel([sym("add"), var(1), var(2), num(3)]));

        let splits: Vec<(Term, Term)> = values(&results, 1)
            .into_iter()
            .zip(values(&results, 2))
            .collect();
        assert_eq!(
            splits,
            vec![
                (num(0), num(3)),
                (num(1), num(2)),
                (num(2), num(1)),
                (num(3), num(0)),
            ]
        );
    }

    #[test]
    fn test_stops_after_first_solution() {
        let mut engine = Engine::with_ids(Counter::new());
        for id in 1..=3 {
            engine.add_fact(Term::relation([sym("p"), var(id)]));
        }
        let query = rel([sym("p"), sym("a")]);

        let mut solutions = engine.query(&query);
        assert!(solutions.next().is_some());
        assert_eq!(engine.ids().peek(), 1, "Only the first rule may be renamed");
        drop(solutions);

        assert_eq!(engine.query(&query).count(), 3);
        assert_eq!(engine.ids().peek(), 4);
    }

    #[test]
    fn test_infinite_search_is_lazy() {
        let mut engine = Engine::new();
        engine.add_fact(Term::relation([sym("nat"), sym("zero")]));
        engine.add_rule(Rule::new(
            Term::relation([sym("nat"), Term::relation([sym("s"), var(1)])]),
            Goal::just([sym("nat"), var(1)]),
        ));

        let naturals: Vec<QueryResult> = engine
            .query_results(&rel([sym("nat"), var(1)]))
            .take(5)
            .collect::<Result<_>>()
            .unwrap();
        assert_eq!(values(&naturals, 1), (0..5).map(num).collect::<Vec<_>>());
    }

    #[test]
    fn test_interleaved_queries_are_independent() {
        let engine = family_engine();
        let query = rel([sym("grandparent"), var(1), var(2)]);
        let sequential = collect(&engine, &query);

        let vars = query.vars();
        let mut a = engine.query(&query);
        let mut b = engine.query(&query);
        let mut from_a = Vec::new();
        let mut from_b = Vec::new();
        loop {
            let next_a = a.next();
            let next_b = b.next();
            if next_a.is_none() && next_b.is_none() {
                break;
            }
            from_a.extend(next_a.map(|env| QueryResult::from_env(&vars, &env).unwrap()));
            from_b.extend(next_b.map(|env| QueryResult::from_env(&vars, &env).unwrap()));
        }

        assert_eq!(from_a, sequential);
        assert_eq!(from_b, sequential);
    }

    #[test]
    fn test_rerunning_a_query_repeats_the_sequence() {
        let engine = peano_engine();
        let query = rel([sym("add"), var(1), var(2), num(2)]);

        assert_eq!(collect(&engine, &query), collect(&engine, &query));
    }

    #[test]
    fn test_cyclic_answer_is_reported() {
        let mut engine = Engine::new();
        // (loop, ?1, (f, ?1)).
        engine.add_fact(Term::relation([
            sym("loop"),
            var(1),
            Term::relation([sym("f"), var(1)]),
        ]));

        let mut results = engine.query_results(&rel([sym("loop"), var(7), var(7)]));
        assert!(matches!(results.next(), Some(Err(Error::CyclicTerm(_)))));
        assert!(results.next().is_none());
    }

    #[test]
    fn test_global_ids_engine() {
        let mut engine = Engine::with_ids(crate::GlobalIds);
        engine.add_rule(Rule::new(
            Term::relation([sym("same"), var(1), var(1)]),
            Goal::Top,
        ));

        let results = collect(&engine, &rel([sym("same"), sym("a"), var(2)]));
        assert_eq!(values(&results, 2), vec![sym("a")]);
    }

    #[cfg(feature = "serde")]
    #[test]
    fn test_query_result_json() {
        let engine = likes_engine();
        let results = collect(&engine, &rel([sym("likes"), sym("mary"), var(1)]));

        assert_eq!(
            results[0].to_json().unwrap(),
            r#"{"?1":{"Const":{"Symbol":"wine"}}}"#
        );
    }
}
