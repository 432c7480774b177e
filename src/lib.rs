//! # Microprolog
//!
//! A minimal Prolog-style resolution engine implementation in Rust.
//!
//! ## Features
//!
//! - Unification over relations, variables and constants
//! - Rules renamed apart on every use, with an injectable identifier source
//! - Lazy depth-first search over conjunction, disjunction and negation as
//!   failure, yielding one environment per proof
//!
//! ## Example
//!
//! ```rust
//! use microprolog::{Engine, Relation, Term};
//!
//! let mut engine = Engine::new();
//! engine.add_fact(Term::relation([Term::sym("likes"), Term::sym("mary"), Term::sym("wine")]));
//! engine.add_fact(Term::relation([Term::sym("likes"), Term::sym("mary"), Term::sym("food")]));
//!
//! let query = Relation::new([Term::sym("likes"), Term::sym("mary"), Term::var(1)]);
//! let liked: Vec<String> = engine
//!     .query_results(&query)
//!     .map(|result| result.unwrap().to_string())
//!     .collect();
//! assert_eq!(liked, ["?1 = wine", "?1 = food"]);
//! ```

/// Resolution search and the engine facade.
pub mod engine;
/// Substitution environments.
pub mod env;
/// Error types.
pub mod error;
/// Fresh-variable renaming.
pub mod fresh;
/// Goals, rules and programs.
pub mod goal;
/// Terms.
pub mod term;
/// Unification.
pub mod unify;

pub use engine::{resolve, resolve_value, Engine, QueryResult, Resolver, Solutions};
pub use env::Environment;
pub use error::{Error, Result};
pub use fresh::{Counter, FreshIds, GlobalIds};
pub use goal::{Goal, Program, Rule};
pub use term::{Const, Relation, Term, Var};
pub use unify::unify;
