use crate::env::Environment;
use crate::term::Term;

/// Unify two terms under `env`.
///
/// Returns the extended environment on success and `None` when no
/// unifier exists. Relations are unified element by element, left to right,
/// each pair seeing the bindings made by the previous ones.
///
/// No occurs-check is performed: unifying `?1` with `(f, ?1)` succeeds and
/// leaves a self-referential binding behind. Such a binding is still safe to
/// [`Environment::walk`]; [`Environment::resolve`] reports it as an error.
#[must_use]
pub fn unify(u: &Term, v: &Term, env: &Environment) -> Option<Environment> {
    let u = env.walk(u);
    let v = env.walk(v);

    match (u, v) {
        (Term::Relation(a), Term::Relation(b)) => {
            if a.len() != b.len() {
                return None;
            }
            a.iter()
                .zip(b.iter())
                .try_fold(env.clone(), |env, (x, y)| unify(x, y, &env))
        }
        (Term::Var(a), Term::Var(b)) if a == b => Some(env.clone()),
        (Term::Var(var), other) | (other, Term::Var(var)) => Some(env.extend(*var, other.clone())),
        (Term::Const(a), Term::Const(b)) if a == b => Some(env.clone()),
        _ => None,
    }
}
