use crate::{
  basis::Basis,
  term::*,
  value::Value,
};

/// Strict, left-to-right evaluation: the function position of an
/// application is evaluated first, then the argument, then the call is made.
/// References resolve to the already evaluated value of an earlier
/// definition, so a definition is never evaluated twice.
pub fn eval(store: &Store, basis: &Basis, defs: &dyn Fn(DefPtr) -> Value, term: TermPtr) -> Value {
  match store[term] {
    Term::S => basis.s.clone(),
    Term::K => basis.k.clone(),
    Term::Ref(idx) => defs(idx),
    Term::App(fun, arg) => {
      let fun = eval(store, basis, defs, fun);
      let arg = eval(store, basis, defs, arg);
      fun.apply(&arg)
    },
  }
}

#[cfg(test)]
mod tests {
  use super::*;
  use crate::{app, value::probe};

  #[test]
  fn evaluates_identity_from_basis() {
    let basis = Basis::new();
    let mut store = vec![];
    let s = ts(&mut store);
    let k = tk(&mut store);
    let sk = tapp(s, k, &mut store);
    let skk = tapp(sk, k, &mut store);
    let i = eval(&store, &basis, &|_: DefPtr| -> Value { unreachable!() }, skk);
    assert_eq!(app!(i, probe(3)), probe(3));
  }

  #[test]
  fn references_share_the_evaluated_value() {
    let basis = Basis::new();
    let shared = probe(9);
    let mut store = vec![];
    let r = tref(0, &mut store);
    let val = eval(&store, &basis, &|_: DefPtr| shared.clone(), r);
    assert_eq!(val, shared);
  }
}
