use crate::{
  app,
  error::{Error, Result},
  library::Library,
  value::{Neutral, Value, vneu},
};

// Probe heads reserved for decoding; they never leak out of `to_bool`.
const ON_TRUE: Neutral = Neutral::FVar(u32::MAX - 1);
const ON_FALSE: Neutral = Neutral::FVar(u32::MAX);

#[derive(Clone)]
pub struct Booleans {
  pub tru: Value,
  pub fls: Value,
}

impl Booleans {
  pub fn from_library(lib: &Library) -> Result<Self> {
    Ok(Booleans {
      tru: lib.get("TRUE")?.clone(),
      fls: lib.get("FALSE")?.clone(),
    })
  }

  pub fn encode(&self, b: bool) -> Value {
    if b { self.tru.clone() } else { self.fls.clone() }
  }

  /// Conditional dispatch over two thunks. The condition only picks one of
  /// them; the pick is forced afterwards, once, so the other branch never
  /// runs.
  pub fn select(cond: &Value, then: &Value, other: &Value) -> Value {
    app!(cond, then, other).force()
  }
}

/// Decodes a boolean by letting it choose between two probes.
pub fn to_bool(value: &Value) -> Result<bool> {
  match app!(value, vneu(ON_TRUE), vneu(ON_FALSE)) {
    Value::VNeu(head) if head == ON_TRUE => Ok(true),
    Value::VNeu(head) if head == ON_FALSE => Ok(false),
    _ => Err(Error::NotABoolean),
  }
}

#[cfg(test)]
mod tests {
  use super::*;
  use crate::value::probe;
  use std::{cell::Cell, rc::Rc};

  fn booleans() -> Booleans {
    Booleans::from_library(&Library::standard().unwrap()).unwrap()
  }

  fn counted(hits: &Rc<Cell<u32>>, result: Value) -> Value {
    let hits = hits.clone();
    Value::thunk(move || {
      hits.set(hits.get() + 1);
      result.clone()
    })
  }

  #[test]
  fn true_selects_first() {
    let bools = booleans();
    let (a, b) = (probe(0), probe(1));
    assert_eq!(app!(bools.tru, a, b), a);
  }

  #[test]
  fn false_selects_second() {
    let bools = booleans();
    let (a, b) = (probe(0), probe(1));
    assert_eq!(app!(bools.fls, a, b), b);
  }

  #[test]
  fn select_forces_only_the_chosen_thunk() {
    let bools = booleans();
    for (cond, expected) in [(true, probe(0)), (false, probe(1))] {
      let then_hits = Rc::new(Cell::new(0));
      let else_hits = Rc::new(Cell::new(0));
      let then = counted(&then_hits, probe(0));
      let other = counted(&else_hits, probe(1));
      let val = Booleans::select(&bools.encode(cond), &then, &other);
      assert_eq!(val, expected);
      assert_eq!(then_hits.get(), u32::from(cond));
      assert_eq!(else_hits.get(), u32::from(!cond));
    }
  }

  #[test]
  fn decodes_booleans() {
    let bools = booleans();
    assert!(to_bool(&bools.tru).unwrap());
    assert!(!to_bool(&bools.fls).unwrap());
  }

  #[test]
  fn rejects_non_booleans() {
    assert!(matches!(to_bool(&probe(0)), Err(Error::NotABoolean)));
    let lib = Library::standard().unwrap();
    assert!(matches!(to_bool(lib.get("I").unwrap()), Err(Error::NotABoolean)));
  }
}
