use std::{
  fmt,
  rc::Rc,
};
use im::Vector;

pub type Fun = Rc<dyn Fn(Value) -> Value>;
pub type Args = Vector<Value>;

#[derive(Clone)]
pub enum Value {
  VFun(Fun),
  VNeu(Neutral),
  Papp(Rc<(Neutral, Args)>),
}

// Opaque heads. Applying one never reduces, it only grows the spine, which is
// what lets reduction laws be checked by plain substitution.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Neutral {
  FVar(u32),
  Unit,
}

#[inline(always)]
pub fn vfun(fun: impl Fn(Value) -> Value + 'static) -> Value {
  Value::VFun(Rc::new(fun))
}

#[inline(always)]
pub fn vneu(neu: Neutral) -> Value {
  Value::VNeu(neu)
}

#[inline(always)]
pub fn papp(neu: Neutral, args: Args) -> Value {
  Value::Papp(Rc::new((neu, args)))
}

/// A fresh probe value, distinguishable from every other probe index.
#[inline(always)]
pub fn probe(idx: u32) -> Value {
  vneu(Neutral::FVar(idx))
}

/// Left-associative application: `app!(f, x, y)` is `(f x) y`.
#[macro_export]
macro_rules! app {
  ($fun:expr, $arg:expr $(, $rest:expr)* $(,)?) => {{
    let val = $crate::value::Value::apply(&$fun, &$arg);
    $(let val = val.apply(&$rest);)*
    val
  }};
}

impl Value {
  /// Strict application: `arg` is already a value, so nothing here delays.
  pub fn apply(&self, arg: &Value) -> Value {
    match self {
      Value::VFun(fun) => fun(arg.clone()),
      Value::VNeu(neu) => papp(*neu, Vector::unit(arg.clone())),
      Value::Papp(pair) => {
        let (neu, args) = &**pair;
        let mut args = args.clone();
        args.push_back(arg.clone());
        papp(*neu, args)
      },
    }
  }

  /// Wraps a computation so it only runs when the value is forced.
  pub fn thunk(body: impl Fn() -> Value + 'static) -> Value {
    vfun(move |_| body())
  }

  pub fn unit() -> Value {
    vneu(Neutral::Unit)
  }

  pub fn force(&self) -> Value {
    self.apply(&Value::unit())
  }

  /// Head and spine of a neutral value, if it is one.
  pub fn as_neutral(&self) -> Option<(Neutral, Args)> {
    match self {
      Value::VFun(_) => None,
      Value::VNeu(neu) => Some((*neu, Vector::new())),
      Value::Papp(pair) => Some((**pair).clone()),
    }
  }
}

// Functions compare by identity, neutrals by structure.
impl PartialEq for Value {
  fn eq(&self, other: &Value) -> bool {
    match (self, other) {
      (Value::VFun(a), Value::VFun(b)) => Rc::ptr_eq(a, b),
      (Value::VFun(_), _) | (_, Value::VFun(_)) => false,
      _ => self.as_neutral() == other.as_neutral(),
    }
  }
}

impl fmt::Display for Neutral {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    match self {
      Neutral::FVar(idx) => write!(f, "x{}", idx),
      Neutral::Unit => write!(f, "()"),
    }
  }
}

impl fmt::Display for Value {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    match self {
      Value::VFun(_) => write!(f, "<fun>"),
      Value::VNeu(neu) => write!(f, "{}", neu),
      Value::Papp(pair) => {
        let (neu, args) = &**pair;
        write!(f, "{}", neu)?;
        for arg in args.iter() {
          match arg {
            Value::Papp(_) => write!(f, " ({})", arg)?,
            _ => write!(f, " {}", arg)?,
          }
        }
        Ok(())
      },
    }
  }
}

impl fmt::Debug for Value {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    match self {
      Value::VFun(fun) => write!(f, "VFun({:p})", Rc::as_ptr(fun) as *const ()),
      _ => write!(f, "{}", self),
    }
  }
}

#[cfg(test)]
mod tests {
  use super::*;
  use std::cell::Cell;

  #[test]
  fn neutral_application_builds_spine() {
    let (x, y, z) = (probe(0), probe(1), probe(2));
    let val = app!(x, y, app!(z, x));
    assert_eq!(val.to_string(), "x0 x1 (x2 x0)");
    let (head, args) = val.as_neutral().unwrap();
    assert_eq!(head, Neutral::FVar(0));
    assert_eq!(args.len(), 2);
  }

  #[test]
  fn shared_spine_is_not_mutated() {
    let x = probe(0);
    let partial = app!(x, probe(1));
    let left = app!(partial, probe(2));
    let right = app!(partial, probe(3));
    assert_eq!(partial.to_string(), "x0 x1");
    assert_eq!(left.to_string(), "x0 x1 x2");
    assert_eq!(right.to_string(), "x0 x1 x3");
  }

  #[test]
  fn functions_compare_by_identity() {
    let id = vfun(|x| x);
    let other = vfun(|x| x);
    assert_eq!(id, id.clone());
    assert_ne!(id, other);
    assert_ne!(id, probe(0));
  }

  #[test]
  fn thunk_runs_only_when_forced() {
    let hits = Rc::new(Cell::new(0));
    let counter = hits.clone();
    let delayed = Value::thunk(move || {
      counter.set(counter.get() + 1);
      probe(7)
    });
    assert_eq!(hits.get(), 0);
    assert_eq!(delayed.force(), probe(7));
    assert_eq!(hits.get(), 1);
  }
}
