//! The two primitives every other combinator is built from.

use crate::value::*;

/// `S x y z = (x z) (y z)`, with `x z` evaluated before `y z`.
pub fn s() -> Value {
  vfun(|x| vfun(move |y| {
    let x = x.clone();
    vfun(move |z| {
      let fun = x.apply(&z);
      let arg = y.apply(&z);
      fun.apply(&arg)
    })
  }))
}

/// `K x y = x`.
pub fn k() -> Value {
  vfun(|x| vfun(move |_| x.clone()))
}

#[derive(Clone)]
pub struct Basis {
  pub s: Value,
  pub k: Value,
}

impl Basis {
  pub fn new() -> Self {
    Basis { s: s(), k: k() }
  }
}

impl Default for Basis {
  fn default() -> Self {
    Self::new()
  }
}
