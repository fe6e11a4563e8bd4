//! Barendregt numerals.
//!
//! A numeral is either `ZERO` or `SUCC n`, where `SUCC n` answers its own
//! zero test (`FALSE`) and hands back `n` directly as its predecessor, so no
//! counting pass is ever needed. Numerals are unary: building or decoding `n`
//! takes `n` nested calls.

use crate::{
  app,
  boolean::to_bool,
  error::{Error, Result},
  library::Library,
  value::Value,
};

#[derive(Clone)]
pub struct Numerals {
  pub zero: Value,
  pub succ: Value,
  pub pred: Value,
  pub is_zero: Value,
  pub one: Value,
  pub two: Value,
  pub three: Value,
  pub four: Value,
  pub five: Value,
}

impl Numerals {
  pub fn from_library(lib: &Library) -> Result<Self> {
    Ok(Numerals {
      zero: lib.get("ZERO")?.clone(),
      succ: lib.get("SUCC")?.clone(),
      pred: lib.get("PRED")?.clone(),
      is_zero: lib.get("IS_ZERO")?.clone(),
      one: lib.get("ONE")?.clone(),
      two: lib.get("TWO")?.clone(),
      three: lib.get("THREE")?.clone(),
      four: lib.get("FOUR")?.clone(),
      five: lib.get("FIVE")?.clone(),
    })
  }

  /// `SUCC` applied `n` times to `ZERO`.
  pub fn numeral(&self, n: u32) -> Value {
    (0..n).fold(self.zero.clone(), |acc, _| app!(self.succ, acc))
  }

  /// Decodes a numeral back into an integer. Recurses once per `SUCC`, on
  /// the host stack.
  pub fn to_number(&self, n: &Value) -> Result<u32> {
    let is_zero = to_bool(&app!(self.is_zero, n)).map_err(|_| Error::NotANumeral)?;
    if is_zero {
      Ok(0)
    }
    else {
      Ok(1 + self.to_number(&app!(self.pred, n))?)
    }
  }
}
