//! Recursion under strict evaluation.
//!
//! The lazy fixed point `Y g = g (Y g)` evaluates its own argument before
//! `g` ever runs, so it never returns here. `fix` is the Z variant: the
//! self-application `x x` is only reachable through `v ↦ x x v`, which is
//! already a value, and the next unfolding happens when the recursive
//! function is actually called.

use tracing::trace;

use crate::{
  app,
  boolean::Booleans,
  numeral::Numerals,
  value::{Value, vfun},
};

/// Returns `f` such that `f = generator f`.
///
/// `generator` receives the recursive function itself and must return it;
/// it must not call its argument before being given an input, or the
/// unfolding will not stop.
pub fn fix(generator: &Value) -> Value {
  let unfold = {
    let generator = generator.clone();
    vfun(move |x| {
      trace!("unfolding fixed point");
      let delayed = vfun(move |v| app!(x, x, v));
      generator.apply(&delayed)
    })
  };
  unfold.apply(&unfold)
}

/// Generator for `n ↦ n + base` on numerals: `base` when `n` is zero,
/// otherwise `SUCC (f (PRED n))`. Both branches are thunks and only the one
/// picked by the zero test is forced.
pub fn adder_generator(nums: &Numerals, base: &Value) -> Value {
  let nums = nums.clone();
  let base = base.clone();
  vfun(move |rec| {
    let nums = nums.clone();
    let base = base.clone();
    vfun(move |n| {
      let on_zero = {
        let base = base.clone();
        Value::thunk(move || base.clone())
      };
      let on_succ = {
        let (nums, rec, n) = (nums.clone(), rec.clone(), n.clone());
        Value::thunk(move || app!(nums.succ, app!(rec, app!(nums.pred, n))))
      };
      Booleans::select(&app!(nums.is_zero, n), &on_zero, &on_succ)
    })
  })
}

pub fn add_five_generator(nums: &Numerals) -> Value {
  adder_generator(nums, &nums.five)
}

/// `FIX add_five_generator`.
pub fn add_five(nums: &Numerals) -> Value {
  fix(&add_five_generator(nums))
}

#[cfg(test)]
mod tests {
  use super::*;
  use crate::library::Library;
  use std::{cell::Cell, rc::Rc};

  fn numerals() -> Numerals {
    Numerals::from_library(&Library::standard().unwrap()).unwrap()
  }

  #[test]
  fn add_five_of_five_is_ten() {
    let nums = numerals();
    let result = app!(add_five(&nums), nums.five);
    assert_eq!(nums.to_number(&result).unwrap(), 10);
  }

  #[test]
  fn add_five_small_inputs() {
    let nums = numerals();
    let add = add_five(&nums);
    for k in 0..=3 {
      let result = app!(add, nums.numeral(k));
      assert_eq!(nums.to_number(&result).unwrap(), k + 5);
    }
  }

  #[test]
  fn fixed_point_equation() {
    let nums = numerals();
    let generator = add_five_generator(&nums);
    let f = fix(&generator);
    let unfolded = app!(generator, f);
    for k in 0..4 {
      let n = nums.numeral(k);
      assert_eq!(
        nums.to_number(&app!(f, n)).unwrap(),
        nums.to_number(&app!(unfolded, n)).unwrap(),
      );
    }
  }

  #[test]
  fn other_bases() {
    let nums = numerals();
    let add_two = fix(&adder_generator(&nums, &nums.two));
    assert_eq!(nums.to_number(&app!(add_two, nums.three)).unwrap(), 5);
    let id = fix(&adder_generator(&nums, &nums.zero));
    assert_eq!(nums.to_number(&app!(id, nums.four)).unwrap(), 4);
  }

  #[test]
  fn unfolds_once_per_call() {
    let nums = numerals();
    let generator = add_five_generator(&nums);
    let calls = Rc::new(Cell::new(0));
    let counting = {
      let calls = calls.clone();
      vfun(move |rec| {
        calls.set(calls.get() + 1);
        generator.apply(&rec)
      })
    };
    let f = fix(&counting);
    assert_eq!(calls.get(), 1);
    for k in 0..4 {
      calls.set(0);
      let result = app!(f, nums.numeral(k));
      assert_eq!(nums.to_number(&result).unwrap(), k + 5);
      assert_eq!(calls.get(), k);
    }
  }
}
