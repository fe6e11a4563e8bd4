//! Named combinators, each one a term over `S`, `K` and earlier names.
//!
//! Definitions are kept as terms in an arena so they can be shown and
//! expanded down to the basis, and are evaluated exactly once, strictly, when
//! they are defined. Later definitions see earlier ones only through
//! references, which keeps the definition graph acyclic.
//!
//! Names follow Smullyan's birds (`B` bluebird, `C` cardinal, `T` thrush and
//! so on).

use indexmap::IndexMap;
use tracing::debug;

use crate::{
  basis::Basis,
  error::{Error, Result},
  strict,
  term::*,
  value::Value,
};

#[derive(Clone)]
pub struct Def {
  pub term: TermPtr,
  pub value: Value,
}

pub struct Library {
  store: Store,
  basis: Basis,
  defs: IndexMap<&'static str, Def>,
}

// `term!(lib; S (K S) K)` builds the term in `lib`'s store. Bare `S` and `K`
// are the primitives, any other identifier refers to an earlier definition.
macro_rules! term {
  ($lib:ident; @atom ($($inner:tt)+)) => {
    term!($lib; $($inner)+)
  };
  ($lib:ident; @atom $name:ident) => {
    $lib.atom(stringify!($name))?
  };
  ($lib:ident; $head:tt $($arg:tt)*) => {{
    let fun = term!($lib; @atom $head);
    $(
      let fun = {
        let arg = term!($lib; @atom $arg);
        $lib.app(fun, arg)
      };
    )*
    fun
  }};
}

macro_rules! define {
  ($lib:ident, $name:ident = $($body:tt)+) => {{
    let term = term!($lib; $($body)+);
    $lib.define(stringify!($name), term)?;
  }};
}

impl Library {
  /// A library holding only the basis.
  pub fn new() -> Self {
    Library {
      store: vec![],
      basis: Basis::new(),
      defs: IndexMap::new(),
    }
  }

  /// The full library: derived combinators, booleans and numerals.
  pub fn standard() -> Result<Self> {
    let mut lib = Library::new();

    define!(lib, I = S K K);
    define!(lib, M = S I I);
    define!(lib, B = S (K S) K);
    define!(lib, C = S (B B S) (K K));
    define!(lib, T = C I);
    define!(lib, R = B B T);
    define!(lib, F = B C R);
    define!(lib, V = C F);
    define!(lib, L = C B M);
    define!(lib, D = B B);
    define!(lib, B1 = B B B);
    define!(lib, E = B B1);
    define!(lib, O = S I);

    define!(lib, TRUE = K);
    define!(lib, FALSE = K I);

    define!(lib, ZERO = I);
    define!(lib, SUCC = V FALSE);
    define!(lib, IS_ZERO = T TRUE);
    // `T FALSE` alone maps ZERO to FALSE; the zero test sends it back to ZERO.
    define!(lib, PRED = S (S IS_ZERO (K ZERO)) (T FALSE));
    define!(lib, ONE = SUCC ZERO);
    define!(lib, TWO = SUCC ONE);
    define!(lib, THREE = SUCC TWO);
    define!(lib, FOUR = SUCC THREE);
    define!(lib, FIVE = SUCC FOUR);

    debug!(definitions = lib.defs.len(), "standard library ready");
    Ok(lib)
  }

  pub fn basis(&self) -> &Basis {
    &self.basis
  }

  fn atom(&mut self, name: &str) -> Result<TermPtr> {
    match name {
      "S" => Ok(ts(&mut self.store)),
      "K" => Ok(tk(&mut self.store)),
      _ => {
        let idx = self.defs
          .get_index_of(name)
          .ok_or_else(|| Error::UnknownCombinator(name.to_string()))?;
        Ok(tref(idx, &mut self.store))
      },
    }
  }

  fn app(&mut self, fun: TermPtr, arg: TermPtr) -> TermPtr {
    tapp(fun, arg, &mut self.store)
  }

  /// Evaluates `term` and binds it to `name`.
  pub fn define(&mut self, name: &'static str, term: TermPtr) -> Result<&Value> {
    if self.defs.contains_key(name) {
      return Err(Error::Redefinition(name.to_string()))
    }
    let defs = &self.defs;
    let value = strict::eval(&self.store, &self.basis, &|idx: DefPtr| defs[idx].value.clone(), term);
    debug!(combinator = name, term = %self.show_term(term), "defined combinator");
    let (idx, _) = self.defs.insert_full(name, Def { term, value });
    Ok(&self.defs[idx].value)
  }

  pub fn get(&self, name: &str) -> Result<&Value> {
    self.def(name).map(|def| &def.value)
  }

  fn def(&self, name: &str) -> Result<&Def> {
    self.defs
      .get(name)
      .ok_or_else(|| Error::UnknownCombinator(name.to_string()))
  }

  /// Names in definition order.
  pub fn names(&self) -> impl Iterator<Item = &'static str> + '_ {
    self.defs.keys().copied()
  }

  pub fn len(&self) -> usize {
    self.defs.len()
  }

  pub fn is_empty(&self) -> bool {
    self.defs.is_empty()
  }

  fn show_term(&self, term: TermPtr) -> String {
    let names = |idx: DefPtr| {
      self.defs
        .get_index(idx)
        .map(|(name, _)| name.to_string())
        .unwrap_or_default()
    };
    show(&self.store, &names, term)
  }

  /// The definition of `name` as written, e.g. `S (K S) K` for `B`.
  pub fn show(&self, name: &str) -> Result<String> {
    let def = self.def(name)?;
    Ok(self.show_term(def.term))
  }

  /// The definition of `name` with every reference inlined, leaving a term
  /// made of `S`, `K` and applications only.
  pub fn expand(&self, name: &str) -> Result<(Store, TermPtr)> {
    let def = self.def(name)?;
    let mut out = vec![];
    let term = expand(&self.store, &|idx: DefPtr| self.defs[idx].term, def.term, &mut out);
    Ok((out, term))
  }

  pub fn show_expanded(&self, name: &str) -> Result<String> {
    let (out, term) = self.expand(name)?;
    Ok(show(&out, &|idx: DefPtr| idx.to_string(), term))
  }

  /// Number of `S` and `K` leaves in the expansion of `name`.
  pub fn basis_size(&self, name: &str) -> Result<usize> {
    let def = self.def(name)?;
    Ok(basis_size(&self.store, &|idx: DefPtr| self.defs[idx].term, def.term))
  }
}

impl Default for Library {
  fn default() -> Self {
    Self::new()
  }
}
