#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Term {
  S,
  K,
  App(TermPtr, TermPtr),
  Ref(DefPtr),
}

pub type TermPtr = usize;
pub type DefPtr = usize;
pub type Store = Vec<Term>;

#[inline(always)]
pub fn ts(store: &mut Store) -> TermPtr {
  store.push(Term::S);
  store.len()-1
}
#[inline(always)]
pub fn tk(store: &mut Store) -> TermPtr {
  store.push(Term::K);
  store.len()-1
}
#[inline(always)]
pub fn tapp(fun: TermPtr, arg: TermPtr, store: &mut Store) -> TermPtr {
  store.push(Term::App(fun, arg));
  store.len()-1
}
#[inline(always)]
pub fn tref(idx: DefPtr, store: &mut Store) -> TermPtr {
  store.push(Term::Ref(idx));
  store.len()-1
}

/// Number of `S`/`K` leaves, with references resolved through `defs`.
pub fn basis_size(store: &Store, defs: &dyn Fn(DefPtr) -> TermPtr, term: TermPtr) -> usize {
  match store[term] {
    Term::S | Term::K => 1,
    Term::App(fun, arg) => basis_size(store, defs, fun) + basis_size(store, defs, arg),
    Term::Ref(idx) => basis_size(store, defs, defs(idx)),
  }
}

/// Copies `term` into `out` with every reference inlined, so the copy holds
/// nothing but `S`, `K` and applications.
pub fn expand(store: &Store, defs: &dyn Fn(DefPtr) -> TermPtr, term: TermPtr, out: &mut Store) -> TermPtr {
  match store[term] {
    Term::S => ts(out),
    Term::K => tk(out),
    Term::App(fun, arg) => {
      let fun = expand(store, defs, fun, out);
      let arg = expand(store, defs, arg, out);
      tapp(fun, arg, out)
    },
    Term::Ref(idx) => expand(store, defs, defs(idx), out),
  }
}

pub fn is_basis_only(store: &Store, term: TermPtr) -> bool {
  match store[term] {
    Term::S | Term::K => true,
    Term::App(fun, arg) => is_basis_only(store, fun) && is_basis_only(store, arg),
    Term::Ref(_) => false,
  }
}

/// Renders `term` in combinator notation. Application associates to the
/// left, so only applications in argument position get parentheses.
pub fn show(store: &Store, names: &dyn Fn(DefPtr) -> String, term: TermPtr) -> String {
  match store[term] {
    Term::S => "S".to_string(),
    Term::K => "K".to_string(),
    Term::Ref(idx) => names(idx),
    Term::App(fun, arg) => {
      let fun = show(store, names, fun);
      match store[arg] {
        Term::App(..) => format!("{} ({})", fun, show(store, names, arg)),
        _ => format!("{} {}", fun, show(store, names, arg)),
      }
    },
  }
}
