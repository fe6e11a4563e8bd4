use std::thread;
use tracing::debug;

use crate::{
  app,
  boolean::Booleans,
  config::Config,
  error::{Error, Result},
  fix,
  library::Library,
  numeral::Numerals,
  value::Value,
};

/// Every layer built once: library, booleans, numerals.
pub struct Engine {
  pub library: Library,
  pub booleans: Booleans,
  pub numerals: Numerals,
}

impl Engine {
  pub fn new() -> Result<Self> {
    let library = Library::standard()?;
    let booleans = Booleans::from_library(&library)?;
    let numerals = Numerals::from_library(&library)?;
    debug!(combinators = library.len(), "engine ready");
    Ok(Engine { library, booleans, numerals })
  }

  pub fn add_five(&self) -> Value {
    fix::add_five(&self.numerals)
  }

  /// Encodes `k`, runs it through `FIX add_five_generator` and decodes the
  /// result.
  pub fn run_add_five(&self, k: u32) -> Result<u32> {
    let input = self.numerals.numeral(k);
    let output = app!(self.add_five(), input);
    let result = self.numerals.to_number(&output)?;
    debug!(input = k, result, "add five");
    Ok(result)
  }
}

/// Builds an engine on a fresh thread with `config.stack_size` bytes of
/// stack and runs `add_five` on `config.input` there. Values are `Rc` based
/// and stay on that thread; only the decoded integer comes back. Running out
/// of stack aborts the process.
pub fn run_on_worker(config: &Config) -> Result<u32> {
  let input = config.input;
  let worker = thread::Builder::new()
    .name("evaluator".to_string())
    .stack_size(config.stack_size)
    .spawn(move || -> Result<u32> { Engine::new()?.run_add_five(input) })?;
  worker.join().map_err(|_| Error::WorkerPanicked)?
}
