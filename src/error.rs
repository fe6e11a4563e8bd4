use thiserror::Error;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, Error)]
pub enum Error {
  #[error("unknown combinator `{0}`")]
  UnknownCombinator(String),

  #[error("combinator `{0}` is already defined")]
  Redefinition(String),

  #[error("value does not select between two arguments like a boolean")]
  NotABoolean,

  #[error("zero test of a non-numeral value did not yield a boolean")]
  NotANumeral,

  #[error("failed to spawn evaluation thread: {0}")]
  WorkerSpawn(#[from] std::io::Error),

  #[error("evaluation thread panicked")]
  WorkerPanicked,
}
