use crate::logger::LogLevel;

pub const DEFAULT_INPUT: u32 = 5;
pub const DEFAULT_STACK_SIZE: usize = 8 * 1024 * 1024;

/// Runtime settings for the demonstration binary.
#[derive(Debug, Clone)]
pub struct Config {
  /// Numeral fed to `add_five`.
  pub input: u32,
  /// Stack size of the evaluation thread. Numerals are unary and every
  /// layer recurses on the host stack, so this bounds the largest input.
  pub stack_size: usize,
  pub log_level: LogLevel,
}

impl Default for Config {
  fn default() -> Self {
    Config {
      input: DEFAULT_INPUT,
      stack_size: DEFAULT_STACK_SIZE,
      log_level: LogLevel::Info,
    }
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn defaults() {
    let config = Config::default();
    assert_eq!(config.input, 5);
    assert_eq!(config.stack_size, 8 * 1024 * 1024);
    assert_eq!(config.log_level, LogLevel::Info);
  }
}
