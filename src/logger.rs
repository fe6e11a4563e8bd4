//! Logging setup.
//!
//! Plain `LEVEL message` lines on stderr, so stdout carries nothing but
//! results.

use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, Layer, Registry};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LogLevel {
  Trace,
  Debug,
  Info,
  Warn,
  Error,
}

impl From<LogLevel> for tracing::Level {
  fn from(level: LogLevel) -> Self {
    match level {
      LogLevel::Trace => tracing::Level::TRACE,
      LogLevel::Debug => tracing::Level::DEBUG,
      LogLevel::Info => tracing::Level::INFO,
      LogLevel::Warn => tracing::Level::WARN,
      LogLevel::Error => tracing::Level::ERROR,
    }
  }
}

pub fn init_with_level(level: LogLevel) {
  let filter = tracing_subscriber::filter::LevelFilter::from_level(level.into());

  let layer = tracing_subscriber::fmt::layer()
    .with_writer(std::io::stderr)
    .without_time()
    .with_target(false)
    .with_level(true)
    .with_ansi(false)
    .compact()
    .with_filter(filter);

  Registry::default().with(layer).init();
}
