pub mod value;
pub mod basis;
pub mod term;
pub mod strict;
pub mod library;
pub mod boolean;
pub mod numeral;
pub mod fix;
pub mod engine;
pub mod error;
pub mod config;
pub mod logger;

pub use engine::Engine;
pub use error::{Error, Result};
pub use value::Value;
