use anyhow::{Context, Result};
use clap::Parser;
use ski_evaluator::{
  config::{Config, DEFAULT_INPUT, DEFAULT_STACK_SIZE},
  engine,
  library::Library,
  logger::{self, LogLevel},
};

/// Strict SK combinator evaluator: computes `n + 5` on Barendregt numerals
/// through a Z fixed point and prints the decoded result.
#[derive(Parser, Debug)]
#[command(name = "ski-evaluator")]
#[command(version, about, long_about = None)]
struct Args {
  /// Numeral to feed to the recursive add-five function
  #[arg(short = 'n', long, default_value_t = DEFAULT_INPUT)]
  input: u32,

  /// Stack size in bytes of the evaluation thread
  #[arg(long, env = "SKI_STACK_SIZE", default_value_t = DEFAULT_STACK_SIZE)]
  stack_size: usize,

  /// List every library definition instead of evaluating
  #[arg(long)]
  definitions: bool,

  /// Enable debug logging
  #[arg(short, long)]
  verbose: bool,
}

impl From<&Args> for Config {
  fn from(args: &Args) -> Self {
    Config {
      input: args.input,
      stack_size: args.stack_size,
      log_level: if args.verbose { LogLevel::Debug } else { LogLevel::Info },
    }
  }
}

fn print_definitions() -> Result<()> {
  let lib = Library::standard().context("Failed to build the combinator library")?;
  for name in lib.names() {
    println!("{:<8} = {:<40} [{} S/K leaves]", name, lib.show(name)?, lib.basis_size(name)?);
  }
  Ok(())
}

fn main() -> Result<()> {
  let args = Args::parse();
  let config = Config::from(&args);
  logger::init_with_level(config.log_level);

  if args.definitions {
    return print_definitions()
  }

  let result = engine::run_on_worker(&config)
    .with_context(|| format!("Failed to evaluate add_five({})", config.input))?;
  println!("{}", result);
  Ok(())
}
