
use std::path::PathBuf;
use std::process::ExitCode;
use acronym_dictionary::config::{ExtractorConfig, DEFAULT_PHRASES_PATH, DEFAULT_RECORDS_PATH};
use acronym_dictionary::extract;
use clap::Parser;

/// Writes `phrase; ACRONYM` for every line of a phrase list.
#[derive(Parser, Debug)]
#[command(version, about)]
struct Args {
  /// One phrase per line
  #[arg(long, default_value = DEFAULT_PHRASES_PATH)]
  input: PathBuf,

  #[arg(long, default_value = DEFAULT_RECORDS_PATH)]
  output: PathBuf,
}

fn main() -> ExitCode {
  acronym_dictionary::init_logging();

  let args = Args::parse();
  acronym_dictionary::exit_code(extract::run(&ExtractorConfig {
    input: args.input,
    output: args.output
  }))
}
