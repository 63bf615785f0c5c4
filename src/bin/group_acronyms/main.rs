
use std::path::PathBuf;
use std::process::ExitCode;
use acronym_dictionary::config::{GrouperConfig, JsonStyle, DEFAULT_DICTIONARY_PATH, DEFAULT_RECORDS_PATH};
use acronym_dictionary::group;
use clap::Parser;

/// Groups `phrase; ACRONYM` records into a JSON dictionary keyed by acronym.
#[derive(Parser, Debug)]
#[command(version, about)]
struct Args {
  #[arg(long, default_value = DEFAULT_RECORDS_PATH)]
  input: PathBuf,

  #[arg(long, default_value = DEFAULT_DICTIONARY_PATH)]
  output: PathBuf,

  /// Write non-ASCII characters as UTF-8 instead of \u escapes
  #[arg(long)]
  raw_unicode: bool,
}

fn main() -> ExitCode {
  acronym_dictionary::init_logging();

  let args = Args::parse();
  acronym_dictionary::exit_code(group::run(&GrouperConfig {
    input: args.input,
    output: args.output,
    style: JsonStyle { ascii_only: !args.raw_unicode }
  }))
}
