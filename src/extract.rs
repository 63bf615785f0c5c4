
use std::fs;
use std::io::{self, BufRead, Write};
use console::style;
use tracing::{debug, info};

use crate::acronym::generate_acronym;
use crate::config::ExtractorConfig;
use crate::error::{Error, Result};
use crate::lines::universal_lines;
use crate::records::Record;

pub const NOT_FOUND_MESSAGE: &str = "File not found.";

/// Writes one `phrase; ACRONYM` line per input line and returns how many were written.
///
/// Blank lines are kept and come out as `"; "`. A lone `\r` ends a line too.
pub fn extract_lines<R: BufRead, W: Write>(reader: R, mut writer: W) -> Result<usize> {
  let mut count = 0;

  for line in universal_lines(reader) {
    let line = line?;
    let phrase = line.trim();
    let record = Record::new(phrase, generate_acronym(phrase)?);
    debug!(phrase = %record.phrase, acronym = %record.acronym, "derived acronym");
    writer.write_all(record.to_line().as_bytes())?;
    writer.write_all(b"\n")?;
    count += 1;
  }

  writer.flush()?;
  Ok(count)
}

/// The input is opened before the output is created, so a missing input
/// leaves no output file behind. Output is streamed: on a later failure the
/// lines already written stay written.
pub fn extract_file(config: &ExtractorConfig) -> Result<usize> {
  let input = fs::File::open(&config.input).map_err(|e| Error::opening(&config.input, e))?;
  let output = fs::File::create(&config.output)?;

  let count = extract_lines(io::BufReader::new(input), io::BufWriter::new(output))?;
  info!(records = count, input = %config.input.display(), output = %config.output.display(), "extracted acronyms");
  Ok(count)
}

pub fn run(config: &ExtractorConfig) -> Result<()> {
  run_to(config, &mut io::stdout().lock())
}

/// A missing input is reported on `console` and is not an error.
pub fn run_to<W: Write>(config: &ExtractorConfig, console: &mut W) -> Result<()> {
  match extract_file(config) {
    Ok(_) => {
      writeln!(console, "Output saved to {}", style(config.output.display()).green())?;
      Ok(())
    },
    Err(Error::ResourceNotFound { path }) => {
      debug!(path = %path.display(), "input missing");
      writeln!(console, "{}", style(NOT_FOUND_MESSAGE).red())?;
      Ok(())
    },
    Err(e) => Err(e)
  }
}
