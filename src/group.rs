
use std::fs;
use std::io::{self, Write};
use std::path::{Path, PathBuf};
use console::style;
use tempfile::NamedTempFile;
use tracing::info;

use crate::config::GrouperConfig;
use crate::error::{Error, Result};
use crate::grouping::{group_lines, GroupingReport};
use crate::json::write_json;

pub const SAVED_MESSAGE: &str = "Data successfully saved in JSON format.";

/// The file that actually gets replaced: a symlinked output is followed so
/// the link itself survives.
fn output_target(path: &Path) -> PathBuf {
  match fs::symlink_metadata(path) {
    Ok(m) if m.file_type().is_symlink() => fs::canonicalize(path).unwrap_or_else(|_| path.to_owned()),
    _ => path.to_owned()
  }
}

#[cfg(unix)]
fn new_temp_file(dir: &Path) -> io::Result<NamedTempFile> {
  use std::os::unix::fs::PermissionsExt;
  // Requested mode is masked by the umask, like a plain `File::create`.
  tempfile::Builder::new()
    .permissions(fs::Permissions::from_mode(0o666))
    .tempfile_in(dir)
}

#[cfg(not(unix))]
fn new_temp_file(dir: &Path) -> io::Result<NamedTempFile> {
  NamedTempFile::new_in(dir)
}

/// Temp file next to `target` carrying the permissions `target` already has,
/// or the umask default when there is no `target` yet.
fn temp_file_for(target: &Path) -> Result<NamedTempFile> {
  let dir = match target.parent() {
    Some(p) if !p.as_os_str().is_empty() => p,
    _ => Path::new(".")
  };

  let temp_file = new_temp_file(dir)?;
  match fs::metadata(target) {
    Ok(existing) => temp_file.as_file().set_permissions(existing.permissions())?,
    Err(e) if e.kind() == io::ErrorKind::NotFound => (),
    Err(e) => return Err(e.into())
  }
  Ok(temp_file)
}

/// Reads the intermediate file and replaces the output document with the
/// grouped mapping. A missing input is returned as `ResourceNotFound`.
pub fn group_file<W: Write>(config: &GrouperConfig, console: &mut W) -> Result<GroupingReport> {
  let input = fs::File::open(&config.input).map_err(|e| Error::opening(&config.input, e))?;
  let report = group_lines(io::BufReader::new(input), console)?;

  let target = output_target(&config.output);
  let temp_file = temp_file_for(&target)?;
  {
    let mut writer = io::BufWriter::new(&temp_file);
    write_json(&report.mapping, &mut writer, config.style)?;
    writer.flush()?;
  }
  temp_file.persist(&target)?;

  info!(
    acronyms = report.mapping.len(),
    phrases = report.mapping.phrase_count(),
    ignored = report.ignored.len(),
    output = %target.display(),
    "saved dictionary"
  );
  Ok(report)
}

pub fn run(config: &GrouperConfig) -> Result<()> {
  run_to(config, &mut io::stdout().lock())
}

/// Unlike the extractor, a missing input is not handled here.
pub fn run_to<W: Write>(config: &GrouperConfig, console: &mut W) -> Result<()> {
  group_file(config, console)?;
  writeln!(console, "{}", style(SAVED_MESSAGE).green())?;
  Ok(())
}
