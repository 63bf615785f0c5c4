
pub mod error;
pub mod lines;
pub mod config;
pub mod acronym;
pub mod records;
pub mod extract;
pub mod grouping;
pub mod json;
pub mod group;

pub use crate::acronym::generate_acronym;
pub use crate::error::{Error, Result};

use std::process::ExitCode;

/// Installs the `tracing` subscriber used by the binaries. `RUST_LOG`
/// overrides the default `warn` level so routine runs only show the status lines.
pub fn init_logging() {
  tracing_subscriber::fmt()
    .with_env_filter(
      tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| "warn".into()),
    )
    .with_writer(std::io::stderr)
    .init();
}

pub fn failure_line(e: &Error) -> String {
  format!("Error: {}", e)
}

/// Exit status for a binary's run; a failure goes to stderr in its readable form.
pub fn exit_code(result: Result<()>) -> ExitCode {
  match result {
    Ok(()) => ExitCode::SUCCESS,
    Err(e) => {
      eprintln!("{}", failure_line(&e));
      ExitCode::FAILURE
    }
  }
}
