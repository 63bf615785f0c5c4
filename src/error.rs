
use std::io;
use std::path::{Path, PathBuf};
use thiserror::Error;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Error, Debug)]
pub enum Error {
  #[error("resource not found: {}", path.display())]
  ResourceNotFound { path: PathBuf },

  #[error("malformed record: {line:?}")]
  MalformedRecord { line: String },

  /// The initial of an empty word was requested.
  #[error("cannot take the initial of an empty word")]
  EmptyWord,

  #[error("I/O error: {0}")]
  Io(#[from] io::Error),

  #[error("JSON error: {0}")]
  Json(#[from] serde_json::Error),

  #[error("could not replace output file: {0}")]
  Persist(#[from] tempfile::PersistError),
}

impl Error {
  /// Turns a failed open of `path` into `ResourceNotFound` when the file is missing.
  pub fn opening(path: &Path, e: io::Error) -> Error {
    match e.kind() {
      io::ErrorKind::NotFound => Error::ResourceNotFound { path: path.to_owned() },
      _ => Error::Io(e)
    }
  }
}
