
use std::path::PathBuf;

pub const DEFAULT_PHRASES_PATH: &str = "idiom.txt";
pub const DEFAULT_RECORDS_PATH: &str = "idiom.csv";
pub const DEFAULT_DICTIONARY_PATH: &str = "dict_json.json";

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ExtractorConfig {
  pub input: PathBuf,
  pub output: PathBuf
}

impl Default for ExtractorConfig {
  fn default() -> Self {
    ExtractorConfig {
      input: PathBuf::from(DEFAULT_PHRASES_PATH),
      output: PathBuf::from(DEFAULT_RECORDS_PATH)
    }
  }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct JsonStyle {
  /// Escape everything outside printable ASCII as `\uXXXX`.
  pub ascii_only: bool
}

impl Default for JsonStyle {
  fn default() -> Self {
    JsonStyle { ascii_only: true }
  }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct GrouperConfig {
  pub input: PathBuf,
  pub output: PathBuf,
  pub style: JsonStyle
}

impl Default for GrouperConfig {
  fn default() -> Self {
    GrouperConfig {
      input: PathBuf::from(DEFAULT_RECORDS_PATH),
      output: PathBuf::from(DEFAULT_DICTIONARY_PATH),
      style: JsonStyle::default()
    }
  }
}
