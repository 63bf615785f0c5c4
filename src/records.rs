
use crate::error::{Error, Result};

pub const DELIMITER: &str = "; ";

/// One line of the intermediate file: a phrase and the acronym derived from it.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Record {
  pub phrase: String,
  pub acronym: String
}

impl Record {
  pub fn new(phrase: impl Into<String>, acronym: impl Into<String>) -> Record {
    Record { phrase: phrase.into(), acronym: acronym.into() }
  }

  pub fn to_line(&self) -> String {
    format!("{}{}{}", self.phrase, DELIMITER, self.acronym)
  }
}

/// Parses a trimmed line, splitting on the first delimiter only.
///
/// Anything after the first delimiter belongs to the acronym, including
/// further delimiters.
pub fn parse_record(line: &str) -> Result<Record> {
  let line = line.trim();
  match line.split_once(DELIMITER) {
    Some((phrase, acronym)) => Ok(Record::new(phrase, acronym)),
    None => Err(Error::MalformedRecord { line: line.to_owned() })
  }
}
