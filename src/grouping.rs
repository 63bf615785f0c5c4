
use std::collections::HashMap;
use std::io::{BufRead, Write};
use serde::ser::{Serialize, Serializer, SerializeMap};
use tracing::debug;

use crate::error::{Error, Result};
use crate::lines::universal_lines;
use crate::records::{parse_record, Record};

/// Acronym to phrases, keeping keys in the order they were first seen and
/// phrases in the order they were read.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct GroupedMapping {
  entries: Vec<(String, Vec<String>)>,
  index: HashMap<String, usize>
}

impl GroupedMapping {
  pub fn new() -> Self {
    Self::default()
  }

  pub fn insert(&mut self, record: Record) {
    let Record { phrase, acronym } = record;
    match self.index.get(&acronym) {
      Some(&i) => self.entries[i].1.push(phrase),
      None => {
        self.index.insert(acronym.clone(), self.entries.len());
        self.entries.push((acronym, vec![phrase]));
      }
    }
  }

  pub fn get(&self, acronym: &str) -> Option<&[String]> {
    self.index.get(acronym).map(|&i| self.entries[i].1.as_slice())
  }

  pub fn keys(&self) -> impl Iterator<Item = &str> {
    self.entries.iter().map(|(k, _)| k.as_str())
  }

  pub fn iter(&self) -> impl Iterator<Item = (&str, &[String])> {
    self.entries.iter().map(|(k, v)| (k.as_str(), v.as_slice()))
  }

  /// Number of distinct acronyms.
  pub fn len(&self) -> usize {
    self.entries.len()
  }

  pub fn is_empty(&self) -> bool {
    self.entries.is_empty()
  }

  pub fn phrase_count(&self) -> usize {
    self.entries.iter().map(|(_, v)| v.len()).sum()
  }
}

impl FromIterator<Record> for GroupedMapping {
  fn from_iter<I: IntoIterator<Item = Record>>(records: I) -> Self {
    let mut mapping = GroupedMapping::new();
    for record in records {
      mapping.insert(record);
    }
    mapping
  }
}

impl Serialize for GroupedMapping {
  fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
    let mut map = serializer.serialize_map(Some(self.entries.len()))?;
    for (acronym, phrases) in &self.entries {
      map.serialize_entry(acronym, phrases)?;
    }
    map.end()
  }
}

#[derive(Debug, Default)]
pub struct GroupingReport {
  pub mapping: GroupedMapping,
  /// Trimmed lines that had no delimiter, in read order.
  pub ignored: Vec<String>
}

/// Groups intermediate records by acronym. Malformed lines are skipped with an
/// `Ignoring line: ...` diagnostic on `console`; read errors are fatal.
pub fn group_lines<R: BufRead, W: Write>(reader: R, console: &mut W) -> Result<GroupingReport> {
  let mut report = GroupingReport::default();

  for line in universal_lines(reader) {
    let line = line?;
    match parse_record(&line) {
      Ok(record) => {
        debug!(phrase = %record.phrase, acronym = %record.acronym, "grouped record");
        report.mapping.insert(record);
      },
      Err(Error::MalformedRecord { line }) => {
        debug!(line = %line, "malformed record");
        writeln!(console, "Ignoring line: {}", line)?;
        report.ignored.push(line);
      },
      Err(e) => return Err(e)
    }
  }

  Ok(report)
}

#[cfg(test)]
mod tests {
  use super::*;
  use std::io;

  fn group_str(input: &str) -> GroupingReport {
    group_lines(input.as_bytes(), &mut io::sink()).unwrap()
  }

  #[test]
  fn test_group_lines() {
    let report = group_str("a; X\nb; X\nc; Y\n");
    let mapping = &report.mapping;

    assert_eq!(mapping.keys().collect::<Vec<_>>(), vec!["X", "Y"]);
    assert_eq!(mapping.get("X").unwrap(), ["a", "b"]);
    assert_eq!(mapping.get("Y").unwrap(), ["c"]);
    assert!(report.ignored.is_empty());
  }

  #[test]
  fn test_key_order_is_first_insertion() {
    let report = group_str("p; Z\nq; A\nr; Z\ns; M\n");
    assert_eq!(report.mapping.keys().collect::<Vec<_>>(), vec!["Z", "A", "M"]);
    assert_eq!(report.mapping.get("Z").unwrap(), ["p", "r"]);
  }

  #[test]
  fn test_malformed_lines_are_skipped() {
    let report = group_str("a; X\njusttext\n; \nb; X\n");

    assert_eq!(report.ignored, vec!["justtext".to_owned(), ";".to_owned()]);
    assert_eq!(report.mapping.get("X").unwrap(), ["a", "b"]);
    assert_eq!(report.mapping.phrase_count(), 2);
    assert!(report.mapping.iter().all(|(_, phrases)| !phrases.contains(&"justtext".to_owned())));
  }

  #[test]
  fn test_malformed_line_diagnostics() {
    let mut console = Vec::new();
    group_lines("a; X\njusttext\nb; Y\n".as_bytes(), &mut console).unwrap();
    assert_eq!(String::from_utf8(console).unwrap(), "Ignoring line: justtext\n");
  }

  #[test]
  fn test_lone_carriage_return_ends_a_record() {
    let report = group_str("a; X\rb; X\r\nc; Y");
    assert_eq!(report.mapping.get("X").unwrap(), ["a", "b"]);
    assert_eq!(report.mapping.get("Y").unwrap(), ["c"]);
  }

  #[test]
  fn test_duplicate_phrases_are_kept() {
    let report = group_str("a; X\na; X\n");
    assert_eq!(report.mapping.get("X").unwrap(), ["a", "a"]);
  }

  #[test]
  fn test_empty_input() {
    let report = group_str("");
    assert!(report.mapping.is_empty());
    assert!(report.ignored.is_empty());
  }

  #[test]
  fn test_every_phrase_in_one_group() {
    let records = vec![
      Record::new("a", "X"), Record::new("b", "Y"), Record::new("c", "X"), Record::new("d", "Z")
    ];
    let mapping: GroupedMapping = records.iter().cloned().collect();

    assert_eq!(mapping.len(), 3);
    assert_eq!(mapping.phrase_count(), records.len());
    for record in &records {
      let holders = mapping.iter().filter(|(_, phrases)| phrases.contains(&record.phrase)).count();
      assert_eq!(holders, 1);
    }
  }

  #[test]
  fn test_serialize_keeps_insertion_order() {
    let mapping: GroupedMapping = vec![Record::new("b", "Y"), Record::new("a", "X")].into_iter().collect();
    assert_eq!(serde_json::to_string(&mapping).unwrap(), r#"{"Y":["b"],"X":["a"]}"#);
  }
}
