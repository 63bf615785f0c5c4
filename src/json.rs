
use std::io;
use serde::Serialize;
use serde_json::ser::{Formatter, PrettyFormatter, Serializer};

use crate::config::JsonStyle;
use crate::error::Result;

const INDENT: &[u8] = b"    ";

/// Pretty printer with a four-space indent that can escape every character
/// outside printable ASCII as `\uXXXX`, using surrogate pairs above U+FFFF.
pub struct DictionaryFormatter {
  pretty: PrettyFormatter<'static>,
  ascii_only: bool
}

impl DictionaryFormatter {
  pub fn new(style: JsonStyle) -> Self {
    DictionaryFormatter {
      pretty: PrettyFormatter::with_indent(INDENT),
      ascii_only: style.ascii_only
    }
  }
}

fn is_printable_ascii(c: char) -> bool {
  (' ' ..= '~').contains(&c)
}

fn write_ascii_escaped<W: ?Sized + io::Write>(writer: &mut W, fragment: &str) -> io::Result<()> {
  let mut start = 0;
  let mut units = [0u16; 2];

  for (i, c) in fragment.char_indices() {
    if is_printable_ascii(c) {
      continue;
    }
    writer.write_all(fragment[start .. i].as_bytes())?;
    for unit in c.encode_utf16(&mut units) {
      write!(writer, "\\u{:04x}", unit)?;
    }
    start = i + c.len_utf8();
  }

  writer.write_all(fragment[start ..].as_bytes())
}

impl Formatter for DictionaryFormatter {
  fn write_string_fragment<W: ?Sized + io::Write>(&mut self, writer: &mut W, fragment: &str) -> io::Result<()> {
    if self.ascii_only {
      write_ascii_escaped(writer, fragment)
    } else {
      writer.write_all(fragment.as_bytes())
    }
  }

  fn begin_array<W: ?Sized + io::Write>(&mut self, writer: &mut W) -> io::Result<()> {
    self.pretty.begin_array(writer)
  }

  fn end_array<W: ?Sized + io::Write>(&mut self, writer: &mut W) -> io::Result<()> {
    self.pretty.end_array(writer)
  }

  fn begin_array_value<W: ?Sized + io::Write>(&mut self, writer: &mut W, first: bool) -> io::Result<()> {
    self.pretty.begin_array_value(writer, first)
  }

  fn end_array_value<W: ?Sized + io::Write>(&mut self, writer: &mut W) -> io::Result<()> {
    self.pretty.end_array_value(writer)
  }

  fn begin_object<W: ?Sized + io::Write>(&mut self, writer: &mut W) -> io::Result<()> {
    self.pretty.begin_object(writer)
  }

  fn end_object<W: ?Sized + io::Write>(&mut self, writer: &mut W) -> io::Result<()> {
    self.pretty.end_object(writer)
  }

  fn begin_object_key<W: ?Sized + io::Write>(&mut self, writer: &mut W, first: bool) -> io::Result<()> {
    self.pretty.begin_object_key(writer, first)
  }

  fn begin_object_value<W: ?Sized + io::Write>(&mut self, writer: &mut W) -> io::Result<()> {
    self.pretty.begin_object_value(writer)
  }

  fn end_object_value<W: ?Sized + io::Write>(&mut self, writer: &mut W) -> io::Result<()> {
    self.pretty.end_object_value(writer)
  }
}

/// Serializes `value` without a trailing newline.
pub fn write_json<T: Serialize + ?Sized, W: io::Write>(value: &T, writer: W, style: JsonStyle) -> Result<()> {
  let mut serializer = Serializer::with_formatter(writer, DictionaryFormatter::new(style));
  value.serialize(&mut serializer)?;
  Ok(())
}

#[cfg(test)]
mod tests {
  use super::*;
  use std::collections::BTreeMap;

  fn to_string<T: Serialize + ?Sized>(value: &T, ascii_only: bool) -> String {
    let mut out = Vec::new();
    write_json(value, &mut out, JsonStyle { ascii_only }).unwrap();
    String::from_utf8(out).unwrap()
  }

  #[test]
  fn test_pretty_layout() {
    let value: BTreeMap<&str, Vec<&str>> = BTreeMap::from([("X", vec!["a", "b"]), ("Y", vec!["c"])]);
    assert_eq!(
      to_string(&value, true),
      "{\n    \"X\": [\n        \"a\",\n        \"b\"\n    ],\n    \"Y\": [\n        \"c\"\n    ]\n}"
    );
  }

  #[test]
  fn test_empty_object() {
    let value: BTreeMap<String, Vec<String>> = BTreeMap::new();
    assert_eq!(to_string(&value, true), "{}");
  }

  #[test]
  fn test_ascii_escaping() {
    assert_eq!(to_string("café", true), "\"caf\\u00e9\"");
    assert_eq!(to_string("a\u{7f}b", true), "\"a\\u007fb\"");
    assert_eq!(to_string("😀!", true), "\"\\ud83d\\ude00!\"");
    assert_eq!(to_string("tab\there \"q\"", true), "\"tab\\there \\\"q\\\"\"");
  }

  #[test]
  fn test_raw_utf8() {
    assert_eq!(to_string("café 😀", false), "\"café 😀\"");
  }
}
