
use std::collections::VecDeque;
use std::io::{self, BufRead};

/// Lines ending in `\n`, `\r\n` or a lone `\r`, without their terminators.
pub struct UniversalLines<R> {
  reader: R,
  pending: VecDeque<String>
}

pub fn universal_lines<R: BufRead>(reader: R) -> UniversalLines<R> {
  UniversalLines { reader, pending: VecDeque::new() }
}

impl<R: BufRead> Iterator for UniversalLines<R> {
  type Item = io::Result<String>;

  fn next(&mut self) -> Option<io::Result<String>> {
    if let Some(line) = self.pending.pop_front() {
      return Some(Ok(line));
    }

    let mut buf = Vec::new();
    match self.reader.read_until(b'\n', &mut buf) {
      Ok(0) => None,
      Ok(_) => {
        if buf.ends_with(b"\n") {
          buf.pop();
        }
        if buf.ends_with(b"\r") {
          buf.pop();
        }
        let text = match String::from_utf8(buf) {
          Ok(text) => text,
          Err(e) => return Some(Err(io::Error::new(io::ErrorKind::InvalidData, e)))
        };
        self.pending.extend(text.split('\r').map(str::to_owned));
        self.pending.pop_front().map(Ok)
      },
      Err(e) => Some(Err(e))
    }
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  fn split(text: &str) -> Vec<String> {
    universal_lines(text.as_bytes()).collect::<io::Result<Vec<_>>>().unwrap()
  }

  #[test]
  fn test_newline_styles() {
    assert_eq!(split("a\nb\r\nc\rd"), vec!["a", "b", "c", "d"]);
    assert_eq!(split("a b\rc d\n"), vec!["a b", "c d"]);
  }

  #[test]
  fn test_blank_lines() {
    assert_eq!(split("\n\r\n\r"), vec!["", "", ""]);
    assert_eq!(split("a\r\rb\n"), vec!["a", "", "b"]);
    assert_eq!(split("a\r\r\n"), vec!["a", ""]);
  }

  #[test]
  fn test_empty() {
    assert!(split("").is_empty());
  }

  #[test]
  fn test_invalid_utf8() {
    let mut lines = universal_lines(&b"ok\n\xff\n"[..]);
    assert_eq!(lines.next().unwrap().unwrap(), "ok");
    assert_eq!(lines.next().unwrap().unwrap_err().kind(), io::ErrorKind::InvalidData);
  }
}
