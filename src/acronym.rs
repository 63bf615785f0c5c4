
use crate::error::{Error, Result};

pub fn normalize(text: &str) -> String {
  text.replace('-', " ")
}

/// Uppercased first character of `word`.
///
/// Some characters uppercase to more than one character ('ß' gives "SS"),
/// so the result is a `String` rather than a `char`.
pub fn initial(word: &str) -> Result<String> {
  let first = word.chars().next().ok_or(Error::EmptyWord)?;
  Ok(first.to_uppercase().collect())
}

pub fn acronym_of_words<'a, I>(words: I) -> Result<String>
where I: IntoIterator<Item = &'a str>
{
  words.into_iter().map(initial).collect()
}

/// Acronym of a phrase: hyphens count as spaces, one initial per word.
pub fn generate_acronym(text: &str) -> Result<String> {
  acronym_of_words(normalize(text).split_whitespace())
}
