//! Line parser for the tab-separated dictionary asset.

use std::collections::HashSet;

use jrp_core::word::{PartOfSpeech, Word};

use crate::{Error, Result};

/// Parse every non-blank, non-comment line of `input`.
pub fn parse_words(input: &str) -> Result<Vec<Word>> {
  let mut words = Vec::new();
  let mut seen = HashSet::new();

  for (idx, raw) in input.lines().enumerate() {
    let line = idx + 1;
    let trimmed = raw.trim();
    if trimmed.is_empty() || trimmed.starts_with('#') {
      continue;
    }

    let word = parse_line(line, trimmed)?;
    if !seen.insert(word.id) {
      return Err(Error::DuplicateId { line, id: word.id });
    }
    words.push(word);
  }

  if words.is_empty() {
    return Err(Error::Empty);
  }
  Ok(words)
}

fn parse_line(line: usize, content: &str) -> Result<Word> {
  let mut fields = content.split('\t');
  let (Some(id), Some(lemma), Some(code), None) =
    (fields.next(), fields.next(), fields.next(), fields.next())
  else {
    return Err(Error::MalformedLine { line, content: content.to_owned() });
  };

  let id = id
    .trim()
    .parse::<i64>()
    .map_err(|_| Error::InvalidId { line, value: id.to_owned() })?;

  let lemma = lemma.trim();
  if lemma.is_empty() {
    return Err(Error::EmptyLemma { line });
  }

  let pos = PartOfSpeech::from_code(code.trim())
    .ok_or_else(|| Error::UnknownPos { line, code: code.to_owned() })?;

  Ok(Word { id, lemma: lemma.to_owned(), pos })
}
