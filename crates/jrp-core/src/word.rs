//! Dictionary words and the part-of-speech policy that decides which side of
//! a phrase a word may appear on.

/// Identifier of a word within the embedded dictionary.
pub type WordId = i64;

/// The four WordNet part-of-speech classes present in the dictionary.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PartOfSpeech {
  Noun,
  Verb,
  Adjective,
  Adverb,
}

impl PartOfSpeech {
  /// Parse a WordNet single-letter POS code (`n`, `v`, `a`, `r`).
  pub fn from_code(code: &str) -> Option<Self> {
    match code {
      "n" => Some(Self::Noun),
      "v" => Some(Self::Verb),
      "a" => Some(Self::Adjective),
      "r" => Some(Self::Adverb),
      _ => None,
    }
  }

  pub fn code(self) -> &'static str {
    match self {
      Self::Noun => "n",
      Self::Verb => "v",
      Self::Adjective => "a",
      Self::Adverb => "r",
    }
  }

  /// The phrase side words of this class are drawn for.
  pub fn role(self) -> Role {
    match self {
      Self::Adjective | Self::Adverb => Role::Prefix,
      Self::Noun | Self::Verb => Role::Suffix,
    }
  }
}

/// Which half of a phrase a word fills.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Role {
  /// Drawn from adjectives and adverbs.
  Prefix,
  /// Drawn from nouns and verbs.
  Suffix,
}

impl Role {
  pub fn accepts(self, pos: PartOfSpeech) -> bool { pos.role() == self }
}

impl std::fmt::Display for Role {
  fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
    f.write_str(match self {
      Self::Prefix => "prefix",
      Self::Suffix => "suffix",
    })
  }
}

/// A single dictionary entry.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Word {
  pub id:    WordId,
  pub lemma: String,
  pub pos:   PartOfSpeech,
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn pos_codes_roundtrip() {
    for pos in [
      PartOfSpeech::Noun,
      PartOfSpeech::Verb,
      PartOfSpeech::Adjective,
      PartOfSpeech::Adverb,
    ] {
      assert_eq!(PartOfSpeech::from_code(pos.code()), Some(pos));
    }
    assert_eq!(PartOfSpeech::from_code("x"), None);
  }

  #[test]
  fn prefix_role_takes_adjectives_and_adverbs() {
    assert!(Role::Prefix.accepts(PartOfSpeech::Adjective));
    assert!(Role::Prefix.accepts(PartOfSpeech::Adverb));
    assert!(!Role::Prefix.accepts(PartOfSpeech::Noun));
    assert!(!Role::Prefix.accepts(PartOfSpeech::Verb));
  }

  #[test]
  fn suffix_role_takes_nouns_and_verbs() {
    assert!(Role::Suffix.accepts(PartOfSpeech::Noun));
    assert!(Role::Suffix.accepts(PartOfSpeech::Verb));
    assert!(!Role::Suffix.accepts(PartOfSpeech::Adjective));
  }
}
