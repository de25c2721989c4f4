//! The embedded Japanese word dictionary for `jrp`.
//!
//! A hand-curated lemma list in the WNJpn lemma/POS layout is compiled into
//! the binary and parsed at most once per process. [`Dictionary`] implements
//! [`jrp_core::source::WordSource`]: prefixes are adjectives and adverbs,
//! suffixes are nouns and verbs.
//!
//! # Quick start
//!
//! ```no_run
//! use jrp_core::{source::WordSource, word::Role};
//!
//! let dict = jrp_words::embedded().unwrap();
//! println!("{} prefix candidates", dict.candidates_for(Role::Prefix).len());
//! ```

pub mod error;
mod parse;

use std::collections::HashMap;

use jrp_core::{
  source::WordSource,
  word::{Role, Word, WordId},
};
use once_cell::sync::OnceCell;
use tracing::debug;

pub use error::{Error, Result};

/// The raw dictionary asset.
pub const EMBEDDED_TSV: &str = include_str!("../assets/wnjpn.tsv");

static EMBEDDED: OnceCell<Dictionary> = OnceCell::new();

/// The process-wide embedded dictionary, parsed on first use.
pub fn embedded() -> Result<&'static Dictionary> {
  EMBEDDED.get_or_try_init(|| Dictionary::parse(EMBEDDED_TSV))
}

// ─── Dictionary ──────────────────────────────────────────────────────────────

/// An immutable word list indexed by phrase role.
#[derive(Debug, Clone)]
pub struct Dictionary {
  prefixes: Vec<Word>,
  suffixes: Vec<Word>,
  /// `(role, lemma)` → id, for fixed-word lookups.
  index:    HashMap<(Role, String), WordId>,
}

impl Dictionary {
  /// Parse a dictionary from tab-separated `<id>\t<lemma>\t<pos>` lines.
  pub fn parse(input: &str) -> Result<Self> {
    let dict = Self::from_words(parse::parse_words(input)?);
    debug!(
      prefixes = dict.prefixes.len(),
      suffixes = dict.suffixes.len(),
      "loaded word dictionary"
    );
    Ok(dict)
  }

  /// Build the role index over already-parsed words.
  pub fn from_words(words: impl IntoIterator<Item = Word>) -> Self {
    let mut prefixes = Vec::new();
    let mut suffixes = Vec::new();
    let mut index = HashMap::new();

    for word in words {
      let role = word.pos.role();
      index.entry((role, word.lemma.clone())).or_insert(word.id);
      match role {
        Role::Prefix => prefixes.push(word),
        Role::Suffix => suffixes.push(word),
      }
    }

    Self { prefixes, suffixes, index }
  }

  pub fn len(&self) -> usize { self.prefixes.len() + self.suffixes.len() }

  pub fn is_empty(&self) -> bool { self.len() == 0 }
}

impl WordSource for Dictionary {
  fn candidates_for(&self, role: Role) -> &[Word] {
    match role {
      Role::Prefix => &self.prefixes,
      Role::Suffix => &self.suffixes,
    }
  }

  fn find(&self, lemma: &str, role: Role) -> Option<WordId> {
    self.index.get(&(role, lemma.to_owned())).copied()
  }
}
