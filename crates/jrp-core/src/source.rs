//! The [`WordSource`] trait: read-only access to a word dictionary.
//!
//! The embedded WNJpn-derived dictionary in `jrp-words` is the production
//! implementation. Tests substitute small in-memory lists.

use crate::word::{Role, Word, WordId};

pub trait WordSource {
  /// All candidate words for `role`, indexable in O(1).
  fn candidates_for(&self, role: Role) -> &[Word];

  /// Look up a literal supplied by the user. Returns `None` when the lemma is
  /// not a candidate for `role`.
  fn find(&self, lemma: &str, role: Role) -> Option<WordId> {
    self
      .candidates_for(role)
      .iter()
      .find(|w| w.lemma == lemma)
      .map(|w| w.id)
  }
}

impl<T: WordSource + ?Sized> WordSource for &T {
  fn candidates_for(&self, role: Role) -> &[Word] { (**self).candidates_for(role) }

  fn find(&self, lemma: &str, role: Role) -> Option<WordId> { (**self).find(lemma, role) }
}
