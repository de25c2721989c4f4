//! The `PhraseStore` trait and supporting query types.
//!
//! The trait is implemented by storage backends (e.g. `jrp-store-sqlite`).
//! The free functions in [`crate::history`] and [`crate::favorite`] validate
//! their input and then call through this abstraction.
//!
//! Every mutating method runs inside a single transaction: either all of its
//! effects land or none do.

use crate::phrase::{Phrase, PhraseDraft, PhraseId};

// ─── Query types ─────────────────────────────────────────────────────────────

/// Which rows an operation looks at.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Scope {
  #[default]
  AllHistory,
  FavoritesOnly,
}

/// How multiple search keywords combine.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SearchMode {
  /// A row matches if any keyword is a substring of its phrase.
  #[default]
  Or,
  /// A row matches only if every keyword is.
  And,
}

/// Parameters for [`PhraseStore::search`].
#[derive(Debug, Clone, Default)]
pub struct SearchQuery {
  pub scope:    Scope,
  /// Case-sensitive substrings matched against `phrase` only.
  pub keywords: Vec<String>,
  pub mode:     SearchMode,
  /// Keep only the latest `limit` matches; `None` returns all of them.
  pub limit:    Option<usize>,
}

// ─── Trait ───────────────────────────────────────────────────────────────────

/// Abstraction over a phrase store backend.
///
/// Reads return rows ordered by id ascending. Methods that take a list of
/// ids ignore ids with no matching row.
pub trait PhraseStore {
  type Error: std::error::Error + Into<crate::Error> + Send + Sync + 'static;

  // ── Writes ────────────────────────────────────────────────────────────

  /// Insert `drafts` in order, assigning contiguous ids and stamping both
  /// timestamps with the transaction time.
  fn insert_batch(&mut self, drafts: &[PhraseDraft]) -> Result<Vec<Phrase>, Self::Error>;

  /// Set `is_favorited` on every listed row whose flag currently differs,
  /// rewriting `updated_at`. Returns the number of rows that changed.
  fn set_favorited(
    &mut self,
    ids: &[PhraseId],
    favorited: bool,
  ) -> Result<usize, Self::Error>;

  /// Clear the favorite flag on every row. Returns the number of rows that
  /// were favorited.
  fn unfavorite_all(&mut self) -> Result<usize, Self::Error>;

  /// Delete the listed rows. Returns the number deleted.
  fn delete_by_ids(&mut self, ids: &[PhraseId]) -> Result<usize, Self::Error>;

  /// Delete every row and reset id assignment.
  fn delete_all(&mut self) -> Result<usize, Self::Error>;

  /// Delete every favorited row.
  fn delete_favorites(&mut self) -> Result<usize, Self::Error>;

  // ── Reads ─────────────────────────────────────────────────────────────

  /// The last `n` rows in `scope`, returned in ascending id order.
  fn last(&self, scope: Scope, n: usize) -> Result<Vec<Phrase>, Self::Error>;

  /// Every row in `scope`.
  fn all(&self, scope: Scope) -> Result<Vec<Phrase>, Self::Error>;

  /// Rows in `query.scope` whose phrase matches the keywords.
  fn search(&self, query: &SearchQuery) -> Result<Vec<Phrase>, Self::Error>;

  /// Rows whose id is listed.
  fn get_by_ids(&self, ids: &[PhraseId]) -> Result<Vec<Phrase>, Self::Error>;
}
