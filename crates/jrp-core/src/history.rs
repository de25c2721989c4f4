//! Read queries and batch insert over the generation history.
//!
//! Each function validates its arguments, then delegates to a
//! [`PhraseStore`]. Store errors are converted into [`crate::Error`].

use crate::{
  Error, Result, Status,
  phrase::{Phrase, PhraseDraft, PhraseId},
  store::{PhraseStore, Scope, SearchMode, SearchQuery},
};

/// Persist `drafts` atomically and return the stored rows in draft order.
pub fn insert_batch<S: PhraseStore>(
  store: &mut S,
  drafts: &[PhraseDraft],
) -> Result<Vec<Phrase>> {
  if drafts.is_empty() {
    return Ok(Vec::new());
  }
  if let Some(pos) = drafts.iter().position(|d| d.phrase.is_empty()) {
    return Err(Error::Input(format!("draft {pos} has an empty phrase")));
  }
  store.insert_batch(drafts).map_err(Into::into)
}

/// The last `n` history rows, oldest first. Fewer rows than `n` is fine.
pub fn get_last<S: PhraseStore>(store: &S, n: usize) -> Result<Vec<Phrase>> {
  last_in(store, Scope::AllHistory, n)
}

/// Every history row, oldest first.
pub fn get_all<S: PhraseStore>(store: &S) -> Result<Vec<Phrase>> {
  store.all(Scope::AllHistory).map_err(Into::into)
}

/// Every favorited row, oldest first.
pub fn get_all_favorites<S: PhraseStore>(store: &S) -> Result<Vec<Phrase>> {
  store.all(Scope::FavoritesOnly).map_err(Into::into)
}

/// The last `n` favorited rows, oldest first.
pub fn get_favorites_last<S: PhraseStore>(store: &S, n: usize) -> Result<Vec<Phrase>> {
  last_in(store, Scope::FavoritesOnly, n)
}

fn last_in<S: PhraseStore>(store: &S, scope: Scope, n: usize) -> Result<Vec<Phrase>> {
  if n == 0 {
    return Ok(Vec::new());
  }
  store.last(scope, n).map_err(Into::into)
}

/// Substring search over `phrase`.
///
/// With `n`, only the latest `n` matches are returned (still oldest first).
/// Every keyword must be non-empty.
pub fn search<S, K>(
  store: &S,
  scope: Scope,
  keywords: &[K],
  mode: SearchMode,
  n: Option<usize>,
) -> Result<Vec<Phrase>>
where
  S: PhraseStore,
  K: AsRef<str>,
{
  if keywords.is_empty() {
    return Err(Error::Input("at least one keyword is required".into()));
  }
  if keywords.iter().any(|k| k.as_ref().is_empty()) {
    return Err(Error::Input("keywords must not be empty".into()));
  }
  if n == Some(0) {
    return Ok(Vec::new());
  }

  let query = SearchQuery {
    scope,
    keywords: keywords.iter().map(|k| k.as_ref().to_owned()).collect(),
    mode,
    limit: n,
  };
  store.search(&query).map_err(Into::into)
}

/// Rows whose id is in `ids`, oldest first. Missing ids are skipped; compare
/// the result with the request to detect partial hits.
pub fn get_by_ids<S: PhraseStore>(store: &S, ids: &[PhraseId]) -> Result<Vec<Phrase>> {
  let ids = distinct(ids);
  if ids.is_empty() {
    return Ok(Vec::new());
  }
  store.get_by_ids(&ids).map_err(Into::into)
}

/// Delete history rows by id. A row took effect if it existed.
pub fn delete_by_ids<S: PhraseStore>(store: &mut S, ids: &[PhraseId]) -> Status {
  let ids = distinct(ids);
  if ids.is_empty() {
    return Status::Failed(Error::Input("no ids given".into()));
  }
  match store.delete_by_ids(&ids) {
    Ok(deleted) => Status::from_counts(ids.len(), deleted),
    Err(e) => Status::Failed(e.into()),
  }
}

/// Sorted, duplicate-free copy of `ids`.
pub(crate) fn distinct(ids: &[PhraseId]) -> Vec<PhraseId> {
  let mut ids = ids.to_vec();
  ids.sort_unstable();
  ids.dedup();
  ids
}
