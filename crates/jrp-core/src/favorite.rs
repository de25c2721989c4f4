//! Favorite promotion, demotion and the destructive clear operations.
//!
//! Bulk flag changes report through [`Status`]. None of these functions
//! prompt; confirming a destructive call is the caller's job.

use tracing::debug;

use crate::{
  Error, Result, Status,
  history::distinct,
  phrase::PhraseId,
  store::PhraseStore,
};

/// Favorite the listed rows. An id takes effect only if its row exists and
/// was not already a favorite.
pub fn add_by_ids<S: PhraseStore>(store: &mut S, ids: &[PhraseId]) -> Status {
  set_flag(store, ids, true)
}

/// Unfavorite the listed rows. An id takes effect only if its row exists and
/// was a favorite.
pub fn remove_by_ids<S: PhraseStore>(store: &mut S, ids: &[PhraseId]) -> Status {
  set_flag(store, ids, false)
}

fn set_flag<S: PhraseStore>(store: &mut S, ids: &[PhraseId], favorited: bool) -> Status {
  let ids = distinct(ids);
  if ids.is_empty() {
    return Status::Failed(Error::Input("no ids given".into()));
  }
  match store.set_favorited(&ids, favorited) {
    Ok(changed) => {
      debug!(requested = ids.len(), changed, favorited, "updated favorite flags");
      Status::from_counts(ids.len(), changed)
    }
    Err(e) => Status::Failed(e.into()),
  }
}

/// Unfavorite every row. `None` if there were no favorites.
pub fn remove_all<S: PhraseStore>(store: &mut S) -> Status {
  store.unfavorite_all().into()
}

/// Delete the whole history, favorites included, and restart id assignment.
/// Returns the number of rows deleted.
pub fn clear_history<S: PhraseStore>(store: &mut S) -> Result<usize> {
  store.delete_all().map_err(Into::into)
}

/// Delete only the favorited rows. Returns the number of rows deleted.
pub fn clear_favorites_only<S: PhraseStore>(store: &mut S) -> Result<usize> {
  store.delete_favorites().map_err(Into::into)
}

#[cfg(test)]
mod tests {
  use super::*;
  use crate::{
    phrase::{Phrase, PhraseDraft},
    store::{Scope, SearchQuery},
  };

  #[derive(Debug, thiserror::Error)]
  #[error("disk on fire")]
  struct Boom;

  impl From<Boom> for Error {
    fn from(e: Boom) -> Self { Error::storage(e) }
  }

  /// A store whose every call fails, counting the writes it was asked for.
  #[derive(Default)]
  struct BrokenStore {
    writes: usize,
  }

  impl PhraseStore for BrokenStore {
    type Error = Boom;

    fn insert_batch(&mut self, _: &[PhraseDraft]) -> Result<Vec<Phrase>, Boom> {
      self.writes += 1;
      Err(Boom)
    }

    fn set_favorited(&mut self, _: &[PhraseId], _: bool) -> Result<usize, Boom> {
      self.writes += 1;
      Err(Boom)
    }

    fn unfavorite_all(&mut self) -> Result<usize, Boom> {
      self.writes += 1;
      Err(Boom)
    }

    fn delete_by_ids(&mut self, _: &[PhraseId]) -> Result<usize, Boom> {
      self.writes += 1;
      Err(Boom)
    }

    fn delete_all(&mut self) -> Result<usize, Boom> { Err(Boom) }

    fn delete_favorites(&mut self) -> Result<usize, Boom> { Err(Boom) }

    fn last(&self, _: Scope, _: usize) -> Result<Vec<Phrase>, Boom> { Err(Boom) }

    fn all(&self, _: Scope) -> Result<Vec<Phrase>, Boom> { Err(Boom) }

    fn search(&self, _: &SearchQuery) -> Result<Vec<Phrase>, Boom> { Err(Boom) }

    fn get_by_ids(&self, _: &[PhraseId]) -> Result<Vec<Phrase>, Boom> { Err(Boom) }
  }

  #[test]
  fn store_failure_is_reported_as_failed() {
    let mut s = BrokenStore::default();
    let status = add_by_ids(&mut s, &[1]);
    assert!(matches!(status.error(), Some(Error::Storage(_))));
    assert!(remove_by_ids(&mut s, &[1]).is_failed());
    assert!(remove_all(&mut s).is_failed());
  }

  #[test]
  fn empty_id_list_is_rejected_before_the_store() {
    let mut s = BrokenStore::default();
    let status = add_by_ids(&mut s, &[]);
    assert!(matches!(status.error(), Some(Error::Input(_))));
    assert_eq!(s.writes, 0);
  }

  #[test]
  fn clears_propagate_store_errors() {
    let mut s = BrokenStore::default();
    assert!(matches!(clear_history(&mut s), Err(Error::Storage(_))));
    assert!(matches!(clear_favorites_only(&mut s), Err(Error::Storage(_))));
  }

  #[test]
  fn history_input_checks_run_before_the_store() {
    use crate::{history, store::SearchMode};

    let mut s = BrokenStore::default();
    let empty: [&str; 0] = [];
    assert!(matches!(
      history::search(&s, Scope::AllHistory, &empty, SearchMode::Or, None),
      Err(Error::Input(_))
    ));
    assert!(matches!(
      history::search(&s, Scope::AllHistory, &[""], SearchMode::Or, None),
      Err(Error::Input(_))
    ));
    assert!(history::get_last(&s, 0).unwrap().is_empty());
    assert!(history::get_by_ids(&s, &[]).unwrap().is_empty());
    assert!(history::insert_batch(&mut s, &[]).unwrap().is_empty());
    assert!(matches!(
      history::insert_batch(&mut s, &[PhraseDraft::literal("")]),
      Err(Error::Input(_))
    ));
    assert!(history::delete_by_ids(&mut s, &[]).is_failed());
    assert_eq!(s.writes, 0);
  }
}
