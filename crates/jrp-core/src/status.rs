//! [`Status`]: the outcome of a bulk mutation.

use crate::Error;

/// How many of the requested items took effect.
///
/// `None` is a normal outcome ("nothing matched"); only `Failed` carries an
/// error.
#[derive(Debug)]
pub enum Status {
  /// Every requested item took effect.
  Succeeded,
  /// Some requested items took effect and some did not.
  PartiallySucceeded,
  /// Nothing took effect.
  None,
  /// The operation was rejected or the store failed; nothing was changed.
  Failed(Error),
}

impl Status {
  /// Fold per-item outcomes: `affected` of `requested` items took effect.
  pub fn from_counts(requested: usize, affected: usize) -> Self {
    if affected == 0 {
      Self::None
    } else if affected >= requested {
      Self::Succeeded
    } else {
      Self::PartiallySucceeded
    }
  }

  pub fn is_succeeded(&self) -> bool { matches!(self, Self::Succeeded) }

  pub fn is_failed(&self) -> bool { matches!(self, Self::Failed(_)) }

  /// The error behind a `Failed` status.
  pub fn error(&self) -> Option<&Error> {
    match self {
      Self::Failed(e) => Some(e),
      _ => None,
    }
  }
}

impl<T: Into<Error>> From<Result<usize, T>> for Status {
  /// Map a whole-set mutation that reports how many rows it touched:
  /// zero is `None`, anything else `Succeeded`.
  fn from(res: Result<usize, T>) -> Self {
    match res {
      Ok(0) => Self::None,
      Ok(_) => Self::Succeeded,
      Err(e) => Self::Failed(e.into()),
    }
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn counts_map_to_variants() {
    assert!(matches!(Status::from_counts(2, 2), Status::Succeeded));
    assert!(matches!(Status::from_counts(2, 1), Status::PartiallySucceeded));
    assert!(matches!(Status::from_counts(2, 0), Status::None));
  }

  #[test]
  fn whole_set_result_maps_to_variants() {
    assert!(matches!(Status::from(Ok::<_, Error>(0)), Status::None));
    assert!(matches!(Status::from(Ok::<_, Error>(3)), Status::Succeeded));
    let failed = Status::from(Err::<usize, _>(Error::Input("bad".into())));
    assert!(failed.is_failed());
    assert!(matches!(failed.error(), Some(Error::Input(_))));
  }
}
