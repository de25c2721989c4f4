//! Error type for `jrp-store-sqlite`.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
  #[error("database error: {0}")]
  Database(#[from] rusqlite::Error),

  #[error("i/o error: {0}")]
  Io(#[from] std::io::Error),

  #[error("date/time parse error: {0}")]
  DateParse(String),

  #[error("invalid is_favorited value: {0}")]
  InvalidFlag(i64),

  /// The file was written by a newer build, or is not a jrp database.
  #[error("unsupported schema version {found} (this build supports up to {supported})")]
  UnsupportedSchema { found: i64, supported: i64 },
}

impl From<Error> for jrp_core::Error {
  fn from(e: Error) -> Self {
    match e {
      Error::UnsupportedSchema { .. } => jrp_core::Error::Configuration(e.to_string()),
      other => jrp_core::Error::storage(other),
    }
  }
}

pub type Result<T, E = Error> = std::result::Result<T, E>;
