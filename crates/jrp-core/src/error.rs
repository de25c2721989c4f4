//! Error types for `jrp-core`.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
  /// The word dictionary is missing or corrupt, or the database schema
  /// version is not one this build understands.
  #[error("configuration error: {0}")]
  Configuration(String),

  /// Database I/O, lock contention, constraint violation or a row that could
  /// not be decoded.
  #[error("storage error: {0}")]
  Storage(#[source] Box<dyn std::error::Error + Send + Sync>),

  /// A caller-supplied argument violated an operation's contract.
  #[error("invalid input: {0}")]
  Input(String),
}

impl Error {
  pub fn storage(e: impl std::error::Error + Send + Sync + 'static) -> Self {
    Self::Storage(Box::new(e))
  }
}

pub type Result<T, E = Error> = std::result::Result<T, E>;
