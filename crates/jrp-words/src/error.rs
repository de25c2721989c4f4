//! Error types for the jrp-words dictionary loader.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
  #[error("line {line}: expected <id>\\t<lemma>\\t<pos>, got {content:?}")]
  MalformedLine { line: usize, content: String },

  #[error("line {line}: invalid word id {value:?}")]
  InvalidId { line: usize, value: String },

  #[error("line {line}: unknown part-of-speech code {code:?}")]
  UnknownPos { line: usize, code: String },

  #[error("line {line}: empty lemma")]
  EmptyLemma { line: usize },

  #[error("line {line}: duplicate word id {id}")]
  DuplicateId { line: usize, id: i64 },

  #[error("dictionary contains no words")]
  Empty,
}

impl From<Error> for jrp_core::Error {
  fn from(e: Error) -> Self { jrp_core::Error::Configuration(format!("word dictionary: {e}")) }
}

pub type Result<T, E = Error> = std::result::Result<T, E>;
