//! Error type for `folio-store-sqlite`.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
  #[error("database error: {0}")]
  Database(#[from] rusqlite::Error),

  #[error("unknown identifier type: {0:?}")]
  UnknownIdentifierType(String),
}

pub type Result<T, E = Error> = std::result::Result<T, E>;
