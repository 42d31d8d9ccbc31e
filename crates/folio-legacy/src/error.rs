//! Error types for `folio-legacy`.

use thiserror::Error;

/// A record that cannot be normalized. All variants are fatal for the
/// record being extracted; nothing is persisted for it.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ExtractError {
  /// A required list field (`titles`, `abstracts`, `imprints`) has no
  /// entries. Missing keys are caught earlier, at deserialization.
  #[error("record field `{0}` must have at least one entry")]
  EmptyField(&'static str),

  #[error("unparseable date in `{field}`: {value:?}")]
  InvalidDate {
    field: &'static str,
    value: String,
  },

  /// More `publication_info` entries than `imprints` — the two lists are
  /// index-aligned in the source contract, so this is a data violation,
  /// not something to silently drop or misassign.
  #[error(
    "{infos} publication_info entries but only {imprints} imprints; \
     the lists must be index-aligned"
  )]
  PublicationAlignment { infos: usize, imprints: usize },
}

/// Failure while importing one record. Generic over the store's own error
/// type so the importer works against any [`BiblioStore`] backend.
///
/// [`BiblioStore`]: folio_core::store::BiblioStore
#[derive(Debug, Error)]
pub enum ImportError<E>
where
  E: std::error::Error + Send + Sync + 'static,
{
  #[error("invalid record JSON: {0}")]
  Json(#[from] serde_json::Error),

  #[error("malformed record: {0}")]
  Extract(#[from] ExtractError),

  #[error("store error: {0}")]
  Store(E),
}
