//! Authors and their external identifiers.

use serde::{Deserialize, Serialize};

/// Input for the author upsert. Deduplicated by the full tuple, so two
/// authors with identical data on the same article collapse to one row
/// (known limitation carried over from the legacy schema).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewAuthor {
  pub article_id:   i64,
  pub first_name:   String,
  pub last_name:    String,
  pub email:        String,
  /// 0-based position within the source record's author list.
  pub author_order: u32,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Author {
  pub author_id:    i64,
  pub article_id:   i64,
  pub first_name:   String,
  pub last_name:    String,
  pub email:        String,
  pub author_order: u32,
}

/// External identifier scheme attached to an author. ORCID is the only
/// scheme the legacy records carry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum AuthorIdentifierType {
  #[serde(rename = "ORCID")]
  Orcid,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewAuthorIdentifier {
  pub author_id:        i64,
  pub identifier_type:  AuthorIdentifierType,
  pub identifier_value: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AuthorIdentifier {
  pub identifier_id:    i64,
  pub author_id:        i64,
  pub identifier_type:  AuthorIdentifierType,
  pub identifier_value: String,
}
