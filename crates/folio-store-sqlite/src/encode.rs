//! Encoding helpers between Rust enums and their SQLite text columns.
//!
//! Dates go through rusqlite's `chrono` support; only the identifier type
//! discriminants need hand-written mappings.

use folio_core::{article::IdentifierType, author::AuthorIdentifierType};

use crate::{Error, Result};

pub fn encode_identifier_type(t: IdentifierType) -> &'static str {
  match t {
    IdentifierType::Doi => "DOI",
    IdentifierType::Arxiv => "arXiv",
  }
}

pub fn decode_identifier_type(s: &str) -> Result<IdentifierType> {
  match s {
    "DOI" => Ok(IdentifierType::Doi),
    "arXiv" => Ok(IdentifierType::Arxiv),
    other => Err(Error::UnknownIdentifierType(other.to_string())),
  }
}

pub fn encode_author_identifier_type(t: AuthorIdentifierType) -> &'static str {
  match t {
    AuthorIdentifierType::Orcid => "ORCID",
  }
}

pub fn decode_author_identifier_type(s: &str) -> Result<AuthorIdentifierType> {
  match s {
    "ORCID" => Ok(AuthorIdentifierType::Orcid),
    other => Err(Error::UnknownIdentifierType(other.to_string())),
  }
}
