//! Serde model of the legacy record shape.
//!
//! One JSON document per article. The keys `license`, `titles`, `abstracts`
//! and `imprints` are required — a record missing any of them is malformed
//! and fails at deserialization (intentional fail-fast). Everything else
//! defaults to empty so partial records degrade gracefully.

use serde::Deserialize;

#[derive(Debug, Deserialize)]
pub struct LegacyRecord {
  #[serde(default)]
  pub control_number: Option<i64>,

  /// Required. Each entry may use the legacy `license` key or `name`.
  pub license:   Vec<RawLicense>,
  /// Required; first entry supplies title and subtitle.
  pub titles:    Vec<RawTitle>,
  /// Required; first entry supplies the abstract.
  pub abstracts: Vec<RawAbstract>,
  /// Required; index-aligned with `publication_info`.
  pub imprints:  Vec<RawImprint>,

  #[serde(default)]
  pub dois:             Vec<RawDoi>,
  #[serde(default)]
  pub arxiv_eprints:    Vec<RawArxivEprint>,
  #[serde(default)]
  pub copyright:        Vec<RawCopyright>,
  #[serde(default)]
  pub publication_info: Vec<RawPublicationInfo>,
  #[serde(default)]
  pub collaborations:   Vec<RawCollaboration>,
  #[serde(default)]
  pub authors:          Vec<RawAuthor>,
}

/// The legacy shape spells the name key either `license` or `name`; the
/// alias replaces the old mutating rename-in-place pass over the batch.
#[derive(Debug, Clone, Deserialize)]
pub struct RawLicense {
  #[serde(default, alias = "license")]
  pub name: Option<String>,
  #[serde(default)]
  pub url:  Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct RawTitle {
  #[serde(default)]
  pub title:    Option<String>,
  #[serde(default)]
  pub subtitle: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct RawAbstract {
  #[serde(default)]
  pub value: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct RawImprint {
  #[serde(default)]
  pub date:      Option<String>,
  #[serde(default)]
  pub publisher: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct RawDoi {
  #[serde(default)]
  pub value: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct RawArxivEprint {
  #[serde(default)]
  pub value:      Option<String>,
  #[serde(default)]
  pub categories: Vec<String>,
}

#[derive(Debug, Deserialize)]
pub struct RawCopyright {
  #[serde(default)]
  pub statement: Option<String>,
  #[serde(default)]
  pub holder:    Option<String>,
  #[serde(default)]
  pub year:      Option<i32>,
}

#[derive(Debug, Deserialize)]
pub struct RawPublicationInfo {
  #[serde(default)]
  pub journal_title:      Option<String>,
  #[serde(default)]
  pub journal_volume:     Option<String>,
  #[serde(default)]
  pub journal_issue:      Option<String>,
  #[serde(default)]
  pub page_start:         Option<String>,
  #[serde(default)]
  pub page_end:           Option<String>,
  #[serde(default)]
  pub artid:              Option<String>,
  #[serde(default)]
  pub year:               Option<i32>,
  #[serde(default)]
  pub journal_issue_date: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct RawCollaboration {
  #[serde(default)]
  pub value: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct RawAuthor {
  /// "Surname, Given Names" form when present.
  #[serde(default)]
  pub full_name:    Option<String>,
  #[serde(default)]
  pub given_names:  Option<String>,
  #[serde(default)]
  pub surname:      Option<String>,
  #[serde(default)]
  pub email:        Option<String>,
  #[serde(default)]
  pub orcid:        Option<String>,
  #[serde(default)]
  pub affiliations: Vec<RawAffiliation>,
}

#[derive(Debug, Deserialize)]
pub struct RawAffiliation {
  #[serde(default)]
  pub country:      Option<String>,
  #[serde(default)]
  pub value:        Option<String>,
  #[serde(default)]
  pub organization: Option<String>,
}
