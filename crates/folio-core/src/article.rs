//! Article and the rows that hang off it: identifiers, copyrights, arXiv
//! categories, publication info.
//!
//! Every entity comes in two flavours: a `New*` input struct carrying the
//! natural key (what the importer hands to the store) and the persisted row
//! with its surrogate id. Identity is structural — determined by the natural
//! key, never by the surrogate id alone.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

// ─── Article ─────────────────────────────────────────────────────────────────

/// Input for the article upsert.
///
/// `id` is the legacy `control_number` when the source record carries one, so
/// a re-import matches the same row. `None` lets the store assign an id.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewArticle {
  pub id:               Option<i64>,
  pub publication_date: Option<NaiveDate>,
  pub title:            String,
  /// Already truncated to 255 characters by the extractor.
  pub subtitle:         String,
  pub abstract_text:    String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Article {
  pub article_id:       i64,
  pub publication_date: Option<NaiveDate>,
  pub title:            String,
  pub subtitle:         String,
  pub abstract_text:    String,
}

// ─── Identifiers ─────────────────────────────────────────────────────────────

/// External identifier scheme attached to an article.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum IdentifierType {
  #[serde(rename = "DOI")]
  Doi,
  #[serde(rename = "arXiv")]
  Arxiv,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewArticleIdentifier {
  pub article_id:       i64,
  pub identifier_type:  IdentifierType,
  pub identifier_value: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ArticleIdentifier {
  pub identifier_id:    i64,
  pub article_id:       i64,
  pub identifier_type:  IdentifierType,
  pub identifier_value: String,
}

// ─── Copyright ───────────────────────────────────────────────────────────────

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewCopyright {
  pub article_id: i64,
  pub statement:  String,
  pub holder:     String,
  pub year:       Option<i32>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Copyright {
  pub copyright_id: i64,
  pub article_id:   i64,
  pub statement:    String,
  pub holder:       String,
  pub year:         Option<i32>,
}

// ─── arXiv categories ────────────────────────────────────────────────────────

/// One arXiv subject category on an article. Exactly one row per article is
/// `primary`: the first category of the first eprint entry.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewArxivCategory {
  pub article_id: i64,
  pub category:   String,
  pub primary:    bool,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ArxivCategory {
  pub category_id: i64,
  pub article_id:  i64,
  pub category:    String,
  pub primary:     bool,
}

// ─── Publication info ────────────────────────────────────────────────────────

/// Journal-level publication details for one article, referencing the
/// publisher that issued the same imprint entry.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewPublicationInfo {
  pub article_id:         i64,
  pub journal_title:      String,
  pub journal_volume:     String,
  pub journal_issue:      String,
  pub page_start:         String,
  pub page_end:           String,
  pub artid:              String,
  pub volume_year:        Option<i32>,
  pub journal_issue_date: Option<NaiveDate>,
  pub publisher_id:       i64,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PublicationInfo {
  pub publication_info_id: i64,
  pub article_id:          i64,
  pub journal_title:       String,
  pub journal_volume:      String,
  pub journal_issue:       String,
  pub page_start:          String,
  pub page_end:            String,
  pub artid:               String,
  pub volume_year:         Option<i32>,
  pub journal_issue_date:  Option<NaiveDate>,
  pub publisher_id:        i64,
}
