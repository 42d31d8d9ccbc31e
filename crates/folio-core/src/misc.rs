//! Shared reference entities: licenses, publishers, countries, affiliations,
//! experimental collaborations.
//!
//! Unlike the rows in [`crate::article`], none of these belong to a single
//! article — they are deduplicated globally by natural key and shared.

use serde::{Deserialize, Serialize};

// ─── License ─────────────────────────────────────────────────────────────────

/// Natural key is the exact (name, url) pair; missing source fields default
/// to the empty string. Immutable once created.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewLicense {
  pub name: String,
  pub url:  String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct License {
  pub license_id: i64,
  pub name:       String,
  pub url:        String,
}

// ─── Publisher ───────────────────────────────────────────────────────────────

/// Deduplicated by name.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Publisher {
  pub publisher_id: i64,
  pub name:         String,
}

// ─── Country ─────────────────────────────────────────────────────────────────

/// ISO 3166-1 alpha-2 code plus canonical name. The code doubles as the
/// primary key; affiliations reference it directly.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Country {
  pub code: String,
  pub name: String,
}

// ─── Affiliation ─────────────────────────────────────────────────────────────

/// Deduplicated by (country, value, organization). Affiliations are stored
/// globally, not per-author-per-article — a known gap in the legacy schema,
/// preserved here.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewAffiliation {
  /// `None` when the source country could not be resolved.
  pub country_code: Option<String>,
  /// Already truncated to 255 characters by the extractor.
  pub value:        String,
  pub organization: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Affiliation {
  pub affiliation_id: i64,
  pub country_code:   Option<String>,
  pub value:          String,
  pub organization:   String,
}

// ─── Experimental collaboration ──────────────────────────────────────────────

/// Deduplicated by (name, order). The legacy pipeline always writes order 0;
/// the field exists for schema compatibility, not for meaningful ordering.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewCollaboration {
  pub name:                String,
  pub collaboration_order: u32,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Collaboration {
  pub collaboration_id:    i64,
  pub name:                String,
  pub collaboration_order: u32,
}
