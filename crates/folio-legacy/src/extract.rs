//! Pure extraction: [`LegacyRecord`] → [`NormalizedRecord`].
//!
//! Every storage-free rule lives here — license canonicalization, field
//! selection and truncation, date parsing, category flagging, the
//! publication-unit pairing, the author cap, country resolution. The
//! importer that follows is nothing but ordered upserts.

use chrono::NaiveDate;
use folio_core::misc::NewLicense;

use crate::{
  country::{CountryResolution, resolve_country},
  error::ExtractError,
  license::normalize_licenses,
  name::split_author_name,
  record::LegacyRecord,
};

/// Character cap applied to `subtitle` and affiliation `value`.
const TEXT_CAP: usize = 255;

// ─── Normalized shapes ───────────────────────────────────────────────────────

/// A record with all extraction rules applied, ready to persist.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NormalizedRecord {
  pub control_number:   Option<i64>,
  pub publication_date: Option<NaiveDate>,
  pub title:            String,
  pub subtitle:         String,
  pub abstract_text:    String,

  /// Ordered, not deduplicated; mirrors the record's license list.
  pub licenses: Vec<NewLicense>,

  pub dois:      Vec<String>,
  pub arxiv_ids: Vec<String>,

  pub copyrights:       Vec<CopyrightEntry>,
  pub arxiv_categories: Vec<CategoryEntry>,

  /// One publisher name per imprint, in imprint order. Every imprint's
  /// publisher is persisted even when it has no publication_info entry.
  pub publishers:        Vec<String>,
  pub publication_units: Vec<PublicationUnit>,

  pub collaborations: Vec<String>,
  pub authors:        Vec<NormalizedAuthor>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CopyrightEntry {
  pub statement: String,
  pub holder:    String,
  pub year:      Option<i32>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CategoryEntry {
  pub category: String,
  pub primary:  bool,
}

/// One `publication_info` entry joined with the publisher of its same-index
/// imprint. Pairing the two at extraction time replaces the fragile
/// two-list index coupling the legacy pipeline relied on.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PublicationUnit {
  pub publisher:          String,
  pub journal_title:      String,
  pub journal_volume:     String,
  pub journal_issue:      String,
  pub page_start:         String,
  pub page_end:           String,
  pub artid:              String,
  pub volume_year:        Option<i32>,
  pub journal_issue_date: Option<NaiveDate>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NormalizedAuthor {
  pub first_name:   String,
  pub last_name:    String,
  pub email:        String,
  pub orcid:        Option<String>,
  pub affiliations: Vec<NormalizedAffiliation>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NormalizedAffiliation {
  pub country:      CountryResolution,
  pub value:        String,
  pub organization: String,
}

// ─── Extraction ──────────────────────────────────────────────────────────────

/// Apply every normalization rule to one parsed record.
///
/// `max_authors` caps both the authors and everything derived from them
/// (identifiers, affiliations).
pub fn extract(
  record: &LegacyRecord,
  max_authors: usize,
) -> Result<NormalizedRecord, ExtractError> {
  let title = record
    .titles
    .first()
    .ok_or(ExtractError::EmptyField("titles"))?;
  let abstract_entry = record
    .abstracts
    .first()
    .ok_or(ExtractError::EmptyField("abstracts"))?;
  let first_imprint = record
    .imprints
    .first()
    .ok_or(ExtractError::EmptyField("imprints"))?;

  let publication_date = first_imprint
    .date
    .as_deref()
    .map(|d| parse_date("imprints[0].date", d))
    .transpose()?;

  let licenses = normalize_licenses(&record.license);

  let dois = record
    .dois
    .iter()
    .map(|d| d.value.clone().unwrap_or_default())
    .collect();
  let arxiv_ids = record
    .arxiv_eprints
    .iter()
    .map(|e| e.value.clone().unwrap_or_default())
    .collect();

  let copyrights = record
    .copyright
    .iter()
    .map(|c| CopyrightEntry {
      statement: c.statement.clone().unwrap_or_default(),
      holder:    c.holder.clone().unwrap_or_default(),
      year:      c.year,
    })
    .collect();

  // Only the first eprint entry's categories count; its first category is
  // the primary one.
  let arxiv_categories = match record.arxiv_eprints.first() {
    Some(eprint) => eprint
      .categories
      .iter()
      .enumerate()
      .map(|(idx, category)| CategoryEntry {
        category: category.clone(),
        primary:  idx == 0,
      })
      .collect(),
    None => vec![],
  };

  let publishers: Vec<String> = record
    .imprints
    .iter()
    .map(|i| i.publisher.clone().unwrap_or_default())
    .collect();

  if record.publication_info.len() > record.imprints.len() {
    return Err(ExtractError::PublicationAlignment {
      infos:    record.publication_info.len(),
      imprints: record.imprints.len(),
    });
  }
  let mut publication_units = Vec::with_capacity(record.publication_info.len());
  for (info, publisher) in record.publication_info.iter().zip(&publishers) {
    publication_units.push(PublicationUnit {
      publisher:          publisher.clone(),
      journal_title:      info.journal_title.clone().unwrap_or_default(),
      journal_volume:     info.journal_volume.clone().unwrap_or_default(),
      journal_issue:      info.journal_issue.clone().unwrap_or_default(),
      page_start:         info.page_start.clone().unwrap_or_default(),
      page_end:           info.page_end.clone().unwrap_or_default(),
      artid:              info.artid.clone().unwrap_or_default(),
      volume_year:        info.year,
      journal_issue_date: info
        .journal_issue_date
        .as_deref()
        .map(|d| parse_date("publication_info.journal_issue_date", d))
        .transpose()?,
    });
  }

  let collaborations = record
    .collaborations
    .iter()
    .map(|c| c.value.clone().unwrap_or_default())
    .collect();

  let authors = record
    .authors
    .iter()
    .take(max_authors)
    .map(|author| {
      let (first_name, last_name) = split_author_name(author);
      NormalizedAuthor {
        first_name,
        last_name,
        email: author.email.clone().unwrap_or_default(),
        orcid: author.orcid.clone(),
        affiliations: author
          .affiliations
          .iter()
          .map(|aff| NormalizedAffiliation {
            country:      resolve_country(aff.country.as_deref().unwrap_or("")),
            value:        truncate_chars(
              aff.value.as_deref().unwrap_or(""),
              TEXT_CAP,
            ),
            organization: aff.organization.clone().unwrap_or_default(),
          })
          .collect(),
      }
    })
    .collect();

  Ok(NormalizedRecord {
    control_number: record.control_number,
    publication_date,
    title: title.title.clone().unwrap_or_default(),
    subtitle: truncate_chars(title.subtitle.as_deref().unwrap_or(""), TEXT_CAP),
    abstract_text: abstract_entry.value.clone().unwrap_or_default(),
    licenses,
    dois,
    arxiv_ids,
    copyrights,
    arxiv_categories,
    publishers,
    publication_units,
    collaborations,
    authors,
  })
}

// ─── Helpers ─────────────────────────────────────────────────────────────────

/// Truncate to at most `max` characters (not bytes — the legacy cap counted
/// characters and affiliation values are full of non-ASCII).
fn truncate_chars(s: &str, max: usize) -> String {
  s.chars().take(max).collect()
}

/// Parse `YYYY-MM-DD`, tolerating the `YYYY-MM` and `YYYY` shorthands some
/// legacy imprints carry (padded to the first day).
fn parse_date(field: &'static str, value: &str) -> Result<NaiveDate, ExtractError> {
  NaiveDate::parse_from_str(value, "%Y-%m-%d")
    .or_else(|_| NaiveDate::parse_from_str(&format!("{value}-01"), "%Y-%m-%d"))
    .or_else(|_| NaiveDate::parse_from_str(&format!("{value}-01-01"), "%Y-%m-%d"))
    .map_err(|_| ExtractError::InvalidDate {
      field,
      value: value.to_string(),
    })
}

// ─── Tests ───────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
  use serde_json::json;

  use super::*;

  fn record(value: serde_json::Value) -> LegacyRecord {
    serde_json::from_value(value).expect("test record must deserialize")
  }

  fn minimal() -> serde_json::Value {
    json!({
      "control_number": 1234,
      "license": [{"license": "CC-BY-4.0"}],
      "titles": [{"title": "On Things", "subtitle": "A Study"}],
      "abstracts": [{"value": "We study things."}],
      "imprints": [{"date": "2023-01-15", "publisher": "Elsevier"}],
    })
  }

  #[test]
  fn minimal_record_extracts() {
    let rec = extract(&record(minimal()), 10).unwrap();
    assert_eq!(rec.control_number, Some(1234));
    assert_eq!(rec.title, "On Things");
    assert_eq!(rec.subtitle, "A Study");
    assert_eq!(rec.abstract_text, "We study things.");
    assert_eq!(
      rec.publication_date,
      Some(NaiveDate::from_ymd_opt(2023, 1, 15).unwrap())
    );
    assert_eq!(rec.publishers, vec!["Elsevier"]);
    assert_eq!(rec.licenses[0].name, "CC-BY-4.0");
  }

  #[test]
  fn missing_required_key_fails_at_deserialization() {
    let mut value = minimal();
    value.as_object_mut().unwrap().remove("titles");
    assert!(serde_json::from_value::<LegacyRecord>(value).is_err());
  }

  #[test]
  fn empty_titles_list_is_malformed() {
    let mut value = minimal();
    value["titles"] = json!([]);
    let err = extract(&record(value), 10).unwrap_err();
    assert_eq!(err, ExtractError::EmptyField("titles"));
  }

  #[test]
  fn empty_imprints_list_is_malformed() {
    let mut value = minimal();
    value["imprints"] = json!([]);
    let err = extract(&record(value), 10).unwrap_err();
    assert_eq!(err, ExtractError::EmptyField("imprints"));
  }

  #[test]
  fn subtitle_truncated_to_255_chars() {
    let mut value = minimal();
    value["titles"][0]["subtitle"] = json!("x".repeat(300));
    let rec = extract(&record(value), 10).unwrap();
    assert_eq!(rec.subtitle.chars().count(), 255);
  }

  #[test]
  fn year_month_date_padded() {
    let mut value = minimal();
    value["imprints"][0]["date"] = json!("2019-07");
    let rec = extract(&record(value), 10).unwrap();
    assert_eq!(
      rec.publication_date,
      Some(NaiveDate::from_ymd_opt(2019, 7, 1).unwrap())
    );
  }

  #[test]
  fn nonsense_date_is_invalid() {
    let mut value = minimal();
    value["imprints"][0]["date"] = json!("sometime in spring");
    let err = extract(&record(value), 10).unwrap_err();
    assert!(matches!(err, ExtractError::InvalidDate { .. }));
  }

  #[test]
  fn identifiers_collected_from_dois_and_eprints() {
    let mut value = minimal();
    value["dois"] = json!([{"value": "10.1000/x"}, {"value": "10.1000/y"}]);
    value["arxiv_eprints"] = json!([{"value": "2301.00001"}]);
    let rec = extract(&record(value), 10).unwrap();
    assert_eq!(rec.dois, vec!["10.1000/x", "10.1000/y"]);
    assert_eq!(rec.arxiv_ids, vec!["2301.00001"]);
  }

  #[test]
  fn first_category_of_first_eprint_is_primary() {
    let mut value = minimal();
    value["arxiv_eprints"] = json!([
      {"value": "2301.00001", "categories": ["hep-th", "gr-qc"]},
      {"value": "2301.00002", "categories": ["math-ph"]},
    ]);
    let rec = extract(&record(value), 10).unwrap();
    assert_eq!(rec.arxiv_categories.len(), 2);
    assert_eq!(rec.arxiv_categories[0].category, "hep-th");
    assert!(rec.arxiv_categories[0].primary);
    assert_eq!(rec.arxiv_categories[1].category, "gr-qc");
    assert!(!rec.arxiv_categories[1].primary);
  }

  #[test]
  fn publication_units_pair_with_same_index_imprint() {
    let mut value = minimal();
    value["imprints"] = json!([
      {"date": "2023-01-15", "publisher": "Elsevier"},
      {"publisher": "Springer"},
    ]);
    value["publication_info"] = json!([
      {"journal_title": "Phys. Lett. B", "year": 2023},
      {"journal_title": "JHEP"},
    ]);
    let rec = extract(&record(value), 10).unwrap();
    assert_eq!(rec.publication_units.len(), 2);
    assert_eq!(rec.publication_units[0].publisher, "Elsevier");
    assert_eq!(rec.publication_units[0].volume_year, Some(2023));
    assert_eq!(rec.publication_units[1].publisher, "Springer");
  }

  #[test]
  fn more_infos_than_imprints_is_an_alignment_error() {
    let mut value = minimal();
    value["publication_info"] = json!([
      {"journal_title": "A"},
      {"journal_title": "B"},
    ]);
    let err = extract(&record(value), 10).unwrap_err();
    assert_eq!(
      err,
      ExtractError::PublicationAlignment {
        infos:    2,
        imprints: 1,
      }
    );
  }

  #[test]
  fn extra_imprints_still_produce_publishers() {
    let mut value = minimal();
    value["imprints"] = json!([
      {"date": "2023-01-15", "publisher": "Elsevier"},
      {"publisher": "Springer"},
    ]);
    let rec = extract(&record(value), 10).unwrap();
    assert_eq!(rec.publishers, vec!["Elsevier", "Springer"]);
    assert!(rec.publication_units.is_empty());
  }

  #[test]
  fn authors_capped_at_max() {
    let mut value = minimal();
    let authors: Vec<_> = (0..15)
      .map(|i| json!({"full_name": format!("Surname{i}, Given{i}")}))
      .collect();
    value["authors"] = json!(authors);
    let rec = extract(&record(value), 10).unwrap();
    assert_eq!(rec.authors.len(), 10);
    assert_eq!(rec.authors[0].last_name, "Surname0");
    assert_eq!(rec.authors[9].first_name, "Given9");
  }

  #[test]
  fn author_cap_is_configurable() {
    let mut value = minimal();
    value["authors"] = json!([
      {"full_name": "A, B"},
      {"full_name": "C, D"},
      {"full_name": "E, F"},
    ]);
    let rec = extract(&record(value), 2).unwrap();
    assert_eq!(rec.authors.len(), 2);
  }

  #[test]
  fn affiliation_country_resolved_and_value_truncated() {
    let mut value = minimal();
    value["authors"] = json!([{
      "full_name": "Smith, John",
      "orcid": "0000-0001-2345-6789",
      "affiliations": [
        {"country": "CERN", "value": "v".repeat(300), "organization": "CERN"},
        {"country": "HUMAN CHECK", "value": "Somewhere"},
      ],
    }]);
    let rec = extract(&record(value), 10).unwrap();
    let author = &rec.authors[0];
    assert_eq!(author.orcid.as_deref(), Some("0000-0001-2345-6789"));

    let resolved = author.affiliations[0].country.resolved().unwrap();
    assert_eq!(resolved.code, "CH");
    assert_eq!(author.affiliations[0].value.chars().count(), 255);

    assert_eq!(author.affiliations[1].country, CountryResolution::Unresolved);
  }
}
