//! Free-text country resolution.
//!
//! Maps the affiliation's free-text country field to a canonical
//! (alpha-2 code, name) pair: literal aliases first, then an exact
//! case-insensitive lookup, then best-effort fuzzy matching against the
//! embedded ISO 3166-1 table.
//!
//! A miss is an explicit [`CountryResolution::Unresolved`], never an error —
//! one unplaceable affiliation must not abort a whole record.

use folio_core::misc::Country;
use fuzzy_matcher::{FuzzyMatcher, skim::SkimMatcherV2};

use crate::countries::{COUNTRIES, CountryEntry};

/// Sentinel the legacy curation workflow left behind for countries a human
/// still needs to look at.
const HUMAN_CHECK: &str = "HUMAN CHECK";

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CountryResolution {
  Resolved(Country),
  /// Empty input, the `HUMAN CHECK` sentinel, or no match at all. The
  /// affiliation is stored with no country reference.
  Unresolved,
}

impl CountryResolution {
  pub fn resolved(&self) -> Option<&Country> {
    match self {
      CountryResolution::Resolved(c) => Some(c),
      CountryResolution::Unresolved => None,
    }
  }
}

/// Resolve a free-text country name.
pub fn resolve_country(raw: &str) -> CountryResolution {
  if raw.is_empty() || raw == HUMAN_CHECK {
    return CountryResolution::Unresolved;
  }

  // Hardcoded institute aliases inherited from the legacy data.
  let query = match raw {
    "cern" | "CERN" => "Switzerland",
    "JINR" => "Russia",
    other => other,
  };

  if let Some(entry) = exact_match(query).or_else(|| fuzzy_match(query)) {
    return CountryResolution::Resolved(Country {
      code: entry.code.to_string(),
      name: entry.name.to_string(),
    });
  }

  tracing::warn!(country = raw, "no match for country, leaving unresolved");
  CountryResolution::Unresolved
}

fn exact_match(query: &str) -> Option<&'static CountryEntry> {
  COUNTRIES.iter().find(|e| {
    e.code.eq_ignore_ascii_case(query)
      || e.name.eq_ignore_ascii_case(query)
      || e
        .common_name
        .is_some_and(|n| n.eq_ignore_ascii_case(query))
  })
}

fn fuzzy_match(query: &str) -> Option<&'static CountryEntry> {
  let matcher = SkimMatcherV2::default().ignore_case();

  // Score in both directions: "Russia" should find "Russian Federation"
  // and "The Netherlands" should still find "Netherlands".
  let score = |text: &str| -> Option<i64> {
    matcher
      .fuzzy_match(text, query)
      .or_else(|| matcher.fuzzy_match(query, text))
  };

  COUNTRIES
    .iter()
    .filter_map(|e| {
      let best = match e.common_name {
        Some(common) => score(e.name).max(score(common)),
        None => score(e.name),
      };
      best.map(|s| (s, e))
    })
    .max_by_key(|(s, _)| *s)
    .map(|(_, e)| e)
}

// ─── Tests ───────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
  use super::*;

  fn code_of(raw: &str) -> Option<String> {
    resolve_country(raw).resolved().map(|c| c.code.clone())
  }

  #[test]
  fn empty_string_is_unresolved() {
    assert_eq!(resolve_country(""), CountryResolution::Unresolved);
  }

  #[test]
  fn human_check_sentinel_is_unresolved() {
    assert_eq!(resolve_country("HUMAN CHECK"), CountryResolution::Unresolved);
  }

  #[test]
  fn cern_aliases_to_switzerland() {
    for alias in ["CERN", "cern"] {
      let resolved = resolve_country(alias);
      let country = resolved.resolved().expect("CERN must resolve");
      assert_eq!(country.code, "CH");
      assert_eq!(country.name, "Switzerland");
    }
  }

  #[test]
  fn cern_and_switzerland_resolve_identically() {
    assert_eq!(resolve_country("CERN"), resolve_country("Switzerland"));
  }

  #[test]
  fn jinr_aliases_to_russia() {
    let resolved = resolve_country("JINR");
    let country = resolved.resolved().expect("JINR must resolve");
    assert_eq!(country.code, "RU");
    assert_eq!(country.name, "Russian Federation");
  }

  #[test]
  fn exact_names_resolve() {
    assert_eq!(code_of("Germany"), Some("DE".to_string()));
    assert_eq!(code_of("United States"), Some("US".to_string()));
    assert_eq!(code_of("Japan"), Some("JP".to_string()));
  }

  #[test]
  fn common_names_resolve() {
    assert_eq!(code_of("South Korea"), Some("KR".to_string()));
    assert_eq!(code_of("Vietnam"), Some("VN".to_string()));
    assert_eq!(code_of("Taiwan"), Some("TW".to_string()));
  }

  #[test]
  fn case_insensitive_exact_match() {
    assert_eq!(code_of("switzerland"), Some("CH".to_string()));
    assert_eq!(code_of("FRANCE"), Some("FR".to_string()));
  }

  #[test]
  fn fuzzy_match_on_partial_name() {
    assert_eq!(code_of("Russia"), Some("RU".to_string()));
  }

  #[test]
  fn gibberish_is_unresolved() {
    assert_eq!(resolve_country("Xyzzyqq"), CountryResolution::Unresolved);
  }
}
