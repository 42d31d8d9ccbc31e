//! License normalization.
//!
//! Pure transform over the raw license sequence — the legacy pipeline
//! renamed keys and dropped fields in place across the whole batch; here
//! the rename happens via a serde alias at parse time and normalization
//! produces a fresh sequence, leaving the raw form untouched.

use folio_core::misc::NewLicense;
use url::Url;

use crate::record::RawLicense;

const CC_BY_4_NAME: &str = "CC-BY-4.0";
const CC_BY_4_LONG: &str = "Creative Commons Attribution 4.0 licence";
const CC_BY_4_URL: &str = "http://creativecommons.org/licenses/by/4.0/";

const CC_BY_3_NAME: &str = "CC-BY-3.0";
const CC_BY_3_LONG: &str = "Creative Commons Attribution 3.0 licence";
const CC_BY_3_URL: &str = "http://creativecommons.org/licenses/by/3.0/";

/// Normalize one raw license entry into its upsert key.
///
/// An absent or non-absolute `url` is treated as invalid: when the name is
/// also missing, the raw url string stands in for it; the url itself is
/// dropped either way. Note that an invalid url next to a present name is
/// discarded without a trace — legacy behavior, preserved as-is.
///
/// The two known CC-BY wordings then collapse to a fixed (name, url) pair
/// regardless of what the record carried.
pub fn normalize_license(raw: &RawLicense) -> NewLicense {
  let mut name = raw.name.clone();
  let mut url = raw.url.clone();

  let url_valid = url.as_deref().is_some_and(|u| Url::parse(u).is_ok());
  if !url_valid {
    if name.is_none() {
      name = url.clone();
    }
    url = None;
  }

  match name.as_deref() {
    Some(CC_BY_4_NAME) | Some(CC_BY_4_LONG) => NewLicense {
      name: CC_BY_4_NAME.to_string(),
      url:  CC_BY_4_URL.to_string(),
    },
    Some(CC_BY_3_NAME) | Some(CC_BY_3_LONG) => NewLicense {
      name: CC_BY_3_NAME.to_string(),
      url:  CC_BY_3_URL.to_string(),
    },
    _ => NewLicense {
      name: name.unwrap_or_default(),
      url:  url.unwrap_or_default(),
    },
  }
}

/// Normalize an ordered sequence of raw licenses.
///
/// Order is preserved and the output is *not* deduplicated — the store
/// deduplicates rows by (name, url), but the returned sequence mirrors the
/// record one-to-one.
pub fn normalize_licenses(raw: &[RawLicense]) -> Vec<NewLicense> {
  raw.iter().map(normalize_license).collect()
}

// ─── Tests ───────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
  use super::*;

  fn raw(name: Option<&str>, url: Option<&str>) -> RawLicense {
    RawLicense {
      name: name.map(str::to_string),
      url:  url.map(str::to_string),
    }
  }

  #[test]
  fn cc_by_4_short_name_canonicalized() {
    let lic = normalize_license(&raw(Some("CC-BY-4.0"), None));
    assert_eq!(lic.name, "CC-BY-4.0");
    assert_eq!(lic.url, "http://creativecommons.org/licenses/by/4.0/");
  }

  #[test]
  fn cc_by_4_long_name_canonicalized() {
    let lic = normalize_license(&raw(
      Some("Creative Commons Attribution 4.0 licence"),
      Some("https://example.org/some-other-url"),
    ));
    assert_eq!(lic.name, "CC-BY-4.0");
    assert_eq!(lic.url, "http://creativecommons.org/licenses/by/4.0/");
  }

  #[test]
  fn cc_by_3_both_wordings_canonicalized() {
    for name in ["CC-BY-3.0", "Creative Commons Attribution 3.0 licence"] {
      let lic = normalize_license(&raw(Some(name), None));
      assert_eq!(lic.name, "CC-BY-3.0");
      assert_eq!(lic.url, "http://creativecommons.org/licenses/by/3.0/");
    }
  }

  #[test]
  fn invalid_url_without_name_becomes_name() {
    let lic = normalize_license(&raw(None, Some("not a url")));
    assert_eq!(lic.name, "not a url");
    assert_eq!(lic.url, "");
  }

  #[test]
  fn invalid_url_with_name_is_dropped() {
    let lic = normalize_license(&raw(Some("Custom"), Some("not a url")));
    assert_eq!(lic.name, "Custom");
    assert_eq!(lic.url, "");
  }

  #[test]
  fn relative_url_counts_as_invalid() {
    let lic = normalize_license(&raw(Some("Custom"), Some("/licenses/by/4.0")));
    assert_eq!(lic.url, "");
  }

  #[test]
  fn valid_url_kept_for_unknown_license() {
    let lic =
      normalize_license(&raw(Some("Custom"), Some("https://example.org/l")));
    assert_eq!(lic.name, "Custom");
    assert_eq!(lic.url, "https://example.org/l");
  }

  #[test]
  fn missing_everything_defaults_to_empty_strings() {
    let lic = normalize_license(&raw(None, None));
    assert_eq!(lic.name, "");
    assert_eq!(lic.url, "");
  }

  #[test]
  fn sequence_order_preserved_without_dedup() {
    let input = vec![
      raw(Some("CC-BY-4.0"), None),
      raw(Some("Custom"), Some("https://example.org/l")),
      raw(Some("CC-BY-4.0"), None),
    ];
    let out = normalize_licenses(&input);
    assert_eq!(out.len(), 3);
    assert_eq!(out[0], out[2]);
    assert_eq!(out[1].name, "Custom");
  }
}
