//! Author name splitting.

use crate::record::RawAuthor;

/// Split an author entry into (first_name, last_name).
///
/// A `full_name` in "Surname, Given Names" form splits at the *last* comma —
/// the greedy-match semantics of the legacy pattern, so "Smith, Jr., John"
/// yields last name "Smith, Jr.". Without a comma (or without a full name at
/// all) the separate `given_names`/`surname` fields are used, defaulting to
/// the empty string.
pub fn split_author_name(author: &RawAuthor) -> (String, String) {
  if let Some(full_name) = author.full_name.as_deref()
    && let Some((last, first)) = full_name.rsplit_once(',')
  {
    return (first.trim().to_string(), last.trim().to_string());
  }

  (
    author.given_names.clone().unwrap_or_default(),
    author.surname.clone().unwrap_or_default(),
  )
}

// ─── Tests ───────────────────────────────────────────────────────────────────
