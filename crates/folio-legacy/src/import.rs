//! The record importer.
//!
//! [`Importer`] persists one [`NormalizedRecord`] at a time as a fixed,
//! ordered sequence of upserts, all inside a single store transaction —
//! either every row of a record lands or none do. Re-importing a record is
//! a no-op for every entity keyed by its natural key; the article's license
//! set is the one exception, replaced wholesale on each import.

use folio_core::{
  article::{
    IdentifierType, NewArticle, NewArticleIdentifier, NewArxivCategory,
    NewCopyright, NewPublicationInfo,
  },
  author::{AuthorIdentifierType, NewAuthor, NewAuthorIdentifier},
  misc::{NewAffiliation, NewCollaboration},
  store::BiblioStore,
};

use crate::{
  error::ImportError,
  extract::{NormalizedRecord, extract},
  record::LegacyRecord,
};

// ─── Configuration ───────────────────────────────────────────────────────────

#[derive(Debug, Clone, Copy)]
pub struct ImportConfig {
  /// Cap on authors considered per record; identifiers and affiliations of
  /// authors past the cap are ignored too.
  pub max_authors: usize,
}

impl Default for ImportConfig {
  fn default() -> Self {
    Self { max_authors: 10 }
  }
}

// ─── Importer ────────────────────────────────────────────────────────────────

/// Result of importing one record.
#[derive(Debug, Clone, Copy)]
pub struct ImportOutcome {
  pub article_id: i64,
  /// `false` when the article row already existed (re-import).
  pub created:    bool,
}

pub struct Importer<S> {
  store:  S,
  config: ImportConfig,
}

impl<S: BiblioStore> Importer<S> {
  pub fn new(store: S, config: ImportConfig) -> Self {
    Self { store, config }
  }

  pub fn store(&self) -> &S {
    &self.store
  }

  /// Decode one raw JSON document and import it.
  pub fn import_str(
    &self,
    raw: &str,
  ) -> Result<ImportOutcome, ImportError<S::Error>> {
    let record: LegacyRecord = serde_json::from_str(raw)?;
    self.import_record(&record)
  }

  /// Normalize and import one parsed record.
  pub fn import_record(
    &self,
    record: &LegacyRecord,
  ) -> Result<ImportOutcome, ImportError<S::Error>> {
    let normalized = extract(record, self.config.max_authors)?;
    self.import_normalized(&normalized)
  }

  /// Persist a normalized record inside one transaction.
  pub fn import_normalized(
    &self,
    record: &NormalizedRecord,
  ) -> Result<ImportOutcome, ImportError<S::Error>> {
    self.store.begin().map_err(ImportError::Store)?;
    match self.persist(record) {
      Ok(outcome) => {
        self.store.commit().map_err(ImportError::Store)?;
        tracing::debug!(
          article_id = outcome.article_id,
          created = outcome.created,
          "record imported"
        );
        Ok(outcome)
      }
      Err(err) => {
        if let Err(rollback_err) = self.store.rollback() {
          tracing::error!(error = %rollback_err, "rollback failed");
        }
        Err(ImportError::Store(err))
      }
    }
  }

  /// The ordered upsert sequence. Runs inside the transaction opened by
  /// [`Self::import_normalized`]; any error aborts the whole record.
  fn persist(&self, rec: &NormalizedRecord) -> Result<ImportOutcome, S::Error> {
    // 1. Licenses, in record order.
    let mut license_ids = Vec::with_capacity(rec.licenses.len());
    for license in &rec.licenses {
      let (row, _) = self.store.upsert_license(license)?;
      license_ids.push(row.license_id);
    }

    // 2. The article itself, then its license set (replacement, not union).
    let (article, created) = self.store.upsert_article(&NewArticle {
      id:               rec.control_number,
      publication_date: rec.publication_date,
      title:            rec.title.clone(),
      subtitle:         rec.subtitle.clone(),
      abstract_text:    rec.abstract_text.clone(),
    })?;
    let article_id = article.article_id;
    self.store.replace_article_licenses(article_id, &license_ids)?;

    // 3. External identifiers.
    for value in &rec.dois {
      self.store.upsert_article_identifier(&NewArticleIdentifier {
        article_id,
        identifier_type: IdentifierType::Doi,
        identifier_value: value.clone(),
      })?;
    }
    for value in &rec.arxiv_ids {
      self.store.upsert_article_identifier(&NewArticleIdentifier {
        article_id,
        identifier_type: IdentifierType::Arxiv,
        identifier_value: value.clone(),
      })?;
    }

    // 4. Copyrights.
    for entry in &rec.copyrights {
      self.store.upsert_copyright(&NewCopyright {
        article_id,
        statement: entry.statement.clone(),
        holder: entry.holder.clone(),
        year: entry.year,
      })?;
    }

    // 5. arXiv categories with the primary flag.
    for entry in &rec.arxiv_categories {
      self.store.upsert_arxiv_category(&NewArxivCategory {
        article_id,
        category: entry.category.clone(),
        primary: entry.primary,
      })?;
    }

    // 6. Every imprint's publisher, in imprint order.
    for name in &rec.publishers {
      self.store.upsert_publisher(name)?;
    }

    // 7. Publication info rows, each linked to its unit's publisher.
    for unit in &rec.publication_units {
      let (publisher, _) = self.store.upsert_publisher(&unit.publisher)?;
      self.store.upsert_publication_info(&NewPublicationInfo {
        article_id,
        journal_title: unit.journal_title.clone(),
        journal_volume: unit.journal_volume.clone(),
        journal_issue: unit.journal_issue.clone(),
        page_start: unit.page_start.clone(),
        page_end: unit.page_end.clone(),
        artid: unit.artid.clone(),
        volume_year: unit.volume_year,
        journal_issue_date: unit.journal_issue_date,
        publisher_id: publisher.publisher_id,
      })?;
    }

    // 8. Experimental collaborations; the order field is always 0 here.
    for name in &rec.collaborations {
      self.store.upsert_collaboration(&NewCollaboration {
        name:                name.clone(),
        collaboration_order: 0,
      })?;
    }

    // 9. Authors, order = position in the (already capped) list.
    let mut author_rows = Vec::with_capacity(rec.authors.len());
    for (idx, author) in rec.authors.iter().enumerate() {
      let (row, _) = self.store.upsert_author(&NewAuthor {
        article_id,
        first_name: author.first_name.clone(),
        last_name: author.last_name.clone(),
        email: author.email.clone(),
        author_order: idx as u32,
      })?;
      author_rows.push(row);
    }

    // 10. Affiliations, with their resolved countries.
    for author in &rec.authors {
      for affiliation in &author.affiliations {
        let country_code = match affiliation.country.resolved() {
          Some(country) => {
            let (row, _) = self.store.upsert_country(country)?;
            Some(row.code)
          }
          None => None,
        };
        self.store.upsert_affiliation(&NewAffiliation {
          country_code,
          value: affiliation.value.clone(),
          organization: affiliation.organization.clone(),
        })?;
      }
    }

    // 11. ORCIDs.
    for (author, row) in rec.authors.iter().zip(&author_rows) {
      if let Some(orcid) = &author.orcid {
        self.store.upsert_author_identifier(&NewAuthorIdentifier {
          author_id:        row.author_id,
          identifier_type:  AuthorIdentifierType::Orcid,
          identifier_value: orcid.clone(),
        })?;
      }
    }

    Ok(ImportOutcome {
      article_id,
      created,
    })
  }
}

// ─── Tests ───────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
  use folio_core::article::IdentifierType;
  use folio_store_sqlite::SqliteStore;
  use serde_json::json;

  use super::*;
  use crate::error::ExtractError;

  fn importer() -> Importer<SqliteStore> {
    let store = SqliteStore::open_in_memory().expect("in-memory store");
    Importer::new(store, ImportConfig::default())
  }

  fn sample() -> serde_json::Value {
    json!({
      "control_number": 4321,
      "license": [{"license": "CC-BY-4.0"}],
      "titles": [{"title": "On Things", "subtitle": "A Study"}],
      "abstracts": [{"value": "We study things."}],
      "imprints": [{"date": "2023-01-15", "publisher": "Elsevier"}],
      "dois": [{"value": "10.1000/thing"}],
      "arxiv_eprints": [{"value": "2301.00001", "categories": ["hep-th", "gr-qc"]}],
      "copyright": [{"statement": "(c)", "holder": "The Authors", "year": 2023}],
      "publication_info": [{"journal_title": "Phys. Lett. B", "year": 2023}],
      "collaborations": [{"value": "ATLAS"}],
      "authors": [
        {
          "full_name": "Smith, John",
          "email": "john@example.org",
          "orcid": "0000-0001-2345-6789",
          "affiliations": [
            {"country": "CERN", "value": "CERN, Geneva", "organization": "CERN"}
          ]
        },
        {"full_name": "Doe, Jane"}
      ],
    })
  }

  fn import(imp: &Importer<SqliteStore>, value: &serde_json::Value) -> ImportOutcome {
    imp.import_str(&value.to_string()).expect("import must succeed")
  }

  #[test]
  fn full_record_round_trip() {
    let imp = importer();
    let outcome = import(&imp, &sample());
    assert_eq!(outcome.article_id, 4321);
    assert!(outcome.created);

    let store = imp.store();
    let licenses = store.article_licenses(4321).unwrap();
    assert_eq!(licenses.len(), 1);
    assert_eq!(licenses[0].name, "CC-BY-4.0");

    let ids = store.article_identifiers(4321).unwrap();
    assert_eq!(ids.len(), 2);
    assert!(ids.iter().any(|i| i.identifier_type == IdentifierType::Doi
      && i.identifier_value == "10.1000/thing"));
    assert!(ids.iter().any(|i| i.identifier_type == IdentifierType::Arxiv
      && i.identifier_value == "2301.00001"));

    let copyrights = store.article_copyrights(4321).unwrap();
    assert_eq!(copyrights.len(), 1);
    assert_eq!(copyrights[0].holder, "The Authors");

    let infos = store.article_publication_infos(4321).unwrap();
    assert_eq!(infos.len(), 1);
    assert_eq!(infos[0].journal_title, "Phys. Lett. B");
    assert_eq!(infos[0].volume_year, Some(2023));

    let collaborations = store.list_collaborations().unwrap();
    assert_eq!(collaborations.len(), 1);
    assert_eq!(collaborations[0].name, "ATLAS");

    let authors = store.article_authors(4321).unwrap();
    assert_eq!(authors.len(), 2);
    assert_eq!(authors[0].first_name, "John");
    assert_eq!(authors[0].last_name, "Smith");
    assert_eq!(authors[0].author_order, 0);
    assert_eq!(authors[1].author_order, 1);

    let orcids = store.author_identifiers(authors[0].author_id).unwrap();
    assert_eq!(orcids.len(), 1);
    assert_eq!(orcids[0].identifier_value, "0000-0001-2345-6789");
    assert!(store.author_identifiers(authors[1].author_id).unwrap().is_empty());
  }

  #[test]
  fn reimport_creates_no_duplicates() {
    let imp = importer();
    import(&imp, &sample());
    let outcome = import(&imp, &sample());
    assert!(!outcome.created);

    let store = imp.store();
    assert_eq!(store.list_licenses().unwrap().len(), 1);
    assert_eq!(store.list_publishers().unwrap().len(), 1);
    assert_eq!(store.list_countries().unwrap().len(), 1);
    assert_eq!(store.list_collaborations().unwrap().len(), 1);
    assert_eq!(store.list_affiliations().unwrap().len(), 1);
    assert_eq!(store.article_identifiers(4321).unwrap().len(), 2);
    assert_eq!(store.article_copyrights(4321).unwrap().len(), 1);
    assert_eq!(store.article_authors(4321).unwrap().len(), 2);
    assert_eq!(store.article_publication_infos(4321).unwrap().len(), 1);
  }

  #[test]
  fn license_set_is_replaced_not_unioned() {
    let imp = importer();
    import(&imp, &sample());

    let mut second = sample();
    second["license"] = json!([{"license": "CC-BY-3.0"}]);
    import(&imp, &second);

    let attached = imp.store().article_licenses(4321).unwrap();
    assert_eq!(attached.len(), 1);
    assert_eq!(attached[0].name, "CC-BY-3.0");
    // Both license rows still exist; only the attachment changed.
    assert_eq!(imp.store().list_licenses().unwrap().len(), 2);
  }

  #[test]
  fn author_cap_limits_rows_and_identifiers() {
    let imp = importer();
    let mut value = sample();
    let authors: Vec<_> = (0..15)
      .map(|i| {
        json!({
          "full_name": format!("Surname{i}, Given{i}"),
          "orcid": format!("0000-0000-0000-{i:04}"),
        })
      })
      .collect();
    value["authors"] = json!(authors);
    import(&imp, &value);

    let rows = imp.store().article_authors(4321).unwrap();
    assert_eq!(rows.len(), 10);
    for (idx, row) in rows.iter().enumerate() {
      assert_eq!(row.author_order, idx as u32);
      assert_eq!(row.last_name, format!("Surname{idx}"));
    }
  }

  #[test]
  fn max_authors_is_configurable() {
    let store = SqliteStore::open_in_memory().unwrap();
    let imp = Importer::new(store, ImportConfig { max_authors: 1 });
    import(&imp, &sample());
    assert_eq!(imp.store().article_authors(4321).unwrap().len(), 1);
  }

  #[test]
  fn arxiv_primary_flag_only_on_first_category() {
    let imp = importer();
    import(&imp, &sample());

    let categories = imp.store().article_arxiv_categories(4321).unwrap();
    assert_eq!(categories.len(), 2);
    let primary: Vec<_> = categories.iter().filter(|c| c.primary).collect();
    assert_eq!(primary.len(), 1);
    assert_eq!(primary[0].category, "hep-th");
  }

  #[test]
  fn cern_and_switzerland_share_a_country_row() {
    let imp = importer();
    let mut value = sample();
    value["authors"] = json!([
      {"full_name": "A, B", "affiliations": [{"country": "CERN", "value": "x"}]},
      {"full_name": "C, D", "affiliations": [{"country": "Switzerland", "value": "y"}]},
    ]);
    import(&imp, &value);

    let countries = imp.store().list_countries().unwrap();
    assert_eq!(countries.len(), 1);
    assert_eq!(countries[0].code, "CH");
  }

  #[test]
  fn human_check_leaves_affiliation_without_country() {
    let imp = importer();
    let mut value = sample();
    value["authors"] = json!([
      {"full_name": "A, B", "affiliations": [{"country": "HUMAN CHECK", "value": "x"}]},
    ]);
    import(&imp, &value);

    let store = imp.store();
    assert!(store.list_countries().unwrap().is_empty());
    let affiliations = store.list_affiliations().unwrap();
    assert_eq!(affiliations.len(), 1);
    assert_eq!(affiliations[0].country_code, None);
  }

  #[test]
  fn misaligned_publication_info_fails_and_persists_nothing() {
    let imp = importer();
    let mut value = sample();
    value["publication_info"] = json!([
      {"journal_title": "A"},
      {"journal_title": "B"},
    ]);

    let err = imp.import_str(&value.to_string()).unwrap_err();
    assert!(matches!(
      err,
      ImportError::Extract(ExtractError::PublicationAlignment {
        infos:    2,
        imprints: 1,
      })
    ));

    let store = imp.store();
    assert!(store.list_licenses().unwrap().is_empty());
    assert!(store.article_authors(4321).unwrap().is_empty());
  }

  #[test]
  fn invalid_json_is_rejected() {
    let imp = importer();
    let err = imp.import_str("{ not json").unwrap_err();
    assert!(matches!(err, ImportError::Json(_)));
  }

  #[test]
  fn article_without_control_number_gets_assigned_id() {
    let imp = importer();
    let mut value = sample();
    value.as_object_mut().unwrap().remove("control_number");
    let outcome = import(&imp, &value);
    assert!(outcome.created);
    assert!(outcome.article_id > 0);
  }
}
