//! The `BiblioStore` trait.
//!
//! The trait is implemented by storage backends (e.g. `folio-store-sqlite`).
//! The importer in `folio-legacy` depends on this abstraction, not on any
//! concrete backend.
//!
//! Every write is an upsert: look the row up by its natural key, create it
//! if absent, otherwise return the existing row unchanged. The `bool` in the
//! returned pair is `true` when the call created the row. Re-running the
//! same sequence of upserts must not create duplicates — the backend is
//! responsible for making concurrent upserts on identical natural keys
//! serialize to a single row.

use crate::{
  article::{
    Article, ArticleIdentifier, ArxivCategory, Copyright, NewArticle,
    NewArticleIdentifier, NewArxivCategory, NewCopyright, NewPublicationInfo,
    PublicationInfo,
  },
  author::{Author, AuthorIdentifier, NewAuthor, NewAuthorIdentifier},
  misc::{
    Affiliation, Collaboration, Country, License, NewAffiliation,
    NewCollaboration, NewLicense, Publisher,
  },
};

/// Abstraction over a Folio relational backend.
pub trait BiblioStore {
  type Error: std::error::Error + Send + Sync + 'static;

  // ── Transactions ──────────────────────────────────────────────────────

  /// Begin a transaction. The importer wraps each record in one so a failed
  /// import leaves no partial writes behind.
  fn begin(&self) -> Result<(), Self::Error>;
  fn commit(&self) -> Result<(), Self::Error>;
  fn rollback(&self) -> Result<(), Self::Error>;

  // ── Upserts ───────────────────────────────────────────────────────────

  fn upsert_license(
    &self,
    input: &NewLicense,
  ) -> Result<(License, bool), Self::Error>;

  /// Get or create an article. When `input.id` is set, the row is matched
  /// by that id (re-imports hit the same row); otherwise the store assigns
  /// a fresh id.
  fn upsert_article(
    &self,
    input: &NewArticle,
  ) -> Result<(Article, bool), Self::Error>;

  /// Replace the article's license set with exactly `license_ids`.
  /// Replacement, not union: licenses from a previous import that are no
  /// longer listed are detached.
  fn replace_article_licenses(
    &self,
    article_id: i64,
    license_ids: &[i64],
  ) -> Result<(), Self::Error>;

  fn upsert_article_identifier(
    &self,
    input: &NewArticleIdentifier,
  ) -> Result<(ArticleIdentifier, bool), Self::Error>;

  fn upsert_copyright(
    &self,
    input: &NewCopyright,
  ) -> Result<(Copyright, bool), Self::Error>;

  fn upsert_arxiv_category(
    &self,
    input: &NewArxivCategory,
  ) -> Result<(ArxivCategory, bool), Self::Error>;

  fn upsert_publisher(
    &self,
    name: &str,
  ) -> Result<(Publisher, bool), Self::Error>;

  fn upsert_publication_info(
    &self,
    input: &NewPublicationInfo,
  ) -> Result<(PublicationInfo, bool), Self::Error>;

  fn upsert_collaboration(
    &self,
    input: &NewCollaboration,
  ) -> Result<(Collaboration, bool), Self::Error>;

  fn upsert_author(
    &self,
    input: &NewAuthor,
  ) -> Result<(Author, bool), Self::Error>;

  fn upsert_author_identifier(
    &self,
    input: &NewAuthorIdentifier,
  ) -> Result<(AuthorIdentifier, bool), Self::Error>;

  fn upsert_country(
    &self,
    country: &Country,
  ) -> Result<(Country, bool), Self::Error>;

  fn upsert_affiliation(
    &self,
    input: &NewAffiliation,
  ) -> Result<(Affiliation, bool), Self::Error>;

  // ── Reads ─────────────────────────────────────────────────────────────

  /// Licenses currently attached to an article, in license-id order.
  fn article_licenses(
    &self,
    article_id: i64,
  ) -> Result<Vec<License>, Self::Error>;

  fn article_identifiers(
    &self,
    article_id: i64,
  ) -> Result<Vec<ArticleIdentifier>, Self::Error>;

  fn article_copyrights(
    &self,
    article_id: i64,
  ) -> Result<Vec<Copyright>, Self::Error>;

  fn article_arxiv_categories(
    &self,
    article_id: i64,
  ) -> Result<Vec<ArxivCategory>, Self::Error>;

  fn article_publication_infos(
    &self,
    article_id: i64,
  ) -> Result<Vec<PublicationInfo>, Self::Error>;

  /// Authors of an article ordered by `author_order`.
  fn article_authors(
    &self,
    article_id: i64,
  ) -> Result<Vec<Author>, Self::Error>;

  fn author_identifiers(
    &self,
    author_id: i64,
  ) -> Result<Vec<AuthorIdentifier>, Self::Error>;

  fn list_licenses(&self) -> Result<Vec<License>, Self::Error>;
  fn list_publishers(&self) -> Result<Vec<Publisher>, Self::Error>;
  fn list_countries(&self) -> Result<Vec<Country>, Self::Error>;
  fn list_collaborations(&self) -> Result<Vec<Collaboration>, Self::Error>;
  fn list_affiliations(&self) -> Result<Vec<Affiliation>, Self::Error>;
}
