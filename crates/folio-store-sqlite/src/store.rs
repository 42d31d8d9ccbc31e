//! [`SqliteStore`] — the SQLite implementation of [`BiblioStore`].
//!
//! Every upsert is a lookup by natural key followed by an insert when the
//! lookup misses. Nullable key columns are compared with `IS`, so a NULL
//! matches a NULL and re-imports stay idempotent. The importer brackets
//! each record with `begin`/`commit`, so the lookup-then-insert pair is
//! atomic with respect to the record.

use std::path::Path;

use rusqlite::{Connection, OptionalExtension as _, params};

use folio_core::{
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
  store::BiblioStore,
};

use crate::{
  Error, Result,
  encode::{
    decode_author_identifier_type, decode_identifier_type,
    encode_author_identifier_type, encode_identifier_type,
  },
  schema::SCHEMA,
};

// ─── Store ───────────────────────────────────────────────────────────────────

/// A Folio store backed by a single SQLite file.
pub struct SqliteStore {
  conn: Connection,
}

impl SqliteStore {
  /// Open (or create) a store at `path` and run schema initialisation.
  pub fn open(path: impl AsRef<Path>) -> Result<Self> {
    let conn = Connection::open(path)?;
    let store = Self { conn };
    store.init_schema()?;
    Ok(store)
  }

  /// Open an in-memory store — useful for testing.
  pub fn open_in_memory() -> Result<Self> {
    let conn = Connection::open_in_memory()?;
    let store = Self { conn };
    store.init_schema()?;
    Ok(store)
  }

  fn init_schema(&self) -> Result<()> {
    self.conn.execute_batch(SCHEMA)?;
    Ok(())
  }

  #[cfg(test)]
  pub(crate) fn conn(&self) -> &Connection {
    &self.conn
  }
}

// ─── BiblioStore impl ────────────────────────────────────────────────────────

impl BiblioStore for SqliteStore {
  type Error = Error;

  // ── Transactions ──────────────────────────────────────────────────────────

  fn begin(&self) -> Result<()> {
    self.conn.execute_batch("BEGIN IMMEDIATE")?;
    Ok(())
  }

  fn commit(&self) -> Result<()> {
    self.conn.execute_batch("COMMIT")?;
    Ok(())
  }

  fn rollback(&self) -> Result<()> {
    self.conn.execute_batch("ROLLBACK")?;
    Ok(())
  }

  // ── Upserts ───────────────────────────────────────────────────────────────

  fn upsert_license(&self, input: &NewLicense) -> Result<(License, bool)> {
    let existing: Option<i64> = self
      .conn
      .query_row(
        "SELECT license_id FROM licenses WHERE name = ?1 AND url = ?2",
        params![input.name, input.url],
        |row| row.get(0),
      )
      .optional()?;

    let (license_id, created) = match existing {
      Some(id) => (id, false),
      None => {
        self.conn.execute(
          "INSERT INTO licenses (name, url) VALUES (?1, ?2)",
          params![input.name, input.url],
        )?;
        (self.conn.last_insert_rowid(), true)
      }
    };

    Ok((
      License {
        license_id,
        name: input.name.clone(),
        url: input.url.clone(),
      },
      created,
    ))
  }

  fn upsert_article(&self, input: &NewArticle) -> Result<(Article, bool)> {
    if let Some(id) = input.id {
      let existing = self
        .conn
        .query_row(
          "SELECT article_id, publication_date, title, subtitle, abstract
           FROM articles WHERE article_id = ?1",
          params![id],
          |row| {
            Ok(Article {
              article_id:       row.get(0)?,
              publication_date: row.get(1)?,
              title:            row.get(2)?,
              subtitle:         row.get(3)?,
              abstract_text:    row.get(4)?,
            })
          },
        )
        .optional()?;
      if let Some(article) = existing {
        return Ok((article, false));
      }
    }

    self.conn.execute(
      "INSERT INTO articles (article_id, publication_date, title, subtitle, abstract)
       VALUES (?1, ?2, ?3, ?4, ?5)",
      params![
        input.id,
        input.publication_date,
        input.title,
        input.subtitle,
        input.abstract_text,
      ],
    )?;

    Ok((
      Article {
        article_id:       self.conn.last_insert_rowid(),
        publication_date: input.publication_date,
        title:            input.title.clone(),
        subtitle:         input.subtitle.clone(),
        abstract_text:    input.abstract_text.clone(),
      },
      true,
    ))
  }

  fn replace_article_licenses(
    &self,
    article_id: i64,
    license_ids: &[i64],
  ) -> Result<()> {
    self.conn.execute(
      "DELETE FROM article_licenses WHERE article_id = ?1",
      params![article_id],
    )?;
    let mut stmt = self.conn.prepare(
      "INSERT OR IGNORE INTO article_licenses (article_id, license_id)
       VALUES (?1, ?2)",
    )?;
    for license_id in license_ids {
      stmt.execute(params![article_id, license_id])?;
    }
    Ok(())
  }

  fn upsert_article_identifier(
    &self,
    input: &NewArticleIdentifier,
  ) -> Result<(ArticleIdentifier, bool)> {
    let type_str = encode_identifier_type(input.identifier_type);

    let existing: Option<i64> = self
      .conn
      .query_row(
        "SELECT identifier_id FROM article_identifiers
         WHERE article_id = ?1 AND identifier_type = ?2 AND identifier_value = ?3",
        params![input.article_id, type_str, input.identifier_value],
        |row| row.get(0),
      )
      .optional()?;

    let (identifier_id, created) = match existing {
      Some(id) => (id, false),
      None => {
        self.conn.execute(
          "INSERT INTO article_identifiers (article_id, identifier_type, identifier_value)
           VALUES (?1, ?2, ?3)",
          params![input.article_id, type_str, input.identifier_value],
        )?;
        (self.conn.last_insert_rowid(), true)
      }
    };

    Ok((
      ArticleIdentifier {
        identifier_id,
        article_id: input.article_id,
        identifier_type: input.identifier_type,
        identifier_value: input.identifier_value.clone(),
      },
      created,
    ))
  }

  fn upsert_copyright(&self, input: &NewCopyright) -> Result<(Copyright, bool)> {
    let existing: Option<i64> = self
      .conn
      .query_row(
        "SELECT copyright_id FROM copyrights
         WHERE article_id = ?1 AND statement = ?2 AND holder = ?3 AND year IS ?4",
        params![input.article_id, input.statement, input.holder, input.year],
        |row| row.get(0),
      )
      .optional()?;

    let (copyright_id, created) = match existing {
      Some(id) => (id, false),
      None => {
        self.conn.execute(
          "INSERT INTO copyrights (article_id, statement, holder, year)
           VALUES (?1, ?2, ?3, ?4)",
          params![input.article_id, input.statement, input.holder, input.year],
        )?;
        (self.conn.last_insert_rowid(), true)
      }
    };

    Ok((
      Copyright {
        copyright_id,
        article_id: input.article_id,
        statement: input.statement.clone(),
        holder: input.holder.clone(),
        year: input.year,
      },
      created,
    ))
  }

  fn upsert_arxiv_category(
    &self,
    input: &NewArxivCategory,
  ) -> Result<(ArxivCategory, bool)> {
    let existing: Option<i64> = self
      .conn
      .query_row(
        "SELECT category_id FROM arxiv_categories
         WHERE article_id = ?1 AND category = ?2 AND is_primary = ?3",
        params![input.article_id, input.category, input.primary],
        |row| row.get(0),
      )
      .optional()?;

    let (category_id, created) = match existing {
      Some(id) => (id, false),
      None => {
        self.conn.execute(
          "INSERT INTO arxiv_categories (article_id, category, is_primary)
           VALUES (?1, ?2, ?3)",
          params![input.article_id, input.category, input.primary],
        )?;
        (self.conn.last_insert_rowid(), true)
      }
    };

    Ok((
      ArxivCategory {
        category_id,
        article_id: input.article_id,
        category: input.category.clone(),
        primary: input.primary,
      },
      created,
    ))
  }

  fn upsert_publisher(&self, name: &str) -> Result<(Publisher, bool)> {
    let existing: Option<i64> = self
      .conn
      .query_row(
        "SELECT publisher_id FROM publishers WHERE name = ?1",
        params![name],
        |row| row.get(0),
      )
      .optional()?;

    let (publisher_id, created) = match existing {
      Some(id) => (id, false),
      None => {
        self
          .conn
          .execute("INSERT INTO publishers (name) VALUES (?1)", params![name])?;
        (self.conn.last_insert_rowid(), true)
      }
    };

    Ok((
      Publisher {
        publisher_id,
        name: name.to_string(),
      },
      created,
    ))
  }

  fn upsert_publication_info(
    &self,
    input: &NewPublicationInfo,
  ) -> Result<(PublicationInfo, bool)> {
    let existing: Option<i64> = self
      .conn
      .query_row(
        "SELECT publication_info_id FROM publication_infos
         WHERE article_id = ?1 AND journal_title = ?2 AND journal_volume = ?3
           AND journal_issue = ?4 AND page_start = ?5 AND page_end = ?6
           AND artid = ?7 AND volume_year IS ?8 AND journal_issue_date IS ?9
           AND publisher_id = ?10",
        params![
          input.article_id,
          input.journal_title,
          input.journal_volume,
          input.journal_issue,
          input.page_start,
          input.page_end,
          input.artid,
          input.volume_year,
          input.journal_issue_date,
          input.publisher_id,
        ],
        |row| row.get(0),
      )
      .optional()?;

    let (publication_info_id, created) = match existing {
      Some(id) => (id, false),
      None => {
        self.conn.execute(
          "INSERT INTO publication_infos (
             article_id, journal_title, journal_volume, journal_issue,
             page_start, page_end, artid, volume_year, journal_issue_date,
             publisher_id
           ) VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8, ?9, ?10)",
          params![
            input.article_id,
            input.journal_title,
            input.journal_volume,
            input.journal_issue,
            input.page_start,
            input.page_end,
            input.artid,
            input.volume_year,
            input.journal_issue_date,
            input.publisher_id,
          ],
        )?;
        (self.conn.last_insert_rowid(), true)
      }
    };

    Ok((
      PublicationInfo {
        publication_info_id,
        article_id: input.article_id,
        journal_title: input.journal_title.clone(),
        journal_volume: input.journal_volume.clone(),
        journal_issue: input.journal_issue.clone(),
        page_start: input.page_start.clone(),
        page_end: input.page_end.clone(),
        artid: input.artid.clone(),
        volume_year: input.volume_year,
        journal_issue_date: input.journal_issue_date,
        publisher_id: input.publisher_id,
      },
      created,
    ))
  }

  fn upsert_collaboration(
    &self,
    input: &NewCollaboration,
  ) -> Result<(Collaboration, bool)> {
    let existing: Option<i64> = self
      .conn
      .query_row(
        "SELECT collaboration_id FROM collaborations
         WHERE name = ?1 AND collaboration_order = ?2",
        params![input.name, input.collaboration_order],
        |row| row.get(0),
      )
      .optional()?;

    let (collaboration_id, created) = match existing {
      Some(id) => (id, false),
      None => {
        self.conn.execute(
          "INSERT INTO collaborations (name, collaboration_order) VALUES (?1, ?2)",
          params![input.name, input.collaboration_order],
        )?;
        (self.conn.last_insert_rowid(), true)
      }
    };

    Ok((
      Collaboration {
        collaboration_id,
        name: input.name.clone(),
        collaboration_order: input.collaboration_order,
      },
      created,
    ))
  }

  fn upsert_author(&self, input: &NewAuthor) -> Result<(Author, bool)> {
    let existing: Option<i64> = self
      .conn
      .query_row(
        "SELECT author_id FROM authors
         WHERE article_id = ?1 AND first_name = ?2 AND last_name = ?3
           AND email = ?4 AND author_order = ?5",
        params![
          input.article_id,
          input.first_name,
          input.last_name,
          input.email,
          input.author_order,
        ],
        |row| row.get(0),
      )
      .optional()?;

    let (author_id, created) = match existing {
      Some(id) => (id, false),
      None => {
        self.conn.execute(
          "INSERT INTO authors (article_id, first_name, last_name, email, author_order)
           VALUES (?1, ?2, ?3, ?4, ?5)",
          params![
            input.article_id,
            input.first_name,
            input.last_name,
            input.email,
            input.author_order,
          ],
        )?;
        (self.conn.last_insert_rowid(), true)
      }
    };

    Ok((
      Author {
        author_id,
        article_id: input.article_id,
        first_name: input.first_name.clone(),
        last_name: input.last_name.clone(),
        email: input.email.clone(),
        author_order: input.author_order,
      },
      created,
    ))
  }

  fn upsert_author_identifier(
    &self,
    input: &NewAuthorIdentifier,
  ) -> Result<(AuthorIdentifier, bool)> {
    let type_str = encode_author_identifier_type(input.identifier_type);

    let existing: Option<i64> = self
      .conn
      .query_row(
        "SELECT identifier_id FROM author_identifiers
         WHERE author_id = ?1 AND identifier_type = ?2 AND identifier_value = ?3",
        params![input.author_id, type_str, input.identifier_value],
        |row| row.get(0),
      )
      .optional()?;

    let (identifier_id, created) = match existing {
      Some(id) => (id, false),
      None => {
        self.conn.execute(
          "INSERT INTO author_identifiers (author_id, identifier_type, identifier_value)
           VALUES (?1, ?2, ?3)",
          params![input.author_id, type_str, input.identifier_value],
        )?;
        (self.conn.last_insert_rowid(), true)
      }
    };

    Ok((
      AuthorIdentifier {
        identifier_id,
        author_id: input.author_id,
        identifier_type: input.identifier_type,
        identifier_value: input.identifier_value.clone(),
      },
      created,
    ))
  }

  fn upsert_country(&self, country: &Country) -> Result<(Country, bool)> {
    let exists = self
      .conn
      .query_row(
        "SELECT 1 FROM countries WHERE code = ?1 AND name = ?2",
        params![country.code, country.name],
        |_| Ok(()),
      )
      .optional()?
      .is_some();

    if !exists {
      self.conn.execute(
        "INSERT INTO countries (code, name) VALUES (?1, ?2)",
        params![country.code, country.name],
      )?;
    }

    Ok((country.clone(), !exists))
  }

  fn upsert_affiliation(
    &self,
    input: &NewAffiliation,
  ) -> Result<(Affiliation, bool)> {
    let existing: Option<i64> = self
      .conn
      .query_row(
        "SELECT affiliation_id FROM affiliations
         WHERE country_code IS ?1 AND value = ?2 AND organization = ?3",
        params![input.country_code, input.value, input.organization],
        |row| row.get(0),
      )
      .optional()?;

    let (affiliation_id, created) = match existing {
      Some(id) => (id, false),
      None => {
        self.conn.execute(
          "INSERT INTO affiliations (country_code, value, organization)
           VALUES (?1, ?2, ?3)",
          params![input.country_code, input.value, input.organization],
        )?;
        (self.conn.last_insert_rowid(), true)
      }
    };

    Ok((
      Affiliation {
        affiliation_id,
        country_code: input.country_code.clone(),
        value: input.value.clone(),
        organization: input.organization.clone(),
      },
      created,
    ))
  }

  // ── Reads ─────────────────────────────────────────────────────────────────

  fn article_licenses(&self, article_id: i64) -> Result<Vec<License>> {
    let mut stmt = self.conn.prepare(
      "SELECT l.license_id, l.name, l.url
       FROM licenses l
       JOIN article_licenses al ON al.license_id = l.license_id
       WHERE al.article_id = ?1
       ORDER BY l.license_id",
    )?;
    let rows = stmt
      .query_map(params![article_id], |row| {
        Ok(License {
          license_id: row.get(0)?,
          name:       row.get(1)?,
          url:        row.get(2)?,
        })
      })?
      .collect::<rusqlite::Result<Vec<_>>>()?;
    Ok(rows)
  }

  fn article_identifiers(
    &self,
    article_id: i64,
  ) -> Result<Vec<ArticleIdentifier>> {
    let mut stmt = self.conn.prepare(
      "SELECT identifier_id, article_id, identifier_type, identifier_value
       FROM article_identifiers WHERE article_id = ?1 ORDER BY identifier_id",
    )?;
    let raws = stmt
      .query_map(params![article_id], |row| {
        Ok((
          row.get::<_, i64>(0)?,
          row.get::<_, i64>(1)?,
          row.get::<_, String>(2)?,
          row.get::<_, String>(3)?,
        ))
      })?
      .collect::<rusqlite::Result<Vec<_>>>()?;

    raws
      .into_iter()
      .map(|(identifier_id, article_id, type_str, identifier_value)| {
        Ok(ArticleIdentifier {
          identifier_id,
          article_id,
          identifier_type: decode_identifier_type(&type_str)?,
          identifier_value,
        })
      })
      .collect()
  }

  fn article_copyrights(&self, article_id: i64) -> Result<Vec<Copyright>> {
    let mut stmt = self.conn.prepare(
      "SELECT copyright_id, article_id, statement, holder, year
       FROM copyrights WHERE article_id = ?1 ORDER BY copyright_id",
    )?;
    let rows = stmt
      .query_map(params![article_id], |row| {
        Ok(Copyright {
          copyright_id: row.get(0)?,
          article_id:   row.get(1)?,
          statement:    row.get(2)?,
          holder:       row.get(3)?,
          year:         row.get(4)?,
        })
      })?
      .collect::<rusqlite::Result<Vec<_>>>()?;
    Ok(rows)
  }

  fn article_arxiv_categories(
    &self,
    article_id: i64,
  ) -> Result<Vec<ArxivCategory>> {
    let mut stmt = self.conn.prepare(
      "SELECT category_id, article_id, category, is_primary
       FROM arxiv_categories WHERE article_id = ?1 ORDER BY category_id",
    )?;
    let rows = stmt
      .query_map(params![article_id], |row| {
        Ok(ArxivCategory {
          category_id: row.get(0)?,
          article_id:  row.get(1)?,
          category:    row.get(2)?,
          primary:     row.get(3)?,
        })
      })?
      .collect::<rusqlite::Result<Vec<_>>>()?;
    Ok(rows)
  }

  fn article_publication_infos(
    &self,
    article_id: i64,
  ) -> Result<Vec<PublicationInfo>> {
    let mut stmt = self.conn.prepare(
      "SELECT publication_info_id, article_id, journal_title, journal_volume,
              journal_issue, page_start, page_end, artid, volume_year,
              journal_issue_date, publisher_id
       FROM publication_infos WHERE article_id = ?1
       ORDER BY publication_info_id",
    )?;
    let rows = stmt
      .query_map(params![article_id], |row| {
        Ok(PublicationInfo {
          publication_info_id: row.get(0)?,
          article_id:          row.get(1)?,
          journal_title:       row.get(2)?,
          journal_volume:      row.get(3)?,
          journal_issue:       row.get(4)?,
          page_start:          row.get(5)?,
          page_end:            row.get(6)?,
          artid:               row.get(7)?,
          volume_year:         row.get(8)?,
          journal_issue_date:  row.get(9)?,
          publisher_id:        row.get(10)?,
        })
      })?
      .collect::<rusqlite::Result<Vec<_>>>()?;
    Ok(rows)
  }

  fn article_authors(&self, article_id: i64) -> Result<Vec<Author>> {
    let mut stmt = self.conn.prepare(
      "SELECT author_id, article_id, first_name, last_name, email, author_order
       FROM authors WHERE article_id = ?1 ORDER BY author_order",
    )?;
    let rows = stmt
      .query_map(params![article_id], |row| {
        Ok(Author {
          author_id:    row.get(0)?,
          article_id:   row.get(1)?,
          first_name:   row.get(2)?,
          last_name:    row.get(3)?,
          email:        row.get(4)?,
          author_order: row.get(5)?,
        })
      })?
      .collect::<rusqlite::Result<Vec<_>>>()?;
    Ok(rows)
  }

  fn author_identifiers(&self, author_id: i64) -> Result<Vec<AuthorIdentifier>> {
    let mut stmt = self.conn.prepare(
      "SELECT identifier_id, author_id, identifier_type, identifier_value
       FROM author_identifiers WHERE author_id = ?1 ORDER BY identifier_id",
    )?;
    let raws = stmt
      .query_map(params![author_id], |row| {
        Ok((
          row.get::<_, i64>(0)?,
          row.get::<_, i64>(1)?,
          row.get::<_, String>(2)?,
          row.get::<_, String>(3)?,
        ))
      })?
      .collect::<rusqlite::Result<Vec<_>>>()?;

    raws
      .into_iter()
      .map(|(identifier_id, author_id, type_str, identifier_value)| {
        Ok(AuthorIdentifier {
          identifier_id,
          author_id,
          identifier_type: decode_author_identifier_type(&type_str)?,
          identifier_value,
        })
      })
      .collect()
  }

  fn list_licenses(&self) -> Result<Vec<License>> {
    let mut stmt = self
      .conn
      .prepare("SELECT license_id, name, url FROM licenses ORDER BY license_id")?;
    let rows = stmt
      .query_map([], |row| {
        Ok(License {
          license_id: row.get(0)?,
          name:       row.get(1)?,
          url:        row.get(2)?,
        })
      })?
      .collect::<rusqlite::Result<Vec<_>>>()?;
    Ok(rows)
  }

  fn list_publishers(&self) -> Result<Vec<Publisher>> {
    let mut stmt = self
      .conn
      .prepare("SELECT publisher_id, name FROM publishers ORDER BY publisher_id")?;
    let rows = stmt
      .query_map([], |row| {
        Ok(Publisher {
          publisher_id: row.get(0)?,
          name:         row.get(1)?,
        })
      })?
      .collect::<rusqlite::Result<Vec<_>>>()?;
    Ok(rows)
  }

  fn list_countries(&self) -> Result<Vec<Country>> {
    let mut stmt = self
      .conn
      .prepare("SELECT code, name FROM countries ORDER BY code")?;
    let rows = stmt
      .query_map([], |row| {
        Ok(Country {
          code: row.get(0)?,
          name: row.get(1)?,
        })
      })?
      .collect::<rusqlite::Result<Vec<_>>>()?;
    Ok(rows)
  }

  fn list_collaborations(&self) -> Result<Vec<Collaboration>> {
    let mut stmt = self.conn.prepare(
      "SELECT collaboration_id, name, collaboration_order
       FROM collaborations ORDER BY collaboration_id",
    )?;
    let rows = stmt
      .query_map([], |row| {
        Ok(Collaboration {
          collaboration_id:    row.get(0)?,
          name:                row.get(1)?,
          collaboration_order: row.get(2)?,
        })
      })?
      .collect::<rusqlite::Result<Vec<_>>>()?;
    Ok(rows)
  }

  fn list_affiliations(&self) -> Result<Vec<Affiliation>> {
    let mut stmt = self.conn.prepare(
      "SELECT affiliation_id, country_code, value, organization
       FROM affiliations ORDER BY affiliation_id",
    )?;
    let rows = stmt
      .query_map([], |row| {
        Ok(Affiliation {
          affiliation_id: row.get(0)?,
          country_code:   row.get(1)?,
          value:          row.get(2)?,
          organization:   row.get(3)?,
        })
      })?
      .collect::<rusqlite::Result<Vec<_>>>()?;
    Ok(rows)
  }
}
