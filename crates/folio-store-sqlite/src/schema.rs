//! SQL schema for the Folio SQLite store.
//!
//! Natural keys are enforced with UNIQUE constraints wherever every key
//! column is NOT NULL; entities whose key includes a nullable column
//! (copyrights, publication info, affiliations) are deduplicated by the
//! store's lookup-then-insert upserts instead, because SQLite treats NULLs
//! in a UNIQUE constraint as distinct.

/// Full schema DDL; idempotent thanks to `CREATE TABLE IF NOT EXISTS`.
pub const SCHEMA: &str = "
PRAGMA journal_mode = WAL;
PRAGMA foreign_keys = ON;

CREATE TABLE IF NOT EXISTS articles (
    article_id       INTEGER PRIMARY KEY,  -- legacy control_number when supplied
    publication_date TEXT,                 -- ISO 8601 date or NULL
    title            TEXT NOT NULL,
    subtitle         TEXT NOT NULL,        -- capped at 255 chars upstream
    abstract         TEXT NOT NULL
);

CREATE TABLE IF NOT EXISTS licenses (
    license_id INTEGER PRIMARY KEY,
    name       TEXT NOT NULL,
    url        TEXT NOT NULL,
    UNIQUE (name, url)
);

-- Article <-> license attachment; the set is replaced wholesale on import.
CREATE TABLE IF NOT EXISTS article_licenses (
    article_id INTEGER NOT NULL REFERENCES articles(article_id),
    license_id INTEGER NOT NULL REFERENCES licenses(license_id),
    PRIMARY KEY (article_id, license_id)
);

CREATE TABLE IF NOT EXISTS article_identifiers (
    identifier_id    INTEGER PRIMARY KEY,
    article_id       INTEGER NOT NULL REFERENCES articles(article_id),
    identifier_type  TEXT NOT NULL,        -- 'DOI' | 'arXiv'
    identifier_value TEXT NOT NULL,
    UNIQUE (article_id, identifier_type, identifier_value)
);

CREATE TABLE IF NOT EXISTS copyrights (
    copyright_id INTEGER PRIMARY KEY,
    article_id   INTEGER NOT NULL REFERENCES articles(article_id),
    statement    TEXT NOT NULL,
    holder       TEXT NOT NULL,
    year         INTEGER
);

CREATE TABLE IF NOT EXISTS arxiv_categories (
    category_id INTEGER PRIMARY KEY,
    article_id  INTEGER NOT NULL REFERENCES articles(article_id),
    category    TEXT NOT NULL,
    is_primary  INTEGER NOT NULL,          -- at most one per article
    UNIQUE (article_id, category, is_primary)
);

CREATE TABLE IF NOT EXISTS publishers (
    publisher_id INTEGER PRIMARY KEY,
    name         TEXT NOT NULL UNIQUE
);

CREATE TABLE IF NOT EXISTS publication_infos (
    publication_info_id INTEGER PRIMARY KEY,
    article_id          INTEGER NOT NULL REFERENCES articles(article_id),
    journal_title       TEXT NOT NULL,
    journal_volume      TEXT NOT NULL,
    journal_issue       TEXT NOT NULL,
    page_start          TEXT NOT NULL,
    page_end            TEXT NOT NULL,
    artid               TEXT NOT NULL,
    volume_year         INTEGER,
    journal_issue_date  TEXT,
    publisher_id        INTEGER NOT NULL REFERENCES publishers(publisher_id)
);

CREATE TABLE IF NOT EXISTS collaborations (
    collaboration_id    INTEGER PRIMARY KEY,
    name                TEXT NOT NULL,
    collaboration_order INTEGER NOT NULL,
    UNIQUE (name, collaboration_order)
);

CREATE TABLE IF NOT EXISTS authors (
    author_id    INTEGER PRIMARY KEY,
    article_id   INTEGER NOT NULL REFERENCES articles(article_id),
    first_name   TEXT NOT NULL,
    last_name    TEXT NOT NULL,
    email        TEXT NOT NULL,
    author_order INTEGER NOT NULL,
    UNIQUE (article_id, first_name, last_name, email, author_order)
);

CREATE TABLE IF NOT EXISTS author_identifiers (
    identifier_id    INTEGER PRIMARY KEY,
    author_id        INTEGER NOT NULL REFERENCES authors(author_id),
    identifier_type  TEXT NOT NULL,        -- 'ORCID'
    identifier_value TEXT NOT NULL,
    UNIQUE (author_id, identifier_type, identifier_value)
);

CREATE TABLE IF NOT EXISTS countries (
    code TEXT PRIMARY KEY,                 -- ISO 3166-1 alpha-2
    name TEXT NOT NULL
);

-- Affiliations are global, not linked to a specific author on a specific
-- article (gap carried over from the legacy schema).
CREATE TABLE IF NOT EXISTS affiliations (
    affiliation_id INTEGER PRIMARY KEY,
    country_code   TEXT REFERENCES countries(code),
    value          TEXT NOT NULL,          -- capped at 255 chars upstream
    organization   TEXT NOT NULL
);

CREATE INDEX IF NOT EXISTS article_identifiers_article_idx
    ON article_identifiers(article_id);
CREATE INDEX IF NOT EXISTS authors_article_idx ON authors(article_id);
CREATE INDEX IF NOT EXISTS publication_infos_article_idx
    ON publication_infos(article_id);

PRAGMA user_version = 1;
";
