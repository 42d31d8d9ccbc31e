//! `folio` — import legacy bibliographic record dumps into a SQLite store.
//!
//! # Usage
//!
//! ```
//! folio ./dump/                      # import every file in ./dump into folio.db
//! folio ./dump/ --db archive.db      # pick the database file
//! folio ./dump/ --max-authors 25     # raise the per-article author cap
//! folio ./dump/ --keep-going         # report failures but keep importing
//! ```
//!
//! Each file in the directory is expected to hold one legacy JSON record.
//! Every record is imported in its own transaction, so a failed file leaves
//! no partial rows behind.

use std::path::PathBuf;

use anyhow::{Context, Result, bail};
use clap::Parser;
use folio_legacy::{ImportConfig, Importer};
use folio_store_sqlite::SqliteStore;
use tracing::{error, info};
use tracing_subscriber::{EnvFilter, filter::LevelFilter};

// ─── CLI args ─────────────────────────────────────────────────────────────────

#[derive(Parser, Debug)]
#[command(name = "folio", about = "Import legacy bibliographic records")]
struct Args {
  /// Directory containing legacy JSON record files, one record per file.
  #[arg(value_name = "DIR")]
  directory: PathBuf,

  /// Path to the SQLite database file (created if absent).
  #[arg(long, value_name = "FILE", default_value = "folio.db")]
  db: PathBuf,

  /// Maximum number of authors persisted per article.
  #[arg(long, value_name = "N", default_value_t = 10)]
  max_authors: usize,

  /// Log failed records and continue instead of stopping at the first error.
  #[arg(long)]
  keep_going: bool,
}

// ─── Entry point ──────────────────────────────────────────────────────────────

fn main() -> Result<()> {
  // Initialise tracing.
  tracing_subscriber::fmt()
    .with_env_filter(
      EnvFilter::builder()
        .with_default_directive(LevelFilter::INFO.into())
        .from_env_lossy(),
    )
    .init();

  let args = Args::parse();

  let store = SqliteStore::open(&args.db)
    .with_context(|| format!("opening database {}", args.db.display()))?;
  let importer = Importer::new(store, ImportConfig {
    max_authors: args.max_authors,
  });

  let files = record_files(&args.directory)?;
  if files.is_empty() {
    bail!("no record files found in {}", args.directory.display());
  }
  info!(count = files.len(), "importing legacy records");

  let total = files.len();
  let mut failures = 0usize;
  for (index, path) in files.iter().enumerate() {
    let raw = std::fs::read_to_string(path)
      .with_context(|| format!("reading {}", path.display()))?;

    match importer.import_str(&raw) {
      Ok(outcome) => {
        println!(
          "Created article ID {} ({}/{})",
          outcome.article_id,
          index + 1,
          total,
        );
      }
      Err(err) if args.keep_going => {
        error!(file = %path.display(), %err, "record import failed");
        failures += 1;
      }
      Err(err) => {
        return Err(err)
          .with_context(|| format!("importing {}", path.display()));
      }
    }
  }

  if failures > 0 {
    bail!("{failures} of {total} records failed to import");
  }
  Ok(())
}

/// Regular files in `dir`, sorted by path for a stable import order.
fn record_files(dir: &PathBuf) -> Result<Vec<PathBuf>> {
  let entries = std::fs::read_dir(dir)
    .with_context(|| format!("reading directory {}", dir.display()))?;

  let mut files = Vec::new();
  for entry in entries {
    let entry = entry?;
    if entry.file_type()?.is_file() {
      files.push(entry.path());
    }
  }
  files.sort();
  Ok(files)
}
