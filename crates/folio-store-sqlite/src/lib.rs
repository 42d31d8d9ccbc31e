//! SQLite backend for the Folio bibliographic store.
//!
//! Single synchronous [`rusqlite`] connection; the importer is strictly
//! record-by-record, so there is nothing to run concurrently.

mod encode;
mod schema;
mod store;

pub mod error;

pub use error::{Error, Result};
pub use store::SqliteStore;
