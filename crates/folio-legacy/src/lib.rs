//! Legacy bibliographic record ingestion.
//!
//! Pipeline:
//!   raw JSON &str
//!     └─ serde → [`record::LegacyRecord`]
//!          └─ [`extract::extract`] → [`extract::NormalizedRecord`]  (pure)
//!               └─ [`import::Importer`] → upserts via `BiblioStore`
//!
//! Everything with domain logic — license canonicalization, name splitting,
//! country resolution, truncation and cap policies, publication-unit
//! pairing — happens in the pure extraction phase. The importer itself is a
//! thin, ordered sequence of upserts inside one store transaction.

pub mod country;
pub mod error;
pub mod extract;
pub mod import;
pub mod license;
pub mod name;
pub mod record;

mod countries;

pub use error::{ExtractError, ImportError};
pub use import::{ImportConfig, ImportOutcome, Importer};
