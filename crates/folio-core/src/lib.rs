//! Core types and trait definitions for the Folio bibliographic store.
//!
//! This crate is deliberately free of I/O and database dependencies.
//! All other crates depend on it; it depends on nothing heavier than
//! `chrono` and `serde`.

pub mod article;
pub mod author;
pub mod misc;
pub mod store;
