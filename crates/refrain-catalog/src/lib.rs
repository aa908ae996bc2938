//! Catalog loading for refrain.
//!
//! Reads per-artist lexicon documents, maps their field names onto the
//! [`Song`](refrain_core::Song) shape, and merges them into one
//! [`Corpus`](refrain_core::Corpus). Bad sources and records are skipped
//! with a warning; loading itself never fails.

#![deny(unsafe_code)]
#![warn(missing_debug_implementations)]

pub mod config;
pub mod error;
pub mod fields;
pub mod loader;
pub mod source;

pub use config::Config;
pub use error::{LoadError, LoadWarning};
pub use fields::FieldMapping;
pub use loader::{load_catalog, load_catalog_dir, Catalog};
pub use source::{discover_sources, ensure_lexicon_dir, SourceDocument};
