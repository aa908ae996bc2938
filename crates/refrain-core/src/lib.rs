//! Core domain model for refrain.
//!
//! This crate defines the [`Song`] record and the ordered, append-only
//! [`Corpus`] that the catalog loader produces and the searcher reads.

#![deny(unsafe_code)]
#![warn(missing_debug_implementations)]

pub mod error;
pub mod model;

pub use error::{Error, Result};
pub use model::{Corpus, Song};
