//! Lexical song search for refrain.
//!
//! Builds a word 3-gram index over a [`Corpus`](refrain_core::Corpus) and
//! resolves queries in three stages: exact substring, n-gram similarity,
//! then approximate string matching. Voice transcripts go through the
//! [`Abbreviations`] normalizer first.

#![deny(unsafe_code)]
#![warn(missing_debug_implementations)]

pub mod fuzzy;
pub mod ngram;
pub mod normalize;
pub mod searcher;
pub mod shared;
pub mod tokenize;

pub use fuzzy::{close_matches, CloseMatch, SequenceMatcher};
pub use ngram::NgramIndex;
pub use normalize::{normalize_query, Abbreviations};
pub use searcher::{MatchStage, SearchOutcome, Searcher};
pub use shared::SharedSearcher;
