//! Catalog load error types.

use std::fmt;

use thiserror::Error;

/// Why a lexicon source, or one record in it, could not be loaded.
#[derive(Debug, Error)]
pub enum LoadError {
    /// The source could not be read from disk.
    #[error("failed to read {origin}: {source}")]
    Read {
        origin: String,
        source: std::io::Error,
    },

    /// The source is not valid JSON.
    #[error("failed to parse {origin}: {source}")]
    Parse {
        origin: String,
        source: serde_json::Error,
    },

    /// A JSON object was expected (the document, or a song entry).
    #[error("{origin}: expected a JSON object")]
    NotAnObject { origin: String },

    /// A required field is absent.
    #[error("{origin}: missing field `{field}`")]
    MissingField { origin: String, field: String },

    /// A field is present but has the wrong JSON type.
    #[error("{origin}: field `{field}` must be {expected}")]
    InvalidField {
        origin: String,
        field: String,
        expected: &'static str,
    },
}

impl LoadError {
    /// The source the error refers to.
    pub fn origin(&self) -> &str {
        match self {
            Self::Read { origin, .. }
            | Self::Parse { origin, .. }
            | Self::NotAnObject { origin }
            | Self::MissingField { origin, .. }
            | Self::InvalidField { origin, .. } => origin,
        }
    }
}

/// A non-fatal problem met while loading the catalog.
///
/// Either a whole source was skipped (`record` is `None`) or a single song
/// entry within it was (`record` is its index in the source's song list).
#[derive(Debug)]
pub struct LoadWarning {
    pub record: Option<usize>,
    pub error: LoadError,
}

impl LoadWarning {
    #[must_use]
    pub fn source_skipped(error: LoadError) -> Self {
        Self {
            record: None,
            error,
        }
    }

    #[must_use]
    pub fn record_skipped(index: usize, error: LoadError) -> Self {
        Self {
            record: Some(index),
            error,
        }
    }

    /// Returns `true` when the whole source was skipped.
    pub fn is_source_level(&self) -> bool {
        self.record.is_none()
    }
}

impl fmt::Display for LoadWarning {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.record {
            Some(index) => write!(f, "skipped song #{index}: {}", self.error),
            None => write!(f, "skipped source: {}", self.error),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_field_message() {
        let error = LoadError::MissingField {
            origin: "adele.json".to_string(),
            field: "artist".to_string(),
        };
        assert_eq!(error.to_string(), "adele.json: missing field `artist`");
        assert_eq!(error.origin(), "adele.json");
    }

    #[test]
    fn test_warning_display() {
        let warning = LoadWarning::record_skipped(
            2,
            LoadError::InvalidField {
                origin: "adele.json".to_string(),
                field: "lyrics".to_string(),
                expected: "a string",
            },
        );
        assert!(!warning.is_source_level());
        assert_eq!(
            warning.to_string(),
            "skipped song #2: adele.json: field `lyrics` must be a string"
        );
    }

    #[test]
    fn test_source_warning() {
        let warning = LoadWarning::source_skipped(LoadError::NotAnObject {
            origin: "list.json".to_string(),
        });
        assert!(warning.is_source_level());
        assert!(warning.to_string().starts_with("skipped source:"));
    }
}
