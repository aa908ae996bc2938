//! Query normalization for noisy voice transcripts.
//!
//! Speech recognition tends to clip or mishear artist names and titles
//! ("tay swift", "love store"). The [`Abbreviations`] table maps such whole
//! transcripts to what the user most likely meant. Lookups are exact on the
//! lower-cased input; anything not in the table passes through lower-cased.
//!
//! Tables can be extended from a TOML file:
//!
//! ```toml
//! [expansions]
//! "tay swift" = "taylor swift"
//! "bad hab" = "bad habits"
//! ```

use std::collections::HashMap;
use std::path::Path;
use std::sync::LazyLock;

use refrain_core::{Error, Result};
use serde::{Deserialize, Serialize};

const BUILT_IN: &[(&str, &str)] = &[
    ("tay swift", "taylor swift"),
    ("ed sheer", "ed sheeran"),
    ("shape of", "shape of you"),
    ("love store", "love story"),
    ("blank sp", "blank space"),
    ("shake it", "shake it off"),
    ("think out", "thinking out loud"),
    ("bad hab", "bad habits"),
];

static DEFAULT_TABLE: LazyLock<Abbreviations> = LazyLock::new(Abbreviations::default);

/// Lookup table of known misrecognitions and abbreviations.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Abbreviations {
    #[serde(default)]
    expansions: HashMap<String, String>,
}

impl Default for Abbreviations {
    /// The built-in table of common voice misrecognitions.
    fn default() -> Self {
        BUILT_IN.iter().copied().collect()
    }
}

impl Abbreviations {
    /// A table with exactly the given entries. Keys are lower-cased.
    pub fn new<K, V>(entries: impl IntoIterator<Item = (K, V)>) -> Self
    where
        K: AsRef<str>,
        V: Into<String>,
    {
        let mut table = Self::empty();
        table.extend(entries);
        table
    }

    #[must_use]
    pub fn empty() -> Self {
        Self {
            expansions: HashMap::new(),
        }
    }

    #[must_use]
    pub fn with_entry(mut self, key: impl AsRef<str>, expansion: impl Into<String>) -> Self {
        self.insert(key, expansion);
        self
    }

    /// Add or replace one entry.
    pub fn insert(&mut self, key: impl AsRef<str>, expansion: impl Into<String>) {
        self.expansions
            .insert(key.as_ref().to_lowercase(), expansion.into());
    }

    pub fn extend<K, V>(&mut self, entries: impl IntoIterator<Item = (K, V)>)
    where
        K: AsRef<str>,
        V: Into<String>,
    {
        for (key, expansion) in entries {
            self.insert(key, expansion);
        }
    }

    /// Merge another table over this one; its entries win.
    pub fn merge(&mut self, other: Self) {
        self.expansions.extend(other.expansions);
    }

    /// Load a table from a TOML file with an `[expansions]` section.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read or parsed.
    pub fn load(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path).map_err(Error::Io)?;
        Self::from_toml_str(&content).map_err(|e| {
            Error::InvalidData(format!(
                "failed to parse abbreviations from {}: {}",
                path.display(),
                e
            ))
        })
    }

    /// Parse a table from TOML text.
    ///
    /// # Errors
    ///
    /// Returns an error if the text is not a valid table.
    pub fn from_toml_str(content: &str) -> std::result::Result<Self, toml::de::Error> {
        let parsed: Self = toml::from_str(content)?;
        // Keys written by hand may not be lower-case.
        Ok(Self::new(parsed.expansions))
    }

    pub fn get(&self, key: &str) -> Option<&str> {
        self.expansions.get(key).map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.expansions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.expansions.is_empty()
    }

    /// Lower-case `raw` and expand it if the whole string is a known entry.
    pub fn normalize(&self, raw: &str) -> String {
        let lowered = raw.to_lowercase();
        match self.expansions.get(&lowered) {
            Some(expansion) => expansion.clone(),
            None => lowered,
        }
    }
}

impl<K: AsRef<str>, V: Into<String>> FromIterator<(K, V)> for Abbreviations {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Self::new(iter)
    }
}

/// Normalize a query with the built-in table.
pub fn normalize_query(raw: &str) -> String {
    DEFAULT_TABLE.normalize(raw)
}
