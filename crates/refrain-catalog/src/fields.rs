//! Field-name mapping from lexicon documents onto the song model.
//!
//! Lexicons in the wild disagree on key casing (`title`/`lyrics` in some,
//! `Title`/`Lyric` in others). The mapping is applied once, while loading;
//! nothing downstream ever sees a raw key.

use serde::{Deserialize, Serialize};

/// Names of the JSON keys to read from a lexicon document.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct FieldMapping {
    /// Top-level key holding the artist name.
    pub artist: String,

    /// Top-level key holding the array of song entries.
    pub songs: String,

    /// Per-song key holding the title.
    pub title: String,

    /// Per-song key holding the lyrics.
    pub lyrics: String,
}

impl Default for FieldMapping {
    fn default() -> Self {
        Self::lowercase()
    }
}

impl FieldMapping {
    /// `artist` / `songs` / `title` / `lyrics`.
    #[must_use]
    pub fn lowercase() -> Self {
        Self {
            artist: "artist".to_string(),
            songs: "songs".to_string(),
            title: "title".to_string(),
            lyrics: "lyrics".to_string(),
        }
    }

    /// `Artist` / `Songs` / `Title` / `Lyric`.
    #[must_use]
    pub fn capitalized() -> Self {
        Self {
            artist: "Artist".to_string(),
            songs: "Songs".to_string(),
            title: "Title".to_string(),
            lyrics: "Lyric".to_string(),
        }
    }

    /// Look up a preset by name (case-insensitive).
    pub fn preset(name: &str) -> Option<Self> {
        if name.eq_ignore_ascii_case("lowercase") {
            Some(Self::lowercase())
        } else if name.eq_ignore_ascii_case("capitalized") {
            Some(Self::capitalized())
        } else {
            None
        }
    }
}
