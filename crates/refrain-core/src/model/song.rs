use serde::{Deserialize, Serialize};

/// A single song record.
///
/// The artist is stamped on by the catalog loader from the lexicon the
/// song came from; lexicon entries themselves carry only title and lyrics.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Song {
    pub title: String,
    pub artist: String,

    /// Full lyrics, possibly spanning several lines.
    pub lyrics: String,
}

impl Song {
    #[must_use]
    pub fn new(
        title: impl Into<String>,
        artist: impl Into<String>,
        lyrics: impl Into<String>,
    ) -> Self {
        Self {
            title: title.into(),
            artist: artist.into(),
            lyrics: lyrics.into(),
        }
    }

    /// The first line of the lyrics, or `""` when there are none.
    ///
    /// This line is the song's lightweight content signature for indexing.
    pub fn first_lyric_line(&self) -> &str {
        self.lyrics.split('\n').next().unwrap_or_default()
    }
}
