use serde::{Deserialize, Serialize};

use crate::model::song::Song;

/// The ordered, in-memory collection of every loaded song.
///
/// Positions are stable once loading is done: songs are only ever appended,
/// and a built corpus is handed to the searcher by value and never touched
/// again. Insertion order is the tie-breaker for ranking, so it is preserved
/// exactly.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Corpus {
    songs: Vec<Song>,
}

impl Corpus {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a song, returning its position.
    pub fn push(&mut self, song: Song) -> usize {
        self.songs.push(song);
        self.songs.len() - 1
    }

    pub fn get(&self, position: usize) -> Option<&Song> {
        self.songs.get(position)
    }

    pub fn len(&self) -> usize {
        self.songs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.songs.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Song> {
        self.songs.iter()
    }

    pub fn as_slice(&self) -> &[Song] {
        &self.songs
    }
}

impl From<Vec<Song>> for Corpus {
    fn from(songs: Vec<Song>) -> Self {
        Self { songs }
    }
}

impl FromIterator<Song> for Corpus {
    fn from_iter<I: IntoIterator<Item = Song>>(iter: I) -> Self {
        Self {
            songs: iter.into_iter().collect(),
        }
    }
}

impl Extend<Song> for Corpus {
    fn extend<I: IntoIterator<Item = Song>>(&mut self, iter: I) {
        self.songs.extend(iter);
    }
}

impl<'a> IntoIterator for &'a Corpus {
    type Item = &'a Song;
    type IntoIter = std::slice::Iter<'a, Song>;

    fn into_iter(self) -> Self::IntoIter {
        self.songs.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_push_returns_position() {
        let mut corpus = Corpus::new();
        assert_eq!(corpus.push(Song::new("A", "X", "")), 0);
        assert_eq!(corpus.push(Song::new("B", "Y", "")), 1);
        assert_eq!(corpus.len(), 2);
        assert_eq!(corpus.get(1).map(|s| s.title.as_str()), Some("B"));
    }

    #[test]
    fn test_empty_corpus() {
        let corpus = Corpus::new();
        assert!(corpus.is_empty());
        assert!(corpus.get(0).is_none());
        assert_eq!(corpus.iter().count(), 0);
    }

    #[test]
    fn test_preserves_insertion_order() {
        let corpus: Corpus = ["one", "two", "three"]
            .into_iter()
            .map(|t| Song::new(t, "Band", ""))
            .collect();

        let titles: Vec<&str> = corpus.iter().map(|s| s.title.as_str()).collect();
        assert_eq!(titles, vec!["one", "two", "three"]);
    }

    #[test]
    fn test_serializes_as_plain_array() {
        let corpus = Corpus::from(vec![Song::new("A", "X", "la")]);
        let json = serde_json::to_string(&corpus).unwrap();
        assert!(json.starts_with('['));
    }
}
