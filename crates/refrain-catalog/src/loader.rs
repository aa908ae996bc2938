//! Catalog loader: lexicon documents in, one flat corpus out.
//!
//! Each lexicon is an artist plus that artist's songs:
//!
//! ```json
//! {
//!   "artist": "Taylor Swift",
//!   "songs": [
//!     { "title": "Love Story", "lyrics": "We were both young when I first saw you" }
//!   ]
//! }
//! ```
//!
//! Every song is stamped with its lexicon's artist and appended to the corpus
//! in source order, then in the order the lexicon lists them.

use std::path::Path;

use refrain_core::{Corpus, Song};
use serde_json::{Map, Value};

use crate::error::{LoadError, LoadWarning};
use crate::fields::FieldMapping;
use crate::source::{discover_sources, SourceDocument};

/// The result of loading: the corpus plus everything that was skipped.
#[derive(Debug, Default)]
pub struct Catalog {
    pub corpus: Corpus,
    pub warnings: Vec<LoadWarning>,

    /// Sources that contributed (possibly zero) songs.
    pub sources_loaded: usize,
}

impl Catalog {
    /// Distinct artists, in the order they first appear in the corpus.
    pub fn artists(&self) -> Vec<&str> {
        let mut artists: Vec<&str> = Vec::new();
        for song in &self.corpus {
            if !artists.contains(&song.artist.as_str()) {
                artists.push(&song.artist);
            }
        }
        artists
    }

    pub fn into_corpus(self) -> Corpus {
        self.corpus
    }
}

/// Merge artist sources into one corpus.
///
/// Never fails: a source that cannot be used is skipped, as is any song entry
/// without a usable title or lyrics. Each skip is logged and recorded in
/// [`Catalog::warnings`].
pub fn load_catalog<I>(sources: I, mapping: &FieldMapping) -> Catalog
where
    I: IntoIterator<Item = SourceDocument>,
{
    let mut catalog = Catalog::default();

    for document in sources {
        match parse_source(&document, mapping, &mut catalog.warnings) {
            Ok(songs) => {
                log::debug!("Loaded {} songs from {}", songs.len(), document.origin);
                catalog.corpus.extend(songs);
                catalog.sources_loaded += 1;
            }
            Err(e) => {
                let warning = LoadWarning::source_skipped(e);
                log::warn!("{}", warning);
                catalog.warnings.push(warning);
            }
        }
    }

    catalog
}

/// Discover the lexicons in `dir` and load them.
pub fn load_catalog_dir(dir: &Path, suffix: &str, mapping: &FieldMapping) -> Catalog {
    let (documents, discovery_warnings) = discover_sources(dir, suffix);

    let mut catalog = load_catalog(documents, mapping);
    let mut warnings = discovery_warnings;
    warnings.append(&mut catalog.warnings);
    catalog.warnings = warnings;

    log::info!(
        "Total songs loaded: {} from {} lexicon(s)",
        catalog.corpus.len(),
        catalog.sources_loaded
    );
    catalog
}

fn parse_source(
    document: &SourceDocument,
    mapping: &FieldMapping,
    warnings: &mut Vec<LoadWarning>,
) -> Result<Vec<Song>, LoadError> {
    let origin = document.origin.as_str();

    let value: Value = serde_json::from_str(&document.body).map_err(|source| LoadError::Parse {
        origin: origin.to_string(),
        source,
    })?;
    let object = value.as_object().ok_or_else(|| LoadError::NotAnObject {
        origin: origin.to_string(),
    })?;

    let artist = required_string(object, &mapping.artist, origin)?;

    // A lexicon without a song list is just an artist with no songs yet.
    let entries = match object.get(&mapping.songs) {
        None => return Ok(Vec::new()),
        Some(Value::Array(entries)) => entries,
        Some(_) => {
            return Err(LoadError::InvalidField {
                origin: origin.to_string(),
                field: mapping.songs.clone(),
                expected: "an array",
            })
        }
    };

    let mut songs = Vec::with_capacity(entries.len());
    for (index, entry) in entries.iter().enumerate() {
        match parse_entry(entry, artist, mapping, origin) {
            Ok(song) => songs.push(song),
            Err(e) => {
                let warning = LoadWarning::record_skipped(index, e);
                log::warn!("{}", warning);
                warnings.push(warning);
            }
        }
    }

    Ok(songs)
}

fn parse_entry(
    entry: &Value,
    artist: &str,
    mapping: &FieldMapping,
    origin: &str,
) -> Result<Song, LoadError> {
    let object = entry.as_object().ok_or_else(|| LoadError::NotAnObject {
        origin: origin.to_string(),
    })?;

    let title = required_string(object, &mapping.title, origin)?;
    let lyrics = required_string(object, &mapping.lyrics, origin)?;

    Ok(Song::new(title, artist, lyrics))
}

fn required_string<'a>(
    object: &'a Map<String, Value>,
    field: &str,
    origin: &str,
) -> Result<&'a str, LoadError> {
    match object.get(field) {
        Some(Value::String(s)) => Ok(s),
        Some(_) => Err(LoadError::InvalidField {
            origin: origin.to_string(),
            field: field.to_string(),
            expected: "a string",
        }),
        None => Err(LoadError::MissingField {
            origin: origin.to_string(),
            field: field.to_string(),
        }),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn doc(origin: &str, body: &str) -> SourceDocument {
        SourceDocument::new(origin, body)
    }

    #[test]
    fn test_stamps_artist_in_source_order() {
        let catalog = load_catalog(
            vec![
                doc("a.json", r#"{"artist": "A", "songs": [{"title": "s1", "lyrics": "x"}]}"#),
                doc("b.json", r#"{"artist": "B", "songs": [{"title": "s2", "lyrics": "y"}]}"#),
            ],
            &FieldMapping::lowercase(),
        );

        assert!(catalog.warnings.is_empty());
        assert_eq!(
            catalog.corpus.as_slice(),
            &[Song::new("s1", "A", "x"), Song::new("s2", "B", "y")]
        );
        assert_eq!(catalog.sources_loaded, 2);
    }

    #[test]
    fn test_keeps_file_internal_order() {
        let catalog = load_catalog(
            vec![doc(
                "a.json",
                r#"{"artist": "A", "songs": [
                    {"title": "third", "lyrics": ""},
                    {"title": "first", "lyrics": ""},
                    {"title": "second", "lyrics": ""}
                ]}"#,
            )],
            &FieldMapping::lowercase(),
        );
        let titles: Vec<&str> = catalog.corpus.iter().map(|s| s.title.as_str()).collect();
        assert_eq!(titles, vec!["third", "first", "second"]);
    }

    #[test]
    fn test_entry_artist_is_overwritten() {
        let catalog = load_catalog(
            vec![doc(
                "a.json",
                r#"{"artist": "Adele", "songs": [{"title": "Hello", "lyrics": "", "artist": "Lionel"}]}"#,
            )],
            &FieldMapping::lowercase(),
        );
        assert_eq!(catalog.corpus.as_slice()[0].artist, "Adele");
    }

    #[test]
    fn test_capitalized_mapping() {
        let catalog = load_catalog(
            vec![doc(
                "ed.json",
                r#"{"Artist": "Ed Sheeran", "Songs": [{"Title": "Perfect", "Lyric": "I found a love"}]}"#,
            )],
            &FieldMapping::capitalized(),
        );
        assert_eq!(
            catalog.corpus.as_slice(),
            &[Song::new("Perfect", "Ed Sheeran", "I found a love")]
        );
    }

    #[test]
    fn test_wrong_mapping_skips_source() {
        let catalog = load_catalog(
            vec![doc("ed.json", r#"{"Artist": "Ed Sheeran", "Songs": []}"#)],
            &FieldMapping::lowercase(),
        );
        assert!(catalog.corpus.is_empty());
        assert_eq!(catalog.warnings.len(), 1);
        assert!(matches!(
            catalog.warnings[0].error,
            LoadError::MissingField { ref field, .. } if field == "artist"
        ));
    }

    #[test]
    fn test_malformed_source_does_not_stop_loading() {
        let catalog = load_catalog(
            vec![
                doc("broken.json", "{ not json"),
                doc("list.json", "[1, 2, 3]"),
                doc("ok.json", r#"{"artist": "A", "songs": [{"title": "t", "lyrics": "l"}]}"#),
            ],
            &FieldMapping::lowercase(),
        );

        assert_eq!(catalog.corpus.len(), 1);
        assert_eq!(catalog.sources_loaded, 1);
        assert_eq!(catalog.warnings.len(), 2);
        assert!(matches!(catalog.warnings[0].error, LoadError::Parse { .. }));
        assert!(matches!(catalog.warnings[1].error, LoadError::NotAnObject { .. }));
        assert!(catalog.warnings.iter().all(LoadWarning::is_source_level));
    }

    #[test]
    fn test_bad_record_is_skipped_alone() {
        let catalog = load_catalog(
            vec![doc(
                "a.json",
                r#"{"artist": "A", "songs": [
                    {"title": "keep me", "lyrics": "la"},
                    {"title": "no lyrics"},
                    {"title": 7, "lyrics": "la"},
                    "just a string",
                    {"title": "", "lyrics": ""}
                ]}"#,
            )],
            &FieldMapping::lowercase(),
        );

        let titles: Vec<&str> = catalog.corpus.iter().map(|s| s.title.as_str()).collect();
        assert_eq!(titles, vec!["keep me", ""]);

        let records: Vec<Option<usize>> = catalog.warnings.iter().map(|w| w.record).collect();
        assert_eq!(records, vec![Some(1), Some(2), Some(3)]);
        assert!(matches!(catalog.warnings[0].error, LoadError::MissingField { .. }));
        assert!(matches!(catalog.warnings[1].error, LoadError::InvalidField { .. }));
        assert!(matches!(catalog.warnings[2].error, LoadError::NotAnObject { .. }));
    }

    #[test]
    fn test_missing_songs_is_empty_not_error() {
        let catalog = load_catalog(
            vec![doc("a.json", r#"{"artist": "A"}"#)],
            &FieldMapping::lowercase(),
        );
        assert!(catalog.corpus.is_empty());
        assert!(catalog.warnings.is_empty());
        assert_eq!(catalog.sources_loaded, 1);
    }

    #[test]
    fn test_songs_must_be_array() {
        let catalog = load_catalog(
            vec![doc("a.json", r#"{"artist": "A", "songs": {"title": "t"}}"#)],
            &FieldMapping::lowercase(),
        );
        assert!(matches!(
            catalog.warnings[0].error,
            LoadError::InvalidField { expected: "an array", .. }
        ));
    }

    #[test]
    fn test_no_sources() {
        let catalog = load_catalog(Vec::new(), &FieldMapping::lowercase());
        assert!(catalog.corpus.is_empty());
        assert!(catalog.warnings.is_empty());
    }

    #[test]
    fn test_artists_in_first_seen_order() {
        let catalog = load_catalog(
            vec![
                doc("b.json", r#"{"artist": "B", "songs": [{"title": "1", "lyrics": ""}, {"title": "2", "lyrics": ""}]}"#),
                doc("a.json", r#"{"artist": "A", "songs": [{"title": "3", "lyrics": ""}]}"#),
            ],
            &FieldMapping::lowercase(),
        );
        assert_eq!(catalog.artists(), vec!["B", "A"]);
    }
}
