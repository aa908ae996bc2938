//! Inverted index from word 3-grams to corpus positions.

use std::collections::HashMap;

use refrain_core::{Corpus, Song};

use crate::tokenize;

/// Maps each word n-gram to the corpus positions of the songs containing it.
///
/// Built from the title, artist, and first lyric line of every song. A song
/// is listed once per occurrence, so a phrase appearing in both its title and
/// its first lyric line carries double weight at query time.
#[derive(Debug, Clone, Default)]
pub struct NgramIndex {
    postings: HashMap<String, Vec<usize>>,
}

impl NgramIndex {
    /// Build the index over a corpus, visiting songs in corpus order.
    #[must_use]
    pub fn build(corpus: &Corpus) -> Self {
        let mut postings: HashMap<String, Vec<usize>> = HashMap::new();

        for (position, song) in corpus.iter().enumerate() {
            for field in indexed_fields(song) {
                for gram in tokenize::ngrams(&field.to_lowercase()) {
                    postings.entry(gram).or_default().push(position);
                }
            }
        }

        log::debug!(
            "Built n-gram index: {} keys over {} songs",
            postings.len(),
            corpus.len()
        );

        Self { postings }
    }

    /// Positions recorded under `gram`, in first-seen order.
    pub fn postings(&self, gram: &str) -> &[usize] {
        self.postings.get(gram).map(Vec::as_slice).unwrap_or_default()
    }

    /// Number of distinct n-gram keys.
    pub fn len(&self) -> usize {
        self.postings.len()
    }

    pub fn is_empty(&self) -> bool {
        self.postings.is_empty()
    }
}

fn indexed_fields(song: &Song) -> [&str; 3] {
    [song.title.as_str(), song.artist.as_str(), song.first_lyric_line()]
}
