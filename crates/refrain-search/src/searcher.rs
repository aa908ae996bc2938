//! Multi-stage song search.
//!
//! A query is tried against three increasingly forgiving stages, and the
//! first stage that finds anything decides the answer:
//!
//! 1. **Exact**: the lower-cased query is a substring of a song's artist,
//!    title, or lyrics. Results come back in corpus order.
//! 2. **N-gram**: the query's word 3-grams are looked up in the
//!    [`NgramIndex`]. A song's similarity is its hit count over the number of
//!    distinct query n-grams; songs at [`NGRAM_THRESHOLD`] or above are
//!    returned best first, ties in corpus order.
//! 3. **Fuzzy**: the query is compared by sequence-matcher ratio against
//!    every song's title, artist, and first [`LYRIC_TERM_LIMIT`] lyric words.
//!    The best [`FUZZY_LIMIT`] terms at [`FUZZY_CUTOFF`] or above are mapped
//!    back to songs, one result per title.
//!
//! Search never fails; no match is an empty result.

use std::collections::{HashMap, HashSet};

use refrain_core::{Corpus, Song};

use crate::fuzzy;
use crate::ngram::NgramIndex;
use crate::tokenize;

/// Minimum n-gram similarity for a song to be returned.
pub const NGRAM_THRESHOLD: f64 = 0.6;

/// Maximum number of fuzzy term matches considered.
pub const FUZZY_LIMIT: usize = 5;

/// Minimum sequence-matcher ratio for a fuzzy term match.
pub const FUZZY_CUTOFF: f64 = 0.4;

/// Number of leading lyric words offered as fuzzy terms.
pub const LYRIC_TERM_LIMIT: usize = 10;

/// The stage that produced a search result.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MatchStage {
    Exact,
    Ngram,
    Fuzzy,
}

impl MatchStage {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Exact => "exact",
            Self::Ngram => "ngram",
            Self::Fuzzy => "fuzzy",
        }
    }
}

impl std::fmt::Display for MatchStage {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Songs found for a query, with the stage that found them.
#[derive(Debug, Clone, PartialEq)]
pub struct SearchOutcome<'a> {
    /// `None` when no stage matched.
    pub stage: Option<MatchStage>,
    pub songs: Vec<&'a Song>,
}

impl<'a> SearchOutcome<'a> {
    fn none() -> Self {
        Self {
            stage: None,
            songs: Vec::new(),
        }
    }

    fn from_stage(stage: MatchStage, songs: Vec<&'a Song>) -> Option<Self> {
        if songs.is_empty() {
            None
        } else {
            Some(Self {
                stage: Some(stage),
                songs,
            })
        }
    }

    pub fn is_empty(&self) -> bool {
        self.songs.is_empty()
    }
}

/// Lower-cased copies of the fields the exact stage scans.
#[derive(Debug, Clone)]
struct FoldedSong {
    title: String,
    artist: String,
    lyrics: String,
}

impl FoldedSong {
    fn new(song: &Song) -> Self {
        Self {
            title: song.title.to_lowercase(),
            artist: song.artist.to_lowercase(),
            lyrics: song.lyrics.to_lowercase(),
        }
    }

    fn contains(&self, query: &str) -> bool {
        self.artist.contains(query) || self.title.contains(query) || self.lyrics.contains(query)
    }
}

/// Fuzzy candidate terms and the song each resolves to.
#[derive(Debug, Clone, Default)]
struct FuzzyTerms {
    /// Every term in corpus order, repeats included.
    terms: Vec<String>,
    /// Term text to the position of the last song that produced it.
    owners: HashMap<String, usize>,
}

impl FuzzyTerms {
    fn build(folded: &[FoldedSong]) -> Self {
        let mut terms = Vec::new();
        let mut owners = HashMap::new();

        for (position, song) in folded.iter().enumerate() {
            let lyric_words = song.lyrics.split_whitespace().take(LYRIC_TERM_LIMIT);
            let song_terms = [song.title.as_str(), song.artist.as_str()]
                .into_iter()
                .chain(lyric_words)
                .filter(|term| !term.is_empty());

            for term in song_terms {
                terms.push(term.to_string());
                // A later song with the same term takes it over.
                owners.insert(term.to_string(), position);
            }
        }

        Self { terms, owners }
    }
}

/// Searches one immutable corpus.
///
/// Everything query-independent (the n-gram index, lower-cased fields, and
/// fuzzy terms) is computed once here, so a `Searcher` can be shared freely
/// between threads.
#[derive(Debug, Clone)]
pub struct Searcher {
    corpus: Corpus,
    index: NgramIndex,
    folded: Vec<FoldedSong>,
    fuzzy_terms: FuzzyTerms,
}

impl Searcher {
    #[must_use]
    pub fn new(corpus: Corpus) -> Self {
        let index = NgramIndex::build(&corpus);
        let folded: Vec<FoldedSong> = corpus.iter().map(FoldedSong::new).collect();
        let fuzzy_terms = FuzzyTerms::build(&folded);

        log::info!(
            "Searcher ready: {} songs, {} n-grams, {} fuzzy terms",
            corpus.len(),
            index.len(),
            fuzzy_terms.terms.len()
        );

        Self {
            corpus,
            index,
            folded,
            fuzzy_terms,
        }
    }

    pub fn corpus(&self) -> &Corpus {
        &self.corpus
    }

    pub fn index(&self) -> &NgramIndex {
        &self.index
    }

    /// Songs matching `query`, best first. Empty when nothing matches.
    pub fn search(&self, query: &str) -> Vec<&Song> {
        self.search_detailed(query).songs
    }

    /// Like [`search`](Self::search), also reporting the deciding stage.
    pub fn search_detailed(&self, query: &str) -> SearchOutcome<'_> {
        if query.is_empty() {
            return SearchOutcome::none();
        }

        let query = query.to_lowercase();

        let outcome = SearchOutcome::from_stage(MatchStage::Exact, self.exact_matches(&query))
            .or_else(|| SearchOutcome::from_stage(MatchStage::Ngram, self.ngram_matches(&query)))
            .or_else(|| SearchOutcome::from_stage(MatchStage::Fuzzy, self.fuzzy_matches(&query)))
            .unwrap_or_else(SearchOutcome::none);

        log::debug!(
            "Query {:?}: {} result(s) from {} stage",
            query,
            outcome.songs.len(),
            outcome.stage.map_or("no", MatchStage::as_str)
        );

        outcome
    }

    fn exact_matches(&self, query: &str) -> Vec<&Song> {
        self.corpus
            .iter()
            .zip(&self.folded)
            .filter(|(_, folded)| folded.contains(query))
            .map(|(song, _)| song)
            .collect()
    }

    /// Corpus positions and similarity of every song at or above
    /// [`NGRAM_THRESHOLD`], best first.
    pub fn ngram_scores(&self, query: &str) -> Vec<(usize, f64)> {
        let grams: HashSet<String> = tokenize::ngrams(&query.to_lowercase()).collect();
        if grams.is_empty() {
            return Vec::new();
        }

        let mut hits = vec![0_usize; self.corpus.len()];
        for gram in &grams {
            for &position in self.index.postings(gram) {
                hits[position] += 1;
            }
        }

        let total = grams.len().max(1) as f64;
        let mut scored: Vec<(usize, f64)> = hits
            .into_iter()
            .enumerate()
            .filter(|&(_, count)| count > 0)
            .map(|(position, count)| (position, count as f64 / total))
            .filter(|&(_, similarity)| similarity >= NGRAM_THRESHOLD)
            .collect();

        // Stable, so equal scores stay in corpus order.
        scored.sort_by(|a, b| b.1.total_cmp(&a.1));
        scored
    }

    fn ngram_matches(&self, query: &str) -> Vec<&Song> {
        self.ngram_scores(query)
            .into_iter()
            .filter_map(|(position, _)| self.corpus.get(position))
            .collect()
    }

    fn fuzzy_matches(&self, query: &str) -> Vec<&Song> {
        let terms = &self.fuzzy_terms.terms;
        let mut seen_titles: HashSet<&str> = HashSet::new();

        fuzzy::close_matches(query, terms, FUZZY_LIMIT, FUZZY_CUTOFF)
            .into_iter()
            .filter_map(|m| self.fuzzy_terms.owners.get(&terms[m.index]))
            .filter_map(|&position| self.corpus.get(position))
            .filter(|song| seen_titles.insert(song.title.as_str()))
            .collect()
    }
}
