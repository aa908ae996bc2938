//! Word tokenizing and n-gram extraction shared by the indexer and the
//! n-gram search stage.

use std::sync::LazyLock;

use regex::Regex;

/// Number of words in every indexed n-gram.
pub const NGRAM_SIZE: usize = 3;

#[allow(clippy::unwrap_used)]
static WORD: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"\w+").unwrap());

/// Split text into maximal runs of Unicode word characters.
///
/// Input is expected to be lower-cased already.
pub fn words(text: &str) -> Vec<&str> {
    WORD.find_iter(text).map(|m| m.as_str()).collect()
}

/// Every contiguous window of [`NGRAM_SIZE`] words, space-joined.
///
/// Yields nothing when the text has fewer words than the window.
pub fn ngrams(text: &str) -> impl Iterator<Item = String> + '_ {
    let words = words(text);
    let count = words.len().saturating_sub(NGRAM_SIZE - 1);
    (0..count).map(move |i| words[i..i + NGRAM_SIZE].join(" "))
}
