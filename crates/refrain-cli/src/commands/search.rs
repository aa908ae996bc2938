use std::fmt;

use anyhow::Result;
use refrain_catalog::Config;
use refrain_search::{Abbreviations, SearchOutcome, Searcher};

pub fn run_search(config: &Config, query: &str, voice: bool, lyrics: bool) -> Result<()> {
    let abbreviations = super::load_abbreviations(config)?;
    let catalog = super::load_catalog(config);
    let searcher = Searcher::new(catalog.into_corpus());

    let query = prepare_query(&abbreviations, query, voice);
    let outcome = searcher.search_detailed(&query);
    log::debug!("Search for {:?} returned {} results", query, outcome.songs.len());

    print!(
        "{}",
        Listing {
            outcome: &outcome,
            lyrics,
        }
    );
    Ok(())
}

/// Expand a voice transcript; typed queries pass through untouched.
pub fn prepare_query(abbreviations: &Abbreviations, raw: &str, voice: bool) -> String {
    if !voice {
        return raw.to_string();
    }
    let expanded = abbreviations.normalize(raw);
    if expanded != raw.to_lowercase() {
        println!("Interpreted \"{}\" as \"{}\"", raw, expanded);
    }
    expanded
}

/// Renders a search outcome as the listing printed to the terminal.
#[derive(Debug)]
pub struct Listing<'a> {
    pub outcome: &'a SearchOutcome<'a>,
    pub lyrics: bool,
}

impl fmt::Display for Listing<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let Some(stage) = self.outcome.stage else {
            return writeln!(f, "No songs found");
        };

        writeln!(
            f,
            "Found {} song(s) ({} match):",
            self.outcome.songs.len(),
            stage
        )?;
        for song in &self.outcome.songs {
            writeln!(f, "  {} - {}", song.title, song.artist)?;
            if self.lyrics {
                for line in song.lyrics.lines() {
                    writeln!(f, "      {line}")?;
                }
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use refrain_core::{Corpus, Song};

    fn searcher() -> Searcher {
        Searcher::new(Corpus::from(vec![Song::new(
            "Love Story",
            "Taylor Swift",
            "We were both young\nwhen I first saw you",
        )]))
    }

    #[test]
    fn test_prepare_query_typed_is_untouched() {
        let table = Abbreviations::default();
        assert_eq!(prepare_query(&table, "Tay Swift", false), "Tay Swift");
    }

    #[test]
    fn test_prepare_query_voice_is_expanded() {
        let table = Abbreviations::default();
        assert_eq!(prepare_query(&table, "Tay Swift", true), "taylor swift");
    }

    #[test]
    fn test_format_no_results() {
        let searcher = searcher();
        let outcome = searcher.search_detailed("xyzzy");
        assert_eq!(Listing { outcome: &outcome, lyrics: false }.to_string(), "No songs found\n");
    }

    #[test]
    fn test_format_results() {
        let searcher = searcher();
        let outcome = searcher.search_detailed("love");
        assert_eq!(
            Listing { outcome: &outcome, lyrics: false }.to_string(),
            "Found 1 song(s) (exact match):\n  Love Story - Taylor Swift\n"
        );
    }

    #[test]
    fn test_format_results_with_lyrics() {
        let searcher = searcher();
        let outcome = searcher.search_detailed("love");
        let text = Listing { outcome: &outcome, lyrics: true }.to_string();
        assert!(text.contains("      We were both young\n"));
        assert!(text.contains("      when I first saw you\n"));
    }
}
