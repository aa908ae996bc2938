use std::io::{self, BufRead, Write};

use anyhow::Result;
use refrain_catalog::Config;
use refrain_search::{Searcher, SharedSearcher};

use super::search::{prepare_query, Listing};

/// Build a searcher from whatever the lexicon directory holds right now.
fn build_searcher(config: &Config) -> Searcher {
    let catalog = super::load_catalog(config);
    for warning in &catalog.warnings {
        eprintln!("  ! {warning}");
    }
    Searcher::new(catalog.into_corpus())
}

pub fn run_shell(config: &Config, voice: bool) -> Result<()> {
    let abbreviations = super::load_abbreviations(config)?;
    let shared = SharedSearcher::new(build_searcher(config));

    println!(
        "{} songs loaded. Type a query, :reload, or :quit.",
        shared.current().corpus().len()
    );

    let stdin = io::stdin();
    let mut stdout = io::stdout();
    let mut lines = stdin.lock().lines();

    loop {
        print!("> ");
        stdout.flush()?;

        let Some(line) = lines.next() else {
            break;
        };
        let line = line?;
        let input = line.trim();

        match input {
            "" => continue,
            ":quit" | ":q" => break,
            ":reload" => {
                shared.replace(build_searcher(config));
                println!("{} songs loaded.", shared.current().corpus().len());
            }
            _ => {
                let query = prepare_query(&abbreviations, input, voice);
                let searcher = shared.current();
                let outcome = searcher.search_detailed(&query);
                print!(
                    "{}",
                    Listing {
                        outcome: &outcome,
                        lyrics: false,
                    }
                );
            }
        }
    }

    Ok(())
}
