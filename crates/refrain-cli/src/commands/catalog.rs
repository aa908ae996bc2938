use anyhow::{Context, Result};
use refrain_catalog::{ensure_lexicon_dir, Config};
use refrain_search::NgramIndex;

/// Show catalog statistics and anything skipped while loading.
pub fn show_stats(config: &Config) -> Result<()> {
    let catalog = super::load_catalog(config);
    let index = NgramIndex::build(&catalog.corpus);

    println!("\n🎵 Refrain Catalog\n");
    println!("  Lexicons: {}", config.lexicon_dir.display());
    println!("  Sources loaded: {}", catalog.sources_loaded);
    println!("  Songs: {}", catalog.corpus.len());
    println!("  Artists: {}", catalog.artists().len());
    println!("  Index n-grams: {}", index.len());

    if catalog.warnings.is_empty() {
        if catalog.corpus.is_empty() {
            println!("\n  No songs yet. Add lexicon files to the directory above,");
            println!("  or run `refrain catalog init` to create it.");
        }
    } else {
        println!("\n  Warnings: {}", catalog.warnings.len());
        for warning in &catalog.warnings {
            println!("    - {warning}");
        }
    }

    Ok(())
}

/// List songs, optionally for one artist.
pub fn list_songs(config: &Config, artist: Option<String>) -> Result<()> {
    let catalog = super::load_catalog(config);
    let artist = artist.map(|a| a.to_lowercase());

    let mut shown = 0;
    for song in &catalog.corpus {
        if let Some(wanted) = &artist {
            if song.artist.to_lowercase() != *wanted {
                continue;
            }
        }
        println!("{} - {}", song.title, song.artist);
        shown += 1;
    }

    if shown == 0 {
        println!("No songs found");
    }

    Ok(())
}

/// Create the lexicon directory.
pub fn init_lexicon_dir(config: &Config) -> Result<()> {
    let created = ensure_lexicon_dir(&config.lexicon_dir)
        .context("Failed to create lexicon directory")?;

    if created {
        println!("✓ Created lexicon directory: {}", config.lexicon_dir.display());
    } else {
        println!("Lexicon directory already exists: {}", config.lexicon_dir.display());
    }
    println!("\nAdd one JSON file per artist, e.g. taylor_swift_lexicon.json:");
    println!("  {{\"artist\": \"Taylor Swift\", \"songs\": [{{\"title\": \"...\", \"lyrics\": \"...\"}}]}}");

    Ok(())
}
