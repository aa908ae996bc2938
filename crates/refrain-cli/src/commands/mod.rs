pub mod catalog;
pub mod config;
pub mod search;
pub mod shell;

pub use search::run_search;
pub use shell::run_shell;

use anyhow::{Context, Result};
use refrain_catalog::{load_catalog_dir, Catalog, Config};
use refrain_search::Abbreviations;

/// Load every lexicon in the configured directory.
pub fn load_catalog(config: &Config) -> Catalog {
    load_catalog_dir(&config.lexicon_dir, &config.lexicon_suffix, &config.fields)
}

/// The built-in expansion table, extended from the configured file if any.
pub fn load_abbreviations(config: &Config) -> Result<Abbreviations> {
    let mut table = Abbreviations::default();
    if let Some(path) = &config.abbreviations_file {
        let extra = Abbreviations::load(path)
            .with_context(|| format!("Failed to load abbreviations from {}", path.display()))?;
        log::debug!("Loaded {} abbreviations from {}", extra.len(), path.display());
        table.merge(extra);
    }
    Ok(table)
}
