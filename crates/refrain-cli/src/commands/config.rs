use anyhow::Result;
use refrain_catalog::{config, Config};

/// Show the current effective configuration.
pub fn show_config(config: &Config) -> Result<()> {
    println!("Current Configuration");
    println!("=====================\n");

    println!("Config file: {}", config::config_file_path().display());

    let exists = config::config_file_path().exists();
    println!("File exists: {}\n", if exists { "yes" } else { "no (using defaults)" });

    println!("Settings:");
    println!("  lexicon_dir: {}", config.lexicon_dir.display());
    println!("  lexicon_suffix: {}", config.lexicon_suffix);
    println!(
        "  abbreviations_file: {}",
        config
            .abbreviations_file
            .as_ref()
            .map_or_else(|| "<not set>".to_string(), |p| p.display().to_string())
    );
    println!("  log_level: {:?}", config.log_level_filter());
    println!(
        "  fields: artist={:?} songs={:?} title={:?} lyrics={:?}",
        config.fields.artist, config.fields.songs, config.fields.title, config.fields.lyrics
    );

    println!("\nPriority: CLI args > ENV vars (REFRAIN_*) > Config file > Defaults");

    Ok(())
}

/// Show the config file path.
pub fn show_path() -> Result<()> {
    let config_path = config::config_file_path();
    println!("{}", config_path.display());
    Ok(())
}

/// Show example configuration.
pub fn show_example() -> Result<()> {
    print!("{}", config::example_config());
    Ok(())
}

/// Initialize config file with defaults.
pub fn init_config() -> Result<()> {
    let created = config::ensure_config_file()?;
    let config_path = config::config_file_path();

    if created {
        println!("✓ Created config file: {}", config_path.display());
        println!("\nEdit this file to configure refrain.");
    } else {
        println!("Config file already exists: {}", config_path.display());
    }

    Ok(())
}
