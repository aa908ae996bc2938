use anyhow::Result;
use clap::Parser;
use std::path::PathBuf;

use refrain_catalog::{Config, FieldMapping};

mod commands;

#[derive(Debug, Parser)]
#[command(name = "refrain", version, about)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Directory of artist lexicons (default: ~/.local/share/refrain/lexicons)
    #[arg(long, global = true)]
    lexicons: Option<PathBuf>,

    /// Lexicon key casing, overriding the configured field names
    #[arg(long, global = true, value_enum)]
    fields: Option<FieldPreset>,

    /// Log debug output
    #[arg(short, long, global = true)]
    verbose: bool,
}

#[derive(Debug, Clone, Copy, clap::ValueEnum)]
enum FieldPreset {
    /// artist / songs / title / lyrics
    Lowercase,
    /// Artist / Songs / Title / Lyric
    Capitalized,
}

impl From<FieldPreset> for FieldMapping {
    fn from(preset: FieldPreset) -> Self {
        match preset {
            FieldPreset::Lowercase => Self::lowercase(),
            FieldPreset::Capitalized => Self::capitalized(),
        }
    }
}

#[derive(Debug, clap::Subcommand)]
enum Commands {
    /// Search the catalog for a song
    ///
    /// The query is matched in three stages, stopping at the first that finds
    /// anything:
    ///
    /// - Exact: the query appears in a title, artist, or lyrics
    /// - N-gram: most of the query's three-word phrases appear in a title,
    ///   artist, or first lyric line
    /// - Fuzzy: the query closely resembles a title, artist, or one of the
    ///   first ten lyric words
    ///
    /// Matching ignores case. Use --voice for text that came from speech
    /// recognition: common misrecognitions ("tay swift") are expanded first.
    Search {
        /// Words to search for
        #[arg(required = true)]
        query: Vec<String>,

        /// Treat the query as a voice transcript and expand it first
        #[arg(long)]
        voice: bool,

        /// Print the lyrics of each result
        #[arg(long)]
        lyrics: bool,
    },
    /// Read queries from stdin, one per line
    ///
    /// The catalog is loaded once. Enter `:reload` to pick up lexicon changes
    /// and `:quit` to exit.
    Shell {
        /// Treat every line as a voice transcript
        #[arg(long)]
        voice: bool,
    },
    /// Inspect the lexicon catalog
    Catalog {
        #[command(subcommand)]
        action: CatalogAction,
    },
    /// Manage configuration
    Config {
        #[command(subcommand)]
        action: ConfigAction,
    },
}

#[derive(Debug, clap::Subcommand)]
enum CatalogAction {
    /// Show song, artist, and index counts plus load warnings
    Stats,
    /// List songs
    List {
        /// Only songs by this artist (case-insensitive)
        #[arg(long)]
        artist: Option<String>,
    },
    /// Create the lexicon directory
    Init,
}

#[derive(Debug, clap::Subcommand)]
enum ConfigAction {
    /// Show the effective configuration
    Show,
    /// Print the config file path
    Path,
    /// Print an example config file
    Example,
    /// Create the config file with defaults
    Init,
}

fn init_logging(level: log::LevelFilter) -> Result<()> {
    twyg::setup(twyg::Opts::default())
        .map_err(|e| anyhow::anyhow!("Failed to set up logging: {e:?}"))?;
    log::set_max_level(level);
    Ok(())
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let mut config = match cli.lexicons {
        Some(dir) => Config::load_with_lexicon_dir(dir)?,
        None => Config::load()?,
    };
    if let Some(preset) = cli.fields {
        config.fields = preset.into();
    }

    let level = if cli.verbose {
        log::LevelFilter::Debug
    } else {
        config.log_level_filter()
    };
    init_logging(level)?;

    match cli.command {
        Commands::Search {
            query,
            voice,
            lyrics,
        } => {
            commands::run_search(&config, &query.join(" "), voice, lyrics)?;
        }
        Commands::Shell { voice } => {
            commands::run_shell(&config, voice)?;
        }
        Commands::Catalog { action } => match action {
            CatalogAction::Stats => commands::catalog::show_stats(&config)?,
            CatalogAction::List { artist } => commands::catalog::list_songs(&config, artist)?,
            CatalogAction::Init => commands::catalog::init_lexicon_dir(&config)?,
        },
        Commands::Config { action } => match action {
            ConfigAction::Show => commands::config::show_config(&config)?,
            ConfigAction::Path => commands::config::show_path()?,
            ConfigAction::Example => commands::config::show_example()?,
            ConfigAction::Init => commands::config::init_config()?,
        },
    }

    Ok(())
}
