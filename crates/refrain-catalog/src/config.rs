use anyhow::{Context, Result};
use confyg::{env, Confygery};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

use crate::fields::FieldMapping;

/// Configuration for refrain.
///
/// Configuration is loaded from multiple sources with the following priority:
/// 1. CLI arguments (highest priority)
/// 2. Environment variables (REFRAIN_* prefix)
/// 3. Config file (~/.config/refrain/config.toml)
/// 4. Built-in defaults (lowest priority)
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    /// Directory holding the artist lexicon files.
    ///
    /// Can be set via:
    /// - CLI: --lexicons /path/to/dir
    /// - ENV: REFRAIN_LEXICON_DIR
    /// - Config: lexicon_dir = "/path/to/dir"
    /// - Default: ~/.local/share/refrain/lexicons
    #[serde(default = "default_lexicon_dir")]
    pub lexicon_dir: PathBuf,

    /// Only files whose name ends with this are loaded.
    #[serde(default = "default_lexicon_suffix")]
    pub lexicon_suffix: String,

    /// JSON keys to read from each lexicon.
    #[serde(default)]
    pub fields: FieldMapping,

    /// Optional TOML file of extra voice query expansions.
    #[serde(default)]
    pub abbreviations_file: Option<PathBuf>,

    /// Log level: off, error, warn, info, debug, or trace.
    #[serde(default = "default_log_level")]
    pub log_level: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            lexicon_dir: default_lexicon_dir(),
            lexicon_suffix: default_lexicon_suffix(),
            fields: FieldMapping::default(),
            abbreviations_file: None,
            log_level: default_log_level(),
        }
    }
}

impl Config {
    /// Load configuration from file and environment variables.
    ///
    /// Searches for config file at: ~/.config/refrain/config.toml
    /// Reads environment variables with REFRAIN_ prefix.
    ///
    /// # Errors
    ///
    /// Returns an error if the config file exists but cannot be parsed.
    pub fn load() -> Result<Self> {
        let config_path = config_file_path();

        let mut builder = Confygery::new()
            .context("Failed to create config builder")?;

        if config_path.exists() {
            let path_str = config_path.to_str()
                .ok_or_else(|| anyhow::anyhow!("Config path contains invalid UTF-8"))?;
            builder.add_file(path_str)
                .context("Failed to load config file")?;
        }

        let env_opts = env::Options::with_top_level("refrain");
        builder.add_env(env_opts)
            .context("Failed to load environment variables")?;

        let config: Self = builder.build()
            .context("Failed to build configuration")?;

        Ok(config)
    }

    /// Load configuration with a custom lexicon directory.
    ///
    /// This is used when the --lexicons CLI flag is provided.
    pub fn load_with_lexicon_dir(lexicon_dir: PathBuf) -> Result<Self> {
        let mut config = Self::load()?;
        config.lexicon_dir = lexicon_dir;
        Ok(config)
    }

    /// The configured log level, falling back to `Info` if unrecognized.
    pub fn log_level_filter(&self) -> log::LevelFilter {
        self.log_level.parse().unwrap_or(log::LevelFilter::Info)
    }
}

/// Get the default lexicon directory.
///
/// Returns: ~/.local/share/refrain/lexicons (or platform equivalent)
fn default_lexicon_dir() -> PathBuf {
    dirs::data_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join("refrain")
        .join("lexicons")
}

fn default_lexicon_suffix() -> String {
    ".json".to_string()
}

fn default_log_level() -> String {
    "info".to_string()
}

/// Get the config file path.
///
/// Returns:
/// - Linux: ~/.config/refrain/config.toml
/// - macOS: ~/Library/Application Support/refrain/config.toml
/// - Windows: %APPDATA%\refrain\config.toml
pub fn config_file_path() -> PathBuf {
    dirs::config_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join("refrain")
        .join("config.toml")
}

/// Get the example config file content.
pub fn example_config() -> &'static str {
    r#"# Refrain Configuration File
#
# Configuration is loaded from multiple sources with the following priority:
# 1. CLI arguments (highest priority)
# 2. Environment variables (REFRAIN_* prefix)
# 3. This config file
# 4. Built-in defaults (lowest priority)

# Directory holding one JSON lexicon per artist
#
# Can also be set via:
# - CLI: refrain --lexicons /custom/dir search "love story"
# - Environment: REFRAIN_LEXICON_DIR=/custom/dir
#
# Default: Platform-specific data directory
#lexicon_dir = "/path/to/lexicons"

# Only files ending with this suffix are loaded
lexicon_suffix = ".json"

# Extra voice query expansions, merged over the built-in table.
# The file holds an [expansions] table, e.g.
#   [expansions]
#   "tay swift" = "taylor swift"
#abbreviations_file = "/path/to/abbreviations.toml"

# One of: off, error, warn, info, debug, trace
log_level = "info"

# JSON keys read from each lexicon. Use "Artist", "Songs", "Title" and
# "Lyric" for capitalized lexicons.
[fields]
artist = "artist"
songs = "songs"
title = "title"
lyrics = "lyrics"
"#
}

/// Create default config file if it doesn't exist.
///
/// Returns true if a new file was created, false if it already existed.
pub fn ensure_config_file() -> Result<bool> {
    let config_path = config_file_path();

    if config_path.exists() {
        return Ok(false);
    }

    if let Some(parent) = config_path.parent() {
        std::fs::create_dir_all(parent)
            .context("Failed to create config directory")?;
    }

    std::fs::write(&config_path, example_config())
        .context("Failed to write config file")?;

    Ok(true)
}
