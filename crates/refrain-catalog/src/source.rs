//! Lexicon source discovery.

use std::path::Path;

use walkdir::WalkDir;

use crate::error::{LoadError, LoadWarning};

/// The raw text of one artist lexicon and where it came from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SourceDocument {
    /// Label used in warnings, usually the file path.
    pub origin: String,
    pub body: String,
}

impl SourceDocument {
    #[must_use]
    pub fn new(origin: impl Into<String>, body: impl Into<String>) -> Self {
        Self {
            origin: origin.into(),
            body: body.into(),
        }
    }
}

/// Read every file directly inside `dir` whose name ends with `suffix`.
///
/// Files are visited in file-name order so the corpus comes out the same on
/// every run. Unreadable files are reported as warnings and skipped. A
/// missing directory simply yields no sources.
pub fn discover_sources(dir: &Path, suffix: &str) -> (Vec<SourceDocument>, Vec<LoadWarning>) {
    let mut documents = Vec::new();
    let mut warnings = Vec::new();

    if !dir.is_dir() {
        log::info!("No lexicon directory at {}", dir.display());
        return (documents, warnings);
    }

    for entry in WalkDir::new(dir)
        .min_depth(1)
        .max_depth(1)
        .sort_by_file_name()
    {
        let entry = match entry {
            Ok(entry) => entry,
            Err(e) => {
                let origin = e
                    .path()
                    .unwrap_or(dir)
                    .display()
                    .to_string();
                let warning = LoadWarning::source_skipped(LoadError::Read {
                    origin,
                    source: e.into(),
                });
                log::warn!("{}", warning);
                warnings.push(warning);
                continue;
            }
        };

        let path = entry.path();
        if !entry.file_type().is_file() || !entry.file_name().to_string_lossy().ends_with(suffix) {
            continue;
        }

        log::debug!("Reading lexicon: {}", path.display());

        match std::fs::read_to_string(path) {
            Ok(body) => documents.push(SourceDocument::new(path.display().to_string(), body)),
            Err(e) => {
                let warning = LoadWarning::source_skipped(LoadError::Read {
                    origin: path.display().to_string(),
                    source: e,
                });
                log::warn!("{}", warning);
                warnings.push(warning);
            }
        }
    }

    if documents.is_empty() {
        log::info!(
            "No lexicon files matching *{} in {}",
            suffix,
            dir.display()
        );
    }

    (documents, warnings)
}

/// Create the lexicon directory if it does not exist yet.
///
/// Returns `true` if the directory was created.
///
/// # Errors
///
/// Returns an error if the directory cannot be created.
pub fn ensure_lexicon_dir(dir: &Path) -> refrain_core::Result<bool> {
    if dir.is_dir() {
        return Ok(false);
    }
    std::fs::create_dir_all(dir)?;
    log::info!("Created lexicon directory at {}", dir.display());
    Ok(true)
}
