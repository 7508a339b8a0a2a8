use std::collections::HashMap;
use std::fs;
use std::path::{Path, PathBuf};

use thiserror::Error;

use crate::scoring::domain::tip_generator::PhoneticHints;

#[derive(Error, Debug)]
pub enum HintLoadError {
    #[error("failed to read hint file {path}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("malformed hint file {path}: {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
}

/// Loads phonetic hint overrides from a JSON object of `word -> hint`.
///
/// The returned table still falls back to the built-in hints for words
/// the file does not mention.
pub fn load_hints(path: &Path) -> Result<PhoneticHints, HintLoadError> {
    let json = fs::read_to_string(path).map_err(|e| HintLoadError::Read {
        path: path.to_path_buf(),
        source: e,
    })?;
    let overrides: HashMap<String, String> =
        serde_json::from_str(&json).map_err(|e| HintLoadError::Parse {
            path: path.to_path_buf(),
            source: e,
        })?;

    let hints = PhoneticHints::with_overrides(overrides);
    log::info!(
        "Loaded {} phonetic hint overrides from {}",
        hints.override_count(),
        path.display()
    );
    Ok(hints)
}
