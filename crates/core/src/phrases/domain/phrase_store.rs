use std::path::PathBuf;

use thiserror::Error;

use super::phrase::{Phrase, PhraseFilter};

#[derive(Error, Debug)]
pub enum PhraseStoreError {
    #[error("failed to read phrase catalog {path}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("malformed phrase catalog: {0}")]
    Parse(#[from] serde_json::Error),
    #[error("duplicate phrase id in catalog: {0}")]
    DuplicateId(String),
}

/// Domain interface for looking up reference phrases.
pub trait PhraseStore: Send + Sync {
    fn find_by_id(&self, id: &str) -> Result<Option<Phrase>, PhraseStoreError>;

    /// Phrases matching `filter`, in catalog order.
    fn select(&self, filter: &PhraseFilter) -> Result<Vec<Phrase>, PhraseStoreError>;
}
