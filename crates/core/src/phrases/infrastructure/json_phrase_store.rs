use std::collections::HashSet;
use std::fs;
use std::path::Path;

use crate::phrases::domain::phrase::{Phrase, PhraseFilter};
use crate::phrases::domain::phrase_store::{PhraseStore, PhraseStoreError};

const BUILTIN_CATALOG: &str = include_str!("../../../data/phrases.json");

/// Read-only phrase catalog backed by a JSON array of phrase records.
#[derive(Debug, Clone)]
pub struct JsonPhraseStore {
    phrases: Vec<Phrase>,
}

impl JsonPhraseStore {
    /// The catalog bundled with the library.
    pub fn builtin() -> Result<Self, PhraseStoreError> {
        Self::from_json(BUILTIN_CATALOG)
    }

    pub fn open(path: &Path) -> Result<Self, PhraseStoreError> {
        let json = fs::read_to_string(path).map_err(|e| PhraseStoreError::Read {
            path: path.to_path_buf(),
            source: e,
        })?;
        let store = Self::from_json(&json)?;
        log::info!(
            "Loaded {} phrases from {}",
            store.phrases.len(),
            path.display()
        );
        Ok(store)
    }

    pub fn from_json(json: &str) -> Result<Self, PhraseStoreError> {
        let phrases: Vec<Phrase> = serde_json::from_str(json)?;
        Self::new(phrases)
    }

    pub fn new(phrases: Vec<Phrase>) -> Result<Self, PhraseStoreError> {
        let mut seen = HashSet::new();
        for phrase in &phrases {
            if !seen.insert(phrase.id.as_str()) {
                return Err(PhraseStoreError::DuplicateId(phrase.id.clone()));
            }
        }
        Ok(Self { phrases })
    }

    pub fn len(&self) -> usize {
        self.phrases.len()
    }

    pub fn is_empty(&self) -> bool {
        self.phrases.is_empty()
    }
}

impl PhraseStore for JsonPhraseStore {
    fn find_by_id(&self, id: &str) -> Result<Option<Phrase>, PhraseStoreError> {
        Ok(self.phrases.iter().find(|p| p.id == id).cloned())
    }

    fn select(&self, filter: &PhraseFilter) -> Result<Vec<Phrase>, PhraseStoreError> {
        Ok(self
            .phrases
            .iter()
            .filter(|p| filter.matches(p))
            .cloned()
            .collect())
    }
}
