use serde::{Deserialize, Serialize};

use crate::error::StoreError;

/// Read-only headword store consulted by the resolver.
///
/// Stores have an explicit lifecycle: nothing is loaded until `open` is
/// awaited, and lookups on a store that is not open fail with
/// `StoreError::NotOpen`. Headword matching is case-insensitive.
#[async_trait::async_trait]
pub trait DictionaryStore: Send + Sync {
    /// Load or connect the backing data
    async fn open(&mut self) -> Result<(), LoadError>;

    /// Release the backing data; later lookups fail until reopened
    async fn close(&mut self);

    fn is_open(&self) -> bool;

    /// Search dictionary by exact headword
    async fn exact_lookup(&self, word: &str) -> Result<Option<DictionaryEntry>, StoreError>;

    /// All known headwords
    async fn keys(&self) -> Result<Vec<String>, StoreError>;

    /// Headwords worth scoring against `query` for suggestions.
    ///
    /// The default scans `keys()` and keeps words that share the query's
    /// first character and whose length is within `options.length_band`.
    /// Stores with an index should override this.
    async fn candidate_keys(
        &self,
        query: &str,
        options: SearchOptions,
    ) -> Result<Vec<String>, StoreError> {
        let keys = self.keys().await?;
        Ok(keys
            .into_iter()
            .filter(|key| options.admits(query, key))
            .take(options.max_results)
            .collect())
    }

    /// Get dictionary metadata
    fn metadata(&self) -> DictionaryMetadata;
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DictionaryEntry {
    pub headword: String,
    /// Pronunciation as stored by the dictionary, if any
    pub romanization: Option<String>,
    pub definitions: Vec<Definition>,
}

impl DictionaryEntry {
    /// First definition, in store order
    pub fn primary(&self) -> Option<&Definition> {
        self.definitions.first()
    }

    /// Every definition after the primary one
    pub fn alternates(&self) -> &[Definition] {
        self.definitions.get(1..).unwrap_or_default()
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Definition {
    pub text: String,
    pub word_type: String,
}

#[derive(Debug, Clone)]
pub struct SearchOptions {
    pub max_results: usize,
    /// Maximum difference in code points between query and candidate
    pub length_band: usize,
}

impl Default for SearchOptions {
    fn default() -> Self {
        Self {
            max_results: 500,
            length_band: 2,
        }
    }
}

impl SearchOptions {
    /// Whether `candidate` falls inside the bounded candidate set for `query`:
    /// within the length band and starting with the same character
    pub fn admits(&self, query: &str, candidate: &str) -> bool {
        let query_len = query.chars().count();
        let candidate_len = candidate.chars().count();
        if query_len.abs_diff(candidate_len) > self.length_band {
            return false;
        }

        let initial = |s: &str| s.chars().next().map(|c| c.to_lowercase().collect::<String>());
        initial(query).is_some() && initial(query) == initial(candidate)
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct DictionaryMetadata {
    pub name: String,
    pub version: String,
    pub language: String,
    pub entry_count: usize,
}

#[derive(Debug, thiserror::Error)]
pub enum LoadError {
    #[error("File not found: {0}")]
    FileNotFound(String),

    #[error("Invalid format: {0}")]
    InvalidFormat(String),

    #[error("Parse error: {0}")]
    ParseError(String),

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),
}
