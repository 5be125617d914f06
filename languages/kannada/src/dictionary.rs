use std::collections::{BTreeMap, HashMap};
use std::path::PathBuf;

use async_trait::async_trait;
use nudi_core::dictionary::{
    Definition, DictionaryEntry, DictionaryMetadata, DictionaryStore, LoadError, SearchOptions,
};
use nudi_core::error::StoreError;
use serde::{Deserialize, Serialize};

use crate::loader::KannadaDictionaryLoader;

// JSON structures for the Alar-style dictionary export
#[derive(Debug, Deserialize)]
struct AlarEntry {
    #[serde(default)]
    entry: String,
    #[serde(default)]
    phone: Option<String>,
    #[serde(default)]
    defs: Vec<AlarDefinition>,
}

#[derive(Debug, Deserialize)]
struct AlarDefinition {
    #[serde(default)]
    entry: String,
    #[serde(rename = "type", default)]
    word_type: Option<String>,
}

/// Where `open` loads entries from
#[derive(Debug, Clone)]
pub enum DictionarySource {
    /// The starter word list compiled into the crate
    Embedded,
    /// Primary file followed by files merged over it
    Files(Vec<PathBuf>),
    /// Entries supplied by the caller, re-indexed on every open
    Entries(Vec<DictionaryEntry>),
}

#[derive(Debug, Clone, Serialize)]
pub struct DictionaryStats {
    pub total_words: usize,
    pub total_definitions: usize,
    /// Most frequent word types, most common first (at most ten)
    pub word_types: Vec<(String, usize)>,
}

/// In-memory Kannada-English dictionary
#[derive(Debug, Clone)]
pub struct KannadaDictionary {
    source: DictionarySource,
    open: bool,
    entries: Vec<DictionaryEntry>,
    /// Lowercased headword -> entry index
    headword_index: HashMap<String, usize>,
    /// Headword length in code points -> entry indices
    length_index: BTreeMap<usize, Vec<usize>>,
}

impl KannadaDictionary {
    /// A closed store that will load `source` when opened
    pub fn new(source: DictionarySource) -> Self {
        Self {
            source,
            open: false,
            entries: Vec::new(),
            headword_index: HashMap::new(),
            length_index: BTreeMap::new(),
        }
    }

    /// An open store holding the embedded starter word list
    pub fn with_defaults() -> Result<Self, LoadError> {
        let mut dict = KannadaDictionaryLoader::load_embedded()?;
        dict.source = DictionarySource::Embedded;
        Ok(dict)
    }

    /// An open store over the given entries (later duplicates win)
    pub fn from_entries(entries: Vec<DictionaryEntry>) -> Self {
        let mut dict = Self::new(DictionarySource::Entries(Vec::new()));
        for entry in entries {
            dict.insert(entry);
        }
        dict.source = DictionarySource::Entries(dict.entries.clone());
        dict.open = true;
        dict
    }

    /// Parse an Alar-style JSON array. The result is open.
    pub fn from_json(json_str: &str) -> Result<Self, LoadError> {
        let raw: Vec<AlarEntry> =
            serde_json::from_str(json_str).map_err(|e| LoadError::ParseError(e.to_string()))?;

        let mut dict = Self::new(DictionarySource::Entries(Vec::new()));
        let mut skipped = 0;

        for item in raw {
            let headword = item.entry.trim().to_string();
            let definitions: Vec<Definition> = item
                .defs
                .into_iter()
                .filter(|d| !d.entry.trim().is_empty())
                .map(|d| Definition {
                    text: d.entry.trim().to_string(),
                    word_type: d
                        .word_type
                        .filter(|t| !t.is_empty())
                        .unwrap_or_else(|| "unknown".to_string()),
                })
                .collect();

            // Entries without definitions would only ever resolve to a miss
            if headword.is_empty() || definitions.is_empty() {
                skipped += 1;
                continue;
            }

            dict.insert(DictionaryEntry {
                headword,
                romanization: item.phone.filter(|p| !p.trim().is_empty()),
                definitions,
            });
        }

        if skipped > 0 {
            tracing::debug!("Skipped {} dictionary items without headword or definitions", skipped);
        }

        dict.source = DictionarySource::Entries(dict.entries.clone());
        dict.open = true;
        Ok(dict)
    }

    pub fn entry_count(&self) -> usize {
        self.entries.len()
    }

    /// Merge another dictionary into this one.
    /// Entries from `other` replace existing entries with the same headword.
    pub fn merge(mut self, other: KannadaDictionary) -> Self {
        for entry in other.entries {
            self.insert(entry);
        }
        if let DictionarySource::Entries(supplied) = &mut self.source {
            *supplied = self.entries.clone();
        }
        self
    }

    pub fn stats(&self) -> DictionaryStats {
        let mut type_counts: HashMap<&str, usize> = HashMap::new();
        let mut total_definitions = 0;

        for entry in &self.entries {
            total_definitions += entry.definitions.len();
            for def in &entry.definitions {
                if def.word_type != "unknown" {
                    *type_counts.entry(def.word_type.as_str()).or_insert(0) += 1;
                }
            }
        }

        let mut word_types: Vec<(String, usize)> = type_counts
            .into_iter()
            .map(|(t, n)| (t.to_string(), n))
            .collect();
        word_types.sort_by(|a, b| b.1.cmp(&a.1).then_with(|| a.0.cmp(&b.0)));
        word_types.truncate(10);

        DictionaryStats {
            total_words: self.entries.len(),
            total_definitions,
            word_types,
        }
    }

    fn insert(&mut self, entry: DictionaryEntry) {
        let key = entry.headword.to_lowercase();
        if let Some(&idx) = self.headword_index.get(&key) {
            self.entries[idx] = entry;
            return;
        }

        let idx = self.entries.len();
        self.length_index
            .entry(entry.headword.chars().count())
            .or_default()
            .push(idx);
        self.headword_index.insert(key, idx);
        self.entries.push(entry);
    }

    fn clear(&mut self) {
        self.entries.clear();
        self.headword_index.clear();
        self.length_index.clear();
    }

    fn ensure_open(&self) -> Result<(), StoreError> {
        if self.open { Ok(()) } else { Err(StoreError::NotOpen) }
    }
}

#[async_trait]
impl DictionaryStore for KannadaDictionary {
    async fn open(&mut self) -> Result<(), LoadError> {
        if self.open {
            return Ok(());
        }

        let loaded = match &self.source {
            DictionarySource::Embedded => KannadaDictionaryLoader::load_embedded()?,
            DictionarySource::Files(paths) => KannadaDictionaryLoader::load_files(paths).await?,
            DictionarySource::Entries(entries) => Self::from_entries(entries.clone()),
        };

        self.entries = loaded.entries;
        self.headword_index = loaded.headword_index;
        self.length_index = loaded.length_index;
        self.open = true;
        tracing::info!("Dictionary opened with {} entries", self.entries.len());
        Ok(())
    }

    async fn close(&mut self) {
        if self.open {
            tracing::info!("Closing dictionary ({} entries)", self.entries.len());
        }
        self.clear();
        self.open = false;
    }

    fn is_open(&self) -> bool {
        self.open
    }

    async fn exact_lookup(&self, word: &str) -> Result<Option<DictionaryEntry>, StoreError> {
        self.ensure_open()?;
        Ok(self
            .headword_index
            .get(&word.trim().to_lowercase())
            .and_then(|&idx| self.entries.get(idx))
            .cloned())
    }

    async fn keys(&self) -> Result<Vec<String>, StoreError> {
        self.ensure_open()?;
        Ok(self.entries.iter().map(|e| e.headword.clone()).collect())
    }

    async fn candidate_keys(
        &self,
        query: &str,
        options: SearchOptions,
    ) -> Result<Vec<String>, StoreError> {
        self.ensure_open()?;

        let len = query.chars().count();
        let range = len.saturating_sub(options.length_band)..=len + options.length_band;

        Ok(self
            .length_index
            .range(range)
            .flat_map(|(_, indices)| indices.iter())
            .filter_map(|&idx| self.entries.get(idx))
            .map(|e| e.headword.as_str())
            .filter(|headword| options.admits(query, headword))
            .take(options.max_results)
            .map(str::to_string)
            .collect())
    }

    fn metadata(&self) -> DictionaryMetadata {
        DictionaryMetadata {
            name: "Alar Kannada-English".to_string(),
            version: "1.0".to_string(),
            language: "kn".to_string(),
            entry_count: self.entries.len(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const SAMPLE: &str = r#"[
        {"id": 1, "head": "ಪ", "entry": "ಪುಸ್ತಕ", "phone": "pustaka",
         "defs": [{"id": 1, "entry": "Book", "type": "noun"},
                  {"id": 2, "entry": "Volume", "type": "noun"}]},
        {"id": 2, "head": "ಮ", "entry": "ಮನೆ", "phone": "",
         "defs": [{"id": 3, "entry": "House, home", "type": "noun"}]},
        {"id": 3, "head": "ಖ", "entry": "ಖಾಲಿ", "phone": "khaali", "defs": []},
        {"id": 4, "head": "B", "entry": "Bus", "defs": [{"id": 4, "entry": "Bus", "type": ""}]}
    ]"#;

    #[tokio::test]
    async fn test_from_json_skips_entries_without_definitions() {
        let dict = KannadaDictionary::from_json(SAMPLE).unwrap();
        assert_eq!(dict.entry_count(), 3);
        assert!(dict.exact_lookup("ಖಾಲಿ").await.unwrap().is_none());

        let book = dict.exact_lookup("ಪುಸ್ತಕ").await.unwrap().unwrap();
        assert_eq!(book.primary().unwrap().text, "Book");
        assert_eq!(book.alternates().len(), 1);

        let house = dict.exact_lookup("ಮನೆ").await.unwrap().unwrap();
        assert_eq!(house.romanization, None);
    }

    #[tokio::test]
    async fn test_lookup_is_case_insensitive() {
        let dict = KannadaDictionary::from_json(SAMPLE).unwrap();
        let bus = dict.exact_lookup("bUS").await.unwrap().unwrap();
        assert_eq!(bus.headword, "Bus");
        assert_eq!(bus.definitions[0].word_type, "unknown");
    }

    #[test]
    fn test_invalid_json_is_parse_error() {
        let err = KannadaDictionary::from_json("{not json").unwrap_err();
        assert!(matches!(err, LoadError::ParseError(_)));
    }

    #[tokio::test]
    async fn test_closed_store_rejects_lookups() {
        let mut dict = KannadaDictionary::from_json(SAMPLE).unwrap();
        dict.close().await;
        assert!(!dict.is_open());
        assert!(matches!(dict.exact_lookup("ಮನೆ").await, Err(StoreError::NotOpen)));
        assert!(matches!(dict.keys().await, Err(StoreError::NotOpen)));
    }

    #[tokio::test]
    async fn test_embedded_source_reopens() {
        let mut dict = KannadaDictionary::new(DictionarySource::Embedded);
        assert!(!dict.is_open());
        dict.open().await.unwrap();
        assert!(dict.is_open());
        assert!(dict.exact_lookup("ಪುಸ್ತಕ").await.unwrap().is_some());
    }

    #[tokio::test]
    async fn test_supplied_entries_survive_reopen() {
        let mut dict = KannadaDictionary::from_entries(vec![DictionaryEntry {
            headword: "ಹಕ್ಕಿ".to_string(),
            romanization: Some("hakki".to_string()),
            definitions: vec![Definition {
                text: "Bird".to_string(),
                word_type: "noun".to_string(),
            }],
        }]);

        dict.close().await;
        dict.open().await.unwrap();

        assert_eq!(dict.entry_count(), 1);
        assert!(dict.exact_lookup("ಹಕ್ಕಿ").await.unwrap().is_some());
        assert!(dict.exact_lookup("ಪುಸ್ತಕ").await.unwrap().is_none());
    }

    #[tokio::test]
    async fn test_parsed_and_merged_entries_survive_reopen() {
        let patch = KannadaDictionary::from_entries(vec![DictionaryEntry {
            headword: "ಹಕ್ಕಿ".to_string(),
            romanization: None,
            definitions: vec![Definition {
                text: "Bird".to_string(),
                word_type: "noun".to_string(),
            }],
        }]);
        let mut dict = KannadaDictionary::from_json(SAMPLE).unwrap().merge(patch);

        dict.close().await;
        dict.open().await.unwrap();

        assert_eq!(dict.entry_count(), 4);
        assert!(dict.exact_lookup("ಮನೆ").await.unwrap().is_some());
        assert!(dict.exact_lookup("ಹಕ್ಕಿ").await.unwrap().is_some());
    }

    #[tokio::test]
    async fn test_defaults_reopen_from_embedded_list() {
        let mut dict = KannadaDictionary::with_defaults().unwrap();
        dict.close().await;
        dict.open().await.unwrap();
        assert_eq!(dict.entry_count(), 21);
    }

    #[test]
    fn test_merge_overrides_by_headword() {
        let base = KannadaDictionary::from_json(SAMPLE).unwrap();
        let patch = KannadaDictionary::from_entries(vec![DictionaryEntry {
            headword: "ಮನೆ".to_string(),
            romanization: Some("mane".to_string()),
            definitions: vec![Definition {
                text: "Home".to_string(),
                word_type: "noun".to_string(),
            }],
        }]);
        let merged = base.merge(patch);
        assert_eq!(merged.entry_count(), 3);
        let stats = merged.stats();
        assert_eq!(stats.total_definitions, 4);
        assert_eq!(stats.word_types, vec![("noun".to_string(), 3)]);
    }

    #[tokio::test]
    async fn test_candidate_keys_use_length_band() {
        let dict = KannadaDictionary::from_entries(
            ["ಮನೆ", "ಮನೆಗೆ", "ಮನೆಯಲ್ಲಿ", "ನೀರು", "ಮರ"]
                .into_iter()
                .map(|w| DictionaryEntry {
                    headword: w.to_string(),
                    romanization: None,
                    definitions: vec![Definition {
                        text: w.to_string(),
                        word_type: "noun".to_string(),
                    }],
                })
                .collect(),
        );

        let mut keys = dict.candidate_keys("ಮನೆ", SearchOptions::default()).await.unwrap();
        keys.sort();
        assert_eq!(keys, vec!["ಮನೆ", "ಮನೆಗೆ", "ಮರ"]);
    }
}
