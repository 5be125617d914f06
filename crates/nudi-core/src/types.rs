use serde::Serialize;

use crate::dictionary::{Definition, DictionaryEntry};
use crate::error::{ErrorKind, ResolveError};

/// Outcome of resolving one token. Every variant is renderable on its own.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "match_type", rename_all = "snake_case")]
pub enum LookupResult {
    Exact(ExactMatch),
    Stem(StemMatch),
    Progressive(ProgressiveMatch),
    Suggestions(SuggestionList),
    Fallback(FallbackTranslation),
    Error(LookupFailure),
}

impl LookupResult {
    /// The token the caller asked about
    pub fn original_word(&self) -> &str {
        match self {
            LookupResult::Exact(m) => &m.original_word,
            LookupResult::Stem(m) => &m.original_word,
            LookupResult::Progressive(m) => &m.original_word,
            LookupResult::Suggestions(m) => &m.original_word,
            LookupResult::Fallback(m) => &m.original_word,
            LookupResult::Error(m) => &m.original_word,
        }
    }

    pub fn match_type(&self) -> &'static str {
        match self {
            LookupResult::Exact(_) => "exact",
            LookupResult::Stem(_) => "stem",
            LookupResult::Progressive(_) => "progressive",
            LookupResult::Suggestions(_) => "suggestions",
            LookupResult::Fallback(_) => "fallback",
            LookupResult::Error(_) => "error",
        }
    }

    pub fn failure(original_word: &str, err: &ResolveError) -> Self {
        LookupResult::Error(LookupFailure {
            original_word: original_word.to_string(),
            kind: err.kind(),
            message: err.to_string(),
        })
    }
}

/// Display fields shared by every variant that resolved to a dictionary entry
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ResolvedEntry {
    pub entry: String,
    pub romanization: String,
    pub word_type: String,
    pub definition: String,
    pub alternate_definitions: Vec<Definition>,
}

impl ResolvedEntry {
    /// Flatten a store entry; `romanization` is used when the store has none
    pub fn from_entry(entry: &DictionaryEntry, romanization: String) -> Self {
        let (definition, word_type) = match entry.primary() {
            Some(primary) => (primary.text.clone(), primary.word_type.clone()),
            None => ("No definition available".to_string(), "unknown".to_string()),
        };

        Self {
            entry: entry.headword.clone(),
            romanization: entry
                .romanization
                .clone()
                .filter(|r| !r.is_empty())
                .unwrap_or(romanization),
            word_type,
            definition,
            alternate_definitions: entry.alternates().to_vec(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ExactMatch {
    pub original_word: String,
    #[serde(flatten)]
    pub resolved: ResolvedEntry,
}

/// "You clicked X, root word is Y"
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct StemMatch {
    pub original_word: String,
    pub stem: String,
    pub grammatical_info: Vec<String>,
    pub confidence: f32,
    #[serde(flatten)]
    pub resolved: ResolvedEntry,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ProgressiveMatch {
    pub original_word: String,
    pub matched: String,
    pub remaining: String,
    pub suggestions: Vec<Suggestion>,
    #[serde(flatten)]
    pub resolved: ResolvedEntry,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SuggestionList {
    pub original_word: String,
    /// The form the suggestions were ranked against (the stem when one was found)
    pub query: String,
    pub romanization: String,
    pub suggestions: Vec<Suggestion>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Suggestion {
    pub word: String,
    pub similarity: f32,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FallbackTranslation {
    pub original_word: String,
    pub entry: String,
    pub romanization: String,
    pub definition: String,
    pub word_type: String,
    pub confidence: f32,
    pub source: String,
    pub source_type: String,
}

impl FallbackTranslation {
    pub const NOT_AVAILABLE: &'static str = "Translation not available";

    /// Terminal result when no translation could be obtained
    pub fn not_available(original_word: &str, entry: &str, romanization: String) -> Self {
        Self {
            original_word: original_word.to_string(),
            entry: entry.to_string(),
            romanization,
            definition: Self::NOT_AVAILABLE.to_string(),
            word_type: "translation".to_string(),
            confidence: 0.0,
            source: "Local fallback".to_string(),
            source_type: "none".to_string(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct LookupFailure {
    pub original_word: String,
    pub kind: ErrorKind,
    pub message: String,
}
