use std::fmt;

use serde::Serialize;

/// Text processing interface for language implementations
pub trait LanguageProcessor: Send + Sync {
    /// Language identifier (ISO 639-1 code: "kn", "ta", "te", etc.)
    fn language_code(&self) -> &str;

    /// Normalize text (Unicode normalization, whitespace, etc.)
    fn normalize(&self, text: &str) -> String;

    /// Break running text into word tokens
    fn tokenize(&self, text: &str) -> Vec<Token>;
}

/// Suffix-stripping stemmer for inflected languages
pub trait Stemmer: Send + Sync {
    /// Reduce an inflected token to its most plausible root
    fn stem(&self, token: &str) -> StemResult;
}

/// Native script to Latin romanization
pub trait Romanizer: Send + Sync {
    /// Total and deterministic: never fails, never returns empty for non-empty input
    fn romanize(&self, token: &str) -> String;
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Token {
    pub surface: String,
    pub normalized: String,
    pub position: usize,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum WordClass {
    Verb,
    Noun,
    Adjective,
    Compound,
}

/// Category reported for a stemming decision. Rule-driven stems carry the
/// rule's word class; the bare vowel-sign fallback reports `Basic`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Category {
    Verb,
    Noun,
    Adjective,
    Compound,
    Basic,
    Unknown,
}

impl From<WordClass> for Category {
    fn from(class: WordClass) -> Self {
        match class {
            WordClass::Verb => Category::Verb,
            WordClass::Noun => Category::Noun,
            WordClass::Adjective => Category::Adjective,
            WordClass::Compound => Category::Compound,
        }
    }
}

impl Category {
    pub fn as_str(&self) -> &'static str {
        match self {
            Category::Verb => "verb",
            Category::Noun => "noun",
            Category::Adjective => "adjective",
            Category::Compound => "compound",
            Category::Basic => "basic",
            Category::Unknown => "unknown",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A single suffix-deletion rule. Rules are static data; matching order is
/// priority DESC, then suffix length DESC.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct SuffixRule {
    pub suffix: &'static str,
    /// Appended to the stem after the suffix is removed (nearly always empty)
    pub replacement: &'static str,
    pub info: &'static str,
    pub word_class: WordClass,
    pub priority: u8,
}

impl SuffixRule {
    /// Suffix length in code points
    pub fn suffix_len(&self) -> usize {
        self.suffix.chars().count()
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct StemResult {
    pub stem: String,
    pub matched_rule: Option<&'static SuffixRule>,
    /// The literal suffix that was removed, set for rule and vowel-sign matches
    pub matched_suffix: Option<&'static str>,
    pub grammatical_info: Vec<String>,
    pub category: Category,
    pub confidence: f32,
    /// Up to two runner-up candidates, best first
    pub alternates: Vec<StemResult>,
}

impl StemResult {
    /// The token returned as-is with zero confidence
    pub fn unchanged(token: &str, category: Category) -> Self {
        Self {
            stem: token.to_string(),
            matched_rule: None,
            matched_suffix: None,
            grammatical_info: Vec::new(),
            category,
            confidence: 0.0,
            alternates: Vec::new(),
        }
    }

    /// True when the stemmer actually removed something
    pub fn is_stemmed(&self, token: &str) -> bool {
        self.confidence > 0.0 && self.stem != token
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ComponentRole {
    Root,
    Suffix,
    Simple,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Component {
    pub text: String,
    pub role: ComponentRole,
    pub meaning: String,
    pub explanation: Option<String>,
    pub category: String,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CompoundAnalysis {
    pub is_compound: bool,
    pub components: Vec<Component>,
    pub grammatical_info: Vec<String>,
    pub confidence: f32,
    pub category: String,
    pub alternates: Vec<StemResult>,
}
