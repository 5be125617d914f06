use serde::{Deserialize, Serialize};

fn default_max_suggestions() -> usize {
    5
}

fn default_min_similarity() -> f32 {
    0.4
}

fn default_length_band() -> usize {
    2
}

fn default_progressive_min_prefix() -> usize {
    2
}

fn default_progressive_suggestions() -> usize {
    3
}

/// Bounds for the progressive and suggestion stages of the cascade
#[derive(Debug, Serialize, Deserialize, Clone)]
#[serde(default)]
pub struct ResolverConfig {
    #[serde(default = "default_max_suggestions")]
    pub max_suggestions: usize,
    /// Candidates scoring below this are never suggested
    #[serde(default = "default_min_similarity")]
    pub min_similarity: f32,
    /// Candidate keys must be within this many characters of the query
    #[serde(default = "default_length_band")]
    pub length_band: usize,
    /// Shortest prefix (in characters) tried by progressive lookup
    #[serde(default = "default_progressive_min_prefix")]
    pub progressive_min_prefix: usize,
    #[serde(default = "default_progressive_suggestions")]
    pub progressive_suggestions: usize,
}

impl Default for ResolverConfig {
    fn default() -> Self {
        Self {
            max_suggestions: default_max_suggestions(),
            min_similarity: default_min_similarity(),
            length_band: default_length_band(),
            progressive_min_prefix: default_progressive_min_prefix(),
            progressive_suggestions: default_progressive_suggestions(),
        }
    }
}
