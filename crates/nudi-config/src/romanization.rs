use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RomanizationStyle {
    /// All lowercase, retroflex consonants folded into their dental letters
    #[default]
    Learner,
    /// Retroflex consonants capitalised (T, D, N, L, Sh)
    CaseMarked,
}

#[derive(Debug, Serialize, Deserialize, Clone, Default)]
#[serde(default)]
pub struct RomanizationConfig {
    pub style: RomanizationStyle,
}
