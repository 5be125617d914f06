use nudi_core::language::{Component, ComponentRole, CompoundAnalysis, StemResult};

use crate::glossary::{self, GENERIC_EXPLANATION};
use crate::stemmer::KannadaStemmer;

/// Stems at or below this confidence are not shown as a breakdown
const MIN_BREAKDOWN_CONFIDENCE: f32 = 0.3;

/// Splits an inflected word into root and suffix for display
#[derive(Debug, Default, Clone, Copy)]
pub struct CompoundDecomposer {
    stemmer: KannadaStemmer,
}

impl CompoundDecomposer {
    pub fn new(stemmer: KannadaStemmer) -> Self {
        Self { stemmer }
    }

    pub fn decompose(&self, token: &str) -> CompoundAnalysis {
        let result = self.stemmer.stem(token);

        if result.stem != token && result.confidence > MIN_BREAKDOWN_CONFIDENCE {
            return breakdown(result);
        }

        CompoundAnalysis {
            is_compound: false,
            components: vec![Component {
                text: token.to_string(),
                role: ComponentRole::Simple,
                meaning: "Simple word".to_string(),
                explanation: None,
                category: "simple".to_string(),
            }],
            grammatical_info: Vec::new(),
            confidence: 1.0,
            category: "simple".to_string(),
            alternates: Vec::new(),
        }
    }
}

fn breakdown(result: StemResult) -> CompoundAnalysis {
    let mut components = vec![Component {
        text: result.stem.clone(),
        role: ComponentRole::Root,
        meaning: "Root word".to_string(),
        explanation: None,
        category: "stem".to_string(),
    }];

    if let Some(suffix) = result.matched_suffix {
        let gloss = result
            .matched_rule
            .map(|r| r.info)
            .or_else(|| result.grammatical_info.first().map(String::as_str))
            .unwrap_or_default();

        components.push(Component {
            text: suffix.to_string(),
            role: ComponentRole::Suffix,
            meaning: gloss.to_string(),
            explanation: Some(glossary::explanation(gloss).unwrap_or(GENERIC_EXPLANATION).to_string()),
            category: result.category.to_string(),
        });
    }

    CompoundAnalysis {
        is_compound: true,
        components,
        grammatical_info: result.grammatical_info,
        confidence: result.confidence,
        category: result.category.to_string(),
        alternates: result.alternates,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn decompose(token: &str) -> CompoundAnalysis {
        CompoundDecomposer::default().decompose(token)
    }

    #[test]
    fn test_locative_breakdown() {
        let analysis = decompose("ಮನೆಯಲ್ಲಿ");
        assert!(analysis.is_compound);
        assert_eq!(analysis.components.len(), 2);

        let root = &analysis.components[0];
        assert_eq!(root.text, "ಮನೆ");
        assert_eq!(root.role, ComponentRole::Root);

        let suffix = &analysis.components[1];
        assert_eq!(suffix.text, "ಯಲ್ಲಿ");
        assert_eq!(suffix.role, ComponentRole::Suffix);
        assert!(suffix.meaning.contains("locative"));
        assert_eq!(
            suffix.explanation.as_deref(),
            Some("Shows location - where something is happening")
        );
        assert_eq!(suffix.category, "noun");
    }

    #[test]
    fn test_unknown_gloss_gets_generic_explanation() {
        // "present tense, 3rd person masculine" has no entry in the glossary
        let analysis = decompose("ಮಾಡುತ್ತಾನೆ");
        assert!(analysis.is_compound);
        assert_eq!(analysis.components[1].explanation.as_deref(), Some(GENERIC_EXPLANATION));
    }

    #[test]
    fn test_low_confidence_stem_is_simple() {
        // Vowel-sign fallback reports exactly 0.3, which is not enough
        let analysis = decompose("ಕನಸು");
        assert!(!analysis.is_compound);
        assert_eq!(analysis.components.len(), 1);
        assert_eq!(analysis.components[0].role, ComponentRole::Simple);
        assert_eq!(analysis.components[0].text, "ಕನಸು");
        assert_eq!(analysis.confidence, 1.0);
    }

    #[test]
    fn test_unmatched_word_is_simple() {
        let analysis = decompose("xyz123");
        assert!(!analysis.is_compound);
        assert_eq!(analysis.category, "simple");
    }
}
