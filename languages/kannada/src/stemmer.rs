use nudi_core::language::{Category, StemResult, Stemmer, SuffixRule};

use crate::rules::{self, VOWEL_SIGN_INFO, VOWEL_SIGN_SUFFIXES};

/// Confidence reported for a bare vowel-sign strip
const VOWEL_SIGN_CONFIDENCE: f32 = 0.3;

/// Rule-driven suffix stripper. Heuristic: it has no notion of real word
/// boundaries, so callers should discount low-confidence stems.
#[derive(Debug, Default, Clone, Copy)]
pub struct KannadaStemmer;

impl KannadaStemmer {
    pub fn new() -> Self {
        Self
    }

    /// Stem a token to its most plausible root
    pub fn stem(&self, token: &str) -> StemResult {
        let token_len = token.chars().count();
        if token_len < 2 {
            return StemResult::unchanged(token, Category::Unknown);
        }

        let mut matches: Vec<StemResult> = rules::match_order()
            .iter()
            .filter_map(|rule| self.apply(token, token_len, rule))
            .collect();

        if !matches.is_empty() {
            let mut best = matches.remove(0);
            matches.truncate(2);
            best.alternates = matches;
            return best;
        }

        for suffix in VOWEL_SIGN_SUFFIXES.iter().copied() {
            let Some(stem) = token.strip_suffix(suffix) else {
                continue;
            };
            if token_len > suffix.chars().count() + 1 {
                return StemResult {
                    stem: stem.to_string(),
                    matched_rule: None,
                    matched_suffix: Some(suffix),
                    grammatical_info: vec![VOWEL_SIGN_INFO.to_string()],
                    category: Category::Basic,
                    confidence: VOWEL_SIGN_CONFIDENCE,
                    alternates: Vec::new(),
                };
            }
        }

        StemResult::unchanged(token, Category::Unknown)
    }

    /// Strip one rule from the token, if it matches and leaves a real stem
    fn apply(&self, token: &str, token_len: usize, rule: &'static SuffixRule) -> Option<StemResult> {
        let base = token.strip_suffix(rule.suffix)?;
        let stem = format!("{}{}", base, rule.replacement);
        if stem.is_empty() || stem == token {
            return None;
        }

        let confidence = calculate_confidence(token_len, rule, stem.chars().count());
        Some(StemResult {
            stem,
            matched_rule: Some(rule),
            matched_suffix: Some(rule.suffix),
            grammatical_info: vec![rule.info.to_string()],
            category: rule.word_class.into(),
            confidence,
            alternates: Vec::new(),
        })
    }
}

impl Stemmer for KannadaStemmer {
    fn stem(&self, token: &str) -> StemResult {
        KannadaStemmer::stem(self, token)
    }
}

/// Score a rule match, normalized to [0, 1]
fn calculate_confidence(token_len: usize, rule: &SuffixRule, stem_len: usize) -> f32 {
    let suffix_len = rule.suffix_len();
    let mut score = rule.priority as f32;

    // Longer suffixes are more specific
    score += suffix_len as f32 * 0.1;

    if stem_len >= 2 {
        score += 0.2;
    }
    if stem_len >= 3 {
        score += 0.2;
    }
    if stem_len < 2 {
        score -= 0.3;
    }

    if suffix_len as f32 > token_len as f32 * 0.7 {
        score -= 0.2;
    }

    (score / 10.0).clamp(0.0, 1.0)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::rules::is_known_suffix;

    fn stemmer() -> KannadaStemmer {
        KannadaStemmer::new()
    }

    #[test]
    fn test_present_tense_masculine() {
        let result = stemmer().stem("ಮಾಡುತ್ತಾನೆ");
        assert_eq!(result.stem, "ಮಾಡ");
        assert!(result.confidence > 0.0);
        assert!(result.grammatical_info[0].contains("3rd person masculine"));
        assert_eq!(result.category, Category::Verb);
        assert_eq!(result.matched_suffix, Some("ುತ್ತಾನೆ"));
    }

    #[test]
    fn test_confidence_formula() {
        // priority 4, suffix 7 chars, stem 3 chars: (4 + 0.7 + 0.4) / 10
        let result = stemmer().stem("ಮಾಡುತ್ತಾನೆ");
        assert!((result.confidence - 0.51).abs() < 1e-4, "{}", result.confidence);
    }

    #[test]
    fn test_locative_noun() {
        let result = stemmer().stem("ಮನೆಯಲ್ಲಿ");
        assert_eq!(result.stem, "ಮನೆ");
        assert_eq!(result.grammatical_info, vec!["locative case (in/at)".to_string()]);
        assert!((result.confidence - 0.49).abs() < 1e-4);
    }

    #[test]
    fn test_higher_priority_wins_and_alternates_are_kept() {
        // Both ಗಳಿಗೆ (5) and ಗೆ (2) match
        let result = stemmer().stem("ಮನೆಗಳಿಗೆ");
        assert_eq!(result.stem, "ಮನೆ");
        assert_eq!(result.matched_rule.map(|r| r.suffix), Some("ಗಳಿಗೆ"));
        assert_eq!(result.alternates.len(), 1);
        assert_eq!(result.alternates[0].stem, "ಮನೆಗಳಿ");
        assert!(result.alternates[0].alternates.is_empty());
    }

    #[test]
    fn test_runner_up_kept_as_alternate() {
        // ುತ್ತಿದ್ದಾರೆ (7) and ಿದ್ದಾರೆ (5) both match
        let result = stemmer().stem("ಓದುತ್ತಿದ್ದಾರೆ");
        assert_eq!(result.matched_rule.map(|r| r.suffix), Some("ುತ್ತಿದ್ದಾರೆ"));
        assert_eq!(result.stem, "ಓದ");
        assert_eq!(result.alternates.len(), 1);
        assert_eq!(result.alternates[0].stem, "ಓದುತ್ತ");
    }

    #[test]
    fn test_short_token_is_unchanged() {
        let result = stemmer().stem("ಕ");
        assert_eq!(result.stem, "ಕ");
        assert_eq!(result.confidence, 0.0);
        assert!(result.grammatical_info.is_empty());

        let empty = stemmer().stem("");
        assert_eq!(empty.stem, "");
        assert_eq!(empty.confidence, 0.0);
    }

    #[test]
    fn test_token_equal_to_suffix_is_skipped() {
        // The whole token is the suffix, so the stem would be empty
        let result = stemmer().stem("ಗಳು");
        assert_ne!(result.stem, "");
        assert!(result.stem != "ಗಳು" || result.confidence == 0.0);
    }

    #[test]
    fn test_vowel_sign_fallback() {
        // No rule suffix matches, only the bare ು
        let result = stemmer().stem("ಕನಸು");
        assert_eq!(result.stem, "ಕನಸ");
        assert_eq!(result.category, Category::Basic);
        assert_eq!(result.confidence, 0.3);
        assert!(result.matched_rule.is_none());
        assert_eq!(result.grammatical_info, vec!["basic inflection".to_string()]);
    }

    #[test]
    fn test_no_match_is_unknown() {
        let result = stemmer().stem("xyz123");
        assert_eq!(result.stem, "xyz123");
        assert_eq!(result.confidence, 0.0);
        assert_eq!(result.category, Category::Unknown);
    }

    #[test]
    fn test_lone_rule_match_selects_that_rule() {
        for rule in rules::match_order() {
            let token = format!("ಕಲ{}", rule.suffix);
            let result = stemmer().stem(&token);
            let top = rules::match_order()
                .iter()
                .find(|r| token.ends_with(r.suffix))
                .copied();
            assert_eq!(result.matched_rule, top, "token {}", token);
        }
    }

    #[test]
    fn test_stemmed_tokens_change_and_strip_known_suffixes() {
        let samples = [
            "ಮಾಡುತ್ತಾನೆ",
            "ಮನೆಯಲ್ಲಿ",
            "ಪುಸ್ತಕಗಳು",
            "ನೀರು",
            "ಕರೆಯಲಾಗುತ್ತದೆ",
            "ಊರಿಗೆ",
            "ಹೋಗಬೇಕು",
            "ಪ್ರೀತಿಸುತ್ತಿದ್ದರು",
        ];
        for token in samples {
            let result = stemmer().stem(token);
            if result.confidence > 0.0 {
                assert_ne!(result.stem, token);
                let removed = token.strip_prefix(result.stem.as_str()).unwrap();
                assert!(is_known_suffix(removed), "{} removed {}", token, removed);
            }
            assert!((0.0..=1.0).contains(&result.confidence));
        }
    }
}
