use nudi_config::romanization::RomanizationStyle;
use nudi_core::language::{CompoundAnalysis, LanguageProcessor, StemResult, Token};
use nudi_core::preprocess::{DefaultPreprocessor, Preprocessor};
use unicode_normalization::UnicodeNormalization;

use crate::compound::CompoundDecomposer;
use crate::romanize::KannadaRomanizer;
use crate::stemmer::KannadaStemmer;

fn is_word_boundary(c: char) -> bool {
    c.is_whitespace() || matches!(c, '.' | ',' | ';' | ':' | '!' | '?' | '।' | '॥' | '೥')
}

/// Kannada language processor
#[derive(Debug, Default, Clone, Copy)]
pub struct KannadaProcessor {
    stemmer: KannadaStemmer,
    romanizer: KannadaRomanizer,
    decomposer: CompoundDecomposer,
}

impl KannadaProcessor {
    pub fn new(style: RomanizationStyle) -> Self {
        let stemmer = KannadaStemmer::new();
        Self {
            stemmer,
            romanizer: KannadaRomanizer::new(style),
            decomposer: CompoundDecomposer::new(stemmer),
        }
    }

    pub fn stem(&self, token: &str) -> StemResult {
        self.stemmer.stem(token)
    }

    pub fn romanize(&self, token: &str) -> String {
        self.romanizer.romanize(token)
    }

    pub fn decompose(&self, token: &str) -> CompoundAnalysis {
        self.decomposer.decompose(token)
    }
}

impl LanguageProcessor for KannadaProcessor {
    fn language_code(&self) -> &str {
        "kn"
    }

    fn normalize(&self, text: &str) -> String {
        text.nfc().collect()
    }

    fn tokenize(&self, text: &str) -> Vec<Token> {
        let normalized = self.normalize(text);
        let preprocessor = DefaultPreprocessor;
        let mut tokens = Vec::new();
        let mut start = 0;
        let mut current = String::new();

        let mut flush = |current: &mut String, start: usize| {
            if current.is_empty() {
                return;
            }
            let cleaned = preprocessor.process(current);
            if !cleaned.is_empty() {
                tokens.push(Token {
                    surface: std::mem::take(current),
                    normalized: cleaned,
                    position: start,
                });
            }
            current.clear();
        };

        for (i, c) in normalized.chars().enumerate() {
            if is_word_boundary(c) {
                flush(&mut current, start);
                continue;
            }
            if current.is_empty() {
                start = i;
            }
            current.push(c);
        }
        flush(&mut current, start);

        tokens
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tokenize_sentence() {
        let processor = KannadaProcessor::default();
        let tokens = processor.tokenize("ಒಂದು ಕಾಲದಲ್ಲಿ, ಒಂದು ಊರಲ್ಲಿ ಒಬ್ಬ ರಾಜನಿದ್ದನು.");
        let words: Vec<_> = tokens.iter().map(|t| t.normalized.as_str()).collect();
        assert_eq!(words, vec!["ಒಂದು", "ಕಾಲದಲ್ಲಿ", "ಒಂದು", "ಊರಲ್ಲಿ", "ಒಬ್ಬ", "ರಾಜನಿದ್ದನು"]);
        assert_eq!(tokens[0].position, 0);
        assert_eq!(tokens[1].position, 5);
    }

    #[test]
    fn test_tokenize_strips_quotes() {
        let processor = KannadaProcessor::default();
        let tokens = processor.tokenize("\"ನಿಮ್ಮ ರಾಜ್ಯದಲ್ಲಿ\" ।");
        assert_eq!(tokens.len(), 2);
        assert_eq!(tokens[0].surface, "\"ನಿಮ್ಮ");
        assert_eq!(tokens[0].normalized, "ನಿಮ್ಮ");
        assert_eq!(tokens[1].normalized, "ರಾಜ್ಯದಲ್ಲಿ");
    }

    #[test]
    fn test_tokenize_empty_and_punctuation_only() {
        let processor = KannadaProcessor::default();
        assert!(processor.tokenize("").is_empty());
        assert!(processor.tokenize(" ... ! \"\" ").is_empty());
    }

    #[test]
    fn test_convenience_operations() {
        let processor = KannadaProcessor::new(RomanizationStyle::Learner);
        assert_eq!(processor.language_code(), "kn");
        assert_eq!(processor.stem("ಮನೆಯಲ್ಲಿ").stem, "ಮನೆ");
        assert_eq!(processor.romanize("ಕನ್ನಡ"), "kannada");
        assert!(processor.decompose("ಮನೆಯಲ್ಲಿ").is_compound);
    }
}
