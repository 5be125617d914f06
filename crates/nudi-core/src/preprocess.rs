use unicode_normalization::UnicodeNormalization;

/// Characters stripped from a clicked or typed token before lookup.
/// Kannada letters, signs and digits are always kept.
fn is_lookup_noise(c: char) -> bool {
    c.is_whitespace()
        || c.is_ascii_punctuation()
        || matches!(c, '।' | '॥' | '೥' | '\u{200B}' | '\u{FEFF}')
}

pub trait Preprocessor {
    // Default Indic preprocessor
    fn process(&self, text: &str) -> String {
        let text = text.trim();

        if text.is_empty() {
            return String::new();
        }

        // Canonical composition, so vowel signs compare equal however they were typed
        let text: String = text.nfc().collect();

        text.chars().filter(|c| !is_lookup_noise(*c)).collect()
    }
}

pub struct DefaultPreprocessor;
impl Preprocessor for DefaultPreprocessor {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_strips_punctuation_and_whitespace() {
        let p = DefaultPreprocessor;
        assert_eq!(p.process("  ಮನೆಯಲ್ಲಿ, "), "ಮನೆಯಲ್ಲಿ");
        assert_eq!(p.process("ಪುಸ್ತಕ।"), "ಪುಸ್ತಕ");
        assert_eq!(p.process("\"ನೀರು?\""), "ನೀರು");
    }

    #[test]
    fn test_keeps_digits_and_latin() {
        let p = DefaultPreprocessor;
        assert_eq!(p.process("xyz123"), "xyz123");
        assert_eq!(p.process("೧೨"), "೧೨");
    }

    #[test]
    fn test_composes_split_vowel_signs() {
        let p = DefaultPreprocessor;
        // ಕ + ೆ + ೕ composes to ಕೇ
        assert_eq!(p.process("ಕ\u{0CC6}\u{0CD5}"), "ಕ\u{0CC7}");
    }

    #[test]
    fn test_punctuation_only_is_empty() {
        assert_eq!(DefaultPreprocessor.process(" ... "), "");
    }
}
