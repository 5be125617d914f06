use nudi_config::romanization::RomanizationStyle;
use nudi_core::language::Romanizer;
use unicode_normalization::UnicodeNormalization;

pub const VIRAMA: char = '\u{0CCD}';
pub const ANUSVARA: char = '\u{0C82}';
pub const VISARGA: char = '\u{0C83}';
pub const NUKTA: char = '\u{0CBC}';
const ZWNJ: char = '\u{200C}';
const ZWJ: char = '\u{200D}';

/// Word-final consonant + virama pairs written without an inherent vowel
const WORD_FINAL_BARE: &[&str] = &["ನ್", "ಮ್", "ರ್", "ಲ್"];

fn independent_vowel(c: char) -> Option<&'static str> {
    Some(match c {
        'ಅ' => "a",
        'ಆ' => "aa",
        'ಇ' => "i",
        'ಈ' => "ii",
        'ಉ' => "u",
        'ಊ' => "uu",
        'ಋ' => "ru",
        'ೠ' => "ruu",
        'ಌ' => "lu",
        'ೡ' => "luu",
        'ಎ' => "e",
        'ಏ' => "ee",
        'ಐ' => "ai",
        'ಒ' => "o",
        'ಓ' => "oo",
        'ಔ' => "au",
        _ => return None,
    })
}

fn consonant(c: char) -> Option<&'static str> {
    Some(match c {
        'ಕ' => "k",
        'ಖ' => "kh",
        'ಗ' => "g",
        'ಘ' => "gh",
        'ಙ' => "ng",
        'ಚ' => "ch",
        'ಛ' => "chh",
        'ಜ' => "j",
        'ಝ' => "jh",
        'ಞ' => "nj",
        'ಟ' => "T",
        'ಠ' => "Th",
        'ಡ' => "D",
        'ಢ' => "Dh",
        'ಣ' => "N",
        'ತ' => "t",
        'ಥ' => "th",
        'ದ' => "d",
        'ಧ' => "dh",
        'ನ' => "n",
        'ಪ' => "p",
        'ಫ' => "ph",
        'ಬ' => "b",
        'ಭ' => "bh",
        'ಮ' => "m",
        'ಯ' => "y",
        'ರ' => "r",
        'ಱ' => "rr",
        'ಲ' => "l",
        'ವ' => "v",
        'ಶ' => "sh",
        'ಷ' => "Sh",
        'ಸ' => "s",
        'ಹ' => "h",
        'ಳ' => "L",
        'ೞ' => "zh",
        _ => return None,
    })
}

fn vowel_sign(c: char) -> Option<&'static str> {
    Some(match c {
        'ಾ' => "aa",
        'ಿ' => "i",
        'ೀ' => "ii",
        'ು' => "u",
        'ೂ' => "uu",
        'ೃ' => "ru",
        'ೄ' => "ruu",
        'ೆ' => "e",
        'ೇ' => "ee",
        'ೈ' => "ai",
        'ೊ' => "o",
        'ೋ' => "oo",
        'ೌ' => "au",
        'ೢ' => "lu",
        'ೣ' => "luu",
        _ => return None,
    })
}

fn special(c: char) -> Option<&'static str> {
    Some(match c {
        ANUSVARA => "m",
        VISARGA => "h",
        NUKTA => "",
        '\u{0CD5}' | '\u{0CD6}' => "",
        'ೱ' => "f",
        '೦' => "0",
        '೧' => "1",
        '೨' => "2",
        '೩' => "3",
        '೪' => "4",
        '೫' => "5",
        '೬' => "6",
        '೭' => "7",
        '೮' => "8",
        '೯' => "9",
        _ => return None,
    })
}

pub fn is_kannada(c: char) -> bool {
    ('\u{0C80}'..='\u{0CFF}').contains(&c)
}

fn is_joiner(c: char) -> bool {
    c == ZWNJ || c == ZWJ
}

/// Marks that attach to the preceding letter and never start a grapheme cluster
pub fn is_combining_mark(c: char) -> bool {
    vowel_sign(c).is_some()
        || matches!(c, VIRAMA | ANUSVARA | VISARGA | NUKTA | '\u{0CD5}' | '\u{0CD6}')
        || is_joiner(c)
}

/// Kannada to Latin romanizer. Unknown characters pass through verbatim.
#[derive(Debug, Default, Clone, Copy)]
pub struct KannadaRomanizer {
    style: RomanizationStyle,
}

impl KannadaRomanizer {
    pub fn new(style: RomanizationStyle) -> Self {
        Self { style }
    }

    pub fn romanize(&self, token: &str) -> String {
        let chars: Vec<char> = token.nfc().collect();
        let mut out = String::with_capacity(chars.len() * 2);
        let mut i = 0;

        while i < chars.len() {
            let c = chars[i];

            if let Some(vowel) = independent_vowel(c) {
                self.emit(&mut out, vowel);
                i += 1;
                continue;
            }

            if let Some(base) = consonant(c) {
                self.emit(&mut out, base);

                // A nukta only modifies the consonant, the mark after it still applies
                let mut j = i + 1;
                while chars.get(j) == Some(&NUKTA) {
                    j += 1;
                }

                match chars.get(j).copied() {
                    Some(VIRAMA) => {
                        i = j + 1;
                        continue;
                    }
                    Some(n) if vowel_sign(n).is_some() => {
                        self.emit(&mut out, vowel_sign(n).unwrap_or_default());
                        i = j + 1;
                        continue;
                    }
                    // The mark itself is handled on the next iteration
                    Some(ANUSVARA) | Some(VISARGA) => out.push('a'),
                    Some(n) if is_kannada(n) => out.push('a'),
                    _ => {
                        if !ends_bare(&chars[i..]) {
                            out.push('a');
                        }
                    }
                }

                i = j;
                continue;
            }

            if let Some(sign) = vowel_sign(c) {
                // Malformed: a vowel sign with no consonant before it
                self.emit(&mut out, sign);
                i += 1;
                continue;
            }

            if c == VIRAMA {
                if out.ends_with('a') {
                    out.pop();
                }
                i += 1;
                continue;
            }

            if let Some(mapped) = special(c) {
                self.emit(&mut out, mapped);
                i += 1;
                continue;
            }

            if !is_joiner(c) {
                out.push(c);
            }
            i += 1;
        }

        let out = collapse_long_vowels(&out);

        if out.is_empty() {
            return token.to_string();
        }
        out
    }

    fn emit(&self, out: &mut String, piece: &str) {
        match self.style {
            RomanizationStyle::CaseMarked => out.push_str(piece),
            RomanizationStyle::Learner => out.extend(piece.chars().map(|c| c.to_ascii_lowercase())),
        }
    }
}

impl Romanizer for KannadaRomanizer {
    fn romanize(&self, token: &str) -> String {
        KannadaRomanizer::romanize(self, token)
    }
}

/// Whether the rest of the run, ignoring joiners, is a bare word-final consonant
fn ends_bare(rest: &[char]) -> bool {
    let run: String = rest
        .iter()
        .copied()
        .take_while(|c| is_kannada(*c) || is_joiner(*c))
        .filter(|c| !is_joiner(*c))
        .collect();
    WORD_FINAL_BARE.contains(&run.as_str())
}

/// Runs of three or more identical vowels collapse to a long vowel
fn collapse_long_vowels(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    let mut prev = None;
    let mut run = 0;

    for c in s.chars() {
        if Some(c) == prev {
            run += 1;
        } else {
            prev = Some(c);
            run = 1;
        }
        if run > 2 && matches!(c, 'a' | 'i' | 'u' | 'e' | 'o') {
            continue;
        }
        out.push(c);
    }
    out
}
