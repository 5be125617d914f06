//! Suffix-deletion rules for Kannada inflection, grouped by word class.
//!
//! Higher priority marks longer, rarer, multi-morpheme suffixes that must be
//! tried before short and ambiguous ones. Replacement is empty throughout:
//! inflection here is modelled as suffix deletion.

use std::sync::LazyLock;

use nudi_core::language::{SuffixRule, WordClass};

const fn rule(suffix: &'static str, info: &'static str, word_class: WordClass, priority: u8) -> SuffixRule {
    SuffixRule {
        suffix,
        replacement: "",
        info,
        word_class,
        priority,
    }
}

const fn verb(suffix: &'static str, info: &'static str, priority: u8) -> SuffixRule {
    rule(suffix, info, WordClass::Verb, priority)
}

const fn noun(suffix: &'static str, info: &'static str, priority: u8) -> SuffixRule {
    rule(suffix, info, WordClass::Noun, priority)
}

const fn adjective(suffix: &'static str, info: &'static str, priority: u8) -> SuffixRule {
    rule(suffix, info, WordClass::Adjective, priority)
}

const fn compound(suffix: &'static str, info: &'static str, priority: u8) -> SuffixRule {
    rule(suffix, info, WordClass::Compound, priority)
}

pub static VERB_RULES: &[SuffixRule] = &[
    // Passive and causative-passive
    verb("ಇಸಲಾಗುತ್ತಿದೆ", "causative passive continuous present", 10),
    verb("ಯಲಾಗುತ್ತಿದೆ", "passive continuous present", 9),
    verb("ಯಲಾಗುತ್ತದೆ", "passive voice, present tense, 3rd person neuter", 8),
    verb("ಯಲಾಗುತ್ತಾರೆ", "passive voice, present tense, 3rd person honorific", 8),
    verb("ಯಲಾಗಿದೆ", "passive voice, present perfect, 3rd person", 7),
    // Causative
    verb("ಇಸುತ್ತಿದ್ದಾರೆ", "causative continuous past, honorific", 8),
    verb("ಇಸಿದ್ದಾರೆ", "causative perfect past, honorific", 7),
    verb("ಇಸುತ್ತಾರೆ", "causative present, honorific", 6),
    verb("ಇಸುತ್ತದೆ", "causative present, 3rd person", 6),
    verb("ಇಸಿದನು", "causative past, masculine", 5),
    // Continuous
    verb("ುತ್ತಿದ್ದಾರೆ", "continuous past, honorific", 7),
    verb("ುತ್ತಿದ್ದಳು", "continuous past, feminine", 6),
    verb("ುತ್ತಿದ್ದನು", "continuous past, masculine", 6),
    // Present
    verb("ುತ್ತಿದ್ದೇನೆ", "continuous present, 1st person", 6),
    verb("ುತ್ತೀನಿ", "present tense, 1st person", 5),
    verb("ುತ್ತೀಯ", "present tense, 2nd person", 5),
    verb("ುತ್ತಾರೆ", "present tense, 3rd person honorific/plural", 5),
    verb("ುತ್ತದೆ", "present tense, 3rd person neuter", 4),
    verb("ುತ್ತಾನೆ", "present tense, 3rd person masculine", 4),
    verb("ುತ್ತಾಳೆ", "present tense, 3rd person feminine", 4),
    // Past
    verb("ಿದ್ದಾರೆ", "past perfect, honorific", 5),
    verb("ಿದ್ದೇನೆ", "past tense, 1st person", 5),
    verb("ಿದ್ದೀಯ", "past tense, 2nd person", 5),
    verb("ಿದ್ದರು", "past tense, 3rd person honorific/plural", 4),
    verb("ಿದ್ದನು", "past tense, 3rd person masculine", 3),
    verb("ಿದ್ದಳು", "past tense, 3rd person feminine", 3),
    verb("ಿತು", "past tense, 3rd person neuter", 3),
    // Negative
    verb("ುವುದಿಲ್ಲ", "negative present tense", 5),
    verb("ಲಿಲ್ಲ", "negative past tense", 3),
    verb("ಬಾರದು", "negative possibility", 4),
    // Conditional and modal
    verb("ಿದ್ದರೆ", "conditional past", 4),
    verb("ಬೇಕು", "necessity/want", 3),
    verb("ಬಹುದು", "possibility/may", 3),
];

pub static NOUN_RULES: &[SuffixRule] = &[
    // Locative
    noun("ಯೊಳಗಿನಲ್ಲಿ", "complex locative (inside of)", 8),
    noun("ಅವರ ಮನೆಯಲ್ಲಿ", "complex possessive locative", 7),
    noun("ಗಳಲ್ಲಿ", "plural locative", 6),
    noun("ಯಲ್ಲಿ", "locative case (in/at)", 4),
    noun("ಅಲ್ಲಿ", "locative case (there/at that place)", 3),
    noun("ೊಳಗೆ", "locative case (inside)", 4),
    noun("ಮೇಲೆ", "locative case (on/above)", 4),
    // Dative
    noun("ಅವರಿಗೆ", "dative case, honorific (to them)", 5),
    noun("ಗಳಿಗೆ", "plural dative case", 5),
    noun("ಇಗೆ", "dative case (to/for)", 3),
    noun("ಗೆ", "dative case (to/for)", 2),
    // Ablative
    noun("ಗಳಿಂದ", "plural ablative case", 5),
    noun("ಇಂದ", "ablative case (from)", 3),
    noun("ನಿಂದ", "ablative case (from)", 3),
    // Genitive
    noun("ಅವರ", "genitive case, honorific (their)", 4),
    noun("ಗಳ", "plural genitive case", 4),
    noun("ಇನ", "genitive case (of/possessive)", 3),
    noun("ಅ", "genitive case (of/possessive)", 1),
    // Associative
    noun("ಗಳೊಂದಿಗೆ", "plural associative case (together with)", 7),
    noun("ಯೊಂದಿಗೆ", "associative case (together with)", 5),
    noun("ೊಂದಿಗೆ", "associative case (with)", 4),
    // Plural
    noun("ಅವರು", "honorific plural (they)", 4),
    noun("ಗಳು", "plural form", 3),
    noun("ರು", "plural form (people)", 2),
];

pub static ADJECTIVE_RULES: &[SuffixRule] = &[
    adjective("ಾದಂತಹ", "comparative adjectival (like that which)", 5),
    adjective("ಆದ", "past participle adjective", 3),
    adjective("ುವ", "present participle adjective", 3),
    adjective("ಿದ", "past participle (done)", 2),
];

pub static COMPOUND_RULES: &[SuffixRule] = &[
    compound("ಆಗಿರುವ", "being/existing as (present participle)", 5),
    compound("ಆಗಿದ್ದ", "having been (past participle)", 4),
    compound("ಆಗಿ", "becoming/as (adverbial)", 3),
    compound("ೇಕೆಂದರೆ", "because (causal)", 6),
    compound("ೇಕೆ", "why? (interrogative)", 3),
];

/// Bare dependent vowel signs tried when no rule matches
pub static VOWEL_SIGN_SUFFIXES: &[&str] = &["ು", "ೆ", "ೇ", "ೈ", "ೊ", "ೋ", "ಾ", "ಿ", "ೀ", "ೂ"];

pub const VOWEL_SIGN_INFO: &str = "basic inflection";

/// Rules for one word class
pub fn rules_for(class: WordClass) -> &'static [SuffixRule] {
    match class {
        WordClass::Verb => VERB_RULES,
        WordClass::Noun => NOUN_RULES,
        WordClass::Adjective => ADJECTIVE_RULES,
        WordClass::Compound => COMPOUND_RULES,
    }
}

static MATCH_ORDER: LazyLock<Vec<&'static SuffixRule>> = LazyLock::new(|| {
    let mut rules: Vec<&'static SuffixRule> = [
        WordClass::Verb,
        WordClass::Noun,
        WordClass::Adjective,
        WordClass::Compound,
    ]
    .into_iter()
    .flat_map(|class| rules_for(class).iter())
    .collect();

    // Stable sort keeps declaration order for full ties
    rules.sort_by(|a, b| {
        b.priority
            .cmp(&a.priority)
            .then_with(|| b.suffix_len().cmp(&a.suffix_len()))
    });
    rules
});

/// Every rule, ordered by priority DESC then suffix length DESC
pub fn match_order() -> &'static [&'static SuffixRule] {
    &MATCH_ORDER
}

/// Whether `suffix` is a suffix of some rule or a bare vowel sign
pub fn is_known_suffix(suffix: &str) -> bool {
    match_order().iter().any(|r| r.suffix == suffix) || VOWEL_SIGN_SUFFIXES.contains(&suffix)
}
