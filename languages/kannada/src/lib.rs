pub mod compound;
pub mod dictionary;
pub mod glossary;
pub mod loader;
pub mod processor;
pub mod resolver;
pub mod romanize;
pub mod rules;
pub mod similarity;
pub mod stemmer;
pub mod translator;


use nudi_core::language::{CompoundAnalysis, StemResult};

pub use compound::CompoundDecomposer;
pub use dictionary::{DictionarySource, DictionaryStats, KannadaDictionary};
pub use glossary::GrammarExplanation;
pub use loader::KannadaDictionaryLoader;
pub use processor::KannadaProcessor;
pub use resolver::KannadaResolver;
pub use romanize::KannadaRomanizer;
pub use similarity::similarity;
pub use stemmer::KannadaStemmer;
pub use translator::{LibreTranslator, MyMemoryTranslator, build_translator};

/// Stem a token with the default rule table
pub fn stem(token: &str) -> StemResult {
    KannadaStemmer::new().stem(token)
}

/// Romanize a token in the default learner style
pub fn romanize(token: &str) -> String {
    KannadaRomanizer::default().romanize(token)
}

/// Split a token into root and suffix components
pub fn decompose(token: &str) -> CompoundAnalysis {
    CompoundDecomposer::default().decompose(token)
}
