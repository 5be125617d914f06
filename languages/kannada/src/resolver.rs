use std::future::Future;
use std::sync::Arc;
use std::time::Duration;

use nudi_config::Config;
use nudi_config::resolver::ResolverConfig;
use nudi_core::dictionary::{DictionaryEntry, DictionaryStore, LoadError, SearchOptions};
use nudi_core::error::{ResolveError, StoreError};
use nudi_core::preprocess::{DefaultPreprocessor, Preprocessor};
use nudi_core::types::{
    ExactMatch, FallbackTranslation, LookupResult, ProgressiveMatch, ResolvedEntry, StemMatch,
    Suggestion, SuggestionList,
};
use nudi_translator::{TranslateError, Translator};
use tokio::task::JoinSet;
use tokio::time::timeout;

use crate::romanize::{KannadaRomanizer, is_combining_mark};
use crate::similarity;
use crate::stemmer::KannadaStemmer;

/// Resolves a clicked or typed token to the most plausible dictionary entry.
///
/// Stages run in order: exact lookup, stemmed lookup, progressive prefix
/// lookup, ranked suggestions and finally the translation fallback. Every
/// store and translator call is bounded by a timeout, and every failure is
/// turned into a `LookupResult`, so `resolve` always returns something
/// renderable.
pub struct KannadaResolver {
    store: Box<dyn DictionaryStore>,
    translator: Option<Box<dyn Translator>>,
    stemmer: KannadaStemmer,
    romanizer: KannadaRomanizer,
    config: ResolverConfig,
    lookup_timeout: Duration,
    translate_timeout: Duration,
    from_lang: String,
    to_lang: String,
}

impl KannadaResolver {
    pub fn new(store: Box<dyn DictionaryStore>) -> Self {
        Self::from_config(store, None, &Config::default())
    }

    pub fn from_config(
        store: Box<dyn DictionaryStore>,
        translator: Option<Box<dyn Translator>>,
        config: &Config,
    ) -> Self {
        Self {
            store,
            translator,
            stemmer: KannadaStemmer::new(),
            romanizer: KannadaRomanizer::new(config.romanization.style),
            config: config.resolver.clone(),
            lookup_timeout: Duration::from_millis(config.dictionary.lookup_timeout_ms),
            translate_timeout: Duration::from_millis(config.translator.timeout_ms),
            from_lang: config.translator.from_lang.clone(),
            to_lang: config.translator.to_lang.clone(),
        }
    }

    pub fn with_translator(mut self, translator: Box<dyn Translator>) -> Self {
        self.translator = Some(translator);
        self
    }

    pub fn with_lookup_timeout(mut self, lookup_timeout: Duration) -> Self {
        self.lookup_timeout = lookup_timeout;
        self
    }

    pub fn with_translate_timeout(mut self, translate_timeout: Duration) -> Self {
        self.translate_timeout = translate_timeout;
        self
    }

    pub fn store(&self) -> &dyn DictionaryStore {
        self.store.as_ref()
    }

    /// Open the underlying store
    pub async fn open(&mut self) -> Result<(), LoadError> {
        self.store.open().await
    }

    pub async fn close(&mut self) {
        self.store.close().await;
    }

    pub async fn resolve(&self, token: &str) -> LookupResult {
        let word = DefaultPreprocessor.process(token);
        if word.is_empty() {
            let err = ResolveError::MalformedInput(format!("'{}' contains no word characters", token));
            tracing::debug!("{}", err);
            return LookupResult::failure(token, &err);
        }

        match self.cascade(&word).await {
            Ok(result) => {
                tracing::debug!("Resolved '{}' as {}", word, result.match_type());
                result
            }
            Err(e) => {
                tracing::error!("Failed to resolve '{}': {}", token, e);
                LookupResult::failure(token, &e)
            }
        }
    }

    /// Resolve every token concurrently. Output order matches input order.
    pub async fn resolve_many<S: AsRef<str>>(self: &Arc<Self>, tokens: &[S]) -> Vec<LookupResult> {
        let mut set = JoinSet::new();
        for (idx, token) in tokens.iter().enumerate() {
            let resolver = Arc::clone(self);
            let token = token.as_ref().to_string();
            set.spawn(async move { (idx, resolver.resolve(&token).await) });
        }

        let mut results: Vec<Option<LookupResult>> = vec![None; tokens.len()];
        while let Some(joined) = set.join_next().await {
            match joined {
                Ok((idx, result)) => results[idx] = Some(result),
                Err(e) => tracing::error!("Resolve task failed: {}", e),
            }
        }

        results
            .into_iter()
            .zip(tokens)
            .map(|(result, token)| {
                result.unwrap_or_else(|| {
                    let err = ResolveError::Internal("resolve task did not complete".to_string());
                    LookupResult::failure(token.as_ref(), &err)
                })
            })
            .collect()
    }

    async fn cascade(&self, word: &str) -> Result<LookupResult, ResolveError> {
        if let Some(entry) = self.lookup(word).await? {
            return Ok(LookupResult::Exact(ExactMatch {
                original_word: word.to_string(),
                resolved: self.resolved(&entry),
            }));
        }

        let stemmed = self.stemmer.stem(word);
        let has_stem = stemmed.is_stemmed(word);

        if has_stem {
            // Runner-up stems get a chance when the best one is not a headword
            for candidate in std::iter::once(&stemmed).chain(stemmed.alternates.iter()) {
                if let Some(entry) = self.lookup(&candidate.stem).await? {
                    return Ok(LookupResult::Stem(StemMatch {
                        original_word: word.to_string(),
                        stem: candidate.stem.clone(),
                        grammatical_info: candidate.grammatical_info.clone(),
                        confidence: candidate.confidence,
                        resolved: self.resolved(&entry),
                    }));
                }
            }
        } else if word.chars().count() < 2 {
            tracing::debug!("{}", ResolveError::InputTooShort(word.to_string()));
        } else {
            tracing::debug!("{}", ResolveError::NoRuleMatch(word.to_string()));
        }

        let base = if has_stem { stemmed.stem.as_str() } else { word };

        if let Some(progressive) = self.progressive(word, base).await? {
            return Ok(progressive);
        }

        let suggestions = self.suggest(base, self.config.max_suggestions).await?;
        if !suggestions.is_empty() {
            return Ok(LookupResult::Suggestions(SuggestionList {
                original_word: word.to_string(),
                query: base.to_string(),
                romanization: self.romanizer.romanize(word),
                suggestions,
            }));
        }

        Ok(self.fallback(word).await)
    }

    /// Try shorter prefixes of `base`, longest first, cut only between
    /// grapheme clusters
    async fn progressive(&self, word: &str, base: &str) -> Result<Option<LookupResult>, ResolveError> {
        let chars: Vec<char> = base.chars().collect();
        let min_len = self.config.progressive_min_prefix.max(1);

        for len in (min_len..chars.len()).rev() {
            if is_combining_mark(chars[len]) {
                continue;
            }

            let prefix: String = chars[..len].iter().collect();
            let Some(entry) = self.lookup(&prefix).await? else {
                continue;
            };

            let remaining = word
                .strip_prefix(prefix.as_str())
                .map(str::to_string)
                .unwrap_or_else(|| chars[len..].iter().collect());

            let mut suggestions = self.suggest(base, self.config.progressive_suggestions + 1).await?;
            suggestions.retain(|s| s.word != entry.headword);
            suggestions.truncate(self.config.progressive_suggestions);

            return Ok(Some(LookupResult::Progressive(ProgressiveMatch {
                original_word: word.to_string(),
                matched: prefix,
                remaining,
                suggestions,
                resolved: self.resolved(&entry),
            })));
        }

        Ok(None)
    }

    /// Rank the store's bounded candidate set against `query`
    async fn suggest(&self, query: &str, limit: usize) -> Result<Vec<Suggestion>, ResolveError> {
        if limit == 0 {
            return Ok(Vec::new());
        }

        let options = SearchOptions {
            length_band: self.config.length_band,
            ..SearchOptions::default()
        };
        let keys = self
            .bounded(self.store.candidate_keys(query, options))
            .await?;

        Ok(similarity::rank(query, keys, limit, self.config.min_similarity))
    }

    async fn fallback(&self, word: &str) -> LookupResult {
        let romanization = self.romanizer.romanize(word);

        let Some(translator) = &self.translator else {
            return LookupResult::Fallback(FallbackTranslation::not_available(word, word, romanization));
        };

        let call = translator.translate(word, self.from_lang.clone(), self.to_lang.clone());
        match timeout(self.translate_timeout, call).await {
            Ok(Ok(translation)) => LookupResult::Fallback(FallbackTranslation {
                original_word: word.to_string(),
                entry: word.to_string(),
                romanization,
                definition: translation.text,
                word_type: "translation".to_string(),
                confidence: translation.confidence.unwrap_or_default(),
                source: translation.provider,
                source_type: translation.source_type,
            }),
            Ok(Err(TranslateError::Timeout(ms))) => {
                tracing::warn!("'{}': {}", word, ResolveError::NetworkTimeout(ms));
                LookupResult::Fallback(FallbackTranslation::not_available(word, word, romanization))
            }
            Ok(Err(e)) => {
                tracing::warn!("Translation failed for '{}': {}", word, e);
                LookupResult::Fallback(FallbackTranslation::not_available(word, word, romanization))
            }
            Err(_) => {
                let err = ResolveError::NetworkTimeout(self.translate_timeout.as_millis() as u64);
                tracing::warn!("'{}': {}", word, err);
                LookupResult::Fallback(FallbackTranslation::not_available(word, word, romanization))
            }
        }
    }

    async fn lookup(&self, word: &str) -> Result<Option<DictionaryEntry>, StoreError> {
        self.bounded(self.store.exact_lookup(word)).await
    }

    async fn bounded<T>(
        &self,
        call: impl Future<Output = Result<T, StoreError>>,
    ) -> Result<T, StoreError> {
        match timeout(self.lookup_timeout, call).await {
            Ok(result) => result,
            Err(_) => Err(StoreError::Timeout(self.lookup_timeout.as_millis() as u64)),
        }
    }

    fn resolved(&self, entry: &DictionaryEntry) -> ResolvedEntry {
        ResolvedEntry::from_entry(entry, self.romanizer.romanize(&entry.headword))
    }
}
