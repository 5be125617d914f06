use serde::Serialize;

pub mod chain;

pub use chain::FallbackChain;

pub type LanguageCode = String;

/// Translation provider interface
#[async_trait::async_trait]
pub trait Translator: Send + Sync {
    /// Translate text from source to target language
    async fn translate(
        &self,
        text: &str,
        from: LanguageCode,
        to: LanguageCode,
    ) -> Result<Translation, TranslateError>;

    /// Get supported language pairs
    fn supported_languages(&self) -> Vec<(LanguageCode, LanguageCode)>;

    /// Provider metadata
    fn metadata(&self) -> ProviderMetadata;
}

#[derive(Debug, Clone, Serialize)]
pub struct Translation {
    pub text: String,
    pub from: LanguageCode,
    pub to: LanguageCode,
    /// Human-readable provider name
    pub provider: String,
    /// Short machine tag for the provider ("mymemory", "libretranslate", ...)
    pub source_type: String,
    pub confidence: Option<f32>,
    pub alternatives: Vec<String>,
}

#[derive(Debug, Clone)]
pub struct ProviderMetadata {
    pub name: String,
    pub requires_api_key: bool,
    pub free_tier_available: bool,
}

#[derive(Debug, thiserror::Error)]
pub enum TranslateError {
    #[error("API error: {0}")]
    ApiError(String),

    #[error("Network error: {0}")]
    NetworkError(#[from] reqwest::Error),

    #[error("Rate limit exceeded")]
    RateLimitExceeded,

    #[error("Authentication error")]
    AuthenticationError,

    #[error("Timed out after {0} ms")]
    Timeout(u64),

    #[error("No usable translation: {0}")]
    NotAvailable(String),
}

/// Reject provider output that merely echoes the input or is a null placeholder
pub fn usable_translation(input: &str, translated: &str) -> bool {
    let translated = translated.trim();
    !translated.is_empty() && translated != input && !translated.eq_ignore_ascii_case("null")
}
