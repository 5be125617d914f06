use std::time::Duration;

use async_trait::async_trait;
use tokio::time::timeout;

use crate::{LanguageCode, ProviderMetadata, TranslateError, Translation, Translator};

/// Tries each provider in order and returns the first usable translation.
///
/// Every provider call is bounded by `provider_timeout`; a provider that
/// errors or times out is logged and skipped. When the last provider timed
/// out the chain reports `Timeout`, otherwise `NotAvailable`.
pub struct FallbackChain {
    providers: Vec<Box<dyn Translator>>,
    provider_timeout: Duration,
}

impl FallbackChain {
    pub fn new(provider_timeout: Duration) -> Self {
        Self {
            providers: Vec::new(),
            provider_timeout,
        }
    }

    pub fn with_provider(mut self, provider: Box<dyn Translator>) -> Self {
        self.providers.push(provider);
        self
    }

    pub fn len(&self) -> usize {
        self.providers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.providers.is_empty()
    }
}

#[async_trait]
impl Translator for FallbackChain {
    async fn translate(
        &self,
        text: &str,
        from: LanguageCode,
        to: LanguageCode,
    ) -> Result<Translation, TranslateError> {
        let mut last_timed_out = false;

        for provider in &self.providers {
            let name = provider.metadata().name;
            let call = provider.translate(text, from.clone(), to.clone());

            match timeout(self.provider_timeout, call).await {
                Ok(Ok(translation)) => return Ok(translation),
                Ok(Err(e)) => {
                    last_timed_out = matches!(e, TranslateError::Timeout(_));
                    tracing::warn!("{} failed for '{}': {}", name, text, e);
                }
                Err(_) => {
                    last_timed_out = true;
                    tracing::warn!(
                        "{} timed out after {:?} for '{}'",
                        name,
                        self.provider_timeout,
                        text
                    );
                }
            }
        }

        if last_timed_out {
            return Err(TranslateError::Timeout(self.provider_timeout.as_millis() as u64));
        }

        Err(TranslateError::NotAvailable(format!(
            "all {} providers failed",
            self.providers.len()
        )))
    }

    fn supported_languages(&self) -> Vec<(LanguageCode, LanguageCode)> {
        let mut pairs: Vec<_> = self
            .providers
            .iter()
            .flat_map(|p| p.supported_languages())
            .collect();
        pairs.sort();
        pairs.dedup();
        pairs
    }

    fn metadata(&self) -> ProviderMetadata {
        let names: Vec<_> = self.providers.iter().map(|p| p.metadata().name).collect();
        ProviderMetadata {
            name: format!("Fallback chain ({})", names.join(" → ")),
            requires_api_key: self.providers.iter().any(|p| p.metadata().requires_api_key),
            free_tier_available: self.providers.iter().all(|p| p.metadata().free_tier_available),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct Fixed {
        name: &'static str,
        reply: Option<&'static str>,
        delay: Duration,
    }

    #[async_trait]
    impl Translator for Fixed {
        async fn translate(
            &self,
            text: &str,
            from: LanguageCode,
            to: LanguageCode,
        ) -> Result<Translation, TranslateError> {
            tokio::time::sleep(self.delay).await;
            match self.reply {
                Some(reply) => Ok(Translation {
                    text: reply.to_string(),
                    from,
                    to,
                    provider: self.name.to_string(),
                    source_type: self.name.to_string(),
                    confidence: Some(0.9),
                    alternatives: vec![],
                }),
                None => Err(TranslateError::ApiError(format!("no reply for {}", text))),
            }
        }

        fn supported_languages(&self) -> Vec<(LanguageCode, LanguageCode)> {
            vec![("kn".to_string(), "en".to_string())]
        }

        fn metadata(&self) -> ProviderMetadata {
            ProviderMetadata {
                name: self.name.to_string(),
                requires_api_key: false,
                free_tier_available: true,
            }
        }
    }

    fn fixed(name: &'static str, reply: Option<&'static str>, delay_ms: u64) -> Box<dyn Translator> {
        Box::new(Fixed {
            name,
            reply,
            delay: Duration::from_millis(delay_ms),
        })
    }

    #[tokio::test]
    async fn test_first_failure_falls_through_to_next_provider() {
        let chain = FallbackChain::new(Duration::from_millis(500))
            .with_provider(fixed("first", None, 0))
            .with_provider(fixed("second", Some("house"), 0));

        let translation = chain
            .translate("ಮನೆ", "kn".to_string(), "en".to_string())
            .await
            .unwrap();
        assert_eq!(translation.text, "house");
        assert_eq!(translation.provider, "second");
    }

    #[tokio::test]
    async fn test_slow_provider_is_skipped() {
        let chain = FallbackChain::new(Duration::from_millis(20))
            .with_provider(fixed("slow", Some("late"), 1000))
            .with_provider(fixed("fast", Some("house"), 0));

        let translation = chain
            .translate("ಮನೆ", "kn".to_string(), "en".to_string())
            .await
            .unwrap();
        assert_eq!(translation.provider, "fast");
    }

    #[tokio::test]
    async fn test_all_failing_is_not_available() {
        let chain = FallbackChain::new(Duration::from_millis(50)).with_provider(fixed("only", None, 0));
        let err = chain
            .translate("ಮನೆ", "kn".to_string(), "en".to_string())
            .await
            .unwrap_err();
        assert!(matches!(err, TranslateError::NotAvailable(_)));
    }

    #[tokio::test]
    async fn test_last_provider_timing_out_is_timeout() {
        let chain = FallbackChain::new(Duration::from_millis(20))
            .with_provider(fixed("failing", None, 0))
            .with_provider(fixed("slow", Some("late"), 1000));

        let err = chain
            .translate("ಮನೆ", "kn".to_string(), "en".to_string())
            .await
            .unwrap_err();
        assert!(matches!(err, TranslateError::Timeout(20)));
    }

    #[tokio::test]
    async fn test_failure_after_timeout_is_not_available() {
        let chain = FallbackChain::new(Duration::from_millis(20))
            .with_provider(fixed("slow", Some("late"), 1000))
            .with_provider(fixed("failing", None, 0));

        let err = chain
            .translate("ಮನೆ", "kn".to_string(), "en".to_string())
            .await
            .unwrap_err();
        assert!(matches!(err, TranslateError::NotAvailable(_)));
    }

    #[test]
    fn test_supported_languages_deduplicated() {
        let chain = FallbackChain::new(Duration::from_millis(50))
            .with_provider(fixed("a", None, 0))
            .with_provider(fixed("b", None, 0));
        assert_eq!(chain.supported_languages().len(), 1);
        assert_eq!(chain.len(), 2);
    }
}
