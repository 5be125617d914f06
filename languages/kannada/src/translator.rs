use std::time::Duration;

use async_trait::async_trait;
use nudi_config::translator::TranslatorConfig;
use nudi_translator::{
    FallbackChain, LanguageCode, ProviderMetadata, TranslateError, Translation, Translator,
    usable_translation,
};
use serde::Deserialize;
use serde_json::json;

/// MyMemory reports no match score for some pairs
const MYMEMORY_DEFAULT_CONFIDENCE: f32 = 0.7;
const LIBRETRANSLATE_CONFIDENCE: f32 = 0.6;

fn check_status(response: &reqwest::Response) -> Result<(), TranslateError> {
    let status = response.status();
    if status == 429 {
        return Err(TranslateError::RateLimitExceeded);
    }
    if status == 401 || status == 403 {
        return Err(TranslateError::AuthenticationError);
    }
    if !status.is_success() {
        return Err(TranslateError::ApiError(format!("HTTP {}", status)));
    }
    Ok(())
}

fn kannada_pairs() -> Vec<(LanguageCode, LanguageCode)> {
    vec![
        ("kn".to_string(), "en".to_string()),
        ("en".to_string(), "kn".to_string()),
    ]
}

#[derive(Debug, Deserialize)]
struct MyMemoryResponse {
    #[serde(rename = "responseData")]
    response_data: Option<MyMemoryData>,
}

#[derive(Debug, Deserialize)]
struct MyMemoryData {
    #[serde(rename = "translatedText")]
    translated_text: Option<String>,
    #[serde(rename = "match")]
    score: Option<f32>,
}

/// Free MyMemory translation API
#[derive(Clone)]
pub struct MyMemoryTranslator {
    client: reqwest::Client,
    api_url: String,
    request_timeout: Duration,
}

impl MyMemoryTranslator {
    pub fn new(api_url: String, request_timeout: Duration) -> Self {
        Self {
            client: reqwest::Client::new(),
            api_url,
            request_timeout,
        }
    }

    fn parse(
        text: &str,
        body: MyMemoryResponse,
        from: LanguageCode,
        to: LanguageCode,
    ) -> Result<Translation, TranslateError> {
        let data = body
            .response_data
            .ok_or_else(|| TranslateError::ApiError("No responseData in response".to_string()))?;
        let translated = data.translated_text.unwrap_or_default();

        if !usable_translation(text, &translated) {
            return Err(TranslateError::NotAvailable(format!(
                "MyMemory returned no translation for '{}'",
                text
            )));
        }

        Ok(Translation {
            text: translated.trim().to_string(),
            from,
            to,
            provider: "MyMemory API".to_string(),
            source_type: "mymemory".to_string(),
            confidence: Some(data.score.unwrap_or(MYMEMORY_DEFAULT_CONFIDENCE).clamp(0.0, 1.0)),
            alternatives: vec![],
        })
    }
}

#[async_trait]
impl Translator for MyMemoryTranslator {
    async fn translate(
        &self,
        text: &str,
        from: LanguageCode,
        to: LanguageCode,
    ) -> Result<Translation, TranslateError> {
        let langpair = format!("{}|{}", from, to);

        let response = self
            .client
            .get(&self.api_url)
            .query(&[("q", text), ("langpair", langpair.as_str())])
            .timeout(self.request_timeout)
            .send()
            .await?;
        check_status(&response)?;

        let body: MyMemoryResponse = response.json().await.map_err(|e| {
            TranslateError::ApiError(format!("Failed to parse response: {}", e))
        })?;

        Self::parse(text, body, from, to)
    }

    fn supported_languages(&self) -> Vec<(LanguageCode, LanguageCode)> {
        kannada_pairs()
    }

    fn metadata(&self) -> ProviderMetadata {
        ProviderMetadata {
            name: "MyMemory".to_string(),
            requires_api_key: false,
            free_tier_available: true,
        }
    }
}

#[derive(Debug, Deserialize)]
struct LibreTranslateResponse {
    #[serde(rename = "translatedText")]
    translated_text: Option<String>,
}

/// Public LibreTranslate instance
#[derive(Clone)]
pub struct LibreTranslator {
    client: reqwest::Client,
    api_url: String,
    request_timeout: Duration,
}

impl LibreTranslator {
    pub fn new(api_url: String, request_timeout: Duration) -> Self {
        Self {
            client: reqwest::Client::new(),
            api_url,
            request_timeout,
        }
    }

    fn parse(
        text: &str,
        body: LibreTranslateResponse,
        from: LanguageCode,
        to: LanguageCode,
    ) -> Result<Translation, TranslateError> {
        let translated = body.translated_text.unwrap_or_default();
        if !usable_translation(text, &translated) {
            return Err(TranslateError::NotAvailable(format!(
                "LibreTranslate returned no translation for '{}'",
                text
            )));
        }

        Ok(Translation {
            text: translated.trim().to_string(),
            from,
            to,
            provider: "LibreTranslate".to_string(),
            source_type: "libretranslate".to_string(),
            confidence: Some(LIBRETRANSLATE_CONFIDENCE),
            alternatives: vec![],
        })
    }
}

#[async_trait]
impl Translator for LibreTranslator {
    async fn translate(
        &self,
        text: &str,
        from: LanguageCode,
        to: LanguageCode,
    ) -> Result<Translation, TranslateError> {
        let payload = json!({
            "q": text,
            "source": from,
            "target": to,
            "format": "text",
        });

        let response = self
            .client
            .post(&self.api_url)
            .json(&payload)
            .timeout(self.request_timeout)
            .send()
            .await?;
        check_status(&response)?;

        let body: LibreTranslateResponse = response.json().await.map_err(|e| {
            TranslateError::ApiError(format!("Failed to parse response: {}", e))
        })?;

        Self::parse(text, body, from, to)
    }

    fn supported_languages(&self) -> Vec<(LanguageCode, LanguageCode)> {
        kannada_pairs()
    }

    fn metadata(&self) -> ProviderMetadata {
        ProviderMetadata {
            name: "LibreTranslate".to_string(),
            requires_api_key: false,
            free_tier_available: true,
        }
    }
}

/// Build the provider chain named in the configuration.
///
/// Returns `None` when translation is disabled or no known provider is listed.
pub fn build_translator(config: &TranslatorConfig) -> Option<Box<dyn Translator>> {
    if !config.enabled {
        tracing::info!("Translation fallback disabled");
        return None;
    }

    let request_timeout = Duration::from_millis(config.provider_timeout_ms);
    let mut chain = FallbackChain::new(request_timeout);

    for name in &config.providers {
        chain = match name.trim().to_lowercase().as_str() {
            "mymemory" => chain.with_provider(Box::new(MyMemoryTranslator::new(
                config.mymemory_url.clone(),
                request_timeout,
            ))),
            "libretranslate" => chain.with_provider(Box::new(LibreTranslator::new(
                config.libretranslate_url.clone(),
                request_timeout,
            ))),
            other => {
                tracing::warn!("Unknown translation provider '{}', skipping", other);
                chain
            }
        };
    }

    if chain.is_empty() {
        tracing::warn!("No translation providers configured");
        return None;
    }

    tracing::info!("Translation fallback: {}", chain.metadata().name);
    Some(Box::new(chain))
}
