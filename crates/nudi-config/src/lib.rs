use std::env;
use std::path::Path;

use serde::{Deserialize, Serialize};

use self::dictionary::DictionaryConfig;
use self::resolver::ResolverConfig;
use self::romanization::RomanizationConfig;
use self::translator::TranslatorConfig;

pub mod dictionary;
pub mod resolver;
pub mod romanization;
pub mod translator;

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub dictionary: DictionaryConfig,
    pub translator: TranslatorConfig,
    pub resolver: ResolverConfig,
    pub romanization: RomanizationConfig,
}

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Failed to read config: {0}")]
    Io(#[from] std::io::Error),

    #[error("Failed to parse config: {0}")]
    Parse(#[from] serde_json::Error),
}

impl Config {
    /// Defaults with environment overrides applied
    pub fn new() -> Self {
        let mut config = Config::default();
        config.apply_env();
        config
    }

    /// Read a JSON config file, then apply environment overrides
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path)?;
        let mut config: Config = serde_json::from_str(&content)?;
        config.apply_env();
        Ok(config)
    }

    fn apply_env(&mut self) {
        if let Ok(path) = env::var("NUDI_DICTIONARY_PATH") {
            self.dictionary.path = Some(path);
        }

        if let Some(ms) = env_parse("NUDI_LOOKUP_TIMEOUT_MS") {
            self.dictionary.lookup_timeout_ms = ms;
        }

        if let Some(enabled) = env_parse("NUDI_TRANSLATOR_ENABLED") {
            self.translator.enabled = enabled;
        }

        if let Some(ms) = env_parse("NUDI_TRANSLATOR_TIMEOUT_MS") {
            self.translator.timeout_ms = ms;
        }

        if let Ok(providers) = env::var("NUDI_TRANSLATOR_PROVIDERS") {
            self.translator.providers = providers
                .split(',')
                .map(|p| p.trim().to_string())
                .filter(|p| !p.is_empty())
                .collect();
        }

        if let Some(max) = env_parse("NUDI_MAX_SUGGESTIONS") {
            self.resolver.max_suggestions = max;
        }
    }
}

fn env_parse<T: std::str::FromStr>(key: &str) -> Option<T> {
    env::var(key).ok().and_then(|v| v.parse().ok())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_partial_json_fills_defaults() {
        let config: Config =
            serde_json::from_str(r#"{ "resolver": { "max_suggestions": 3 } }"#).unwrap();
        assert_eq!(config.resolver.max_suggestions, 3);
        assert_eq!(config.resolver.progressive_min_prefix, 2);
        assert_eq!(config.translator.from_lang, "kn");
        assert_eq!(config.dictionary.lookup_timeout_ms, 2000);
    }

    #[test]
    fn test_round_trips_through_json() {
        let config = Config::default();
        let json = serde_json::to_string(&config).unwrap();
        let parsed: Config = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed.translator.providers, config.translator.providers);
    }
}
