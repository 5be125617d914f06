use serde::{Deserialize, Serialize};

fn default_enabled() -> bool {
    true
}

fn default_providers() -> Vec<String> {
    vec!["mymemory".to_string(), "libretranslate".to_string()]
}

fn default_from_lang() -> String {
    "kn".to_string()
}

fn default_to_lang() -> String {
    "en".to_string()
}

fn default_mymemory_url() -> String {
    "https://api.mymemory.translated.net/get".to_string()
}

fn default_libretranslate_url() -> String {
    "https://libretranslate.de/translate".to_string()
}

fn default_timeout_ms() -> u64 {
    15000
}

fn default_provider_timeout_ms() -> u64 {
    8000
}

#[derive(Debug, Serialize, Deserialize, Clone)]
#[serde(default)]
pub struct TranslatorConfig {
    #[serde(default = "default_enabled")]
    pub enabled: bool,
    /// Tried in order until one returns a usable translation
    #[serde(default = "default_providers")]
    pub providers: Vec<String>,
    #[serde(default = "default_from_lang")]
    pub from_lang: String,
    #[serde(default = "default_to_lang")]
    pub to_lang: String,
    #[serde(default = "default_mymemory_url")]
    pub mymemory_url: String,
    #[serde(default = "default_libretranslate_url")]
    pub libretranslate_url: String,
    /// Bound on the whole fallback stage
    #[serde(default = "default_timeout_ms")]
    pub timeout_ms: u64,
    /// Bound on a single provider request
    #[serde(default = "default_provider_timeout_ms")]
    pub provider_timeout_ms: u64,
}

impl Default for TranslatorConfig {
    fn default() -> Self {
        Self {
            enabled: default_enabled(),
            providers: default_providers(),
            from_lang: default_from_lang(),
            to_lang: default_to_lang(),
            mymemory_url: default_mymemory_url(),
            libretranslate_url: default_libretranslate_url(),
            timeout_ms: default_timeout_ms(),
            provider_timeout_ms: default_provider_timeout_ms(),
        }
    }
}
