use serde::{Deserialize, Serialize};

fn default_enabled() -> bool {
    true
}

fn default_lookup_timeout_ms() -> u64 {
    2000
}

#[derive(Debug, Serialize, Deserialize, Clone)]
#[serde(default)]
pub struct DictionaryConfig {
    #[serde(default = "default_enabled")]
    pub enabled: bool,
    /// Primary JSON dictionary; the embedded starter list is used when unset
    #[serde(default)]
    pub path: Option<String>,
    /// Merged after the primary dictionary, later files win per headword
    #[serde(default)]
    pub additional_paths: Vec<String>,
    #[serde(default = "default_lookup_timeout_ms")]
    pub lookup_timeout_ms: u64,
}

impl Default for DictionaryConfig {
    fn default() -> Self {
        Self {
            enabled: default_enabled(),
            path: None,
            additional_paths: vec![],
            lookup_timeout_ms: default_lookup_timeout_ms(),
        }
    }
}
