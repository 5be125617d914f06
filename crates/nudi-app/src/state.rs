use std::path::{Path, PathBuf};
use std::sync::Arc;

use nudi_config::Config;
use nudi_core::dictionary::{DictionaryMetadata, DictionaryStore, LoadError};
use nudi_lang_kannada::{
    DictionarySource, DictionaryStats, KannadaDictionary, KannadaDictionaryLoader, KannadaProcessor,
    KannadaResolver, build_translator,
};

pub struct AppState {
    pub processor: KannadaProcessor,
    pub resolver: Arc<KannadaResolver>,
    pub stats: DictionaryStats,
    pub metadata: DictionaryMetadata,
}

impl AppState {
    pub async fn new(config: Config) -> Result<Self, LoadError> {
        let dictionary = open_dictionary(&config).await?;
        let stats = dictionary.stats();
        let metadata = dictionary.metadata();

        let translator = build_translator(&config.translator);
        let resolver = KannadaResolver::from_config(Box::new(dictionary), translator, &config);

        Ok(Self {
            processor: KannadaProcessor::new(config.romanization.style),
            resolver: Arc::new(resolver),
            stats,
            metadata,
        })
    }
}

async fn open_dictionary(config: &Config) -> Result<KannadaDictionary, LoadError> {
    let dict_config = &config.dictionary;
    if !dict_config.enabled {
        tracing::warn!("Dictionary disabled, every lookup will fall through to translation");
        return Ok(KannadaDictionary::from_entries(Vec::new()));
    }

    let additional: Vec<PathBuf> = dict_config.additional_paths.iter().map(PathBuf::from).collect();

    let Some(path) = &dict_config.path else {
        let mut dict = KannadaDictionary::with_defaults()?;
        for path in &additional {
            match KannadaDictionaryLoader::load_from_file(path).await {
                Ok(extra) => dict = KannadaDictionaryLoader::merge(dict, extra),
                Err(e) => tracing::warn!("Failed to load dictionary from {}: {}", path.display(), e),
            }
        }
        tracing::info!("Using embedded starter dictionary ({} entries)", dict.entry_count());
        return Ok(dict);
    };

    let mut paths = vec![Path::new(path).to_path_buf()];
    paths.extend(additional);

    let mut dict = KannadaDictionary::new(DictionarySource::Files(paths));
    dict.open().await?;
    Ok(dict)
}
