use std::path::{Path, PathBuf};

use nudi_core::dictionary::LoadError;

use crate::dictionary::KannadaDictionary;

pub struct KannadaDictionaryLoader;

impl KannadaDictionaryLoader {
    /// Load embedded starter word list
    pub fn load_embedded() -> Result<KannadaDictionary, LoadError> {
        let json = include_str!("../data/starter.json");
        tracing::debug!("Loading embedded starter dictionary...");
        KannadaDictionary::from_json(json)
    }

    /// Load dictionary from file path
    pub async fn load_from_file(path: &Path) -> Result<KannadaDictionary, LoadError> {
        tracing::info!("Loading dictionary from file: {}", path.display());
        let json = match tokio::fs::read_to_string(path).await {
            Ok(json) => json,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                return Err(LoadError::FileNotFound(path.display().to_string()));
            }
            Err(e) => return Err(e.into()),
        };

        let dict = KannadaDictionary::from_json(&json)
            .map_err(|e| LoadError::InvalidFormat(format!("{}: {}", path.display(), e)))?;
        tracing::info!("Loaded {} dictionary entries from file", dict.entry_count());
        Ok(dict)
    }

    /// Load the first path and merge the rest over it in order
    pub async fn load_files(paths: &[PathBuf]) -> Result<KannadaDictionary, LoadError> {
        let Some((primary, additional)) = paths.split_first() else {
            return Err(LoadError::FileNotFound("no dictionary path configured".to_string()));
        };

        let mut dict = Self::load_from_file(primary).await?;
        for path in additional {
            match Self::load_from_file(path).await {
                Ok(extra) => dict = Self::merge(dict, extra),
                // A broken supplement should not take the main dictionary down
                Err(e) => tracing::warn!("Skipping additional dictionary {}: {}", path.display(), e),
            }
        }
        Ok(dict)
    }

    /// Merge two dictionaries (later entries override earlier ones by headword)
    pub fn merge(base: KannadaDictionary, additional: KannadaDictionary) -> KannadaDictionary {
        base.merge(additional)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use nudi_core::dictionary::DictionaryStore;

    fn temp_path(name: &str) -> PathBuf {
        std::env::temp_dir().join(format!("nudi-loader-{}-{}", std::process::id(), name))
    }

    #[test]
    fn test_embedded_has_starter_words() {
        let dict = KannadaDictionaryLoader::load_embedded().unwrap();
        assert_eq!(dict.entry_count(), 21);
    }

    #[tokio::test]
    async fn test_missing_file() {
        let err = KannadaDictionaryLoader::load_from_file(&temp_path("missing.json"))
            .await
            .unwrap_err();
        assert!(matches!(err, LoadError::FileNotFound(_)));
    }

    #[tokio::test]
    async fn test_additional_files_merge_and_bad_ones_are_skipped() {
        let primary = temp_path("primary.json");
        let extra = temp_path("extra.json");
        let broken = temp_path("broken.json");
        tokio::fs::write(
            &primary,
            r#"[{"entry": "ಮನೆ", "phone": "mane", "defs": [{"entry": "House", "type": "noun"}]}]"#,
        )
        .await
        .unwrap();
        tokio::fs::write(
            &extra,
            r#"[{"entry": "ಮನೆ", "defs": [{"entry": "Home", "type": "noun"}]},
                {"entry": "ನೀರು", "defs": [{"entry": "Water", "type": "noun"}]}]"#,
        )
        .await
        .unwrap();
        tokio::fs::write(&broken, "not json").await.unwrap();

        let dict = KannadaDictionaryLoader::load_files(&[primary.clone(), broken.clone(), extra.clone()])
            .await
            .unwrap();
        assert_eq!(dict.entry_count(), 2);
        let home = dict.exact_lookup("ಮನೆ").await.unwrap().unwrap();
        assert_eq!(home.definitions[0].text, "Home");

        for path in [primary, extra, broken] {
            let _ = tokio::fs::remove_file(path).await;
        }
    }

    #[tokio::test]
    async fn test_broken_primary_is_invalid_format() {
        let path = temp_path("invalid.json");
        tokio::fs::write(&path, "[{").await.unwrap();
        let err = KannadaDictionaryLoader::load_files(std::slice::from_ref(&path))
            .await
            .unwrap_err();
        assert!(matches!(err, LoadError::InvalidFormat(_)));
        let _ = tokio::fs::remove_file(path).await;
    }
}
