//! Use case for loading the dictionary.

use std::sync::Arc;

use anyhow::Result;
use tracing::info;

use ck_core::dictionary::{codec, DictionaryEntry};
use ck_core::ports::DictionaryPort;

/// Loads the full dictionary from the persistence gateway and decodes it
/// into domain entries. Entries without a persisted priority receive their
/// list index.
pub struct LoadDictionary {
    dictionary: Arc<dyn DictionaryPort>,
}

impl LoadDictionary {
    pub fn new(dictionary: Arc<dyn DictionaryPort>) -> Self {
        Self { dictionary }
    }

    pub async fn execute(&self) -> Result<Vec<DictionaryEntry>> {
        let wire = self.dictionary.load().await?;
        let entries = codec::decode(&wire)?;
        info!("dictionary loaded with {} entries", entries.len());
        Ok(entries)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ck_core::dictionary::{ConversionMethod, WireDictionary};

    struct MockDictionaryPort {
        wire: WireDictionary,
    }

    #[async_trait::async_trait]
    impl DictionaryPort for MockDictionaryPort {
        async fn load(&self) -> anyhow::Result<WireDictionary> {
            Ok(self.wire.clone())
        }

        async fn save(&self, _dictionary: &WireDictionary) -> anyhow::Result<()> {
            Ok(())
        }
    }

    #[tokio::test]
    async fn decodes_legacy_priorities_from_list_position() {
        let wire: WireDictionary = serde_json::from_value(serde_json::json!({
            "entries": [
                { "input": "a", "method": "None" },
                { "input": "b", "method": { "Converter": "k" } }
            ]
        }))
        .unwrap();
        let use_case = LoadDictionary::new(Arc::new(MockDictionaryPort { wire }));

        let entries = use_case.execute().await.unwrap();

        assert_eq!(entries[0].priority, 0);
        assert_eq!(entries[1].priority, 1);
        assert_eq!(entries[1].method, ConversionMethod::Converter("k".into()));
    }

    #[tokio::test]
    async fn malformed_wire_data_is_an_error() {
        let wire: WireDictionary = serde_json::from_value(serde_json::json!({
            "entries": [{ "input": "a", "method": "Replace" }]
        }))
        .unwrap();
        let use_case = LoadDictionary::new(Arc::new(MockDictionaryPort { wire }));

        assert!(use_case.execute().await.is_err());
    }
}
