use async_trait::async_trait;

use crate::dictionary::codec::WireDictionary;

/// The gateway speaks the wire encoding; the persisted layout is entirely
/// its own. The application layer decodes and encodes around every call.
#[async_trait]
pub trait DictionaryPort: Send + Sync {
    async fn load(&self) -> anyhow::Result<WireDictionary>;
    async fn save(&self, dictionary: &WireDictionary) -> anyhow::Result<()>;
}
