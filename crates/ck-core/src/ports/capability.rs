use async_trait::async_trait;

/// Live query for the external system precondition behind legacy
/// reconversion. The result is derived per call, never persisted.
#[async_trait]
pub trait CapabilityPort: Send + Sync {
    async fn is_available(&self) -> anyhow::Result<bool>;
}
