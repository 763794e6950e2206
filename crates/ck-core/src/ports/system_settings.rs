use async_trait::async_trait;

#[async_trait]
pub trait SystemSettingsPort: Send + Sync {
    /// Ask the OS to show the settings page where the user performs the
    /// manual change the capability check is waiting on.
    async fn open_capability_settings(&self) -> anyhow::Result<()>;
}
