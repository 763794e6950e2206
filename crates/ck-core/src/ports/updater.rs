use async_trait::async_trait;
use tokio::sync::mpsc;

use crate::update::{DownloadEvent, UpdateInfo};

#[async_trait]
pub trait UpdaterPort: Send + Sync {
    /// Query the backend for a newer version. `None` means up to date.
    async fn check(&self) -> anyhow::Result<Option<UpdateInfo>>;

    /// Download and stage the update, pushing progress sub-events into
    /// `events` in emission order. The sender is dropped when the download
    /// ends, closing the channel.
    async fn download(&self, events: mpsc::Sender<DownloadEvent>) -> anyhow::Result<()>;

    /// Restart the application into the staged update. Does not return on
    /// success.
    async fn relaunch(&self) -> anyhow::Result<()>;
}
