pub mod progress;
pub mod state;

pub use progress::{DownloadEvent, DownloadProgress};
pub use state::UpdateStatus;

use serde::{Deserialize, Serialize};

/// Result of a successful update check. Transient, never persisted.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UpdateInfo {
    pub version: String,
    pub date: Option<String>,
    pub notes: Option<String>,
}
