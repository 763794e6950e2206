//! Use case for opening the OS page behind the capability gate.

use std::sync::Arc;

use anyhow::Result;
use tracing::info;

use ck_core::ports::SystemSettingsPort;

/// Asks the OS to show the settings page where the user performs the manual
/// change the availability poller is waiting on.
pub struct OpenCapabilitySettings {
    system_settings: Arc<dyn SystemSettingsPort>,
}

impl OpenCapabilitySettings {
    pub fn new(system_settings: Arc<dyn SystemSettingsPort>) -> Self {
        Self { system_settings }
    }

    pub async fn execute(&self) -> Result<()> {
        info!("opening system capability settings");
        self.system_settings.open_capability_settings().await
    }
}
