//! Use case for loading the settings object at startup.

use std::sync::Arc;

use anyhow::Result;
use tracing::{info, info_span, Instrument};

use ck_core::ports::SettingsPort;
use ck_core::settings::Settings;

/// Loads the current settings from the persistence gateway.
///
/// Runs once at startup; afterwards the in-memory value is mutated
/// field-by-field through [`super::ChangeSetting`].
pub struct LoadSettings {
    settings: Arc<dyn SettingsPort>,
}

impl LoadSettings {
    pub fn new(settings: Arc<dyn SettingsPort>) -> Self {
        Self { settings }
    }

    pub async fn execute(&self) -> Result<Settings> {
        let span = info_span!("usecase.load_settings.execute");

        async {
            let settings = self.settings.load().await?;
            info!("settings loaded");
            Ok(settings)
        }
        .instrument(span)
        .await
    }
}
