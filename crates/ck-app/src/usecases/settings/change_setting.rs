//! Use case for applying one settings field change.

use std::sync::Arc;

use tracing::{error, warn};

use ck_core::ports::{CapabilityPort, SettingsPort};
use ck_core::settings::{ApplyOutcome, ConstraintEngine, SettingChange, Settings};

/// Outcome reported back to the presentation layer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ChangeOutcome {
    /// The change was accepted. `persisted` is false when the save failed;
    /// the settings value still reflects the user's intent and the failure
    /// only surfaces through the status indicator.
    Applied { settings: Settings, persisted: bool },
    /// Legacy reconversion was requested while the capability is absent.
    /// Nothing changed; the caller should activate the availability poller.
    CapabilityRequired,
}

/// Runs every field change through the constraint engine and persists the
/// result. Saves are awaited one at a time, so overlapping requests resolve
/// last-write-wins with no client-side merge state.
pub struct ChangeSetting {
    settings: Arc<dyn SettingsPort>,
    capability: Arc<dyn CapabilityPort>,
}

impl ChangeSetting {
    pub fn new(settings: Arc<dyn SettingsPort>, capability: Arc<dyn CapabilityPort>) -> Self {
        Self {
            settings,
            capability,
        }
    }

    pub async fn execute(&self, current: &Settings, change: SettingChange) -> ChangeOutcome {
        // The capability is only consulted at the moment legacy reconversion
        // is being enabled. A failed check counts as absent.
        let capability_present = match &change {
            SettingChange::LegacyReconvert(true) => {
                match self.capability.is_available().await {
                    Ok(present) => present,
                    Err(e) => {
                        warn!("capability check failed, treating as absent: {e:#}");
                        false
                    }
                }
            }
            _ => false,
        };

        match ConstraintEngine::apply(current, change, capability_present) {
            ApplyOutcome::CapabilityRequired => ChangeOutcome::CapabilityRequired,
            ApplyOutcome::Applied(next) => {
                let persisted = match self.settings.save(&next).await {
                    Ok(()) => true,
                    Err(e) => {
                        error!("failed to persist settings: {e:#}");
                        false
                    }
                };
                ChangeOutcome::Applied {
                    settings: next,
                    persisted,
                }
            }
        }
    }
}
