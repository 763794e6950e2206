//! Capability availability poller.
//!
//! Activated when legacy reconversion was requested while the capability was
//! absent. Polls the backend until the capability turns up, then enables the
//! flag through the constraint engine, persists, signals success once and
//! stops. Deactivation is unconditional: the cancellation token also guards
//! the in-flight check, so a stale result can never be applied after the
//! gate is closed.

use std::sync::Arc;
use std::time::Duration;

use tokio::sync::mpsc;
use tokio_util::sync::CancellationToken;
use tracing::{debug, error, info, warn};

use ck_core::ports::{CapabilityPort, SettingsPort};
use ck_core::settings::{ApplyOutcome, ConstraintEngine, SettingChange, Settings};

/// Fixed polling cadence. The first check fires immediately on activation.
pub const POLL_INTERVAL: Duration = Duration::from_secs(1);

/// Emitted exactly once when the capability turned up and the legacy flag
/// was enabled.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CapabilityEnabled {
    pub settings: Settings,
}

pub struct AvailabilityPoller {
    settings: Arc<dyn SettingsPort>,
    capability: Arc<dyn CapabilityPort>,
}

/// Handle to a running poll. Dropping it cancels the poll.
pub struct PollerGate {
    token: CancellationToken,
    events: mpsc::Receiver<CapabilityEnabled>,
}

impl AvailabilityPoller {
    pub fn new(settings: Arc<dyn SettingsPort>, capability: Arc<dyn CapabilityPort>) -> Self {
        Self {
            settings,
            capability,
        }
    }

    /// Start polling against a snapshot of the current settings.
    pub fn activate(&self, snapshot: Settings) -> PollerGate {
        let token = CancellationToken::new();
        let (tx, events) = mpsc::channel(1);
        let settings = Arc::clone(&self.settings);
        let capability = Arc::clone(&self.capability);
        let task_token = token.clone();

        tokio::spawn(async move {
            let mut ticker = tokio::time::interval(POLL_INTERVAL);
            loop {
                tokio::select! {
                    _ = task_token.cancelled() => {
                        debug!("availability poll cancelled");
                        return;
                    }
                    _ = ticker.tick() => {}
                }

                // The in-flight check races against cancellation too, so a
                // late result is dropped instead of applied.
                let available = tokio::select! {
                    _ = task_token.cancelled() => {
                        debug!("availability poll cancelled mid-check");
                        return;
                    }
                    result = capability.is_available() => match result {
                        Ok(available) => available,
                        Err(e) => {
                            warn!("capability check failed, will retry: {e:#}");
                            false
                        }
                    }
                };
                if !available {
                    continue;
                }

                let ApplyOutcome::Applied(next) = ConstraintEngine::apply(
                    &snapshot,
                    SettingChange::LegacyReconvert(true),
                    true,
                ) else {
                    return;
                };
                if let Err(e) = settings.save(&next).await {
                    // The optimistic value still stands; only the status
                    // indicator reports the persistence problem.
                    error!("failed to persist settings after capability came up: {e:#}");
                }
                info!("capability available, legacy reconversion enabled");
                let _ = tx.send(CapabilityEnabled { settings: next }).await;
                return;
            }
        });

        PollerGate { token, events }
    }
}

impl PollerGate {
    /// Stop polling. Safe to call any number of times, including while a
    /// check is in flight.
    pub fn deactivate(&self) {
        self.token.cancel();
    }

    /// Wait for the success signal. Returns `None` once the gate was
    /// deactivated without the capability turning up.
    pub async fn enabled(&mut self) -> Option<CapabilityEnabled> {
        self.events.recv().await
    }
}

impl Drop for PollerGate {
    fn drop(&mut self) {
        self.token.cancel();
    }
}
