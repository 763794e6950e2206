//! Software update controller.
//!
//! Drives the check/download/install pipeline against the updater port and
//! publishes its state through a watch channel. The UI only observes the
//! channel; nothing here feeds back into the settings object.

use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;
use std::time::Duration;

use tokio::sync::{mpsc, watch};
use tokio::task::JoinHandle;
use tracing::{error, info};

use ck_core::ports::UpdaterPort;
use ck_core::update::{DownloadEvent, DownloadProgress, UpdateStatus};

/// How long `NotAvailable`/`Error` stay visible before returning to `Idle`.
pub const NOTICE_CLEAR_DELAY: Duration = Duration::from_secs(3);

/// Delay before the automatic check after process start.
pub const STARTUP_CHECK_DELAY: Duration = Duration::from_secs(5);

const DOWNLOAD_EVENT_BUFFER: usize = 64;

pub struct UpdateController {
    updater: Arc<dyn UpdaterPort>,
    status: watch::Sender<UpdateStatus>,
    // Bumped on every publish; a scheduled clear only fires when no status
    // has been published since it was armed. Equality on the status value is
    // not enough: two identical transient notices in a row must each get the
    // full display delay.
    epoch: Arc<AtomicU64>,
}

impl UpdateController {
    pub fn new(updater: Arc<dyn UpdaterPort>) -> Self {
        let (status, _) = watch::channel(UpdateStatus::Idle);
        Self {
            updater,
            status,
            epoch: Arc::new(AtomicU64::new(0)),
        }
    }

    /// Observe the pipeline state.
    pub fn subscribe(&self) -> watch::Receiver<UpdateStatus> {
        self.status.subscribe()
    }

    pub fn status(&self) -> UpdateStatus {
        self.status.borrow().clone()
    }

    /// Query the backend for a newer version. The result stays visible in
    /// the status channel; transient outcomes clear back to `Idle` after
    /// [`NOTICE_CLEAR_DELAY`]. No automatic retry on failure.
    pub async fn check_for_updates(&self) -> UpdateStatus {
        self.publish(UpdateStatus::Checking);
        let next = match self.updater.check().await {
            Ok(Some(info)) => {
                info!(version = %info.version, "update available");
                UpdateStatus::Available(info)
            }
            Ok(None) => UpdateStatus::NotAvailable,
            Err(e) => {
                error!("update check failed: {e:#}");
                UpdateStatus::Error(format!("update check failed: {e}"))
            }
        };
        self.publish(next.clone());
        self.schedule_clear(&next);
        next
    }

    /// Re-confirm the update and drive the download to completion, then
    /// request a relaunch. Once started the download runs to
    /// `Finished`/`Error`; there is no user-facing cancellation.
    pub async fn install_update(&self) -> UpdateStatus {
        self.publish(UpdateStatus::Checking);
        let info = match self.updater.check().await {
            Ok(Some(info)) => info,
            Ok(None) => {
                // the update vanished between check and install
                return self.fail_transient("update is no longer available".into());
            }
            Err(e) => {
                error!("update re-check failed: {e:#}");
                return self.fail_transient(format!("update check failed: {e}"));
            }
        };

        info!(version = %info.version, "starting update download");
        self.publish(UpdateStatus::Downloading { percent: 0 });

        let (tx, mut rx) = mpsc::channel(DOWNLOAD_EVENT_BUFFER);
        // Consume progress events in arrival order while the download runs;
        // the port drops the sender when it finishes, closing the channel.
        let (result, _) = tokio::join!(self.updater.download(tx), async {
            let mut progress = DownloadProgress::new();
            while let Some(event) = rx.recv().await {
                let percent = progress.apply(event);
                self.publish(UpdateStatus::Downloading { percent });
            }
        });

        if let Err(e) = result {
            error!("update download failed: {e:#}");
            return self.fail_transient(format!("update download failed: {e}"));
        }

        info!("update downloaded, requesting relaunch");
        if let Err(e) = self.updater.relaunch().await {
            // No recovery path: the staged update cannot be entered, and the
            // session is left in the error state for good.
            error!("relaunch failed: {e:#}");
            let status = UpdateStatus::Error(format!("relaunch failed: {e}"));
            self.publish(status.clone());
            return status;
        }
        self.status.borrow().clone()
    }

    /// Automatic check once after startup, independent of user action. Its
    /// result only surfaces through the status channel as a dismissible
    /// notice; it never installs anything.
    pub fn spawn_startup_check(self: &Arc<Self>) -> JoinHandle<()> {
        let controller = Arc::clone(self);
        tokio::spawn(async move {
            tokio::time::sleep(STARTUP_CHECK_DELAY).await;
            controller.check_for_updates().await;
        })
    }

    fn fail_transient(&self, message: String) -> UpdateStatus {
        let status = UpdateStatus::Error(message);
        self.publish(status.clone());
        self.schedule_clear(&status);
        status
    }

    fn publish(&self, status: UpdateStatus) {
        self.epoch.fetch_add(1, Ordering::SeqCst);
        self.status.send_replace(status);
    }

    /// Return a transient status to `Idle` after the display delay, unless
    /// anything has been published since it was armed.
    fn schedule_clear(&self, transient: &UpdateStatus) {
        if !transient.is_transient() {
            return;
        }
        let armed_at = self.epoch.load(Ordering::SeqCst);
        let epoch = Arc::clone(&self.epoch);
        let status = self.status.clone();
        tokio::spawn(async move {
            tokio::time::sleep(NOTICE_CLEAR_DELAY).await;
            if epoch
                .compare_exchange(armed_at, armed_at + 1, Ordering::SeqCst, Ordering::SeqCst)
                .is_ok()
            {
                status.send_replace(UpdateStatus::Idle);
            }
        });
    }
}
