//! Update pipeline status.

use super::UpdateInfo;

/// Observable state of the update pipeline.
///
/// `NotAvailable` and `Error` are transient: the controller returns them to
/// `Idle` after a display delay. `Downloading` runs to `Finished`/`Error`
/// with no user-facing cancellation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum UpdateStatus {
    Idle,
    Checking,
    NotAvailable,
    Available(UpdateInfo),
    Downloading { percent: u8 },
    Error(String),
}

impl UpdateStatus {
    /// Whether this status auto-clears back to `Idle` after the display delay.
    pub fn is_transient(&self) -> bool {
        matches!(self, UpdateStatus::NotAvailable | UpdateStatus::Error(_))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn only_not_available_and_error_are_transient() {
        assert!(UpdateStatus::NotAvailable.is_transient());
        assert!(UpdateStatus::Error("boom".into()).is_transient());
        assert!(!UpdateStatus::Idle.is_transient());
        assert!(!UpdateStatus::Checking.is_transient());
        assert!(!UpdateStatus::Downloading { percent: 40 }.is_transient());
    }
}
