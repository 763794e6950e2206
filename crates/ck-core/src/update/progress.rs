//! Byte-level download progress.

/// Progress sub-events emitted by the backend while downloading an update.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DownloadEvent {
    Started { total_bytes: u64 },
    Progress { chunk_bytes: u64 },
    Finished,
}

/// Pure accumulator over [`DownloadEvent`]s.
///
/// Percentage is clamped to [0, 100] and monotonically non-decreasing; it
/// stays 0 until a non-zero denominator is known. The total is fixed for the
/// duration of one download: `Started` occurs once, a repeat cannot change
/// the denominator.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct DownloadProgress {
    total_bytes: u64,
    received_bytes: u64,
    percent: u8,
}

impl DownloadProgress {
    pub fn new() -> Self {
        Self::default()
    }

    /// Fold one event in and return the updated percentage.
    pub fn apply(&mut self, event: DownloadEvent) -> u8 {
        match event {
            DownloadEvent::Started { total_bytes } => {
                if self.total_bytes == 0 {
                    self.total_bytes = total_bytes;
                }
            }
            DownloadEvent::Progress { chunk_bytes } => {
                self.received_bytes = self.received_bytes.saturating_add(chunk_bytes);
            }
            DownloadEvent::Finished => {
                self.percent = 100;
                return self.percent;
            }
        }
        let current = if self.total_bytes == 0 {
            0
        } else {
            (self
                .received_bytes
                .saturating_mul(100)
                .checked_div(self.total_bytes)
                .unwrap_or(0))
            .min(100) as u8
        };
        self.percent = self.percent.max(current);
        self.percent
    }

    pub fn percent(&self) -> u8 {
        self.percent
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn reports_the_expected_percentage_sequence() {
        let mut progress = DownloadProgress::new();
        let observed: Vec<u8> = [
            DownloadEvent::Started { total_bytes: 1000 },
            DownloadEvent::Progress { chunk_bytes: 250 },
            DownloadEvent::Progress { chunk_bytes: 250 },
            DownloadEvent::Finished,
        ]
        .into_iter()
        .map(|event| progress.apply(event))
        .collect();
        assert_eq!(observed, vec![0, 25, 50, 100]);
    }

    #[test]
    fn zero_total_reports_zero_until_finished() {
        let mut progress = DownloadProgress::new();
        assert_eq!(progress.apply(DownloadEvent::Started { total_bytes: 0 }), 0);
        assert_eq!(
            progress.apply(DownloadEvent::Progress { chunk_bytes: 4096 }),
            0
        );
        assert_eq!(progress.apply(DownloadEvent::Finished), 100);
    }

    #[test]
    fn percentage_is_clamped_and_monotone() {
        let mut progress = DownloadProgress::new();
        progress.apply(DownloadEvent::Started { total_bytes: 100 });
        assert_eq!(progress.apply(DownloadEvent::Progress { chunk_bytes: 250 }), 100);
        // a late Started cannot move the percentage backwards
        assert_eq!(progress.apply(DownloadEvent::Started { total_bytes: 10_000 }), 100);
    }
}
