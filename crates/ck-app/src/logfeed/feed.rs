//! Append-only log buffer.

use std::sync::{Arc, Mutex};

use tokio::sync::mpsc;
use tokio_util::sync::CancellationToken;

use ck_core::logging::LogRecord;

/// Consumes a log channel append-only, preserving arrival order.
///
/// Detaches unconditionally on drop, so no record is applied after the
/// consuming view is gone.
pub struct LogFeed {
    records: Arc<Mutex<Vec<LogRecord>>>,
    token: CancellationToken,
}

impl LogFeed {
    pub fn attach(mut rx: mpsc::Receiver<LogRecord>) -> Self {
        let records: Arc<Mutex<Vec<LogRecord>>> = Arc::new(Mutex::new(Vec::new()));
        let token = CancellationToken::new();
        let buffer = Arc::clone(&records);
        let task_token = token.clone();

        tokio::spawn(async move {
            loop {
                tokio::select! {
                    _ = task_token.cancelled() => return,
                    record = rx.recv() => match record {
                        Some(record) => buffer.lock().unwrap().push(record),
                        None => return,
                    }
                }
            }
        });

        Self { records, token }
    }

    pub fn snapshot(&self) -> Vec<LogRecord> {
        self.records.lock().unwrap().clone()
    }

    pub fn clear(&self) {
        self.records.lock().unwrap().clear();
    }

    /// Stop consuming. Records already buffered stay readable.
    pub fn detach(&self) {
        self.token.cancel();
    }
}

impl Drop for LogFeed {
    fn drop(&mut self) {
        self.token.cancel();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ck_core::logging::LogLevel;

    fn record(message: &str) -> LogRecord {
        LogRecord {
            level: LogLevel::Info,
            message: message.into(),
            module_path: "test".into(),
            timestamp: "2025-03-11 12:00:00".into(),
        }
    }

    async fn drain() {
        for _ in 0..4 {
            tokio::task::yield_now().await;
        }
    }

    #[tokio::test]
    async fn buffers_records_in_arrival_order() {
        let (tx, rx) = mpsc::channel(8);
        let feed = LogFeed::attach(rx);

        tx.send(record("first")).await.unwrap();
        tx.send(record("second")).await.unwrap();
        drain().await;

        let messages: Vec<String> = feed
            .snapshot()
            .into_iter()
            .map(|r| r.message)
            .collect();
        assert_eq!(messages, vec!["first", "second"]);

        feed.clear();
        assert!(feed.snapshot().is_empty());
    }

    #[tokio::test]
    async fn detach_stops_consumption() {
        let (tx, rx) = mpsc::channel(8);
        let feed = LogFeed::attach(rx);

        tx.send(record("kept")).await.unwrap();
        drain().await;
        feed.detach();
        drain().await;

        // the consumer is gone, so the channel may already be closed
        let _ = tx.send(record("dropped")).await;
        drain().await;

        let messages: Vec<String> = feed
            .snapshot()
            .into_iter()
            .map(|r| r.message)
            .collect();
        assert_eq!(messages, vec!["kept"]);
    }
}
