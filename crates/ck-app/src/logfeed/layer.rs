//! Tracing layer that feeds the in-app log channel.

use tokio::sync::mpsc;
use tracing::{Level, Subscriber};
use tracing_subscriber::{layer::Context, registry::LookupSpan, Layer};

use ck_core::logging::{LogLevel, LogRecord};

/// Forwards every tracing event into a bounded channel as a [`LogRecord`].
///
/// The channel is bounded; when the consumer falls behind, records are
/// dropped rather than blocking the logging call site.
pub struct ChannelLayer {
    tx: mpsc::Sender<LogRecord>,
}

impl ChannelLayer {
    pub fn new(capacity: usize) -> (Self, mpsc::Receiver<LogRecord>) {
        let (tx, rx) = mpsc::channel(capacity);
        (Self { tx }, rx)
    }
}

struct FieldVisitor {
    message: String,
    module_path: String,
}

impl tracing::field::Visit for FieldVisitor {
    fn record_debug(&mut self, field: &tracing::field::Field, value: &dyn std::fmt::Debug) {
        if field.name() == "message" {
            self.message = format!("{value:?}");
        } else if field.name() == "log.module_path" {
            self.module_path = format!("{value:?}");
        }
    }
}

fn level_of(level: &Level) -> LogLevel {
    match *level {
        Level::ERROR => LogLevel::Error,
        Level::WARN => LogLevel::Warn,
        Level::INFO => LogLevel::Info,
        Level::DEBUG => LogLevel::Debug,
        Level::TRACE => LogLevel::Trace,
    }
}

impl<S> Layer<S> for ChannelLayer
where
    S: Subscriber + for<'a> LookupSpan<'a>,
{
    fn on_event(&self, event: &tracing::Event<'_>, _ctx: Context<'_, S>) {
        let mut visitor = FieldVisitor {
            message: String::new(),
            module_path: String::new(),
        };
        event.record(&mut visitor);

        let record = LogRecord {
            level: level_of(event.metadata().level()),
            message: visitor.message,
            module_path: format!(
                "{}{}",
                event.metadata().module_path().unwrap_or_default(),
                visitor.module_path
            ),
            timestamp: chrono::Local::now().format("%Y-%m-%d %H:%M:%S").to_string(),
        };

        let _ = self.tx.try_send(record);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tracing::info;
    use tracing_subscriber::layer::SubscriberExt;

    #[tokio::test]
    async fn forwards_events_as_records() {
        let (layer, mut rx) = ChannelLayer::new(16);
        let subscriber = tracing_subscriber::registry().with(layer);

        tracing::subscriber::with_default(subscriber, || {
            info!("settings loaded");
        });

        let record = rx.recv().await.unwrap();
        assert_eq!(record.level, LogLevel::Info);
        assert_eq!(record.message, "settings loaded");
        assert!(record.module_path.contains("logfeed"));
    }
}
