//! Log Capture Utilities for Testing
//!
//! Collects tracing events into memory so tests can assert on warnings.

use std::sync::{Arc, Mutex};
use tracing::subscriber::DefaultGuard;
use tracing::Level;
use tracing_subscriber::layer::SubscriberExt;

/// Captured log record
#[derive(Debug, Clone)]
pub struct LogRecord {
    pub level: Level,
    pub message: String,
}

/// Log capture layer for testing
#[derive(Clone, Default)]
pub struct LogCapture {
    records: Arc<Mutex<Vec<LogRecord>>>,
}

impl LogCapture {
    /// Get all captured log records
    pub fn records(&self) -> Vec<LogRecord> {
        self.records.lock().unwrap().clone()
    }

    /// Count records at `level` whose message contains `pattern`
    pub fn count_matching(&self, level: Level, pattern: &str) -> usize {
        self.records()
            .iter()
            .filter(|r| r.level == level && r.message.contains(pattern))
            .count()
    }

    /// Assert at least one log matches pattern
    pub fn assert_contains(&self, pattern: &str) {
        let records = self.records();
        assert!(
            records.iter().any(|r| r.message.contains(pattern)),
            "Expected log matching '{}', but none found. All logs:\n{}",
            pattern,
            records
                .iter()
                .map(|r| r.message.as_str())
                .collect::<Vec<_>>()
                .join("\n")
        );
    }
}

impl<S> tracing_subscriber::Layer<S> for LogCapture
where
    S: tracing::Subscriber,
{
    fn on_event(&self, event: &tracing::Event<'_>, _ctx: tracing_subscriber::layer::Context<'_, S>) {
        use tracing::field::Visit;

        struct MessageVisitor {
            message: String,
        }

        impl Visit for MessageVisitor {
            fn record_debug(&mut self, field: &tracing::field::Field, value: &dyn std::fmt::Debug) {
                if field.name() == "message" {
                    self.message = format!("{:?}", value);
                }
            }
        }

        let mut visitor = MessageVisitor {
            message: String::new(),
        };
        event.record(&mut visitor);

        self.records.lock().unwrap().push(LogRecord {
            level: *event.metadata().level(),
            message: visitor.message,
        });
    }
}

/// Install a capturing subscriber for the current thread
///
/// Keep the guard alive for the duration of the test. `#[tokio::test]` runs on
/// a current-thread runtime, so events from awaited code land here too.
pub fn capture_logs() -> (LogCapture, DefaultGuard) {
    let capture = LogCapture::default();
    let subscriber = tracing_subscriber::registry().with(capture.clone());
    let guard = tracing::subscriber::set_default(subscriber);
    (capture, guard)
}
