//! Fake — test double for the downstream sink.
//!
//! Provides a deterministic [`FakeSink`] that implements [`Sink`] using
//! in-memory state. Useful for unit-testing the driver pipeline and
//! integration tests without a real transport.

use std::collections::HashMap;
use std::sync::{Mutex, MutexGuard};

use super::{Priority, Sink, SinkError};

/// One record captured by the fake sink.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SentRecord {
    pub line: Vec<u8>,
    pub priority: Priority,
    pub fields: HashMap<String, String>,
}

/// Mutable inner state protected by a mutex.
#[derive(Default)]
struct Inner {
    sent: Vec<SentRecord>,
    fail_next: Option<SinkError>,
}

/// An in-memory sink for deterministic testing.
///
/// Records every `send` for later inspection. The builder methods allow
/// simulating an unavailable sink or an injected send failure.
pub struct FakeSink {
    inner: Mutex<Inner>,
    enabled: bool,
}

impl FakeSink {
    /// Create an enabled, empty fake sink.
    pub fn new() -> Self {
        Self {
            inner: Mutex::new(Inner::default()),
            enabled: true,
        }
    }

    fn state(&self) -> MutexGuard<'_, Inner> {
        // A panicking test may poison the lock; the recorded state is
        // still usable for assertions.
        self.inner.lock().unwrap_or_else(|e| e.into_inner())
    }

    /// A sink that reports itself unavailable.
    pub fn disabled() -> Self {
        Self {
            inner: Mutex::new(Inner::default()),
            enabled: false,
        }
    }

    /// Make the next `send` fail with the given error.
    pub fn fail_next(&self, err: SinkError) {
        self.state().fail_next = Some(err);
    }

    /// Snapshot of everything sent so far, in send order.
    pub fn sent(&self) -> Vec<SentRecord> {
        self.state().sent.clone()
    }

    /// Number of records sent so far.
    pub fn sent_count(&self) -> usize {
        self.state().sent.len()
    }
}

impl Default for FakeSink {
    fn default() -> Self {
        Self::new()
    }
}

impl Sink for FakeSink {
    fn enabled(&self) -> bool {
        self.enabled
    }

    fn send(
        &self,
        line: &[u8],
        priority: Priority,
        fields: &HashMap<String, String>,
    ) -> Result<(), SinkError> {
        let mut state = self.state();
        if let Some(err) = state.fail_next.take() {
            return Err(err);
        }
        state.sent.push(SentRecord {
            line: line.to_vec(),
            priority,
            fields: fields.clone(),
        });
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fake_sink_records_sends() {
        let sink = FakeSink::new();
        let fields = HashMap::from([("K".to_string(), "v".to_string())]);

        sink.send(b"line one", Priority::Info, &fields).unwrap();
        sink.send(b"line two", Priority::Err, &fields).unwrap();

        let sent = sink.sent();
        assert_eq!(sent.len(), 2);
        assert_eq!(sent[0].line, b"line one");
        assert_eq!(sent[0].priority, Priority::Info);
        assert_eq!(sent[1].line, b"line two");
        assert_eq!(sent[1].priority, Priority::Err);
    }

    #[test]
    fn test_fake_sink_fail_next_fails_once() {
        let sink = FakeSink::new();
        let fields = HashMap::new();

        sink.fail_next(SinkError::Rejected("full".to_string()));
        let err = sink.send(b"dropped", Priority::Info, &fields).unwrap_err();
        assert_eq!(err, SinkError::Rejected("full".to_string()));

        // The failure is consumed; the next send succeeds.
        sink.send(b"kept", Priority::Info, &fields).unwrap();
        assert_eq!(sink.sent_count(), 1);
    }

    #[test]
    fn test_fake_sink_disabled() {
        let sink = FakeSink::disabled();
        assert!(!sink.enabled());
        assert!(FakeSink::new().enabled());
    }
}
