//! Message — one captured log line with its origin stream and timestamp.

use bytes::Bytes;
use chrono::{DateTime, Utc};

use crate::sink::Priority;

/// Origin stream of a captured line.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum StreamSource {
    Stdout,
    Stderr,
}

impl StreamSource {
    pub fn as_str(&self) -> &'static str {
        match self {
            StreamSource::Stdout => "stdout",
            StreamSource::Stderr => "stderr",
        }
    }

    /// Priority used when a line carries no parsed severity of its own.
    ///
    /// Stderr falls back to error level, every other stream to info.
    /// This is the sole stream-specific behavior in the pipeline.
    pub fn default_priority(self) -> Priority {
        match self {
            StreamSource::Stderr => Priority::Err,
            StreamSource::Stdout => Priority::Info,
        }
    }
}

/// A single log line as emitted by the monitored process.
///
/// The line bytes are never mutated after capture: parsing only reads
/// them and the sink always receives them verbatim.
#[derive(Debug, Clone)]
pub struct Message {
    pub line: Bytes,
    pub source: StreamSource,
    pub timestamp: DateTime<Utc>,
}

impl Message {
    /// Capture a line with the current time as its timestamp.
    pub fn new(line: impl Into<Bytes>, source: StreamSource) -> Self {
        Self {
            line: line.into(),
            source,
            timestamp: Utc::now(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_stream_source_names() {
        assert_eq!(StreamSource::Stdout.as_str(), "stdout");
        assert_eq!(StreamSource::Stderr.as_str(), "stderr");
    }

    #[test]
    fn test_default_priority_stderr_is_err() {
        assert_eq!(StreamSource::Stderr.default_priority(), Priority::Err);
    }

    #[test]
    fn test_default_priority_stdout_is_info() {
        assert_eq!(StreamSource::Stdout.default_priority(), Priority::Info);
    }

    #[test]
    fn test_message_preserves_line_bytes() {
        let msg = Message::new(&b"hello world"[..], StreamSource::Stdout);
        assert_eq!(msg.line.as_ref(), b"hello world");
    }
}
