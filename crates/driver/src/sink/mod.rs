//! Sink — the downstream contract for durably recording forwarded lines.
//!
//! The actual transport lives outside this crate; [`Sink`] is the seam
//! the driver writes through. A sink accepts the raw line, a priority on
//! the syslog scale, and a field mapping. Send failures are surfaced to
//! the caller of the per-line pipeline; this crate never retries.

pub mod fake;

pub use fake::{FakeSink, SentRecord};

use std::collections::HashMap;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Syslog-style severity. Lower ordinals are more severe.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Priority {
    Emergency = 0,
    Alert = 1,
    Critical = 2,
    Err = 3,
    Warning = 4,
    Notice = 5,
    Info = 6,
    Debug = 7,
}

impl Priority {
    /// Map a syslog ordinal to a priority; `None` outside `0..=7`.
    pub fn from_ordinal(n: u8) -> Option<Self> {
        match n {
            0 => Some(Priority::Emergency),
            1 => Some(Priority::Alert),
            2 => Some(Priority::Critical),
            3 => Some(Priority::Err),
            4 => Some(Priority::Warning),
            5 => Some(Priority::Notice),
            6 => Some(Priority::Info),
            7 => Some(Priority::Debug),
            _ => None,
        }
    }

    pub fn ordinal(self) -> u8 {
        self as u8
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Priority::Emergency => "emergency",
            Priority::Alert => "alert",
            Priority::Critical => "critical",
            Priority::Err => "err",
            Priority::Warning => "warning",
            Priority::Notice => "notice",
            Priority::Info => "info",
            Priority::Debug => "debug",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SinkError {
    #[error("sink is not available")]
    Unavailable,

    #[error("sink rejected record: {0}")]
    Rejected(String),
}

/// Downstream recorder of projected log records.
pub trait Sink: Send + Sync {
    /// Whether the sink can accept records. Checked once at session
    /// construction; a disabled sink prevents the session from starting.
    fn enabled(&self) -> bool;

    /// Durably record one line with its priority and field mapping.
    ///
    /// May block; everything upstream of this call is non-blocking.
    fn send(
        &self,
        line: &[u8],
        priority: Priority,
        fields: &HashMap<String, String>,
    ) -> Result<(), SinkError>;
}
