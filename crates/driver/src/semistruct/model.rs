//! Model — parse results and failure taxonomy for semi-structured lines.

use std::collections::HashMap;

use serde::Serialize;
use thiserror::Error;

use crate::sink::Priority;

/// Result of a successful semi-structured parse.
///
/// Created fresh per line and discarded after projection; never shared
/// or retained across lines.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ParsedRecord {
    /// Severity on the syslog scale, taken verbatim from the payload.
    pub priority: Priority,

    /// Classification tags in payload order; duplicates permitted.
    pub tags: Vec<String>,

    /// Extra attributes; keys unique, last occurrence wins.
    pub attrs: HashMap<String, String>,
}

/// Why a sentinel-prefixed line failed to parse.
///
/// Every variant is non-fatal to the log path: the caller logs it and
/// falls back to unstructured handling for that one line.
#[derive(Debug, Error)]
pub enum ParseError {
    #[error("line too large: {0} bytes (max: {1} bytes)")]
    LineTooLarge(usize, usize),

    #[error("non-UTF8 content")]
    NonUtf8,

    #[error("line does not start with the '!<' sentinel")]
    MissingSentinel,

    #[error("payload truncated before closing '>'")]
    Truncated,

    #[error("missing priority after sentinel")]
    MissingPriority,

    #[error("invalid priority token '{0}'")]
    InvalidPriority(String),

    #[error("priority {0} outside syslog range 0..=7")]
    PriorityOutOfRange(u64),

    #[error("attribute with empty key")]
    EmptyAttrKey,
}
