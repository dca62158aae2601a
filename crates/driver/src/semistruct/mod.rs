//! Semistruct — detection and parsing of the `!<` line convention.
//!
//! A process can opt a log line into semi-structured handling by
//! prefixing it with the two-byte sentinel `!<`. The payload between the
//! sentinel and the closing `>` carries an integer priority, free-form
//! tags, and `key=value` attributes; everything after `>` is ordinary
//! message text.
//!
//! Detection ([`detector::opts_in`]) is a constant-size prefix check.
//! Parsing ([`parser::SemistructParser`]) is stateless and shared across
//! concurrent callers. A parse failure never blocks the log path: the
//! caller falls back to unstructured handling for that one line.

pub mod detector;
pub mod model;
pub mod parser;

pub use detector::opts_in;
pub use model::{ParseError, ParsedRecord};
pub use parser::SemistructParser;

/// The fixed two-byte prefix marking a line as semi-structured.
pub const SENTINEL: &[u8] = b"!<";

/// Upper bound on a line considered for parsing.
pub const MAX_LINE_SIZE: usize = 1_048_576; // 1MB
