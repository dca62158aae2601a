//! Error — driver setup and per-line failure taxonomy.
//!
//! Setup-time variants are fatal: no session starts with a bad opt map,
//! a bad tag template, or an unavailable sink. The only variant a
//! running session produces is [`DriverError::Sink`], and it is local to
//! the line that triggered it.

use thiserror::Error;

use crate::sink::SinkError;

#[derive(Debug, Error)]
pub enum DriverError {
    #[error("unknown log opt '{0}' for the semistruct log driver")]
    UnknownLogOpt(String),

    #[error("log sink is not enabled on this host")]
    SinkUnavailable,

    #[error("invalid tag template: {0}")]
    InvalidTagTemplate(String),

    #[error("log driver '{0}' is already registered")]
    AlreadyRegistered(String),

    #[error("no registered log driver named '{0}'")]
    UnknownDriver(String),

    #[error(transparent)]
    Sink(#[from] SinkError),
}
