//! Driver — session lifecycle, registration, and the per-line pipeline.

pub mod context;
pub mod error;
pub mod registry;
pub mod session;
pub mod tag;

pub use context::{validate_log_opts, Context};
pub use error::DriverError;
pub use registry::DriverRegistry;
pub use session::SemistructDriver;

use crate::message::Message;

/// A per-session log driver as seen by the hosting application.
///
/// Implementations must be safe for concurrent `log` calls; any shared
/// state behind `&self` is read-only per line.
pub trait LogDriver: Send + Sync {
    /// Stable driver name, as registered.
    fn name(&self) -> &'static str;

    /// Run one line through the pipeline and forward it downstream.
    ///
    /// Errors are local to this line; a failure here never affects the
    /// processing of any other line or the shared session state.
    fn log(&self, msg: &Message) -> Result<(), DriverError>;
}

impl std::fmt::Debug for dyn LogDriver {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("LogDriver")
            .field("name", &self.name())
            .finish()
    }
}
