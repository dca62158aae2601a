//! Session — the per-container driver instance and its line pipeline.

use std::collections::HashMap;
use std::sync::Arc;

use crate::fields::{self, baseline, BaselineFields};
use crate::message::Message;
use crate::semistruct::{self, ParsedRecord, SemistructParser};
use crate::sink::Sink;

use super::context::{self, Context};
use super::error::DriverError;
use super::tag;
use super::LogDriver;

/// Driver name used for registration.
pub const DRIVER_NAME: &str = "semistruct";

/// One logging session for one container.
///
/// Holds only read-only shared state (the baseline fields, the stateless
/// parser, the sink handle), so `log` is safe to call from concurrent
/// stdout/stderr writers without external locking. Each call merges into
/// its own line-scoped field map.
pub struct SemistructDriver {
    baseline: BaselineFields,
    parser: SemistructParser,
    sink: Arc<dyn Sink>,
}

impl SemistructDriver {
    /// Build a session from host-supplied context.
    ///
    /// Fails when the sink is unavailable, the context carries an
    /// unknown log opt, or the tag template is malformed; no session
    /// starts in a degraded state.
    pub fn new(ctx: &Context, sink: Arc<dyn Sink>) -> Result<Self, DriverError> {
        if !sink.enabled() {
            return Err(DriverError::SinkUnavailable);
        }
        context::validate_log_opts(&ctx.opts)?;
        let tag = tag::parse_log_tag(ctx)?;

        let mut vars = HashMap::new();
        vars.insert(baseline::CONTAINER_ID.to_string(), ctx.id().to_string());
        vars.insert(
            baseline::CONTAINER_ID_FULL.to_string(),
            ctx.container_id.clone(),
        );
        vars.insert(baseline::CONTAINER_NAME.to_string(), ctx.name().to_string());
        vars.insert(baseline::CONTAINER_TAG.to_string(), tag);
        vars.extend(ctx.extra_attributes());

        tracing::debug!(container = ctx.id(), "semistruct log session created");

        Ok(Self {
            baseline: BaselineFields::new(vars),
            parser: SemistructParser::new(),
            sink,
        })
    }

    /// The session's fixed field mapping, as assembled at construction.
    pub fn baseline(&self) -> &BaselineFields {
        &self.baseline
    }

    /// Attempt the semi-structured path for one line.
    ///
    /// Returns `None` both for lines that never opted in and for lines
    /// whose payload failed to parse; a failure is recorded for
    /// diagnostics but never propagated, so the raw line still goes
    /// downstream on the unstructured path.
    fn parse_line(&self, line: &[u8]) -> Option<ParsedRecord> {
        if !semistruct::opts_in(line) {
            return None;
        }
        match self.parser.parse(line) {
            Ok(record) => Some(record),
            Err(err) => {
                tracing::warn!(error = %err, "failed to parse semi-structured log line");
                None
            }
        }
    }
}

impl std::fmt::Debug for SemistructDriver {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SemistructDriver")
            .field("baseline", &self.baseline)
            .finish_non_exhaustive()
    }
}

impl LogDriver for SemistructDriver {
    fn name(&self) -> &'static str {
        DRIVER_NAME
    }

    fn log(&self, msg: &Message) -> Result<(), DriverError> {
        let record = self.parse_line(&msg.line);
        let projected = fields::project(&msg.line, &self.baseline, record.as_ref(), msg.source);
        self.sink
            .send(&projected.line, projected.priority, &projected.fields)?;
        Ok(())
    }
}
