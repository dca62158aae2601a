//! Project — merge one line's parse outcome with the session baseline.

use std::collections::HashMap;

use bytes::Bytes;
use serde::Serialize;

use crate::message::StreamSource;
use crate::semistruct::ParsedRecord;
use crate::sink::Priority;

use super::BaselineFields;

/// Reserved field carrying the joined tag list of a parsed record.
pub const TAGS_FIELD: &str = "TAGS";

/// Separator used when joining tags into [`TAGS_FIELD`].
pub const TAG_SEPARATOR: &str = ":";

/// The final output unit handed to the sink.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ProjectedRecord {
    /// The original line, byte-identical to the input. Raw bytes are
    /// recorded downstream separately from the field mapping.
    #[serde(skip)]
    pub line: Bytes,
    pub priority: Priority,
    pub fields: HashMap<String, String>,
}

/// Produce the final (line, priority, fields) triple for one input line.
///
/// Priority comes verbatim from the parsed record when one exists,
/// otherwise from the stream default. Fields start from a copy of the
/// baseline; a parsed record contributes the joined tag list (set even
/// when the tag sequence is empty) and its attributes, attributes
/// winning over baseline keys on collision.
///
/// The line always goes downstream whole, even when it parsed — the
/// structure only adds fields to filter by, the full text stays
/// searchable.
pub fn project(
    line: &Bytes,
    baseline: &BaselineFields,
    record: Option<&ParsedRecord>,
    source: StreamSource,
) -> ProjectedRecord {
    let mut fields = baseline.to_map();

    let priority = match record {
        Some(rec) => {
            fields.insert(TAGS_FIELD.to_string(), rec.tags.join(TAG_SEPARATOR));
            for (key, value) in &rec.attrs {
                fields.insert(key.clone(), value.clone());
            }
            rec.priority
        }
        None => source.default_priority(),
    };

    ProjectedRecord {
        line: line.clone(),
        priority,
        fields,
    }
}
