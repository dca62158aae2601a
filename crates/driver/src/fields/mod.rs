//! Fields — baseline session metadata and per-line field projection.

pub mod baseline;
pub mod project;

pub use baseline::BaselineFields;
pub use project::{project, ProjectedRecord, TAGS_FIELD, TAG_SEPARATOR};
