//! Baseline — the fixed per-session field mapping.

use std::collections::HashMap;

use serde::Serialize;

// Reserved baseline field names, searchable downstream as e.g.
// CONTAINER_NAME=foo.
pub const CONTAINER_ID: &str = "CONTAINER_ID";
pub const CONTAINER_ID_FULL: &str = "CONTAINER_ID_FULL";
pub const CONTAINER_NAME: &str = "CONTAINER_NAME";
pub const CONTAINER_TAG: &str = "CONTAINER_TAG";

/// Immutable per-session metadata, assembled once before any line is
/// processed and shared read-only across all `log` calls.
///
/// Parsing never mutates this; the projector overlays parsed attributes
/// onto a line-scoped copy instead.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct BaselineFields(HashMap<String, String>);

impl BaselineFields {
    pub fn new(fields: HashMap<String, String>) -> Self {
        Self(fields)
    }

    pub fn get(&self, key: &str) -> Option<&str> {
        self.0.get(key).map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn as_map(&self) -> &HashMap<String, String> {
        &self.0
    }

    /// Line-scoped copy for the projector to overlay onto.
    pub(crate) fn to_map(&self) -> HashMap<String, String> {
        self.0.clone()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_baseline_lookup() {
        let baseline = BaselineFields::new(HashMap::from([
            (CONTAINER_ID.to_string(), "0123456789ab".to_string()),
            (CONTAINER_NAME.to_string(), "web".to_string()),
        ]));
        assert_eq!(baseline.get(CONTAINER_NAME), Some("web"));
        assert_eq!(baseline.get("MISSING"), None);
        assert_eq!(baseline.len(), 2);
    }

    #[test]
    fn test_to_map_is_a_copy() {
        let baseline = BaselineFields::new(HashMap::from([(
            "KEY".to_string(),
            "base".to_string(),
        )]));
        let mut copy = baseline.to_map();
        copy.insert("KEY".to_string(), "changed".to_string());
        assert_eq!(baseline.get("KEY"), Some("base"));
    }
}
