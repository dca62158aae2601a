//! Context — immutable per-session metadata supplied by the host.

use std::collections::HashMap;

use super::error::DriverError;

pub const OPT_LABELS: &str = "labels";
pub const OPT_ENV: &str = "env";
pub const OPT_TAG: &str = "tag";

/// Log-opt keys the driver accepts; anything else is a configuration
/// error at session setup.
const ALLOWED_OPTS: &[&str] = &[OPT_LABELS, OPT_ENV, OPT_TAG];

/// Per-session construction input from the hosting plugin lifecycle.
///
/// Established once before any line is processed and read-only
/// afterwards.
#[derive(Debug, Clone, Default)]
pub struct Context {
    pub container_id: String,
    pub container_name: String,
    pub container_image_id: String,
    pub container_image_name: String,
    /// Container environment as `KEY=VALUE` entries.
    pub container_env: Vec<String>,
    pub container_labels: HashMap<String, String>,
    pub daemon_name: String,
    /// Driver configuration, validated against the opt allow-list.
    pub opts: HashMap<String, String>,
}

impl Context {
    /// Short container id: the first 12 characters, or the whole id when
    /// it is shorter.
    pub fn id(&self) -> &str {
        self.container_id.get(..12).unwrap_or(&self.container_id)
    }

    /// Short image id, same truncation rule as [`Context::id`].
    pub fn image_id(&self) -> &str {
        self.container_image_id
            .get(..12)
            .unwrap_or(&self.container_image_id)
    }

    /// Container name with any leading `/` stripped, so downstream
    /// queries can match CONTAINER_NAME=foo rather than
    /// CONTAINER_NAME=/foo.
    pub fn name(&self) -> &str {
        self.container_name
            .strip_prefix('/')
            .unwrap_or(&self.container_name)
    }

    /// Extra baseline attributes selected by the `labels` and `env`
    /// opts: label values and environment values for the named keys,
    /// with field names uppercased for the sink's namespace.
    pub fn extra_attributes(&self) -> HashMap<String, String> {
        let mut extra = HashMap::new();

        if let Some(keys) = self.opts.get(OPT_LABELS) {
            for key in selected_keys(keys) {
                if let Some(value) = self.container_labels.get(key) {
                    extra.insert(key.to_ascii_uppercase(), value.clone());
                }
            }
        }

        if let Some(keys) = self.opts.get(OPT_ENV) {
            for key in selected_keys(keys) {
                for entry in &self.container_env {
                    let Some(rest) = entry.strip_prefix(key) else {
                        continue;
                    };
                    if let Some(value) = rest.strip_prefix('=') {
                        extra.insert(key.to_ascii_uppercase(), value.to_string());
                    }
                }
            }
        }

        extra
    }
}

fn selected_keys(opt_value: &str) -> impl Iterator<Item = &str> {
    opt_value.split(',').map(str::trim).filter(|k| !k.is_empty())
}

/// Validate the per-session opt map against the fixed allow-list.
///
/// Runs at session setup, before any line is processed.
pub fn validate_log_opts(opts: &HashMap<String, String>) -> Result<(), DriverError> {
    for key in opts.keys() {
        if !ALLOWED_OPTS.contains(&key.as_str()) {
            return Err(DriverError::UnknownLogOpt(key.clone()));
        }
    }
    Ok(())
}
