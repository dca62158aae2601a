//! Registry — explicit driver registration for the embedding application.
//!
//! There is no load-time global side effect: the host constructs one
//! [`DriverRegistry`] during its own startup sequence and registers each
//! driver with an explicit factory closure, optionally paired with an
//! opt validator. Opening a session validates the opts first, so a bad
//! configuration fails before any line is processed.

use std::collections::HashMap;
use std::sync::Arc;

use dashmap::mapref::entry::Entry;
use dashmap::DashMap;

use super::context::Context;
use super::error::DriverError;
use super::LogDriver;

/// Constructs one driver session from host-supplied context.
pub type DriverFactory =
    Box<dyn Fn(&Context) -> Result<Arc<dyn LogDriver>, DriverError> + Send + Sync>;

/// Checks an opt map before any session is constructed from it.
pub type OptValidator =
    Box<dyn Fn(&HashMap<String, String>) -> Result<(), DriverError> + Send + Sync>;

struct Registration {
    factory: DriverFactory,
    validator: Option<OptValidator>,
}

/// Concurrent name → driver-factory map.
#[derive(Default)]
pub struct DriverRegistry {
    drivers: DashMap<String, Registration>,
}

impl DriverRegistry {
    pub fn new() -> Self {
        Self {
            drivers: DashMap::new(),
        }
    }

    /// Register a driver factory under a unique name.
    pub fn register(&self, name: &str, factory: DriverFactory) -> Result<(), DriverError> {
        self.register_with_validator(name, factory, None)
    }

    /// Register a driver factory together with its opt validator.
    pub fn register_with_validator(
        &self,
        name: &str,
        factory: DriverFactory,
        validator: Option<OptValidator>,
    ) -> Result<(), DriverError> {
        match self.drivers.entry(name.to_string()) {
            Entry::Occupied(_) => Err(DriverError::AlreadyRegistered(name.to_string())),
            Entry::Vacant(slot) => {
                slot.insert(Registration { factory, validator });
                tracing::debug!(driver = name, "log driver registered");
                Ok(())
            }
        }
    }

    /// Validate the context's opts and construct a session for `name`.
    pub fn open(&self, name: &str, ctx: &Context) -> Result<Arc<dyn LogDriver>, DriverError> {
        let registration = self
            .drivers
            .get(name)
            .ok_or_else(|| DriverError::UnknownDriver(name.to_string()))?;
        if let Some(validator) = &registration.validator {
            validator(&ctx.opts)?;
        }
        (registration.factory)(ctx)
    }

    /// Whether a driver is registered under `name`.
    pub fn contains(&self, name: &str) -> bool {
        self.drivers.contains_key(name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::driver::context::validate_log_opts;
    use crate::driver::session::{SemistructDriver, DRIVER_NAME};
    use crate::message::{Message, StreamSource};
    use crate::sink::FakeSink;

    fn registry_with_driver(sink: Arc<FakeSink>) -> DriverRegistry {
        let registry = DriverRegistry::new();
        registry
            .register_with_validator(
                DRIVER_NAME,
                Box::new(move |ctx| {
                    Ok(Arc::new(SemistructDriver::new(ctx, sink.clone())?) as Arc<dyn LogDriver>)
                }),
                Some(Box::new(validate_log_opts)),
            )
            .unwrap();
        registry
    }

    fn ctx() -> Context {
        Context {
            container_id: "0123456789abcdef".to_string(),
            container_name: "/web".to_string(),
            ..Context::default()
        }
    }

    #[test]
    fn test_open_builds_working_session() {
        let sink = Arc::new(FakeSink::new());
        let registry = registry_with_driver(sink.clone());

        let driver = registry.open(DRIVER_NAME, &ctx()).unwrap();
        assert_eq!(driver.name(), DRIVER_NAME);

        driver
            .log(&Message::new(&b"hello"[..], StreamSource::Stdout))
            .unwrap();
        assert_eq!(sink.sent_count(), 1);
    }

    #[test]
    fn test_open_unknown_driver() {
        let registry = DriverRegistry::new();
        let err = registry.open("missing", &ctx()).unwrap_err();
        assert!(matches!(err, DriverError::UnknownDriver(name) if name == "missing"));
    }

    #[test]
    fn test_open_validates_opts_before_factory() {
        let sink = Arc::new(FakeSink::new());
        let registry = registry_with_driver(sink);

        let mut bad = ctx();
        bad.opts.insert("rotate".to_string(), "daily".to_string());
        let err = registry.open(DRIVER_NAME, &bad).unwrap_err();
        assert!(matches!(err, DriverError::UnknownLogOpt(key) if key == "rotate"));
    }

    #[test]
    fn test_duplicate_registration_rejected() {
        let sink = Arc::new(FakeSink::new());
        let registry = registry_with_driver(sink.clone());

        let err = registry
            .register(
                DRIVER_NAME,
                Box::new(move |ctx| {
                    Ok(Arc::new(SemistructDriver::new(ctx, sink.clone())?) as Arc<dyn LogDriver>)
                }),
            )
            .unwrap_err();
        assert!(matches!(err, DriverError::AlreadyRegistered(_)));
    }

    #[test]
    fn test_contains() {
        let registry = registry_with_driver(Arc::new(FakeSink::new()));
        assert!(registry.contains(DRIVER_NAME));
        assert!(!registry.contains("json-file"));
    }
}
