// Domain-driven module structure for the semi-structured log driver.

// Core infrastructure
pub mod message;
pub mod sink;

// Domain modules
pub mod semistruct;
pub mod fields;
pub mod driver;
