//! Observability subsystem.
//!
//! Structured logging via tracing; levels come from config with an
//! environment override.

pub mod logging;

pub use logging::init_logging;
