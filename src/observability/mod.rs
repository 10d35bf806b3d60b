//! Observability subsystem.
//!
//! Logging only: structured `tracing` events, with the request ID set by
//! the HTTP layer carried on every forward event.

pub mod logging;
