//! Configuration management subsystem.
//!
//! # Data Flow
//! ```text
//! built-in defaults
//!     → optional TOML file (loader.rs)
//!     → CLI / environment listener overrides
//!     → validation.rs (semantic checks)
//!     → ProxyConfig (validated, read-only for the life of the process)
//! ```
//!
//! # Design Decisions
//! - Config is built once before the listener binds and never mutated
//! - All fields have defaults so the proxy runs with no file at all
//! - Validation separates syntactic (serde) from semantic checks

pub mod loader;
pub mod schema;
pub mod validation;

pub use loader::{ConfigError, ListenerOverrides};
pub use schema::{
    LimitsConfig, ListenerConfig, ObservabilityConfig, ProxyConfig, UpstreamConfig,
};
