//! Browser-facing security headers.
//!
//! The proxy enforces nothing itself; it only grants cross-origin read
//! access so that pages on other origins can call it.

pub mod cors;
