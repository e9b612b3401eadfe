//! Logging setup for AgriMart tools.
//!
//! This crate provides:
//! - `LogConfig` - Serde-loadable level and format settings
//! - `init` - Process-wide `tracing` subscriber installation

mod logging;

pub use logging::*;
