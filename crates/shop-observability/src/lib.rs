//! Logging setup for the storefront.
//!
//! This crate provides:
//! - `LogFormat` - JSON for aggregation, human-readable for terminals
//! - `LogLevel` - default verbosity when `RUST_LOG` is unset
//! - `init_logging` - installs the global `tracing` subscriber

mod logging;

pub use logging::*;
