//! # Signature Validation Telemetry
//!
//! Structured logging for the signature validation binaries. Library crates
//! only emit `tracing` events; binaries call `init_logging` once at startup.
//!
//! ## Usage
//!
//! ```rust,ignore
//! use sv_telemetry::{init_logging, TelemetryConfig};
//!
//! fn main() -> anyhow::Result<()> {
//!     init_logging(&TelemetryConfig::from_env())?;
//!     // events from every sv-* crate are now written to stderr
//!     Ok(())
//! }
//! ```
//!
//! ## Environment Variables
//!
//! | Variable | Default | Description |
//! |----------|---------|-------------|
//! | `SV_LOG_LEVEL` / `RUST_LOG` | `info` | Log level filter |
//! | `SV_JSON_LOGS` | `false` | JSON formatted output |
//! | `SV_LOG_TARGET` | `true` | Print the module path of each event |
//! | `SV_SERVICE_NAME` | `signature-validation` | Service name on every event |

mod config;
mod logging;

pub use config::TelemetryConfig;
pub use logging::init_logging;

use thiserror::Error;

/// Telemetry initialization errors
#[derive(Error, Debug)]
pub enum TelemetryError {
    #[error("A global subscriber is already installed")]
    AlreadyInitialized,

    #[error("Invalid log filter {filter:?}: {reason}")]
    InvalidFilter { filter: String, reason: String },
}
