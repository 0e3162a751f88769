//! # Fox Telemetry
//!
//! Logging setup shared by the Fox-Names binaries.
//!
//! ## Usage
//!
//! ```rust,ignore
//! use fox_telemetry::{init_logging, TelemetryConfig};
//!
//! fn main() -> anyhow::Result<()> {
//!     init_logging(&TelemetryConfig::from_env())?;
//!     // Logs now go to stderr
//!     Ok(())
//! }
//! ```
//!
//! ## Environment Variables
//!
//! | Variable | Default | Description |
//! |----------|---------|-------------|
//! | `FOX_SERVICE_NAME` | `fox-names` | Service name in logs |
//! | `FOX_LOG_LEVEL` | `warn` | Log level filter |
//! | `FOX_CONSOLE_OUTPUT` | `true` | Emit logs at all |
//! | `FOX_JSON_LOGS` | `false` | JSON formatted logs |

mod config;
mod logging;

pub use config::TelemetryConfig;
pub use logging::{build_filter, init_logging};

use thiserror::Error;

/// Telemetry initialization errors
#[derive(Error, Debug)]
pub enum TelemetryError {
    #[error("Failed to install tracing subscriber: {0}")]
    SubscriberInit(String),

    #[error("Invalid configuration: {0}")]
    Config(String),
}
