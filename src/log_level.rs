//! Player log level forwarded to the logging subsystem

use serde::{Deserialize, Serialize};
use tracing::level_filters::LevelFilter;

/// Verbosity level of the receiver's player logger
///
/// Serialized in the wire form used by the player configuration
/// (`"DEBUG"`, `"INFO"`, `"TIME"`, `"WARN"`, `"ERROR"`, `"OFF"`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum LogLevel {
    /// Most verbose: protocol and state transitions
    Debug,
    /// Informational messages
    Info,
    /// Timing measurements
    Time,
    /// Warnings only
    Warn,
    /// Errors only
    Error,
    /// Logging disabled (default)
    #[default]
    Off,
}

impl LogLevel {
    /// Map onto a `tracing` level filter for subscriber configuration
    #[must_use]
    pub fn as_filter(self) -> LevelFilter {
        match self {
            Self::Debug => LevelFilter::DEBUG,
            // Timing logs ride on the INFO level
            Self::Info | Self::Time => LevelFilter::INFO,
            Self::Warn => LevelFilter::WARN,
            Self::Error => LevelFilter::ERROR,
            Self::Off => LevelFilter::OFF,
        }
    }
}
