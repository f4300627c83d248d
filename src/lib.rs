//! # cast-receiver
//!
//! Typed configuration contract for a cast receiver-side media player.
//!
//! The crate defines the [`ReceiverOptions`] shape an embedding application
//! hands to the receiver bootstrap, together with the documented defaults
//! and an explicit resolution step that turns possibly-partial input into a
//! fully populated [`ResolvedOptions`].
//!
//! ## Example
//!
//! ```rust
//! use cast_receiver::{LogLevel, ProviderOptions, ReceiverOptions};
//!
//! # fn example() -> Result<(), cast_receiver::ConfigError> {
//! let options = ReceiverOptions::builder()
//!     .provider(ProviderOptions::new(1234))
//!     .log_level(LogLevel::Debug)
//!     .build()?;
//!
//! let resolved = options.resolve();
//! assert_eq!(resolved.log_level, LogLevel::Debug);
//! // Absent fields resolve to documented defaults.
//! assert!(!resolved.source_options.force_redirect_external_streams);
//! # Ok(())
//! # }
//! # example().unwrap();
//! ```
//!
//! # Architecture
//!
//! The crate is a pure data contract:
//!
//! - **Shape**: `ReceiverOptions` and the sibling types it composes
//! - **Defaults**: applied in exactly one place, [`ReceiverOptions::resolve`]
//! - **Boundary types**: `ProviderOptions` and `MediaSourceOptions` are
//!   owned by external subsystems and passed through uninterpreted

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]

// Public modules
/// Error types
pub mod error;
/// Log level enumeration
pub mod log_level;
/// Top-level receiver options
pub mod options;
/// Playback engine/format priority
pub mod playback;
/// Provider boundary types
pub mod provider;
/// Resolved effective configuration
pub mod resolved;
/// Source-resolution boundary types
pub mod sources;

#[cfg(test)]
mod options_proptest;

// Re-exports
pub use error::ConfigError;
pub use log_level::LogLevel;
pub use options::{ReceiverOptions, ReceiverOptionsBuilder};
pub use playback::{PlaybackOptions, StreamPriority, default_stream_priority};
pub use provider::ProviderOptions;
pub use resolved::ResolvedOptions;
pub use sources::{MediaSourceOptions, SourcesOptions};

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Prelude for common imports
///
/// Convenient re-exports
pub mod prelude {
    pub use crate::{
        ConfigError, LogLevel, MediaSourceOptions, PlaybackOptions, ProviderOptions,
        ReceiverOptions, ResolvedOptions, SourcesOptions, StreamPriority,
        default_stream_priority,
    };
}
