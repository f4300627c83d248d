//! Resolved effective configuration
//!
//! Default table applied when a field is absent from the input options:
//!
//! | Field | Default |
//! |---|---|
//! | `stream_priority` | `[(cast, hls), (cast, dash), (cast, progressive)]` |
//! | `source_options.force_redirect_external_streams` | `false` |
//! | `log_level` | `OFF` |

use crate::log_level::LogLevel;
use crate::options::ReceiverOptions;
use crate::playback::{StreamPriority, default_stream_priority};
use crate::provider::ProviderOptions;
use crate::sources::MediaSourceOptions;

/// Fully populated receiver configuration with all defaults applied
#[derive(Debug, Clone, PartialEq)]
pub struct ResolvedOptions {
    /// Provider configuration, passed through untouched
    pub provider: ProviderOptions,

    /// Effective engine/format priority, ascending
    pub stream_priority: Vec<StreamPriority>,

    /// Effective source-resolution options
    pub source_options: MediaSourceOptions,

    /// Effective player log level
    pub log_level: LogLevel,
}

impl ResolvedOptions {
    /// Apply the default table to possibly-partial options
    ///
    /// A supplied `stream_priority` replaces the default list wholesale,
    /// even when shorter. Resolving already-fully-specified options
    /// changes nothing.
    #[must_use]
    pub fn from_options(options: ReceiverOptions) -> Self {
        let stream_priority = options
            .playback
            .map_or_else(default_stream_priority, |p| p.stream_priority);

        let source_options = options
            .sources
            .and_then(|s| s.options)
            .unwrap_or_default();

        Self {
            provider: options.provider,
            stream_priority,
            source_options,
            log_level: options.log_level.unwrap_or_default(),
        }
    }
}
