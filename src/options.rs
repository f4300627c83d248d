//! Top-level receiver options
//!
//! The shape an embedding application hands to the receiver bootstrap.
//! `provider` is the only mandatory field; everything else is optional and
//! falls back to documented defaults during [`ReceiverOptions::resolve`].

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::error::ConfigError;
use crate::log_level::LogLevel;
use crate::playback::{PlaybackOptions, StreamPriority};
use crate::provider::ProviderOptions;
use crate::resolved::ResolvedOptions;
use crate::sources::{MediaSourceOptions, SourcesOptions};

/// Configuration of a cast receiver instance
///
/// Constructed once by the embedding application and not mutated by this
/// crate afterwards.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ReceiverOptions {
    /// Provider configuration (mandatory), passed through uninterpreted
    pub provider: ProviderOptions,

    /// Playback configuration
    #[serde(skip_serializing_if = "Option::is_none")]
    pub playback: Option<PlaybackOptions>,

    /// Sources configuration
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sources: Option<SourcesOptions>,

    /// Player log level (default: `OFF`)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub log_level: Option<LogLevel>,
}

impl ReceiverOptions {
    /// Create the minimal conforming options value
    #[must_use]
    pub fn new(provider: ProviderOptions) -> Self {
        Self {
            provider,
            playback: None,
            sources: None,
            log_level: None,
        }
    }

    /// Create an options builder
    #[must_use]
    pub fn builder() -> ReceiverOptionsBuilder {
        ReceiverOptionsBuilder::default()
    }

    /// Parse options from their JSON wire form
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Json`] if the input is malformed or lacks the
    /// mandatory `provider` field.
    pub fn from_json_str(json: &str) -> Result<Self, ConfigError> {
        let options: Self = serde_json::from_str(json)?;
        debug!(
            has_playback = options.playback.is_some(),
            has_sources = options.sources.is_some(),
            "parsed receiver options"
        );
        Ok(options)
    }

    /// Serialize options to their JSON wire form
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Json`] if serialization fails.
    pub fn to_json_string(&self) -> Result<String, ConfigError> {
        Ok(serde_json::to_string(self)?)
    }

    /// Resolve into a fully populated effective configuration
    ///
    /// This is the single place defaults are applied; see
    /// [`ResolvedOptions`] for the default table.
    #[must_use]
    pub fn resolve(self) -> ResolvedOptions {
        ResolvedOptions::from_options(self)
    }
}

/// Builder for [`ReceiverOptions`]
#[derive(Debug, Clone, Default)]
pub struct ReceiverOptionsBuilder {
    provider: Option<ProviderOptions>,
    playback: Option<PlaybackOptions>,
    sources: Option<SourcesOptions>,
    log_level: Option<LogLevel>,
}

impl ReceiverOptionsBuilder {
    /// Set the provider configuration
    #[must_use]
    pub fn provider(mut self, provider: ProviderOptions) -> Self {
        self.provider = Some(provider);
        self
    }

    /// Set the stream priority list, replacing the default wholesale
    #[must_use]
    pub fn stream_priority(mut self, priority: Vec<StreamPriority>) -> Self {
        self.playback = Some(PlaybackOptions {
            stream_priority: priority,
        });
        self
    }

    /// Set the source-resolution options
    #[must_use]
    pub fn source_options(mut self, options: MediaSourceOptions) -> Self {
        self.sources = Some(SourcesOptions {
            options: Some(options),
        });
        self
    }

    /// Set the player log level
    #[must_use]
    pub fn log_level(mut self, level: LogLevel) -> Self {
        self.log_level = Some(level);
        self
    }

    /// Build the options
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::MissingProvider`] if no provider
    /// configuration was supplied.
    pub fn build(self) -> Result<ReceiverOptions, ConfigError> {
        let provider = self.provider.ok_or(ConfigError::MissingProvider)?;

        Ok(ReceiverOptions {
            provider,
            playback: self.playback,
            sources: self.sources,
            log_level: self.log_level,
        })
    }
}
