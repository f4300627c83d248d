//! Playback engine and stream format priority

use serde::{Deserialize, Serialize};

/// The cast playback engine
pub const ENGINE_CAST: &str = "cast";

/// HLS stream format
pub const FORMAT_HLS: &str = "hls";
/// DASH stream format
pub const FORMAT_DASH: &str = "dash";
/// Progressive download stream format
pub const FORMAT_PROGRESSIVE: &str = "progressive";

/// A (playback engine, stream format) pair
///
/// Identifiers are open strings: the default set uses the `"cast"` engine,
/// but embedders may name others (e.g. `"html5"`).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StreamPriority {
    /// Playback engine identifier
    pub engine: String,
    /// Stream format identifier
    pub format: String,
}

impl StreamPriority {
    /// Create a priority entry
    #[must_use]
    pub fn new(engine: impl Into<String>, format: impl Into<String>) -> Self {
        Self {
            engine: engine.into(),
            format: format.into(),
        }
    }
}

/// Playback configuration of the receiver options
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PlaybackOptions {
    /// Acceptable engine/format pairs by ascending priority
    ///
    /// Order is significant: earlier entries are preferred when the player
    /// picks a playback strategy. A supplied list replaces the default
    /// wholesale; there is no merging.
    pub stream_priority: Vec<StreamPriority>,
}

/// The default stream priority used when the embedder supplies none
///
/// `[(cast, hls), (cast, dash), (cast, progressive)]`
#[must_use]
pub fn default_stream_priority() -> Vec<StreamPriority> {
    vec![
        StreamPriority::new(ENGINE_CAST, FORMAT_HLS),
        StreamPriority::new(ENGINE_CAST, FORMAT_DASH),
        StreamPriority::new(ENGINE_CAST, FORMAT_PROGRESSIVE),
    ]
}
