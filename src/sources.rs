//! Source-resolution boundary types

use serde::{Deserialize, Serialize};

/// Sources configuration of the receiver options
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SourcesOptions {
    /// Options forwarded to the source-resolution subsystem
    #[serde(skip_serializing_if = "Option::is_none")]
    pub options: Option<MediaSourceOptions>,
}

/// Options owned by the source-resolution subsystem
///
/// Passed through wholesale; only the redirect flag has a documented
/// default here, every other key belongs to the external contract.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MediaSourceOptions {
    /// Resolve redirects of external streams before handing them to the
    /// player (default: `false`)
    #[serde(default)]
    pub force_redirect_external_streams: bool,

    /// Source-resolution keys this crate does not interpret
    #[serde(flatten)]
    pub extra: serde_json::Map<String, serde_json::Value>,
}
