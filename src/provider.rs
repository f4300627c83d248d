//! Provider boundary types
//!
//! The provider subsystem owns the full shape of its configuration; the
//! receiver treats it as a pass-through blob. The identification fields
//! every deployment sets are surfaced as typed optionals, and any other
//! keys survive round-trips unchanged through the flattened map.

use serde::{Deserialize, Serialize};

/// Configuration handed uninterpreted to the provider subsystem
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProviderOptions {
    /// Partner account identifier
    #[serde(skip_serializing_if = "Option::is_none")]
    pub partner_id: Option<i64>,

    /// Session token
    #[serde(skip_serializing_if = "Option::is_none")]
    pub vs: Option<String>,

    /// UI configuration identifier
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ui_conf_id: Option<i64>,

    /// Backend environment overrides (service URLs)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub env: Option<serde_json::Value>,

    /// Provider-owned keys this crate does not interpret
    #[serde(flatten)]
    pub extra: serde_json::Map<String, serde_json::Value>,
}

impl ProviderOptions {
    /// Create provider options for the given partner account
    #[must_use]
    pub fn new(partner_id: i64) -> Self {
        Self {
            partner_id: Some(partner_id),
            ..Self::default()
        }
    }

    /// Set the session token
    #[must_use]
    pub fn with_vs(mut self, vs: impl Into<String>) -> Self {
        self.vs = Some(vs.into());
        self
    }

    /// Set the UI configuration identifier
    #[must_use]
    pub fn with_ui_conf_id(mut self, id: i64) -> Self {
        self.ui_conf_id = Some(id);
        self
    }
}
