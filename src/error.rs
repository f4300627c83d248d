use thiserror::Error;

/// Errors that can occur while constructing or parsing receiver options
#[derive(Debug, Error)]
pub enum ConfigError {
    /// No provider configuration was supplied
    ///
    /// `provider` is the only mandatory field of the receiver options;
    /// everything else falls back to documented defaults.
    #[error("provider configuration is required")]
    MissingProvider,

    /// Input JSON was malformed or did not conform to the options shape
    #[error("invalid options JSON: {0}")]
    Json(#[from] serde_json::Error),
}
