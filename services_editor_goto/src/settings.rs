//! Versioned persistence for the goto config
//!
//! The host stores the payload wherever it keeps user settings; this module
//! only defines the bytes. The payload carries a format version so future
//! migrations can tell old data apart from corrupt data.

use goto_core::GotoConfig;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Serializable container for the goto config
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct GotoSettingsData {
    /// Version of the settings format (for future migrations)
    pub version: u32,
    /// The config itself
    #[serde(default)]
    pub config: GotoConfig,
}

impl GotoSettingsData {
    pub const CURRENT_VERSION: u32 = 1;

    pub fn new(config: GotoConfig) -> Self {
        Self {
            version: Self::CURRENT_VERSION,
            config,
        }
    }
}

impl Default for GotoSettingsData {
    fn default() -> Self {
        Self::new(GotoConfig::default())
    }
}

/// Result type for settings operations
pub type SettingsResult<T> = Result<T, SettingsError>;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum SettingsError {
    #[error("Failed to serialize goto settings: {0}")]
    SerializationFailed(String),

    #[error("Failed to deserialize goto settings: {0}")]
    DeserializationFailed(String),

    #[error("Unsupported goto settings version: {0}")]
    UnsupportedVersion(u32),
}

/// Serializes the config to JSON bytes
pub fn serialize_config(config: &GotoConfig) -> SettingsResult<Vec<u8>> {
    serde_json::to_vec_pretty(&GotoSettingsData::new(*config))
        .map_err(|e| SettingsError::SerializationFailed(e.to_string()))
}

/// Deserializes a config from JSON bytes, checking the format version
pub fn deserialize_config(bytes: &[u8]) -> SettingsResult<GotoConfig> {
    let data: GotoSettingsData = serde_json::from_slice(bytes)
        .map_err(|e| SettingsError::DeserializationFailed(e.to_string()))?;

    if data.version != GotoSettingsData::CURRENT_VERSION {
        return Err(SettingsError::UnsupportedVersion(data.version));
    }

    Ok(data.config)
}

/// Loads a config from JSON bytes, falling back to defaults on any error
///
/// Damaged or stale settings must never keep the goto box from opening.
pub fn load_config_safe(bytes: &[u8]) -> GotoConfig {
    deserialize_config(bytes).unwrap_or_default()
}
