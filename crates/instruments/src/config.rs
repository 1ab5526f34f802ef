//! Provider configuration

use serde::{Deserialize, Serialize};

use crate::error::{ProviderError, ProviderResult};

/// Tuning knobs for an `InstrumentProvider`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProviderConfig {
    /// Size precision assumed in decimal-places mode when a market omits
    /// `precision.amount`
    #[serde(default = "default_size_precision")]
    pub default_size_precision: u8,
    /// Build each load into a staged copy of the cache and swap it in only
    /// after every market parsed. When off, a failed load leaves the
    /// instruments upserted before the failure in place.
    #[serde(default)]
    pub atomic_reload: bool,
    /// Report instruments replaced by a reload at debug level
    #[serde(default = "default_true")]
    pub log_overwrites: bool,
}

impl ProviderConfig {
    /// Parse a JSON document; absent keys take their defaults
    pub fn from_json(json: &str) -> ProviderResult<Self> {
        serde_json::from_str(json).map_err(|e| ProviderError::Config(e.to_string()))
    }
}

impl Default for ProviderConfig {
    fn default() -> Self {
        Self {
            default_size_precision: default_size_precision(),
            atomic_reload: false,
            log_overwrites: default_true(),
        }
    }
}

fn default_size_precision() -> u8 {
    8
}

fn default_true() -> bool {
    true
}
