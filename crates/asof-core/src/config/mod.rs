pub mod split_config;
pub mod timeline_config;

use serde::{Deserialize, Serialize};

pub use split_config::SplitConfig;
pub use timeline_config::TimelineConfig;

/// Top-level configuration aggregating all subsystem configs.
///
/// Every date and threshold the core logic consumes is injected from
/// here — nothing reads an ambient clock.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct AsofConfig {
    pub timeline: TimelineConfig,
    pub split: SplitConfig,
}

impl AsofConfig {
    /// Load config from a TOML string, falling back to defaults for
    /// missing fields.
    pub fn from_toml(toml_str: &str) -> Result<Self, toml::de::Error> {
        toml::from_str(toml_str)
    }
}
