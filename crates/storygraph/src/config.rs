// SPDX-License-Identifier: MIT OR Apache-2.0
//! Engine configuration, stored as RON.

use serde::{Deserialize, Serialize};
use std::path::Path;
use thiserror::Error;

/// Current configuration format version
pub const CONFIG_FORMAT_VERSION: u32 = 1;

/// What happens to a node once it has no parents left
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum OrphanPolicy {
    /// Only the removed edges go away. The orphan keeps its own child edges in
    /// adapter storage and simply stops being reachable from the start node.
    #[default]
    Retain,
    /// Orphans are also detached from their children, cascading down to every
    /// node that loses its last parent as a result.
    Sweep,
}

/// Configuration errors
#[derive(Debug, Error)]
pub enum ConfigError {
    /// Reading or writing the file failed
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// The file is not valid RON for this format
    #[error("Parse error: {0}")]
    Parse(#[from] ron::error::SpannedError),

    /// Serialization failed
    #[error("Serialization error: {0}")]
    Serialize(#[from] ron::Error),

    /// Written by a newer version of the tool
    #[error("Config version {found} is newer than supported version {supported}")]
    UnsupportedVersion {
        /// Version in the file
        found: u32,
        /// Newest version this build understands
        supported: u32,
    },
}

/// Graph engine settings
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct EngineConfig {
    /// Format version
    pub version: u32,
    /// Orphan handling after removals and disconnections
    pub orphan_policy: OrphanPolicy,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            version: CONFIG_FORMAT_VERSION,
            orphan_policy: OrphanPolicy::default(),
        }
    }
}

impl EngineConfig {
    /// Default settings with a different orphan policy
    pub fn with_orphan_policy(orphan_policy: OrphanPolicy) -> Self {
        Self {
            orphan_policy,
            ..Self::default()
        }
    }

    /// Parse settings from a RON string
    pub fn from_ron(content: &str) -> Result<Self, ConfigError> {
        let config: EngineConfig = ron::from_str(content)?;

        if config.version > CONFIG_FORMAT_VERSION {
            return Err(ConfigError::UnsupportedVersion {
                found: config.version,
                supported: CONFIG_FORMAT_VERSION,
            });
        }

        Ok(config)
    }

    /// Render settings as pretty RON
    pub fn to_ron(&self) -> Result<String, ConfigError> {
        let pretty = ron::ser::PrettyConfig::default()
            .struct_names(true)
            .enumerate_arrays(false);
        Ok(ron::ser::to_string_pretty(self, pretty)?)
    }

    /// Load settings from a file
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path)?;
        let config = Self::from_ron(&content)?;
        tracing::debug!(path = %path.display(), orphan_policy = ?config.orphan_policy, "Loaded engine config");
        Ok(config)
    }

    /// Save settings to a file
    pub fn save(&self, path: &Path) -> Result<(), ConfigError> {
        std::fs::write(path, self.to_ron()?)?;
        Ok(())
    }
}
