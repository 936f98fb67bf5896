use serde::{Deserialize, Serialize};

/// Feature flags controlling optional presentation behavior.
///
/// Every field defaults to `false` so that a missing or incomplete config
/// file leaves the default experience untouched.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
pub struct FeatureFlags {
    /// Drop the hover scale and the shared list/detail view transitions.
    #[serde(default)]
    pub reduced_motion: bool,
}

/// Settings for the movie grid.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct CatalogConfig {
    /// Placeholders shown while the movie list is loading.
    #[serde(default = "default_skeleton_count")]
    pub skeleton_count: usize,
}

fn default_skeleton_count() -> usize {
    12
}

impl Default for CatalogConfig {
    fn default() -> Self {
        Self {
            skeleton_count: default_skeleton_count(),
        }
    }
}

/// Top-level config file structure matching `config.toml`.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
pub struct AppConfig {
    #[serde(default)]
    pub features: FeatureFlags,
    #[serde(default)]
    pub catalog: CatalogConfig,
}
