//! Feature flags configuration

use serde::Deserialize;

/// Feature flags for enabling/disabling functionality
#[derive(Debug, Clone, Deserialize)]
pub struct FeatureFlags {
    /// Load the three sample profiles into the store at startup
    #[serde(default = "default_seed_sample_users")]
    pub seed_sample_users: bool,
}

impl Default for FeatureFlags {
    fn default() -> Self {
        Self {
            seed_sample_users: default_seed_sample_users(),
        }
    }
}

fn default_seed_sample_users() -> bool {
    true
}
