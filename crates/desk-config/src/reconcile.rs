//! Reconciliation policy knobs.

use desk_core::entities::DEFAULT_ESTABLISHED_YEAR;
use desk_core::enums::TiePolicy;
use serde::{Deserialize, Serialize};

const fn default_established_year() -> i32 {
    DEFAULT_ESTABLISHED_YEAR
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct ReconcileConfig {
    /// Which of two equal-timestamp activity records wins the room state.
    #[serde(default)]
    pub tie_policy: TiePolicy,

    #[serde(default = "default_established_year")]
    pub default_established_year: i32,
}

impl Default for ReconcileConfig {
    fn default() -> Self {
        Self {
            tie_policy: TiePolicy::default(),
            default_established_year: default_established_year(),
        }
    }
}
