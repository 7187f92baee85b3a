//! Polling cadence and view sizing.

use serde::{Deserialize, Serialize};

/// Default seconds between reconciliation cycles.
const fn default_interval_secs() -> u64 {
    30
}

/// Default maximum number of activity feed entries.
const fn default_feed_limit() -> usize {
    50
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct RefreshConfig {
    /// Seconds between reconciliation cycles while watching.
    #[serde(default = "default_interval_secs")]
    pub interval_secs: u64,

    /// Cap on the activity feed view.
    #[serde(default = "default_feed_limit")]
    pub feed_limit: usize,
}

impl Default for RefreshConfig {
    fn default() -> Self {
        Self {
            interval_secs: default_interval_secs(),
            feed_limit: default_feed_limit(),
        }
    }
}

impl RefreshConfig {
    /// Polling interval, clamped to at least one second.
    #[must_use]
    pub fn interval(&self) -> std::time::Duration {
        std::time::Duration::from_secs(self.interval_secs.max(1))
    }
}
