//! Poll loop configuration.

use std::time::Duration;

use serde::{Deserialize, Serialize};

const fn default_true() -> bool {
    true
}

const fn default_interval_secs() -> u64 {
    7
}

/// Poll loop configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PollConfig {
    /// Sleep between the end of one cycle and the start of the next.
    #[serde(default = "default_interval_secs")]
    pub interval_secs: u64,
    /// Send the watcher-online message when the loop starts.
    #[serde(default = "default_true")]
    pub announce_startup: bool,
}

impl PollConfig {
    #[must_use]
    pub fn interval(&self) -> Duration {
        Duration::from_secs(self.interval_secs)
    }
}

impl Default for PollConfig {
    fn default() -> Self {
        Self {
            interval_secs: default_interval_secs(),
            announce_startup: default_true(),
        }
    }
}
