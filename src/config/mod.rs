pub mod loader;

use serde::{Deserialize, Serialize};
use std::time::Duration;

use crate::game::GRAVITY_INTERVAL_MS;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Milliseconds between gravity ticks.
    pub gravity_interval_ms: u64,
    /// Fixes the piece sequence when set.
    pub seed: Option<u64>,
    /// Draw a faint dot in every empty cell.
    pub show_grid: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            gravity_interval_ms: GRAVITY_INTERVAL_MS,
            seed: None,
            show_grid: false,
        }
    }
}

impl Config {
    #[must_use]
    pub fn gravity_interval(&self) -> Duration {
        Duration::from_millis(self.gravity_interval_ms)
    }

    /// Checks values serde cannot rule out on its own.
    pub fn validate(&self) -> Result<(), loader::ConfigError> {
        if self.gravity_interval_ms == 0 {
            return Err(loader::ConfigError::Invalid(
                "gravity_interval_ms must be greater than zero".to_string(),
            ));
        }
        Ok(())
    }
}
