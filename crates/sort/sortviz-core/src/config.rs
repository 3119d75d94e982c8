//! Run configuration.

use serde::{Deserialize, Serialize};

use crate::algorithms::Algorithm;
use crate::error::SortError;
use crate::order::SortOrder;

/// Which algorithm to run and how to run it. Missing JSON fields fall back
/// to the defaults: bubble sort, ascending, no delay, silent.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct RunConfig {
    pub algorithm: Algorithm,
    pub order: SortOrder,
    /// Pause after each rendered step, in milliseconds. Ignored unless `gui`.
    pub speed_ms: u64,
    /// Render a frame after every observable step.
    pub gui: bool,
}

impl RunConfig {
    pub fn from_json(json: &str) -> Result<Self, SortError> {
        Ok(serde_json::from_str(json)?)
    }

    pub fn to_json(&self) -> Result<String, SortError> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Animated run with the given pause per step.
    pub fn animated(mut self, speed_ms: u64) -> Self {
        self.gui = true;
        self.speed_ms = speed_ms;
        self
    }
}
