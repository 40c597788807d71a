//! Configuration for drawing samples from generators.

use serde::{Deserialize, Serialize};

use crate::error::{GenError, GenResult};

/// Size used when none is configured, matching the nominal size of the
/// built-in generators.
pub const DEFAULT_MAX_SIZE: usize = 100;

/// Configuration for sampling values outside a test run
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct GenConfig {
    /// Random seed for deterministic generation
    pub seed: u64,

    /// Size passed to generators by `Gen::sample`
    pub size: usize,

    /// Largest size reached by the ramp in `Gen::samples`
    pub max_size: usize,
}

impl Default for GenConfig {
    fn default() -> Self {
        Self {
            seed: 0,
            size: 0,
            max_size: DEFAULT_MAX_SIZE,
        }
    }
}

impl GenConfig {
    pub fn new(seed: u64) -> Self {
        Self {
            seed,
            ..Self::default()
        }
    }

    pub fn with_size(mut self, size: usize) -> Self {
        self.size = size;
        self
    }

    pub fn with_max_size(mut self, max_size: usize) -> Self {
        self.max_size = max_size;
        self
    }

    pub fn validate(&self) -> GenResult<()> {
        if self.size > self.max_size {
            return Err(GenError::InvalidConfig(format!(
                "size {} exceeds max_size {}",
                self.size, self.max_size
            )));
        }
        Ok(())
    }
}
