//! Classifier configuration.
//!
//! All parameters are fixed at construction; a live-tailing session builds
//! one [`ClassifierConfig`] (usually from its settings document, with
//! omitted fields falling back to the defaults) and never touches it again.

use serde::{Deserialize, Serialize};

use crate::error::{ConfigError, ConfigResult};

/// Construction-time tuning for the flow-rate classifier.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct ClassifierConfig {
    /// Per-tick count above which a tick is considered elevated.
    /// Strictly greater than: a count equal to the threshold is not elevated.
    pub threshold: u64,
    /// Maximum number of most-recent ticks retained for evaluation.
    pub window_size: usize,
    /// Elevated ticks within the window required to enter high mode.
    pub min_high_count: usize,
    /// Elevated ticks within the window below which high mode reverts
    /// to normal. Must stay below `min_high_count`, otherwise the
    /// hysteresis band is unreachable.
    pub min_normal_count: usize,
}

impl Default for ClassifierConfig {
    fn default() -> Self {
        Self {
            threshold: 200,
            window_size: 10,
            min_high_count: 6,
            min_normal_count: 2,
        }
    }
}

impl ClassifierConfig {
    /// Check the invariants the hysteresis design assumes.
    ///
    /// [`crate::RateClassifier::new`] does not call this: a misconfigured
    /// classifier runs, it just classifies poorly (it may never reach high
    /// mode, or enter it immediately). Use
    /// [`crate::RateClassifier::try_new`] when misconfiguration should be
    /// rejected instead.
    pub fn validate(&self) -> ConfigResult<()> {
        if self.window_size == 0 {
            return Err(ConfigError::ZeroWindow);
        }
        if self.min_high_count == 0 || self.min_high_count > self.window_size {
            return Err(ConfigError::HighCountOutOfRange {
                min_high_count: self.min_high_count,
                window_size: self.window_size,
            });
        }
        if self.min_normal_count >= self.min_high_count {
            return Err(ConfigError::InvertedBand {
                min_normal_count: self.min_normal_count,
                min_high_count: self.min_high_count,
            });
        }
        Ok(())
    }
}
