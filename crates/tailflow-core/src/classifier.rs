//! Flow-rate classification with hysteresis.
//!
//! Tracks a bounded window of recent per-tick counts and derives a
//! debounced two-state flow signal from it. Entering high mode requires
//! `min_high_count` elevated ticks in the window; leaving it requires the
//! elevated count to fall below `min_normal_count`. The band between the
//! two thresholds holds whatever mode is already active, so a stream
//! hovering near a single boundary cannot flap.

use std::collections::VecDeque;

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::config::ClassifierConfig;
use crate::error::ConfigResult;

/// Operating mode reported to the live-view controller.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FlowMode {
    /// Stream volume is low enough for full rendering.
    Normal,
    /// Stream volume is elevated; the consumer should throttle or sample.
    High,
}

/// Classifies a stream of per-tick counts into a debounced [`FlowMode`].
///
/// One instance per live-tailing session. Configuration is fixed at
/// construction; `window` and `mode` mutate on every [`update`] call.
///
/// [`update`]: RateClassifier::update
#[derive(Debug)]
pub struct RateClassifier {
    config: ClassifierConfig,
    /// Last up-to-`window_size` counts, oldest first.
    window: VecDeque<u64>,
    mode: FlowMode,
}

impl RateClassifier {
    /// Create a classifier with the given configuration.
    ///
    /// Performs no validation: a config with an unreachable hysteresis
    /// band or an empty window is accepted and simply classifies poorly.
    /// Use [`try_new`](Self::try_new) to reject such configs up front.
    pub fn new(config: ClassifierConfig) -> Self {
        Self {
            config,
            window: VecDeque::new(),
            mode: FlowMode::Normal,
        }
    }

    /// Create a classifier, rejecting configurations that violate the
    /// hysteresis invariants.
    pub fn try_new(config: ClassifierConfig) -> ConfigResult<Self> {
        config.validate()?;
        Ok(Self::new(config))
    }

    /// Record the count for the current tick and return the updated mode.
    ///
    /// Called once per tick, in order, by the owning session. The window
    /// slides to hold at most the last `window_size` counts; during
    /// warm-up the evaluation runs on whatever history exists so far.
    /// The mode moves at most one step per call.
    pub fn update(&mut self, count: u64) -> FlowMode {
        self.window.push_back(count);
        while self.window.len() > self.config.window_size {
            self.window.pop_front();
        }

        let elevated = self.elevated_count();
        match self.mode {
            FlowMode::Normal if elevated >= self.config.min_high_count => {
                debug!(
                    elevated,
                    threshold = self.config.threshold,
                    "flow rate elevated, entering high mode"
                );
                self.mode = FlowMode::High;
            }
            FlowMode::High if elevated < self.config.min_normal_count => {
                debug!(elevated, "flow rate settled, returning to normal mode");
                self.mode = FlowMode::Normal;
            }
            // Dead band: hold the current mode.
            _ => {}
        }

        self.mode
    }

    /// Current mode without recording a tick.
    pub fn mode(&self) -> FlowMode {
        self.mode
    }

    /// Whether the consumer should degrade its rendering.
    pub fn is_high(&self) -> bool {
        self.mode == FlowMode::High
    }

    /// Number of retained ticks strictly above the threshold.
    pub fn elevated_count(&self) -> usize {
        self.window
            .iter()
            .filter(|&&count| count > self.config.threshold)
            .count()
    }

    /// Number of ticks currently retained (at most `window_size`).
    pub fn window_len(&self) -> usize {
        self.window.len()
    }
}
