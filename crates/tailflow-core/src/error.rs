//! Error types for classifier configuration.

use thiserror::Error;

/// Result type alias for configuration validation.
pub type ConfigResult<T> = Result<T, ConfigError>;

/// Errors reported by construction-time configuration validation.
///
/// The classifier itself has no fallible operations; this is the only
/// error surface in the crate, and it is opt-in via
/// [`crate::ClassifierConfig::validate`] and
/// [`crate::RateClassifier::try_new`].
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ConfigError {
    #[error("window_size must be at least 1")]
    ZeroWindow,

    #[error("min_high_count must be between 1 and window_size ({window_size}), got {min_high_count}")]
    HighCountOutOfRange {
        min_high_count: usize,
        window_size: usize,
    },

    #[error("min_normal_count ({min_normal_count}) must be less than min_high_count ({min_high_count})")]
    InvertedBand {
        min_normal_count: usize,
        min_high_count: usize,
    },
}
