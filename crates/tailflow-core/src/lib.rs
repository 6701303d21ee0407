//! tailflow-core — adaptive flow-rate classification for live log tailing.
//!
//! Converts a raw, noisy stream of per-tick event counts into a debounced
//! two-state flow signal (`Normal` / `High`) that the live-view controller
//! uses to decide whether to throttle or sample its rendering of an
//! otherwise overwhelming stream.
//!
//! # Architecture
//!
//! ```text
//! events ──> TickMeter ──(count per tick)──> RateClassifier ──> FlowMode
//! ```
//!
//! The classifier keeps a bounded window of the most recent per-tick counts
//! and applies two asymmetric thresholds (hysteresis) so transient spikes
//! or dips do not flap the mode. Everything downstream of the returned
//! `FlowMode` (what the UI does when the mode flips) belongs to the caller.
//!
//! The crate is synchronous and single-caller by design: `update` is invoked
//! once per tick, in order, by the owning session. Serializing delivery from
//! any streaming transport is the caller's job.

pub mod classifier;
pub mod config;
pub mod error;
pub mod meter;

pub use classifier::{FlowMode, RateClassifier};
pub use config::ClassifierConfig;
pub use error::{ConfigError, ConfigResult};
pub use meter::TickMeter;
