//! Engine configuration.
//!
//! Hosts configure the engine at startup with an [`EngineConfig`]. Every
//! field has a default matching the classic game (two minutes, ten points per
//! pair), so a host only sets what it wants to change:
//!
//! ```
//! use element_match::core::EngineConfig;
//!
//! let config = EngineConfig::default().with_seed(7).with_time_limit(60);
//! assert_eq!(config.time_limit, 60);
//! assert_eq!(config.points_per_match, 10);
//! ```
//!
//! The config is `serde`-enabled; missing fields fall back to defaults.

use serde::{Deserialize, Serialize};

use super::error::ConfigError;

/// Default countdown length in ticks.
pub const DEFAULT_TIME_LIMIT: u32 = 120;

/// Default score awarded per correct pair.
pub const DEFAULT_POINTS_PER_MATCH: u32 = 10;

/// Default delay between the second selection and its evaluation.
pub const DEFAULT_EVALUATION_DELAY_MS: u64 = 500;

/// Default wall-clock length of one tick.
pub const DEFAULT_TICK_INTERVAL_MS: u64 = 1000;

/// Complete engine configuration.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct EngineConfig {
    /// Ticks on the clock when a game starts.
    pub time_limit: u32,

    /// Score added for each correct pair.
    pub points_per_match: u32,

    /// Delay the host waits before judging a full selection.
    ///
    /// The engine never sleeps; this is read by the scheduler driving it.
    pub evaluation_delay_ms: u64,

    /// Wall-clock spacing of ticks, read by the scheduler.
    pub tick_interval_ms: u64,

    /// Fixed RNG seed. `None` seeds from entropy.
    pub seed: Option<u64>,

    /// Restart immediately when the clock runs out.
    ///
    /// Only honoured by [`crate::session::Session`]; the engine itself
    /// always stays in `TimedOut` until reset.
    pub auto_reset_on_timeout: bool,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            time_limit: DEFAULT_TIME_LIMIT,
            points_per_match: DEFAULT_POINTS_PER_MATCH,
            evaluation_delay_ms: DEFAULT_EVALUATION_DELAY_MS,
            tick_interval_ms: DEFAULT_TICK_INTERVAL_MS,
            seed: None,
            auto_reset_on_timeout: false,
        }
    }
}

impl EngineConfig {
    /// Set the countdown length.
    #[must_use]
    pub fn with_time_limit(mut self, ticks: u32) -> Self {
        self.time_limit = ticks;
        self
    }

    /// Set the score per pair.
    #[must_use]
    pub fn with_points_per_match(mut self, points: u32) -> Self {
        self.points_per_match = points;
        self
    }

    /// Set the evaluation delay.
    #[must_use]
    pub fn with_evaluation_delay_ms(mut self, delay: u64) -> Self {
        self.evaluation_delay_ms = delay;
        self
    }

    /// Set the tick spacing.
    #[must_use]
    pub fn with_tick_interval_ms(mut self, interval: u64) -> Self {
        self.tick_interval_ms = interval;
        self
    }

    /// Use a fixed seed for reproducible boards.
    #[must_use]
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Restart automatically after a timeout.
    #[must_use]
    pub fn auto_reset_on_timeout(mut self) -> Self {
        self.auto_reset_on_timeout = true;
        self
    }

    /// Check that the configuration can drive a game.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.time_limit == 0 {
            return Err(ConfigError::ZeroTimeLimit);
        }
        if self.points_per_match == 0 {
            return Err(ConfigError::ZeroPointsPerMatch);
        }
        if self.tick_interval_ms == 0 {
            return Err(ConfigError::ZeroTickInterval);
        }
        Ok(())
    }
}
