//! Core engine types: RNG, shuffling, configuration, errors, state.
//!
//! This module holds the building blocks the rules engine is assembled from.
//! Nothing here knows about match ordering; that lives in `rules`.

pub mod config;
pub mod error;
pub mod rng;
pub mod shuffle;
pub mod state;

pub use config::EngineConfig;
pub use error::ConfigError;
pub use rng::{GameRng, RandomSource};
pub use shuffle::shuffle;
pub use state::{GameState, GameStatus, Generation};
