//! # element-match
//!
//! Engine for an ordered memory-matching game: every chemical element has a
//! symbol card and a name card, and the pairs must be found in table order.
//!
//! ## Design Principles
//!
//! 1. **Clockless core**: The engine counts ticks; it never sleeps or owns a
//!    timer. Hosts (or the bundled [`session::Session`]) schedule callbacks.
//!
//! 2. **Outcomes, not errors**: Every input returns an outcome value. Inputs
//!    that do not apply are reported as `Ignored` with a reason.
//!
//! 3. **Deterministic when seeded**: Shuffling goes through the
//!    [`core::RandomSource`] seam, backed by a seeded ChaCha8 RNG.
//!
//! ## Modules
//!
//! - `core`: RNG, shuffling, configuration, errors, game state
//! - `elements`: Element reference data and the validated table
//! - `cards`: Card identity, faces, status, and the deck
//! - `rules`: The engine, the ordered-match rule, outcomes, board snapshots
//! - `session`: Virtual-clock host loop driving the engine
//! - `python`: PyO3 bindings (feature `python`)

pub mod cards;
pub mod core;
pub mod elements;
pub mod rules;
pub mod session;

#[cfg(feature = "python")]
pub mod python;

// Re-export commonly used types
pub use crate::core::{
    ConfigError, EngineConfig, GameRng, GameState, GameStatus, Generation, RandomSource,
};

pub use crate::elements::{Element, ElementTable};

pub use crate::cards::{Card, CardId, CardStatus, Deck, Face};

pub use crate::rules::{
    BoardView, CardView, Evaluation, GameEngine, Hint, IgnoreReason, SelectOutcome, TickOutcome,
};

pub use crate::session::{Session, SessionEvent};

/// Everything a host needs in one import.
pub mod prelude {
    pub use crate::cards::{Card, CardId, CardStatus, Face};
    pub use crate::core::{EngineConfig, GameStatus, Generation, RandomSource};
    pub use crate::elements::{Element, ElementTable};
    pub use crate::rules::{
        BoardView, Evaluation, GameEngine, Hint, IgnoreReason, SelectOutcome, TickOutcome,
    };
    pub use crate::session::{Session, SessionEvent};
}
