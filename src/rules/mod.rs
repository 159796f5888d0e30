//! Game rules: the engine, the ordered-match rule, and outcomes.
//!
//! `GameEngine` is the only writer of `GameState`. Every input returns an
//! outcome describing what changed, so hosts can re-render from outcomes or
//! from a `BoardView` snapshot.

pub mod engine;
pub mod matching;
pub mod outcome;
pub mod view;

pub use engine::GameEngine;
pub use matching::{judge, Verdict};
pub use outcome::{Evaluation, Hint, IgnoreReason, SelectOutcome, TickOutcome};
pub use view::{BoardView, CardView};
