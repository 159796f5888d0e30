//! Game state.
//!
//! ## GameState
//!
//! Everything that changes during one game:
//! - The deck and each card's status
//! - The current selection (at most two cards)
//! - Score, time left, and the target element
//! - Game status and the generation stamp
//!
//! A `GameState` is replaced wholesale on every start or reset. Nothing from
//! a previous game carries over except the generation counter, which only
//! moves forward.

use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use crate::cards::{CardId, Deck};
use crate::rules::Hint;

/// Where the game is in its lifecycle.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum GameStatus {
    /// Built but never started.
    #[default]
    Idle,
    /// Accepting selections and ticks.
    Running,
    /// Every pair matched.
    Won,
    /// The clock ran out.
    TimedOut,
}

impl GameStatus {
    /// Has the game ended?
    #[must_use]
    pub fn is_terminal(self) -> bool {
        matches!(self, GameStatus::Won | GameStatus::TimedOut)
    }

    /// End-of-game text for the renderer, if the game has ended.
    #[must_use]
    pub fn message(self) -> Option<&'static str> {
        match self {
            GameStatus::Won => Some("Congratulations, you matched every element!"),
            GameStatus::TimedOut => Some("Time's up! Game over."),
            GameStatus::Idle | GameStatus::Running => None,
        }
    }
}

/// Identifies one game instance.
///
/// Incremented on every start or reset. Work scheduled under an older
/// generation is stale and must not touch the current game.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct Generation(pub u64);

impl Generation {
    /// The generation after this one.
    #[must_use]
    pub const fn next(self) -> Self {
        Self(self.0 + 1)
    }
}

impl std::fmt::Display for Generation {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Gen({})", self.0)
    }
}

/// Mutable state of one game.
///
/// Fields are only written by [`crate::rules::GameEngine`]; hosts read them
/// through the accessors.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameState {
    pub(crate) deck: Deck,
    pub(crate) selection: SmallVec<[CardId; 2]>,
    pub(crate) score: u32,
    pub(crate) time_left: u32,
    pub(crate) target_index: usize,
    pub(crate) status: GameStatus,
    pub(crate) generation: Generation,
    pub(crate) hint: Option<Hint>,
}

impl GameState {
    /// A fresh running game.
    #[must_use]
    pub(crate) fn running(deck: Deck, time_limit: u32, generation: Generation) -> Self {
        Self {
            deck,
            selection: SmallVec::new(),
            score: 0,
            time_left: time_limit,
            target_index: 0,
            status: GameStatus::Running,
            generation,
            hint: None,
        }
    }

    /// The board.
    #[must_use]
    pub fn deck(&self) -> &Deck {
        &self.deck
    }

    /// Selected card ids, in selection order.
    #[must_use]
    pub fn selection(&self) -> &[CardId] {
        &self.selection
    }

    /// Current score.
    #[must_use]
    pub fn score(&self) -> u32 {
        self.score
    }

    /// Ticks remaining.
    #[must_use]
    pub fn time_left(&self) -> u32 {
        self.time_left
    }

    /// Index of the element that must be matched next.
    ///
    /// Equals the number of pairs matched so far.
    #[must_use]
    pub fn target_index(&self) -> usize {
        self.target_index
    }

    /// Lifecycle status.
    #[must_use]
    pub fn status(&self) -> GameStatus {
        self.status
    }

    /// Generation stamp of this game.
    #[must_use]
    pub fn generation(&self) -> Generation {
        self.generation
    }

    /// Hint from the most recent wrong-order evaluation.
    ///
    /// Cleared by the next evaluation and on reset.
    #[must_use]
    pub fn hint(&self) -> Option<&Hint> {
        self.hint.as_ref()
    }

    /// Are two cards waiting to be judged?
    #[must_use]
    pub fn is_evaluation_pending(&self) -> bool {
        self.status == GameStatus::Running && self.selection.len() == 2
    }
}
