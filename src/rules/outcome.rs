//! Outcomes returned by engine operations.
//!
//! Gameplay never fails. Every input produces an outcome value: either the
//! state change it caused, or `Ignored` with the reason nothing happened.

use serde::{Deserialize, Serialize};

use crate::cards::CardId;
use crate::elements::Element;

/// Why an input left the state untouched.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum IgnoreReason {
    /// The game is idle or over.
    NotRunning,
    /// No card with that id is on the board.
    UnknownCard,
    /// The card is already paired.
    AlreadyMatched,
    /// The card is already in the selection.
    AlreadySelected,
    /// Two cards are already waiting for evaluation.
    SelectionFull,
    /// Evaluation requested with fewer than two selected cards.
    IncompleteSelection,
    /// A scheduled callback from a previous game instance.
    StaleGeneration,
}

/// Result of `select_card`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum SelectOutcome {
    /// Nothing changed.
    Ignored(IgnoreReason),
    /// First card of a pair flipped up.
    Selected(CardId),
    /// Second card flipped up; the caller should schedule an evaluation.
    EvaluationPending {
        /// Card selected first.
        first: CardId,
        /// Card selected second.
        second: CardId,
    },
}

impl SelectOutcome {
    /// Did the selection change?
    #[must_use]
    pub fn is_accepted(&self) -> bool {
        !matches!(self, SelectOutcome::Ignored(_))
    }
}

/// The element the player must match next, shown after an out-of-order pair.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Hint {
    /// Symbol of the target element.
    pub required_symbol: String,
    /// Name of the target element.
    pub required_name: String,
}

impl Hint {
    /// Hint pointing at `element`.
    #[must_use]
    pub fn for_element(element: &Element) -> Self {
        Self {
            required_symbol: element.symbol.clone(),
            required_name: element.name.clone(),
        }
    }
}

impl std::fmt::Display for Hint {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Match {} ({}) first", self.required_symbol, self.required_name)
    }
}

/// Result of evaluating a pending pair.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum Evaluation {
    /// Nothing changed.
    Ignored(IgnoreReason),
    /// The target pair was found. Both cards are now matched.
    Matched {
        /// The two cards, in selection order.
        cards: [CardId; 2],
        /// Score after the match.
        score: u32,
        /// This match completed the board.
        won: bool,
    },
    /// A genuine pair, but not the target element. Both cards are hidden again.
    WrongOrder {
        /// The two cards, in selection order.
        cards: [CardId; 2],
        /// The element that must be matched instead.
        hint: Hint,
    },
    /// Not a pair. Both cards are hidden again.
    NoMatch {
        /// The two cards, in selection order.
        cards: [CardId; 2],
    },
}

impl Evaluation {
    /// Cards that flipped as a result, if any.
    #[must_use]
    pub fn cards(&self) -> Option<[CardId; 2]> {
        match self {
            Evaluation::Ignored(_) => None,
            Evaluation::Matched { cards, .. }
            | Evaluation::WrongOrder { cards, .. }
            | Evaluation::NoMatch { cards } => Some(*cards),
        }
    }

    /// The wrong-order hint, if this evaluation produced one.
    #[must_use]
    pub fn hint(&self) -> Option<&Hint> {
        match self {
            Evaluation::WrongOrder { hint, .. } => Some(hint),
            _ => None,
        }
    }
}

/// Result of one clock tick.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum TickOutcome {
    /// Nothing changed.
    Ignored(IgnoreReason),
    /// The clock moved; the game continues.
    Counting {
        /// Ticks remaining.
        time_left: u32,
    },
    /// The clock reached zero on this tick.
    TimedOut,
}
