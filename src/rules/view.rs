//! Read-only board snapshot for renderers.

use serde::{Deserialize, Serialize};

use super::outcome::Hint;
use crate::cards::{CardId, CardStatus, Face};
use crate::core::{GameState, GameStatus, Generation};
use crate::elements::{Element, ElementTable};

/// One card as the renderer should draw it.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct CardView {
    /// Stable id to pass back to `select_card`.
    pub id: CardId,
    /// Symbol or name, depending on the face.
    pub display: String,
    /// Which half of the pair this card shows.
    pub face: Face,
    /// Current card status.
    pub status: CardStatus,
}

/// Everything observable about the current game.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct BoardView {
    /// Cards in display order.
    pub cards: Vec<CardView>,
    /// Points earned so far.
    pub score: u32,
    /// Ticks remaining on the clock.
    pub time_left: u32,
    /// Lifecycle status.
    pub status: GameStatus,
    /// Element to match next; `None` once the board is cleared.
    pub target: Option<Element>,
    /// Two cards are face up awaiting evaluation.
    pub evaluation_pending: bool,
    /// Set after a wrong-order evaluation until the next one.
    pub hint: Option<Hint>,
    /// Game this snapshot belongs to.
    pub generation: Generation,
}

impl BoardView {
    /// Snapshot `state`, resolving card text through `table`.
    #[must_use]
    pub fn capture(state: &GameState, table: &ElementTable) -> Self {
        let cards = state
            .deck()
            .iter()
            .map(|card| CardView {
                id: card.id,
                display: card.display(table).unwrap_or_default().to_owned(),
                face: card.face,
                status: card.status(),
            })
            .collect();

        Self {
            cards,
            score: state.score(),
            time_left: state.time_left(),
            status: state.status(),
            target: table.get(state.target_index()).cloned(),
            evaluation_pending: state.is_evaluation_pending(),
            hint: state.hint().cloned(),
            generation: state.generation(),
        }
    }

    /// Cards with the given status.
    pub fn with_status(&self, status: CardStatus) -> impl Iterator<Item = &CardView> {
        self.cards.iter().filter(move |card| card.status == status)
    }
}
