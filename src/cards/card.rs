//! Card identity, faces, and status.
//!
//! A `Card` is one half of an element pair. Its face is fixed for the life of
//! the game; only its status changes, and only through the engine.

use serde::{Deserialize, Serialize};

use crate::elements::ElementTable;

/// Unique identifier for a card within one game.
///
/// Ids are stable for a game instance: shuffling moves cards, not ids.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct CardId(pub u32);

impl CardId {
    /// Create a new card ID.
    #[must_use]
    pub const fn new(id: u32) -> Self {
        Self(id)
    }

    /// Get the raw ID value.
    #[must_use]
    pub const fn raw(self) -> u32 {
        self.0
    }
}

impl std::fmt::Display for CardId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Card({})", self.0)
    }
}

/// Which side of the element a card shows.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Face {
    /// The chemical symbol.
    Symbol,
    /// The element name.
    Name,
}

impl Face {
    /// The other face of the pair.
    #[must_use]
    pub const fn opposite(self) -> Self {
        match self {
            Face::Symbol => Face::Name,
            Face::Name => Face::Symbol,
        }
    }
}

/// Card status on the board.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum CardStatus {
    /// Face down, selectable.
    #[default]
    Hidden,
    /// Part of the current selection.
    Selected,
    /// Paired; never selectable again this game.
    Matched,
}

/// A card on the board.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Card {
    /// Unique id within the game.
    pub id: CardId,

    /// Position of this card's element in the element table.
    pub element_index: usize,

    /// Which side of the element this card shows.
    pub face: Face,

    status: CardStatus,
}

impl Card {
    /// Create a hidden card.
    #[must_use]
    pub fn new(id: CardId, element_index: usize, face: Face) -> Self {
        Self {
            id,
            element_index,
            face,
            status: CardStatus::Hidden,
        }
    }

    /// Current status.
    #[must_use]
    pub fn status(&self) -> CardStatus {
        self.status
    }

    /// The text rendered on this card.
    ///
    /// Returns `None` if the card refers to an element outside `table`.
    #[must_use]
    pub fn display<'a>(&self, table: &'a ElementTable) -> Option<&'a str> {
        let element = table.get(self.element_index)?;
        Some(match self.face {
            Face::Symbol => element.symbol.as_str(),
            Face::Name => element.name.as_str(),
        })
    }

    /// Is this card the other half of `other`'s pair?
    #[must_use]
    pub fn pairs_with(&self, other: &Card) -> bool {
        self.element_index == other.element_index && self.face == other.face.opposite()
    }

    pub(crate) fn select(&mut self) {
        debug_assert_eq!(self.status, CardStatus::Hidden);
        self.status = CardStatus::Selected;
    }

    pub(crate) fn hide(&mut self) {
        debug_assert_eq!(self.status, CardStatus::Selected);
        self.status = CardStatus::Hidden;
    }

    pub(crate) fn mark_matched(&mut self) {
        debug_assert_eq!(self.status, CardStatus::Selected);
        self.status = CardStatus::Matched;
    }
}
