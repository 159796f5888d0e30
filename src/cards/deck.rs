//! Deck construction and lookup.
//!
//! `Deck::build` is deterministic: for a table of N elements, ids `0..N` are
//! the symbol faces and ids `N..2N` the name faces, laid out in id order.
//! Randomisation is a separate step (`Deck::shuffle`) so each half can be
//! tested on its own.

use rustc_hash::FxHashMap;
use serde::{Deserialize, Serialize};

use super::card::{Card, CardId, Face};
use crate::core::{shuffle, RandomSource};
use crate::elements::ElementTable;

/// The cards on the board, in display order.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "Vec<Card>", into = "Vec<Card>")]
pub struct Deck {
    cards: Vec<Card>,

    /// Card id to position in `cards`.
    positions: FxHashMap<CardId, usize>,
}

impl Deck {
    /// Build an unshuffled deck of `2 * table.len()` cards.
    #[must_use]
    pub fn build(table: &ElementTable) -> Self {
        let n = table.len();
        let cards = [Face::Symbol, Face::Name]
            .into_iter()
            .enumerate()
            .flat_map(|(half, face)| {
                (0..n).map(move |element_index| {
                    let id = CardId::new((half * n + element_index) as u32);
                    Card::new(id, element_index, face)
                })
            })
            .collect();

        Self::from_cards(cards)
    }

    /// Wrap an explicit card layout.
    ///
    /// Ids must be unique; a later duplicate shadows an earlier one in lookups.
    #[must_use]
    pub fn from_cards(cards: Vec<Card>) -> Self {
        let mut deck = Self {
            cards,
            positions: FxHashMap::default(),
        };
        deck.reindex();
        deck
    }

    /// Randomise card positions in place.
    pub fn shuffle<R: RandomSource + ?Sized>(&mut self, rng: &mut R) {
        shuffle(&mut self.cards, rng);
        self.reindex();
    }

    fn reindex(&mut self) {
        self.positions = self
            .cards
            .iter()
            .enumerate()
            .map(|(pos, card)| (card.id, pos))
            .collect();
    }

    /// Number of cards.
    #[must_use]
    pub fn len(&self) -> usize {
        self.cards.len()
    }

    /// True before the first game starts.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    /// Cards in display order.
    #[must_use]
    pub fn cards(&self) -> &[Card] {
        &self.cards
    }

    /// Iterate cards in display order.
    pub fn iter(&self) -> impl Iterator<Item = &Card> {
        self.cards.iter()
    }

    /// Look up a card by id.
    #[must_use]
    pub fn get(&self, id: CardId) -> Option<&Card> {
        self.positions.get(&id).map(|&pos| &self.cards[pos])
    }

    pub(crate) fn get_mut(&mut self, id: CardId) -> Option<&mut Card> {
        let pos = *self.positions.get(&id)?;
        self.cards.get_mut(pos)
    }

    /// Display position of a card.
    #[must_use]
    pub fn position(&self, id: CardId) -> Option<usize> {
        self.positions.get(&id).copied()
    }

    /// The card showing `face` of element `element_index`.
    #[must_use]
    pub fn find(&self, element_index: usize, face: Face) -> Option<&Card> {
        self.cards
            .iter()
            .find(|card| card.element_index == element_index && card.face == face)
    }
}

impl From<Vec<Card>> for Deck {
    fn from(cards: Vec<Card>) -> Self {
        Self::from_cards(cards)
    }
}

impl From<Deck> for Vec<Card> {
    fn from(deck: Deck) -> Self {
        deck.cards
    }
}
