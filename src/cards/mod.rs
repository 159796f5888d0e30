//! Card system: identities, faces, status, and the deck.
//!
//! ## Key Types
//!
//! - `CardId`: Stable identifier within one game
//! - `Face`: Symbol or name side of an element
//! - `CardStatus`: Hidden, Selected, or Matched
//! - `Card`: One half of an element pair
//! - `Deck`: Cards in display order with id lookup

pub mod card;
pub mod deck;

pub use card::{Card, CardId, CardStatus, Face};
pub use deck::Deck;
