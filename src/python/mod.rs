//! Python bindings for the element-match engine.
//!
//! Lets a Python front end (pygame, a notebook, a web backend) drive a game
//! without reimplementing the rules.
//!
//! # Quick Start
//!
//! ```python
//! import element_match as em
//!
//! game = em.ElementMatch(seed=42)
//! game.start()
//!
//! for card_id, text, status in game.cards():
//!     print(card_id, text, status)
//!
//! game.select_card(0)
//! game.select_card(20)
//! game.advance(500)   # evaluation fires after the delay
//! print(game.score, game.hint)
//! ```

use pyo3::prelude::*;

mod py_game;

pub use py_game::*;

/// element_match: ordered element/name memory game.
#[pymodule]
fn element_match(m: &Bound<'_, PyModule>) -> PyResult<()> {
    m.add_class::<PyElementMatch>()?;
    Ok(())
}
