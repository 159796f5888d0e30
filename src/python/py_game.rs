//! Game bindings for Python.

use pyo3::exceptions::PyValueError;
use pyo3::prelude::*;

use crate::cards::{CardId, CardStatus};
use crate::core::{EngineConfig, GameStatus};
use crate::elements::ElementTable;
use crate::session::Session;

fn status_name(status: GameStatus) -> &'static str {
    match status {
        GameStatus::Idle => "idle",
        GameStatus::Running => "running",
        GameStatus::Won => "won",
        GameStatus::TimedOut => "timed_out",
    }
}

fn card_status_name(status: CardStatus) -> &'static str {
    match status {
        CardStatus::Hidden => "hidden",
        CardStatus::Selected => "selected",
        CardStatus::Matched => "matched",
    }
}

/// Python wrapper around a game session with the standard element table.
///
/// Time is virtual: call `advance(ms)` from the host's own timer to fire
/// pending evaluations and ticks.
#[pyclass(name = "ElementMatch")]
pub struct PyElementMatch {
    session: Session,
}

#[pymethods]
impl PyElementMatch {
    /// Create a new game.
    ///
    /// # Arguments
    /// - seed: RNG seed for reproducible boards (random if omitted)
    /// - time_limit: Seconds on the clock
    /// - auto_reset: Restart immediately when time runs out
    #[new]
    #[pyo3(signature = (seed = None, time_limit = 120, auto_reset = false))]
    fn new(seed: Option<u64>, time_limit: u32, auto_reset: bool) -> PyResult<Self> {
        let mut config = EngineConfig::default().with_time_limit(time_limit);
        config.seed = seed;
        config.auto_reset_on_timeout = auto_reset;

        let session = Session::from_config(config, ElementTable::standard())
            .map_err(|e| PyValueError::new_err(e.to_string()))?;
        Ok(Self { session })
    }

    /// Start a new game. Returns its generation number.
    fn start(&mut self) -> u64 {
        self.session.start().0
    }

    /// Discard the current game and start another.
    fn reset(&mut self) -> u64 {
        self.session.reset().0
    }

    /// Click a card. Returns whether the click was accepted.
    fn select_card(&mut self, card_id: u32) -> bool {
        self.session.click(CardId::new(card_id)).is_accepted()
    }

    /// Advance the virtual clock by `ms` milliseconds.
    fn advance(&mut self, ms: u64) {
        self.session.advance(ms);
    }

    /// Cards in display order as `(id, text, status)` tuples.
    fn cards(&self) -> Vec<(u32, String, &'static str)> {
        self.session
            .engine()
            .snapshot()
            .cards
            .into_iter()
            .map(|card| (card.id.raw(), card.display, card_status_name(card.status)))
            .collect()
    }

    /// Recorded events since the last call, as debug strings.
    fn drain_events(&mut self) -> Vec<String> {
        self.session
            .drain_events()
            .iter()
            .map(|event| format!("{event:?}"))
            .collect()
    }

    #[getter]
    fn score(&self) -> u32 {
        self.session.engine().score()
    }

    #[getter]
    fn time_left(&self) -> u32 {
        self.session.engine().time_left()
    }

    /// One of `idle`, `running`, `won`, `timed_out`.
    #[getter]
    fn status(&self) -> &'static str {
        status_name(self.session.engine().status())
    }

    /// End-of-game message, if the game has ended.
    #[getter]
    fn message(&self) -> Option<&'static str> {
        self.session.engine().status().message()
    }

    /// `(symbol, name)` of the element to match next.
    #[getter]
    fn target(&self) -> Option<(String, String)> {
        self.session
            .engine()
            .target_element()
            .map(|element| (element.symbol.clone(), element.name.clone()))
    }

    /// Hint text after an out-of-order pair.
    #[getter]
    fn hint(&self) -> Option<String> {
        self.session.engine().state().hint().map(ToString::to_string)
    }

    #[getter]
    fn evaluation_pending(&self) -> bool {
        self.session.engine().is_evaluation_pending()
    }

    fn __repr__(&self) -> String {
        let engine = self.session.engine();
        format!(
            "ElementMatch(status={}, score={}, time_left={})",
            status_name(engine.status()),
            engine.score(),
            engine.time_left()
        )
    }
}
