//! The game engine: owns the state and applies every input to it.
//!
//! ## Lifecycle
//!
//! `Idle → Running → {Won, TimedOut}`. `start`/`reset` return to `Running`
//! from any status with a rebuilt, reshuffled deck.
//!
//! ## Scheduling
//!
//! The engine has no clock. After the second selection it reports
//! [`SelectOutcome::EvaluationPending`]; the host waits
//! `evaluation_delay_ms` and calls [`GameEngine::evaluate_scheduled`]. Ticks
//! arrive the same way through [`GameEngine::tick_scheduled`]. Both take the
//! [`Generation`] the callback was scheduled under, so callbacks that outlive
//! a reset are dropped instead of touching the new game.
//!
//! ```
//! use element_match::prelude::*;
//!
//! let config = EngineConfig::default().with_seed(42);
//! let mut engine = GameEngine::new(config, ElementTable::standard()).unwrap();
//! engine.start();
//!
//! // Hydrogen is the first target.
//! let symbol = engine.state().deck().find(0, Face::Symbol).unwrap().id;
//! let name = engine.state().deck().find(0, Face::Name).unwrap().id;
//!
//! engine.select_card(symbol);
//! assert!(matches!(
//!     engine.select_card(name),
//!     SelectOutcome::EvaluationPending { .. }
//! ));
//!
//! let result = engine.evaluate_pending_selection();
//! assert!(matches!(result, Evaluation::Matched { score: 10, won: false, .. }));
//! assert_eq!(engine.target_element().unwrap().symbol, "He");
//! ```

use tracing::{debug, info, trace, warn};

use super::matching::{judge, Verdict};
use super::outcome::{Evaluation, Hint, IgnoreReason, SelectOutcome, TickOutcome};
use super::view::BoardView;
use crate::cards::{Card, CardId, CardStatus, Deck};
use crate::core::{ConfigError, EngineConfig, GameRng, GameState, GameStatus, Generation, RandomSource};
use crate::elements::{Element, ElementTable};

/// Single-writer owner of one game's state.
#[derive(Clone, Debug)]
pub struct GameEngine<R = GameRng> {
    config: EngineConfig,
    table: ElementTable,
    rng: R,
    winning_score: u32,
    state: GameState,
}

impl GameEngine<GameRng> {
    /// Create an idle engine.
    ///
    /// Seeds from `config.seed`, or from entropy when unset.
    pub fn new(config: EngineConfig, table: ElementTable) -> Result<Self, ConfigError> {
        let rng = config.seed.map_or_else(GameRng::from_entropy, GameRng::new);
        Self::with_rng(config, table, rng)
    }
}

impl<R: RandomSource> GameEngine<R> {
    /// Create an idle engine drawing shuffles from `rng`.
    ///
    /// Fails if the config is invalid or the winning score overflows `u32`.
    pub fn with_rng(config: EngineConfig, table: ElementTable, rng: R) -> Result<Self, ConfigError> {
        config.validate()?;
        let winning_score = u32::try_from(table.len())
            .ok()
            .and_then(|n| config.points_per_match.checked_mul(n))
            .ok_or(ConfigError::ScoreOverflow {
                points_per_match: config.points_per_match,
                elements: table.len(),
            })?;

        Ok(Self {
            config,
            table,
            rng,
            winning_score,
            state: GameState::default(),
        })
    }

    // === Lifecycle ===

    /// Start a new game, discarding any previous one.
    ///
    /// Returns the generation of the new game; stamp scheduled callbacks
    /// with it.
    pub fn start(&mut self) -> Generation {
        let mut deck = Deck::build(&self.table);
        deck.shuffle(&mut self.rng);

        let generation = self.state.generation.next();
        self.state = GameState::running(deck, self.config.time_limit, generation);

        info!(
            %generation,
            elements = self.table.len(),
            time_limit = self.config.time_limit,
            "game started"
        );
        generation
    }

    /// Same as [`start`](Self::start).
    pub fn reset(&mut self) -> Generation {
        self.start()
    }

    // === Inputs ===

    /// Flip a card up.
    pub fn select_card(&mut self, id: CardId) -> SelectOutcome {
        let outcome = self.try_select(id);
        debug!(card = %id, ?outcome, "select");
        outcome
    }

    fn try_select(&mut self, id: CardId) -> SelectOutcome {
        let state = &mut self.state;
        if state.status != GameStatus::Running {
            return SelectOutcome::Ignored(IgnoreReason::NotRunning);
        }

        let Some(card) = state.deck.get_mut(id) else {
            return SelectOutcome::Ignored(IgnoreReason::UnknownCard);
        };
        match card.status() {
            CardStatus::Matched => return SelectOutcome::Ignored(IgnoreReason::AlreadyMatched),
            CardStatus::Selected => return SelectOutcome::Ignored(IgnoreReason::AlreadySelected),
            CardStatus::Hidden => {}
        }
        if state.selection.len() >= 2 {
            return SelectOutcome::Ignored(IgnoreReason::SelectionFull);
        }

        card.select();
        state.selection.push(id);

        match *state.selection.as_slice() {
            [first, second] => SelectOutcome::EvaluationPending { first, second },
            _ => SelectOutcome::Selected(id),
        }
    }

    /// Judge the two selected cards.
    ///
    /// The selection is always cleared. Ignored unless the game is running
    /// with exactly two cards selected.
    pub fn evaluate_pending_selection(&mut self) -> Evaluation {
        let evaluation = self.try_evaluate();
        debug!(
            ?evaluation,
            score = self.state.score,
            target = self.state.target_index,
            "evaluate"
        );
        debug_assert_eq!(
            self.state.score,
            self.config.points_per_match * self.state.target_index as u32
        );
        evaluation
    }

    fn try_evaluate(&mut self) -> Evaluation {
        if self.state.status != GameStatus::Running {
            return Evaluation::Ignored(IgnoreReason::NotRunning);
        }
        let cards = match *self.state.selection.as_slice() {
            [first, second] => [first, second],
            _ => return Evaluation::Ignored(IgnoreReason::IncompleteSelection),
        };

        self.state.selection.clear();
        self.state.hint = None;

        let verdict = match (self.state.deck.get(cards[0]), self.state.deck.get(cards[1])) {
            (Some(first), Some(second)) => judge(first, second, self.state.target_index),
            _ => Verdict::Mismatch,
        };

        match verdict {
            Verdict::Match => {
                self.update_cards(cards, Card::mark_matched);
                self.state.score += self.config.points_per_match;
                self.state.target_index += 1;

                let won = self.state.score == self.winning_score();
                if won {
                    self.state.status = GameStatus::Won;
                    info!(score = self.state.score, "every element matched");
                }
                Evaluation::Matched {
                    cards,
                    score: self.state.score,
                    won,
                }
            }
            Verdict::WrongOrder => {
                self.update_cards(cards, Card::hide);
                match self.table.get(self.state.target_index).map(Hint::for_element) {
                    Some(hint) => {
                        self.state.hint = Some(hint.clone());
                        Evaluation::WrongOrder { cards, hint }
                    }
                    None => Evaluation::NoMatch { cards },
                }
            }
            Verdict::Mismatch => {
                self.update_cards(cards, Card::hide);
                Evaluation::NoMatch { cards }
            }
        }
    }

    fn update_cards(&mut self, cards: [CardId; 2], update: fn(&mut Card)) {
        for id in cards {
            if let Some(card) = self.state.deck.get_mut(id) {
                update(card);
            }
        }
    }

    /// Advance the clock by one tick.
    pub fn tick(&mut self) -> TickOutcome {
        if self.state.status != GameStatus::Running {
            return TickOutcome::Ignored(IgnoreReason::NotRunning);
        }

        self.state.time_left = self.state.time_left.saturating_sub(1);
        if self.state.time_left == 0 {
            self.state.status = GameStatus::TimedOut;
            info!(
                score = self.state.score,
                target = self.state.target_index,
                "time ran out"
            );
            TickOutcome::TimedOut
        } else {
            trace!(time_left = self.state.time_left, "tick");
            TickOutcome::Counting {
                time_left: self.state.time_left,
            }
        }
    }

    /// [`evaluate_pending_selection`](Self::evaluate_pending_selection) for
    /// a callback scheduled under `generation`.
    pub fn evaluate_scheduled(&mut self, generation: Generation) -> Evaluation {
        if !self.is_current(generation, "evaluation") {
            return Evaluation::Ignored(IgnoreReason::StaleGeneration);
        }
        self.evaluate_pending_selection()
    }

    /// [`tick`](Self::tick) for a callback scheduled under `generation`.
    pub fn tick_scheduled(&mut self, generation: Generation) -> TickOutcome {
        if !self.is_current(generation, "tick") {
            return TickOutcome::Ignored(IgnoreReason::StaleGeneration);
        }
        self.tick()
    }

    fn is_current(&self, generation: Generation, callback: &str) -> bool {
        if generation == self.state.generation {
            return true;
        }
        warn!(
            scheduled = %generation,
            current = %self.state.generation,
            callback,
            "discarding stale callback"
        );
        false
    }

    // === Queries ===

    /// Score needed to win.
    #[must_use]
    pub fn winning_score(&self) -> u32 {
        self.winning_score
    }

    /// The element the player must match next.
    ///
    /// `None` once every element is matched.
    #[must_use]
    pub fn target_element(&self) -> Option<&Element> {
        self.table.get(self.state.target_index)
    }

    /// Text shown on a card.
    #[must_use]
    pub fn card_display(&self, id: CardId) -> Option<&str> {
        self.state.deck.get(id)?.display(&self.table)
    }

    /// Capture everything a renderer needs.
    #[must_use]
    pub fn snapshot(&self) -> BoardView {
        BoardView::capture(&self.state, &self.table)
    }

    /// Current state.
    #[must_use]
    pub fn state(&self) -> &GameState {
        &self.state
    }

    /// Engine configuration.
    #[must_use]
    pub fn config(&self) -> &EngineConfig {
        &self.config
    }

    /// Element table in match order.
    #[must_use]
    pub fn table(&self) -> &ElementTable {
        &self.table
    }

    /// Lifecycle status.
    #[must_use]
    pub fn status(&self) -> GameStatus {
        self.state.status
    }

    /// Current score.
    #[must_use]
    pub fn score(&self) -> u32 {
        self.state.score
    }

    /// Ticks remaining.
    #[must_use]
    pub fn time_left(&self) -> u32 {
        self.state.time_left
    }

    /// Generation of the current game.
    #[must_use]
    pub fn generation(&self) -> Generation {
        self.state.generation
    }

    /// Are two cards waiting to be judged?
    #[must_use]
    pub fn is_evaluation_pending(&self) -> bool {
        self.state.is_evaluation_pending()
    }
}
