//! Virtual-clock scheduler driving a [`GameEngine`].

use std::cmp::Reverse;
use std::collections::BinaryHeap;

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::cards::CardId;
use crate::core::{ConfigError, EngineConfig, GameRng, Generation, RandomSource};
use crate::elements::ElementTable;
use crate::rules::{Evaluation, GameEngine, SelectOutcome, TickOutcome};

/// Kind of scheduled callback.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum TimerKind {
    /// Judge the pending pair.
    Evaluate,
    /// Advance the countdown.
    Tick,
}

/// Something the renderer should react to.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum SessionEvent {
    /// A new game began.
    Started {
        generation: Generation,
    },
    /// A click was processed (accepted or ignored).
    Selection(SelectOutcome),
    /// A pending pair was judged.
    Evaluated(Evaluation),
    /// The clock moved.
    Ticked {
        time_left: u32,
    },
    /// The last pair was matched.
    Won {
        score: u32,
    },
    /// The clock ran out.
    TimedOut {
        score: u32,
    },
}

/// A scheduled callback.
///
/// Field order gives the heap order: due time, then scheduling order.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord)]
struct Timer {
    due_ms: u64,
    seq: u64,
    kind: TimerKind,
    generation: Generation,
}

/// Host event loop with a virtual millisecond clock.
///
/// Events accumulate until the host takes them with
/// [`drain_events`](Session::drain_events); a long-running host should drain
/// after every `click` and `advance`.
///
/// ```
/// use element_match::prelude::*;
///
/// let config = EngineConfig::default().with_seed(3).with_time_limit(2);
/// let mut session = Session::from_config(config, ElementTable::standard()).unwrap();
/// session.start();
///
/// session.advance(2_000);
///
/// assert_eq!(session.engine().status(), GameStatus::TimedOut);
/// assert!(session
///     .events()
///     .contains(&SessionEvent::TimedOut { score: 0 }));
/// ```
#[derive(Clone, Debug)]
pub struct Session<R = GameRng> {
    engine: GameEngine<R>,
    now_ms: u64,
    timers: BinaryHeap<Reverse<Timer>>,
    next_seq: u64,
    events: Vec<SessionEvent>,
}

impl Session<GameRng> {
    /// Build an engine from `config` and wrap it.
    pub fn from_config(config: EngineConfig, table: ElementTable) -> Result<Self, ConfigError> {
        Ok(Self::new(GameEngine::new(config, table)?))
    }
}

impl<R: RandomSource> Session<R> {
    /// Wrap an engine. The game is not started.
    #[must_use]
    pub fn new(engine: GameEngine<R>) -> Self {
        Self {
            engine,
            now_ms: 0,
            timers: BinaryHeap::new(),
            next_seq: 0,
            events: Vec::new(),
        }
    }

    /// Start a new game and its clock.
    ///
    /// Any callbacks still pending from the previous game are dropped.
    pub fn start(&mut self) -> Generation {
        let generation = self.engine.start();
        self.timers.clear();

        let interval = self.engine.config().tick_interval_ms;
        self.schedule(TimerKind::Tick, self.now_ms.saturating_add(interval), generation);
        self.events.push(SessionEvent::Started { generation });
        generation
    }

    /// Same as [`start`](Self::start).
    pub fn reset(&mut self) -> Generation {
        self.start()
    }

    /// Deliver a click on a card.
    ///
    /// Completing a pair schedules its evaluation after the configured delay.
    pub fn click(&mut self, id: CardId) -> SelectOutcome {
        let outcome = self.engine.select_card(id);
        if let SelectOutcome::EvaluationPending { .. } = outcome {
            let due = self.now_ms.saturating_add(self.engine.config().evaluation_delay_ms);
            self.schedule(TimerKind::Evaluate, due, self.engine.generation());
        }
        self.events.push(SessionEvent::Selection(outcome));
        outcome
    }

    /// Move the clock forward, firing every callback that falls due.
    pub fn advance(&mut self, ms: u64) {
        let until = self.now_ms.saturating_add(ms);

        while let Some(timer) = self.pop_due(until) {
            self.now_ms = timer.due_ms;
            self.fire(timer);
        }

        self.now_ms = until;
    }

    fn pop_due(&mut self, until: u64) -> Option<Timer> {
        let due = self.timers.peek().map(|Reverse(timer)| timer.due_ms)?;
        if due > until {
            return None;
        }
        self.timers.pop().map(|Reverse(timer)| timer)
    }

    fn schedule(&mut self, kind: TimerKind, due_ms: u64, generation: Generation) {
        let seq = self.next_seq;
        self.next_seq += 1;

        debug!(?kind, due_ms, %generation, "schedule");
        self.timers.push(Reverse(Timer {
            due_ms,
            seq,
            kind,
            generation,
        }));
    }

    fn fire(&mut self, timer: Timer) {
        match timer.kind {
            TimerKind::Evaluate => {
                let evaluation = self.engine.evaluate_scheduled(timer.generation);
                if let Evaluation::Ignored(_) = evaluation {
                    return;
                }

                let won = matches!(evaluation, Evaluation::Matched { won: true, .. });
                self.events.push(SessionEvent::Evaluated(evaluation));
                if won {
                    self.events.push(SessionEvent::Won {
                        score: self.engine.score(),
                    });
                }
            }
            TimerKind::Tick => match self.engine.tick_scheduled(timer.generation) {
                TickOutcome::Counting { time_left } => {
                    self.events.push(SessionEvent::Ticked { time_left });
                    // Past the end of the clock the countdown freezes.
                    let interval = self.engine.config().tick_interval_ms;
                    if let Some(next) = timer.due_ms.checked_add(interval) {
                        self.schedule(TimerKind::Tick, next, timer.generation);
                    }
                }
                TickOutcome::TimedOut => {
                    self.events.push(SessionEvent::Ticked { time_left: 0 });
                    self.events.push(SessionEvent::TimedOut {
                        score: self.engine.score(),
                    });
                    if self.engine.config().auto_reset_on_timeout {
                        self.start();
                    }
                }
                // Game over or superseded: the clock stops.
                TickOutcome::Ignored(_) => {}
            },
        }
    }

    // === Queries ===

    /// The wrapped engine.
    #[must_use]
    pub fn engine(&self) -> &GameEngine<R> {
        &self.engine
    }

    /// Virtual time in milliseconds.
    #[must_use]
    pub fn now_ms(&self) -> u64 {
        self.now_ms
    }

    /// Number of callbacks waiting to fire.
    #[must_use]
    pub fn pending_timers(&self) -> usize {
        self.timers.len()
    }

    /// Due time of the next callback.
    #[must_use]
    pub fn next_due_ms(&self) -> Option<u64> {
        self.timers.peek().map(|Reverse(timer)| timer.due_ms)
    }

    /// Events recorded since the last drain.
    ///
    /// The log is never trimmed by the session itself.
    #[must_use]
    pub fn events(&self) -> &[SessionEvent] {
        &self.events
    }

    /// Take the recorded events.
    pub fn drain_events(&mut self) -> Vec<SessionEvent> {
        std::mem::take(&mut self.events)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cards::Face;
    use crate::core::GameStatus;

    fn session(config: EngineConfig) -> Session {
        Session::from_config(config.with_seed(42), ElementTable::standard()).unwrap()
    }

    fn pair(session: &Session, element_index: usize) -> (CardId, CardId) {
        let deck = session.engine().state().deck();
        (
            deck.find(element_index, Face::Symbol).unwrap().id,
            deck.find(element_index, Face::Name).unwrap().id,
        )
    }

    #[test]
    fn test_start_schedules_tick() {
        let mut session = session(EngineConfig::default());

        assert_eq!(session.pending_timers(), 0);
        let generation = session.start();

        assert_eq!(session.pending_timers(), 1);
        assert_eq!(session.next_due_ms(), Some(1000));
        assert_eq!(session.events(), &[SessionEvent::Started { generation }]);
    }

    #[test]
    fn test_ticks_follow_interval() {
        let mut session = session(EngineConfig::default());
        session.start();
        session.drain_events();

        session.advance(999);
        assert!(session.events().is_empty());

        session.advance(1);
        assert_eq!(session.events(), &[SessionEvent::Ticked { time_left: 119 }]);

        session.advance(3000);
        assert_eq!(session.engine().time_left(), 116);
        assert_eq!(session.now_ms(), 4000);
    }

    #[test]
    fn test_evaluation_waits_for_delay() {
        let mut session = session(EngineConfig::default());
        session.start();
        let (symbol, name) = pair(&session, 0);

        session.click(symbol);
        session.click(name);
        assert!(session.engine().is_evaluation_pending());

        session.advance(499);
        assert!(session.engine().is_evaluation_pending());

        session.advance(1);
        assert!(!session.engine().is_evaluation_pending());
        assert_eq!(session.engine().score(), 10);
        assert!(session.events().iter().any(|e| matches!(
            e,
            SessionEvent::Evaluated(Evaluation::Matched { score: 10, .. })
        )));
    }

    #[test]
    fn test_single_evaluation_scheduled() {
        let mut session = session(EngineConfig::default());
        session.start();
        let (symbol, name) = pair(&session, 0);
        let (other, _) = pair(&session, 1);

        session.click(symbol);
        session.click(name);
        session.click(other);

        // One tick plus one evaluation.
        assert_eq!(session.pending_timers(), 2);
    }

    #[test]
    fn test_clock_stops_after_win() {
        let config = EngineConfig::default().with_evaluation_delay_ms(0);
        let mut session = session(config);
        session.start();

        for i in 0..20 {
            let (symbol, name) = pair(&session, i);
            session.click(symbol);
            session.click(name);
            session.advance(0);
        }

        assert_eq!(session.engine().status(), GameStatus::Won);
        assert!(session.events().contains(&SessionEvent::Won { score: 200 }));

        session.advance(10_000);
        assert_eq!(session.engine().time_left(), 120);
        assert_eq!(session.pending_timers(), 0);
    }

    #[test]
    fn test_timeout_without_auto_reset() {
        let mut session = session(EngineConfig::default().with_time_limit(3));
        session.start();

        session.advance(3000);

        assert_eq!(session.engine().status(), GameStatus::TimedOut);
        assert_eq!(session.pending_timers(), 0);
        assert!(session.events().contains(&SessionEvent::TimedOut { score: 0 }));
    }

    #[test]
    fn test_timeout_with_auto_reset() {
        let config = EngineConfig::default().with_time_limit(2).auto_reset_on_timeout();
        let mut session = session(config);
        let first = session.start();

        session.advance(2000);

        assert_eq!(session.engine().status(), GameStatus::Running);
        assert_eq!(session.engine().generation(), first.next());
        assert_eq!(session.engine().time_left(), 2);
        assert_eq!(session.next_due_ms(), Some(3000));
    }

    #[test]
    fn test_reset_cancels_pending_evaluation() {
        let mut session = session(EngineConfig::default());
        session.start();
        let (symbol, name) = pair(&session, 0);

        session.click(symbol);
        session.click(name);
        session.reset();
        session.drain_events();

        session.advance(600);

        assert_eq!(session.engine().score(), 0);
        assert!(session.events().is_empty());
        assert_eq!(session.engine().time_left(), 120);
    }

    #[test]
    fn test_reset_restarts_clock_from_now() {
        let mut session = session(EngineConfig::default());
        session.start();
        session.advance(1500);
        assert_eq!(session.engine().time_left(), 119);

        session.reset();
        assert_eq!(session.next_due_ms(), Some(2500));

        session.advance(999);
        assert_eq!(session.engine().time_left(), 120);
        session.advance(1);
        assert_eq!(session.engine().time_left(), 119);
    }

    #[test]
    fn test_huge_tick_interval_saturates() {
        let mut session = session(EngineConfig::default().with_tick_interval_ms(u64::MAX));
        session.start();
        assert_eq!(session.next_due_ms(), Some(u64::MAX));

        session.advance(u64::MAX);
        assert_eq!(session.engine().time_left(), 119);
        assert_eq!(session.pending_timers(), 0);
        assert_eq!(session.now_ms(), u64::MAX);

        session.advance(1);
        assert_eq!(session.now_ms(), u64::MAX);
        assert_eq!(session.engine().status(), GameStatus::Running);
    }

    #[test]
    fn test_huge_evaluation_delay_saturates() {
        let config = EngineConfig::default().with_evaluation_delay_ms(u64::MAX);
        let mut session = session(config);
        session.start();
        session.advance(10);

        let (symbol, name) = pair(&session, 0);
        session.click(symbol);
        session.click(name);

        session.advance(u64::MAX);

        // The clock ran out long before the evaluation fell due.
        assert_eq!(session.engine().status(), GameStatus::TimedOut);
        assert_eq!(session.engine().score(), 0);
        assert_eq!(session.pending_timers(), 0);
    }

    #[test]
    fn test_drain_empties_event_log() {
        let mut session = session(EngineConfig::default());
        session.start();
        session.advance(5000);

        let events = session.drain_events();
        assert_eq!(events.len(), 6);
        assert!(session.events().is_empty());

        session.advance(1000);
        assert_eq!(session.events(), &[SessionEvent::Ticked { time_left: 114 }]);
    }
}
