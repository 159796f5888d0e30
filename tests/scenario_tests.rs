//! End-to-end gameplay scenarios through the public engine API.
//!
//! Cards are located by element and face, so these tests hold for any
//! shuffle.

use element_match::prelude::*;
use element_match::ConfigError;
use proptest::prelude::*;

fn table_of(n: usize) -> ElementTable {
    ElementTable::new(ElementTable::standard().as_slice()[..n].to_vec()).unwrap()
}

fn started(n: usize, seed: u64) -> GameEngine {
    let config = EngineConfig::default().with_seed(seed);
    let mut engine = GameEngine::new(config, table_of(n)).unwrap();
    engine.start();
    engine
}

fn card(engine: &GameEngine, element_index: usize, face: Face) -> CardId {
    engine
        .state()
        .deck()
        .find(element_index, face)
        .expect("card should exist")
        .id
}

fn status(engine: &GameEngine, id: CardId) -> CardStatus {
    engine.state().deck().get(id).expect("card should exist").status()
}

// =============================================================================
// Core scenarios
// =============================================================================

/// A single-element board is won by its only pair.
#[test]
fn test_single_pair_board() {
    let mut engine = started(1, 1);
    assert_eq!(engine.state().deck().len(), 2);

    let symbol = card(&engine, 0, Face::Symbol);
    let name = card(&engine, 0, Face::Name);

    engine.select_card(symbol);
    engine.select_card(name);
    let result = engine.evaluate_pending_selection();

    assert!(matches!(result, Evaluation::Matched { score: 10, won: true, .. }));
    assert_eq!(engine.score(), 10);
    assert_eq!(engine.status(), GameStatus::Won);
}

/// A real pair for the wrong element is rejected with a hint.
#[test]
fn test_out_of_order_pair_gives_hint() {
    let mut engine = started(2, 2);
    let symbol = card(&engine, 1, Face::Symbol);
    let name = card(&engine, 1, Face::Name);

    engine.select_card(symbol);
    engine.select_card(name);
    let result = engine.evaluate_pending_selection();

    let hint = result.hint().expect("wrong order should carry a hint");
    assert_eq!(hint.required_symbol, "H");
    assert_eq!(hint.required_name, "Hydrogen");
    assert_eq!(hint.to_string(), "Match H (Hydrogen) first");

    assert_eq!(status(&engine, symbol), CardStatus::Hidden);
    assert_eq!(status(&engine, name), CardStatus::Hidden);
    assert_eq!(engine.score(), 0);
    assert_eq!(engine.state().target_index(), 0);
}

/// Two cards of different elements give a plain no-match.
#[test]
fn test_unrelated_cards_no_match() {
    let mut engine = started(3, 3);
    let h = card(&engine, 0, Face::Symbol);
    let li = card(&engine, 2, Face::Symbol);

    engine.select_card(h);
    engine.select_card(li);

    assert_eq!(
        engine.evaluate_pending_selection(),
        Evaluation::NoMatch { cards: [h, li] }
    );
    assert!(engine.state().hint().is_none());
}

/// The clock expires on exactly the configured tick.
#[test]
fn test_timeout_on_final_tick() {
    let mut engine = started(20, 4);

    for _ in 0..119 {
        engine.tick();
    }
    assert_eq!(engine.status(), GameStatus::Running);
    assert_eq!(engine.time_left(), 1);

    assert_eq!(engine.tick(), TickOutcome::TimedOut);
    assert_eq!(engine.status(), GameStatus::TimedOut);
}

/// A third click while a pair is pending changes nothing.
#[test]
fn test_third_click_ignored() {
    let mut engine = started(20, 5);
    let a = card(&engine, 3, Face::Symbol);
    let b = card(&engine, 7, Face::Name);
    let c = card(&engine, 0, Face::Symbol);

    engine.select_card(a);
    engine.select_card(b);

    assert_eq!(
        engine.select_card(c),
        SelectOutcome::Ignored(IgnoreReason::SelectionFull)
    );
    assert_eq!(engine.state().selection(), &[a, b]);
    assert_eq!(status(&engine, c), CardStatus::Hidden);
}

// =============================================================================
// Lifecycle
// =============================================================================

/// Consecutive resets give fresh boards of the same shape.
#[test]
fn test_double_reset() {
    let mut engine = started(20, 6);
    let symbol = card(&engine, 0, Face::Symbol);
    let name = card(&engine, 0, Face::Name);
    engine.select_card(symbol);
    engine.select_card(name);
    engine.evaluate_pending_selection();

    engine.reset();
    let first = engine.snapshot();
    engine.reset();
    let second = engine.snapshot();

    for view in [&first, &second] {
        assert_eq!(view.cards.len(), 40);
        assert_eq!(view.score, 0);
        assert_eq!(view.time_left, 120);
        assert_eq!(view.status, GameStatus::Running);
        assert!(view.cards.iter().all(|c| c.status == CardStatus::Hidden));
    }

    let mut first_ids: Vec<_> = first.cards.iter().map(|c| c.id).collect();
    let mut second_ids: Vec<_> = second.cards.iter().map(|c| c.id).collect();
    assert_ne!(first_ids, second_ids, "reset should reshuffle");

    first_ids.sort();
    second_ids.sort();
    assert_eq!(first_ids, second_ids);
    assert_eq!(second.generation, first.generation.next());
}

/// A complete game in table order.
#[test]
fn test_play_standard_board_to_win() {
    let mut engine = started(20, 7);

    for i in 0..20 {
        assert_eq!(engine.target_element(), engine.table().get(i));

        let name = card(&engine, i, Face::Name);
        let symbol = card(&engine, i, Face::Symbol);
        engine.select_card(name);
        engine.select_card(symbol);
        engine.evaluate_pending_selection();
        engine.tick();
    }

    assert_eq!(engine.status(), GameStatus::Won);
    assert_eq!(engine.score(), 200);
    assert_eq!(engine.time_left(), 101);
    assert_eq!(
        engine.status().message(),
        Some("Congratulations, you matched every element!")
    );
}

/// Bad configs fail before a game can start.
#[test]
fn test_invalid_setup_rejected() {
    let result = GameEngine::new(
        EngineConfig::default().with_points_per_match(0),
        ElementTable::standard(),
    );
    assert_eq!(result.err(), Some(ConfigError::ZeroPointsPerMatch));

    assert_eq!(
        ElementTable::new(Vec::new()),
        Err(ConfigError::EmptyElementTable)
    );
}

/// Points that pass config validation can still overflow the winning score
/// on a larger board.
#[test]
fn test_overflowing_points_rejected() {
    let config = EngineConfig::default().with_points_per_match(u32::MAX / 2 + 1);
    assert!(config.validate().is_ok());

    let result = GameEngine::new(config, table_of(2));
    assert!(matches!(
        result.err(),
        Some(ConfigError::ScoreOverflow { elements: 2, .. })
    ));
}

// =============================================================================
// Invariants under arbitrary input
// =============================================================================

#[derive(Clone, Debug)]
enum Op {
    Select(u32),
    Evaluate,
    Tick,
    Reset,
}

fn op() -> impl Strategy<Value = Op> {
    prop_oneof![
        6 => (0u32..14).prop_map(Op::Select),
        3 => Just(Op::Evaluate),
        2 => Just(Op::Tick),
        1 => Just(Op::Reset),
    ]
}

/// Drive the engine the way a good player would half of the time.
fn guided(engine: &GameEngine, raw: u32) -> CardId {
    let target = engine.state().target_index();
    let face = if raw % 2 == 0 { Face::Symbol } else { Face::Name };
    match engine.state().deck().find(target, face) {
        Some(card) if raw % 4 < 2 => card.id,
        _ => CardId::new(raw),
    }
}

proptest! {
    #[test]
    fn prop_invariants_hold(seed in any::<u64>(), ops in proptest::collection::vec(op(), 1..200)) {
        let n = 6;
        let config = EngineConfig::default().with_seed(seed).with_time_limit(40);
        let mut engine = GameEngine::new(config, table_of(n)).unwrap();
        engine.start();

        let mut last_target = 0;
        for op in ops {
            match op {
                Op::Select(raw) => {
                    let id = guided(&engine, raw);
                    engine.select_card(id);
                }
                Op::Evaluate => {
                    engine.evaluate_pending_selection();
                }
                Op::Tick => {
                    engine.tick();
                }
                Op::Reset => {
                    engine.reset();
                    last_target = 0;
                }
            }

            let state = engine.state();
            let selection = state.selection();
            prop_assert!(selection.len() <= 2);
            prop_assert_eq!(state.score(), 10 * state.target_index() as u32);
            prop_assert!(state.target_index() >= last_target);
            prop_assert!(state.target_index() <= last_target + 1);
            last_target = state.target_index();

            for id in selection {
                prop_assert_eq!(state.deck().get(*id).unwrap().status(), CardStatus::Selected);
            }
            let selected = state.deck().iter().filter(|c| c.status() == CardStatus::Selected).count();
            prop_assert_eq!(selected, selection.len());

            let matched = state.deck().iter().filter(|c| c.status() == CardStatus::Matched).count();
            prop_assert_eq!(matched, 2 * state.target_index());
            prop_assert_eq!(state.status() == GameStatus::Won, state.target_index() == n);
        }
    }
}
