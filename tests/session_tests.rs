//! Session integration tests: turn scheduling against the computer.

mod common;

use common::init_logging;
use kalah::core::{OpponentKind, PlayMode, SessionConfig, Side};
use kalah::opponent::HeuristicConfig;
use kalah::rules::{GameResult, MoveError};
use kalah::session::Session;

fn vs_computer(opponent: OpponentKind, seed: u64) -> Session {
    let config = SessionConfig::default()
        .single_player(Side::Player1)
        .with_opponent(opponent)
        .with_seed(seed)
        .with_opponent_delay_ms(0);
    Session::new(config).unwrap()
}

/// Play a game where the human always takes the first legal pit.
fn play_to_end(session: &mut Session) -> GameResult {
    let mut guard = 0;
    while !session.is_over() {
        guard += 1;
        assert!(guard < 500, "game did not finish");

        if session.awaiting_opponent() {
            let turn = session.play_opponent_turn();
            assert!(!turn.moves.is_empty());
            continue;
        }

        let side = session.current_player();
        let pit = session.state().board().legal_pits(side)[0];
        session.apply_move(pit).unwrap();
    }
    session.outcome().expect("finished game has an outcome")
}

// =============================================================================
// Turn Scheduling
// =============================================================================

#[test]
fn test_computer_moves_first_when_it_is_player_zero() {
    init_logging();
    let config = SessionConfig::default().single_player(Side::Player0);
    let mut session = Session::new(config).unwrap();

    assert!(session.awaiting_opponent());
    assert!(matches!(
        session.apply_move(7),
        Err(MoveError::NotYourTurn { .. })
    ));

    let turn = session.play_opponent_turn();

    assert!(turn.moves.iter().all(|m| m.side == Side::Player0));
    assert_eq!(session.current_player(), Side::Player1);
    assert!(session.apply_move(7).is_ok());
}

#[test]
fn test_computer_chains_extra_turns() {
    let mut session = vs_computer(OpponentKind::Heuristic, 42);
    session.apply_move(0).unwrap();

    let turn = session.play_opponent_turn();

    // Pit 9 reaches the store exactly, so the heuristic goes again
    assert!(turn.moves.len() >= 2, "moves: {:?}", turn.moves);
    assert_eq!(turn.moves[0].pit, 9);
    assert!(turn.moves[0].gets_another_move);
    assert_eq!(session.state().history().len(), 1 + turn.moves.len());
}

#[test]
fn test_opponent_turn_is_noop_for_human() {
    let mut session = vs_computer(OpponentKind::Random, 1);
    let before = session.state().clone();

    let turn = session.play_opponent_turn();

    assert!(turn.moves.is_empty());
    assert!(turn.outcome.is_none());
    assert_eq!(session.state(), &before);
}

// =============================================================================
// Full Games
// =============================================================================

#[test]
fn test_full_games_against_each_opponent() {
    init_logging();
    for opponent in [OpponentKind::Random, OpponentKind::Heuristic] {
        for seed in 0..10 {
            let mut session = vs_computer(opponent, seed);
            play_to_end(&mut session);

            assert!(session.is_over());
            assert!(!session.awaiting_opponent());
            assert_eq!(session.state().board().total(), 48);
            assert!(session.play_opponent_turn().moves.is_empty());
        }
    }
}

#[test]
fn test_game_over_stops_the_computer() {
    let mut session = vs_computer(OpponentKind::Heuristic, 3);
    play_to_end(&mut session);

    assert_eq!(session.apply_move(0), Err(MoveError::GameOver));
    assert!(session.play_opponent_turn().moves.is_empty());
}

#[test]
fn test_reset_starts_fresh_game() {
    let mut session = vs_computer(OpponentKind::Heuristic, 5);
    play_to_end(&mut session);

    session.reset();

    assert!(!session.is_over());
    assert_eq!(session.current_player(), Side::Player0);
    assert_eq!(session.slot_counts(), [4, 4, 4, 4, 4, 4, 0, 4, 4, 4, 4, 4, 4, 0]);
    assert!(session.apply_move(2).unwrap().result.gets_another_move);
}

// =============================================================================
// Configuration
// =============================================================================

#[test]
fn test_session_from_json_config() {
    let config = SessionConfig::from_json(
        r#"{
            "mode": { "kind": "single_player", "computer": "Player0" },
            "opponent": "heuristic",
            "heuristic": { "defend": false },
            "seed": 9
        }"#,
    )
    .unwrap();

    assert_eq!(config.heuristic, HeuristicConfig::default().with_defend(false));
    let session = Session::new(config).unwrap();

    assert_eq!(session.config().mode, PlayMode::SinglePlayer { computer: Side::Player0 });
    assert_eq!(session.computer_side(), Some(Side::Player0));
    assert_eq!(session.config().seed, 9);
}

#[test]
fn test_config_round_trip() {
    let config = SessionConfig::default()
        .single_player(Side::Player1)
        .with_opponent(OpponentKind::Random)
        .with_seed(77);

    let json = serde_json::to_string(&config).unwrap();
    assert_eq!(SessionConfig::from_json(&json).unwrap(), config);
}
