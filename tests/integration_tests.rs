//! Integration tests for the session driver and key mapping

use crossterm::event::{KeyCode, KeyEvent};

use tui_2048::config::Config;
use tui_2048::core::{GameError, Move};
use tui_2048::engine::{Session, SessionConfig, SessionError};
use tui_2048::input::handle_key_event;
use tui_2048::types::{Direction, GameAction, Phase};

/// Play with a fixed preference order until the game ends or `limit` turns pass.
fn play(session: &mut Session, limit: usize) {
    let order = [Direction::Left, Direction::Down, Direction::Right, Direction::Up];
    for _ in 0..limit {
        if session.game_over() {
            return;
        }
        let direction = order
            .into_iter()
            .find(|&d| session.board().can_slide(d))
            .expect("a running game can slide somewhere");
        session.step(direction).unwrap();
    }
}

#[test]
fn test_game_lifecycle() {
    let mut session = Session::new(SessionConfig::default()).unwrap();
    assert_eq!(session.episode_id(), 0);
    assert!(!session.game_over());

    play(&mut session, 10_000);
    assert!(session.game_over());
    assert!(!session.board().can_slide_at_all());
    assert!(session.board().is_full());
    assert!(session.moves() > 0);

    assert_eq!(
        session.step(Direction::Left).unwrap_err(),
        SessionError::GameOver
    );

    session.restart().unwrap();
    assert_eq!(session.episode_id(), 1);
    assert_eq!(session.score(), 0);
    assert_eq!(session.moves(), 0);
    assert!(!session.game_over());
}

#[test]
fn test_same_seed_same_game() {
    let config = SessionConfig {
        width: 4,
        seed: 12345,
        starting_tiles: 2,
    };
    let mut a = Session::new(config).unwrap();
    let mut b = Session::new(config).unwrap();
    assert_eq!(a.board(), b.board());

    play(&mut a, 200);
    play(&mut b, 200);
    assert_eq!(a.board(), b.board());
    assert_eq!(a.score(), b.score());
    assert_eq!(a.moves(), b.moves());
}

#[test]
fn test_each_turn_spawns_one_tile() {
    let mut session = Session::new(SessionConfig::default()).unwrap();

    for _ in 0..50 {
        if session.game_over() {
            break;
        }
        let before = session.board().clone();
        let direction = Direction::ALL
            .into_iter()
            .find(|&d| before.can_slide(d))
            .unwrap();
        let report = session.step(direction).unwrap();

        let after = session.board();
        let Move::PlaceTile { tile, .. } = report.placement else {
            panic!("placement must be a tile placement");
        };
        let spawned = u64::from(tile.value());
        // Slides keep the total; only the spawn adds value.
        assert_eq!(after.tile_sum(), before.tile_sum() + spawned);
        assert_eq!(after.empty_cells() + 1, before.empty_cells() + report.merges);
        assert_eq!(after.phase(), Phase::Slide);
    }
}

#[test]
fn test_score_accumulates_merge_values() {
    let mut session = Session::new(SessionConfig {
        width: 4,
        seed: 77,
        starting_tiles: 2,
    })
    .unwrap();

    let mut expected = 0;
    for _ in 0..100 {
        if session.game_over() {
            break;
        }
        let direction = Direction::ALL
            .into_iter()
            .find(|&d| session.board().can_slide(d))
            .unwrap();
        expected += session.step(direction).unwrap().score_gained;
    }
    assert_eq!(session.score(), expected);
}

#[test]
fn test_noop_turn_is_reported() {
    // A lone tile on a 2x2 board sits in a corner, blocked two ways.
    let mut session = Session::new(SessionConfig {
        width: 2,
        seed: 9,
        starting_tiles: 1,
    })
    .unwrap();
    let blocked = Direction::ALL
        .into_iter()
        .find(|&d| !session.board().can_slide(d))
        .unwrap();
    assert_eq!(
        session.step(blocked).unwrap_err(),
        SessionError::Game(GameError::NoOp { direction: blocked })
    );
}

#[test]
fn test_keys_drive_session() {
    let mut session = Session::new(SessionConfig::default()).unwrap();

    let action = handle_key_event(KeyEvent::from(KeyCode::Char('r'))).unwrap();
    assert_eq!(action, GameAction::Restart);
    assert_eq!(session.apply_action(action).unwrap(), None);
    assert_eq!(session.episode_id(), 1);

    let key = [KeyCode::Left, KeyCode::Down, KeyCode::Right, KeyCode::Up]
        .into_iter()
        .find(|&code| match handle_key_event(KeyEvent::from(code)) {
            Some(GameAction::Slide(d)) => session.board().can_slide(d),
            _ => false,
        })
        .unwrap();
    let report = session
        .apply_action(handle_key_event(KeyEvent::from(key)).unwrap())
        .unwrap()
        .unwrap();
    assert_eq!(session.moves(), 1);
    assert_eq!(report.game_over, session.game_over());
}

#[test]
fn test_default_config_builds_a_session() {
    let config = Config::default();
    let session = Session::new(config.session_config()).unwrap();
    assert_eq!(session.board().width(), 4);
    assert_eq!(session.config().seed, 1);
}
