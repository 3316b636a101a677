//! Integration test: game loop controller
//!
//! Drives `handle_event` directly with hand-built event sequences and checks
//! the state machine: Ready -> Playing -> GameOver -> Ready.

use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;
use skyflap::game::types::Obstacle;
use skyflap::{handle_event, BodyKind, GameConfig, GameEvent, GameSession, GameState, SessionEvent};

fn rng() -> ChaCha8Rng {
    ChaCha8Rng::seed_from_u64(12345)
}

fn started_session(rng: &mut ChaCha8Rng) -> GameSession {
    let mut session = GameSession::new(GameConfig::default());
    handle_event(&mut session, GameEvent::Input, rng);
    assert_eq!(session.state, GameState::Playing);
    session
}

fn spawn_several(session: &mut GameSession, count: usize, rng: &mut ChaCha8Rng) {
    for _ in 0..count {
        handle_event(session, GameEvent::Spawn, rng);
    }
}

// =============================================================================
// Ticks and scoring
// =============================================================================

#[test]
fn test_ticks_alone_never_change_score() {
    let mut rng = rng();
    let mut session = started_session(&mut rng);
    spawn_several(&mut session, 3, &mut rng);

    for _ in 0..500 {
        let dt = rng.gen_range(0.001..0.05);
        handle_event(&mut session, GameEvent::Tick(dt), &mut rng);
        assert_eq!(session.score, 0);
        assert_eq!(session.state, GameState::Playing);
    }
}

#[test]
fn test_obstacles_scroll_off_and_are_destroyed() {
    let mut rng = rng();
    let mut session = started_session(&mut rng);
    spawn_several(&mut session, 2, &mut rng);

    // 600 + 26 units at 200 units/s
    let mut despawned = Vec::new();
    for _ in 0..200 {
        for event in handle_event(&mut session, GameEvent::Tick(0.02), &mut rng) {
            if let SessionEvent::Despawned { id } = event {
                despawned.push(id);
            }
        }
    }
    assert!(session.obstacles.is_empty());
    assert_eq!(despawned, vec![0, 1]);
}

#[test]
fn test_gap_contact_increments_by_exactly_one() {
    let mut rng = rng();
    let mut session = started_session(&mut rng);

    for expected in 1..=5 {
        let events = handle_event(
            &mut session,
            GameEvent::Collision(BodyKind::Avatar, BodyKind::ScoreGap(expected as u64)),
            &mut rng,
        );
        assert_eq!(events, vec![SessionEvent::Scored { score: expected }]);
        assert_eq!(session.score, expected);
        assert_eq!(session.score_label, expected.to_string());
        assert_eq!(session.state, GameState::Playing);
    }
}

// =============================================================================
// Game over
// =============================================================================

#[test]
fn test_duplicate_crash_notifications_transition_once() {
    let mut rng = rng();
    let mut session = started_session(&mut rng);
    spawn_several(&mut session, 2, &mut rng);
    let positions: Vec<f64> = session.obstacles.iter().map(|o| o.x).collect();

    let solids = [
        BodyKind::UpperPipe(0),
        BodyKind::LowerPipe(0),
        BodyKind::Ground,
        BodyKind::Ceiling,
        BodyKind::UpperPipe(0),
    ];
    let mut game_overs = 0;
    for solid in solids {
        for event in handle_event(
            &mut session,
            GameEvent::Collision(BodyKind::Avatar, solid),
            &mut rng,
        ) {
            if matches!(event, SessionEvent::GameOver { .. }) {
                game_overs += 1;
            }
        }
    }
    assert_eq!(game_overs, 1);
    assert_eq!(session.state, GameState::GameOver);

    // motion is halted
    handle_event(&mut session, GameEvent::Tick(1.0), &mut rng);
    let after: Vec<f64> = session.obstacles.iter().map(|o| o.x).collect();
    assert_eq!(positions, after);
}

#[test]
fn test_reset_regardless_of_obstacle_count() {
    for count in [0usize, 1, 7, 40] {
        let mut rng = rng();
        let mut session = started_session(&mut rng);
        spawn_several(&mut session, count, &mut rng);
        for id in 0..count as u64 {
            handle_event(
                &mut session,
                GameEvent::Collision(BodyKind::ScoreGap(id), BodyKind::Avatar),
                &mut rng,
            );
        }
        session.avatar.y = 40.0;
        session.avatar.velocity = -300.0;
        handle_event(
            &mut session,
            GameEvent::Collision(BodyKind::Avatar, BodyKind::Ground),
            &mut rng,
        );

        let events = handle_event(&mut session, GameEvent::Input, &mut rng);
        assert_eq!(events, vec![SessionEvent::Reset]);
        assert_eq!(session.state, GameState::Ready);
        assert_eq!(session.score, 0);
        assert!(session.obstacles.is_empty());
        assert!((session.avatar.y - session.config.mid_y()).abs() < f64::EPSILON);
        assert!(session.avatar.velocity.abs() < f64::EPSILON);
        assert!(session.game_over_label.is_none());
    }
}

#[test]
fn test_full_round_trip_through_states() {
    let mut rng = rng();
    let mut session = GameSession::new(GameConfig::default());
    assert_eq!(session.state, GameState::Ready);

    // Ready ignores ticks and spawns
    handle_event(&mut session, GameEvent::Tick(5.0), &mut rng);
    handle_event(&mut session, GameEvent::Spawn, &mut rng);
    assert!(session.obstacles.is_empty());

    handle_event(&mut session, GameEvent::Input, &mut rng);
    assert_eq!(session.state, GameState::Playing);

    handle_event(
        &mut session,
        GameEvent::Collision(BodyKind::Avatar, BodyKind::LowerPipe(0)),
        &mut rng,
    );
    assert_eq!(session.state, GameState::GameOver);

    handle_event(&mut session, GameEvent::Input, &mut rng);
    assert_eq!(session.state, GameState::Ready);

    let events = handle_event(&mut session, GameEvent::Input, &mut rng);
    assert_eq!(events, vec![SessionEvent::Started, SessionEvent::Flapped]);
}

// =============================================================================
// Gap placement
// =============================================================================

#[test]
fn test_every_spawned_gap_fits_on_screen() {
    let mut rng = rng();
    let mut session = started_session(&mut rng);
    spawn_several(&mut session, 500, &mut rng);

    let config = session.config.clone();
    for obstacle in &session.obstacles {
        assert!(obstacle.gap_bottom(&config) >= config.gap_margin);
        assert!(obstacle.gap_top(&config) <= config.screen_height - config.gap_margin);
        assert!((obstacle.x - config.spawn_x()).abs() < f64::EPSILON);
    }
}

#[test]
fn test_obstacles_only_scroll() {
    let mut rng = rng();
    let mut session = started_session(&mut rng);
    spawn_several(&mut session, 1, &mut rng);
    let before: Obstacle = session.obstacles[0].clone();

    handle_event(&mut session, GameEvent::Tick(0.1), &mut rng);
    let after = &session.obstacles[0];
    assert_eq!(after.id, before.id);
    assert!((after.gap_center_y - before.gap_center_y).abs() < f64::EPSILON);
    assert!((before.x - after.x - 20.0).abs() < 1e-9);
}
