//! Game loop controller: state transitions, obstacle spawning and scoring.
//!
//! Everything the host used to deliver through callbacks (frame ticks, the
//! spawn timer, contact notifications, taps) arrives here as a [`GameEvent`].
//! The controller mutates the [`GameSession`] it is handed and reports what
//! happened as a list of [`SessionEvent`]s, so the presentation layer never
//! has to diff state.

use super::types::{Avatar, Backdrop, BodyKind, GameSession, GameState, Obstacle};
use crate::core::config::GameConfig;
use crate::core::constants::{AVATAR_FRAME_SECS, GAME_OVER_TEXT};
use rand::Rng;

/// Input to the controller.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum GameEvent {
    /// Frame tick carrying elapsed seconds.
    Tick(f64),
    /// Spawn timer fired.
    Spawn,
    /// Two bodies began touching.
    Collision(BodyKind, BodyKind),
    /// The player tapped.
    Input,
}

/// Something the controller did in response to a [`GameEvent`].
#[derive(Debug, Clone, PartialEq)]
pub enum SessionEvent {
    /// First tap after a reset; simulation unpaused.
    Started,
    Flapped,
    Spawned { id: u64, gap_center_y: f64 },
    Despawned { id: u64 },
    Scored { score: u32 },
    GameOver { score: u32 },
    Reset,
}

/// Single entry point for every event.
pub fn handle_event<R: Rng>(
    session: &mut GameSession,
    event: GameEvent,
    rng: &mut R,
) -> Vec<SessionEvent> {
    let mut events = Vec::new();
    match event {
        GameEvent::Tick(dt) => on_tick(session, dt, &mut events),
        GameEvent::Spawn => spawn_obstacle(session, rng, &mut events),
        GameEvent::Collision(a, b) => on_collision(session, a, b, &mut events),
        GameEvent::Input => on_input_down(session, &mut events),
    }
    events
}

/// Scroll obstacles and backdrop, animate the avatar, drop obstacles that
/// left the screen. Motion only happens while playing.
fn on_tick(session: &mut GameSession, dt: f64, events: &mut Vec<SessionEvent>) {
    if !session.is_running() || dt <= 0.0 {
        return;
    }

    let config = &session.config;
    let distance = config.scroll_speed * dt;
    for obstacle in &mut session.obstacles {
        obstacle.x -= distance;
    }

    session
        .backdrop
        .scroll(config.backdrop_speed() * dt, config.backdrop_tile_width);
    session.avatar.advance_frame(dt, AVATAR_FRAME_SECS);

    session.obstacles.retain(|obstacle| {
        if obstacle.is_past_left_edge(config) {
            events.push(SessionEvent::Despawned { id: obstacle.id });
            false
        } else {
            true
        }
    });
}

/// Place a new obstacle at a random, clamped height off the right edge.
fn spawn_obstacle<R: Rng>(session: &mut GameSession, rng: &mut R, events: &mut Vec<SessionEvent>) {
    if !session.is_running() {
        return;
    }

    let r = random_offset_draw(&session.config, rng);
    let gap_center_y = gap_center_y(&session.config, r);
    let id = session.next_obstacle_id;
    session.next_obstacle_id += 1;

    session.obstacles.push(Obstacle {
        id,
        x: session.config.spawn_x(),
        gap_center_y,
    });
    events.push(SessionEvent::Spawned { id, gap_center_y });
}

/// Draw `r` uniformly from `[0, screen_height / 2)`.
pub fn random_offset_draw<R: Rng>(config: &GameConfig, rng: &mut R) -> f64 {
    rng.gen_range(0.0..config.screen_height / 2.0)
}

/// Convert a raw draw into the gap centre height.
///
/// The draw becomes an offset centred on zero (`r - H/4`), is applied to the
/// screen midline and the result is clamped to
/// [`GameConfig::gap_center_bounds`]. A draw of `H/4` centres the gap on the
/// midline; draws outside `[0, H/2)` saturate at the bounds.
pub fn gap_center_y(config: &GameConfig, r: f64) -> f64 {
    let offset = r - config.screen_height / 4.0;
    let (lo, hi) = config.gap_center_bounds();
    (config.mid_y() + offset).clamp(lo, hi)
}

fn on_collision(
    session: &mut GameSession,
    a: BodyKind,
    b: BodyKind,
    events: &mut Vec<SessionEvent>,
) {
    if a.is_score_gap() || b.is_score_gap() {
        if session.is_running() {
            session.score += 1;
            session.score_label = session.score.to_string();
            events.push(SessionEvent::Scored {
                score: session.score,
            });
        }
        return;
    }

    // Physics reports the same crash several times while the avatar bounces.
    if session.state == GameState::GameOver {
        return;
    }

    session.state = GameState::GameOver;
    session.avatar.velocity = 0.0;
    session.game_over_label = Some(GAME_OVER_TEXT.to_string());
    log::debug!("crash between {:?} and {:?}", a, b);
    events.push(SessionEvent::GameOver {
        score: session.score,
    });
}

fn on_input_down(session: &mut GameSession, events: &mut Vec<SessionEvent>) {
    match session.state {
        GameState::Ready | GameState::Playing => {
            if session.state == GameState::Ready {
                session.state = GameState::Playing;
                events.push(SessionEvent::Started);
            }
            // Cancel the fall before the impulse.
            session.avatar.velocity = 0.0;
            session.avatar.velocity += session.config.flap_velocity;
            events.push(SessionEvent::Flapped);
        }
        GameState::GameOver => {
            reset(session);
            events.push(SessionEvent::Reset);
        }
    }
}

/// Return the session to the paused start layout.
pub fn reset(session: &mut GameSession) {
    session.state = GameState::Ready;
    session.score = 0;
    session.score_label = "0".to_string();
    session.game_over_label = None;
    session.avatar = Avatar::at_start(&session.config);
    session.obstacles.clear();
    session.backdrop = Backdrop::new();
}
