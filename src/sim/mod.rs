//! Host simulation: fixed-step clock, spawn timer and contact dispatch.
//!
//! Stands in for the engine the controller used to be glued to. Each step
//! integrates the avatar, sends a `Tick`, fires `Spawn` whenever the spawn
//! timer elapses and sends one `Collision` per begin contact.

use crate::core::constants::{FIXED_STEP_SECS, MAX_FRAME_SECS};
use crate::game::logic::{handle_event, GameEvent, SessionEvent};
use crate::game::types::{GameSession, GameState};
use crate::physics::{collect_bodies, integrate_avatar, ContactDetector};
use rand::Rng;
use std::time::Duration;

pub struct Simulation {
    session: GameSession,
    contacts: ContactDetector,
    /// Unsimulated real time in seconds.
    accumulator: f64,
    steps_since_spawn: u32,
    steps_per_spawn: u32,
    steps_taken: u64,
}

impl Simulation {
    pub fn new(session: GameSession) -> Self {
        let steps_per_spawn =
            ((session.config.spawn_interval_secs / FIXED_STEP_SECS).round() as u32).max(1);
        Self {
            session,
            contacts: ContactDetector::new(),
            accumulator: 0.0,
            steps_since_spawn: 0,
            steps_per_spawn,
            steps_taken: 0,
        }
    }

    pub fn session(&self) -> &GameSession {
        &self.session
    }

    /// Fixed steps simulated while playing.
    pub fn steps_taken(&self) -> u64 {
        self.steps_taken
    }

    /// Simulated seconds since the last spawn (or since play started).
    pub fn spawn_timer_secs(&self) -> f64 {
        self.steps_since_spawn as f64 * FIXED_STEP_SECS
    }

    /// Run as many fixed steps as `elapsed` real time covers. Long frames
    /// are capped so a stall does not fast-forward the game.
    pub fn advance<R: Rng>(&mut self, elapsed: Duration, rng: &mut R) -> Vec<SessionEvent> {
        if self.session.state != GameState::Playing {
            self.accumulator = 0.0;
            return Vec::new();
        }

        self.accumulator += elapsed.as_secs_f64().min(MAX_FRAME_SECS);
        let mut events = Vec::new();
        while self.accumulator >= FIXED_STEP_SECS {
            self.accumulator -= FIXED_STEP_SECS;
            events.extend(self.step(rng));
            if self.session.state != GameState::Playing {
                self.accumulator = 0.0;
                break;
            }
        }
        events
    }

    /// One fixed step. Does nothing unless playing.
    pub fn step<R: Rng>(&mut self, rng: &mut R) -> Vec<SessionEvent> {
        let mut events = Vec::new();
        if self.session.state != GameState::Playing {
            return events;
        }
        self.steps_taken += 1;

        integrate_avatar(&mut self.session, FIXED_STEP_SECS);
        events.extend(self.dispatch(GameEvent::Tick(FIXED_STEP_SECS), rng));

        self.steps_since_spawn += 1;
        if self.steps_since_spawn >= self.steps_per_spawn {
            self.steps_since_spawn = 0;
            events.extend(self.dispatch(GameEvent::Spawn, rng));
        }

        let bodies = collect_bodies(&self.session);
        for (a, b) in self.contacts.detect(&bodies) {
            events.extend(self.dispatch(GameEvent::Collision(a, b), rng));
        }

        events
    }

    /// Deliver a tap.
    pub fn tap<R: Rng>(&mut self, rng: &mut R) -> Vec<SessionEvent> {
        self.dispatch(GameEvent::Input, rng)
    }

    fn dispatch<R: Rng>(&mut self, event: GameEvent, rng: &mut R) -> Vec<SessionEvent> {
        let events = handle_event(&mut self.session, event, rng);
        for event in &events {
            match event {
                SessionEvent::Reset => {
                    self.contacts.clear();
                    self.steps_since_spawn = 0;
                    self.accumulator = 0.0;
                }
                SessionEvent::GameOver { score } => {
                    log::info!("game over with score {}", score);
                }
                SessionEvent::Spawned { id, gap_center_y } => {
                    log::debug!("spawned obstacle {} with gap at {:.1}", id, gap_center_y);
                }
                _ => {}
            }
        }
        events
    }
}
