//! Skyflap - a terminal Flappy Bird.
//!
//! This module exposes the game logic for testing and for the binary. The
//! terminal front end lives in the binary.

pub mod build_info;
pub mod core;
pub mod game;
pub mod physics;
pub mod sim;
pub mod sprites;

pub use crate::core::config::GameConfig;
pub use crate::core::error::{GameError, GameResult};
pub use crate::game::logic::{handle_event, GameEvent, SessionEvent};
pub use crate::game::types::{BodyKind, GameSession, GameState};
pub use crate::sim::Simulation;
