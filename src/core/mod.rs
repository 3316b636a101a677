//! Configuration, constants, logging and start-up errors.

pub mod config;
pub mod constants;
pub mod error;
pub mod logging;
pub mod paths;

pub use config::GameConfig;
pub use constants::*;
pub use error::{GameError, GameResult};
