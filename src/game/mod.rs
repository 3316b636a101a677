//! The game loop controller and the session state it owns.
//!
//! A bird flaps through scrolling pipe pairs, scoring a point for every gap
//! it passes. Touching a pipe, the ground or the ceiling ends the run and the
//! next tap resets the board.

pub mod logic;
pub mod types;

pub use logic::*;
pub use types::*;
