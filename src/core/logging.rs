//! File logging.
//!
//! The terminal belongs to the game, so log output goes to a file instead of
//! stderr. `RUST_LOG` controls the filter; without it only warnings and
//! errors are written.

use super::error::{GameError, GameResult};
use std::fs::OpenOptions;
use std::io;
use std::path::Path;

pub fn init(path: &Path) -> GameResult<()> {
    let file = OpenOptions::new().create(true).append(true).open(path)?;
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn"))
        .target(env_logger::Target::Pipe(Box::new(file)))
        .try_init()
        .map_err(|e| GameError::Io(io::Error::new(io::ErrorKind::Other, e)))
}
