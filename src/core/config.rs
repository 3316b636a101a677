//! Game tuning configuration.
//!
//! Every field has a default, so a config file only needs to list the values
//! it changes. The file is plain JSON:
//!
//! ```json
//! { "gap_height": 120.0, "scroll_speed": 160.0, "seed": 7 }
//! ```

use super::constants::*;
use super::error::{GameError, GameResult};
use serde::{Deserialize, Serialize};
use std::fs;
use std::io;
use std::path::Path;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct GameConfig {
    pub screen_width: f64,
    pub screen_height: f64,
    /// Seconds between obstacle spawns.
    pub spawn_interval_secs: f64,
    /// Obstacle scroll speed in units per second.
    pub scroll_speed: f64,
    /// Downward acceleration applied to the avatar (units/s²).
    pub gravity: f64,
    /// Upward velocity set by a tap (units/s).
    pub flap_velocity: f64,
    pub avatar_radius: f64,
    pub gap_height: f64,
    /// Clearance kept between a gap and the ground or ceiling.
    pub gap_margin: f64,
    pub pipe_width: f64,
    pub pipe_height: f64,
    pub backdrop_tile_width: f64,
    /// Seconds for the backdrop to scroll one tile width.
    pub backdrop_cycle_secs: f64,
    /// Fixed RNG seed. `None` seeds from entropy.
    pub seed: Option<u64>,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            screen_width: SCREEN_WIDTH,
            screen_height: SCREEN_HEIGHT,
            spawn_interval_secs: SPAWN_INTERVAL_SECS,
            scroll_speed: SCROLL_SPEED,
            gravity: GRAVITY,
            flap_velocity: FLAP_VELOCITY,
            avatar_radius: AVATAR_RADIUS,
            gap_height: GAP_HEIGHT,
            gap_margin: GAP_MARGIN,
            pipe_width: PIPE_WIDTH,
            pipe_height: PIPE_HEIGHT,
            backdrop_tile_width: BACKDROP_TILE_WIDTH,
            backdrop_cycle_secs: BACKDROP_CYCLE_SECS,
            seed: None,
        }
    }
}

impl GameConfig {
    /// Load and validate a config file.
    pub fn load(path: &Path) -> GameResult<Self> {
        let json = fs::read_to_string(path)?;
        let config: Self =
            serde_json::from_str(&json).map_err(|source| GameError::ConfigParse {
                path: path.to_path_buf(),
                source,
            })?;
        config.validate()?;
        Ok(config)
    }

    /// Like [`GameConfig::load`], but a missing file yields the defaults.
    pub fn load_or_default(path: &Path) -> GameResult<Self> {
        match Self::load(path) {
            Err(GameError::Io(e)) if e.kind() == io::ErrorKind::NotFound => {
                log::info!("no config at {}, using defaults", path.display());
                Ok(Self::default())
            }
            other => other,
        }
    }

    pub fn validate(&self) -> GameResult<()> {
        let positive = [
            ("screen_width", self.screen_width),
            ("screen_height", self.screen_height),
            ("spawn_interval_secs", self.spawn_interval_secs),
            ("scroll_speed", self.scroll_speed),
            ("gravity", self.gravity),
            ("flap_velocity", self.flap_velocity),
            ("avatar_radius", self.avatar_radius),
            ("gap_height", self.gap_height),
            ("pipe_width", self.pipe_width),
            ("pipe_height", self.pipe_height),
            ("backdrop_tile_width", self.backdrop_tile_width),
            ("backdrop_cycle_secs", self.backdrop_cycle_secs),
        ];
        for (name, value) in positive {
            if !(value.is_finite() && value > 0.0) {
                return Err(GameError::InvalidConfig(format!(
                    "{} must be a positive number, got {}",
                    name, value
                )));
            }
        }
        if !(self.gap_margin.is_finite() && self.gap_margin >= 0.0) {
            return Err(GameError::InvalidConfig(format!(
                "gap_margin must not be negative, got {}",
                self.gap_margin
            )));
        }
        if self.gap_height + 2.0 * self.gap_margin > self.screen_height {
            return Err(GameError::InvalidConfig(format!(
                "gap_height {} plus margins does not fit in screen_height {}",
                self.gap_height, self.screen_height
            )));
        }
        if self.avatar_radius * 2.0 >= self.gap_height {
            return Err(GameError::InvalidConfig(format!(
                "avatar (radius {}) cannot fit through a gap of {}",
                self.avatar_radius, self.gap_height
            )));
        }
        Ok(())
    }

    /// Horizontal position of the avatar and of the screen centre.
    pub fn mid_x(&self) -> f64 {
        self.screen_width / 2.0
    }

    pub fn mid_y(&self) -> f64 {
        self.screen_height / 2.0
    }

    /// Obstacles enter one screen width to the right of centre.
    pub fn spawn_x(&self) -> f64 {
        self.mid_x() + self.screen_width
    }

    /// Inclusive range the gap centre is clamped into, so the whole gap
    /// stays at least `gap_margin` away from the ground and ceiling.
    pub fn gap_center_bounds(&self) -> (f64, f64) {
        let half_gap = self.gap_height / 2.0;
        let lo = half_gap + self.gap_margin;
        let hi = self.screen_height - half_gap - self.gap_margin;
        (lo, hi.max(lo))
    }

    pub fn backdrop_speed(&self) -> f64 {
        self.backdrop_tile_width / self.backdrop_cycle_secs
    }
}
